use core::fmt;
use core::str::FromStr;

use crate::encoding::base64;
use crate::error::ParseOutputEncodingError;

/// How a digest is rendered as text.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum OutputEncoding {
    /// Lowercase hexadecimal, two characters per byte.
    #[default]
    Hex,
    /// Standard base64 alphabet with `=` padding.
    Base64,
}

impl OutputEncoding {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            OutputEncoding::Hex => "hex",
            OutputEncoding::Base64 => "base64",
        }
    }

    /// Text length for `len` digest bytes.
    #[must_use]
    pub const fn encoded_len(self, len: usize) -> usize {
        match self {
            OutputEncoding::Hex => len * 2,
            OutputEncoding::Base64 => base64::encoded_len(len),
        }
    }
}

impl fmt::Display for OutputEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for OutputEncoding {
    type Err = ParseOutputEncodingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hex" => Ok(OutputEncoding::Hex),
            "base64" => Ok(OutputEncoding::Base64),
            _ => Err(ParseOutputEncodingError::new(s)),
        }
    }
}

/// A finished `N`-byte digest.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Digest<const N: usize>([u8; N]);

impl<const N: usize> Digest<N> {
    pub const LEN: usize = N;

    #[inline]
    pub const fn from_bytes(bytes: [u8; N]) -> Self {
        Self(bytes)
    }

    #[inline]
    pub const fn as_bytes(&self) -> &[u8; N] {
        &self.0
    }

    #[inline]
    pub const fn into_bytes(self) -> [u8; N] {
        self.0
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    pub fn to_base64(&self) -> String {
        base64::encode(&self.0)
    }

    /// Renders the digest; the bytes themselves are unaffected by the choice.
    pub fn encode(&self, encoding: OutputEncoding) -> String {
        log::trace!("encoding {}-byte digest as {}", N, encoding);
        match encoding {
            OutputEncoding::Hex => self.to_hex(),
            OutputEncoding::Base64 => self.to_base64(),
        }
    }

    /// Compares two digests without an early exit, unless the
    /// `variable_time_eq` feature is enabled.
    pub fn ct_eq(&self, other: &Self) -> bool {
        crate::utils::constant_time_eq(&self.0, &other.0)
    }

    /// Checks the digest against an expected hex string (either case).
    /// Malformed or wrong-length input never matches.
    pub fn verify_hex(&self, expected: &str) -> bool {
        match hex::decode(expected.trim()) {
            Ok(bytes) => crate::utils::constant_time_eq(&self.0, &bytes),
            Err(_) => false,
        }
    }
}

impl<const N: usize> From<[u8; N]> for Digest<N> {
    fn from(bytes: [u8; N]) -> Self {
        Self(bytes)
    }
}

impl<const N: usize> From<Digest<N>> for [u8; N] {
    fn from(digest: Digest<N>) -> Self {
        digest.0
    }
}

impl<const N: usize> AsRef<[u8]> for Digest<N> {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl<const N: usize> fmt::Display for Digest<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl<const N: usize> fmt::LowerHex for Digest<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl<const N: usize> fmt::Debug for Digest<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Digest({self})")
    }
}
