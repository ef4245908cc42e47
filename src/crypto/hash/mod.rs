pub mod md5;
pub mod padding;
pub mod sha512;

use core::fmt;
use core::str::FromStr;

use crate::digest::{Digest, OutputEncoding};
use crate::error::{EncodingError, ParseAlgorithmError};
use crate::message::Message;
use self::padding::LengthField;

pub use self::md5::Md5Core;
pub use self::sha512::Sha512Core;

/// A Merkle–Damgård block hash: fixed-size blocks, a chained register state
/// and the shared `0x80`/zeros/bit-length padding.
///
/// Implementations supply only their constants, compression function and
/// digest byte order; buffering and padding live in [`Hasher`].
pub trait BlockHash: Copy {
    const NAME: &'static str;
    const BLOCK_LEN: usize;
    const DIGEST_LEN: usize;
    const LENGTH_FIELD: LengthField;

    /// The working registers carried from block to block.
    type State: Copy;
    /// Buffer for one partial block, `[u8; BLOCK_LEN]`.
    type Block: Copy + AsRef<[u8]> + AsMut<[u8]>;
    type Output;

    const INITIAL_STATE: Self::State;
    const ZERO_BLOCK: Self::Block;

    /// Compresses `blocks`, whose length is a multiple of `BLOCK_LEN`, into
    /// `state`.
    fn compress_blocks(state: &mut Self::State, blocks: &[u8]);

    /// Serializes the final registers in the algorithm's byte order.
    fn output(state: &Self::State) -> Self::Output;
}

/// Incremental hasher over any [`BlockHash`].
#[derive(Clone, Copy)]
pub struct Hasher<H: BlockHash> {
    state: H::State,
    buffer: H::Block,
    len: u64,
    offset: usize,
}

pub type Md5 = Hasher<Md5Core>;
pub type Sha512 = Hasher<Sha512Core>;

impl<H: BlockHash> Hasher<H> {
    pub const BLOCK_LEN: usize = H::BLOCK_LEN;
    pub const DIGEST_LEN: usize = H::DIGEST_LEN;

    #[inline(always)]
    pub const fn new() -> Self {
        Self {
            state: H::INITIAL_STATE,
            buffer: H::ZERO_BLOCK,
            len: 0,
            offset: 0,
        }
    }

    #[inline]
    pub fn update(&mut self, data: &[u8]) {
        let mut data = data;
        self.len = self.len.wrapping_add(data.len() as u64);

        if self.offset > 0 {
            let take = (H::BLOCK_LEN - self.offset).min(data.len());
            self.buffer.as_mut()[self.offset..self.offset + take].copy_from_slice(&data[..take]);
            self.offset += take;
            data = &data[take..];

            if self.offset < H::BLOCK_LEN {
                return;
            }
            H::compress_blocks(&mut self.state, self.buffer.as_ref());
            self.offset = 0;
        }

        let full = data.len() - data.len() % H::BLOCK_LEN;
        H::compress_blocks(&mut self.state, &data[..full]);

        let remain = &data[full..];
        self.buffer.as_mut()[..remain.len()].copy_from_slice(remain);
        self.offset = remain.len();
    }

    #[inline]
    pub fn finalize(self) -> H::Output {
        let mut tail = [0u8; padding::MAX_TAIL_LEN];
        let n = padding::padding_tail(self.len, H::BLOCK_LEN, H::LENGTH_FIELD, &mut tail);

        let mut hasher = self;
        hasher.update(&tail[..n]);

        debug_assert_eq!(hasher.offset, 0);

        H::output(&hasher.state)
    }

    #[inline(always)]
    pub fn oneshot<T: AsRef<[u8]>>(data: T) -> H::Output {
        let mut hasher = Self::new();
        hasher.update(data.as_ref());
        hasher.finalize()
    }
}

impl<H: BlockHash> Default for Hasher<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H: BlockHash> fmt::Debug for Hasher<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Hasher")
            .field("algorithm", &H::NAME)
            .field("len", &self.len)
            .finish_non_exhaustive()
    }
}

/// MD5 digest of `input`.
pub fn digest_md5<T: AsRef<[u8]>>(input: T) -> Digest<16> {
    let input = input.as_ref();
    log::trace!("md5 digest over {} bytes", input.len());
    Md5::oneshot(input)
}

/// SHA-512 digest of `input`.
pub fn digest_sha512<T: AsRef<[u8]>>(input: T) -> Digest<64> {
    let input = input.as_ref();
    log::trace!("sha512 digest over {} bytes", input.len());
    Sha512::oneshot(input)
}

/// The digest algorithms this crate computes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Md5,
    Sha512,
}

impl Algorithm {
    pub const ALL: [Algorithm; 2] = [Algorithm::Md5, Algorithm::Sha512];

    /// Canonical lowercase name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Algorithm::Md5 => Md5Core::NAME,
            Algorithm::Sha512 => Sha512Core::NAME,
        }
    }

    /// Digest size in bytes.
    #[must_use]
    pub const fn digest_len(self) -> usize {
        match self {
            Algorithm::Md5 => Md5Core::DIGEST_LEN,
            Algorithm::Sha512 => Sha512Core::DIGEST_LEN,
        }
    }

    /// Block size in bytes.
    #[must_use]
    pub const fn block_len(self) -> usize {
        match self {
            Algorithm::Md5 => Md5Core::BLOCK_LEN,
            Algorithm::Sha512 => Sha512Core::BLOCK_LEN,
        }
    }

    /// Length of the encoded digest text.
    #[must_use]
    pub const fn encoded_len(self, encoding: OutputEncoding) -> usize {
        encoding.encoded_len(self.digest_len())
    }

    /// Raw digest bytes of `input`.
    pub fn digest_bytes<T: AsRef<[u8]>>(self, input: T) -> Vec<u8> {
        match self {
            Algorithm::Md5 => digest_md5(input).as_bytes().to_vec(),
            Algorithm::Sha512 => digest_sha512(input).as_bytes().to_vec(),
        }
    }

    /// Digest of `input` rendered in `encoding`.
    pub fn digest<T: AsRef<[u8]>>(self, input: T, encoding: OutputEncoding) -> String {
        match self {
            Algorithm::Md5 => digest_md5(input).encode(encoding),
            Algorithm::Sha512 => digest_sha512(input).encode(encoding),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = ParseAlgorithmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "md5" => Ok(Algorithm::Md5),
            "sha512" | "sha-512" => Ok(Algorithm::Sha512),
            _ => Err(ParseAlgorithmError::new(s)),
        }
    }
}

/// Digest of the UTF-8 encoding of `text`.
pub fn hash_text(algorithm: Algorithm, text: &str, encoding: OutputEncoding) -> String {
    algorithm.digest(Message::from_text(text), encoding)
}

/// Digest of UTF-16 text, failing if it contains an unpaired surrogate.
pub fn hash_utf16(
    algorithm: Algorithm,
    units: &[u16],
    encoding: OutputEncoding,
) -> Result<String, EncodingError> {
    let message = Message::from_utf16(units)?;
    Ok(algorithm.digest(message, encoding))
}

/// Digest of `text` with the algorithm and encoding given by name, as they
/// arrive from a settings file or form field.
pub fn hash_named(algorithm: &str, encoding: &str, text: &str) -> crate::Result<String> {
    let algorithm: Algorithm = algorithm.parse()?;
    let encoding: OutputEncoding = encoding.parse()?;
    Ok(hash_text(algorithm, text, encoding))
}
