use thiserror::Error;

/// Text could not be turned into a well-formed byte sequence.
///
/// Raised when UTF-16 input carries a lone high or low surrogate. Callers
/// that prefer to substitute U+FFFD can use
/// [`Message::from_utf16_lossy`](crate::Message::from_utf16_lossy) instead.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Error)]
#[error("unpaired UTF-16 surrogate {unit:#06x} at code unit {index}")]
pub struct EncodingError {
    index: usize,
    unit: u16,
}

impl EncodingError {
    pub(crate) const fn new(index: usize, unit: u16) -> Self {
        Self { index, unit }
    }

    /// Position of the offending code unit in the input.
    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// The unpaired surrogate itself.
    #[must_use]
    pub const fn unit(&self) -> u16 {
        self.unit
    }
}

/// Error returned when parsing an [`Algorithm`](crate::Algorithm) name fails.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
#[error("unknown digest algorithm: \"{name}\"")]
pub struct ParseAlgorithmError {
    name: String,
}

impl ParseAlgorithmError {
    pub(crate) fn new(name: &str) -> Self {
        Self {
            name: name.to_owned(),
        }
    }

    /// Returns the name that failed to parse.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Error returned when parsing an [`OutputEncoding`](crate::OutputEncoding)
/// name fails.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
#[error("unknown output encoding: \"{name}\"")]
pub struct ParseOutputEncodingError {
    name: String,
}

impl ParseOutputEncodingError {
    pub(crate) fn new(name: &str) -> Self {
        Self {
            name: name.to_owned(),
        }
    }

    /// Returns the name that failed to parse.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// The output slice handed to an encoder cannot hold the encoded text.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Error)]
#[error("output buffer holds {available} bytes, {required} required")]
pub struct BufferTooSmall {
    /// Bytes the encoder needs to write.
    pub required: usize,
    /// Bytes the caller provided.
    pub available: usize,
}

/// Any error produced by this crate.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum Error {
    #[error(transparent)]
    Encoding(#[from] EncodingError),
    #[error(transparent)]
    Algorithm(#[from] ParseAlgorithmError),
    #[error(transparent)]
    OutputEncoding(#[from] ParseOutputEncodingError),
    #[error(transparent)]
    BufferTooSmall(#[from] BufferTooSmall),
}

pub type Result<T> = core::result::Result<T, Error>;
