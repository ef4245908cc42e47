use crate::error::EncodingError;

/// The immutable byte sequence a digest is computed over.
///
/// Text is always taken as UTF-8. Rust strings are UTF-8 by construction, so
/// the only fallible source is UTF-16, where a lone surrogate has no UTF-8
/// form.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Message {
    bytes: Box<[u8]>,
}

impl Message {
    /// Wraps raw bytes without any transformation.
    pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            bytes: bytes.into().into_boxed_slice(),
        }
    }

    /// UTF-8 bytes of `text`.
    pub fn from_text(text: &str) -> Self {
        Self::from_bytes(text.as_bytes())
    }

    /// Decodes UTF-16 code units and stores their UTF-8 encoding.
    ///
    /// Fails on the first unpaired surrogate, reporting its code unit index.
    pub fn from_utf16(units: &[u16]) -> Result<Self, EncodingError> {
        let mut text = String::with_capacity(units.len());
        let mut index = 0usize;
        for decoded in char::decode_utf16(units.iter().copied()) {
            match decoded {
                Ok(ch) => {
                    text.push(ch);
                    index += ch.len_utf16();
                }
                Err(err) => {
                    let err = EncodingError::new(index, err.unpaired_surrogate());
                    log::debug!("rejecting UTF-16 input: {err}");
                    return Err(err);
                }
            }
        }
        Ok(Self::from_bytes(text.into_bytes()))
    }

    /// Like [`from_utf16`](Self::from_utf16), replacing unpaired surrogates
    /// with U+FFFD.
    pub fn from_utf16_lossy(units: &[u16]) -> Self {
        Self::from_bytes(String::from_utf16_lossy(units).into_bytes())
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Message length in bits, as recorded in the length field.
    #[inline]
    pub fn bit_len(&self) -> u128 {
        (self.bytes.len() as u128) << 3
    }
}

impl AsRef<[u8]> for Message {
    #[inline]
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

impl From<&str> for Message {
    fn from(text: &str) -> Self {
        Self::from_text(text)
    }
}

impl From<String> for Message {
    fn from(text: String) -> Self {
        Self::from_bytes(text.into_bytes())
    }
}

impl From<&[u8]> for Message {
    fn from(bytes: &[u8]) -> Self {
        Self::from_bytes(bytes)
    }
}

impl From<Vec<u8>> for Message {
    fn from(bytes: Vec<u8>) -> Self {
        Self::from_bytes(bytes)
    }
}
