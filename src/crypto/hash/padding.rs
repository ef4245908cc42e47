//! Merkle–Damgård message padding shared by every block hash.
//!
//! A message of `L` bytes is followed by one `0x80` byte, a run of zero bytes
//! and the bit length `8 * L`, so that the total is a whole number of blocks
//! and the length field occupies the tail of the final block.

/// Byte order of the encoded bit length.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ByteOrder {
    Little,
    Big,
}

/// Width and byte order of the trailing bit-length field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LengthField {
    pub width: usize,
    pub order: ByteOrder,
}

impl LengthField {
    /// 64-bit little-endian, RFC 1321 section 3.2.
    pub const MD5: Self = Self {
        width: core::mem::size_of::<u64>(),
        order: ByteOrder::Little,
    };
    /// 128-bit big-endian, FIPS 180-4 section 5.1.2.
    pub const SHA512: Self = Self {
        width: core::mem::size_of::<u128>(),
        order: ByteOrder::Big,
    };

    /// Writes `8 * message_len` into `out`, which must be exactly `width`
    /// bytes. Fields narrower than 128 bits keep the low-order bits, so the
    /// count wraps modulo `2^(8 * width)`.
    pub fn write(self, message_len: u64, out: &mut [u8]) {
        debug_assert_eq!(out.len(), self.width);
        let bits = (message_len as u128) << 3;
        match self.order {
            ByteOrder::Little => out.copy_from_slice(&bits.to_le_bytes()[..self.width]),
            ByteOrder::Big => {
                out.copy_from_slice(&bits.to_be_bytes()[core::mem::size_of::<u128>() - self.width..])
            }
        }
    }
}

/// Largest suffix any supported hash appends: a whole spill block plus the
/// widest length field.
pub const MAX_TAIL_LEN: usize = 128 + core::mem::size_of::<u128>();

/// Number of padding bytes (the `0x80` marker plus the zero run) placed
/// between the message and the length field. Always in `1..=block_len`.
#[inline]
pub const fn padding_len(message_len: u64, block_len: usize, field: LengthField) -> usize {
    let used = (message_len % block_len as u64) as usize + field.width;
    block_len - used % block_len
}

/// Writes the padding and length field for a message of `message_len` bytes
/// into the front of `out`, returning how many bytes were written.
///
/// `out` must hold at least `padding_len + field.width` bytes; a
/// [`MAX_TAIL_LEN`] buffer is always enough.
pub fn padding_tail(message_len: u64, block_len: usize, field: LengthField, out: &mut [u8]) -> usize {
    let plen = padding_len(message_len, block_len, field);
    let total = plen + field.width;

    out[0] = 0x80;
    out[1..plen].fill(0);
    field.write(message_len, &mut out[plen..total]);

    total
}

/// The complete padded block sequence for `message`.
pub fn pad(message: &[u8], block_len: usize, field: LengthField) -> Vec<u8> {
    let mut tail = [0u8; MAX_TAIL_LEN];
    let n = padding_tail(message.len() as u64, block_len, field, &mut tail);

    let mut padded = Vec::with_capacity(message.len() + n);
    padded.extend_from_slice(message);
    padded.extend_from_slice(&tail[..n]);
    debug_assert_eq!(padded.len() % block_len, 0);
    padded
}
