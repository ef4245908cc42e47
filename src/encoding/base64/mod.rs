mod soft;

use crate::error::BufferTooSmall;

static LUT_DATA: [u8; 64] = *b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

/// Length of the padded encoding of `len` input bytes.
#[inline]
pub const fn encoded_len(len: usize) -> usize {
    (len + 2) / 3 * 4
}

/// Encode input bytes into base64 and write to output slice.
/// Returns the number of bytes written, or an error if the output slice is
/// too small. Nothing past the returned length is touched.
pub fn encode_slice(input: &[u8], output: &mut [u8]) -> Result<usize, BufferTooSmall> {
    soft::encode(input, output)
}

pub fn encode(input: &[u8]) -> String {
    let mut output = vec![0u8; encoded_len(input.len())];
    let written = soft::encode(input, &mut output).unwrap_or(0);
    debug_assert_eq!(written, output.len());
    // the alphabet and '=' are ASCII
    output.into_iter().map(char::from).collect()
}
