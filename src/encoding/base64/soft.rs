use super::{encoded_len, LUT_DATA};
use crate::error::BufferTooSmall;

#[inline(always)]
pub(crate) fn encode_block(input: &[u8; 3], output: &mut [u8]) {
    let b0 = input[0];
    let b1 = input[1];
    let b2 = input[2];

    let i0 = (b0 >> 2) & 0x3F;
    let i1 = ((b0 << 4) | (b1 >> 4)) & 0x3F;
    let i2 = ((b1 << 2) | (b2 >> 6)) & 0x3F;
    let i3 = b2 & 0x3F;

    output[0] = LUT_DATA[i0 as usize];
    output[1] = LUT_DATA[i1 as usize];
    output[2] = LUT_DATA[i2 as usize];
    output[3] = LUT_DATA[i3 as usize];
}

pub fn encode(input: &[u8], output: &mut [u8]) -> Result<usize, BufferTooSmall> {
    let required = encoded_len(input.len());
    if output.len() < required {
        return Err(BufferTooSmall {
            required,
            available: output.len(),
        });
    }

    let mut in_blocks = input.chunks_exact(3);
    let mut out_blocks = output.chunks_exact_mut(4);
    for (in_block, out_block) in (&mut in_blocks).zip(&mut out_blocks) {
        encode_block(&[in_block[0], in_block[1], in_block[2]], out_block);
    }

    let remaining_input = in_blocks.remainder();
    if !remaining_input.is_empty() {
        let mut in_block = [0u8; 3];
        in_block[..remaining_input.len()].copy_from_slice(remaining_input);

        let at = required - 4;
        let out_block = &mut output[at..required];
        encode_block(&in_block, out_block);
        out_block[remaining_input.len() + 1..].fill(b'=');
    }

    Ok(required)
}

#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn test_encode() {
        const TIMES: usize = 1000;
        for _ in 0..TIMES {
            let input_len = (rand::random::<u32>() % 1024) as usize;
            let mut input = vec![0u8; input_len];
            for byte in input.iter_mut() {
                *byte = rand::random::<u8>();
            }
            let mut output0 = vec![0u8; ((input_len + 2) / 3) * 4];
            let mut output1 = vec![0u8; ((input_len + 2) / 3) * 4];

            data_encoding::BASE64.encode_mut(&input, &mut output0);
            let expected_len = output0.len();

            let encoded_len = encode(&input, &mut output1).unwrap();
            assert_eq!(expected_len, encoded_len);
            assert_eq!(&output0[0..encoded_len], &output1[0..encoded_len]);
        }
    }

    #[test]
    fn test_encode_into_larger_buffer() {
        let mut output = [b'#'; 10];
        assert_eq!(encode(b"ab", &mut output), Ok(4));
        assert_eq!(&output, b"YWI=######");
    }
}
