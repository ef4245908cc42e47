use super::{INITIAL_STATE, K64, SHIFTS, WORD_INDEX};
use crate::crypto::hash::padding::LengthField;
use crate::crypto::hash::BlockHash;
use crate::digest::Digest;
use crate::utils::merge_bits;

/// MD5 compression function and constants for [`Hasher`](crate::Hasher).
#[derive(Clone, Copy, Debug)]
pub enum Md5Core {}

impl BlockHash for Md5Core {
    const NAME: &'static str = "md5";
    const BLOCK_LEN: usize = 64;
    const DIGEST_LEN: usize = 16;
    const LENGTH_FIELD: LengthField = LengthField::MD5;

    type State = [u32; 4];
    type Block = [u8; 64];
    type Output = Digest<16>;

    const INITIAL_STATE: Self::State = INITIAL_STATE;
    const ZERO_BLOCK: Self::Block = [0; 64];

    #[inline]
    fn compress_blocks(state: &mut Self::State, blocks: &[u8]) {
        debug_assert_eq!(blocks.len() % Self::BLOCK_LEN, 0);
        let mut i = 0usize;
        while i + Self::BLOCK_LEN <= blocks.len() {
            // SAFETY: the loop condition keeps the block in bounds
            compress(state, unsafe { crate::utils::slice_to_array_at(blocks, i) });
            i += Self::BLOCK_LEN;
        }
    }

    #[inline]
    fn output(state: &Self::State) -> Self::Output {
        let mut output = [0u8; 16];
        output[0..4].copy_from_slice(&state[0].to_le_bytes());
        output[4..8].copy_from_slice(&state[1].to_le_bytes());
        output[8..12].copy_from_slice(&state[2].to_le_bytes());
        output[12..16].copy_from_slice(&state[3].to_le_bytes());
        Digest::from_bytes(output)
    }
}

/// The four auxiliary functions of RFC 1321 section 3.4, selected by the
/// 16-round group.
#[inline(always)]
fn mix(round: usize, b: u32, c: u32, d: u32) -> u32 {
    match round / 16 {
        // F: b ? c : d
        0 => merge_bits(d, c, b),
        // G: d ? b : c
        1 => merge_bits(c, b, d),
        // H
        2 => b ^ c ^ d,
        // I
        _ => c ^ (b | !d),
    }
}

/// Runs the 64 rounds over one block and feeds the result forward into
/// `state`.
#[inline(always)]
pub(crate) fn compress(state: &mut [u32; 4], block: &[u8; 64]) {
    let mut w = [0u32; 16];
    crate::const_loop!(i, 0, 16, {
        w[i] = u32::from_le_bytes([
            block[i * 4],
            block[i * 4 + 1],
            block[i * 4 + 2],
            block[i * 4 + 3],
        ]);
    });

    let [mut a, mut b, mut c, mut d] = *state;

    crate::const_loop!(i, 0, 64, {
        let t = a
            .wrapping_add(mix(i, b, c, d))
            .wrapping_add(w[WORD_INDEX[i]])
            .wrapping_add(K64[i])
            .rotate_left(SHIFTS[i])
            .wrapping_add(b);
        a = d;
        d = c;
        c = b;
        b = t;
    });

    state[0] = state[0].wrapping_add(a);
    state[1] = state[1].wrapping_add(b);
    state[2] = state[2].wrapping_add(c);
    state[3] = state[3].wrapping_add(d);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::hash::padding::pad;

    type Md5 = crate::Hasher<Md5Core>;

    #[test]
    fn test_md5() {
        assert_eq!(
            Md5::oneshot(b"").into_bytes(),
            [
                0xd4, 0x1d, 0x8c, 0xd9, 0x8f, 0x00, 0xb2, 0x04,
                0xe9, 0x80, 0x09, 0x98, 0xec, 0xf8, 0x42, 0x7e
            ],
        );
        assert_eq!(
            Md5::oneshot(b"hello world").into_bytes(),
            [
                0x5e, 0xb6, 0x3b, 0xbb, 0xe0, 0x1e, 0xee, 0xd0,
                0x93, 0xcb, 0x22, 0xbb, 0x8f, 0x5a, 0xcd, 0xc3,
            ],
        );
        assert_eq!(
            Md5::oneshot(b"1234567890123456789012345678901234567890").into_bytes(),
            [
                0xf5, 0xbf, 0x3e, 0x98, 0x44, 0x32, 0xae, 0x6f,
                0x9f, 0x98, 0x84, 0x09, 0x51, 0xe5, 0xce, 0xf3,
            ],
        );
        let random_data = (0..1000).map(|_| rand::random::<u8>()).collect::<Vec<u8>>();
        for _ in 0..100 {
            let length = (rand::random::<u32>() % 1000) as usize;
            let data = &random_data[..length];
            assert_eq!(
                Md5::oneshot(data).into_bytes(),
                ::md5::compute(data).0,
                "Failed for data length: {}",
                length
            );
        }
    }

    #[test]
    fn test_md5_block_boundaries() {
        for length in [55, 56, 57, 63, 64, 65, 119, 120, 127, 128] {
            let data = vec![b'a'; length];
            assert_eq!(
                Md5::oneshot(&data).into_bytes(),
                ::md5::compute(&data).0,
                "Failed for data length: {}",
                length
            );
        }
    }

    #[test]
    fn test_compress_chains_state() {
        // Driving the compression function by hand over the padded message
        // must agree with the hasher.
        let message = vec![0x5a; 200];
        let padded = pad(&message, 64, LengthField::MD5);
        assert_eq!(padded.len(), 256);

        let mut state = INITIAL_STATE;
        for block in padded.chunks_exact(64) {
            let block: [u8; 64] = block.try_into().unwrap();
            compress(&mut state, &block);
        }
        assert_eq!(Md5Core::output(&state), Md5::oneshot(&message));
    }

    #[test]
    fn test_mix_functions() {
        let (b, c, d) = (0xf0f0_f0f0, 0xcccc_cccc, 0xaaaa_aaaa);
        assert_eq!(mix(0, b, c, d), (b & c) | (!b & d));
        assert_eq!(mix(16, b, c, d), (b & d) | (c & !d));
        assert_eq!(mix(32, b, c, d), b ^ c ^ d);
        assert_eq!(mix(48, b, c, d), c ^ (b | !d));
    }
}
