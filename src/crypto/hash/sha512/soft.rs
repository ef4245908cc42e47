use super::{INITIAL_STATE, K};
use crate::crypto::hash::padding::LengthField;
use crate::crypto::hash::BlockHash;
use crate::digest::Digest;

/// SHA-512 compression function and constants for [`Hasher`](crate::Hasher).
#[derive(Clone, Copy, Debug)]
pub enum Sha512Core {}

impl BlockHash for Sha512Core {
    const NAME: &'static str = "sha512";
    const BLOCK_LEN: usize = 128;
    const DIGEST_LEN: usize = 64;
    const LENGTH_FIELD: LengthField = LengthField::SHA512;

    type State = [u64; 8];
    type Block = [u8; 128];
    type Output = Digest<64>;

    const INITIAL_STATE: Self::State = INITIAL_STATE;
    const ZERO_BLOCK: Self::Block = [0; 128];

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
        let mut output = [0u8; 64];
        for (chunk, word) in output.chunks_exact_mut(8).zip(state) {
            chunk.copy_from_slice(&word.to_be_bytes());
        }
        Digest::from_bytes(output)
    }
}

#[inline(always)]
fn small_sigma0(x: u64) -> u64 {
    x.rotate_right(1) ^ x.rotate_right(8) ^ (x >> 7)
}

#[inline(always)]
fn small_sigma1(x: u64) -> u64 {
    x.rotate_right(19) ^ x.rotate_right(61) ^ (x >> 6)
}

#[inline(always)]
fn big_sigma0(x: u64) -> u64 {
    x.rotate_right(28) ^ x.rotate_right(34) ^ x.rotate_right(39)
}

#[inline(always)]
fn big_sigma1(x: u64) -> u64 {
    x.rotate_right(14) ^ x.rotate_right(18) ^ x.rotate_right(41)
}

#[inline(always)]
fn ch(x: u64, y: u64, z: u64) -> u64 {
    (x & y) ^ (!x & z)
}

#[inline(always)]
fn maj(x: u64, y: u64, z: u64) -> u64 {
    (x & y) ^ (x & z) ^ (y & z)
}

/// Expands one block into the 80-word message schedule.
#[inline(always)]
pub(crate) fn schedule(block: &[u8; 128]) -> [u64; 80] {
    let mut w = [0u64; 80];

    crate::const_loop!(i, 0, 16, {
        w[i] = u64::from_be_bytes(unsafe { *crate::utils::slice_to_array_at(block, i * 8) });
    });

    crate::const_loop!(i, 16, 64, {
        w[i] = w[i - 16]
            .wrapping_add(small_sigma0(w[i - 15]))
            .wrapping_add(w[i - 7])
            .wrapping_add(small_sigma1(w[i - 2]));
    });

    w
}

/// Runs the 80 rounds over one block and feeds the result forward into
/// `state`.
#[inline(always)]
pub(crate) fn compress(state: &mut [u64; 8], block: &[u8; 128]) {
    let w = schedule(block);

    let [mut a, mut b, mut c, mut d, mut e, mut f, mut g, mut h] = *state;

    crate::const_loop!(i, 0, 80, {
        let t1 = h
            .wrapping_add(big_sigma1(e))
            .wrapping_add(ch(e, f, g))
            .wrapping_add(K[i])
            .wrapping_add(w[i]);
        let t2 = big_sigma0(a).wrapping_add(maj(a, b, c));

        h = g;
        g = f;
        f = e;
        e = d.wrapping_add(t1);
        d = c;
        c = b;
        b = a;
        a = t1.wrapping_add(t2);
    });

    state[0] = state[0].wrapping_add(a);
    state[1] = state[1].wrapping_add(b);
    state[2] = state[2].wrapping_add(c);
    state[3] = state[3].wrapping_add(d);
    state[4] = state[4].wrapping_add(e);
    state[5] = state[5].wrapping_add(f);
    state[6] = state[6].wrapping_add(g);
    state[7] = state[7].wrapping_add(h);
}

#[cfg(test)]
macro_rules! sha512_test_case {
    ($name:ty) => {
        let mut sha512 = <$name>::new();
        let zero = [0u8; 0];
        sha512.update(&zero);
        let digit = sha512.finalize();
        assert_eq!(
            digit.into_bytes(),
            [
                0xcf, 0x83, 0xe1, 0x35, 0x7e, 0xef, 0xb8, 0xbd,
                0xf1, 0x54, 0x28, 0x50, 0xd6, 0x6d, 0x80, 0x07,
                0xd6, 0x20, 0xe4, 0x05, 0x0b, 0x57, 0x15, 0xdc,
                0x83, 0xf4, 0xa9, 0x21, 0xd3, 0x6c, 0xe9, 0xce,
                0x47, 0xd0, 0xd1, 0x3c, 0x5d, 0x85, 0xf2, 0xb0,
                0xff, 0x83, 0x18, 0xd2, 0x87, 0x7e, 0xec, 0x2f,
                0x63, 0xb9, 0x31, 0xbd, 0x47, 0x41, 0x7a, 0x81,
                0xa5, 0x38, 0x32, 0x7a, 0xf9, 0x27, 0xda, 0x3e,
            ]
        );
        let mut sha512 = <$name>::new();
        sha512.update(b"abc");
        let digit = sha512.finalize();
        assert_eq!(
            digit.into_bytes(),
            [
                0xdd, 0xaf, 0x35, 0xa1, 0x93, 0x61, 0x7a, 0xba,
                0xcc, 0x41, 0x73, 0x49, 0xae, 0x20, 0x41, 0x31,
                0x12, 0xe6, 0xfa, 0x4e, 0x89, 0xa9, 0x7e, 0xa2,
                0x0a, 0x9e, 0xee, 0xe6, 0x4b, 0x55, 0xd3, 0x9a,
                0x21, 0x92, 0x99, 0x2a, 0x27, 0x4f, 0xc1, 0xa8,
                0x36, 0xba, 0x3c, 0x23, 0xa3, 0xfe, 0xeb, 0xbd,
                0x45, 0x4d, 0x44, 0x23, 0x64, 0x3c, 0xe8, 0x0e,
                0x2a, 0x9a, 0xc9, 0x4f, 0xa5, 0x4c, 0xa4, 0x9f,
            ]
        );
        let mut sha512 = <$name>::new();
        sha512.update(b"abcdefghijklmnopqrstuvwxyz");
        let digit = sha512.finalize();
        assert_eq!(
            digit.into_bytes(),
            [
                0x4d, 0xbf, 0xf8, 0x6c, 0xc2, 0xca, 0x1b, 0xae,
                0x1e, 0x16, 0x46, 0x8a, 0x05, 0xcb, 0x98, 0x81,
                0xc9, 0x7f, 0x17, 0x53, 0xbc, 0xe3, 0x61, 0x90,
                0x34, 0x89, 0x8f, 0xaa, 0x1a, 0xab, 0xe4, 0x29,
                0x95, 0x5a, 0x1b, 0xf8, 0xec, 0x48, 0x3d, 0x74,
                0x21, 0xfe, 0x3c, 0x16, 0x46, 0x61, 0x3a, 0x59,
                0xed, 0x54, 0x41, 0xfb, 0x0f, 0x32, 0x13, 0x89,
                0xf7, 0x7f, 0x48, 0xa8, 0x79, 0xc7, 0xb1, 0xf1,
            ]
        );
    };
    () => {
        sha512_test_case!(crate::Hasher<Sha512Core>);
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::hash::padding::pad;

    type Sha512 = crate::Hasher<Sha512Core>;

    fn ring_sha512(data: &[u8]) -> Vec<u8> {
        ring::digest::digest(&ring::digest::SHA512, data).as_ref().to_vec()
    }

    #[test]
    fn test_sha512() {
        sha512_test_case!();
    }

    #[test]
    fn test_sha512_random_against_ring() {
        let random_data = (0..2000).map(|_| rand::random::<u8>()).collect::<Vec<u8>>();
        for _ in 0..100 {
            let length = (rand::random::<u32>() % 2000) as usize;
            let data = &random_data[..length];
            assert_eq!(
                Sha512::oneshot(data).as_bytes().as_slice(),
                ring_sha512(data).as_slice(),
                "Failed for data length: {}",
                length
            );
        }
    }

    #[test]
    fn test_sha512_block_boundaries() {
        for length in [111, 112, 113, 127, 128, 129, 239, 240, 255, 256] {
            let data = vec![b'a'; length];
            assert_eq!(
                Sha512::oneshot(&data).as_bytes().as_slice(),
                ring_sha512(&data).as_slice(),
                "Failed for data length: {}",
                length
            );
        }
    }

    #[test]
    fn test_schedule_keeps_block_words() {
        let mut block = [0u8; 128];
        for (i, byte) in block.iter_mut().enumerate() {
            *byte = i as u8;
        }
        let w = schedule(&block);
        assert_eq!(w[0], 0x0001020304050607);
        assert_eq!(w[15], 0x78797a7b7c7d7e7f);
        assert_eq!(
            w[16],
            w[0].wrapping_add(small_sigma0(w[1]))
                .wrapping_add(w[9])
                .wrapping_add(small_sigma1(w[14]))
        );
    }

    #[test]
    fn test_schedule_wraps() {
        let w = schedule(&[0xff; 128]);
        // every term is near u64::MAX; the sum must wrap rather than overflow
        let x = u64::MAX;
        let expected = x
            .wrapping_add(small_sigma0(x))
            .wrapping_add(x)
            .wrapping_add(small_sigma1(x));
        assert_eq!(w[16], expected);
    }

    #[test]
    fn test_compress_chains_state() {
        let message = vec![0xa5; 300];
        let padded = pad(&message, 128, LengthField::SHA512);
        assert_eq!(padded.len(), 384);

        let mut state = INITIAL_STATE;
        for block in padded.chunks_exact(128) {
            let block: [u8; 128] = block.try_into().unwrap();
            compress(&mut state, &block);
        }
        assert_eq!(Sha512Core::output(&state), Sha512::oneshot(&message));
    }
}
