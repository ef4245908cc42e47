cfg_if::cfg_if! {
    if #[cfg(feature = "variable_time_eq")] {
        #[inline(always)]
        pub(crate) fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
            a == b
        }
    } else {
        #[inline(always)]
        pub(crate) fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
            if a.len() != b.len() {
                return false;
            }

            let mut x = 0u8;

            for (l, r) in a.iter().zip(b) {
                x |= l ^ r;
            }

            x == 0
        }
    }
}

/// Reinterprets `N` elements of `slice` starting at `index` as an array.
///
/// # Safety
///
/// `index + N` must not exceed `slice.len()`.
#[inline(always)]
pub(crate) const unsafe fn slice_to_array_at<T, const N: usize>(slice: &[T], index: usize) -> &[T; N] {
    &*(slice.as_ptr().add(index) as *const [T; N])
}

/// Bitwise merge of two words: bits of `b` where `mask` is set, bits of `a`
/// elsewhere.
#[inline(always)]
pub(crate) const fn merge_bits(a: u32, b: u32, mask: u32) -> u32 {
    (a & !mask) | (b & mask)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constant_time_eq() {
        assert!(constant_time_eq(b"", b""));
        assert!(constant_time_eq(b"digest", b"digest"));
        assert!(!constant_time_eq(b"digest", b"digesT"));
        assert!(!constant_time_eq(b"digest", b"diges"));
    }

    #[test]
    fn test_merge_bits() {
        assert_eq!(merge_bits(0x0000_0000, 0xffff_ffff, 0x0f0f_0f0f), 0x0f0f_0f0f);
        assert_eq!(merge_bits(0xaaaa_aaaa, 0x5555_5555, 0xffff_0000), 0x5555_aaaa);
    }

    #[test]
    fn test_slice_to_array_at() {
        let data = [0u8, 1, 2, 3, 4, 5, 6, 7];
        let tail: &[u8; 4] = unsafe { slice_to_array_at(&data, 4) };
        assert_eq!(tail, &[4, 5, 6, 7]);
    }
}
