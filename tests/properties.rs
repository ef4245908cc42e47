//! Property tests over arbitrary messages.

use std::collections::HashSet;

use hashgen::{digest_md5, digest_sha512, Algorithm, Md5, OutputEncoding, Sha512};
use proptest::prelude::*;

fn message() -> impl Strategy<Value = Vec<u8>> {
    proptest::collection::vec(any::<u8>(), 0..600)
}

proptest! {
    #[test]
    fn digests_are_deterministic(data in message()) {
        prop_assert_eq!(digest_md5(&data), digest_md5(&data));
        prop_assert_eq!(digest_sha512(&data), digest_sha512(&data));
    }

    #[test]
    fn output_length_is_fixed(data in message()) {
        prop_assert_eq!(digest_md5(&data).as_bytes().len(), 16);
        prop_assert_eq!(digest_sha512(&data).as_bytes().len(), 64);
        prop_assert_eq!(digest_md5(&data).to_hex().len(), 32);
        prop_assert_eq!(digest_sha512(&data).to_hex().len(), 128);
        prop_assert_eq!(digest_md5(&data).to_base64().len(), 24);
        prop_assert_eq!(digest_sha512(&data).to_base64().len(), 88);
    }

    #[test]
    fn matches_reference_implementations(data in message()) {
        prop_assert_eq!(digest_md5(&data).into_bytes(), md5::compute(&data).0);
        let expected = ring::digest::digest(&ring::digest::SHA512, &data);
        let actual = digest_sha512(&data);
        prop_assert_eq!(actual.as_bytes().as_slice(), expected.as_ref());
    }

    #[test]
    fn chunked_update_matches_oneshot(data in message(), split in 1usize..200) {
        let mut md5 = Md5::new();
        let mut sha512 = Sha512::new();
        for chunk in data.chunks(split) {
            md5.update(chunk);
            sha512.update(chunk);
        }
        prop_assert_eq!(md5.finalize(), Md5::oneshot(&data));
        prop_assert_eq!(sha512.finalize(), Sha512::oneshot(&data));
    }

    #[test]
    fn base64_decodes_to_hex(data in message()) {
        for algorithm in Algorithm::ALL {
            let hex = algorithm.digest(&data, OutputEncoding::Hex);
            let base64 = algorithm.digest(&data, OutputEncoding::Base64);
            let bytes = data_encoding::BASE64.decode(base64.as_bytes()).unwrap();
            prop_assert_eq!(data_encoding::HEXLOWER.encode(&bytes), hex);
        }
    }

    #[test]
    fn single_byte_change_avalanches(mut data in proptest::collection::vec(any::<u8>(), 1..300), at in any::<prop::sample::Index>()) {
        let before_md5 = digest_md5(&data);
        let before_sha512 = digest_sha512(&data);
        let i = at.index(data.len());
        data[i] ^= 0x20;

        let after_md5 = digest_md5(&data);
        let after_sha512 = digest_sha512(&data);
        prop_assert_ne!(before_md5, after_md5);
        prop_assert_ne!(before_sha512, after_sha512);

        // roughly half the bits should flip; a quarter is a loose floor
        let flipped: u32 = before_sha512
            .as_bytes()
            .iter()
            .zip(after_sha512.as_bytes())
            .map(|(a, b)| (a ^ b).count_ones())
            .sum();
        prop_assert!(flipped > 128, "only {} of 512 bits flipped", flipped);
    }
}

#[test]
fn case_change_changes_digest() {
    let lower = digest_md5("hello, world!");
    let upper = digest_md5("Hello, World!");
    assert_ne!(lower, upper);
    assert_ne!(lower.to_hex()[..8], upper.to_hex()[..8]);
}

#[test]
fn bounded_corpus_has_no_collisions() {
    let mut md5 = HashSet::new();
    let mut sha512 = HashSet::new();
    for len in 0..300usize {
        let message: Vec<u8> = (0..len).map(|i| (i * 31 + len) as u8).collect();
        assert!(md5.insert(digest_md5(&message)), "md5 collision at length {}", len);
        assert!(sha512.insert(digest_sha512(&message)), "sha512 collision at length {}", len);
    }
}
