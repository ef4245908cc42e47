//! MD5 (RFC 1321) and SHA-512 (FIPS 180-4) message digests, computed
//! in-crate with native wrapping arithmetic and rendered as lowercase hex or
//! padded base64.
//!
//! ```
//! use hashgen::{digest_md5, digest_sha512, Algorithm, OutputEncoding};
//!
//! assert_eq!(digest_md5("abc").to_hex(), "900150983cd24fb0d6963f7d28e17f72");
//! assert_eq!(digest_sha512(b"").as_bytes().len(), 64);
//! assert_eq!(
//!     Algorithm::Md5.digest("", OutputEncoding::Base64),
//!     "1B2M2Y8AsgTpgAmY7PhCfg==",
//! );
//! ```

/// Runs `$e` once for each `$i` in `$start..$start + $n`. The bounds are
/// constants at every call site, so the optimizer unrolls it.
macro_rules! const_loop {
    ($i:ident, $start:expr, $n:expr, $e:expr) => {{
        let mut $i: usize = $start;
        while $i < $start + $n {
            $e;
            $i += 1;
        }
    }};
}
pub(crate) use const_loop;

pub mod crypto;
pub mod digest;
pub mod encoding;
pub mod error;
pub mod message;
pub(crate) mod utils;

pub use crypto::hash::{
    digest_md5, digest_sha512, hash_named, hash_text, hash_utf16, Algorithm, BlockHash, Hasher,
    Md5, Sha512,
};
pub use digest::{Digest, OutputEncoding};
pub use error::{
    BufferTooSmall, EncodingError, Error, ParseAlgorithmError, ParseOutputEncodingError, Result,
};
pub use message::Message;
