use crate::totp::error::{Error, Result};
use ::hmac::{Hmac, Mac};
use sha1::Sha1;

/// Size of an HMAC-SHA1 digest in bytes.
pub const DIGEST_LEN: usize = 20;

/// Keyed HMAC-SHA1 capability consumed by [`crate::totp::Totp`].
///
/// Implementations must follow RFC 2104 with SHA-1 and return the full
/// 20-byte digest.
pub trait HmacProvider {
    /// Compute `HMAC-SHA1(key, message)`.
    ///
    /// # Errors
    /// Returns an error if the underlying primitive cannot produce a digest.
    fn hmac_sha1(&self, key: &[u8], message: &[u8]) -> Result<Vec<u8>>;
}

impl<T: HmacProvider + ?Sized> HmacProvider for &T {
    fn hmac_sha1(&self, key: &[u8], message: &[u8]) -> Result<Vec<u8>> {
        (**self).hmac_sha1(key, message)
    }
}

/// RustCrypto backed provider.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sha1Hmac;

impl HmacProvider for Sha1Hmac {
    fn hmac_sha1(&self, key: &[u8], message: &[u8]) -> Result<Vec<u8>> {
        let mut mac =
            Hmac::<Sha1>::new_from_slice(key).map_err(|e| Error::Hmac(e.to_string()))?;
        mac.update(message);
        Ok(mac.finalize().into_bytes().to_vec())
    }
}
