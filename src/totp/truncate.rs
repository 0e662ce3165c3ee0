use crate::totp::{
    error::{Error, Result},
    hmac::DIGEST_LEN,
};

/// `10^digits` for six-digit codes.
pub const MODULUS: u32 = 1_000_000;

/// RFC 4226 §5.3 dynamic truncation, reduced to six digits.
///
/// The offset nibble is read from byte 19, the last byte of a SHA-1 digest.
///
/// # Errors
/// Returns [`Error::ShortDigest`] when fewer than 20 bytes are supplied.
pub fn truncate(digest: &[u8]) -> Result<u32> {
    let Some(last) = digest.get(DIGEST_LEN - 1) else {
        return Err(Error::ShortDigest { len: digest.len() });
    };

    // offset <= 15, so offset + 3 <= 18 is always in bounds
    let offset = usize::from(last & 0x0F);
    let value = (u32::from(digest[offset] & 0x7F) << 24)
        | (u32::from(digest[offset + 1]) << 16)
        | (u32::from(digest[offset + 2]) << 8)
        | u32::from(digest[offset + 3]);

    Ok(value % MODULUS)
}
