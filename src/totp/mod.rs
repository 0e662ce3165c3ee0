//! RFC 6238 TOTP engine: HMAC-SHA1, six digits, 30 second steps by default.
//!
//! The pipeline is `secret -> base32 -> key`, `time -> step -> counter`,
//! `HMAC-SHA1(key, counter) -> truncate -> code`. Verification reruns it for
//! the steps around the current one.

pub mod base32;
pub mod counter;
pub mod error;
pub mod generator;
pub mod hmac;
pub mod secret;
pub mod truncate;
pub mod uri;
pub mod verifier;

pub use error::{Error, Result};
pub use generator::{unix_now, Totp, DEFAULT_STEP, DIGITS};
pub use self::hmac::{HmacProvider, Sha1Hmac};
pub use secret::{generate_secret, generate_secret_with_length, SECRET_LENGTH};
pub use uri::{build_uri, ProvisioningUri};
pub use verifier::DEFAULT_WINDOW;

/// Current code for `secret` with the default 30 second step.
///
/// # Errors
/// Returns an error if the secret is not valid base32 or decodes to nothing.
pub fn generate_code(secret: &str) -> Result<String> {
    Totp::default().generate_now(secret)
}

/// Check `token` against `secret` now, tolerating two steps of clock skew.
#[must_use]
pub fn verify_code(token: &str, secret: &str) -> bool {
    Totp::default().verify_now(token, secret, DEFAULT_WINDOW)
}
