//! # totpgate
//!
//! Second factor for dashboard access: RFC 6238 time-based one-time
//! passwords built from base32, HMAC-SHA1 and RFC 4226 dynamic truncation.
//!
//! The [`totp`] module is the engine. Dashboards and other callers need two
//! operations from it:
//!
//! - [`totp::generate_code`]: the current six digit code for a secret.
//! - [`totp::verify_code`]: whether a submitted code matches, tolerating
//!   ±2 steps of clock skew.
//!
//! [`totp::Totp`] exposes the same operations with an explicit clock, step
//! duration, window and an injectable [`totp::HmacProvider`].
//!
//! The [`cli`] module backs the `totpgate` binary used by operators to mint
//! secrets, print provisioning URIs and check codes by hand.

pub mod cli;
pub mod totp;
