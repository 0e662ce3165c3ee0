//! `otpauth://` provisioning URIs, the payload authenticator apps scan from a
//! QR code.

use crate::totp::generator::{DEFAULT_STEP, DIGITS};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use std::fmt;

// RFC 3986 unreserved characters stay literal
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

fn encode(input: &str) -> String {
    utf8_percent_encode(input, COMPONENT).to_string()
}

/// `otpauth://totp/{issuer}:{account}?secret={secret}&issuer={issuer}`
///
/// Issuer and account are percent-encoded; the secret is already URI safe and
/// goes in verbatim.
#[must_use]
pub fn build_uri(secret: &str, account: &str, issuer: &str) -> String {
    ProvisioningUri::new(secret, account, issuer).to_string()
}

/// Builder for URIs that need more than the minimal form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProvisioningUri<'a> {
    secret: &'a str,
    account: &'a str,
    issuer: &'a str,
    period: u64,
    explicit: bool,
}

impl<'a> ProvisioningUri<'a> {
    #[must_use]
    pub const fn new(secret: &'a str, account: &'a str, issuer: &'a str) -> Self {
        Self {
            secret,
            account,
            issuer,
            period: DEFAULT_STEP,
            explicit: false,
        }
    }

    /// Step duration advertised to the app. Anything other than 30 seconds is
    /// always written out, since apps assume 30 when the parameter is absent.
    #[must_use]
    pub const fn period(mut self, seconds: u64) -> Self {
        self.period = seconds;
        self
    }

    /// Always append `algorithm`, `digits` and `period`.
    #[must_use]
    pub const fn explicit(mut self, explicit: bool) -> Self {
        self.explicit = explicit;
        self
    }
}

impl fmt::Display for ProvisioningUri<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let issuer = encode(self.issuer);

        write!(
            f,
            "otpauth://totp/{issuer}:{}?secret={}&issuer={issuer}",
            encode(self.account),
            self.secret
        )?;

        if self.explicit || self.period != DEFAULT_STEP {
            write!(
                f,
                "&algorithm=SHA1&digits={DIGITS}&period={}",
                self.period
            )?;
        }

        Ok(())
    }
}
