use crate::totp::{
    error::Result,
    generator::{unix_now, Totp, DIGITS},
    hmac::HmacProvider,
};
use subtle::ConstantTimeEq;
use tracing::{debug, instrument, warn};

/// Default number of steps tolerated on each side of the current one.
pub const DEFAULT_WINDOW: u32 = 2;

/// Steps to try for `window`, in order from oldest to newest. Steps that
/// would fall before the epoch are skipped.
fn candidate_steps(current: u64, window: u32) -> impl Iterator<Item = (i64, u64)> {
    let window = i64::from(window);
    (-window..=window)
        .filter_map(move |offset| current.checked_add_signed(offset).map(|step| (offset, step)))
}

fn normalize(token: &str) -> Option<&str> {
    let token = token.trim();
    (token.len() == DIGITS).then_some(token)
}

fn codes_equal(candidate: &str, token: &str) -> bool {
    candidate.as_bytes().ct_eq(token.as_bytes()).into()
}

impl<H: HmacProvider> Totp<H> {
    /// Check `token` against `secret` at `unix_seconds`, accepting codes from
    /// `window` steps before or after the current one.
    ///
    /// Never fails: a malformed token, an undecodable secret or a provider
    /// error all read as `false`. Computation failures are logged so they do
    /// not vanish silently; use [`Totp::verify_strict`] to receive them.
    #[must_use]
    #[instrument(level = "debug", skip(self, token, secret))]
    pub fn verify(&self, token: &str, secret: &str, window: u32, unix_seconds: u64) -> bool {
        let Some(token) = normalize(token) else {
            debug!("token rejected: wrong length");
            return false;
        };

        for (offset, step) in candidate_steps(self.time_step(unix_seconds), window) {
            match self.generate_at_step(secret, step) {
                Ok(candidate) if codes_equal(&candidate, token) => {
                    debug!(offset, "token accepted");
                    return true;
                }
                Ok(_) => {}
                Err(e) => {
                    warn!(offset, error = %e, "code computation failed, counting offset as mismatch");
                }
            }
        }

        false
    }

    /// [`Totp::verify`] against the system clock.
    #[must_use]
    pub fn verify_now(&self, token: &str, secret: &str, window: u32) -> bool {
        self.verify(token, secret, window, unix_now())
    }

    /// Like [`Totp::verify`], but a failure to compute any candidate code is
    /// returned instead of being counted as a mismatch. `Ok(false)` therefore
    /// always means the code was wrong.
    ///
    /// # Errors
    /// Returns the first decode or provider error encountered.
    #[instrument(level = "debug", skip(self, token, secret))]
    pub fn verify_strict(
        &self,
        token: &str,
        secret: &str,
        window: u32,
        unix_seconds: u64,
    ) -> Result<bool> {
        let Some(token) = normalize(token) else {
            return Ok(false);
        };

        for (offset, step) in candidate_steps(self.time_step(unix_seconds), window) {
            if codes_equal(&self.generate_at_step(secret, step)?, token) {
                debug!(offset, "token accepted");
                return Ok(true);
            }
        }

        Ok(false)
    }
}
