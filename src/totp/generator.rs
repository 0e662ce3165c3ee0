use crate::totp::{
    base32, counter,
    error::{Error, Result},
    hmac::{HmacProvider, Sha1Hmac},
    truncate,
};
use std::num::NonZeroU64;
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::{instrument, trace};

/// Default step duration in seconds.
pub const DEFAULT_STEP: u64 = 30;

/// Number of digits in a code.
pub const DIGITS: usize = 6;

const DEFAULT_STEP_NZ: NonZeroU64 = match NonZeroU64::new(DEFAULT_STEP) {
    Some(step) => step,
    None => panic!("default step must be non-zero"),
};

/// Current Unix time in whole seconds; clocks set before the epoch read as 0.
#[must_use]
pub fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |d| d.as_secs())
}

/// RFC 6238 code generator bound to a step duration and an HMAC provider.
///
/// Holds no per-secret state, so one instance can serve every secret and be
/// shared across threads when the provider allows it.
#[derive(Debug, Clone, Copy)]
pub struct Totp<H = Sha1Hmac> {
    provider: H,
    step: NonZeroU64,
}

impl Default for Totp {
    fn default() -> Self {
        Self {
            provider: Sha1Hmac,
            step: DEFAULT_STEP_NZ,
        }
    }
}

impl Totp {
    /// Generator using the bundled HMAC-SHA1 provider.
    ///
    /// # Errors
    /// Returns [`Error::InvalidStep`] if `step_seconds` is zero.
    pub fn new(step_seconds: u64) -> Result<Self> {
        Self::with_provider(Sha1Hmac, step_seconds)
    }
}

impl<H: HmacProvider> Totp<H> {
    /// # Errors
    /// Returns [`Error::InvalidStep`] if `step_seconds` is zero.
    pub fn with_provider(provider: H, step_seconds: u64) -> Result<Self> {
        let step = NonZeroU64::new(step_seconds).ok_or(Error::InvalidStep)?;
        Ok(Self { provider, step })
    }

    #[must_use]
    pub const fn step_seconds(&self) -> u64 {
        self.step.get()
    }

    #[must_use]
    pub const fn time_step(&self, unix_seconds: u64) -> u64 {
        counter::time_step(unix_seconds, self.step.get())
    }

    /// Seconds left before the code for `unix_seconds` rolls over.
    #[must_use]
    pub const fn seconds_remaining(&self, unix_seconds: u64) -> u64 {
        self.step.get() - unix_seconds % self.step.get()
    }

    /// Code for `secret` at `unix_seconds`.
    ///
    /// # Errors
    /// Returns an error if the secret is not valid base32, decodes to nothing,
    /// or the provider fails.
    pub fn generate(&self, secret: &str, unix_seconds: u64) -> Result<String> {
        self.generate_at_step(secret, self.time_step(unix_seconds))
    }

    /// Code for `secret` at the current system time.
    ///
    /// # Errors
    /// See [`Totp::generate`].
    pub fn generate_now(&self, secret: &str) -> Result<String> {
        self.generate(secret, unix_now())
    }

    /// Code for `secret` using `step` directly as the HOTP counter.
    ///
    /// # Errors
    /// See [`Totp::generate`].
    #[instrument(level = "trace", skip(self, secret))]
    pub fn generate_at_step(&self, secret: &str, step: u64) -> Result<String> {
        let key = base32::decode(secret)?;
        if key.is_empty() {
            return Err(Error::EmptySecret);
        }

        let digest = self.provider.hmac_sha1(&key, &counter::encode(step))?;
        let code = truncate::truncate(&digest)?;

        trace!(digest_len = digest.len(), "code computed");

        Ok(format!("{code:0width$}", width = DIGITS))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "GEZDGNBVGY3TQOJQGEZDGNBVGY3TQOJQ";

    struct FixedDigest(Vec<u8>);

    impl HmacProvider for FixedDigest {
        fn hmac_sha1(&self, _key: &[u8], _message: &[u8]) -> Result<Vec<u8>> {
            Ok(self.0.clone())
        }
    }

    #[test]
    fn test_default_step_is_thirty() {
        assert_eq!(Totp::default().step_seconds(), 30);
    }

    #[test]
    fn test_zero_step_rejected() {
        assert_eq!(Totp::new(0).unwrap_err(), Error::InvalidStep);
    }

    #[test]
    #[allow(clippy::unwrap_used)]
    fn test_rfc4226_counters() {
        let totp = Totp::default();
        let expected = [
            "755224", "287082", "359152", "969429", "338314", "254676", "287922", "162583",
            "399871", "520489",
        ];
        for (step, code) in expected.iter().enumerate() {
            assert_eq!(&totp.generate_at_step(SECRET, step as u64).unwrap(), code);
        }
    }

    #[test]
    #[allow(clippy::unwrap_used)]
    fn test_deterministic() {
        let totp = Totp::default();
        let a = totp.generate(SECRET, 1_700_000_000).unwrap();
        let b = totp.generate(SECRET, 1_700_000_000).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.len(), DIGITS);
        assert!(a.chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    #[allow(clippy::unwrap_used)]
    fn test_same_step_same_code() {
        let totp = Totp::default();
        assert_eq!(
            totp.generate(SECRET, 60).unwrap(),
            totp.generate(SECRET, 89).unwrap()
        );
    }

    #[test]
    #[allow(clippy::unwrap_used)]
    fn test_zero_padding() {
        // offset 0, value 42
        let mut digest = vec![0u8; 20];
        digest[3] = 42;
        let totp = Totp::with_provider(FixedDigest(digest), 30).unwrap();
        assert_eq!(totp.generate(SECRET, 0).unwrap(), "000042");
    }

    #[test]
    fn test_invalid_secret_propagates() {
        assert!(matches!(
            Totp::default().generate("not base32!", 0),
            Err(Error::Decode { .. })
        ));
    }

    #[test]
    fn test_empty_secret_rejected() {
        assert_eq!(
            Totp::default().generate("====", 0).unwrap_err(),
            Error::EmptySecret
        );
    }

    #[test]
    #[allow(clippy::unwrap_used)]
    fn test_short_digest_is_fatal() {
        let totp = Totp::with_provider(FixedDigest(vec![0u8; 16]), 30).unwrap();
        assert_eq!(
            totp.generate(SECRET, 0).unwrap_err(),
            Error::ShortDigest { len: 16 }
        );
    }

    #[test]
    #[allow(clippy::unwrap_used)]
    fn test_seconds_remaining() {
        let totp = Totp::default();
        assert_eq!(totp.seconds_remaining(0), 30);
        assert_eq!(totp.seconds_remaining(29), 1);
        assert_eq!(totp.seconds_remaining(30), 30);
        assert_eq!(Totp::new(60).unwrap().seconds_remaining(75), 45);
    }

    #[test]
    #[allow(clippy::unwrap_used)]
    fn test_step_duration_changes_counter() {
        let totp = Totp::new(60).unwrap();
        // t=59 with 60s steps is counter 0
        assert_eq!(totp.generate(SECRET, 59).unwrap(), "755224");
    }
}
