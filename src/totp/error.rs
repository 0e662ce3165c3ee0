use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// A character outside the RFC 4648 base32 alphabet.
    /// `position` is counted in the secret with whitespace removed.
    #[error("invalid base32 character {character:?} at position {position}")]
    Decode { character: char, position: usize },
    #[error("secret decodes to an empty key")]
    EmptySecret,
    #[error("hmac digest too short: {len} bytes, expected at least 20")]
    ShortDigest { len: usize },
    #[error("hmac failure: {0}")]
    Hmac(String),
    #[error("step duration must be greater than zero")]
    InvalidStep,
}
