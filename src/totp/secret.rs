use crate::totp::base32::ALPHABET;
use rand::{rngs::OsRng, RngCore};

/// Length of a freshly minted secret, in base32 characters (160 bits).
pub const SECRET_LENGTH: usize = 32;

/// Mint a new base32 secret from the OS CSPRNG.
#[must_use]
pub fn generate_secret() -> String {
    generate_secret_with_length(SECRET_LENGTH)
}

/// Mint a base32 secret of `length` characters.
///
/// Each character takes the low five bits of one random byte; 256 is a
/// multiple of 32 so the draw is uniform over the alphabet.
#[must_use]
pub fn generate_secret_with_length(length: usize) -> String {
    let mut bytes = vec![0u8; length];
    OsRng.fill_bytes(&mut bytes);

    bytes
        .iter()
        .map(|b| ALPHABET[usize::from(b & 0x1F)] as char)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::totp::base32;

    #[test]
    fn test_generate_secret_shape() {
        let secret = generate_secret();
        assert_eq!(secret.len(), SECRET_LENGTH);
        assert!(secret.bytes().all(|c| ALPHABET.contains(&c)));
    }

    #[test]
    fn test_generate_secret_is_random() {
        assert_ne!(generate_secret(), generate_secret());
    }

    #[test]
    #[allow(clippy::unwrap_used)]
    fn test_generated_secret_decodes_to_twenty_bytes() {
        assert_eq!(base32::decode(&generate_secret()).unwrap().len(), 20);
    }

    #[test]
    fn test_custom_length() {
        assert_eq!(generate_secret_with_length(16).len(), 16);
        assert!(generate_secret_with_length(0).is_empty());
    }
}
