//! RFC 4648 base32 without the padding ceremony authenticator apps skip.

use crate::totp::error::{Error, Result};

pub const ALPHABET: &[u8; 32] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ234567";

fn index_of(c: char) -> Option<u32> {
    match c {
        'A'..='Z' => Some(c as u32 - 'A' as u32),
        '2'..='7' => Some(c as u32 - '2' as u32 + 26),
        _ => None,
    }
}

/// Decode a base32 secret into raw key bytes.
///
/// Whitespace is ignored, trailing `=` padding is stripped and lowercase is
/// accepted. Trailing bits that do not fill a whole byte are dropped. An empty
/// (or all-padding) input yields an empty vector; callers decide whether that
/// is acceptable.
///
/// # Errors
/// Returns [`Error::Decode`] with the first character outside the alphabet.
pub fn decode(input: &str) -> Result<Vec<u8>> {
    let cleaned: String = input.chars().filter(|c| !c.is_whitespace()).collect();
    let cleaned = cleaned.trim_end_matches('=');

    let mut out = Vec::with_capacity(cleaned.len() * 5 / 8);
    let mut buffer: u32 = 0;
    let mut bits: u32 = 0;

    for (position, raw) in cleaned.chars().enumerate() {
        let c = raw.to_ascii_uppercase();
        let value = index_of(c).ok_or(Error::Decode {
            character: raw,
            position,
        })?;

        buffer = (buffer << 5) | value;
        bits += 5;

        if bits >= 8 {
            bits -= 8;
            #[allow(clippy::cast_possible_truncation)]
            out.push((buffer >> bits) as u8);
            buffer &= (1 << bits) - 1;
        }
    }

    Ok(out)
}

/// Encode raw bytes as unpadded base32.
#[must_use]
pub fn encode(bytes: &[u8]) -> String {
    let mut out = String::with_capacity((bytes.len() * 8).div_ceil(5));
    let mut buffer: u32 = 0;
    let mut bits: u32 = 0;

    for &byte in bytes {
        buffer = (buffer << 8) | u32::from(byte);
        bits += 8;

        while bits >= 5 {
            bits -= 5;
            out.push(ALPHABET[((buffer >> bits) & 0x1F) as usize] as char);
        }
        buffer &= (1 << bits) - 1;
    }

    if bits > 0 {
        out.push(ALPHABET[((buffer << (5 - bits)) & 0x1F) as usize] as char);
    }

    out
}
