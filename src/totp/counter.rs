/// Number of whole steps elapsed since the Unix epoch.
#[must_use]
pub const fn time_step(unix_seconds: u64, step_seconds: u64) -> u64 {
    unix_seconds / step_seconds
}

/// Big-endian counter fed into the HMAC. The upper four bytes stay zero for
/// any step below 2^32.
#[must_use]
pub const fn encode(step: u64) -> [u8; 8] {
    step.to_be_bytes()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_layout() {
        assert_eq!(encode(0), [0; 8]);
        assert_eq!(encode(1), [0, 0, 0, 0, 0, 0, 0, 1]);
        assert_eq!(encode(0x0123_4567), [0, 0, 0, 0, 0x01, 0x23, 0x45, 0x67]);
        assert_eq!(encode(u64::from(u32::MAX)), [0, 0, 0, 0, 0xFF, 0xFF, 0xFF, 0xFF]);
    }

    #[test]
    fn test_time_step_floors() {
        assert_eq!(time_step(59, 30), 1);
        assert_eq!(time_step(60, 30), 2);
        assert_eq!(time_step(1_111_111_109, 30), 0x0235_23EC);
        assert_eq!(time_step(20_000_000_000, 30), 666_666_666);
    }
}
