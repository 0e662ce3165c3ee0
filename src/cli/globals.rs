use crate::totp::{Totp, DEFAULT_STEP};
use anyhow::Result;
use serde::Serialize;
use std::io::Write;

/// Options shared by every subcommand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlobalArgs {
    pub step: u64,
    pub json: bool,
}

impl Default for GlobalArgs {
    fn default() -> Self {
        Self::new(DEFAULT_STEP)
    }
}

impl GlobalArgs {
    #[must_use]
    pub const fn new(step: u64) -> Self {
        Self { step, json: false }
    }

    pub fn set_json(&mut self, json: bool) {
        self.json = json;
    }

    /// Generator configured with the global step duration.
    ///
    /// # Errors
    /// Returns an error if the step is zero.
    pub fn totp(&self) -> Result<Totp> {
        Ok(Totp::new(self.step)?)
    }

    /// Write `value` as JSON or `text` depending on `--json`.
    ///
    /// # Errors
    /// Returns an error if serialization or the write fails.
    pub fn emit<T: Serialize>(&self, out: &mut impl Write, value: &T, text: &str) -> Result<()> {
        if self.json {
            writeln!(out, "{}", serde_json::to_string(value)?)?;
        } else {
            writeln!(out, "{text}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_global_args() {
        let args = GlobalArgs::default();
        assert_eq!(args.step, 30);
        assert!(!args.json);
    }

    #[test]
    fn test_zero_step_errors() {
        assert!(GlobalArgs::new(0).totp().is_err());
    }

    #[test]
    #[allow(clippy::unwrap_used)]
    fn test_emit() {
        let mut args = GlobalArgs::default();
        let value = json!({ "code": "123456" });

        let mut out = Vec::new();
        args.emit(&mut out, &value, "123456").unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "123456\n");

        args.set_json(true);
        let mut out = Vec::new();
        args.emit(&mut out, &value, "123456").unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "{\"code\":\"123456\"}\n");
    }
}
