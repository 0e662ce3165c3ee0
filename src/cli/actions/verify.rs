use crate::{cli::globals::GlobalArgs, totp::unix_now};
use anyhow::{bail, Context, Result};
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use std::io::Write;
use tracing::info;

#[derive(Debug)]
pub struct Args {
    pub secret: SecretString,
    pub code: String,
    pub window: u32,
    pub time: Option<u64>,
    pub strict: bool,
    pub globals: GlobalArgs,
}

#[derive(Debug, Serialize)]
struct Output {
    valid: bool,
}

/// Check the code and report the result. An invalid code is an error so the
/// process exits non-zero.
/// # Errors
/// Returns an error if the code does not verify, or with `--strict` if the
/// secret cannot be used.
pub fn execute(args: Args, out: &mut impl Write) -> Result<()> {
    let totp = args.globals.totp()?;
    let now = args.time.unwrap_or_else(unix_now);
    let secret = args.secret.expose_secret();

    let valid = if args.strict {
        totp.verify_strict(&args.code, secret, args.window, now)
            .context("verification could not be performed")?
    } else {
        totp.verify(&args.code, secret, args.window, now)
    };

    info!(valid, window = args.window, "code checked");

    args.globals.emit(
        out,
        &Output { valid },
        if valid { "valid" } else { "invalid" },
    )?;

    if !valid {
        bail!("invalid code");
    }

    Ok(())
}
