use crate::{cli::globals::GlobalArgs, totp::unix_now};
use anyhow::{Context, Result};
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use std::io::Write;
use tracing::debug;

#[derive(Debug)]
pub struct Args {
    pub secret: SecretString,
    pub time: Option<u64>,
    pub globals: GlobalArgs,
}

#[derive(Debug, Serialize)]
struct Output {
    code: String,
    step: u64,
    seconds_remaining: u64,
}

/// Print the code for the secret at `--time` or now.
/// # Errors
/// Returns an error if the secret cannot be decoded.
pub fn execute(args: Args, out: &mut impl Write) -> Result<()> {
    let totp = args.globals.totp()?;
    let now = args.time.unwrap_or_else(unix_now);

    let code = totp
        .generate(args.secret.expose_secret(), now)
        .context("could not generate code")?;

    let output = Output {
        step: totp.time_step(now),
        seconds_remaining: totp.seconds_remaining(now),
        code,
    };

    debug!(
        step = output.step,
        seconds_remaining = output.seconds_remaining,
        "code generated"
    );

    args.globals.emit(out, &output, &output.code)
}
