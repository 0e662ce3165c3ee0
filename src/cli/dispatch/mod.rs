//! Maps validated CLI matches to the action the binary should run.

use crate::cli::{
    actions::{generate, secret, uri, verify, Action},
    commands::{
        ARG_ACCOUNT, ARG_CODE, ARG_EXPLICIT, ARG_ISSUER, ARG_JSON, ARG_LENGTH, ARG_SECRET,
        ARG_STEP, ARG_STRICT, ARG_TIME, ARG_WINDOW,
    },
    globals::GlobalArgs,
};
use crate::totp::{DEFAULT_STEP, DEFAULT_WINDOW, SECRET_LENGTH};
use anyhow::{anyhow, Context, Result};
use clap::ArgMatches;
use secrecy::SecretString;

fn globals(matches: &ArgMatches) -> GlobalArgs {
    let step = matches
        .get_one::<u64>(ARG_STEP)
        .copied()
        .unwrap_or(DEFAULT_STEP);
    let mut globals = GlobalArgs::new(step);
    globals.set_json(matches.get_flag(ARG_JSON));
    globals
}

fn required(matches: &ArgMatches, id: &str) -> Result<String> {
    matches
        .get_one::<String>(id)
        .cloned()
        .with_context(|| format!("missing required argument: --{id}"))
}

fn secret_arg(matches: &ArgMatches) -> Result<SecretString> {
    required(matches, ARG_SECRET).map(SecretString::from)
}

/// Map validated CLI matches to an action.
///
/// # Errors
/// Returns an error if the subcommand is unknown or required arguments are missing.
pub fn handler(matches: &ArgMatches) -> Result<Action> {
    let (name, sub_m) = matches
        .subcommand()
        .ok_or_else(|| anyhow!("no subcommand given"))?;

    let globals = globals(sub_m);

    match name {
        "generate" => Ok(Action::Generate(generate::Args {
            secret: secret_arg(sub_m)?,
            time: sub_m.get_one::<u64>(ARG_TIME).copied(),
            globals,
        })),
        "verify" => Ok(Action::Verify(verify::Args {
            secret: secret_arg(sub_m)?,
            code: required(sub_m, ARG_CODE)?,
            window: sub_m.get_one::<u32>(ARG_WINDOW).copied().unwrap_or(DEFAULT_WINDOW),
            time: sub_m.get_one::<u64>(ARG_TIME).copied(),
            strict: sub_m.get_flag(ARG_STRICT),
            globals,
        })),
        "secret" => Ok(Action::Secret(secret::Args {
            length: sub_m.get_one::<usize>(ARG_LENGTH).copied().unwrap_or(SECRET_LENGTH),
            account: sub_m.get_one::<String>(ARG_ACCOUNT).cloned(),
            issuer: sub_m.get_one::<String>(ARG_ISSUER).cloned(),
            globals,
        })),
        "uri" => Ok(Action::Uri(uri::Args {
            secret: secret_arg(sub_m)?,
            account: required(sub_m, ARG_ACCOUNT)?,
            issuer: required(sub_m, ARG_ISSUER)?,
            explicit: sub_m.get_flag(ARG_EXPLICIT),
            globals,
        })),
        other => Err(anyhow!("unknown command: {other}")),
    }
}
