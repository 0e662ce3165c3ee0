pub mod logging;

use crate::totp::{DEFAULT_STEP, DEFAULT_WINDOW, SECRET_LENGTH};
use clap::{
    builder::{
        styling::{AnsiColor, Effects, Styles},
        RangedU64ValueParser,
    },
    Arg, ArgAction, ColorChoice, Command,
};

pub const ARG_STEP: &str = "step";
pub const ARG_JSON: &str = "json";
pub const ARG_SECRET: &str = "secret";
pub const ARG_TIME: &str = "time";
pub const ARG_CODE: &str = "code";
pub const ARG_WINDOW: &str = "window";
pub const ARG_STRICT: &str = "strict";
pub const ARG_LENGTH: &str = "length";
pub const ARG_ACCOUNT: &str = "account";
pub const ARG_ISSUER: &str = "issuer";
pub const ARG_EXPLICIT: &str = "explicit";

fn secret_arg() -> Arg {
    Arg::new(ARG_SECRET)
        .short('s')
        .long("secret")
        .help("Base32 shared secret")
        .env("TOTPGATE_SECRET")
        .hide_env_values(true)
        .required(true)
}

fn time_arg() -> Arg {
    Arg::new(ARG_TIME)
        .short('t')
        .long("time")
        .help("Unix timestamp to use instead of the system clock")
        .value_parser(clap::value_parser!(u64))
}

fn issuer_arg() -> Arg {
    Arg::new(ARG_ISSUER)
        .short('i')
        .long("issuer")
        .help("Issuer shown by the authenticator app")
        .env("TOTPGATE_ISSUER")
}

fn account_arg() -> Arg {
    Arg::new(ARG_ACCOUNT)
        .short('a')
        .long("account")
        .help("Account label, usually the user's email")
}

fn generate() -> Command {
    Command::new("generate")
        .about("Print the current code for a secret")
        .arg(secret_arg())
        .arg(time_arg())
}

fn verify() -> Command {
    Command::new("verify")
        .about("Check a code against a secret, exits non-zero when invalid")
        .arg(secret_arg())
        .arg(
            Arg::new(ARG_CODE)
                .help("Six digit code to check")
                .required(true),
        )
        .arg(
            Arg::new(ARG_WINDOW)
                .short('w')
                .long("window")
                .help("Steps of clock skew tolerated on each side")
                .default_value(DEFAULT_WINDOW.to_string())
                .env("TOTPGATE_WINDOW")
                .value_parser(clap::value_parser!(u32)),
        )
        .arg(time_arg())
        .arg(
            Arg::new(ARG_STRICT)
                .long("strict")
                .help("Fail with an error when the secret cannot be used instead of reporting invalid")
                .action(ArgAction::SetTrue),
        )
}

fn secret() -> Command {
    Command::new("secret")
        .about("Generate a new random base32 secret")
        .arg(
            Arg::new(ARG_LENGTH)
                .short('l')
                .long("length")
                .help("Number of base32 characters")
                .default_value(SECRET_LENGTH.to_string())
                .value_parser(clap::value_parser!(usize)),
        )
        .arg(account_arg().requires(ARG_ISSUER))
        .arg(issuer_arg())
}

fn uri() -> Command {
    Command::new("uri")
        .about("Print the otpauth:// provisioning URI for a secret")
        .arg(secret_arg())
        .arg(account_arg().required(true))
        .arg(issuer_arg().required(true))
        .arg(
            Arg::new(ARG_EXPLICIT)
                .long("explicit")
                .help("Always include algorithm, digits and period")
                .action(ArgAction::SetTrue),
        )
}

#[must_use]
pub fn new() -> Command {
    let styles = Styles::styled()
        .header(AnsiColor::Yellow.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Blue.on_default() | Effects::BOLD)
        .placeholder(AnsiColor::Green.on_default());

    let command = Command::new("totpgate")
        .about(env!("CARGO_PKG_DESCRIPTION"))
        .version(env!("CARGO_PKG_VERSION"))
        .color(ColorChoice::Auto)
        .styles(styles)
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new(ARG_STEP)
                .long("step")
                .help("Seconds per time step")
                .default_value(DEFAULT_STEP.to_string())
                .env("TOTPGATE_STEP")
                .global(true)
                .value_parser(RangedU64ValueParser::<u64>::new().range(1..)),
        )
        .arg(
            Arg::new(ARG_JSON)
                .long("json")
                .help("Print results as JSON")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .subcommand(generate())
        .subcommand(verify())
        .subcommand(secret())
        .subcommand(uri());

    logging::with_args(command)
}
