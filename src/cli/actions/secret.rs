use crate::{
    cli::globals::GlobalArgs,
    totp::{generate_secret_with_length, ProvisioningUri},
};
use anyhow::{bail, Result};
use serde::Serialize;
use std::io::Write;

#[derive(Debug)]
pub struct Args {
    pub length: usize,
    pub account: Option<String>,
    pub issuer: Option<String>,
    pub globals: GlobalArgs,
}

#[derive(Debug, Serialize)]
struct Output {
    secret: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    uri: Option<String>,
}

/// Mint a secret, plus its provisioning URI when an account and issuer are
/// given.
/// # Errors
/// Returns an error if the length is zero or the output cannot be written.
pub fn execute(args: Args, out: &mut impl Write) -> Result<()> {
    if args.length == 0 {
        bail!("secret length must be greater than zero");
    }

    let secret = generate_secret_with_length(args.length);

    let uri = match (&args.account, &args.issuer) {
        (Some(account), Some(issuer)) => Some(
            ProvisioningUri::new(&secret, account, issuer)
                .period(args.globals.step)
                .to_string(),
        ),
        _ => None,
    };

    let text = match &uri {
        Some(uri) => format!("{secret}\n{uri}"),
        None => secret.clone(),
    };

    args.globals.emit(out, &Output { secret, uri }, &text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::totp::base32;

    fn args(account: Option<&str>, issuer: Option<&str>) -> Args {
        Args {
            length: 32,
            account: account.map(str::to_string),
            issuer: issuer.map(str::to_string),
            globals: GlobalArgs::default(),
        }
    }

    #[test]
    #[allow(clippy::unwrap_used)]
    fn test_secret_only() {
        let mut out = Vec::new();
        execute(args(None, None), &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        let secret = text.trim_end();
        assert_eq!(secret.len(), 32);
        assert_eq!(base32::decode(secret).unwrap().len(), 20);
    }

    #[test]
    #[allow(clippy::unwrap_used)]
    fn test_secret_with_uri_json() {
        let mut args = args(Some("ops@example.com"), Some("Dashboard"));
        args.globals.set_json(true);

        let mut out = Vec::new();
        execute(args, &mut out).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        let secret = value["secret"].as_str().unwrap();
        let uri = value["uri"].as_str().unwrap();
        assert!(uri.starts_with("otpauth://totp/Dashboard:ops%40example.com?"));
        assert!(uri.contains(&format!("secret={secret}")));
    }

    #[test]
    fn test_zero_length_rejected() {
        let mut args = args(None, None);
        args.length = 0;
        assert!(execute(args, &mut Vec::new()).is_err());
    }
}
