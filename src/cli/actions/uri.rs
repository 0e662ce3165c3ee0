use crate::{
    cli::globals::GlobalArgs,
    totp::{base32, ProvisioningUri},
};
use anyhow::{bail, Context, Result};
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use std::io::Write;

#[derive(Debug)]
pub struct Args {
    pub secret: SecretString,
    pub account: String,
    pub issuer: String,
    pub explicit: bool,
    pub globals: GlobalArgs,
}

#[derive(Debug, Serialize)]
struct Output {
    uri: String,
}

/// Print the provisioning URI for an existing secret.
/// # Errors
/// Returns an error if the secret is not valid base32.
pub fn execute(args: Args, out: &mut impl Write) -> Result<()> {
    let secret = args.secret.expose_secret();

    // an app scanning a bad secret fails silently, so refuse it here
    let key = base32::decode(secret).context("refusing to provision an invalid secret")?;
    if key.is_empty() {
        bail!("refusing to provision an empty secret");
    }

    // apps only accept upper-case unpadded base32
    let canonical = base32::encode(&key);

    let uri = ProvisioningUri::new(&canonical, &args.account, &args.issuer)
        .period(args.globals.step)
        .explicit(args.explicit)
        .to_string();

    args.globals.emit(out, &Output { uri: uri.clone() }, &uri)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(secret: &str) -> Args {
        Args {
            secret: SecretString::from(secret.to_string()),
            account: "user@example.com".to_string(),
            issuer: "MyApp".to_string(),
            explicit: false,
            globals: GlobalArgs::default(),
        }
    }

    #[test]
    #[allow(clippy::unwrap_used)]
    fn test_uri() {
        let mut out = Vec::new();
        execute(args("JBSWY3DPEHPK3PXP"), &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "otpauth://totp/MyApp:user%40example.com?secret=JBSWY3DPEHPK3PXP&issuer=MyApp\n"
        );
    }

    #[test]
    #[allow(clippy::unwrap_used)]
    fn test_uri_explicit_with_step() {
        let mut args = args("JBSWY3DPEHPK3PXP");
        args.explicit = true;
        args.globals = GlobalArgs::new(60);

        let mut out = Vec::new();
        execute(args, &mut out).unwrap();
        assert!(String::from_utf8(out)
            .unwrap()
            .ends_with("&algorithm=SHA1&digits=6&period=60\n"));
    }

    #[test]
    #[allow(clippy::unwrap_used)]
    fn test_uri_canonicalizes_secret() {
        let mut out = Vec::new();
        execute(args("jbsw y3dp ehpk 3pxp==="), &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "otpauth://totp/MyApp:user%40example.com?secret=JBSWY3DPEHPK3PXP&issuer=MyApp\n"
        );
    }

    #[test]
    fn test_uri_rejects_invalid_secret() {
        assert!(execute(args("not-base32"), &mut Vec::new()).is_err());
        assert!(execute(args("===="), &mut Vec::new()).is_err());
    }
}
