use crate::cli::actions::{generate, secret, uri, verify, Action};
use anyhow::Result;
use std::io::Write;

/// Execute the provided action.
// This is the single dispatch point for all CLI actions.
/// # Errors
/// Returns an error if the action fails.
pub fn execute(action: Action, out: &mut impl Write) -> Result<()> {
    match action {
        Action::Generate(args) => generate::execute(args, out),
        Action::Verify(args) => verify::execute(args, out),
        Action::Secret(args) => secret::execute(args, out),
        Action::Uri(args) => uri::execute(args, out),
    }
}
