pub mod generate;
pub mod secret;
pub mod uri;
pub mod verify;

// Internal "interpreter" for `Action`.
// We keep the match in a separate module so `mod.rs` stays small as more actions are added.
mod run;

use std::io::Write;

#[derive(Debug)]
pub enum Action {
    Generate(generate::Args),
    Verify(verify::Args),
    Secret(secret::Args),
    Uri(uri::Args),
}

impl Action {
    /// Execute the action, writing its result to `out`.
    /// # Errors
    /// Returns an error if the action fails.
    pub fn execute(self, out: &mut impl Write) -> anyhow::Result<()> {
        run::execute(self, out)
    }
}
