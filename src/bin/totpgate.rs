use anyhow::Result;
use totpgate::cli;

// Main function
fn main() -> Result<()> {
    let action = cli::start()?;

    action.execute(&mut std::io::stdout().lock())?;

    Ok(())
}
