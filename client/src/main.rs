use anyhow::Context;

use client::renderer::{install_panic_hook, TerminalSession};
use client::{app, logging};

fn main() -> anyhow::Result<()> {
    let log_path = logging::init()?;
    tracing::info!(log = %log_path.display(), "starting air hockey");

    install_panic_hook();
    let session = TerminalSession::acquire().context("failed to initialise the terminal")?;
    let result = app::run(&session);
    // Restore before anyhow prints the error
    drop(session);

    result.context("air hockey stopped")?;
    tracing::info!("bye");
    Ok(())
}
