mod console;
mod render;
mod session;
mod settings;

use std::io;

use color_eyre::Result;
use cuno::strategy::GreedyStrategy;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::{console::Console, settings::Settings};

fn main() -> Result<()> {
    color_eyre::install()?;

    // Game output owns stdout, logs go to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let settings = Settings::from_env()?;
    info!(seed = ?settings.seed, rules = ?settings.rules, "Settings loaded");

    let stdin = io::stdin();
    let mut console = Console::new(stdin.lock(), io::stdout());

    session::start(&mut console, &settings, &GreedyStrategy)?;

    Ok(())
}
