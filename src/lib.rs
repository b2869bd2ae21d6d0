use std::io;

use eyre::Result;

pub mod cli;
pub mod config;
pub mod hardware;
pub mod panel;

pub fn init() -> Result<()> {
    color_eyre::install()?;

    tracing_subscriber::fmt()
        .with_env_filter("fanpanel=info")
        .with_writer(io::stderr)
        .init();

    Ok(())
}
