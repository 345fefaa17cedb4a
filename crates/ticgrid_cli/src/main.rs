//! Ticgrid - interactive tic-tac-toe against a random computer opponent.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod input;
mod render;
mod session;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use session::GameSession;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let mut session = GameSession::new(&cli)?;
    session.run()
}
