//! Command-line interface for ticgrid.

use clap::Parser;

/// Ticgrid - tic-tac-toe against a random computer opponent
#[derive(Parser, Debug)]
#[command(name = "ticgrid")]
#[command(about = "Play N-by-N tic-tac-toe against a random computer opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Board size (N for an N-by-N grid)
    #[arg(short = 'n', long, default_value = "3")]
    pub size: usize,

    /// Symbol for the human player: X or O (prompted when omitted)
    #[arg(short, long)]
    pub symbol: Option<String>,

    /// Seed for the computer's random move selection
    #[arg(long)]
    pub seed: Option<u64>,
}
