//! Command-line interface for the trigrid TUI.

use clap::{Parser, ValueEnum};
use trigrid_core::Player;

/// Trigrid - tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "trigrid")]
#[command(about = "Two-player and vs-computer tic-tac-toe", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Seat the computer plays in vs-computer games
    #[arg(long, value_enum, default_value_t = AiSeat::O)]
    pub ai_seat: AiSeat,

    /// Log file path (logs never go to the terminal while the UI runs)
    #[arg(long, default_value = "trigrid.log")]
    pub log_file: std::path::PathBuf,
}

/// CLI-facing name for the computer's seat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum AiSeat {
    /// The computer plays X and moves first.
    X,
    /// The computer plays O and moves second.
    O,
}

impl From<AiSeat> for Player {
    fn from(seat: AiSeat) -> Self {
        match seat {
            AiSeat::X => Player::X,
            AiSeat::O => Player::O,
        }
    }
}
