//! Audible feedback for kernel cues.
//!
//! Terminals only offer the bell, so the four cue sounds of the game
//! become bell patterns: one ring for a placed mark, more for the
//! game-over cues.

use std::io::{self, Write};
use tracing::debug;
use trigrid_core::Cue;

/// Plays queued cues through the terminal bell.
#[derive(Debug, Default)]
pub struct Chime;

impl Chime {
    /// Creates a new chime.
    pub fn new() -> Self {
        Self
    }

    /// Plays a single cue.
    pub fn play(&self, cue: Cue) -> io::Result<()> {
        let rings = match cue {
            Cue::MovePlaced => 1,
            Cue::Lost(_) => 2,
            Cue::Won(_) | Cue::Tied => 3,
        };
        debug!(?cue, rings, "playing cue");

        let mut stdout = io::stdout();
        for _ in 0..rings {
            stdout.write_all(b"\x07")?;
        }
        stdout.flush()
    }
}
