//! Screen trait and transition type for the screen-flow state machine.

use crossterm::event::KeyEvent;
use ratatui::Frame;
use trigrid_core::{GameMode, Session};

/// The result of handling an input event on a screen.
///
/// Screens return this from [`Screen::handle_key`] to drive the
/// [`App`](crate::app::App) state machine; the app applies the
/// transition against the session and swaps screens to match.
#[derive(Debug, Clone, Copy)]
pub enum ScreenTransition {
    /// Stay on the current screen, no state change.
    Stay,
    /// Start a game in the given mode (welcome screen only).
    StartGame(GameMode),
    /// Request a move at the given board cell (game screen only).
    PlaceAt {
        /// Target row, 0-2.
        row: usize,
        /// Target column, 0-2.
        col: usize,
    },
    /// Start a fresh game in the same mode (result screen only).
    PlayAgain,
    /// Return to the welcome screen (result screen only).
    GoHome,
    /// Exit the application cleanly.
    Quit,
}

/// Trait implemented by each screen in the flow.
///
/// Each screen owns its own cursor/menu state, renders its UI, and maps
/// key events to transitions. The app calls these in the event loop.
pub trait Screen {
    /// Renders the screen into the provided [`Frame`].
    fn render(&self, frame: &mut Frame, session: &Session);

    /// Handles a key event and returns the resulting [`ScreenTransition`].
    fn handle_key(&mut self, key: KeyEvent, session: &Session) -> ScreenTransition;
}
