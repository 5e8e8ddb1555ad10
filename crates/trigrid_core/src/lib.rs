//! Pure tic-tac-toe game logic.
//!
//! This crate holds everything that can be decided without a screen:
//!
//! - **Board**: the 3x3 grid of squares ([`Board`], [`Square`], [`Position`])
//! - **Rules**: win and draw detection over a board ([`evaluate`], [`Outcome`])
//! - **Selector**: the heuristic computer opponent ([`select_move`])
//! - **Session**: the welcome/playing/result state machine that owns the
//!   board, validates moves, and queues audio [`Cue`]s for the shell
//!
//! The crate performs no I/O. A presentation shell renders the session
//! state, feeds it input, and drains its cue queue after every mutating
//! call.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod position;
mod rules;
mod selector;
mod session;
mod types;

pub use position::Position;
pub use rules::{Line, LineKind, Outcome, evaluate};
pub use selector::{SelectError, select_move};
pub use session::{Cue, GameMode, MoveError, Phase, Session, SessionError};
pub use types::{Board, PlaceError, Player, Square};
