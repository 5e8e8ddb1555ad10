//! Game session: the welcome/playing/result state machine.
//!
//! A [`Session`] owns the board, the turn order, the chosen mode, and the
//! outcome. It is an explicitly owned value with no ambient globals, so
//! tests (and shells) can run any number of independent sessions.
//!
//! The session performs no I/O. Audio-worthy moments are queued as
//! [`Cue`]s for the shell to drain after every mutating call.

use crate::position::Position;
use crate::rules::{self, Outcome};
use crate::selector::{self, SelectError};
use crate::types::{Board, PlaceError, Player};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// How the O-seat (or the configured AI seat) is controlled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameMode {
    /// Both seats are human.
    TwoPlayer,
    /// One seat is played by the heuristic selector.
    VsComputer,
}

/// High-level screen state of the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Waiting for a mode choice; no active game.
    Welcome,
    /// A game is in progress.
    Playing,
    /// The game ended; board is frozen until play-again or home.
    Result,
}

/// Audio cue queued by the session for the shell to play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cue {
    /// A human move landed on the board.
    MovePlaced,
    /// The given player won and the result reads as a victory.
    Won(Player),
    /// The given player won and the result reads as a defeat.
    Lost(Player),
    /// The board filled with no winner.
    Tied,
}

/// Error returned when a move request is rejected.
///
/// Every rejection is a strict no-op: board, turn, and phase are
/// untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The target square is already occupied.
    #[display("square {_0} is already occupied")]
    SquareOccupied(Position),
    /// The (row, col) coordinates are outside the 3x3 grid.
    #[display("({row}, {col}) is off the board")]
    OutOfBounds {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },
    /// No game is in progress (welcome or result phase).
    #[display("no game is in progress")]
    NotPlaying,
    /// The current turn belongs to the computer seat.
    #[display("it is the computer's turn")]
    ComputerSeat,
}

impl std::error::Error for MoveError {}

/// Error returned when a session operation is invoked from the wrong
/// phase, or when an internal invariant breaks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum SessionError {
    /// `choose_mode` called outside the welcome phase.
    #[display("a mode can only be chosen from the welcome screen")]
    NotWelcome,
    /// `play_again` or `go_home` called outside the result phase.
    #[display("the game has not finished")]
    NotResult,
    /// `play_computer_move` called when no computer turn is pending.
    #[display("no computer turn is pending")]
    NoComputerTurn,
    /// The selector failed; the pending-turn guard should make this
    /// unreachable.
    #[display("move selection failed: {_0}")]
    Selector(SelectError),
    /// The selector produced an occupied square; likewise unreachable.
    #[display("computer move rejected: {_0}")]
    Place(PlaceError),
}

impl std::error::Error for SessionError {}

impl From<SelectError> for SessionError {
    fn from(err: SelectError) -> Self {
        SessionError::Selector(err)
    }
}

impl From<PlaceError> for SessionError {
    fn from(err: PlaceError) -> Self {
        SessionError::Place(err)
    }
}

/// A single game session: board, turn, mode, outcome, and cue queue.
#[derive(Debug, Clone)]
pub struct Session {
    board: Board,
    mode: Option<GameMode>,
    to_move: Player,
    outcome: Outcome,
    phase: Phase,
    ai_seat: Player,
    cues: Vec<Cue>,
}

impl Session {
    /// Creates a session on the welcome screen with the computer seated
    /// as O.
    #[instrument]
    pub fn new() -> Self {
        Self::with_ai_seat(Player::O)
    }

    /// Creates a session with the computer playing the given seat in
    /// vs-computer games.
    #[instrument]
    pub fn with_ai_seat(ai_seat: Player) -> Self {
        info!(%ai_seat, "creating session");
        Self {
            board: Board::new(),
            mode: None,
            to_move: Player::X,
            outcome: Outcome::InProgress,
            phase: Phase::Welcome,
            ai_seat,
            cues: Vec::new(),
        }
    }

    /// The board as it currently stands.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The chosen mode, if a game has started.
    pub fn mode(&self) -> Option<GameMode> {
        self.mode
    }

    /// The player whose turn it is.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Outcome of the current game.
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Current screen phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Seat the computer plays in vs-computer games.
    pub fn ai_seat(&self) -> Player {
        self.ai_seat
    }

    /// Drains the queued cues, oldest first.
    pub fn take_cues(&mut self) -> Vec<Cue> {
        std::mem::take(&mut self.cues)
    }

    /// Starts a game in the given mode.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::NotWelcome`] unless the session is on the
    /// welcome screen.
    #[instrument(skip(self))]
    pub fn choose_mode(&mut self, mode: GameMode) -> Result<(), SessionError> {
        if self.phase != Phase::Welcome {
            warn!(phase = ?self.phase, "mode choice rejected");
            return Err(SessionError::NotWelcome);
        }
        info!(?mode, "starting game");
        self.mode = Some(mode);
        self.start_game();
        Ok(())
    }

    /// Attempts a human move at (row, col).
    ///
    /// On success the mark is placed, the board is evaluated, and either
    /// the turn flips or the session moves to the result phase.
    ///
    /// # Errors
    ///
    /// Rejected moves are no-ops; see [`MoveError`] for the kinds.
    #[instrument(skip(self), fields(player = %self.to_move))]
    pub fn attempt_move(&mut self, row: usize, col: usize) -> Result<(), MoveError> {
        if self.phase != Phase::Playing {
            debug!(phase = ?self.phase, "move rejected: not playing");
            return Err(MoveError::NotPlaying);
        }

        let pos = Position::from_row_col(row, col).ok_or(MoveError::OutOfBounds { row, col })?;

        if self.computer_turn_pending() {
            debug!(%pos, "move rejected: computer seat to move");
            return Err(MoveError::ComputerSeat);
        }

        let player = self.to_move;
        self.board
            .place(pos, player)
            .map_err(|PlaceError::SquareOccupied(pos)| MoveError::SquareOccupied(pos))?;

        self.cues.push(Cue::MovePlaced);
        debug!(%player, %pos, board = %self.board.display(), "mark placed");
        self.settle();
        Ok(())
    }

    /// True when the session is waiting on the computer seat to move.
    ///
    /// The shell polls this and calls [`Session::play_computer_move`]
    /// after its perceptibility pause.
    pub fn computer_turn_pending(&self) -> bool {
        self.phase == Phase::Playing
            && self.mode == Some(GameMode::VsComputer)
            && self.to_move == self.ai_seat
    }

    /// Produces and applies the computer's move via the selector.
    ///
    /// Returns the square that was played. The same evaluate-and-flip
    /// logic as a human move applies. Only human placements queue a
    /// placement cue; the computer's mark lands silently.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::NoComputerTurn`] when no computer turn is
    /// pending. The selector variants are invariant violations.
    #[instrument(skip(self))]
    pub fn play_computer_move(&mut self) -> Result<Position, SessionError> {
        if !self.computer_turn_pending() {
            warn!(phase = ?self.phase, "computer move requested out of turn");
            return Err(SessionError::NoComputerTurn);
        }

        let pos = selector::select_move(&self.board, self.ai_seat)?;
        self.board.place(pos, self.ai_seat)?;
        info!(seat = %self.ai_seat, %pos, "computer played");
        self.settle();
        Ok(pos)
    }

    /// Starts a fresh game in the same mode.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::NotResult`] unless a finished game is on
    /// screen.
    #[instrument(skip(self))]
    pub fn play_again(&mut self) -> Result<(), SessionError> {
        if self.phase != Phase::Result {
            warn!(phase = ?self.phase, "play-again rejected");
            return Err(SessionError::NotResult);
        }
        info!("restarting game");
        self.start_game();
        Ok(())
    }

    /// Discards the mode and returns to the welcome screen.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::NotResult`] unless a finished game is on
    /// screen.
    #[instrument(skip(self))]
    pub fn go_home(&mut self) -> Result<(), SessionError> {
        if self.phase != Phase::Result {
            warn!(phase = ?self.phase, "go-home rejected");
            return Err(SessionError::NotResult);
        }
        info!("returning to welcome screen");
        self.mode = None;
        self.board.reset();
        self.to_move = Player::X;
        self.outcome = Outcome::InProgress;
        self.phase = Phase::Welcome;
        Ok(())
    }

    /// Resets the board and turn for a new game in the current mode.
    fn start_game(&mut self) {
        self.board.reset();
        self.to_move = Player::X;
        self.outcome = Outcome::InProgress;
        self.phase = Phase::Playing;
    }

    /// Re-evaluates the board after a placement: queue terminal cues and
    /// freeze, or flip the turn.
    fn settle(&mut self) {
        self.outcome = rules::evaluate(&self.board);
        match self.outcome {
            Outcome::Win(winner, line) => {
                info!(%winner, ?line, "game won");
                self.cues.push(self.win_cue(winner));
                self.phase = Phase::Result;
            }
            Outcome::Draw => {
                info!("game drawn");
                self.cues.push(Cue::Tied);
                self.phase = Phase::Result;
            }
            Outcome::InProgress => {
                self.to_move = self.to_move.opponent();
            }
        }
    }

    /// Chooses between the victory and defeat cue for a winner.
    ///
    /// Vs the computer, the human winning is a victory and the computer
    /// seat winning is a defeat. In two-player games X winning reads as
    /// the victory sound and O as the defeat sound.
    fn win_cue(&self, winner: Player) -> Cue {
        match self.mode {
            Some(GameMode::VsComputer) if winner == self.ai_seat => Cue::Lost(winner),
            Some(GameMode::VsComputer) => Cue::Won(winner),
            _ => {
                if winner == Player::X {
                    Cue::Won(winner)
                } else {
                    Cue::Lost(winner)
                }
            }
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn moves_require_an_active_game() {
        let mut session = Session::new();
        assert_eq!(session.attempt_move(0, 0), Err(MoveError::NotPlaying));
        assert_eq!(session.phase(), Phase::Welcome);
    }

    #[test]
    fn out_of_bounds_is_rejected_before_the_board_is_touched() {
        let mut session = Session::new();
        session.choose_mode(GameMode::TwoPlayer).unwrap();

        let err = session.attempt_move(3, 1).unwrap_err();
        assert_eq!(err, MoveError::OutOfBounds { row: 3, col: 1 });
        assert_eq!(session.to_move(), Player::X);
        assert!(session.board().is_empty(Position::Center));
    }

    #[test]
    fn win_cue_follows_the_mode() {
        let mut session = Session::new();
        session.choose_mode(GameMode::TwoPlayer).unwrap();
        assert_eq!(session.win_cue(Player::X), Cue::Won(Player::X));
        assert_eq!(session.win_cue(Player::O), Cue::Lost(Player::O));

        let mut vs = Session::with_ai_seat(Player::X);
        vs.choose_mode(GameMode::VsComputer).unwrap();
        assert_eq!(vs.win_cue(Player::X), Cue::Lost(Player::X));
        assert_eq!(vs.win_cue(Player::O), Cue::Won(Player::O));
    }
}
