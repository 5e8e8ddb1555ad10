//! Heuristic move selection for the computer opponent.
//!
//! The selector is intentionally a fixed-priority heuristic, not a
//! minimax player. It looks exactly one move ahead: take an immediate
//! win, block an immediate opponent win, then fall back to center,
//! corners, and edges in a fixed scan order. It can be beaten.

use crate::position::Position;
use crate::rules::{Outcome, evaluate};
use crate::types::{Board, Player};
use tracing::{debug, instrument};

/// Error returned when the selector has no square to play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum SelectError {
    /// Every square is occupied. The session guards against calling the
    /// selector in this state, so hitting it means a caller bug.
    #[display("no empty square remains on the board")]
    BoardFull,
}

impl std::error::Error for SelectError {}

/// Picks the next move for `seat` on the given board.
///
/// Priority, each rule scanning squares in row-major order:
///
/// 1. Win now: the first empty square where `seat`'s own mark completes
///    a line.
/// 2. Block: the first empty square where the *opponent's* mark would
///    complete a line. The probe places the opponent's symbol, not
///    `seat`'s.
/// 3. Center, if empty.
/// 4. First empty corner: top-left, top-right, bottom-left, bottom-right.
/// 5. First empty edge midpoint: top, left, right, bottom.
///
/// # Errors
///
/// Returns [`SelectError::BoardFull`] if no empty square exists.
#[instrument(skip(board))]
pub fn select_move(board: &Board, seat: Player) -> Result<Position, SelectError> {
    if board.is_full() {
        return Err(SelectError::BoardFull);
    }

    if let Some(pos) = winning_square(board, seat) {
        debug!(%seat, %pos, "taking immediate win");
        return Ok(pos);
    }

    if let Some(pos) = winning_square(board, seat.opponent()) {
        debug!(%seat, %pos, "blocking opponent win");
        return Ok(pos);
    }

    if board.is_empty(Position::Center) {
        debug!(%seat, "taking center");
        return Ok(Position::Center);
    }

    for pos in Position::CORNERS {
        if board.is_empty(pos) {
            debug!(%seat, %pos, "taking corner");
            return Ok(pos);
        }
    }

    for pos in Position::EDGES {
        if board.is_empty(pos) {
            debug!(%seat, %pos, "taking edge");
            return Ok(pos);
        }
    }

    // Center, corners, and edges cover all nine squares; unreachable on a
    // non-full board.
    Err(SelectError::BoardFull)
}

/// First empty square, in row-major order, where placing `player`'s mark
/// would win the game for `player`.
fn winning_square(board: &Board, player: Player) -> Option<Position> {
    Position::valid_moves(board).into_iter().find(|&pos| {
        matches!(
            evaluate(&board.with_mark(pos, player)),
            Outcome::Win(winner, _) if winner == player
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_board_yields_center() {
        let board = Board::new();
        assert_eq!(select_move(&board, Player::O), Ok(Position::Center));
    }

    #[test]
    fn full_board_is_an_error() {
        let mut board = Board::new();
        let marks = [
            Player::X,
            Player::O,
            Player::X,
            Player::X,
            Player::O,
            Player::O,
            Player::O,
            Player::X,
            Player::X,
        ];
        for (pos, player) in Position::ALL.into_iter().zip(marks) {
            board.place(pos, player).unwrap();
        }
        assert_eq!(select_move(&board, Player::O), Err(SelectError::BoardFull));
    }
}
