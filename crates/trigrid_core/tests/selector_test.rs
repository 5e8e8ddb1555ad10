//! Tests pinning down the selector's exact priority and scan order.

use trigrid_core::{Board, Player, Position, SelectError, select_move};

fn board(sketch: &str) -> Board {
    let mut board = Board::new();
    for (i, ch) in sketch.chars().filter(|c| !c.is_whitespace()).enumerate() {
        let pos = Position::from_index(i).expect("sketch longer than 9 cells");
        match ch {
            'X' => board.place(pos, Player::X).expect("duplicate cell in sketch"),
            'O' => board.place(pos, Player::O).expect("duplicate cell in sketch"),
            '.' => {}
            other => panic!("bad sketch char {other}"),
        }
    }
    board
}

#[test]
fn empty_board_takes_the_center() {
    // No win or block applies, so the center rule fires first.
    assert_eq!(select_move(&Board::new(), Player::O), Ok(Position::Center));
    assert_eq!(select_move(&Board::new(), Player::X), Ok(Position::Center));
}

#[test]
fn immediate_win_beats_blocking() {
    // X threatens (0,2), but O completing row 1 wins outright.
    let board = board("XX. OO. ...");
    assert_eq!(select_move(&board, Player::O), Ok(Position::MiddleRight));
}

#[test]
fn immediate_win_beats_every_fallback() {
    // O can win row 0 even though X also threatens row 1.
    let board = board("OO. XX. ...");
    assert_eq!(select_move(&board, Player::O), Ok(Position::TopRight));
}

#[test]
fn blocks_the_opponent_win() {
    // X threatens column 0 at (2,0). A selector that probed with its own
    // mark instead of the opponent's would drift to the (0,2) corner.
    let board = board("X.. XO. ...");
    assert_eq!(select_move(&board, Player::O), Ok(Position::BottomLeft));
}

#[test]
fn win_scan_is_row_major() {
    // O has two winning squares: row 0 at (0,2) and column 0 at (2,0).
    // Row-major scan finds (0,2) first.
    let board = board("OO. OXX .XX");
    assert_eq!(select_move(&board, Player::O), Ok(Position::TopRight));
}

#[test]
fn takes_center_when_no_tactics_apply() {
    let board = board("X.. ...... ");
    assert_eq!(select_move(&board, Player::O), Ok(Position::Center));
}

#[test]
fn corners_are_scanned_in_fixed_order() {
    // Center taken, no threats on the board: first free corner is (0,2)
    // because (0,0) is occupied.
    let board = board("X.. .O. ..X");
    assert_eq!(select_move(&board, Player::O), Ok(Position::TopRight));
}

#[test]
fn edges_are_scanned_in_fixed_order() {
    // Center and corners all occupied, no win or block available; the
    // top edge is taken, so the left edge (1,0) is next.
    let board = board("XOX .X. OXO");
    assert_eq!(select_move(&board, Player::O), Ok(Position::MiddleLeft));
}

#[test]
fn full_board_reports_no_legal_move() {
    let board = board("XOX XXO OXO");
    assert_eq!(select_move(&board, Player::O), Err(SelectError::BoardFull));
}

#[test]
fn chosen_square_is_always_empty() {
    // A mid-game position: whatever fires, the result must be playable.
    let board = board("XO. .X. ..O");
    for seat in [Player::X, Player::O] {
        let pos = select_move(&board, seat).expect("board has empty squares");
        assert!(board.is_empty(pos), "selector chose occupied {pos}");
    }
}
