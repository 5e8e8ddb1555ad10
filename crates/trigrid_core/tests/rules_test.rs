//! Tests for win/draw evaluation and its scan-order tie-break.

use trigrid_core::{Board, Line, LineKind, Outcome, Player, Position, evaluate};

/// Builds a board from a 9-char row-major sketch: 'X', 'O', or '.'.
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
fn each_line_orientation_is_detected() {
    let cases = [
        ("XXX ...... ", Line { kind: LineKind::Row, index: 0 }),
        ("... XXX ...", Line { kind: LineKind::Row, index: 1 }),
        ("... ... XXX", Line { kind: LineKind::Row, index: 2 }),
        ("X.. X.. X..", Line { kind: LineKind::Column, index: 0 }),
        (".X. .X. .X.", Line { kind: LineKind::Column, index: 1 }),
        ("..X ..X ..X", Line { kind: LineKind::Column, index: 2 }),
        ("X.. .X. ..X", Line { kind: LineKind::MainDiagonal, index: 0 }),
        ("..X .X. X..", Line { kind: LineKind::AntiDiagonal, index: 0 }),
    ];

    for (sketch, line) in cases {
        assert_eq!(
            evaluate(&board(sketch)),
            Outcome::Win(Player::X, line),
            "sketch {sketch:?}"
        );
    }
}

#[test]
fn in_progress_until_three_in_a_row() {
    // X at (0,0), O center, X at (0,1): nobody has a line yet.
    let board = board("XX. .O. ...");
    assert_eq!(evaluate(&board), Outcome::InProgress);
}

#[test]
fn full_board_without_a_line_is_a_draw() {
    let board = board("XOX XXO OXO");
    assert_eq!(evaluate(&board), Outcome::Draw);
}

#[test]
fn win_takes_priority_over_a_full_board() {
    // Row 0 is X's and every square is occupied.
    let board = board("XXX XOO OXO");
    assert_eq!(
        evaluate(&board),
        Outcome::Win(Player::X, Line { kind: LineKind::Row, index: 0 })
    );
}

#[test]
fn double_line_reports_the_row_before_the_column() {
    // X owns both row 0 and column 0; the row is earlier in scan order.
    let board = board("XXX XOO XO.");
    assert_eq!(
        evaluate(&board),
        Outcome::Win(Player::X, Line { kind: LineKind::Row, index: 0 })
    );
}

#[test]
fn double_line_reports_the_column_before_the_diagonal() {
    // X owns column 0 and the main diagonal; no row is complete.
    let board = board("XOO XXO XOX");
    assert_eq!(
        evaluate(&board),
        Outcome::Win(Player::X, Line { kind: LineKind::Column, index: 0 })
    );
}

#[test]
fn double_diagonal_reports_the_main_diagonal_first() {
    // X on all corners and the center wins both diagonals.
    let board = board("XOX OXO XOX");
    assert_eq!(
        evaluate(&board),
        Outcome::Win(Player::X, Line { kind: LineKind::MainDiagonal, index: 0 })
    );
}

#[test]
fn winning_line_cells_cover_the_reported_line() {
    let outcome = evaluate(&board("... XXX ..."));
    let line = outcome.winning_line().expect("row 1 is won");
    assert_eq!(
        line.cells(),
        [Position::MiddleLeft, Position::Center, Position::MiddleRight]
    );
}

#[test]
fn outcome_serialises_for_the_shell() {
    let outcome = evaluate(&board("XXX ...... "));
    let json = serde_json::to_string(&outcome).expect("outcome serialises");
    assert!(json.contains("Win"));
    assert!(json.contains("Row"));
}
