//! Game screen — the board with a keyboard cursor.

use crossterm::event::{KeyCode, KeyEvent};
use derive_getters::Getters;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};
use tracing::debug;
use trigrid_core::{GameMode, Position, Session};

use crate::board_widget;
use crate::screen::{Screen, ScreenTransition};

/// State for the game screen.
#[derive(Debug, Getters)]
pub struct GameScreen {
    cursor: Position,
}

impl GameScreen {
    /// Creates a game screen with the cursor on the center square.
    pub fn new() -> Self {
        Self {
            cursor: Position::Center,
        }
    }

    /// Moves the cursor by one cell, clamped to the board.
    fn move_cursor(&mut self, d_row: isize, d_col: isize) {
        let row = self.cursor.row() as isize + d_row;
        let col = self.cursor.col() as isize + d_col;
        let row = row.clamp(0, 2) as usize;
        let col = col.clamp(0, 2) as usize;
        if let Some(pos) = Position::from_row_col(row, col) {
            self.cursor = pos;
        }
    }

    fn status_line(session: &Session) -> String {
        if session.computer_turn_pending() {
            format!("Computer ({}) is thinking...", session.ai_seat())
        } else if session.mode() == Some(GameMode::VsComputer) {
            format!("Your turn ({})", session.to_move())
        } else {
            format!("{}'s turn", session.to_move())
        }
    }
}

impl Screen for GameScreen {
    fn render(&self, frame: &mut Frame, session: &Session) {
        let area = frame.area();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(11),
                Constraint::Length(3),
            ])
            .split(area);

        let title = Paragraph::new("Trigrid - Tic-Tac-Toe")
            .style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center);
        frame.render_widget(title, chunks[0]);

        board_widget::draw_board(frame, chunks[1], session.board(), Some(self.cursor), None);

        let status = Paragraph::new(format!(
            "{}   |   ↑↓←→ move, Enter place, 1-9 cell, q quit",
            Self::status_line(session)
        ))
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
        frame.render_widget(status, chunks[2]);
    }

    fn handle_key(&mut self, key: KeyEvent, _session: &Session) -> ScreenTransition {
        match key.code {
            KeyCode::Up => {
                self.move_cursor(-1, 0);
                ScreenTransition::Stay
            }
            KeyCode::Down => {
                self.move_cursor(1, 0);
                ScreenTransition::Stay
            }
            KeyCode::Left => {
                self.move_cursor(0, -1);
                ScreenTransition::Stay
            }
            KeyCode::Right => {
                self.move_cursor(0, 1);
                ScreenTransition::Stay
            }
            KeyCode::Enter | KeyCode::Char(' ') => ScreenTransition::PlaceAt {
                row: self.cursor.row(),
                col: self.cursor.col(),
            },
            KeyCode::Char(c) if c.is_ascii_digit() => {
                // 1-9 addresses cells directly, row-major from top-left.
                match c
                    .to_digit(10)
                    .and_then(|d| (d as usize).checked_sub(1))
                    .and_then(Position::from_index)
                {
                    Some(pos) => {
                        debug!(%pos, "digit shortcut");
                        self.cursor = pos;
                        ScreenTransition::PlaceAt {
                            row: pos.row(),
                            col: pos.col(),
                        }
                    }
                    None => ScreenTransition::Stay,
                }
            }
            KeyCode::Char('q') | KeyCode::Char('Q') => ScreenTransition::Quit,
            _ => ScreenTransition::Stay,
        }
    }
}
