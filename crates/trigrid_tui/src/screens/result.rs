//! Result screen — frozen board, winning line, play-again/home menu.

use crossterm::event::{KeyCode, KeyEvent};
use derive_getters::Getters;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};
use tracing::{info, instrument};
use trigrid_core::{Outcome, Session};

use crate::board_widget;
use crate::screen::{Screen, ScreenTransition};

/// Menu options on the result screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ResultOption {
    PlayAgain,
    Home,
}

impl ResultOption {
    fn label(self) -> &'static str {
        match self {
            Self::PlayAgain => "Play Again",
            Self::Home => "Home",
        }
    }

    fn all() -> &'static [ResultOption] {
        &[Self::PlayAgain, Self::Home]
    }
}

/// State for the result screen.
#[derive(Debug, Getters)]
pub struct ResultScreen {
    list_state: ListState,
}

impl ResultScreen {
    /// Creates a result screen with "Play Again" selected.
    pub fn new() -> Self {
        let mut state = ListState::default();
        state.select(Some(0));
        Self { list_state: state }
    }

    fn select_previous(&mut self) {
        let count = ResultOption::all().len();
        let i = match self.list_state.selected() {
            Some(i) if i > 0 => i - 1,
            _ => count - 1,
        };
        self.list_state.select(Some(i));
    }

    fn select_next(&mut self) {
        let count = ResultOption::all().len();
        let i = match self.list_state.selected() {
            Some(i) => (i + 1) % count,
            None => 0,
        };
        self.list_state.select(Some(i));
    }

    fn selected_option(&self) -> ResultOption {
        let options = ResultOption::all();
        let idx = self.list_state.selected().unwrap_or(0);
        options[idx.min(options.len() - 1)]
    }

    fn message(session: &Session) -> String {
        match session.outcome() {
            Outcome::Win(player, _) => format!("{player} Wins!"),
            Outcome::Draw => "It's a Tie!".to_string(),
            Outcome::InProgress => "Game over".to_string(),
        }
    }
}

impl Screen for ResultScreen {
    fn render(&self, frame: &mut Frame, session: &Session) {
        let area = frame.area();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(11),
                Constraint::Length(4),
                Constraint::Length(3),
            ])
            .split(area);

        let title = Paragraph::new(Self::message(session))
            .style(
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(title, chunks[0]);

        let winning = session.outcome().winning_line().map(|line| line.cells());
        board_widget::draw_board(frame, chunks[1], session.board(), None, winning);

        let items: Vec<ListItem> = ResultOption::all()
            .iter()
            .map(|opt| ListItem::new(opt.label()))
            .collect();

        let menu = List::new(items)
            .block(Block::default().borders(Borders::ALL))
            .highlight_style(
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("> ");

        let mut list_state = self.list_state.clone();
        frame.render_stateful_widget(menu, chunks[2], &mut list_state);

        let help = Paragraph::new("↑↓: Navigate | Enter: Select | q: Quit")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(help, chunks[3]);
    }

    #[instrument(skip(self, key, _session))]
    fn handle_key(&mut self, key: KeyEvent, _session: &Session) -> ScreenTransition {
        match key.code {
            KeyCode::Up => {
                self.select_previous();
                ScreenTransition::Stay
            }
            KeyCode::Down => {
                self.select_next();
                ScreenTransition::Stay
            }
            KeyCode::Enter => {
                let option = self.selected_option();
                info!(option = ?option, "result option selected");
                match option {
                    ResultOption::PlayAgain => ScreenTransition::PlayAgain,
                    ResultOption::Home => ScreenTransition::GoHome,
                }
            }
            KeyCode::Char('q') | KeyCode::Char('Q') => ScreenTransition::Quit,
            _ => ScreenTransition::Stay,
        }
    }
}
