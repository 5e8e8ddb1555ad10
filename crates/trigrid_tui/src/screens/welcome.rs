//! Welcome screen — mode selection.

use crossterm::event::{KeyCode, KeyEvent};
use derive_getters::Getters;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};
use tracing::{info, instrument};
use trigrid_core::{GameMode, Session};

use crate::screen::{Screen, ScreenTransition};

/// Menu options on the welcome screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum WelcomeOption {
    TwoPlayer,
    Computer,
    Quit,
}

impl WelcomeOption {
    fn label(self) -> &'static str {
        match self {
            Self::TwoPlayer => "2 Player",
            Self::Computer => "Computer",
            Self::Quit => "Quit",
        }
    }

    fn all() -> &'static [WelcomeOption] {
        &[Self::TwoPlayer, Self::Computer, Self::Quit]
    }
}

/// State for the welcome screen.
#[derive(Debug, Getters)]
pub struct WelcomeScreen {
    list_state: ListState,
}

impl WelcomeScreen {
    /// Creates a new welcome screen with the first option selected.
    pub fn new() -> Self {
        let mut state = ListState::default();
        state.select(Some(0));
        Self { list_state: state }
    }

    fn select_previous(&mut self) {
        let count = WelcomeOption::all().len();
        let i = match self.list_state.selected() {
            Some(i) if i > 0 => i - 1,
            _ => count - 1,
        };
        self.list_state.select(Some(i));
    }

    fn select_next(&mut self) {
        let count = WelcomeOption::all().len();
        let i = match self.list_state.selected() {
            Some(i) => (i + 1) % count,
            None => 0,
        };
        self.list_state.select(Some(i));
    }

    fn selected_option(&self) -> WelcomeOption {
        let options = WelcomeOption::all();
        let idx = self.list_state.selected().unwrap_or(0);
        options[idx.min(options.len() - 1)]
    }
}

impl Screen for WelcomeScreen {
    fn render(&self, frame: &mut Frame, _session: &Session) {
        let area = frame.area();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(5),
                Constraint::Length(3),
            ])
            .split(area);

        let title = Paragraph::new("Let's Play Tic-Tac-Toe!")
            .style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(title, chunks[0]);

        let items: Vec<ListItem> = WelcomeOption::all()
            .iter()
            .map(|opt| ListItem::new(opt.label()))
            .collect();

        let menu = List::new(items)
            .block(Block::default().borders(Borders::ALL).title("Mode"))
            .highlight_style(
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("> ");

        let mut list_state = self.list_state.clone();
        frame.render_stateful_widget(menu, chunks[1], &mut list_state);

        let help = Paragraph::new("↑↓: Navigate | Enter: Select | q: Quit")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(help, chunks[2]);
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
                info!(option = ?option, "welcome option selected");
                match option {
                    WelcomeOption::TwoPlayer => {
                        ScreenTransition::StartGame(GameMode::TwoPlayer)
                    }
                    WelcomeOption::Computer => {
                        ScreenTransition::StartGame(GameMode::VsComputer)
                    }
                    WelcomeOption::Quit => ScreenTransition::Quit,
                }
            }
            KeyCode::Char('q') | KeyCode::Char('Q') => ScreenTransition::Quit,
            _ => ScreenTransition::Stay,
        }
    }
}
