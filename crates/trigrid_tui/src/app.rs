//! The event loop driving the welcome/playing/result screen flow.

use crossterm::event::{self, Event, KeyEventKind};
use ratatui::{Terminal, backend::Backend};
use tokio::time::{Duration, sleep};
use tracing::{debug, info, instrument, warn};
use trigrid_core::{Phase, Player, Session};

use crate::chime::Chime;
use crate::screen::{Screen, ScreenTransition};
use crate::screens::{GameScreen, ResultScreen, WelcomeScreen};

/// Pause before each computer move so it reads as a turn, not a glitch.
const COMPUTER_MOVE_DELAY: Duration = Duration::from_millis(300);

/// Active screen in the flow.
#[derive(Debug)]
enum ActiveScreen {
    Welcome(WelcomeScreen),
    Game(GameScreen),
    Result(ResultScreen),
}

/// Application state: the one session plus the cue player.
pub struct App {
    session: Session,
    chime: Chime,
}

impl App {
    /// Creates the app with the computer playing the given seat.
    pub fn new(ai_seat: Player) -> Self {
        Self {
            session: Session::with_ai_seat(ai_seat),
            chime: Chime::new(),
        }
    }

    /// Runs the event loop until the user quits.
    #[instrument(skip(self, terminal))]
    pub async fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> anyhow::Result<()>
    where
        <B as Backend>::Error: Send + Sync + 'static,
    {
        info!("starting event loop");

        let mut screen = ActiveScreen::Welcome(WelcomeScreen::new());

        loop {
            terminal.draw(|f| match &screen {
                ActiveScreen::Welcome(s) => s.render(f, &self.session),
                ActiveScreen::Game(s) => s.render(f, &self.session),
                ActiveScreen::Result(s) => s.render(f, &self.session),
            })?;

            // The computer's turn: pause for perceptibility, then let the
            // session produce and apply the move.
            if self.session.computer_turn_pending() {
                sleep(COMPUTER_MOVE_DELAY).await;
                let pos = self.session.play_computer_move()?;
                debug!(%pos, "computer moved");
                self.drain_cues();
                screen = self.sync_screen(screen);
                continue;
            }

            // Poll for input with a short timeout to keep the loop alive.
            if event::poll(Duration::from_millis(100))?
                && let Event::Key(key) = event::read()?
            {
                // Skip key release events (crossterm fires both).
                if key.kind == KeyEventKind::Release {
                    continue;
                }

                let transition = match &mut screen {
                    ActiveScreen::Welcome(s) => s.handle_key(key, &self.session),
                    ActiveScreen::Game(s) => s.handle_key(key, &self.session),
                    ActiveScreen::Result(s) => s.handle_key(key, &self.session),
                };

                screen = match self.apply_transition(transition, screen) {
                    Some(next) => next,
                    None => {
                        info!("quitting");
                        return Ok(());
                    }
                };
            }

            sleep(Duration::from_millis(10)).await;
        }
    }

    /// Applies a screen transition, returning the next screen or `None`
    /// to quit. Session rejections are logged and leave the screen as-is.
    #[instrument(skip(self, current))]
    fn apply_transition(
        &mut self,
        transition: ScreenTransition,
        current: ActiveScreen,
    ) -> Option<ActiveScreen> {
        match transition {
            ScreenTransition::Stay => Some(current),

            ScreenTransition::StartGame(mode) => {
                if let Err(e) = self.session.choose_mode(mode) {
                    warn!(error = %e, "mode choice rejected");
                    return Some(current);
                }
                info!(?mode, "game started");
                Some(ActiveScreen::Game(GameScreen::new()))
            }

            ScreenTransition::PlaceAt { row, col } => {
                match self.session.attempt_move(row, col) {
                    Ok(()) => self.drain_cues(),
                    // Rejected moves (occupied square, wrong seat) are
                    // silently ignored.
                    Err(e) => debug!(row, col, error = %e, "move rejected"),
                }
                Some(self.sync_screen(current))
            }

            ScreenTransition::PlayAgain => {
                if let Err(e) = self.session.play_again() {
                    warn!(error = %e, "play-again rejected");
                    return Some(current);
                }
                Some(ActiveScreen::Game(GameScreen::new()))
            }

            ScreenTransition::GoHome => {
                if let Err(e) = self.session.go_home() {
                    warn!(error = %e, "go-home rejected");
                    return Some(current);
                }
                Some(ActiveScreen::Welcome(WelcomeScreen::new()))
            }

            ScreenTransition::Quit => None,
        }
    }

    /// Swaps the active screen when the session phase has moved on, e.g.
    /// after a game-ending move.
    fn sync_screen(&self, current: ActiveScreen) -> ActiveScreen {
        match (self.session.phase(), current) {
            (Phase::Result, ActiveScreen::Game(_)) => {
                info!(outcome = ?self.session.outcome(), "game over");
                ActiveScreen::Result(ResultScreen::new())
            }
            (_, current) => current,
        }
    }

    /// Drains queued cues into the terminal bell.
    fn drain_cues(&mut self) {
        for cue in self.session.take_cues() {
            if let Err(e) = self.chime.play(cue) {
                warn!(error = %e, "failed to play cue");
            }
        }
    }
}
