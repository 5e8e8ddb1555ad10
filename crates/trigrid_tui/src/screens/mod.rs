//! Screens of the welcome/playing/result flow.

mod game;
mod result;
mod welcome;

pub use game::GameScreen;
pub use result::ResultScreen;
pub use welcome::WelcomeScreen;
