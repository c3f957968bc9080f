//! Game rules and the session state machine

mod evaluator;
mod hint;
mod keyboard;
mod session;

pub use evaluator::{Evaluator, StandardEvaluator, evaluate};
pub use hint::{Cell, HintChoice, HintProvider, is_revealed};
pub use keyboard::KeyboardStates;
pub use session::{GameSession, GameStatus};
