//! Rounds: selecting a riddle and judging the answer.
//!
//! - `RoundSelector`: samples unseen cards and a word unique to one of them
//! - `AnswerValidator`: checks a 1-based card index against that word

pub mod selector;
pub mod validator;

pub use selector::{RoundResult, RoundSelector};
pub use validator::{AnswerValidator, Outcome};
