//! Core domain types
//!
//! Letters, words and guess evaluation. Everything here is pure and
//! independent of any game session state.

mod feedback;
mod letter;
mod locale;
mod word;

pub use feedback::{Feedback, Mark, yellow_budget};
pub use letter::{CharacterUnit, canonical};
pub use locale::{GameLocale, LetterMode, UnknownLocale};
pub use word::{WORD_LENGTH, Word, WordError};
