//! Word lists and dictionary lookups
//!
//! English lists are embedded at build time; other locales load theirs from
//! disk through [`loader`].

mod answers;
mod embedded;
pub mod loader;
mod tree;
mod validator;

pub use answers::{AnswerPool, DEFAULT_SEED};
pub use embedded::{ANSWERS, ANSWERS_COUNT, GUESSES, GUESSES_COUNT};
pub use tree::WordTree;
pub use validator::{Validator, WordBank};
