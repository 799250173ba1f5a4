//! Game session state
//!
//! Rows, keyboard hints, hard-mode rules and the turn that ties them
//! together. Everything here is plain data; hosts drive it with letters and
//! submissions.

pub mod hard_mode;
mod hints;
mod rejection;
mod row;
mod turn;

pub use hard_mode::{Constraints, rows_follow_hard_mode};
pub use hints::{KeyHint, KeyboardHints};
pub use rejection::Rejection;
pub use row::{GuessRow, submitted_rows};
pub use turn::{MAX_ROWS, TurnState, TurnStatus};
