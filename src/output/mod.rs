//! Terminal output formatting
//!
//! Colored boards, keyboards and reports for the CLI.

pub mod display;
pub mod formatters;

pub use display::{
    print_audit, print_board, print_check, print_keyboard, print_share, print_stats, print_sync,
    print_today,
};
