//! Command implementations

pub mod audit;
pub mod check;
pub mod play;
pub mod sync;
pub mod today;

pub use audit::{AuditReport, audit_lists};
pub use check::{CheckResult, check_guess};
pub use play::{Session, SessionError, run_play};
pub use sync::{SyncReport, sync_stores};
pub use today::{TodayInfo, today};
