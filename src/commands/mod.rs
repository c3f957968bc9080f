//! Command implementations

pub mod check;
pub mod play;
pub mod schedule;

pub use check::{CheckResult, check_guess};
pub use play::{PlayInput, run_play};
pub use schedule::{ScheduleEntry, ScheduleReport, build_schedule};
