//! Terminal output formatting
//!
//! Board, keyboard and result printing for the CLI.

pub mod display;
pub mod formatters;

pub use display::{
    print_board, print_check_result, print_history, print_outcome, print_schedule_report,
};
