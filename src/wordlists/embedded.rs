//! Embedded word lists
//!
//! Word lists compiled into the binary at build time, one answers list and one
//! accepted-guesses list per supported length.

// Include generated word lists from build script
include!(concat!(env!("OUT_DIR"), "/wordlists.rs"));

/// Bundled answers for a word length; empty for unsupported lengths
#[must_use]
pub fn answers(length: usize) -> &'static [&'static str] {
    match length {
        4 => ANSWERS_4,
        5 => ANSWERS_5,
        6 => ANSWERS_6,
        7 => ANSWERS_7,
        _ => &[],
    }
}

/// Bundled accepted guesses for a word length; empty for unsupported lengths
#[must_use]
pub fn allowed(length: usize) -> &'static [&'static str] {
    match length {
        4 => ALLOWED_4,
        5 => ALLOWED_5,
        6 => ALLOWED_6,
        7 => ALLOWED_7,
        _ => &[],
    }
}
