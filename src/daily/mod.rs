//! Daily answer selection
//!
//! A seed string built from date, length and row count is hashed and fed to a
//! small PRNG to index into the answer list.

mod rng;
mod selector;

pub use rng::{FNV_OFFSET_BASIS, FNV_PRIME, Mulberry32, fnv1a_32, seeded_index};
pub use selector::{WordSelector, daily_seed};
