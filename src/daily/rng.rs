//! Deterministic seeded index generation
//!
//! A seed string is hashed with 32-bit FNV-1a and the hash seeds a mulberry32
//! generator. Every step uses `u32` wrapping arithmetic so the same seed yields
//! the same index on every platform; historical daily answers depend on it.

/// FNV-1a 32-bit offset basis
pub const FNV_OFFSET_BASIS: u32 = 0x811C_9DC5;

/// FNV-1a 32-bit prime
pub const FNV_PRIME: u32 = 0x0100_0193;

/// Hash a string with 32-bit FNV-1a over its Unicode scalar values
///
/// # Examples
/// ```
/// use wordle_daily::daily::fnv1a_32;
///
/// assert_eq!(fnv1a_32(""), 0x811C_9DC5);
/// assert_eq!(fnv1a_32("a"), 0xE40C_292C);
/// ```
#[must_use]
pub fn fnv1a_32(input: &str) -> u32 {
    input.chars().fold(FNV_OFFSET_BASIS, |hash, ch| {
        (hash ^ u32::from(ch)).wrapping_mul(FNV_PRIME)
    })
}

/// mulberry32 pseudo-random generator with a single 32-bit state word
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mulberry32 {
    state: u32,
}

impl Mulberry32 {
    const INCREMENT: u32 = 0x6D2B_79F5;

    #[must_use]
    pub const fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    /// Advance the state and return the next raw 32-bit output
    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_add(Self::INCREMENT);
        let mut t = self.state;
        t = (t ^ (t >> 15)).wrapping_mul(t | 1);
        t ^= t.wrapping_add((t ^ (t >> 7)).wrapping_mul(t | 61));
        t ^ (t >> 14)
    }

    /// Next value in `[0, 1)`
    pub fn next_f64(&mut self) -> f64 {
        f64::from(self.next_u32()) / 4_294_967_296.0
    }
}

/// Map a seed string to an index in `[0, upper)`
///
/// Fully deterministic. `upper` of 0 or 1 always yields 0.
///
/// # Examples
/// ```
/// use wordle_daily::daily::seeded_index;
///
/// let a = seeded_index("2024-01-01:5:6", 2315);
/// assert_eq!(a, seeded_index("2024-01-01:5:6", 2315));
/// assert!(a < 2315);
/// assert_eq!(seeded_index("anything", 1), 0);
/// ```
#[must_use]
pub fn seeded_index(seed: &str, upper: usize) -> usize {
    if upper <= 1 {
        return 0;
    }

    let mut rng = Mulberry32::new(fnv1a_32(seed));
    let index = (rng.next_f64() * upper as f64).floor() as usize;

    // next_f64 < 1.0, so this only guards float rounding on huge bounds
    index.min(upper - 1)
}
