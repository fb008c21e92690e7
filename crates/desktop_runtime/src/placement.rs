//! Injectable placement jitter for newly opened windows.

use std::fmt;

use rand::{rngs::StdRng, Rng, SeedableRng};

/// Source of the random offset added to the base position of a new window.
pub trait LayoutJitter: fmt::Debug + Send {
    /// Returns `(dx, dy)` with `0 <= dx < max_x` and `0 <= dy < max_y` (or 0 for an empty range).
    fn next_offset(&mut self, max_x: i32, max_y: i32) -> (i32, i32);
}

/// Seedable pseudo-random jitter. Two instances with the same seed place windows identically.
#[derive(Debug, Clone)]
pub struct SeededJitter {
    rng: StdRng,
}

impl SeededJitter {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    fn sample(&mut self, max: i32) -> i32 {
        if max <= 0 {
            return 0;
        }
        self.rng.random_range(0..max)
    }
}

impl LayoutJitter for SeededJitter {
    fn next_offset(&mut self, max_x: i32, max_y: i32) -> (i32, i32) {
        let dx = self.sample(max_x);
        let dy = self.sample(max_y);
        (dx, dy)
    }
}

/// Constant offset, for callers that need exact placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FixedJitter {
    pub dx: i32,
    pub dy: i32,
}

impl FixedJitter {
    pub fn new(dx: i32, dy: i32) -> Self {
        Self { dx, dy }
    }
}

impl LayoutJitter for FixedJitter {
    fn next_offset(&mut self, _max_x: i32, _max_y: i32) -> (i32, i32) {
        (self.dx, self.dy)
    }
}
