//! Sources of die results.

use rand::Rng;

/// Produces a single uniformly distributed die result.
pub trait Roller {
    /// Roll one die, returning a value in `[1, sides]`.
    fn roll_die(&mut self, sides: u32) -> u32;
}

/// A [`Roller`] backed by any `rand` generator.
#[derive(Debug, Clone)]
pub struct RngRoller<R> {
    rng: R,
}

impl<R: Rng> RngRoller<R> {
    /// Wrap a random number generator.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> Roller for RngRoller<R> {
    fn roll_die(&mut self, sides: u32) -> u32 {
        self.rng.random_range(1..=sides.max(1))
    }
}

/// A [`Roller`] that replays predetermined results in order.
///
/// Wraps around when the queue is exhausted. Values are clamped into
/// `[1, sides]` so a fixed roll can never break the pool invariant.
#[derive(Debug, Clone, Default)]
pub struct FixedRoller {
    values: Vec<u32>,
    next: usize,
}

impl FixedRoller {
    /// Create a roller that yields `values` in order.
    pub fn new(values: impl IntoIterator<Item = u32>) -> Self {
        Self {
            values: values.into_iter().collect(),
            next: 0,
        }
    }

    /// Number of results handed out so far.
    pub fn rolls_made(&self) -> usize {
        self.next
    }
}

impl Roller for FixedRoller {
    fn roll_die(&mut self, sides: u32) -> u32 {
        let sides = sides.max(1);
        if self.values.is_empty() {
            self.next += 1;
            return 1;
        }
        let value = self.values[self.next % self.values.len()];
        self.next += 1;
        value.clamp(1, sides)
    }
}
