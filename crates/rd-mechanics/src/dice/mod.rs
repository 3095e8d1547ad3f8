//! Dice types, pools, and rolling.
//!
//! Every system here rolls either d10 pools (ORE, OWoD) or a single
//! percentile die (Dark Heresy). Randomness comes from a [`Roller`], so
//! matchers and resolvers can be driven by fixed values in tests.

pub mod pool;
pub mod roller;

pub use pool::DicePool;
pub use roller::{FixedRoller, RngRoller, Roller};

use serde::{Deserialize, Serialize};

/// A die type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Die {
    /// Ten-sided die.
    D10,
    /// Percentile die (1-100).
    D100,
}

impl Die {
    /// Returns the number of sides on this die.
    pub fn sides(self) -> u32 {
        match self {
            Self::D10 => 10,
            Self::D100 => 100,
        }
    }
}

/// Roll `count` dice of `sides` sides.
///
/// Results lie in `[1, sides]`; a pool of more than one die comes back
/// sorted ascending.
pub fn roll(roller: &mut impl Roller, sides: u32, count: usize) -> DicePool {
    DicePool::roll(roller, sides, count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn die_sides() {
        assert_eq!(Die::D10.sides(), 10);
        assert_eq!(Die::D100.sides(), 100);
    }

    #[test]
    fn single_die_is_still_a_pool() {
        let mut roller = FixedRoller::new([7]);
        let pool = roll(&mut roller, 10, 1);
        assert_eq!(pool.values(), &[7]);
    }

    proptest! {
        #[test]
        fn rolled_values_stay_in_range(sides in 1u32..=100, count in 1usize..=20, seed: u64) {
            let mut roller = RngRoller::new(StdRng::seed_from_u64(seed));
            let pool = roll(&mut roller, sides, count);
            prop_assert_eq!(pool.len(), count);
            prop_assert!(pool.iter().all(|v| (1..=sides).contains(&v)));
        }

        #[test]
        fn multi_die_pools_are_sorted(sides in 1u32..=100, count in 2usize..=20, seed: u64) {
            let mut roller = RngRoller::new(StdRng::seed_from_u64(seed));
            let pool = roll(&mut roller, sides, count);
            prop_assert!(pool.values().windows(2).all(|w| w[0] <= w[1]));
        }
    }
}
