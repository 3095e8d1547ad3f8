//! Rolled dice pools.

use serde::{Deserialize, Serialize};

use super::roller::Roller;

/// The face values of a rolled pool, kept in ascending order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DicePool {
    values: Vec<u32>,
}

impl DicePool {
    /// Roll `count` dice with `sides` sides each.
    pub fn roll(roller: &mut impl Roller, sides: u32, count: usize) -> Self {
        let values = (0..count).map(|_| roller.roll_die(sides)).collect();
        Self::from_values(values)
    }

    /// Build a pool from already-known face values.
    pub fn from_values(mut values: Vec<u32>) -> Self {
        values.sort_unstable();
        Self { values }
    }

    /// Return a new pool with `extra` dice added, re-sorted.
    pub fn with_bonus(&self, extra: impl IntoIterator<Item = u32>) -> Self {
        let mut values = self.values.clone();
        values.extend(extra);
        Self::from_values(values)
    }

    /// The face values in ascending order.
    pub fn values(&self) -> &[u32] {
        &self.values
    }

    /// Iterate over the face values.
    pub fn iter(&self) -> impl Iterator<Item = u32> + '_ {
        self.values.iter().copied()
    }

    /// Number of dice in the pool.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if the pool has no dice.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// How many dice show exactly `face`.
    pub fn count_of(&self, face: u32) -> u32 {
        self.values.iter().filter(|&&v| v == face).count() as u32
    }

    /// Count dice with values at or above the given threshold.
    pub fn count_at_or_above(&self, threshold: u32) -> u32 {
        self.values.iter().filter(|&&v| v >= threshold).count() as u32
    }

    /// Returns true if any die shows `face`.
    pub fn contains(&self, face: u32) -> bool {
        self.values.contains(&face)
    }
}

impl std::fmt::Display for DicePool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let values: Vec<String> = self.values.iter().map(u32::to_string).collect();
        write!(f, "{}", values.join(", "))
    }
}
