//! Dice pool construction and rolling.

use super::roll::RollResult;
use super::source::DiceSource;

/// A number of identical dice rolled together.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DicePool {
    sides: u32,
    count: usize,
}

impl DicePool {
    /// A pool of `count` dice with `sides` faces each.
    pub fn new(sides: u32, count: usize) -> Self {
        Self { sides, count }
    }

    /// Roll every die in the pool with one draw from the source.
    pub fn roll<S: DiceSource + ?Sized>(&self, source: &mut S) -> RollResult {
        RollResult {
            values: source.roll(self.sides, self.count),
        }
    }
}
