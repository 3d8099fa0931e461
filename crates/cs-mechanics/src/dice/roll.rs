//! Dice roll results.

use crate::error::{MechError, MechResult};

/// The faces shown by one roll of a dice pool.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RollResult {
    /// Die faces in the order they were rolled.
    pub values: Vec<u32>,
}

impl RollResult {
    /// Die values sorted ascending.
    pub fn sorted_values(&self) -> Vec<u32> {
        let mut values = self.values.clone();
        values.sort_unstable();
        values
    }

    /// Sum after discarding one lowest and one highest die.
    pub fn sum_dropping_extremes(&self) -> MechResult<u32> {
        let sorted = self.sorted_values();
        if sorted.len() < 3 {
            return Err(MechError::TooFewDice(sorted.len()));
        }
        Ok(sorted[1..sorted.len() - 1].iter().sum())
    }
}
