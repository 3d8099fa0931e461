//! The pool of rolled ability scores a new character draws from.
//!
//! Each score is the sum of the middle three of five d6, so every value
//! lies in 3..=18. The pool is rolled once and then consumed one value per
//! attribute until empty.

use tracing::debug;

use crate::dice::{DicePool, DiceSource};
use crate::error::MechResult;

/// Number of scores in a freshly rolled pool.
pub const POOL_SIZE: usize = 6;

/// Faces on each die rolled for a score.
pub const DIE_SIDES: u32 = 6;

/// Dice rolled for each score before the extremes are dropped.
pub const DICE_PER_SCORE: usize = 5;

/// Rolled ability scores awaiting assignment.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StatPool {
    values: Vec<u32>,
}

impl StatPool {
    /// Roll a new pool of [`POOL_SIZE`] scores, sorted ascending.
    pub fn generate<S: DiceSource + ?Sized>(source: &mut S) -> MechResult<Self> {
        let dice = DicePool::new(DIE_SIDES, DICE_PER_SCORE);
        let mut values = Vec::with_capacity(POOL_SIZE);
        for _ in 0..POOL_SIZE {
            let roll = dice.roll(source);
            let score = roll.sum_dropping_extremes()?;
            debug!(dice = ?roll.sorted_values(), score, "rolled ability score");
            values.push(score);
        }
        values.sort_unstable();
        Ok(Self { values })
    }

    /// Wrap already-known scores, keeping their order.
    pub fn from_values(values: Vec<u32>) -> Self {
        Self { values }
    }

    /// The scores still available.
    pub fn values(&self) -> &[u32] {
        &self.values
    }

    /// Returns true once every score has been taken.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Remove one instance of `value` from the pool.
    ///
    /// Only the first matching entry is removed, so duplicate scores stay
    /// available for later attributes.
    pub fn take(&mut self, value: u32) -> Option<u32> {
        let index = self.values.iter().position(|&v| v == value)?;
        Some(self.values.remove(index))
    }

    /// Sum of the scores left.
    pub fn total(&self) -> u32 {
        self.values.iter().sum()
    }
}

impl std::fmt::Display for StatPool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let values: Vec<String> = self.values.iter().map(u32::to_string).collect();
        write!(f, "[{}]", values.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dice::{RandomDice, ScriptedDice};
    use proptest::prelude::*;

    #[test]
    fn generate_from_script() {
        #[rustfmt::skip]
        let faces = vec![
            1, 3, 3, 3, 6, // 9
            6, 5, 5, 6, 1, // 16
            1, 4, 4, 4, 6, // 12
            2, 3, 3, 4, 6, // 10
            1, 5, 5, 5, 6, // 15
            1, 4, 5, 5, 6, // 14
        ];
        let mut dice = ScriptedDice::new(faces).unwrap();
        let pool = StatPool::generate(&mut dice).unwrap();
        assert_eq!(pool.values(), &[9, 10, 12, 14, 15, 16]);
        assert_eq!(dice.rolled(), 30);
    }

    /// Records every batch request and answers each die with a 3.
    #[derive(Default)]
    struct BatchLog {
        batches: Vec<(u32, usize)>,
    }

    impl DiceSource for BatchLog {
        fn roll_die(&mut self, _sides: u32) -> u32 {
            panic!("scores are rolled as whole batches");
        }

        fn roll(&mut self, sides: u32, count: usize) -> Vec<u32> {
            self.batches.push((sides, count));
            vec![3; count]
        }
    }

    #[test]
    fn each_score_is_one_batch_of_five_d6() {
        let mut log = BatchLog::default();
        let pool = StatPool::generate(&mut log).unwrap();
        assert_eq!(log.batches, vec![(6, 5); POOL_SIZE]);
        assert_eq!(pool.values(), &[9; POOL_SIZE]);
    }

    #[test]
    fn take_removes_one_instance() {
        let mut pool = StatPool::from_values(vec![10, 12, 12, 15]);
        assert_eq!(pool.take(12), Some(12));
        assert_eq!(pool.values(), &[10, 12, 15]);
        assert_eq!(pool.take(12), Some(12));
        assert_eq!(pool.values(), &[10, 15]);
        assert_eq!(pool.take(12), None);
        assert_eq!(pool.values().len(), 2);
    }

    #[test]
    fn take_missing_leaves_pool_unchanged() {
        let mut pool = StatPool::from_values(vec![8, 13]);
        assert_eq!(pool.take(9), None);
        assert_eq!(pool.values(), &[8, 13]);
    }

    #[test]
    fn drained_pool_is_empty() {
        let mut pool = StatPool::from_values(vec![7, 7]);
        pool.take(7);
        pool.take(7);
        assert!(pool.is_empty());
        assert_eq!(pool.total(), 0);
    }

    #[test]
    fn display() {
        assert_eq!(StatPool::from_values(vec![9, 11]).to_string(), "[9, 11]");
        assert_eq!(StatPool::default().to_string(), "[]");
    }

    proptest! {
        #[test]
        fn generated_scores_are_in_range(seed in any::<u64>()) {
            let pool = StatPool::generate(&mut RandomDice::seeded(seed)).unwrap();
            prop_assert_eq!(pool.values().len(), POOL_SIZE);
            prop_assert!(pool.values().iter().all(|v| (3..=18).contains(v)));
            prop_assert!(pool.values().windows(2).all(|w| w[0] <= w[1]));
        }

        #[test]
        fn draining_in_any_order_conserves_total(seed in any::<u64>(), picks in prop::collection::vec(0usize..6, 6)) {
            let mut pool = StatPool::generate(&mut RandomDice::seeded(seed)).unwrap();
            let original = pool.total();
            let mut assigned = 0;
            for pick in picks {
                let value = pool.values()[pick % pool.values().len()];
                assigned += pool.take(value).unwrap();
            }
            prop_assert!(pool.is_empty());
            prop_assert_eq!(assigned, original);
        }
    }
}
