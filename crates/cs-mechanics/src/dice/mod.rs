//! Dice pools, roll results, and randomness sources.

pub mod pool;
pub mod roll;
pub mod source;

pub use pool::DicePool;
pub use roll::RollResult;
pub use source::{DiceSource, RandomDice, ScriptedDice};
