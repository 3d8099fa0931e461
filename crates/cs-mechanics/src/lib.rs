//! Dice mechanics for combatsim.
//!
//! Provides dice pools and roll results, a pluggable
//! randomness source, and the ability-score pool rolled at character
//! creation (5d6, drop lowest and highest, six times).

pub mod dice;
pub mod error;
pub mod stat_pool;

pub use dice::{DicePool, DiceSource, RandomDice, RollResult, ScriptedDice};
pub use error::{MechError, MechResult};
pub use stat_pool::StatPool;
