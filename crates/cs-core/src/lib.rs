//! Core character types for combatsim.
//!
//! Provides the six fixed attributes and their score block, the playable
//! races with their bonus table, the class list, and the finished
//! character record produced by the creation flow.

pub mod attribute;
pub mod character;
pub mod error;
pub mod race;
pub mod role;

pub use attribute::{Attribute, Stats};
pub use character::{Age, Character, Sex, capitalize};
pub use error::{CoreError, CoreResult};
pub use race::Race;
pub use role::Role;
