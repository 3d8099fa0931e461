//! Interactive character creation.
//!
//! Every answer goes through a [`Prompter`], which re-asks until the text
//! matches its [`Pattern`]. On top of that sit the stat allocator (assign
//! each rolled score to one attribute), the race and class pickers, and
//! [`CreationSession`], which runs the whole flow behind a
//! New/Load/Quit menu.

pub mod allocator;
pub mod config;
pub mod error;
pub mod prompt;
pub mod race;
pub mod role;
pub mod session;

pub use config::CreationConfig;
pub use error::{CreationError, CreationResult};
pub use prompt::{Pattern, Prompter};
pub use session::{CreationSession, MenuOutcome};
