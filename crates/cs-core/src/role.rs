//! Character classes.
//!
//! A class is chosen by name during creation and carries no stat changes.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::character::capitalize;
use crate::error::{CoreError, CoreResult};

/// A character class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    /// Raging melee warrior.
    Barbarian,
    /// Trained soldier.
    Fighter,
    /// Unarmed martial artist.
    Monk,
    /// Stealthy skirmisher.
    Rogue,
    /// Divine caster.
    Cleric,
    /// Nature caster.
    Druid,
    /// Holy warrior.
    Paladin,
    /// Performer and spellcaster.
    Bard,
    /// Psionic adept.
    Mystic,
    /// Innate caster.
    Sorcerer,
    /// Studied arcane caster.
    Wizard,
    /// Caster bound by a pact.
    Warlock,
    /// Magical inventor.
    Artificer,
    /// Wilderness scout.
    Ranger,
}

impl Role {
    /// All classes in menu order.
    pub const ALL: [Role; 14] = [
        Self::Barbarian,
        Self::Fighter,
        Self::Monk,
        Self::Rogue,
        Self::Cleric,
        Self::Druid,
        Self::Paladin,
        Self::Bard,
        Self::Mystic,
        Self::Sorcerer,
        Self::Wizard,
        Self::Warlock,
        Self::Artificer,
        Self::Ranger,
    ];

    /// Returns the display name of this class.
    pub fn name(self) -> &'static str {
        match self {
            Self::Barbarian => "Barbarian",
            Self::Fighter => "Fighter",
            Self::Monk => "Monk",
            Self::Rogue => "Rogue",
            Self::Cleric => "Cleric",
            Self::Druid => "Druid",
            Self::Paladin => "Paladin",
            Self::Bard => "Bard",
            Self::Mystic => "Mystic",
            Self::Sorcerer => "Sorcerer",
            Self::Wizard => "Wizard",
            Self::Warlock => "Warlock",
            Self::Artificer => "Artificer",
            Self::Ranger => "Ranger",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Role {
    type Err = CoreError;

    fn from_str(s: &str) -> CoreResult<Self> {
        let normalized = capitalize(s.trim());
        Self::ALL
            .into_iter()
            .find(|r| r.name() == normalized)
            .ok_or(CoreError::UnknownRole(normalized))
    }
}
