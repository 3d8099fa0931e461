//! Playable races and the bonus table applied after stat allocation.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::attribute::Attribute;
use crate::character::capitalize;
use crate::error::{CoreError, CoreResult};

/// A playable race.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Race {
    /// +1 to every attribute.
    Human,
    /// +2 Dexterity.
    Elf,
    /// +2 Constitution.
    Dwarf,
    /// +2 Dexterity.
    Halfling,
}

const HUMAN_BONUSES: [(Attribute, u32); 6] = [
    (Attribute::Strength, 1),
    (Attribute::Dexterity, 1),
    (Attribute::Constitution, 1),
    (Attribute::Intelligence, 1),
    (Attribute::Wisdom, 1),
    (Attribute::Charisma, 1),
];

impl Race {
    /// All races in menu order.
    pub const ALL: [Race; 4] = [Self::Human, Self::Elf, Self::Dwarf, Self::Halfling];

    /// Returns the display name of this race.
    pub fn name(self) -> &'static str {
        match self {
            Self::Human => "Human",
            Self::Elf => "Elf",
            Self::Dwarf => "Dwarf",
            Self::Halfling => "Halfling",
        }
    }

    /// The additive attribute bonuses granted by this race.
    pub fn bonuses(self) -> &'static [(Attribute, u32)] {
        match self {
            Self::Human => &HUMAN_BONUSES,
            Self::Elf | Self::Halfling => &[(Attribute::Dexterity, 2)],
            Self::Dwarf => &[(Attribute::Constitution, 2)],
        }
    }
}

impl std::fmt::Display for Race {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Race {
    type Err = CoreError;

    /// Parse a race name after normalizing it to capitalized form.
    fn from_str(s: &str) -> CoreResult<Self> {
        let normalized = capitalize(s.trim());
        Self::ALL
            .into_iter()
            .find(|r| r.name() == normalized)
            .ok_or(CoreError::UnknownRace(normalized))
    }
}
