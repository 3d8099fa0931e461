//! The six fixed attributes and the score block that holds them.

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::race::Race;

/// One of the six ability scores every character has.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Attribute {
    /// Physical power.
    Strength,
    /// Agility and reflexes.
    Dexterity,
    /// Endurance and health.
    Constitution,
    /// Reasoning and memory.
    Intelligence,
    /// Perception and insight.
    Wisdom,
    /// Force of personality.
    Charisma,
}

impl Attribute {
    /// All attributes in the order they are assigned and displayed.
    pub const ALL: [Attribute; 6] = [
        Self::Strength,
        Self::Dexterity,
        Self::Constitution,
        Self::Intelligence,
        Self::Wisdom,
        Self::Charisma,
    ];

    /// Returns the display name of this attribute.
    pub fn name(self) -> &'static str {
        match self {
            Self::Strength => "Strength",
            Self::Dexterity => "Dexterity",
            Self::Constitution => "Constitution",
            Self::Intelligence => "Intelligence",
            Self::Wisdom => "Wisdom",
            Self::Charisma => "Charisma",
        }
    }
}

impl std::fmt::Display for Attribute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A complete block of six ability scores.
///
/// Every attribute always has exactly one value; the only way to build a
/// block from loose assignments is [`Stats::from_assignments`], which
/// rejects missing and duplicated attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Stats {
    /// Strength score.
    pub strength: u32,
    /// Dexterity score.
    pub dexterity: u32,
    /// Constitution score.
    pub constitution: u32,
    /// Intelligence score.
    pub intelligence: u32,
    /// Wisdom score.
    pub wisdom: u32,
    /// Charisma score.
    pub charisma: u32,
}

impl Stats {
    /// Build a score block from `(attribute, value)` pairs.
    ///
    /// Each of the six attributes must appear exactly once.
    pub fn from_assignments<I>(assignments: I) -> CoreResult<Self>
    where
        I: IntoIterator<Item = (Attribute, u32)>,
    {
        let mut slots: [Option<u32>; 6] = [None; 6];
        for (attribute, value) in assignments {
            let slot = &mut slots[index_of(attribute)];
            if slot.is_some() {
                return Err(CoreError::DuplicateAttribute(attribute));
            }
            *slot = Some(value);
        }

        let mut stats = Self::default();
        for attribute in Attribute::ALL {
            let value =
                slots[index_of(attribute)].ok_or(CoreError::MissingAttribute(attribute))?;
            *stats.get_mut(attribute) = value;
        }
        Ok(stats)
    }

    /// Get the score for an attribute.
    pub fn get(&self, attribute: Attribute) -> u32 {
        match attribute {
            Attribute::Strength => self.strength,
            Attribute::Dexterity => self.dexterity,
            Attribute::Constitution => self.constitution,
            Attribute::Intelligence => self.intelligence,
            Attribute::Wisdom => self.wisdom,
            Attribute::Charisma => self.charisma,
        }
    }

    /// Get a mutable reference to the score for an attribute.
    pub fn get_mut(&mut self, attribute: Attribute) -> &mut u32 {
        match attribute {
            Attribute::Strength => &mut self.strength,
            Attribute::Dexterity => &mut self.dexterity,
            Attribute::Constitution => &mut self.constitution,
            Attribute::Intelligence => &mut self.intelligence,
            Attribute::Wisdom => &mut self.wisdom,
            Attribute::Charisma => &mut self.charisma,
        }
    }

    /// Iterate over `(attribute, score)` in display order.
    pub fn iter(&self) -> impl Iterator<Item = (Attribute, u32)> + '_ {
        Attribute::ALL.into_iter().map(move |a| (a, self.get(a)))
    }

    /// Sum of all six scores.
    pub fn total(&self) -> u32 {
        self.iter().map(|(_, v)| v).sum()
    }

    /// Add a race's bonuses to these scores.
    ///
    /// Applying twice adds the bonuses twice; the creation flow calls this
    /// once, after the base scores are assigned.
    pub fn apply_race(&mut self, race: Race) {
        for &(attribute, bonus) in race.bonuses() {
            *self.get_mut(attribute) += bonus;
        }
    }
}

fn index_of(attribute: Attribute) -> usize {
    match attribute {
        Attribute::Strength => 0,
        Attribute::Dexterity => 1,
        Attribute::Constitution => 2,
        Attribute::Intelligence => 3,
        Attribute::Wisdom => 4,
        Attribute::Charisma => 5,
    }
}
