//! The finished character record.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::attribute::Stats;
use crate::error::{CoreError, CoreResult};
use crate::race::Race;
use crate::role::Role;

const DIVIDER: &str = "-------------------------------";

/// A character's sex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sex {
    /// Entered as `M`.
    Male,
    /// Entered as `F`.
    Female,
}

impl std::fmt::Display for Sex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Male => write!(f, "Male"),
            Self::Female => write!(f, "Female"),
        }
    }
}

impl FromStr for Sex {
    type Err = CoreError;

    /// Parse `M`/`F` (either case), as typed at the prompt.
    fn from_str(s: &str) -> CoreResult<Self> {
        match s.trim() {
            "M" | "m" => Ok(Self::Male),
            "F" | "f" => Ok(Self::Female),
            other => Err(CoreError::InvalidSex(other.to_string())),
        }
    }
}

/// A character's age, kept as the digit string the player typed.
///
/// Nothing in character creation does arithmetic on age, so the text is
/// stored as-is.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Age(String);

impl Age {
    /// Create an age from a string of ASCII digits.
    pub fn new(digits: impl Into<String>) -> CoreResult<Self> {
        let digits = digits.into();
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(CoreError::InvalidAge(digits));
        }
        Ok(Self(digits))
    }

    /// The age text exactly as entered.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Age {
    type Error = CoreError;

    fn try_from(value: String) -> CoreResult<Self> {
        Self::new(value)
    }
}

impl From<Age> for String {
    fn from(age: Age) -> Self {
        age.0
    }
}

impl std::fmt::Display for Age {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A player character.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Character {
    /// Character name.
    pub name: String,
    /// Sex chosen at creation.
    pub sex: Sex,
    /// Age as entered, digits only.
    pub age: Age,
    /// Experience level; new characters start at 1.
    pub level: u32,
    /// Race; its bonuses are already in `stats`.
    pub race: Race,
    /// The character's class.
    pub role: Role,
    /// Ability scores, race bonuses included.
    pub stats: Stats,
    /// Carried items. Always empty at creation.
    pub equipment: Vec<String>,
}

impl Character {
    /// Create a level-1 character with no equipment.
    pub fn new(
        name: impl Into<String>,
        sex: Sex,
        age: Age,
        race: Race,
        role: Role,
        stats: Stats,
    ) -> Self {
        Self {
            name: name.into(),
            sex,
            age,
            level: 1,
            race,
            role,
            stats,
            equipment: Vec::new(),
        }
    }
}

impl std::fmt::Display for Character {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{DIVIDER}")?;
        writeln!(f, "{}", self.name)?;
        writeln!(f, "Age: {}", self.age)?;
        writeln!(f, "Sex: {}", self.sex)?;
        writeln!(f, "{DIVIDER}")?;
        writeln!(f, "Level: {}", self.level)?;
        writeln!(f, "Race:  {}", self.race)?;
        writeln!(f, "Class: {}", self.role)?;
        writeln!(f, "{DIVIDER}")?;
        for (attribute, value) in self.stats.iter() {
            writeln!(f, "\t{:<15}{value}", format!("{attribute}:"))?;
        }
        Ok(())
    }
}

/// Upper-case the first character and lower-case the rest.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}
