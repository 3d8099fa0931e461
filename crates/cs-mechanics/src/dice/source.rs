//! Sources of die faces.
//!
//! Rolling goes through [`DiceSource`] so that creation can run against
//! real randomness or a fixed script of faces.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::{MechError, MechResult};

/// Something that can produce uniformly distributed die faces.
pub trait DiceSource {
    /// Roll one die with the given number of sides, returning 1..=sides.
    fn roll_die(&mut self, sides: u32) -> u32;

    /// Roll `count` independent dice with the given number of sides.
    fn roll(&mut self, sides: u32, count: usize) -> Vec<u32> {
        (0..count).map(|_| self.roll_die(sides)).collect()
    }
}

/// Dice backed by a seedable standard RNG.
#[derive(Debug, Clone)]
pub struct RandomDice {
    rng: StdRng,
}

impl RandomDice {
    /// Dice with a fixed seed, for reproducible rolls.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Dice seeded from the operating system's entropy source.
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Seeded dice when a seed is given, entropy otherwise.
    pub fn new(seed: Option<u64>) -> Self {
        seed.map_or_else(Self::from_entropy, Self::seeded)
    }
}

impl DiceSource for RandomDice {
    fn roll_die(&mut self, sides: u32) -> u32 {
        self.rng.random_range(1..=sides.max(1))
    }
}

/// Dice that replay a fixed sequence of faces, wrapping around at the end.
///
/// Faces larger than the die being rolled are clamped to its top face.
#[derive(Debug, Clone)]
pub struct ScriptedDice {
    faces: Vec<u32>,
    cursor: usize,
}

impl ScriptedDice {
    /// Create a script from a non-empty list of faces, each at least 1.
    pub fn new(faces: Vec<u32>) -> MechResult<Self> {
        if faces.is_empty() {
            return Err(MechError::EmptyScript);
        }
        if let Some(&zero) = faces.iter().find(|&&f| f == 0) {
            return Err(MechError::InvalidFace(zero));
        }
        Ok(Self { faces, cursor: 0 })
    }

    /// How many faces have been handed out so far.
    pub fn rolled(&self) -> usize {
        self.cursor
    }
}

impl DiceSource for ScriptedDice {
    fn roll_die(&mut self, sides: u32) -> u32 {
        let face = self.faces[self.cursor % self.faces.len()];
        self.cursor += 1;
        face.min(sides.max(1))
    }
}
