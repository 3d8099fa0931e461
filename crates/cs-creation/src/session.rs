//! The creation flow and the menu in front of it.

use std::io::{BufRead, Write};

use tracing::info;

use cs_core::{Age, Character, Sex};
use cs_mechanics::{DiceSource, RandomDice, StatPool};

use crate::allocator::allocate_stats;
use crate::config::CreationConfig;
use crate::error::CreationResult;
use crate::prompt::{Pattern, Prompter};
use crate::race::resolve_race;
use crate::role::resolve_role;

/// What the player chose at the main menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuOutcome {
    /// A new character was created.
    Created(Character),
    /// The player asked to load a saved character.
    Load,
    /// The player quit.
    Quit,
}

/// An interactive character-creation session.
pub struct CreationSession<R, W, S = RandomDice> {
    prompter: Prompter<R, W>,
    dice: S,
}

impl<R: BufRead, W: Write> CreationSession<R, W> {
    /// Create a session that rolls with an RNG built from `config`.
    pub fn new(input: R, output: W, config: &CreationConfig) -> Self {
        Self::with_dice(input, output, RandomDice::new(config.seed), config)
    }
}

impl<R: BufRead, W: Write, S: DiceSource> CreationSession<R, W, S> {
    /// Create a session that rolls with the given dice.
    pub fn with_dice(input: R, output: W, dice: S, config: &CreationConfig) -> Self {
        let prompter = Prompter::new(input, output).with_max_retries(config.max_retries);
        Self { prompter, dice }
    }

    #[cfg(test)]
    pub(crate) fn prompter(&self) -> &Prompter<R, W> {
        &self.prompter
    }

    /// Ask New/Load/Quit and act on the answer.
    pub fn run_menu(&mut self) -> CreationResult<MenuOutcome> {
        let choice = self
            .prompter
            .validate("(N)ew, (L)oad, (Q)uit: ", Pattern::Menu)?
            .to_lowercase();

        match choice.as_str() {
            "n" => self.create_character().map(MenuOutcome::Created),
            "l" => {
                self.prompter.say("Loading. . .")?;
                Ok(MenuOutcome::Load)
            }
            _ => {
                self.prompter.say("There are other worlds than these")?;
                Ok(MenuOutcome::Quit)
            }
        }
    }

    /// Walk through name, sex, stats, race, age and class.
    pub fn create_character(&mut self) -> CreationResult<Character> {
        self.prompter.say("Creating new game. . .\n")?;

        let name = self.prompter.validate("Your name: ", Pattern::Alpha)?;
        let sex = self
            .prompter
            .ask("(M)ale or (F)emale: ", Pattern::Sex, |text| {
                text.parse::<Sex>().map_err(|e| e.to_string())
            })?;

        let pool = StatPool::generate(&mut self.dice)?;
        let mut stats = allocate_stats(&mut self.prompter, pool)?;
        let race = resolve_race(&mut self.prompter, &mut stats)?;

        let age = self.prompter.ask("Age: ", Pattern::Integer, |text| {
            Age::new(text).map_err(|e| e.to_string())
        })?;
        let role = resolve_role(&mut self.prompter)?;

        let character = Character::new(name, sex, age, race, role, stats);
        info!(
            name = %character.name,
            race = %character.race,
            role = %character.role,
            "character created"
        );
        Ok(character)
    }
}
