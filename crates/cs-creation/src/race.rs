//! Race selection.

use std::io::{BufRead, Write};

use tracing::debug;

use cs_core::{Race, Stats};

use crate::error::CreationResult;
use crate::prompt::{Pattern, Prompter};

/// The race menu as shown before the prompt.
pub fn race_list() -> String {
    let mut text = String::from("Available races:");
    for race in Race::ALL {
        text.push_str("\n\t");
        text.push_str(race.name());
    }
    text
}

/// Ask for a race and add its bonuses to `stats`.
///
/// An unknown race name is re-asked with the race list shown again. The
/// bonuses are applied once, after a valid race has been chosen.
pub fn resolve_race<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    stats: &mut Stats,
) -> CreationResult<Race> {
    prompter.say(race_list())?;
    let race = prompter.ask("Select a race: ", Pattern::Alpha, |text| {
        text.parse::<Race>()
            .map_err(|_| format!("Select a race from the list\n{}", race_list()))
    })?;

    stats.apply_race(race);
    debug!(%race, bonuses = ?race.bonuses(), "applied race bonuses");
    Ok(race)
}
