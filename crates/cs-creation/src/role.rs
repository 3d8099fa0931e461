//! Class selection.

use std::io::{BufRead, Write};

use cs_core::Role;

use crate::error::CreationResult;
use crate::prompt::{Pattern, Prompter};

const ROLES_PER_ROW: usize = 4;
const COLUMN_WIDTH: usize = 12;

/// The class menu, four names to a row.
pub fn role_grid() -> String {
    let mut text = String::from("Available classes:");
    for row in Role::ALL.chunks(ROLES_PER_ROW) {
        let cells: String = row
            .iter()
            .map(|role| format!("{:<width$}", role.name(), width = COLUMN_WIDTH))
            .collect();
        text.push_str("\n\t");
        text.push_str(cells.trim_end());
    }
    text
}

/// Ask for a class by name.
///
/// Unlike race selection, a miss does not show the grid again.
pub fn resolve_role<R: BufRead, W: Write>(prompter: &mut Prompter<R, W>) -> CreationResult<Role> {
    prompter.say(role_grid())?;
    prompter.ask("Select a class: ", Pattern::Alpha, |text| {
        text.parse::<Role>()
            .map_err(|_| "Select a class from the list".to_string())
    })
}
