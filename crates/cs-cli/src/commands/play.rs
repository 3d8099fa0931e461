use std::io;

use colored::Colorize;

use cs_creation::{CreationConfig, CreationSession, MenuOutcome};

pub fn run(config: &CreationConfig, json: bool) -> Result<(), String> {
    println!("{}", super::ticker().dimmed());

    let outcome = {
        let stdin = io::stdin();
        let mut session = CreationSession::new(stdin.lock(), io::stdout(), config);
        session.run_menu().map_err(|e| e.to_string())?
    };

    match outcome {
        MenuOutcome::Created(character) => super::show_character(&character, json),
        MenuOutcome::Load => {
            println!("  {}", "No saved characters to load.".yellow());
            Ok(())
        }
        MenuOutcome::Quit => Ok(()),
    }
}
