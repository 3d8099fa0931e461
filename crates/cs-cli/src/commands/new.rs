use std::io;

use cs_creation::{CreationConfig, CreationSession};

pub fn run(config: &CreationConfig, json: bool) -> Result<(), String> {
    let character = {
        let stdin = io::stdin();
        let mut session = CreationSession::new(stdin.lock(), io::stdout(), config);
        session.create_character().map_err(|e| e.to_string())?
    };
    super::show_character(&character, json)
}
