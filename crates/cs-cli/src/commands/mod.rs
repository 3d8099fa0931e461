pub mod new;
pub mod play;
pub mod roll;

use colored::Colorize;

use cs_core::Character;

/// Timestamp printed when a session starts.
fn ticker() -> String {
    chrono::Local::now().format("%Y.%m.%d-%H%M%S").to_string()
}

/// Print a finished character as a sheet or as JSON.
fn show_character(character: &Character, json: bool) -> Result<(), String> {
    if json {
        let text = serde_json::to_string_pretty(character).map_err(|e| e.to_string())?;
        println!("{text}");
    } else {
        println!();
        print!("{character}");
        println!("  {} {}", "Created".green().bold(), character.name.bold());
    }
    Ok(())
}
