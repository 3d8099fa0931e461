use colored::Colorize;

use cs_mechanics::{RandomDice, StatPool};

/// Roll a pool the same way character creation does and print it.
pub fn run(seed: Option<u64>) -> Result<(), String> {
    let pool = StatPool::generate(&mut RandomDice::new(seed)).map_err(|e| e.to_string())?;
    println!("Your skill scores: {pool}");
    println!("  {} {}", "total".dimmed(), pool.total());
    Ok(())
}
