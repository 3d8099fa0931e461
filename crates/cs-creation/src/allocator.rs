//! Assigning rolled scores to attributes.
//!
//! The player picks which pool value goes to each attribute, in the fixed
//! attribute order. A picked value leaves the pool, so after six picks the
//! pool is empty and every rolled score has been used exactly once.

use std::io::{BufRead, Write};

use tracing::debug;

use cs_core::{Attribute, Stats};
use cs_mechanics::StatPool;

use crate::error::{CreationError, CreationResult};
use crate::prompt::{Pattern, Prompter};

/// Show the pool and ask for a value for each attribute in turn.
pub fn allocate_stats<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    mut pool: StatPool,
) -> CreationResult<Stats> {
    prompter.say(format_args!(
        "Your skill scores:\n\t{pool}\nAssign your base stats:"
    ))?;

    let mut assignments = Vec::with_capacity(Attribute::ALL.len());
    for attribute in Attribute::ALL {
        let value = assign(prompter, attribute, &mut pool)?;
        assignments.push((attribute, value));
    }

    Stats::from_assignments(assignments).map_err(CreationError::from)
}

/// Ask for one pool value for `attribute` and remove it from the pool.
///
/// Answers that are not in the pool are re-asked with the remaining
/// choices listed. When a value appears more than once only one copy is
/// taken.
pub fn assign<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    attribute: Attribute,
    pool: &mut StatPool,
) -> CreationResult<u32> {
    if pool.is_empty() {
        return Err(CreationError::PoolExhausted(attribute));
    }

    let prompt = format!("\t{attribute}: ");
    let value = prompter.ask(&prompt, Pattern::Integer, |text| {
        match text.parse::<u32>().ok().and_then(|v| pool.take(v)) {
            Some(v) => Ok(v),
            None => Err(format!("Select a value from the list\n\t{pool}")),
        }
    })?;

    debug!(%attribute, value, remaining = %pool, "assigned score");
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompt::tests::{scripted, transcript};

    #[test]
    fn assigns_in_attribute_order() {
        let mut p = scripted(&["12", "9", "15", "10", "14", "16"]);
        let pool = StatPool::from_values(vec![9, 10, 12, 14, 15, 16]);
        let stats = allocate_stats(&mut p, pool).unwrap();
        assert_eq!(stats.strength, 12);
        assert_eq!(stats.dexterity, 9);
        assert_eq!(stats.constitution, 15);
        assert_eq!(stats.intelligence, 10);
        assert_eq!(stats.wisdom, 14);
        assert_eq!(stats.charisma, 16);

        let out = transcript(&p);
        assert!(out.starts_with("Your skill scores:\n\t[9, 10, 12, 14, 15, 16]\n"));
        assert!(out.contains("\tStrength: "));
        assert!(out.contains("\tCharisma: "));
    }

    #[test]
    fn value_not_in_pool_is_reasked() {
        let mut p = scripted(&["18", "12"]);
        let mut pool = StatPool::from_values(vec![8, 12]);
        let value = assign(&mut p, Attribute::Wisdom, &mut pool).unwrap();
        assert_eq!(value, 12);
        assert_eq!(pool.values(), &[8]);

        let out = transcript(&p);
        assert_eq!(out.matches("\tWisdom: ").count(), 2);
        assert!(out.contains("Select a value from the list\n\t[8, 12]"));
    }

    #[test]
    fn non_numeric_answer_gets_integer_hint() {
        let mut p = scripted(&["twelve", "8"]);
        let mut pool = StatPool::from_values(vec![8]);
        assert_eq!(assign(&mut p, Attribute::Strength, &mut pool).unwrap(), 8);
        assert!(transcript(&p).contains("Enter only numbers."));
    }

    #[test]
    fn duplicates_are_consumed_one_at_a_time() {
        let mut p = scripted(&["11", "11", "11", "11", "7", "11", "9"]);
        let pool = StatPool::from_values(vec![7, 9, 11, 11, 11, 11]);
        let stats = allocate_stats(&mut p, pool).unwrap();
        assert_eq!(stats.strength, 11);
        assert_eq!(stats.dexterity, 11);
        assert_eq!(stats.constitution, 11);
        assert_eq!(stats.intelligence, 11);
        assert_eq!(stats.wisdom, 7);
        // fifth 11 is rejected, the pool only had four
        assert_eq!(stats.charisma, 9);
        assert!(transcript(&p).contains("Select a value from the list\n\t[9]"));
    }

    #[test]
    fn assigned_total_matches_pool_total() {
        let pool = StatPool::from_values(vec![3, 8, 8, 13, 17, 18]);
        let expected = pool.total();
        let mut p = scripted(&["18", "3", "8", "17", "8", "13"]);
        let stats = allocate_stats(&mut p, pool).unwrap();
        assert_eq!(stats.total(), expected);
    }

    #[test]
    fn empty_pool_is_an_error() {
        let mut p = scripted(&["5"]);
        let mut pool = StatPool::default();
        let err = assign(&mut p, Attribute::Charisma, &mut pool).unwrap_err();
        assert!(matches!(err, CreationError::PoolExhausted(Attribute::Charisma)));
    }

    #[test]
    fn short_pool_runs_out() {
        let mut p = scripted(&["10", "11"]);
        let pool = StatPool::from_values(vec![10, 11]);
        let err = allocate_stats(&mut p, pool).unwrap_err();
        assert!(matches!(err, CreationError::PoolExhausted(Attribute::Constitution)));
    }
}
