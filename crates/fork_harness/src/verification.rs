//! Assertions over fork listings.
//!
//! Scenario checks are boundary checks over the materialized listing: the
//! expected `owner/repo` identifier must (or must not) appear among the
//! listed full names. Failures fail the scenario, not the process.

use anyhow::Result;
use github_client::models::Repository;

#[cfg(test)]
#[path = "verification_tests.rs"]
mod tests;

/// Asserts that `expected_full_name` appears among the listed forks.
///
/// # Errors
///
/// Returns an error naming the expected identifier and the full names that
/// were actually listed.
pub fn assert_fork_listed(forks: &[Repository], expected_full_name: &str) -> Result<()> {
    if forks.iter().any(|f| f.full_name() == expected_full_name) {
        return Ok(());
    }

    Err(anyhow::anyhow!(
        "Expected fork {} in listing, but the {} listed forks were: [{}]",
        expected_full_name,
        forks.len(),
        listed_names(forks)
    ))
}

/// Asserts that `full_name` does not appear among the listed forks.
///
/// Used to verify teardown took effect: a deleted fork must be absent from
/// subsequent listings.
///
/// # Errors
///
/// Returns an error when the identifier is still present.
pub fn assert_fork_absent(forks: &[Repository], full_name: &str) -> Result<()> {
    if forks.iter().all(|f| f.full_name() != full_name) {
        return Ok(());
    }

    Err(anyhow::anyhow!(
        "Fork {} is still present in the listing after deletion",
        full_name
    ))
}

fn listed_names(forks: &[Repository]) -> String {
    forks
        .iter()
        .map(|f| f.full_name())
        .collect::<Vec<_>>()
        .join(", ")
}
