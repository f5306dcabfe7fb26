//! Fork lifecycle scenario runner.
//!
//! A scenario is setup → act → assert → teardown: create a fork, list the
//! upstream's forks newest-first, run the caller's check against the
//! listing, then delete the fork again. Ambient configuration is captured
//! before setup and restored on every exit path via a drop guard, so a
//! failing assertion or an unwinding check cannot leak configuration state.

use anyhow::{Context, Result};
use config_store::SnapshotGuard;
use github_client::models::Repository;
use github_client::{ForkClient, ForkSort, ForkTarget};
use tracing::info;

use crate::fixtures::ForkFixture;
use crate::utils::TestConfig;

/// Runs one fork lifecycle scenario against the given client.
///
/// # Arguments
///
/// * `client` - The API client to run the scenario against.
/// * `config` - Scenario configuration; `config.config_path`, when set,
///   names the ambient settings file to snapshot around the scenario.
/// * `target` - The namespace the fork should land in.
/// * `check` - Assertion over the newest-first fork listing and the created
///   fork. An `Err` fails the scenario but does not skip teardown.
///
/// # Errors
///
/// Returns the first of: snapshot capture failure, fork creation failure,
/// listing failure, or the check's own error. Teardown (fork deletion and
/// configuration restore) runs for all of these except snapshot capture
/// failure, where nothing has been created yet.
pub async fn run_fork_scenario<F>(
    client: &dyn ForkClient,
    config: &TestConfig,
    target: ForkTarget,
    check: F,
) -> Result<()>
where
    F: FnOnce(&[Repository], &Repository) -> Result<()>,
{
    let _guard = match &config.config_path {
        Some(path) => Some(
            SnapshotGuard::capture(path).context("Failed to snapshot ambient configuration")?,
        ),
        None => None,
    };

    info!(
        upstream = config.upstream_full_name(),
        target = ?target,
        "Starting fork lifecycle scenario"
    );

    let mut fixture = ForkFixture::create(
        client,
        &config.upstream_owner,
        &config.upstream_repo,
        target,
    )
    .await?;

    let listing = client
        .list_forks(
            &config.upstream_owner,
            &config.upstream_repo,
            ForkSort::Newest,
        )
        .await;

    let outcome = match listing {
        Ok(forks) => check(&forks, fixture.fork()),
        Err(e) => Err(anyhow::Error::new(e).context("Failed to list forks during scenario")),
    };

    // Teardown runs whether the check passed or not; the snapshot guard
    // restores ambient configuration even if teardown itself unwinds.
    fixture.teardown(client).await;

    if outcome.is_ok() {
        info!(
            upstream = config.upstream_full_name(),
            "Fork lifecycle scenario passed"
        );
    }

    outcome
}
