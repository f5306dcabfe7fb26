//! Fork fixtures for lifecycle scenarios.
//!
//! A fixture owns the fork a scenario created and is responsible for
//! deleting it again during teardown. Deletion is keyed off the `svn_url`
//! the fork creation call returned, and is best-effort: a fork that cannot
//! be deleted is logged and left for the cleanup tooling, it does not turn
//! a passing scenario into a failing one.

use anyhow::{Context, Result};
use github_client::models::Repository;
use github_client::{ForkClient, ForkTarget};
use tracing::{info, warn};

/// The fork created during scenario setup, tracked for teardown.
#[derive(Debug)]
pub struct ForkFixture {
    fork: Repository,
    torn_down: bool,
}

impl ForkFixture {
    /// Creates a fork of `owner/repo` in the given target namespace and
    /// tracks it for teardown.
    ///
    /// # Errors
    ///
    /// Propagates API failures from fork creation; nothing is tracked when
    /// creation fails.
    pub async fn create(
        client: &dyn ForkClient,
        owner: &str,
        repo: &str,
        target: ForkTarget,
    ) -> Result<Self> {
        let fork = client
            .create_fork(owner, repo, target)
            .await
            .with_context(|| format!("Failed to fork {}/{}", owner, repo))?;

        info!(
            upstream = format!("{}/{}", owner, repo),
            fork = fork.full_name(),
            "Scenario fixture created fork"
        );

        Ok(Self {
            fork,
            torn_down: false,
        })
    }

    /// Returns the fork created during setup.
    pub fn fork(&self) -> &Repository {
        &self.fork
    }

    /// Returns the fork's `owner/repo` full name.
    pub fn full_name(&self) -> &str {
        self.fork.full_name()
    }

    /// Deletes the tracked fork (best effort).
    ///
    /// One deletion attempt is made via the fork's `svn_url`. Failures are
    /// logged as warnings and otherwise swallowed; orphaned forks are the
    /// cleanup tooling's job.
    pub async fn teardown(&mut self, client: &dyn ForkClient) {
        if self.torn_down {
            return;
        }
        self.torn_down = true;

        match self.fork.svn_url() {
            Some(url) => match client.delete_fork_by_url(url).await {
                Ok(()) => {
                    info!(fork = self.fork.full_name(), "Deleted scenario fork");
                }
                Err(e) => {
                    warn!(
                        fork = self.fork.full_name(),
                        error = %e,
                        "Failed to delete scenario fork (may not exist or token lacks delete_repo scope)"
                    );
                }
            },
            None => {
                warn!(
                    fork = self.fork.full_name(),
                    "Fork carries no svn_url; cannot delete it"
                );
            }
        }
    }
}

impl Drop for ForkFixture {
    fn drop(&mut self) {
        if !self.torn_down {
            warn!(
                fork = self.fork.full_name(),
                "Fork fixture dropped without teardown; the fork is left behind in the external system"
            );
        }
    }
}
