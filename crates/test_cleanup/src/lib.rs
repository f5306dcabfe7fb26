//! Orphaned fork cleanup utilities.
//!
//! This crate provides utilities for cleaning up forks left behind by
//! interrupted fork lifecycle runs. Scenario teardown is best-effort, so a
//! killed process or a token without the `delete_repo` scope can leak forks
//! in the test organization. It can be used both programmatically (from
//! test code) and via the CLI binary.

use anyhow::{Context, Result};
use chrono::Utc;
use github_client::{ForkClient, GitHubClient};
use std::env;
use tracing::{debug, info, warn};

/// Upstream repository assumed when `FORK_UPSTREAM` is not set.
const DEFAULT_UPSTREAM_REPO: &str = "Spoon-Knife";

/// Configuration for cleanup operations loaded from environment variables.
#[derive(Debug, Clone)]
pub struct CleanupConfig {
    /// Access token used to authenticate API calls
    pub github_token: String,
    /// Organization where lifecycle forks exist
    pub test_org: String,
    /// Repository name forks of the upstream carry
    pub upstream_repo: String,
}

impl CleanupConfig {
    /// Load cleanup configuration from environment variables.
    ///
    /// Required environment variables:
    /// - `GITHUB_TOKEN`: access token with `repo` and `delete_repo` scopes
    /// - `FORK_TEST_ORG`: organization name where lifecycle forks exist
    ///
    /// Optional environment variables:
    /// - `FORK_UPSTREAM`: upstream as `owner/repo`; only the repository
    ///   name matters here (defaults to `Spoon-Knife`)
    pub fn from_env() -> Result<Self> {
        let github_token =
            env::var("GITHUB_TOKEN").context("GITHUB_TOKEN environment variable not set")?;

        let test_org =
            env::var("FORK_TEST_ORG").context("FORK_TEST_ORG environment variable not set")?;

        let upstream_repo = env::var("FORK_UPSTREAM")
            .ok()
            .and_then(|upstream| {
                upstream
                    .rsplit_once('/')
                    .map(|(_, repo)| repo.to_string())
                    .or(Some(upstream))
            })
            .filter(|repo| !repo.is_empty())
            .unwrap_or_else(|| DEFAULT_UPSTREAM_REPO.to_string());

        Ok(Self {
            github_token,
            test_org,
            upstream_repo,
        })
    }
}

/// Fork cleanup operations for the test organization.
///
/// This struct provides methods to identify and delete leaked forks based
/// on the fork flag, the upstream's repository name and age criteria.
pub struct ForkCleanup {
    client: GitHubClient,
    test_org: String,
    upstream_repo: String,
}

impl ForkCleanup {
    /// Create a new cleanup instance.
    ///
    /// # Arguments
    ///
    /// * `client` - Authenticated GitHub client
    /// * `test_org` - Organization name where lifecycle forks exist
    /// * `upstream_repo` - Repository name forks of the upstream carry
    pub fn new(client: GitHubClient, test_org: String, upstream_repo: String) -> Self {
        Self {
            client,
            test_org,
            upstream_repo,
        }
    }

    /// Check if a repository name matches forks of the upstream.
    ///
    /// Forks keep the upstream's repository name; on a collision GitHub
    /// appends a numeric suffix (`Spoon-Knife-1`). Both shapes match.
    pub fn is_orphaned_fork_name(repo_name: &str, upstream_repo: &str) -> bool {
        if repo_name == upstream_repo {
            return true;
        }
        match repo_name.strip_prefix(upstream_repo) {
            Some(suffix) => {
                suffix.starts_with('-')
                    && suffix.len() > 1
                    && suffix[1..].chars().all(|c| c.is_ascii_digit())
            }
            None => false,
        }
    }

    /// Find and delete orphaned forks.
    ///
    /// This method lists the test organization's repositories and deletes
    /// those that are forks carrying the upstream's name and are older than
    /// the specified age. Deletion is best-effort per repository: one
    /// failed deletion does not stop the sweep.
    ///
    /// # Arguments
    ///
    /// * `max_age_hours` - Minimum age in hours for forks to be deleted
    pub async fn cleanup_orphaned_forks(&self, max_age_hours: u64) -> Result<Vec<String>> {
        info!(
            org = self.test_org,
            upstream_repo = self.upstream_repo,
            max_age_hours = max_age_hours,
            "Searching for orphaned forks"
        );

        let mut deleted_forks = Vec::new();
        let cutoff_time = Utc::now() - chrono::Duration::hours(max_age_hours as i64);

        let repositories = self
            .client
            .list_org_repositories(&self.test_org)
            .await
            .context("Failed to list organization repositories")?;

        for repo in repositories {
            if repo.is_fork() != Some(true) {
                continue;
            }
            if !Self::is_orphaned_fork_name(repo.name(), &self.upstream_repo) {
                continue;
            }

            // Age-based cleanup; a repository without a creation timestamp
            // is treated as too new to touch.
            let created_at = repo
                .created_at()
                .unwrap_or_else(|| cutoff_time + chrono::Duration::hours(1));

            if created_at < cutoff_time {
                info!(
                    repo_name = repo.name(),
                    created_at = %created_at,
                    cutoff_time = %cutoff_time,
                    "Found orphaned fork, attempting deletion"
                );

                if self.delete_fork(repo.name()).await.is_ok() {
                    deleted_forks.push(repo.name().to_string());
                }
            } else {
                debug!(
                    repo_name = repo.name(),
                    created_at = %created_at,
                    age_hours = (Utc::now() - created_at).num_hours(),
                    "Fork is too new, skipping"
                );
            }
        }

        info!(
            org = self.test_org,
            deleted_count = deleted_forks.len(),
            "Cleanup completed"
        );

        Ok(deleted_forks)
    }

    /// Delete a fork by name.
    ///
    /// This is a best-effort operation that logs errors but doesn't fail
    /// the entire cleanup process if one fork can't be deleted.
    pub async fn delete_fork(&self, repo_name: &str) -> Result<()> {
        info!(org = self.test_org, repo_name = repo_name, "Deleting fork");

        match self.client.delete_repository(&self.test_org, repo_name).await {
            Ok(()) => {
                info!(
                    org = self.test_org,
                    repo_name = repo_name,
                    "Successfully deleted fork"
                );
                Ok(())
            }
            Err(err) => {
                warn!(
                    org = self.test_org,
                    repo_name = repo_name,
                    error = %err,
                    "Failed to delete fork (may not exist or lack permissions)"
                );
                Err(err).context(format!("Failed to delete fork {}", repo_name))
            }
        }
    }
}

/// Initialize logging for cleanup operations.
///
/// Sets up tracing with appropriate formatting for CLI use.
pub fn init_logging() {
    use tracing_subscriber::EnvFilter;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .init();
}

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
