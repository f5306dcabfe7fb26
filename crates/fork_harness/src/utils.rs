//! Utility functions for fork lifecycle testing.
//!
//! This module provides helper functions for setting up, running, and
//! cleaning up fork lifecycle scenarios.

use anyhow::{Context, Result};
use std::env;
use std::path::PathBuf;
use tracing::info;

#[cfg(test)]
#[path = "utils_tests.rs"]
mod tests;

/// Upstream repository forked when `FORK_UPSTREAM` is not set.
///
/// Spoon-Knife is the repository GitHub maintains for fork demonstrations,
/// so forks of it are expected and harmless.
pub const DEFAULT_UPSTREAM: &str = "octocat/Spoon-Knife";

/// Configuration for fork lifecycle scenarios loaded from environment variables.
#[derive(Debug, Clone)]
pub struct TestConfig {
    /// Access token used to authenticate API calls
    pub github_token: String,
    /// Organization that organization-targeted forks land in
    pub test_org: String,
    /// Owner of the upstream repository to fork
    pub upstream_owner: String,
    /// Name of the upstream repository to fork
    pub upstream_repo: String,
    /// Ambient settings file to snapshot around scenarios, if any
    pub config_path: Option<PathBuf>,
}

impl TestConfig {
    /// Load scenario configuration from environment variables.
    ///
    /// Required environment variables:
    /// - `GITHUB_TOKEN`: access token with `repo` and `delete_repo` scopes
    /// - `FORK_TEST_ORG`: organization name for organization-targeted forks
    ///
    /// Optional environment variables:
    /// - `FORK_UPSTREAM`: upstream to fork as `owner/repo` (defaults to
    ///   `octocat/Spoon-Knife`)
    /// - `FORK_CONFIG_PATH`: ambient settings file to snapshot around
    ///   scenarios
    pub fn from_env() -> Result<Self> {
        let github_token =
            env::var("GITHUB_TOKEN").context("GITHUB_TOKEN environment variable not set")?;

        let test_org =
            env::var("FORK_TEST_ORG").context("FORK_TEST_ORG environment variable not set")?;

        let upstream = env::var("FORK_UPSTREAM").unwrap_or_else(|_| DEFAULT_UPSTREAM.to_string());
        let (upstream_owner, upstream_repo) = parse_upstream(&upstream)?;

        let config_path = env::var("FORK_CONFIG_PATH").ok().map(PathBuf::from);

        Ok(Self {
            github_token,
            test_org,
            upstream_owner,
            upstream_repo,
            config_path,
        })
    }

    /// Returns the upstream as an `owner/repo` full name.
    pub fn upstream_full_name(&self) -> String {
        format!("{}/{}", self.upstream_owner, self.upstream_repo)
    }
}

/// Splits an `owner/repo` upstream designation into its parts.
fn parse_upstream(upstream: &str) -> Result<(String, String)> {
    match upstream.split_once('/') {
        Some((owner, repo)) if !owner.is_empty() && !repo.is_empty() && !repo.contains('/') => {
            Ok((owner.to_string(), repo.to_string()))
        }
        _ => Err(anyhow::anyhow!(
            "FORK_UPSTREAM must be of the form owner/repo, got: {}",
            upstream
        )),
    }
}

/// Initialize logging for lifecycle scenarios.
pub fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .with_thread_ids(true)
        .with_file(true)
        .with_line_number(true)
        .init();
}

/// Validate that required environment variables are set for live scenarios.
pub fn validate_test_environment() -> Result<()> {
    let required_vars = ["GITHUB_TOKEN", "FORK_TEST_ORG"];

    for var in &required_vars {
        if env::var(var).is_err() {
            return Err(anyhow::anyhow!(
                "Required environment variable {} is not set. Live fork scenarios need an access token and a target organization.",
                var
            ));
        }
    }

    info!("All required environment variables are set");
    Ok(())
}
