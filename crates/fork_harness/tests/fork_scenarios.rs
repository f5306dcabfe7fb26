//! Live fork lifecycle scenarios.
//!
//! These tests run the fork lifecycle against the real GitHub API: fork an
//! upstream, list its forks newest-first, verify the expected namespace
//! appears, and delete the fork again.
//!
//! They are ignored by default because they need network access and an
//! access token with `repo` and `delete_repo` scopes. Scenarios run
//! serially to avoid rate limits and fork-name collisions in the external
//! account.

use anyhow::Result;
use fork_harness::{assert_fork_listed, run_fork_scenario, TestConfig};
use github_client::{ForkClient, ForkTarget, GitHubClient};
use serial_test::serial;
use tracing::info;

/// Initialize logging for tests
fn init_test_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_test_writer()
        .try_init();
}

fn live_client(config: &TestConfig) -> Result<GitHubClient> {
    let octocrab = github_client::create_token_client(&config.github_token)?;
    Ok(GitHubClient::new(octocrab))
}

/// Fork the upstream into the acting user's own namespace.
///
/// Verifies that a newest-first listing of the upstream's forks contains
/// `<user>/<repo>` immediately after creation.
#[tokio::test]
#[ignore = "Live scenario - requires network access and a token with repo and delete_repo scopes"]
#[serial]
async fn fork_into_user_namespace_appears_in_listing() -> Result<()> {
    init_test_logging();
    info!("Testing fork creation in the user namespace");

    let config = TestConfig::from_env()?;
    let client = live_client(&config)?;

    let user = client.get_authenticated_user().await?;
    let expected = format!("{}/{}", user.login, config.upstream_repo);

    run_fork_scenario(&client, &config, ForkTarget::User, move |forks, _| {
        assert_fork_listed(forks, &expected)
    })
    .await?;

    info!("✓ User namespace fork scenario passed");
    Ok(())
}

/// Fork the upstream into the configured organization.
///
/// Verifies that a newest-first listing of the upstream's forks contains
/// `<org>/<repo>` immediately after creation.
#[tokio::test]
#[ignore = "Live scenario - requires network access and a token with repo and delete_repo scopes"]
#[serial]
async fn fork_into_organization_appears_in_listing() -> Result<()> {
    init_test_logging();
    info!("Testing fork creation in an organization namespace");

    let config = TestConfig::from_env()?;
    let client = live_client(&config)?;

    let expected = format!("{}/{}", config.test_org, config.upstream_repo);
    let target = ForkTarget::Organization(config.test_org.clone());

    run_fork_scenario(&client, &config, target, move |forks, _| {
        assert_fork_listed(forks, &expected)
    })
    .await?;

    info!("✓ Organization fork scenario passed");
    Ok(())
}
