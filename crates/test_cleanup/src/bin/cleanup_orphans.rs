//! Cleanup orphaned forks.
//!
//! This binary deletes forks left behind by interrupted lifecycle runs that
//! are older than a specified age. It's designed to be run from GitHub
//! Actions or manually for maintenance.
//!
//! Usage:
//!   cleanup-orphans <max_age_hours>
//!
//! Environment variables required:
//! - GITHUB_TOKEN: access token with repo and delete_repo scopes
//! - FORK_TEST_ORG: organization name where lifecycle forks exist
//! - FORK_UPSTREAM: upstream as owner/repo (optional)

use std::env;
use test_cleanup::{CleanupConfig, ForkCleanup};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    test_cleanup::init_logging();

    // Get max age from command line args, default to 1 hour
    let max_age_hours: u64 = env::args().nth(1).and_then(|s| s.parse().ok()).unwrap_or(1);

    println!("🧹 ForkLift Orphaned Fork Cleanup");
    println!("=================================");
    println!();

    // Load configuration from environment
    let config = CleanupConfig::from_env()?;

    println!("📋 Configuration:");
    println!("   Test Organization: {}", config.test_org);
    println!("   Upstream repository: {}", config.upstream_repo);
    println!("   Max age: {} hours", max_age_hours);
    println!();

    // Create GitHub client with token authentication
    let octocrab = github_client::create_token_client(&config.github_token)?;
    let github_client = github_client::GitHubClient::new(octocrab);

    // Create cleanup instance
    let cleanup = ForkCleanup::new(
        github_client,
        config.test_org.clone(),
        config.upstream_repo.clone(),
    );

    println!("🔍 Searching for orphaned forks...");
    let deleted = cleanup.cleanup_orphaned_forks(max_age_hours).await?;

    println!();
    println!("✅ Cleanup completed!");
    println!("   Deleted {} forks", deleted.len());

    if !deleted.is_empty() {
        println!();
        println!("📋 Deleted forks:");
        for repo in &deleted {
            println!("   - {}", repo);
        }
    } else {
        println!("   No forks found older than {} hours", max_age_hours);
    }

    Ok(())
}
