//! Unit tests for scenario configuration loading.

use super::*;
use serial_test::serial;

fn clear_fork_env() {
    env::remove_var("GITHUB_TOKEN");
    env::remove_var("FORK_TEST_ORG");
    env::remove_var("FORK_UPSTREAM");
    env::remove_var("FORK_CONFIG_PATH");
}

#[test]
#[serial]
fn test_from_env_reads_all_variables() {
    clear_fork_env();
    env::set_var("GITHUB_TOKEN", "ghp_testtoken");
    env::set_var("FORK_TEST_ORG", "fork-org");
    env::set_var("FORK_UPSTREAM", "octocat/Hello-World");
    env::set_var("FORK_CONFIG_PATH", "/tmp/forklift.toml");

    let config = TestConfig::from_env().unwrap();

    assert_eq!(config.github_token, "ghp_testtoken");
    assert_eq!(config.test_org, "fork-org");
    assert_eq!(config.upstream_owner, "octocat");
    assert_eq!(config.upstream_repo, "Hello-World");
    assert_eq!(config.config_path, Some(PathBuf::from("/tmp/forklift.toml")));

    clear_fork_env();
}

#[test]
#[serial]
fn test_from_env_defaults_upstream() {
    clear_fork_env();
    env::set_var("GITHUB_TOKEN", "ghp_testtoken");
    env::set_var("FORK_TEST_ORG", "fork-org");

    let config = TestConfig::from_env().unwrap();

    assert_eq!(config.upstream_full_name(), DEFAULT_UPSTREAM);
    assert!(config.config_path.is_none());

    clear_fork_env();
}

#[test]
#[serial]
fn test_from_env_requires_token() {
    clear_fork_env();
    env::set_var("FORK_TEST_ORG", "fork-org");

    let result = TestConfig::from_env();
    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().contains("GITHUB_TOKEN"));

    clear_fork_env();
}

#[test]
#[serial]
fn test_from_env_rejects_malformed_upstream() {
    clear_fork_env();
    env::set_var("GITHUB_TOKEN", "ghp_testtoken");
    env::set_var("FORK_TEST_ORG", "fork-org");
    env::set_var("FORK_UPSTREAM", "not-a-full-name");

    let result = TestConfig::from_env();
    assert!(result.is_err());

    clear_fork_env();
}

#[test]
fn test_parse_upstream_splits_owner_and_repo() {
    let (owner, repo) = parse_upstream("octocat/Spoon-Knife").unwrap();
    assert_eq!(owner, "octocat");
    assert_eq!(repo, "Spoon-Knife");
}

#[test]
fn test_parse_upstream_rejects_missing_separator() {
    assert!(parse_upstream("octocat").is_err());
}

#[test]
fn test_parse_upstream_rejects_empty_segments() {
    assert!(parse_upstream("/Spoon-Knife").is_err());
    assert!(parse_upstream("octocat/").is_err());
}

#[test]
fn test_parse_upstream_rejects_extra_segments() {
    assert!(parse_upstream("octocat/Spoon-Knife/extra").is_err());
}
