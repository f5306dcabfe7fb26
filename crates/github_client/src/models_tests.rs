use super::*;
use serde_json::{from_str, to_string};

#[test]
fn test_fork_sort_query_values() {
    assert_eq!(ForkSort::Newest.as_query_value(), "newest");
    assert_eq!(ForkSort::Oldest.as_query_value(), "oldest");
    assert_eq!(ForkSort::Stargazers.as_query_value(), "stargazers");
    assert_eq!(ForkSort::Watchers.as_query_value(), "watchers");
}

#[test]
fn test_fork_sort_defaults_to_newest() {
    // Lifecycle checks look for a just-created fork, so newest-first is the default.
    assert_eq!(ForkSort::default(), ForkSort::Newest);
}

#[test]
fn test_fork_target_organization_accessor() {
    assert_eq!(ForkTarget::User.organization(), None);
    assert_eq!(
        ForkTarget::Organization("fork-org".to_string()).organization(),
        Some("fork-org")
    );
}

#[test]
fn test_repository_deserialization() {
    // Create JSON resembling a fork listing entry
    let json_str = r#"{
        "full_name": "forker/Spoon-Knife",
        "name": "Spoon-Knife",
        "node_id": "MDEwOlJlcG9zaXRvcnkxMjk2MjY5",
        "private": false,
        "fork": true,
        "svn_url": "https://github.com/forker/Spoon-Knife",
        "owner": { "login": "forker" },
        "created_at": "2024-01-08T12:00:00Z"
    }"#;

    // Deserialize from JSON
    let repo: Repository = from_str(json_str).expect("Failed to deserialize Repository");

    // Verify fields
    assert_eq!(repo.full_name(), "forker/Spoon-Knife");
    assert_eq!(repo.name(), "Spoon-Knife");
    assert_eq!(repo.node_id(), "MDEwOlJlcG9zaXRvcnkxMjk2MjY5");
    assert!(!repo.is_private());
    assert_eq!(repo.is_fork(), Some(true));
    assert_eq!(repo.owner_login(), Some("forker"));
    assert_eq!(
        repo.svn_url().map(|u| u.as_str()),
        Some("https://github.com/forker/Spoon-Knife")
    );
    assert!(repo.created_at().is_some());
}

#[test]
fn test_repository_deserialization_without_fork_fields() {
    // Source repositories in listings may omit the fork-specific fields
    let json_str = r#"{
        "full_name": "octocat/Spoon-Knife",
        "name": "Spoon-Knife",
        "node_id": "MDEwOlJlcG9zaXRvcnkx",
        "private": false
    }"#;

    let repo: Repository = from_str(json_str).expect("Failed to deserialize Repository");

    assert_eq!(repo.is_fork(), None);
    assert!(repo.svn_url().is_none());
    assert!(repo.owner_login().is_none());
    assert!(repo.created_at().is_none());
}

#[test]
fn test_repository_url_generation() {
    let repo = Repository::new(
        "Spoon-Knife".to_string(),
        "octocat/Spoon-Knife".to_string(),
        "MDEwOlJlcG9zaXRvcnkx".to_string(),
        false,
    );

    assert_eq!(
        repo.url().as_str(),
        "https://github.com/octocat/Spoon-Knife.git"
    );
}

#[test]
fn test_user_serialization() {
    // Create a user
    let user = User {
        id: 303,
        login: "developer".to_string(),
    };

    // Serialize to JSON
    let json_str = to_string(&user).expect("Failed to serialize User");

    // Verify JSON structure
    let parsed: serde_json::Value = serde_json::from_str(&json_str).expect("Failed to parse JSON");
    assert_eq!(parsed["id"], 303);
    assert_eq!(parsed["login"], "developer");
}

#[test]
fn test_user_deserialization() {
    // Create JSON
    let json_str = r#"{
        "id": 404,
        "login": "contributor"
    }"#;

    // Deserialize from JSON
    let user: User = from_str(json_str).expect("Failed to deserialize User");

    // Verify fields
    assert_eq!(user.id, 404);
    assert_eq!(user.login, "contributor");
}

#[test]
fn test_organization_round_trip() {
    let org = Organization {
        name: "fork-org".to_string(),
    };

    let json_str = to_string(&org).expect("Failed to serialize Organization");
    let parsed: Organization = from_str(&json_str).expect("Failed to deserialize Organization");

    assert_eq!(parsed.name, "fork-org");
}
