//! Unit tests for settings loading and saving.

use super::*;
use tempfile::tempdir;

fn sample_settings() -> Settings {
    Settings {
        owner_name: "octocat".to_string(),
        organization_name: "fork-org".to_string(),
        access_token: "ghp_exampletoken".to_string(),
        api_root: Url::parse("https://api.github.com").unwrap(),
    }
}

#[test]
fn test_save_and_load_round_trip() {
    let dir = tempdir().unwrap();
    let path = dir.path().join(DEFAULT_CONFIG_FILENAME);

    let settings = sample_settings();
    settings.save(&path).unwrap();

    let loaded = Settings::load(&path).unwrap();
    assert_eq!(loaded, settings);
}

#[test]
fn test_load_missing_file_reports_not_found() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("does-not-exist.toml");

    let result = Settings::load(&path);
    assert!(matches!(result, Err(Error::NotFound(p)) if p == path));
}

#[test]
fn test_load_malformed_toml_reports_parse_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join(DEFAULT_CONFIG_FILENAME);
    fs::write(&path, "owner_name = \"octocat\"\norganization_name").unwrap();

    let result = Settings::load(&path);
    assert!(matches!(result, Err(Error::Parse(_))));
}

#[test]
fn test_load_defaults_api_root_when_absent() {
    let dir = tempdir().unwrap();
    let path = dir.path().join(DEFAULT_CONFIG_FILENAME);
    fs::write(
        &path,
        r#"
owner_name = "octocat"
organization_name = "fork-org"
access_token = "ghp_exampletoken"
"#,
    )
    .unwrap();

    let settings = Settings::load(&path).unwrap();
    assert_eq!(settings.api_root.as_str(), "https://api.github.com/");
}

#[test]
fn test_save_creates_parent_directories() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nested").join("deeper").join("config.toml");

    sample_settings().save(&path).unwrap();

    assert!(path.exists());
}

#[test]
fn test_debug_output_redacts_access_token() {
    let settings = sample_settings();
    let rendered = format!("{:?}", settings);

    assert!(!rendered.contains("ghp_exampletoken"));
    assert!(rendered.contains("***"));
    assert!(rendered.contains("octocat"));
}

#[test]
fn test_get_config_path_uses_explicit_path() {
    let path = get_config_path(Some("/tmp/custom.toml"));
    assert_eq!(path, PathBuf::from("/tmp/custom.toml"));
}

#[test]
fn test_get_config_path_defaults_to_current_directory() {
    let path = get_config_path(None);
    assert!(path.ends_with(DEFAULT_CONFIG_FILENAME));
}
