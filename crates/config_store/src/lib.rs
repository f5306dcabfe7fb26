//! Configuration storage for fork lifecycle tooling.
//!
//! This module provides functionality for loading, saving, and snapshotting
//! the settings file the fork lifecycle tooling depends on: the acting
//! owner's name, the organization namespace forks may land in, the access
//! token, and the API root to talk to.
//!
//! The configuration is stored in TOML format and can be loaded from a
//! specified file path. Ambient state is never mutated implicitly: callers
//! capture an immutable [`ConfigSnapshot`] of the file before touching it
//! and restore that snapshot afterwards, or hold a [`SnapshotGuard`] that
//! restores on every exit path.

use std::{
    fmt, fs,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use url::Url;

pub mod errors;
pub use errors::Error;

mod snapshot;
pub use snapshot::{ConfigSnapshot, SnapshotGuard};

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "forklift.toml";

/// Default API root for api.github.com
pub const DEFAULT_API_ROOT: &str = "https://api.github.com";

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;

/// Settings for fork lifecycle operations.
///
/// This structure holds the ambient state lifecycle runs depend on but do
/// not own: the acting owner's login, the organization namespace that
/// organization-targeted forks land in, the access token, and the API root.
/// It serializes to/from TOML.
///
/// The access token is redacted from `Debug` output.
///
/// # Example TOML Configuration
///
/// ```toml
/// owner_name = "octocat"
/// organization_name = "fork-org"
/// access_token = "ghp_exampletoken"
/// api_root = "https://api.github.com/"
/// ```
#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Login of the acting user
    pub owner_name: String,

    /// Organization namespace used for organization-targeted forks
    pub organization_name: String,

    /// Access token used to authenticate API calls
    pub access_token: String,

    /// Base URI of the API host
    #[serde(default = "Settings::default_api_root")]
    pub api_root: Url,
}

impl Settings {
    /// Returns the default API root, pointing at api.github.com.
    ///
    /// This is used as the default value for the api_root field when
    /// deserializing from TOML if the field is not present.
    fn default_api_root() -> Url {
        Url::parse(DEFAULT_API_ROOT).expect("Default API root is a valid URL")
    }

    /// Loads settings from a TOML file at the specified path.
    ///
    /// # Arguments
    ///
    /// * `path` - The filesystem path to the configuration file to load
    ///
    /// # Errors
    ///
    /// This function will return an error if:
    /// - The specified file does not exist (`Error::NotFound`)
    /// - The file cannot be read due to permissions or I/O issues
    /// - The file contains invalid TOML syntax
    /// - The TOML structure doesn't match the expected configuration schema
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use std::path::Path;
    /// use config_store::Settings;
    ///
    /// let config_path = Path::new("./forklift.toml");
    /// match Settings::load(config_path) {
    ///     Ok(settings) => println!("Acting as {}", settings.owner_name),
    ///     Err(e) => eprintln!("Failed to load settings: {}", e),
    /// }
    /// ```
    pub fn load(path: &Path) -> Result<Self, Error> {
        debug!("Loading settings from {:?}", path);

        if !path.exists() {
            return Err(Error::NotFound(path.to_path_buf()));
        }

        let content = fs::read_to_string(path).map_err(|e| Error::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        let settings: Settings = toml::from_str(&content)?;

        Ok(settings)
    }

    /// Saves the settings to a TOML file at the specified path.
    ///
    /// Creates parent directories automatically if they don't exist and
    /// overwrites existing files at the target path. The output is
    /// pretty-formatted TOML.
    ///
    /// # Arguments
    ///
    /// * `path` - The filesystem path where the configuration file should be saved
    ///
    /// # Errors
    ///
    /// This function will return an error if:
    /// - The settings cannot be serialized to TOML (should be rare)
    /// - Parent directories cannot be created due to permissions
    /// - The file cannot be written due to permissions or disk space issues
    pub fn save(&self, path: &Path) -> Result<(), Error> {
        debug!("Saving settings to {:?}", path);

        let content = toml::to_string_pretty(self)?;

        // Create parent directories if they don't exist
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| Error::Io {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        fs::write(path, content).map_err(|e| Error::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        info!("Settings saved to {:?}", path);
        Ok(())
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            owner_name: String::new(),
            organization_name: String::new(),
            access_token: String::new(),
            api_root: Settings::default_api_root(),
        }
    }
}

impl fmt::Debug for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Settings")
            .field("owner_name", &self.owner_name)
            .field("organization_name", &self.organization_name)
            .field("access_token", &"***")
            .field("api_root", &self.api_root.as_str())
            .finish()
    }
}

/// Resolves the path to the configuration file.
///
/// # Arguments
///
/// * `config_path` - Optional path to a specific configuration file
///
/// # Behaviour
///
/// - If `config_path` is `Some(path)`, returns that path as a `PathBuf`
/// - If `config_path` is `None`, returns `./forklift.toml` in the current directory
/// - Falls back to the current directory if unable to determine the working directory
pub fn get_config_path(config_path: Option<&str>) -> PathBuf {
    if let Some(path) = config_path {
        PathBuf::from(path)
    } else {
        // Look for config in current directory
        let current_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        current_dir.join(DEFAULT_CONFIG_FILENAME)
    }
}
