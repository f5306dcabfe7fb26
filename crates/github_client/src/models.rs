//! # Models
//!
//! This module contains the data models used throughout the fork lifecycle
//! tooling.
//!
//! These models represent the entities the client works with, such as
//! repositories, forks, users and organizations. They are designed to be
//! serializable and deserializable to facilitate integration with Git
//! provider APIs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use url::Url;

#[cfg(test)]
#[path = "models_tests.rs"]
mod tests;

/// Sort order for fork listings.
///
/// Maps to the `sort` query parameter of the fork listing endpoint. The API
/// default is newest-first, which is also the default here because lifecycle
/// verification checks for a just-created fork at the front of the listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ForkSort {
    /// Most recently created forks first.
    #[default]
    Newest,
    /// Oldest forks first.
    Oldest,
    /// Forks with the most stargazers first.
    Stargazers,
    /// Forks with the most watchers first.
    Watchers,
}

impl ForkSort {
    /// Returns the query parameter value understood by the GitHub API.
    pub fn as_query_value(&self) -> &'static str {
        match self {
            ForkSort::Newest => "newest",
            ForkSort::Oldest => "oldest",
            ForkSort::Stargazers => "stargazers",
            ForkSort::Watchers => "watchers",
        }
    }
}

/// Target namespace for a fork creation request.
///
/// A fork lands either in the authenticated user's namespace or in an
/// organization the user can create repositories in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ForkTarget {
    /// Fork into the authenticated user's own namespace.
    User,
    /// Fork into the named organization.
    Organization(String),
}

impl ForkTarget {
    /// Returns the organization name, if this target names one.
    pub fn organization(&self) -> Option<&str> {
        match self {
            ForkTarget::User => None,
            ForkTarget::Organization(name) => Some(name),
        }
    }
}

/// Represents a GitHub organization.
///
/// This struct contains basic information about a GitHub organization,
/// primarily used for organization-related API operations and queries.
///
/// # Examples
///
/// ```rust
/// use github_client::models::Organization;
///
/// let org = Organization {
///     name: "my-organization".to_string(),
/// };
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Organization {
    /// The name of the organization
    pub name: String,
}

/// Represents a GitHub repository, including forks.
///
/// This struct contains essential information about a GitHub repository,
/// including its name, namespace, fork status and identifiers. Forks are
/// plain repositories with the `fork` flag set; the `svn_url` field is the
/// delete key handed back by the fork creation endpoint.
///
/// # Examples
///
/// ```rust
/// use github_client::models::Repository;
///
/// let repo = Repository::new(
///     "Spoon-Knife".to_string(),
///     "octocat/Spoon-Knife".to_string(),
///     "MDEwOlJlcG9zaXRvcnkx".to_string(),
///     false
/// );
///
/// println!("Repository: {}", repo.name());
/// println!("Full name: {}", repo.full_name());
/// println!("Clone URL: {}", repo.url());
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct Repository {
    /// The full name of the repository (owner/name)
    full_name: String,
    /// The name of the repository
    name: String,
    /// The GraphQL node ID of the repository
    node_id: String,
    /// Whether the repository is private
    private: bool,
    /// Whether this repository is a fork of another repository
    fork: Option<bool>,
    /// The Subversion checkout URL, used as the delete key for forks
    svn_url: Option<Url>,
    /// The login of the owning user or organization
    owner: Option<Owner>,
    /// When the repository was created
    created_at: Option<DateTime<Utc>>,
}

/// The owning account embedded in a repository payload.
#[derive(Debug, Clone, Deserialize)]
struct Owner {
    login: String,
}

impl Repository {
    /// Creates a new Repository instance.
    ///
    /// # Arguments
    ///
    /// * `name` - The name of the repository
    /// * `full_name` - The full name including owner (owner/repo)
    /// * `node_id` - The GraphQL node ID
    /// * `private` - Whether the repository is private
    ///
    /// # Returns
    ///
    /// A new `Repository` instance with the provided values.
    pub fn new(name: String, full_name: String, node_id: String, private: bool) -> Self {
        Self {
            full_name,
            name,
            node_id,
            private,
            fork: None,
            svn_url: None,
            owner: None,
            created_at: None,
        }
    }

    /// Returns when the repository was created, if known.
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        self.created_at
    }

    /// Returns the full name of the repository in `owner/name` form.
    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    /// Returns whether this repository is a fork.
    ///
    /// # Returns
    ///
    /// `Some(true)` for a fork, `Some(false)` for a source repository, or
    /// `None` if the listing did not carry the flag.
    pub fn is_fork(&self) -> Option<bool> {
        self.fork
    }

    /// Returns whether the repository is private.
    ///
    /// # Returns
    ///
    /// `true` if the repository is private, `false` if it's public.
    pub fn is_private(&self) -> bool {
        self.private
    }

    /// Returns the name of the repository.
    ///
    /// # Returns
    ///
    /// A string slice containing the repository name (without owner).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the GraphQL node ID of the repository.
    ///
    /// # Returns
    ///
    /// A string slice containing the node ID used for GraphQL operations.
    pub fn node_id(&self) -> &str {
        &self.node_id
    }

    /// Returns the login of the owning user or organization, if known.
    pub fn owner_login(&self) -> Option<&str> {
        self.owner.as_ref().map(|o| o.login.as_str())
    }

    /// Returns the Subversion checkout URL for the repository, if known.
    ///
    /// The fork creation endpoint returns this URL on the new fork; it is
    /// the handle teardown code uses to delete the fork again.
    pub fn svn_url(&self) -> Option<&Url> {
        self.svn_url.as_ref()
    }

    /// Returns the Git clone URL for the repository.
    ///
    /// # Returns
    ///
    /// A `Url` pointing to the Git clone endpoint for this repository.
    ///
    /// # Panics
    ///
    /// Panics if the repository full name cannot be formatted into a valid URL.
    /// This should not happen with valid GitHub repository names.
    pub fn url(&self) -> Url {
        Url::parse(&format!("https://github.com/{}.git", self.full_name))
            .expect("Valid GitHub repository URL")
    }
}

impl From<octocrab::models::Repository> for Repository {
    fn from(value: octocrab::models::Repository) -> Self {
        Self {
            name: value.name.clone(),
            full_name: value.full_name.unwrap_or(value.name.clone()),
            node_id: value.node_id.unwrap_or_default(),
            private: value.private.unwrap_or(false),
            fork: value.fork,
            svn_url: value.svn_url,
            owner: value.owner.map(|o| Owner { login: o.login }),
            created_at: value.created_at,
        }
    }
}

/// Represents a GitHub user account.
///
/// This struct contains basic information about a GitHub user, including
/// their unique ID and login name. It's used throughout the API for
/// representing repository owners, fork creators, and other user references.
///
/// # Examples
///
/// ```rust
/// use github_client::models::User;
///
/// let user = User {
///     id: 12345,
///     login: "octocat".to_string(),
/// };
///
/// println!("User: {} (ID: {})", user.login, user.id);
/// ```
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct User {
    /// The unique numeric ID of the user
    pub id: u64,
    /// The login name of the user
    pub login: String,
}
