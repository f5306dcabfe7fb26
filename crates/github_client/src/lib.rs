//! Crate for interacting with the GitHub REST API.
//!
//! This crate provides a client for making authenticated requests to GitHub,
//! authenticating with a personal access token. It covers the repository fork
//! lifecycle: creating forks in a user or organization namespace, listing the
//! forks of a repository, and deleting forks again by the URL the fork
//! creation call handed back.

use async_trait::async_trait;
use octocrab::{Octocrab, Result as OctocrabResult};
use serde::Serialize;
use tracing::{error, info, instrument, warn};
use url::Url;

pub mod errors;
pub use errors::Error;

pub mod models;
pub use models::{ForkSort, ForkTarget};

// Reference the tests module in the separate file
#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;

/// Forks are listed a page at a time; GitHub caps `per_page` at 100.
const FORK_PAGE_SIZE: usize = 100;

/// A client for interacting with the GitHub API, authenticated with an access token.
#[derive(Debug)]
pub struct GitHubClient {
    client: Octocrab,
}

impl GitHubClient {
    /// Creates a new `GitHubClient` wrapping an authenticated `Octocrab` instance.
    ///
    /// Use [`create_token_client`] or [`create_token_client_with_api_root`] to
    /// construct the underlying client.
    pub fn new(client: Octocrab) -> Self {
        Self { client }
    }

    /// Fetches details for a specific repository.
    ///
    /// # Arguments
    ///
    /// * `owner` - The owner of the repository (user or organization name).
    /// * `repo` - The name of the repository.
    ///
    /// # Errors
    /// Returns an `Error::NotFound` if the repository does not exist, or another
    /// `Error` variant if the API call fails.
    #[instrument(skip(self), fields(owner = %owner, repo = %repo))]
    pub async fn get_repository(
        &self,
        owner: &str,
        repo: &str,
    ) -> Result<models::Repository, Error> {
        let result = self.client.repos(owner, repo).get().await;
        match result {
            Ok(r) => Ok(models::Repository::from(r)),
            Err(e) => Err(map_octocrab_error("Failed to get repository", e)),
        }
    }

    /// Lists all repositories in an organization.
    ///
    /// Pages through the organization's repository listing and materializes it
    /// into a single vector. Used by cleanup tooling to find forks left behind
    /// by interrupted lifecycle runs.
    ///
    /// # Arguments
    ///
    /// * `org_name` - The name of the organization.
    ///
    /// # Errors
    /// Returns an `Error` variant if any page request fails.
    #[instrument(skip(self), fields(org_name = %org_name))]
    pub async fn list_org_repositories(
        &self,
        org_name: &str,
    ) -> Result<Vec<models::Repository>, Error> {
        let mut repositories = Vec::new();
        let mut page = 1u32;

        loop {
            let path = format!(
                "/orgs/{}/repos?per_page={}&page={}",
                org_name, FORK_PAGE_SIZE, page
            );
            let response: OctocrabResult<Vec<octocrab::models::Repository>> =
                self.client.get(path, None::<&()>).await;

            match response {
                Ok(batch) => {
                    let count = batch.len();
                    repositories.extend(batch.into_iter().map(models::Repository::from));
                    if count < FORK_PAGE_SIZE {
                        break;
                    }
                    page += 1;
                }
                Err(e) => {
                    return Err(map_octocrab_error(
                        "Failed to list organization repositories",
                        e,
                    ));
                }
            }
        }

        info!(
            org_name = org_name,
            count = repositories.len(),
            "Retrieved organization repositories"
        );

        Ok(repositories)
    }
}

#[async_trait]
impl ForkClient for GitHubClient {
    /// Creates a fork of `owner/repo` using the REST API directly.
    ///
    /// The API acknowledges the request with `202 Accepted` and returns the
    /// fork's repository object; the fork itself may still be materializing
    /// on the server side when this call returns.
    ///
    /// # Arguments
    ///
    /// * `owner` - The owner of the upstream repository.
    /// * `repo` - The name of the upstream repository.
    /// * `target` - The namespace the fork should land in.
    ///
    /// # Errors
    /// Returns an `Error::NotFound` if the upstream does not exist, or another
    /// `Error` variant for authentication and API failures.
    #[instrument(skip(self), fields(owner = %owner, repo = %repo))]
    async fn create_fork(
        &self,
        owner: &str,
        repo: &str,
        target: ForkTarget,
    ) -> Result<models::Repository, Error> {
        let path = format!("/repos/{}/{}/forks", owner, repo);
        let payload = ForkCreatePayload {
            organization: target.organization().map(str::to_string),
            ..Default::default()
        };

        let response: OctocrabResult<octocrab::models::Repository> =
            self.client.post(path, Some(&payload)).await;
        match response {
            Ok(r) => {
                let fork = models::Repository::from(r);
                info!(
                    upstream = format!("{}/{}", owner, repo),
                    fork = fork.full_name(),
                    "Created fork"
                );
                Ok(fork)
            }
            Err(e) => Err(map_octocrab_error("Failed to create fork", e)),
        }
    }

    /// Lists the forks of `owner/repo` in the requested sort order.
    ///
    /// Pages through the listing eagerly and returns a finite ordered vector.
    /// With [`ForkSort::Newest`] a fork created immediately before this call
    /// appears at the front of the listing.
    ///
    /// # Arguments
    ///
    /// * `owner` - The owner of the upstream repository.
    /// * `repo` - The name of the upstream repository.
    /// * `sort` - The ordering to request from the API.
    ///
    /// # Errors
    /// Returns an `Error` variant if any page request fails.
    #[instrument(skip(self), fields(owner = %owner, repo = %repo))]
    async fn list_forks(
        &self,
        owner: &str,
        repo: &str,
        sort: ForkSort,
    ) -> Result<Vec<models::Repository>, Error> {
        let mut forks = Vec::new();
        let mut page = 1u32;

        loop {
            let path = format!(
                "/repos/{}/{}/forks?sort={}&per_page={}&page={}",
                owner,
                repo,
                sort.as_query_value(),
                FORK_PAGE_SIZE,
                page
            );
            let response: OctocrabResult<Vec<octocrab::models::Repository>> =
                self.client.get(path, None::<&()>).await;

            match response {
                Ok(batch) => {
                    let count = batch.len();
                    forks.extend(batch.into_iter().map(models::Repository::from));
                    if count < FORK_PAGE_SIZE {
                        break;
                    }
                    page += 1;
                }
                Err(e) => return Err(map_octocrab_error("Failed to list forks", e)),
            }
        }

        info!(
            upstream = format!("{}/{}", owner, repo),
            count = forks.len(),
            sort = sort.as_query_value(),
            "Retrieved fork listing"
        );

        Ok(forks)
    }

    /// Deletes a repository.
    ///
    /// # Arguments
    ///
    /// * `owner` - The owner of the repository.
    /// * `repo` - The name of the repository.
    ///
    /// # Errors
    /// Returns an `Error::NotFound` if the repository does not exist, or another
    /// `Error` variant if the API call fails. The token needs the
    /// `delete_repo` scope.
    #[instrument(skip(self), fields(owner = %owner, repo = %repo))]
    async fn delete_repository(&self, owner: &str, repo: &str) -> Result<(), Error> {
        match self.client.repos(owner, repo).delete().await {
            Ok(_) => {
                info!(owner = owner, repo = repo, "Deleted repository");
                Ok(())
            }
            Err(e) => Err(map_octocrab_error("Failed to delete repository", e)),
        }
    }

    /// Deletes a fork identified by the URL returned when it was created.
    ///
    /// The fork creation endpoint hands back the fork's `svn_url`; teardown
    /// code holds on to that URL as the delete key. The `owner/repo` pair is
    /// parsed out of the URL path and the deletion delegated to
    /// [`ForkClient::delete_repository`].
    ///
    /// # Errors
    /// Returns `Error::InvalidForkUrl` without issuing an API call when the
    /// URL does not carry an `owner/repo` path, and propagates deletion
    /// errors otherwise.
    #[instrument(skip(self), fields(url = %url))]
    async fn delete_fork_by_url(&self, url: &Url) -> Result<(), Error> {
        let (owner, repo) = parse_fork_url(url)?;
        self.delete_repository(&owner, &repo).await
    }

    /// Fetches the authenticated user.
    ///
    /// Lifecycle checks fork into the acting user's namespace and need that
    /// user's login to compute the expected `user/repo` full name.
    ///
    /// # Errors
    /// Returns an `Error::AuthError`-adjacent variant if the token is invalid,
    /// or another `Error` variant if the API call fails.
    #[instrument(skip(self))]
    async fn get_authenticated_user(&self) -> Result<models::User, Error> {
        let response: OctocrabResult<models::User> = self.client.get("/user", None::<&()>).await;
        match response {
            Ok(user) => Ok(user),
            Err(e) => Err(map_octocrab_error("Failed to get authenticated user", e)),
        }
    }
}

/// Represents the payload for creating a new fork via the REST API.
/// Use `Default::default()` and modify fields as needed.
#[derive(Serialize, Default, Debug, Clone)]
pub struct ForkCreatePayload {
    /// Organization namespace to fork into; the authenticated user's
    /// namespace is used when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization: Option<String>,

    /// Name for the new fork; defaults to the upstream repository name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// When set, only the default branch is copied into the fork.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_branch_only: Option<bool>,
}

/// Trait for fork lifecycle operations (creation, listing, deletion).
///
/// The scenario harness runs against this trait rather than a concrete
/// client, so lifecycle checks can be pointed at any GitHub-compatible API
/// host.
#[async_trait]
pub trait ForkClient: Send + Sync {
    /// Creates a fork of `owner/repo` in the given target namespace.
    async fn create_fork(
        &self,
        owner: &str,
        repo: &str,
        target: ForkTarget,
    ) -> Result<models::Repository, Error>;

    /// Lists the forks of `owner/repo` in the requested sort order.
    async fn list_forks(
        &self,
        owner: &str,
        repo: &str,
        sort: ForkSort,
    ) -> Result<Vec<models::Repository>, Error>;

    /// Deletes the repository `owner/repo`.
    async fn delete_repository(&self, owner: &str, repo: &str) -> Result<(), Error>;

    /// Deletes a fork identified by the URL returned when it was created.
    async fn delete_fork_by_url(&self, url: &Url) -> Result<(), Error>;

    /// Fetches the authenticated user.
    async fn get_authenticated_user(&self) -> Result<models::User, Error>;
}

/// Parses the `owner/repo` pair out of a fork URL.
///
/// Fork URLs look like `https://github.com/owner/repo`; a trailing `.git`
/// suffix is tolerated. Anything that does not carry exactly an owner and a
/// repository segment is rejected so that no delete request is issued against
/// an unintended path.
///
/// # Errors
/// Returns `Error::InvalidForkUrl` when the URL path does not consist of an
/// owner segment and a repository segment.
pub fn parse_fork_url(url: &Url) -> Result<(String, String), Error> {
    let segments: Vec<&str> = url
        .path_segments()
        .map(|s| s.filter(|segment| !segment.is_empty()).collect())
        .unwrap_or_default();

    match segments.as_slice() {
        [owner, repo] => {
            let repo = repo.strip_suffix(".git").unwrap_or(repo);
            if repo.is_empty() {
                return Err(Error::InvalidForkUrl(url.to_string()));
            }
            Ok((owner.to_string(), repo.to_string()))
        }
        _ => Err(Error::InvalidForkUrl(url.to_string())),
    }
}

/// Creates an `Octocrab` client authenticated with a personal access token.
///
/// # Errors
/// Returns an `Error::ApiError` if the client cannot be built.
#[instrument(skip(token))]
pub fn create_token_client(token: &str) -> Result<Octocrab, Error> {
    Octocrab::builder()
        .personal_token(token.to_string())
        .build()
        .map_err(|_| Error::ApiError())
}

/// Creates an `Octocrab` client authenticated with a personal access token,
/// pointed at a non-default API root.
///
/// Used for GitHub Enterprise hosts and for lifecycle tests that run against
/// a local mock server.
///
/// # Arguments
///
/// * `token` - The personal access token.
/// * `api_root` - The base URI of the API host.
///
/// # Errors
/// Returns an `Error::AuthError` if the base URI is rejected or the client
/// cannot be built.
#[instrument(skip(token), fields(api_root = %api_root))]
pub fn create_token_client_with_api_root(token: &str, api_root: &Url) -> Result<Octocrab, Error> {
    Octocrab::builder()
        .base_uri(api_root.as_str())
        .map_err(|e| {
            error!(
                api_root = %api_root,
                error = %e,
                "Failed to apply API root to client builder"
            );
            Error::AuthError(format!("Invalid API root {}: {}", api_root, e))
        })?
        .personal_token(token.to_string())
        .build()
        .map_err(|e| {
            error!(error = %e, "Failed to build GitHub client");
            Error::AuthError("Failed to build GitHub client with access token.".to_string())
        })
}

fn map_octocrab_error(message: &str, e: octocrab::Error) -> Error {
    match e {
        octocrab::Error::GitHub { source, backtrace } => {
            error!(
                error_message = source.message,
                status = %source.status_code,
                backtrace = backtrace.to_string(),
                "{}. Received an error from GitHub",
                message
            );
            if source.status_code == http::StatusCode::NOT_FOUND {
                Error::NotFound
            } else if source.status_code == http::StatusCode::FORBIDDEN
                && source.message.to_lowercase().contains("rate limit")
            {
                warn!("{}. Rate limit exhausted", message);
                Error::RateLimitExceeded
            } else {
                Error::InvalidResponse
            }
        }
        octocrab::Error::UriParse { source, backtrace } => {
            error!(
                error_message = source.to_string(),
                backtrace = backtrace.to_string(),
                "{}. Failed to parse URI.",
                message
            );
            Error::InvalidResponse
        }
        octocrab::Error::Uri { source, backtrace } => {
            error!(
                error_message = source.to_string(),
                backtrace = backtrace.to_string(),
                "{}. Failed to parse URI.",
                message
            );
            Error::InvalidResponse
        }
        octocrab::Error::InvalidHeaderValue { source, backtrace } => {
            error!(
                error_message = source.to_string(),
                backtrace = backtrace.to_string(),
                "{}. One of the header values was invalid.",
                message
            );
            Error::InvalidResponse
        }
        octocrab::Error::InvalidUtf8 { source, backtrace } => {
            error!(
                error_message = source.to_string(),
                backtrace = backtrace.to_string(),
                "{}. The message wasn't valid UTF-8.",
                message,
            );
            Error::InvalidResponse
        }
        _ => {
            error!(error_message = e.to_string(), message);
            Error::InvalidResponse
        }
    }
}
