//! Github REST client
use super::{GITHUB_API_HEADER, GITHUB_API_URL, GITHUB_API_VERSION};
use crate::{
    errors::{GitPublishError, GitPublishErrorKind},
    github::repo::{NewRepo, RepoGithub},
};
use reqwest::{
    header::{ACCEPT, AUTHORIZATION, USER_AGENT},
    RequestBuilder, StatusCode,
};
use urlencoding::encode;

/// Github client for one user
#[derive(Default, Debug, Clone)]
pub struct GithubClient {
    /// Github username
    username: String,

    /// Github token
    token: String,

    /// Reqwest client
    client: reqwest::Client,
}

impl GithubClient {
    /// Create a new GithubClient
    pub(crate) fn new(username: String, token: String) -> Self {
        Self {
            username,
            token,
            client: reqwest::Client::new(),
        }
    }

    /// Add the headers expected by the API
    fn with_headers(&self, request: RequestBuilder) -> RequestBuilder {
        request
            .header(AUTHORIZATION, format!("Bearer {}", self.token))
            .header(ACCEPT, "application/vnd.github+json")
            .header(USER_AGENT, concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .header(GITHUB_API_HEADER, GITHUB_API_VERSION)
    }

    /// URL of a repository of the user
    fn repo_url(&self, repo_name: &str) -> String {
        format!(
            "https://{}/repos/{}/{}",
            GITHUB_API_URL,
            encode(&self.username),
            encode(repo_name)
        )
    }

    /// Get a repository, `None` if it doesn't exist
    /// # Errors
    /// Error if the request fails or the answer can't be parsed
    pub async fn get_repo(&self, repo_name: &str) -> Result<Option<RepoGithub>, GitPublishError> {
        let url = self.repo_url(repo_name);
        log::debug!("GET {url}");
        let response = self.with_headers(self.client.get(&url)).send().await?;
        let status = response.status();
        let text = response.text().await?;
        parse_get_repo(status, &text)
    }

    /// Create a repository for the authenticated user
    /// # Errors
    /// Error if the request fails or GitHub refuses the creation
    pub async fn create_repo(&self, repo: &NewRepo) -> Result<RepoGithub, GitPublishError> {
        let url = format!("https://{GITHUB_API_URL}/user/repos");
        log::debug!("POST {url}");
        let response = self
            .with_headers(self.client.post(&url))
            .json(repo)
            .send()
            .await?;
        let status = response.status();
        let text = response.text().await?;
        parse_create_repo(status, &text)
    }

    /// Make sure the repository exists, creating it if needed
    /// # Errors
    /// Error if the lookup or the creation fails
    pub async fn ensure_repo(
        &self,
        repo_name: &str,
        private: bool,
        description: Option<&str>,
    ) -> Result<RepoGithub, GitPublishError> {
        if let Some(repo) = self.get_repo(repo_name).await? {
            log::info!("Repository {} already exists", repo.full_name);
            return Ok(repo);
        }
        log::info!("Creating repository {}/{repo_name}", self.username);
        let repo = self
            .create_repo(&NewRepo {
                name: repo_name.to_string(),
                description: description.map(str::to_string),
                private,
            })
            .await?;
        log::info!("Created {}", repo.html_url);
        Ok(repo)
    }
}

/// Map the answer of `GET /repos/{owner}/{repo}`, a 404 means the repository doesn't exist
fn parse_get_repo(status: StatusCode, text: &str) -> Result<Option<RepoGithub>, GitPublishError> {
    if status == StatusCode::NOT_FOUND {
        return Ok(None);
    }
    if !status.is_success() {
        return Err(GitPublishError::new(GitPublishErrorKind::GetRepo).with_text(text));
    }
    Ok(Some(serde_json::from_str(text)?))
}

/// Map the answer of `POST /user/repos`
fn parse_create_repo(status: StatusCode, text: &str) -> Result<RepoGithub, GitPublishError> {
    if !status.is_success() {
        return Err(GitPublishError::new(GitPublishErrorKind::RepoCreation).with_text(text));
    }
    Ok(serde_json::from_str(text)?)
}
