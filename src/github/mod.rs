//! GitHub API module.
pub(crate) mod client;
pub(crate) mod config;
pub(crate) mod repo;

/// GitHub API URL
const GITHUB_API_URL: &str = "api.github.com";

/// GitHub API Header
const GITHUB_API_HEADER: &str = "X-GitHub-Api-Version";

/// GitHub API Version
const GITHUB_API_VERSION: &str = "2022-11-28";

/// Environment variable holding a GitHub token
pub(crate) const GITHUB_TOKEN_ENV: &str = "GITHUB_TOKEN";
