//! Github configuration
use super::{client::GithubClient, GITHUB_TOKEN_ENV};
use serde::{Deserialize, Serialize};

use crate::{config::GitPublishConfig, config_password, errors::GitPublishError};

/// Github configuration
#[derive(Deserialize, Serialize, Default, Debug, Clone)]
pub struct GithubConfig {
    /// Github token
    pub token: Option<String>,
}

impl GithubConfig {
    /// Get a client for `username`, the token comes from the environment, the config or a prompt
    /// # Errors
    /// Error if the token can't be read or saved
    pub fn get_client(
        config: &mut GitPublishConfig,
        username: &str,
    ) -> Result<GithubClient, GitPublishError> {
        let token = match std::env::var(GITHUB_TOKEN_ENV) {
            Ok(token) if !token.is_empty() => {
                log::debug!("Using token from {GITHUB_TOKEN_ENV}");
                token
            }
            _ => config_password!(
                config,
                github,
                GithubConfig,
                token,
                "your github token (https://github.com/settings/personal-access-tokens)"
            ),
        };
        Ok(GithubClient::new(username.to_string(), token))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::cli::GitPublishCli;

    #[test]
    fn stored_token_is_used_without_prompt() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[github]\ntoken = \"stored\"\n").unwrap();
        let cli = GitPublishCli {
            config: Some(path.clone()),
            ..Default::default()
        };
        let mut config = GitPublishConfig::try_new(cli).unwrap();
        GithubConfig::get_client(&mut config, "alice").unwrap();
        let saved = std::fs::read_to_string(&path).unwrap();
        assert_eq!(saved, "[github]\ntoken = \"stored\"\n");
    }
}
