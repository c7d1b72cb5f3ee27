//! Configuration handling
use std::{
    fs::{create_dir_all, read_to_string, File},
    io::Write,
    path::PathBuf,
};

use home::home_dir;
use serde::{Deserialize, Serialize};

use crate::{
    cli::GitPublishCli, errors::GitPublishError, github::config::GithubConfig,
    remote::Protocol, report::DeployTarget,
};

/// Default remote name
const DEFAULT_REMOTE: &str = "origin";

/// Default branch name
const DEFAULT_BRANCH: &str = "main";

/// Default entry point of the deployed app
const DEFAULT_APP_FILE: &str = "app.py";

/// Default git executable
const DEFAULT_GIT_PROGRAM: &str = "git";

/// Configuration data
#[derive(Default, Clone, Debug)]
pub struct GitPublishConfig {
    /// path to the configuration file
    pub config_path: PathBuf,

    /// actual configuration data
    pub config_data: ConfigData,

    /// CLI arguments
    pub cli_args: GitPublishCli,
}

/// Content of the configuration file
#[derive(Deserialize, Serialize, Default, Clone, Debug)]
pub struct ConfigData {
    /// Github configuration
    pub github: Option<GithubConfig>,

    /// Publish defaults
    pub publish: Option<PublishConfig>,
}

/// Defaults used when the matching CLI flag is absent
#[derive(Deserialize, Serialize, Default, Clone, Debug)]
pub struct PublishConfig {
    /// Remote name
    pub remote: Option<String>,

    /// Branch name
    pub branch: Option<String>,

    /// Protocol of the remote URL
    pub protocol: Option<Protocol>,

    /// Deployment target shown after a successful push
    pub target: Option<DeployTarget>,

    /// Entry point of the deployed app
    pub app_file: Option<String>,

    /// git executable used to push
    pub git_program: Option<String>,
}

impl GitPublishConfig {
    /// Create a new Config object from the CLI path or the default path
    /// # Errors
    /// Error if the config file can't be opened or parsed
    pub fn try_new(cli_args: GitPublishCli) -> Result<Self, GitPublishError> {
        let config_path = match cli_args.config.clone() {
            Some(p) => p,
            None => Self::get_config_path()?,
        };
        let contents = if config_path.exists() {
            read_to_string(&config_path)
                .map_err(|e| GitPublishError::new_with_source("Unable to open config", e))?
        } else {
            String::new()
        };
        let config_data = toml::from_str(&contents)?;
        log::debug!("Loaded config from {}", config_path.display());
        Ok(GitPublishConfig {
            config_path,
            config_data,
            cli_args,
        })
    }

    /// Save the config data to the config file
    /// # Errors
    /// Error if the config file can't be created or written to
    pub fn save(&self) -> Result<(), GitPublishError> {
        let config_str = toml::to_string(&self.config_data)?;
        let mut file = File::create(&self.config_path)
            .map_err(|e| GitPublishError::new_with_source("Unable to create config file", e))?;
        file.write_all(config_str.as_bytes())
            .map_err(|e| GitPublishError::new_with_source("Unable to write to config file", e))
    }

    /// Get the path to the config file
    /// # Errors
    /// Error if the home directory can't be found
    pub fn get_config_path() -> Result<PathBuf, GitPublishError> {
        let home_dir = match home_dir() {
            Some(path) if !path.as_os_str().is_empty() => path,
            _ => return Err("Unable to get your home dir! home::home_dir() isn't working".into()),
        };
        let config_directory = home_dir.join(".config").join(".git-publish");
        let config_path = config_directory.join("config.toml");
        create_dir_all(config_directory)
            .map_err(|e| GitPublishError::new_with_source("Unable to create config dir", e))?;
        if !config_path.exists() {
            File::create(&config_path)
                .map_err(|e| GitPublishError::new_with_source("Unable to create config file", e))?;
        }
        Ok(config_path)
    }

    /// Update the config data and save it to the config file
    /// # Errors
    /// Error if fail to save config
    pub fn update(
        &mut self,
        updater_fn: impl FnOnce(&mut ConfigData),
    ) -> Result<(), GitPublishError> {
        updater_fn(&mut self.config_data);
        self.save()
    }

    /// Publish section of the config, if any
    fn publish(&self) -> Option<&PublishConfig> {
        self.config_data.publish.as_ref()
    }

    /// Remote name: CLI, then config, then `origin`
    pub fn remote(&self) -> String {
        self.cli_args
            .remote
            .clone()
            .or_else(|| self.publish().and_then(|p| p.remote.clone()))
            .unwrap_or_else(|| DEFAULT_REMOTE.to_string())
    }

    /// Branch name: CLI, then config, then `main`
    pub fn branch(&self) -> String {
        self.cli_args
            .branch
            .clone()
            .or_else(|| self.publish().and_then(|p| p.branch.clone()))
            .unwrap_or_else(|| DEFAULT_BRANCH.to_string())
    }

    /// Protocol of the remote URL: CLI, then config, then https
    pub fn protocol(&self) -> Protocol {
        self.cli_args
            .protocol
            .or_else(|| self.publish().and_then(|p| p.protocol))
            .unwrap_or_default()
    }

    /// Deploy target: CLI, then config, then Streamlit
    pub fn target(&self) -> DeployTarget {
        self.cli_args
            .target
            .or_else(|| self.publish().and_then(|p| p.target))
            .unwrap_or_default()
    }

    /// Entry point of the deployed app
    pub fn app_file(&self) -> String {
        self.publish()
            .and_then(|p| p.app_file.clone())
            .unwrap_or_else(|| DEFAULT_APP_FILE.to_string())
    }

    /// git executable
    pub fn git_program(&self) -> String {
        self.publish()
            .and_then(|p| p.git_program.clone())
            .unwrap_or_else(|| DEFAULT_GIT_PROGRAM.to_string())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn cli_with_config(path: PathBuf) -> GitPublishCli {
        GitPublishCli {
            config: Some(path),
            ..Default::default()
        }
    }

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = GitPublishConfig::try_new(cli_with_config(dir.path().join("none.toml")))
            .unwrap();
        assert_eq!(config.remote(), "origin");
        assert_eq!(config.branch(), "main");
        assert_eq!(config.protocol(), Protocol::Https);
        assert_eq!(config.target(), DeployTarget::Streamlit);
        assert_eq!(config.app_file(), "app.py");
        assert_eq!(config.git_program(), "git");
    }

    #[test]
    fn file_values_and_cli_override() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "[publish]\nremote = \"github\"\nbranch = \"trunk\"\nprotocol = \"ssh\"\ntarget = \"railway\"\napp_file = \"main.py\"\n",
        )
        .unwrap();
        let mut cli = cli_with_config(path);
        cli.branch = Some("release".to_string());
        let config = GitPublishConfig::try_new(cli).unwrap();
        assert_eq!(config.remote(), "github");
        assert_eq!(config.branch(), "release");
        assert_eq!(config.protocol(), Protocol::Ssh);
        assert_eq!(config.target(), DeployTarget::Railway);
        assert_eq!(config.app_file(), "main.py");
    }

    #[test]
    fn update_persists_token() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let mut config = GitPublishConfig::try_new(cli_with_config(path.clone())).unwrap();
        config
            .update(|data| {
                data.github = Some(GithubConfig {
                    token: Some("secret".to_string()),
                });
            })
            .unwrap();
        let reloaded = GitPublishConfig::try_new(cli_with_config(path)).unwrap();
        let token = reloaded.config_data.github.and_then(|g| g.token);
        assert_eq!(token.as_deref(), Some("secret"));
    }

    #[test]
    fn invalid_toml_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[publish\n").unwrap();
        assert!(GitPublishConfig::try_new(cli_with_config(path)).is_err());
    }
}
