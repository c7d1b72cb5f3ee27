//! Command line options for the git-publish tool
use crate::{
    config::GitPublishConfig, errors::GitPublishError, publish::publish, push::GitCliPusher,
    push::Pusher, remote::Protocol, report::DeployTarget,
};
use clap::Parser;
use std::{io::Write, path::PathBuf};

/// Usage line printed when an argument is missing
pub const USAGE: &str = concat!(env!("CARGO_PKG_NAME"), " <github_username> <repo_name>");

/// git-publish - Push a local repository to GitHub and show how to deploy it
#[derive(Parser, Default, Clone, Debug)]
pub struct GitPublishCli {
    /// GitHub username owning the repository
    pub github_username: Option<String>,

    /// Name of the GitHub repository
    pub repo_name: Option<String>,

    /// Remote name [default: origin]
    #[arg(short, long)]
    pub remote: Option<String>,

    /// Branch to push, the current branch is renamed to it [default: main]
    #[arg(short, long)]
    pub branch: Option<String>,

    /// Protocol of the remote URL [default: https]
    #[arg(short, long, value_enum)]
    pub protocol: Option<Protocol>,

    /// Where the app is deployed afterwards [default: streamlit]
    #[arg(short, long, value_enum)]
    pub target: Option<DeployTarget>,

    /// Path of the repository [default: current directory]
    #[arg(short = 'C', long)]
    pub path: Option<PathBuf>,

    /// Create the repository on GitHub if it doesn't exist
    #[arg(long)]
    pub create: bool,

    /// Create the repository as private
    #[arg(long, requires = "create")]
    pub private: bool,

    /// Description of the created repository
    #[arg(long, requires = "create")]
    pub description: Option<String>,

    /// Check the ssh access to GitHub before pushing
    #[arg(long)]
    pub check_access: bool,

    /// Custom configuration file path
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Show the current config path
    #[arg(long)]
    pub show_config_path: bool,

    /// Verbose mode (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl GitPublishCli {
    /// Log level matching the verbosity
    pub fn log_level(&self) -> log::LevelFilter {
        match self.verbose {
            0 => log::LevelFilter::Info,
            1 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        }
    }
}

/// Run git-publish with parsed arguments, writing user output to `out`
///
/// Returns the process exit code.
/// # Errors
/// Error if the config can't be loaded or the publish fails before pushing
pub async fn run<W: Write>(
    cli_args: GitPublishCli,
    pusher: Option<&dyn Pusher>,
    out: &mut W,
) -> Result<i32, GitPublishError> {
    if cli_args.show_config_path {
        let config = GitPublishConfig::try_new(cli_args)?;
        writeln!(out, "{}", config.config_path.display())?;
        return Ok(0);
    }
    let (username, repo_name) = match (&cli_args.github_username, &cli_args.repo_name) {
        (Some(username), Some(repo_name)) => (username.clone(), repo_name.clone()),
        _ => {
            writeln!(out, "Usage: {USAGE}")?;
            return Ok(1);
        }
    };
    let mut config = GitPublishConfig::try_new(cli_args)?;
    let git_pusher;
    let pusher = match pusher {
        Some(p) => p,
        None => {
            git_pusher = GitCliPusher::new(config.git_program());
            &git_pusher as &dyn Pusher
        }
    };
    publish(&mut config, pusher, out, &username, &repo_name).await
}

/// Main function of git-publish, uses the process arguments and stdout
/// # Errors
/// Error if git-publish fails
pub async fn git_publish_main(cli_args: GitPublishCli) -> Result<i32, GitPublishError> {
    let mut stdout = std::io::stdout();
    run(cli_args, None, &mut stdout).await
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::publish::test::FakePusher;
    use crate::remote::test::repo_with_commit;

    fn parse(args: &[&str]) -> GitPublishCli {
        GitPublishCli::try_parse_from(args).unwrap()
    }

    async fn run_captured(cli: GitPublishCli, pusher: &FakePusher) -> (i32, String) {
        let mut out = Vec::new();
        let code = run(cli, Some(pusher), &mut out).await.unwrap();
        (code, String::from_utf8(out).unwrap())
    }

    #[tokio::test]
    async fn no_argument_prints_usage() {
        let pusher = FakePusher::exiting(0);
        let (code, text) = run_captured(parse(&["git-publish"]), &pusher).await;
        assert_eq!(code, 1);
        assert_eq!(text, "Usage: git-publish <github_username> <repo_name>\n");
        assert!(pusher.calls.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn one_argument_prints_usage() {
        let pusher = FakePusher::exiting(0);
        let (code, text) = run_captured(parse(&["git-publish", "alice"]), &pusher).await;
        assert_eq!(code, 1);
        assert!(text.starts_with("Usage: "));
        assert!(pusher.calls.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn two_arguments_push() {
        let dir = tempfile::tempdir().unwrap();
        repo_with_commit(dir.path(), "main");
        let path = dir.path().display().to_string();
        let config = dir.path().join("config.toml").display().to_string();
        let cli = parse(&[
            "git-publish",
            "alice",
            "dashboard",
            "-C",
            &path,
            "--config",
            &config,
            "--target",
            "railway",
        ]);
        let pusher = FakePusher::exiting(0);
        let (code, text) = run_captured(cli, &pusher).await;
        assert_eq!(code, 0);
        assert!(text.contains("Next steps to deploy on Railway:"));
    }

    #[test]
    fn parse_flags() {
        let cli = parse(&["git-publish", "alice", "repo", "-p", "ssh", "-b", "trunk", "-vv"]);
        assert_eq!(cli.protocol, Some(Protocol::Ssh));
        assert_eq!(cli.branch.as_deref(), Some("trunk"));
        assert_eq!(cli.log_level(), log::LevelFilter::Trace);
    }

    #[test]
    fn private_requires_create() {
        assert!(GitPublishCli::try_parse_from(["git-publish", "a", "b", "--private"]).is_err());
    }

    #[test]
    fn description_requires_create() {
        assert!(GitPublishCli::try_parse_from(["git-publish", "a", "b", "--description", "d"]).is_err());
        let cli = parse(&["git-publish", "a", "b", "--create", "--description", "My app"]);
        assert_eq!(cli.description.as_deref(), Some("My app"));
    }

    #[test]
    fn too_many_arguments_rejected() {
        assert!(GitPublishCli::try_parse_from(["git-publish", "a", "b", "c"]).is_err());
    }
}
