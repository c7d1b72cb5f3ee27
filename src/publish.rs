//! Publish a local repository to GitHub
use std::{io::Write, path::PathBuf};

use git2::Repository;

use crate::{
    config::GitPublishConfig,
    errors::GitPublishError,
    github::config::GithubConfig,
    push::Pusher,
    remote::{
        current_branch, ensure_remote, remote_url, rename_current_branch, Protocol, RemoteAction,
    },
    report::{write_failure, write_success, ReportContext},
    utils::{check_ssh_access, SshAccess},
};

/// Open the repository containing `path`, looking upwards like git does
fn open_repository(path: Option<&PathBuf>) -> Result<(Repository, PathBuf), GitPublishError> {
    let start = match path {
        Some(p) => p.clone(),
        None => std::env::current_dir()?,
    };
    let repo = Repository::discover(&start).map_err(|e| {
        GitPublishError::new_with_source(
            &format!("No git repository found at {}", start.display()),
            e,
        )
    })?;
    let workdir = match repo.workdir() {
        Some(dir) => dir.to_path_buf(),
        None => return Err("Can't publish a bare repository".into()),
    };
    Ok((repo, workdir))
}

/// Publish `username/repo_name` and write the report to `out`
///
/// Returns the exit code: 0 when the push succeeded, 1 otherwise.
/// # Errors
/// Error if the repository can't be prepared or the push can't be started
pub async fn publish<W: Write>(
    config: &mut GitPublishConfig,
    pusher: &dyn Pusher,
    out: &mut W,
    username: &str,
    repo_name: &str,
) -> Result<i32, GitPublishError> {
    let protocol = config.protocol();
    let remote_name = config.remote();
    let branch = config.branch();
    let url = remote_url(username, repo_name, protocol)?;

    let (repo, workdir) = open_repository(config.cli_args.path.as_ref())?;
    log::debug!("Publishing {}", workdir.display());

    if config.cli_args.create {
        let client = GithubConfig::get_client(config, username)?;
        client
            .ensure_repo(
                repo_name,
                config.cli_args.private,
                config.cli_args.description.as_deref(),
            )
            .await?;
    }

    if config.cli_args.check_access {
        if protocol == Protocol::Ssh {
            match check_ssh_access().await {
                SshAccess::Authenticated => log::info!("SSH access to GitHub checked"),
                SshAccess::Denied(msg) => log::warn!("SSH access to GitHub failed: {msg}"),
                SshAccess::Unavailable(msg) => log::warn!("SSH access not checked: {msg}"),
            }
        } else {
            log::info!("Not checking ssh access for a {protocol} remote");
        }
    }

    match ensure_remote(&repo, &remote_name, &url)? {
        RemoteAction::Added => writeln!(out, "Added remote '{remote_name}': {url}")?,
        RemoteAction::Updated => writeln!(out, "Updated remote '{remote_name}': {url}")?,
        RemoteAction::Unchanged => writeln!(out, "Remote '{remote_name}' already set: {url}")?,
    }
    if let Some(current) = current_branch(&repo)? {
        if current != branch {
            log::info!("Renaming branch '{current}' to '{branch}'");
        }
    }
    rename_current_branch(&repo, &branch)?;
    drop(repo);

    writeln!(out, "Pushing '{branch}' to GitHub...")?;
    out.flush()?;
    let status = pusher.push(&workdir, &remote_name, &branch).await?;

    let app_file = config.app_file();
    let ctx = ReportContext {
        username,
        repo_name,
        branch: &branch,
        remote_url: &url,
        app_file: &app_file,
        target: config.target(),
    };
    if status.success() {
        write_success(out, &ctx)?;
        Ok(0)
    } else {
        log::debug!("Push failed with {:?}", status.code);
        write_failure(out, &ctx)?;
        Ok(1)
    }
}
