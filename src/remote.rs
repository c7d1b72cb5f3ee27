//! Remote URL, remote configuration and branch renaming
use git2::{Branch, ErrorCode, Repository};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::errors::{GitPublishError, GitPublishErrorKind};

/// GitHub host
pub(crate) const GITHUB_URL: &str = "github.com";

/// Protocol used in the remote URL
#[derive(
    clap::ValueEnum, Serialize, Deserialize, Debug, Default, Clone, Copy, PartialEq, Eq,
)]
#[serde(rename_all = "lowercase")]
pub enum Protocol {
    /// `https://github.com/<user>/<repo>.git`
    #[default]
    Https,
    /// `git@github.com:<user>/<repo>.git`
    Ssh,
}

impl std::fmt::Display for Protocol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Protocol::Https => write!(f, "https"),
            Protocol::Ssh => write!(f, "ssh"),
        }
    }
}

/// What [`ensure_remote`] did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoteAction {
    /// The remote didn't exist and was added
    Added,
    /// The remote existed with another URL, which was replaced
    Updated,
    /// The remote already had this URL
    Unchanged,
}

/// Check that a name can be used as one path segment of the URL
fn check_segment(value: &str, what: &str) -> Result<(), GitPublishError> {
    if value.is_empty()
        || value == "."
        || value == ".."
        || value
            .chars()
            .any(|c| c.is_whitespace() || matches!(c, '/' | '\\' | '#' | '?' | ':'))
    {
        return Err(GitPublishError::new(GitPublishErrorKind::InvalidName)
            .with_text(&format!("invalid {what} '{value}'")));
    }
    Ok(())
}

/// Build the GitHub remote URL of `username/repo_name`
/// # Errors
/// Error if one of the names is empty, a dot segment, or contains a separator or a space
pub fn remote_url(
    username: &str,
    repo_name: &str,
    protocol: Protocol,
) -> Result<String, GitPublishError> {
    check_segment(username, "username")?;
    check_segment(repo_name, "repository name")?;
    match protocol {
        Protocol::Https => {
            let url = format!("https://{GITHUB_URL}/{username}/{repo_name}.git");
            // a name the URL parser would rewrite doesn't address this repository
            if Url::parse(&url)?.as_str() != url {
                return Err(GitPublishError::new(GitPublishErrorKind::InvalidName)
                    .with_text(&format!("'{username}/{repo_name}' is not a valid URL path")));
            }
            Ok(url)
        }
        Protocol::Ssh => Ok(format!("git@{GITHUB_URL}:{username}/{repo_name}.git")),
    }
}

/// Web page of the repository
pub fn web_url(username: &str, repo_name: &str) -> String {
    format!("https://{GITHUB_URL}/{username}/{repo_name}")
}

/// Add the remote, or point the existing one to `url`
/// # Errors
/// Error if the remote can't be read or written
pub fn ensure_remote(
    repo: &Repository,
    name: &str,
    url: &str,
) -> Result<RemoteAction, GitPublishError> {
    match repo.find_remote(name) {
        Ok(remote) => {
            if remote.url() == Some(url) {
                log::debug!("Remote {name} already points to {url}");
                return Ok(RemoteAction::Unchanged);
            }
            log::debug!(
                "Remote {name} points to {}, replacing",
                remote.url().unwrap_or("<non utf-8>")
            );
            repo.remote_set_url(name, url)?;
            Ok(RemoteAction::Updated)
        }
        Err(e) if e.code() == ErrorCode::NotFound => {
            repo.remote(name, url)?;
            Ok(RemoteAction::Added)
        }
        Err(e) => Err(e.into()),
    }
}

/// Force-rename the current branch to `target`, like `git branch -M <target>`
/// # Errors
/// Error if HEAD is detached or the rename fails
pub fn rename_current_branch(repo: &Repository, target: &str) -> Result<(), GitPublishError> {
    let head = match repo.head() {
        Ok(head) => head,
        Err(e) if e.code() == ErrorCode::UnbornBranch => {
            // nothing committed yet, only HEAD has to move
            repo.set_head(&format!("refs/heads/{target}"))?;
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };
    if !head.is_branch() {
        return Err(GitPublishError::new(GitPublishErrorKind::DetachedHead)
            .with_text("HEAD is not on a branch"));
    }
    let mut branch = Branch::wrap(head);
    if branch.name()? == Some(target) {
        return Ok(());
    }
    branch.rename(target, true)?;
    Ok(())
}

/// Name of the branch HEAD points to (born or not)
pub(crate) fn current_branch(repo: &Repository) -> Result<Option<String>, GitPublishError> {
    match repo.head() {
        Ok(head) if head.is_branch() => Ok(head.shorthand().map(str::to_string)),
        Ok(_) => Ok(None),
        Err(e) if e.code() == ErrorCode::UnbornBranch => {
            let head = repo.find_reference("HEAD")?;
            Ok(head
                .symbolic_target()
                .and_then(|t| t.strip_prefix("refs/heads/"))
                .map(str::to_string))
        }
        Err(e) => Err(e.into()),
    }
}
