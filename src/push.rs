//! Push the branch to the remote
use std::{future::Future, path::Path, pin::Pin};

use tokio::process::Command;

use crate::errors::{GitPublishError, GitPublishErrorKind};

/// Exit status of a push
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PushStatus {
    /// Exit code, `None` if the process was killed by a signal
    pub code: Option<i32>,
}

impl PushStatus {
    /// Whether the push succeeded
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

/// Something able to push a branch and set its upstream
pub trait Pusher: Sync + Send {
    /// Push `branch` to `remote` from `workdir`, setting the upstream
    fn push<'a>(
        &'a self,
        workdir: &'a Path,
        remote: &'a str,
        branch: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<PushStatus, GitPublishError>> + Send + 'a>>;
}

/// Pusher calling `git push -u`, so the user's ssh agent and credential helpers are used
#[derive(Debug, Clone)]
pub struct GitCliPusher {
    /// git executable
    program: String,
}

impl GitCliPusher {
    /// Create a pusher running `program`
    pub fn new<S: Into<String>>(program: S) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl Default for GitCliPusher {
    fn default() -> Self {
        Self::new("git")
    }
}

impl Pusher for GitCliPusher {
    fn push<'a>(
        &'a self,
        workdir: &'a Path,
        remote: &'a str,
        branch: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<PushStatus, GitPublishError>> + Send + 'a>> {
        Box::pin(async move {
            log::debug!(
                "Running '{} push -u {remote} {branch}' in {}",
                self.program,
                workdir.display()
            );
            let status = Command::new(&self.program)
                .arg("push")
                .arg("-u")
                .arg(remote)
                .arg(branch)
                .current_dir(workdir)
                .status()
                .await
                .map_err(|e| {
                    GitPublishError::new(GitPublishErrorKind::Process)
                        .with_text(&format!("unable to run '{}': {e}", self.program))
                })?;
            log::debug!("git push exited with {status}");
            Ok(PushStatus {
                code: status.code(),
            })
        })
    }
}
