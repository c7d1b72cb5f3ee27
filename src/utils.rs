//! Utility functions
use std::process::{Output, Stdio};

use tokio::process::Command;
use tokio::time::{timeout, Duration};

use crate::errors::GitPublishError;
use crate::remote::GITHUB_URL;

/// Time given to `ssh -T` before giving up
const SSH_TIMEOUT: Duration = Duration::from_secs(5);

/// Result of the ssh access check
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum SshAccess {
    /// GitHub accepted the key
    Authenticated,
    /// GitHub answered but refused the key, with ssh's message
    Denied(String),
    /// ssh couldn't be run or didn't answer in time
    Unavailable(String),
}

/// Check the ssh access to GitHub with `ssh -T`
///
/// Never fails: a timeout or a missing ssh binary is reported as [`SshAccess::Unavailable`].
pub(crate) async fn check_ssh_access() -> SshAccess {
    let ssh_url = format!("git@{GITHUB_URL}");
    let result = timeout(SSH_TIMEOUT, async {
        Command::new("ssh")
            .arg("-T")
            .arg(&ssh_url)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .await
    })
    .await;
    match result {
        Ok(Ok(output)) => classify_ssh_output(&output),
        Ok(Err(e)) => SshAccess::Unavailable(format!("unable to run ssh: {e}")),
        Err(_) => SshAccess::Unavailable(format!(
            "no answer from {ssh_url} after {}s",
            SSH_TIMEOUT.as_secs()
        )),
    }
}

/// Read the output of `ssh -T git@github.com`
///
/// It exits with 1 even when authenticated, so only the output tells.
pub(crate) fn classify_ssh_output(output: &Output) -> SshAccess {
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    if stdout.contains("successfully authenticated") || stderr.contains("successfully authenticated")
    {
        SshAccess::Authenticated
    } else {
        SshAccess::Denied(stderr.trim().to_string())
    }
}

/// Get password from the user, the prompt goes to the terminal and not to stdout
pub(crate) fn get_password(prompt: &str) -> Result<String, GitPublishError> {
    rpassword::prompt_password(prompt)
        .map_err(|e| GitPublishError::new_with_source("Error reading password", e))
}
