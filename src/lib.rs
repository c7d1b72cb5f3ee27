//! # git-publish
//!
//! Push a local repository to GitHub and show how to deploy it
//!
//! ## Usage
//!
//! ```txt
//! Usage: git-publish [OPTIONS] [GITHUB_USERNAME] [REPO_NAME]
//!
//! Arguments:
//!   [GITHUB_USERNAME]  GitHub username owning the repository
//!   [REPO_NAME]        Name of the GitHub repository
//!
//! Options:
//!   -r, --remote <REMOTE>      Remote name [default: origin]
//!   -b, --branch <BRANCH>      Branch to push, the current branch is renamed to it [default: main]
//!   -p, --protocol <PROTOCOL>  Protocol of the remote URL [default: https] [possible values: https, ssh]
//!   -t, --target <TARGET>      Where the app is deployed afterwards [default: streamlit] [possible values: streamlit, railway]
//!   -C, --path <PATH>          Path of the repository [default: current directory]
//!       --create               Create the repository on GitHub if it doesn't exist
//!       --private              Create the repository as private
//!       --description <DESC>   Description of the created repository
//!       --check-access         Check the ssh access to GitHub before pushing
//!   -c, --config <CONFIG>      Custom configuration file path
//!       --show-config-path     Show the current config path
//!   -v, --verbose...           Verbose mode (-v, -vv)
//!   -h, --help                 Print help
//! ```

#![warn(clippy::all, rust_2018_idioms)]
#![deny(
    missing_docs,
    clippy::all,
    clippy::missing_docs_in_private_items,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::missing_docs_in_private_items))]

pub(crate) mod cli;
pub(crate) mod config;
pub(crate) mod errors;
pub(crate) mod macros;
pub(crate) mod publish;
pub(crate) mod push;
pub(crate) mod remote;
pub(crate) mod report;
pub(crate) mod utils;
pub(crate) use macros::config_password;

mod github;

pub use cli::{git_publish_main, run, GitPublishCli, USAGE};
pub use config::GitPublishConfig;
pub use errors::{GitPublishError, GitPublishErrorKind};
pub use publish::publish;
pub use push::{GitCliPusher, PushStatus, Pusher};
pub use remote::{ensure_remote, remote_url, rename_current_branch, Protocol, RemoteAction};
pub use report::{write_failure, write_success, DeployTarget, ReportContext};
