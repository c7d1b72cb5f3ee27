//! Error handling for the git-publish crate.
use std::{error::Error as StdError, fmt};

/// Error type for the git-publish crate.
#[derive(Debug)]
pub struct GitPublishError {
    /// Inner error.
    inner: Box<Inner>,
}

impl GitPublishError {
    /// Create a new error.
    pub(crate) fn new(kind: GitPublishErrorKind) -> Self {
        Self {
            inner: Box::new(Inner { kind, source: None }),
        }
    }

    /// Create a new error with a text as source.
    pub(crate) fn with_text(mut self, text: &str) -> Self {
        self.inner.source = Some(Box::new(std::io::Error::other(text)));
        self
    }

    /// Create a generic error with a message and a source error.
    pub(crate) fn new_with_source<E>(text: &str, source: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        Self {
            inner: Box::new(Inner {
                kind: GitPublishErrorKind::Other(text.to_string()),
                source: Some(Box::new(source)),
            }),
        }
    }

    /// Kind of the error.
    pub fn kind(&self) -> &GitPublishErrorKind {
        &self.inner.kind
    }
}

/// Type alias for a boxed error.
pub(crate) type BoxError = Box<dyn StdError + Send + Sync>;

/// Inner error type for the git-publish crate.
#[derive(Debug)]
struct Inner {
    /// Error kind.
    kind: GitPublishErrorKind,

    /// Source error.
    source: Option<BoxError>,
}

/// Kind of a [`GitPublishError`].
#[derive(Debug, PartialEq, Eq)]
pub enum GitPublishErrorKind {
    /// Error related to the configuration file.
    Config,

    /// Error related to the reqwest crate.
    Reqwest,

    /// Error related to serde.
    Serde,

    /// Error related to Git2.
    Git2,

    /// Error while spawning or waiting for a child process.
    Process,

    /// HEAD does not point to a branch, so there is nothing to rename.
    DetachedHead,

    /// A username or repository name can't be used in a URL.
    InvalidName,

    /// Error while looking up a repository on GitHub.
    GetRepo,

    /// Error while creating a repository on GitHub.
    RepoCreation,

    /// Any other error, described by its message.
    Other(String),
}

impl fmt::Display for GitPublishError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.inner.kind {
            GitPublishErrorKind::Other(text) => write!(f, "{text}")?,
            kind => write!(f, "{kind:?}")?,
        }
        if let Some(source) = &self.inner.source {
            write!(f, ": {source}")?;
        }
        Ok(())
    }
}

impl StdError for GitPublishError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.inner.source.as_ref().map(|e| &**e as _)
    }
}

impl From<&str> for GitPublishError {
    fn from(text: &str) -> Self {
        Self::new(GitPublishErrorKind::Other(text.to_string()))
    }
}

impl From<String> for GitPublishError {
    fn from(text: String) -> Self {
        Self::new(GitPublishErrorKind::Other(text))
    }
}

/// Implement `From<$error>` for a kind, keeping the error as source.
macro_rules! impl_from_error {
    ($error:ty, $kind:ident) => {
        impl From<$error> for GitPublishError {
            fn from(e: $error) -> Self {
                Self {
                    inner: Box::new(Inner {
                        kind: GitPublishErrorKind::$kind,
                        source: Some(Box::new(e)),
                    }),
                }
            }
        }
    };
}

impl_from_error!(reqwest::Error, Reqwest);
impl_from_error!(serde_json::Error, Serde);
impl_from_error!(toml::de::Error, Config);
impl_from_error!(toml::ser::Error, Config);
impl_from_error!(std::io::Error, Process);
impl_from_error!(git2::Error, Git2);
impl_from_error!(url::ParseError, InvalidName);

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn display_with_source() {
        let err = GitPublishError::new(GitPublishErrorKind::GetRepo).with_text("Not Found");
        assert_eq!(err.to_string(), "GetRepo: Not Found");
        assert!(err.source().is_some());
    }

    #[test]
    fn display_plain_message() {
        let err: GitPublishError = "Unable to get your home dir".into();
        assert_eq!(err.to_string(), "Unable to get your home dir");
        assert!(err.source().is_none());
    }

    #[test]
    fn git2_conversion_keeps_kind() {
        let err: GitPublishError = git2::Error::from_str("boom").into();
        assert_eq!(err.kind(), &GitPublishErrorKind::Git2);
    }
}
