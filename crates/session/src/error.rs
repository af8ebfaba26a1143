use std::path::PathBuf;

use metanin_core::BuildError;

pub type Result<T> = std::result::Result<T, SessionError>;

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error(transparent)]
    Build(#[from] BuildError),

    #[error("failed to load content from {}: {reason}", path.display())]
    Content { path: PathBuf, reason: String },
}

impl SessionError {
    pub(crate) fn content(path: impl Into<PathBuf>, err: &anyhow::Error) -> Self {
        Self::Content {
            path: path.into(),
            reason: format!("{err:#}"),
        }
    }

    /// Returns true if the error came from an invalid build edit.
    pub fn is_build_error(&self) -> bool {
        matches!(self, Self::Build(_))
    }
}
