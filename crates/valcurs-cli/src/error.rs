use thiserror::Error;
use valcurs_core::{CoreError, SourceError, SourceErrorKind};

/// CLI-level error categories mapped to exit codes.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Validation(#[from] valcurs_core::ValidationError),

    #[error("cannot read feed file '{path}': {source}")]
    FeedFile {
        path: String,
        source: std::io::Error,
    },

    #[error(transparent)]
    Source(#[from] SourceError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<CoreError> for CliError {
    fn from(error: CoreError) -> Self {
        match error {
            CoreError::Validation(error) => Self::Validation(error),
            CoreError::Source(error) => Self::Source(error),
            CoreError::Io(error) => Self::Io(error),
        }
    }
}

impl CliError {
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Validation(_) => 2,
            Self::FeedFile { .. } => 10,
            Self::Source(error) => match error.kind() {
                SourceErrorKind::InvalidRequest => 2,
                SourceErrorKind::Unavailable => 3,
                SourceErrorKind::MalformedFeed => 4,
                SourceErrorKind::Render => 5,
            },
            Self::Io(_) => 10,
        }
    }
}
