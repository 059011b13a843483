use std::path::PathBuf;

use thiserror::Error;

/// Main error type for playlist generation
#[derive(Error, Debug)]
pub enum PlaylistError {
    #[error("{0}")]
    InvalidArgument(String),

    #[error("source_search_directory is not a valid directory: {}", .0.display())]
    DirectoryNotFound(PathBuf),

    #[error("Filesystem error at {}: {source}", .path.display())]
    Filesystem {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl PlaylistError {
    pub(crate) fn invalid_argument(message: impl Into<String>) -> Self {
        PlaylistError::InvalidArgument(message.into())
    }

    /// Attach the path that was being read or written to an I/O error
    pub(crate) fn filesystem(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        PlaylistError::Filesystem {
            path: path.into(),
            source,
        }
    }
}

/// Command-line errors
#[derive(Error, Debug)]
pub enum CliError {
    #[error("Unknown argument: {0}")]
    UnknownArgument(String),

    #[error("Missing value for argument: {0}")]
    MissingArgumentValue(String),

    #[error("Missing required argument: {0}")]
    MissingRequired(&'static str),

    #[error("--number-of-results must be an integer value.")]
    InvalidNumber(String),

    #[error("{0}")]
    Parse(clap::Error),

    #[error(transparent)]
    Playlist(#[from] PlaylistError),
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, PlaylistError>;
