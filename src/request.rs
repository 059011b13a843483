//! Playlist request and validation

use std::path::{Component, Path, PathBuf};

use crate::error::{PlaylistError, Result};
use crate::pattern::FilenamePattern;

/// Input parameters of a single playlist run
#[derive(Debug, Clone)]
pub struct PlaylistRequest {
    /// Directory searched recursively for video files
    pub source_directory: PathBuf,
    /// Where the playlist is written
    pub output_destination: PathBuf,
    /// Maximum number of entries in the playlist, must be positive
    pub result_count: i64,
    /// Filename filter, match-all when absent
    pub name_pattern: Option<FilenamePattern>,
}

impl PlaylistRequest {
    pub fn new(
        source_directory: impl Into<PathBuf>,
        output_destination: impl Into<PathBuf>,
        result_count: i64,
    ) -> Self {
        Self {
            source_directory: source_directory.into(),
            output_destination: output_destination.into(),
            result_count,
            name_pattern: None,
        }
    }

    pub fn with_pattern(mut self, pattern: FilenamePattern) -> Self {
        self.name_pattern = Some(pattern);
        self
    }
}

/// Check that a request is well formed and that its source directory exists
pub async fn validate_request(request: &PlaylistRequest) -> Result<()> {
    if is_blank(&request.source_directory) {
        return Err(PlaylistError::invalid_argument(
            "source_search_directory must not be empty.",
        ));
    }

    if is_blank(&request.output_destination) {
        return Err(PlaylistError::invalid_argument(
            "output_playlist_file_destination must not be empty.",
        ));
    }

    if request.result_count <= 0 {
        return Err(PlaylistError::invalid_argument(
            "number_of_results must be greater than 0.",
        ));
    }

    // Any stat failure counts as a missing directory.
    let is_dir = tokio::fs::metadata(&request.source_directory)
        .await
        .map(|meta| meta.is_dir())
        .unwrap_or(false);

    if !is_dir {
        return Err(PlaylistError::DirectoryNotFound(
            request.source_directory.clone(),
        ));
    }

    Ok(())
}

fn is_blank(path: &Path) -> bool {
    path.as_os_str().to_string_lossy().trim().is_empty()
}

/// Resolve a path against the working directory and normalize it lexically.
///
/// `.` components are dropped and `..` removes the previous component,
/// without touching the filesystem or following symlinks.
pub fn resolve_path(path: &Path) -> Result<PathBuf> {
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        let cwd = std::env::current_dir().map_err(|e| PlaylistError::filesystem(".", e))?;
        cwd.join(path)
    };

    let mut resolved = PathBuf::new();
    for component in absolute.components() {
        match component {
            Component::Prefix(_) | Component::RootDir | Component::Normal(_) => {
                resolved.push(component.as_os_str())
            }
            Component::CurDir => {}
            Component::ParentDir => {
                resolved.pop();
            }
        }
    }

    Ok(resolved)
}
