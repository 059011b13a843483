//! Directory walker - collects video files below a source directory

use std::fs::FileType;
use std::path::{Path, PathBuf};

use crate::error::{PlaylistError, Result};
use crate::pattern::FilenamePattern;

use super::{DiscoveredFile, VideoExtensionSet};

/// One listed directory entry
#[derive(Debug)]
struct Entry {
    path: PathBuf,
    name: String,
    file_type: FileType,
}

/// Walk `root` depth-first and return every file accepted by both the
/// extension set and the pattern.
///
/// Subdirectories are descended into as soon as they are encountered, so
/// the result has the same order a recursive pre-order walk would give.
/// Each directory is listed once. Any read error aborts the walk.
pub async fn discover_video_files(
    root: &Path,
    extensions: &VideoExtensionSet,
    pattern: &FilenamePattern,
) -> Result<Vec<DiscoveredFile>> {
    let mut files = Vec::new();
    let mut stack = vec![list_directory(root).await?.into_iter()];

    while let Some(listing) = stack.last_mut() {
        let Some(entry) = listing.next() else {
            stack.pop();
            continue;
        };

        if entry.file_type.is_dir() {
            stack.push(list_directory(&entry.path).await?.into_iter());
            continue;
        }

        if !entry.file_type.is_file() {
            tracing::trace!("Skipping non-regular entry {:?}", entry.path);
            continue;
        }

        if !extensions.matches(&entry.name) || !pattern.is_match(&entry.name) {
            continue;
        }

        tracing::trace!("Discovered {:?}", entry.path);
        files.push(DiscoveredFile {
            absolute_path: entry.path,
            display_name: entry.name,
        });
    }

    tracing::debug!("Discovered {} video files under {:?}", files.len(), root);
    Ok(files)
}

/// List a directory once, ordered by file name
async fn list_directory(dir: &Path) -> Result<Vec<Entry>> {
    tracing::debug!("Listing {:?}", dir);

    let mut read_dir = tokio::fs::read_dir(dir)
        .await
        .map_err(|e| PlaylistError::filesystem(dir, e))?;

    let mut entries = Vec::new();
    while let Some(dir_entry) = read_dir
        .next_entry()
        .await
        .map_err(|e| PlaylistError::filesystem(dir, e))?
    {
        let path = dir_entry.path();
        let file_type = dir_entry
            .file_type()
            .await
            .map_err(|e| PlaylistError::filesystem(&path, e))?;
        let name = dir_entry.file_name().to_string_lossy().into_owned();
        entries.push(Entry {
            path,
            name,
            file_type,
        });
    }

    entries.sort_by(|a, b| a.path.file_name().cmp(&b.path.file_name()));
    Ok(entries)
}
