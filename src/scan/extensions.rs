//! Video extension set

use std::collections::HashSet;
use std::path::Path;

use crate::config::DEFAULT_VIDEO_EXTENSIONS;

/// Case-insensitive set of file extensions treated as video.
///
/// Entries are stored lowercase with a leading dot.
#[derive(Debug, Clone)]
pub struct VideoExtensionSet {
    extensions: HashSet<String>,
}

impl VideoExtensionSet {
    pub fn new<I, S>(extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let extensions = extensions
            .into_iter()
            .map(|ext| normalize(ext.as_ref()))
            .collect();
        Self { extensions }
    }

    /// Check whether a file name carries one of the video extensions
    pub fn matches(&self, file_name: &str) -> bool {
        match extension_of(file_name) {
            Some(ext) => self.extensions.contains(&ext),
            None => false,
        }
    }

    pub fn len(&self) -> usize {
        self.extensions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.extensions.is_empty()
    }
}

impl Default for VideoExtensionSet {
    fn default() -> Self {
        Self::new(DEFAULT_VIDEO_EXTENSIONS)
    }
}

fn normalize(extension: &str) -> String {
    let lower = extension.trim().to_lowercase();
    if lower.starts_with('.') {
        lower
    } else {
        format!(".{}", lower)
    }
}

/// Lowercased extension including the dot, `None` for dotfiles and
/// names without a dot
fn extension_of(file_name: &str) -> Option<String> {
    Path::new(file_name)
        .extension()
        .map(|ext| format!(".{}", ext.to_string_lossy().to_lowercase()))
}
