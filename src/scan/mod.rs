//! Video file discovery
//!
//! This module walks a source directory and collects candidate videos:
//! - Extension filtering against a case-insensitive extension set
//! - Filename filtering against a compiled pattern
//! - Depth-first, pre-order traversal with deterministic ordering

pub mod extensions;
pub mod walker;

use std::path::PathBuf;

pub use extensions::VideoExtensionSet;
pub use walker::discover_video_files;

/// A video file accepted by discovery
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DiscoveredFile {
    /// Full path, rooted at the resolved source directory
    pub absolute_path: PathBuf,
    /// Bare file name, used as the playlist title
    pub display_name: String,
}
