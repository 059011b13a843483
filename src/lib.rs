//! Shuffled M3U playlists from a directory of videos
//!
//! A run validates its request, walks the source directory for video
//! files whose names match a pattern, shuffles them, keeps the requested
//! number and writes an extended M3U playlist.

pub mod cli;
pub mod config;
pub mod error;
pub mod generator;
pub mod pattern;
pub mod playlist;
pub mod request;
pub mod scan;
pub mod select;

#[cfg(test)]
mod integration;

pub use config::GeneratorConfig;
pub use error::{CliError, PlaylistError, Result};
pub use generator::PlaylistGenerator;
pub use pattern::FilenamePattern;
pub use request::PlaylistRequest;
pub use scan::{DiscoveredFile, VideoExtensionSet};
pub use select::RandomIndex;
