//! Playlist output module
//!
//! Renders selected files as extended M3U text and writes the document
//! to its destination in a single call.

pub mod m3u;

pub use m3u::{render_m3u, write_playlist};
