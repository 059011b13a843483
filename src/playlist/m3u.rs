//! Extended M3U serializer

use std::path::Path;

use crate::error::{PlaylistError, Result};
use crate::scan::DiscoveredFile;

/// Header line of every extended M3U document
pub const M3U_HEADER: &str = "#EXTM3U";

/// Render the playlist text.
///
/// Each entry is an `#EXTINF` line with unknown duration followed by the
/// file's absolute path. The document ends with exactly one newline.
pub fn render_m3u(files: &[DiscoveredFile]) -> String {
    let mut output = String::new();

    output.push_str(M3U_HEADER);
    output.push('\n');

    for file in files {
        output.push_str(&format!("#EXTINF:-1,{}\n", file.display_name));
        output.push_str(&file.absolute_path.to_string_lossy());
        output.push('\n');
    }

    output
}

/// Write playlist text to `path`, creating missing parent directories
pub async fn write_playlist(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        tokio::fs::create_dir_all(parent)
            .await
            .map_err(|e| PlaylistError::filesystem(parent, e))?;
    }

    tokio::fs::write(path, contents)
        .await
        .map_err(|e| PlaylistError::filesystem(path, e))?;

    tracing::debug!("Wrote {} bytes to {:?}", contents.len(), path);
    Ok(())
}
