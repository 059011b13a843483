//! Playlist generator - validate, discover, select, write

use std::path::PathBuf;

use crate::config::GeneratorConfig;
use crate::error::Result;
use crate::pattern::FilenamePattern;
use crate::playlist::{render_m3u, write_playlist};
use crate::request::{resolve_path, validate_request, PlaylistRequest};
use crate::scan::{discover_video_files, DiscoveredFile, VideoExtensionSet};
use crate::select::{select_random, RandomIndex};

/// Builds shuffled M3U playlists from a directory of videos.
///
/// Holds nothing but its extension set, so one instance can serve any
/// number of requests.
#[derive(Debug, Clone, Default)]
pub struct PlaylistGenerator {
    extensions: VideoExtensionSet,
}

impl PlaylistGenerator {
    pub fn new(config: &GeneratorConfig) -> Self {
        let extensions = VideoExtensionSet::new(&config.video_extensions);
        if extensions.is_empty() {
            tracing::warn!("No video extensions configured, playlists will be empty");
        } else {
            tracing::debug!("Matching {} video extensions", extensions.len());
        }
        Self { extensions }
    }

    pub fn extensions(&self) -> &VideoExtensionSet {
        &self.extensions
    }

    /// Generate a playlist using the thread-local random generator.
    ///
    /// Returns the absolute path of the written playlist.
    pub async fn create_playlist(&self, request: &PlaylistRequest) -> Result<PathBuf> {
        self.run(request, |files, count| {
            select_random(files, count, &mut rand::rng())
        })
        .await
    }

    /// Generate a playlist drawing shuffle indices from `rng`
    pub async fn create_playlist_with_rng<R>(
        &self,
        request: &PlaylistRequest,
        rng: &mut R,
    ) -> Result<PathBuf>
    where
        R: RandomIndex + Send + ?Sized,
    {
        self.run(request, |files, count| select_random(files, count, rng))
            .await
    }

    async fn run<F>(&self, request: &PlaylistRequest, select: F) -> Result<PathBuf>
    where
        F: FnOnce(&[DiscoveredFile], usize) -> Vec<DiscoveredFile>,
    {
        validate_request(request).await?;

        let source = resolve_path(&request.source_directory)?;
        let output = resolve_path(&request.output_destination)?;
        let pattern = match &request.name_pattern {
            Some(pattern) => pattern.clone(),
            None => FilenamePattern::match_all()?,
        };

        tracing::debug!(
            "Scanning {:?} for videos matching {:?}",
            source,
            pattern.as_str()
        );
        let discovered = discover_video_files(&source, &self.extensions, &pattern).await?;

        // Validation guarantees a positive count.
        let count = usize::try_from(request.result_count).unwrap_or(usize::MAX);
        let selected = select(&discovered, count);

        let contents = render_m3u(&selected);
        write_playlist(&output, &contents).await?;

        tracing::info!(
            "Playlist {:?}: {} of {} discovered files",
            output,
            selected.len(),
            discovered.len()
        );

        Ok(output)
    }
}
