//! End-to-end playlist tests

use std::collections::{HashMap, HashSet};

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::error::PlaylistError;
use crate::generator::PlaylistGenerator;
use crate::integration::fixtures::{parse_entries, MediaTree};
use crate::pattern::FilenamePattern;
use crate::request::PlaylistRequest;

const TV_VIDEOS: [&str; 6] = [
    "S01E01.mkv",
    "S01E02.mkv",
    "S01E03.MP4",
    "S02E01.mkv",
    "S02E02.webm",
    "trailer.mov",
];

#[tokio::test]
async fn test_returns_resolved_output_path() {
    let tree = MediaTree::tv_library();
    let output = tree.root().join("lists/./sub/../all.m3u");
    let request = PlaylistRequest::new(tree.root(), &output, 10);

    let written = PlaylistGenerator::default()
        .create_playlist(&request)
        .await
        .unwrap();

    assert_eq!(written, tree.path("lists/all.m3u"));
    assert!(written.is_absolute());
    assert!(written.is_file());
}

#[tokio::test]
async fn test_lists_every_match_when_count_is_large() {
    let tree = MediaTree::tv_library();
    let output = tree.path("all.m3u");
    let request = PlaylistRequest::new(tree.root(), &output, 100);

    PlaylistGenerator::default()
        .create_playlist(&request)
        .await
        .unwrap();

    let playlist = std::fs::read_to_string(&output).unwrap();
    let entries = parse_entries(&playlist);
    assert_eq!(entries.len(), TV_VIDEOS.len());

    let titles: HashSet<&str> = entries.iter().map(|(title, _)| title.as_str()).collect();
    let expected: HashSet<&str> = TV_VIDEOS.iter().copied().collect();
    assert_eq!(titles, expected);

    for (title, path) in &entries {
        assert!(path.ends_with(title.as_str()));
        assert!(std::path::Path::new(path).is_absolute());
    }
    assert!(playlist.ends_with('\n') && !playlist.ends_with("\n\n"));
}

#[tokio::test]
async fn test_count_limits_entries() {
    let tree = MediaTree::tv_library();
    let output = tree.path("three.m3u");
    let request = PlaylistRequest::new(tree.root(), &output, 3);

    PlaylistGenerator::default()
        .create_playlist(&request)
        .await
        .unwrap();

    let entries = parse_entries(&std::fs::read_to_string(&output).unwrap());
    assert_eq!(entries.len(), 3);
    let unique: HashSet<_> = entries.iter().collect();
    assert_eq!(unique.len(), 3);
    assert!(entries
        .iter()
        .all(|(title, _)| TV_VIDEOS.contains(&title.as_str())));
}

#[tokio::test]
async fn test_pattern_restricts_matches() {
    let tree = MediaTree::tv_library();
    let output = tree.path("s01.m3u");
    let request = PlaylistRequest::new(tree.root(), &output, 10)
        .with_pattern(FilenamePattern::new("^S01").unwrap());

    PlaylistGenerator::default()
        .create_playlist(&request)
        .await
        .unwrap();

    let mut titles: Vec<String> = parse_entries(&std::fs::read_to_string(&output).unwrap())
        .into_iter()
        .map(|(title, _)| title)
        .collect();
    titles.sort();
    assert_eq!(titles, vec!["S01E01.mkv", "S01E02.mkv", "S01E03.MP4"]);
}

#[tokio::test]
async fn test_no_matches_writes_header_only() {
    let tree = MediaTree::with_files(&["readme.txt", "cover.png"]);
    let output = tree.path("empty.m3u");
    let request = PlaylistRequest::new(tree.root(), &output, 5);

    PlaylistGenerator::default()
        .create_playlist(&request)
        .await
        .unwrap();

    assert_eq!(std::fs::read_to_string(&output).unwrap(), "#EXTM3U\n");
}

#[tokio::test]
async fn test_zero_count_rejected() {
    let tree = MediaTree::tv_library();
    let output = tree.path("none.m3u");
    let request = PlaylistRequest::new(tree.root(), &output, 0);

    let err = PlaylistGenerator::default()
        .create_playlist(&request)
        .await
        .unwrap_err();
    assert!(matches!(err, PlaylistError::InvalidArgument(_)));
    assert!(!output.exists());
}

#[tokio::test]
async fn test_missing_source_rejected() {
    let tree = MediaTree::new();
    let request = PlaylistRequest::new(tree.path("nowhere"), tree.path("out.m3u"), 1);

    let err = PlaylistGenerator::default()
        .create_playlist(&request)
        .await
        .unwrap_err();
    assert!(matches!(err, PlaylistError::DirectoryNotFound(_)));
}

#[tokio::test]
async fn test_deeply_nested_video() {
    let tree = MediaTree::with_files(&["a/b/c/video.mkv"]);
    let output = tree.path("nested.m3u");
    let request = PlaylistRequest::new(tree.root(), &output, 1);

    PlaylistGenerator::default()
        .create_playlist(&request)
        .await
        .unwrap();

    let entries = parse_entries(&std::fs::read_to_string(&output).unwrap());
    assert_eq!(
        entries,
        vec![(
            "video.mkv".to_string(),
            tree.path("a/b/c/video.mkv").to_string_lossy().into_owned()
        )]
    );
}

#[tokio::test]
async fn test_order_is_uniformly_random() {
    let tree = MediaTree::with_files(&["a.mkv", "b.mkv", "c.mkv"]);
    let output = tree.path("shuffle.m3u");
    let request = PlaylistRequest::new(tree.root(), &output, 3);
    let generator = PlaylistGenerator::default();
    let mut rng = StdRng::seed_from_u64(11);
    let mut counts: HashMap<Vec<String>, usize> = HashMap::new();

    for _ in 0..600 {
        generator
            .create_playlist_with_rng(&request, &mut rng)
            .await
            .unwrap();
        let order = parse_entries(&std::fs::read_to_string(&output).unwrap())
            .into_iter()
            .map(|(title, _)| title)
            .collect();
        *counts.entry(order).or_default() += 1;
    }

    assert_eq!(counts.len(), 6);
    for (order, count) in counts {
        assert!(
            (50..=150).contains(&count),
            "order {:?} seen {} times",
            order,
            count
        );
    }
}
