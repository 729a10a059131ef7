//! Video discovery

use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

pub const VIDEO_EXTENSION: &str = "mp4";

/// True when `path` has an `.mp4` extension in any letter case.
pub fn is_mp4(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map_or(false, |ext| ext.eq_ignore_ascii_case(VIDEO_EXTENSION))
}

/// Regular `.mp4` files under `root`, sorted by path.
///
/// Without `recursive` only the direct children of `root` are considered.
/// Symlinks to files count as files; symlinked directories are not entered.
/// Entries that cannot be read are skipped. The caller checks that `root`
/// exists.
pub fn collect_videos(root: &Path, recursive: bool) -> Vec<PathBuf> {
    let mut walker = WalkDir::new(root).follow_links(false).min_depth(1);
    if !recursive {
        walker = walker.max_depth(1);
    }

    let mut videos: Vec<PathBuf> = walker
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(v) => Some(v),
            Err(e) => {
                debug!("Skipping unreadable entry: {}", e);
                None
            }
        })
        .filter(|entry| is_mp4(entry.path()) && entry.path().is_file())
        .map(|entry| entry.into_path())
        .collect();

    videos.sort();
    debug!("Collected {} video(s) under {}", videos.len(), root.display());
    videos
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn touch(path: &Path) {
        fs::write(path, b"").unwrap();
    }

    #[test]
    fn test_extension_case_insensitive() {
        assert!(is_mp4(Path::new("Video.MP4")));
        assert!(is_mp4(Path::new("clip.Mp4")));
        assert!(!is_mp4(Path::new("video.txt")));
        assert!(!is_mp4(Path::new("mp4")));
        assert!(!is_mp4(Path::new("video.mp4.part")));
    }

    #[test]
    fn test_recursive_vs_flat() {
        let dir = TempDir::new().unwrap();
        let root = dir.path();
        fs::create_dir(root.join("sub")).unwrap();
        touch(&root.join("a.mp4"));
        touch(&root.join("sub").join("b.mp4"));
        touch(&root.join("notes.txt"));

        let flat = collect_videos(root, false);
        assert_eq!(flat, vec![root.join("a.mp4")]);

        let deep = collect_videos(root, true);
        assert_eq!(deep, vec![root.join("a.mp4"), root.join("sub").join("b.mp4")]);
    }

    #[test]
    fn test_directories_named_like_videos_are_ignored() {
        let dir = TempDir::new().unwrap();
        let root = dir.path();
        fs::create_dir(root.join("folder.mp4")).unwrap();
        touch(&root.join("Video.MP4"));
        touch(&root.join("video.txt"));

        assert_eq!(collect_videos(root, true), vec![root.join("Video.MP4")]);
    }

    #[cfg(unix)]
    #[test]
    fn test_symlinked_videos_are_collected() {
        let dir = TempDir::new().unwrap();
        let root = dir.path().join("root");
        let elsewhere = dir.path().join("elsewhere");
        fs::create_dir(&root).unwrap();
        fs::create_dir(&elsewhere).unwrap();
        touch(&elsewhere.join("real.mp4"));
        std::os::unix::fs::symlink(elsewhere.join("real.mp4"), root.join("link.mp4")).unwrap();
        std::os::unix::fs::symlink(elsewhere.join("gone.mp4"), root.join("dangling.mp4")).unwrap();
        std::os::unix::fs::symlink(&elsewhere, root.join("linked_dir")).unwrap();

        assert_eq!(collect_videos(&root, false), vec![root.join("link.mp4")]);
        assert_eq!(collect_videos(&root, true), vec![root.join("link.mp4")]);
    }

    #[test]
    fn test_empty_directory() {
        let dir = TempDir::new().unwrap();
        assert!(collect_videos(dir.path(), true).is_empty());
    }
}
