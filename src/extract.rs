//! Still-frame extraction into `<stem>_out/` next to each video

use crate::error::Result;
use crate::ffmpeg::MediaTools;
use crate::plan::frame_file_name;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Sibling directory that receives a video's frames.
pub fn output_dir_for(video: &Path) -> PathBuf {
    let stem = video
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let parent = video.parent().unwrap_or_else(|| Path::new(""));
    parent.join(format!("{}_out", stem))
}

pub struct FrameExtractor<'a, T: MediaTools + ?Sized> {
    tools: &'a T,
    dry_run: bool,
}

impl<'a, T: MediaTools + ?Sized> FrameExtractor<'a, T> {
    pub fn new(tools: &'a T, dry_run: bool) -> Self {
        Self { tools, dry_run }
    }

    /// Extract one image per timestamp and return the output paths in plan
    /// order. In dry-run mode the paths are only logged.
    ///
    /// The output directory is created in both modes. The first failed
    /// extraction stops the video; frames already written stay on disk.
    pub fn extract(&self, video: &Path, timestamps: &[u64]) -> Result<Vec<PathBuf>> {
        let out_dir = output_dir_for(video);
        fs::create_dir_all(&out_dir)?;

        let name = video
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let tag = if self.dry_run { "DRY-RUN" } else { "EXTRACT" };

        let mut outputs = Vec::with_capacity(timestamps.len());
        for &ts in timestamps {
            let out_file = out_dir.join(frame_file_name(ts));
            info!("[{}] {} -> {} at {} sec", tag, name, out_file.display(), ts);

            if !self.dry_run {
                self.tools.extract_frame(video, ts, &out_file)?;
            }
            outputs.push(out_file);
        }

        Ok(outputs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SamplerError;
    use tempfile::TempDir;

    struct NoTools;

    impl MediaTools for NoTools {
        fn probe_duration(&self, video: &Path) -> Result<f64> {
            Err(SamplerError::Probe {
                path: video.to_path_buf(),
                reason: "unused".to_string(),
            })
        }

        fn extract_frame(&self, video: &Path, offset: u64, _output: &Path) -> Result<()> {
            Err(SamplerError::Extraction {
                path: video.to_path_buf(),
                offset,
                reason: "unused".to_string(),
            })
        }
    }

    #[test]
    fn test_existing_output_dir_is_reused() {
        let dir = TempDir::new().unwrap();
        let video = dir.path().join("clip.mp4");
        let out_dir = dir.path().join("clip_out");
        fs::create_dir(&out_dir).unwrap();
        fs::write(out_dir.join("keep.txt"), b"x").unwrap();

        let outputs = FrameExtractor::new(&NoTools, true).extract(&video, &[15, 30]).unwrap();

        assert_eq!(outputs, vec![out_dir.join("00_00_15.jpg"), out_dir.join("00_00_30.jpg")]);
        assert!(out_dir.join("keep.txt").exists());
    }

    #[test]
    fn test_output_dir_is_sibling() {
        assert_eq!(
            output_dir_for(Path::new("/media/trip/Beach.MP4")),
            PathBuf::from("/media/trip/Beach_out")
        );
        assert_eq!(output_dir_for(Path::new("clip.mp4")), PathBuf::from("clip_out"));
    }
}
