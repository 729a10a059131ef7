//! Batch driver: collect, then probe/plan/extract each video in turn

use crate::collect::collect_videos;
use crate::error::{Result, SamplerError};
use crate::extract::FrameExtractor;
use crate::ffmpeg::MediaTools;
use crate::plan::{plan_timestamps, FrameCount};
use crate::report::{BatchReport, VideoReport};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

#[derive(Debug, Clone)]
pub struct SamplerConfig {
    pub input_path: PathBuf,
    pub recursive: bool,
    pub frame_count: FrameCount,
    pub dry_run: bool,
}

impl SamplerConfig {
    pub fn new(input_path: impl Into<PathBuf>) -> Self {
        Self {
            input_path: input_path.into(),
            recursive: false,
            frame_count: FrameCount::default(),
            dry_run: false,
        }
    }
}

/// Process every video under the input path.
///
/// Only a missing input path or an empty collection is an error here. A
/// video that fails is recorded in the report and the batch moves on.
pub fn run_batch<T: MediaTools + ?Sized>(config: &SamplerConfig, tools: &T) -> Result<BatchReport> {
    if !config.input_path.exists() {
        return Err(SamplerError::PathNotFound(config.input_path.clone()));
    }

    let videos = collect_videos(&config.input_path, config.recursive);
    if videos.is_empty() {
        return Err(SamplerError::NoFilesFound(config.input_path.clone()));
    }
    info!("Found {} video(s) in {}", videos.len(), config.input_path.display());

    let extractor = FrameExtractor::new(tools, config.dry_run);
    let mut report = BatchReport::new(&config.input_path, config.dry_run);

    for video in &videos {
        let mut entry = VideoReport::new(video);
        if let Err(e) = process_video(video, config.frame_count, tools, &extractor, &mut entry) {
            warn!("⚠️ Error processing {}: {}", video.display(), e);
            entry.error = Some(e.to_string());
        }
        report.videos.push(entry);
    }

    Ok(report)
}

fn process_video<T: MediaTools + ?Sized>(
    video: &Path,
    frame_count: FrameCount,
    tools: &T,
    extractor: &FrameExtractor<'_, T>,
    entry: &mut VideoReport,
) -> Result<()> {
    let duration = tools.probe_duration(video)?;
    entry.duration_secs = Some(duration);

    let count = frame_count.resolve(duration);
    entry.timestamps = plan_timestamps(duration, count);
    entry.outputs = extractor.extract(video, &entry.timestamps)?;
    Ok(())
}
