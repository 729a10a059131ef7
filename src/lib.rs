//! frame_sampler - evenly spaced still frames from MP4 videos
//!
//! Durations come from `ffprobe` and frames are written by `ffmpeg`; both run
//! as child processes. Each video gets a sibling `<stem>_out/` directory with
//! one `HH_MM_SS.jpg` per planned timestamp.

pub mod batch;
pub mod collect;
pub mod error;
pub mod extract;
pub mod ffmpeg;
pub mod plan;
pub mod report;

pub use batch::{run_batch, SamplerConfig};
pub use collect::collect_videos;
pub use error::{Result, SamplerError};
pub use extract::{output_dir_for, FrameExtractor};
pub use ffmpeg::{FfmpegCommand, FfmpegTools, MediaTools};
pub use plan::{frame_file_name, plan_timestamps, FrameCount};
pub use report::{BatchReport, VideoReport};
