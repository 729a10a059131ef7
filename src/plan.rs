//! Timestamp planning
//!
//! Frames are placed at `floor(i * duration / (n + 1))` for `i = 1..=n`, which
//! keeps them strictly inside the video and skips the first and last instant.
//! Short videos with many frames can produce repeated seconds; those map to the
//! same output name and the later extraction overwrites the earlier one.

use crate::error::{Result, SamplerError};

pub const DEFAULT_FRAMES: u32 = 20;

/// How many frames to take from each video.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameCount {
    /// The same count for every video.
    Fixed(u32),
    /// A density, scaled by each video's length in minutes.
    PerMinute(u32),
}

impl Default for FrameCount {
    fn default() -> Self {
        FrameCount::Fixed(DEFAULT_FRAMES)
    }
}

impl FrameCount {
    /// Build from the two mutually exclusive options. Neither given means the
    /// fixed default.
    pub fn from_options(frames: Option<u32>, per_minute: Option<u32>) -> Result<Self> {
        match (frames, per_minute) {
            (Some(_), Some(_)) => Err(SamplerError::Configuration(
                "--frames and --per-minute are mutually exclusive".to_string(),
            )),
            (Some(0), None) => Err(SamplerError::Configuration(
                "frame count must be at least 1".to_string(),
            )),
            (None, Some(0)) => Err(SamplerError::Configuration(
                "per-minute rate must be at least 1".to_string(),
            )),
            (Some(n), None) => Ok(FrameCount::Fixed(n)),
            (None, Some(rate)) => Ok(FrameCount::PerMinute(rate)),
            (None, None) => Ok(FrameCount::default()),
        }
    }

    /// Frame count for a video of `duration` seconds.
    ///
    /// Per-minute mode rounds half to even and never returns less than 1.
    /// The count grows linearly with `rate * minutes` and is not capped
    /// below `u32::MAX`; a rate above 60 yields more frames than whole
    /// seconds, which only repeats timestamps.
    pub fn resolve(&self, duration: f64) -> u32 {
        match *self {
            FrameCount::Fixed(n) => n,
            FrameCount::PerMinute(rate) => {
                let n = (rate as f64 * (duration / 60.0)).round_ties_even();
                if n >= 1.0 {
                    // saturate rather than wrap on absurd durations
                    n.min(u32::MAX as f64) as u32
                } else {
                    1
                }
            }
        }
    }
}

/// Evenly spaced whole-second offsets into a video of `duration` seconds.
pub fn plan_timestamps(duration: f64, count: u32) -> Vec<u64> {
    let slots = count as f64 + 1.0;
    (1..=count)
        .map(|i| (i as f64 * duration / slots).floor().max(0.0) as u64)
        .collect()
}

/// `HH_MM_SS.jpg` for an offset in seconds. Hours are not capped at two digits.
pub fn frame_file_name(offset: u64) -> String {
    let hours = offset / 3600;
    let minutes = (offset % 3600) / 60;
    let seconds = offset % 60;
    format!("{:02}_{:02}_{:02}.jpg", hours, minutes, seconds)
}
