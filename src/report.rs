//! Per-run outcome report

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;

/// Outcome of one video.
#[derive(Debug, Clone, Serialize)]
pub struct VideoReport {
    pub video: PathBuf,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_secs: Option<f64>,
    pub timestamps: Vec<u64>,
    /// Written images, or the planned ones in dry-run mode.
    pub outputs: Vec<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl VideoReport {
    pub fn new(video: impl Into<PathBuf>) -> Self {
        Self {
            video: video.into(),
            duration_secs: None,
            timestamps: Vec::new(),
            outputs: Vec::new(),
            error: None,
        }
    }

    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct BatchReport {
    pub input_path: PathBuf,
    pub dry_run: bool,
    pub started_at: DateTime<Utc>,
    pub videos: Vec<VideoReport>,
}

impl BatchReport {
    pub fn new(input_path: impl Into<PathBuf>, dry_run: bool) -> Self {
        Self {
            input_path: input_path.into(),
            dry_run,
            started_at: Utc::now(),
            videos: Vec::new(),
        }
    }

    pub fn succeeded(&self) -> usize {
        self.videos.iter().filter(|v| v.is_ok()).count()
    }

    pub fn failed(&self) -> usize {
        self.videos.len() - self.succeeded()
    }

    pub fn frames_written(&self) -> usize {
        if self.dry_run {
            return 0;
        }
        self.videos.iter().map(|v| v.outputs.len()).sum()
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn write_json(&self, path: &Path) -> Result<()> {
        fs::write(path, self.to_json()?)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> BatchReport {
        let mut report = BatchReport::new("/videos", false);

        let mut good = VideoReport::new("/videos/a.mp4");
        good.duration_secs = Some(60.0);
        good.timestamps = vec![15, 30, 45];
        good.outputs = good
            .timestamps
            .iter()
            .map(|ts| PathBuf::from(format!("/videos/a_out/00_00_{:02}.jpg", ts)))
            .collect();
        report.videos.push(good);

        let mut bad = VideoReport::new("/videos/broken.mp4");
        bad.error = Some("ffprobe failed".to_string());
        report.videos.push(bad);

        report
    }

    #[test]
    fn test_counters() {
        let report = sample();
        assert_eq!(report.succeeded(), 1);
        assert_eq!(report.failed(), 1);
        assert_eq!(report.frames_written(), 3);

        let mut dry = report.clone();
        dry.dry_run = true;
        assert_eq!(dry.frames_written(), 0);
    }

    #[test]
    fn test_json_shape() {
        let json: serde_json::Value = serde_json::from_str(&sample().to_json().unwrap()).unwrap();
        assert_eq!(json["videos"][0]["timestamps"], serde_json::json!([15, 30, 45]));
        assert!(json["videos"][0].get("error").is_none());
        assert_eq!(json["videos"][1]["error"], "ffprobe failed");
        assert!(json["videos"][1].get("duration_secs").is_none());
        assert!(json["started_at"].is_string());
    }
}
