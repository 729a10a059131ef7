//! ffprobe / ffmpeg command wrappers
//!
//! Everything that touches a media file goes through the [`MediaTools`] trait so
//! the planning and orchestration code can run against a fake in tests.

use crate::error::{Result, SamplerError};
use std::io::ErrorKind;
use std::path::Path;
use std::process::{Command, Output};
use tracing::debug;

pub const DEFAULT_FFMPEG: &str = "ffmpeg";
pub const DEFAULT_FFPROBE: &str = "ffprobe";
pub const DEFAULT_QUALITY: u8 = 2;

/// The two external operations the sampler needs.
pub trait MediaTools {
    /// Container duration in seconds.
    fn probe_duration(&self, video: &Path) -> Result<f64>;

    /// Write one still image of `video` at `offset` seconds to `output`,
    /// replacing any existing file.
    fn extract_frame(&self, video: &Path, offset: u64, output: &Path) -> Result<()>;
}

/// Argument builder for a single external invocation.
pub struct FfmpegCommand {
    program: String,
    args: Vec<String>,
}

impl FfmpegCommand {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    pub fn input(mut self, path: impl AsRef<Path>) -> Self {
        self.args.push("-i".to_string());
        self.args.push(path.as_ref().display().to_string());
        self
    }

    pub fn output(mut self, path: impl AsRef<Path>) -> Self {
        self.args.push(path.as_ref().display().to_string());
        self
    }

    pub fn args(mut self, args: &[&str]) -> Self {
        self.args.extend(args.iter().map(|s| s.to_string()));
        self
    }

    pub fn arg_list(&self) -> &[String] {
        &self.args
    }

    /// Run to completion. A non-zero exit is turned into an error by
    /// `on_failure`, which receives the trimmed stderr.
    pub fn execute<F>(self, on_failure: F) -> Result<Output>
    where
        F: FnOnce(String) -> SamplerError,
    {
        debug!("Running: {} {}", self.program, self.args.join(" "));

        let output = Command::new(&self.program)
            .args(&self.args)
            .output()
            .map_err(|e| match e.kind() {
                ErrorKind::NotFound => SamplerError::ToolNotFound(self.program.clone()),
                _ => SamplerError::Io(e),
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            let reason = if stderr.is_empty() {
                format!("exited with {}", output.status)
            } else {
                stderr
            };
            return Err(on_failure(reason));
        }

        Ok(output)
    }
}

/// [`MediaTools`] backed by the system `ffprobe` and `ffmpeg` binaries.
#[derive(Debug, Clone)]
pub struct FfmpegTools {
    pub ffmpeg: String,
    pub ffprobe: String,
    pub quality: u8,
}

impl Default for FfmpegTools {
    fn default() -> Self {
        Self {
            ffmpeg: DEFAULT_FFMPEG.to_string(),
            ffprobe: DEFAULT_FFPROBE.to_string(),
            quality: DEFAULT_QUALITY,
        }
    }
}

impl FfmpegTools {
    pub fn new(ffmpeg: impl Into<String>, ffprobe: impl Into<String>, quality: u8) -> Self {
        Self {
            ffmpeg: ffmpeg.into(),
            ffprobe: ffprobe.into(),
            quality,
        }
    }

    fn probe_command(&self, video: &Path) -> FfmpegCommand {
        FfmpegCommand::new(&self.ffprobe)
            .args(&[
                "-v", "error",
                "-show_entries", "format=duration",
                "-of", "default=noprint_wrappers=1:nokey=1",
            ])
            .output(video)
    }

    fn extract_command(&self, video: &Path, offset: u64, output: &Path) -> FfmpegCommand {
        FfmpegCommand::new(&self.ffmpeg)
            .args(&["-y", "-ss", &offset.to_string()])
            .input(video)
            .args(&["-frames:v", "1", "-q:v", &self.quality.to_string()])
            .output(output)
    }
}

impl MediaTools for FfmpegTools {
    fn probe_duration(&self, video: &Path) -> Result<f64> {
        let probe_error = |reason: String| SamplerError::Probe {
            path: video.to_path_buf(),
            reason,
        };

        let output = self.probe_command(video).execute(probe_error)?;
        parse_duration(&String::from_utf8_lossy(&output.stdout)).map_err(probe_error)
    }

    fn extract_frame(&self, video: &Path, offset: u64, output: &Path) -> Result<()> {
        self.extract_command(video, offset, output)
            .execute(|reason| SamplerError::Extraction {
                path: video.to_path_buf(),
                offset,
                reason,
            })?;
        Ok(())
    }
}

/// Parse ffprobe's bare `format=duration` output.
pub fn parse_duration(stdout: &str) -> std::result::Result<f64, String> {
    let text = stdout.trim();
    let seconds: f64 = text
        .parse()
        .map_err(|_| format!("unparseable duration {:?}", text))?;

    if !seconds.is_finite() || seconds < 0.0 {
        return Err(format!("invalid duration {}", seconds));
    }
    Ok(seconds)
}

/// True if `program -version` can be spawned.
pub fn is_installed(program: &str) -> bool {
    Command::new(program)
        .arg("-version")
        .output()
        .map(|o| o.status.success())
        .unwrap_or(false)
}
