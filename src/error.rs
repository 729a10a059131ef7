use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SamplerError {
    #[error("Input path does not exist: {}", .0.display())]
    PathNotFound(PathBuf),

    #[error("No MP4 files found in {}", .0.display())]
    NoFilesFound(PathBuf),

    #[error("ffprobe failed for {}: {reason}", path.display())]
    Probe { path: PathBuf, reason: String },

    #[error("ffmpeg failed for {} at {offset} sec: {reason}", path.display())]
    Extraction {
        path: PathBuf,
        offset: u64,
        reason: String,
    },

    #[error("Invalid configuration: {0}")]
    Configuration(String),

    #[error("Executable not found in system PATH: {0}")]
    ToolNotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Report serialization failed: {0}")]
    Report(#[from] serde_json::Error),
}

impl SamplerError {
    /// Errors that abort the whole batch rather than a single video.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            SamplerError::PathNotFound(_)
                | SamplerError::NoFilesFound(_)
                | SamplerError::Configuration(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, SamplerError>;
