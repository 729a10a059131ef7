// frame_sampler - extract evenly spaced frames from MP4 videos

use anyhow::{Context, Result};
use clap::Parser;
use std::io::IsTerminal;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use frame_sampler::ffmpeg::{DEFAULT_FFMPEG, DEFAULT_FFPROBE, DEFAULT_QUALITY};
use frame_sampler::{run_batch, FfmpegTools, FrameCount, SamplerConfig};

#[derive(Parser)]
#[command(name = "frame_sampler", version, about = "Extract evenly spaced frames from MP4 videos.")]
struct Args {
    /// Directory containing MP4 videos
    input_path: PathBuf,

    /// Recursively search for MP4 files in subdirectories
    #[arg(short = 'R', long)]
    recursive: bool,

    /// Number of frames per video (default: 20)
    #[arg(short = 'n', long, conflicts_with = "per_minute",
          value_parser = clap::value_parser!(u32).range(1..))]
    frames: Option<u32>,

    /// Number of frames per minute of video (mutually exclusive with -n)
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    per_minute: Option<u32>,

    /// Print what would be extracted without running ffmpeg
    #[arg(long)]
    dry_run: bool,

    /// ffmpeg executable
    #[arg(long, env = "FFMPEG_BIN", default_value = DEFAULT_FFMPEG)]
    ffmpeg: String,

    /// ffprobe executable
    #[arg(long, env = "FFPROBE_BIN", default_value = DEFAULT_FFPROBE)]
    ffprobe: String,

    /// JPEG quality passed to ffmpeg as -q:v (2 is best)
    #[arg(short, long, default_value_t = DEFAULT_QUALITY,
          value_parser = clap::value_parser!(u8).range(2..=31))]
    quality: u8,

    /// Write a JSON report of the run to this file
    #[arg(long)]
    report: Option<PathBuf>,

    /// Debug logging (overridden by RUST_LOG)
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<ExitCode> {
    let args = Args::parse();

    let default_level = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(default_level))
        )
        .with_target(false)
        .with_ansi(std::io::stdout().is_terminal())
        .init();

    let frame_count = FrameCount::from_options(args.frames, args.per_minute)?;
    let config = SamplerConfig {
        input_path: args.input_path,
        recursive: args.recursive,
        frame_count,
        dry_run: args.dry_run,
    };
    let tools = FfmpegTools::new(args.ffmpeg, args.ffprobe, args.quality);

    let report = match run_batch(&config, &tools) {
        Ok(report) => report,
        Err(e) if e.is_fatal() => {
            warn!("⚠️ {}", e);
            return Ok(ExitCode::from(1));
        }
        Err(e) => return Err(e.into()),
    };

    info!(
        "Done: {} video(s) ok, {} failed, {} frame(s) written",
        report.succeeded(),
        report.failed(),
        report.frames_written()
    );

    if let Some(path) = args.report {
        report
            .write_json(&path)
            .with_context(|| format!("Failed to write report to {}", path.display()))?;
        info!("Report written to {}", path.display());
    }

    Ok(ExitCode::SUCCESS)
}
