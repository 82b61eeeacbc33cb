// Domain models module
// Core data structures passed between the presentation layer and the
// pipeline

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::config::{self, SeparationModel};

/// Everything one pipeline run needs from the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineRequest {
    /// Raw user input: a YouTube URL in one of the common shapes, or a
    /// bare 11-character video id.
    pub video_input: String,
    pub model: SeparationModel,
    pub batch_size: u32,
    /// Persistent directory receiving the finished video.
    pub output_dir: PathBuf,
}

impl PipelineRequest {
    /// Request with default model, batch size and output directory.
    pub fn new(video_input: impl Into<String>) -> Self {
        Self {
            video_input: video_input.into(),
            model: SeparationModel::default(),
            batch_size: config::DEFAULT_BATCH_SIZE,
            output_dir: PathBuf::from(config::OUTPUT_DIR),
        }
    }
}

/// Outcome of a successful run.
#[derive(Debug, Clone, Serialize)]
pub struct PipelineReport {
    pub output_path: PathBuf,
    /// Sanitized video title the output file was named after.
    pub title: String,
    pub message: String,
}

/// Coarse progress checkpoint. Advisory only; consumers may drop these
/// without affecting the run.
#[derive(Debug, Clone, Serialize)]
pub struct ProgressUpdate {
    /// Fraction of the run completed, 0.0 to 1.0.
    pub fraction: f32,
    pub phase: String,
}

impl ProgressUpdate {
    pub fn new(fraction: f32, phase: &str) -> Self {
        Self {
            fraction,
            phase: phase.to_string(),
        }
    }
}
