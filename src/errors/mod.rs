// Error handling module
// One variant per failure class the pipeline can report

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("FFmpeg not found! Please install FFmpeg first.")]
    FfmpegMissing,

    #[error("Please enter a YouTube URL or video ID")]
    EmptyInput,

    #[error("Download failed: {0}")]
    DownloadFailed(String),

    #[error("No video file found after download")]
    VideoNotFound,

    #[error("No audio file found after download")]
    AudioNotFound,

    #[error("Vocal separation failed: {0}")]
    SeparationFailed(String),

    #[error("Vocals file not found after separation")]
    VocalsNotFound,

    #[error("Merge failed: {0}")]
    MergeFailed(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl AppError {
    /// Stable failure-class label for diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            AppError::FfmpegMissing => "ffmpeg_missing",
            AppError::EmptyInput => "empty_input",
            AppError::DownloadFailed(_) => "download",
            AppError::VideoNotFound => "video_not_found",
            AppError::AudioNotFound => "audio_not_found",
            AppError::SeparationFailed(_) => "separation",
            AppError::VocalsNotFound => "vocals_not_found",
            AppError::MergeFailed(_) => "merge",
            AppError::Io(_) => "io",
            AppError::Other(_) => "other",
        }
    }
}

// Result type alias for application
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stage_failures_carry_tool_stderr_verbatim() {
        let err = AppError::DownloadFailed("network error".to_string());
        assert_eq!(err.to_string(), "Download failed: network error");

        let err = AppError::SeparationFailed("CUDA out of memory".to_string());
        assert_eq!(err.to_string(), "Vocal separation failed: CUDA out of memory");
    }

    #[test]
    fn artifact_failures_have_fixed_messages() {
        assert_eq!(
            AppError::VideoNotFound.to_string(),
            "No video file found after download"
        );
        assert_eq!(
            AppError::VocalsNotFound.to_string(),
            "Vocals file not found after separation"
        );
    }
}
