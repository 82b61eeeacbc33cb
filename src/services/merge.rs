//! Remux of the original video stream with the isolated vocal stem.

use std::ffi::OsString;
use std::path::Path;

use log::{debug, info};

use crate::config;
use crate::errors::{AppError, AppResult};
use crate::utils::common::check_file_exists_and_valid;
use crate::utils::runner::CommandRunner;

/// Combine the original video (codec copied unchanged) with the vocal
/// stem (re-encoded to AAC), truncated to the shorter of the two.
/// An existing destination file is overwritten.
pub async fn merge_tracks(
    runner: &dyn CommandRunner,
    video_file: &Path,
    vocals_file: &Path,
    destination: &Path,
) -> AppResult<()> {
    info!("Merging video with vocals into {}", destination.display());

    let args: Vec<OsString> = vec![
        "-i".into(),
        video_file.as_os_str().to_os_string(),
        "-i".into(),
        vocals_file.as_os_str().to_os_string(),
        "-c:v".into(),
        "copy".into(),
        "-c:a".into(),
        "aac".into(),
        "-b:a".into(),
        config::MERGE_AUDIO_BITRATE.into(),
        "-map".into(),
        "0:v:0".into(),
        "-map".into(),
        "1:a:0".into(),
        "-shortest".into(),
        "-y".into(),
        destination.as_os_str().to_os_string(),
    ];

    let output = runner.run("ffmpeg", &args, None).await;
    if !output.success {
        return Err(AppError::MergeFailed(output.stderr));
    }

    // ffmpeg can exit zero without writing anything, e.g. when the
    // input had no mappable streams
    if !check_file_exists_and_valid(destination).await {
        return Err(AppError::MergeFailed(
            "ffmpeg reported success but produced no output file".to_string(),
        ));
    }

    debug!("Merge finished");
    Ok(())
}
