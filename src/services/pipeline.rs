//! The four-stage pipeline: download, separate, resolve title, merge.
//!
//! Stages run strictly in sequence inside one async task. Every
//! failure is terminal for the run; the workspace guard removes
//! intermediates on all exit paths.

use log::{debug, info, warn};
use tokio::sync::mpsc;

use crate::config;
use crate::errors::{AppError, AppResult};
use crate::models::{PipelineReport, PipelineRequest, ProgressUpdate};
use crate::services::media::{self, ScanOutcome};
use crate::services::workspace::Workspace;
use crate::services::{merge, separation, youtube};
use crate::utils::common::sanitize_filename;
use crate::utils::runner::CommandRunner;
use crate::utils::tools;

/// Run the pipeline for one request. Progress updates are advisory;
/// a closed or full channel never affects the run.
pub async fn run(
    request: &PipelineRequest,
    runner: &dyn CommandRunner,
    progress: Option<mpsc::Sender<ProgressUpdate>>,
) -> AppResult<PipelineReport> {
    if !tools::ffmpeg_available() {
        return Err(AppError::FfmpegMissing);
    }
    run_stages(request, runner, progress).await
}

async fn run_stages(
    request: &PipelineRequest,
    runner: &dyn CommandRunner,
    progress: Option<mpsc::Sender<ProgressUpdate>>,
) -> AppResult<PipelineReport> {
    let reference = request.video_input.trim();
    if reference.is_empty() {
        return Err(AppError::EmptyInput);
    }

    let video_id = youtube::extract_video_id(reference);
    let url = youtube::watch_url(&video_id);
    info!("Processing {}", url);

    let workspace = Workspace::create(&request.output_dir)?;
    let batch_size = config::clamp_batch_size(request.batch_size);
    if batch_size != request.batch_size {
        warn!(
            "Batch size {} outside supported range, using {}",
            request.batch_size, batch_size
        );
    }

    checkpoint(&progress, 0.1, "Downloading video...").await;
    youtube::download_streams(runner, &url, workspace.path()).await?;

    let entries = media::list_files(workspace.path())?;
    let video_file = match media::select_video_file(&entries) {
        ScanOutcome::Unique(path) => path,
        ScanOutcome::Ambiguous { chosen, discarded } => {
            // expected with split streams: the audio-only file often
            // shares a video container extension
            debug!(
                "{} video candidates, keeping largest: {}",
                discarded.len() + 1,
                chosen.display()
            );
            chosen
        }
        ScanOutcome::NotFound => return Err(AppError::VideoNotFound),
    };
    let audio_file = match media::select_audio_file(&entries, &video_file) {
        ScanOutcome::Unique(path) => path,
        ScanOutcome::Ambiguous { chosen, discarded } => {
            warn!(
                "Multiple audio candidates ({} discarded), using {}",
                discarded.len(),
                chosen.display()
            );
            chosen
        }
        ScanOutcome::NotFound => return Err(AppError::AudioNotFound),
    };
    debug!("Video stream: {}", video_file.display());
    debug!("Audio stream: {}", audio_file.display());

    checkpoint(&progress, 0.4, "Separating vocals...").await;
    separation::separate_vocals(runner, &audio_file, request.model, batch_size, workspace.path())
        .await?;

    let entries = media::list_files(workspace.path())?;
    let vocals_file = match media::find_vocals_file(&entries) {
        ScanOutcome::Unique(path) => path,
        ScanOutcome::Ambiguous { chosen, .. } => {
            warn!("Multiple vocal stems, using {}", chosen.display());
            chosen
        }
        ScanOutcome::NotFound => return Err(AppError::VocalsNotFound),
    };

    checkpoint(&progress, 0.7, "Getting video title...").await;
    let title = sanitize_filename(&youtube::fetch_title(runner, &url, &video_id).await);

    let destination = workspace.output_dir().join(format!(
        "{}{}.{}",
        title,
        config::OUTPUT_SUFFIX,
        config::OUTPUT_CONTAINER
    ));

    checkpoint(&progress, 0.8, "Merging video with vocals...").await;
    merge::merge_tracks(runner, &video_file, &vocals_file, &destination).await?;

    workspace.close()?;

    checkpoint(&progress, 1.0, "Done!").await;
    let file_name = destination
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| destination.display().to_string());
    info!("Finished: {}", destination.display());

    Ok(PipelineReport {
        message: format!("Success! Video saved to: {file_name}"),
        title,
        output_path: destination,
    })
}

async fn checkpoint(progress: &Option<mpsc::Sender<ProgressUpdate>>, fraction: f32, phase: &str) {
    if let Some(sender) = progress {
        let _ = sender.send(ProgressUpdate::new(fraction, phase)).await;
    }
}
