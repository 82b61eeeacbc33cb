//! Vocal stem extraction via the external `audio-separator` tool.

use std::ffi::OsString;
use std::path::Path;

use log::{debug, info};

use crate::config::{self, SeparationModel};
use crate::errors::{AppError, AppResult};
use crate::utils::runner::CommandRunner;

/// Run the separator on the downloaded audio stream. The vocal stem
/// lands in the workspace as an uncompressed file whose name carries
/// the vocals marker; [`crate::services::media::find_vocals_file`]
/// locates it afterwards.
pub async fn separate_vocals(
    runner: &dyn CommandRunner,
    audio_file: &Path,
    model: SeparationModel,
    batch_size: u32,
    workspace: &Path,
) -> AppResult<()> {
    info!(
        "Separating vocals with {} (batch size {})",
        model.filename(),
        batch_size
    );

    let args: Vec<OsString> = vec![
        audio_file.as_os_str().to_os_string(),
        "--model_filename".into(),
        model.filename().into(),
        "--mdx_batch_size".into(),
        batch_size.to_string().into(),
        "--output_dir".into(),
        workspace.as_os_str().to_os_string(),
        "--output_format".into(),
        config::SEPARATION_OUTPUT_FORMAT.into(),
    ];

    let output = runner.run("audio-separator", &args, None).await;
    if !output.success {
        return Err(AppError::SeparationFailed(output.stderr));
    }

    debug!("Separation finished");
    Ok(())
}
