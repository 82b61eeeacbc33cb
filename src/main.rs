use std::path::PathBuf;

use clap::Parser;
use log::{debug, info};
use tokio::sync::mpsc;

use vocanova::config::{DEFAULT_BATCH_SIZE, MAX_BATCH_SIZE, MIN_BATCH_SIZE, SeparationModel};
use vocanova::models::{PipelineRequest, ProgressUpdate};
use vocanova::services::pipeline;
use vocanova::utils::logger;
use vocanova::utils::runner::SystemRunner;
use vocanova::utils::tools;

#[derive(Debug, Parser)]
#[command(
    name = "vocanova",
    version,
    about = "Strip background music from YouTube videos while keeping vocals and dialogue intact"
)]
struct Cli {
    /// YouTube URL or 11-character video ID
    video: String,

    /// Separation model filename
    #[arg(long, default_value_t = SeparationModel::default())]
    model: SeparationModel,

    /// Separator batch size; higher is faster but needs more VRAM
    #[arg(
        long,
        default_value_t = DEFAULT_BATCH_SIZE,
        value_parser = clap::value_parser!(u32).range(MIN_BATCH_SIZE as i64..=MAX_BATCH_SIZE as i64)
    )]
    batch_size: u32,

    /// Directory receiving the finished video
    #[arg(long, default_value = "output")]
    output_dir: PathBuf,

    /// Also print the run report as JSON on success
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() {
    logger::init_logger();
    let cli = Cli::parse();

    tools::log_tool_versions();

    let request = PipelineRequest {
        video_input: cli.video,
        model: cli.model,
        batch_size: cli.batch_size,
        output_dir: cli.output_dir,
    };

    let (progress_tx, mut progress_rx) = mpsc::channel::<ProgressUpdate>(16);
    let progress_task = tokio::spawn(async move {
        while let Some(update) = progress_rx.recv().await {
            info!("[{:>3.0}%] {}", update.fraction * 100.0, update.phase);
        }
    });

    let result = pipeline::run(&request, &SystemRunner, Some(progress_tx)).await;
    // the sender is gone once the run returns, so the logger task ends
    let _ = progress_task.await;

    match result {
        Ok(report) => {
            if cli.json {
                match serde_json::to_string_pretty(&report) {
                    Ok(json) => println!("{json}"),
                    Err(e) => debug!("Could not serialize report: {e}"),
                }
            }
            println!("✅ {}", report.message);
        }
        Err(e) => {
            debug!("Run failed ({})", e.kind());
            eprintln!("❌ {e}");
            std::process::exit(1);
        }
    }
}
