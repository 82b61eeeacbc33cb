//! yt-dlp driven download and metadata lookup.

use std::ffi::OsString;
use std::path::Path;

use log::{debug, info, warn};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::errors::{AppError, AppResult};
use crate::utils::runner::CommandRunner;

static BARE_ID_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z0-9_-]{11}$").unwrap());

/// URL shapes a video id can be extracted from, tried in order.
static URL_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"youtu\.be/([A-Za-z0-9_-]{11})",
        r"watch\?v=([A-Za-z0-9_-]{11})",
        r"/shorts/([A-Za-z0-9_-]{11})",
    ]
    .iter()
    .map(|pattern| Regex::new(pattern).unwrap())
    .collect()
});

/// Extract the canonical video id from a URL, or return the input
/// unchanged when it is already a bare id. Unrecognized input is also
/// returned unchanged; the download stage surfaces the failure.
pub fn extract_video_id(input: &str) -> String {
    if BARE_ID_RE.is_match(input) {
        return input.to_string();
    }

    for pattern in URL_PATTERNS.iter() {
        if let Some(captures) = pattern.captures(input) {
            return captures[1].to_string();
        }
    }

    input.to_string()
}

/// Long-form watch URL, the shape yt-dlp is invoked with.
pub fn watch_url(video_id: &str) -> String {
    format!("https://www.youtube.com/watch?v={video_id}")
}

/// Download the best available video and audio streams into the
/// workspace, one file per stream, named by format id.
pub async fn download_streams(
    runner: &dyn CommandRunner,
    url: &str,
    workspace: &Path,
) -> AppResult<()> {
    info!("Downloading streams for {}", url);

    let template = format!("{}/%(format_id)s.%(ext)s", workspace.display());
    let args: Vec<OsString> = vec![
        "-f".into(),
        "bv*,ba".into(),
        "-o".into(),
        template.into(),
        url.into(),
    ];

    let output = runner.run("yt-dlp", &args, None).await;
    if !output.success {
        return Err(AppError::DownloadFailed(output.stderr));
    }

    debug!("Download finished");
    Ok(())
}

/// Fetch the human-readable title for the video. Falls back to the
/// given id when the lookup fails or returns nothing.
pub async fn fetch_title(runner: &dyn CommandRunner, url: &str, video_id: &str) -> String {
    let args: Vec<OsString> = vec!["--print".into(), "title".into(), url.into()];
    let output = runner.run("yt-dlp", &args, None).await;

    let title = output.stdout.trim();
    if output.success && !title.is_empty() {
        title.to_string()
    } else {
        warn!("Could not resolve video title, using the video id instead");
        video_id.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_id_is_returned_unchanged() {
        assert_eq!(extract_video_id("dQw4w9WgXcQ"), "dQw4w9WgXcQ");
        assert_eq!(extract_video_id("abc-DEF_123"), "abc-DEF_123");
    }

    #[test]
    fn extracts_id_from_short_link() {
        assert_eq!(
            extract_video_id("https://youtu.be/dQw4w9WgXcQ"),
            "dQw4w9WgXcQ"
        );
    }

    #[test]
    fn extracts_id_from_watch_url() {
        assert_eq!(
            extract_video_id("https://www.youtube.com/watch?v=dQw4w9WgXcQ&t=42s"),
            "dQw4w9WgXcQ"
        );
    }

    #[test]
    fn extracts_id_from_shorts_url() {
        assert_eq!(
            extract_video_id("https://www.youtube.com/shorts/dQw4w9WgXcQ"),
            "dQw4w9WgXcQ"
        );
    }

    #[test]
    fn unrecognized_input_passes_through() {
        assert_eq!(extract_video_id("not a video"), "not a video");
        assert_eq!(extract_video_id("tooshort"), "tooshort");
    }

    #[test]
    fn watch_url_uses_long_form() {
        assert_eq!(
            watch_url("dQw4w9WgXcQ"),
            "https://www.youtube.com/watch?v=dQw4w9WgXcQ"
        );
    }
}
