//! Discovery and version probing of the external tools the pipeline
//! drives. Only ffmpeg is a hard requirement; the others surface as
//! stage failures when missing.

use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use anyhow::{Context, Result, anyhow};
use log::{info, warn};
use once_cell::sync::Lazy;
use regex::Regex;
use semver::Version;

/// Oldest ffmpeg release the merge arguments are known to work with.
const MIN_FFMPEG_VERSION: Version = Version::new(4, 0, 0);

static FFMPEG_VERSION_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"ffmpeg version (\d+\.\d+(?:\.\d+)?)").unwrap());

/// Locate a tool on the system path.
pub fn find_tool(name: &str) -> Option<PathBuf> {
    which::which(name).ok()
}

/// Preflight check for the one tool the pipeline cannot start without.
pub fn ffmpeg_available() -> bool {
    find_tool("ffmpeg").is_some()
}

/// Extract a semantic version from the ffmpeg banner line. ffmpeg
/// sometimes reports only `major.minor`; the missing patch level is
/// padded with zero.
fn parse_ffmpeg_version(banner: &str) -> Option<Version> {
    let raw = FFMPEG_VERSION_RE.captures(banner)?.get(1)?.as_str();
    let normalized = if raw.matches('.').count() == 1 {
        format!("{raw}.0")
    } else {
        raw.to_string()
    };
    Version::parse(&normalized).ok()
}

fn probe_version_output(path: &Path, flag: &str) -> Result<String> {
    let output = Command::new(path)
        .arg(flag)
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .with_context(|| format!("failed to execute {}", path.display()))?;

    if !output.status.success() {
        return Err(anyhow!("{} exited with {}", path.display(), output.status));
    }
    Ok(String::from_utf8_lossy(&output.stdout).to_string())
}

/// Best-effort startup diagnostics. Logs what was found and at which
/// version; never fails the run.
pub fn log_tool_versions() {
    match find_tool("ffmpeg") {
        Some(path) => {
            let version = probe_version_output(&path, "-version")
                .ok()
                .as_deref()
                .and_then(parse_ffmpeg_version);
            match version {
                Some(version) if version < MIN_FFMPEG_VERSION => warn!(
                    "ffmpeg {} at {} is older than {}, merging may fail",
                    version,
                    path.display(),
                    MIN_FFMPEG_VERSION
                ),
                Some(version) => info!("Found ffmpeg {} at {}", version, path.display()),
                None => info!("Found ffmpeg at {} (version unknown)", path.display()),
            }
        }
        None => warn!("ffmpeg not found in PATH"),
    }

    match find_tool("yt-dlp") {
        // yt-dlp uses date-based versions that are not semver; log the
        // raw string
        Some(path) => match probe_version_output(&path, "--version") {
            Ok(version) => info!("Found yt-dlp {} at {}", version.trim(), path.display()),
            Err(_) => info!("Found yt-dlp at {} (version unknown)", path.display()),
        },
        None => warn!("yt-dlp not found in PATH, downloads will fail"),
    }

    if find_tool("audio-separator").is_none() {
        warn!("audio-separator not found in PATH, separation will fail");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_ffmpeg_banner() {
        let banner = "ffmpeg version 6.1.1-3ubuntu5 Copyright (c) 2000-2023 the FFmpeg developers";
        assert_eq!(parse_ffmpeg_version(banner), Some(Version::new(6, 1, 1)));
    }

    #[test]
    fn pads_two_component_versions() {
        let banner = "ffmpeg version 4.4 Copyright (c) 2000-2021 the FFmpeg developers";
        assert_eq!(parse_ffmpeg_version(banner), Some(Version::new(4, 4, 0)));
    }

    #[test]
    fn rejects_garbage_banner() {
        assert_eq!(parse_ffmpeg_version("not an ffmpeg banner"), None);
    }

    #[test]
    fn unknown_tool_is_not_found() {
        assert!(find_tool("definitely-not-an-installed-tool").is_none());
    }
}
