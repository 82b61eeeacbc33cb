//! Heuristic discovery of media artifacts in the workspace.
//!
//! Every selector takes an explicit directory listing and returns a
//! [`ScanOutcome`], so the caller decides what ambiguity means instead
//! of silently trusting first-match or filesystem enumeration order.

use std::io;
use std::path::{Path, PathBuf};

use crate::config::{AUDIO_EXTENSIONS, VIDEO_EXTENSIONS, VOCALS_MARKER};

/// One entry of a directory listing.
#[derive(Debug, Clone)]
pub struct FileEntry {
    pub path: PathBuf,
    pub len: u64,
}

/// Result of a heuristic scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanOutcome {
    /// Exactly one candidate matched.
    Unique(PathBuf),
    /// Several candidates matched; `chosen` is the deterministic pick,
    /// `discarded` the rest.
    Ambiguous {
        chosen: PathBuf,
        discarded: Vec<PathBuf>,
    },
    NotFound,
}

impl ScanOutcome {
    fn from_ranked(mut candidates: Vec<PathBuf>) -> Self {
        match candidates.len() {
            0 => ScanOutcome::NotFound,
            1 => ScanOutcome::Unique(candidates.remove(0)),
            _ => {
                let chosen = candidates.remove(0);
                ScanOutcome::Ambiguous {
                    chosen,
                    discarded: candidates,
                }
            }
        }
    }
}

/// List the plain files of a directory, sorted by path so downstream
/// selection never depends on enumeration order.
pub fn list_files(dir: &Path) -> io::Result<Vec<FileEntry>> {
    let mut entries = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        let metadata = entry.metadata()?;
        if metadata.is_file() {
            entries.push(FileEntry {
                path: entry.path(),
                len: metadata.len(),
            });
        }
    }
    entries.sort_by(|a, b| a.path.cmp(&b.path));
    Ok(entries)
}

fn extension_of(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase())
}

fn has_extension(path: &Path, extensions: &[&str]) -> bool {
    extension_of(path).is_some_and(|ext| extensions.contains(&ext.as_str()))
}

/// Pick the source video stream: largest file with a video container
/// extension. Adaptive downloads drop one video and one audio file
/// into the workspace, so several candidates are normal and the size
/// heuristic resolves them.
pub fn select_video_file(entries: &[FileEntry]) -> ScanOutcome {
    let mut candidates: Vec<&FileEntry> = entries
        .iter()
        .filter(|entry| has_extension(&entry.path, VIDEO_EXTENSIONS))
        .collect();
    // largest first; path as tie-break for determinism
    candidates.sort_by(|a, b| b.len.cmp(&a.len).then_with(|| a.path.cmp(&b.path)));

    ScanOutcome::from_ranked(candidates.into_iter().map(|e| e.path.clone()).collect())
}

/// Pick the audio-only stream: any audio container extension, the
/// already-chosen video file excluded. Ties are broken by the fixed
/// extension preference order, then by path.
pub fn select_audio_file(entries: &[FileEntry], video_file: &Path) -> ScanOutcome {
    let rank = |path: &Path| {
        extension_of(path)
            .and_then(|ext| AUDIO_EXTENSIONS.iter().position(|known| *known == ext))
            .unwrap_or(usize::MAX)
    };

    let mut candidates: Vec<&FileEntry> = entries
        .iter()
        .filter(|entry| entry.path != video_file && has_extension(&entry.path, AUDIO_EXTENSIONS))
        .collect();
    candidates.sort_by(|a, b| {
        rank(&a.path)
            .cmp(&rank(&b.path))
            .then_with(|| a.path.cmp(&b.path))
    });

    ScanOutcome::from_ranked(candidates.into_iter().map(|e| e.path.clone()).collect())
}

/// Find the vocal stem among the separator's outputs: a `.wav` file
/// whose name contains the vocals marker, case-insensitive.
pub fn find_vocals_file(entries: &[FileEntry]) -> ScanOutcome {
    let candidates: Vec<PathBuf> = entries
        .iter()
        .filter(|entry| {
            has_extension(&entry.path, &["wav"])
                && entry
                    .path
                    .file_name()
                    .and_then(|name| name.to_str())
                    .is_some_and(|name| name.to_lowercase().contains(VOCALS_MARKER))
        })
        .map(|entry| entry.path.clone())
        .collect();

    ScanOutcome::from_ranked(candidates)
}
