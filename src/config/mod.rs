// Configuration module
// Fixed pipeline parameters and the separation model catalogue

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Persistent directory for finished videos, relative to the working
/// directory.
pub const OUTPUT_DIR: &str = "output";

/// Appended to the sanitized title when naming the final video.
pub const OUTPUT_SUFFIX: &str = "-vocals-only";

/// Container of the final video.
pub const OUTPUT_CONTAINER: &str = "mp4";

/// Bitrate for re-encoding the vocal track during the merge.
pub const MERGE_AUDIO_BITRATE: &str = "192k";

/// Format the separator is asked to write. Uncompressed, so the merge
/// re-encode starts from a lossless stem.
pub const SEPARATION_OUTPUT_FORMAT: &str = "WAV";

/// Substring (case-insensitive) that marks the vocal stem among the
/// separator's outputs.
pub const VOCALS_MARKER: &str = "vocals";

/// Container extensions that can hold the downloaded video stream.
pub const VIDEO_EXTENSIONS: &[&str] = &["mp4", "webm", "mkv"];

/// Extensions of audio-only downloads, in preference order. The order
/// is the tie-break when several audio candidates survive filtering.
pub const AUDIO_EXTENSIONS: &[&str] = &["opus", "m4a", "webm", "mp3"];

pub const MIN_BATCH_SIZE: u32 = 1;
pub const MAX_BATCH_SIZE: u32 = 8;
pub const DEFAULT_BATCH_SIZE: u32 = 4;

/// Clamp a requested batch size into the supported range.
pub fn clamp_batch_size(requested: u32) -> u32 {
    requested.clamp(MIN_BATCH_SIZE, MAX_BATCH_SIZE)
}

/// MDX-Net models the separator is known to work well with for
/// vocal/instrumental splitting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SeparationModel {
    /// UVR-MDX-NET Inst HQ 3 — best all-round instrumental removal.
    MdxNetInstHq3,
    /// Kim Vocal 2 — tuned for clean vocal extraction.
    KimVocal2,
    /// UVR MDXNET KARA 2 — karaoke-style separation, keeps lead vocals.
    MdxNetKara2,
}

impl SeparationModel {
    pub const ALL: &'static [SeparationModel] = &[
        SeparationModel::MdxNetInstHq3,
        SeparationModel::KimVocal2,
        SeparationModel::MdxNetKara2,
    ];

    /// Model filename as the separator expects it on the command line.
    pub fn filename(&self) -> &'static str {
        match self {
            SeparationModel::MdxNetInstHq3 => "UVR-MDX-NET-Inst_HQ_3.onnx",
            SeparationModel::KimVocal2 => "Kim_Vocal_2.onnx",
            SeparationModel::MdxNetKara2 => "UVR_MDXNET_KARA_2.onnx",
        }
    }
}

impl Default for SeparationModel {
    fn default() -> Self {
        SeparationModel::MdxNetInstHq3
    }
}

impl fmt::Display for SeparationModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.filename())
    }
}

impl FromStr for SeparationModel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SeparationModel::ALL
            .iter()
            .copied()
            .find(|model| model.filename() == s)
            .ok_or_else(|| {
                let known: Vec<&str> = SeparationModel::ALL
                    .iter()
                    .map(|model| model.filename())
                    .collect();
                format!("unknown model '{}', expected one of: {}", s, known.join(", "))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn model_roundtrips_through_filename() {
        for model in SeparationModel::ALL {
            let parsed: SeparationModel = model.filename().parse().unwrap();
            assert_eq!(parsed, *model);
        }
    }

    #[test]
    fn unknown_model_is_rejected_with_choices() {
        let err = "htdemucs".parse::<SeparationModel>().unwrap_err();
        assert!(err.contains("htdemucs"));
        assert!(err.contains("UVR-MDX-NET-Inst_HQ_3.onnx"));
    }

    #[test]
    fn batch_size_is_clamped_to_supported_range() {
        assert_eq!(clamp_batch_size(0), 1);
        assert_eq!(clamp_batch_size(4), 4);
        assert_eq!(clamp_batch_size(64), 8);
    }
}
