//! Strip background music from YouTube videos while keeping vocals and
//! dialogue intact.
//!
//! The heavy lifting — download, source separation, remuxing — is
//! delegated to external tools (yt-dlp, audio-separator, ffmpeg). This
//! crate normalizes the input, drives the tools in sequence, picks
//! their outputs out of a per-run scratch directory and names the
//! final file after the video title. See [`services::pipeline::run`].

pub mod config;
pub mod errors;
pub mod models;
pub mod services;
pub mod utils;
