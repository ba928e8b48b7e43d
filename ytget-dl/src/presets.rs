//! Download presets: video and audio-only.
//!
//! Two fixed configuration bundles, selected by [`Mode`]:
//!
//! - `Video`: best combined audio+video stream.
//! - `Audio`: best audio-only stream, m4a preferred, post-processing disabled.
//!
//! Both save as `<title>.<ext>` inside the chosen destination directory.

use crate::dl::{DownloadOptions, OutputPaths, OutputTemplates};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// Filename template shared by both presets.
pub const OUTPUT_TEMPLATE: &str = "%(title)s.%(ext)s";

/// Download mode selecting one of the two presets.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Mode {
    /// Best combined audio+video stream.
    #[default]
    Video,
    /// Best audio-only stream (called "music" in the CLI).
    Audio,
}

/// Unrecognized download type string.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InvalidMode(String);

impl InvalidMode {
    /// The rejected type string.
    pub fn received(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for InvalidMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid download type! Use 'video' or 'music'")
    }
}

impl std::error::Error for InvalidMode {}

impl FromStr for Mode {
    type Err = InvalidMode;

    // "music" is the audio mode's name in the CLI surface.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "video" => Ok(Mode::Video),
            "music" => Ok(Mode::Audio),
            other => Err(InvalidMode(other.to_string())),
        }
    }
}

impl Mode {
    /// Build the engine options for this mode, saving into `destination`.
    ///
    /// The destination is passed through as the engine's `home` path and is
    /// neither created nor checked for writability here.
    pub fn options(self, destination: &Path) -> DownloadOptions {
        let base = DownloadOptions {
            paths: Some(OutputPaths::default().with_home(destination)),
            outtmpl: Some(OutputTemplates::simple(OUTPUT_TEMPLATE.to_string())),
            ..Default::default()
        };

        match self {
            Mode::Video => DownloadOptions {
                format: Some("best".to_string()),
                ..base
            },
            // Empty list disables post-processing; None would leave the
            // engine default in place.
            Mode::Audio => DownloadOptions {
                format: Some("bestaudio[ext=m4a]/best".to_string()),
                postprocessors: Some(Vec::new()),
                ..base
            },
        }
    }
}
