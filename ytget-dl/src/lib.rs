//! Type-safe Rust bindings to [yt-dlp](https://github.com/yt-dlp/yt-dlp) for
//! single-stream downloads.
//!
//! ## Modules
//!
//! - [`dl`] - Core yt-dlp API wrappers
//! - [`presets`] - Video and audio-only download presets
//! - [`slot`] - Single-slot completion cell fed by the progress hook
//! - [`error`] - Engine boundary error
//!
//! ## Quick Start
//!
//! **Preset** (audio-only, saved into a directory):
//! ```no_run
//! use ytget_dl::{dl::download, presets::Mode};
//! use std::path::Path;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let opts = Mode::Audio.options(Path::new("downloads"));
//! if let Some(file) = download("https://youtube.com/watch?v=example", opts)? {
//!     println!("saved: {}", file.display());
//! }
//! # Ok(())
//! # }
//! ```
//!
//! **Custom configuration**:
//! ```no_run
//! use ytget_dl::dl::{download, DownloadOptions, OutputPaths, OutputTemplates};
//! use std::path::Path;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let opts = DownloadOptions {
//!     format: Some("bestaudio".to_string()),
//!     paths: Some(OutputPaths::default().with_home(Path::new("downloads"))),
//!     outtmpl: Some(OutputTemplates::simple("%(title)s.%(ext)s".to_string())),
//!     quiet: Some(true),
//!     ..Default::default()
//! };
//!
//! download("https://youtube.com/watch?v=example", opts)?;
//! # Ok(())
//! # }
//! ```

pub mod dl;
pub mod error;
pub mod presets;
pub mod slot;
