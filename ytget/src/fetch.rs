//! Download orchestration and user-facing status reporting.
//!
//! One linear sequence: validate the download type, build the preset, call
//! the engine, print exactly one line on stdout. Engine failures are caught
//! here and printed, never propagated; the process exits normally in every
//! case.

use std::path::{Path, PathBuf};
use ytget_dl::dl::download;
use ytget_dl::error::DownloadError;
use ytget_dl::presets::Mode;

const NO_FILE_LINE: &str = "No file downloaded. Something went wrong!";

/// A single download request: built from the command line, consumed once.
#[derive(Debug)]
pub struct Config {
    pub url: String,
    pub mode: Mode,
    pub directory: PathBuf,
}

/// Entry point taking the download type as a string.
///
/// An unrecognized type prints the usage message and performs no download.
pub fn run(url: &str, download_type: &str, directory: &Path) {
    match download_type.parse::<Mode>() {
        Ok(mode) => execute(Config {
            url: url.to_string(),
            mode,
            directory: directory.to_path_buf(),
        }),
        Err(err) => {
            tracing::warn!(download_type = err.received(), "unrecognized download type");
            println!("{err}");
        }
    }
}

/// Run one download and print its status line.
pub fn execute(config: Config) {
    tracing::info!(url = config.url, mode = ?config.mode, "starting download");

    let opts = config.mode.options(&config.directory);

    let line = match download(&config.url, opts) {
        Ok(Some(file)) => success_line(&file, &config.directory),
        Ok(None) => NO_FILE_LINE.to_string(),
        Err(err) => failure_line(&err),
    };

    println!("{line}");
}

/// Success line naming the file and the absolutized destination directory.
fn success_line(file: &Path, directory: &Path) -> String {
    let name = match file.file_name() {
        Some(name) => name.to_string_lossy().into_owned(),
        None => file.display().to_string(),
    };

    // Lexical resolution against the current directory, no filesystem access.
    let saved_in = std::path::absolute(directory).unwrap_or_else(|_| directory.to_path_buf());

    format!(
        "Download complete! Your file: {name} saved in {}",
        saved_in.display()
    )
}

fn failure_line(err: &DownloadError) -> String {
    format!("An error occurred: {err}")
}
