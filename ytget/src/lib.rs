//! ytget: command-line wrapper around the yt-dlp engine.
//!
//! Parses three inputs (URL, mode, destination directory), hands the real
//! work to [`ytget_dl`], and reports the outcome as one line on stdout.

pub mod cli;
pub mod fetch;
