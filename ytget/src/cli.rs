//! CLI argument definitions using clap.

use clap::Parser;
use eyre::Result;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "ytget")]
#[command(about = "Download videos or music from a URL")]
#[command(version)]
pub struct Cli {
    /// The video URL to download
    pub url: String,

    /// Download audio only (music)
    #[arg(short, long)]
    pub music: bool,

    /// Download video (default behavior if neither -m nor -v is provided)
    #[arg(short, long)]
    pub video: bool,

    /// The directory where the downloaded file will be saved
    #[arg(short, long, default_value = ".")]
    pub directory: PathBuf,
}

/// Map the mode flags to the download type string.
///
/// Music wins when both flags are given, matching the original interface.
pub fn download_type(cli: &Cli) -> &'static str {
    if cli.music { "music" } else { "video" }
}

/// Execute CLI command - separated for testing.
pub fn run_cli(cli: Cli) -> Result<()> {
    tracing::debug!(?cli, "parsed arguments");

    crate::fetch::run(&cli.url, download_type(&cli), &cli.directory);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn parses_url_with_defaults() {
        let cli = Cli::parse_from(["ytget", "https://example.com/video"]);

        assert_eq!(cli.url, "https://example.com/video");
        assert!(!cli.music);
        assert!(!cli.video);
        assert_eq!(cli.directory, Path::new("."));
    }

    #[test]
    fn parses_music_flag() {
        let cli = Cli::parse_from(["ytget", "https://example.com/video", "-m"]);

        assert!(cli.music);
        assert_eq!(download_type(&cli), "music");
    }

    #[test]
    fn parses_video_flag() {
        let cli = Cli::parse_from(["ytget", "https://example.com/video", "--video"]);

        assert!(cli.video);
        assert_eq!(download_type(&cli), "video");
    }

    #[test]
    fn defaults_to_video_without_flags() {
        let cli = Cli::parse_from(["ytget", "https://example.com/video"]);

        assert_eq!(download_type(&cli), "video");
    }

    #[test]
    fn music_wins_when_both_flags_given() {
        let cli = Cli::parse_from(["ytget", "https://example.com/video", "-m", "-v"]);

        assert_eq!(download_type(&cli), "music");
    }

    #[test]
    fn parses_directory_option() {
        let cli = Cli::parse_from(["ytget", "https://example.com/video", "-d", "/tmp/out"]);

        assert_eq!(cli.directory, Path::new("/tmp/out"));
    }

    #[test]
    fn url_is_required() {
        assert!(Cli::try_parse_from(["ytget"]).is_err());
    }
}
