// src/cli.rs

use crate::config::{DEFAULT_HOST, DEFAULT_PORT, VIDEO_DIR_ENV};
use clap::Parser;

#[derive(Parser, Debug)]
#[clap(
    author,
    version,
    about = "Serves a page that previews two local videos side by side.",
    long_about = None
)]
pub struct Cli {
    /// Directory containing video1.mp4 and video2.mp4.
    /// Defaults to the `videos` folder next to the executable.
    #[clap(long, env = VIDEO_DIR_ENV)]
    pub videos_dir: Option<String>,

    #[clap(long, default_value = DEFAULT_HOST)]
    pub host: String,

    #[clap(short, long, default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Bind to the machine's LAN address and print a QR code for the page.
    #[clap(long, action = clap::ArgAction::SetTrue)]
    pub lan: bool,

    /// Open the page in the default browser once the server is up.
    #[clap(long, action = clap::ArgAction::SetTrue)]
    pub open: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["video_preview"]).unwrap();
        assert_eq!(cli.host, DEFAULT_HOST);
        assert_eq!(cli.port, DEFAULT_PORT);
        assert!(!cli.lan);
        assert!(!cli.open);
    }

    #[test]
    fn test_flags() {
        let cli = Cli::try_parse_from([
            "video_preview",
            "--videos-dir",
            "~/clips",
            "--port",
            "9000",
            "--lan",
        ])
        .unwrap();
        assert_eq!(cli.videos_dir.as_deref(), Some("~/clips"));
        assert_eq!(cli.port, 9000);
        assert!(cli.lan);
    }
}
