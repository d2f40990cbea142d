// src/config.rs

/// Name of the directory holding the two preview videos.
pub const VIDEO_DIR_NAME: &str = "videos";
/// File names of the two videos, left column first.
pub const VIDEO_FILE_NAMES: [&str; 2] = ["video1.mp4", "video2.mp4"];
/// Subheadings shown above each playback region.
pub const VIDEO_LABELS: [&str; 2] = ["Video 1", "Video 2"];

/// Environment variable that overrides the videos directory.
pub const VIDEO_DIR_ENV: &str = "VIDEO_PREVIEW_DIR";

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8501;

// Page text.
pub const PAGE_TITLE: &str = "Video Preview";
pub const PAGE_ICON: &str = "🎬";
pub const PAGE_HEADING: &str = "🎬 Preview of Two Local Videos";
pub const PAGE_CAPTION: &str = "Videos are loaded from the `videos/` folder in the repository.";
pub const SUCCESS_MESSAGE: &str = "Videos loaded successfully ✅";

/// Builds the error banner text for the given missing file names.
pub fn missing_files_message(missing: &[String]) -> String {
    format!(
        "The following files are missing in the `{}/` folder: {}. Please make sure they are added to the repository.",
        VIDEO_DIR_NAME,
        missing.join(", ")
    )
}
