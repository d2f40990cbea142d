// src/file_utils.rs

use crate::config::{VIDEO_DIR_NAME, VIDEO_FILE_NAMES, VIDEO_LABELS};
use std::{
    env,
    io::{Error as IoError, ErrorKind as IoErrorKind},
    path::{Path, PathBuf},
};

/// One of the two videos shown on the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoFile {
    /// 1 for the left column, 2 for the right one.
    pub slot: u8,
    /// Subheading shown above the player.
    pub label: &'static str,
    /// Absolute path to the file.
    pub path: PathBuf,
}

impl VideoFile {
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// The bare file name, e.g. `video1.mp4`.
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.to_string_lossy().into_owned())
    }
}

/// Returns the default videos directory.
///
/// The directory is looked up in the following locations:
/// 1. `videos` next to the application executable.
/// 2. `CARGO_MANIFEST_DIR/videos` (debug builds only, for development).
///
/// When neither exists the first location is returned anyway, so the page
/// reports the files as missing instead of failing at startup.
///
/// # Errors
///
/// Returns an error if the executable's location cannot be determined.
pub fn default_videos_dir() -> Result<PathBuf, Box<dyn std::error::Error>> {
    let current_exe_path = env::current_exe()?;
    let exe_dir = current_exe_path.parent().ok_or_else(|| {
        IoError::new(
            IoErrorKind::NotFound,
            "Failed to determine the executable's directory.",
        )
    })?;
    let next_to_exe = exe_dir.join(VIDEO_DIR_NAME);

    if !next_to_exe.is_dir() && cfg!(debug_assertions) {
        if let Ok(manifest_dir) = env::var("CARGO_MANIFEST_DIR") {
            let project_videos = PathBuf::from(manifest_dir).join(VIDEO_DIR_NAME);
            if project_videos.is_dir() {
                return Ok(project_videos);
            }
        }
    }

    Ok(next_to_exe)
}

/// Turns a user-supplied directory (supports `~` and env vars) into an absolute path.
///
/// # Errors
///
/// Returns an error if expansion fails or the current directory is unavailable.
pub fn expand_videos_dir(raw: &str) -> Result<PathBuf, Box<dyn std::error::Error>> {
    let expanded = PathBuf::from(shellexpand::full(raw)?.into_owned());
    if expanded.is_absolute() {
        Ok(expanded)
    } else {
        Ok(env::current_dir()?.join(expanded))
    }
}

/// Builds the two fixed video references inside `videos_dir`.
pub fn resolve_video_files(videos_dir: &Path) -> [VideoFile; 2] {
    [0, 1].map(|i| VideoFile {
        slot: i as u8 + 1,
        label: VIDEO_LABELS[i],
        path: videos_dir.join(VIDEO_FILE_NAMES[i]),
    })
}

/// Returns the file names of every video that does not exist, in slot order.
pub fn find_missing(videos: &[VideoFile]) -> Vec<String> {
    videos
        .iter()
        .filter(|video| !video.exists())
        .map(VideoFile::file_name)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_resolve_video_files() {
        let dir = PathBuf::from("/srv/preview/videos");
        let [first, second] = resolve_video_files(&dir);

        assert_eq!(first.slot, 1);
        assert_eq!(first.label, "Video 1");
        assert_eq!(first.path, dir.join("video1.mp4"));
        assert_eq!(second.slot, 2);
        assert_eq!(second.path, dir.join("video2.mp4"));
        assert_eq!(second.file_name(), "video2.mp4");
    }

    #[test]
    fn test_find_missing() {
        let temp_dir = tempfile::tempdir().unwrap();
        let videos = resolve_video_files(temp_dir.path());

        assert_eq!(find_missing(&videos), vec!["video1.mp4", "video2.mp4"]);

        fs::write(temp_dir.path().join("video2.mp4"), b"second").unwrap();
        assert_eq!(find_missing(&videos), vec!["video1.mp4"]);

        fs::write(temp_dir.path().join("video1.mp4"), b"first").unwrap();
        assert!(find_missing(&videos).is_empty());
    }

    #[test]
    fn test_expand_videos_dir_makes_relative_paths_absolute() {
        let expanded = expand_videos_dir("clips").unwrap();
        assert!(expanded.is_absolute());
        assert!(expanded.ends_with("clips"));

        let absolute = expand_videos_dir("/srv/clips").unwrap();
        assert_eq!(absolute, PathBuf::from("/srv/clips"));
    }
}
