// src/page.rs

use crate::byte_cache::VideoLoader;
use crate::config::{missing_files_message, SUCCESS_MESSAGE};
use crate::file_utils::{find_missing, VideoFile};
use crate::playback_options::PlaybackOptions;
use bytes::Bytes;
use log::{debug, warn};
use serde::Serialize;
use std::{io, path::PathBuf};

/// Everything the page shows for one render pass.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderPlan {
    /// At least one video is missing; only the error banner is shown.
    Halted {
        /// File names of the missing videos, in slot order.
        missing: Vec<String>,
        message: String,
    },
    Rendered(RenderedPage),
}

#[derive(Debug, Clone, PartialEq)]
pub struct RenderedPage {
    pub sidebar: Sidebar,
    /// Left column first.
    pub regions: [PlaybackRegion; 2],
    pub success_message: &'static str,
}

/// Settings panel: the current options plus the resolved paths, shown read-only.
#[derive(Debug, Clone, PartialEq)]
pub struct Sidebar {
    pub options: PlaybackOptions,
    pub file_paths: [PathBuf; 2],
}

/// One column holding a player.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaybackRegion {
    pub slot: u8,
    pub label: &'static str,
    pub path: PathBuf,
    pub content: Bytes,
    pub options: PlaybackOptions,
}

/// Runs one render pass.
///
/// Missing files are not an error: they produce `RenderPlan::Halted`.
///
/// # Errors
///
/// Returns an error if a file exists but cannot be read.
pub fn render_page(
    videos: &[VideoFile; 2],
    options: &PlaybackOptions,
    loader: &dyn VideoLoader,
) -> io::Result<RenderPlan> {
    let missing = find_missing(videos);
    if !missing.is_empty() {
        warn!("Halting render, missing videos: {}", missing.join(", "));
        let message = missing_files_message(&missing);
        return Ok(RenderPlan::Halted { missing, message });
    }

    let sidebar = Sidebar {
        options: *options,
        file_paths: [videos[0].path.clone(), videos[1].path.clone()],
    };

    let [left, right] = videos;
    let regions = [load_region(left, options, loader)?, load_region(right, options, loader)?];
    debug!(
        "Rendered page with {} and {} bytes",
        regions[0].content.len(),
        regions[1].content.len()
    );

    Ok(RenderPlan::Rendered(RenderedPage {
        sidebar,
        regions,
        success_message: SUCCESS_MESSAGE,
    }))
}

fn load_region(
    video: &VideoFile,
    options: &PlaybackOptions,
    loader: &dyn VideoLoader,
) -> io::Result<PlaybackRegion> {
    Ok(PlaybackRegion {
        slot: video.slot,
        label: video.label,
        path: video.path.clone(),
        content: loader.get_or_load(&video.path)?,
        options: *options,
    })
}

/// JSON-friendly view of a plan, without the video bytes.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct PlanSummary {
    pub status: &'static str,
    pub message: String,
    pub missing: Vec<String>,
    pub options: Option<PlaybackOptions>,
    pub regions: Vec<RegionSummary>,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct RegionSummary {
    pub slot: u8,
    pub label: &'static str,
    pub path: String,
    pub size: usize,
}

impl RenderPlan {
    pub fn summary(&self) -> PlanSummary {
        match self {
            RenderPlan::Halted { missing, message } => PlanSummary {
                status: "error",
                message: message.clone(),
                missing: missing.clone(),
                options: None,
                regions: Vec::new(),
            },
            RenderPlan::Rendered(page) => PlanSummary {
                status: "success",
                message: page.success_message.to_string(),
                missing: Vec::new(),
                options: Some(page.sidebar.options),
                regions: page
                    .regions
                    .iter()
                    .map(|region| RegionSummary {
                        slot: region.slot,
                        label: region.label,
                        path: region.path.to_string_lossy().into_owned(),
                        size: region.content.len(),
                    })
                    .collect(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::byte_cache::CachedLoader;
    use crate::file_utils::resolve_video_files;
    use std::collections::HashSet;
    use std::fs;
    use std::path::Path;
    use std::sync::Mutex;

    /// Fails every read and records the paths asked for.
    #[derive(Default)]
    struct FakeLoader {
        requests: Mutex<Vec<PathBuf>>,
    }

    impl VideoLoader for FakeLoader {
        fn get_or_load(&self, path: &Path) -> io::Result<Bytes> {
            self.requests.lock().unwrap().push(path.to_path_buf());
            Err(io::Error::new(io::ErrorKind::PermissionDenied, "unreadable"))
        }
    }

    fn write_videos(dir: &Path, first: Option<&[u8]>, second: Option<&[u8]>) -> [VideoFile; 2] {
        let videos = resolve_video_files(dir);
        for (video, content) in videos.iter().zip([first, second]) {
            if let Some(content) = content {
                fs::write(&video.path, content).unwrap();
            }
        }
        videos
    }

    #[test]
    fn test_both_present_renders_two_regions() {
        let temp_dir = tempfile::tempdir().unwrap();
        let videos = write_videos(temp_dir.path(), Some(&[1u8; 10][..]), Some(&[2u8; 20][..]));

        let plan = render_page(&videos, &PlaybackOptions::default(), &CachedLoader::new()).unwrap();
        let page = match plan {
            RenderPlan::Rendered(page) => page,
            other => panic!("expected a rendered page, got {:?}", other),
        };

        assert_eq!(page.success_message, "Videos loaded successfully ✅");
        assert_eq!(&page.regions[0].content[..], &[1u8; 10][..]);
        assert_eq!(&page.regions[1].content[..], &[2u8; 20][..]);
        assert_eq!(page.regions[0].label, "Video 1");
        assert_eq!(page.regions[1].label, "Video 2");
        assert_eq!(page.sidebar.file_paths[0], videos[0].path);
        assert_eq!(page.sidebar.file_paths[1], videos[1].path);
    }

    #[test]
    fn test_missing_files_halt_with_exact_names() {
        let cases: [(Option<&[u8]>, Option<&[u8]>, &[&str]); 3] = [
            (None, Some(&b"two"[..]), &["video1.mp4"][..]),
            (Some(&b"one"[..]), None, &["video2.mp4"][..]),
            (None, None, &["video1.mp4", "video2.mp4"][..]),
        ];

        for (first, second, expected) in cases {
            let temp_dir = tempfile::tempdir().unwrap();
            let videos = write_videos(temp_dir.path(), first, second);
            let loader = FakeLoader::default();

            let plan = render_page(&videos, &PlaybackOptions::default(), &loader).unwrap();
            match plan {
                RenderPlan::Halted { missing, message } => {
                    let missing: HashSet<_> = missing.iter().map(String::as_str).collect();
                    let expected: HashSet<_> = expected.iter().copied().collect();
                    assert_eq!(missing, expected);
                    for name in ["video1.mp4", "video2.mp4"] {
                        assert_eq!(message.contains(name), expected.contains(name));
                    }
                }
                other => panic!("expected a halted page, got {:?}", other),
            }
            assert!(loader.requests.lock().unwrap().is_empty());
        }
    }

    #[test]
    fn test_missing_message_text() {
        let temp_dir = tempfile::tempdir().unwrap();
        let videos = write_videos(temp_dir.path(), None, None);

        let plan = render_page(&videos, &PlaybackOptions::default(), &FakeLoader::default()).unwrap();
        assert_eq!(
            plan.summary().message,
            "The following files are missing in the `videos/` folder: video1.mp4, video2.mp4. Please make sure they are added to the repository."
        );
    }

    #[test]
    fn test_render_is_idempotent() {
        let temp_dir = tempfile::tempdir().unwrap();
        let videos = write_videos(temp_dir.path(), Some(&b"first clip"[..]), Some(&b"second clip"[..]));
        let loader = CachedLoader::new();
        let options = PlaybackOptions {
            start_time: 3,
            autoplay: true,
            ..PlaybackOptions::default()
        };

        let first = render_page(&videos, &options, &loader).unwrap();
        let second = render_page(&videos, &options, &loader).unwrap();
        assert_eq!(first, second);
        assert_eq!(loader.len(), 2);
    }

    #[test]
    fn test_both_regions_share_options() {
        let temp_dir = tempfile::tempdir().unwrap();
        let videos = write_videos(temp_dir.path(), Some(&b"a"[..]), Some(&b"b"[..]));
        let options = PlaybackOptions {
            loop_playback: true,
            ..PlaybackOptions::default()
        };

        let plan = render_page(&videos, &options, &CachedLoader::new()).unwrap();
        let RenderPlan::Rendered(page) = plan else {
            panic!("expected a rendered page");
        };
        assert_eq!(page.sidebar.options, options);
        for region in &page.regions {
            assert_eq!(region.options, options);
        }
    }

    #[test]
    fn test_unreadable_file_is_an_error() {
        let temp_dir = tempfile::tempdir().unwrap();
        let videos = write_videos(temp_dir.path(), Some(&b"a"[..]), Some(&b"b"[..]));

        // Both files exist, but the loader cannot read them.
        let err = render_page(&videos, &PlaybackOptions::default(), &FakeLoader::default())
            .unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::PermissionDenied);
    }

    #[test]
    fn test_summary_omits_bytes() {
        let temp_dir = tempfile::tempdir().unwrap();
        let videos = write_videos(temp_dir.path(), Some(&[0u8; 10][..]), Some(&[0u8; 20][..]));

        let summary = render_page(&videos, &PlaybackOptions::default(), &CachedLoader::new())
            .unwrap()
            .summary();
        assert_eq!(summary.status, "success");
        assert_eq!(summary.regions.len(), 2);
        assert_eq!(summary.regions[0].size, 10);
        assert_eq!(summary.regions[1].size, 20);
    }
}
