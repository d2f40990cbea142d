// src/playback_options.rs

use serde::{de, Deserialize, Deserializer, Serialize};

/// Playback settings shared by both video players.
/// Built fresh from the request on every render; never persisted.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlaybackOptions {
    /// Position, in whole seconds, the players start from.
    #[serde(default, deserialize_with = "start_seconds")]
    pub start_time: u64,
    #[serde(default, deserialize_with = "checkbox")]
    pub autoplay: bool,
    #[serde(default, rename = "loop", deserialize_with = "checkbox")]
    pub loop_playback: bool,
    #[serde(default, deserialize_with = "checkbox")]
    pub muted: bool,
}

impl PlaybackOptions {
    /// Media fragment that makes the player start at `start_time`, e.g. `#t=42`.
    /// Empty when starting from the beginning.
    pub fn media_fragment(&self) -> String {
        if self.start_time == 0 {
            String::new()
        } else {
            format!("#t={}", self.start_time)
        }
    }
}

/// A cleared number box is sent as `start_time=` and means the default, 0.
/// Anything else must parse as a non-negative integer.
fn start_seconds<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(0);
    }
    raw.parse::<u64>().map_err(|e| {
        <D::Error as de::Error>::custom(format!("invalid start_time '{}': {}", raw, e))
    })
}

/// HTML checkboxes are sent as `name=on` when ticked and omitted otherwise.
fn checkbox<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    Ok(matches!(
        raw.to_ascii_lowercase().as_str(),
        "on" | "true" | "1" | "yes"
    ))
}
