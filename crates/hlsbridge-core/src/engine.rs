//! Capability traits over the host engine and presentation layer
//!
//! The engine is opaque: everything it exposes goes through a synchronous
//! property surface. [`EngineAdapter`] is the typed projection of that
//! surface, injected at construction so tests can substitute a scripted
//! fake. Writes are assumed to take effect before the next read.

use serde::{Deserialize, Serialize};

use crate::ranges::TimeRange;

/// One level descriptor from the engine's variant list
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LevelInfo {
    /// Position in the engine's level list
    pub index: usize,
    /// Frame width in pixels (0 for audio-only levels)
    pub width: u32,
    /// Frame height in pixels (0 for audio-only levels)
    pub height: u32,
    /// Peak bandwidth in bits per second
    pub bitrate: u64,
    /// Whether this level carries audio only
    pub audio_only: bool,
    /// Playlist URI as reported by the engine
    pub url: String,
}

/// One entry in the engine's active audio-track list
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineAudioTrack {
    /// Key into the alternate-audio descriptor list
    pub id: usize,
    /// Display title; matched against mirror track ids on write-back
    pub title: String,
}

/// Alternate-audio descriptor
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AltAudioTrack {
    /// Descriptor name
    pub name: String,
    /// Language code, when present
    pub lang: Option<String>,
    /// Whether this descriptor is the default track
    pub default_track: bool,
}

/// Engine-maintained transfer statistics
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineStats {
    /// Measured bandwidth in bits per second
    pub bandwidth: u64,
}

/// Typed projection of the engine's property get/set surface.
///
/// All calls are synchronous. Reads reflect the most recent write.
pub trait EngineAdapter {
    /// The `levels` property: every variant, pre-sorted by bitrate
    fn levels(&self) -> Vec<LevelInfo>;

    /// The `level` property: index of the active level, -1 in auto mode
    fn level(&self) -> i32;

    /// Write the `level` property (-1 returns to auto selection)
    fn set_level(&mut self, level: i32);

    /// Write the `autoLevelCapping` property (-1 removes the cap)
    fn set_auto_level_capping(&mut self, cap: i32);

    /// The `audioTracks` property: active audio-track entries
    fn audio_tracks(&self) -> Vec<EngineAudioTrack>;

    /// The `altAudioTracks` property: alternate-audio descriptors,
    /// indexed by [`EngineAudioTrack::id`]
    fn alt_audio_tracks(&self) -> Vec<AltAudioTrack>;

    /// The `audioTrack` property: index of the active audio track
    fn audio_track(&self) -> usize;

    /// Write the `audioTrack` property
    fn set_audio_track(&mut self, index: usize);

    /// The `stats` property
    fn stats(&self) -> EngineStats;

    /// The `seekableStart` property, in seconds
    fn seekable_start(&self) -> f64;

    /// The `seekableEnd` property, in seconds (0 when nothing is seekable)
    fn seekable_end(&self) -> f64;

    /// Write the `src` property, handing a new source URI to the engine
    fn set_src(&mut self, src: &str);
}

/// Presentation-side reads: playback clock and retained media.
pub trait PlayerView {
    /// Current playback position in seconds
    fn current_time(&self) -> f64;

    /// Media duration in seconds; NaN or infinite when unknown
    fn duration(&self) -> f64;

    /// Currently retained media, as ordered disjoint ranges
    fn buffered(&self) -> Vec<TimeRange>;
}
