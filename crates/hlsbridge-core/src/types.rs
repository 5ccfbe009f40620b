//! Core types for hlsbridge

use bytes::Bytes;
use serde::{Deserialize, Serialize};
use url::Url;

/// Video resolution
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Resolution {
    pub width: u32,
    pub height: u32,
}

impl Resolution {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl std::fmt::Display for Resolution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// A selectable bitrate/resolution variant of the media.
///
/// `id` is the variant's position in the engine's *original* level list,
/// kept as a decimal string. Audio-only levels are filtered out of the
/// representation list, so `id` does not equal the filtered position;
/// callers must use `id` when writing level properties back to the engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Representation {
    /// Stable original level index, as a decimal string
    pub id: String,
    /// Frame width in pixels
    pub width: u32,
    /// Frame height in pixels
    pub height: u32,
    /// Peak bandwidth in bits per second
    pub bandwidth: u64,
    /// Whether this variant participates in selection
    pub enabled: bool,
}

impl Representation {
    /// Original level index as an integer
    pub fn level_index(&self) -> i32 {
        self.id.parse().unwrap_or(-1)
    }
}

/// Derived playback-restriction state.
///
/// Never stored; recomputed from the representation set on every
/// enablement change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SelectionMode {
    /// All or no representations enabled; the engine picks freely
    Auto,
    /// Exactly one representation enabled; pinned to that level
    Manual { level: i32 },
    /// A strict subset enabled; auto selection capped at the
    /// highest-bandwidth enabled level
    CappedAuto { cap: i32 },
}

/// Property-write pair produced by the selection reduction.
///
/// `-1` means "auto" for `level` and "uncapped" for `auto_level_capping`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelSelection {
    pub level: i32,
    pub auto_level_capping: i32,
}

impl From<SelectionMode> for LevelSelection {
    fn from(mode: SelectionMode) -> Self {
        match mode {
            SelectionMode::Auto => Self { level: -1, auto_level_capping: -1 },
            SelectionMode::Manual { level } => Self { level, auto_level_capping: -1 },
            SelectionMode::CappedAuto { cap } => Self { level: -1, auto_level_capping: cap },
        }
    }
}

/// Text track kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TrackKind {
    /// Timed-metadata track
    Metadata,
    /// Closed-caption track
    Captions,
}

impl std::fmt::Display for TrackKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TrackKind::Metadata => write!(f, "metadata"),
            TrackKind::Captions => write!(f, "captions"),
        }
    }
}

/// One decoded timed-metadata frame.
///
/// The cue model stores this as its canonical payload; legacy field
/// aliases live in [`crate::legacy`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MetadataFrame {
    /// Frame identifier (e.g. "TXXX", "WXXX", "PRIV")
    pub key: String,
    /// Decoded text value, when the frame carries one
    pub value: Option<String>,
    /// Decoded URL, for link frames
    pub url: Option<String>,
    /// Raw frame payload, for opaque frames
    pub data: Option<Bytes>,
}

impl MetadataFrame {
    /// Text shown on the cue: value, then url, then the raw payload
    /// reinterpreted as UTF-8, then empty.
    pub fn display_text(&self) -> String {
        if let Some(value) = &self.value {
            return value.clone();
        }
        if let Some(url) = &self.url {
            return url.clone();
        }
        if let Some(data) = &self.data {
            return String::from_utf8_lossy(data).into_owned();
        }
        String::new()
    }
}

/// A timed annotation on a text track
#[derive(Debug, Clone, PartialEq)]
pub struct TextCue {
    /// Start time in seconds
    pub start_time: f64,
    /// End time in seconds
    pub end_time: f64,
    /// Display text
    pub text: String,
    /// Canonical metadata payload, for metadata-track cues
    pub value: Option<MetadataFrame>,
}

impl TextCue {
    /// Create a plain text cue
    pub fn new(start_time: f64, end_time: f64, text: impl Into<String>) -> Self {
        Self {
            start_time,
            end_time,
            text: text.into(),
            value: None,
        }
    }

    /// Create a metadata cue carrying a decoded frame
    pub fn with_frame(start_time: f64, end_time: f64, frame: MetadataFrame) -> Self {
        Self {
            start_time,
            end_time,
            text: frame.display_text(),
            value: Some(frame),
        }
    }

    /// Duration of this cue in seconds
    pub fn duration(&self) -> f64 {
        self.end_time - self.start_time
    }

    /// Check if the cue should be displayed at the given time
    pub fn is_active_at(&self, time: f64) -> bool {
        time >= self.start_time && time < self.end_time
    }
}

/// Audio track as mirrored into the presentation layer.
///
/// One per alternate-audio descriptor reported by the engine; `id` is the
/// descriptor name, which is what the engine matches on write-back.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AudioTrackMirror {
    /// Descriptor name; matched against engine track titles
    pub id: String,
    /// Human-readable label
    pub label: String,
    /// BCP-47 language code, when known
    pub language: Option<String>,
    /// Whether the descriptor is flagged as the default track
    pub is_default: bool,
    /// Whether this track is currently selected in the presentation layer
    pub enabled: bool,
}

/// Attributes of the currently playing media
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaAttributes {
    /// Peak bandwidth in bits per second
    pub bandwidth: u64,
    /// Frame resolution
    pub resolution: Resolution,
}

/// Description of the currently playing media, for playlist consumers
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MediaDetails {
    /// Fully resolved playlist URI
    pub resolved_uri: Url,
    /// Bandwidth and resolution attributes
    pub attributes: MediaAttributes,
}
