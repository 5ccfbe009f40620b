//! Legacy cue-payload aliases
//!
//! Older integrations read metadata cue payloads through `frame`-era
//! field names. The cue model stores only the canonical payload; this
//! adapter resolves the old names against it and logs a deprecation
//! warning on every access.

use bytes::Bytes;
use tracing::warn;

use crate::types::{MetadataFrame, TextCue};

/// Deprecated field aliases over a metadata cue's payload
pub struct LegacyFrameView<'a> {
    frame: &'a MetadataFrame,
}

impl<'a> LegacyFrameView<'a> {
    /// Wrap a cue's payload; None for cues without one (caption cues)
    pub fn new(cue: &'a TextCue) -> Option<Self> {
        cue.value.as_ref().map(|frame| Self { frame })
    }

    /// Deprecated alias for the frame key
    pub fn id(&self) -> &str {
        warn!("cue.frame.id is deprecated. Use cue.value.key instead.");
        &self.frame.key
    }

    /// Deprecated alias for the raw frame payload
    pub fn value(&self) -> Option<&Bytes> {
        warn!("cue.frame.value is deprecated. Use cue.value.data instead.");
        self.frame.data.as_ref()
    }

    /// Deprecated alias for the raw frame payload
    pub fn private_data(&self) -> Option<&Bytes> {
        warn!("cue.frame.private_data is deprecated. Use cue.value.data instead.");
        self.frame.data.as_ref()
    }
}
