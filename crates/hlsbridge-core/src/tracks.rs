//! Text-track and cue storage
//!
//! Persistent track objects with add/remove/list cue semantics. Tracks
//! are created lazily by the cue synchronizer and caption router and live
//! for the whole session; only their cues are evicted.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::ranges::{buffered_start, TimeRange};
use crate::types::{TextCue, TrackKind};

/// Stable identifier for a text track
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TrackId(Uuid);

impl TrackId {
    fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

/// A persistent text track holding timed cues
#[derive(Debug, Clone)]
pub struct TextTrack {
    id: TrackId,
    kind: TrackKind,
    label: String,
    cues: Vec<TextCue>,
}

impl TextTrack {
    fn new(kind: TrackKind, label: impl Into<String>) -> Self {
        Self {
            id: TrackId::new(),
            kind,
            label: label.into(),
            cues: Vec::new(),
        }
    }

    pub fn id(&self) -> TrackId {
        self.id
    }

    pub fn kind(&self) -> TrackKind {
        self.kind
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn cues(&self) -> &[TextCue] {
        &self.cues
    }

    pub fn cues_mut(&mut self) -> &mut Vec<TextCue> {
        &mut self.cues
    }

    /// Append a cue
    pub fn add_cue(&mut self, cue: TextCue) {
        self.cues.push(cue);
    }

    /// Remove every cue overlapping `[start, end]` (inclusive)
    pub fn remove_cues_between(&mut self, start: f64, end: f64) {
        self.cues
            .retain(|cue| !(cue.start_time <= end && cue.end_time >= start));
    }

    /// Remove all cues
    pub fn clear_cues(&mut self) {
        self.remove_cues_between(0.0, f64::INFINITY);
    }

    /// Evict cues preceding the start of the buffered window.
    ///
    /// A cue is stale when it ends at or before the first buffered
    /// range's start; `fudge` widens the boundary so cues that only miss
    /// it by range rounding are still collected. Cues extending into the
    /// buffered window are retained.
    pub fn evict_preceding(&mut self, buffered: &[TimeRange], fudge: f64) {
        let Some(start) = buffered_start(buffered) else {
            return;
        };
        self.cues.retain(|cue| cue.end_time > start + fudge);
    }
}

/// The session's track registry
#[derive(Debug, Clone, Default)]
pub struct TextTrackList {
    tracks: Vec<TextTrack>,
}

impl TextTrackList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a track and return its id
    pub fn create(&mut self, kind: TrackKind, label: impl Into<String>) -> TrackId {
        let track = TextTrack::new(kind, label);
        let id = track.id();
        self.tracks.push(track);
        id
    }

    /// Remove every track matching kind + label.
    ///
    /// Used before re-creating a caption track so a stream never ends up
    /// with duplicate tracks across handler re-creation.
    pub fn remove_matching(&mut self, kind: TrackKind, label: &str) {
        self.tracks
            .retain(|track| !(track.kind() == kind && track.label() == label));
    }

    pub fn get(&self, id: TrackId) -> Option<&TextTrack> {
        self.tracks.iter().find(|track| track.id() == id)
    }

    pub fn get_mut(&mut self, id: TrackId) -> Option<&mut TextTrack> {
        self.tracks.iter_mut().find(|track| track.id() == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &TextTrack> {
        self.tracks.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut TextTrack> {
        self.tracks.iter_mut()
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }
}
