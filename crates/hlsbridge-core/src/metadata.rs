//! Timed-metadata cue synchronization
//!
//! Turns decoded metadata tags into a consistent cue sequence on one
//! persistent metadata track. After every insertion the track's cues are
//! re-sorted and re-stitched so they tile time: each cue ends exactly
//! where the next begins, and the last cue runs to the media duration
//! (or an unbounded sentinel while duration is unknown).

use tracing::{debug, instrument};

use crate::config::{BridgeConfig, UNBOUNDED_CUE_END};
use crate::decoders::MetadataTag;
use crate::engine::PlayerView;
use crate::tracks::{TextTrackList, TrackId};
use crate::types::{TextCue, TrackKind};

/// Maintains the timed-metadata text track
#[derive(Debug)]
pub struct MetadataCueSync {
    track: Option<TrackId>,
    label: String,
    min_cue_duration: f64,
    fudge: f64,
}

impl MetadataCueSync {
    pub fn new(config: &BridgeConfig) -> Self {
        Self {
            track: None,
            label: config.metadata_track_label.clone(),
            min_cue_duration: config.min_cue_duration,
            fudge: config.time_fudge,
        }
    }

    /// The metadata track, once the first tag has arrived
    pub fn track_id(&self) -> Option<TrackId> {
        self.track
    }

    /// Ingest one decoded metadata tag.
    ///
    /// Stale cues are evicted before the new ones are inserted, so a
    /// fresh cue can never be collected by an eviction check computed
    /// against pre-insertion state. A tag with no frames is a no-op.
    #[instrument(skip(self, tracks, view, tag))]
    pub fn ingest(&mut self, tracks: &mut TextTrackList, view: &dyn PlayerView, tag: MetadataTag) {
        if tag.frames.is_empty() {
            return;
        }

        let track_id = match self.track {
            Some(id) => id,
            None => {
                let id = tracks.create(TrackKind::Metadata, self.label.clone());
                debug!(label = %self.label, "Created timed-metadata track");
                self.track = Some(id);
                id
            }
        };
        let Some(track) = tracks.get_mut(track_id) else {
            return;
        };

        track.evict_preceding(&view.buffered(), self.fudge);

        let time = view.current_time();
        let frame_count = tag.frames.len();
        for frame in tag.frames {
            track.add_cue(TextCue::with_frame(time, time + self.min_cue_duration, frame));
        }
        debug!(frames = frame_count, at = time, "Inserted metadata cues");

        restitch(track.cues_mut(), view.duration());
    }

    /// Any seek invalidates timed-metadata continuity: purge everything.
    pub fn on_seek(&mut self, tracks: &mut TextTrackList) {
        if let Some(id) = self.track {
            if let Some(track) = tracks.get_mut(id) {
                track.clear_cues();
            }
        }
    }
}

/// Sort cues by start time and stitch adjacent pairs so the track tiles
/// time without gaps or overlaps. The final cue runs to `duration`,
/// substituting the unbounded sentinel when duration is NaN or infinite.
fn restitch(cues: &mut [TextCue], duration: f64) {
    if cues.is_empty() {
        return;
    }

    cues.sort_by(|a, b| a.start_time.total_cmp(&b.start_time));

    for i in 0..cues.len() - 1 {
        if cues[i].end_time != cues[i + 1].start_time {
            cues[i].end_time = cues[i + 1].start_time;
        }
    }

    let end = if duration.is_nan() || duration.is_infinite() {
        UNBOUNDED_CUE_END
    } else {
        duration
    };
    if let Some(last) = cues.last_mut() {
        last.end_time = end;
    }
}
