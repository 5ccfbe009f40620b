//! Closed-caption routing
//!
//! Raw caption packets from the engine are scaled to the 90 kHz tick
//! clock and pushed through the external caption decoder; every caption
//! the decoder completes lands on a per-stream text track, created
//! lazily on the first record for that stream id and kept for the whole
//! session.

use std::collections::HashMap;

use base64::prelude::{Engine as _, BASE64_STANDARD};
use bytes::Bytes;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

use crate::config::{BridgeConfig, TICKS_PER_SECOND};
use crate::decoders::{CaptionDecoder, CaptionSample, DecodedCaption, NalUnitType};
use crate::engine::PlayerView;
use crate::ranges::find_range;
use crate::tracks::{TextTrackList, TrackId};
use crate::types::{TextCue, TrackKind};

/// One entry of a raw caption packet, as delivered by the engine
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaptionPacketEntry {
    /// Presentation timestamp in seconds
    pub pos: f64,
    /// Decode timestamp in seconds
    pub dts: f64,
    /// Base64-coded payload bytes
    pub data: String,
}

/// Routes decoded captions onto per-stream text tracks
pub struct CaptionRouter {
    decoder: Box<dyn CaptionDecoder>,
    streams: HashMap<String, TrackId>,
    fudge: f64,
}

impl CaptionRouter {
    pub fn new(config: &BridgeConfig, decoder: Box<dyn CaptionDecoder>) -> Self {
        Self {
            decoder,
            streams: HashMap::new(),
            fudge: config.time_fudge,
        }
    }

    /// Track ids by stream id, for consumers enumerating caption tracks
    pub fn stream_tracks(&self) -> &HashMap<String, TrackId> {
        &self.streams
    }

    /// Feed one raw caption packet through the decoder pipeline.
    ///
    /// Entries that fail base64 decoding are skipped with a warning; an
    /// entry that completes no caption is not an error.
    #[instrument(skip_all, fields(entries = entries.len()))]
    pub fn ingest_packet(
        &mut self,
        tracks: &mut TextTrackList,
        view: &dyn PlayerView,
        entries: &[CaptionPacketEntry],
    ) {
        for entry in entries {
            let payload = match BASE64_STANDARD.decode(&entry.data) {
                Ok(bytes) => Bytes::from(bytes),
                Err(error) => {
                    warn!(%error, "Skipping caption entry with malformed payload");
                    continue;
                }
            };

            let sample = CaptionSample {
                pts: (entry.pos * TICKS_PER_SECOND).round() as u64,
                dts: (entry.dts * TICKS_PER_SECOND).round() as u64,
                payload,
                unit_type: NalUnitType::SeiRbsp,
            };

            let completed = self.decoder.push(sample);
            for caption in completed {
                self.route(tracks, view, caption);
            }
        }
    }

    /// Land one decoded caption on its stream's track
    fn route(&mut self, tracks: &mut TextTrackList, view: &dyn PlayerView, caption: DecodedCaption) {
        let track_id = match self.streams.get(&caption.stream) {
            Some(&id) => id,
            None => {
                // A track for this stream may survive from a previous
                // handler; drop it so the stream never shows up twice.
                tracks.remove_matching(TrackKind::Captions, &caption.stream);
                let id = tracks.create(TrackKind::Captions, caption.stream.clone());
                debug!(stream = %caption.stream, "Created caption track");
                self.streams.insert(caption.stream.clone(), id);
                id
            }
        };
        let Some(track) = tracks.get_mut(track_id) else {
            return;
        };

        track.evict_preceding(&view.buffered(), self.fudge);
        track.add_cue(TextCue::new(
            caption.start_pts as f64 / TICKS_PER_SECOND,
            caption.end_pts as f64 / TICKS_PER_SECOND,
            caption.text,
        ));
    }

    /// Seek handling.
    ///
    /// When the playback position lands outside every buffered range,
    /// continuity is gone: purge every per-stream track and reset the
    /// decoder, discarding any partially-decoded caption. Inside a
    /// buffered range nothing is purged; the usual eviction runs on the
    /// next data arrival.
    pub fn on_seek(&mut self, tracks: &mut TextTrackList, view: &dyn PlayerView) {
        let buffered = view.buffered();
        if !find_range(&buffered, view.current_time()).is_empty() {
            return;
        }

        debug!("Seek outside buffered media; purging caption tracks");
        for &id in self.streams.values() {
            if let Some(track) = tracks.get_mut(id) {
                track.clear_cues();
            }
        }
        self.decoder.reset();
    }

    /// Fragment boundary: flush the decoder so buffered-but-undelivered
    /// captions are not lost, and route whatever comes out.
    pub fn on_fragment_complete(&mut self, tracks: &mut TextTrackList, view: &dyn PlayerView) {
        let flushed = self.decoder.flush();
        for caption in flushed {
            self.route(tracks, view, caption);
        }
    }
}

impl std::fmt::Debug for CaptionRouter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CaptionRouter")
            .field("streams", &self.streams)
            .finish_non_exhaustive()
    }
}
