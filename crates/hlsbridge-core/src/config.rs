//! Bridge configuration

use serde::{Deserialize, Serialize};

/// Fudge factor to account for buffered-range rounding (seconds).
///
/// Engines report range boundaries quantized to frame or tick precision;
/// one NTSC frame absorbs the drift.
pub const TIME_FUDGE_FACTOR: f64 = 1.0 / 30.0;

/// Native tick rate of the engine's presentation clock (90 kHz).
pub const TICKS_PER_SECOND: f64 = 90_000.0;

/// End-time sentinel for the last metadata cue when duration is unknown.
pub const UNBOUNDED_CUE_END: f64 = f64::MAX;

/// Bridge configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BridgeConfig {
    /// Label given to the timed-metadata track
    pub metadata_track_label: String,
    /// Initial duration of a freshly inserted metadata cue (seconds).
    /// Cues are re-stitched immediately after insertion, so this only
    /// bounds the last cue until the next packet or duration update.
    pub min_cue_duration: f64,
    /// Tolerance applied to buffered-range boundaries (seconds)
    pub time_fudge: f64,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            metadata_track_label: "Timed Metadata".to_string(),
            min_cue_duration: 0.1,
            time_fudge: TIME_FUDGE_FACTOR,
        }
    }
}
