//! hlsbridge Core - Playback bridge for embedded HLS engines
//!
//! This crate connects a media-playback front end to a decoding engine
//! that is reachable only through a synchronous property surface:
//! - Timed-metadata cue synchronization (sorting, stitching, eviction)
//! - Closed-caption routing onto per-stream text tracks
//! - Representation enablement with auto / capped-auto / manual modes
//! - Engine lifecycle event dispatch and quality-level mirroring
//!
//! # Architecture
//!
//! ```text
//! ┌───────────────────────────────────────────────────────────┐
//! │                      hlsbridge Core                       │
//! ├───────────────────────────────────────────────────────────┤
//! │                                                           │
//! │  ┌────────────┐  ┌────────────┐  ┌──────────────────┐     │
//! │  │  Metadata  │  │  Caption   │  │  Representation  │     │
//! │  │  Cue Sync  │  │  Router    │  │  Controller      │     │
//! │  └─────┬──────┘  └─────┬──────┘  └────────┬─────────┘     │
//! │        │               │                  │               │
//! │        └───────────────┼──────────────────┘               │
//! │                        │                                  │
//! │                 ┌──────┴──────┐                           │
//! │                 │   Event     │                           │
//! │                 │   Bridge    │                           │
//! │                 └──────┬──────┘                           │
//! │                        │                                  │
//! │              engine property surface                      │
//! └───────────────────────────────────────────────────────────┘
//! ```

pub mod audio;
pub mod bridge;
pub mod captions;
pub mod config;
pub mod decoders;
pub mod engine;
pub mod error;
pub mod events;
pub mod legacy;
pub mod metadata;
pub mod quality;
pub mod ranges;
pub mod representations;
pub mod tracks;
pub mod types;

pub use bridge::{can_play_mime_type, EngineEvent, HlsBridge};
pub use captions::{CaptionPacketEntry, CaptionRouter};
pub use config::{BridgeConfig, TICKS_PER_SECOND, TIME_FUDGE_FACTOR, UNBOUNDED_CUE_END};
pub use decoders::{
    CaptionDecoder, CaptionSample, ChunkKind, DecodedCaption, MetadataChunk, MetadataDecoder,
    MetadataTag, NalUnitType,
};
pub use engine::{
    AltAudioTrack, EngineAdapter, EngineAudioTrack, EngineStats, LevelInfo, PlayerView,
};
pub use error::{Error, Result};
pub use events::{BridgeEvent, Channel, PlaylistEvent, SubscriptionId};
pub use legacy::LegacyFrameView;
pub use metadata::MetadataCueSync;
pub use quality::{QualityLevel, QualityLevelList};
pub use ranges::{filter_ranges, find_range, TimeRange};
pub use representations::{selection_mode, RepresentationSet};
pub use tracks::{TextTrack, TextTrackList, TrackId};
pub use types::*;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize the bridge library with default configuration
pub fn init() {
    tracing::info!(version = VERSION, "hlsbridge Core initialized");
}
