//! Engine event bridge
//!
//! Central dispatcher between the host engine and the presentation
//! layer. Engine lifecycle signals arrive serially through
//! [`HlsBridge::handle_event`]; each handler runs to completion before
//! the next signal is delivered, so no internal locking is needed.

use base64::prelude::{Engine as _, BASE64_STANDARD};
use bytes::Bytes;
use tracing::{debug, info, instrument, warn};
use url::Url;

use crate::audio::{setup_audio_tracks, update_audio_track};
use crate::captions::{CaptionPacketEntry, CaptionRouter};
use crate::config::BridgeConfig;
use crate::decoders::{CaptionDecoder, MetadataChunk, MetadataDecoder};
use crate::engine::{EngineAdapter, EngineStats, PlayerView};
use crate::error::{Error, Result};
use crate::events::{BridgeEvent, Channel, PlaylistEvent, SubscriptionId};
use crate::metadata::MetadataCueSync;
use crate::quality::{QualityLevel, QualityLevelList};
use crate::ranges::TimeRange;
use crate::representations::RepresentationSet;
use crate::tracks::TextTrackList;
use crate::types::{AudioTrackMirror, MediaAttributes, MediaDetails, Representation, Resolution};

/// Engine lifecycle signals, delivered serially by the host
#[derive(Debug, Clone)]
pub enum EngineEvent {
    /// Level descriptors and audio tracks are available
    LoadedMetadata,
    /// A seek started
    Seeking,
    /// A timed-metadata packet arrived, base64-coded
    Id3Updated { data: String },
    /// A caption packet arrived
    CaptionData { entries: Vec<CaptionPacketEntry> },
    /// The engine switched to a new level
    LevelSwitch { level: i32 },
    /// A level playlist finished loading
    LevelLoaded,
    /// A media fragment finished loading
    FragmentLoaded,
}

/// Bridges an embedded HLS engine to the presentation layer
pub struct HlsBridge<E: EngineAdapter, V: PlayerView> {
    engine: E,
    view: V,
    tracks: TextTrackList,
    metadata: MetadataCueSync,
    metadata_decoder: Box<dyn MetadataDecoder>,
    captions: CaptionRouter,
    representations: RepresentationSet,
    quality_levels: Option<QualityLevelList>,
    audio_mirrors: Vec<AudioTrackMirror>,
    events: Channel<BridgeEvent>,
    playlist_events: Channel<PlaylistEvent>,
    disposed: bool,
}

impl<E: EngineAdapter, V: PlayerView> HlsBridge<E, V> {
    pub fn new(
        engine: E,
        view: V,
        metadata_decoder: Box<dyn MetadataDecoder>,
        caption_decoder: Box<dyn CaptionDecoder>,
        config: BridgeConfig,
    ) -> Self {
        info!("Bridge created");
        Self {
            engine,
            view,
            tracks: TextTrackList::new(),
            metadata: MetadataCueSync::new(&config),
            metadata_decoder,
            captions: CaptionRouter::new(&config, caption_decoder),
            representations: RepresentationSet::new(),
            quality_levels: None,
            audio_mirrors: Vec::new(),
            events: Channel::new(),
            playlist_events: Channel::new(),
            disposed: false,
        }
    }

    /// Dispatch one engine signal. Events after disposal are ignored.
    #[instrument(skip_all)]
    pub fn handle_event(&mut self, event: EngineEvent) {
        if self.disposed {
            return;
        }

        match event {
            EngineEvent::LoadedMetadata => self.on_loaded_metadata(),
            EngineEvent::Seeking => self.on_seeking(),
            EngineEvent::Id3Updated { data } => self.on_id3_updated(&data),
            EngineEvent::CaptionData { entries } => {
                self.captions.ingest_packet(&mut self.tracks, &self.view, &entries);
            }
            EngineEvent::LevelSwitch { level } => self.on_level_switch(level),
            EngineEvent::LevelLoaded => {
                self.playlist_events.emit(&PlaylistEvent::LoadedPlaylist);
            }
            EngineEvent::FragmentLoaded => {
                self.events.emit(&BridgeEvent::BandwidthUpdate);
                self.captions.on_fragment_complete(&mut self.tracks, &self.view);
            }
        }
    }

    fn on_loaded_metadata(&mut self) {
        let mut list = QualityLevelList::new();
        for rep in self.representations.list(&self.engine) {
            list.add_quality_level(QualityLevel::from(rep));
        }
        let selected = list.set_selected(&self.engine.level().to_string());
        info!(levels = list.len(), selected, "Engine metadata ready");
        self.quality_levels = Some(list);
        self.events.emit(&BridgeEvent::QualityChange { selected_index: selected });

        self.audio_mirrors = setup_audio_tracks(&self.engine);
    }

    fn on_seeking(&mut self) {
        self.metadata.on_seek(&mut self.tracks);
        self.captions.on_seek(&mut self.tracks, &self.view);
    }

    fn on_id3_updated(&mut self, data: &str) {
        let bytes = match BASE64_STANDARD.decode(data) {
            Ok(bytes) => bytes,
            Err(error) => {
                let error = Error::from(error);
                warn!(code = error.error_code(), %error, "Dropping timed-metadata packet");
                return;
            }
        };

        let tags = self
            .metadata_decoder
            .decode(MetadataChunk::timed_metadata(Bytes::from(bytes)));
        for tag in tags {
            self.metadata.ingest(&mut self.tracks, &self.view, tag);
        }
    }

    fn on_level_switch(&mut self, level: i32) {
        if let Some(list) = self.quality_levels.as_mut() {
            let selected = list.set_selected(&level.to_string());
            debug!(level, selected, "Level switch mirrored");
            self.events.emit(&BridgeEvent::QualityChange { selected_index: selected });
        }
        self.playlist_events.emit(&PlaylistEvent::MediaChange);
        self.events.emit(&BridgeEvent::MediaChange);
    }

    /// Presentation-side audio selection changed: write the matching
    /// engine index, or nothing when no mirror track is enabled.
    pub fn on_audio_track_changed(&mut self) {
        if self.disposed {
            return;
        }
        update_audio_track(&mut self.engine, &self.audio_mirrors);
    }

    /// Enable the mirror track with the given id and push the selection
    /// into the engine
    pub fn select_audio_track(&mut self, id: &str) {
        for track in self.audio_mirrors.iter_mut() {
            track.enabled = track.id == id;
        }
        self.on_audio_track_changed();
    }

    /// Hand a new source URI to the engine. Empty input is a no-op.
    pub fn set_source(&mut self, src: &str) {
        if src.is_empty() {
            return;
        }
        self.engine.set_src(src);
    }

    /// The currently seekable interval; None while nothing is seekable
    pub fn seekable(&self) -> Option<TimeRange> {
        let end = self.engine.seekable_end();
        if end == 0.0 {
            return None;
        }
        Some(TimeRange::new(self.engine.seekable_start(), end))
    }

    /// Describe the currently playing media for playlist consumers
    pub fn media(&self) -> Result<MediaDetails> {
        let levels = self.engine.levels();
        if levels.is_empty() {
            return Err(Error::NoLevels);
        }

        let index = self.engine.level();
        let level = usize::try_from(index)
            .ok()
            .and_then(|i| levels.get(i))
            .ok_or(Error::LevelOutOfRange { index, len: levels.len() })?;

        Ok(MediaDetails {
            resolved_uri: Url::parse(&level.url)?,
            attributes: MediaAttributes {
                bandwidth: level.bitrate,
                resolution: Resolution::new(level.width, level.height),
            },
        })
    }

    /// Engine transfer statistics
    pub fn stats(&self) -> EngineStats {
        self.engine.stats()
    }

    /// Measured bandwidth in bits per second
    pub fn bandwidth(&self) -> u64 {
        self.engine.stats().bandwidth
    }

    /// The representation list (built on first call)
    pub fn representations(&mut self) -> &[Representation] {
        self.representations.list(&self.engine)
    }

    /// Toggle a representation; recomputes and writes the selection mode
    pub fn set_representation_enabled(&mut self, id: &str, enabled: bool) {
        self.representations.set_enabled(&mut self.engine, id, enabled);
    }

    /// The mirrored quality-level list, once metadata has loaded
    pub fn quality_levels(&self) -> Option<&QualityLevelList> {
        self.quality_levels.as_ref()
    }

    /// Presentation-side audio track mirrors
    pub fn audio_tracks(&self) -> &[AudioTrackMirror] {
        &self.audio_mirrors
    }

    /// All text tracks created so far
    pub fn text_tracks(&self) -> &TextTrackList {
        &self.tracks
    }

    /// Subscribe to bridge notifications
    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(&BridgeEvent) + 'static,
    {
        self.events.subscribe(listener)
    }

    /// Detach one bridge subscription
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.events.detach(id)
    }

    /// Subscribe to playlist notifications
    pub fn subscribe_playlists<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(&PlaylistEvent) + 'static,
    {
        self.playlist_events.subscribe(listener)
    }

    /// Detach one playlist subscription
    pub fn unsubscribe_playlists(&mut self, id: SubscriptionId) -> bool {
        self.playlist_events.detach(id)
    }

    /// Deprecated direct-access entry point kept for older integrations
    pub fn legacy_handle(&mut self) -> &mut Self {
        warn!("Direct bridge access is deprecated. Subscribe to bridge notifications instead.");
        self.events.emit(&BridgeEvent::Usage { name: "hlsbridge-direct-access".to_string() });
        self
    }

    /// Tear down: detach every subscription and drop the quality-level
    /// list. Idempotent, and safe before `LoadedMetadata` ever fired.
    pub fn dispose(&mut self) {
        if self.disposed {
            return;
        }
        info!("Bridge disposed");
        self.events.clear();
        self.playlist_events.clear();
        self.quality_levels = None;
        self.disposed = true;
    }

    /// Whether `dispose` has run
    pub fn is_disposed(&self) -> bool {
        self.disposed
    }
}

impl<E: EngineAdapter, V: PlayerView> std::fmt::Debug for HlsBridge<E, V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HlsBridge")
            .field("tracks", &self.tracks.len())
            .field("disposed", &self.disposed)
            .finish_non_exhaustive()
    }
}

/// Whether a MIME type denotes an HLS source this bridge can handle
pub fn can_play_mime_type(mime: &str) -> bool {
    let mime = mime.trim().to_ascii_lowercase();
    let Some((kind, subtype)) = mime.split_once('/') else {
        return false;
    };
    if !matches!(kind, "audio" | "video" | "application") {
        return false;
    }
    let subtype = subtype
        .strip_prefix("x-")
        .or_else(|| subtype.strip_prefix("vnd.apple."))
        .unwrap_or(subtype);
    subtype == "mpegurl"
}
