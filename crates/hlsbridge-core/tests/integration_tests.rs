//! Integration tests for hlsbridge Core

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use base64::prelude::{Engine as _, BASE64_STANDARD};
use bytes::Bytes;

use hlsbridge_core::{
    AltAudioTrack, BridgeConfig, BridgeEvent, CaptionDecoder, CaptionPacketEntry, CaptionSample,
    DecodedCaption, EngineAdapter, EngineAudioTrack, EngineEvent, EngineStats, HlsBridge,
    LegacyFrameView, LevelInfo, MetadataChunk, MetadataDecoder, MetadataFrame, MetadataTag,
    PlayerView, PlaylistEvent, TimeRange, TrackKind, UNBOUNDED_CUE_END,
};

// =============================================================================
// Fakes
// =============================================================================

#[derive(Default)]
struct EngineState {
    levels: Vec<LevelInfo>,
    level: i32,
    auto_level_capping: i32,
    audio_tracks: Vec<EngineAudioTrack>,
    alt_audio_tracks: Vec<AltAudioTrack>,
    audio_track: usize,
    stats: EngineStats,
    seekable_start: f64,
    seekable_end: f64,
    src: Option<String>,
    level_writes: Vec<i32>,
    cap_writes: Vec<i32>,
    audio_writes: Vec<usize>,
}

#[derive(Clone)]
struct FakeEngine(Rc<RefCell<EngineState>>);

impl EngineAdapter for FakeEngine {
    fn levels(&self) -> Vec<LevelInfo> {
        self.0.borrow().levels.clone()
    }
    fn level(&self) -> i32 {
        self.0.borrow().level
    }
    fn set_level(&mut self, level: i32) {
        let mut state = self.0.borrow_mut();
        state.level = level;
        state.level_writes.push(level);
    }
    fn set_auto_level_capping(&mut self, cap: i32) {
        let mut state = self.0.borrow_mut();
        state.auto_level_capping = cap;
        state.cap_writes.push(cap);
    }
    fn audio_tracks(&self) -> Vec<EngineAudioTrack> {
        self.0.borrow().audio_tracks.clone()
    }
    fn alt_audio_tracks(&self) -> Vec<AltAudioTrack> {
        self.0.borrow().alt_audio_tracks.clone()
    }
    fn audio_track(&self) -> usize {
        self.0.borrow().audio_track
    }
    fn set_audio_track(&mut self, index: usize) {
        let mut state = self.0.borrow_mut();
        state.audio_track = index;
        state.audio_writes.push(index);
    }
    fn stats(&self) -> EngineStats {
        self.0.borrow().stats
    }
    fn seekable_start(&self) -> f64 {
        self.0.borrow().seekable_start
    }
    fn seekable_end(&self) -> f64 {
        self.0.borrow().seekable_end
    }
    fn set_src(&mut self, src: &str) {
        self.0.borrow_mut().src = Some(src.to_string());
    }
}

struct ViewState {
    time: f64,
    duration: f64,
    buffered: Vec<TimeRange>,
}

#[derive(Clone)]
struct FakeView(Rc<RefCell<ViewState>>);

impl PlayerView for FakeView {
    fn current_time(&self) -> f64 {
        self.0.borrow().time
    }
    fn duration(&self) -> f64 {
        self.0.borrow().duration
    }
    fn buffered(&self) -> Vec<TimeRange> {
        self.0.borrow().buffered.clone()
    }
}

#[derive(Default)]
struct MetaDecoderState {
    queue: VecDeque<Vec<MetadataTag>>,
    chunks: Vec<MetadataChunk>,
}

struct ScriptedMetadataDecoder(Rc<RefCell<MetaDecoderState>>);

impl MetadataDecoder for ScriptedMetadataDecoder {
    fn decode(&mut self, chunk: MetadataChunk) -> Vec<MetadataTag> {
        let mut state = self.0.borrow_mut();
        state.chunks.push(chunk);
        state.queue.pop_front().unwrap_or_default()
    }
}

#[derive(Default)]
struct CaptionDecoderState {
    on_push: VecDeque<Vec<DecodedCaption>>,
    pending_flush: Vec<DecodedCaption>,
    pushed: Vec<CaptionSample>,
    resets: u32,
}

struct ScriptedCaptionDecoder(Rc<RefCell<CaptionDecoderState>>);

impl CaptionDecoder for ScriptedCaptionDecoder {
    fn push(&mut self, sample: CaptionSample) -> Vec<DecodedCaption> {
        let mut state = self.0.borrow_mut();
        state.pushed.push(sample);
        state.on_push.pop_front().unwrap_or_default()
    }
    fn flush(&mut self) -> Vec<DecodedCaption> {
        std::mem::take(&mut self.0.borrow_mut().pending_flush)
    }
    fn reset(&mut self) {
        let mut state = self.0.borrow_mut();
        state.resets += 1;
        state.pending_flush.clear();
    }
}

// =============================================================================
// Fixture
// =============================================================================

struct Fixture {
    bridge: HlsBridge<FakeEngine, FakeView>,
    engine: Rc<RefCell<EngineState>>,
    view: Rc<RefCell<ViewState>>,
    meta_decoder: Rc<RefCell<MetaDecoderState>>,
    caption_decoder: Rc<RefCell<CaptionDecoderState>>,
    events: Rc<RefCell<Vec<BridgeEvent>>>,
    playlist_events: Rc<RefCell<Vec<PlaylistEvent>>>,
}

fn video_level(index: usize, height: u32, bitrate: u64) -> LevelInfo {
    LevelInfo {
        index,
        width: height * 16 / 9,
        height,
        bitrate,
        audio_only: false,
        url: format!("https://example.com/level{index}.m3u8"),
    }
}

fn audio_level(index: usize) -> LevelInfo {
    LevelInfo {
        index,
        width: 0,
        height: 0,
        bitrate: 128_000,
        audio_only: true,
        url: format!("https://example.com/audio{index}.m3u8"),
    }
}

fn fixture_with_levels(levels: Vec<LevelInfo>) -> Fixture {
    let engine = Rc::new(RefCell::new(EngineState {
        levels,
        level: -1,
        auto_level_capping: -1,
        ..Default::default()
    }));
    let view = Rc::new(RefCell::new(ViewState {
        time: 0.0,
        duration: 60.0,
        buffered: Vec::new(),
    }));
    let meta_decoder = Rc::new(RefCell::new(MetaDecoderState::default()));
    let caption_decoder = Rc::new(RefCell::new(CaptionDecoderState::default()));

    let mut bridge = HlsBridge::new(
        FakeEngine(Rc::clone(&engine)),
        FakeView(Rc::clone(&view)),
        Box::new(ScriptedMetadataDecoder(Rc::clone(&meta_decoder))),
        Box::new(ScriptedCaptionDecoder(Rc::clone(&caption_decoder))),
        BridgeConfig::default(),
    );

    let events = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&events);
    bridge.subscribe(move |event| sink.borrow_mut().push(event.clone()));

    let playlist_events = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&playlist_events);
    bridge.subscribe_playlists(move |event| sink.borrow_mut().push(*event));

    Fixture {
        bridge,
        engine,
        view,
        meta_decoder,
        caption_decoder,
        events,
        playlist_events,
    }
}

fn fixture() -> Fixture {
    fixture_with_levels(vec![
        video_level(0, 360, 800_000),
        video_level(1, 720, 2_400_000),
        video_level(2, 1080, 5_000_000),
    ])
}

fn text_tag(text: &str) -> MetadataTag {
    MetadataTag {
        frames: vec![MetadataFrame {
            key: "TXXX".to_string(),
            value: Some(text.to_string()),
            ..Default::default()
        }],
    }
}

fn caption(stream: &str, start_pts: u64, end_pts: u64, text: &str) -> DecodedCaption {
    DecodedCaption {
        stream: stream.to_string(),
        start_pts,
        end_pts,
        text: text.to_string(),
    }
}

fn packet_entry(pos: f64) -> CaptionPacketEntry {
    CaptionPacketEntry {
        pos,
        dts: pos,
        data: BASE64_STANDARD.encode(b"sei payload"),
    }
}

// =============================================================================
// Metadata readiness
// =============================================================================

#[test]
fn test_loaded_metadata_builds_quality_levels() {
    let mut fx = fixture_with_levels(vec![
        audio_level(0),
        video_level(1, 480, 1_200_000),
        video_level(2, 720, 2_400_000),
    ]);
    fx.engine.borrow_mut().level = 1;

    fx.bridge.handle_event(EngineEvent::LoadedMetadata);

    let levels = fx.bridge.quality_levels().expect("list created");
    assert_eq!(levels.len(), 2);
    assert_eq!(levels.levels()[0].id, "1");
    assert_eq!(levels.levels()[1].id, "2");
    // Engine level 1 is the first entry of the filtered list
    assert_eq!(levels.selected_index(), 0);

    assert_eq!(
        *fx.events.borrow(),
        vec![BridgeEvent::QualityChange { selected_index: 0 }]
    );
}

#[test]
fn test_loaded_metadata_builds_audio_mirror() {
    let mut fx = fixture();
    {
        let mut engine = fx.engine.borrow_mut();
        engine.audio_tracks = vec![
            EngineAudioTrack { id: 0, title: "eng".to_string() },
            EngineAudioTrack { id: 1, title: "spa".to_string() },
        ];
        engine.alt_audio_tracks = vec![
            AltAudioTrack { name: "eng".to_string(), lang: Some("en".to_string()), default_track: true },
            AltAudioTrack { name: "spa".to_string(), lang: Some("es".to_string()), default_track: false },
        ];
        engine.audio_track = 1;
    }

    fx.bridge.handle_event(EngineEvent::LoadedMetadata);

    let mirrors = fx.bridge.audio_tracks();
    assert_eq!(mirrors.len(), 2);
    assert!(!mirrors[0].enabled);
    assert!(mirrors[1].enabled);
}

#[test]
fn test_representations_from_json_level_fixture() {
    let levels: Vec<LevelInfo> = serde_json::from_str(
        r#"[
        {"index": 0, "width": 640, "height": 360, "bitrate": 800000, "audio_only": false, "url": "https://example.com/360p.m3u8"},
        {"index": 1, "width": 0, "height": 0, "bitrate": 128000, "audio_only": true, "url": "https://example.com/audio.m3u8"},
        {"index": 2, "width": 1280, "height": 720, "bitrate": 2400000, "audio_only": false, "url": "https://example.com/720p.m3u8"}
    ]"#,
    )
    .expect("level fixture parses");

    let mut fx = fixture_with_levels(levels);
    let reps = fx.bridge.representations();
    assert_eq!(reps.len(), 2);
    assert_eq!(reps[0].id, "0");
    assert_eq!(reps[1].id, "2");
    assert!(reps.iter().all(|rep| rep.enabled));
}

// =============================================================================
// Level lifecycle
// =============================================================================

#[test]
fn test_level_switch_mirrors_selected_index_and_notifies() {
    let mut fx = fixture();
    fx.bridge.handle_event(EngineEvent::LoadedMetadata);
    fx.events.borrow_mut().clear();

    fx.bridge.handle_event(EngineEvent::LevelSwitch { level: 2 });

    assert_eq!(fx.bridge.quality_levels().unwrap().selected_index(), 2);
    assert_eq!(
        *fx.events.borrow(),
        vec![
            BridgeEvent::QualityChange { selected_index: 2 },
            BridgeEvent::MediaChange,
        ]
    );
    assert_eq!(*fx.playlist_events.borrow(), vec![PlaylistEvent::MediaChange]);
}

#[test]
fn test_level_switch_before_metadata_still_notifies_media_change() {
    let mut fx = fixture();
    fx.bridge.handle_event(EngineEvent::LevelSwitch { level: 1 });

    assert!(fx.bridge.quality_levels().is_none());
    assert_eq!(*fx.events.borrow(), vec![BridgeEvent::MediaChange]);
    assert_eq!(*fx.playlist_events.borrow(), vec![PlaylistEvent::MediaChange]);
}

#[test]
fn test_level_loaded_emits_loaded_playlist() {
    let mut fx = fixture();
    fx.bridge.handle_event(EngineEvent::LevelLoaded);
    assert_eq!(*fx.playlist_events.borrow(), vec![PlaylistEvent::LoadedPlaylist]);
}

#[test]
fn test_fragment_loaded_emits_bandwidth_update_and_flushes_captions() {
    let mut fx = fixture();
    fx.caption_decoder.borrow_mut().pending_flush =
        vec![caption("CC1", 90_000, 180_000, "boundary caption")];

    fx.bridge.handle_event(EngineEvent::FragmentLoaded);

    assert_eq!(*fx.events.borrow(), vec![BridgeEvent::BandwidthUpdate]);
    let tracks = fx.bridge.text_tracks();
    let track = tracks.iter().find(|t| t.label() == "CC1").expect("caption track");
    assert_eq!(track.cues().len(), 1);
    assert_eq!(track.cues()[0].text, "boundary caption");
}

// =============================================================================
// Timed metadata
// =============================================================================

#[test]
fn test_id3_packet_becomes_stitched_cues() {
    let mut fx = fixture();
    fx.meta_decoder.borrow_mut().queue.push_back(vec![text_tag("first")]);
    fx.view.borrow_mut().time = 2.0;

    fx.bridge.handle_event(EngineEvent::Id3Updated {
        data: BASE64_STANDARD.encode(b"tag one"),
    });

    fx.meta_decoder.borrow_mut().queue.push_back(vec![text_tag("second")]);
    fx.view.borrow_mut().time = 5.0;
    fx.bridge.handle_event(EngineEvent::Id3Updated {
        data: BASE64_STANDARD.encode(b"tag two"),
    });

    let tracks = fx.bridge.text_tracks();
    let track = tracks
        .iter()
        .find(|t| t.kind() == TrackKind::Metadata)
        .expect("metadata track");
    let cues = track.cues();
    assert_eq!(cues.len(), 2);
    assert_eq!(cues[0].start_time, 2.0);
    assert_eq!(cues[0].end_time, 5.0);
    assert_eq!(cues[1].start_time, 5.0);
    assert_eq!(cues[1].end_time, 60.0);

    // The decoder saw the raw bytes, unwrapped from base64
    let chunks = &fx.meta_decoder.borrow().chunks;
    assert_eq!(chunks.len(), 2);
    assert_eq!(&chunks[0].data[..], b"tag one");
    assert!(chunks[0].data_alignment_indicator);
}

#[test]
fn test_id3_packet_with_unknown_duration_uses_sentinel() {
    let mut fx = fixture();
    fx.view.borrow_mut().duration = f64::NAN;
    fx.meta_decoder.borrow_mut().queue.push_back(vec![text_tag("live")]);

    fx.bridge.handle_event(EngineEvent::Id3Updated {
        data: BASE64_STANDARD.encode(b"tag"),
    });

    let tracks = fx.bridge.text_tracks();
    let track = tracks.iter().find(|t| t.kind() == TrackKind::Metadata).unwrap();
    assert_eq!(track.cues()[0].end_time, UNBOUNDED_CUE_END);
}

#[test]
fn test_malformed_id3_packet_is_absorbed() {
    let mut fx = fixture();
    fx.bridge.handle_event(EngineEvent::Id3Updated {
        data: "!!! not base64 !!!".to_string(),
    });

    assert!(fx.meta_decoder.borrow().chunks.is_empty());
    assert!(fx.bridge.text_tracks().is_empty());
}

#[test]
fn test_legacy_frame_aliases() {
    let mut fx = fixture();
    fx.meta_decoder.borrow_mut().queue.push_back(vec![MetadataTag {
        frames: vec![MetadataFrame {
            key: "PRIV".to_string(),
            value: None,
            url: None,
            data: Some(Bytes::from_static(b"opaque")),
        }],
    }]);

    fx.bridge.handle_event(EngineEvent::Id3Updated {
        data: BASE64_STANDARD.encode(b"tag"),
    });

    let tracks = fx.bridge.text_tracks();
    let track = tracks.iter().find(|t| t.kind() == TrackKind::Metadata).unwrap();
    let view = LegacyFrameView::new(&track.cues()[0]).expect("metadata payload");
    assert_eq!(view.id(), "PRIV");
    assert_eq!(view.private_data().map(|b| &b[..]), Some(&b"opaque"[..]));
}

// =============================================================================
// Captions
// =============================================================================

#[test]
fn test_caption_packet_routes_to_stream_track() {
    let mut fx = fixture();
    fx.caption_decoder
        .borrow_mut()
        .on_push
        .push_back(vec![caption("CC1", 450_000, 540_000, "hello")]);

    fx.bridge.handle_event(EngineEvent::CaptionData {
        entries: vec![packet_entry(5.0)],
    });

    let pushed = &fx.caption_decoder.borrow().pushed;
    assert_eq!(pushed.len(), 1);
    assert_eq!(pushed[0].pts, 450_000);

    let tracks = fx.bridge.text_tracks();
    let track = tracks.iter().find(|t| t.label() == "CC1").unwrap();
    assert_eq!(track.cues().len(), 1);
    assert_eq!(track.cues()[0].start_time, 5.0);
    assert_eq!(track.cues()[0].end_time, 6.0);
}

// =============================================================================
// Seek semantics
// =============================================================================

#[test]
fn test_seek_inside_buffer_purges_metadata_but_keeps_captions() {
    let mut fx = fixture();

    // One metadata cue and one caption cue, both inside [0, 10]
    fx.meta_decoder.borrow_mut().queue.push_back(vec![text_tag("meta")]);
    fx.view.borrow_mut().buffered = vec![TimeRange::new(0.0, 10.0)];
    fx.view.borrow_mut().time = 1.0;
    fx.bridge.handle_event(EngineEvent::Id3Updated {
        data: BASE64_STANDARD.encode(b"tag"),
    });
    fx.caption_decoder
        .borrow_mut()
        .on_push
        .push_back(vec![caption("CC1", 90_000, 180_000, "kept")]);
    fx.bridge.handle_event(EngineEvent::CaptionData {
        entries: vec![packet_entry(1.0)],
    });

    // Seek to a buffered position: metadata always purges, captions stay
    fx.view.borrow_mut().time = 8.0;
    fx.bridge.handle_event(EngineEvent::Seeking);

    let tracks = fx.bridge.text_tracks();
    let metadata = tracks.iter().find(|t| t.kind() == TrackKind::Metadata).unwrap();
    assert!(metadata.cues().is_empty());
    let cc1 = tracks.iter().find(|t| t.label() == "CC1").unwrap();
    assert_eq!(cc1.cues().len(), 1);
    assert_eq!(fx.caption_decoder.borrow().resets, 0);
}

#[test]
fn test_seek_outside_buffer_purges_everything_and_resets_decoder() {
    let mut fx = fixture();

    fx.view.borrow_mut().buffered = vec![TimeRange::new(0.0, 10.0)];
    fx.view.borrow_mut().time = 1.0;
    fx.caption_decoder
        .borrow_mut()
        .on_push
        .push_back(vec![caption("CC1", 90_000, 180_000, "stale")]);
    fx.bridge.handle_event(EngineEvent::CaptionData {
        entries: vec![packet_entry(1.0)],
    });

    fx.view.borrow_mut().time = 42.0;
    fx.bridge.handle_event(EngineEvent::Seeking);

    let tracks = fx.bridge.text_tracks();
    let cc1 = tracks.iter().find(|t| t.label() == "CC1").unwrap();
    assert!(cc1.cues().is_empty());
    assert_eq!(fx.caption_decoder.borrow().resets, 1);
}

// =============================================================================
// Representations
// =============================================================================

#[test]
fn test_representation_reduction_written_to_engine() {
    let mut fx = fixture();
    assert_eq!(fx.bridge.representations().len(), 3);

    // Disable one of three: capped auto at the highest enabled
    fx.bridge.set_representation_enabled("2", false);
    assert_eq!(fx.engine.borrow().auto_level_capping, 1);
    assert_eq!(fx.engine.borrow().level, -1);

    // Down to one: manual pin
    fx.bridge.set_representation_enabled("1", false);
    assert_eq!(fx.engine.borrow().level, 0);
    assert_eq!(fx.engine.borrow().auto_level_capping, -1);

    // None enabled: back to full auto
    fx.bridge.set_representation_enabled("0", false);
    assert_eq!(fx.engine.borrow().level, -1);
    assert_eq!(fx.engine.borrow().auto_level_capping, -1);
}

#[test]
fn test_representation_noop_toggle_writes_nothing() {
    let mut fx = fixture();
    fx.bridge.representations();

    fx.bridge.set_representation_enabled("1", true);
    assert!(fx.engine.borrow().level_writes.is_empty());
    assert!(fx.engine.borrow().cap_writes.is_empty());
}

// =============================================================================
// Audio tracks
// =============================================================================

#[test]
fn test_select_audio_track_writes_engine_index() {
    let mut fx = fixture();
    {
        let mut engine = fx.engine.borrow_mut();
        engine.audio_tracks = vec![
            EngineAudioTrack { id: 0, title: "eng".to_string() },
            EngineAudioTrack { id: 1, title: "spa".to_string() },
        ];
        engine.alt_audio_tracks = vec![
            AltAudioTrack { name: "eng".to_string(), lang: None, default_track: true },
            AltAudioTrack { name: "spa".to_string(), lang: None, default_track: false },
        ];
    }
    fx.bridge.handle_event(EngineEvent::LoadedMetadata);

    fx.bridge.select_audio_track("spa");
    assert_eq!(fx.engine.borrow().audio_writes, vec![1]);

    // An id matching no engine title writes nothing
    fx.bridge.select_audio_track("fra");
    assert_eq!(fx.engine.borrow().audio_writes, vec![1]);
}

// =============================================================================
// Media accessors
// =============================================================================

#[test]
fn test_media_describes_current_level() {
    let fx = fixture();
    fx.engine.borrow_mut().level = 1;

    let media = fx.bridge.media().expect("media available");
    assert_eq!(media.resolved_uri.as_str(), "https://example.com/level1.m3u8");
    assert_eq!(media.attributes.bandwidth, 2_400_000);
    assert_eq!(media.attributes.resolution.height, 720);
}

#[test]
fn test_media_errors_without_levels() {
    let fx = fixture_with_levels(Vec::new());
    assert!(fx.bridge.media().is_err());
}

#[test]
fn test_seekable_range() {
    let fx = fixture();
    assert!(fx.bridge.seekable().is_none());

    {
        let mut engine = fx.engine.borrow_mut();
        engine.seekable_start = 2.0;
        engine.seekable_end = 30.0;
    }
    assert_eq!(fx.bridge.seekable(), Some(TimeRange::new(2.0, 30.0)));
}

#[test]
fn test_set_source() {
    let mut fx = fixture();
    fx.bridge.set_source("");
    assert!(fx.engine.borrow().src.is_none());

    fx.bridge.set_source("https://example.com/master.m3u8");
    assert_eq!(
        fx.engine.borrow().src.as_deref(),
        Some("https://example.com/master.m3u8")
    );
}

#[test]
fn test_stats_and_bandwidth() {
    let fx = fixture();
    fx.engine.borrow_mut().stats = EngineStats { bandwidth: 3_500_000 };
    assert_eq!(fx.bridge.stats().bandwidth, 3_500_000);
    assert_eq!(fx.bridge.bandwidth(), 3_500_000);
}

// =============================================================================
// Disposal and legacy access
// =============================================================================

#[test]
fn test_dispose_before_metadata_is_safe_and_idempotent() {
    let mut fx = fixture();
    fx.bridge.dispose();
    fx.bridge.dispose();
    assert!(fx.bridge.is_disposed());
    assert!(fx.bridge.quality_levels().is_none());
}

#[test]
fn test_events_after_dispose_are_ignored() {
    let mut fx = fixture();
    fx.bridge.handle_event(EngineEvent::LoadedMetadata);
    fx.bridge.dispose();
    fx.events.borrow_mut().clear();
    fx.playlist_events.borrow_mut().clear();

    fx.bridge.handle_event(EngineEvent::LevelSwitch { level: 2 });
    fx.bridge.handle_event(EngineEvent::LevelLoaded);

    assert!(fx.events.borrow().is_empty());
    assert!(fx.playlist_events.borrow().is_empty());
}

#[test]
fn test_unsubscribe_stops_delivery() {
    let mut fx = fixture();
    let count = Rc::new(RefCell::new(0));
    let sink = Rc::clone(&count);
    let id = fx.bridge.subscribe(move |_| *sink.borrow_mut() += 1);

    fx.bridge.handle_event(EngineEvent::FragmentLoaded);
    assert_eq!(*count.borrow(), 1);

    assert!(fx.bridge.unsubscribe(id));
    fx.bridge.handle_event(EngineEvent::FragmentLoaded);
    assert_eq!(*count.borrow(), 1);
}

#[test]
fn test_legacy_handle_emits_usage() {
    let mut fx = fixture();
    fx.bridge.legacy_handle();

    assert_eq!(
        *fx.events.borrow(),
        vec![BridgeEvent::Usage { name: "hlsbridge-direct-access".to_string() }]
    );
}
