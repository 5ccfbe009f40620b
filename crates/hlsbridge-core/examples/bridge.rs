//! Bridge walkthrough example
//!
//! Drives the bridge with a scripted in-memory engine: metadata
//! readiness, a timed-metadata packet, a level switch, and a
//! representation toggle.
//!
//! Run with: cargo run -p hlsbridge-core --example bridge

use std::cell::RefCell;
use std::rc::Rc;

use base64::prelude::{Engine as _, BASE64_STANDARD};
use bytes::Bytes;

use hlsbridge_core::{
    AltAudioTrack, BridgeConfig, CaptionDecoder, CaptionSample, DecodedCaption, EngineAdapter,
    EngineAudioTrack, EngineEvent, EngineStats, HlsBridge, LevelInfo, MetadataChunk,
    MetadataDecoder, MetadataFrame, MetadataTag, PlayerView, TimeRange,
};

struct DemoEngine {
    levels: Vec<LevelInfo>,
    level: i32,
}

impl EngineAdapter for DemoEngine {
    fn levels(&self) -> Vec<LevelInfo> {
        self.levels.clone()
    }
    fn level(&self) -> i32 {
        self.level
    }
    fn set_level(&mut self, level: i32) {
        println!("  engine <- level = {level}");
        self.level = level;
    }
    fn set_auto_level_capping(&mut self, cap: i32) {
        println!("  engine <- autoLevelCapping = {cap}");
    }
    fn audio_tracks(&self) -> Vec<EngineAudioTrack> {
        vec![EngineAudioTrack { id: 0, title: "main".to_string() }]
    }
    fn alt_audio_tracks(&self) -> Vec<AltAudioTrack> {
        vec![AltAudioTrack { name: "main".to_string(), lang: Some("en".to_string()), default_track: true }]
    }
    fn audio_track(&self) -> usize {
        0
    }
    fn set_audio_track(&mut self, index: usize) {
        println!("  engine <- audioTrack = {index}");
    }
    fn stats(&self) -> EngineStats {
        EngineStats { bandwidth: 2_100_000 }
    }
    fn seekable_start(&self) -> f64 {
        0.0
    }
    fn seekable_end(&self) -> f64 {
        120.0
    }
    fn set_src(&mut self, src: &str) {
        println!("  engine <- src = {src}");
    }
}

struct DemoView;

impl PlayerView for DemoView {
    fn current_time(&self) -> f64 {
        4.0
    }
    fn duration(&self) -> f64 {
        120.0
    }
    fn buffered(&self) -> Vec<TimeRange> {
        vec![TimeRange::new(0.0, 30.0)]
    }
}

/// Treats every chunk payload as one UTF-8 text frame
struct TextFrameDecoder;

impl MetadataDecoder for TextFrameDecoder {
    fn decode(&mut self, chunk: MetadataChunk) -> Vec<MetadataTag> {
        let text = String::from_utf8_lossy(&chunk.data).into_owned();
        vec![MetadataTag {
            frames: vec![MetadataFrame {
                key: "TXXX".to_string(),
                value: Some(text),
                url: None,
                data: Some(Bytes::copy_from_slice(&chunk.data)),
            }],
        }]
    }
}

struct NoopCaptionDecoder;

impl CaptionDecoder for NoopCaptionDecoder {
    fn push(&mut self, _sample: CaptionSample) -> Vec<DecodedCaption> {
        Vec::new()
    }
    fn flush(&mut self) -> Vec<DecodedCaption> {
        Vec::new()
    }
    fn reset(&mut self) {}
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    hlsbridge_core::init();

    let engine = DemoEngine {
        levels: vec![
            LevelInfo {
                index: 0,
                width: 640,
                height: 360,
                bitrate: 800_000,
                audio_only: false,
                url: "https://example.com/360p.m3u8".to_string(),
            },
            LevelInfo {
                index: 1,
                width: 1280,
                height: 720,
                bitrate: 2_400_000,
                audio_only: false,
                url: "https://example.com/720p.m3u8".to_string(),
            },
            LevelInfo {
                index: 2,
                width: 1920,
                height: 1080,
                bitrate: 5_000_000,
                audio_only: false,
                url: "https://example.com/1080p.m3u8".to_string(),
            },
        ],
        level: 0,
    };

    let mut bridge = HlsBridge::new(
        engine,
        DemoView,
        Box::new(TextFrameDecoder),
        Box::new(NoopCaptionDecoder),
        BridgeConfig::default(),
    );

    let notifications = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&notifications);
    bridge.subscribe(move |event| sink.borrow_mut().push(format!("{event:?}")));

    println!("\n== metadata ready ==");
    bridge.handle_event(EngineEvent::LoadedMetadata);
    if let Some(levels) = bridge.quality_levels() {
        for level in levels.levels() {
            println!("  level {}: {}x{} @ {} bps", level.id, level.width, level.height, level.bandwidth);
        }
        println!("  selected index: {}", levels.selected_index());
    }

    println!("\n== timed-metadata packet ==");
    bridge.handle_event(EngineEvent::Id3Updated {
        data: BASE64_STANDARD.encode(b"chapter: intro"),
    });
    for track in bridge.text_tracks().iter() {
        for cue in track.cues() {
            println!("  [{:7.3} -> {:7.3}] {}", cue.start_time, cue.end_time, cue.text);
        }
    }

    println!("\n== engine switches to level 2 ==");
    bridge.handle_event(EngineEvent::LevelSwitch { level: 2 });

    match bridge.media() {
        Ok(media) => println!(
            "  now playing {} ({} bps)",
            media.resolved_uri, media.attributes.bandwidth
        ),
        Err(error) => println!("  no media: {error}"),
    }

    println!("\n== cap quality by disabling the top representation ==");
    bridge.set_representation_enabled("2", false);

    println!("\nnotifications seen:");
    for line in notifications.borrow().iter() {
        println!("  {line}");
    }

    bridge.dispose();
}
