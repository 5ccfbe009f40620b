//! External byte-decoder boundary
//!
//! The byte-level timed-metadata and caption decoders are collaborators,
//! not part of this crate. They are injected behind these traits and
//! consume the record types below. Delivery is drain-style: a push or
//! flush returns whatever the decoder completed, in presentation order.

use bytes::Bytes;

use crate::types::MetadataFrame;

/// Chunk kinds accepted by the metadata decoder
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChunkKind {
    TimedMetadata,
}

/// One raw timed-metadata packet, as handed to the metadata decoder
#[derive(Debug, Clone)]
pub struct MetadataChunk {
    pub kind: ChunkKind,
    /// Set when the packet starts on a frame boundary
    pub data_alignment_indicator: bool,
    /// Raw packet bytes
    pub data: Bytes,
}

impl MetadataChunk {
    /// Wrap raw bytes as an aligned timed-metadata chunk
    pub fn timed_metadata(data: Bytes) -> Self {
        Self {
            kind: ChunkKind::TimedMetadata,
            data_alignment_indicator: true,
            data,
        }
    }
}

/// One decoded metadata tag: zero or more frames sharing a timestamp
#[derive(Debug, Clone, Default)]
pub struct MetadataTag {
    pub frames: Vec<MetadataFrame>,
}

/// NAL unit types understood by the caption decoder
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NalUnitType {
    /// Supplemental enhancement information payload
    SeiRbsp,
}

/// Decoder-input record for one caption payload.
///
/// Timestamps are in the engine's native 90 kHz ticks.
#[derive(Debug, Clone)]
pub struct CaptionSample {
    /// Presentation timestamp, in ticks
    pub pts: u64,
    /// Decode timestamp, in ticks
    pub dts: u64,
    /// Escaped payload bytes
    pub payload: Bytes,
    pub unit_type: NalUnitType,
}

/// One caption completed by the decoder
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedCaption {
    /// Caption stream identifier (e.g. "CC1")
    pub stream: String,
    /// Display start, in ticks
    pub start_pts: u64,
    /// Display end, in ticks
    pub end_pts: u64,
    /// Caption text
    pub text: String,
}

/// Decodes timed-metadata chunks into structured tags.
///
/// A chunk that yields no tags (or a tag with no frames) is valid and
/// means "nothing displayable here".
pub trait MetadataDecoder {
    fn decode(&mut self, chunk: MetadataChunk) -> Vec<MetadataTag>;
}

/// Stateful caption decoder pipeline.
///
/// Samples may complete zero or more captions each; captions spanning
/// sample boundaries are held internally until completed, flushed, or
/// discarded by a reset.
pub trait CaptionDecoder {
    /// Feed one sample; returns any captions it completed
    fn push(&mut self, sample: CaptionSample) -> Vec<DecodedCaption>;

    /// Force out buffered-but-undelivered captions (stream boundary)
    fn flush(&mut self) -> Vec<DecodedCaption>;

    /// Discard all internal state, including partial captions
    fn reset(&mut self);
}
