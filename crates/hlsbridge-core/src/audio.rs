//! Alternate-audio track mirroring
//!
//! Each alternate-audio descriptor the engine reports becomes one
//! selectable track in the presentation layer. Selection flows the other
//! way by matching the enabled mirror track's id against engine track
//! titles and writing the matching index back.

use tracing::{debug, instrument};

use crate::engine::EngineAdapter;
use crate::types::AudioTrackMirror;

/// Build the presentation-side audio track list from engine state.
///
/// The track at the engine's current `audioTrack` index starts enabled.
/// Entries pointing at a missing descriptor are skipped.
pub fn setup_audio_tracks(engine: &dyn EngineAdapter) -> Vec<AudioTrackMirror> {
    let alt_tracks = engine.alt_audio_tracks();
    let enabled_index = engine.audio_track();

    engine
        .audio_tracks()
        .iter()
        .enumerate()
        .filter_map(|(index, track)| {
            let alt = alt_tracks.get(track.id)?;
            Some(AudioTrackMirror {
                id: alt.name.clone(),
                label: alt.name.clone(),
                language: alt.lang.clone(),
                is_default: alt.default_track,
                enabled: index == enabled_index,
            })
        })
        .collect()
}

/// Push the enabled mirror track back into the engine.
///
/// No enabled track, or no engine entry whose title matches the enabled
/// track's id, means no write.
#[instrument(skip_all)]
pub fn update_audio_track(engine: &mut dyn EngineAdapter, mirrors: &[AudioTrackMirror]) {
    let Some(enabled) = mirrors.iter().find(|track| track.enabled) else {
        return;
    };

    for (index, track) in engine.audio_tracks().iter().enumerate() {
        if track.title == enabled.id {
            debug!(index, id = %enabled.id, "Switching engine audio track");
            engine.set_audio_track(index);
            return;
        }
    }
}
