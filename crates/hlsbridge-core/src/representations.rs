//! Representation enablement and selection-mode reduction
//!
//! The representation list is built once from the engine's level
//! descriptors and owned here. Toggling `enabled` flags reduces, from
//! scratch every time, to one of three selection modes written back to
//! the engine: full auto, a manual level pin, or auto capped at the
//! highest-bandwidth enabled variant.

use tracing::{debug, instrument};

use crate::engine::{EngineAdapter, LevelInfo};
use crate::types::{Representation, SelectionMode};

/// Owns the bitrate-variant descriptors and their enablement state
#[derive(Debug, Default)]
pub struct RepresentationSet {
    reps: Option<Vec<Representation>>,
}

impl RepresentationSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// The representation list, built from the engine on first call.
    ///
    /// Audio-only levels are excluded; `id` keeps each variant's position
    /// in the original unfiltered list. The engine reports levels
    /// pre-sorted ascending by bitrate, and that order is preserved.
    pub fn list(&mut self, engine: &dyn EngineAdapter) -> &[Representation] {
        if self.reps.is_none() {
            let reps: Vec<Representation> = engine
                .levels()
                .iter()
                .filter(|level| !level.audio_only)
                .map(representation_from_level)
                .collect();
            debug!(count = reps.len(), "Built representation list");
            self.reps = Some(reps);
        }
        self.reps.as_deref().unwrap_or(&[])
    }

    /// Whether the list has been built yet
    pub fn is_built(&self) -> bool {
        self.reps.is_some()
    }

    /// Toggle one representation and push the recomputed selection to the
    /// engine. Setting a representation to its current value performs no
    /// engine writes.
    #[instrument(skip(self, engine))]
    pub fn set_enabled(&mut self, engine: &mut dyn EngineAdapter, id: &str, enabled: bool) {
        self.list(engine);

        let Some(reps) = self.reps.as_mut() else {
            return;
        };
        let Some(rep) = reps.iter_mut().find(|rep| rep.id == id) else {
            debug!(id, "Ignoring enablement change for unknown representation");
            return;
        };
        if rep.enabled == enabled {
            return;
        }
        rep.enabled = enabled;

        apply_selection(engine, selection_mode(reps));
    }
}

fn representation_from_level(level: &LevelInfo) -> Representation {
    Representation {
        id: level.index.to_string(),
        width: level.width,
        height: level.height,
        bandwidth: level.bitrate,
        enabled: true,
    }
}

/// Derive the selection mode from the current enablement flags.
///
/// Pure over its input: no history, no engine. The representation list is
/// ascending by bandwidth, so the last enabled entry is the cap.
pub fn selection_mode(reps: &[Representation]) -> SelectionMode {
    let enabled: Vec<&Representation> = reps.iter().filter(|rep| rep.enabled).collect();

    if enabled.len() == reps.len() || enabled.is_empty() {
        return SelectionMode::Auto;
    }
    if let [only] = enabled.as_slice() {
        return SelectionMode::Manual { level: only.level_index() };
    }
    match enabled.last() {
        Some(highest) => SelectionMode::CappedAuto { cap: highest.level_index() },
        None => SelectionMode::Auto,
    }
}

/// Write the selection mode to the engine's property surface
fn apply_selection(engine: &mut dyn EngineAdapter, mode: SelectionMode) {
    debug!(?mode, "Applying selection mode");
    match mode {
        SelectionMode::Auto => {
            engine.set_auto_level_capping(-1);
            engine.set_level(-1);
        }
        SelectionMode::Manual { level } => {
            engine.set_level(level);
            engine.set_auto_level_capping(-1);
        }
        SelectionMode::CappedAuto { cap } => {
            engine.set_auto_level_capping(cap);
            engine.set_level(-1);
        }
    }
}
