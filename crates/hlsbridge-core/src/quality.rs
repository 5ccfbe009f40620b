//! Quality-level list mirror
//!
//! Presentation-side view of the engine's variant ladder. The engine
//! stays the source of truth for the active level; this list only mirrors
//! it, keyed by the same stable ids as the representation set.

use serde::{Deserialize, Serialize};

use crate::types::Representation;

/// One selectable quality level
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QualityLevel {
    /// Stable original level index, as a decimal string
    pub id: String,
    pub width: u32,
    pub height: u32,
    /// Peak bandwidth in bits per second
    pub bandwidth: u64,
}

impl From<&Representation> for QualityLevel {
    fn from(rep: &Representation) -> Self {
        Self {
            id: rep.id.clone(),
            width: rep.width,
            height: rep.height,
            bandwidth: rep.bandwidth,
        }
    }
}

/// Ordered list of quality levels with a mirrored selected index
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QualityLevelList {
    levels: Vec<QualityLevel>,
    selected_index: i32,
}

impl QualityLevelList {
    pub fn new() -> Self {
        Self { levels: Vec::new(), selected_index: -1 }
    }

    pub fn add_quality_level(&mut self, level: QualityLevel) {
        self.levels.push(level);
    }

    pub fn levels(&self) -> &[QualityLevel] {
        &self.levels
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// Index of the currently selected level, -1 when none matches
    pub fn selected_index(&self) -> i32 {
        self.selected_index
    }

    /// Mirror a new active level by id; returns the resulting index.
    ///
    /// An id absent from the list (e.g. an audio-only level) resolves to
    /// -1, which is a valid mirror state, not an error.
    pub fn set_selected(&mut self, id: &str) -> i32 {
        self.selected_index = self
            .levels
            .iter()
            .position(|level| level.id == id)
            .map(|index| index as i32)
            .unwrap_or(-1);
        self.selected_index
    }
}
