//! Outbound notification channels
//!
//! One typed channel per consumer surface, dispatched synchronously from
//! inside the engine event handler. Each subscription is owned by its
//! registrant and can be detached individually; [`Channel::clear`] is the
//! disposal path.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Notifications emitted on the main bridge channel
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum BridgeEvent {
    /// The active media changed (level switch)
    MediaChange,
    /// A fresh bandwidth sample is available from the engine
    BandwidthUpdate,
    /// The quality-level list's selected index changed
    QualityChange { selected_index: i32 },
    /// A legacy access path was exercised
    Usage { name: String },
}

/// Notifications emitted on the playlists sub-channel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlaylistEvent {
    /// The active media playlist changed
    MediaChange,
    /// A media playlist finished loading or refreshing
    LoadedPlaylist,
}

/// Handle identifying one subscription on a [`Channel`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(Uuid);

/// Synchronous fan-out channel.
///
/// `emit` runs every subscriber inline, in registration order, before
/// returning. With no subscribers an emit is a no-op.
pub struct Channel<T> {
    subscribers: Vec<(SubscriptionId, Box<dyn FnMut(&T)>)>,
}

impl<T> Channel<T> {
    pub fn new() -> Self {
        Self { subscribers: Vec::new() }
    }

    /// Register a listener; the returned id detaches it
    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(&T) + 'static,
    {
        let id = SubscriptionId(Uuid::new_v4());
        self.subscribers.push((id, Box::new(listener)));
        id
    }

    /// Remove one subscription; returns false if it was already gone
    pub fn detach(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sub_id, _)| *sub_id != id);
        self.subscribers.len() != before
    }

    /// Deliver an event to every subscriber, synchronously
    pub fn emit(&mut self, event: &T) {
        for (_, listener) in self.subscribers.iter_mut() {
            listener(event);
        }
    }

    /// Drop every subscription
    pub fn clear(&mut self) {
        self.subscribers.clear();
    }

    /// Number of live subscriptions
    pub fn len(&self) -> usize {
        self.subscribers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.subscribers.is_empty()
    }
}

impl<T> Default for Channel<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> std::fmt::Debug for Channel<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Channel")
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}
