//! Run event types.
//!
//! Events describe what an operation did, or why it refused. They are the
//! engine's only outbound side channel: every event recorded into an
//! `EventLog` is also emitted through `tracing`, so hosts can either drain
//! the log or route the tracing output to any sink.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::cards::CardId;
use crate::core::PlayerId;

/// How loud an event is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Severity {
    Info,
    Warning,
}

/// Something that happened to a player's run.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RunEvent {
    // === Info ===
    Initialized { player: PlayerId, deck_size: usize },
    Shuffled { player: PlayerId, deck_size: usize },
    Drew { player: PlayerId, requested: usize, drawn: usize },
    Played { player: PlayerId, card: CardId, cohesion_triggered: bool },
    CardCreated { player: PlayerId, card: CardId },
    Acquired { player: PlayerId, card: CardId, cost: u32 },
    TurnReset { player: PlayerId },
    RunEnded { player: PlayerId },

    // === Warning ===
    /// Deck and discard were both empty; `forfeited` draws were dropped.
    NothingToDraw { player: PlayerId, forfeited: usize },
    InvalidIndex { player: PlayerId, index: usize, hand_size: usize },
    UnknownCard { player: PlayerId, card: CardId },
    InsufficientResources { player: PlayerId, card: CardId, cost: u32, available: i64 },
    UnknownPlayer { player: PlayerId },
}

impl RunEvent {
    /// The player the event concerns.
    #[must_use]
    pub fn player(&self) -> PlayerId {
        match self {
            RunEvent::Initialized { player, .. }
            | RunEvent::Shuffled { player, .. }
            | RunEvent::Drew { player, .. }
            | RunEvent::Played { player, .. }
            | RunEvent::CardCreated { player, .. }
            | RunEvent::Acquired { player, .. }
            | RunEvent::TurnReset { player }
            | RunEvent::RunEnded { player }
            | RunEvent::NothingToDraw { player, .. }
            | RunEvent::InvalidIndex { player, .. }
            | RunEvent::UnknownCard { player, .. }
            | RunEvent::InsufficientResources { player, .. }
            | RunEvent::UnknownPlayer { player } => *player,
        }
    }

    #[must_use]
    pub fn severity(&self) -> Severity {
        match self {
            RunEvent::NothingToDraw { .. }
            | RunEvent::InvalidIndex { .. }
            | RunEvent::UnknownCard { .. }
            | RunEvent::InsufficientResources { .. }
            | RunEvent::UnknownPlayer { .. } => Severity::Warning,
            _ => Severity::Info,
        }
    }

    /// Short human-readable label.
    #[must_use]
    pub fn summary(&self) -> &'static str {
        match self {
            RunEvent::Initialized { .. } => "run initialized",
            RunEvent::Shuffled { .. } => "deck shuffled",
            RunEvent::Drew { .. } => "cards drawn",
            RunEvent::Played { .. } => "card played",
            RunEvent::CardCreated { .. } => "card created",
            RunEvent::Acquired { .. } => "card acquired",
            RunEvent::TurnReset { .. } => "turn resources reset",
            RunEvent::RunEnded { .. } => "run ended",
            RunEvent::NothingToDraw { .. } => "nothing left to draw",
            RunEvent::InvalidIndex { .. } => "hand index out of range",
            RunEvent::UnknownCard { .. } => "card not in registry",
            RunEvent::InsufficientResources { .. } => "cannot afford card",
            RunEvent::UnknownPlayer { .. } => "player has no active run",
        }
    }

    fn emit(&self) {
        let player = self.player();
        match self.severity() {
            Severity::Info => info!(player = %player, event = ?self, "{}", self.summary()),
            Severity::Warning => warn!(player = %player, event = ?self, "{}", self.summary()),
        }
    }
}

/// Events an engine keeps by default before evicting the oldest.
pub const DEFAULT_EVENT_CAPACITY: usize = 1024;

/// Ordered buffer of recorded events.
///
/// A bounded log keeps only the most recent `capacity` events; older ones
/// are evicted and counted in `dropped`. Eviction only affects the buffer:
/// every event has already gone out through `tracing` when it is recorded.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EventLog {
    events: VecDeque<RunEvent>,
    capacity: Option<usize>,
    dropped: usize,
}

impl EventLog {
    /// Unbounded log, for the events of a single call.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Log holding at most `capacity` events. Zero keeps nothing.
    #[must_use]
    pub fn bounded(capacity: usize) -> Self {
        Self {
            capacity: Some(capacity),
            ..Self::default()
        }
    }

    /// Record an event and emit it through `tracing`.
    pub fn record(&mut self, event: RunEvent) {
        event.emit();
        self.push(event);
    }

    /// Move every event out of `other` into this log, without re-emitting.
    pub fn absorb(&mut self, other: &mut EventLog) {
        for event in other.events.drain(..) {
            self.push(event);
        }
    }

    /// Remove and return all buffered events, oldest first.
    pub fn take(&mut self) -> Vec<RunEvent> {
        self.events.drain(..).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &RunEvent> {
        self.events.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Buffer limit, `None` when unbounded.
    #[must_use]
    pub fn capacity(&self) -> Option<usize> {
        self.capacity
    }

    /// Events evicted or never buffered because the log was full.
    #[must_use]
    pub fn dropped(&self) -> usize {
        self.dropped
    }

    fn push(&mut self, event: RunEvent) {
        if let Some(capacity) = self.capacity {
            if capacity == 0 {
                self.dropped += 1;
                return;
            }
            if self.events.len() >= capacity {
                self.events.pop_front();
                self.dropped += 1;
            }
        }
        self.events.push_back(event);
    }
}
