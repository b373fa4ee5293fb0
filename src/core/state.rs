//! Per-player run state.
//!
//! A `PlayerState` is everything the engine tracks for one active run:
//! - Piles (deck, hand, discard)
//! - Resource counters
//! - Tags of the last resolved card, for Cohesion chaining
//! - The player's own shuffle stream
//!
//! Piles use `im` persistent vectors, so cloning a state for a read-only
//! view is O(1).

use super::resources::{Resource, Resources};
use super::rng::GameRng;
use crate::cards::{CardId, Tags};
use crate::zones::{Zone, ZoneManager};

/// Mutable state of one player's run.
#[derive(Clone, Debug)]
pub struct PlayerState {
    /// Deck, hand and discard.
    pub zones: ZoneManager,

    pub resources: Resources,

    /// Tags of the most recently resolved card. `None` at run start and
    /// after a turn reset.
    pub last_played_tags: Option<Tags>,

    /// Shuffle stream for this run.
    pub rng: GameRng,
}

impl PlayerState {
    /// Create a state with empty piles, zeroed resources and no chain.
    #[must_use]
    pub fn new(rng: GameRng) -> Self {
        Self {
            zones: ZoneManager::new(),
            resources: Resources::new(),
            last_played_tags: None,
            rng,
        }
    }

    /// Replace the piles (builder pattern).
    #[must_use]
    pub fn with_zones(mut self, zones: ZoneManager) -> Self {
        self.zones = zones;
        self
    }

    /// Replace the resource counters (builder pattern).
    #[must_use]
    pub fn with_resources(mut self, resources: Resources) -> Self {
        self.resources = resources;
        self
    }

    /// Set the Cohesion chain (builder pattern).
    #[must_use]
    pub fn with_last_played_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.last_played_tags = Some(tags.into_iter().map(Into::into).collect());
        self
    }

    #[must_use]
    pub fn resource(&self, resource: Resource) -> i64 {
        self.resources.get(resource)
    }

    #[must_use]
    pub fn hand_size(&self) -> usize {
        self.zones.zone_size(Zone::Hand)
    }

    /// Cards in the hand, in instance-index order.
    pub fn hand(&self) -> impl Iterator<Item = CardId> + '_ {
        self.zones.hand().iter().copied()
    }

    /// Cards across deck, hand and discard.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.zones.total_cards()
    }

    /// Tags of the last resolved card as a slice.
    #[must_use]
    pub fn last_played_tags(&self) -> Option<&[String]> {
        self.last_played_tags.as_deref()
    }
}
