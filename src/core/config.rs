//! Engine configuration.
//!
//! Hosts configure the engine at startup by providing an `EngineConfig`:
//! - RNG seed for reproducible shuffles
//! - Starting Grit
//! - Starting deck composition
//! - How many run events the engine buffers
//!
//! The default matches the standard catalog: seven Sparks and three
//! Rough Drafts, one Grit.

use serde::{Deserialize, Serialize};

use super::error::ConfigError;
use crate::cards::catalog;
use crate::cards::{CardId, CardRegistry};
use crate::events::DEFAULT_EVENT_CAPACITY;

/// Copies of one card in the starting deck.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StarterEntry {
    pub card: CardId,
    pub copies: usize,
}

impl StarterEntry {
    #[must_use]
    pub const fn new(card: CardId, copies: usize) -> Self {
        Self { card, copies }
    }
}

/// Complete engine configuration.
///
/// ## Example
///
/// ```
/// use cohesion_engine::core::EngineConfig;
///
/// let config = EngineConfig::from_json(r#"{
///     "seed": 7,
///     "starting_grit": 2,
///     "starting_deck": [{ "card": 1, "copies": 10 }]
/// }"#).unwrap();
///
/// assert_eq!(config.seed, 7);
/// assert_eq!(config.starting_deck_size(), 10);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Seed for the engine RNG; every run forks its own stream from it.
    pub seed: u64,

    /// Grit granted on run initialization. All other counters start at 0.
    pub starting_grit: i64,

    /// Starting deck composition, in deck-building order.
    pub starting_deck: Vec<StarterEntry>,

    /// Most recent events kept for `take_events`; older ones are evicted.
    /// Zero turns buffering off, leaving `tracing` as the only event sink.
    pub event_capacity: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            starting_grit: 1,
            starting_deck: vec![
                StarterEntry::new(catalog::SPARK, 7),
                StarterEntry::new(catalog::ROUGH_DRAFT, 3),
            ],
            event_capacity: DEFAULT_EVENT_CAPACITY,
        }
    }
}

impl EngineConfig {
    /// Create the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a configuration from JSON. Missing fields take defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    #[must_use]
    pub fn with_starting_grit(mut self, grit: i64) -> Self {
        self.starting_grit = grit;
        self
    }

    #[must_use]
    pub fn with_event_capacity(mut self, capacity: usize) -> Self {
        self.event_capacity = capacity;
        self
    }

    /// Replace the starting deck with `copies` of a single card.
    #[must_use]
    pub fn with_only_starter(mut self, card: CardId, copies: usize) -> Self {
        self.starting_deck = vec![StarterEntry::new(card, copies)];
        self
    }

    /// Add copies of a card to the starting deck.
    #[must_use]
    pub fn with_starter(mut self, card: CardId, copies: usize) -> Self {
        self.starting_deck.push(StarterEntry::new(card, copies));
        self
    }

    /// Total cards in the starting deck.
    #[must_use]
    pub fn starting_deck_size(&self) -> usize {
        self.starting_deck.iter().map(|e| e.copies).sum()
    }

    /// Starting deck as a flat, unshuffled card list.
    pub fn starting_cards(&self) -> impl Iterator<Item = CardId> + '_ {
        self.starting_deck
            .iter()
            .flat_map(|e| std::iter::repeat(e.card).take(e.copies))
    }

    /// Check the configuration against a registry.
    pub fn validate(&self, registry: &CardRegistry) -> Result<(), ConfigError> {
        if self.starting_deck_size() == 0 {
            return Err(ConfigError::EmptyStartingDeck);
        }
        if let Some(entry) = self.starting_deck.iter().find(|e| !registry.contains(e.card)) {
            return Err(ConfigError::UnknownStarterCard(entry.card));
        }
        Ok(())
    }
}
