//! Error types.
//!
//! Every error is local to the operation that produced it and is returned
//! to the caller; nothing in the engine panics on bad input.

use thiserror::Error;

use super::player::PlayerId;
use crate::cards::CardId;

/// Errors reported by run engine operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("{0} has no active run")]
    UnknownPlayer(PlayerId),

    #[error("hand index {index} is out of range (hand holds {hand_size} cards)")]
    InvalidIndex { index: usize, hand_size: usize },

    #[error("{0} is not in the card registry")]
    UnknownCard(CardId),

    #[error("cannot afford {card}: costs {cost} inspiration, {available} available")]
    InsufficientResources { card: CardId, cost: u32, available: i64 },

    #[error("player state lock poisoned")]
    Poisoned,
}

/// Errors raised while building a card registry.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("{0} registered twice")]
    DuplicateCard(CardId),

    #[error("{card} references unregistered {missing}")]
    DanglingReference { card: CardId, missing: CardId },
}

/// Errors raised while loading or validating an engine configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("starting deck references unregistered {0}")]
    UnknownStarterCard(CardId),

    #[error("starting deck is empty")]
    EmptyStartingDeck,

    #[error("invalid configuration: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("card registry: {0}")]
    Registry(#[from] RegistryError),
}
