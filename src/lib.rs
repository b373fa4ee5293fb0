//! # cohesion-engine
//!
//! Card, deck and resource state machine for a single-player deck-building
//! run, with the Cohesion tag-chaining rule.
//!
//! ## Design Principles
//!
//! 1. **Immutable Catalog**: Card definitions are built once into a
//!    `CardRegistry` and shared read-only behind an `Arc`.
//!
//! 2. **Owned Player State**: Every run's deck, hand, discard, resources and
//!    Cohesion chain live in one `PlayerState` owned by an engine. No
//!    ambient globals.
//!
//! 3. **Effects as Data**: Card abilities are `Effect` values resolved by
//!    `EffectResolver`, so definitions stay serializable.
//!
//! 4. **Reported, Not Printed**: Operations return `Result`s and record
//!    `RunEvent`s (mirrored to `tracing`); nothing writes to stdout.
//!
//! ## Modules
//!
//! - `core`: Player ids, resources, state, RNG, configuration, errors
//! - `zones`: Deck, hand and discard piles
//! - `cards`: Card definitions, registry, catalog, hand snapshots
//! - `effects`: Effect values and their resolver
//! - `events`: Structured run events
//! - `rules`: Run operations and the engines that own player state

pub mod core;
pub mod zones;
pub mod cards;
pub mod effects;
pub mod events;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    PlayerId, Resource, Resources,
    GameRng, GameRngState,
    EngineConfig, StarterEntry,
    EngineError, RegistryError, ConfigError,
    PlayerState,
};

pub use crate::zones::{Zone, ZoneManager, DrawReport};

pub use crate::cards::{
    CardId, CardType, CardDefinition, Cohesion, Tags,
    CardRegistry, RegistryBuilder, HandCard,
};

pub use crate::effects::{Effect, EffectResolver};

pub use crate::events::{EventLog, RunEvent, Severity, DEFAULT_EVENT_CAPACITY};

pub use crate::rules::{
    RunRules, RunEngine, SharedRunEngine,
    DrawOutcome, PlayOutcome, AcquireOutcome,
};
