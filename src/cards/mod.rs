//! Card system: definitions, registry, catalog and hand snapshots.
//!
//! ## Key Types
//!
//! - `CardId`: Identifier for card definitions
//! - `CardType`: Skill, Flaw or Idea
//! - `CardDefinition`: Static card data, play effect and optional Cohesion rule
//! - `CardRegistry`: Immutable definition lookup, built by `RegistryBuilder`
//! - `HandCard`: Owned display copy of a card in hand

pub mod catalog;
pub mod definition;
pub mod registry;
pub mod snapshot;

pub use definition::{CardDefinition, CardId, CardType, Cohesion, Tags};
pub use registry::{CardRegistry, RegistryBuilder};
pub use snapshot::HandCard;
