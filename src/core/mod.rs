//! Core engine types: players, resources, state, RNG, configuration, errors.
//!
//! These are the building blocks every other module uses. Card data lives
//! in `cards`; the operations that mutate state live in `rules`.

pub mod player;
pub mod resources;
pub mod rng;
pub mod config;
pub mod error;
pub mod state;

pub use player::PlayerId;
pub use resources::{Resource, Resources};
pub use rng::{GameRng, GameRngState};
pub use config::{EngineConfig, StarterEntry};
pub use error::{ConfigError, EngineError, RegistryError};
pub use state::PlayerState;
