//! Effect system for card abilities.
//!
//! - `Effect`: Tagged-variant description of a state change
//! - `EffectResolver`: Executes effects on a player's run state
//!
//! ## Design Philosophy
//!
//! Effects are data, not closures. Card definitions stay serializable,
//! comparable and immutable; all behavior lives in the resolver.

mod effect;
mod resolver;

pub use effect::Effect;
pub use resolver::EffectResolver;
