//! Player run engine.
//!
//! - `RunRules`: The operations themselves, applied to one `PlayerState`
//! - `RunEngine`: Single-owner engine holding every active run
//! - `SharedRunEngine`: `Send + Sync` engine with a lock per player
//!
//! Every operation except initialization reports `UnknownPlayer` when the
//! player has no active run.

pub mod engine;
pub mod run;
pub mod shared;

pub use engine::RunEngine;
pub use run::{AcquireOutcome, DrawOutcome, PlayOutcome, RunRules};
pub use shared::SharedRunEngine;
