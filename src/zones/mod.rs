//! Zone system for card locations.
//!
//! Every run has exactly three ordered piles: deck, hand and discard.
//!
//! ## Key Types
//!
//! - `Zone`: Pile selector
//! - `ZoneManager`: Pile contents and card movement
//! - `DrawReport`: What a multi-card draw actually did

pub mod manager;

pub use manager::{DrawReport, Zone, ZoneManager};
