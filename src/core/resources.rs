//! Per-player resource counters.
//!
//! Four named counters: Inspiration, Ink, Grit and Hype. Counters are
//! plain `i64` and are not clamped at zero; effects that spend more than a
//! player holds drive the counter negative.

use serde::{Deserialize, Serialize};

/// A named resource counter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Resource {
    /// Spent to acquire cards. Reset each turn.
    Inspiration,
    /// Reset each turn.
    Ink,
    /// Persists across turns.
    Grit,
    /// Persists across turns.
    Hype,
}

impl Resource {
    /// All resources in display order.
    pub const ALL: [Resource; 4] = [
        Resource::Inspiration,
        Resource::Ink,
        Resource::Grit,
        Resource::Hype,
    ];
}

impl std::fmt::Display for Resource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Resource::Inspiration => "Inspiration",
            Resource::Ink => "Ink",
            Resource::Grit => "Grit",
            Resource::Hype => "Hype",
        };
        f.write_str(name)
    }
}

/// Resource counters for one player.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Resources {
    pub inspiration: i64,
    pub ink: i64,
    pub grit: i64,
    pub hype: i64,
}

impl Resources {
    /// All counters at zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a counter.
    #[must_use]
    pub fn get(&self, resource: Resource) -> i64 {
        match resource {
            Resource::Inspiration => self.inspiration,
            Resource::Ink => self.ink,
            Resource::Grit => self.grit,
            Resource::Hype => self.hype,
        }
    }

    /// Set a counter.
    pub fn set(&mut self, resource: Resource, value: i64) {
        *self.slot(resource) = value;
    }

    /// Add `delta` to a counter (negative to spend).
    pub fn add(&mut self, resource: Resource, delta: i64) {
        let slot = self.slot(resource);
        *slot = slot.saturating_add(delta);
    }

    /// Builder: set a counter.
    #[must_use]
    pub fn with(mut self, resource: Resource, value: i64) -> Self {
        self.set(resource, value);
        self
    }

    fn slot(&mut self, resource: Resource) -> &mut i64 {
        match resource {
            Resource::Inspiration => &mut self.inspiration,
            Resource::Ink => &mut self.ink,
            Resource::Grit => &mut self.grit,
            Resource::Hype => &mut self.hype,
        }
    }
}
