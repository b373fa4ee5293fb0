//! Single-owner run engine.
//!
//! `RunEngine` owns the per-player state map. Every operation takes
//! `&mut self`, so the borrow checker serializes access; wrap it in a lock
//! or use `SharedRunEngine` when several threads need it.
//!
//! ## Example
//!
//! ```
//! use cohesion_engine::{CardRegistry, EngineConfig, PlayerId, RunEngine};
//! use std::sync::Arc;
//!
//! let mut engine = RunEngine::new(Arc::new(CardRegistry::standard().unwrap()), EngineConfig::default()).unwrap();
//! let player = PlayerId::new(1);
//!
//! engine.initialize_player(player);
//! engine.draw(player, 5).unwrap();
//! engine.play_card(player, 1).unwrap();
//!
//! assert_eq!(engine.hand_snapshot(player).unwrap().len(), 4);
//! ```

use std::sync::Arc;

use rustc_hash::FxHashMap;

use super::run::{AcquireOutcome, DrawOutcome, PlayOutcome, RunRules};
use crate::cards::{CardId, CardRegistry, HandCard};
use crate::core::{ConfigError, EngineConfig, EngineError, GameRng, PlayerId, PlayerState};
use crate::events::{EventLog, RunEvent};

/// Owns every active run and exposes the run operations.
#[derive(Clone, Debug)]
pub struct RunEngine {
    rules: RunRules,
    rng: GameRng,
    players: FxHashMap<PlayerId, PlayerState>,
    events: EventLog,
}

impl RunEngine {
    /// Create an engine with no active runs.
    pub fn new(registry: Arc<CardRegistry>, config: EngineConfig) -> Result<Self, ConfigError> {
        let rng = GameRng::new(config.seed);
        let events = EventLog::bounded(config.event_capacity);
        Ok(Self {
            rules: RunRules::new(registry, config)?,
            rng,
            players: FxHashMap::default(),
            events,
        })
    }

    /// Engine over the standard catalog with the default configuration.
    pub fn standard() -> Result<Self, ConfigError> {
        Self::new(Arc::new(CardRegistry::standard()?), EngineConfig::default())
    }

    // === Run lifecycle ===

    /// Start (or restart) a player's run. Any previous state is replaced.
    pub fn initialize_player(&mut self, player: PlayerId) {
        let rng = self.rng.fork();
        let state = self.rules.initialize(player, rng, &mut self.events);
        self.players.insert(player, state);
    }

    /// Install a prepared state for a player, replacing any existing one.
    pub fn restore_player(&mut self, player: PlayerId, state: PlayerState) {
        self.players.insert(player, state);
    }

    /// End a player's run, returning its final state.
    pub fn end_run(&mut self, player: PlayerId) -> Result<PlayerState, EngineError> {
        match self.players.remove(&player) {
            Some(state) => {
                self.events.record(RunEvent::RunEnded { player });
                Ok(state)
            }
            None => {
                self.events.record(RunEvent::UnknownPlayer { player });
                Err(EngineError::UnknownPlayer(player))
            }
        }
    }

    // === Operations ===

    pub fn shuffle(&mut self, player: PlayerId) -> Result<(), EngineError> {
        let state = player_mut(&mut self.players, &mut self.events, player)?;
        self.rules.shuffle(player, state, &mut self.events);
        Ok(())
    }

    pub fn draw(&mut self, player: PlayerId, amount: usize) -> Result<DrawOutcome, EngineError> {
        let state = player_mut(&mut self.players, &mut self.events, player)?;
        Ok(self.rules.draw(player, state, amount, &mut self.events))
    }

    /// Play the card at 1-based hand position `index`.
    pub fn play_card(&mut self, player: PlayerId, index: usize) -> Result<PlayOutcome, EngineError> {
        let state = player_mut(&mut self.players, &mut self.events, player)?;
        self.rules.play_card(player, state, index, &mut self.events)
    }

    pub fn acquire_card(&mut self, player: PlayerId, card: CardId) -> Result<AcquireOutcome, EngineError> {
        let state = player_mut(&mut self.players, &mut self.events, player)?;
        self.rules.acquire_card(player, state, card, &mut self.events)
    }

    pub fn reset_turn_resources(&mut self, player: PlayerId) -> Result<(), EngineError> {
        let state = player_mut(&mut self.players, &mut self.events, player)?;
        self.rules.reset_turn(player, state, &mut self.events);
        Ok(())
    }

    /// Display copies of the player's hand with 1-based instance ids.
    ///
    /// Stale as soon as the hand changes; fetch again after every play.
    /// A read like `state`: an unknown player is returned as an error but
    /// not recorded as an event.
    pub fn hand_snapshot(&self, player: PlayerId) -> Result<Vec<HandCard>, EngineError> {
        let state = self
            .players
            .get(&player)
            .ok_or(EngineError::UnknownPlayer(player))?;
        self.rules.hand_snapshot(state)
    }

    // === Reads ===

    #[must_use]
    pub fn state(&self, player: PlayerId) -> Option<&PlayerState> {
        self.players.get(&player)
    }

    #[must_use]
    pub fn contains_player(&self, player: PlayerId) -> bool {
        self.players.contains_key(&player)
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// Active players, in ascending id order.
    #[must_use]
    pub fn players(&self) -> Vec<PlayerId> {
        let mut ids: Vec<_> = self.players.keys().copied().collect();
        ids.sort_unstable();
        ids
    }

    #[must_use]
    pub fn registry(&self) -> &Arc<CardRegistry> {
        self.rules.registry()
    }

    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        self.rules.config()
    }

    // === Events ===

    /// Buffered events since the last call to `take_events`, at most
    /// `EngineConfig::event_capacity` of them.
    #[must_use]
    pub fn events(&self) -> &EventLog {
        &self.events
    }

    /// Remove and return the recorded events.
    pub fn take_events(&mut self) -> Vec<RunEvent> {
        self.events.take()
    }
}

fn player_mut<'a>(
    players: &'a mut FxHashMap<PlayerId, PlayerState>,
    events: &mut EventLog,
    player: PlayerId,
) -> Result<&'a mut PlayerState, EngineError> {
    match players.get_mut(&player) {
        Some(state) => Ok(state),
        None => {
            events.record(RunEvent::UnknownPlayer { player });
            Err(EngineError::UnknownPlayer(player))
        }
    }
}
