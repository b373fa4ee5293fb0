//! Thread-safe run engine with per-player locking.
//!
//! Each run sits behind its own `Mutex`; the map of runs sits behind a
//! `RwLock` that is held only long enough to find (or replace) a player's
//! slot. Operations on different players never wait on each other, and
//! operations on one player run one at a time to completion.
//!
//! A slot that leaves the map (the run ended, or was replaced by a new
//! `initialize_player` / `restore_player`) is emptied under its lock. An
//! operation that looked the slot up just before that finds it empty and
//! reports `UnknownPlayer`, so it never mutates a run nobody can reach.

use std::sync::{Arc, Mutex, PoisonError, RwLock};

use rustc_hash::FxHashMap;

use super::run::{AcquireOutcome, DrawOutcome, PlayOutcome, RunRules};
use crate::cards::{CardId, CardRegistry, HandCard};
use crate::core::{ConfigError, EngineConfig, EngineError, GameRng, PlayerId, PlayerState};
use crate::events::{EventLog, RunEvent};

/// A player's run; `None` once the slot has been retired.
type Slot = Arc<Mutex<Option<PlayerState>>>;

/// `Send + Sync` engine for hosts that serve players from many threads.
#[derive(Debug)]
pub struct SharedRunEngine {
    rules: RunRules,
    rng: Mutex<GameRng>,
    players: RwLock<FxHashMap<PlayerId, Slot>>,
    events: Mutex<EventLog>,
}

impl SharedRunEngine {
    pub fn new(registry: Arc<CardRegistry>, config: EngineConfig) -> Result<Self, ConfigError> {
        let rng = GameRng::new(config.seed);
        let events = EventLog::bounded(config.event_capacity);
        Ok(Self {
            rules: RunRules::new(registry, config)?,
            rng: Mutex::new(rng),
            players: RwLock::new(FxHashMap::default()),
            events: Mutex::new(events),
        })
    }

    /// Start (or restart) a player's run. Any previous state is replaced.
    pub fn initialize_player(&self, player: PlayerId) -> Result<(), EngineError> {
        let rng = self.rng.lock().map_err(|_| EngineError::Poisoned)?.fork();
        let mut local = EventLog::new();
        let state = self.rules.initialize(player, rng, &mut local);
        self.insert(player, state)?;
        self.publish(&mut local)
    }

    /// Install a prepared state for a player, replacing any existing one.
    pub fn restore_player(&self, player: PlayerId, state: PlayerState) -> Result<(), EngineError> {
        self.insert(player, state)
    }

    /// End a player's run, returning its final state.
    ///
    /// The run is gone once this returns, even when the state lock turns
    /// out to be poisoned; `RunEnded` is recorded either way.
    pub fn end_run(&self, player: PlayerId) -> Result<PlayerState, EngineError> {
        let removed = self
            .players
            .write()
            .map_err(|_| EngineError::Poisoned)?
            .remove(&player);

        let mut local = EventLog::new();
        let result = match removed {
            Some(slot) => {
                local.record(RunEvent::RunEnded { player });
                let taken = slot
                    .lock()
                    .map_err(|_| EngineError::Poisoned)
                    .and_then(|mut state| state.take().ok_or(EngineError::UnknownPlayer(player)));
                taken
            }
            None => {
                local.record(RunEvent::UnknownPlayer { player });
                Err(EngineError::UnknownPlayer(player))
            }
        };
        self.publish(&mut local)?;
        result
    }

    pub fn shuffle(&self, player: PlayerId) -> Result<(), EngineError> {
        self.with_player(player, |rules, state, events| {
            rules.shuffle(player, state, events);
            Ok(())
        })
    }

    pub fn draw(&self, player: PlayerId, amount: usize) -> Result<DrawOutcome, EngineError> {
        self.with_player(player, |rules, state, events| {
            Ok(rules.draw(player, state, amount, events))
        })
    }

    pub fn play_card(&self, player: PlayerId, index: usize) -> Result<PlayOutcome, EngineError> {
        self.with_player(player, |rules, state, events| {
            rules.play_card(player, state, index, events)
        })
    }

    pub fn acquire_card(&self, player: PlayerId, card: CardId) -> Result<AcquireOutcome, EngineError> {
        self.with_player(player, |rules, state, events| {
            rules.acquire_card(player, state, card, events)
        })
    }

    pub fn reset_turn_resources(&self, player: PlayerId) -> Result<(), EngineError> {
        self.with_player(player, |rules, state, events| {
            rules.reset_turn(player, state, events);
            Ok(())
        })
    }

    pub fn hand_snapshot(&self, player: PlayerId) -> Result<Vec<HandCard>, EngineError> {
        self.with_player(player, |rules, state, _| rules.hand_snapshot(state))
    }

    /// Copy of a player's current state.
    pub fn state(&self, player: PlayerId) -> Result<PlayerState, EngineError> {
        self.with_player(player, |_, state, _| Ok(state.clone()))
    }

    pub fn contains_player(&self, player: PlayerId) -> Result<bool, EngineError> {
        Ok(self
            .players
            .read()
            .map_err(|_| EngineError::Poisoned)?
            .contains_key(&player))
    }

    pub fn player_count(&self) -> Result<usize, EngineError> {
        Ok(self.players.read().map_err(|_| EngineError::Poisoned)?.len())
    }

    #[must_use]
    pub fn registry(&self) -> &Arc<CardRegistry> {
        self.rules.registry()
    }

    /// Remove and return the buffered events, across all players.
    pub fn take_events(&self) -> Result<Vec<RunEvent>, EngineError> {
        Ok(self.events.lock().map_err(|_| EngineError::Poisoned)?.take())
    }

    fn insert(&self, player: PlayerId, state: PlayerState) -> Result<(), EngineError> {
        let replaced = self
            .players
            .write()
            .map_err(|_| EngineError::Poisoned)?
            .insert(player, Arc::new(Mutex::new(Some(state))));
        if let Some(old) = replaced {
            retire(&old);
        }
        Ok(())
    }

    fn slot(&self, player: PlayerId) -> Result<Option<Slot>, EngineError> {
        Ok(self
            .players
            .read()
            .map_err(|_| EngineError::Poisoned)?
            .get(&player)
            .cloned())
    }

    fn publish(&self, local: &mut EventLog) -> Result<(), EngineError> {
        self.events
            .lock()
            .map_err(|_| EngineError::Poisoned)?
            .absorb(local);
        Ok(())
    }

    /// Run `op` with the player's state locked.
    ///
    /// The map lock is released before the player lock is taken.
    fn with_player<R>(
        &self,
        player: PlayerId,
        op: impl FnOnce(&RunRules, &mut PlayerState, &mut EventLog) -> Result<R, EngineError>,
    ) -> Result<R, EngineError> {
        let slot = self.slot(player)?;
        self.run_in_slot(player, slot, op)
    }

    fn run_in_slot<R>(
        &self,
        player: PlayerId,
        slot: Option<Slot>,
        op: impl FnOnce(&RunRules, &mut PlayerState, &mut EventLog) -> Result<R, EngineError>,
    ) -> Result<R, EngineError> {
        let mut local = EventLog::new();
        let result = match slot {
            Some(slot) => {
                let mut guard = slot.lock().map_err(|_| EngineError::Poisoned)?;
                let outcome = match guard.as_mut() {
                    Some(state) => op(&self.rules, state, &mut local),
                    None => {
                        local.record(RunEvent::UnknownPlayer { player });
                        Err(EngineError::UnknownPlayer(player))
                    }
                };
                outcome
            }
            None => {
                local.record(RunEvent::UnknownPlayer { player });
                Err(EngineError::UnknownPlayer(player))
            }
        };
        self.publish(&mut local)?;
        result
    }
}

/// Empty a slot that has left the map. A poisoned slot is emptied too.
fn retire(slot: &Slot) {
    slot.lock().unwrap_or_else(PoisonError::into_inner).take();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::catalog;
    use crate::core::Resource;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::thread;

    fn engine() -> SharedRunEngine {
        SharedRunEngine::new(Arc::new(CardRegistry::standard().unwrap()), EngineConfig::default()).unwrap()
    }

    #[test]
    fn test_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SharedRunEngine>();
    }

    #[test]
    fn test_basic_flow() {
        let engine = engine();
        let p = PlayerId::new(1);

        engine.initialize_player(p).unwrap();
        let drawn = engine.draw(p, 3).unwrap();
        assert_eq!(drawn.drawn, 3);

        engine.play_card(p, 1).unwrap();
        let state = engine.state(p).unwrap();
        assert_eq!(state.hand_size(), 2);
        assert_eq!(state.resource(Resource::Inspiration), 1);
        assert_eq!(engine.hand_snapshot(p).unwrap().len(), 2);
    }

    #[test]
    fn test_unknown_player() {
        let engine = engine();
        let ghost = PlayerId::new(9);

        assert_eq!(engine.draw(ghost, 1).unwrap_err(), EngineError::UnknownPlayer(ghost));
        assert_eq!(engine.end_run(ghost).unwrap_err(), EngineError::UnknownPlayer(ghost));
        assert_eq!(
            engine.take_events().unwrap(),
            vec![
                RunEvent::UnknownPlayer { player: ghost },
                RunEvent::UnknownPlayer { player: ghost },
            ]
        );
    }

    #[test]
    fn test_parallel_players_are_independent() {
        let engine = Arc::new(engine());
        let players: Vec<_> = (0..8).map(PlayerId::new).collect();

        let handles: Vec<_> = players
            .iter()
            .map(|&player| {
                let engine = Arc::clone(&engine);
                thread::spawn(move || {
                    engine.initialize_player(player).unwrap();
                    for _ in 0..20 {
                        engine.draw(player, 5).unwrap();
                        while engine.play_card(player, 1).is_ok() {}
                        engine.reset_turn_resources(player).unwrap();
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(engine.player_count().unwrap(), 8);
        for player in players {
            let state = engine.state(player).unwrap();
            // Ten starters plus one Doubt per Rough Draft play
            assert!(state.total_cards() >= 10);
            assert_eq!(state.hand_size(), 0);
            assert!(state.last_played_tags().is_none());
        }
    }

    #[test]
    fn test_end_run_returns_state() {
        let engine = engine();
        let p = PlayerId::new(2);
        engine.initialize_player(p).unwrap();

        let state = engine.end_run(p).unwrap();

        assert_eq!(state.total_cards(), 10);
        assert!(!engine.contains_player(p).unwrap());
    }

    #[test]
    fn test_concurrent_operations_on_one_player() {
        let config = EngineConfig::default().with_only_starter(catalog::SPARK, 10);
        let engine = Arc::new(
            SharedRunEngine::new(Arc::new(CardRegistry::standard().unwrap()), config).unwrap(),
        );
        let p = PlayerId::new(1);
        engine.initialize_player(p).unwrap();
        let plays = Arc::new(AtomicUsize::new(0));

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let engine = Arc::clone(&engine);
                let plays = Arc::clone(&plays);
                thread::spawn(move || {
                    for _ in 0..200 {
                        engine.draw(p, 3).unwrap();
                        if engine.play_card(p, 1).is_ok() {
                            plays.fetch_add(1, Ordering::Relaxed);
                        }
                        engine.shuffle(p).unwrap();
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        let state = engine.state(p).unwrap();
        assert_eq!(state.total_cards(), 10);
        assert!(state.hand().all(|card| card == catalog::SPARK));
        // Every Spark played added exactly one Inspiration
        let played = plays.load(Ordering::Relaxed);
        assert!(played > 0);
        assert_eq!(state.resource(Resource::Inspiration), played as i64);
    }

    #[test]
    fn test_operation_on_ended_run_slot_is_refused() {
        let engine = engine();
        let p = PlayerId::new(3);
        engine.initialize_player(p).unwrap();
        let stale = engine.slot(p).unwrap();

        engine.end_run(p).unwrap();
        let err = engine
            .run_in_slot(p, stale, |rules, state, events| Ok(rules.draw(p, state, 1, events)))
            .unwrap_err();

        assert_eq!(err, EngineError::UnknownPlayer(p));
    }

    #[test]
    fn test_reinitialize_retires_old_slot() {
        let engine = engine();
        let p = PlayerId::new(4);
        engine.initialize_player(p).unwrap();
        let stale = engine.slot(p).unwrap();

        engine.initialize_player(p).unwrap();
        let err = engine
            .run_in_slot(p, stale, |rules, state, events| Ok(rules.draw(p, state, 5, events)))
            .unwrap_err();

        assert_eq!(err, EngineError::UnknownPlayer(p));
        assert_eq!(engine.state(p).unwrap().hand_size(), 0);
    }

    #[test]
    fn test_end_run_on_poisoned_slot_still_records_event() {
        let engine = engine();
        let p = PlayerId::new(5);
        engine.initialize_player(p).unwrap();
        engine.take_events().unwrap();

        let slot = engine.slot(p).unwrap().unwrap();
        let _ = thread::spawn(move || {
            let _guard = slot.lock().unwrap();
            panic!("state lock poisoned on purpose");
        })
        .join();

        assert_eq!(engine.end_run(p).unwrap_err(), EngineError::Poisoned);
        assert_eq!(engine.take_events().unwrap(), vec![RunEvent::RunEnded { player: p }]);
        assert!(!engine.contains_player(p).unwrap());
    }

    #[test]
    fn test_event_buffer_is_bounded() {
        let config = EngineConfig::default().with_event_capacity(16);
        let engine =
            SharedRunEngine::new(Arc::new(CardRegistry::standard().unwrap()), config).unwrap();
        let p = PlayerId::new(6);
        engine.initialize_player(p).unwrap();

        for _ in 0..200 {
            engine.draw(p, 5).unwrap();
            while engine.play_card(p, 1).is_ok() {}
            engine.reset_turn_resources(p).unwrap();
        }

        let events = engine.take_events().unwrap();
        assert_eq!(events.len(), 16);
        assert_eq!(events.last(), Some(&RunEvent::TurnReset { player: p }));
    }
}
