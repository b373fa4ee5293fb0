//! Run rules: the operations on a single player's state.
//!
//! `RunRules` holds what every operation needs to read (the registry and
//! the configuration) and none of the mutable state. Both engines look up
//! the player's state, then call into these methods, so the two engines
//! cannot drift apart in behavior.
//!
//! ## Play resolution order
//!
//! 1. Cohesion bonus, if the previous card carried the required tag
//! 2. The card's own effect
//! 3. Chain tags replaced by this card's tags
//! 4. Card appended to the discard pile

use std::sync::Arc;

use crate::cards::{CardId, CardRegistry, HandCard};
use crate::core::{
    ConfigError, EngineConfig, EngineError, GameRng, PlayerId, PlayerState, Resource, Resources,
};
use crate::effects::EffectResolver;
use crate::events::{EventLog, RunEvent};
use crate::zones::Zone;

/// Result of a draw request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DrawOutcome {
    pub requested: usize,
    pub drawn: usize,
    /// Discard-to-deck reshuffles triggered by this draw.
    pub reshuffles: usize,
}

impl DrawOutcome {
    /// Draws dropped because deck and discard were both empty.
    #[must_use]
    pub fn forfeited(&self) -> usize {
        self.requested - self.drawn
    }
}

/// Result of a successful play.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlayOutcome {
    pub card: CardId,
    pub cohesion_triggered: bool,
}

/// Result of a successful acquisition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AcquireOutcome {
    pub card: CardId,
    pub cost: u32,
    /// Inspiration left after paying.
    pub remaining_inspiration: i64,
}

/// Operation logic shared by `RunEngine` and `SharedRunEngine`.
#[derive(Clone, Debug)]
pub struct RunRules {
    registry: Arc<CardRegistry>,
    config: EngineConfig,
}

impl RunRules {
    /// Pair a registry with a configuration, validating the starting deck.
    pub fn new(registry: Arc<CardRegistry>, config: EngineConfig) -> Result<Self, ConfigError> {
        config.validate(&registry)?;
        Ok(Self { registry, config })
    }

    #[must_use]
    pub fn registry(&self) -> &Arc<CardRegistry> {
        &self.registry
    }

    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Build a fresh run: starting deck, starting Grit, then a shuffle.
    pub fn initialize(&self, player: PlayerId, rng: GameRng, events: &mut EventLog) -> PlayerState {
        let resources = Resources::new().with(Resource::Grit, self.config.starting_grit);
        let mut state = PlayerState::new(rng).with_resources(resources);
        for card in self.config.starting_cards() {
            state.zones.add_to(Zone::Deck, card);
        }

        events.record(RunEvent::Initialized {
            player,
            deck_size: state.zones.zone_size(Zone::Deck),
        });
        self.shuffle(player, &mut state, events);
        state
    }

    /// Discard into deck, then permute the deck.
    pub fn shuffle(&self, player: PlayerId, state: &mut PlayerState, events: &mut EventLog) {
        state.zones.shuffle(&mut state.rng);
        events.record(RunEvent::Shuffled {
            player,
            deck_size: state.zones.zone_size(Zone::Deck),
        });
    }

    /// Draw up to `amount` cards.
    pub fn draw(
        &self,
        player: PlayerId,
        state: &mut PlayerState,
        amount: usize,
        events: &mut EventLog,
    ) -> DrawOutcome {
        let report = EffectResolver::draw(state, player, amount, events);
        DrawOutcome {
            requested: amount,
            drawn: report.drawn,
            reshuffles: report.reshuffles(),
        }
    }

    /// Play the card at 1-based hand position `index`.
    ///
    /// An out-of-range index changes nothing. A card missing from the
    /// registry has already left the hand when the lookup fails and is not
    /// returned to it.
    pub fn play_card(
        &self,
        player: PlayerId,
        state: &mut PlayerState,
        index: usize,
        events: &mut EventLog,
    ) -> Result<PlayOutcome, EngineError> {
        let hand_size = state.hand_size();
        let Some(card) = index
            .checked_sub(1)
            .and_then(|position| state.zones.take_from_hand(position))
        else {
            events.record(RunEvent::InvalidIndex { player, index, hand_size });
            return Err(EngineError::InvalidIndex { index, hand_size });
        };

        let Some(definition) = self.registry.get(card) else {
            events.record(RunEvent::UnknownCard { player, card });
            return Err(EngineError::UnknownCard(card));
        };

        let mut cohesion_triggered = false;
        if let Some(cohesion) = &definition.cohesion {
            if cohesion.is_met_by(state.last_played_tags()) {
                EffectResolver::resolve(state, player, &cohesion.bonus, events);
                cohesion_triggered = true;
            }
        }

        EffectResolver::resolve(state, player, &definition.on_play, events);
        state.last_played_tags = Some(definition.tags.clone());
        state.zones.add_to(Zone::Discard, card);

        events.record(RunEvent::Played {
            player,
            card,
            cohesion_triggered,
        });
        Ok(PlayOutcome {
            card,
            cohesion_triggered,
        })
    }

    /// Buy a card with Inspiration. Bought cards enter the discard pile.
    pub fn acquire_card(
        &self,
        player: PlayerId,
        state: &mut PlayerState,
        card: CardId,
        events: &mut EventLog,
    ) -> Result<AcquireOutcome, EngineError> {
        let Some(definition) = self.registry.get(card) else {
            events.record(RunEvent::UnknownCard { player, card });
            return Err(EngineError::UnknownCard(card));
        };

        let cost = definition.inspiration_cost;
        let available = state.resource(Resource::Inspiration);
        if available < i64::from(cost) {
            events.record(RunEvent::InsufficientResources {
                player,
                card,
                cost,
                available,
            });
            return Err(EngineError::InsufficientResources {
                card,
                cost,
                available,
            });
        }

        state.resources.add(Resource::Inspiration, -i64::from(cost));
        state.zones.add_to(Zone::Discard, card);

        events.record(RunEvent::Acquired { player, card, cost });
        Ok(AcquireOutcome {
            card,
            cost,
            remaining_inspiration: state.resource(Resource::Inspiration),
        })
    }

    /// Zero the per-turn counters and break the Cohesion chain.
    pub fn reset_turn(&self, player: PlayerId, state: &mut PlayerState, events: &mut EventLog) {
        state.resources.set(Resource::Inspiration, 0);
        state.resources.set(Resource::Ink, 0);
        state.last_played_tags = None;
        events.record(RunEvent::TurnReset { player });
    }

    /// Owned display copies of the hand, in order.
    pub fn hand_snapshot(&self, state: &PlayerState) -> Result<Vec<HandCard>, EngineError> {
        state
            .hand()
            .enumerate()
            .map(|(position, card)| {
                let definition = self.registry.lookup(card)?;
                Ok(HandCard::project(definition, position + 1))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::catalog;
    use crate::zones::ZoneManager;

    const P: PlayerId = PlayerId::new(1);

    fn rules() -> RunRules {
        RunRules::new(Arc::new(CardRegistry::standard().unwrap()), EngineConfig::default()).unwrap()
    }

    fn with_hand(hand: &[CardId]) -> PlayerState {
        PlayerState::new(GameRng::new(3)).with_zones(ZoneManager::from_piles(
            [],
            hand.iter().copied(),
            [],
        ))
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        let config = EngineConfig::new().with_only_starter(CardId::new(99), 3);
        let result = RunRules::new(Arc::new(CardRegistry::standard().unwrap()), config);
        assert!(matches!(result, Err(ConfigError::UnknownStarterCard(_))));
    }

    #[test]
    fn test_initialize() {
        let mut events = EventLog::new();
        let state = rules().initialize(P, GameRng::new(5), &mut events);

        assert_eq!(state.zones.zone_size(Zone::Deck), 10);
        assert_eq!(state.hand_size(), 0);
        assert!(state.zones.discard().is_empty());
        assert_eq!(state.resources, Resources::new().with(Resource::Grit, 1));
        assert!(state.last_played_tags().is_none());
        assert_eq!(
            events.take(),
            vec![
                RunEvent::Initialized { player: P, deck_size: 10 },
                RunEvent::Shuffled { player: P, deck_size: 10 },
            ]
        );
    }

    #[test]
    fn test_play_sets_chain_and_discards() {
        let mut events = EventLog::new();
        let mut state = with_hand(&[catalog::PROTAGONIST]);

        let outcome = rules().play_card(P, &mut state, 1, &mut events).unwrap();

        assert_eq!(outcome.card, catalog::PROTAGONIST);
        assert!(!outcome.cohesion_triggered);
        assert_eq!(state.resource(Resource::Hype), 1);
        assert_eq!(
            state.last_played_tags(),
            Some(&["Character".to_string(), "Hero".to_string()][..])
        );
        assert_eq!(state.zones.discard().back(), Some(&catalog::PROTAGONIST));
    }

    #[test]
    fn test_play_overwrites_chain() {
        let mut events = EventLog::new();
        let mut state = with_hand(&[catalog::SPARK]).with_last_played_tags(["Character", "Plot"]);

        rules().play_card(P, &mut state, 1, &mut events).unwrap();

        assert_eq!(state.last_played_tags(), Some(&["Basic".to_string()][..]));
    }

    #[test]
    fn test_play_rejects_zero_index() {
        let mut events = EventLog::new();
        let mut state = with_hand(&[catalog::SPARK]);

        let err = rules().play_card(P, &mut state, 0, &mut events).unwrap_err();

        assert_eq!(err, EngineError::InvalidIndex { index: 0, hand_size: 1 });
        assert_eq!(state.hand_size(), 1);
    }

    #[test]
    fn test_acquire_exact_cost() {
        let mut events = EventLog::new();
        let mut state = with_hand(&[]);
        state.resources.set(Resource::Inspiration, 2);

        let outcome = rules()
            .acquire_card(P, &mut state, catalog::PROTAGONIST, &mut events)
            .unwrap();

        assert_eq!(outcome.cost, 2);
        assert_eq!(outcome.remaining_inspiration, 0);
        assert_eq!(state.zones.discard().len(), 1);
    }

    #[test]
    fn test_reset_turn_keeps_persistent_counters() {
        let mut events = EventLog::new();
        let mut state = with_hand(&[]).with_last_played_tags(["Plot"]);
        state.resources = Resources::new()
            .with(Resource::Inspiration, 3)
            .with(Resource::Ink, 2)
            .with(Resource::Grit, 4)
            .with(Resource::Hype, 5);

        rules().reset_turn(P, &mut state, &mut events);

        assert_eq!(
            state.resources,
            Resources::new().with(Resource::Grit, 4).with(Resource::Hype, 5)
        );
        assert!(state.last_played_tags().is_none());
    }

    #[test]
    fn test_hand_snapshot_reports_unknown_card() {
        let state = with_hand(&[catalog::SPARK, CardId::new(404)]);
        assert_eq!(
            rules().hand_snapshot(&state).unwrap_err(),
            EngineError::UnknownCard(CardId::new(404))
        );
    }
}
