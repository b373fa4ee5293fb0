//! Effect resolution - executing effects on a player's run state.
//!
//! The `EffectResolver` applies effects to one `PlayerState` and records
//! the events they cause. Effects only ever touch the state they are given.

use crate::core::{PlayerId, PlayerState};
use crate::events::{EventLog, RunEvent};
use crate::zones::{DrawReport, Zone};

use super::Effect;

/// Resolves effects on player state.
pub struct EffectResolver;

impl EffectResolver {
    /// Apply an effect, recursing into batches in order.
    pub fn resolve(state: &mut PlayerState, player: PlayerId, effect: &Effect, events: &mut EventLog) {
        match effect {
            Effect::Nothing => {}

            Effect::Gain { resource, amount } => {
                state.resources.add(*resource, *amount);
            }

            Effect::GainPerCardInHand { resource } => {
                let count = i64::try_from(state.hand_size()).unwrap_or(i64::MAX);
                state.resources.add(*resource, count);
            }

            Effect::Draw(count) => {
                Self::draw(state, player, *count, events);
            }

            Effect::CreateCard(card) => {
                state.zones.add_to(Zone::Discard, *card);
                events.record(RunEvent::CardCreated { player, card: *card });
            }

            Effect::Batch(effects) => {
                for effect in effects {
                    Self::resolve(state, player, effect, events);
                }
            }
        }
    }

    /// Draw `count` cards and record what happened.
    ///
    /// Shared by the draw operation and by `Effect::Draw`, so a draw caused
    /// by a card behaves exactly like a requested one.
    pub fn draw(state: &mut PlayerState, player: PlayerId, count: usize, events: &mut EventLog) -> DrawReport {
        let report = state.zones.draw(count, &mut state.rng);

        for &deck_size in &report.reshuffled {
            events.record(RunEvent::Shuffled { player, deck_size });
        }
        if report.drawn > 0 {
            events.record(RunEvent::Drew {
                player,
                requested: count,
                drawn: report.drawn,
            });
        }
        if report.exhausted {
            events.record(RunEvent::NothingToDraw {
                player,
                forfeited: count - report.drawn,
            });
        }

        report
    }
}
