//! Effect definitions.
//!
//! Effects are atomic state changes that compose into card abilities.
//! They are plain data so card definitions stay serializable and
//! comparable; `EffectResolver` gives them meaning.

use serde::{Deserialize, Serialize};

use crate::cards::CardId;
use crate::core::Resource;

/// An atomic effect applied to one player's run state.
///
/// ## Resource Effects
///
/// - `Gain`: Add to (or, with a negative amount, spend from) a counter
/// - `GainPerCardInHand`: Add one per card currently in hand
///
/// ## Card Movement Effects
///
/// - `Draw`: Draw cards, reshuffling the discard pile when the deck runs out
/// - `CreateCard`: Put a new copy of a card into the discard pile
///
/// ## Composite Effects
///
/// - `Batch`: Execute multiple effects in sequence
/// - `Nothing`: No state change
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Effect {
    #[default]
    Nothing,

    /// Add `amount` to a resource counter.
    Gain { resource: Resource, amount: i64 },

    /// Add the current hand size to a resource counter.
    GainPerCardInHand { resource: Resource },

    /// Draw cards from deck to hand.
    Draw(usize),

    /// Add a new copy of a card to the discard pile.
    CreateCard(CardId),

    /// Execute multiple effects in sequence.
    Batch(Vec<Effect>),
}

impl Effect {
    /// Create a gain effect.
    pub fn gain(resource: Resource, amount: i64) -> Self {
        Self::Gain { resource, amount }
    }

    /// Create a spend effect (a negative gain).
    pub fn spend(resource: Resource, amount: i64) -> Self {
        Self::Gain {
            resource,
            amount: -amount,
        }
    }

    /// Create a per-card-in-hand gain effect.
    pub fn gain_per_card_in_hand(resource: Resource) -> Self {
        Self::GainPerCardInHand { resource }
    }

    /// Create a draw cards effect.
    pub fn draw(count: usize) -> Self {
        Self::Draw(count)
    }

    /// Create a card-creating effect.
    pub fn create(card: CardId) -> Self {
        Self::CreateCard(card)
    }

    /// Create a batch of effects.
    pub fn batch(effects: impl IntoIterator<Item = Effect>) -> Self {
        Self::Batch(effects.into_iter().collect())
    }

    /// Card ids this effect may put into a player's piles.
    pub fn created_cards(&self) -> Vec<CardId> {
        let mut out = Vec::new();
        self.collect_created(&mut out);
        out
    }

    fn collect_created(&self, out: &mut Vec<CardId>) {
        match self {
            Effect::CreateCard(card) => out.push(*card),
            Effect::Batch(effects) => {
                for effect in effects {
                    effect.collect_created(out);
                }
            }
            _ => {}
        }
    }
}
