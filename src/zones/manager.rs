//! Zone manager for a player's piles.
//!
//! The `ZoneManager` holds the three ordered piles of a run and the
//! primitives that move cards between them:
//! - Deck: FIFO, the front is the next card drawn
//! - Hand: display order, which is also instance-index order
//! - Discard: accumulation order, the source order for reshuffles
//!
//! Every primitive moves cards; none create or destroy them except
//! `add_to` and `take_from_hand`.

use im::Vector;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::CardId;
use crate::core::rng::GameRng;

/// One of a player's piles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Zone {
    Deck,
    Hand,
    Discard,
}

impl std::fmt::Display for Zone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Zone::Deck => "Deck",
            Zone::Hand => "Hand",
            Zone::Discard => "Discard",
        };
        f.write_str(name)
    }
}

/// Outcome of a multi-card draw.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DrawReport {
    /// Cards actually moved to hand.
    pub drawn: usize,
    /// Deck size right after each mid-draw reshuffle of the discard pile.
    pub reshuffled: SmallVec<[usize; 1]>,
    /// Both piles ran dry before the request was met.
    pub exhausted: bool,
}

impl DrawReport {
    /// Times the discard pile was shuffled back in.
    #[must_use]
    pub fn reshuffles(&self) -> usize {
        self.reshuffled.len()
    }
}

/// A player's deck, hand and discard pile.
///
/// ## Usage
///
/// ```
/// use cohesion_engine::cards::CardId;
/// use cohesion_engine::core::GameRng;
/// use cohesion_engine::zones::{Zone, ZoneManager};
///
/// let mut zones = ZoneManager::new();
/// zones.add_to(Zone::Deck, CardId::new(1));
/// zones.add_to(Zone::Deck, CardId::new(2));
///
/// let mut rng = GameRng::new(42);
/// let report = zones.draw(1, &mut rng);
///
/// assert_eq!(report.drawn, 1);
/// assert_eq!(zones.hand()[0], CardId::new(1));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZoneManager {
    deck: Vector<CardId>,
    hand: Vector<CardId>,
    discard: Vector<CardId>,
}

impl ZoneManager {
    /// Create empty piles.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create piles with explicit contents (front of `deck` draws first).
    pub fn from_piles(
        deck: impl IntoIterator<Item = CardId>,
        hand: impl IntoIterator<Item = CardId>,
        discard: impl IntoIterator<Item = CardId>,
    ) -> Self {
        Self {
            deck: deck.into_iter().collect(),
            hand: hand.into_iter().collect(),
            discard: discard.into_iter().collect(),
        }
    }

    #[must_use]
    pub fn deck(&self) -> &Vector<CardId> {
        &self.deck
    }

    #[must_use]
    pub fn hand(&self) -> &Vector<CardId> {
        &self.hand
    }

    #[must_use]
    pub fn discard(&self) -> &Vector<CardId> {
        &self.discard
    }

    /// Get a pile.
    #[must_use]
    pub fn cards_in(&self, zone: Zone) -> &Vector<CardId> {
        match zone {
            Zone::Deck => &self.deck,
            Zone::Hand => &self.hand,
            Zone::Discard => &self.discard,
        }
    }

    /// Number of cards in a pile.
    #[must_use]
    pub fn zone_size(&self, zone: Zone) -> usize {
        self.cards_in(zone).len()
    }

    /// Cards across all three piles.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.deck.len() + self.hand.len() + self.discard.len()
    }

    /// Append a card to the end of a pile.
    pub fn add_to(&mut self, zone: Zone, card: CardId) {
        match zone {
            Zone::Deck => self.deck.push_back(card),
            Zone::Hand => self.hand.push_back(card),
            Zone::Discard => self.discard.push_back(card),
        }
    }

    /// Remove the card at a 0-based hand position.
    ///
    /// Later cards shift down one position.
    pub fn take_from_hand(&mut self, position: usize) -> Option<CardId> {
        if position >= self.hand.len() {
            return None;
        }
        Some(self.hand.remove(position))
    }

    /// Move every discarded card to the end of the deck, then permute the
    /// deck uniformly.
    pub fn shuffle(&mut self, rng: &mut GameRng) {
        let recycled = std::mem::take(&mut self.discard);
        self.deck.append(recycled);
        rng.shuffle_vector(&mut self.deck);
    }

    /// Draw up to `amount` cards from the front of the deck.
    ///
    /// Checked per card: an empty deck is refilled by `shuffle` while the
    /// discard pile has cards; once both are empty the remaining draws are
    /// forfeited.
    pub fn draw(&mut self, amount: usize, rng: &mut GameRng) -> DrawReport {
        let mut report = DrawReport::default();

        for _ in 0..amount {
            if self.deck.is_empty() {
                if self.discard.is_empty() {
                    report.exhausted = true;
                    break;
                }
                self.shuffle(rng);
                report.reshuffled.push(self.deck.len());
            }

            if let Some(card) = self.deck.pop_front() {
                self.hand.push_back(card);
                report.drawn += 1;
            }
        }

        report
    }
}
