//! Catalog entries: what a card is, costs, and does when played.
//!
//! "Spark" being a Basic skill worth one Inspiration is a property of its
//! `CardDefinition`, shared by every copy in every run.
//!
//! Where a copy of a card currently sits (deck, hand, discard) is tracked
//! separately by the player's `ZoneManager`.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::effects::Effect;

/// Ordered tag list. Order is authoring order.
pub type Tags = SmallVec<[String; 4]>;

/// Catalog key of a card.
///
/// This identifies the "type" of card (e.g., "Spark"),
/// not a specific copy in a player's deck.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// Broad card category.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardType {
    /// Techniques that produce resources.
    Skill,
    /// Dead weight added to a deck by other cards.
    Flaw,
    /// Story beats, usually with a Cohesion bonus.
    Idea,
}

impl std::fmt::Display for CardType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            CardType::Skill => "Skill",
            CardType::Flaw => "Flaw",
            CardType::Idea => "Idea",
        };
        f.write_str(name)
    }
}

/// Bonus applied when the previously played card carried `required_tag`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cohesion {
    pub required_tag: String,
    pub bonus: Effect,
}

impl Cohesion {
    /// Create a new cohesion rule.
    pub fn new(required_tag: impl Into<String>, bonus: Effect) -> Self {
        Self {
            required_tag: required_tag.into(),
            bonus,
        }
    }

    /// Does a previous card's tag list satisfy this rule?
    #[must_use]
    pub fn is_met_by(&self, previous_tags: Option<&[String]>) -> bool {
        previous_tags.is_some_and(|tags| tags.iter().any(|t| *t == self.required_tag))
    }
}

/// One catalog entry.
///
/// ## Example
///
/// ```
/// use cohesion_engine::cards::{CardDefinition, CardId, CardType};
/// use cohesion_engine::core::Resource;
/// use cohesion_engine::effects::Effect;
///
/// let spark = CardDefinition::new(CardId::new(1), "Spark", CardType::Skill)
///     .with_tag("Basic")
///     .with_on_play(Effect::gain(Resource::Inspiration, 1));
///
/// assert!(spark.has_tag("Basic"));
/// assert_eq!(spark.inspiration_cost, 0);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardDefinition {
    /// Registry key.
    pub id: CardId,

    /// Display name.
    pub name: String,

    pub card_type: CardType,

    /// Tags in authoring order.
    pub tags: Tags,

    pub description: String,

    /// Inspiration spent to acquire this card.
    pub inspiration_cost: u32,

    /// Ink cost, where applicable. Display data only.
    pub ink_cost: Option<u32>,

    /// Effect applied when the card resolves.
    pub on_play: Effect,

    /// Optional tag-chained bonus.
    pub cohesion: Option<Cohesion>,
}

impl CardDefinition {
    /// Create a new card definition with no tags, no cost and no effect.
    #[must_use]
    pub fn new(id: CardId, name: impl Into<String>, card_type: CardType) -> Self {
        Self {
            id,
            name: name.into(),
            card_type,
            tags: Tags::new(),
            description: String::new(),
            inspiration_cost: 0,
            ink_cost: None,
            on_play: Effect::Nothing,
            cohesion: None,
        }
    }

    /// Append a tag (builder pattern).
    #[must_use]
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    #[must_use]
    pub fn with_inspiration_cost(mut self, cost: u32) -> Self {
        self.inspiration_cost = cost;
        self
    }

    #[must_use]
    pub fn with_ink_cost(mut self, cost: u32) -> Self {
        self.ink_cost = Some(cost);
        self
    }

    #[must_use]
    pub fn with_on_play(mut self, effect: Effect) -> Self {
        self.on_play = effect;
        self
    }

    #[must_use]
    pub fn with_cohesion(mut self, cohesion: Cohesion) -> Self {
        self.cohesion = Some(cohesion);
        self
    }

    /// Check whether the card carries a tag.
    #[must_use]
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}
