//! The set of card definitions a run may reference.
//!
//! The `CardRegistry` stores every card definition the engine knows.
//! It is assembled once through a `RegistryBuilder` and is read-only
//! afterwards; share it behind an `Arc`.

use rustc_hash::FxHashMap;

use super::catalog;
use super::definition::{CardDefinition, CardId, CardType};
use crate::core::error::{EngineError, RegistryError};

/// Collects definitions and validates them into a `CardRegistry`.
///
/// ## Example
///
/// ```
/// use cohesion_engine::cards::{CardDefinition, CardId, CardType, RegistryBuilder};
///
/// let registry = RegistryBuilder::new()
///     .register(CardDefinition::new(CardId::new(1), "Spark", CardType::Skill))
///     .build()
///     .unwrap();
///
/// assert_eq!(registry.get(CardId::new(1)).unwrap().name, "Spark");
/// ```
#[derive(Clone, Debug, Default)]
pub struct RegistryBuilder {
    cards: Vec<CardDefinition>,
}

impl RegistryBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a definition (builder pattern).
    #[must_use]
    pub fn register(mut self, card: CardDefinition) -> Self {
        self.cards.push(card);
        self
    }

    /// Add several definitions.
    #[must_use]
    pub fn register_all(mut self, cards: impl IntoIterator<Item = CardDefinition>) -> Self {
        self.cards.extend(cards);
        self
    }

    /// Validate and freeze.
    ///
    /// Fails on duplicate ids and on effects that create cards the registry
    /// does not define.
    pub fn build(self) -> Result<CardRegistry, RegistryError> {
        let mut cards = FxHashMap::default();
        for card in self.cards {
            if cards.contains_key(&card.id) {
                return Err(RegistryError::DuplicateCard(card.id));
            }
            cards.insert(card.id, card);
        }

        for card in cards.values() {
            let bonus = card.cohesion.iter().map(|c| &c.bonus);
            for effect in std::iter::once(&card.on_play).chain(bonus) {
                if let Some(missing) = effect
                    .created_cards()
                    .into_iter()
                    .find(|id| !cards.contains_key(id))
                {
                    return Err(RegistryError::DanglingReference { card: card.id, missing });
                }
            }
        }

        Ok(CardRegistry { cards })
    }
}

/// Immutable registry of card definitions.
#[derive(Clone, Debug, Default)]
pub struct CardRegistry {
    cards: FxHashMap<CardId, CardDefinition>,
}

impl CardRegistry {
    /// The standard catalog.
    pub fn standard() -> Result<Self, RegistryError> {
        RegistryBuilder::new()
            .register_all(catalog::standard_cards())
            .build()
    }

    /// Get a card definition by ID.
    #[must_use]
    pub fn get(&self, id: CardId) -> Option<&CardDefinition> {
        self.cards.get(&id)
    }

    /// Get a card definition by ID, reporting `UnknownCard` if absent.
    pub fn lookup(&self, id: CardId) -> Result<&CardDefinition, EngineError> {
        self.cards.get(&id).ok_or(EngineError::UnknownCard(id))
    }

    /// Check if a card ID is registered.
    #[must_use]
    pub fn contains(&self, id: CardId) -> bool {
        self.cards.contains_key(&id)
    }

    /// Get the number of registered cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate over all card definitions (unordered).
    pub fn iter(&self) -> impl Iterator<Item = &CardDefinition> {
        self.cards.values()
    }

    /// Find cards by type.
    pub fn find_by_type(&self, card_type: CardType) -> impl Iterator<Item = &CardDefinition> {
        self.cards.values().filter(move |c| c.card_type == card_type)
    }

    /// Find cards carrying a tag.
    pub fn find_by_tag<'a>(&'a self, tag: &'a str) -> impl Iterator<Item = &'a CardDefinition> {
        self.cards.values().filter(move |c| c.has_tag(tag))
    }

    /// Find a card by its display name.
    #[must_use]
    pub fn find_by_name(&self, name: &str) -> Option<&CardDefinition> {
        self.cards.values().find(|c| c.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::effects::Effect;

    fn card(id: u32, name: &str, card_type: CardType) -> CardDefinition {
        CardDefinition::new(CardId::new(id), name, card_type)
    }

    #[test]
    fn test_register_and_get() {
        let registry = RegistryBuilder::new()
            .register(card(1, "Test Card", CardType::Skill))
            .build()
            .unwrap();

        let found = registry.get(CardId::new(1));
        assert!(found.is_some());
        assert_eq!(found.unwrap().name, "Test Card");

        assert!(registry.get(CardId::new(99)).is_none());
        assert_eq!(
            registry.lookup(CardId::new(99)).unwrap_err(),
            EngineError::UnknownCard(CardId::new(99))
        );
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let result = RegistryBuilder::new()
            .register(card(1, "Card A", CardType::Skill))
            .register(card(1, "Card B", CardType::Skill))
            .build();

        assert_eq!(result.unwrap_err(), RegistryError::DuplicateCard(CardId::new(1)));
    }

    #[test]
    fn test_dangling_reference_rejected() {
        let result = RegistryBuilder::new()
            .register(
                card(1, "Maker", CardType::Skill)
                    .with_on_play(Effect::create(CardId::new(2))),
            )
            .build();

        assert_eq!(
            result.unwrap_err(),
            RegistryError::DanglingReference {
                card: CardId::new(1),
                missing: CardId::new(2),
            }
        );
    }

    #[test]
    fn test_find_by_type_and_tag() {
        let registry = RegistryBuilder::new()
            .register(card(1, "Hero", CardType::Skill).with_tag("Character"))
            .register(card(2, "Twist", CardType::Idea).with_tag("Plot"))
            .register(card(3, "Villain", CardType::Skill).with_tag("Character"))
            .build()
            .unwrap();

        assert_eq!(registry.find_by_type(CardType::Skill).count(), 2);
        assert_eq!(registry.find_by_type(CardType::Flaw).count(), 0);
        assert_eq!(registry.find_by_tag("Character").count(), 2);
        assert_eq!(registry.find_by_name("Twist").map(|c| c.id), Some(CardId::new(2)));
        assert!(registry.find_by_name("Missing").is_none());
    }

    #[test]
    fn test_standard_catalog() {
        let registry = CardRegistry::standard().unwrap();
        assert_eq!(registry.len(), catalog::standard_cards().len());
        assert!(registry.contains(catalog::SPARK));
        assert!(registry.contains(catalog::ROUGH_DRAFT));
        assert!(registry.contains(catalog::DOUBT));
        assert!(!registry.is_empty());
    }
}
