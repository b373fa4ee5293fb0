//! Read-only hand projection for presentation layers.
//!
//! A `HandCard` is an owned copy of a definition's display fields plus the
//! card's current 1-based position in the hand. It shares nothing with the
//! registry, and it goes stale as soon as the hand's order changes.

use serde::{Deserialize, Serialize};

use super::definition::{CardDefinition, CardId, CardType, Tags};

/// One card in a hand snapshot.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandCard {
    /// 1-based position in the hand; pass to `play_card`.
    pub instance_id: usize,
    pub id: CardId,
    pub name: String,
    pub card_type: CardType,
    pub tags: Tags,
    pub description: String,
    pub inspiration_cost: u32,
    pub ink_cost: Option<u32>,
    /// Tag the previous card must carry for this card's bonus, if any.
    pub cohesion_tag: Option<String>,
}

impl HandCard {
    /// Copy a definition's fields for the card at `instance_id`.
    #[must_use]
    pub fn project(definition: &CardDefinition, instance_id: usize) -> Self {
        Self {
            instance_id,
            id: definition.id,
            name: definition.name.clone(),
            card_type: definition.card_type,
            tags: definition.tags.clone(),
            description: definition.description.clone(),
            inspiration_cost: definition.inspiration_cost,
            ink_cost: definition.ink_cost,
            cohesion_tag: definition.cohesion.as_ref().map(|c| c.required_tag.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{catalog, CardRegistry};

    #[test]
    fn test_project_copies_fields() {
        let registry = CardRegistry::standard().unwrap();
        let twist = registry.get(catalog::PLOT_TWIST).unwrap();

        let mut snapshot = HandCard::project(twist, 2);
        assert_eq!(snapshot.instance_id, 2);
        assert_eq!(snapshot.name, "Plot Twist");
        assert_eq!(snapshot.card_type, CardType::Idea);
        assert_eq!(snapshot.cohesion_tag.as_deref(), Some("Character"));

        // Editing the copy leaves the registry untouched
        snapshot.name.push_str(" (edited)");
        snapshot.tags.push("Extra".to_string());
        let stored = registry.get(catalog::PLOT_TWIST).unwrap();
        assert_eq!(stored.name, "Plot Twist");
        assert_eq!(stored.tags.len(), 1);
    }

    #[test]
    fn test_serializes_for_display() {
        let registry = CardRegistry::standard().unwrap();
        let spark = HandCard::project(registry.get(catalog::SPARK).unwrap(), 1);
        let json = serde_json::to_value(&spark).unwrap();
        assert_eq!(json["instance_id"], 1);
        assert_eq!(json["name"], "Spark");
        assert_eq!(json["card_type"], "Skill");
    }
}
