//! The built-in card table.

use super::definition::{CardDefinition, CardId, CardType, Cohesion};
use crate::core::Resource;
use crate::effects::Effect;

pub const SPARK: CardId = CardId::new(1);
pub const ROUGH_DRAFT: CardId = CardId::new(2);
pub const DOUBT: CardId = CardId::new(3);
pub const PROTAGONIST: CardId = CardId::new(4);
pub const PLOT_TWIST: CardId = CardId::new(5);
pub const WORLDBUILDING: CardId = CardId::new(6);
pub const INKWELL: CardId = CardId::new(7);
pub const RIVAL: CardId = CardId::new(8);

/// Every card in the standard catalog, in id order.
#[must_use]
pub fn standard_cards() -> Vec<CardDefinition> {
    vec![
        CardDefinition::new(SPARK, "Spark", CardType::Skill)
            .with_tag("Basic")
            .with_description("Gain 1 Inspiration.")
            .with_on_play(Effect::gain(Resource::Inspiration, 1)),
        CardDefinition::new(ROUGH_DRAFT, "Rough Draft", CardType::Skill)
            .with_tag("Basic")
            .with_tag("Writing")
            .with_description("Gain 1 Inspiration. Add a Doubt to your discard pile.")
            .with_on_play(Effect::batch([
                Effect::gain(Resource::Inspiration, 1),
                Effect::create(DOUBT),
            ])),
        CardDefinition::new(DOUBT, "Doubt", CardType::Flaw)
            .with_tag("Flaw")
            .with_description("Lose 1 Hype.")
            .with_on_play(Effect::spend(Resource::Hype, 1)),
        CardDefinition::new(PROTAGONIST, "Protagonist", CardType::Skill)
            .with_tag("Character")
            .with_tag("Hero")
            .with_description("Gain 1 Hype.")
            .with_inspiration_cost(2)
            .with_ink_cost(1)
            .with_on_play(Effect::gain(Resource::Hype, 1)),
        CardDefinition::new(PLOT_TWIST, "Plot Twist", CardType::Idea)
            .with_tag("Plot")
            .with_description(
                "Gain 1 Inspiration per card in hand. Cohesion (Character): draw 1 first.",
            )
            .with_inspiration_cost(3)
            .with_on_play(Effect::gain_per_card_in_hand(Resource::Inspiration))
            .with_cohesion(Cohesion::new("Character", Effect::draw(1))),
        CardDefinition::new(WORLDBUILDING, "Worldbuilding", CardType::Idea)
            .with_tag("Setting")
            .with_tag("Writing")
            .with_description("Gain 2 Ink. Cohesion (Plot): gain 1 Grit.")
            .with_inspiration_cost(2)
            .with_ink_cost(1)
            .with_on_play(Effect::gain(Resource::Ink, 2))
            .with_cohesion(Cohesion::new("Plot", Effect::gain(Resource::Grit, 1))),
        CardDefinition::new(INKWELL, "Inkwell", CardType::Skill)
            .with_tag("Writing")
            .with_tag("Tool")
            .with_description("Gain 1 Ink. Cohesion (Writing): gain 1 Inspiration.")
            .with_inspiration_cost(1)
            .with_on_play(Effect::gain(Resource::Ink, 1))
            .with_cohesion(Cohesion::new("Writing", Effect::gain(Resource::Inspiration, 1))),
        CardDefinition::new(RIVAL, "Rival", CardType::Skill)
            .with_tag("Character")
            .with_tag("Conflict")
            .with_description("Gain 2 Hype. Cohesion (Character): gain 1 Grit.")
            .with_inspiration_cost(3)
            .with_ink_cost(2)
            .with_on_play(Effect::gain(Resource::Hype, 2))
            .with_cohesion(Cohesion::new("Character", Effect::gain(Resource::Grit, 1))),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_unique_and_ordered() {
        let ids: Vec<_> = standard_cards().iter().map(|c| c.id.raw()).collect();
        assert_eq!(ids, (1..=8).collect::<Vec<_>>());
    }

    #[test]
    fn test_starter_cards_are_free() {
        for card in standard_cards() {
            if card.has_tag("Basic") {
                assert_eq!(card.inspiration_cost, 0, "{} should be free", card.name);
            }
        }
    }

    #[test]
    fn test_rough_draft_adds_doubt() {
        let cards = standard_cards();
        let draft = cards.iter().find(|c| c.id == ROUGH_DRAFT).unwrap();
        assert_eq!(draft.on_play.created_cards(), vec![DOUBT]);
    }
}
