//! The card play protocol.
//!
//! Every card variant implements [`Card`]: identity accessors plus a
//! legality check and a resolve procedure. Callers run them in order:
//!
//! 1. `can_play(context, target)`
//! 2. `resolve(context, target)`, only if step 1 returned true
//!
//! `resolve` does not re-check legality. Calling it after a failed (or
//! skipped) legality check is a precondition violation: the card may still
//! debit its cost or attach installations. Use
//! [`play_card`](crate::rules::play_card) to run both steps together.

use tracing::warn;

use super::definition::{CardDefinition, CardType, Cost};
use crate::core::{resources, FactionId, GameContext, Territory, TerritoryId};

/// A playable card variant.
///
/// The default `can_play` and `resolve` refuse everything; concrete cards
/// override both.
pub trait Card: std::fmt::Debug + Send + Sync {
    /// Static card data.
    fn definition(&self) -> &CardDefinition;

    /// Catalog ID.
    fn id(&self) -> &str {
        &self.definition().id
    }

    /// Display name.
    fn name(&self) -> &str {
        &self.definition().name
    }

    /// Card type.
    fn card_type(&self) -> CardType {
        self.definition().card_type
    }

    /// Faction that plays the card.
    fn faction(&self) -> FactionId {
        self.definition().faction
    }

    /// Play cost.
    fn cost(&self) -> Cost {
        self.definition().cost
    }

    /// Does the card act on a target territory?
    ///
    /// Cards that return false ignore the `target` argument.
    fn needs_target(&self) -> bool {
        true
    }

    /// Can the card be played against `target` right now?
    fn can_play(&self, _context: &GameContext, _target: Option<&TerritoryId>) -> bool {
        false
    }

    /// Apply the card's effect.
    ///
    /// Precondition: `can_play` returned true for the same context and
    /// target with no mutation in between.
    fn resolve(&self, _context: &mut GameContext, _target: Option<&TerritoryId>) -> bool {
        false
    }
}

/// Can the card's faction pay its fixed cost?
///
/// Variable costs are never affordable through this helper; cards with an
/// "X" cost decide their own payment.
pub(crate) fn can_afford(card: &dyn Card, context: &GameContext) -> bool {
    let Some(cost) = card.cost().fixed() else {
        return false;
    };
    context
        .resource(card.faction(), resources::CREDITS)
        .is_some_and(|credits| credits >= i64::from(cost))
}

/// Debit the card's fixed cost from its faction.
pub(crate) fn pay_cost(card: &dyn Card, context: &mut GameContext) {
    if let Some(cost) = card.cost().fixed() {
        context.modify_resource(card.faction(), resources::CREDITS, -i64::from(cost));
    }
}

/// Resolve the target territory or log the precondition violation.
pub(crate) fn require_target<'a>(
    card: &dyn Card,
    context: &'a GameContext,
    target: Option<&TerritoryId>,
) -> Option<&'a Territory> {
    let territory = target.and_then(|id| context.territory(id));
    if territory.is_none() {
        warn!(card = card.id(), target = ?target, "card resolved without a valid target");
    }
    territory
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Faction;

    #[derive(Debug)]
    struct Blank {
        definition: CardDefinition,
    }

    impl Card for Blank {
        fn definition(&self) -> &CardDefinition {
            &self.definition
        }
    }

    fn blank(cost: Cost) -> Blank {
        Blank {
            definition: CardDefinition::new("blank", "Blank", CardType::Event, FactionId::Shaper, cost),
        }
    }

    #[test]
    fn test_default_behaviour_refuses() {
        let card = blank(Cost::Fixed(0));
        let mut ctx = GameContext::new().with_faction(Faction::new(FactionId::Shaper));

        assert!(!card.can_play(&ctx, None));
        assert!(!card.resolve(&mut ctx, None));
        assert_eq!(card.id(), "blank");
        assert_eq!(card.name(), "Blank");
        assert_eq!(card.card_type(), CardType::Event);
        assert_eq!(card.faction(), FactionId::Shaper);
        assert!(card.needs_target());
    }

    #[test]
    fn test_can_afford() {
        let ctx = GameContext::new()
            .with_faction(Faction::new(FactionId::Shaper).with_resource(resources::CREDITS, 3));

        assert!(can_afford(&blank(Cost::Fixed(3)), &ctx));
        assert!(!can_afford(&blank(Cost::Fixed(4)), &ctx));
        assert!(!can_afford(&blank(Cost::Variable), &ctx));
        assert!(!can_afford(&blank(Cost::Fixed(0)), &GameContext::new()));
    }

    #[test]
    fn test_pay_cost() {
        let mut ctx = GameContext::new()
            .with_faction(Faction::new(FactionId::Shaper).with_resource(resources::CREDITS, 3));

        pay_cost(&blank(Cost::Fixed(2)), &mut ctx);
        assert_eq!(ctx.resource(FactionId::Shaper, resources::CREDITS), Some(1));

        pay_cost(&blank(Cost::Variable), &mut ctx);
        assert_eq!(ctx.resource(FactionId::Shaper, resources::CREDITS), Some(1));
    }
}
