//! Runner cards.

use super::card::{can_afford, pay_cost, require_target, Card};
use super::definition::{CardDefinition, CardType, Cost};
use crate::core::{resources, Attribute, FactionId, GameContext, TerritoryId, TerritoryKind};
use crate::effects::{CardEffect, Installation, InstallationKind};

fn target_exists(context: &GameContext, target: Option<&TerritoryId>) -> bool {
    target.is_some_and(|id| context.territory(id).is_some())
}

/// Backdoor Access: a one-turn stealth foothold that lowers security.
#[derive(Clone, Debug)]
pub struct BackdoorAccess {
    definition: CardDefinition,
}

impl BackdoorAccess {
    /// Catalog ID.
    pub const ID: &'static str = "backdoor_access";

    /// Create the card.
    #[must_use]
    pub fn new() -> Self {
        Self {
            definition: CardDefinition::new(
                Self::ID,
                "Backdoor Access",
                CardType::Event,
                FactionId::Criminal,
                Cost::Fixed(2),
            ),
        }
    }
}

impl Default for BackdoorAccess {
    fn default() -> Self {
        Self::new()
    }
}

impl Card for BackdoorAccess {
    fn definition(&self) -> &CardDefinition {
        &self.definition
    }

    fn can_play(&self, context: &GameContext, target: Option<&TerritoryId>) -> bool {
        target_exists(context, target) && can_afford(self, context)
    }

    fn resolve(&self, context: &mut GameContext, target: Option<&TerritoryId>) -> bool {
        pay_cost(self, context);

        let Some(territory) = require_target(self, context, target).map(|t| t.id.clone()) else {
            return true;
        };

        // Symbolic only: turn logic reads the reduction while it lasts
        let stealth = Installation::new(context.next_installation_id(), self.faction(), InstallationKind::Stealth)
            .for_turns(1)
            .with_effect(CardEffect::SecurityReduction { amount: 1 });
        context.install_on_territory(&territory, stealth);

        true
    }
}

/// Network Expansion: spreads runner influence from a neighbouring foothold.
#[derive(Clone, Debug)]
pub struct NetworkExpansion {
    definition: CardDefinition,
}

impl NetworkExpansion {
    /// Catalog ID.
    pub const ID: &'static str = "network_expansion";

    /// Corporate influence removed from the target.
    pub const INFLUENCE_SHIFT: i64 = 10;

    /// Create the card.
    #[must_use]
    pub fn new() -> Self {
        Self {
            definition: CardDefinition::new(
                Self::ID,
                "Network Expansion",
                CardType::Resource,
                FactionId::Criminal,
                Cost::Fixed(3),
            ),
        }
    }
}

impl Default for NetworkExpansion {
    fn default() -> Self {
        Self::new()
    }
}

impl Card for NetworkExpansion {
    fn definition(&self) -> &CardDefinition {
        &self.definition
    }

    fn can_play(&self, context: &GameContext, target: Option<&TerritoryId>) -> bool {
        let Some(target) = target.filter(|id| context.territory(id).is_some()) else {
            return false;
        };
        if !can_afford(self, context) {
            return false;
        }
        context
            .adjacent_territories(target)
            .any(|t| t.runner_influence() > 0)
    }

    fn resolve(&self, context: &mut GameContext, target: Option<&TerritoryId>) -> bool {
        pay_cost(self, context);

        let Some(territory) = require_target(self, context, target).map(|t| t.id.clone()) else {
            return true;
        };

        let installation = Installation::new(context.next_installation_id(), self.faction(), InstallationKind::Resource)
            .with_effect(CardEffect::TerritoryInfluence {
                delta: -Self::INFLUENCE_SHIFT,
            });
        context.install_on_territory(&territory, installation);
        context.modify_attribute(&territory, Attribute::CorporateInfluence, -Self::INFLUENCE_SHIFT);

        true
    }
}

/// Bank Job: rob a corporate district for twice its resource value.
#[derive(Clone, Debug)]
pub struct BankJob {
    definition: CardDefinition,
}

impl BankJob {
    /// Catalog ID.
    pub const ID: &'static str = "bank_job";

    /// Create the card.
    #[must_use]
    pub fn new() -> Self {
        Self {
            definition: CardDefinition::new(
                Self::ID,
                "Bank Job",
                CardType::Operation,
                FactionId::Criminal,
                Cost::Fixed(2),
            ),
        }
    }
}

impl Default for BankJob {
    fn default() -> Self {
        Self::new()
    }
}

impl Card for BankJob {
    fn definition(&self) -> &CardDefinition {
        &self.definition
    }

    fn can_play(&self, context: &GameContext, target: Option<&TerritoryId>) -> bool {
        let Some(territory) = target.and_then(|id| context.territory(id)) else {
            return false;
        };
        can_afford(self, context) && territory.kind == TerritoryKind::Corporate
    }

    fn resolve(&self, context: &mut GameContext, target: Option<&TerritoryId>) -> bool {
        pay_cost(self, context);

        let Some((territory, resource_value)) = require_target(self, context, target)
            .map(|t| (t.id.clone(), t.attributes.resource_value()))
        else {
            return true;
        };

        context.modify_resource(self.faction(), resources::CREDITS, resource_value.saturating_mul(2));
        context.modify_attribute(&territory, Attribute::StabilityIndex, -5);

        true
    }
}

/// Sure Gamble: pay 5, gain 9.
#[derive(Clone, Debug)]
pub struct SureGamble {
    definition: CardDefinition,
}

impl SureGamble {
    /// Catalog ID.
    pub const ID: &'static str = "sure_gamble";

    /// Credits gained after paying the cost.
    pub const PAYOUT: i64 = 9;

    /// Create the card.
    #[must_use]
    pub fn new() -> Self {
        Self {
            definition: CardDefinition::new(
                Self::ID,
                "Sure Gamble",
                CardType::Event,
                FactionId::Anarch,
                Cost::Fixed(5),
            ),
        }
    }
}

impl Default for SureGamble {
    fn default() -> Self {
        Self::new()
    }
}

impl Card for SureGamble {
    fn definition(&self) -> &CardDefinition {
        &self.definition
    }

    fn needs_target(&self) -> bool {
        false
    }

    fn can_play(&self, context: &GameContext, _target: Option<&TerritoryId>) -> bool {
        can_afford(self, context)
    }

    fn resolve(&self, context: &mut GameContext, _target: Option<&TerritoryId>) -> bool {
        pay_cost(self, context);
        context.modify_resource(self.faction(), resources::CREDITS, Self::PAYOUT);
        true
    }
}

/// Corroder: a permanent icebreaker that wears security down.
#[derive(Clone, Debug)]
pub struct Corroder {
    definition: CardDefinition,
}

impl Corroder {
    /// Catalog ID.
    pub const ID: &'static str = "corroder";

    /// Create the card.
    #[must_use]
    pub fn new() -> Self {
        Self {
            definition: CardDefinition::new(
                Self::ID,
                "Corroder",
                CardType::Program,
                FactionId::Anarch,
                Cost::Fixed(2),
            ),
        }
    }
}

impl Default for Corroder {
    fn default() -> Self {
        Self::new()
    }
}

impl Card for Corroder {
    fn definition(&self) -> &CardDefinition {
        &self.definition
    }

    fn can_play(&self, context: &GameContext, target: Option<&TerritoryId>) -> bool {
        target_exists(context, target) && can_afford(self, context)
    }

    fn resolve(&self, context: &mut GameContext, target: Option<&TerritoryId>) -> bool {
        pay_cost(self, context);

        let Some(territory) = require_target(self, context, target).map(|t| t.id.clone()) else {
            return true;
        };

        let program = Installation::new(context.next_installation_id(), self.faction(), InstallationKind::Program)
            .with_effect(CardEffect::SecurityReduction { amount: 1 });
        context.install_on_territory(&territory, program);
        context.modify_attribute(&territory, Attribute::SecurityLevel, -1);

        true
    }
}
