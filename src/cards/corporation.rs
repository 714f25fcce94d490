//! Corporation cards.

use tracing::debug;

use super::card::{can_afford, pay_cost, require_target, Card};
use super::definition::{CardDefinition, CardType, Cost};
use crate::core::{Attribute, Camp, FactionId, GameContext, TerritoryId};
use crate::effects::{CardEffect, Installation, InstallationKind};

/// Surveillance Grid: permanent monitoring that raises security and tags runners.
#[derive(Clone, Debug)]
pub struct SurveillanceGrid {
    definition: CardDefinition,
}

impl SurveillanceGrid {
    /// Catalog ID.
    pub const ID: &'static str = "surveillance_grid";

    /// Create the card.
    #[must_use]
    pub fn new() -> Self {
        Self {
            definition: CardDefinition::new(
                Self::ID,
                "Surveillance Grid",
                CardType::Infrastructure,
                FactionId::Nbn,
                Cost::Fixed(3),
            ),
        }
    }
}

impl Default for SurveillanceGrid {
    fn default() -> Self {
        Self::new()
    }
}

impl Card for SurveillanceGrid {
    fn definition(&self) -> &CardDefinition {
        &self.definition
    }

    fn can_play(&self, context: &GameContext, target: Option<&TerritoryId>) -> bool {
        target.is_some_and(|id| context.territory(id).is_some()) && can_afford(self, context)
    }

    fn resolve(&self, context: &mut GameContext, target: Option<&TerritoryId>) -> bool {
        pay_cost(self, context);

        let Some(territory) = require_target(self, context, target).map(|t| t.id.clone()) else {
            return true;
        };

        // Security caps at 5 via the attribute bounds
        context.modify_attribute(&territory, Attribute::SecurityLevel, 1);

        let grid = Installation::new(
            context.next_installation_id(),
            self.faction(),
            InstallationKind::Infrastructure,
        )
        .with_effect(CardEffect::SecurityIncrease { amount: 1 })
        .with_effect(CardEffect::RunnerTag { amount: 1 });
        context.install_on_territory(&territory, grid);

        true
    }
}

/// Scorched Earth: punishes tagged runners and razes a district.
#[derive(Clone, Debug)]
pub struct ScorchedEarth {
    definition: CardDefinition,
}

impl ScorchedEarth {
    /// Catalog ID.
    pub const ID: &'static str = "scorched_earth";

    /// Damage dealt to each runner faction.
    pub const RUNNER_DAMAGE: u32 = 3;

    /// Create the card.
    #[must_use]
    pub fn new() -> Self {
        Self {
            definition: CardDefinition::new(
                Self::ID,
                "Scorched Earth",
                CardType::Operation,
                FactionId::Weyland,
                Cost::Fixed(4),
            ),
        }
    }
}

impl Default for ScorchedEarth {
    fn default() -> Self {
        Self::new()
    }
}

impl Card for ScorchedEarth {
    fn definition(&self) -> &CardDefinition {
        &self.definition
    }

    fn can_play(&self, context: &GameContext, target: Option<&TerritoryId>) -> bool {
        target.is_some_and(|id| context.territory(id).is_some())
            && can_afford(self, context)
            && context.any_tagged_runner()
    }

    fn resolve(&self, context: &mut GameContext, target: Option<&TerritoryId>) -> bool {
        pay_cost(self, context);

        // Every runner takes damage, tagged or not
        let runners: Vec<FactionId> = context.factions_in_camp(Camp::Runner).map(|f| f.id).collect();
        for runner in runners {
            context.damage_runner(runner, Self::RUNNER_DAMAGE);
        }

        let Some(territory) = require_target(self, context, target).map(|t| t.id.clone()) else {
            return true;
        };

        let damaged = context.damage_installations(&territory, Camp::Runner);
        debug!(%territory, damaged, "scorched earth");

        context.modify_attribute(&territory, Attribute::StabilityIndex, -10);
        context.modify_attribute_floored(&territory, Attribute::ResourceValue, -1, 1);
        context.modify_attribute_floored(&territory, Attribute::Population, -1, 1);
        context.modify_attribute(&territory, Attribute::CorporateInfluence, 15);

        let aftermath = Installation::new(
            context.next_installation_id(),
            self.faction(),
            InstallationKind::Operation,
        )
        .for_turns(2)
        .with_effect(CardEffect::TerritoryInfluence { delta: 15 })
        .with_effect(CardEffect::RunnerDamageAura { amount: 1 });
        context.install_on_territory(&territory, aftermath);

        true
    }
}

/// Ice Wall: a permanent barrier on a district the runners don't hold.
#[derive(Clone, Debug)]
pub struct IceWall {
    definition: CardDefinition,
}

impl IceWall {
    /// Catalog ID.
    pub const ID: &'static str = "ice_wall";

    /// Create the card.
    #[must_use]
    pub fn new() -> Self {
        Self {
            definition: CardDefinition::new(
                Self::ID,
                "Ice Wall",
                CardType::Ice,
                FactionId::Weyland,
                Cost::Fixed(3),
            ),
        }
    }
}

impl Default for IceWall {
    fn default() -> Self {
        Self::new()
    }
}

impl Card for IceWall {
    fn definition(&self) -> &CardDefinition {
        &self.definition
    }

    fn can_play(&self, context: &GameContext, target: Option<&TerritoryId>) -> bool {
        let Some(territory) = target.and_then(|id| context.territory(id)) else {
            return false;
        };
        can_afford(self, context) && territory.controlling_camp() != Some(Camp::Runner)
    }

    fn resolve(&self, context: &mut GameContext, target: Option<&TerritoryId>) -> bool {
        pay_cost(self, context);

        let Some(territory) = require_target(self, context, target).map(|t| t.id.clone()) else {
            return true;
        };

        let ice = Installation::new(context.next_installation_id(), self.faction(), InstallationKind::Ice)
            .with_effect(CardEffect::SecurityIncrease { amount: 1 });
        context.install_on_territory(&territory, ice);
        context.modify_attribute(&territory, Attribute::SecurityLevel, 1);

        true
    }
}

/// Armed Response: damages every tagged runner. Needs no territory.
#[derive(Clone, Debug)]
pub struct ArmedResponse {
    definition: CardDefinition,
}

impl ArmedResponse {
    /// Catalog ID.
    pub const ID: &'static str = "armed_response";

    /// Damage dealt to each tagged runner.
    pub const RUNNER_DAMAGE: u32 = 2;

    /// Create the card.
    #[must_use]
    pub fn new() -> Self {
        Self {
            definition: CardDefinition::new(
                Self::ID,
                "Armed Response",
                CardType::Operation,
                FactionId::Weyland,
                Cost::Fixed(3),
            ),
        }
    }
}

impl Default for ArmedResponse {
    fn default() -> Self {
        Self::new()
    }
}

impl Card for ArmedResponse {
    fn definition(&self) -> &CardDefinition {
        &self.definition
    }

    fn needs_target(&self) -> bool {
        false
    }

    fn can_play(&self, context: &GameContext, _target: Option<&TerritoryId>) -> bool {
        can_afford(self, context) && context.any_tagged_runner()
    }

    fn resolve(&self, context: &mut GameContext, _target: Option<&TerritoryId>) -> bool {
        pay_cost(self, context);

        let tagged: Vec<FactionId> = context
            .factions_in_camp(Camp::Runner)
            .filter(|f| f.is_tagged())
            .map(|f| f.id)
            .collect();
        for runner in tagged {
            context.damage_runner(runner, Self::RUNNER_DAMAGE);
        }

        true
    }
}
