//! Board setup configuration.
//!
//! Games describe their starting board with a `BoardConfig`:
//! - `TerritoryConfig`: one board node with attributes and neighbours
//! - `FactionConfig`: one faction with its starting ledger
//!
//! Configs are plain serde data (usually JSON) and are validated before a
//! `GameContext` is built from them. Attribute values are clamped on load.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::context::GameContext;
use super::faction::{DeckSummary, Faction, FactionId};
use super::territory::{AttributeValues, Attributes, Territory, TerritoryId, TerritoryKind};
use crate::error::ConfigError;

/// Starting configuration for one territory.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TerritoryConfig {
    /// Territory ID.
    pub id: TerritoryId,

    /// Display name. Defaults to the ID.
    #[serde(default)]
    pub name: Option<String>,

    /// Category.
    #[serde(default)]
    pub kind: TerritoryKind,

    /// Starting attributes (clamped on load).
    #[serde(default)]
    pub attributes: AttributeValues,

    /// Neighbour IDs.
    #[serde(default)]
    pub adjacent: Vec<TerritoryId>,
}

impl TerritoryConfig {
    /// Create a neutral territory config.
    pub fn new(id: impl Into<TerritoryId>) -> Self {
        Self {
            id: id.into(),
            name: None,
            kind: TerritoryKind::Neutral,
            attributes: AttributeValues::default(),
            adjacent: Vec::new(),
        }
    }

    /// Set the category.
    #[must_use]
    pub fn with_kind(mut self, kind: TerritoryKind) -> Self {
        self.kind = kind;
        self
    }

    /// Set the starting attributes.
    #[must_use]
    pub fn with_attributes(mut self, attributes: AttributeValues) -> Self {
        self.attributes = attributes;
        self
    }

    /// Add a neighbour.
    #[must_use]
    pub fn adjacent_to(mut self, neighbor: impl Into<TerritoryId>) -> Self {
        self.adjacent.push(neighbor.into());
        self
    }

    fn build(self) -> Territory {
        let name = self.name.unwrap_or_else(|| self.id.to_string());
        let mut territory = Territory::new(self.id, name).with_kind(self.kind);
        territory.attributes = Attributes::new(self.attributes);
        territory.adjacent = self.adjacent;
        territory
    }
}

/// Starting configuration for one faction.
///
/// The camp always follows the faction ID. Unknown keys (such as a
/// `camp` entry) are rejected.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FactionConfig {
    /// Faction ID.
    pub id: FactionId,

    /// Starting resources.
    #[serde(default)]
    pub resources: Vec<(String, i64)>,

    /// Starting deck summary.
    #[serde(default)]
    pub deck: DeckSummary,

    /// Starting tags.
    #[serde(default)]
    pub tags: u32,
}

impl FactionConfig {
    /// Create a faction config with an empty ledger.
    #[must_use]
    pub fn new(id: FactionId) -> Self {
        Self {
            id,
            resources: Vec::new(),
            deck: DeckSummary::default(),
            tags: 0,
        }
    }

    /// Add a starting resource.
    #[must_use]
    pub fn with_resource(mut self, key: impl Into<String>, amount: i64) -> Self {
        self.resources.push((key.into(), amount));
        self
    }

    fn build(self) -> Faction {
        let mut faction = Faction::new(self.id).with_tags(self.tags);
        faction.deck = self.deck;
        for (key, amount) in self.resources {
            faction = faction.with_resource(key, amount);
        }
        faction
    }
}

/// Complete starting board.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardConfig {
    /// Territories.
    #[serde(default)]
    pub territories: Vec<TerritoryConfig>,

    /// Factions.
    #[serde(default)]
    pub factions: Vec<FactionConfig>,

    /// Faction taking the first turn.
    #[serde(default)]
    pub active_faction: Option<FactionId>,
}

impl BoardConfig {
    /// Create an empty config.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a config from JSON.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Add a territory.
    #[must_use]
    pub fn with_territory(mut self, territory: TerritoryConfig) -> Self {
        self.territories.push(territory);
        self
    }

    /// Add a faction.
    #[must_use]
    pub fn with_faction(mut self, faction: FactionConfig) -> Self {
        self.factions.push(faction);
        self
    }

    /// Check IDs and references.
    ///
    /// Adjacency may be asymmetric but must point at existing territories.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut territory_ids = FxHashSet::default();
        for t in &self.territories {
            if !territory_ids.insert(&t.id) {
                return Err(ConfigError::DuplicateTerritory(t.id.clone()));
            }
        }

        for t in &self.territories {
            if let Some(neighbor) = t.adjacent.iter().find(|n| !territory_ids.contains(n)) {
                return Err(ConfigError::UnknownAdjacency {
                    territory: t.id.clone(),
                    neighbor: neighbor.clone(),
                });
            }
        }

        let mut faction_ids = FxHashSet::default();
        for f in &self.factions {
            if !faction_ids.insert(f.id) {
                return Err(ConfigError::DuplicateFaction(f.id));
            }
        }

        if let Some(active) = self.active_faction {
            if !faction_ids.contains(&active) {
                return Err(ConfigError::UnknownActiveFaction(active));
            }
        }

        Ok(())
    }

    /// Validate and build a game context.
    pub fn build(self) -> Result<GameContext, ConfigError> {
        self.validate()?;
        debug!(
            territories = self.territories.len(),
            factions = self.factions.len(),
            "building game context from config"
        );

        let mut context = GameContext::new();
        context.active_faction = self.active_faction;
        for t in self.territories {
            context.insert_territory(t.build());
        }
        for f in self.factions {
            context.insert_faction(f.build());
        }
        Ok(context)
    }
}

impl GameContext {
    /// Build a context from a validated board config.
    pub fn from_config(config: BoardConfig) -> Result<Self, ConfigError> {
        config.build()
    }
}
