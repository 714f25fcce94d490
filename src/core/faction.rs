//! Factions, camps, and the per-faction resource ledger.
//!
//! ## FactionId
//!
//! The seven playable factions. Each has a home [`Camp`]; corporations
//! and runners play by different rules (only runners take damage and tags).
//!
//! `FactionId` is ordered by its string id (`anarch` < `criminal` < ... <
//! `weyland`). Control tallies use this order to break ties.
//!
//! ## Faction
//!
//! Resources are an open map from name to amount, so cards can introduce
//! new resource kinds without schema changes. Well-known keys live in
//! [`resources`].

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Well-known resource keys.
pub mod resources {
    /// Spendable currency. Every catalog card costs credits.
    pub const CREDITS: &str = "credits";
    /// Runner data tokens, lost one at a time when damaged.
    pub const DATA_TOKENS: &str = "dataTokens";
    /// Runner influence pool, lost one at a time when damaged.
    pub const INFLUENCE: &str = "influence";
}

/// Side of the table a faction plays on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Camp {
    /// Megacorps defending and extending their networks.
    Corporation,
    /// Hackers eroding corporate control.
    Runner,
}

impl Camp {
    /// The camp on the other side of the table.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Camp::Corporation => Camp::Runner,
            Camp::Runner => Camp::Corporation,
        }
    }
}

impl std::fmt::Display for Camp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Camp::Corporation => f.write_str("corporation"),
            Camp::Runner => f.write_str("runner"),
        }
    }
}

/// Faction identifier.
///
/// Variants are declared in lexicographic order of their string ids so the
/// derived `Ord` matches string ordering.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FactionId {
    /// Anarch runners.
    Anarch,
    /// Criminal runners.
    Criminal,
    /// Haas-Bioroid corporation.
    HaasBioroid,
    /// Jinteki corporation.
    Jinteki,
    /// NBN corporation.
    Nbn,
    /// Shaper runners.
    Shaper,
    /// Weyland Consortium corporation.
    Weyland,
}

impl FactionId {
    /// Every faction, in id order.
    pub const ALL: [FactionId; 7] = [
        FactionId::Anarch,
        FactionId::Criminal,
        FactionId::HaasBioroid,
        FactionId::Jinteki,
        FactionId::Nbn,
        FactionId::Shaper,
        FactionId::Weyland,
    ];

    /// The camp this faction belongs to.
    #[must_use]
    pub const fn camp(self) -> Camp {
        match self {
            FactionId::HaasBioroid | FactionId::Jinteki | FactionId::Nbn | FactionId::Weyland => {
                Camp::Corporation
            }
            FactionId::Anarch | FactionId::Criminal | FactionId::Shaper => Camp::Runner,
        }
    }

    /// The string id used in card data and configs.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            FactionId::Anarch => "anarch",
            FactionId::Criminal => "criminal",
            FactionId::HaasBioroid => "haas_bioroid",
            FactionId::Jinteki => "jinteki",
            FactionId::Nbn => "nbn",
            FactionId::Shaper => "shaper",
            FactionId::Weyland => "weyland",
        }
    }

    /// Parse a string id.
    #[must_use]
    pub fn parse(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.as_str() == id)
    }
}

impl std::fmt::Display for FactionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Public deck information.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DeckSummary {
    /// Cards remaining in the deck.
    pub size: u32,
    /// Cards currently in hand.
    pub hand_count: u32,
}

/// A player faction and its ledger.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Faction {
    /// Faction identifier. Also fixes the camp.
    pub id: FactionId,

    /// Resource amounts by name (credits, dataTokens, ...).
    #[serde(default)]
    pub resources: FxHashMap<String, i64>,

    /// Victory-progress counters by name.
    #[serde(default)]
    pub victory_progress: FxHashMap<String, i64>,

    /// Deck summary.
    #[serde(default)]
    pub deck: DeckSummary,

    /// Tag counter. Only runners accumulate tags.
    #[serde(default)]
    pub tags: u32,
}

impl Faction {
    /// Create a faction with an empty ledger.
    #[must_use]
    pub fn new(id: FactionId) -> Self {
        Self {
            id,
            resources: FxHashMap::default(),
            victory_progress: FxHashMap::default(),
            deck: DeckSummary::default(),
            tags: 0,
        }
    }

    /// Set a starting resource amount (builder pattern).
    #[must_use]
    pub fn with_resource(mut self, key: impl Into<String>, amount: i64) -> Self {
        self.resources.insert(key.into(), amount.max(0));
        self
    }

    /// Set the deck summary (builder pattern).
    #[must_use]
    pub fn with_deck(mut self, size: u32, hand_count: u32) -> Self {
        self.deck = DeckSummary { size, hand_count };
        self
    }

    /// Set the starting tag count (builder pattern).
    #[must_use]
    pub fn with_tags(mut self, tags: u32) -> Self {
        self.tags = tags;
        self
    }

    /// Get a resource amount, 0 if never set.
    #[must_use]
    pub fn resource(&self, key: &str) -> i64 {
        self.resources.get(key).copied().unwrap_or(0)
    }

    /// Get a victory-progress counter, 0 if never set.
    #[must_use]
    pub fn progress(&self, key: &str) -> i64 {
        self.victory_progress.get(key).copied().unwrap_or(0)
    }

    /// Camp this faction plays for.
    ///
    /// Always the id's home camp, so the ledger and the faction's
    /// installations never disagree.
    #[must_use]
    pub const fn camp(&self) -> Camp {
        self.id.camp()
    }

    /// Is this faction playing for the runners?
    #[must_use]
    pub fn is_runner(&self) -> bool {
        self.camp() == Camp::Runner
    }

    /// Does this faction hold at least one tag?
    #[must_use]
    pub fn is_tagged(&self) -> bool {
        self.tags > 0
    }

    /// Add `delta` to a resource, flooring at 0. Returns the new amount.
    pub(crate) fn adjust_resource(&mut self, key: &str, delta: i64) -> i64 {
        let amount = self.resource(key).saturating_add(delta).max(0);
        self.resources.insert(key.to_string(), amount);
        amount
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_faction_id_order_matches_strings() {
        let mut by_enum = FactionId::ALL.to_vec();
        by_enum.sort();
        let mut by_str = FactionId::ALL.to_vec();
        by_str.sort_by_key(|f| f.as_str());
        assert_eq!(by_enum, by_str);
    }

    #[test]
    fn test_faction_camps() {
        assert_eq!(FactionId::Weyland.camp(), Camp::Corporation);
        assert_eq!(FactionId::Nbn.camp(), Camp::Corporation);
        assert_eq!(FactionId::HaasBioroid.camp(), Camp::Corporation);
        assert_eq!(FactionId::Jinteki.camp(), Camp::Corporation);
        assert_eq!(FactionId::Anarch.camp(), Camp::Runner);
        assert_eq!(FactionId::Criminal.camp(), Camp::Runner);
        assert_eq!(FactionId::Shaper.camp(), Camp::Runner);
        assert_eq!(Camp::Runner.opponent(), Camp::Corporation);
    }

    #[test]
    fn test_faction_id_parse() {
        assert_eq!(FactionId::parse("haas_bioroid"), Some(FactionId::HaasBioroid));
        assert_eq!(FactionId::parse("criminal"), Some(FactionId::Criminal));
        assert_eq!(FactionId::parse("umbrella"), None);
        assert_eq!(format!("{}", FactionId::Nbn), "nbn");
    }

    #[test]
    fn test_resource_defaults_and_floor() {
        let mut faction = Faction::new(FactionId::Criminal).with_resource(resources::CREDITS, 5);

        assert_eq!(faction.resource(resources::CREDITS), 5);
        assert_eq!(faction.resource("unknown"), 0);

        assert_eq!(faction.adjust_resource(resources::CREDITS, -7), 0);
        assert_eq!(faction.adjust_resource(resources::CREDITS, 4), 4);
    }

    #[test]
    fn test_faction_serialization() {
        let faction = Faction::new(FactionId::Shaper)
            .with_resource(resources::CREDITS, 3)
            .with_deck(30, 5)
            .with_tags(1);

        let json = serde_json::to_string(&faction).unwrap();
        let deserialized: Faction = serde_json::from_str(&json).unwrap();

        assert_eq!(faction, deserialized);
        assert!(json.contains("\"shaper\""));
    }
}
