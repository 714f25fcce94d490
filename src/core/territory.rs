//! Territories: the nodes of the board.
//!
//! ## Control
//!
//! Corporate influence (0-100) decides who controls a territory:
//!
//! | influence   | result                                   |
//! |-------------|------------------------------------------|
//! | `> 60`      | plurality corporation, else Weyland       |
//! | `40..=60`   | contested, no controller                  |
//! | `< 40`      | plurality runner, else Anarch             |
//!
//! Plurality counts installations owned by factions of the controlling
//! camp. Ties go to the lowest `FactionId`.
//!
//! ## Attributes
//!
//! Attribute fields are private so every write goes through a clamping
//! path. `AttributeValues` is the plain, unclamped form used by configs.

use std::collections::BTreeMap;

use im::Vector;
use serde::{Deserialize, Serialize};

use super::faction::{Camp, FactionId};
use crate::effects::{Installation, InstallationId};

/// Above this corporate influence, the corporations control a territory.
pub const CORPORATE_CONTROL_THRESHOLD: i64 = 60;

/// Below this corporate influence, the runners control a territory.
pub const RUNNER_CONTROL_THRESHOLD: i64 = 40;

/// Controller of a corporate-held territory with no corporate installations.
pub const DEFAULT_CORPORATION: FactionId = FactionId::Weyland;

/// Controller of a runner-held territory with no runner installations.
pub const DEFAULT_RUNNER: FactionId = FactionId::Anarch;

/// Territory identifier.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TerritoryId(pub String);

impl TerritoryId {
    /// Create a new territory ID.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the ID as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for TerritoryId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for TerritoryId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl std::fmt::Display for TerritoryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Territory category.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TerritoryKind {
    /// Corporate district: offices, data centers, banks.
    Corporate,
    /// Everything else.
    #[default]
    Neutral,
}

/// A territory attribute.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Attribute {
    /// Corporate influence, 0-100.
    CorporateInfluence,
    /// Security level, 0-5.
    SecurityLevel,
    /// Resource value, non-negative.
    ResourceValue,
    /// Stability index, non-negative.
    StabilityIndex,
    /// Population, non-negative.
    Population,
}

impl Attribute {
    /// Every attribute.
    pub const ALL: [Attribute; 5] = [
        Attribute::CorporateInfluence,
        Attribute::SecurityLevel,
        Attribute::ResourceValue,
        Attribute::StabilityIndex,
        Attribute::Population,
    ];

    /// Inclusive lower bound and optional upper bound.
    #[must_use]
    pub const fn bounds(self) -> (i64, Option<i64>) {
        match self {
            Attribute::CorporateInfluence => (0, Some(100)),
            Attribute::SecurityLevel => (0, Some(5)),
            Attribute::ResourceValue | Attribute::StabilityIndex | Attribute::Population => {
                (0, None)
            }
        }
    }

    /// Clamp a raw value into this attribute's bounds.
    #[must_use]
    pub fn clamp(self, value: i64) -> i64 {
        let (min, max) = self.bounds();
        let value = value.max(min);
        max.map_or(value, |max| value.min(max))
    }
}

/// Unclamped attribute values, as written in setup configs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct AttributeValues {
    /// Corporate influence.
    pub corporate_influence: i64,
    /// Security level.
    pub security_level: i64,
    /// Resource value.
    pub resource_value: i64,
    /// Stability index.
    pub stability_index: i64,
    /// Population.
    pub population: i64,
}

/// Territory attributes, always within bounds.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "AttributeValues", into = "AttributeValues")]
pub struct Attributes {
    corporate_influence: i64,
    security_level: i64,
    resource_value: i64,
    stability_index: i64,
    population: i64,
}

impl From<AttributeValues> for Attributes {
    fn from(v: AttributeValues) -> Self {
        Self {
            corporate_influence: Attribute::CorporateInfluence.clamp(v.corporate_influence),
            security_level: Attribute::SecurityLevel.clamp(v.security_level),
            resource_value: Attribute::ResourceValue.clamp(v.resource_value),
            stability_index: Attribute::StabilityIndex.clamp(v.stability_index),
            population: Attribute::Population.clamp(v.population),
        }
    }
}

impl From<Attributes> for AttributeValues {
    fn from(a: Attributes) -> Self {
        Self {
            corporate_influence: a.corporate_influence,
            security_level: a.security_level,
            resource_value: a.resource_value,
            stability_index: a.stability_index,
            population: a.population,
        }
    }
}

impl Attributes {
    /// Create clamped attributes.
    #[must_use]
    pub fn new(values: AttributeValues) -> Self {
        values.into()
    }

    /// Get an attribute value.
    #[must_use]
    pub const fn get(&self, attribute: Attribute) -> i64 {
        match attribute {
            Attribute::CorporateInfluence => self.corporate_influence,
            Attribute::SecurityLevel => self.security_level,
            Attribute::ResourceValue => self.resource_value,
            Attribute::StabilityIndex => self.stability_index,
            Attribute::Population => self.population,
        }
    }

    fn slot(&mut self, attribute: Attribute) -> &mut i64 {
        match attribute {
            Attribute::CorporateInfluence => &mut self.corporate_influence,
            Attribute::SecurityLevel => &mut self.security_level,
            Attribute::ResourceValue => &mut self.resource_value,
            Attribute::StabilityIndex => &mut self.stability_index,
            Attribute::Population => &mut self.population,
        }
    }

    /// Set an attribute, clamped. Returns the stored value.
    pub fn set(&mut self, attribute: Attribute, value: i64) -> i64 {
        let value = attribute.clamp(value);
        *self.slot(attribute) = value;
        value
    }

    /// Add `delta` to an attribute, clamped. Returns the new value.
    pub fn adjust(&mut self, attribute: Attribute, delta: i64) -> i64 {
        self.set(attribute, self.get(attribute).saturating_add(delta))
    }

    /// Add `delta` with an extra lower floor: `max(floor, old + delta)`,
    /// then the attribute's own bounds. Returns the new value.
    ///
    /// The floor applies even when it raises the value.
    pub fn adjust_with_floor(&mut self, attribute: Attribute, delta: i64, floor: i64) -> i64 {
        let raw = self.get(attribute).saturating_add(delta).max(floor);
        self.set(attribute, raw)
    }

    /// Corporate influence.
    #[must_use]
    pub const fn corporate_influence(&self) -> i64 {
        self.corporate_influence
    }

    /// Security level.
    #[must_use]
    pub const fn security_level(&self) -> i64 {
        self.security_level
    }

    /// Resource value.
    #[must_use]
    pub const fn resource_value(&self) -> i64 {
        self.resource_value
    }

    /// Stability index.
    #[must_use]
    pub const fn stability_index(&self) -> i64 {
        self.stability_index
    }

    /// Population.
    #[must_use]
    pub const fn population(&self) -> i64 {
        self.population
    }
}

/// A location on the game board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Territory {
    /// Territory identifier.
    pub id: TerritoryId,

    /// Display name.
    pub name: String,

    /// Category.
    #[serde(default)]
    pub kind: TerritoryKind,

    /// Current attributes.
    #[serde(default)]
    pub attributes: Attributes,

    /// Installed effects, in installation order.
    #[serde(default)]
    pub installations: Vector<Installation>,

    /// Neighbouring territory IDs (directional).
    #[serde(default)]
    pub adjacent: Vec<TerritoryId>,
}

impl Territory {
    /// Create a neutral territory with zeroed attributes.
    pub fn new(id: impl Into<TerritoryId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind: TerritoryKind::Neutral,
            attributes: Attributes::default(),
            installations: Vector::new(),
            adjacent: Vec::new(),
        }
    }

    /// Set the category (builder pattern).
    #[must_use]
    pub fn with_kind(mut self, kind: TerritoryKind) -> Self {
        self.kind = kind;
        self
    }

    /// Set an attribute, clamped (builder pattern).
    #[must_use]
    pub fn with_attribute(mut self, attribute: Attribute, value: i64) -> Self {
        self.attributes.set(attribute, value);
        self
    }

    /// Add a neighbour (builder pattern).
    #[must_use]
    pub fn adjacent_to(mut self, neighbor: impl Into<TerritoryId>) -> Self {
        self.adjacent.push(neighbor.into());
        self
    }

    /// Add an installation (builder pattern, for setup).
    #[must_use]
    pub fn with_installation(mut self, installation: Installation) -> Self {
        self.installations.push_back(installation);
        self
    }

    /// Corporate influence.
    #[must_use]
    pub fn corporate_influence(&self) -> i64 {
        self.attributes.corporate_influence()
    }

    /// Runner influence: `100 - corporate_influence`.
    #[must_use]
    pub fn runner_influence(&self) -> i64 {
        100 - self.attributes.corporate_influence()
    }

    /// Is the territory in the contested band (40..=60)?
    #[must_use]
    pub fn is_contested(&self) -> bool {
        (RUNNER_CONTROL_THRESHOLD..=CORPORATE_CONTROL_THRESHOLD)
            .contains(&self.attributes.corporate_influence())
    }

    /// The camp holding the territory, or `None` when contested.
    #[must_use]
    pub fn controlling_camp(&self) -> Option<Camp> {
        let influence = self.attributes.corporate_influence();
        if influence > CORPORATE_CONTROL_THRESHOLD {
            Some(Camp::Corporation)
        } else if influence < RUNNER_CONTROL_THRESHOLD {
            Some(Camp::Runner)
        } else {
            None
        }
    }

    /// The faction controlling the territory, or `None` when contested.
    ///
    /// Ties between factions with equal installation counts go to the
    /// lowest `FactionId`.
    #[must_use]
    pub fn controlling_faction(&self) -> Option<FactionId> {
        let camp = self.controlling_camp()?;
        let fallback = match camp {
            Camp::Corporation => DEFAULT_CORPORATION,
            Camp::Runner => DEFAULT_RUNNER,
        };
        Some(self.plurality_faction(camp).unwrap_or(fallback))
    }

    /// The faction of `camp` with the most installations here.
    #[must_use]
    pub fn plurality_faction(&self, camp: Camp) -> Option<FactionId> {
        let mut counts: BTreeMap<FactionId, usize> = BTreeMap::new();
        for inst in self.installations_of(camp) {
            *counts.entry(inst.faction).or_insert(0) += 1;
        }

        // BTreeMap iterates in FactionId order; strict > keeps the lowest on ties.
        let mut best: Option<(FactionId, usize)> = None;
        for (faction, count) in counts {
            if best.map_or(true, |(_, max)| count > max) {
                best = Some((faction, count));
            }
        }
        best.map(|(faction, _)| faction)
    }

    /// Installations owned by factions of `camp`.
    pub fn installations_of(&self, camp: Camp) -> impl Iterator<Item = &Installation> {
        self.installations.iter().filter(move |i| i.camp() == camp)
    }

    /// Look up an installation by ID.
    #[must_use]
    pub fn installation(&self, id: InstallationId) -> Option<&Installation> {
        self.installations.iter().find(|i| i.id == id)
    }

    /// Is `other` in this territory's adjacency list?
    #[must_use]
    pub fn is_adjacent_to(&self, other: &TerritoryId) -> bool {
        self.adjacent.contains(other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::effects::InstallationKind;

    fn with_influence(influence: i64) -> Territory {
        Territory::new("downtown", "Downtown").with_attribute(Attribute::CorporateInfluence, influence)
    }

    fn install(id: u64, faction: FactionId) -> Installation {
        Installation::new(InstallationId::new(id), faction, InstallationKind::Infrastructure)
    }

    #[test]
    fn test_runner_influence() {
        assert_eq!(with_influence(0).runner_influence(), 100);
        assert_eq!(with_influence(70).runner_influence(), 30);
        assert_eq!(with_influence(100).runner_influence(), 0);
    }

    #[test]
    fn test_contested_boundaries() {
        assert!(!with_influence(39).is_contested());
        assert!(with_influence(40).is_contested());
        assert!(with_influence(50).is_contested());
        assert!(with_influence(60).is_contested());
        assert!(!with_influence(61).is_contested());

        assert_eq!(with_influence(40).controlling_faction(), None);
        assert_eq!(with_influence(60).controlling_faction(), None);
    }

    #[test]
    fn test_default_controllers() {
        assert_eq!(with_influence(61).controlling_faction(), Some(DEFAULT_CORPORATION));
        assert_eq!(with_influence(39).controlling_faction(), Some(DEFAULT_RUNNER));
    }

    #[test]
    fn test_plurality_corporation() {
        let territory = with_influence(80)
            .with_installation(install(1, FactionId::Nbn))
            .with_installation(install(2, FactionId::Nbn))
            .with_installation(install(3, FactionId::Jinteki))
            // Runner installations don't count toward corporate control
            .with_installation(install(4, FactionId::Criminal))
            .with_installation(install(5, FactionId::Criminal))
            .with_installation(install(6, FactionId::Criminal));

        assert_eq!(territory.controlling_faction(), Some(FactionId::Nbn));
    }

    #[test]
    fn test_plurality_tie_goes_to_lowest_id() {
        let territory = with_influence(90)
            .with_installation(install(1, FactionId::Weyland))
            .with_installation(install(2, FactionId::Jinteki))
            .with_installation(install(3, FactionId::HaasBioroid))
            .with_installation(install(4, FactionId::Weyland))
            .with_installation(install(5, FactionId::HaasBioroid));

        assert_eq!(territory.controlling_faction(), Some(FactionId::HaasBioroid));
    }

    #[test]
    fn test_plurality_runner() {
        let territory = with_influence(10)
            .with_installation(install(1, FactionId::Shaper))
            .with_installation(install(2, FactionId::Weyland))
            .with_installation(install(3, FactionId::Weyland));

        assert_eq!(territory.controlling_faction(), Some(FactionId::Shaper));
    }

    #[test]
    fn test_attributes_clamp() {
        let mut attrs = Attributes::new(AttributeValues {
            corporate_influence: 150,
            security_level: 9,
            resource_value: -3,
            stability_index: 40,
            population: 12,
        });

        assert_eq!(attrs.corporate_influence(), 100);
        assert_eq!(attrs.security_level(), 5);
        assert_eq!(attrs.resource_value(), 0);

        assert_eq!(attrs.adjust(Attribute::CorporateInfluence, -250), 0);
        assert_eq!(attrs.adjust(Attribute::SecurityLevel, 1), 5);
        assert_eq!(attrs.adjust(Attribute::StabilityIndex, 1000), 1040);
    }

    #[test]
    fn test_adjust_with_floor() {
        let mut attrs = Attributes::default();

        // Floor lifts a zero value
        assert_eq!(attrs.adjust_with_floor(Attribute::Population, -1, 1), 1);

        attrs.set(Attribute::ResourceValue, 4);
        assert_eq!(attrs.adjust_with_floor(Attribute::ResourceValue, -1, 1), 3);
    }

    #[test]
    fn test_attributes_deserialize_clamps() {
        let json = r#"{"corporate_influence": 120, "security_level": -2}"#;
        let attrs: Attributes = serde_json::from_str(json).unwrap();

        assert_eq!(attrs.corporate_influence(), 100);
        assert_eq!(attrs.security_level(), 0);
        assert_eq!(attrs.population(), 0);
    }

    #[test]
    fn test_adjacency_is_directional() {
        let a = Territory::new("a", "A").adjacent_to("b");
        let b = Territory::new("b", "B");

        assert!(a.is_adjacent_to(&b.id));
        assert!(!b.is_adjacent_to(&a.id));
    }
}
