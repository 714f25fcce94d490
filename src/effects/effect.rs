//! Effect payloads carried by installations.
//!
//! A `CardEffect` is a description, not an action: the engine applies a
//! card's mechanical effect at resolution time and records the effect here
//! so turn logic can describe, expire, or re-apply it later.

use serde::{Deserialize, Serialize};

/// Value of an open-ended effect: a number or a symbolic token.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EffectValue {
    /// Numeric magnitude.
    Int(i64),
    /// Symbolic value interpreted by game logic (e.g. "X", "all").
    Symbol(String),
}

impl EffectValue {
    /// Get as integer if numeric.
    #[must_use]
    pub fn as_int(&self) -> Option<i64> {
        match self {
            EffectValue::Int(v) => Some(*v),
            EffectValue::Symbol(_) => None,
        }
    }
}

impl From<i64> for EffectValue {
    fn from(v: i64) -> Self {
        EffectValue::Int(v)
    }
}

impl From<&str> for EffectValue {
    fn from(v: &str) -> Self {
        EffectValue::Symbol(v.to_string())
    }
}

/// A persistent effect descriptor.
///
/// Built-in kinds carry a single signed magnitude. `Custom` keeps the
/// payload open for effect kinds the engine doesn't know about.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CardEffect {
    /// Lowers the territory's effective security.
    SecurityReduction { amount: i64 },

    /// Raises the territory's effective security.
    SecurityIncrease { amount: i64 },

    /// Shifts corporate influence (negative favours runners).
    TerritoryInfluence { delta: i64 },

    /// Tags runners operating in the territory.
    RunnerTag { amount: i64 },

    /// Damages runners operating in the territory each turn.
    RunnerDamageAura { amount: i64 },

    /// Any other effect kind.
    Custom {
        /// Effect kind name.
        name: String,
        /// What the effect applies to, if game logic needs it.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        target: Option<String>,
        /// Effect value.
        value: EffectValue,
        /// Condition key evaluated by game logic.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        condition: Option<String>,
        /// Action key evaluated by game logic.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        action: Option<String>,
    },
}

impl CardEffect {
    /// Create a custom effect with a value and no target/condition/action.
    pub fn custom(name: impl Into<String>, value: impl Into<EffectValue>) -> Self {
        Self::Custom {
            name: name.into(),
            target: None,
            value: value.into(),
            condition: None,
            action: None,
        }
    }

    /// The effect kind name, as used in card data.
    #[must_use]
    pub fn kind(&self) -> &str {
        match self {
            CardEffect::SecurityReduction { .. } => "security_reduction",
            CardEffect::SecurityIncrease { .. } => "security_increase",
            CardEffect::TerritoryInfluence { .. } => "territory_influence",
            CardEffect::RunnerTag { .. } => "runner_tag",
            CardEffect::RunnerDamageAura { .. } => "runner_damage_aura",
            CardEffect::Custom { name, .. } => name,
        }
    }

    /// Numeric magnitude, if this effect has one.
    #[must_use]
    pub fn magnitude(&self) -> Option<i64> {
        match self {
            CardEffect::SecurityReduction { amount }
            | CardEffect::SecurityIncrease { amount }
            | CardEffect::RunnerTag { amount }
            | CardEffect::RunnerDamageAura { amount } => Some(*amount),
            CardEffect::TerritoryInfluence { delta } => Some(*delta),
            CardEffect::Custom { value, .. } => value.as_int(),
        }
    }

    fn magnitude_mut(&mut self) -> Option<&mut i64> {
        match self {
            CardEffect::SecurityReduction { amount }
            | CardEffect::SecurityIncrease { amount }
            | CardEffect::RunnerTag { amount }
            | CardEffect::RunnerDamageAura { amount } => Some(amount),
            CardEffect::TerritoryInfluence { delta } => Some(delta),
            CardEffect::Custom { value: EffectValue::Int(v), .. } => Some(v),
            CardEffect::Custom { .. } => None,
        }
    }

    /// Halve the magnitude toward zero, keeping at least 1 in absolute
    /// value. Zero and symbolic values are left alone.
    pub fn weaken(&mut self) {
        if let Some(v) = self.magnitude_mut() {
            *v = halve_magnitude(*v);
        }
    }
}

/// Halve toward zero without ever reaching zero from a non-zero start.
#[must_use]
pub fn halve_magnitude(v: i64) -> i64 {
    match v.signum() {
        1 => (v / 2).max(1),
        -1 => (v / 2).min(-1),
        _ => 0,
    }
}
