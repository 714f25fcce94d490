//! Card definitions - static card data.
//!
//! `CardDefinition` holds the immutable identity of a card: its id, name,
//! type, faction and cost. Behaviour lives on the card variant (see
//! [`Card`](super::Card)), not here.

use serde::{Deserialize, Serialize};

use crate::core::FactionId;

/// Card type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CardType {
    /// Corporate infrastructure.
    Infrastructure,
    /// One-shot operation.
    Operation,
    /// One-shot runner event.
    Event,
    /// Persistent runner resource.
    Resource,
    /// Runner connection.
    Connection,
    /// Runner hardware.
    Hardware,
    /// Runner program.
    Program,
    /// Corporate ICE.
    Ice,
    /// Runner virus.
    Virus,
}

/// Play cost.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Cost {
    /// Fixed credit cost.
    Fixed(u32),
    /// "X" cost. Each card decides at play time how much is paid.
    Variable,
}

impl Cost {
    /// The fixed amount, if this isn't a variable cost.
    #[must_use]
    pub const fn fixed(self) -> Option<u32> {
        match self {
            Cost::Fixed(n) => Some(n),
            Cost::Variable => None,
        }
    }

    /// Is this an "X" cost?
    #[must_use]
    pub const fn is_variable(self) -> bool {
        matches!(self, Cost::Variable)
    }
}

impl std::fmt::Display for Cost {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Cost::Fixed(n) => write!(f, "{n}"),
            Cost::Variable => f.write_str("X"),
        }
    }
}

/// Static card definition.
///
/// ## Example
///
/// ```
/// use eol_ccg::cards::{CardDefinition, CardType, Cost};
/// use eol_ccg::core::FactionId;
///
/// let card = CardDefinition::new("bank_job", "Bank Job", CardType::Operation, FactionId::Criminal, Cost::Fixed(2));
///
/// assert_eq!(card.cost.fixed(), Some(2));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardDefinition {
    /// Catalog ID (e.g. "bank_job").
    pub id: String,

    /// Display name.
    pub name: String,

    /// Card type.
    pub card_type: CardType,

    /// Faction that plays the card.
    pub faction: FactionId,

    /// Play cost.
    pub cost: Cost,
}

impl CardDefinition {
    /// Create a card definition.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        card_type: CardType,
        faction: FactionId,
        cost: Cost,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            card_type,
            faction,
            cost,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cost() {
        assert_eq!(Cost::Fixed(3).fixed(), Some(3));
        assert_eq!(Cost::Variable.fixed(), None);
        assert!(Cost::Variable.is_variable());
        assert_eq!(format!("{}", Cost::Fixed(3)), "3");
        assert_eq!(format!("{}", Cost::Variable), "X");
    }

    #[test]
    fn test_card_definition_serialization() {
        let card = CardDefinition::new(
            "surveillance_grid",
            "Surveillance Grid",
            CardType::Infrastructure,
            FactionId::Nbn,
            Cost::Fixed(3),
        );

        let json = serde_json::to_string(&card).unwrap();
        assert!(json.contains(r#""faction":"nbn""#));
        assert!(json.contains(r#""cost":{"fixed":3}"#));

        let deserialized: CardDefinition = serde_json::from_str(&json).unwrap();
        assert_eq!(card, deserialized);
    }
}
