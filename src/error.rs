//! Error types.
//!
//! Domain operations report absence and illegality through `Option` and
//! `bool`. Typed errors appear only at the boundaries: loading a board
//! setup, and the one-call play helper.

use thiserror::Error;

use crate::core::{FactionId, TerritoryId};

/// Setup description could not be turned into a game context.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// JSON could not be parsed.
    #[error("invalid board JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Two territories share an ID.
    #[error("duplicate territory '{0}'")]
    DuplicateTerritory(TerritoryId),

    /// Two factions share an ID.
    #[error("duplicate faction '{0}'")]
    DuplicateFaction(FactionId),

    /// A territory lists a neighbour that doesn't exist.
    #[error("territory '{territory}' is adjacent to unknown territory '{neighbor}'")]
    UnknownAdjacency {
        /// Territory with the bad adjacency entry.
        territory: TerritoryId,
        /// The missing neighbour.
        neighbor: TerritoryId,
    },

    /// The active faction isn't part of the setup.
    #[error("active faction '{0}' is not in the faction list")]
    UnknownActiveFaction(FactionId),
}

/// A card play did not happen.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlayError {
    /// No card with this ID in the catalog.
    #[error("unknown card '{0}'")]
    UnknownCard(String),

    /// The card's legality check failed; nothing was changed.
    #[error("card '{card}' cannot be played on {target}")]
    Illegal {
        /// Card ID.
        card: String,
        /// Target description ("territory 'x'" or "no target").
        target: String,
    },

    /// The card refused to resolve after passing its legality check.
    #[error("card '{card}' failed to resolve")]
    ResolveFailed {
        /// Card ID.
        card: String,
    },
}

impl PlayError {
    pub(crate) fn illegal(card: &str, target: Option<&TerritoryId>) -> Self {
        let target = match target {
            Some(t) => format!("territory '{t}'"),
            None => "no target".to_string(),
        };
        Self::Illegal {
            card: card.to_string(),
            target,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = PlayError::UnknownCard("mystery".to_string());
        assert_eq!(err.to_string(), "unknown card 'mystery'");

        let err = PlayError::illegal("bank_job", Some(&TerritoryId::new("docks")));
        assert_eq!(err.to_string(), "card 'bank_job' cannot be played on territory 'docks'");

        let err = PlayError::illegal("sure_gamble", None);
        assert_eq!(err.to_string(), "card 'sure_gamble' cannot be played on no target");

        let err = ConfigError::UnknownAdjacency {
            territory: TerritoryId::new("a"),
            neighbor: TerritoryId::new("b"),
        };
        assert_eq!(err.to_string(), "territory 'a' is adjacent to unknown territory 'b'");
    }
}
