//! Card catalog: ID to card factory lookup.
//!
//! The `CardCatalog` maps catalog IDs ("bank_job") to constructors. Unknown
//! IDs yield `None`, never a panic.

use rustc_hash::FxHashMap;

use super::card::Card;
use super::corporation::{ArmedResponse, IceWall, ScorchedEarth, SurveillanceGrid};
use super::runner::{BackdoorAccess, BankJob, Corroder, NetworkExpansion, SureGamble};

/// Constructor for a card variant.
pub type CardFactory = fn() -> Box<dyn Card>;

/// Registry of card factories.
///
/// ## Example
///
/// ```
/// use eol_ccg::cards::CardCatalog;
///
/// let catalog = CardCatalog::standard();
///
/// let card = catalog.create("bank_job").unwrap();
/// assert_eq!(card.name(), "Bank Job");
/// assert!(catalog.create("unknown_card").is_none());
/// ```
#[derive(Clone, Debug, Default)]
pub struct CardCatalog {
    factories: FxHashMap<&'static str, CardFactory>,
}

impl CardCatalog {
    /// Create an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Catalog with every built-in card.
    #[must_use]
    pub fn standard() -> Self {
        let mut catalog = Self::new();
        catalog.register(BackdoorAccess::ID, || Box::new(BackdoorAccess::new()));
        catalog.register(NetworkExpansion::ID, || Box::new(NetworkExpansion::new()));
        catalog.register(BankJob::ID, || Box::new(BankJob::new()));
        catalog.register(SureGamble::ID, || Box::new(SureGamble::new()));
        catalog.register(Corroder::ID, || Box::new(Corroder::new()));
        catalog.register(SurveillanceGrid::ID, || Box::new(SurveillanceGrid::new()));
        catalog.register(ScorchedEarth::ID, || Box::new(ScorchedEarth::new()));
        catalog.register(IceWall::ID, || Box::new(IceWall::new()));
        catalog.register(ArmedResponse::ID, || Box::new(ArmedResponse::new()));
        catalog
    }

    /// Register a card factory.
    ///
    /// Panics if the ID is already registered.
    pub fn register(&mut self, id: &'static str, factory: CardFactory) {
        if self.factories.contains_key(id) {
            panic!("Card '{id}' already registered");
        }
        self.factories.insert(id, factory);
    }

    /// Build a fresh card by catalog ID.
    #[must_use]
    pub fn create(&self, id: &str) -> Option<Box<dyn Card>> {
        self.factories.get(id).map(|factory| factory())
    }

    /// Is this ID registered?
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.factories.contains_key(id)
    }

    /// Registered IDs, sorted.
    #[must_use]
    pub fn ids(&self) -> Vec<&'static str> {
        let mut ids: Vec<_> = self.factories.keys().copied().collect();
        ids.sort_unstable();
        ids
    }

    /// Number of registered cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.factories.len()
    }

    /// Is the catalog empty?
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }
}

/// Build a built-in card by ID.
///
/// Shorthand for `CardCatalog::standard().create(id)`.
#[must_use]
pub fn create_card(id: &str) -> Option<Box<dyn Card>> {
    CardCatalog::standard().create(id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{CardType, Cost};
    use crate::core::FactionId;

    #[test]
    fn test_standard_catalog() {
        let catalog = CardCatalog::standard();

        assert_eq!(catalog.len(), 9);
        assert!(catalog.contains("scorched_earth"));
        assert!(!catalog.contains("hedge_fund"));
        assert_eq!(catalog.ids()[0], "armed_response");
    }

    #[test]
    fn test_create_matches_id() {
        let catalog = CardCatalog::standard();

        for id in catalog.ids() {
            let card = catalog.create(id).unwrap();
            assert_eq!(card.id(), id);
        }
    }

    #[test]
    fn test_create_card() {
        let card = create_card("surveillance_grid").unwrap();
        assert_eq!(card.faction(), FactionId::Nbn);
        assert_eq!(card.card_type(), CardType::Infrastructure);
        assert_eq!(card.cost(), Cost::Fixed(3));

        assert!(create_card("").is_none());
        assert!(create_card("Bank Job").is_none());
    }

    #[test]
    #[should_panic(expected = "already registered")]
    fn test_duplicate_id_panics() {
        let mut catalog = CardCatalog::standard();
        catalog.register(BankJob::ID, || Box::new(BankJob::new()));
    }
}
