//! # eol-ccg
//!
//! Card-effect resolution engine for *End of Line*, a territory-control card
//! game where corporations and runners fight over city districts.
//!
//! ## Design Principles
//!
//! 1. **One Mutation Surface**: Cards never touch territories or factions
//!    directly. Every change goes through a named `GameContext` operation
//!    that clamps its result.
//!
//! 2. **Check, Then Resolve**: A card exposes a legality check and a
//!    resolve procedure. `rules::play_card` runs both.
//!
//! 3. **Deterministic**: Installation IDs come from a per-context counter
//!    and all state lives in ordered persistent maps, so the same plays on
//!    the same board always produce the same state.
//!
//! ## Modules
//!
//! - `core`: Factions, territories, the game context, setup config
//! - `effects`: Installations and the effect payloads they carry
//! - `cards`: Card definitions, the `Card` trait, built-in cards, catalog
//! - `rules`: Play helpers and the thread-safe context wrapper
//! - `error`: Setup and play errors
//!
//! ## Example
//!
//! ```
//! use eol_ccg::{play_by_id, resources, CardCatalog, Faction, FactionId, GameContext, Territory};
//!
//! let mut ctx = GameContext::new()
//!     .with_territory(Territory::new("docks", "The Docks"))
//!     .with_faction(Faction::new(FactionId::Anarch).with_resource(resources::CREDITS, 4));
//!
//! let outcome = play_by_id(&CardCatalog::standard(), &mut ctx, "corroder", Some(&"docks".into())).unwrap();
//!
//! assert_eq!(outcome.card, "corroder");
//! assert_eq!(ctx.resource(FactionId::Anarch, resources::CREDITS), Some(2));
//! ```

pub mod core;
pub mod effects;
pub mod cards;
pub mod rules;
pub mod error;

// Re-export commonly used types
pub use crate::core::{
    resources, Attribute, AttributeValues, Attributes, Camp, ContextEvent, DeckSummary, Faction,
    FactionId, GameContext, Territory, TerritoryId, TerritoryKind,
    BoardConfig, FactionConfig, TerritoryConfig,
    CORPORATE_CONTROL_THRESHOLD, RUNNER_CONTROL_THRESHOLD,
};

pub use crate::effects::{
    CardEffect, Duration, EffectValue, Installation, InstallationId, InstallationKind,
    InstallationStatus,
};

pub use crate::cards::{create_card, Card, CardCatalog, CardDefinition, CardType, Cost};

pub use crate::rules::{legal_targets, play_by_id, play_card, PlayOutcome, SharedContext};

pub use crate::error::{ConfigError, PlayError};
