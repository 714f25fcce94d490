//! Core board types: factions, territories, the game context, setup config.
//!
//! Territories and factions are plain data; `GameContext` owns them and is
//! the only place they change during play.

pub mod faction;
pub mod territory;
pub mod event;
pub mod context;
pub mod config;

pub use faction::{resources, Camp, DeckSummary, Faction, FactionId};
pub use territory::{
    Attribute, AttributeValues, Attributes, Territory, TerritoryId, TerritoryKind,
    CORPORATE_CONTROL_THRESHOLD, DEFAULT_CORPORATION, DEFAULT_RUNNER, RUNNER_CONTROL_THRESHOLD,
};
pub use event::ContextEvent;
pub use context::GameContext;
pub use config::{BoardConfig, FactionConfig, TerritoryConfig};
