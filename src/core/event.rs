//! Change journal entries.
//!
//! Every `GameContext` mutation that changes state appends a
//! `ContextEvent`. The journal is for observers such as clients and logs;
//! game state never derives from it.

use serde::{Deserialize, Serialize};

use super::faction::FactionId;
use super::territory::{Attribute, TerritoryId};
use crate::effects::{InstallationId, InstallationKind};

/// A single state change.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContextEvent {
    /// A faction resource changed.
    ResourceChanged {
        faction: FactionId,
        key: String,
        old: i64,
        new: i64,
    },

    /// An installation was attached to a territory.
    Installed {
        territory: TerritoryId,
        installation: InstallationId,
        faction: FactionId,
        kind: InstallationKind,
    },

    /// An installation was removed by maintenance.
    Uninstalled {
        territory: TerritoryId,
        installation: InstallationId,
    },

    /// A runner took damage.
    RunnerDamaged {
        faction: FactionId,
        amount: u32,
        deck_size: u32,
    },

    /// A runner was tagged.
    RunnerTagged {
        faction: FactionId,
        amount: u32,
        tags: u32,
    },

    /// A territory attribute changed.
    AttributeChanged {
        territory: TerritoryId,
        attribute: Attribute,
        old: i64,
        new: i64,
    },

    /// An installation was damaged by an area effect.
    InstallationDamaged {
        territory: TerritoryId,
        installation: InstallationId,
    },
}

impl ContextEvent {
    /// The territory this event touched, if any.
    #[must_use]
    pub fn territory(&self) -> Option<&TerritoryId> {
        match self {
            ContextEvent::Installed { territory, .. }
            | ContextEvent::Uninstalled { territory, .. }
            | ContextEvent::AttributeChanged { territory, .. }
            | ContextEvent::InstallationDamaged { territory, .. } => Some(territory),
            ContextEvent::ResourceChanged { .. }
            | ContextEvent::RunnerDamaged { .. }
            | ContextEvent::RunnerTagged { .. } => None,
        }
    }

    /// The faction this event touched, if any.
    #[must_use]
    pub fn faction(&self) -> Option<FactionId> {
        match self {
            ContextEvent::ResourceChanged { faction, .. }
            | ContextEvent::Installed { faction, .. }
            | ContextEvent::RunnerDamaged { faction, .. }
            | ContextEvent::RunnerTagged { faction, .. } => Some(*faction),
            ContextEvent::Uninstalled { .. }
            | ContextEvent::AttributeChanged { .. }
            | ContextEvent::InstallationDamaged { .. } => None,
        }
    }
}
