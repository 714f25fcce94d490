//! Installations: persistent effect records attached to territories.
//!
//! ## Duration
//!
//! - `Duration::Permanent`: never expires.
//! - `Duration::Turns(n)`: `n` turns remain. `Turns(0)` is expired.
//!
//! The engine never ticks durations itself. Turn logic calls
//! [`Installation::tick`] through the context's maintenance hook and
//! removes whatever reports expiry.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::effect::CardEffect;
use crate::core::{Camp, FactionId};

/// Identifier for an installation, unique within one game context.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct InstallationId(pub u64);

impl InstallationId {
    /// Create a new installation ID.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for InstallationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Installation({})", self.0)
    }
}

/// Installation subtype tag.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InstallationKind {
    /// Short-lived runner infiltration.
    Stealth,
    /// Runner resource.
    Resource,
    /// Runner program.
    Program,
    /// Corporate infrastructure.
    Infrastructure,
    /// Corporate ICE.
    Ice,
    /// Lingering aftermath of an operation.
    Operation,
}

/// Operational status.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InstallationStatus {
    /// Working normally.
    #[default]
    Active,
    /// Switched off by game logic.
    Disabled,
    /// Hit by an area attack; effects are weakened.
    Damaged,
}

/// Remaining lifetime of an installation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Duration {
    /// Never expires.
    #[default]
    Permanent,
    /// Turns remaining.
    Turns(u32),
}

impl Duration {
    /// Has this duration run out?
    #[must_use]
    pub const fn is_expired(self) -> bool {
        matches!(self, Duration::Turns(0))
    }
}

/// A persistent, possibly-timed effect record on a territory.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Installation {
    /// Unique ID within the context.
    pub id: InstallationId,

    /// Faction that installed it.
    pub faction: FactionId,

    /// Subtype tag.
    pub kind: InstallationKind,

    /// Operational status.
    #[serde(default)]
    pub status: InstallationStatus,

    /// Remaining lifetime.
    #[serde(default)]
    pub duration: Duration,

    /// Effect payloads, in application order.
    /// SmallVec: catalog installations carry one or two effects.
    #[serde(default)]
    pub effects: SmallVec<[CardEffect; 2]>,
}

impl Installation {
    /// Create an active, permanent installation with no effects.
    #[must_use]
    pub fn new(id: InstallationId, faction: FactionId, kind: InstallationKind) -> Self {
        Self {
            id,
            faction,
            kind,
            status: InstallationStatus::Active,
            duration: Duration::Permanent,
            effects: SmallVec::new(),
        }
    }

    /// Limit the installation to `turns` turns (builder pattern).
    #[must_use]
    pub fn for_turns(mut self, turns: u32) -> Self {
        self.duration = Duration::Turns(turns);
        self
    }

    /// Append an effect (builder pattern).
    #[must_use]
    pub fn with_effect(mut self, effect: CardEffect) -> Self {
        self.effects.push(effect);
        self
    }

    /// Camp of the owning faction.
    #[must_use]
    pub fn camp(&self) -> Camp {
        self.faction.camp()
    }

    /// Is the installation active?
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.status == InstallationStatus::Active
    }

    /// Has the installation's duration run out?
    #[must_use]
    pub fn is_expired(&self) -> bool {
        self.duration.is_expired()
    }

    /// Advance one turn. Returns true once the installation has expired.
    ///
    /// Permanent installations never expire.
    pub fn tick(&mut self) -> bool {
        if let Duration::Turns(n) = &mut self.duration {
            *n = n.saturating_sub(1);
        }
        self.is_expired()
    }

    /// Mark as damaged and weaken every numeric effect.
    pub fn apply_damage(&mut self) {
        self.status = InstallationStatus::Damaged;
        for effect in &mut self.effects {
            effect.weaken();
        }
    }

    /// Find the first effect of a given kind.
    #[must_use]
    pub fn effect(&self, kind: &str) -> Option<&CardEffect> {
        self.effects.iter().find(|e| e.kind() == kind)
    }
}
