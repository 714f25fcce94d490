//! Effect payloads and the installations that carry them.
//!
//! - `CardEffect`: tagged union of effect kinds, open via `Custom`
//! - `Installation`: a timed effect record attached to a territory
//!
//! Cards apply their mechanical effect immediately through the game
//! context and attach an installation when the effect should persist,
//! be described to players, or expire later.

mod effect;
mod installation;

pub use effect::{halve_magnitude, CardEffect, EffectValue};
pub use installation::{
    Duration, Installation, InstallationId, InstallationKind, InstallationStatus,
};
