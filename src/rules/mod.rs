//! Play helpers built on the card protocol.
//!
//! - `play_card` / `play_by_id`: legality check then resolve, as one call
//! - `legal_targets`: every territory a card could be played on
//! - `SharedContext`: mutex-guarded context for concurrent callers
//!
//! Turn structure (phases, decay of timed installations, victory) is left
//! to the caller.

pub mod play;
pub mod shared;

pub use play::{legal_targets, play_by_id, play_card, PlayOutcome};
pub use shared::SharedContext;
