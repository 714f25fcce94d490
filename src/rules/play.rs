//! One-call card play: legality check, then resolve.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::cards::{Card, CardCatalog};
use crate::core::{ContextEvent, GameContext, TerritoryId};
use crate::error::PlayError;

/// Result of a successful play.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayOutcome {
    /// Card ID.
    pub card: String,

    /// Journal entries produced by the play, in order.
    pub events: Vec<ContextEvent>,
}

impl PlayOutcome {
    /// Did the play change anything?
    #[must_use]
    pub fn changed(&self) -> bool {
        !self.events.is_empty()
    }
}

/// Check legality and resolve a card.
///
/// An illegal play returns [`PlayError::Illegal`] and leaves the context
/// untouched. The outcome copies this play's events; the context journal
/// keeps them until the caller drains it with
/// [`GameContext::take_events`].
pub fn play_card(
    context: &mut GameContext,
    card: &dyn Card,
    target: Option<&TerritoryId>,
) -> Result<PlayOutcome, PlayError> {
    if !card.can_play(context, target) {
        debug!(card = card.id(), target = ?target, "play rejected");
        return Err(PlayError::illegal(card.id(), target));
    }

    let mark = context.events().len();
    if !card.resolve(context, target) {
        warn!(card = card.id(), target = ?target, "card failed to resolve");
        return Err(PlayError::ResolveFailed {
            card: card.id().to_string(),
        });
    }

    let events = context.events_since(mark);
    info!(card = card.id(), faction = %card.faction(), events = events.len(), "card played");

    Ok(PlayOutcome {
        card: card.id().to_string(),
        events,
    })
}

/// Look a card up in the catalog, then play it.
pub fn play_by_id(
    catalog: &CardCatalog,
    context: &mut GameContext,
    id: &str,
    target: Option<&TerritoryId>,
) -> Result<PlayOutcome, PlayError> {
    let card = catalog
        .create(id)
        .ok_or_else(|| PlayError::UnknownCard(id.to_string()))?;
    play_card(context, card.as_ref(), target)
}

/// Territories the card could legally target right now, in ID order.
///
/// Empty for cards that take no target; check those with
/// `card.can_play(context, None)`.
#[must_use]
pub fn legal_targets(context: &GameContext, card: &dyn Card) -> Vec<TerritoryId> {
    if !card.needs_target() {
        return Vec::new();
    }
    context
        .territories()
        .filter(|t| card.can_play(context, Some(&t.id)))
        .map(|t| t.id.clone())
        .collect()
}
