//! Thread-safe wrapper around a game context.
//!
//! The engine itself is single-threaded. `SharedContext` serialises plays
//! from several threads: each play holds the lock across its legality
//! check and resolve.

use std::sync::{Mutex, MutexGuard, PoisonError};

use im::Vector;
use tracing::warn;

use super::play::{play_by_id, PlayOutcome};
use crate::cards::CardCatalog;
use crate::core::{ContextEvent, GameContext, TerritoryId};
use crate::error::PlayError;

/// A game context behind a mutex.
#[derive(Debug, Default)]
pub struct SharedContext {
    inner: Mutex<GameContext>,
}

impl SharedContext {
    /// Wrap a context.
    #[must_use]
    pub fn new(context: GameContext) -> Self {
        Self {
            inner: Mutex::new(context),
        }
    }

    // Every mutation clamps, so a poisoned context is still consistent.
    fn lock(&self) -> MutexGuard<'_, GameContext> {
        self.inner.lock().unwrap_or_else(|poisoned| {
            warn!("recovering poisoned game context lock");
            poisoned.into_inner()
        })
    }

    /// Play a catalog card as one critical section.
    pub fn play(
        &self,
        catalog: &CardCatalog,
        id: &str,
        target: Option<&TerritoryId>,
    ) -> Result<PlayOutcome, PlayError> {
        play_by_id(catalog, &mut self.lock(), id, target)
    }

    /// Run `f` with exclusive access to the context.
    pub fn with_context<R>(&self, f: impl FnOnce(&mut GameContext) -> R) -> R {
        f(&mut self.lock())
    }

    /// Drain the change journal.
    ///
    /// The journal grows with every play. Long-running callers should drain
    /// it once per turn (or after forwarding each `PlayOutcome`).
    pub fn take_events(&self) -> Vector<ContextEvent> {
        self.lock().take_events()
    }

    /// Copy of the current context.
    #[must_use]
    pub fn snapshot(&self) -> GameContext {
        self.lock().snapshot()
    }

    /// Unwrap the context.
    #[must_use]
    pub fn into_inner(self) -> GameContext {
        self.inner.into_inner().unwrap_or_else(PoisonError::into_inner)
    }
}
