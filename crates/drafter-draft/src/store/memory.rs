//! Process-local draft store.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError, RwLock};

use async_trait::async_trait;
use drafter_core::error::DomainError;
use drafter_core::id::DraftId;
use tracing::debug;

use super::DraftRepository;
use crate::domain::aggregates::{Draft, DraftSetup};

/// In-memory draft repository.
///
/// The registry lock only guards identity assignment and lookup. Each draft
/// has its own mutex, so picks on different drafts never wait on each other
/// and picks on the same draft are applied one at a time.
#[derive(Debug, Default)]
pub struct InMemoryDraftRepository {
    registry: RwLock<Registry>,
}

#[derive(Debug, Default)]
struct Registry {
    drafts: HashMap<DraftId, Arc<Mutex<Draft>>>,
    next_id: u64,
}

fn poisoned<T>(_: PoisonError<T>) -> DomainError {
    DomainError::Infrastructure("draft store lock poisoned".into())
}

impl InMemoryDraftRepository {
    /// Creates an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Drops every draft and restarts identifiers at zero.
    pub fn clear(&self) {
        let mut registry = self
            .registry
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        registry.drafts.clear();
        registry.next_id = 0;
    }

    /// Number of drafts currently held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.registry
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .drafts
            .len()
    }

    /// Whether the repository holds no drafts.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn slot(&self, id: DraftId) -> Result<Arc<Mutex<Draft>>, DomainError> {
        let registry = self.registry.read().map_err(poisoned)?;
        registry
            .drafts
            .get(&id)
            .cloned()
            .ok_or(DomainError::NotFound(id))
    }
}

#[async_trait]
impl DraftRepository for InMemoryDraftRepository {
    async fn create(&self, setup: DraftSetup) -> Result<Draft, DomainError> {
        let mut registry = self.registry.write().map_err(poisoned)?;
        let id = DraftId(registry.next_id);
        registry.next_id += 1;

        let draft = Draft::new(id, setup);
        registry
            .drafts
            .insert(id, Arc::new(Mutex::new(draft.clone())));

        debug!(draft_id = %id, "draft stored");
        Ok(draft)
    }

    async fn get(&self, id: DraftId) -> Result<Draft, DomainError> {
        let slot = self.slot(id)?;
        let draft = slot.lock().map_err(poisoned)?;
        Ok(draft.clone())
    }

    async fn update(
        &self,
        id: DraftId,
        mutation: &mut (dyn for<'d> FnMut(&'d mut Draft) -> Result<(), DomainError> + Send),
    ) -> Result<Draft, DomainError> {
        let slot = self.slot(id)?;
        let mut draft = slot.lock().map_err(poisoned)?;
        mutation(&mut *draft)?;
        Ok(draft.clone())
    }
}
