//! Draft storage abstraction.

mod memory;

pub use memory::InMemoryDraftRepository;

use async_trait::async_trait;
use drafter_core::error::DomainError;
use drafter_core::id::DraftId;

use crate::domain::aggregates::{Draft, DraftSetup};

/// Repository trait owning every draft by identifier.
#[async_trait]
pub trait DraftRepository: Send + Sync {
    /// Stores a new draft built from `setup` under the next free identifier
    /// and returns it.
    async fn create(&self, setup: DraftSetup) -> Result<Draft, DomainError>;

    /// Returns a snapshot of the draft with the given identifier.
    ///
    /// Fails with `DomainError::NotFound` if no such draft exists.
    async fn get(&self, id: DraftId) -> Result<Draft, DomainError>;

    /// Runs `mutation` against the stored draft while holding that draft's
    /// exclusive lock, then returns the resulting state.
    ///
    /// Fails with `DomainError::NotFound` if no such draft exists, or with
    /// whatever error `mutation` returns.
    async fn update(
        &self,
        id: DraftId,
        mutation: &mut (dyn for<'d> FnMut(&'d mut Draft) -> Result<(), DomainError> + Send),
    ) -> Result<Draft, DomainError>;
}
