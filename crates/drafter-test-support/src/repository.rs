//! `DraftRepository` doubles for tests.

use std::sync::Mutex;

use async_trait::async_trait;
use drafter_core::error::DomainError;
use drafter_core::id::DraftId;
use drafter_draft::domain::aggregates::{Draft, DraftSetup};
use drafter_draft::store::{DraftRepository, InMemoryDraftRepository};

/// A repository call observed by `RecordingDraftRepository`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepositoryCall {
    /// `create` with the given setup.
    Create(DraftSetup),
    /// `get` for the given draft.
    Get(DraftId),
    /// `update` for the given draft.
    Update(DraftId),
}

/// A repository that records every call and delegates to a real in-memory
/// store, so tests can assert which requests reached storage.
#[derive(Debug, Default)]
pub struct RecordingDraftRepository {
    inner: InMemoryDraftRepository,
    calls: Mutex<Vec<RepositoryCall>>,
}

impl RecordingDraftRepository {
    /// Create an empty recording repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a snapshot of all calls made so far.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn calls(&self) -> Vec<RepositoryCall> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: RepositoryCall) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl DraftRepository for RecordingDraftRepository {
    async fn create(&self, setup: DraftSetup) -> Result<Draft, DomainError> {
        self.record(RepositoryCall::Create(setup.clone()));
        self.inner.create(setup).await
    }

    async fn get(&self, id: DraftId) -> Result<Draft, DomainError> {
        self.record(RepositoryCall::Get(id));
        self.inner.get(id).await
    }

    async fn update(
        &self,
        id: DraftId,
        mutation: &mut (dyn for<'d> FnMut(&'d mut Draft) -> Result<(), DomainError> + Send),
    ) -> Result<Draft, DomainError> {
        self.record(RepositoryCall::Update(id));
        self.inner.update(id, mutation).await
    }
}

/// A repository that always returns an infrastructure error. Useful for
/// testing error-handling paths.
#[derive(Debug)]
pub struct FailingDraftRepository;

#[async_trait]
impl DraftRepository for FailingDraftRepository {
    async fn create(&self, _setup: DraftSetup) -> Result<Draft, DomainError> {
        Err(DomainError::Infrastructure("store unavailable".into()))
    }

    async fn get(&self, _id: DraftId) -> Result<Draft, DomainError> {
        Err(DomainError::Infrastructure("store unavailable".into()))
    }

    async fn update(
        &self,
        _id: DraftId,
        _mutation: &mut (dyn for<'d> FnMut(&'d mut Draft) -> Result<(), DomainError> + Send),
    ) -> Result<Draft, DomainError> {
        Err(DomainError::Infrastructure("store unavailable".into()))
    }
}
