//! Shared test doubles and fixtures for the Drafter service.

mod fixtures;
mod repository;

pub use fixtures::{draft_setup, seeded_repository};
pub use repository::{FailingDraftRepository, RecordingDraftRepository, RepositoryCall};
