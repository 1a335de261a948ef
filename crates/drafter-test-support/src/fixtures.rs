//! Draft fixtures.

use drafter_draft::domain::aggregates::DraftSetup;
use drafter_draft::store::{DraftRepository, InMemoryDraftRepository};

/// Builds a `DraftSetup` from string slices.
///
/// # Panics
///
/// Panics if the input would be rejected by `DraftSetup::new`.
#[must_use]
pub fn draft_setup(drafters: &[&str], options: &[&str], rounds: u32) -> DraftSetup {
    DraftSetup::new(
        drafters.iter().map(|d| (*d).to_owned()).collect(),
        options.iter().map(|o| (*o).to_owned()).collect(),
        rounds,
    )
    .expect("fixture draft setup must be valid")
}

/// Returns an in-memory repository already holding one draft per setup, with
/// ids assigned in order from zero.
///
/// # Panics
///
/// Panics if the repository rejects a draft.
pub async fn seeded_repository(setups: Vec<DraftSetup>) -> InMemoryDraftRepository {
    let repo = InMemoryDraftRepository::new();
    for setup in setups {
        repo.create(setup)
            .await
            .expect("in-memory repository accepts every setup");
    }
    repo
}
