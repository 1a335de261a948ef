//! Shared application state.

use std::sync::Arc;

use drafter_draft::domain::aggregates::TurnPolicy;
use drafter_draft::store::DraftRepository;

/// Application state shared across all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// The store every draft lives in.
    pub draft_repository: Arc<dyn DraftRepository>,
    /// How pick requests' picker claims are checked.
    pub turn_policy: TurnPolicy,
}

impl AppState {
    /// Create new application state.
    #[must_use]
    pub fn new(draft_repository: Arc<dyn DraftRepository>, turn_policy: TurnPolicy) -> Self {
        Self {
            draft_repository,
            turn_policy,
        }
    }
}
