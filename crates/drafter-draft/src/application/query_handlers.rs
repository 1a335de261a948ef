//! Query handlers for the draft context.
//!
//! This module contains the read-only view returned to callers and the
//! handler that loads a draft for joining or polling.

use drafter_core::error::DomainError;
use drafter_core::id::DraftId;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::domain::aggregates::Draft;
use crate::domain::picks::PickRecord;
use crate::store::DraftRepository;

/// Read-only view of a draft, in the shape clients expect on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DraftView {
    /// The draft identifier.
    pub id: DraftId,
    /// Options still available.
    pub options: Vec<String>,
    /// Drafters in turn order.
    pub drafters: Vec<String>,
    /// Picks made so far, oldest first.
    pub picked: Vec<PickRecord>,
    /// The drafter whose turn it is.
    pub picker: String,
    /// Remaining full cycles through the drafters.
    pub rounds: u32,
    /// Whether the draft has finished.
    pub is_complete: bool,
}

impl From<&Draft> for DraftView {
    fn from(draft: &Draft) -> Self {
        Self {
            id: draft.id,
            options: draft.options().to_vec(),
            drafters: draft.drafters().to_vec(),
            picked: draft.picked().to_vec(),
            picker: draft.picker().to_owned(),
            rounds: draft.rounds(),
            is_complete: draft.is_complete(),
        }
    }
}

/// Retrieves a draft by its identifier.
///
/// # Errors
///
/// Returns `DomainError::NotFound` if no draft exists for the ID.
#[instrument(skip(repo))]
pub async fn get_draft_by_id(
    draft_id: DraftId,
    repo: &dyn DraftRepository,
) -> Result<DraftView, DomainError> {
    let draft = repo.get(draft_id).await?;
    Ok(DraftView::from(&draft))
}
