//! Command handlers for the draft context.
//!
//! This module contains application-level command handler functions that
//! orchestrate domain logic: validate, mutate the stored draft, return its
//! view.

use drafter_core::command::Command;
use drafter_core::error::DomainError;
use tracing::{debug, info, instrument, warn};

use crate::application::query_handlers::DraftView;
use crate::domain::aggregates::{Draft, TurnPolicy};
use crate::domain::commands::{CreateDraft, PickOption};
use crate::store::DraftRepository;

/// Handles the `CreateDraft` command: stores a new draft and returns its view.
///
/// # Errors
///
/// Returns `DomainError` if the repository fails.
#[instrument(skip(command, repo), fields(correlation_id = %command.correlation_id))]
pub async fn handle_create_draft(
    command: &CreateDraft,
    repo: &dyn DraftRepository,
) -> Result<DraftView, DomainError> {
    let draft = repo.create(command.setup.clone()).await?;

    info!(
        command_type = command.command_type(),
        draft_id = %draft.id,
        drafters = draft.drafters().len(),
        options = draft.options().len(),
        rounds = draft.rounds(),
        "draft created"
    );

    Ok(DraftView::from(&draft))
}

/// Handles the `PickOption` command: applies the pick to the stored draft
/// under that draft's lock and returns the updated view.
///
/// # Errors
///
/// Returns `DomainError::NotFound` for an unknown draft, or the validation
/// error raised by `Draft::pick`.
#[instrument(
    skip(command, repo),
    fields(correlation_id = %command.correlation_id, draft_id = %command.draft_id)
)]
pub async fn handle_pick_option(
    command: &PickOption,
    policy: TurnPolicy,
    repo: &dyn DraftRepository,
) -> Result<DraftView, DomainError> {
    let claim = command.picker.as_deref();
    let pick = command.pick.as_str();

    let result = repo
        .update(command.draft_id, &mut |draft: &mut Draft| -> Result<(), DomainError> {
            let record = draft.pick(claim, pick, policy)?;
            debug!(
                drafter = %record.drafter,
                sequence = record.sequence,
                "pick applied"
            );
            Ok(())
        })
        .await;

    let draft = match result {
        Ok(draft) => draft,
        Err(err) => {
            warn!(command_type = command.command_type(), error = %err, "pick rejected");
            return Err(err);
        }
    };

    info!(
        command_type = command.command_type(),
        picker = %draft.picker(),
        rounds = draft.rounds(),
        is_complete = draft.is_complete(),
        "pick recorded"
    );

    Ok(DraftView::from(&draft))
}
