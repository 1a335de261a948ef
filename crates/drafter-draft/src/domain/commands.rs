//! Commands for the draft context.

use drafter_core::command::Command;
use drafter_core::id::DraftId;
use uuid::Uuid;

use super::aggregates::DraftSetup;

/// Command to open a new draft.
#[derive(Debug, Clone)]
pub struct CreateDraft {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// Validated drafters, options and rounds.
    pub setup: DraftSetup,
}

impl Command for CreateDraft {
    fn command_type(&self) -> &'static str {
        "draft.create"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}

/// Command to take an option on behalf of the current drafter.
#[derive(Debug, Clone)]
pub struct PickOption {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// The draft being picked from.
    pub draft_id: DraftId,
    /// Who the caller claims to be, if given.
    pub picker: Option<String>,
    /// The option to take.
    pub pick: String,
}

impl Command for PickOption {
    fn command_type(&self) -> &'static str {
        "draft.pick_option"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}
