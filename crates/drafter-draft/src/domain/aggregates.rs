//! Aggregate root for the draft context.
//!
//! A `Draft` owns its turn state. The current picker is stored as an index
//! into the fixed drafter list and the name is derived from it on read, so
//! the two can never disagree.

use drafter_core::error::DomainError;
use drafter_core::id::DraftId;

use super::picks::PickRecord;

/// How strictly the picker claim on a pick request is checked.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TurnPolicy {
    /// The claim is informational only; anyone may pick for the current
    /// drafter.
    #[default]
    Open,
    /// The claim must name the drafter whose turn it is.
    Enforced,
}

/// Validated input for a new draft.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DraftSetup {
    drafters: Vec<String>,
    options: Vec<String>,
    rounds: u32,
}

impl DraftSetup {
    /// Validates creation input.
    ///
    /// Drafters are deduplicated keeping the first occurrence of each name.
    /// Options are copied as given, duplicates included.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidInput` if fewer than two distinct drafters
    /// or fewer than two options are supplied.
    pub fn new(
        drafters: Vec<String>,
        options: Vec<String>,
        rounds: u32,
    ) -> Result<Self, DomainError> {
        let mut unique: Vec<String> = Vec::with_capacity(drafters.len());
        for drafter in drafters {
            if !unique.contains(&drafter) {
                unique.push(drafter);
            }
        }

        if unique.len() < 2 {
            return Err(DomainError::InvalidInput(
                "'drafters' must contain at least 2 distinct names".to_owned(),
            ));
        }
        if options.len() < 2 {
            return Err(DomainError::InvalidInput(
                "'options' must contain at least 2 entries".to_owned(),
            ));
        }

        Ok(Self {
            drafters: unique,
            options,
            rounds,
        })
    }

    /// The deduplicated drafters in turn order.
    #[must_use]
    pub fn drafters(&self) -> &[String] {
        &self.drafters
    }

    /// The options as supplied.
    #[must_use]
    pub fn options(&self) -> &[String] {
        &self.options
    }

    /// Number of full drafter cycles.
    #[must_use]
    pub fn rounds(&self) -> u32 {
        self.rounds
    }
}

/// The aggregate root for a draft.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Draft {
    /// Aggregate identifier.
    pub id: DraftId,
    options: Vec<String>,
    drafters: Vec<String>,
    picked: Vec<PickRecord>,
    picker_index: usize,
    rounds: u32,
    is_complete: bool,
}

impl Draft {
    /// Creates a draft whose first drafter picks first.
    ///
    /// A setup with zero rounds yields a draft that is complete from the
    /// start.
    #[must_use]
    pub fn new(id: DraftId, setup: DraftSetup) -> Self {
        let DraftSetup {
            drafters,
            options,
            rounds,
        } = setup;
        let is_complete = options.is_empty() || rounds == 0;
        Self {
            id,
            options,
            drafters,
            picked: Vec::new(),
            picker_index: 0,
            rounds,
            is_complete,
        }
    }

    /// Options still available, in their original order.
    #[must_use]
    pub fn options(&self) -> &[String] {
        &self.options
    }

    /// Drafters in turn order.
    #[must_use]
    pub fn drafters(&self) -> &[String] {
        &self.drafters
    }

    /// Picks made so far, oldest first.
    #[must_use]
    pub fn picked(&self) -> &[PickRecord] {
        &self.picked
    }

    /// The drafter whose turn it is.
    #[must_use]
    pub fn picker(&self) -> &str {
        &self.drafters[self.picker_index]
    }

    /// Remaining full cycles through the drafters.
    #[must_use]
    pub fn rounds(&self) -> u32 {
        self.rounds
    }

    /// Whether the draft has finished.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.is_complete
    }

    /// Takes `pick` for the current drafter and passes the turn on.
    ///
    /// The first option equal to `pick` is removed. When the last drafter
    /// picks, the turn wraps to the first drafter and one round is consumed.
    /// The draft completes once no options or no rounds remain. On error the
    /// draft is left untouched.
    ///
    /// # Errors
    ///
    /// - `DomainError::DraftComplete` if the draft has already finished.
    /// - `DomainError::InvalidInput` if `pick` is empty.
    /// - `DomainError::NotYourTurn` if `policy` is `Enforced` and `claim`
    ///   does not name the current picker.
    /// - `DomainError::UnknownOption` if `pick` is not an available option.
    pub fn pick(
        &mut self,
        claim: Option<&str>,
        pick: &str,
        policy: TurnPolicy,
    ) -> Result<PickRecord, DomainError> {
        if self.is_complete {
            return Err(DomainError::DraftComplete(self.id));
        }
        if pick.is_empty() {
            return Err(DomainError::InvalidInput(
                "missing 'pick' parameter".to_owned(),
            ));
        }
        if policy == TurnPolicy::Enforced && claim != Some(self.picker()) {
            return Err(DomainError::NotYourTurn {
                claimed: claim.unwrap_or_default().to_owned(),
                expected: self.picker().to_owned(),
            });
        }

        let position = self
            .options
            .iter()
            .position(|option| option == pick)
            .ok_or_else(|| DomainError::UnknownOption(pick.to_owned()))?;

        let option = self.options.remove(position);
        let record = PickRecord {
            drafter: self.picker().to_owned(),
            option,
            sequence: self.picked.len() + 1,
        };
        self.picked.push(record.clone());
        self.advance_turn();

        if self.options.is_empty() || self.rounds == 0 {
            self.is_complete = true;
        }

        Ok(record)
    }

    fn advance_turn(&mut self) {
        let next = (self.picker_index + 1) % self.drafters.len();
        if next == 0 {
            self.rounds = self.rounds.saturating_sub(1);
        }
        self.picker_index = next;
    }
}
