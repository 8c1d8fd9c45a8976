use super::member::{FieldInput, MemberSlot};
use super::submission::TeamSubmission;
use super::value_objects::{validate_team_name, SlotId, SubmissionStatus};
use crate::domain::repositories::SubmissionTransport;

/// Registration form controller
///
/// Owns the team name, the ordered member slots and the submission status.
///
/// # Invariants
/// - Member count stays within [`FormController::MIN_MEMBERS`] and
///   [`FormController::MAX_MEMBERS`]
/// - A submission is sent only when the team name and every member field
///   are valid
/// - Once a submission succeeds the form cannot submit again
///
/// # Example
/// ```
/// use hackathon_registration::domain::registration::form::FormController;
///
/// let mut form = FormController::new();
/// assert_eq!(form.members().len(), 2);
///
/// form.add_member();
/// form.add_member();
/// assert!(form.add_member().is_none());
/// assert_eq!(form.members().len(), 4);
/// ```
#[derive(Debug, Clone)]
pub struct FormController {
    team: FieldInput,
    slots: Vec<MemberSlot>,
    status: SubmissionStatus,
}

impl FormController {
    pub const MIN_MEMBERS: usize = 2;
    pub const MAX_MEMBERS: usize = 4;

    /// Creates a form with the minimum number of empty member slots
    pub fn new() -> Self {
        Self {
            team: FieldInput::default(),
            slots: (0..Self::MIN_MEMBERS).map(|_| MemberSlot::new()).collect(),
            status: SubmissionStatus::Idle,
        }
    }

    // ===== Team name =====

    pub fn set_team_name(&mut self, name: impl Into<String>) {
        self.team.set(name);
    }

    pub fn team_name(&self) -> &str {
        self.team.text()
    }

    pub fn team_errored(&self) -> bool {
        self.team.is_errored()
    }

    /// Clears the error mark on the team input
    pub fn focus_team(&mut self) {
        self.team.focus();
    }

    // ===== Member slots =====

    /// Member slots in display order
    pub fn members(&self) -> &[MemberSlot] {
        &self.slots
    }

    pub fn member(&self, id: SlotId) -> Option<&MemberSlot> {
        self.slots.iter().find(|slot| slot.id() == id)
    }

    pub fn member_mut(&mut self, id: SlotId) -> Option<&mut MemberSlot> {
        self.slots.iter_mut().find(|slot| slot.id() == id)
    }

    /// Heading of the slot at `index`, numbered from one
    pub fn member_title(index: usize) -> String {
        format!("Участник №{}", index + 1)
    }

    /// Appends an empty slot and returns its id; no-op when the form is full
    pub fn add_member(&mut self) -> Option<SlotId> {
        if !self.can_add_member() {
            return None;
        }

        let slot = MemberSlot::new();
        let id = slot.id();
        self.slots.push(slot);
        Some(id)
    }

    /// Removes the slot `id`; no-op at the minimum or for an unknown id
    ///
    /// Returns whether a slot was removed.
    pub fn remove_member(&mut self, id: SlotId) -> bool {
        if self.slots.len() <= Self::MIN_MEMBERS {
            return false;
        }

        match self.slots.iter().position(|slot| slot.id() == id) {
            Some(index) => {
                self.slots.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn can_add_member(&self) -> bool {
        self.slots.len() < Self::MAX_MEMBERS
    }

    // ===== Submission =====

    pub fn status(&self) -> SubmissionStatus {
        self.status
    }

    /// Submit button text for the current status
    pub fn status_label(&self) -> &'static str {
        self.status.label()
    }

    /// Whether the submit action is available
    pub fn can_submit(&self) -> bool {
        self.status.can_transition_to(SubmissionStatus::Pending)
    }

    /// Validates the whole form, marking every failing input
    ///
    /// A short team name is reported alone; member slots are only checked
    /// once the team name passes. All slots are checked even after the
    /// first failure.
    pub fn validate(&mut self) -> bool {
        if !validate_team_name(self.team.text()) {
            self.team.mark_errored();
            return false;
        }

        self.slots
            .iter_mut()
            .fold(true, |valid, slot| slot.validate() && valid)
    }

    /// Serializes the current values in slot order
    pub fn to_submission(&self) -> TeamSubmission {
        TeamSubmission {
            team: self.team.text().to_string(),
            members: self.slots.iter().map(MemberSlot::snapshot).collect(),
        }
    }

    /// Validates and, if everything passes, sends the form through `transport`
    ///
    /// The transport is called at most once. On success every value is
    /// cleared and the status becomes terminal `Success`; any transport
    /// error yields `Error`, from which the form may be submitted again.
    pub async fn submit<T>(&mut self, transport: &T) -> SubmissionStatus
    where
        T: SubmissionTransport + ?Sized,
    {
        if !self.can_submit() {
            return self.status;
        }

        if !self.validate() {
            return self.status;
        }

        self.status = SubmissionStatus::Pending;
        let submission = self.to_submission();

        match transport.send(&submission).await {
            Ok(()) => {
                self.reset();
                self.status = SubmissionStatus::Success;
            }
            Err(e) => {
                tracing::warn!(error = %e, team = %submission.team, "Submission failed");
                self.status = SubmissionStatus::Error;
            }
        }

        self.status
    }

    /// Clears every input; slots and their ids are kept
    fn reset(&mut self) {
        self.team.reset();
        for slot in &mut self.slots {
            slot.reset();
        }
    }
}

impl Default for FormController {
    fn default() -> Self {
        Self::new()
    }
}
