//! Form session state: the submission being edited plus the submit gate.

use crate::form::field::{FIELD_TEAM_NAME, PERSON_FIELDS};
use crate::{FieldErrors, MAX_TEAM_MEMBERS, PersonRecord, Submission};

/// One registration form session.
///
/// Holds the submission under edit and the `submitting` flag that gates
/// repeated submit attempts while a request is in flight. The flag is the
/// only concurrency guard: the gateway itself does not deduplicate.
#[derive(Debug, Clone, Default)]
pub struct RegistrationForm {
    pub submission: Submission,
    submitting: bool,
}

impl RegistrationForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an empty member slot. No-op once the member cap is reached.
    pub fn add_member(&mut self) {
        if self.submission.members.len() < MAX_TEAM_MEMBERS {
            self.submission.members.push(PersonRecord::empty());
        }
    }

    /// Remove the most recently added member (LIFO). No-op when there are
    /// no members.
    pub fn remove_member(&mut self) {
        self.submission.members.pop();
    }

    /// Check every field against the descriptor table.
    ///
    /// Reports the first violated rule per field, keyed by path
    /// (`teamName`, `email`, `members[1].rollNo`, ...). An added member is
    /// validated in full even if all its fields are still empty; it must be
    /// filled in or removed before the form passes.
    pub fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();

        if let Some(message) = (FIELD_TEAM_NAME.validator)(&self.submission.team_name) {
            errors.push(FIELD_TEAM_NAME.name, message);
        }

        validate_person(&self.submission.primary, None, &mut errors);
        for (index, member) in self.submission.members.iter().enumerate() {
            validate_person(member, Some(index), &mut errors);
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }

    /// Try to enter the submitting state. Returns false while a submission
    /// is already outstanding, in which case the caller must not submit.
    pub fn begin_submit(&mut self) -> bool {
        if self.submitting {
            return false;
        }
        self.submitting = true;
        true
    }

    /// Leave the submitting state once the round trip completed
    pub fn finish_submit(&mut self) {
        self.submitting = false;
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Clear all fields and members after a successful submission
    pub fn reset(&mut self) {
        self.submission = Submission::default();
    }
}

fn validate_person(record: &PersonRecord, member_index: Option<usize>, errors: &mut FieldErrors) {
    for descriptor in &PERSON_FIELDS {
        // Descriptor names always resolve to a PersonRecord field
        let value = record.field(descriptor.name).unwrap_or_default();
        if let Some(message) = (descriptor.validator)(value) {
            let path = match member_index {
                Some(i) => format!("members[{}].{}", i, descriptor.name),
                None => descriptor.name.to_string(),
            };
            errors.push(path, message);
        }
    }
}
