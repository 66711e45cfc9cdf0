pub mod error;
pub mod form;
pub mod models;

#[cfg(test)]
mod tests;

pub use error::{CoreError, Result};
pub use form::field::{FIELD_TEAM_NAME, FieldDescriptor, FieldKind, PERSON_FIELDS};
pub use form::field_errors::{FieldError, FieldErrors};
pub use form::registration_form::RegistrationForm;
pub use models::branch::Branch;
pub use models::person_record::PersonRecord;
pub use models::submission::{MAX_TEAM_MEMBERS, Submission};
pub use models::submission_dto::SubmissionDto;
