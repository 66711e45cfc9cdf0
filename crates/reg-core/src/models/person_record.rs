//! One registrant's identifying fields.

use serde::{Deserialize, Serialize};

/// A single registrant: the primary entrant or one added team member.
///
/// Fields hold whatever the user has typed so far; they are only checked
/// against the field rules when the form is validated. `branch` carries the
/// short code (`"cse"`, ...) selected from [`crate::Branch::ALL`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct PersonRecord {
    pub full_name: String,
    pub roll_no: String,
    pub email: String,
    pub branch: String,
}

impl PersonRecord {
    /// A freshly added, not-yet-filled member slot
    pub fn empty() -> Self {
        Self::default()
    }

    /// Look up a field value by descriptor name
    pub fn field(&self, name: &str) -> Option<&str> {
        match name {
            "fullName" => Some(&self.full_name),
            "rollNo" => Some(&self.roll_no),
            "email" => Some(&self.email),
            "branch" => Some(&self.branch),
            _ => None,
        }
    }
}
