//! Static field descriptors shared by validation and form rendering.
//!
//! Every input on the form is described once here; a renderer iterates the
//! descriptors to produce inputs, and validation iterates them to check
//! values. Validators return the first violation as a message, or `None`
//! when the value passes.

use crate::Branch;

use std::str::FromStr;

use validator::ValidateEmail;

/// What kind of input a field is rendered as
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
    Select,
}

/// One form field: wire name, display label, input kind, and its rule
pub struct FieldDescriptor {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub validator: fn(&str) -> Option<String>,
}

/// The team-name field, present once per submission
pub const FIELD_TEAM_NAME: FieldDescriptor = FieldDescriptor {
    name: "teamName",
    label: "Team Name",
    kind: FieldKind::Text,
    validator: validate_team_name,
};

/// The per-person fields, applied to the primary registrant and to every
/// added team member
pub const PERSON_FIELDS: [FieldDescriptor; 4] = [
    FieldDescriptor {
        name: "fullName",
        label: "Full Name",
        kind: FieldKind::Text,
        validator: validate_full_name,
    },
    FieldDescriptor {
        name: "rollNo",
        label: "Roll No",
        kind: FieldKind::Text,
        validator: validate_roll_no,
    },
    FieldDescriptor {
        name: "email",
        label: "Email",
        kind: FieldKind::Email,
        validator: validate_email,
    },
    FieldDescriptor {
        name: "branch",
        label: "Branch",
        kind: FieldKind::Select,
        validator: validate_branch,
    },
];

fn validate_team_name(value: &str) -> Option<String> {
    if value.chars().count() < 2 {
        return Some("Team name must be at least 2 characters".to_string());
    }
    None
}

fn validate_full_name(value: &str) -> Option<String> {
    if value.chars().count() < 2 {
        return Some("Name must be at least 2 characters".to_string());
    }
    None
}

fn validate_roll_no(value: &str) -> Option<String> {
    if value.is_empty() {
        return Some("Roll number is required".to_string());
    }
    None
}

fn validate_email(value: &str) -> Option<String> {
    if !value.validate_email() {
        return Some("Invalid email address".to_string());
    }
    None
}

fn validate_branch(value: &str) -> Option<String> {
    if value.is_empty() {
        return Some("Branch is required".to_string());
    }
    if Branch::from_str(value).is_err() {
        return Some("Select a valid branch".to_string());
    }
    None
}
