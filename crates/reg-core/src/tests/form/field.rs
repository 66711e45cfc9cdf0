use crate::form::field::{FIELD_TEAM_NAME, FieldKind, PERSON_FIELDS};

fn person_validator(name: &str) -> fn(&str) -> Option<String> {
    PERSON_FIELDS
        .iter()
        .find(|d| d.name == name)
        .map(|d| d.validator)
        .unwrap()
}

#[test]
fn test_team_name_needs_two_characters() {
    let validate = FIELD_TEAM_NAME.validator;

    assert!(validate("").is_some());
    assert!(validate("A").is_some());
    assert!(validate("AB").is_none());
}

#[test]
fn test_full_name_needs_two_characters() {
    let validate = person_validator("fullName");

    assert!(validate("").is_some());
    assert!(validate("A").is_some());
    assert!(validate("Jo").is_none());
    assert!(validate("A B").is_none());
}

#[test]
fn test_roll_no_rejects_empty_only() {
    let validate = person_validator("rollNo");

    assert_eq!(validate("").unwrap(), "Roll number is required");
    assert!(validate("1").is_none());
    assert!(validate("21BCE5512").is_none());
}

#[test]
fn test_email_format() {
    let validate = person_validator("email");

    assert!(validate("").is_some());
    assert!(validate("not-an-email").is_some());
    assert!(validate("missing@tld@double").is_some());
    assert!(validate("a@b.com").is_none());
    assert!(validate("first.last+tag@example.co.in").is_none());
}

#[test]
fn test_branch_must_be_known_code() {
    let validate = person_validator("branch");

    assert_eq!(validate("").unwrap(), "Branch is required");
    assert_eq!(validate("chemical").unwrap(), "Select a valid branch");
    assert!(validate("cse").is_none());
    assert!(validate("ae").is_none());
}

#[test]
fn test_descriptor_kinds() {
    assert_eq!(FIELD_TEAM_NAME.kind, FieldKind::Text);

    let kinds: Vec<FieldKind> = PERSON_FIELDS.iter().map(|d| d.kind).collect();
    assert_eq!(
        kinds,
        vec![
            FieldKind::Text,
            FieldKind::Text,
            FieldKind::Email,
            FieldKind::Select
        ]
    );
}
