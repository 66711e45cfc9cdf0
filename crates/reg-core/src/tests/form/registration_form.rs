use crate::tests::valid_person;
use crate::{MAX_TEAM_MEMBERS, PersonRecord, RegistrationForm};

fn valid_solo_form() -> RegistrationForm {
    let mut form = RegistrationForm::new();
    form.submission.team_name = "Alpha".to_string();
    form.submission.primary = valid_person();
    form
}

#[test]
fn test_valid_solo_submission_passes() {
    let form = valid_solo_form();
    assert!(form.validate().is_ok());
}

#[test]
fn test_validation_accepts_iff_all_rules_hold() {
    // Each rule violated in isolation fails the whole form
    let mut short_name = valid_solo_form();
    short_name.submission.primary.full_name = "A".to_string();
    assert!(short_name.validate().is_err());

    let mut empty_roll = valid_solo_form();
    empty_roll.submission.primary.roll_no = String::new();
    assert!(empty_roll.validate().is_err());

    let mut bad_email = valid_solo_form();
    bad_email.submission.primary.email = "not-an-email".to_string();
    assert!(bad_email.validate().is_err());

    let mut empty_branch = valid_solo_form();
    empty_branch.submission.primary.branch = String::new();
    assert!(empty_branch.validate().is_err());

    // All rules holding at once passes
    assert!(valid_solo_form().validate().is_ok());
}

#[test]
fn test_add_member_caps_at_two() {
    let mut form = RegistrationForm::new();

    form.add_member();
    form.add_member();
    assert_eq!(form.submission.members.len(), MAX_TEAM_MEMBERS);

    // Third add is a no-op
    form.add_member();
    assert_eq!(form.submission.members.len(), MAX_TEAM_MEMBERS);
}

#[test]
fn test_remove_member_noop_when_empty() {
    let mut form = RegistrationForm::new();

    form.remove_member();
    assert!(form.submission.members.is_empty());
}

#[test]
fn test_add_then_remove_is_lifo() {
    let mut form = valid_solo_form();
    form.add_member();
    form.submission.members[0].full_name = "First Member".to_string();

    let before = form.submission.members.clone();

    form.add_member();
    form.submission.members[1].full_name = "Second Member".to_string();
    form.remove_member();

    // Back to the prior length and contents; the newest member went away
    assert_eq!(form.submission.members, before);
    assert_eq!(form.submission.members[0].full_name, "First Member");
}

#[test]
fn test_added_empty_member_fails_validation() {
    let mut form = valid_solo_form();
    form.add_member();

    let errors = form.validate().unwrap_err();

    // Every person field of the empty slot is reported
    assert!(errors.get("members[0].fullName").is_some());
    assert!(errors.get("members[0].rollNo").is_some());
    assert!(errors.get("members[0].email").is_some());
    assert!(errors.get("members[0].branch").is_some());

    // Removing the slot makes the form valid again
    form.remove_member();
    assert!(form.validate().is_ok());
}

#[test]
fn test_error_paths_carry_member_index() {
    let mut form = valid_solo_form();
    form.add_member();
    form.submission.members[0] = valid_person();
    form.add_member();
    form.submission.members[1] = valid_person();
    form.submission.members[1].email = "broken".to_string();

    let errors = form.validate().unwrap_err();

    assert_eq!(errors.len(), 1);
    assert_eq!(
        errors.get("members[1].email").unwrap(),
        "Invalid email address"
    );
}

#[test]
fn test_one_message_per_violated_field() {
    let mut form = valid_solo_form();
    form.submission.team_name = String::new();
    form.submission.primary.email = String::new();

    let errors = form.validate().unwrap_err();

    assert_eq!(errors.len(), 2);
    assert_eq!(
        errors.get("teamName").unwrap(),
        "Team name must be at least 2 characters"
    );
    assert_eq!(errors.get("email").unwrap(), "Invalid email address");
}

#[test]
fn test_field_errors_display_lists_paths() {
    let mut form = valid_solo_form();
    form.submission.primary.roll_no = String::new();

    let rendered = form.validate().unwrap_err().to_string();

    assert_eq!(rendered, "rollNo: Roll number is required");
}

#[test]
fn test_submit_gate_blocks_reentry() {
    let mut form = valid_solo_form();

    assert!(form.begin_submit());
    assert!(form.is_submitting());

    // A second attempt while in flight is refused
    assert!(!form.begin_submit());

    form.finish_submit();
    assert!(!form.is_submitting());
    assert!(form.begin_submit());
}

#[test]
fn test_reset_clears_everything() {
    let mut form = valid_solo_form();
    form.add_member();
    form.submission.members[0] = valid_person();

    form.reset();

    assert_eq!(form.submission.team_name, "");
    assert_eq!(form.submission.primary, PersonRecord::empty());
    assert!(form.submission.members.is_empty());
}
