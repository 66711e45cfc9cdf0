use crate::tests::valid_person;
use crate::{Submission, SubmissionDto};

#[test]
fn test_dto_inlines_primary_fields() {
    let submission = Submission {
        team_name: "Alpha".to_string(),
        primary: valid_person(),
        members: vec![valid_person()],
    };

    let dto = SubmissionDto::from(&submission);

    assert_eq!(dto.team_name, "Alpha");
    assert_eq!(dto.full_name, "Asha Rao");
    assert_eq!(dto.roll_no, "2105551");
    assert_eq!(dto.email, "asha@example.com");
    assert_eq!(dto.branch, "cse");
    assert_eq!(dto.team_members.len(), 1);
}

#[test]
fn test_dto_serializes_camel_case() {
    let submission = Submission {
        team_name: "Alpha".to_string(),
        primary: valid_person(),
        members: vec![],
    };

    let json = serde_json::to_value(SubmissionDto::from(&submission)).unwrap();

    assert_eq!(json["teamName"], "Alpha");
    assert_eq!(json["fullName"], "Asha Rao");
    assert_eq!(json["rollNo"], "2105551");
    assert_eq!(json["email"], "asha@example.com");
    assert_eq!(json["branch"], "cse");
    assert!(json["teamMembers"].as_array().unwrap().is_empty());
}

#[test]
fn test_missing_team_members_defaults_to_empty() {
    let dto: SubmissionDto = serde_json::from_str(
        r#"{
            "teamName": "Alpha",
            "fullName": "A B",
            "rollNo": "R1",
            "email": "a@b.com",
            "branch": "cse"
        }"#,
    )
    .unwrap();

    assert!(dto.team_members.is_empty());
}

#[test]
fn test_dto_round_trips_into_submission() {
    let original = Submission {
        team_name: "Alpha".to_string(),
        primary: valid_person(),
        members: vec![valid_person(), valid_person()],
    };

    let back = Submission::from(SubmissionDto::from(&original));

    assert_eq!(back, original);
}
