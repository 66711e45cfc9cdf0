mod client;

use reg_core::{PersonRecord, SubmissionDto};

pub(crate) fn solo_submission() -> SubmissionDto {
    SubmissionDto {
        team_name: "Alpha".to_string(),
        full_name: "A B".to_string(),
        roll_no: "R1".to_string(),
        email: "a@b.com".to_string(),
        branch: "cse".to_string(),
        team_members: vec![],
    }
}

pub(crate) fn member(n: u32) -> PersonRecord {
    PersonRecord {
        full_name: format!("Member {}", n),
        roll_no: format!("R{}", n),
        email: format!("member{}@example.com", n),
        branch: "etc".to_string(),
    }
}
