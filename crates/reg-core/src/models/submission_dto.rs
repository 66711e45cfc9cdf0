use crate::{PersonRecord, Submission};

use serde::{Deserialize, Serialize};

/// Transport shape of a submission: the primary registrant's fields are
/// inlined next to the team name, members travel as a `teamMembers` array.
///
/// This is the `data` object POSTed to `/save-to-sheets`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionDto {
    pub team_name: String,
    pub full_name: String,
    pub roll_no: String,
    pub email: String,
    pub branch: String,
    #[serde(default)]
    pub team_members: Vec<PersonRecord>,
}

impl From<&Submission> for SubmissionDto {
    fn from(s: &Submission) -> Self {
        Self {
            team_name: s.team_name.clone(),
            full_name: s.primary.full_name.clone(),
            roll_no: s.primary.roll_no.clone(),
            email: s.primary.email.clone(),
            branch: s.primary.branch.clone(),
            team_members: s.members.clone(),
        }
    }
}

impl From<SubmissionDto> for Submission {
    fn from(d: SubmissionDto) -> Self {
        Self {
            team_name: d.team_name,
            primary: PersonRecord {
                full_name: d.full_name,
                roll_no: d.roll_no,
                email: d.email,
                branch: d.branch,
            },
            members: d.team_members,
        }
    }
}
