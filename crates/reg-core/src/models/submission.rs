//! One complete form payload: primary registrant plus optional team members.

use crate::PersonRecord;

use serde::{Deserialize, Serialize};

/// Hard cap on additional team members per submission
pub const MAX_TEAM_MEMBERS: usize = 2;

/// One registration: a team name, the primary registrant, and up to
/// [`MAX_TEAM_MEMBERS`] additional members in insertion order.
///
/// A submission is built fresh per form session, mutated as the user edits,
/// and discarded after a successful submit. Member order is preserved into
/// the appended rows but carries no meaning beyond display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    pub team_name: String,
    pub primary: PersonRecord,
    pub members: Vec<PersonRecord>,
}
