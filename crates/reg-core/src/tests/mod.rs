mod form;
mod models;

use crate::PersonRecord;

/// A person that passes every field rule
pub(crate) fn valid_person() -> PersonRecord {
    PersonRecord {
        full_name: "Asha Rao".to_string(),
        roll_no: "2105551".to_string(),
        email: "asha@example.com".to_string(),
        branch: "cse".to_string(),
    }
}
