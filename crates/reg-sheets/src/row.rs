//! Flattening a submission into fixed-column spreadsheet rows.

use reg_core::SubmissionDto;

/// Columns per appended row: team name, full name, roll no, email, branch
pub const ROW_COLUMNS: usize = 5;

/// One spreadsheet row in column order
pub type SheetRow = [String; ROW_COLUMNS];

/// Flatten a submission into one row per person.
///
/// The primary registrant's row comes first, then one row per team member in
/// sequence order; every row is prefixed with the shared team name. A solo
/// registration yields exactly one row.
pub fn flatten_rows(data: &SubmissionDto) -> Vec<SheetRow> {
    let mut rows = Vec::with_capacity(1 + data.team_members.len());

    rows.push([
        data.team_name.clone(),
        data.full_name.clone(),
        data.roll_no.clone(),
        data.email.clone(),
        data.branch.clone(),
    ]);

    for member in &data.team_members {
        rows.push([
            data.team_name.clone(),
            member.full_name.clone(),
            member.roll_no.clone(),
            member.email.clone(),
            member.branch.clone(),
        ]);
    }

    rows
}
