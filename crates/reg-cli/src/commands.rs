use reg_core::PersonRecord;

use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    /// Fill in and submit a registration
    Register {
        /// Team name (also required for solo registrations)
        #[arg(long)]
        team_name: String,

        /// Primary registrant's full name
        #[arg(long)]
        name: String,

        /// Primary registrant's roll number
        #[arg(long)]
        roll_no: String,

        /// Primary registrant's email
        #[arg(long)]
        email: String,

        /// Branch code (see `reg branches`)
        #[arg(long)]
        branch: String,

        /// Additional team member as "name,roll,email,branch"; repeat for a
        /// second member
        #[arg(long = "member")]
        members: Vec<String>,
    },

    /// List the branch codes accepted by --branch
    Branches,
}

/// Parse a `--member` value: four comma-separated fields
pub fn parse_member(raw: &str) -> Result<PersonRecord, String> {
    let parts: Vec<&str> = raw.splitn(4, ',').map(str::trim).collect();

    if parts.len() != 4 {
        return Err(format!(
            "expected \"name,roll,email,branch\", got \"{raw}\""
        ));
    }

    Ok(PersonRecord {
        full_name: parts[0].to_string(),
        roll_no: parts[1].to_string(),
        email: parts[2].to_string(),
        branch: parts[3].to_string(),
    })
}
