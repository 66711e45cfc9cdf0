//! reg - event registration CLI
//!
//! Submits a registration (team name, primary registrant, up to two team
//! members) to the backend, validating the form locally first.
//!
//! # Examples
//!
//! ```bash
//! # Solo registration
//! reg register --team-name Alpha --name "Asha Rao" --roll-no 2105551 \
//!     --email asha@example.com --branch cse
//!
//! # With one team member
//! reg register --team-name Alpha --name "Asha Rao" --roll-no 2105551 \
//!     --email asha@example.com --branch cse \
//!     --member "Ravi Iyer,2105552,ravi@example.com,etc"
//!
//! # See the accepted branch codes
//! reg branches
//! ```

mod cli;
mod commands;

use crate::cli::Cli;
use crate::commands::{Commands, parse_member};

use reg_cli::Gateway;
use reg_core::{Branch, MAX_TEAM_MEMBERS, RegistrationForm};

use std::process::ExitCode;

use clap::Parser;

const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:5000";

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Server URL: explicit flag > environment > default
    let server_url = cli
        .server
        .or_else(|| std::env::var("REG_SERVER_URL").ok())
        .unwrap_or_else(|| DEFAULT_SERVER_URL.to_string());

    match cli.command {
        Commands::Branches => {
            for branch in Branch::ALL {
                println!("{:<5} {}", branch.as_str(), branch.label());
            }
            ExitCode::SUCCESS
        }

        Commands::Register {
            team_name,
            name,
            roll_no,
            email,
            branch,
            members,
        } => {
            register(
                &server_url,
                team_name,
                name,
                roll_no,
                email,
                branch,
                members,
            )
            .await
        }
    }
}

async fn register(
    server_url: &str,
    team_name: String,
    name: String,
    roll_no: String,
    email: String,
    branch: String,
    members: Vec<String>,
) -> ExitCode {
    if members.len() > MAX_TEAM_MEMBERS {
        eprintln!("At most {MAX_TEAM_MEMBERS} team members can be added");
        return ExitCode::FAILURE;
    }

    let mut form = RegistrationForm::new();
    form.submission.team_name = team_name;
    form.submission.primary.full_name = name;
    form.submission.primary.roll_no = roll_no;
    form.submission.primary.email = email;
    form.submission.primary.branch = branch;

    for raw in &members {
        let record = match parse_member(raw) {
            Ok(record) => record,
            Err(message) => {
                eprintln!("--member: {message}");
                return ExitCode::FAILURE;
            }
        };

        form.add_member();
        if let Some(slot) = form.submission.members.last_mut() {
            *slot = record;
        }
    }

    // Field errors are shown inline; the submission never leaves the machine
    if let Err(errors) = form.validate() {
        for error in errors.iter() {
            eprintln!("{}: {}", error.path, error.message);
        }
        return ExitCode::FAILURE;
    }

    // One outstanding request at a time, same gate as the form UI
    if !form.begin_submit() {
        eprintln!("A submission is already in progress");
        return ExitCode::FAILURE;
    }

    let gateway = Gateway::new(server_url);
    let result = gateway.submit(&form.submission).await;
    form.finish_submit();

    match result {
        Ok(()) => {
            form.reset();
            println!("Form submitted successfully!");
            ExitCode::SUCCESS
        }
        Err(_) => {
            // Entered data is preserved in the form; resubmission is manual
            eprintln!("Failed to submit form. Please try again.");
            ExitCode::FAILURE
        }
    }
}
