use crate::commands::Commands;

use clap::Parser;

#[derive(Parser)]
#[command(name = "reg")]
#[command(about = "Event registration from the terminal")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub(crate) command: Commands,

    /// Backend URL (defaults to REG_SERVER_URL, then http://127.0.0.1:5000)
    #[arg(long, global = true)]
    pub(crate) server: Option<String>,
}
