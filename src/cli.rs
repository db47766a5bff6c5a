use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "calpaint")]
#[command(about = "Paint RAZTOR into a git contribution calendar with dated empty commits")]
#[command(version)]
pub struct Cli {
    #[clap(flatten)]
    pub common: CommonArgs,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Args, Clone)]
pub struct CommonArgs {
    #[arg(long, help = "Path to git repository")]
    pub repo: Option<PathBuf>,

    #[arg(
        long,
        help = "Last day of the calendar (RFC3339, YYYY-MM-DD, '3 weeks ago', '10d', or a revision); defaults to today"
    )]
    pub anchor: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Show the dates the word occupies on the calendar")]
    Plan {
        #[arg(long, help = "Output as JSON")]
        json: bool,

        #[arg(long, help = "Output as NDJSON")]
        ndjson: bool,
    },
    #[command(about = "Derive the daily commit volume from the last year of history")]
    Estimate {
        #[arg(long, help = "Output as JSON")]
        json: bool,
    },
    #[command(
        about = "Create the empty commits",
        long_about = "Create the empty commits. Runs are not idempotent: painting twice appends a second set of commits."
    )]
    Paint {
        #[arg(long, help = "Compute everything but create no commits")]
        dry_run: bool,

        #[arg(long, help = "Output the run summary as JSON")]
        json: bool,
    },
}

impl Cli {
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    pub fn execute(self) -> Result<()> {
        match self.command {
            Commands::Plan { json, ndjson } => crate::plan::exec(self.common, json, ndjson),
            Commands::Estimate { json } => crate::estimate::exec(self.common, json),
            Commands::Paint { dry_run, json } => crate::paint::exec(self.common, dry_run, json),
        }
    }
}
