//! Per-user project report command.
//!
//! Fetches the user's created and collaborating projects, runs the report
//! generator over them and renders the result as tables or JSON.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use super::connect;
use crate::libs::user_report::UserReportGenerator;
use crate::libs::view::View;

#[derive(Debug, Args)]
pub struct ReportArgs {
    /// User identifier to report on
    uid: String,

    /// Print the report as JSON instead of tables
    #[arg(long)]
    json: bool,

    /// Read collections from an exported snapshot directory instead of the portal
    #[arg(long, value_name = "DIR")]
    snapshot: Option<PathBuf>,
}

pub async fn cmd(args: ReportArgs) -> Result<()> {
    let (projects, _users) = connect(args.snapshot.as_deref())?;
    let report = UserReportGenerator::new(projects).generate(&args.uid).await?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    View::user_report(&args.uid, &report)
}
