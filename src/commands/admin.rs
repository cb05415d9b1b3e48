//! Platform-wide admin report command.
//!
//! Aggregates every user and project into the dashboard sections: user
//! distributions, project metrics, rankings and the signup growth series.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use super::connect;
use crate::libs::admin_report::AdminReportGenerator;
use crate::libs::view::View;

#[derive(Debug, Args)]
pub struct AdminArgs {
    /// Print the report as JSON instead of tables
    #[arg(long)]
    json: bool,

    /// Read collections from an exported snapshot directory instead of the portal
    #[arg(long, value_name = "DIR")]
    snapshot: Option<PathBuf>,
}

pub async fn cmd(args: AdminArgs) -> Result<()> {
    let (projects, users) = connect(args.snapshot.as_deref())?;
    let report = AdminReportGenerator::new(projects, users).generate().await?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    View::admin_report(&report)
}
