//! Command-line interface definition and dispatch.
//!
//! Wires clap subcommands to their handlers and owns the plumbing every
//! handler shares: resolving a data source (portal client or exported
//! snapshot) behind the repository traits.

use std::path::Path;
use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::api::Portal;
use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::msg_bail_anyhow;
use crate::store::{self, ProjectRepository, UserRepository};

pub mod admin;
pub mod init;
pub mod project;
pub mod report;

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init,
    #[command(about = "Generate a project report for one user")]
    Report(report::ReportArgs),
    #[command(about = "Generate the platform-wide admin report")]
    Admin(admin::AdminArgs),
    #[command(about = "Manage projects and their collaborators")]
    Project(project::ProjectArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub async fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init => init::cmd(),
            Commands::Report(args) => report::cmd(args).await,
            Commands::Admin(args) => admin::cmd(args).await,
            Commands::Project(args) => project::cmd(args).await,
        }
    }
}

/// Resolves the repositories a report runs against: an exported snapshot
/// directory when `--snapshot` is given, the configured portal otherwise.
pub(crate) fn connect(
    snapshot: Option<&Path>,
) -> Result<(Arc<dyn ProjectRepository>, Arc<dyn UserRepository>)> {
    if let Some(dir) = snapshot {
        let loaded = Arc::new(store::load_snapshot(dir)?);
        let projects: Arc<dyn ProjectRepository> = loaded.clone();
        let users: Arc<dyn UserRepository> = loaded;
        return Ok((projects, users));
    }

    let portal = Arc::new(portal_client()?);
    let projects: Arc<dyn ProjectRepository> = portal.clone();
    let users: Arc<dyn UserRepository> = portal;
    Ok((projects, users))
}

/// Builds a portal client from the saved configuration. Refuses to guess:
/// without a `portal` section the caller gets the init hint instead of a
/// connection error against some default URL.
pub(crate) fn portal_client() -> Result<Portal> {
    let config = Config::read()?;
    match config.portal {
        Some(portal) => Ok(Portal::new(&portal)),
        None => msg_bail_anyhow!(Message::PortalNotConfigured),
    }
}
