//! Project management commands.
//!
//! Create, inspect, update and delete projects and edit their collaborator
//! sets. These always run against the portal; exported snapshots are
//! read-only and have no place here.

use std::sync::Arc;

use anyhow::Result;
use chrono::{NaiveDate, NaiveTime, Utc};
use clap::{Args, Subcommand};
use dialoguer::{theme::ColorfulTheme, Confirm};

use super::portal_client;
use crate::libs::dates::{days_remaining, time_in_status, DateValue};
use crate::libs::errors::ServiceError;
use crate::libs::messages::Message;
use crate::libs::project::{ProjectStatus, ProjectUpdate};
use crate::libs::service::{NewProject, ProjectService};
use crate::libs::view::View;
use crate::{msg_error, msg_info, msg_success};

#[derive(Debug, Args)]
pub struct ProjectArgs {
    #[command(subcommand)]
    command: ProjectCommand,
}

#[derive(Debug, Subcommand)]
enum ProjectCommand {
    /// Create a new project
    Create {
        /// Project name
        #[arg(long)]
        name: String,

        /// Project description
        #[arg(long, default_value = "")]
        description: String,

        /// Initial status
        #[arg(long, default_value = "pending", value_parser = parse_status)]
        status: ProjectStatus,

        /// Owner user identifier
        #[arg(long)]
        owner: String,

        /// Target completion date
        #[arg(long, value_name = "YYYY-MM-DD")]
        finish_date: Option<NaiveDate>,
    },
    /// Show one project with its deadline and status history breakdown
    Show {
        /// Project identifier
        id: String,
    },
    /// Update fields on an existing project
    Update {
        /// Project identifier
        id: String,

        /// New project name
        #[arg(long)]
        name: Option<String>,

        /// New project description
        #[arg(long)]
        description: Option<String>,

        /// New status
        #[arg(long, value_parser = parse_status)]
        status: Option<ProjectStatus>,

        /// New target completion date
        #[arg(long, value_name = "YYYY-MM-DD")]
        finish_date: Option<NaiveDate>,
    },
    /// Delete a project after confirmation
    Delete {
        /// Project identifier
        id: String,
    },
    /// Edit the collaborator set of a project
    Collaborators {
        /// Project identifier
        id: String,

        #[command(subcommand)]
        command: CollaboratorCommand,
    },
}

#[derive(Debug, Subcommand)]
enum CollaboratorCommand {
    /// Add the user registered under this email address
    Add {
        /// Email address of the account to add
        email: String,
    },
    /// Remove this user from the collaborator set
    Remove {
        /// User identifier to remove
        uid: String,
    },
}

/// Keeps clap concerns out of the model layer: statuses parse through the
/// same table the store deserializer uses.
fn parse_status(value: &str) -> Result<ProjectStatus, String> {
    ProjectStatus::parse(value)
        .ok_or_else(|| format!("unknown status '{}', expected pending, active or finished", value))
}

fn to_finish_date(date: NaiveDate) -> DateValue {
    DateValue::DateTime(date.and_time(NaiveTime::MIN).and_utc())
}

pub async fn cmd(args: ProjectArgs) -> Result<()> {
    let portal = Arc::new(portal_client()?);
    let service = ProjectService::new(portal.clone(), portal);

    match args.command {
        ProjectCommand::Create { name, description, status, owner, finish_date } => {
            handle_create(&service, name, description, status, owner, finish_date).await
        }
        ProjectCommand::Show { id } => handle_show(&service, id).await,
        ProjectCommand::Update { id, name, description, status, finish_date } => {
            handle_update(&service, id, name, description, status, finish_date).await
        }
        ProjectCommand::Delete { id } => handle_delete(&service, id).await,
        ProjectCommand::Collaborators { id, command } => match command {
            CollaboratorCommand::Add { email } => handle_add_collaborator(&service, id, email).await,
            CollaboratorCommand::Remove { uid } => handle_remove_collaborator(&service, id, uid).await,
        },
    }
}

async fn handle_create(
    service: &ProjectService,
    name: String,
    description: String,
    status: ProjectStatus,
    owner: String,
    finish_date: Option<NaiveDate>,
) -> Result<()> {
    let input = NewProject {
        name,
        description,
        status,
        owner,
        finish_date: finish_date.map(|date| date.and_time(NaiveTime::MIN).and_utc()),
    };

    match service.create_project(input).await {
        Ok(project) => {
            msg_success!(Message::ProjectCreated(project.name, project.id));
            Ok(())
        }
        Err(err) => report_service_error(err),
    }
}

async fn handle_show(service: &ProjectService, id: String) -> Result<()> {
    let project = match service.get_project(&id).await {
        Ok(project) => project,
        Err(err) => return report_service_error(err),
    };

    let now = Utc::now();
    let remaining = days_remaining(&project, now);
    let history = time_in_status(&project, now);
    View::project(&project, remaining, &history)
}

async fn handle_update(
    service: &ProjectService,
    id: String,
    name: Option<String>,
    description: Option<String>,
    status: Option<ProjectStatus>,
    finish_date: Option<NaiveDate>,
) -> Result<()> {
    let changes = ProjectUpdate {
        name,
        description,
        status,
        finish_date: finish_date.map(to_finish_date),
        collaborators: None,
    };

    if changes.is_empty() {
        msg_info!(Message::NoChangesRequested);
        return Ok(());
    }

    let project = match service.get_project(&id).await {
        Ok(project) => project,
        Err(err) => return report_service_error(err),
    };

    match service.update_project(&id, &changes).await {
        Ok(()) => {
            msg_success!(Message::ProjectUpdated(project.name));
            Ok(())
        }
        Err(err) => report_service_error(err),
    }
}

async fn handle_delete(service: &ProjectService, id: String) -> Result<()> {
    let project = match service.get_project(&id).await {
        Ok(project) => project,
        Err(err) => return report_service_error(err),
    };

    let confirmed = Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::ConfirmDeleteProject(project.name).to_string())
        .default(false)
        .interact()?;
    if !confirmed {
        msg_info!(Message::OperationCancelled);
        return Ok(());
    }

    match service.delete_project(&id).await {
        Ok(()) => {
            msg_success!(Message::ProjectDeleted(id));
            Ok(())
        }
        Err(err) => report_service_error(err),
    }
}

async fn handle_add_collaborator(service: &ProjectService, id: String, email: String) -> Result<()> {
    match service.add_collaborator(&id, &email).await {
        Ok(_uid) => {
            msg_success!(Message::CollaboratorAdded(email));
            Ok(())
        }
        // The service reports the duplicate by uid; the email the user typed
        // is the friendlier handle for it.
        Err(ServiceError::AlreadyCollaborator(_)) => {
            msg_error!(Message::AlreadyCollaborator(email));
            Ok(())
        }
        Err(err) => report_service_error(err),
    }
}

async fn handle_remove_collaborator(service: &ProjectService, id: String, uid: String) -> Result<()> {
    match service.remove_collaborator(&id, &uid).await {
        Ok(()) => {
            msg_success!(Message::CollaboratorRemoved(uid));
            Ok(())
        }
        Err(err) => report_service_error(err),
    }
}

/// Validation refusals print a message and exit cleanly; only source
/// failures surface as hard errors.
fn report_service_error(err: ServiceError) -> Result<()> {
    match err {
        ServiceError::ProjectNotFound(id) => {
            msg_error!(Message::ProjectNotFound(id));
            Ok(())
        }
        ServiceError::UserNotFound(email) => {
            msg_error!(Message::UserNotFoundByEmail(email));
            Ok(())
        }
        ServiceError::OwnerAsCollaborator => {
            msg_error!(Message::OwnerCannotBeCollaborator);
            Ok(())
        }
        ServiceError::AlreadyCollaborator(uid) => {
            msg_error!(Message::AlreadyCollaborator(uid));
            Ok(())
        }
        ServiceError::NotACollaborator(uid) => {
            msg_error!(Message::NotACollaborator(uid));
            Ok(())
        }
        ServiceError::Fetch(err) => Err(err.into()),
    }
}
