//! Display implementation for obra application messages.
//!
//! All user-facing text lives here, behind the `Display` impl for the
//! `Message` enum. Keeping the catalog in one place gives compile-time
//! checked parameters and a single point for future localization.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigModulePortal => "Portal settings".to_string(),
            Message::ConfigUnreadable(err) => format!("Existing configuration could not be read ({}). Starting fresh.", err),
            Message::PortalNotConfigured => "Portal is not configured. Run 'obra init' first.".to_string(),

            // === PROMPTS ===
            Message::PromptSelectModules => "Select nodes to configure".to_string(),
            Message::PromptPortalApiUrl => "Enter the portal API URL".to_string(),
            Message::PromptPortalAuthToken => "Enter your portal auth token".to_string(),
            Message::ConfirmDeleteProject(name) => format!("Delete project '{}'? This cannot be undone.", name),

            // === REPORT MESSAGES ===
            Message::UserReportHeader(uid) => format!("Report for user {}", uid),
            Message::AdminReportHeader => "Fleet report".to_string(),
            Message::SummaryHeader => "Summary:".to_string(),
            Message::CreatedProjectsHeader => "Created projects:".to_string(),
            Message::CollaboratorProjectsHeader => "Collaborating on:".to_string(),
            Message::CollaborationStatsHeader => "Collaboration:".to_string(),
            Message::UsersOverviewHeader => "Users:".to_string(),
            Message::RoleDistributionHeader => "Roles:".to_string(),
            Message::ByCountryHeader => "By country:".to_string(),
            Message::ByCompanyHeader => "By company:".to_string(),
            Message::InactiveUsersHeader => "Inactive users:".to_string(),
            Message::UsersGrowthHeader => "Registrations by month:".to_string(),
            Message::ProjectMetricsHeader => "Projects:".to_string(),
            Message::MostCollaborativeHeader => "Most collaborative projects:".to_string(),
            Message::MostActiveHeader => "Most active projects (30 days):".to_string(),
            Message::MostDelayedHeader => "Most delayed projects:".to_string(),
            Message::NoProjectsFound => "No projects found.".to_string(),

            // === PROJECT MANAGEMENT MESSAGES ===
            Message::ProjectCreated(name, id) => format!("Project '{}' created with id {}.", name, id),
            Message::ProjectUpdated(name) => format!("Project '{}' updated successfully.", name),
            Message::ProjectDeleted(id) => format!("Project {} deleted.", id),
            Message::ProjectNotFound(id) => format!("Project {} not found.", id),
            Message::ProjectDetailHeader(name) => format!("Project '{}'", name),
            Message::TimeInStatusHeader => "Time in status:".to_string(),
            Message::NoChangesRequested => "No changes requested.".to_string(),
            Message::OperationCancelled => "Operation cancelled".to_string(),

            // === COLLABORATOR MESSAGES ===
            Message::CollaboratorAdded(email) => format!("Collaborator '{}' added.", email),
            Message::CollaboratorRemoved(uid) => format!("Collaborator {} removed.", uid),
            Message::UserNotFoundByEmail(email) => format!("No user account matches '{}'.", email),
            Message::OwnerCannotBeCollaborator => "The project owner cannot be added as a collaborator.".to_string(),
            Message::AlreadyCollaborator(email) => format!("'{}' is already a collaborator on this project.", email),
            Message::NotACollaborator(uid) => format!("{} is not a collaborator on this project.", uid),
        };

        write!(f, "{}", text)
    }
}
