//! Per-user project report.
//!
//! Answers "what does this user's portfolio look like": the projects they
//! created (annotated with remaining-time figures), the projects listing them
//! as a collaborator, collaboration statistics, and a status summary. The two
//! backing queries run concurrently; aggregation is a single pass over each
//! result set.

use super::dates::{days_remaining, project_duration, RemainingDays};
use super::errors::{FetchError, RecordError};
use super::project::{Project, ProjectStatus};
use crate::msg_debug;
use crate::store::ProjectRepository;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::HashSet;
use std::sync::Arc;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserReport {
    pub user_projects: UserProjects,
    pub collaboration_stats: CollaborationStats,
    pub summary: Summary,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProjects {
    pub created: Vec<ProjectEntry>,
    pub collaborator: Vec<Project>,
}

/// A created project with the derived figures the dashboard shows alongside
/// the stored fields.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectEntry {
    #[serde(flatten)]
    pub project: Project,
    pub days_remaining: RemainingDays,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_days: Option<f64>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CollaborationStats {
    pub total_collaborations: usize,
    pub unique_collaborators: usize,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub total_created: usize,
    pub total_collaborator: usize,
    pub active_projects: usize,
    pub pending_projects: usize,
    pub finished_projects: usize,
    pub total_project_time: f64,
}

pub struct UserReportGenerator {
    projects: Arc<dyn ProjectRepository>,
}

impl UserReportGenerator {
    pub fn new(projects: Arc<dyn ProjectRepository>) -> Self {
        Self { projects }
    }

    /// Fetches both project lists for `uid` concurrently and aggregates them.
    ///
    /// A user with no projects yields an all-zero report, never an error.
    /// Only a failed fetch aborts the run.
    pub async fn generate(&self, uid: &str) -> Result<UserReport, FetchError> {
        let (created, collaborator) = tokio::try_join!(
            self.projects.find_by_owner(uid),
            self.projects.find_by_collaborator(uid),
        )?;
        Ok(build_report(created, collaborator, Utc::now()))
    }
}

/// Pure aggregation over already-fetched batches.
///
/// List order follows the fetch order; no re-sort. The two lists are not
/// de-duplicated against each other: a uid that is both owner and a stray
/// collaborator entry of the same project appears in both.
pub fn build_report(created: Vec<Project>, collaborator: Vec<Project>, now: DateTime<Utc>) -> UserReport {
    let mut active_projects = 0;
    let mut pending_projects = 0;
    let mut finished_projects = 0;
    let mut total_project_time = 0.0;

    let created: Vec<ProjectEntry> = created
        .into_iter()
        .map(|project| {
            match project.status {
                Some(ProjectStatus::Active) => active_projects += 1,
                Some(ProjectStatus::Pending) => pending_projects += 1,
                Some(ProjectStatus::Finished) => finished_projects += 1,
                None => {
                    let err = RecordError::MissingField { field: "status" };
                    msg_debug!(format!("project {}: {}, status counts unchanged", project.id, err));
                }
            }
            let duration_days = project_duration(&project, now);
            if let Some(days) = duration_days {
                total_project_time += days;
            }
            let days_remaining = days_remaining(&project, now);
            ProjectEntry {
                project,
                days_remaining,
                duration_days,
            }
        })
        .collect();

    // Collaborators visible on the projects this user collaborates on. The
    // user's own uid is not filtered out of the set.
    let mut seen = HashSet::new();
    for project in &collaborator {
        for uid in &project.collaborators {
            seen.insert(uid.clone());
        }
        if let Some(days) = project_duration(project, now) {
            total_project_time += days;
        }
    }

    let total_created = created.len();
    let total_collaborator = collaborator.len();
    let unique_collaborators = seen.len();

    UserReport {
        user_projects: UserProjects { created, collaborator },
        collaboration_stats: CollaborationStats {
            total_collaborations: total_collaborator,
            unique_collaborators,
        },
        summary: Summary {
            total_created,
            total_collaborator,
            active_projects,
            pending_projects,
            finished_projects,
            total_project_time,
        },
    }
}
