//! Fleet-wide dashboard report.
//!
//! One run fetches the full user and project collections (plus the three
//! status-filtered counts) concurrently, then computes every metric with
//! linear scans over the in-memory batches. Collections are assumed to fit
//! in memory for one computation; there is no pagination.
//!
//! Per-record defects (unreadable dates, absent fields) only remove the
//! affected record from the affected metric. They are logged through
//! `msg_debug!` so a debug run shows exactly what was skipped where.

use super::dates::{days_between, project_duration, to_epoch_millis};
use super::errors::FetchError;
use super::project::{Project, ProjectStatus};
use super::user::User;
use crate::msg_debug;
use crate::store::{ProjectRepository, UserRepository};
use chrono::{DateTime, Datelike, Utc};
use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::Arc;

const MONTH_WINDOW_MS: i64 = 30 * 86_400_000;
const INACTIVE_WINDOW_MS: i64 = 60 * 86_400_000;
const RANKING_SIZE: usize = 5;

/// Bucket for users without a role. Lowercase like the stored role strings.
const UNKNOWN_ROLE: &str = "unknown";
const UNKNOWN_BUCKET: &str = "Unknown";
const NO_COMPANY_BUCKET: &str = "No Company";
const NEVER_LOGGED_IN: &str = "Never";
const LAST_LOGIN_FORMAT: &str = "%Y-%m-%d %H:%M";

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminReport {
    pub users: UsersSection,
    pub projects: ProjectsSection,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UsersSection {
    pub total_users: usize,
    pub role_distribution: BTreeMap<String, usize>,
    pub users_last_month: usize,
    pub by_country: BTreeMap<String, usize>,
    pub by_company: BTreeMap<String, usize>,
    pub inactive_users: Vec<InactiveUser>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InactiveUser {
    pub id: String,
    pub name: String,
    pub last_login: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectsSection {
    pub total_projects: usize,
    pub project_status_distribution: StatusDistribution,
    pub projects_without_collaborators: usize,
    pub avg_collaborators_per_project: f64,
    pub avg_project_duration: f64,
    pub overdue_projects: usize,
    pub projects_last_month: usize,
    pub completion_rate: f64,
    pub most_collaborative_projects: Vec<CollaborativeProject>,
    pub most_active_projects: Vec<ActiveProject>,
    pub most_delayed_projects: Vec<DelayedProject>,
    pub users_growth: BTreeMap<String, usize>,
}

/// Exact per-status counts, taken from the status-filtered fetches rather
/// than a scan of the full batch.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusDistribution {
    pub pending: usize,
    pub active: usize,
    pub finished: usize,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CollaborativeProject {
    pub id: String,
    pub name: String,
    pub collaborators: usize,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActiveProject {
    pub id: String,
    pub name: String,
    pub recent_activity: usize,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DelayedProject {
    pub id: String,
    pub name: String,
    pub days_overdue: u32,
}

pub struct AdminReportGenerator {
    projects: Arc<dyn ProjectRepository>,
    users: Arc<dyn UserRepository>,
}

impl AdminReportGenerator {
    pub fn new(projects: Arc<dyn ProjectRepository>, users: Arc<dyn UserRepository>) -> Self {
        Self { projects, users }
    }

    /// Issues all five fetches concurrently and aggregates once they are in.
    /// Any failed fetch aborts the whole run; no partial report is returned.
    pub async fn generate(&self) -> Result<AdminReport, FetchError> {
        let (users, projects, pending, active, finished) = tokio::try_join!(
            self.users.find_all(),
            self.projects.find_all(),
            self.projects.find_by_status(ProjectStatus::Pending),
            self.projects.find_by_status(ProjectStatus::Active),
            self.projects.find_by_status(ProjectStatus::Finished),
        )?;
        let status = StatusDistribution {
            pending: pending.len(),
            active: active.len(),
            finished: finished.len(),
        };
        Ok(build_report(users, projects, status, Utc::now()))
    }
}

/// Pure aggregation over already-fetched batches.
pub fn build_report(users: Vec<User>, projects: Vec<Project>, status: StatusDistribution, now: DateTime<Utc>) -> AdminReport {
    AdminReport {
        users: build_users_section(&users, now),
        projects: build_projects_section(&projects, &users, status, now),
    }
}

fn build_users_section(users: &[User], now: DateTime<Utc>) -> UsersSection {
    let now_ms = now.timestamp_millis();
    let month_ago = now_ms - MONTH_WINDOW_MS;
    let inactive_cutoff = now_ms - INACTIVE_WINDOW_MS;

    let mut role_distribution: BTreeMap<String, usize> = BTreeMap::new();
    let mut by_country: BTreeMap<String, usize> = BTreeMap::new();
    let mut by_company: BTreeMap<String, usize> = BTreeMap::new();
    let mut users_last_month = 0;
    let mut inactive_users = Vec::new();

    for user in users {
        // Role strings are counted verbatim; the store tolerates arbitrary
        // values and so does the distribution.
        let role = user.role.clone().unwrap_or_else(|| UNKNOWN_ROLE.to_string());
        *role_distribution.entry(role).or_insert(0) += 1;

        let country = match user.country.as_deref() {
            Some(country) if !country.is_empty() => country.to_string(),
            _ => UNKNOWN_BUCKET.to_string(),
        };
        *by_country.entry(country).or_insert(0) += 1;

        let company = match user.company.as_deref() {
            Some(company) if !company.is_empty() => normalize_company(company),
            _ => NO_COMPANY_BUCKET.to_string(),
        };
        *by_company.entry(company).or_insert(0) += 1;

        let last_login = match to_epoch_millis(user.last_login.as_ref()) {
            Ok(value) => value,
            Err(err) => {
                msg_debug!(format!("user {}: {}, login metrics skipped", user.uid, err));
                continue;
            }
        };

        if matches!(last_login, Some(ms) if ms > month_ago) {
            users_last_month += 1;
        }

        // Historical quirk kept on purpose: this bucket selects users whose
        // last login is RECENT (or who never logged in), yet the platform has
        // always shipped it under the "inactive users" label.
        match last_login {
            None => inactive_users.push(InactiveUser {
                id: user.uid.clone(),
                name: user.display_name(),
                last_login: NEVER_LOGGED_IN.to_string(),
            }),
            Some(ms) if ms > inactive_cutoff => {
                if let Some(logged_in) = DateTime::from_timestamp_millis(ms) {
                    inactive_users.push(InactiveUser {
                        id: user.uid.clone(),
                        name: user.display_name(),
                        last_login: logged_in.format(LAST_LOGIN_FORMAT).to_string(),
                    });
                }
            }
            Some(_) => {}
        }
    }

    UsersSection {
        total_users: users.len(),
        role_distribution,
        users_last_month,
        by_country,
        by_company,
        inactive_users,
    }
}

fn build_projects_section(
    projects: &[Project],
    users: &[User],
    status: StatusDistribution,
    now: DateTime<Utc>,
) -> ProjectsSection {
    let now_ms = now.timestamp_millis();
    let month_ago = now_ms - MONTH_WINDOW_MS;
    let total_projects = projects.len();

    let projects_without_collaborators = projects.iter().filter(|p| p.collaborators.is_empty()).count();

    let collaborator_total: usize = projects.iter().map(|p| p.collaborators.len()).sum();
    let avg_collaborators_per_project = if total_projects == 0 {
        0.0
    } else {
        collaborator_total as f64 / total_projects as f64
    };

    // Finished projects with both boundary dates usable; in-flight projects
    // never feed the average.
    let mut durations = Vec::new();
    for project in projects {
        if project.status != Some(ProjectStatus::Finished) || project.finish_date.is_none() {
            continue;
        }
        if let Some(days) = project_duration(project, now) {
            durations.push(days);
        }
    }
    let avg_project_duration = if durations.is_empty() {
        0.0
    } else {
        durations.iter().sum::<f64>() / durations.len() as f64
    };

    let mut overdue: Vec<(&Project, f64)> = Vec::new();
    for project in projects {
        match to_epoch_millis(project.finish_date.as_ref()) {
            Ok(Some(finish)) if finish < now_ms && project.status != Some(ProjectStatus::Finished) => {
                overdue.push((project, days_between(finish, now_ms)));
            }
            Ok(_) => {}
            Err(err) => {
                msg_debug!(format!("project {}: {}, overdue check skipped", project.id, err));
            }
        }
    }

    let mut projects_last_month = 0;
    for project in projects {
        match to_epoch_millis(project.created_at.as_ref()) {
            Ok(Some(created)) if created > month_ago => projects_last_month += 1,
            Ok(_) => {}
            Err(err) => {
                msg_debug!(format!("project {}: {}, creation window skipped", project.id, err));
            }
        }
    }

    // The finished count comes from the status-filtered fetch, not from a
    // scan of the full batch.
    let completion_rate = if total_projects == 0 {
        0.0
    } else {
        status.finished as f64 / total_projects as f64 * 100.0
    };

    // Stable sorts throughout: ties keep their fetch order.
    let mut by_collaborators: Vec<&Project> = projects.iter().collect();
    by_collaborators.sort_by(|a, b| b.collaborators.len().cmp(&a.collaborators.len()));
    let most_collaborative_projects = by_collaborators
        .iter()
        .take(RANKING_SIZE)
        .map(|p| CollaborativeProject {
            id: p.id.clone(),
            name: p.name.clone(),
            collaborators: p.collaborators.len(),
        })
        .collect();

    let mut by_activity: Vec<(&Project, usize)> = projects.iter().map(|p| (p, recent_activity(p, month_ago))).collect();
    by_activity.sort_by(|a, b| b.1.cmp(&a.1));
    let most_active_projects = by_activity
        .iter()
        .take(RANKING_SIZE)
        .map(|(p, activity)| ActiveProject {
            id: p.id.clone(),
            name: p.name.clone(),
            recent_activity: *activity,
        })
        .collect();

    let mut most_delayed_projects: Vec<DelayedProject> = overdue
        .iter()
        .map(|(p, days)| DelayedProject {
            id: p.id.clone(),
            name: p.name.clone(),
            days_overdue: days.ceil() as u32,
        })
        .collect();
    most_delayed_projects.sort_by(|a, b| b.days_overdue.cmp(&a.days_overdue));
    most_delayed_projects.truncate(RANKING_SIZE);

    ProjectsSection {
        total_projects,
        project_status_distribution: status,
        projects_without_collaborators,
        avg_collaborators_per_project,
        avg_project_duration,
        overdue_projects: overdue.len(),
        projects_last_month,
        completion_rate,
        most_collaborative_projects,
        most_active_projects,
        most_delayed_projects,
        // Counts user signups, but the dashboard has always shipped this
        // series with the project metrics.
        users_growth: users_growth(users),
    }
}

fn recent_activity(project: &Project, month_ago: i64) -> usize {
    project
        .activity_logs
        .iter()
        .filter(|log| match to_epoch_millis(log.timestamp.as_ref()) {
            Ok(Some(ms)) => ms > month_ago,
            Ok(None) => false,
            Err(err) => {
                msg_debug!(format!("project {}: activity log {}, entry skipped", project.id, err));
                false
            }
        })
        .count()
}

fn users_growth(users: &[User]) -> BTreeMap<String, usize> {
    let mut growth: BTreeMap<String, usize> = BTreeMap::new();
    for user in users {
        let key = match to_epoch_millis(user.created_at.as_ref()) {
            Ok(Some(ms)) => match DateTime::from_timestamp_millis(ms) {
                // Calendar month in UTC, 1-indexed and unpadded: "2024-3".
                Some(created) => format!("{}-{}", created.year(), created.month()),
                None => UNKNOWN_BUCKET.to_string(),
            },
            Ok(None) => UNKNOWN_BUCKET.to_string(),
            Err(err) => {
                msg_debug!(format!("user {}: {}, growth bucket unknown", user.uid, err));
                UNKNOWN_BUCKET.to_string()
            }
        };
        *growth.entry(key).or_insert(0) += 1;
    }
    growth
}

/// Collapses case variants of a company name into one bucket:
/// lowercase everything, then uppercase the first character.
fn normalize_company(raw: &str) -> String {
    let lower = raw.to_lowercase();
    let mut chars = lower.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => lower,
    }
}
