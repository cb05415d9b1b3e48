use super::admin_report::AdminReport;
use super::formatter;
use super::project::{Project, ProjectStatus};
use super::user_report::UserReport;
use crate::libs::dates::RemainingDays;
use crate::libs::messages::Message;
use crate::msg_print;
use anyhow::Result;
use prettytable::{row, Table};
use std::collections::BTreeMap;

const NO_STATUS: &str = "No status";

pub struct View {}

impl View {
    pub fn user_report(uid: &str, report: &UserReport) -> Result<()> {
        msg_print!(Message::UserReportHeader(uid.to_string()), true);

        msg_print!(Message::SummaryHeader);
        let mut summary = Table::new();
        summary.add_row(row!["TOTAL CREATED", report.summary.total_created]);
        summary.add_row(row!["TOTAL COLLABORATING", report.summary.total_collaborator]);
        summary.add_row(row!["ACTIVE", report.summary.active_projects]);
        summary.add_row(row!["PENDING", report.summary.pending_projects]);
        summary.add_row(row!["FINISHED", report.summary.finished_projects]);
        summary.add_row(row!["TOTAL PROJECT TIME (DAYS)", formatter::format_days(report.summary.total_project_time)]);
        summary.printstd();

        if report.user_projects.created.is_empty() && report.user_projects.collaborator.is_empty() {
            msg_print!(Message::NoProjectsFound, true);
            return Ok(());
        }

        if !report.user_projects.created.is_empty() {
            msg_print!(Message::CreatedProjectsHeader, true);
            let mut table = Table::new();
            table.add_row(row!["ID", "NAME", "STATUS", "DAYS REMAINING", "DURATION (DAYS)"]);
            for entry in &report.user_projects.created {
                table.add_row(row![
                    entry.project.id,
                    entry.project.name,
                    status_label(entry.project.status),
                    entry.days_remaining,
                    entry.duration_days.map(formatter::format_days).unwrap_or_else(|| "-".to_string())
                ]);
            }
            table.printstd();
        }

        if !report.user_projects.collaborator.is_empty() {
            msg_print!(Message::CollaboratorProjectsHeader, true);
            let mut table = Table::new();
            table.add_row(row!["ID", "NAME", "STATUS", "OWNER"]);
            for project in &report.user_projects.collaborator {
                table.add_row(row![project.id, project.name, status_label(project.status), project.owner]);
            }
            table.printstd();
        }

        msg_print!(Message::CollaborationStatsHeader, true);
        let mut stats = Table::new();
        stats.add_row(row!["TOTAL COLLABORATIONS", report.collaboration_stats.total_collaborations]);
        stats.add_row(row!["UNIQUE COLLABORATORS", report.collaboration_stats.unique_collaborators]);
        stats.printstd();

        Ok(())
    }

    pub fn admin_report(report: &AdminReport) -> Result<()> {
        msg_print!(Message::AdminReportHeader, true);

        msg_print!(Message::UsersOverviewHeader);
        let mut overview = Table::new();
        overview.add_row(row!["TOTAL USERS", report.users.total_users]);
        overview.add_row(row!["LOGGED IN LAST 30 DAYS", report.users.users_last_month]);
        overview.printstd();

        msg_print!(Message::RoleDistributionHeader, true);
        Self::distribution(&report.users.role_distribution, "ROLE").printstd();

        msg_print!(Message::ByCountryHeader, true);
        Self::distribution(&report.users.by_country, "COUNTRY").printstd();

        msg_print!(Message::ByCompanyHeader, true);
        Self::distribution(&report.users.by_company, "COMPANY").printstd();

        if !report.users.inactive_users.is_empty() {
            msg_print!(Message::InactiveUsersHeader, true);
            let mut table = Table::new();
            table.add_row(row!["ID", "NAME", "LAST LOGIN"]);
            for user in &report.users.inactive_users {
                table.add_row(row![user.id, user.name, user.last_login]);
            }
            table.printstd();
        }

        msg_print!(Message::ProjectMetricsHeader, true);
        let projects = &report.projects;
        let mut metrics = Table::new();
        metrics.add_row(row!["TOTAL PROJECTS", projects.total_projects]);
        metrics.add_row(row!["PENDING", projects.project_status_distribution.pending]);
        metrics.add_row(row!["ACTIVE", projects.project_status_distribution.active]);
        metrics.add_row(row!["FINISHED", projects.project_status_distribution.finished]);
        metrics.add_row(row!["WITHOUT COLLABORATORS", projects.projects_without_collaborators]);
        metrics.add_row(row!["AVG COLLABORATORS", formatter::format_days(projects.avg_collaborators_per_project)]);
        metrics.add_row(row!["AVG DURATION (DAYS)", formatter::format_days(projects.avg_project_duration)]);
        metrics.add_row(row!["OVERDUE", projects.overdue_projects]);
        metrics.add_row(row!["CREATED LAST 30 DAYS", projects.projects_last_month]);
        metrics.add_row(row!["COMPLETION RATE", format!("{:.1}%", projects.completion_rate)]);
        metrics.printstd();

        msg_print!(Message::MostCollaborativeHeader, true);
        let mut collaborative = Table::new();
        collaborative.add_row(row!["ID", "NAME", "COLLABORATORS"]);
        for entry in &projects.most_collaborative_projects {
            collaborative.add_row(row![entry.id, entry.name, entry.collaborators]);
        }
        collaborative.printstd();

        msg_print!(Message::MostActiveHeader, true);
        let mut active = Table::new();
        active.add_row(row!["ID", "NAME", "ACTIVITY (30 DAYS)"]);
        for entry in &projects.most_active_projects {
            active.add_row(row![entry.id, entry.name, entry.recent_activity]);
        }
        active.printstd();

        if !projects.most_delayed_projects.is_empty() {
            msg_print!(Message::MostDelayedHeader, true);
            let mut delayed = Table::new();
            delayed.add_row(row!["ID", "NAME", "DAYS OVERDUE"]);
            for entry in &projects.most_delayed_projects {
                delayed.add_row(row![entry.id, entry.name, entry.days_overdue]);
            }
            delayed.printstd();
        }

        msg_print!(Message::UsersGrowthHeader, true);
        Self::distribution(&projects.users_growth, "MONTH").printstd();

        Ok(())
    }

    pub fn project(project: &Project, remaining: RemainingDays, time_in_status: &BTreeMap<String, i64>) -> Result<()> {
        msg_print!(Message::ProjectDetailHeader(project.name.clone()), true);

        let mut table = Table::new();
        table.add_row(row!["ID", project.id]);
        table.add_row(row!["DESCRIPTION", project.description]);
        table.add_row(row!["STATUS", status_label(project.status)]);
        table.add_row(row!["OWNER", project.owner]);
        table.add_row(row!["COLLABORATORS", project.collaborators.join(", ")]);
        table.add_row(row!["CREATED", formatter::format_date(project.created_at.as_ref())]);
        table.add_row(row!["FINISH DATE", formatter::format_date(project.finish_date.as_ref())]);
        table.add_row(row!["DAYS REMAINING", remaining]);
        table.printstd();

        if !time_in_status.is_empty() {
            msg_print!(Message::TimeInStatusHeader, true);
            let mut history = Table::new();
            history.add_row(row!["STATUS", "TIME"]);
            for (status, millis) in time_in_status {
                history.add_row(row![status, formatter::format_millis_as_days(*millis)]);
            }
            history.printstd();
        }

        Ok(())
    }

    fn distribution(map: &BTreeMap<String, usize>, label: &str) -> Table {
        let mut table = Table::new();
        table.add_row(row![label, "COUNT"]);
        for (key, count) in map {
            table.add_row(row![key, count]);
        }
        table
    }
}

fn status_label(status: Option<ProjectStatus>) -> String {
    status.map(|s| s.to_string()).unwrap_or_else(|| NO_STATUS.to_string())
}
