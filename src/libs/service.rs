//! Management operations around the project collection.
//!
//! Every operation is a single read-modify-write against the store with no
//! isolation guarantee; the write-time guards here are best effort, and the
//! report side stays tolerant of records that violate them anyway.

use super::dates::DateValue;
use super::errors::ServiceError;
use super::project::{Project, ProjectStatus, ProjectUpdate};
use crate::store::{ProjectRepository, UserRepository};
use chrono::{DateTime, Utc};
use std::sync::Arc;
use uuid::Uuid;

/// Input for project creation. The id, creation time, and the empty
/// collaborator set are filled in by the service.
#[derive(Debug, Clone)]
pub struct NewProject {
    pub name: String,
    pub description: String,
    pub status: ProjectStatus,
    pub owner: String,
    pub finish_date: Option<DateTime<Utc>>,
}

pub struct ProjectService {
    projects: Arc<dyn ProjectRepository>,
    users: Arc<dyn UserRepository>,
}

impl ProjectService {
    pub fn new(projects: Arc<dyn ProjectRepository>, users: Arc<dyn UserRepository>) -> Self {
        Self { projects, users }
    }

    pub async fn create_project(&self, input: NewProject) -> Result<Project, ServiceError> {
        let project = Project {
            id: Uuid::new_v4().to_string(),
            name: input.name,
            description: input.description,
            status: Some(input.status),
            owner: input.owner,
            collaborators: Vec::new(),
            created_at: Some(DateValue::DateTime(Utc::now())),
            finish_date: input.finish_date.map(DateValue::DateTime),
            status_history: Vec::new(),
            activity_logs: Vec::new(),
        };
        self.projects.insert(project.clone()).await?;
        Ok(project)
    }

    pub async fn get_project(&self, id: &str) -> Result<Project, ServiceError> {
        self.projects
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::ProjectNotFound(id.to_string()))
    }

    pub async fn update_project(&self, id: &str, changes: &ProjectUpdate) -> Result<(), ServiceError> {
        self.get_project(id).await?;
        self.projects.update(id, changes).await?;
        Ok(())
    }

    pub async fn delete_project(&self, id: &str) -> Result<(), ServiceError> {
        self.get_project(id).await?;
        self.projects.delete(id).await?;
        Ok(())
    }

    /// Adds the user registered under `email` to the collaborator set.
    ///
    /// Guard order: the project must exist, the email must resolve to an
    /// account, the owner cannot be added, and neither can an existing
    /// member. Returns the uid that was appended.
    pub async fn add_collaborator(&self, project_id: &str, email: &str) -> Result<String, ServiceError> {
        let project = self.get_project(project_id).await?;
        let user = self
            .users
            .find_by_email(email)
            .await?
            .ok_or_else(|| ServiceError::UserNotFound(email.to_string()))?;

        if user.uid == project.owner {
            return Err(ServiceError::OwnerAsCollaborator);
        }
        if project.collaborators.iter().any(|c| *c == user.uid) {
            return Err(ServiceError::AlreadyCollaborator(user.uid));
        }

        let mut collaborators = project.collaborators;
        collaborators.push(user.uid.clone());
        self.projects
            .update(
                project_id,
                &ProjectUpdate {
                    collaborators: Some(collaborators),
                    ..Default::default()
                },
            )
            .await?;
        Ok(user.uid)
    }

    /// Removes `uid` from the collaborator set; membership is checked first.
    pub async fn remove_collaborator(&self, project_id: &str, uid: &str) -> Result<(), ServiceError> {
        let project = self.get_project(project_id).await?;
        if !project.collaborators.iter().any(|c| c == uid) {
            return Err(ServiceError::NotACollaborator(uid.to_string()));
        }

        let collaborators: Vec<String> = project.collaborators.into_iter().filter(|c| c != uid).collect();
        self.projects
            .update(
                project_id,
                &ProjectUpdate {
                    collaborators: Some(collaborators),
                    ..Default::default()
                },
            )
            .await?;
        Ok(())
    }
}
