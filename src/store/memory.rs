use super::{ProjectRepository, UserRepository};
use crate::libs::errors::FetchError;
use crate::libs::project::{Project, ProjectStatus, ProjectUpdate};
use crate::libs::user::User;
use async_trait::async_trait;
use parking_lot::RwLock;

/// Vec-backed store. Queries return records in insertion order.
#[derive(Debug, Default)]
pub struct MemoryStore {
    projects: RwLock<Vec<Project>>,
    users: RwLock<Vec<User>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_data(projects: Vec<Project>, users: Vec<User>) -> Self {
        MemoryStore {
            projects: RwLock::new(projects),
            users: RwLock::new(users),
        }
    }

    pub fn push_project(&self, project: Project) {
        self.projects.write().push(project);
    }

    pub fn push_user(&self, user: User) {
        self.users.write().push(user);
    }
}

#[async_trait]
impl ProjectRepository for MemoryStore {
    async fn find_by_owner(&self, uid: &str) -> Result<Vec<Project>, FetchError> {
        Ok(self.projects.read().iter().filter(|p| p.owner == uid).cloned().collect())
    }

    async fn find_by_collaborator(&self, uid: &str) -> Result<Vec<Project>, FetchError> {
        Ok(self
            .projects
            .read()
            .iter()
            .filter(|p| p.collaborators.iter().any(|c| c == uid))
            .cloned()
            .collect())
    }

    async fn find_by_status(&self, status: ProjectStatus) -> Result<Vec<Project>, FetchError> {
        Ok(self
            .projects
            .read()
            .iter()
            .filter(|p| p.status == Some(status))
            .cloned()
            .collect())
    }

    async fn find_all(&self) -> Result<Vec<Project>, FetchError> {
        Ok(self.projects.read().clone())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Project>, FetchError> {
        Ok(self.projects.read().iter().find(|p| p.id == id).cloned())
    }

    async fn insert(&self, project: Project) -> Result<(), FetchError> {
        self.projects.write().push(project);
        Ok(())
    }

    async fn update(&self, id: &str, changes: &ProjectUpdate) -> Result<(), FetchError> {
        if let Some(project) = self.projects.write().iter_mut().find(|p| p.id == id) {
            changes.apply(project);
        }
        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<(), FetchError> {
        self.projects.write().retain(|p| p.id != id);
        Ok(())
    }
}

#[async_trait]
impl UserRepository for MemoryStore {
    async fn find_all(&self) -> Result<Vec<User>, FetchError> {
        Ok(self.users.read().clone())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, FetchError> {
        Ok(self
            .users
            .read()
            .iter()
            .find(|u| u.email.as_deref() == Some(email))
            .cloned())
    }
}
