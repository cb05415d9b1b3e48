//! Repository traits over the project and user collections.
//!
//! Reports and management operations consume these capabilities without
//! knowing where the records live. Three implementations exist: the portal
//! HTTP client in `api/`, the in-memory store, and the snapshot loader that
//! fills an in-memory store from exported JSON files.

pub mod memory;
pub mod snapshot;

pub use memory::MemoryStore;
pub use snapshot::load_snapshot;

use crate::libs::errors::FetchError;
use crate::libs::project::{Project, ProjectStatus, ProjectUpdate};
use crate::libs::user::User;
use async_trait::async_trait;

/// Read and write access to the project collection.
///
/// Query results preserve the store's fetch order; ranking tie-breaks depend
/// on it. `update` and `delete` assume the caller has already confirmed the
/// id exists via `find_by_id`.
#[async_trait]
pub trait ProjectRepository: Send + Sync {
    async fn find_by_owner(&self, uid: &str) -> Result<Vec<Project>, FetchError>;
    async fn find_by_collaborator(&self, uid: &str) -> Result<Vec<Project>, FetchError>;
    async fn find_by_status(&self, status: ProjectStatus) -> Result<Vec<Project>, FetchError>;
    async fn find_all(&self) -> Result<Vec<Project>, FetchError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<Project>, FetchError>;
    async fn insert(&self, project: Project) -> Result<(), FetchError>;
    async fn update(&self, id: &str, changes: &ProjectUpdate) -> Result<(), FetchError>;
    async fn delete(&self, id: &str) -> Result<(), FetchError>;
}

/// Read access to the user collection.
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_all(&self) -> Result<Vec<User>, FetchError>;
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, FetchError>;
}
