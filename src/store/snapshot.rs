//! Loads an exported dataset into the in-memory store.
//!
//! A snapshot directory holds two JSON arrays of store documents,
//! `projects.json` and `users.json`, as produced by the platform's export.
//! Reports run over the loaded store exactly as they would over the portal.

use super::MemoryStore;
use crate::libs::errors::FetchError;
use crate::libs::project::Project;
use crate::libs::user::User;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;

pub const PROJECTS_FILE: &str = "projects.json";
pub const USERS_FILE: &str = "users.json";

/// Reads both collections from `dir`. A missing or malformed file is fatal;
/// per-record tolerance starts only after the documents are loaded.
pub fn load_snapshot(dir: &Path) -> Result<MemoryStore, FetchError> {
    let projects: Vec<Project> = read_collection(&dir.join(PROJECTS_FILE))?;
    let users: Vec<User> = read_collection(&dir.join(USERS_FILE))?;
    Ok(MemoryStore::with_data(projects, users))
}

fn read_collection<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, FetchError> {
    let raw = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}
