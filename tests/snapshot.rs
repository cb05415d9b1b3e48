#[cfg(test)]
mod tests {
    use std::fs;

    use obra::libs::dates::to_epoch_millis;
    use obra::libs::errors::FetchError;
    use obra::libs::project::ProjectStatus;
    use obra::store::{load_snapshot, ProjectRepository, UserRepository};
    use tempfile::TempDir;

    const PROJECTS: &str = r#"[
        {
            "id": "p1",
            "name": "Metro line",
            "status": "active",
            "owner": "u1",
            "collaborators": ["u2"],
            "createdAt": {"_seconds": 1700000000, "_nanoseconds": 0},
            "finishDate": "2024-06-01",
            "statusHistory": [{"status": "pending", "timestamp": 1699000000000}],
            "activityLogs": [{"timestamp": 1700000000000}]
        },
        {"id": "p2", "owner": "u2", "status": "archived"}
    ]"#;

    const USERS: &str = r#"[
        {
            "uid": "u1",
            "email": "ana@example.com",
            "name": "Ana",
            "lastName": "Diaz",
            "role": "architect",
            "createdAt": 1700000000000,
            "lastLogin": {"seconds": 1700000000, "nanos": 0}
        },
        {"uid": "u2"}
    ]"#;

    fn snapshot_dir(projects: Option<&str>, users: Option<&str>) -> TempDir {
        let dir = tempfile::tempdir().unwrap();
        if let Some(raw) = projects {
            fs::write(dir.path().join("projects.json"), raw).unwrap();
        }
        if let Some(raw) = users {
            fs::write(dir.path().join("users.json"), raw).unwrap();
        }
        dir
    }

    #[tokio::test]
    async fn test_load_snapshot_reads_both_collections() {
        let dir = snapshot_dir(Some(PROJECTS), Some(USERS));
        let store = load_snapshot(dir.path()).unwrap();

        let projects = ProjectRepository::find_all(&store).await.unwrap();
        let users = UserRepository::find_all(&store).await.unwrap();
        assert_eq!(projects.len(), 2);
        assert_eq!(users.len(), 2);

        // Every stored date shape converts after loading.
        assert_eq!(projects[0].status, Some(ProjectStatus::Active));
        assert_eq!(to_epoch_millis(projects[0].created_at.as_ref()).unwrap(), Some(1_700_000_000_000));
        assert_eq!(to_epoch_millis(users[0].last_login.as_ref()).unwrap(), Some(1_700_000_000_000));
        assert_eq!(users[0].display_name(), "Ana Diaz");

        // Unknown status strings load as no status instead of failing the file.
        assert_eq!(projects[1].status, None);
        assert_eq!(projects[1].name, "");
    }

    #[tokio::test]
    async fn test_loaded_store_serves_filtered_queries() {
        let dir = snapshot_dir(Some(PROJECTS), Some(USERS));
        let store = load_snapshot(dir.path()).unwrap();

        let owned = store.find_by_owner("u1").await.unwrap();
        assert_eq!(owned.len(), 1);
        assert_eq!(owned[0].id, "p1");

        let collaborating = store.find_by_collaborator("u2").await.unwrap();
        assert_eq!(collaborating.len(), 1);
        assert_eq!(collaborating[0].id, "p1");

        let active = store.find_by_status(ProjectStatus::Active).await.unwrap();
        assert_eq!(active.len(), 1);

        let ana = store.find_by_email("ana@example.com").await.unwrap().unwrap();
        assert_eq!(ana.uid, "u1");
        assert!(store.find_by_email("ghost@example.com").await.unwrap().is_none());
    }

    #[test]
    fn test_missing_collection_file_is_fatal() {
        let dir = snapshot_dir(Some(PROJECTS), None);
        let err = load_snapshot(dir.path()).unwrap_err();
        assert!(matches!(err, FetchError::Io(_)));
    }

    #[test]
    fn test_malformed_collection_file_is_fatal() {
        let dir = snapshot_dir(Some("{not json"), Some(USERS));
        let err = load_snapshot(dir.path()).unwrap_err();
        assert!(matches!(err, FetchError::Decode(_)));
    }
}
