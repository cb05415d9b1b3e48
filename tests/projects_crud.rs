#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use chrono::{TimeZone, Utc};
    use obra::libs::dates::DateValue;
    use obra::libs::errors::ServiceError;
    use obra::libs::project::{Project, ProjectStatus, ProjectUpdate};
    use obra::libs::service::{NewProject, ProjectService};
    use obra::libs::user::User;
    use obra::store::MemoryStore;

    fn service() -> (Arc<MemoryStore>, ProjectService) {
        let store = Arc::new(MemoryStore::new());
        let service = ProjectService::new(store.clone(), store.clone());
        (store, service)
    }

    fn project(id: &str, owner: &str, collaborators: &[&str]) -> Project {
        Project {
            id: id.to_string(),
            name: format!("Project {}", id),
            description: "original".to_string(),
            status: Some(ProjectStatus::Pending),
            owner: owner.to_string(),
            collaborators: collaborators.iter().map(|c| c.to_string()).collect(),
            created_at: None,
            finish_date: None,
            status_history: vec![],
            activity_logs: vec![],
        }
    }

    fn user(uid: &str, email: &str) -> User {
        User {
            uid: uid.to_string(),
            email: Some(email.to_string()),
            name: None,
            last_name: None,
            company: None,
            job_title: None,
            country: None,
            role: None,
            created_at: None,
            last_login: None,
        }
    }

    // === CREATE / READ / UPDATE / DELETE ===

    #[tokio::test]
    async fn test_create_fills_in_the_generated_fields() {
        let (_store, service) = service();
        let finish = Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap();
        let created = service
            .create_project(NewProject {
                name: "Bridge retrofit".to_string(),
                description: String::new(),
                status: ProjectStatus::Pending,
                owner: "u1".to_string(),
                finish_date: Some(finish),
            })
            .await
            .unwrap();

        assert!(!created.id.is_empty());
        assert_eq!(created.name, "Bridge retrofit");
        assert_eq!(created.status, Some(ProjectStatus::Pending));
        assert_eq!(created.owner, "u1");
        assert!(created.collaborators.is_empty());
        assert!(matches!(created.created_at, Some(DateValue::DateTime(_))));
        assert_eq!(created.finish_date, Some(DateValue::DateTime(finish)));

        // The record is actually persisted.
        let stored = service.get_project(&created.id).await.unwrap();
        assert_eq!(stored.name, "Bridge retrofit");
    }

    #[tokio::test]
    async fn test_created_ids_are_unique() {
        let (_store, service) = service();
        let input = NewProject {
            name: "Twin".to_string(),
            description: String::new(),
            status: ProjectStatus::Pending,
            owner: "u1".to_string(),
            finish_date: None,
        };
        let first = service.create_project(input.clone()).await.unwrap();
        let second = service.create_project(input).await.unwrap();
        assert_ne!(first.id, second.id);
    }

    #[tokio::test]
    async fn test_get_missing_project() {
        let (_store, service) = service();
        let err = service.get_project("ghost").await.unwrap_err();
        assert!(matches!(err, ServiceError::ProjectNotFound(id) if id == "ghost"));
    }

    #[tokio::test]
    async fn test_update_applies_only_the_given_fields() {
        let (store, service) = service();
        store.push_project(project("p1", "u1", &[]));

        let changes = ProjectUpdate {
            name: Some("Renamed".to_string()),
            status: Some(ProjectStatus::Active),
            ..Default::default()
        };
        service.update_project("p1", &changes).await.unwrap();

        let stored = service.get_project("p1").await.unwrap();
        assert_eq!(stored.name, "Renamed");
        assert_eq!(stored.status, Some(ProjectStatus::Active));
        assert_eq!(stored.description, "original");
    }

    #[tokio::test]
    async fn test_update_missing_project() {
        let (_store, service) = service();
        let err = service.update_project("ghost", &ProjectUpdate::default()).await.unwrap_err();
        assert!(matches!(err, ServiceError::ProjectNotFound(_)));
    }

    #[tokio::test]
    async fn test_delete_removes_the_record() {
        let (store, service) = service();
        store.push_project(project("p1", "u1", &[]));

        service.delete_project("p1").await.unwrap();
        let err = service.get_project("p1").await.unwrap_err();
        assert!(matches!(err, ServiceError::ProjectNotFound(_)));
    }

    #[tokio::test]
    async fn test_delete_missing_project() {
        let (_store, service) = service();
        let err = service.delete_project("ghost").await.unwrap_err();
        assert!(matches!(err, ServiceError::ProjectNotFound(_)));
    }

    // === COLLABORATORS ===

    #[tokio::test]
    async fn test_add_collaborator_appends_to_the_set() {
        let (store, service) = service();
        store.push_project(project("p1", "owner-uid", &["bob"]));
        store.push_user(user("ana-uid", "ana@example.com"));

        let uid = service.add_collaborator("p1", "ana@example.com").await.unwrap();
        assert_eq!(uid, "ana-uid");

        let stored = service.get_project("p1").await.unwrap();
        assert_eq!(stored.collaborators, ["bob", "ana-uid"]);
    }

    #[tokio::test]
    async fn test_add_collaborator_unknown_email() {
        let (store, service) = service();
        store.push_project(project("p1", "owner-uid", &[]));

        let err = service.add_collaborator("p1", "ghost@example.com").await.unwrap_err();
        assert!(matches!(err, ServiceError::UserNotFound(email) if email == "ghost@example.com"));
    }

    #[tokio::test]
    async fn test_add_collaborator_refuses_the_owner() {
        let (store, service) = service();
        store.push_project(project("p1", "owner-uid", &[]));
        store.push_user(user("owner-uid", "owner@example.com"));

        let err = service.add_collaborator("p1", "owner@example.com").await.unwrap_err();
        assert!(matches!(err, ServiceError::OwnerAsCollaborator));
    }

    #[tokio::test]
    async fn test_add_collaborator_refuses_duplicates() {
        let (store, service) = service();
        store.push_project(project("p1", "owner-uid", &["ana-uid"]));
        store.push_user(user("ana-uid", "ana@example.com"));

        let err = service.add_collaborator("p1", "ana@example.com").await.unwrap_err();
        assert!(matches!(err, ServiceError::AlreadyCollaborator(uid) if uid == "ana-uid"));
    }

    #[tokio::test]
    async fn test_remove_collaborator_keeps_the_rest() {
        let (store, service) = service();
        store.push_project(project("p1", "owner-uid", &["ana-uid", "bob"]));

        service.remove_collaborator("p1", "ana-uid").await.unwrap();
        let stored = service.get_project("p1").await.unwrap();
        assert_eq!(stored.collaborators, ["bob"]);
    }

    #[tokio::test]
    async fn test_remove_collaborator_requires_membership() {
        let (store, service) = service();
        store.push_project(project("p1", "owner-uid", &["bob"]));

        let err = service.remove_collaborator("p1", "ana-uid").await.unwrap_err();
        assert!(matches!(err, ServiceError::NotACollaborator(uid) if uid == "ana-uid"));
    }
}
