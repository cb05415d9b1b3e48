//! Portal API client implementing the repository traits over REST.
//!
//! ## Endpoints
//!
//! - `GET /projects` plus `?owner=`, `?collaborator=`, `?status=` filters
//! - `GET`/`POST`/`PATCH`/`DELETE /projects/{id}` for management operations
//! - `GET /users`, `GET /users?email=` for the user collection
//!
//! Every request carries the configured bearer token. Non-success statuses
//! surface as [`FetchError::Status`]; the generators treat any of them as
//! fatal to the report run.

use crate::libs::config::ConfigModule;
use crate::libs::errors::FetchError;
use crate::libs::messages::Message;
use crate::libs::project::{Project, ProjectStatus, ProjectUpdate};
use crate::libs::user::User;
use crate::msg_print;
use crate::store::{ProjectRepository, UserRepository};
use anyhow::Result;
use async_trait::async_trait;
use dialoguer::{theme::ColorfulTheme, Input};
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Client for the platform backend.
///
/// Stateless apart from the pooled HTTP client, so one instance can serve
/// every fetch of a report run concurrently.
#[derive(Debug)]
pub struct Portal {
    client: Client,
    config: PortalConfig,
}

impl Portal {
    pub fn new(config: &PortalConfig) -> Self {
        Self {
            client: Client::new(),
            config: config.clone(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.config.api_url.trim_end_matches('/'), path)
    }

    fn get(&self, path: &str) -> RequestBuilder {
        self.client.get(self.url(path)).bearer_auth(&self.config.auth_token)
    }

    /// Issues a GET and decodes the JSON body, after the status check.
    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, FetchError> {
        let response = self.get(path).send().await?;
        Self::json_body(response).await
    }

    async fn json_body<T: DeserializeOwned>(response: Response) -> Result<T, FetchError> {
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status));
        }
        Ok(response.json::<T>().await?)
    }

    fn expect_success(response: Response) -> Result<(), FetchError> {
        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(FetchError::Status(status))
        }
    }
}

#[async_trait]
impl ProjectRepository for Portal {
    async fn find_by_owner(&self, uid: &str) -> Result<Vec<Project>, FetchError> {
        self.get_json(&format!("projects?owner={}", uid)).await
    }

    async fn find_by_collaborator(&self, uid: &str) -> Result<Vec<Project>, FetchError> {
        self.get_json(&format!("projects?collaborator={}", uid)).await
    }

    async fn find_by_status(&self, status: ProjectStatus) -> Result<Vec<Project>, FetchError> {
        self.get_json(&format!("projects?status={}", status.as_str())).await
    }

    async fn find_all(&self) -> Result<Vec<Project>, FetchError> {
        self.get_json("projects").await
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Project>, FetchError> {
        let response = self.get(&format!("projects/{}", id)).send().await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        Ok(Some(Self::json_body(response).await?))
    }

    async fn insert(&self, project: Project) -> Result<(), FetchError> {
        let response = self
            .client
            .post(self.url("projects"))
            .bearer_auth(&self.config.auth_token)
            .json(&project)
            .send()
            .await?;
        Self::expect_success(response)
    }

    async fn update(&self, id: &str, changes: &ProjectUpdate) -> Result<(), FetchError> {
        let response = self
            .client
            .patch(self.url(&format!("projects/{}", id)))
            .bearer_auth(&self.config.auth_token)
            .json(changes)
            .send()
            .await?;
        Self::expect_success(response)
    }

    async fn delete(&self, id: &str) -> Result<(), FetchError> {
        let response = self
            .client
            .delete(self.url(&format!("projects/{}", id)))
            .bearer_auth(&self.config.auth_token)
            .send()
            .await?;
        Self::expect_success(response)
    }
}

#[async_trait]
impl UserRepository for Portal {
    async fn find_all(&self) -> Result<Vec<User>, FetchError> {
        self.get_json("users").await
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, FetchError> {
        let matches: Vec<User> = self.get_json(&format!("users?email={}", email)).await?;
        Ok(matches.into_iter().next())
    }
}

/// Connection settings for the portal, the `portal` section of the config.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct PortalConfig {
    /// Base URL of the backend API, without a trailing path.
    pub api_url: String,
    /// Bearer token attached to every request.
    pub auth_token: String,
}

impl PortalConfig {
    /// Returns the configuration module metadata for the portal.
    pub fn module() -> ConfigModule {
        ConfigModule {
            key: "portal".to_string(),
            name: "Portal".to_string(),
        }
    }

    /// Interactive setup, pre-filling current values as prompt defaults.
    pub fn init(config: &Option<PortalConfig>) -> Result<Self> {
        let config = config.clone().unwrap_or(Self {
            api_url: "".to_string(),
            auth_token: "".to_string(),
        });

        msg_print!(Message::ConfigModulePortal);

        Ok(Self {
            api_url: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptPortalApiUrl.to_string())
                .default(config.api_url)
                .interact_text()?,
            auth_token: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptPortalAuthToken.to_string())
                .default(config.auth_token)
                .interact_text()?,
        })
    }
}
