use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::{debug, info};

use crate::model::Timestamp;

/// One entry of a project listing export
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ListingNode {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modified: Option<Timestamp>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<ListingNode>>,
}

/// A stored project record
///
/// Only the identity fields are typed; everything else is carried through
/// untouched so copies keep all project settings.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ProjectRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

/// Body for creating a project; carries no identity fields
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ProjectRecordInput {
    pub name: String,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl ProjectRecord {
    /// Input for a duplicate of this record
    ///
    /// Drops `id`, `path`, `uri` and `author` and appends `_Copy` to the name.
    pub fn to_copy_input(&self) -> ProjectRecordInput {
        ProjectRecordInput {
            name: format!("{}_Copy", self.name),
            fields: self.fields.clone(),
        }
    }
}

/// Project storage backend
#[async_trait]
pub trait ProjectStore: Send + Sync {
    async fn fetch_project(&self, id: &str) -> Result<ProjectRecord>;

    async fn create_project(&self, input: &ProjectRecordInput) -> Result<ProjectRecord>;
}

/// Duplicate a stored project and return the newly created record
pub async fn copy_project(store: &dyn ProjectStore, id: &str) -> Result<ProjectRecord> {
    let source = store
        .fetch_project(id)
        .await
        .with_context(|| format!("Failed to fetch project {}", id))?;

    let input = source.to_copy_input();
    let created = store
        .create_project(&input)
        .await
        .with_context(|| format!("Failed to create copy of project {}", id))?;

    info!(
        "Copied project {} as {:?} ({})",
        id,
        created.name,
        created.id.as_deref().unwrap_or("no id")
    );
    Ok(created)
}

/// HTTP client for the projects API
pub struct ProjectClient {
    base_url: String,
    api_key: Option<String>,
    client: Client,
}

impl ProjectClient {
    pub fn new(base_url: String, api_key: Option<String>) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
            client: Client::new(),
        }
    }

    fn project_url(&self, id: &str) -> String {
        format!("{}/api/projects/{}", self.base_url, urlencoding::encode(id))
    }

    fn authorize(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.api_key {
            Some(key) => request.bearer_auth(key),
            None => request,
        }
    }
}

#[async_trait]
impl ProjectStore for ProjectClient {
    async fn fetch_project(&self, id: &str) -> Result<ProjectRecord> {
        let url = self.project_url(id);
        debug!("GET {}", url);

        let response = self
            .authorize(self.client.get(&url))
            .send()
            .await?
            .error_for_status()?;

        let record: ProjectRecord = response
            .json()
            .await
            .with_context(|| format!("Failed to parse project {}", id))?;
        Ok(record)
    }

    async fn create_project(&self, input: &ProjectRecordInput) -> Result<ProjectRecord> {
        let url = format!("{}/api/projects", self.base_url);
        debug!("POST {} ({:?})", url, input.name);

        let response = self
            .authorize(self.client.post(&url))
            .json(input)
            .send()
            .await?
            .error_for_status()?;

        let record: ProjectRecord = response
            .json()
            .await
            .context("Failed to parse created project")?;
        Ok(record)
    }
}
