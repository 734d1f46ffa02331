//! Tests for duplicating a project through the store interface
//!
//! The copy must not carry any identity of the source project (id, path, uri,
//! author), must keep every other field, and must be named `<name>_Copy`.

use std::sync::Mutex;

use anyhow::Result;
use async_trait::async_trait;
use serde_json::{json, Value};

use project_browser::api::{copy_project, ProjectRecord, ProjectRecordInput, ProjectStore};

/// In-memory store that records every create request
struct FakeStore {
    records: Vec<ProjectRecord>,
    created: Mutex<Vec<ProjectRecordInput>>,
}

impl FakeStore {
    fn with(record: Value) -> Self {
        Self {
            records: vec![serde_json::from_value(record).unwrap()],
            created: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl ProjectStore for FakeStore {
    async fn fetch_project(&self, id: &str) -> Result<ProjectRecord> {
        self.records
            .iter()
            .find(|r| r.id.as_deref() == Some(id))
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("project {} not found", id))
    }

    async fn create_project(&self, input: &ProjectRecordInput) -> Result<ProjectRecord> {
        self.created.lock().unwrap().push(input.clone());
        let mut body = serde_json::to_value(input)?;
        body["id"] = json!("new-1");
        body["uri"] = json!("/api/projects/new-1");
        Ok(serde_json::from_value(body)?)
    }
}

#[tokio::test]
async fn test_copy_clears_identity_and_renames() {
    let store = FakeStore::with(json!({
        "id": "42",
        "name": "Main Span",
        "path": "/Bridges/2024",
        "uri": "/api/projects/42",
        "author": "kim",
        "season": 2024,
        "settings": {"units": "metric"}
    }));

    let created = copy_project(&store, "42").await.unwrap();
    assert_eq!(created.name, "Main Span_Copy");
    assert_eq!(created.id.as_deref(), Some("new-1"));
    assert!(created.author.is_none());
    assert!(created.path.is_none());

    let sent = store.created.lock().unwrap();
    assert_eq!(sent.len(), 1);
    let body = serde_json::to_value(&sent[0]).unwrap();
    assert_eq!(
        body,
        json!({
            "name": "Main Span_Copy",
            "season": 2024,
            "settings": {"units": "metric"}
        })
    );
}

#[tokio::test]
async fn test_copy_missing_project_creates_nothing() {
    let store = FakeStore::with(json!({"id": "42", "name": "Main Span"}));

    let err = copy_project(&store, "7").await.unwrap_err();
    assert!(err.to_string().contains("Failed to fetch project 7"));
    assert!(store.created.lock().unwrap().is_empty());
}
