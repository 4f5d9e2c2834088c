//! REST-backed task store
//!
//! Talks to a JSON document collection exposed over HTTP: the collection
//! lives at `{base}/{collection}`, individual documents at
//! `{base}/{collection}/{id}`. The backend assigns document identifiers on
//! creation and returns them in the create response.

use crate::models::{Status, Task, TaskId};
use crate::store::{StoreError, TaskPatch, TaskStore};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Task document as sent to the store on creation
#[derive(Serialize)]
struct TaskDoc<'a> {
    title: &'a str,
    description: &'a str,
    status: Status,
    created: DateTime<Utc>,
    updated: DateTime<Utc>,
}

/// Task document as returned by the store
#[derive(Deserialize)]
struct FetchedDoc {
    id: String,
    #[serde(default)]
    title: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    status: Status,
    created: Option<DateTime<Utc>>,
    updated: Option<DateTime<Utc>>,
}

impl From<FetchedDoc> for Task {
    fn from(doc: FetchedDoc) -> Self {
        let now = Utc::now();
        Task {
            id: TaskId::assigned(doc.id),
            title: doc.title,
            description: doc.description,
            status: doc.status,
            created: doc.created.unwrap_or(now),
            updated: doc.updated.unwrap_or(now),
        }
    }
}

/// Create response carrying the store-assigned identifier
#[derive(Deserialize)]
struct CreatedDoc {
    id: String,
}

/// Task store backed by a remote JSON document collection
pub struct RestStore {
    client: reqwest::Client,
    base_url: String,
    collection: String,
}

impl RestStore {
    pub fn new(base_url: impl Into<String>, collection: impl Into<String>) -> Self {
        RestStore {
            client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            collection: collection.into(),
        }
    }

    fn collection_url(&self) -> String {
        format!("{}/{}", self.base_url, self.collection)
    }

    fn doc_url(&self, id: &str) -> String {
        format!("{}/{}/{}", self.base_url, self.collection, id)
    }

    /// Map a response status to the store error taxonomy. `id` is the
    /// document the request addressed, when there is one.
    fn check_status(
        &self,
        resp: reqwest::Response,
        id: Option<&str>,
    ) -> Result<reqwest::Response, StoreError> {
        let status = resp.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(StoreError::NotFound(
                id.unwrap_or(&self.collection).to_string(),
            ));
        }
        if status.is_client_error() || status.is_server_error() {
            return Err(StoreError::Rejected(format!(
                "{} returned {}",
                self.collection, status
            )));
        }
        Ok(resp)
    }
}

fn transport(e: reqwest::Error) -> StoreError {
    StoreError::Connectivity(e.to_string())
}

#[async_trait]
impl TaskStore for RestStore {
    async fn fetch_all(&self) -> Result<Vec<Task>, StoreError> {
        let resp = self
            .client
            .get(self.collection_url())
            .send()
            .await
            .map_err(transport)?;

        let docs: Vec<FetchedDoc> = self
            .check_status(resp, None)?
            .json()
            .await
            .map_err(transport)?;

        Ok(docs.into_iter().map(Task::from).collect())
    }

    async fn create(&self, task: &Task) -> Result<String, StoreError> {
        let doc = TaskDoc {
            title: &task.title,
            description: &task.description,
            status: task.status,
            created: task.created,
            updated: task.updated,
        };

        let resp = self
            .client
            .post(self.collection_url())
            .json(&doc)
            .send()
            .await
            .map_err(transport)?;

        let created: CreatedDoc = self
            .check_status(resp, None)?
            .json()
            .await
            .map_err(transport)?;

        Ok(created.id)
    }

    async fn update(&self, id: &str, patch: &TaskPatch) -> Result<(), StoreError> {
        let resp = self
            .client
            .patch(self.doc_url(id))
            .json(patch)
            .send()
            .await
            .map_err(transport)?;

        self.check_status(resp, Some(id))?;
        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<(), StoreError> {
        let resp = self
            .client
            .delete(self.doc_url(id))
            .send()
            .await
            .map_err(transport)?;

        self.check_status(resp, Some(id))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_urls() {
        let store = RestStore::new("http://localhost:8080/api/", "tasks");
        assert_eq!(store.collection_url(), "http://localhost:8080/api/tasks");
        assert_eq!(store.doc_url("t1"), "http://localhost:8080/api/tasks/t1");
    }

    #[test]
    fn test_fetched_doc_to_task() {
        let doc: FetchedDoc = serde_json::from_str(
            r#"{"id":"t1","title":"Buy milk","status":"inProgress"}"#,
        )
        .unwrap();
        let task = Task::from(doc);
        assert_eq!(task.id.as_assigned(), Some("t1"));
        assert_eq!(task.title, "Buy milk");
        assert_eq!(task.description, "");
        assert_eq!(task.status, Status::InProgress);
    }

    #[test]
    fn test_patch_serializes_only_set_fields() {
        let patch = TaskPatch::status(Status::Done);
        let json = serde_json::to_value(&patch).unwrap();
        assert_eq!(json["status"], "done");
        assert!(json.get("title").is_none());
        assert!(json.get("description").is_none());
    }
}
