//! Document-oriented persistence keyed by user id.

use crate::history::SessionStore;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

/// Snapshot key of the file-backed store.
pub const CONTENT_STORE_KEY: &str = "content_store";

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum Collection {
    Documents,
    GeneratedContent,
    TestQuestions,
    UserProgress,
}

impl Collection {
    pub fn as_str(&self) -> &'static str {
        match self {
            Collection::Documents => "documents",
            Collection::GeneratedContent => "generatedContent",
            Collection::TestQuestions => "testQuestions",
            Collection::UserProgress => "userProgress",
        }
    }
}

impl FromStr for Collection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('_', "-").as_str() {
            "documents" => Ok(Collection::Documents),
            "generated-content" | "generatedcontent" | "content" => Ok(Collection::GeneratedContent),
            "test-questions" | "testquestions" | "quizzes" => Ok(Collection::TestQuestions),
            "user-progress" | "userprogress" => Ok(Collection::UserProgress),
            other => Err(format!(
                "Unknown collection '{}'. Expected one of: documents, generated-content, test-questions, user-progress",
                other
            )),
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("No record {id} in {collection}")]
    NotFound { collection: Collection, id: Uuid },

    #[error("Store backend failed: {0}")]
    Backend(String),
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct StoredRecord {
    pub id: Uuid,
    pub user_id: String,
    /// Optional sub-type used for filtering, e.g. a content type or subject.
    pub kind: Option<String>,
    pub data: Value,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[async_trait]
pub trait ContentStore: Send + Sync {
    async fn create(
        &self,
        collection: Collection,
        user_id: &str,
        kind: Option<&str>,
        data: Value,
    ) -> Result<Uuid, StoreError>;

    /// Newest first. `kind` narrows the result when given.
    async fn list(
        &self,
        collection: Collection,
        user_id: &str,
        kind: Option<&str>,
    ) -> Result<Vec<StoredRecord>, StoreError>;

    async fn delete(&self, collection: Collection, id: Uuid) -> Result<(), StoreError>;

    async fn batch_save(
        &self,
        collection: Collection,
        user_id: &str,
        items: Vec<Value>,
    ) -> Result<Vec<Uuid>, StoreError> {
        let mut ids = Vec::with_capacity(items.len());
        for item in items {
            ids.push(self.create(collection, user_id, None, item).await?);
        }
        Ok(ids)
    }
}

/// Process-local store.
#[derive(Default)]
pub struct MemoryStore {
    records: RwLock<HashMap<Collection, Vec<StoredRecord>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn with_records(records: HashMap<Collection, Vec<StoredRecord>>) -> Self {
        Self {
            records: RwLock::new(records),
        }
    }
}

#[async_trait]
impl ContentStore for MemoryStore {
    async fn create(
        &self,
        collection: Collection,
        user_id: &str,
        kind: Option<&str>,
        data: Value,
    ) -> Result<Uuid, StoreError> {
        let now = Utc::now();
        let record = StoredRecord {
            id: Uuid::new_v4(),
            user_id: user_id.to_string(),
            kind: kind.map(str::to_string),
            data,
            created_at: now,
            updated_at: now,
        };
        let id = record.id;
        self.records
            .write()
            .await
            .entry(collection)
            .or_default()
            .push(record);
        Ok(id)
    }

    async fn list(
        &self,
        collection: Collection,
        user_id: &str,
        kind: Option<&str>,
    ) -> Result<Vec<StoredRecord>, StoreError> {
        let records = self.records.read().await;
        let mut matching: Vec<StoredRecord> = records
            .get(&collection)
            .map(|all| {
                all.iter()
                    .filter(|r| r.user_id == user_id)
                    .filter(|r| kind.map_or(true, |k| r.kind.as_deref() == Some(k)))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default();
        // Ties keep the most recent insert first.
        matching.reverse();
        matching.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(matching)
    }

    async fn delete(&self, collection: Collection, id: Uuid) -> Result<(), StoreError> {
        let mut records = self.records.write().await;
        let all = records.entry(collection).or_default();
        let before = all.len();
        all.retain(|r| r.id != id);
        if all.len() == before {
            return Err(StoreError::NotFound { collection, id });
        }
        Ok(())
    }
}

/// Store kept in memory and written back to a session snapshot after every
/// change, so records outlive the process.
pub struct FileStore {
    memory: MemoryStore,
    sessions: SessionStore,
}

impl FileStore {
    /// Restores whatever the snapshot holds; a missing snapshot opens empty.
    pub fn open(sessions: SessionStore) -> Self {
        let records: HashMap<Collection, Vec<StoredRecord>> = sessions.load(CONTENT_STORE_KEY);
        debug!(
            collections = records.len(),
            dir = %sessions.dir().display(),
            "Content store opened"
        );
        Self {
            memory: MemoryStore::with_records(records),
            sessions,
        }
    }

    async fn flush(&self) -> Result<(), StoreError> {
        let records = self.memory.records.read().await;
        self.sessions
            .save(CONTENT_STORE_KEY, &*records)
            .map_err(|e| StoreError::Backend(e.to_string()))
    }
}

#[async_trait]
impl ContentStore for FileStore {
    async fn create(
        &self,
        collection: Collection,
        user_id: &str,
        kind: Option<&str>,
        data: Value,
    ) -> Result<Uuid, StoreError> {
        let id = self.memory.create(collection, user_id, kind, data).await?;
        self.flush().await?;
        Ok(id)
    }

    async fn list(
        &self,
        collection: Collection,
        user_id: &str,
        kind: Option<&str>,
    ) -> Result<Vec<StoredRecord>, StoreError> {
        self.memory.list(collection, user_id, kind).await
    }

    async fn delete(&self, collection: Collection, id: Uuid) -> Result<(), StoreError> {
        self.memory.delete(collection, id).await?;
        self.flush().await
    }
}
