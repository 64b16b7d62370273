use crate::domain::recommendation::Recommendation;
use crate::domain::snapshot::CharacterId;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::HashMap;
use tokio::sync::Mutex;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CachedRecommendation {
    pub character_id: CharacterId,
    pub generated_at: DateTime<Utc>,
    pub recommendation: Recommendation,
}

/// Last recommendation per character. Entries are replaced whole, never edited.
#[async_trait::async_trait]
pub trait RecommendationStore: Send + Sync {
    async fn get(&self, id: &CharacterId) -> anyhow::Result<Option<CachedRecommendation>>;
    async fn put(&self, entry: CachedRecommendation) -> anyhow::Result<()>;
    async fn remove(&self, id: &CharacterId) -> anyhow::Result<Option<CachedRecommendation>>;
}

/// Unbounded, process-local store.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    entries: Mutex<HashMap<CharacterId, CachedRecommendation>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl RecommendationStore for InMemoryStore {
    async fn get(&self, id: &CharacterId) -> anyhow::Result<Option<CachedRecommendation>> {
        Ok(self.entries.lock().await.get(id).cloned())
    }

    async fn put(&self, entry: CachedRecommendation) -> anyhow::Result<()> {
        self.entries
            .lock()
            .await
            .insert(entry.character_id.clone(), entry);
        Ok(())
    }

    async fn remove(&self, id: &CharacterId) -> anyhow::Result<Option<CachedRecommendation>> {
        Ok(self.entries.lock().await.remove(id))
    }
}
