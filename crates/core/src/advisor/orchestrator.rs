use crate::advisor::normalize::normalize;
use crate::advisor::prompt::{build_prompt, MetaBuildReference, PromptOptions};
use crate::advisor::store::{CachedRecommendation, RecommendationStore};
use crate::advisor::validate::validate;
use crate::domain::recommendation::{AnalysisMode, Recommendation};
use crate::domain::snapshot::{CharacterId, CharacterSnapshot};
use crate::llm::Producer;
use anyhow::Context;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

#[derive(Debug, Clone, Default)]
pub struct AnalyzeOptions {
    /// Skip the cache read; the fresh result still replaces the cached entry.
    pub force_refresh: bool,
    pub enhanced: bool,
    pub prompt: PromptOptions,
    pub meta_reference: Option<MetaBuildReference>,
}

impl AnalyzeOptions {
    pub fn mode(&self) -> AnalysisMode {
        if self.enhanced {
            AnalysisMode::Enhanced
        } else {
            AnalysisMode::Basic
        }
    }
}

/// Runs snapshot -> prompt -> producer -> normalize -> validate and caches the result per
/// character.
///
/// Every run takes a generation ticket for its character. A later run for the same
/// character supersedes earlier ones: their results are still returned to their callers
/// but never written to the store. A superseding run that fails supersedes nothing, so an
/// older run still in flight may write once no newer run is outstanding.
///
/// A trigger that arrives while a run for the same character is outstanding is always a
/// fresh forced run.
pub struct BuildAdvisor {
    producer: Arc<dyn Producer>,
    store: Arc<dyn RecommendationStore>,
    generations: Mutex<HashMap<CharacterId, Generation>>,
    next_ticket: AtomicU64,
    // Serializes "is my ticket still current?" with the store write that follows.
    commit: tokio::sync::Mutex<()>,
}

impl BuildAdvisor {
    pub fn new(producer: Arc<dyn Producer>, store: Arc<dyn RecommendationStore>) -> Self {
        Self {
            producer,
            store,
            generations: Mutex::new(HashMap::new()),
            next_ticket: AtomicU64::new(1),
            commit: tokio::sync::Mutex::new(()),
        }
    }

    pub async fn analyze(
        &self,
        snapshot: &CharacterSnapshot,
        options: AnalyzeOptions,
    ) -> anyhow::Result<Recommendation> {
        let id = &snapshot.id;
        let mode = options.mode();

        let outstanding = self.lock_generations().contains_key(id);
        if outstanding && !options.force_refresh {
            tracing::debug!(character_id = %id, "run already in flight; treating trigger as forced");
        }

        if !options.force_refresh && !outstanding {
            match self.store.get(id).await? {
                Some(entry) if entry.recommendation.mode() == mode => {
                    tracing::debug!(character_id = %id, ?mode, "serving cached recommendation");
                    return Ok(entry.recommendation);
                }
                Some(entry) => {
                    tracing::debug!(
                        character_id = %id,
                        cached = ?entry.recommendation.mode(),
                        requested = ?mode,
                        "cached recommendation has a different mode; regenerating"
                    );
                }
                None => {}
            }
        }

        let ticket = self.begin(id);
        let prompt_options = PromptOptions {
            enhanced: options.enhanced,
            ..options.prompt
        };
        let prompt = build_prompt(snapshot, &prompt_options, options.meta_reference.as_ref());

        tracing::info!(
            character_id = %id,
            class = %snapshot.class,
            ?mode,
            provider = ?self.producer.provider(),
            ticket = ticket.value,
            "requesting build recommendation"
        );

        let raw = match self.producer.complete(&prompt).await {
            Ok(raw) => raw,
            Err(err) => {
                tracing::warn!(character_id = %id, error = %err, "producer call failed");
                return Err(err);
            }
        };

        let mut recommendation = normalize(&raw, mode)?;
        let warnings = validate(recommendation.base(), snapshot.class);
        recommendation.base_mut().warnings = warnings;

        let _commit = self.commit.lock().await;
        if ticket.may_commit() {
            self.store
                .put(CachedRecommendation {
                    character_id: id.clone(),
                    generated_at: Utc::now(),
                    recommendation: recommendation.clone(),
                })
                .await
                .with_context(|| format!("failed to cache recommendation for {id}"))?;
            ticket.mark_committed();
        } else {
            tracing::info!(
                character_id = %id,
                ticket = ticket.value,
                "run was superseded by a newer one; result not cached"
            );
        }

        Ok(recommendation)
    }

    pub async fn cached(&self, id: &CharacterId) -> anyhow::Result<Option<CachedRecommendation>> {
        self.store.get(id).await
    }

    /// Drops the cached entry. Returns whether there was one.
    pub async fn invalidate(&self, id: &CharacterId) -> anyhow::Result<bool> {
        let removed = self.store.remove(id).await?;
        if removed.is_some() {
            tracing::debug!(character_id = %id, "cached recommendation invalidated");
        }
        Ok(removed.is_some())
    }

    fn begin(&self, id: &CharacterId) -> Ticket<'_> {
        let value = self.next_ticket.fetch_add(1, Ordering::Relaxed);
        self.lock_generations()
            .entry(id.clone())
            .or_default()
            .in_flight
            .push(value);
        Ticket {
            advisor: self,
            id: id.clone(),
            value,
        }
    }

    fn lock_generations(&self) -> MutexGuard<'_, HashMap<CharacterId, Generation>> {
        // The map holds plain integers; a panic elsewhere cannot leave it inconsistent.
        self.generations
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    #[cfg(test)]
    fn in_flight(&self) -> usize {
        self.lock_generations()
            .values()
            .map(|g| g.in_flight.len())
            .sum()
    }
}

/// Per-character run bookkeeping. The entry lives only while a run is in flight.
#[derive(Debug, Default)]
struct Generation {
    in_flight: Vec<u64>,
    /// Ticket of the last run whose result reached the store.
    committed: u64,
}

/// Released on drop, including when the `analyze` future is abandoned mid-flight.
struct Ticket<'a> {
    advisor: &'a BuildAdvisor,
    id: CharacterId,
    value: u64,
}

impl Ticket<'_> {
    /// No newer run has committed and none is still outstanding.
    fn may_commit(&self) -> bool {
        self.advisor
            .lock_generations()
            .get(&self.id)
            .is_some_and(|g| g.committed < self.value && g.in_flight.iter().all(|t| *t <= self.value))
    }

    fn mark_committed(&self) {
        if let Some(g) = self.advisor.lock_generations().get_mut(&self.id) {
            g.committed = g.committed.max(self.value);
        }
    }
}

impl Drop for Ticket<'_> {
    fn drop(&mut self) {
        let mut generations = self.advisor.lock_generations();
        if let Some(g) = generations.get_mut(&self.id) {
            g.in_flight.retain(|t| *t != self.value);
            if g.in_flight.is_empty() {
                generations.remove(&self.id);
            }
        }
    }
}
