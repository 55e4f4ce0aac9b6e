//! In-Memory Synthesis Repository Implementation

use async_trait::async_trait;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use std::sync::Arc;

use crate::application::ports::{RepositoryError, SynthesisRepositoryPort};
use crate::domain::synthesis::{SynthesisId, SynthesisJob};

/// 内存合成任务仓储
///
/// 任务只增不删，按创建时间列出
pub struct InMemorySynthesisRepository {
    jobs: DashMap<SynthesisId, SynthesisJob>,
}

impl InMemorySynthesisRepository {
    pub fn new() -> Self {
        Self {
            jobs: DashMap::new(),
        }
    }

    pub fn arc(self) -> Arc<Self> {
        Arc::new(self)
    }
}

impl Default for InMemorySynthesisRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SynthesisRepositoryPort for InMemorySynthesisRepository {
    async fn save(&self, job: &SynthesisJob) -> Result<(), RepositoryError> {
        match self.jobs.entry(*job.id()) {
            Entry::Occupied(_) => Err(RepositoryError::Duplicate(job.id().to_string())),
            Entry::Vacant(slot) => {
                slot.insert(job.clone());
                Ok(())
            }
        }
    }

    async fn find_by_id(&self, id: &SynthesisId) -> Result<Option<SynthesisJob>, RepositoryError> {
        Ok(self.jobs.get(id).map(|job| job.clone()))
    }

    async fn find_all(&self) -> Result<Vec<SynthesisJob>, RepositoryError> {
        let mut jobs: Vec<SynthesisJob> = self.jobs.iter().map(|e| e.value().clone()).collect();
        jobs.sort_by_key(|job| job.created_at());
        Ok(jobs)
    }

    async fn count(&self) -> Result<usize, RepositoryError> {
        Ok(self.jobs.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::voice::VoiceId;

    fn job(text: &str) -> SynthesisJob {
        let id = SynthesisId::new();
        SynthesisJob::new(
            id,
            VoiceId::from_string("default"),
            text.to_string(),
            format!("/audio/synthesis_{}.txt", id),
            Some(0.1 * text.chars().count() as f64),
        )
    }

    #[tokio::test]
    async fn test_save_and_find() {
        let repo = InMemorySynthesisRepository::new();
        let job = job("hello");

        repo.save(&job).await.unwrap();
        assert!(repo.save(&job).await.is_err());

        let found = repo.find_by_id(job.id()).await.unwrap();
        assert_eq!(found, Some(job));
        assert!(repo
            .find_by_id(&SynthesisId::new())
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn test_find_all_and_count() {
        let repo = InMemorySynthesisRepository::new();
        for text in ["one", "two", "three"] {
            repo.save(&job(text)).await.unwrap();
        }

        assert_eq!(repo.count().await.unwrap(), 3);
        let all = repo.find_all().await.unwrap();
        assert_eq!(all.len(), 3);
        assert!(all.windows(2).all(|w| w[0].created_at() <= w[1].created_at()));
    }
}
