//! In-Memory Voice Repository Implementation

use async_trait::async_trait;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use crate::application::ports::{RepositoryError, VoiceRepositoryPort};
use crate::domain::voice::{Voice, VoiceId};

/// 带插入序号的记录；列出时按创建时间排序，插入序号只用于区分同一时刻创建的记录
#[derive(Debug, Clone)]
struct Stored {
    seq: u64,
    voice: Voice,
}

/// 内存音色仓储
pub struct InMemoryVoiceRepository {
    voices: DashMap<VoiceId, Stored>,
    next_seq: AtomicU64,
}

impl InMemoryVoiceRepository {
    pub fn new() -> Self {
        Self {
            voices: DashMap::new(),
            next_seq: AtomicU64::new(0),
        }
    }

    pub fn arc(self) -> Arc<Self> {
        Arc::new(self)
    }

    fn stamp(&self, voice: &Voice) -> Stored {
        Stored {
            seq: self.next_seq.fetch_add(1, Ordering::Relaxed),
            voice: voice.clone(),
        }
    }
}

impl Default for InMemoryVoiceRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl VoiceRepositoryPort for InMemoryVoiceRepository {
    async fn save(&self, voice: &Voice) -> Result<(), RepositoryError> {
        match self.voices.entry(voice.id().clone()) {
            Entry::Occupied(_) => Err(RepositoryError::Duplicate(voice.id().to_string())),
            Entry::Vacant(slot) => {
                slot.insert(self.stamp(voice));
                tracing::debug!(voice_id = %voice.id(), "Voice stored");
                Ok(())
            }
        }
    }

    async fn upsert(&self, voice: &Voice) -> Result<(), RepositoryError> {
        self.voices.insert(voice.id().clone(), self.stamp(voice));
        Ok(())
    }

    async fn find_by_id(&self, id: &VoiceId) -> Result<Option<Voice>, RepositoryError> {
        Ok(self.voices.get(id).map(|entry| entry.voice.clone()))
    }

    async fn find_all(&self) -> Result<Vec<Voice>, RepositoryError> {
        let mut stored: Vec<Stored> = self.voices.iter().map(|e| e.value().clone()).collect();
        // 删除回滚时记录会重新插入，按 created_at 排序可让其回到原位置
        stored.sort_by_key(|s| (s.voice.created_at(), s.seq));
        Ok(stored.into_iter().map(|s| s.voice).collect())
    }

    async fn delete(&self, id: &VoiceId) -> Result<Option<Voice>, RepositoryError> {
        Ok(self.voices.remove(id).map(|(_, stored)| stored.voice))
    }

    async fn count(&self) -> Result<usize, RepositoryError> {
        Ok(self.voices.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::voice::{
        AudioFormat, AudioRef, LanguageCode, VoiceDescription, VoiceName, DEFAULT_SAMPLE_RATE,
    };
    use std::path::PathBuf;

    fn uploaded(name: &str) -> Voice {
        let id = VoiceId::new();
        Voice::uploaded(
            id.clone(),
            VoiceName::new(name).unwrap(),
            VoiceDescription::default(),
            LanguageCode::default(),
            AudioRef::new(PathBuf::from(format!("voices/{}.wav", id)), AudioFormat::Wav),
            DEFAULT_SAMPLE_RATE,
        )
    }

    #[tokio::test]
    async fn test_voice_lifecycle() {
        let repo = InMemoryVoiceRepository::new();
        let voice = uploaded("a");

        repo.save(&voice).await.unwrap();
        assert!(matches!(
            repo.save(&voice).await,
            Err(RepositoryError::Duplicate(_))
        ));
        assert_eq!(repo.find_by_id(voice.id()).await.unwrap(), Some(voice.clone()));
        assert_eq!(repo.count().await.unwrap(), 1);

        let removed = repo.delete(voice.id()).await.unwrap();
        assert_eq!(removed, Some(voice.clone()));
        assert!(repo.delete(voice.id()).await.unwrap().is_none());
        assert!(repo.find_by_id(voice.id()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_find_all_keeps_insertion_order() {
        let repo = InMemoryVoiceRepository::new();
        repo.upsert(&Voice::builtin_default(DEFAULT_SAMPLE_RATE))
            .await
            .unwrap();
        let names = ["first", "second", "third"];
        for name in names {
            repo.save(&uploaded(name)).await.unwrap();
        }

        let all = repo.find_all().await.unwrap();
        let listed: Vec<&str> = all.iter().map(|v| v.name().as_str()).collect();
        assert_eq!(listed, vec!["Default Voice", "first", "second", "third"]);
    }

    #[tokio::test]
    async fn test_reinserted_voice_keeps_position() {
        let repo = InMemoryVoiceRepository::new();
        let a = uploaded("A");
        let b = uploaded("B");
        repo.save(&a).await.unwrap();
        repo.save(&b).await.unwrap();

        let removed = repo.delete(a.id()).await.unwrap().unwrap();
        repo.upsert(&removed).await.unwrap();

        let all = repo.find_all().await.unwrap();
        let listed: Vec<&str> = all.iter().map(|v| v.name().as_str()).collect();
        assert_eq!(listed, vec!["A", "B"]);
    }

    #[tokio::test]
    async fn test_concurrent_deletes_remove_once() {
        let repo = Arc::new(InMemoryVoiceRepository::new());
        let voice = uploaded("racy");
        repo.save(&voice).await.unwrap();

        let mut handles = Vec::new();
        for _ in 0..8 {
            let repo = repo.clone();
            let id = voice.id().clone();
            handles.push(tokio::spawn(async move { repo.delete(&id).await.unwrap() }));
        }

        let mut removed = 0;
        for handle in handles {
            if handle.await.unwrap().is_some() {
                removed += 1;
            }
        }
        assert_eq!(removed, 1);
    }
}
