//! In-memory [`EntryStore`] for integration tests and local development.

use async_trait::async_trait;
use chrono::Utc;
use thanks_core::entry::SupportEntry;
use thanks_core::survey::SurveyAnswers;
use tokio::sync::Mutex;

use crate::error::StoreError;
use crate::{EntryStore, MAX_LIST_LIMIT};

/// Entry table held in process memory.
///
/// The single mutex stands in for the hosted store's row-level
/// atomicity: `answer_if_open` checks and writes under one guard, so
/// concurrent submissions for the same token still resolve to exactly
/// one winner.
#[derive(Debug, Default)]
pub struct MemoryStore {
    /// Entries in creation order (newest last).
    entries: Mutex<Vec<SupportEntry>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl EntryStore for MemoryStore {
    async fn insert(&self, token: &str) -> Result<SupportEntry, StoreError> {
        let entry = SupportEntry::new(token);
        self.entries.lock().await.push(entry.clone());
        Ok(entry)
    }

    async fn find_by_token(&self, token: &str) -> Result<Option<SupportEntry>, StoreError> {
        let entries = self.entries.lock().await;
        Ok(entries.iter().find(|e| e.token == token).cloned())
    }

    async fn list_recent(&self, limit: u32) -> Result<Vec<SupportEntry>, StoreError> {
        let limit = limit.min(MAX_LIST_LIMIT) as usize;
        let entries = self.entries.lock().await;
        Ok(entries.iter().rev().take(limit).cloned().collect())
    }

    async fn answer_if_open(
        &self,
        token: &str,
        answers: &SurveyAnswers,
    ) -> Result<Option<SupportEntry>, StoreError> {
        let mut entries = self.entries.lock().await;
        match entries
            .iter_mut()
            .find(|e| e.token == token && !e.is_answered())
        {
            Some(entry) => {
                entry.record_answers(answers, Utc::now());
                Ok(Some(entry.clone()))
            }
            None => Ok(None),
        }
    }
}
