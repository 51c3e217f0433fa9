//! Entry storage for the thanks service.
//!
//! [`EntryStore`] is the seam between the HTTP layer and the backing
//! table: [`SupabaseStore`] talks to a hosted Supabase (PostgREST) REST
//! interface, [`MemoryStore`] backs integration tests and local
//! development.

pub mod config;
pub mod error;
pub mod memory;
pub mod supabase;

use async_trait::async_trait;
use thanks_core::entry::SupportEntry;
use thanks_core::survey::SurveyAnswers;

pub use config::StoreConfig;
pub use error::StoreError;
pub use memory::MemoryStore;
pub use supabase::SupabaseStore;

/// Hard cap on admin listings, regardless of the requested limit.
pub const MAX_LIST_LIMIT: u32 = 100;

/// Operations the survey workflow needs from the backing table.
///
/// Every method is exactly one store round trip. Implementations do not
/// retry, cache, or hold state across calls; a failed call surfaces
/// immediately.
#[async_trait]
pub trait EntryStore: Send + Sync {
    /// Create a new unanswered entry for `token`.
    async fn insert(&self, token: &str) -> Result<SupportEntry, StoreError>;

    /// Exact, case-sensitive token lookup. `None` means no such token.
    async fn find_by_token(&self, token: &str) -> Result<Option<SupportEntry>, StoreError>;

    /// Most recent entries, newest first, capped at [`MAX_LIST_LIMIT`].
    async fn list_recent(&self, limit: u32) -> Result<Vec<SupportEntry>, StoreError>;

    /// Record answers on the entry matching `token` that is still
    /// unanswered, setting `answered_at` and all answer fields in the
    /// same write.
    ///
    /// Returns `None` when no row matched: the entry never existed or
    /// was already answered. The unanswered predicate is part of the
    /// write itself; implementations must not read-then-write, as that
    /// would race under concurrent submissions.
    async fn answer_if_open(
        &self,
        token: &str,
        answers: &SurveyAnswers,
    ) -> Result<Option<SupportEntry>, StoreError>;

    /// Whether the backing store has the credentials it needs.
    fn is_configured(&self) -> bool {
        true
    }
}
