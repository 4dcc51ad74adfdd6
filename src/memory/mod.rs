pub mod store;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use crate::error::TutorError;
use crate::questions::question::{Question, QuestionFilter};
use crate::sessions::AttemptLog;
use crate::skills::model::WeaknessRecord;

pub use store::MemoryStore;

/// Storage collaborator the scheduler reads from and writes to.
///
/// Failures are returned as-is; the scheduler performs no retries.
#[async_trait]
pub trait StudyStore: Send + Sync {
    /// Catalog questions matching the filter, in catalog order
    async fn list_questions(&self, filter: &QuestionFilter) -> Result<Vec<Question>, TutorError>;

    /// Entire attempt history, oldest first
    async fn list_attempts(&self) -> Result<Vec<AttemptLog>, TutorError>;

    async fn get_weakness_records(&self) -> Result<Vec<WeaknessRecord>, TutorError>;

    /// Atomic read-modify-write of one tag's record; `error_increment` is 0 or 1.
    /// Implementations fold the attempt in with [`WeaknessRecord::apply_attempt`]
    /// (or [`WeaknessRecord::first_attempt`] for a new tag).
    async fn upsert_weakness_record(
        &self,
        tag: &str,
        error_increment: u32,
        at: DateTime<Utc>,
    ) -> Result<WeaknessRecord, TutorError>;

    async fn append_attempt(&self, attempt: AttemptLog) -> Result<(), TutorError>;
}
