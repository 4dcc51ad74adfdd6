use async_trait::async_trait;
use chrono::{DateTime, Utc};
use parking_lot::{Mutex, RwLock};
use crate::error::TutorError;
use crate::memory::StudyStore;
use crate::questions::question::{Question, QuestionFilter};
use crate::sessions::AttemptLog;
use crate::skills::model::WeaknessRecord;

/// In-process store: catalog, attempt log and weakness records.
///
/// Nothing is persisted. Weakness updates hold one lock for the whole
/// read-modify-write, so concurrent attempts on a tag cannot interleave.
#[derive(Default)]
pub struct MemoryStore {
    questions: RwLock<Vec<Question>>,
    attempts: RwLock<Vec<AttemptLog>>,
    weaknesses: Mutex<Vec<WeaknessRecord>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_questions(questions: Vec<Question>) -> Self {
        let store = Self::new();
        store.import_questions(questions);
        store
    }

    /// Append catalog entries; ids already present are skipped.
    pub fn import_questions(&self, questions: Vec<Question>) -> usize {
        let mut catalog = self.questions.write();
        let before = catalog.len();
        for question in questions {
            if catalog.iter().any(|q| q.id == question.id) {
                tracing::debug!(question_id = question.id, "Skipping duplicate catalog entry");
                continue;
            }
            catalog.push(question);
        }
        catalog.len() - before
    }

    /// Seed a weakness record directly (imports and tests).
    pub fn put_weakness_record(&self, record: WeaknessRecord) {
        let mut records = self.weaknesses.lock();
        match records.iter_mut().find(|r| r.tag == record.tag) {
            Some(existing) => *existing = record,
            None => records.push(record),
        }
    }

    /// Drop all learner history; the catalog stays.
    pub fn reset(&self) {
        self.attempts.write().clear();
        self.weaknesses.lock().clear();
        tracing::info!("Learner history reset");
    }

    pub fn question_count(&self) -> usize {
        self.questions.read().len()
    }
}

#[async_trait]
impl StudyStore for MemoryStore {
    async fn list_questions(&self, filter: &QuestionFilter) -> Result<Vec<Question>, TutorError> {
        Ok(self
            .questions
            .read()
            .iter()
            .filter(|q| filter.matches(q))
            .cloned()
            .collect())
    }

    async fn list_attempts(&self) -> Result<Vec<AttemptLog>, TutorError> {
        Ok(self.attempts.read().clone())
    }

    async fn get_weakness_records(&self) -> Result<Vec<WeaknessRecord>, TutorError> {
        Ok(self.weaknesses.lock().clone())
    }

    async fn upsert_weakness_record(
        &self,
        tag: &str,
        error_increment: u32,
        at: DateTime<Utc>,
    ) -> Result<WeaknessRecord, TutorError> {
        if error_increment > 1 {
            return Err(TutorError::storage(format!(
                "error_increment must be 0 or 1, got {}",
                error_increment
            ))
            .with_context(format!("tag: {}", tag)));
        }
        let is_error = error_increment == 1;

        let mut records = self.weaknesses.lock();
        let record = match records.iter_mut().find(|r| r.tag == tag) {
            Some(record) => {
                record.apply_attempt(is_error, at);
                record.clone()
            }
            None => {
                let record = WeaknessRecord::first_attempt(tag, is_error, at);
                records.push(record.clone());
                record
            }
        };
        Ok(record)
    }

    async fn append_attempt(&self, attempt: AttemptLog) -> Result<(), TutorError> {
        self.attempts.write().push(attempt);
        Ok(())
    }
}
