pub mod streak;

use std::collections::HashSet;
use chrono::{DateTime, Duration, Utc};
use serde::{Serialize, Deserialize};
use crate::questions::question::{Question, QuestionId};

/// One submitted answer. Append-only.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct AttemptLog {
    pub question_id: QuestionId,
    pub chosen_index: usize,
    pub is_correct: bool,
    pub time_taken_seconds: u32,
    #[serde(default)]
    pub error_category: Option<String>,
    #[serde(default)]
    pub error_detail: Option<String>,
    pub timestamp: DateTime<Utc>,
}

impl AttemptLog {
    /// Build a log for an answer given now.
    pub fn new(question: &Question, chosen_index: usize, time_taken_seconds: u32) -> Self {
        AttemptLog {
            question_id: question.id,
            chosen_index,
            is_correct: question.is_correct_choice(chosen_index),
            time_taken_seconds,
            error_category: None,
            error_detail: None,
            timestamp: Utc::now(),
        }
    }

    pub fn with_error<S: Into<String>>(mut self, category: S, detail: Option<S>) -> Self {
        self.error_category = Some(category.into());
        self.error_detail = detail.map(Into::into);
        self
    }

    pub fn at(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = timestamp;
        self
    }
}

/// Ids of every question attempted at least once, built from one snapshot of
/// the attempt history.
#[derive(Debug, Clone, Default)]
pub struct SeenSet {
    ids: HashSet<QuestionId>,
}

impl SeenSet {
    pub fn from_attempts(attempts: &[AttemptLog]) -> Self {
        SeenSet {
            ids: attempts.iter().map(|a| a.question_id).collect(),
        }
    }

    /// Ids attempted at or after `now - days`.
    pub fn recent(attempts: &[AttemptLog], now: DateTime<Utc>, days: i64) -> Self {
        let cutoff = now - Duration::days(days);
        SeenSet {
            ids: attempts
                .iter()
                .filter(|a| a.timestamp >= cutoff)
                .map(|a| a.question_id)
                .collect(),
        }
    }

    pub fn contains(&self, id: QuestionId) -> bool {
        self.ids.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}
