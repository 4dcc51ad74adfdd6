use std::collections::HashMap;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use crate::questions::question::Question;

pub const DEFAULT_ERROR_THRESHOLD: u32 = 3;

/// Raised when one tag collects a run of consecutive misses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrillSignal {
    pub tag: String,
    pub reason: String,
    pub triggered_at: DateTime<Utc>,
}

impl DrillSignal {
    fn for_tag(tag: &str) -> Self {
        DrillSignal {
            tag: tag.to_string(),
            reason: format!("Consecutive errors detected in '{}' questions", tag),
            triggered_at: Utc::now(),
        }
    }
}

/// Per-session consecutive-error counters, one per tag.
///
/// Owned by the session layer and passed to the scheduler on every answer, so
/// independent learner sessions never share counters.
#[derive(Debug, Clone)]
pub struct StreakMonitor {
    threshold: u32,
    counters: HashMap<String, u32>,
}

impl StreakMonitor {
    pub fn new(threshold: u32) -> Self {
        StreakMonitor {
            threshold: threshold.max(1),
            counters: HashMap::new(),
        }
    }

    /// Apply one answer to the question's tags, in tag order.
    ///
    /// A correct answer zeroes every tag's counter; a miss increments them.
    /// The first tag to reach the threshold is zeroed and its signal returned,
    /// and the tags after it are left untouched for this answer so their own
    /// runs still fire on a later miss.
    pub fn record_answer(&mut self, question: &Question, is_correct: bool) -> Option<DrillSignal> {
        for tag in &question.skill_tags {
            if is_correct {
                self.counters.insert(tag.clone(), 0);
                continue;
            }

            let count = self.counters.entry(tag.clone()).or_insert(0);
            *count += 1;
            if *count >= self.threshold {
                *count = 0;
                tracing::info!(tag = %tag, threshold = self.threshold, "Emergency drill triggered");
                return Some(DrillSignal::for_tag(tag));
            }
        }
        None
    }

    /// Zero every counter (start of a new plan).
    pub fn reset_session(&mut self) {
        self.counters.clear();
    }

    pub fn streak(&self, tag: &str) -> u32 {
        self.counters.get(tag).copied().unwrap_or(0)
    }

    pub fn threshold(&self) -> u32 {
        self.threshold
    }
}

impl Default for StreakMonitor {
    fn default() -> Self {
        Self::new(DEFAULT_ERROR_THRESHOLD)
    }
}
