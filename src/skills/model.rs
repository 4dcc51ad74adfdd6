use serde::{Serialize, Deserialize};
use std::collections::HashMap;
use chrono::{DateTime, Utc};
use crate::questions::question::Question;

/// Weight used for tags with no history and for untagged questions.
pub const NEUTRAL_WEIGHT: f64 = 1.0;

/// Attempt statistics for one skill tag.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct WeaknessRecord {
    pub tag: String,
    pub error_count: u32,
    pub total_attempts: u32,
    pub weight: f64,
    pub last_seen: DateTime<Utc>,
}

impl WeaknessRecord {
    /// Record for a tag seen for the first time at `at`.
    pub fn first_attempt(tag: &str, is_error: bool, at: DateTime<Utc>) -> Self {
        let mut record = WeaknessRecord {
            tag: tag.to_string(),
            error_count: 0,
            total_attempts: 0,
            weight: NEUTRAL_WEIGHT,
            last_seen: at,
        };
        record.apply_attempt(is_error, at);
        record
    }

    /// Fold one attempt into the record.
    ///
    /// The weight is computed from the updated counts and the previous
    /// `last_seen`, then `last_seen` moves to `at`.
    pub fn apply_attempt(&mut self, is_error: bool, at: DateTime<Utc>) {
        self.total_attempts += 1;
        if is_error {
            self.error_count += 1;
        }
        self.weight = WeaknessModel::weight_for(Some(self), at);
        if at > self.last_seen {
            self.last_seen = at;
        }
    }

    pub fn error_rate(&self) -> f64 {
        if self.total_attempts == 0 {
            0.5
        } else {
            self.error_count as f64 / self.total_attempts as f64
        }
    }

    /// Percentage of correct attempts, 0 when the tag has no attempts.
    pub fn accuracy(&self) -> f64 {
        if self.total_attempts == 0 {
            return 0.0;
        }
        let correct = self.total_attempts.saturating_sub(self.error_count);
        correct as f64 / self.total_attempts as f64 * 100.0
    }
}

/// Converts attempt statistics into a sampling weight.
pub struct WeaknessModel;

impl WeaknessModel {
    /// Weight of a tag as of `now`; absent records get the neutral prior.
    ///
    /// error_factor spans [0.5, 2.0], time_factor spans [0.8, 1.5], so the
    /// result stays within [0.4, 3.0].
    pub fn weight_for(record: Option<&WeaknessRecord>, now: DateTime<Utc>) -> f64 {
        let record = match record {
            Some(r) => r,
            None => return NEUTRAL_WEIGHT,
        };

        let error_rate = record.error_rate().clamp(0.0, 1.0);
        let error_factor = 0.5 + error_rate * 1.5;

        let days_since = (now - record.last_seen).num_days().max(0);
        let mut time_factor = (0.8 + days_since as f64 * 0.05).min(1.5);

        // Stale mastered tags must not drop out of rotation.
        if error_rate < 0.3 && days_since > 7 {
            time_factor = time_factor.max(1.2);
        }

        round2(error_factor * time_factor)
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Snapshot of stored tag weights used while building one plan.
#[derive(Debug, Clone, Default)]
pub struct WeightTable {
    // storage order, used to break ranking ties
    ranked: Vec<(String, f64)>,
    by_tag: HashMap<String, f64>,
}

impl WeightTable {
    pub fn from_records(records: &[WeaknessRecord]) -> Self {
        let mut table = WeightTable::default();
        for record in records {
            if table.by_tag.contains_key(&record.tag) {
                continue;
            }
            table.by_tag.insert(record.tag.clone(), record.weight);
            table.ranked.push((record.tag.clone(), record.weight));
        }
        table
    }

    pub fn tag_weight(&self, tag: &str) -> f64 {
        self.by_tag.get(tag).copied().unwrap_or(NEUTRAL_WEIGHT)
    }

    /// Highest weight among the question's tags, neutral when untagged.
    pub fn question_weight(&self, question: &Question) -> f64 {
        question
            .skill_tags
            .iter()
            .map(|tag| self.tag_weight(tag))
            .fold(None, |best: Option<f64>, w| Some(best.map_or(w, |b| b.max(w))))
            .unwrap_or(NEUTRAL_WEIGHT)
    }

    /// Top `n` tags by weight, descending; ties keep storage order.
    pub fn top_tags(&self, n: usize) -> Vec<String> {
        let mut ranked = self.ranked.clone();
        ranked.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
        ranked.into_iter().take(n).map(|(tag, _)| tag).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.ranked.is_empty()
    }
}
