use std::collections::{BTreeMap, HashMap};
use chrono::{DateTime, Duration, NaiveDate, Utc};
use serde::{Serialize, Deserialize};
use crate::questions::question::{Question, QuestionId};
use crate::sessions::AttemptLog;
use crate::skills::model::WeaknessRecord;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct FocusTag {
    pub tag: String,
    pub weight: f64,
    /// Percent correct; `None` for a tag without attempts
    pub accuracy: Option<f64>,
    pub attempts: u32,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct FocusRecommendation {
    pub primary: Option<FocusTag>,
    pub secondary: Option<FocusTag>,
    pub message: String,
    pub overall_accuracy: f64,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TagStatus {
    Weak,
    Improving,
    Strong,
}

impl TagStatus {
    pub fn from_weight(weight: f64) -> Self {
        if weight > 1.5 {
            TagStatus::Weak
        } else if weight > 1.0 {
            TagStatus::Improving
        } else {
            TagStatus::Strong
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TagPerformance {
    pub tag: String,
    pub accuracy: f64,
    pub attempts: u32,
    pub weight: f64,
    pub status: TagStatus,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct AccuracyBucket {
    pub total: usize,
    pub correct: usize,
    pub accuracy: f64,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct DailyAccuracy {
    pub date: NaiveDate,
    pub total: usize,
    pub correct: usize,
    pub accuracy: f64,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ProgressSummary {
    pub total_attempts: usize,
    pub overall_accuracy: f64,
    pub daily_trend: Vec<DailyAccuracy>,
    /// Weakest first
    pub tag_performance: Vec<TagPerformance>,
    pub accuracy_by_type: BTreeMap<String, AccuracyBucket>,
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

fn percent(correct: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        round1(correct as f64 / total as f64 * 100.0)
    }
}

fn overall_accuracy(attempts: &[AttemptLog]) -> f64 {
    let correct = attempts.iter().filter(|a| a.is_correct).count();
    percent(correct, attempts.len())
}

fn sorted_by_weight(records: &[WeaknessRecord]) -> Vec<&WeaknessRecord> {
    let mut sorted: Vec<&WeaknessRecord> = records.iter().collect();
    sorted.sort_by(|a, b| b.weight.partial_cmp(&a.weight).unwrap_or(std::cmp::Ordering::Equal));
    sorted
}

fn focus_tag(record: &WeaknessRecord) -> FocusTag {
    FocusTag {
        tag: record.tag.clone(),
        weight: record.weight,
        accuracy: (record.total_attempts > 0).then(|| round1(record.accuracy())),
        attempts: record.total_attempts,
    }
}

/// Name the weakest tags and phrase a short recommendation.
pub fn recommended_focus(records: &[WeaknessRecord], attempts: &[AttemptLog]) -> FocusRecommendation {
    let sorted = sorted_by_weight(records);
    let overall = overall_accuracy(attempts);

    let primary = match sorted.first() {
        Some(record) => *record,
        None => {
            return FocusRecommendation {
                primary: None,
                secondary: None,
                message: "No study history yet. Start practicing to get personalized recommendations."
                    .to_string(),
                overall_accuracy: overall,
            };
        }
    };

    let accuracy = round1(primary.accuracy());
    let message = if primary.weight > 2.0 {
        format!(
            "Focus on '{}': accuracy is {:.0}% and needs improvement.",
            primary.tag, accuracy
        )
    } else if primary.weight > 1.5 {
        format!(
            "'{}' is your weakest area at {:.0}% accuracy. Keep practicing.",
            primary.tag, accuracy
        )
    } else {
        "Your skills are well-balanced. Continue with mixed practice.".to_string()
    };

    FocusRecommendation {
        primary: Some(focus_tag(primary)),
        secondary: sorted.get(1).map(|r| focus_tag(r)),
        message,
        overall_accuracy: overall,
    }
}

/// Accuracy overall, per day in the last `days`, per tag and per subcategory.
pub fn progress_summary(
    records: &[WeaknessRecord],
    attempts: &[AttemptLog],
    questions: &[Question],
    days: i64,
    now: DateTime<Utc>,
) -> ProgressSummary {
    let cutoff = now - Duration::days(days);
    let mut per_day: BTreeMap<NaiveDate, (usize, usize)> = BTreeMap::new();
    for attempt in attempts.iter().filter(|a| a.timestamp > cutoff) {
        let entry = per_day.entry(attempt.timestamp.date_naive()).or_insert((0, 0));
        entry.0 += 1;
        if attempt.is_correct {
            entry.1 += 1;
        }
    }
    let daily_trend = per_day
        .into_iter()
        .map(|(date, (total, correct))| DailyAccuracy {
            date,
            total,
            correct,
            accuracy: percent(correct, total),
        })
        .collect();

    let subcategories: HashMap<QuestionId, &str> = questions
        .iter()
        .map(|q| (q.id, q.subcategory.as_str()))
        .collect();
    let mut by_type: BTreeMap<String, (usize, usize)> = BTreeMap::new();
    for attempt in attempts {
        // Attempts on questions no longer in the catalog are skipped.
        if let Some(subcategory) = subcategories.get(&attempt.question_id) {
            let entry = by_type.entry(subcategory.to_string()).or_insert((0, 0));
            entry.0 += 1;
            if attempt.is_correct {
                entry.1 += 1;
            }
        }
    }
    let accuracy_by_type = by_type
        .into_iter()
        .map(|(subcategory, (total, correct))| {
            (subcategory, AccuracyBucket { total, correct, accuracy: percent(correct, total) })
        })
        .collect();

    let tag_performance = sorted_by_weight(records)
        .into_iter()
        .map(|r| TagPerformance {
            tag: r.tag.clone(),
            accuracy: round1(r.accuracy()),
            attempts: r.total_attempts,
            weight: r.weight,
            status: TagStatus::from_weight(r.weight),
        })
        .collect();

    ProgressSummary {
        total_attempts: attempts.len(),
        overall_accuracy: overall_accuracy(attempts),
        daily_trend,
        tag_performance,
        accuracy_by_type,
    }
}
