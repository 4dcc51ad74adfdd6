use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use crate::questions::question::Question;
use crate::sessions::streak::DrillSignal;
use crate::sessions::SeenSet;

/// Remedial question set for a tag the learner keeps missing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmergencyDrill {
    pub tag: String,
    pub questions: Vec<Question>,
    pub reason: String,
    pub triggered_at: DateTime<Utc>,
}

/// Choose up to `size` drill questions from `candidates` (already limited to
/// the tag), preferring those not attempted recently.
pub fn build_drill(
    signal: &DrillSignal,
    candidates: Vec<Question>,
    recently_attempted: &SeenSet,
    size: usize,
) -> EmergencyDrill {
    let (recent, fresh): (Vec<_>, Vec<_>) = candidates
        .into_iter()
        .partition(|q| recently_attempted.contains(q.id));

    let questions: Vec<Question> = fresh.into_iter().chain(recent).take(size).collect();

    tracing::info!(
        tag = %signal.tag,
        question_count = questions.len(),
        "Built emergency drill"
    );

    EmergencyDrill {
        tag: signal.tag.clone(),
        questions,
        reason: signal.reason.clone(),
        triggered_at: signal.triggered_at,
    }
}
