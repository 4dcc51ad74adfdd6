pub mod drill;
pub mod ordering;
pub mod sampler;

use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Serialize, Deserialize};
use crate::config::SchedulerConfig;
use crate::questions::passage::{group_passages, PassageGroup};
use crate::questions::pool::CandidatePool;
use crate::questions::question::{Question, QuestionId};
use crate::skills::model::WeightTable;

/// One day's practice plan. Passage groups are contiguous.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct DailyPlan {
    pub questions: Vec<Question>,
    pub estimated_minutes: u32,
    /// Weakest tags when the plan was made
    pub focus_tags: Vec<String>,
    pub created_at: DateTime<Utc>,
}

/// Compact view of a plan for the session layer.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct PlanSummary {
    pub question_ids: Vec<QuestionId>,
    pub question_count: usize,
    pub estimated_minutes: u32,
    pub focus_tags: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl DailyPlan {
    pub fn empty() -> Self {
        DailyPlan {
            questions: Vec::new(),
            estimated_minutes: 0,
            focus_tags: Vec::new(),
            created_at: Utc::now(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn question_ids(&self) -> Vec<QuestionId> {
        self.questions.iter().map(|q| q.id).collect()
    }

    pub fn summary(&self) -> PlanSummary {
        PlanSummary {
            question_ids: self.question_ids(),
            question_count: self.questions.len(),
            estimated_minutes: self.estimated_minutes,
            focus_tags: self.focus_tags.clone(),
            created_at: self.created_at,
        }
    }
}

/// Pick and order the questions of a plan from a candidate pool.
///
/// `target_count` is a target: whole passage groups may overshoot it, and a
/// small pool yields fewer questions.
pub fn assemble_plan<R: Rng + ?Sized>(
    pool: CandidatePool,
    weights: &WeightTable,
    target_count: usize,
    config: &SchedulerConfig,
    rng: &mut R,
) -> Vec<Question> {
    let (singles_pool, reading_pool) = pool.split_reading();

    let (singles, groups) = match (singles_pool.is_empty(), reading_pool.is_empty()) {
        (true, true) => return Vec::new(),
        (true, false) => {
            let groups = group_passages(&reading_pool, config.passage_key_len);
            (Vec::new(), select_groups(groups, target_count, weights, rng))
        }
        (false, true) => (select_unseen_first(&singles_pool, target_count, weights, rng), Vec::new()),
        (false, false) => {
            let reading_quota = (target_count as f64 * config.reading_share).floor() as usize;
            let singles = select_unseen_first(
                &singles_pool,
                target_count.saturating_sub(reading_quota),
                weights,
                rng,
            );
            let remainder = target_count.saturating_sub(singles.len());
            let groups = if remainder > 0 {
                let groups = group_passages(&reading_pool, config.passage_key_len);
                select_groups(groups, remainder, weights, rng)
            } else {
                Vec::new()
            };
            (singles, groups)
        }
    };

    tracing::debug!(
        target_count,
        singles = singles.len(),
        groups = groups.len(),
        "Selected plan contents"
    );

    ordering::arrange(singles, groups, config.max_consecutive_same_tag, rng)
}

/// Unseen questions first; seen ones fill the shortfall by weakness weight.
pub fn select_unseen_first<R: Rng + ?Sized>(
    pool: &CandidatePool,
    count: usize,
    weights: &WeightTable,
    rng: &mut R,
) -> Vec<Question> {
    let unseen = pool.unseen();
    let weight_of = |q: &&Question| weights.question_weight(q);

    let picked: Vec<&Question> = if unseen.len() >= count {
        sampler::sample(unseen, weight_of, count, rng)
    } else {
        let shortfall = count - unseen.len();
        let mut picked = unseen;
        picked.extend(sampler::sample(pool.seen(), weight_of, shortfall, rng));
        picked
    };

    picked.into_iter().cloned().collect()
}

/// Whole passage groups until `count` questions are covered.
///
/// Groups with unseen members come first; within each tier groups are drawn
/// by the highest weakness weight among their members.
pub fn select_groups<R: Rng + ?Sized>(
    groups: Vec<PassageGroup>,
    count: usize,
    weights: &WeightTable,
    rng: &mut R,
) -> Vec<PassageGroup> {
    if count == 0 {
        return Vec::new();
    }

    let group_weight = |g: &PassageGroup| {
        g.questions
            .iter()
            .map(|q| weights.question_weight(q))
            .fold(0.0_f64, f64::max)
    };

    let (unseen, seen): (Vec<_>, Vec<_>) = groups.into_iter().partition(|g| g.unseen);
    let ordered = sampler::weighted_permutation(unseen, group_weight, rng)
        .into_iter()
        .chain(sampler::weighted_permutation(seen, group_weight, rng));

    let mut selected = Vec::new();
    let mut covered = 0;
    for group in ordered {
        if covered >= count {
            break;
        }
        covered += group.len();
        selected.push(group);
    }
    selected
}
