use std::collections::HashSet;
use std::sync::Arc;
use chrono::Utc;
use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use serde::{Deserialize, Serialize};
use crate::analytics::{self, FocusRecommendation, ProgressSummary};
use crate::brain::{self, drill::{build_drill, EmergencyDrill}, DailyPlan};
use crate::config::{get_scheduler_config, SchedulerConfig};
use crate::error::TutorError;
use crate::memory::StudyStore;
use crate::metrics::{Metrics, MetricsSnapshot};
use crate::questions::pool::CandidatePool;
use crate::questions::question::{Question, QuestionFilter};
use crate::sessions::streak::{DrillSignal, StreakMonitor};
use crate::sessions::{AttemptLog, SeenSet};
use crate::skills::model::{WeaknessRecord, WeightTable};

type SharedRng = Arc<Mutex<Box<dyn RngCore + Send>>>;

/// Everything that came out of submitting one answer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnswerOutcome {
    pub attempt: AttemptLog,
    /// Updated record for every tag on the question
    pub records: Vec<WeaknessRecord>,
    pub drill: Option<DrillSignal>,
}

/// Adaptive practice scheduler for one learner.
///
/// Reads the catalog and history from a [`StudyStore`], builds daily plans
/// and folds answers back into the weakness records. Randomness comes from an
/// injected generator so plans are reproducible under a fixed seed.
#[derive(Clone)]
pub struct Scheduler {
    store: Arc<dyn StudyStore>,
    config: SchedulerConfig,
    rng: SharedRng,
    /// Serializes attempt recording (append + per-tag upserts) as one unit
    write_lock: Arc<tokio::sync::Mutex<()>>,
    metrics: Metrics,
}

impl Scheduler {
    /// Scheduler using the process-wide config and an entropy-seeded generator.
    pub fn new(store: Arc<dyn StudyStore>) -> Self {
        Self::build(store, get_scheduler_config().clone())
    }

    pub fn with_config(store: Arc<dyn StudyStore>, config: SchedulerConfig) -> Result<Self, TutorError> {
        config.validate()?;
        Ok(Self::build(store, config))
    }

    fn build(store: Arc<dyn StudyStore>, config: SchedulerConfig) -> Self {
        Scheduler {
            store,
            config,
            rng: Arc::new(Mutex::new(Box::new(StdRng::from_entropy()))),
            write_lock: Arc::new(tokio::sync::Mutex::new(())),
            metrics: Metrics::new(),
        }
    }

    /// Replace the random source, e.g. with a seeded generator in tests.
    pub fn with_rng<R: RngCore + Send + 'static>(mut self, rng: R) -> Self {
        self.rng = Arc::new(Mutex::new(Box::new(rng)));
        self
    }

    pub fn config(&self) -> &SchedulerConfig {
        &self.config
    }

    pub fn metrics(&self) -> MetricsSnapshot {
        self.metrics.snapshot()
    }

    /// Pass a storage failure through with the operation that hit it.
    fn surface(&self, err: TutorError, operation: &str) -> TutorError {
        self.metrics.record_storage_error();
        tracing::warn!(operation = operation, error = %err, "Storage collaborator failed");
        let context = match err.context.as_deref() {
            Some(existing) => format!("{}; {}", operation, existing),
            None => operation.to_string(),
        };
        err.with_context(context)
    }

    async fn load_questions(&self, filter: &QuestionFilter) -> Result<Vec<Question>, TutorError> {
        self.store
            .list_questions(filter)
            .await
            .map_err(|e| self.surface(e, "list_questions"))
    }

    async fn load_attempts(&self) -> Result<Vec<AttemptLog>, TutorError> {
        self.store
            .list_attempts()
            .await
            .map_err(|e| self.surface(e, "list_attempts"))
    }

    async fn load_weaknesses(&self) -> Result<Vec<WeaknessRecord>, TutorError> {
        self.store
            .get_weakness_records()
            .await
            .map_err(|e| self.surface(e, "get_weakness_records"))
    }

    /// Build a plan of roughly `target_count` questions, weighted toward weak
    /// tags, optionally restricted to a subcategory and/or tag.
    ///
    /// An empty catalog or filter result is not an error: the plan comes back
    /// with no questions and zero minutes.
    pub async fn generate_daily_plan(
        &self,
        target_count: usize,
        subcategory: Option<&str>,
        tag: Option<&str>,
    ) -> Result<DailyPlan, TutorError> {
        let filter = QuestionFilter::new(subcategory, tag);
        let questions = self.load_questions(&filter).await?;
        if questions.is_empty() {
            tracing::info!(subcategory = ?subcategory, tag = ?tag, "No questions match, returning empty plan");
            self.metrics.record_plan(0);
            return Ok(DailyPlan::empty());
        }

        // One snapshot of history per plan.
        let attempts = self.load_attempts().await?;
        let records = self.load_weaknesses().await?;
        let seen = SeenSet::from_attempts(&attempts);
        let weights = WeightTable::from_records(&records);

        let pool = CandidatePool::build(questions, &filter, &seen);
        if pool.is_empty() {
            self.metrics.record_plan(0);
            return Ok(DailyPlan::empty());
        }

        let selected = {
            let mut rng = self.rng.lock();
            brain::assemble_plan(pool, &weights, target_count, &self.config, &mut **rng)
        };
        if selected.is_empty() {
            tracing::info!(target_count, "Nothing selected, returning empty plan");
            self.metrics.record_plan(0);
            return Ok(DailyPlan::empty());
        }

        let plan = DailyPlan {
            estimated_minutes: selected.len() as u32 * self.config.minutes_per_question,
            focus_tags: weights.top_tags(self.config.focus_tag_count),
            created_at: Utc::now(),
            questions: selected,
        };

        self.metrics.record_plan(plan.questions.len());
        tracing::info!(
            target_count,
            question_count = plan.questions.len(),
            estimated_minutes = plan.estimated_minutes,
            focus_tags = ?plan.focus_tags,
            "Generated daily plan"
        );
        Ok(plan)
    }

    /// Plan sized by `default_question_count`.
    pub async fn generate_default_plan(&self) -> Result<DailyPlan, TutorError> {
        self.generate_daily_plan(self.config.default_question_count, None, None).await
    }

    /// Feed one answer to the session's streak counters.
    pub fn record_answer(
        &self,
        streaks: &mut StreakMonitor,
        question: &Question,
        is_correct: bool,
    ) -> Option<DrillSignal> {
        let signal = streaks.record_answer(question, is_correct);
        if signal.is_some() {
            self.metrics.record_drill();
        }
        signal
    }

    /// Store an attempt and update the weakness record of each of the
    /// question's tags.
    ///
    /// Not transactional across the store: the attempt is appended first, so
    /// if a later upsert fails the attempt stays stored and only the tags
    /// before the failing one are updated. The error is returned as is.
    pub async fn record_attempt(
        &self,
        question: &Question,
        attempt: AttemptLog,
    ) -> Result<Vec<WeaknessRecord>, TutorError> {
        if attempt.question_id != question.id {
            return Err(TutorError::new(
                format!(
                    "Attempt references question {} but was recorded against {}",
                    attempt.question_id, question.id
                ),
                "attempt",
            ));
        }

        let _guard = self.write_lock.lock().await;

        let at = attempt.timestamp;
        let error_increment = u32::from(!attempt.is_correct);
        self.store
            .append_attempt(attempt)
            .await
            .map_err(|e| self.surface(e, "append_attempt"))?;

        let mut updated = Vec::with_capacity(question.skill_tags.len());
        let mut touched = HashSet::new();
        for tag in &question.skill_tags {
            if !touched.insert(tag.as_str()) {
                continue;
            }
            let record = self
                .store
                .upsert_weakness_record(tag, error_increment, at)
                .await
                .map_err(|e| self.surface(e, "upsert_weakness_record"))?;
            tracing::debug!(tag = %record.tag, weight = record.weight, "Updated weakness record");
            updated.push(record);
        }

        self.metrics.record_attempt();
        Ok(updated)
    }

    /// Record an answer end to end: attempt log, weakness records, streaks.
    pub async fn submit_answer(
        &self,
        streaks: &mut StreakMonitor,
        question: &Question,
        chosen_index: usize,
        time_taken_seconds: u32,
    ) -> Result<AnswerOutcome, TutorError> {
        let attempt = AttemptLog::new(question, chosen_index, time_taken_seconds);
        let records = self.record_attempt(question, attempt.clone()).await?;
        let drill = self.record_answer(streaks, question, attempt.is_correct);
        Ok(AnswerOutcome { attempt, records, drill })
    }

    /// The `n` tags with the highest stored weight.
    pub async fn top_weakness_tags(&self, n: usize) -> Result<Vec<String>, TutorError> {
        let records = self.load_weaknesses().await?;
        Ok(WeightTable::from_records(&records).top_tags(n))
    }

    /// Remedial questions for a drill signal, favoring ones not attempted in
    /// the last `drill_recent_days` days.
    pub async fn emergency_drill(&self, signal: &DrillSignal) -> Result<EmergencyDrill, TutorError> {
        let mut candidates = self.load_questions(&QuestionFilter::by_tag(&signal.tag)).await?;
        candidates.truncate(self.config.drill_candidate_limit);

        let attempts = self.load_attempts().await?;
        let recent = SeenSet::recent(&attempts, Utc::now(), self.config.drill_recent_days);

        Ok(build_drill(signal, candidates, &recent, self.config.drill_size))
    }

    pub async fn recommended_focus(&self) -> Result<FocusRecommendation, TutorError> {
        let records = self.load_weaknesses().await?;
        let attempts = self.load_attempts().await?;
        Ok(analytics::recommended_focus(&records, &attempts))
    }

    /// Progress over the last `days` days plus all-time tag and type accuracy.
    pub async fn progress_summary(&self, days: i64) -> Result<ProgressSummary, TutorError> {
        let records = self.load_weaknesses().await?;
        let attempts = self.load_attempts().await?;
        let questions = self.load_questions(&QuestionFilter::default()).await?;
        Ok(analytics::progress_summary(&records, &attempts, &questions, days, Utc::now()))
    }
}
