use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Counters describing scheduler activity.
/// All metrics are atomic counters for thread-safety
#[derive(Clone, Default, Debug)]
pub struct Metrics {
    /// Daily plans produced (empty plans included)
    pub plans_generated: Arc<AtomicU64>,
    /// Questions handed out across all plans
    pub questions_planned: Arc<AtomicU64>,
    /// Attempt logs written through the scheduler
    pub attempts_recorded: Arc<AtomicU64>,
    /// Emergency drill signals raised
    pub drills_triggered: Arc<AtomicU64>,
    /// Storage collaborator failures surfaced to callers
    pub storage_errors: Arc<AtomicU64>,
}

/// Point-in-time copy of [`Metrics`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MetricsSnapshot {
    pub plans_generated: u64,
    pub questions_planned: u64,
    pub attempts_recorded: u64,
    pub drills_triggered: u64,
    pub storage_errors: u64,
}

impl Metrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a generated plan and its size
    pub fn record_plan(&self, question_count: usize) {
        self.plans_generated.fetch_add(1, Ordering::Relaxed);
        self.questions_planned.fetch_add(question_count as u64, Ordering::Relaxed);
    }

    pub fn record_attempt(&self) {
        self.attempts_recorded.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_drill(&self) {
        self.drills_triggered.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_storage_error(&self) {
        self.storage_errors.fetch_add(1, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            plans_generated: self.plans_generated.load(Ordering::Relaxed),
            questions_planned: self.questions_planned.load(Ordering::Relaxed),
            attempts_recorded: self.attempts_recorded.load(Ordering::Relaxed),
            drills_triggered: self.drills_triggered.load(Ordering::Relaxed),
            storage_errors: self.storage_errors.load(Ordering::Relaxed),
        }
    }
}
