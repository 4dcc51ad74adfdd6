pub mod analytics;
pub mod brain;
pub mod config;
pub mod error;
pub mod logging;
pub mod memory;
pub mod metrics;
pub mod questions;
pub mod scheduler;
pub mod sessions;
pub mod skills;

pub use brain::{DailyPlan, PlanSummary};
pub use brain::drill::EmergencyDrill;
pub use config::SchedulerConfig;
pub use error::TutorError;
pub use memory::{MemoryStore, StudyStore};
pub use questions::{Question, QuestionFilter};
pub use scheduler::{AnswerOutcome, Scheduler};
pub use sessions::AttemptLog;
pub use sessions::streak::{DrillSignal, StreakMonitor};
pub use skills::{WeaknessModel, WeaknessRecord};

#[cfg(test)]
#[path = "../tests/unit/mod.rs"]
mod unit_tests;
