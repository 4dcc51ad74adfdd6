#![allow(dead_code)]

use std::sync::Arc;
use chrono::{DateTime, Utc};
use focus_tutor_lib::{MemoryStore, Question, Scheduler, SchedulerConfig, WeaknessRecord};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

pub fn question(id: i64, subcategory: &str, tags: &[&str]) -> Question {
    Question {
        id,
        passage_id: None,
        category: "Verbal".to_string(),
        subcategory: subcategory.to_string(),
        content: format!("Argument {}", id),
        stem: None,
        options: (0..5).map(|i| format!("Option {}", i)).collect(),
        correct_index: 1,
        skill_tags: tags.iter().map(|t| t.to_string()).collect(),
        difficulty: 3,
        explanation: String::new(),
    }
}

pub fn reading(id: i64, passage: &str, stem: &str, tags: &[&str]) -> Question {
    let mut q = question(id, "RC", tags);
    q.content = format!("{}\n\n{}", passage, stem);
    q.stem = Some(stem.to_string());
    q
}

pub fn record(tag: &str, errors: u32, total: u32, weight: f64, last_seen: DateTime<Utc>) -> WeaknessRecord {
    WeaknessRecord {
        tag: tag.to_string(),
        error_count: errors,
        total_attempts: total,
        weight,
        last_seen,
    }
}

pub fn seeded_scheduler(store: Arc<MemoryStore>, seed: u64) -> Scheduler {
    Scheduler::with_config(store, SchedulerConfig::default())
        .expect("default config is valid")
        .with_rng(ChaCha8Rng::seed_from_u64(seed))
}
