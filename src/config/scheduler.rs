use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use lazy_static::lazy_static;
use crate::error::TutorError;

/// Tunables for plan generation, ordering and streak detection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SchedulerConfig {
    /// Plan size used by `generate_default_plan`
    pub default_question_count: usize,
    pub minutes_per_question: u32,
    /// Number of weakest tags reported on a plan
    pub focus_tag_count: usize,
    /// Longest tolerated run of non-reading items sharing a tag
    pub max_consecutive_same_tag: usize,
    /// Consecutive misses on one tag before a drill signal fires
    pub consecutive_error_threshold: u32,
    /// Share of a mixed plan left for reading passage groups
    pub reading_share: f64,
    /// Characters kept when deriving a passage key from text
    pub passage_key_len: usize,
    pub drill_size: usize,
    pub drill_candidate_limit: usize,
    pub drill_recent_days: i64,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        SchedulerConfig {
            default_question_count: 20,
            minutes_per_question: 2,
            focus_tag_count: 3,
            max_consecutive_same_tag: 3,
            consecutive_error_threshold: 3,
            reading_share: 0.3,
            passage_key_len: 100,
            drill_size: 5,
            drill_candidate_limit: 10,
            drill_recent_days: 7,
        }
    }
}

impl SchedulerConfig {
    pub fn validate(&self) -> Result<(), TutorError> {
        if !(0.0..1.0).contains(&self.reading_share) {
            return Err(TutorError::config(format!(
                "reading_share must be in [0, 1), got {}",
                self.reading_share
            )));
        }
        if self.consecutive_error_threshold == 0 {
            return Err(TutorError::config("consecutive_error_threshold must be at least 1"));
        }
        if self.max_consecutive_same_tag == 0 {
            return Err(TutorError::config("max_consecutive_same_tag must be at least 1"));
        }
        if self.passage_key_len == 0 {
            return Err(TutorError::config("passage_key_len must be at least 1"));
        }
        if self.drill_recent_days < 0 {
            return Err(TutorError::config("drill_recent_days must not be negative"));
        }
        Ok(())
    }
}

const CONFIG_ENV: &str = "FOCUS_TUTOR_CONFIG";

fn get_config_path() -> PathBuf {
    if let Some(path) = std::env::var_os(CONFIG_ENV) {
        return PathBuf::from(path);
    }

    // Use platform-specific app data directory
    #[cfg(target_os = "macos")]
    {
        if let Some(home) = std::env::var_os("HOME") {
            let mut dir = PathBuf::from(home);
            dir.push("Library/Application Support/focus-tutor");
            dir.push("scheduler.toml");
            return dir;
        }
    }

    #[cfg(target_os = "windows")]
    {
        if let Some(appdata) = std::env::var_os("APPDATA") {
            let mut dir = PathBuf::from(appdata);
            dir.push("focus-tutor");
            dir.push("scheduler.toml");
            return dir;
        }
    }

    #[cfg(target_os = "linux")]
    {
        if let Some(home) = std::env::var_os("HOME") {
            let mut dir = PathBuf::from(home);
            dir.push(".local/share/focus-tutor");
            dir.push("scheduler.toml");
            return dir;
        }
    }

    // Fallback
    PathBuf::from("scheduler.toml")
}

/// Parse and validate a scheduler config from TOML text.
pub fn parse_config(content: &str) -> Result<SchedulerConfig, TutorError> {
    let config = toml::from_str::<SchedulerConfig>(content)?;
    config.validate()?;
    Ok(config)
}

/// Load a scheduler config from an explicit path.
pub fn load_config_from(path: &Path) -> Result<SchedulerConfig, TutorError> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| TutorError::from(e).with_context(format!("path: {:?}", path)))?;
    parse_config(&content).map_err(|e| e.with_context(format!("path: {:?}", path)))
}

fn load_scheduler_config_internal() -> SchedulerConfig {
    let config_path = get_config_path();

    match load_config_from(&config_path) {
        Ok(config) => {
            tracing::info!(path = ?config_path, "Loaded scheduler config");
            config
        }
        Err(e) if e.stage == "io" => {
            tracing::debug!(path = ?config_path, "No scheduler config found, using defaults");
            SchedulerConfig::default()
        }
        Err(e) => {
            tracing::warn!(path = ?config_path, error = %e, "Invalid scheduler config, using defaults");
            SchedulerConfig::default()
        }
    }
}

lazy_static! {
    static ref SCHEDULER_CONFIG: SchedulerConfig = load_scheduler_config_internal();
}

/// Get the cached scheduler configuration (loaded once per process)
pub fn get_scheduler_config() -> &'static SchedulerConfig {
    &SCHEDULER_CONFIG
}
