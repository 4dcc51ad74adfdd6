use serde::{Serialize, Deserialize};
use std::fmt;

/// Unified error type for the scheduler and its storage collaborators.
/// Every fallible operation returns `Result<T, TutorError>`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TutorError {
    pub message: String,
    pub stage: String,
    pub context: Option<String>,
    pub source: Option<String>,
}

impl TutorError {
    /// Create a new error with stage and message
    pub fn new<S: Into<String>>(message: S, stage: &'static str) -> Self {
        TutorError {
            message: message.into(),
            stage: stage.to_string(),
            context: None,
            source: None,
        }
    }

    /// Failure reported by the storage collaborator.
    pub fn storage<S: Into<String>>(message: S) -> Self {
        Self::new(message, STORAGE_STAGE)
    }

    /// Rejected configuration value.
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::new(message, "config")
    }

    /// Add additional context information
    pub fn with_context<S: Into<String>>(mut self, context: S) -> Self {
        self.context = Some(context.into());
        self
    }

    /// Add source error information
    pub fn with_source<S: Into<String>>(mut self, source: S) -> Self {
        self.source = Some(source.into());
        self
    }

    pub fn is_storage_failure(&self) -> bool {
        self.stage == STORAGE_STAGE
    }
}

const STORAGE_STAGE: &str = "storage";

impl fmt::Display for TutorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.stage, self.message)?;
        if let Some(ref context) = self.context {
            write!(f, " (context: {})", context)?;
        }
        if let Some(ref source) = self.source {
            write!(f, " (source: {})", source)?;
        }
        Ok(())
    }
}

impl std::error::Error for TutorError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        None
    }
}

impl From<anyhow::Error> for TutorError {
    fn from(err: anyhow::Error) -> Self {
        TutorError::new(
            err.to_string(),
            "unknown"
        ).with_source("anyhow")
    }
}

impl From<std::io::Error> for TutorError {
    fn from(err: std::io::Error) -> Self {
        TutorError::new(
            format!("I/O error: {}", err),
            "io"
        ).with_source("std::io")
    }
}

impl From<toml::de::Error> for TutorError {
    fn from(err: toml::de::Error) -> Self {
        TutorError::new(
            format!("TOML error: {}", err),
            "config"
        ).with_source("toml")
    }
}
