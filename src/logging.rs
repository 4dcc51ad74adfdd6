use crate::error::TutorError;

/// Initialize structured logging with tracing.
/// Call once from the embedding application; a second call reports an error
/// instead of replacing the installed subscriber.
pub fn init_logging() -> Result<(), TutorError> {
    init_logging_with("info")
}

/// Same as [`init_logging`] with an explicit fallback filter used when
/// `RUST_LOG` is not set.
pub fn init_logging_with(default_filter: &str) -> Result<(), TutorError> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter));

    let subscriber = tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(true)
                .with_thread_ids(true)
                .with_file(true)
                .with_line_number(true)
                .json() // JSON output for structured logging
        );

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| TutorError::new(
            format!("Failed to set global tracing subscriber: {}", e),
            "logging"
        ))?;

    tracing::info!("Structured logging initialized");
    Ok(())
}
