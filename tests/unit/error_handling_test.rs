#[cfg(test)]
mod tests {
    use crate::error::TutorError;

    #[test]
    fn test_error_creation() {
        let error = TutorError::new("Test error", "test_stage");
        assert_eq!(error.message, "Test error");
        assert_eq!(error.stage, "test_stage");
        assert!(!error.is_storage_failure());
    }

    #[test]
    fn test_error_with_context() {
        let error = TutorError::new("Test error", "test_stage")
            .with_context("Additional context");
        assert_eq!(error.context.as_deref(), Some("Additional context"));
    }

    #[test]
    fn test_storage_error_is_distinct() {
        let error = TutorError::storage("disk unplugged");
        assert!(error.is_storage_failure());
        assert_eq!(error.stage, "storage");
    }

    #[test]
    fn test_error_display() {
        let error = TutorError::storage("read failed")
            .with_context("list_attempts")
            .with_source("sqlite");
        let display = format!("{}", error);
        assert_eq!(display, "[storage] read failed (context: list_attempts) (source: sqlite)");
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let error: TutorError = io.into();
        assert_eq!(error.stage, "io");
        assert_eq!(error.source.as_deref(), Some("std::io"));
    }

    #[test]
    fn test_toml_error_conversion() {
        let err = toml::from_str::<crate::config::SchedulerConfig>("drill_size = \"five\"")
            .unwrap_err();
        let error: TutorError = err.into();
        assert_eq!(error.stage, "config");
    }
}
