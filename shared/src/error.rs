//! Error types for the console core

/// Failure states the console core can observe.
///
/// Only `FetchFailed` is ever shown to the user. Field and formatter misses
/// are absorbed where they happen, and `SessionAbsent` turns into a redirect.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConsoleError {
    #[error("Records are still loading")]
    FetchPending,

    #[error("Error loading data: {0}")]
    FetchFailed(String),

    #[error("No value at field path '{0}'")]
    FieldResolutionMiss(String),

    #[error("Formatter for column '{column}' failed: {reason}")]
    FormatterFailure { column: String, reason: String },

    #[error("No session token present")]
    SessionAbsent,

    #[error("Session storage error: {0}")]
    Storage(String),

    #[error("Invalid console configuration: {0}")]
    Config(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ConsoleError::FetchFailed("connection refused".to_string());
        assert_eq!(format!("{}", err), "Error loading data: connection refused");

        let err = ConsoleError::FieldResolutionMiss("region.name".to_string());
        assert_eq!(format!("{}", err), "No value at field path 'region.name'");

        let err = ConsoleError::FormatterFailure {
            column: "created_at".to_string(),
            reason: "not a date".to_string(),
        };
        assert_eq!(
            format!("{}", err),
            "Formatter for column 'created_at' failed: not a date"
        );
    }
}
