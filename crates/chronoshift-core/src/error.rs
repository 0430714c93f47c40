//! Error types for ChronoShift

use thiserror::Error;

/// Failure to read a `HH:MM` default time.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TimeParseError {
    /// Input was not shaped like `HH:MM`
    #[error("Malformed time '{0}', expected HH:MM")]
    Malformed(String),

    /// Shape was right but the hour or minute is out of range
    #[error("Time out of range: {0}")]
    OutOfRange(String),
}

/// Main error type for ChronoShift operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChronoError {
    /// A default or externally supplied time could not be parsed
    #[error("Time parse error: {0}")]
    TimeParse(#[from] TimeParseError),
}

/// Result type alias using ChronoError
pub type ChronoResult<T> = Result<T, ChronoError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = TimeParseError::Malformed("9h30".to_string());
        assert_eq!(format!("{}", err), "Malformed time '9h30', expected HH:MM");
    }

    #[test]
    fn test_error_from_parse() {
        let parse_err = TimeParseError::OutOfRange("25:00".to_string());
        let err: ChronoError = parse_err.into();
        assert!(matches!(err, ChronoError::TimeParse(_)));
        assert_eq!(
            format!("{}", err),
            "Time parse error: Time out of range: 25:00"
        );
    }
}
