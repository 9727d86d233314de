//! Error handling for the physiological processing pipeline

use std::fmt;

/// Result type alias for pipeline operations
pub type PhysioResult<T> = Result<T, PhysioError>;

/// Error type covering the cleaning and feature-extraction pipeline
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum PhysioError {
    /// Input data cannot be processed (empty or too short)
    InvalidInput {
        /// Description of the input problem
        reason: String,
    },

    /// Signal is numerically degenerate (e.g. zero variance)
    DegenerateSignal {
        /// Description of the degeneracy
        reason: String,
    },

    /// Filter design parameters are invalid for the sampling rate
    FilterDesign {
        /// Description of the design problem
        message: String,
    },

    /// Channel name not present in the metadata registry
    UnknownChannel {
        /// The unrecognized channel name
        name: String,
    },
}

impl fmt::Display for PhysioError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PhysioError::InvalidInput { reason } => {
                write!(f, "Invalid input: {}", reason)
            }
            PhysioError::DegenerateSignal { reason } => {
                write!(f, "Degenerate signal: {}", reason)
            }
            PhysioError::FilterDesign { message } => {
                write!(f, "Filter design error: {}", message)
            }
            PhysioError::UnknownChannel { name } => {
                write!(f, "Unknown channel: {}", name)
            }
        }
    }
}

impl std::error::Error for PhysioError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let error = PhysioError::InvalidInput {
            reason: "empty BVP sequence".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Invalid input"));
        assert!(display.contains("empty BVP sequence"));
    }

    #[test]
    fn test_error_equality() {
        let error1 = PhysioError::UnknownChannel {
            name: "SpO2".to_string(),
        };
        let error2 = PhysioError::UnknownChannel {
            name: "SpO2".to_string(),
        };
        assert_eq!(error1, error2);
    }
}
