//! Unified error hierarchy for planrs
//!
//! Typed errors for the planning pipeline. No core error is fatal to the
//! process; the CLI renders `user_message()` and exits nonzero.

use thiserror::Error;

/// Top-level error type for all planrs operations
#[derive(Debug, Error)]
pub enum PlanError {
    /// Pace estimation errors
    #[error("Estimation error: {0}")]
    Estimation(#[from] EstimationError),

    /// Budget/schedule calculation errors
    #[error("Calculation error: {0}")]
    Calculation(#[from] CalculationError),

    /// Boundary input validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Pace estimation specific errors
#[derive(Debug, Error)]
pub enum EstimationError {
    /// Race time parsed to a zero or negative duration
    #[error("Degenerate race time: {time_text:?} parses to no duration")]
    DegenerateTime { time_text: String },

    /// Race distance must be strictly positive
    #[error("Invalid race distance: {distance} km")]
    InvalidDistance { distance: String },
}

/// Calculation errors
#[derive(Debug, Error)]
pub enum CalculationError {
    /// Division by zero
    #[error("Division by zero in {calculation}")]
    DivisionByZero { calculation: String },

    /// Invalid parameter
    #[error("Invalid parameter for {calculation}: {parameter}={value}")]
    InvalidParameter {
        calculation: String,
        parameter: String,
        value: String,
    },
}

/// Result type alias for planrs operations
pub type Result<T> = std::result::Result<T, PlanError>;

impl PlanError {
    /// Get user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            PlanError::Estimation(EstimationError::DegenerateTime { time_text }) => {
                format!(
                    "Race time {:?} does not describe a finish time. Use MM:SS, e.g. 40:00.",
                    time_text
                )
            }
            PlanError::Estimation(EstimationError::InvalidDistance { distance }) => {
                format!("Race distance must be greater than zero, got {} km.", distance)
            }
            PlanError::Validation(reason) => format!("Invalid input: {}", reason),
            PlanError::Configuration(reason) => {
                format!("Configuration problem: {}", reason)
            }
            _ => self.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_message_for_degenerate_time() {
        let err = PlanError::Estimation(EstimationError::DegenerateTime {
            time_text: "ab:cd".to_string(),
        });
        assert!(err.user_message().contains("MM:SS"));
    }

    #[test]
    fn test_division_by_zero_display() {
        let err = PlanError::Calculation(CalculationError::DivisionByZero {
            calculation: "zone distance".to_string(),
        });
        assert!(err.to_string().contains("Division by zero"));
    }
}
