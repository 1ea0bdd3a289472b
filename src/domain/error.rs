//! Domain errors

use std::fmt;

use thiserror::Error;

/// One failed consistency check, tagged with the input field it concerns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    pub field: &'static str,
    pub message: String,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Pre-computation validation failure.
///
/// Carries every violation found in one pass so the caller can fix all
/// inputs at once. Recoverable: correct the inputs and retry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub violations: Vec<Violation>,
}

impl ValidationError {
    pub fn new(violations: Vec<Violation>) -> Self {
        Self { violations }
    }

    pub fn single(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            violations: vec![Violation {
                field,
                message: message.into(),
            }],
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for v in &self.violations {
            if !first {
                write!(f, "; ")?;
            }
            write!(f, "{}", v)?;
            first = false;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}

/// Failure inside the allocation arithmetic. Fatal to the run: no partial
/// result is persisted. Each variant names the unit or input that caused it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ComputationError {
    #[error("unit {unit} appears in the {snapshot} snapshot only")]
    MissingUnit { snapshot: &'static str, unit: i32 },

    #[error("unit {unit}: usage delta of {liters} liters is not positive, tariff is undefined")]
    NonPositiveUsage { unit: i32, liters: i64 },

    #[error("snapshot window of {days} days is not positive")]
    NonPositiveWindow { days: i64 },

    #[error("sum of raw tariff prices is zero, reconciliation ratio is undefined")]
    ZeroRawSum,

    #[error("building has no units to share costs across")]
    ZeroUnitCount,
}

/// Domain-level error types
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Not found: {entity} with {field}={value}")]
    NotFound {
        entity: &'static str,
        field: &'static str,
        value: String,
    },

    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Computation failed: {0}")]
    Computation(#[from] ComputationError),

    #[error("Already exists: {0}")]
    Conflict(String),

    #[error("Storage error: {0}")]
    Storage(String),
}

/// Result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_joins_violations() {
        let err = ValidationError::new(vec![
            Violation {
                field: "previous_snapshot",
                message: "expected 4 unit readings, found 3".into(),
            },
            Violation {
                field: "current_snapshot",
                message: "expected 4 unit readings, found 5".into(),
            },
        ]);
        assert_eq!(
            err.to_string(),
            "previous_snapshot: expected 4 unit readings, found 3; \
             current_snapshot: expected 4 unit readings, found 5"
        );
    }

    #[test]
    fn computation_error_names_the_unit() {
        let err = ComputationError::NonPositiveUsage {
            unit: 7,
            liters: -120,
        };
        assert!(err.to_string().contains("unit 7"));
        assert!(err.to_string().contains("-120"));
    }
}
