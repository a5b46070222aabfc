//! Validation errors for model construction.

use std::error::Error;
use std::fmt;

/// A semantically invalid value rejected at model construction time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelError {
    /// Van capacity was negative.
    NegativeCapacity(i64),
    /// Van fuel rate was negative.
    NegativeFuelRate(i64),
    /// Package weight was negative.
    NegativeWeight(i64),
}

impl fmt::Display for ModelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelError::NegativeCapacity(v) => {
                write!(f, "van capacity must be non-negative, got {v}")
            }
            ModelError::NegativeFuelRate(v) => {
                write!(f, "van fuel rate must be non-negative, got {v}")
            }
            ModelError::NegativeWeight(v) => {
                write!(f, "package weight must be non-negative, got {v}")
            }
        }
    }
}

impl Error for ModelError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(
            ModelError::NegativeCapacity(-3).to_string(),
            "van capacity must be non-negative, got -3"
        );
        assert_eq!(
            ModelError::NegativeFuelRate(-1).to_string(),
            "van fuel rate must be non-negative, got -1"
        );
        assert_eq!(
            ModelError::NegativeWeight(-7).to_string(),
            "package weight must be non-negative, got -7"
        );
    }
}
