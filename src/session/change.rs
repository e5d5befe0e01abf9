//! Input edits, parsed from `field=value` text.

use std::str::FromStr;

use crate::model::{Field, ParseFieldError};

/// One field set to one value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InputChange {
    pub field: Field,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParseChangeError {
    #[error("expected field=value, got '{0}'")]
    MissingEquals(String),

    #[error(transparent)]
    Field(#[from] ParseFieldError),

    #[error("'{0}' is not a number")]
    Value(String),
}

impl FromStr for InputChange {
    type Err = ParseChangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (field, value) = s
            .split_once('=')
            .ok_or_else(|| ParseChangeError::MissingEquals(s.trim().to_string()))?;

        let field = field.parse::<Field>()?;
        let value = value.trim();
        let value = value
            .parse::<f64>()
            .map_err(|_| ParseChangeError::Value(value.to_string()))?;

        Ok(Self { field, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_field_and_value() {
        let change: InputChange = "goal = 7500".parse().unwrap();
        assert_eq!(
            change,
            InputChange {
                field: Field::MinutesGoal,
                value: 7500.0
            }
        );
    }

    #[test]
    fn parses_negative_value() {
        // Negative values parse; validation rejects them later.
        let change: InputChange = "worked=-10".parse().unwrap();
        assert_eq!(change.value, -10.0);
    }

    #[test]
    fn rejects_missing_equals() {
        assert_eq!(
            "goal 7500".parse::<InputChange>().unwrap_err(),
            ParseChangeError::MissingEquals("goal 7500".to_string())
        );
    }

    #[test]
    fn rejects_non_numeric_value() {
        assert_eq!(
            "skipped=two".parse::<InputChange>().unwrap_err(),
            ParseChangeError::Value("two".to_string())
        );
    }
}
