//! Goal outputs: the values derived from inputs and the date.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Placeholder shown wherever a value cannot be derived.
pub const UNDEFINED: &str = "—";

/// The three derived values shown to the user.
///
/// Recomputed on every change, never mutated in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalOutputs {
    /// Whole 7-day periods left before December 31.
    pub weeks_remaining: i64,
    pub minutes_per_week: Derived,
    pub minutes_per_workout: Derived,
}

/// A derived minute count, or the sentinel for a division by zero.
///
/// Serializes as a number, or `null` when undefined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Derived {
    Minutes(i64),
    Undefined,
}

impl Derived {
    pub fn minutes(self) -> Option<i64> {
        match self {
            Self::Minutes(m) => Some(m),
            Self::Undefined => None,
        }
    }

    pub fn is_undefined(self) -> bool {
        matches!(self, Self::Undefined)
    }
}

impl fmt::Display for Derived {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Minutes(m) => write!(f, "{m}"),
            Self::Undefined => f.write_str(UNDEFINED),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn undefined_displays_placeholder() {
        assert_eq!(Derived::Undefined.to_string(), "—");
        assert_eq!(Derived::Minutes(-6).to_string(), "-6");
    }

    #[test]
    fn undefined_serializes_as_null() {
        let outputs = GoalOutputs {
            weeks_remaining: 3,
            minutes_per_week: Derived::Undefined,
            minutes_per_workout: Derived::Minutes(12),
        };
        let json = serde_json::to_value(outputs).unwrap();
        assert!(json["minutesPerWeek"].is_null());
        assert_eq!(json["minutesPerWorkout"], 12);
        assert_eq!(json["weeksRemaining"], 3);
    }
}
