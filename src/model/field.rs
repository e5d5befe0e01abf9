//! Names for the individual goal inputs.

use std::fmt;
use std::str::FromStr;

/// One of the four user-editable inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    /// Minutes completed so far this year.
    MinutesWorked,
    /// Total minutes targeted for the year.
    MinutesGoal,
    /// Target workout frequency.
    WorkoutsPerWeek,
    /// Weeks the user expects to miss.
    WeeksSkipped,
}

impl Field {
    /// Every field, in display order.
    pub const ALL: [Field; 4] = [
        Field::MinutesWorked,
        Field::MinutesGoal,
        Field::WorkoutsPerWeek,
        Field::WeeksSkipped,
    ];

    /// The camelCase key used in JSON output.
    pub fn key(self) -> &'static str {
        match self {
            Self::MinutesWorked => "minutesWorked",
            Self::MinutesGoal => "minutesGoal",
            Self::WorkoutsPerWeek => "workoutsPerWeek",
            Self::WeeksSkipped => "weeksSkipped",
        }
    }

    /// The short name accepted on the command line.
    pub fn short_name(self) -> &'static str {
        match self {
            Self::MinutesWorked => "worked",
            Self::MinutesGoal => "goal",
            Self::WorkoutsPerWeek => "workouts",
            Self::WeeksSkipped => "skipped",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown field '{0}' (expected one of: worked, goal, workouts, skipped)")]
pub struct ParseFieldError(pub String);

impl FromStr for Field {
    type Err = ParseFieldError;

    /// Accepts the short name or the camelCase key, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|f| {
                f.short_name().eq_ignore_ascii_case(wanted) || f.key().eq_ignore_ascii_case(wanted)
            })
            .ok_or_else(|| ParseFieldError(wanted.to_string()))
    }
}
