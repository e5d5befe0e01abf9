//! Goal arithmetic: the pace needed to reach a yearly minute goal.
//!
//! Everything here is a pure function of the inputs and an injected `now`.
//! Division by zero never reaches the caller as `NaN` or infinity; it
//! becomes [`Derived::Undefined`].

use jiff::{Zoned, civil};
use tracing::debug;

use crate::model::{Derived, GoalInputs, GoalOutputs, InputError};

/// One week, in milliseconds.
const WEEK_MS: i64 = 7 * 24 * 60 * 60 * 1000;

/// Errors that stop a computation outright.
#[derive(Debug, thiserror::Error)]
pub enum GoalError {
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InputError),

    #[error("could not resolve the end of the year: {0}")]
    Clock(#[from] jiff::Error),
}

/// Compute weeks remaining, minutes per week and minutes per workout.
///
/// Negative paces (goal already exceeded) are reported as-is. One consequence:
/// once the goal is exceeded, more workouts per week move the per-workout
/// pace toward zero, so it rises instead of falling.
pub fn compute_goal(inputs: &GoalInputs, now: &Zoned) -> Result<GoalOutputs, GoalError> {
    inputs.validate()?;

    let weeks_remaining = weeks_remaining(now)?;
    let minutes_left = inputs.minutes_goal - inputs.minutes_worked;

    #[allow(clippy::cast_precision_loss)] // At most 52.
    let training_weeks = weeks_remaining as f64 - inputs.weeks_skipped;

    let minutes_per_week = if training_weeks > 0.0 {
        Derived::Minutes(ceil_minutes(minutes_left / training_weeks))
    } else {
        Derived::Undefined
    };

    let minutes_per_workout = match minutes_per_week {
        Derived::Minutes(per_week) if inputs.workouts_per_week > 0.0 => {
            #[allow(clippy::cast_precision_loss)]
            let per_week = per_week as f64;
            Derived::Minutes(ceil_minutes(per_week / inputs.workouts_per_week))
        }
        _ => Derived::Undefined,
    };

    debug!(
        weeks_remaining,
        training_weeks,
        %minutes_per_week,
        %minutes_per_workout,
        "computed goal pace"
    );

    Ok(GoalOutputs {
        weeks_remaining,
        minutes_per_week,
        minutes_per_workout,
    })
}

/// Whole 7-day periods between `now` and the start of December 31.
///
/// Year end is midnight opening December 31 in `now`'s time zone, so the
/// final day of the year counts as zero weeks. This is a count of 7-day
/// chunks, not calendar weeks: January 1 always yields 52.
pub fn weeks_remaining(now: &Zoned) -> Result<i64, jiff::Error> {
    let year_end = civil::date(now.year(), 12, 31).to_zoned(now.time_zone().clone())?;
    let remaining_ms = year_end.timestamp().as_millisecond() - now.timestamp().as_millisecond();
    Ok(remaining_ms.div_euclid(WEEK_MS).max(0))
}

#[allow(clippy::cast_possible_truncation)] // Saturates on absurd goals.
fn ceil_minutes(minutes: f64) -> i64 {
    minutes.ceil() as i64
}
