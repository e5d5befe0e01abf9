//! Output formatting for CLI display.

use crate::calculator::GoalError;
use crate::model::{Field, GoalInputs, GoalOutputs, UNDEFINED};

pub(super) fn input_label(field: Field) -> &'static str {
    match field {
        Field::MinutesWorked => "Minutes worked out this year",
        Field::MinutesGoal => "Minutes goal for the year",
        Field::WorkoutsPerWeek => "Goal workouts per week",
        Field::WeeksSkipped => "Number of weeks you may miss",
    }
}

/// One labelled line per input.
pub(super) fn format_inputs(inputs: &GoalInputs) -> String {
    Field::ALL
        .iter()
        .map(|&f| format!("{}: {}", input_label(f), format_number(inputs.get(f))))
        .collect::<Vec<_>>()
        .join("\n")
}

/// The three result lines. Anything that cannot be derived shows as `—`.
pub(super) fn format_report(
    inputs: &GoalInputs,
    outputs: &Result<GoalOutputs, GoalError>,
) -> String {
    let (per_workout, weeks) = match outputs {
        Ok(o) => (
            o.minutes_per_workout.to_string(),
            o.weeks_remaining.to_string(),
        ),
        Err(_) => (UNDEFINED.to_string(), UNDEFINED.to_string()),
    };

    let workouts = if inputs.workouts_per_week >= 0.0 {
        format_number(inputs.workouts_per_week)
    } else {
        UNDEFINED.to_string()
    };

    format!(
        "Minutes per workout: {per_workout}\n\
         Workouts per week: {workouts}\n\
         Weeks remaining: {weeks}"
    )
}

/// Whole numbers print without a decimal point; non-finite values as `—`.
pub(super) fn format_number(value: f64) -> String {
    if value.is_finite() {
        format!("{value}")
    } else {
        UNDEFINED.to_string()
    }
}
