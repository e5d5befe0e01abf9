//! Goal inputs: what the user has done and what they are aiming for.

use serde::{Deserialize, Serialize};

use super::Field;

/// The four user-supplied numbers driving the calculation.
///
/// Lives only as long as the session that owns it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalInputs {
    pub minutes_worked: f64,
    pub minutes_goal: f64,
    pub workouts_per_week: f64,
    pub weeks_skipped: f64,
}

impl Default for GoalInputs {
    fn default() -> Self {
        Self {
            minutes_worked: 0.0,
            minutes_goal: 6000.0,
            workouts_per_week: 3.0,
            weeks_skipped: 0.0,
        }
    }
}

/// An input value the calculator refuses to work with.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum InputError {
    #[error("{field} must be a finite number, got {value}")]
    NotFinite { field: Field, value: f64 },

    #[error("{field} cannot be negative, got {value}")]
    Negative { field: Field, value: f64 },
}

impl GoalInputs {
    /// Read a single field.
    pub fn get(&self, field: Field) -> f64 {
        match field {
            Field::MinutesWorked => self.minutes_worked,
            Field::MinutesGoal => self.minutes_goal,
            Field::WorkoutsPerWeek => self.workouts_per_week,
            Field::WeeksSkipped => self.weeks_skipped,
        }
    }

    /// Overwrite a single field.
    pub fn set(&mut self, field: Field, value: f64) {
        let slot = match field {
            Field::MinutesWorked => &mut self.minutes_worked,
            Field::MinutesGoal => &mut self.minutes_goal,
            Field::WorkoutsPerWeek => &mut self.workouts_per_week,
            Field::WeeksSkipped => &mut self.weeks_skipped,
        };
        *slot = value;
    }

    /// Check every field is finite and non-negative.
    ///
    /// Zero workouts per week passes: the calculator reports it as an
    /// undefined pace rather than an invalid input.
    pub fn validate(&self) -> Result<(), InputError> {
        for field in Field::ALL {
            let value = self.get(field);
            if !value.is_finite() {
                return Err(InputError::NotFinite { field, value });
            }
            if value < 0.0 {
                return Err(InputError::Negative { field, value });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_a_fresh_session() {
        let inputs = GoalInputs::default();
        assert_eq!(inputs.minutes_worked, 0.0);
        assert_eq!(inputs.minutes_goal, 6000.0);
        assert_eq!(inputs.workouts_per_week, 3.0);
        assert_eq!(inputs.weeks_skipped, 0.0);
        assert!(inputs.validate().is_ok());
    }

    #[test]
    fn set_then_get_each_field() {
        let mut inputs = GoalInputs::default();
        for (i, field) in Field::ALL.into_iter().enumerate() {
            let value = f64::from(u8::try_from(i).unwrap()) + 10.0;
            inputs.set(field, value);
            assert_eq!(inputs.get(field), value);
        }
    }

    #[test]
    fn rejects_negative_weeks_skipped() {
        let inputs = GoalInputs {
            weeks_skipped: -1.0,
            ..GoalInputs::default()
        };
        assert_eq!(
            inputs.validate().unwrap_err(),
            InputError::Negative {
                field: Field::WeeksSkipped,
                value: -1.0
            }
        );
    }

    #[test]
    fn rejects_nan_goal() {
        let inputs = GoalInputs {
            minutes_goal: f64::NAN,
            ..GoalInputs::default()
        };
        assert!(matches!(
            inputs.validate(),
            Err(InputError::NotFinite {
                field: Field::MinutesGoal,
                ..
            })
        ));
    }

    #[test]
    fn zero_workouts_is_not_an_input_error() {
        let inputs = GoalInputs {
            workouts_per_week: 0.0,
            ..GoalInputs::default()
        };
        assert!(inputs.validate().is_ok());
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let json = serde_json::to_value(GoalInputs::default()).unwrap();
        assert_eq!(json["minutesGoal"], 6000.0);
        assert_eq!(json["workoutsPerWeek"], 3.0);
    }
}
