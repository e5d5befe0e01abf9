//! Core data model for pace.
//!
//! Inputs are the four numbers a user supplies; outputs are derived from
//! them and the current date, never stored.

mod field;
mod inputs;
mod outputs;

pub use field::{Field, ParseFieldError};
pub use inputs::{GoalInputs, InputError};
pub use outputs::{Derived, GoalOutputs, UNDEFINED};
