//! Pace: how many minutes each workout needs to reach a yearly goal.
//!
//! [`calculator::compute_goal`] is the core. [`session::GoalSession`] wraps
//! it in a live, observable session; [`platform`] optionally pulls workout
//! data from a fitness platform; [`cli`] hosts all of it on the command line.

pub mod calculator;
pub mod cli;
pub mod config;
pub mod model;
pub mod platform;
pub mod session;
