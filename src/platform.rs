//! Fitness platform data source.
//!
//! An optional collaborator that pulls workout data over HTTPS. It is not
//! wired into the calculator: nothing here feeds [`GoalInputs`] on its own.
//! The platform's response schema is undocumented, so payload types keep
//! the fields they know about and carry everything else along as raw JSON.
//!
//! [`GoalInputs`]: crate::model::GoalInputs

mod client;
mod payload;

use std::future::Future;

pub use client::{PlatformClient, PlatformConfig};
pub use payload::{
    Challenge, ChallengeSummary, CurrentChallenges, DisciplineCount, WorkoutCounts,
    WorkoutOverview,
};

/// Errors talking to the platform.
#[derive(Debug, thiserror::Error)]
pub enum PlatformError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{url} returned {status}")]
    Status { url: String, status: u16 },

    #[error("unexpected response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Somewhere workout data can be fetched from.
pub trait WorkoutSource {
    /// Fetch a user's workout overview.
    fn fetch_workout_overview(
        &self,
        session_id: &str,
        user_id: &str,
    ) -> impl Future<Output = Result<WorkoutOverview, PlatformError>> + Send;

    /// Fetch the challenges a user is currently enrolled in.
    fn fetch_current_challenges(
        &self,
        session_id: &str,
        user_id: &str,
    ) -> impl Future<Output = Result<CurrentChallenges, PlatformError>> + Send;
}
