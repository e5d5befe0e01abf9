//! Response payloads from the fitness platform.
//!
//! Every typed field is optional and unknown keys land in `extra`, so a
//! schema change degrades to missing fields instead of a decode error.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// `GET /api/user/{id}/overview`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WorkoutOverview {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workout_counts: Option<WorkoutCounts>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Workout totals, overall and per discipline.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WorkoutCounts {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_workouts: Option<u64>,

    #[serde(default)]
    pub workouts: Vec<DisciplineCount>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DisciplineCount {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<u64>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// `GET /api/user/{id}/challenges/current`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CurrentChallenges {
    #[serde(default)]
    pub active: Vec<Challenge>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Challenge {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub challenge_summary: Option<ChallengeSummary>,

    /// Progress shape varies by challenge type.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub progress: Option<Value>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChallengeSummary {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Unix seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_time: Option<i64>,

    /// Unix seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_time: Option<i64>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
