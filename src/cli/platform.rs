//! Fitness platform commands: overview, challenges.
//!
//! These are the only async paths in pace. Each builds a current-thread
//! runtime for the one request it makes.

use std::future::Future;

use serde::Serialize;

use crate::config::Config;
use crate::platform::{PlatformClient, PlatformConfig, PlatformError, WorkoutSource};

pub(super) fn cmd_overview(config: &Config) -> Result<(), String> {
    let platform = require_platform(config)?;
    let overview = block_on(async {
        PlatformClient::new(platform)?
            .fetch_workout_overview(&platform.session_id, &platform.user_id)
            .await
    })?;
    print_json(&overview)
}

pub(super) fn cmd_challenges(config: &Config) -> Result<(), String> {
    let platform = require_platform(config)?;
    let challenges = block_on(async {
        PlatformClient::new(platform)?
            .fetch_current_challenges(&platform.session_id, &platform.user_id)
            .await
    })?;
    print_json(&challenges)
}

fn require_platform(config: &Config) -> Result<&PlatformConfig, String> {
    config.platform.as_ref().ok_or_else(|| {
        let path = Config::path().map_or_else(
            || "~/.pace/config.toml".to_string(),
            |p| p.display().to_string(),
        );
        format!(
            "no [platform] section in {path}\n\
             Add one with at minimum:\n\n\
             [platform]\n\
             session-id = \"...\"\n\
             user-id = \"...\""
        )
    })
}

fn block_on<T>(fut: impl Future<Output = Result<T, PlatformError>>) -> Result<T, String> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| format!("failed to start async runtime: {e}"))?
        .block_on(fut)
        .map_err(|e| e.to_string())
}

fn print_json(value: &impl Serialize) -> Result<(), String> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| format!("failed to serialize response: {e}"))?;
    println!("{json}");
    Ok(())
}
