//! HTTP client for the fitness platform.
//!
//! Authentication is out of scope: the caller supplies an existing session
//! id, sent as the platform's session cookie.

use std::time::Duration;

use reqwest::header;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use super::{CurrentChallenges, PlatformError, WorkoutOverview, WorkoutSource};

const DEFAULT_BASE_URL: &str = "https://api.onepeloton.com";

/// Connection settings, passed in at construction.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct PlatformConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Existing session id from a prior login.
    pub session_id: String,

    pub user_id: String,

    /// Value of the `peloton-platform` header.
    #[serde(default = "default_platform")]
    pub platform: String,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_platform() -> String {
    "web".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

/// Fetches workout data over HTTPS.
#[derive(Debug, Clone)]
pub struct PlatformClient {
    http: reqwest::Client,
    base_url: String,
    platform: String,
}

impl PlatformClient {
    pub fn new(config: &PlatformConfig) -> Result<Self, PlatformError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            platform: config.platform.clone(),
        })
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        session_id: &str,
    ) -> Result<T, PlatformError> {
        let url = format!("{}{path}", self.base_url);
        debug!(%url, "fetching from platform");

        let response = self
            .http
            .get(&url)
            .header(header::COOKIE, format!("peloton_session_id={session_id};"))
            .header("peloton-platform", &self.platform)
            .header(header::ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            warn!(%url, %status, "platform request failed");
            return Err(PlatformError::Status {
                url,
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|source| PlatformError::Decode { url, source })
    }
}

impl WorkoutSource for PlatformClient {
    async fn fetch_workout_overview(
        &self,
        session_id: &str,
        user_id: &str,
    ) -> Result<WorkoutOverview, PlatformError> {
        self.get_json(&format!("/api/user/{user_id}/overview"), session_id)
            .await
    }

    async fn fetch_current_challenges(
        &self,
        session_id: &str,
        user_id: &str,
    ) -> Result<CurrentChallenges, PlatformError> {
        self.get_json(&format!("/api/user/{user_id}/challenges/current"), session_id)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use serde_json::json;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> PlatformClient {
        PlatformClient::new(&PlatformConfig {
            base_url: format!("{}/", server.uri()),
            session_id: "unused".to_string(),
            user_id: "unused".to_string(),
            platform: default_platform(),
            timeout_secs: 5,
        })
        .unwrap()
    }

    #[tokio::test]
    async fn overview_sends_session_cookie() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/user/u1/overview"))
            .and(header("cookie", "peloton_session_id=s1;"))
            .and(header("peloton-platform", "web"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "workout_counts": { "total_workouts": 7, "workouts": [] }
            })))
            .expect(1)
            .mount(&server)
            .await;

        let overview = client_for(&server)
            .fetch_workout_overview("s1", "u1")
            .await
            .unwrap();
        assert_eq!(overview.workout_counts.unwrap().total_workouts, Some(7));
    }

    #[tokio::test]
    async fn challenges_decode_active_list() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/user/u1/challenges/current"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "active": [{ "challenge_summary": { "id": "c1", "title": "Annual 2025" } }]
            })))
            .mount(&server)
            .await;

        let challenges = client_for(&server)
            .fetch_current_challenges("s1", "u1")
            .await
            .unwrap();
        let summary = challenges.active[0].challenge_summary.as_ref().unwrap();
        assert_eq!(summary.title.as_deref(), Some("Annual 2025"));
    }

    #[tokio::test]
    async fn non_success_status_is_an_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(401))
            .mount(&server)
            .await;

        let err = client_for(&server)
            .fetch_workout_overview("expired", "u1")
            .await
            .unwrap_err();
        assert!(matches!(err, PlatformError::Status { status: 401, .. }));
    }

    #[tokio::test]
    async fn malformed_body_is_a_decode_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>"))
            .mount(&server)
            .await;

        let err = client_for(&server)
            .fetch_workout_overview("s1", "u1")
            .await
            .unwrap_err();
        assert!(matches!(err, PlatformError::Decode { .. }));
    }
}
