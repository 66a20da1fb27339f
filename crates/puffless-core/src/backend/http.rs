//! HTTP implementation of the profile service.
//!
//! Requests run on the ambient tokio runtime -- callers must be inside
//! one (the CLI enters a runtime before touching the backend). No
//! retries: a transport or status failure surfaces immediately and the
//! user re-triggers the step.

use reqwest::Client;
use serde_json::json;

use crate::backend::traits::ProfileService;
use crate::backend::{DailyQuote, ProfileCreated};
use crate::error::BackendError;
use crate::intake::IntakeState;

/// Profile service talking to the hosted backend over HTTPS.
pub struct HttpBackend {
    base_url: String,
    client: Client,
}

impl HttpBackend {
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            base_url,
            client: Client::new(),
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// POST `body` to `path` and decode the JSON response.
    fn post_json<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        body: &serde_json::Value,
    ) -> Result<T, BackendError> {
        let endpoint = self.endpoint(path);
        let resp = tokio::runtime::Handle::current()
            .block_on(self.client.post(&endpoint).json(body).send())
            .map_err(|source| BackendError::Transport { endpoint: endpoint.clone(), source })?;

        Self::decode(resp)
    }

    /// GET `path` and decode the JSON response.
    fn get_json<T: serde::de::DeserializeOwned>(&self, path: &str) -> Result<T, BackendError> {
        let endpoint = self.endpoint(path);
        let resp = tokio::runtime::Handle::current()
            .block_on(self.client.get(&endpoint).send())
            .map_err(|source| BackendError::Transport { endpoint: endpoint.clone(), source })?;

        Self::decode(resp)
    }

    fn decode<T: serde::de::DeserializeOwned>(
        resp: reqwest::Response,
    ) -> Result<T, BackendError> {
        let status = resp.status();
        if !status.is_success() {
            let body = tokio::runtime::Handle::current()
                .block_on(resp.text())
                .unwrap_or_default();
            return Err(BackendError::Status { status: status.as_u16(), body });
        }

        tokio::runtime::Handle::current()
            .block_on(resp.json::<T>())
            .map_err(|e| BackendError::MalformedResponse(e.to_string()))
    }
}

impl ProfileService for HttpBackend {
    fn name(&self) -> &str {
        "http"
    }

    fn create_profile(&self, intake: &IntakeState) -> Result<ProfileCreated, BackendError> {
        let body = json!({
            "goal": intake.goal,
            "goal_speed_days": intake.goal_speed_days,
            "puffs_per_day": intake.puffs_per_day,
            "money_per_month": intake.money_per_month,
            "currency": intake.currency,
            "why_stopped": intake.why_stopped,
            "worries": intake.worries,
        });

        self.post_json("/v1/profiles", &body)
    }

    fn daily_quote(&self) -> Result<DailyQuote, BackendError> {
        self.get_json("/v1/quotes/today")
    }
}
