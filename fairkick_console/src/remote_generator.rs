use std::time::Duration;

use anyhow::Context;
use async_trait::async_trait;
use fairkick::api::{ErrorResponse, TeamRequest, TeamResponse};
use fairkick::generator::{GenerateError, TeamGenerator};
use fairkick::{Lineup, Player, PlayerId};
use log::error;
use reqwest::StatusCode;


// Delegates team generation to another fairkick server over HTTP.
pub struct RemoteGenerator {
    client: reqwest::Client,
    endpoint: String,
}

impl RemoteGenerator {
    pub fn new(base_url: &str, timeout: Duration) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;
        Ok(RemoteGenerator {
            client,
            endpoint: format!("{}/generate", base_url.trim_end_matches('/')),
        })
    }

    pub fn endpoint(&self) -> &str { &self.endpoint }
}

#[async_trait]
impl TeamGenerator for RemoteGenerator {
    async fn generate(
        &self, pool: &[Player], captain_a: &PlayerId, captain_b: &PlayerId,
    ) -> Result<Lineup, GenerateError> {
        let request = TeamRequest::new(pool.to_vec(), captain_a.clone(), captain_b.clone());
        let response =
            self.client.post(&self.endpoint).json(&request).send().await.map_err(|err| {
                error!("Request to {} failed: {}", self.endpoint, err);
                GenerateError::Unavailable(err.to_string())
            })?;

        let status = response.status();
        // Other 4xx codes (404, 405, ...) mean the remote is misconfigured, not the request.
        if matches!(status, StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY) {
            let detail = match response.json::<ErrorResponse>().await {
                Ok(ErrorResponse { detail }) => detail,
                Err(_) => format!("Request rejected with status {status}"),
            };
            return Err(GenerateError::Rejected(detail));
        }
        if !status.is_success() {
            error!("{} responded with {}", self.endpoint, status);
            return Err(GenerateError::Unavailable(format!("Server responded with {status}")));
        }
        let body = response.json::<TeamResponse>().await.map_err(|err| {
            error!("Malformed response from {}: {}", self.endpoint, err);
            GenerateError::Unavailable(format!("Malformed response: {err}"))
        })?;
        Ok(Lineup::from(body))
    }
}
