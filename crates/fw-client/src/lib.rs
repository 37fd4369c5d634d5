//! # fw-client — HTTP Draw Service
//!
//! `DrawService` implementation speaking the draw server's wire contract:
//! one `POST /draw/{draw_code}/spin` with an optional session-context token
//! in the JSON body, answered by `{"winner": <label>}`. Transport policy
//! beyond that (retries, auth) is the host application's business.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use fw_engine::{DrawService, DrawServiceError};

/// Spin request body
#[derive(Debug, Serialize)]
struct SpinRequest<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    session_context: Option<&'a str>,
}

/// Spin response body — the winner may arrive as a string or a number
#[derive(Debug, Deserialize)]
struct SpinResponse {
    winner: Value,
}

/// HTTP-backed draw service
pub struct HttpDrawService {
    client: reqwest::Client,
    base_url: String,
}

impl HttpDrawService {
    /// Create a client against `base_url` (trailing slash tolerated)
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Reuse an existing reqwest client (connection pooling, custom TLS)
    pub fn with_client(mut self, client: reqwest::Client) -> Self {
        self.client = client;
        self
    }

    fn spin_url(&self, draw_code: &str) -> String {
        format!("{}/draw/{}/spin", self.base_url, draw_code)
    }
}

/// Canonicalize the winner payload into a segment label.
///
/// Numeric winners become their decimal string (`7` ≡ `"7"`), preserving the
/// classic numeric wheel; anything else than a string or number is malformed.
fn winner_label(value: Value) -> Result<String, DrawServiceError> {
    match value {
        Value::String(label) => Ok(label),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(DrawServiceError::MalformedBody(format!(
            "unexpected winner payload: {other}"
        ))),
    }
}

#[async_trait]
impl DrawService for HttpDrawService {
    async fn request_winning_value(
        &self,
        draw_code: &str,
        session_context: Option<&str>,
    ) -> Result<String, DrawServiceError> {
        let url = self.spin_url(draw_code);
        log::debug!("requesting winner: POST {url}");

        let response = self
            .client
            .post(&url)
            .json(&SpinRequest { session_context })
            .send()
            .await
            .map_err(|err| DrawServiceError::Transport(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(DrawServiceError::Status(status.as_u16()));
        }

        let body: SpinResponse = response
            .json()
            .await
            .map_err(|err| DrawServiceError::MalformedBody(err.to_string()))?;
        winner_label(body.winner)
    }
}
