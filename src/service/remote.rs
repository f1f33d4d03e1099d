//! Remote backend: real HTTP against a configurable base URL.
//!
//! Issues JSON GET/POST requests and decodes the body into the shared
//! wire records. A non-2xx status becomes `ServiceError::Http` carrying
//! the numeric status and response body; the facade never recovers it —
//! errors always propagate to the caller. No retry, no cancellation.

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use super::CareerService;
use crate::types::{
    Ack, ApiResponse, ChallengeTicket, Guidance, GuidanceRequest, JobApplication, JourneyInit,
    JourneyRequest, MarketSnapshot, ModuleSession, ServiceError, UserContext, UserProgress,
};

const BACKEND_NAME: &str = "remote";

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Append an optional `userId` query parameter, percent-encoded.
fn with_user_query(path: &str, user_id: Option<&str>) -> String {
    match user_id {
        Some(id) => format!("{path}?userId={}", urlencoding::encode(id)),
        None => path.to_string(),
    }
}

/// The HTTP-backed service client.
pub struct RemoteService {
    http: Client,
    /// Base URL including the `/api` prefix, without a trailing slash.
    base_url: String,
}

impl RemoteService {
    /// Create a remote client for the given base URL.
    pub fn new(base_url: impl Into<String>, timeout_secs: Option<u64>) -> Result<Self> {
        let http = Client::builder()
            .timeout(std::time::Duration::from_secs(
                timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS),
            ))
            .user_agent("MARGDARSHAK/0.1.0 (career-guidance-facade)")
            .build()
            .context("Failed to build HTTP client for remote backend")?;

        let base_url = base_url.into().trim_end_matches('/').to_string();

        Ok(Self { http, base_url })
    }

    // -- Internal helpers ------------------------------------------------

    /// Decode a response body as JSON, or surface the HTTP status.
    async fn decode<T: DeserializeOwned>(resp: reqwest::Response, path: &str) -> Result<T> {
        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(ServiceError::Http {
                status: status.as_u16(),
                body,
            }
            .into());
        }

        resp.json::<T>()
            .await
            .with_context(|| format!("Failed to parse response from {path}"))
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = format!("{}{path}", self.base_url);
        debug!(url = %url, "GET");

        let resp = self
            .http
            .get(&url)
            .send()
            .await
            .with_context(|| format!("GET {path} failed"))?;

        Self::decode(resp, path).await
    }

    async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = format!("{}{path}", self.base_url);
        debug!(url = %url, "POST");

        // .json() sets the Content-Type: application/json header.
        let resp = self
            .http
            .post(&url)
            .json(body)
            .send()
            .await
            .with_context(|| format!("POST {path} failed"))?;

        Self::decode(resp, path).await
    }

    /// POST with an empty JSON object body, for id-addressed operations.
    async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.post_json(path, &serde_json::json!({})).await
    }
}

// ---------------------------------------------------------------------------
// CareerService trait implementation
// ---------------------------------------------------------------------------

#[async_trait]
impl CareerService for RemoteService {
    async fn initialize_journey(&self, email: Option<&str>) -> Result<ApiResponse<JourneyInit>> {
        let body = JourneyRequest {
            email: email.map(str::to_string),
        };
        self.post_json("/journey/init", &body).await
    }

    async fn ai_guidance(
        &self,
        prompt: &str,
        context: Option<&UserContext>,
    ) -> Result<ApiResponse<Guidance>> {
        let body = GuidanceRequest {
            prompt: prompt.to_string(),
            context: context.cloned(),
        };
        self.post_json("/guidance", &body).await
    }

    async fn personalized_recommendations(
        &self,
        user_id: Option<&str>,
    ) -> Result<ApiResponse<Guidance>> {
        self.get_json(&with_user_query("/recommendations", user_id))
            .await
    }

    async fn market_insights(&self) -> Result<ApiResponse<MarketSnapshot>> {
        self.get_json("/market/insights").await
    }

    async fn user_progress(&self, user_id: Option<&str>) -> Result<ApiResponse<UserProgress>> {
        self.get_json(&with_user_query("/progress", user_id)).await
    }

    async fn join_challenge(&self, challenge_id: &str) -> Result<ChallengeTicket> {
        let path = format!("/challenges/{}/join", urlencoding::encode(challenge_id));
        self.post_empty(&path).await
    }

    async fn start_learning_module(&self, module_id: &str) -> Result<ModuleSession> {
        let path = format!("/modules/{}/start", urlencoding::encode(module_id));
        self.post_empty(&path).await
    }

    async fn apply_for_job(&self, job_id: &str) -> Result<JobApplication> {
        let path = format!("/jobs/{}/apply", urlencoding::encode(job_id));
        self.post_empty(&path).await
    }

    async fn save_job(&self, job_id: &str) -> Result<Ack> {
        let path = format!("/jobs/{}/save", urlencoding::encode(job_id));
        self.post_empty(&path).await
    }

    /// The remote backend issues real network calls.
    fn is_live(&self) -> bool {
        true
    }

    fn name(&self) -> &str {
        BACKEND_NAME
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
