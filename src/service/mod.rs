//! The request facade.
//!
//! Defines the `CareerService` trait — the uniform asynchronous contract
//! the presentation layer calls instead of talking to a backend directly —
//! and provides two implementations:
//! - `MockService` — canned payloads after a simulated network delay
//! - `RemoteService` — real HTTP against a configurable base URL
//!
//! Which one backs the facade is a configuration decision; callers
//! cannot tell them apart.

pub mod mock;
pub mod remote;

use anyhow::Result;
use async_trait::async_trait;
use chrono::{Duration, Utc};
use std::sync::Arc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::config::AppConfig;
use crate::types::{
    Ack, ApiResponse, ChallengeTicket, Guidance, JobApplication, JourneyInit, MarketSnapshot,
    ModuleSession, UserContext, UserProgress, UserRole, UserSession,
};

/// Dummy session lifetime.
const SESSION_TTL_HOURS: i64 = 1;

/// Abstraction over the career-guidance backend.
///
/// Each operation is a stateless, idempotent-by-construction
/// transformation from request parameters to a response record. No call
/// depends on another's result; nothing is shared across calls.
#[async_trait]
pub trait CareerService: Send + Sync {
    /// Start a user journey. Always succeeds on the mock path.
    async fn initialize_journey(&self, email: Option<&str>) -> Result<ApiResponse<JourneyInit>>;

    /// Get AI-powered career guidance for a free-text prompt.
    async fn ai_guidance(
        &self,
        prompt: &str,
        context: Option<&UserContext>,
    ) -> Result<ApiResponse<Guidance>>;

    /// Get personalized recommendations. The payload is independent of
    /// `user_id`.
    async fn personalized_recommendations(
        &self,
        user_id: Option<&str>,
    ) -> Result<ApiResponse<Guidance>>;

    /// Fetch the labour-market intelligence snapshot.
    async fn market_insights(&self) -> Result<ApiResponse<MarketSnapshot>>;

    /// Fetch the user's dashboard progress.
    async fn user_progress(&self, user_id: Option<&str>) -> Result<ApiResponse<UserProgress>>;

    /// Register for a lab challenge. The returned message embeds the
    /// assigned participant id.
    async fn join_challenge(&self, challenge_id: &str) -> Result<ChallengeTicket>;

    /// Start an interactive learning module. `session_url` is always
    /// `/learning/` + `module_id`.
    async fn start_learning_module(&self, module_id: &str) -> Result<ModuleSession>;

    /// Apply for a job.
    async fn apply_for_job(&self, job_id: &str) -> Result<JobApplication>;

    /// Save a job for later.
    async fn save_job(&self, job_id: &str) -> Result<Ack>;

    /// Whether this backend issues real network calls.
    fn is_live(&self) -> bool;

    /// Backend name for logging and identification.
    fn name(&self) -> &str;
}

/// Build the configured backend.
///
/// Unknown modes warn and fall back to the mock backend rather than
/// failing startup.
pub fn service_from_config(cfg: &AppConfig) -> Result<Arc<dyn CareerService>> {
    match cfg.service.mode.as_str() {
        "mock" => {
            info!(latency_ms = cfg.mock.latency_ms, "Using mock service backend");
            Ok(Arc::new(mock::MockService::from_config(cfg)))
        }
        "remote" => {
            info!(base_url = %cfg.remote.base_url, "Using remote service backend");
            Ok(Arc::new(remote::RemoteService::new(
                cfg.remote.base_url.clone(),
                Some(cfg.remote.timeout_secs),
            )?))
        }
        other => {
            warn!(mode = other, "Unknown service mode, defaulting to mock");
            Ok(Arc::new(mock::MockService::from_config(cfg)))
        }
    }
}

/// Create a dummy session synthesized purely from the email string.
///
/// No credential check is performed — the password is accepted and
/// discarded. The display name is the local part of the email (the whole
/// string when no '@' is present).
pub fn create_dummy_session(email: &str, _password: &str) -> UserSession {
    let full_name = email.split('@').next().unwrap_or(email).to_string();

    UserSession {
        id: format!("user_{}", Uuid::new_v4()),
        email: email.to_string(),
        full_name,
        role: UserRole::Beginner,
        is_authenticated: true,
        token_expiry: Some(Utc::now() + Duration::hours(SESSION_TTL_HOURS)),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
