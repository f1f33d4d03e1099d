//! Shared types for the MARGDARSHAK service facade.
//!
//! These records form the wire-level data model used across all modules.
//! They serialize to the camelCase JSON shapes the presentation layer
//! consumes, so guidance, service, and server modules can depend on them
//! without circular references.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Response envelope
// ---------------------------------------------------------------------------

/// The uniform `{ success, data }` envelope every facade operation returns.
///
/// `timestamp` is attached only where the backend stamps one (guidance
/// responses); it is omitted from the wire otherwise.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: T,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
}

impl<T> ApiResponse<T> {
    /// Wrap a payload in a successful, unstamped envelope.
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
            timestamp: None,
        }
    }

    /// Wrap a payload in a successful envelope stamped with the current time.
    pub fn stamped(data: T) -> Self {
        Self {
            success: true,
            data,
            timestamp: Some(Utc::now()),
        }
    }
}

// ---------------------------------------------------------------------------
// Guidance
// ---------------------------------------------------------------------------

/// An AI-guidance result: advisory message plus NSQF/NCVET-aligned
/// recommendations. NSQF levels and NCVET course names are opaque domain
/// labels — the facade attaches no behavior to them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Guidance {
    pub message: String,
    pub recommendations: Vec<String>,
    pub nsqf_level: u8,
    pub ncvet_courses: Vec<String>,
    pub career_path: String,
    /// Self-reported confidence (0–1)
    pub confidence: f64,
}

impl fmt::Display for Guidance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (NSQF L{} | conf={:.0}% | {} recommendations)",
            self.career_path,
            self.nsqf_level,
            self.confidence * 100.0,
            self.recommendations.len(),
        )
    }
}

impl Guidance {
    /// Whether the confidence score is within valid bounds [0, 1].
    pub fn is_valid(&self) -> bool {
        (0.0..=1.0).contains(&self.confidence)
    }
}

/// Optional user context carried alongside a guidance prompt.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserContext {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skills: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub experience: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub goals: Option<Vec<String>>,
}

impl UserContext {
    /// Whether no context fields were supplied at all.
    pub fn is_empty(&self) -> bool {
        self.skills.is_none() && self.experience.is_none() && self.goals.is_none()
    }
}

// ---------------------------------------------------------------------------
// Market intelligence
// ---------------------------------------------------------------------------

/// Snapshot of labour-market intelligence: skill trends, live job alerts,
/// and industry insights.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketSnapshot {
    pub trends: Vec<MarketTrend>,
    pub jobs: Vec<JobAlert>,
    pub industries: Vec<IndustryInsight>,
    pub last_updated: DateTime<Utc>,
}

impl MarketSnapshot {
    /// The trend with the highest demand score, if any.
    pub fn top_trend(&self) -> Option<&MarketTrend> {
        self.trends.iter().max_by_key(|t| t.demand)
    }
}

/// Demand trend for a single skill. Salary, growth, and job counts are
/// pre-formatted display strings — the facade does no arithmetic on them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarketTrend {
    pub skill: String,
    /// Demand score (0–100)
    pub demand: u8,
    pub growth: String,
    pub salary: String,
    pub jobs: String,
    pub trend: TrendDirection,
}

impl fmt::Display for MarketTrend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (demand {} | {} | {} | {})",
            self.skill, self.demand, self.growth, self.salary, self.trend,
        )
    }
}

/// Direction tag on a market trend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendDirection {
    Up,
    Down,
    Stable,
}

impl fmt::Display for TrendDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrendDirection::Up => write!(f, "up"),
            TrendDirection::Down => write!(f, "down"),
            TrendDirection::Stable => write!(f, "stable"),
        }
    }
}

impl std::str::FromStr for TrendDirection {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "up" => Ok(TrendDirection::Up),
            "down" => Ok(TrendDirection::Down),
            "stable" | "flat" => Ok(TrendDirection::Stable),
            _ => Err(anyhow::anyhow!("Unknown trend direction: {s}")),
        }
    }
}

/// A live job opening matched against the user's profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobAlert {
    pub id: String,
    pub title: String,
    pub company: String,
    pub location: String,
    pub salary: String,
    pub posted: String,
    /// Profile match score (0–100). Serialized as `match` on the wire;
    /// renamed because `match` is a Rust keyword.
    #[serde(rename = "match")]
    pub match_score: u8,
}

impl fmt::Display for JobAlert {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {} @ {} ({}, {} | match {}%)",
            self.id, self.title, self.company, self.location, self.salary, self.match_score,
        )
    }
}

/// Growth outlook for an industry sector.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndustryInsight {
    pub industry: String,
    pub growth: String,
    pub jobs: String,
    pub avg_salary: String,
    pub hot_skills: Vec<String>,
}

// ---------------------------------------------------------------------------
// User progress
// ---------------------------------------------------------------------------

/// Dashboard snapshot of a user's learning progress.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProgress {
    pub user_id: String,
    pub completed_courses: u32,
    pub current_courses: u32,
    pub total_credits: u32,
    pub streak_days: u32,
    pub skill_badges: u32,
    pub mentor_sessions: u32,
    pub courses: Vec<CourseProgress>,
    pub skills: Vec<SkillProgress>,
}

impl UserProgress {
    /// Mean completion percentage across in-flight courses.
    /// Returns 0.0 when no courses are enrolled.
    pub fn average_course_progress(&self) -> f64 {
        if self.courses.is_empty() {
            0.0
        } else {
            let sum: u32 = self.courses.iter().map(|c| c.progress as u32).sum();
            sum as f64 / self.courses.len() as f64
        }
    }
}

/// Progress within a single enrolled course.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseProgress {
    pub id: String,
    pub title: String,
    pub provider: String,
    /// Completion percentage (0–100)
    pub progress: u8,
    pub next_deadline: String,
    pub difficulty: Difficulty,
}

/// Course difficulty band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Difficulty::Beginner => write!(f, "Beginner"),
            Difficulty::Intermediate => write!(f, "Intermediate"),
            Difficulty::Advanced => write!(f, "Advanced"),
        }
    }
}

/// Self-assessed proficiency in a single skill.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillProgress {
    pub skill: String,
    /// Proficiency level (0–100)
    pub level: u8,
    pub category: String,
}

// ---------------------------------------------------------------------------
// Journey & session
// ---------------------------------------------------------------------------

/// Result of starting a user journey.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JourneyInit {
    pub journey_id: String,
    pub user_level: UserLevel,
    pub recommended_path: String,
    pub start_date: DateTime<Utc>,
}

impl fmt::Display for JourneyInit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({} → {})",
            self.journey_id, self.user_level, self.recommended_path,
        )
    }
}

/// Inferred experience level on journey start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UserLevel {
    Beginner,
    Intermediate,
    Professional,
}

impl fmt::Display for UserLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UserLevel::Beginner => write!(f, "Beginner"),
            UserLevel::Intermediate => write!(f, "Intermediate"),
            UserLevel::Professional => write!(f, "Professional"),
        }
    }
}

/// A local user session. No credential check backs it — the session is
/// synthesized entirely from the email string.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSession {
    pub id: String,
    pub email: String,
    pub full_name: String,
    pub role: UserRole,
    pub is_authenticated: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_expiry: Option<DateTime<Utc>>,
}

impl UserSession {
    /// Whether the session token has lapsed. A session without an expiry
    /// never lapses.
    pub fn is_expired(&self) -> bool {
        match self.token_expiry {
            Some(expiry) => expiry <= Utc::now(),
            None => false,
        }
    }
}

/// Session role tag. Lowercase on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Beginner,
    Intermediate,
    Professional,
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UserRole::Beginner => write!(f, "beginner"),
            UserRole::Intermediate => write!(f, "intermediate"),
            UserRole::Professional => write!(f, "professional"),
        }
    }
}

// ---------------------------------------------------------------------------
// Per-operation outcome records
// ---------------------------------------------------------------------------

/// Outcome of joining a lab challenge. The message embeds the assigned
/// participant id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChallengeTicket {
    pub success: bool,
    pub message: String,
}

/// Outcome of starting an interactive learning module.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModuleSession {
    pub success: bool,
    pub session_url: String,
}

/// Outcome of a job application.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobApplication {
    pub success: bool,
    pub application_id: String,
}

/// Bare acknowledgement for operations with no payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ack {
    pub success: bool,
}

// ---------------------------------------------------------------------------
// Request bodies (remote path)
// ---------------------------------------------------------------------------

/// Body of `POST /journey/init`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct JourneyRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// Body of `POST /guidance`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GuidanceRequest {
    pub prompt: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<UserContext>,
}

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

/// Domain-specific error types for the service facade.
///
/// Only two failure kinds exist: the remote-fetch path raising on non-2xx
/// status, and configuration errors. The mock path cannot fail.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("API error {status}: {body}")]
    Http { status: u16, body: String },

    #[error("Configuration error: {0}")]
    Config(String),
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
