//! Mock backend: canned payloads behind a simulated network delay.
//!
//! This is the path the platform actually ships with — every response is
//! fabricated locally, so the facade works with no backend deployed.
//! Payload literals mirror the labour-market figures the dashboard
//! renders. This path cannot fail.

use anyhow::Result;
use async_trait::async_trait;
use chrono::Utc;
use std::sync::atomic::{AtomicI64, Ordering};
use std::time::Duration;
use tracing::debug;

use super::CareerService;
use crate::config::AppConfig;
use crate::guidance::template::TemplateAdvisor;
use crate::guidance::GuidanceProvider;
use crate::types::{
    Ack, ApiResponse, ChallengeTicket, CourseProgress, Difficulty, Guidance, IndustryInsight,
    JobAlert, JobApplication, JourneyInit, MarketSnapshot, MarketTrend, ModuleSession,
    SkillProgress, TrendDirection, UserContext, UserLevel, UserProgress,
};

const BACKEND_NAME: &str = "mock";

/// User id substituted when the caller doesn't supply one.
const DEMO_USER_ID: &str = "demo_user";

// ---------------------------------------------------------------------------
// Identifier stamps
// ---------------------------------------------------------------------------

static LAST_STAMP: AtomicI64 = AtomicI64::new(0);

/// Millisecond timestamp that is strictly increasing within this process.
///
/// Seeded from the wall clock; two calls landing in the same millisecond
/// get consecutive values instead of colliding. Ids built from it stay
/// parseable as timestamps.
fn next_stamp() -> i64 {
    let now = Utc::now().timestamp_millis();
    let mut last = LAST_STAMP.load(Ordering::Relaxed);
    loop {
        let next = if now > last { now } else { last + 1 };
        match LAST_STAMP.compare_exchange_weak(last, next, Ordering::SeqCst, Ordering::Relaxed) {
            Ok(_) => return next,
            Err(actual) => last = actual,
        }
    }
}

// ---------------------------------------------------------------------------
// Backend
// ---------------------------------------------------------------------------

/// The canned-data backend.
pub struct MockService {
    advisor: Box<dyn GuidanceProvider>,
    latency: Duration,
}

impl MockService {
    /// Create a mock backend with an explicit guidance provider and
    /// simulated latency. Tests typically pass `Duration::ZERO`.
    pub fn new(advisor: Box<dyn GuidanceProvider>, latency: Duration) -> Self {
        Self { advisor, latency }
    }

    /// Create a mock backend from configuration, wired to the shipped
    /// template advisor.
    pub fn from_config(cfg: &AppConfig) -> Self {
        Self::new(
            Box::new(TemplateAdvisor::new()),
            Duration::from_millis(cfg.mock.latency_ms),
        )
    }

    /// Cooperative suspension standing in for network time.
    async fn simulate_latency(&self) {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
    }

    // -- Canned payload builders -----------------------------------------

    /// The personalized-recommendations payload. Fixed regardless of user.
    fn canned_recommendations() -> Guidance {
        Guidance {
            message: "Based on your profile and current market trends, here are your personalized recommendations.".to_string(),
            recommendations: vec![
                "Focus on Deep Learning to advance from NSQF Level 5 to Level 6".to_string(),
                "Complete Cloud Architecture certification for higher salary potential".to_string(),
                "Join mentorship program with industry experts".to_string(),
                "Participate in upcoming Tech Spark challenges".to_string(),
            ],
            nsqf_level: 5,
            ncvet_courses: vec![
                "Advanced AI & Machine Learning".to_string(),
                "Cloud Computing with Azure".to_string(),
                "DevOps Engineering".to_string(),
            ],
            career_path: "Senior AI Engineer".to_string(),
            confidence: 0.88,
        }
    }

    /// The labour-market snapshot: 6 skill trends, 3 job alerts,
    /// 4 industry insights.
    fn canned_market_snapshot() -> MarketSnapshot {
        let trend = |skill: &str, demand: u8, growth: &str, salary: &str, jobs: &str| MarketTrend {
            skill: skill.to_string(),
            demand,
            growth: growth.to_string(),
            salary: salary.to_string(),
            jobs: jobs.to_string(),
            trend: TrendDirection::Up,
        };

        MarketSnapshot {
            trends: vec![
                trend("Artificial Intelligence", 95, "+45%", "₹12-25L", "15,000+"),
                trend("Cloud Computing", 88, "+38%", "₹8-20L", "22,000+"),
                trend("Digital Marketing", 82, "+25%", "₹4-12L", "35,000+"),
                trend("Data Science", 90, "+42%", "₹10-22L", "18,000+"),
                trend("Cybersecurity", 85, "+35%", "₹8-18L", "12,000+"),
                trend("Product Management", 78, "+28%", "₹15-35L", "8,000+"),
            ],
            jobs: vec![
                JobAlert {
                    id: "job_1".to_string(),
                    title: "Senior AI Engineer".to_string(),
                    company: "TechCorp India".to_string(),
                    location: "Bangalore".to_string(),
                    salary: "₹18-25L".to_string(),
                    posted: "2 hours ago".to_string(),
                    match_score: 92,
                },
                JobAlert {
                    id: "job_2".to_string(),
                    title: "Digital Marketing Manager".to_string(),
                    company: "StartupXYZ".to_string(),
                    location: "Mumbai".to_string(),
                    salary: "₹8-12L".to_string(),
                    posted: "4 hours ago".to_string(),
                    match_score: 88,
                },
                JobAlert {
                    id: "job_3".to_string(),
                    title: "Cloud Solutions Architect".to_string(),
                    company: "GlobalTech".to_string(),
                    location: "Hyderabad".to_string(),
                    salary: "₹20-30L".to_string(),
                    posted: "1 day ago".to_string(),
                    match_score: 85,
                },
            ],
            industries: vec![
                IndustryInsight {
                    industry: "Information Technology".to_string(),
                    growth: "+25%".to_string(),
                    jobs: "2.5M+".to_string(),
                    avg_salary: "₹8-20L".to_string(),
                    hot_skills: vec!["AI/ML".to_string(), "Cloud".to_string(), "DevOps".to_string()],
                },
                IndustryInsight {
                    industry: "Healthcare".to_string(),
                    growth: "+18%".to_string(),
                    jobs: "1.8M+".to_string(),
                    avg_salary: "₹5-15L".to_string(),
                    hot_skills: vec![
                        "Digital Health".to_string(),
                        "Telemedicine".to_string(),
                        "Biotechnology".to_string(),
                    ],
                },
                IndustryInsight {
                    industry: "Financial Services".to_string(),
                    growth: "+22%".to_string(),
                    jobs: "1.2M+".to_string(),
                    avg_salary: "₹6-18L".to_string(),
                    hot_skills: vec![
                        "FinTech".to_string(),
                        "Blockchain".to_string(),
                        "Risk Analysis".to_string(),
                    ],
                },
                IndustryInsight {
                    industry: "Manufacturing".to_string(),
                    growth: "+15%".to_string(),
                    jobs: "3.2M+".to_string(),
                    avg_salary: "₹4-12L".to_string(),
                    hot_skills: vec![
                        "Industry 4.0".to_string(),
                        "IoT".to_string(),
                        "Automation".to_string(),
                    ],
                },
            ],
            last_updated: Utc::now(),
        }
    }

    /// The dashboard progress payload. Counts and nested records are
    /// fixed; only the user id echoes the caller.
    fn canned_progress(user_id: Option<&str>) -> UserProgress {
        let course = |id: &str,
                      title: &str,
                      provider: &str,
                      progress: u8,
                      next_deadline: &str,
                      difficulty: Difficulty| CourseProgress {
            id: id.to_string(),
            title: title.to_string(),
            provider: provider.to_string(),
            progress,
            next_deadline: next_deadline.to_string(),
            difficulty,
        };
        let skill = |skill: &str, level: u8, category: &str| SkillProgress {
            skill: skill.to_string(),
            level,
            category: category.to_string(),
        };

        UserProgress {
            user_id: user_id.unwrap_or(DEMO_USER_ID).to_string(),
            completed_courses: 12,
            current_courses: 4,
            total_credits: 2450,
            streak_days: 15,
            skill_badges: 8,
            mentor_sessions: 3,
            courses: vec![
                course(
                    "c1",
                    "Advanced AI & Machine Learning",
                    "NCVET",
                    68,
                    "Assignment 3 - 2 days",
                    Difficulty::Advanced,
                ),
                course(
                    "c2",
                    "Digital Marketing Mastery",
                    "NSQF Level 6",
                    85,
                    "Final Project - 5 days",
                    Difficulty::Intermediate,
                ),
                course(
                    "c3",
                    "Cloud Architecture Fundamentals",
                    "SWAYAM",
                    42,
                    "Quiz 2 - 1 day",
                    Difficulty::Beginner,
                ),
                course(
                    "c4",
                    "Data Analytics with Python",
                    "NPTEL",
                    76,
                    "Lab Exercise - 3 days",
                    Difficulty::Intermediate,
                ),
            ],
            skills: vec![
                skill("Artificial Intelligence", 92, "Technology"),
                skill("Digital Marketing", 78, "Business"),
                skill("Data Analysis", 85, "Analytics"),
                skill("Cloud Computing", 68, "Technology"),
                skill("Project Management", 72, "Management"),
            ],
        }
    }
}

// ---------------------------------------------------------------------------
// CareerService trait implementation
// ---------------------------------------------------------------------------

#[async_trait]
impl CareerService for MockService {
    async fn initialize_journey(&self, email: Option<&str>) -> Result<ApiResponse<JourneyInit>> {
        self.simulate_latency().await;
        debug!(email = ?email, "Initializing journey (mock)");

        Ok(ApiResponse::ok(JourneyInit {
            journey_id: format!("journey_{}", next_stamp()),
            user_level: UserLevel::Beginner,
            recommended_path: "AI & Technology".to_string(),
            start_date: Utc::now(),
        }))
    }

    async fn ai_guidance(
        &self,
        prompt: &str,
        context: Option<&UserContext>,
    ) -> Result<ApiResponse<Guidance>> {
        self.simulate_latency().await;
        let guidance = self.advisor.advise(prompt, context).await?;
        Ok(ApiResponse::stamped(guidance))
    }

    async fn personalized_recommendations(
        &self,
        user_id: Option<&str>,
    ) -> Result<ApiResponse<Guidance>> {
        self.simulate_latency().await;
        debug!(user_id = ?user_id, "Fetching recommendations (mock)");
        Ok(ApiResponse::stamped(Self::canned_recommendations()))
    }

    async fn market_insights(&self) -> Result<ApiResponse<MarketSnapshot>> {
        self.simulate_latency().await;
        Ok(ApiResponse::ok(Self::canned_market_snapshot()))
    }

    async fn user_progress(&self, user_id: Option<&str>) -> Result<ApiResponse<UserProgress>> {
        self.simulate_latency().await;
        Ok(ApiResponse::ok(Self::canned_progress(user_id)))
    }

    async fn join_challenge(&self, challenge_id: &str) -> Result<ChallengeTicket> {
        self.simulate_latency().await;
        let participant_id = next_stamp();
        debug!(challenge_id, participant_id, "Challenge registration (mock)");

        Ok(ChallengeTicket {
            success: true,
            message: format!(
                "Successfully registered for challenge. Your participant ID: {participant_id}"
            ),
        })
    }

    async fn start_learning_module(&self, module_id: &str) -> Result<ModuleSession> {
        self.simulate_latency().await;

        Ok(ModuleSession {
            success: true,
            session_url: format!("/learning/{module_id}"),
        })
    }

    async fn apply_for_job(&self, job_id: &str) -> Result<JobApplication> {
        self.simulate_latency().await;
        let application_id = format!("app_{}", next_stamp());
        debug!(job_id, application_id = %application_id, "Job application (mock)");

        Ok(JobApplication {
            success: true,
            application_id,
        })
    }

    async fn save_job(&self, job_id: &str) -> Result<Ack> {
        self.simulate_latency().await;
        debug!(job_id, "Job saved (mock)");
        Ok(Ack { success: true })
    }

    /// The mock backend never touches the network.
    fn is_live(&self) -> bool {
        false
    }

    fn name(&self) -> &str {
        BACKEND_NAME
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
