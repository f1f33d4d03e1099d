//! Facade behavior over the mock path.
//!
//! Exercises the public contract the presentation layer depends on:
//! template selection, canned market literals, identifier monotonicity,
//! and session synthesis.

use std::time::Duration;

use margdarshak::guidance::template::TemplateAdvisor;
use margdarshak::service::mock::MockService;
use margdarshak::service::{create_dummy_session, CareerService};
use margdarshak::types::TrendDirection;

fn facade() -> MockService {
    MockService::new(Box::new(TemplateAdvisor::new()), Duration::ZERO)
}

// -- Guidance templates ------------------------------------------------

#[tokio::test]
async fn career_prompt_selects_career_template() {
    let resp = facade()
        .ai_guidance("Tell me about my career options", None)
        .await
        .unwrap();
    assert!(resp.success);
    assert!(resp.data.message.starts_with("Your career trajectory"));
}

#[tokio::test]
async fn skills_prompt_selects_skills_template() {
    let resp = facade()
        .ai_guidance("What skills should I learn", None)
        .await
        .unwrap();
    assert!(resp.data.message.contains("high-demand skills"));
}

#[tokio::test]
async fn other_prompt_selects_default_template() {
    let resp = facade()
        .ai_guidance("Which city has the most jobs?", None)
        .await
        .unwrap();
    assert!(resp.data.message.starts_with("Based on current market analysis"));
}

// -- Market snapshot literals ------------------------------------------

#[tokio::test]
async fn market_insights_matches_documented_literals() {
    let resp = facade().market_insights().await.unwrap();
    let snapshot = resp.data;

    assert_eq!(snapshot.trends.len(), 6);
    assert_eq!(snapshot.jobs.len(), 3);
    assert_eq!(snapshot.industries.len(), 4);

    let ai = snapshot
        .trends
        .iter()
        .find(|t| t.skill == "Artificial Intelligence")
        .expect("AI trend present");
    assert_eq!(ai.demand, 95);
    assert_eq!(ai.growth, "+45%");
    assert_eq!(ai.trend, TrendDirection::Up);

    // The AI trend also has the highest demand of the snapshot.
    assert_eq!(snapshot.top_trend().unwrap().skill, "Artificial Intelligence");
}

// -- Identifier monotonicity -------------------------------------------

fn participant_id(message: &str) -> i64 {
    message
        .rsplit(": ")
        .next()
        .and_then(|s| s.parse().ok())
        .expect("participant id parses as i64")
}

#[tokio::test]
async fn challenge_and_application_ids_are_monotonic() {
    let facade = facade();
    let mut prev = 0i64;

    for _ in 0..3 {
        let ticket = facade.join_challenge("tech-spark-1").await.unwrap();
        assert!(ticket.success);
        let id = participant_id(&ticket.message);
        assert!(id > prev, "ids must not go backwards");
        prev = id;

        let application = facade.apply_for_job("job_1").await.unwrap();
        assert!(application.success);
        let stamp: i64 = application
            .application_id
            .strip_prefix("app_")
            .unwrap()
            .parse()
            .unwrap();
        assert!(stamp > prev, "ids must not go backwards");
        prev = stamp;
    }
}

// -- Module sessions ----------------------------------------------------

#[tokio::test]
async fn session_url_is_literal_concatenation() {
    let facade = facade();
    for module_id in ["ml-101", "x", "digital-marketing-2"] {
        let session = facade.start_learning_module(module_id).await.unwrap();
        assert_eq!(session.session_url, format!("/learning/{module_id}"));
    }
}

// -- Journey & progress --------------------------------------------------

#[tokio::test]
async fn journey_initialization_succeeds_with_and_without_email() {
    let facade = facade();

    let with_email = facade
        .initialize_journey(Some("demo@example.com"))
        .await
        .unwrap();
    assert!(with_email.success);
    assert!(with_email.data.journey_id.starts_with("journey_"));

    let without = facade.initialize_journey(None).await.unwrap();
    assert!(without.success);
    assert_ne!(with_email.data.journey_id, without.data.journey_id);
}

#[tokio::test]
async fn progress_payload_is_independent_of_user_id() {
    let facade = facade();
    let a = facade.user_progress(Some("alice")).await.unwrap().data;
    let b = facade.user_progress(Some("bob")).await.unwrap().data;

    assert_eq!(a.user_id, "alice");
    assert_eq!(b.user_id, "bob");
    assert_eq!(a.total_credits, b.total_credits);
    assert_eq!(a.courses.len(), b.courses.len());
}

#[tokio::test]
async fn save_job_acknowledges() {
    let ack = facade().save_job("job_3").await.unwrap();
    assert!(ack.success);
}

// -- Dummy session -------------------------------------------------------

#[test]
fn dummy_session_uses_email_local_part() {
    let session = create_dummy_session("demo@example.com", "any-password");
    assert_eq!(session.full_name, "demo");
    assert!(session.is_authenticated);
    assert!(!session.is_expired());
}

#[test]
fn dummy_session_survives_odd_emails() {
    assert_eq!(create_dummy_session("", "pw").full_name, "");
    assert_eq!(create_dummy_session("no-at-sign", "pw").full_name, "no-at-sign");
    assert_eq!(create_dummy_session("a@b@c", "pw").full_name, "a");
}
