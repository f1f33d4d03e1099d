//! Remote path driven end to end against the stub server.
//!
//! Binds the stub on an ephemeral port, points `RemoteService` at it,
//! and checks that the wire behaves exactly like the mock path — plus
//! the two failure properties of the fetch helper.

use std::sync::Arc;
use std::time::Duration;

use margdarshak::guidance::template::TemplateAdvisor;
use margdarshak::server::build_router;
use margdarshak::server::routes::ApiState;
use margdarshak::service::mock::MockService;
use margdarshak::service::remote::RemoteService;
use margdarshak::service::CareerService;

/// Spawn the stub server on an ephemeral port; returns its base URL
/// including the `/api` prefix.
async fn spawn_stub() -> String {
    let state: ApiState = Arc::new(MockService::new(
        Box::new(TemplateAdvisor::new()),
        Duration::ZERO,
    ));
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{addr}/api")
}

async fn remote_facade() -> RemoteService {
    let base_url = spawn_stub().await;
    RemoteService::new(base_url, Some(5)).unwrap()
}

// -- 2xx path: parsed bodies --------------------------------------------

#[tokio::test]
async fn remote_market_insights_parses_canned_payload() {
    let remote = remote_facade().await;
    let resp = remote.market_insights().await.unwrap();

    assert!(resp.success);
    assert_eq!(resp.data.trends.len(), 6);
    assert_eq!(resp.data.jobs.len(), 3);
    assert_eq!(resp.data.industries.len(), 4);
    assert_eq!(resp.data.trends[0].skill, "Artificial Intelligence");
    assert_eq!(resp.data.trends[0].demand, 95);
}

#[tokio::test]
async fn remote_guidance_selects_template_over_the_wire() {
    let remote = remote_facade().await;

    let career = remote
        .ai_guidance("Tell me about my career options", None)
        .await
        .unwrap();
    assert!(career.data.message.starts_with("Your career trajectory"));
    assert!(career.timestamp.is_some());

    let default = remote.ai_guidance("Hello", None).await.unwrap();
    assert!(default.data.message.starts_with("Based on current market analysis"));
}

#[tokio::test]
async fn remote_journey_and_progress_round_trip() {
    let remote = remote_facade().await;

    let journey = remote
        .initialize_journey(Some("demo@example.com"))
        .await
        .unwrap();
    assert!(journey.data.journey_id.starts_with("journey_"));

    let progress = remote.user_progress(Some("alice")).await.unwrap();
    assert_eq!(progress.data.user_id, "alice");
    assert_eq!(progress.data.courses.len(), 4);
}

#[tokio::test]
async fn remote_id_operations_round_trip() {
    let remote = remote_facade().await;

    let ticket = remote.join_challenge("tech-spark-1").await.unwrap();
    assert!(ticket.success);
    assert!(ticket.message.contains("participant ID"));

    let session = remote.start_learning_module("ml-101").await.unwrap();
    assert_eq!(session.session_url, "/learning/ml-101");

    let application = remote.apply_for_job("job_1").await.unwrap();
    assert!(application.application_id.starts_with("app_"));

    let ack = remote.save_job("job_2").await.unwrap();
    assert!(ack.success);
}

#[tokio::test]
async fn remote_and_mock_payloads_agree() {
    let remote = remote_facade().await;
    let mock = MockService::new(Box::new(TemplateAdvisor::new()), Duration::ZERO);

    let over_wire = remote.market_insights().await.unwrap().data;
    let local = mock.market_insights().await.unwrap().data;

    assert_eq!(over_wire.trends.len(), local.trends.len());
    for (w, l) in over_wire.trends.iter().zip(local.trends.iter()) {
        assert_eq!(w.skill, l.skill);
        assert_eq!(w.demand, l.demand);
        assert_eq!(w.salary, l.salary);
    }

    let wire_reco = remote.personalized_recommendations(None).await.unwrap().data;
    let local_reco = mock.personalized_recommendations(None).await.unwrap().data;
    assert_eq!(wire_reco.career_path, local_reco.career_path);
    assert_eq!(wire_reco.recommendations, local_reco.recommendations);
}

// -- Failure path: status surfaces in the error --------------------------

#[tokio::test]
async fn non_2xx_error_message_contains_status_code() {
    // Point the client below the /api prefix so every route is a 404.
    let base_url = spawn_stub().await;
    let broken = RemoteService::new(base_url.replace("/api", "/nope"), Some(5)).unwrap();

    let err = broken.market_insights().await.unwrap_err();
    assert!(err.to_string().contains("404"), "got: {err}");
}

#[tokio::test]
async fn connection_failure_propagates() {
    // Nothing listens on this port.
    let unreachable = RemoteService::new("http://127.0.0.1:1/api", Some(1)).unwrap();
    assert!(unreachable.market_insights().await.is_err());
}
