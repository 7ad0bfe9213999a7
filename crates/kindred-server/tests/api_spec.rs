use std::sync::Arc;

use axum::http::StatusCode;
use axum_test::TestServer;
use kindred_core::{Category, CheckInRecord};
use kindred_personas::fallback_pool;
use kindred_resolver::{Resolver, ResolverConfig};
use kindred_server::dto::{
    CreateSessionResponse, DayResponse, GuidanceReply, JournalEntry, ResourceEntry,
    SessionSummary, StatusResponse,
};
use kindred_server::state::AppState;
use serde_json::json;

/// Server with an empty credential: the latch stays off and every
/// resolution is served from the fallback pools.
fn setup() -> TestServer {
    let resolver = Resolver::new(&ResolverConfig::new("", "gemini-1.5-flash"));
    let state = Arc::new(AppState::new(resolver));
    TestServer::new(kindred_server::app(state)).expect("failed to create test server")
}

async fn create_session(server: &TestServer) -> String {
    server
        .post("/session")
        .await
        .json::<CreateSessionResponse>()
        .session_id
}

mod status {
    use super::*;

    #[tokio::test]
    async fn reports_unconfigured_without_credential() {
        let server = setup();
        let response = server.get("/status").await;
        response.assert_status_ok();
        assert!(!response.json::<StatusResponse>().configured);
    }

    #[tokio::test]
    async fn health_returns_ok() {
        let server = setup();
        let response = server.get("/health").await;
        response.assert_status_ok();
        assert_eq!(response.text(), "OK");
    }
}

mod sessions {
    use super::*;

    #[tokio::test]
    async fn new_sessions_are_seeded_with_the_demo_trend() {
        let server = setup();
        let id = create_session(&server).await;

        let summary = server
            .get(&format!("/session/{id}"))
            .await
            .json::<SessionSummary>();
        assert_eq!(summary.days_in_recovery, 0);
        assert_eq!(summary.check_ins.len(), 3);
        assert_eq!(summary.journal_entries, 0);
    }

    #[tokio::test]
    async fn day_counter_increments_per_call() {
        let server = setup();
        let id = create_session(&server).await;

        server.post(&format!("/session/{id}/day")).await.assert_status_ok();
        let response = server.post(&format!("/session/{id}/day")).await;
        assert_eq!(response.json::<DayResponse>().days_in_recovery, 2);
    }

    #[tokio::test]
    async fn unknown_session_is_a_404() {
        let server = setup();
        let response = server.get("/session/not-a-session").await;
        response.assert_status(StatusCode::NOT_FOUND);
    }
}

mod check_ins {
    use super::*;

    #[tokio::test]
    async fn valid_check_in_is_appended() {
        let server = setup();
        let id = create_session(&server).await;

        let response = server
            .post(&format!("/session/{id}/checkin"))
            .json(&json!({"mood": 8, "urge": 2}))
            .await;
        response.assert_status_ok();
        let record = response.json::<CheckInRecord>();
        assert_eq!(record.mood, 8);
        assert_eq!(record.urge, 2);

        let all = server
            .get(&format!("/session/{id}/checkins"))
            .await
            .json::<Vec<CheckInRecord>>();
        assert_eq!(all.len(), 4);
    }

    #[tokio::test]
    async fn out_of_range_values_are_rejected() {
        let server = setup();
        let id = create_session(&server).await;

        for body in [json!({"mood": 0, "urge": 2}), json!({"mood": 5, "urge": 11})] {
            let response = server
                .post(&format!("/session/{id}/checkin"))
                .json(&body)
                .await;
            response.assert_status(StatusCode::BAD_REQUEST);
        }
    }
}

mod guidance {
    use super::*;

    #[tokio::test]
    async fn sos_routes_to_the_guardian_crisis_pool() {
        let server = setup();
        let id = create_session(&server).await;

        let reply = server
            .post(&format!("/session/{id}/sos"))
            .json(&json!({"message": "I want to relapse tonight"}))
            .await
            .json::<GuidanceReply>();
        assert_eq!(reply.agent_name, "The Guardian");
        assert!(!reply.content.is_empty());
        assert!(fallback_pool(Category::Crisis).contains(&reply.content.as_str()));
    }

    #[tokio::test]
    async fn journal_replies_with_the_reflector_and_keeps_history() {
        let server = setup();
        let id = create_session(&server).await;

        for message in ["today was hard", "slept badly"] {
            let reply = server
                .post(&format!("/session/{id}/journal"))
                .json(&json!({"message": message}))
                .await
                .json::<GuidanceReply>();
            assert_eq!(reply.agent_name, "The Reflector");
            assert!(fallback_pool(Category::Reflection).contains(&reply.content.as_str()));
        }

        let history = server
            .get(&format!("/session/{id}/journal"))
            .await
            .json::<Vec<JournalEntry>>();
        assert_eq!(history.len(), 2);
        // Newest first.
        assert_eq!(history[0].user, "slept badly");
        assert_eq!(history[1].user, "today was hard");
    }

    #[tokio::test]
    async fn ask_defaults_to_the_strategist() {
        let server = setup();
        let id = create_session(&server).await;

        let reply = server
            .post(&format!("/session/{id}/ask"))
            .json(&json!({"message": "how do I build a habit"}))
            .await
            .json::<GuidanceReply>();
        assert_eq!(reply.agent_name, "The Strategist");
        assert!(fallback_pool(Category::General).contains(&reply.content.as_str()));
    }

    #[tokio::test]
    async fn ask_with_unknown_context_still_lands_on_the_strategist() {
        let server = setup();
        let id = create_session(&server).await;

        let reply = server
            .post(&format!("/session/{id}/ask"))
            .json(&json!({"message": "how do I build a habit", "context": "unknown-category"}))
            .await
            .json::<GuidanceReply>();
        assert_eq!(reply.agent_name, "The Strategist");
    }

    #[tokio::test]
    async fn ask_honors_an_sos_context_key() {
        let server = setup();
        let id = create_session(&server).await;

        let reply = server
            .post(&format!("/session/{id}/ask"))
            .json(&json!({"message": "it is getting bad", "context": "sos"}))
            .await
            .json::<GuidanceReply>();
        assert_eq!(reply.agent_name, "The Guardian");
        assert!(fallback_pool(Category::Crisis).contains(&reply.content.as_str()));
    }

    #[tokio::test]
    async fn empty_messages_are_rejected_before_resolution() {
        let server = setup();
        let id = create_session(&server).await;

        for route in ["sos", "journal", "ask"] {
            let response = server
                .post(&format!("/session/{id}/{route}"))
                .json(&json!({"message": "   "}))
                .await;
            response.assert_status(StatusCode::BAD_REQUEST);
        }
    }

    #[tokio::test]
    async fn guidance_against_an_unknown_session_is_a_404() {
        let server = setup();
        let response = server
            .post("/session/missing/sos")
            .json(&json!({"message": "help"}))
            .await;
        response.assert_status(StatusCode::NOT_FOUND);
    }
}

mod resources {
    use super::*;

    #[tokio::test]
    async fn lists_the_crisis_resources() {
        let server = setup();
        let entries = server.get("/resources").await.json::<Vec<ResourceEntry>>();
        assert_eq!(entries.len(), 2);
        assert!(entries.iter().any(|e| e.label == "Crisis Lifeline"));
    }
}
