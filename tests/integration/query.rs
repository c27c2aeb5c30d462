//! Query endpoint against the mock server

use crate::mock_server::{query_response_body, MockServerFixture};
use apiai_rust::{Event, MessageKind, Query};
use mockito::Matcher;
use serde_json::json;

#[tokio::test]
async fn test_text_query_defaults_lang_and_decodes_response() {
    let mut fixture = MockServerFixture::new().await;
    let mock = fixture
        .signed_mock("POST", "/query", &[])
        .match_body(Matcher::Json(json!({
            "query": "book a room",
            "sessionId": "session-1",
            "lang": "en"
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(query_response_body())
        .create_async()
        .await;

    let client = fixture.client();
    let response = client
        .query(&Query::text("book a room", "session-1"))
        .await
        .expect("query failed");

    mock.assert_async().await;
    assert_eq!(response.session_id, "session-1");
    assert!(response.timestamp.is_some());
    assert_eq!(response.result.action, "room.reservation");
    assert!(response.result.action_incomplete);
    assert!((response.result.score - 0.87).abs() < f64::EPSILON);
    assert_eq!(response.result.fulfillment.speech, "How many guests?");

    let kinds: Vec<MessageKind> = response
        .result
        .fulfillment
        .messages
        .iter()
        .map(|m| m.kind())
        .collect();
    assert_eq!(kinds, vec![MessageKind::Text, MessageKind::QuickReply]);

    let dialog = response.dialog_context("room").expect("dialog context");
    assert_eq!(dialog.lifespan, Some(2));
    assert!(response.context("room").unwrap_err().is_not_found());
}

#[tokio::test]
async fn test_event_query_passes_lang_through() {
    let mut fixture = MockServerFixture::new().await;
    let mock = fixture
        .signed_mock("POST", "/query", &[])
        .match_body(Matcher::Json(json!({
            "event": {"name": "WELCOME", "data": {"user": "ada"}},
            "sessionId": "session-2",
            "lang": "fr"
        })))
        .with_status(200)
        .with_body(r#"{"sessionId":"session-2","status":{"code":200}}"#)
        .create_async()
        .await;

    let query = Query::event(Event::new("WELCOME").with_param("user", "ada"), "session-2")
        .with_lang("fr");
    let response = fixture.client().query(&query).await.expect("query failed");

    mock.assert_async().await;
    assert_eq!(response.session_id, "session-2");
    // sparse bodies decode with defaults
    assert!(response.result.contexts.is_empty());
    assert!(response.result.fulfillment.messages.is_empty());
}

#[tokio::test]
async fn test_shared_client_serves_concurrent_queries() {
    let mut fixture = MockServerFixture::new().await;
    let mock = fixture
        .signed_mock("POST", "/query", &[])
        .with_status(200)
        .with_body(query_response_body())
        .expect(2)
        .create_async()
        .await;

    let client = fixture.client();
    let other = client.clone();
    let first = Query::text("book a room", "session-1");
    let second = Query::text("book a room", "session-1");

    let (a, b) = tokio::join!(client.query(&first), other.query(&second));

    mock.assert_async().await;
    assert_eq!(a.unwrap(), b.unwrap());
}
