//! Integration tests for error mapping

use crate::mock_server::MockServerFixture;
use apiai_rust::{Client, Error, Message, MessageKind, Query};

#[tokio::test]
async fn test_non_2xx_surfaces_status_and_body_verbatim() {
    for (status, body) in [
        (400usize, r#"{"status":{"code":400,"errorType":"bad_request","errorDetails":"Invalid lang"}}"#),
        (401, r#"{"status":{"code":401,"errorType":"unauthorized"}}"#),
        (429, "slow down"),
        (503, ""),
    ] {
        let mut fixture = MockServerFixture::new().await;
        let _mock = fixture
            .mock_json_response("POST", "/query", &[], status, body)
            .await;

        let err = fixture
            .client()
            .query(&Query::text("hi", "session-1"))
            .await
            .unwrap_err();

        match &err {
            Error::Api {
                status: got,
                body: got_body,
            } => {
                assert_eq!(*got as usize, status);
                assert_eq!(got_body, body);
            }
            other => panic!("expected Api error for {status}, got {other:?}"),
        }
        assert!(err.to_string().contains(&status.to_string()));
        assert!(err.to_string().contains(body));
    }
}

#[tokio::test]
async fn test_malformed_body_is_decode_error() {
    let mut fixture = MockServerFixture::new().await;
    let _mock = fixture
        .mock_json_response("POST", "/query", &[], 200, "<html>gateway</html>")
        .await;

    let err = fixture
        .client()
        .query(&Query::text("hi", "session-1"))
        .await
        .unwrap_err();

    match err {
        Error::Decode { context, .. } => assert_eq!(context.source.as_deref(), Some("query")),
        other => panic!("expected Decode error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_unknown_message_type_decodes_as_unknown() {
    let mut fixture = MockServerFixture::new().await;
    let _mock = fixture
        .mock_json_response(
            "POST",
            "/query",
            &[],
            200,
            r#"{"result":{"fulfillment":{"speech":"ok","messages":[{"type":0,"speech":"ok"},{"type":42,"platform":"kiosk","layout":"grid"}]}}}"#,
        )
        .await;

    let response = fixture
        .client()
        .query(&Query::text("hi", "session-1"))
        .await
        .expect("unknown message type should not fail the query");

    let messages = &response.result.fulfillment.messages;
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0].kind(), MessageKind::Text);
    match &messages[1] {
        Message::Unknown {
            kind,
            platform,
            raw,
        } => {
            assert_eq!(*kind, 42);
            assert_eq!(platform.as_deref(), Some("kiosk"));
            assert_eq!(raw["layout"], "grid");
        }
        other => panic!("expected Unknown message, got {other:?}"),
    }
}

#[tokio::test]
async fn test_null_lists_do_not_fail_the_query() {
    let mut fixture = MockServerFixture::new().await;
    let _mock = fixture
        .mock_json_response(
            "POST",
            "/query",
            &[],
            200,
            r#"{"result":{"contexts":null,"fulfillment":{"speech":"hi","messages":null}}}"#,
        )
        .await;

    let response = fixture
        .client()
        .query(&Query::text("hi", "session-1"))
        .await
        .expect("null lists should decode as empty");

    assert!(response.result.contexts.is_empty());
    assert!(response.result.fulfillment.messages.is_empty());
    assert_eq!(response.result.fulfillment.speech, "hi");
}

#[tokio::test]
async fn test_connection_failure_is_transport_error() {
    // Grab a free port, then release it so nothing is listening there.
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);

    let client = Client::builder()
        .api_key("k")
        .base_url(format!("http://127.0.0.1:{port}"))
        .build()
        .unwrap();

    let err = client.context("session-1", "booking").await.unwrap_err();

    assert!(matches!(err, Error::Transport(_)), "got {err:?}");
}
