//! Mock HTTP server setup for integration tests

use apiai_rust::Client;
use mockito::{Matcher, Mock, Server, ServerGuard};

pub const TEST_KEY: &str = "test-client-token";
pub const TEST_VERSION: &str = "20150910";

/// Test fixture that owns a mock server and builds clients pointed at it
pub struct MockServerFixture {
    pub server: ServerGuard,
    pub base_url: String,
}

impl MockServerFixture {
    pub async fn new() -> Self {
        let server = Server::new_async().await;
        let base_url = server.url();
        Self { server, base_url }
    }

    /// Client that talks to the mock server with the test key
    pub fn client(&self) -> Client {
        Client::builder()
            .api_key(TEST_KEY)
            .base_url(&self.base_url)
            .build()
            .expect("failed to build test client")
    }

    /// Mock that only matches signed JSON requests carrying the API version
    /// plus the given extra query parameters
    pub fn signed_mock(&mut self, method: &str, path: &str, params: &[(&str, &str)]) -> Mock {
        let mut query = vec![Matcher::UrlEncoded("v".into(), TEST_VERSION.into())];
        query.extend(
            params
                .iter()
                .map(|(k, v)| Matcher::UrlEncoded(k.to_string(), v.to_string())),
        );

        self.server
            .mock(method, path)
            .match_query(Matcher::AllOf(query))
            .match_header("authorization", format!("Bearer {}", TEST_KEY).as_str())
            .match_header("content-type", "application/json")
    }

    /// Create a mock for a JSON response
    pub async fn mock_json_response(
        &mut self,
        method: &str,
        path: &str,
        params: &[(&str, &str)],
        status: usize,
        body: &str,
    ) -> Mock {
        self.signed_mock(method, path, params)
            .with_status(status)
            .with_header("content-type", "application/json")
            .with_body(body)
            .create_async()
            .await
    }
}

pub fn query_response_body() -> String {
    serde_json::json!({
        "id": "3622be70-cb49-4796-a4fa-71f16f7b5600",
        "timestamp": "2017-09-19T21:16:44.832Z",
        "sessionId": "session-1",
        "result": {
            "source": "agent",
            "resolvedQuery": "book a room",
            "action": "room.reservation",
            "actionIncomplete": true,
            "parameters": {"guests": "", "date": "2017-09-20"},
            "contexts": [
                {"name": "room_dialog_context", "parameters": {"date": "2017-09-20"}, "lifespan": 2},
                {"name": "booking", "parameters": {}, "lifespan": 5}
            ],
            "metadata": {
                "intentId": "9f41ef7c-82fa-42a7-9a30-49a93e2c14d0",
                "webhookUsed": "false",
                "intentName": "room.reservation"
            },
            "fulfillment": {
                "speech": "How many guests?",
                "messages": [
                    {"type": 0, "speech": "How many guests?"},
                    {"type": 2, "platform": "telegram", "title": "Guests", "replies": ["1", "2", "3"]}
                ]
            },
            "score": 0.87
        },
        "status": {"code": 200, "errorType": "success"}
    })
    .to_string()
}
