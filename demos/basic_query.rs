//! Basic usage: one query, then a context round trip.
//!
//! The client access token is read from APIAI_CLIENT_ACCESS_TOKEN.
//!
//! Usage:
//!   APIAI_CLIENT_ACCESS_TOKEN=your_token RUST_LOG=apiai_rust=debug \
//!     cargo run --example basic_query -- "book a table for two"

use anyhow::Context as _;
use apiai_rust::{ClientBuilder, Query};
use serde_json::json;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let text = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "hello".to_string());
    let session_id = format!("demo-{}", std::process::id());

    let client = ClientBuilder::from_env()
        .build()
        .context("building client")?;

    let response = client
        .query(&Query::text(text, &session_id))
        .await
        .context("query failed")?;

    println!("intent: {}", response.result.metadata.intent_name);
    println!("speech: {}", response.result.fulfillment.speech);
    for message in &response.result.fulfillment.messages {
        println!("  [{:?}] {:?}", message.kind(), message.speech());
    }

    client
        .set_context(&session_id, "demo", &json!({"source": "basic_query"}))
        .await
        .context("set_context failed")?;

    match client.context(&session_id, "demo").await {
        Ok(ctx) => println!("context demo: {}", ctx.parameters),
        Err(e) if e.is_not_found() => println!("context demo already expired"),
        Err(e) => return Err(e.into()),
    }

    Ok(())
}
