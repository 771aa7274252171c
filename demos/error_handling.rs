//! Example demonstrating error handling.
//!
//! This example shows how to:
//! - Tell authentication failures from other failing statuses
//! - Access the raw response body on errors
//! - Deal with deserialization failures
//! - Read the recorded exchange after a failure
//!
//! Run with: `cargo run --example error_handling`

use mangopay::endpoint::CLIENT_GET;
use mangopay::{Client, Config, Error};
use serde::Deserialize;
use std::time::Duration;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter("mangopay=info")
        .init();

    println!("=== Example 1: Rejected credentials ===");
    let bad_token = Client::builder()
        .client_id("demo-client")
        .bearer_token("not-a-real-token")?
        .build()?;

    match bad_token.clients().get().await {
        Ok(me) => println!("Unexpected success: {:?}", me.name),
        Err(Error::Authentication { body }) => {
            println!("Authentication failed!");
            println!("  Body: {}", body);
        }
        Err(Error::Response { status, body }) => {
            println!("HTTP Error!");
            println!("  Status: {}", status);
            println!("  Is client error (4xx): {}", status.is_client_error());
            println!("  Body: {}", body);
        }
        Err(e) => println!("Other error: {}", e),
    }

    if let Some(exchange) = bad_token.last_exchange() {
        println!("  Recorded request: {} {}", exchange.request.method, exchange.request.url);
        for (name, value) in &exchange.request.headers {
            println!("    {}: {}", name, value);
        }
    }
    println!();

    println!("=== Example 2: Schema mismatch ===");
    #[derive(Debug, Default, Deserialize)]
    #[allow(dead_code)]
    struct WrongSchema {
        #[serde(rename = "NonexistentField")]
        nonexistent_field: u64,
    }

    let client = Client::new(Config::from_env()?)?;
    match client.get_object::<WrongSchema>(&CLIENT_GET, &[]).await {
        Ok(_) => println!("Unexpected success"),
        Err(Error::DeserializationFailed {
            raw_response,
            serde_error,
            status,
        }) => {
            println!("Deserialization Failed!");
            println!("  Status: {}", status);
            println!("  Serde error: {}", serde_error);
            println!(
                "  Raw response (first 200 chars): {}",
                raw_response.chars().take(200).collect::<String>()
            );
        }
        Err(e) => println!("Other error: {}", e),
    }
    println!();

    println!("=== Example 3: Timeout ===");
    let impatient = Client::new(Config::from_env()?.with_timeout(Duration::from_millis(1)))?;
    match impatient.clients().get().await {
        Ok(_) => println!("Request completed within 1ms"),
        Err(e) if e.is_timeout() => {
            println!("Timed out: {}", e);
            let recorded = impatient.last_exchange().map(|x| x.response.is_some());
            println!("  Response recorded: {:?}", recorded);
        }
        Err(e) => println!("Other error: {}", e),
    }

    Ok(())
}
