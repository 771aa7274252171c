//! Basic example: fetch and update the client account against the sandbox.
//!
//! This example shows how to:
//! - Create a client from environment configuration
//! - Read a single object
//! - Update an object
//! - Inspect the last recorded exchange
//!
//! Requires `MANGOPAY_CLIENT_ID` and `MANGOPAY_CLIENT_PASSWORD` (a `.env` file
//! works too).
//!
//! Run with: `cargo run --example basic_call`

use mangopay::entities::{ClientPutDto, CurrencyIso, FundsType};
use mangopay::{Client, Config, Error};

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_env_filter("mangopay=debug,basic_call=info")
        .init();

    let client = Client::new(Config::from_env()?)?;

    println!("=== Client account ===");
    let me = client.clients().get().await?;
    println!("Name: {:?}", me.name);
    println!("Theme colour: {:?}", me.primary_theme_colour);
    println!();

    println!("=== Update ===");
    let update = ClientPutDto {
        primary_theme_colour: me.primary_theme_colour.clone(),
        platform_description: Some("Updated from the Rust client".to_string()),
        ..Default::default()
    };
    let updated = client.clients().save(&update).await?;
    println!("Description: {:?}", updated.platform_description);
    println!();

    println!("=== Fees wallet ===");
    let wallet = client
        .clients()
        .wallet(FundsType::Fees, CurrencyIso::Eur)
        .await?;
    println!("{:?}: {} {:?}", wallet.id, wallet.balance.amount, wallet.balance.currency);
    println!();

    if let Some(exchange) = client.last_exchange() {
        println!("=== Last exchange ===");
        println!("{} {}", exchange.request.method, exchange.request.url);
        println!("Latency: {:?}", exchange.latency);
        println!("Calls remaining: {:?}", exchange.rate_limit.remaining_calls());
        println!("Window resets at: {:?}", exchange.rate_limit.reset_at());
    }

    Ok(())
}
