//! Blocking usage from synchronous code.
//!
//! Run with: `cargo run --example blocking`

use mangopay::entities::{FundsType, WalletDto};
use mangopay::endpoint::CLIENT_WALLETS_CREDIT;
use mangopay::{BlockingClient, Config, ListResult, RequestContext};

fn main() -> Result<(), mangopay::Error> {
    tracing_subscriber::fmt()
        .with_env_filter("mangopay=info")
        .init();

    let client = BlockingClient::from_config(Config::from_env()?)?;

    let me = client.block_on(client.client().clients().get())?;
    println!("Client: {:?}", me.name);

    let fees = client.block_on(client.client().clients().wallets(FundsType::Fees, None))?;
    println!("{} fees wallet(s)", fees.len());

    let credit: ListResult<WalletDto> =
        client.get_list(&CLIENT_WALLETS_CREDIT, &[], None, &RequestContext::default())?;
    for wallet in credit.iter() {
        println!("  {:?}: {}", wallet.id, wallet.balance.amount);
    }

    if let Some(exchange) = client.last_exchange() {
        println!("Last call took {:?}", exchange.latency);
    }

    Ok(())
}
