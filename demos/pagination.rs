//! Walks every page of the client's transactions.
//!
//! Run with: `cargo run --example pagination`

use mangopay::apis::FilterTransactions;
use mangopay::{Client, Config, Error, Pagination, Sort, SortDirection};

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_env_filter("mangopay=info")
        .init();

    let client = Client::new(Config::from_env()?)?;
    let filter = FilterTransactions {
        status: Some("SUCCEEDED".to_string()),
        ..Default::default()
    };
    let sort = Sort::by("CreationDate", SortDirection::Desc);

    let mut page = Pagination::new(1, 25)?;
    loop {
        let transactions = client
            .clients()
            .transactions(Some(&page), &filter, Some(&sort))
            .await?;

        println!(
            "Page {}/{} ({} items total)",
            page.page(),
            transactions.pagination.total_pages,
            transactions.pagination.total_items
        );
        for tx in transactions.iter() {
            println!(
                "  {:?} {:?} {:?}",
                tx.id,
                tx.transaction_type,
                tx.debited_funds.as_ref().map(|m| m.amount)
            );
        }

        if !transactions.has_next() {
            break;
        }
        page = page.next_page();
    }

    Ok(())
}
