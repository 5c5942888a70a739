//! Basic authentication example.
//!
//! Logs in with credentials from the environment and prints the
//! accounts' balances.
//!
//! Run with: cargo run --example basic_auth

use wstrade_rs::WsTradeClient;

#[tokio::main]
async fn main() -> wstrade_rs::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let email = std::env::var("WSTRADE_EMAIL")
        .expect("WSTRADE_EMAIL environment variable required");
    let password = std::env::var("WSTRADE_PASSWORD")
        .expect("WSTRADE_PASSWORD environment variable required");

    println!("Connecting to Wealthsimple Trade...");
    let client = WsTradeClient::connect(email, password).await?;
    println!("Successfully authenticated!");

    let accounts = client.accounts().list().await?;
    println!("\nFound {} account(s):", accounts.len());

    for account in &accounts {
        println!(
            "  - {} ({})",
            account.id,
            account.account_type.as_deref().unwrap_or("unknown type")
        );
        if let Some(balance) = &account.current_balance {
            println!("    Balance: {} {}", balance.amount, balance.currency.as_deref().unwrap_or(""));
        }
        if let Some(buying_power) = &account.buying_power {
            println!("    Buying power: {}", buying_power.amount);
        }
    }

    println!("\nDone!");
    Ok(())
}
