//! Order placement example.
//!
//! Resolves a ticker to a security id, shows the live quote, and places a
//! one-share limit buy well under the market so it will not fill.
//!
//! Run with: cargo run --example place_order

use rust_decimal_macros::dec;
use wstrade_rs::{Credentials, WsTradeClient};

#[tokio::main]
async fn main() -> wstrade_rs::Result<()> {
    tracing_subscriber::fmt::init();

    let email = std::env::var("WSTRADE_EMAIL")
        .expect("WSTRADE_EMAIL environment variable required");
    let password = std::env::var("WSTRADE_PASSWORD")
        .expect("WSTRADE_PASSWORD environment variable required");

    let client = WsTradeClient::new(Default::default())?;
    client.login(&Credentials::new(email, password)).await?;

    let account_ids = client.accounts().ids().await?;
    let account = account_ids.first().expect("at least one account");

    let security_id = client
        .securities()
        .id_for_symbol("VEQT")
        .await?
        .expect("unambiguous VEQT listing");

    let security = client.securities().get(&security_id).await?;
    println!(
        "VEQT ({}) quoted at {:?}",
        security_id,
        security.quoted_amount()
    );

    let order = client
        .orders()
        .limit_buy(account, &security_id, 1, dec!(1.00))
        .await?;
    println!("Placed order {}: {:?}", order.id, order.status);

    for order in client.orders().list(Some("VEQT")).await? {
        println!("  open VEQT order: {} {:?}", order.id, order.status);
    }

    Ok(())
}
