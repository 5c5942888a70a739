//! Integration tests for wstrade-rs.
//!
//! Every test drives the real client against a scripted mock server, so
//! the full stack (dispatch, auth handshake, envelope unwrapping,
//! client-side filtering) is exercised without live credentials.
//!
//! Run with: cargo test --test client_tests

use std::sync::Arc;

use rust_decimal_macros::dec;
use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use wstrade_rs::prelude::*;

const TEST_TOKEN: &str = "access-token-0001";

/// Build a client pointed at the mock server.
fn client_for(server: &MockServer) -> WsTradeClient {
    let config = ClientConfig::default().with_base_url(format!("{}/", server.uri()));
    WsTradeClient::new(config).expect("client should build")
}

fn credentials() -> Credentials {
    Credentials::new("user@example.com", "hunter2")
}

/// A login response carrying the access-token header.
fn login_ok() -> ResponseTemplate {
    ResponseTemplate::new(200)
        .insert_header("X-Access-Token", TEST_TOKEN)
        .set_body_json(json!({}))
}

/// Mount a happy-path login mock and authenticate a fresh client.
async fn authenticated_client(server: &MockServer) -> WsTradeClient {
    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(login_ok())
        .named("login")
        .mount(server)
        .await;

    let client = client_for(server);
    client
        .login(&credentials())
        .await
        .expect("login should succeed");
    client
}

// ============================================================================
// AUTHENTICATION
// ============================================================================

mod auth_tests {
    use super::*;

    #[tokio::test]
    async fn test_missing_credentials_fail_before_any_request() {
        let server = MockServer::start().await;
        let client = client_for(&server);

        for (email, password) in [("", "hunter2"), ("user@example.com", ""), ("", "")] {
            let err = client
                .login(&Credentials::new(email, password))
                .await
                .unwrap_err();
            assert!(matches!(err, Error::MissingCredentials));
        }

        let requests = server.received_requests().await.unwrap();
        assert!(requests.is_empty(), "no network call should be made");
    }

    #[tokio::test]
    async fn test_login_stores_token_for_subsequent_gets() {
        let server = MockServer::start().await;
        let client = authenticated_client(&server).await;
        assert!(client.is_authenticated().await);

        // The stored token must be attached, fresh, to the next GET.
        Mock::given(method("GET"))
            .and(path("/account/list"))
            .and(header("Authorization", TEST_TOKEN))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({ "results": [{ "id": "tfsa-abc123" }] })),
            )
            .expect(1)
            .mount(&server)
            .await;

        let accounts = client.accounts().list().await.unwrap();
        assert_eq!(accounts.len(), 1);
        assert_eq!(accounts[0].id, AccountId::new("tfsa-abc123"));
    }

    #[tokio::test]
    async fn test_unauthorized_login_is_invalid_credentials() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/auth/login"))
            .respond_with(ResponseTemplate::new(401).set_body_json(json!({})))
            .mount(&server)
            .await;

        let err = client_for(&server).login(&credentials()).await.unwrap_err();
        assert!(matches!(err, Error::InvalidCredentials));
    }

    #[tokio::test]
    async fn test_challenge_without_provider_never_retries() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/auth/login"))
            .respond_with(
                ResponseTemplate::new(401).insert_header("x-wealthsimple-otp", "required"),
            )
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server);
        let err = client.login(&credentials()).await.unwrap_err();
        assert!(matches!(err, Error::MissingTwoFactorHandler));
        assert!(!client.is_authenticated().await);

        let requests = server.received_requests().await.unwrap();
        assert_eq!(requests.len(), 1, "no second login attempt");
    }

    #[tokio::test]
    async fn test_challenge_resolved_through_provider() {
        let server = MockServer::start().await;

        // First attempt: challenged. The mock is consumed so the retry
        // falls through to the one below.
        Mock::given(method("POST"))
            .and(path("/auth/login"))
            .respond_with(
                ResponseTemplate::new(401).insert_header("x-wealthsimple-otp", "required"),
            )
            .up_to_n_times(1)
            .mount(&server)
            .await;

        // Second attempt must resubmit the credentials with the code.
        Mock::given(method("POST"))
            .and(path("/auth/login"))
            .and(body_partial_json(json!({
                "email": "user@example.com",
                "otp": "123456"
            })))
            .respond_with(login_ok())
            .expect(1)
            .mount(&server)
            .await;

        let config = ClientConfig::default().with_base_url(format!("{}/", server.uri()));
        let client =
            WsTradeClient::with_two_factor(config, Arc::new(|| "123456".to_string())).unwrap();

        client.login(&credentials()).await.unwrap();
        assert!(client.is_authenticated().await);
    }

    #[tokio::test]
    async fn test_two_step_login_protocol() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/auth/login"))
            .respond_with(
                ResponseTemplate::new(401).insert_header("x-wealthsimple-otp", "required"),
            )
            .up_to_n_times(1)
            .mount(&server)
            .await;

        Mock::given(method("POST"))
            .and(path("/auth/login"))
            .and(body_partial_json(json!({ "otp": "654321" })))
            .respond_with(login_ok())
            .mount(&server)
            .await;

        let client = client_for(&server);
        let challenge = match client.begin_login(&credentials()).await.unwrap() {
            LoginFlow::ChallengeRequired(challenge) => challenge,
            LoginFlow::Complete => panic!("expected a challenge"),
        };
        assert!(!client.is_authenticated().await);

        client.complete_login(challenge, "654321").await.unwrap();
        assert!(client.is_authenticated().await);
    }

    #[tokio::test]
    async fn test_wrong_code_on_second_attempt_is_invalid_credentials() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/auth/login"))
            .respond_with(
                ResponseTemplate::new(401).insert_header("x-wealthsimple-otp", "required"),
            )
            .up_to_n_times(1)
            .mount(&server)
            .await;

        Mock::given(method("POST"))
            .and(path("/auth/login"))
            .respond_with(ResponseTemplate::new(401))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let challenge = match client.begin_login(&credentials()).await.unwrap() {
            LoginFlow::ChallengeRequired(challenge) => challenge,
            LoginFlow::Complete => panic!("expected a challenge"),
        };

        let err = client.complete_login(challenge, "000000").await.unwrap_err();
        assert!(matches!(err, Error::InvalidCredentials));
    }

    #[tokio::test]
    async fn test_success_without_token_header_is_rejected() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/auth/login"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
            .mount(&server)
            .await;

        let err = client_for(&server).login(&credentials()).await.unwrap_err();
        assert!(matches!(err, Error::Authentication(_)));
    }
}

// ============================================================================
// ACCOUNTS
// ============================================================================

mod accounts_tests {
    use super::*;

    #[tokio::test]
    async fn test_get_account_scans_for_exact_id() {
        let server = MockServer::start().await;
        let client = authenticated_client(&server).await;

        Mock::given(method("GET"))
            .and(path("/account/list"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "results": [{ "id": "a1" }, { "id": "a2" }]
            })))
            .mount(&server)
            .await;

        let account = client.accounts().get(&AccountId::new("a2")).await.unwrap();
        assert_eq!(account.id, AccountId::new("a2"));

        let err = client
            .accounts()
            .get(&AccountId::new("zzz"))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::AccountNotFound(id) if id == "zzz"));
    }

    #[tokio::test]
    async fn test_ids_projects_the_account_list() {
        let server = MockServer::start().await;
        let client = authenticated_client(&server).await;

        Mock::given(method("GET"))
            .and(path("/account/list"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "results": [{ "id": "tfsa-1" }, { "id": "rrsp-2" }]
            })))
            .mount(&server)
            .await;

        let ids = client.accounts().ids().await.unwrap();
        assert_eq!(ids, vec![AccountId::new("tfsa-1"), AccountId::new("rrsp-2")]);
    }

    #[tokio::test]
    async fn test_history_decodes_snapshots() {
        let server = MockServer::start().await;
        let client = authenticated_client(&server).await;

        Mock::given(method("GET"))
            .and(path("/account/history/1m"))
            .and(query_param("account_id", "tfsa-abc123"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "results": [
                    { "date": "2024-03-01", "value": { "amount": "105.50", "currency": "CAD" } }
                ],
                "start": "2024-03-01"
            })))
            .mount(&server)
            .await;

        let history = client
            .accounts()
            .history(&AccountId::new("tfsa-abc123"), HistoryPeriod::Month)
            .await
            .unwrap();
        assert_eq!(history.results.len(), 1);
        assert_eq!(
            history.results[0].value.as_ref().unwrap().amount,
            dec!(105.50)
        );
    }

    #[tokio::test]
    async fn test_history_record_not_found_body_is_an_error() {
        let server = MockServer::start().await;
        let client = authenticated_client(&server).await;

        // The service reports an unknown account inside a 200 body.
        Mock::given(method("GET"))
            .and(path("/account/history/all"))
            .and(query_param("account_id", "zzz"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({ "error": "Record not found" })),
            )
            .mount(&server)
            .await;

        let err = client
            .accounts()
            .history(&AccountId::new("zzz"), HistoryPeriod::All)
            .await
            .unwrap_err();
        assert!(matches!(err, Error::AccountNotFound(id) if id == "zzz"));
    }

    #[tokio::test]
    async fn test_positions_unwrap_results() {
        let server = MockServer::start().await;
        let client = authenticated_client(&server).await;

        Mock::given(method("GET"))
            .and(path("/account/positions"))
            .and(query_param("account_id", "tfsa-abc123"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "results": [{
                    "id": "sec-s-1",
                    "quantity": 12,
                    "stock": { "symbol": "VEQT" }
                }]
            })))
            .mount(&server)
            .await;

        let positions = client
            .accounts()
            .positions(&AccountId::new("tfsa-abc123"))
            .await
            .unwrap();
        assert_eq!(positions.len(), 1);
        assert_eq!(positions[0].quantity, Some(dec!(12)));
        assert_eq!(
            positions[0].stock.as_ref().unwrap().symbol.as_str(),
            "VEQT"
        );
    }

    #[tokio::test]
    async fn test_activities_unwrap_results() {
        let server = MockServer::start().await;
        let client = authenticated_client(&server).await;

        Mock::given(method("GET"))
            .and(path("/account/activities"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "results": [
                    { "id": "activity-1", "object": "deposit" },
                    { "id": "activity-2", "object": "order" }
                ]
            })))
            .mount(&server)
            .await;

        let activities = client.accounts().activities().await.unwrap();
        assert_eq!(activities.len(), 2);
        assert_eq!(activities[1].object.as_deref(), Some("order"));
    }
}

// ============================================================================
// ORDERS
// ============================================================================

mod orders_tests {
    use super::*;

    fn orders_body() -> serde_json::Value {
        json!({
            "results": [
                { "id": "order-1", "symbol": "AAPL" },
                { "id": "order-2", "symbol": "VEQT" },
                { "id": "order-3", "symbol": "AAPL" },
                { "id": "order-4", "symbol": "aapl" }
            ]
        })
    }

    #[tokio::test]
    async fn test_list_without_symbol_returns_everything() {
        let server = MockServer::start().await;
        let client = authenticated_client(&server).await;

        Mock::given(method("GET"))
            .and(path("/orders"))
            .respond_with(ResponseTemplate::new(200).set_body_json(orders_body()))
            .mount(&server)
            .await;

        let orders = client.orders().list(None).await.unwrap();
        assert_eq!(orders.len(), 4);
    }

    #[tokio::test]
    async fn test_list_filters_by_exact_symbol() {
        let server = MockServer::start().await;
        let client = authenticated_client(&server).await;

        Mock::given(method("GET"))
            .and(path("/orders"))
            .respond_with(ResponseTemplate::new(200).set_body_json(orders_body()))
            .mount(&server)
            .await;

        // Exact and case-sensitive: "aapl" does not match.
        let orders = client.orders().list(Some("AAPL")).await.unwrap();
        assert_eq!(orders.len(), 2);
        assert!(orders
            .iter()
            .all(|o| o.symbol.as_ref().map(|s| s.as_str()) == Some("AAPL")));
    }

    #[tokio::test]
    async fn test_market_buy_pegs_limit_price_to_quote() {
        let server = MockServer::start().await;
        let client = authenticated_client(&server).await;

        Mock::given(method("GET"))
            .and(path("/securities/sec-s-1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": "sec-s-1",
                "quote": { "amount": "187.44" }
            })))
            .expect(1)
            .mount(&server)
            .await;

        Mock::given(method("POST"))
            .and(path("/orders"))
            .and(body_partial_json(json!({
                "account_id": "tfsa-abc123",
                "security_id": "sec-s-1",
                "quantity": 5,
                "limit_price": "187.44",
                "order_type": "buy_quantity",
                "order_sub_type": "market",
                "time_in_force": "day"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "results": { "id": "order-9", "status": "submitted" }
            })))
            .expect(1)
            .mount(&server)
            .await;

        let order = client
            .orders()
            .market_buy(&AccountId::new("tfsa-abc123"), &SecurityId::new("sec-s-1"), 5)
            .await
            .unwrap();
        assert_eq!(order.id, OrderId::new("order-9"));
        assert_eq!(order.status, Some(OrderStatus::Submitted));
    }

    #[tokio::test]
    async fn test_market_order_without_quote_never_submits() {
        let server = MockServer::start().await;
        let client = authenticated_client(&server).await;

        Mock::given(method("GET"))
            .and(path("/securities/sec-s-1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": "sec-s-1",
                "quote": {}
            })))
            .mount(&server)
            .await;

        Mock::given(method("POST"))
            .and(path("/orders"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let err = client
            .orders()
            .market_sell(&AccountId::new("tfsa-abc123"), &SecurityId::new("sec-s-1"), 5)
            .await
            .unwrap_err();
        assert!(matches!(err, Error::QuoteUnavailable { security_id } if security_id == "sec-s-1"));
    }

    #[tokio::test]
    async fn test_limit_sell_sends_callers_price() {
        let server = MockServer::start().await;
        let client = authenticated_client(&server).await;

        Mock::given(method("POST"))
            .and(path("/orders"))
            .and(body_partial_json(json!({
                "limit_price": "250.00",
                "order_type": "sell_quantity",
                "order_sub_type": "limit"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "results": { "id": "order-12" }
            })))
            .expect(1)
            .mount(&server)
            .await;

        client
            .orders()
            .limit_sell(
                &AccountId::new("tfsa-abc123"),
                &SecurityId::new("sec-s-1"),
                3,
                dec!(250.00),
            )
            .await
            .unwrap();
    }
}

// ============================================================================
// SECURITIES
// ============================================================================

mod securities_tests {
    use super::*;

    async fn mount_search(server: &MockServer, symbol: &str, body: serde_json::Value) {
        Mock::given(method("GET"))
            .and(path("/securities"))
            .and(query_param("query", symbol))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(server)
            .await;
    }

    #[tokio::test]
    async fn test_id_for_symbol_single_match() {
        let server = MockServer::start().await;
        let client = authenticated_client(&server).await;

        mount_search(
            &server,
            "AAPL",
            json!({
                "results": [{ "id": "sec-s-1", "stock": { "symbol": "AAPL" } }],
                "total_count": 1
            }),
        )
        .await;

        let id = client.securities().id_for_symbol("AAPL").await.unwrap();
        assert_eq!(id, Some(SecurityId::new("sec-s-1")));
    }

    #[tokio::test]
    async fn test_id_for_symbol_no_match() {
        let server = MockServer::start().await;
        let client = authenticated_client(&server).await;

        mount_search(&server, "ZZZZ", json!({ "results": [], "total_count": 0 })).await;

        let id = client.securities().id_for_symbol("ZZZZ").await.unwrap();
        assert_eq!(id, None);
    }

    #[tokio::test]
    async fn test_id_for_symbol_ambiguous_match() {
        let server = MockServer::start().await;
        let client = authenticated_client(&server).await;

        mount_search(
            &server,
            "APT",
            json!({
                "results": [{ "id": "sec-s-1" }, { "id": "sec-s-2" }],
                "total_count": 2
            }),
        )
        .await;

        let id = client.securities().id_for_symbol("APT").await.unwrap();
        assert_eq!(id, None);
    }

    #[tokio::test]
    async fn test_search_returns_every_match() {
        let server = MockServer::start().await;
        let client = authenticated_client(&server).await;

        mount_search(
            &server,
            "APT",
            json!({
                "results": [{ "id": "sec-s-1" }, { "id": "sec-s-2" }],
                "total_count": 2
            }),
        )
        .await;

        let securities = client.securities().search("APT").await.unwrap();
        assert_eq!(securities.len(), 2);
    }

    #[tokio::test]
    async fn test_get_security_by_id() {
        let server = MockServer::start().await;
        let client = authenticated_client(&server).await;

        Mock::given(method("GET"))
            .and(path("/securities/sec-s-1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": "sec-s-1",
                "stock": { "symbol": "AAPL", "name": "Apple Inc." },
                "quote": { "amount": "187.44" }
            })))
            .mount(&server)
            .await;

        let security = client
            .securities()
            .get(&SecurityId::new("sec-s-1"))
            .await
            .unwrap();
        assert_eq!(security.symbol().unwrap().as_str(), "AAPL");
        assert_eq!(security.quoted_amount(), Some(dec!(187.44)));
    }
}

// ============================================================================
// PROFILE & BANKING
// ============================================================================

mod profile_tests {
    use super::*;

    #[tokio::test]
    async fn test_me_and_person() {
        let server = MockServer::start().await;
        let client = authenticated_client(&server).await;

        Mock::given(method("GET"))
            .and(path("/me"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "email": "user@example.com",
                "canonical_id": "user-1"
            })))
            .mount(&server)
            .await;

        Mock::given(method("GET"))
            .and(path("/person"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "first_name": "Ada",
                "last_name": "Lovelace"
            })))
            .mount(&server)
            .await;

        let me = client.profile().me().await.unwrap();
        assert_eq!(me.email.as_deref(), Some("user@example.com"));

        let person = client.profile().person().await.unwrap();
        assert_eq!(person.first_name.as_deref(), Some("Ada"));
    }
}

mod banking_tests {
    use super::*;

    #[tokio::test]
    async fn test_bank_accounts_and_deposits_unwrap_results() {
        let server = MockServer::start().await;
        let client = authenticated_client(&server).await;

        Mock::given(method("GET"))
            .and(path("/bank-accounts"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "results": [{ "id": "bank_account-1", "institution_name": "EQ Bank" }]
            })))
            .mount(&server)
            .await;

        Mock::given(method("GET"))
            .and(path("/deposits"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "results": [{
                    "id": "funds_transfer-1",
                    "status": "accepted",
                    "value": { "amount": "500.00", "currency": "CAD" }
                }]
            })))
            .mount(&server)
            .await;

        let banks = client.banking().bank_accounts().await.unwrap();
        assert_eq!(banks[0].institution_name.as_deref(), Some("EQ Bank"));

        let deposits = client.banking().deposits().await.unwrap();
        assert_eq!(deposits[0].value.as_ref().unwrap().amount, dec!(500.00));
    }

    #[tokio::test]
    async fn test_forex_passes_the_document_through() {
        let server = MockServer::start().await;
        let client = authenticated_client(&server).await;

        Mock::given(method("GET"))
            .and(path("/forex"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "USD": { "buy_rate": 1.376, "sell_rate": 1.355 }
            })))
            .mount(&server)
            .await;

        let rates = client.banking().forex().await.unwrap();
        assert_eq!(rates["USD"]["buy_rate"], 1.376);
    }
}

// ============================================================================
// ERROR SURFACE
// ============================================================================

mod error_tests {
    use super::*;

    #[tokio::test]
    async fn test_expired_session_surfaces_as_unauthorized_api_error() {
        let server = MockServer::start().await;
        let client = authenticated_client(&server).await;

        Mock::given(method("GET"))
            .and(path("/orders"))
            .respond_with(
                ResponseTemplate::new(401).set_body_json(json!({ "error": "Not authorized" })),
            )
            .mount(&server)
            .await;

        let err = client.orders().list(None).await.unwrap_err();
        assert!(err.is_unauthorized());
        assert_eq!(err.api_message(), Some("Not authorized"));
    }

    #[tokio::test]
    async fn test_server_error_carries_status_and_body() {
        let server = MockServer::start().await;
        let client = authenticated_client(&server).await;

        Mock::given(method("GET"))
            .and(path("/account/list"))
            .respond_with(
                ResponseTemplate::new(503).set_body_json(json!({ "error": "maintenance" })),
            )
            .mount(&server)
            .await;

        let err = client.accounts().list().await.unwrap_err();
        assert!(err.is_server_error());
        assert!(matches!(err, Error::Api { status: 503, .. }));
    }

    #[tokio::test]
    async fn test_unauthenticated_get_sends_no_authorization_header() {
        let server = MockServer::start().await;
        let client = client_for(&server);

        Mock::given(method("GET"))
            .and(path("/orders"))
            .respond_with(
                ResponseTemplate::new(401).set_body_json(json!({ "error": "Not authorized" })),
            )
            .mount(&server)
            .await;

        let err = client.orders().list(None).await.unwrap_err();
        assert!(err.is_unauthorized());

        let requests = server.received_requests().await.unwrap();
        assert!(requests[0].headers.get("authorization").is_none());
    }
}
