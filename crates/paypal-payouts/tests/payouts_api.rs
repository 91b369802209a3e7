//! End-to-end tests of the payouts resource against a local mock server.

use std::collections::HashMap;

use paypal_payouts::{
    ApiContext, BatchStatus, ClientConfig, Currency, DefaultPayPalClient, Payout, PayoutItem,
    PayoutSenderBatchHeader, RecipientType, TransactionStatus,
};
use serde_json::json;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_partial_json, header, method, path, query_param, query_param_is_missing},
};

fn client_for(server: &MockServer) -> DefaultPayPalClient {
    DefaultPayPalClient::new(&ClientConfig::new().with_base_url(server.uri())).unwrap()
}

fn sample_payout() -> Payout {
    Payout::with_items(
        PayoutSenderBatchHeader::new()
            .with_sender_batch_id("2014021801")
            .with_email_subject("You have a Payout!")
            .with_recipient_type(RecipientType::Email),
        vec![
            PayoutItem::new("receiver@example.com", Currency::new("USD", "9.87"))
                .with_note("Thanks for your patronage!")
                .with_sender_item_id("201403140001"),
        ],
    )
}

fn batch_body(status: &str) -> serde_json::Value {
    json!({
        "batch_header": {
            "payout_batch_id": "12345678",
            "batch_status": status,
            "time_created": "2014-09-10T13:12:32Z",
            "sender_batch_header": {"sender_batch_id": "2014021801", "email_subject": "You have a Payout!"},
            "amount": {"currency": "USD", "value": "9.87"},
            "fees": {"currency": "USD", "value": "0.25"}
        },
        "items": [{
            "payout_item_id": "VHBFGN95AWV82",
            "transaction_id": "0C413693MN970190K",
            "transaction_status": "SUCCESS",
            "payout_batch_id": "12345678",
            "payout_item": {
                "recipient_type": "EMAIL",
                "amount": {"currency": "USD", "value": "9.87"},
                "receiver": "receiver@example.com",
                "sender_item_id": "201403140001"
            }
        }],
        "links": [{
            "href": "https://api.sandbox.paypal.com/v1/payments/payouts/12345678",
            "rel": "self",
            "method": "GET"
        }]
    })
}

#[tokio::test]
async fn create_synchronous_posts_batch_with_sync_mode() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/payments/payouts"))
        .and(query_param("sync_mode", "true"))
        .and(header("Authorization", "Bearer A21AA-test"))
        .and(header("Content-Type", "application/json"))
        .and(body_partial_json(json!({
            "sender_batch_header": {"sender_batch_id": "2014021801"},
            "items": [{"receiver": "receiver@example.com", "amount": {"value": "9.87"}}]
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(batch_body("SUCCESS")))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let batch = sample_payout()
        .create_synchronous(&client, &ApiContext::new("A21AA-test"))
        .await
        .unwrap();

    assert_eq!(batch.payout_batch_id(), "12345678");
    assert_eq!(batch.batch_header.batch_status, BatchStatus::Success);
    assert_eq!(
        batch.items[0].transaction_status,
        Some(TransactionStatus::Success)
    );
    assert_eq!(
        Payout::last_request(&client),
        Some(sample_payout().to_json().unwrap())
    );
}

#[tokio::test]
async fn create_without_sync_mode_omits_query() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/payments/payouts"))
        .and(query_param_is_missing("sync_mode"))
        .respond_with(ResponseTemplate::new(201).set_body_json(batch_body("PENDING")))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let batch = sample_payout()
        .create_with_token(&client, "A21AA-test", &HashMap::new())
        .await
        .unwrap();

    assert_eq!(batch.batch_header.batch_status, BatchStatus::Pending);
}

#[tokio::test]
async fn request_id_is_forwarded() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/payments/payouts"))
        .and(header("PayPal-Request-Id", "idem-001"))
        .respond_with(ResponseTemplate::new(201).set_body_json(batch_body("PENDING")))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let ctx = ApiContext::new("A21AA-test").with_request_id("idem-001");
    sample_payout()
        .create(&client, &ctx, &HashMap::new())
        .await
        .unwrap();
}

#[tokio::test]
async fn get_fetches_batch_by_id() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/payments/payouts/12345678"))
        .and(header("Authorization", "Bearer A21AA-test"))
        .respond_with(ResponseTemplate::new(200).set_body_json(batch_body("PROCESSING")))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let batch = Payout::get_with_token(&client, "A21AA-test", "12345678")
        .await
        .unwrap();

    assert_eq!(batch.batch_header.batch_status, BatchStatus::Processing);
    assert_eq!(batch.link("self").unwrap().rel, "self");
    assert!(Payout::last_response(&client).unwrap().contains("PROCESSING"));
}

#[tokio::test]
async fn validation_error_is_reported() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/payments/payouts"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "name": "VALIDATION_ERROR",
            "message": "Invalid request - see details",
            "debug_id": "b1f3c2a0e9d8",
            "information_link": "https://developer.paypal.com/docs/api/payments.payouts-batch/#errors",
            "details": [{"field": "items[0].receiver", "issue": "Receiver is invalid or does not match with type"}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = sample_payout()
        .create_synchronous(&client, &ApiContext::new("A21AA-test"))
        .await
        .unwrap_err();

    assert_eq!(err.status(), Some(400));
    assert_eq!(err.error_name(), Some("VALIDATION_ERROR"));
    assert!(err.to_string().contains("items[0].receiver"));
}

#[tokio::test]
async fn blank_token_never_reaches_the_server() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = Payout::get(&client, &ApiContext::new("  "), "12345678")
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "AccessToken cannot be null or empty");
}
