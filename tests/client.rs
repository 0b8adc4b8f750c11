//
//  ynab-client
//  tests/client.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! End-to-end tests of the client against a local mock server.

use std::io;
use std::sync::Arc;

use async_trait::async_trait;
use mockito::{Matcher, Server, ServerGuard};
use serde_json::{json, Value};

use ynab_client::api::common::TransportError;
use ynab_client::api::models::{SaveMonthCategory, SaveTransaction, TransactionType};
use ynab_client::api::transport::{HttpRequest, HttpResponse};
use ynab_client::api::{ClientError, TransactionFilter, Transport, YnabClient};

const TOKEN: &str = "access-token";

async fn setup() -> (ServerGuard, YnabClient) {
    let server = Server::new_async().await;
    let client = YnabClient::new(TOKEN)
        .unwrap()
        .with_base_url(&format!("{}/v1", server.url()))
        .unwrap();
    (server, client)
}

#[tokio::test]
async fn returns_only_the_data_payload() {
    let (mut server, client) = setup().await;
    let mock = server
        .mock("GET", "/v1/user")
        .match_header("authorization", "Bearer access-token")
        .with_status(200)
        .with_header("content-type", "application/json; charset=utf-8")
        .with_body(r#"{"data": {"user": {"id": "u1"}}}"#)
        .create_async()
        .await;

    let data = client.user().await.unwrap();

    assert_eq!(data, json!({"user": {"id": "u1"}}));
    mock.assert_async().await;
}

#[tokio::test]
async fn not_found_is_an_api_error() {
    let (mut server, client) = setup().await;
    let mock = server
        .mock("GET", "/v1/budgets/missing/accounts")
        .with_status(404)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{"error": {"id": "404.2", "name": "resource_not_found", "detail": "Invalid URI"}}"#,
        )
        .create_async()
        .await;

    let err = client.accounts("missing", None).await.unwrap_err();

    match &err {
        ClientError::Api(api) => {
            assert_eq!(api.status, 404);
            assert_eq!(api.error_data["name"], "resource_not_found");
            assert_eq!(api.id(), Some("404.2"));
        }
        other => panic!("expected an API error, got {:?}", other),
    }
    assert_eq!(err.to_string(), "404 - Invalid URI");
    assert_eq!(err.status(), Some(404));
    mock.assert_async().await;
}

#[tokio::test]
async fn rate_limit_body_is_parsed_without_json_content_type() {
    let (mut server, client) = setup().await;
    server
        .mock("GET", "/v1/budgets")
        .with_status(429)
        .with_header("content-type", "application/octet-stream")
        .with_body(r#"{"error": {"id": "429", "name": "too_many_requests", "detail": "rate limit"}}"#)
        .create_async()
        .await;

    let err = client.budgets().await.unwrap_err();

    assert!(err.is_api());
    assert_eq!(err.to_string(), "429 - rate limit");
    if let ClientError::Api(api) = err {
        assert!(api.is_rate_limited());
    }
}

#[tokio::test]
async fn error_key_on_success_status_is_an_api_error() {
    let (mut server, client) = setup().await;
    server
        .mock("GET", "/v1/budgets/b1/settings")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"error": {"id": "400", "name": "bad_request", "detail": "Bad request"}}"#)
        .create_async()
        .await;

    let err = client.budget_settings("b1").await.unwrap_err();

    assert_eq!(err.status(), Some(200));
    assert_eq!(err.to_string(), "200 - Bad request");
}

#[tokio::test]
async fn unparseable_body_is_a_parse_error() {
    let (mut server, client) = setup().await;
    server
        .mock("GET", "/v1/user")
        .with_status(502)
        .with_header("content-type", "text/html")
        .with_body("<html>Bad Gateway</html>")
        .create_async()
        .await;

    let err = client.user().await.unwrap_err();

    assert!(err.is_parse());
    match err {
        ClientError::Parse { body, .. } => assert_eq!(body, "<html>Bad Gateway</html>"),
        other => panic!("expected a parse error, got {:?}", other),
    }
}

#[tokio::test]
async fn success_without_data_is_reported() {
    let (mut server, client) = setup().await;
    server
        .mock("GET", "/v1/user")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"user": {"id": "u1"}}"#)
        .create_async()
        .await;

    let err = client.user().await.unwrap_err();
    assert!(matches!(err, ClientError::MissingData));
}

#[tokio::test]
async fn connection_failure_passes_through_unchanged() {
    let client = YnabClient::new(TOKEN)
        .unwrap()
        .with_base_url("http://127.0.0.1:1/v1")
        .unwrap();

    let err = client.user().await.unwrap_err();

    assert!(err.is_transport());
    let source = err.into_transport().unwrap();
    let reqwest_error = source.downcast_ref::<reqwest::Error>().unwrap();
    assert!(reqwest_error.is_connect());
}

struct TimingOut;

#[async_trait]
impl Transport for TimingOut {
    async fn send(&self, _request: HttpRequest) -> Result<HttpResponse, TransportError> {
        Err(Box::new(io::Error::new(io::ErrorKind::TimedOut, "deadline elapsed")))
    }
}

#[tokio::test]
async fn custom_transport_errors_keep_their_type() {
    let client = YnabClient::with_transport(TOKEN, Arc::new(TimingOut)).unwrap();

    let err = client.budgets().await.unwrap_err();

    assert_eq!(err.to_string(), "deadline elapsed");
    let source = err.into_transport().unwrap();
    let io_error = source.downcast_ref::<io::Error>().unwrap();
    assert_eq!(io_error.kind(), io::ErrorKind::TimedOut);
}

#[tokio::test]
async fn knowledge_is_only_sent_when_given() {
    let (mut server, client) = setup().await;
    let without = server
        .mock("GET", "/v1/budgets/b1/accounts")
        .match_query(Matcher::Exact(String::new()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"data": {"accounts": [], "server_knowledge": 1}}"#)
        .create_async()
        .await;
    let with = server
        .mock("GET", "/v1/budgets/b1/accounts")
        .match_query(Matcher::UrlEncoded(
            "last_knowledge_of_server".into(),
            "2".into(),
        ))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"data": {"accounts": [], "server_knowledge": 3}}"#)
        .create_async()
        .await;

    let first = client.accounts("b1", None).await.unwrap();
    let second = client.accounts("b1", Some(2)).await.unwrap();

    assert_eq!(first["server_knowledge"], 1);
    assert_eq!(second["server_knowledge"], 3);
    without.assert_async().await;
    with.assert_async().await;
}

#[tokio::test]
async fn category_month_read_and_update() {
    let (mut server, client) = setup().await;
    let path = "/v1/budgets/b1/months/2018-01-01/categories/c1";
    let read = server
        .mock("GET", path)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"data": {"category": {"id": "c1", "budgeted": 10000}}}"#)
        .create_async()
        .await;
    let update = server
        .mock("PATCH", path)
        .match_header("content-type", Matcher::Regex("application/json".into()))
        .match_body(Matcher::Json(json!({"category": {"budgeted": 0}})))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"data": {"category": {"id": "c1", "budgeted": 0}}}"#)
        .create_async()
        .await;

    let current = client.category_month("b1", "c1", "2018-01-01").await.unwrap();
    let updated = client
        .update_category_month("b1", "c1", "2018-01-01", &SaveMonthCategory { budgeted: 0 })
        .await
        .unwrap();

    assert_eq!(current["category"]["budgeted"], 10000);
    assert_eq!(updated["category"]["budgeted"], 0);
    read.assert_async().await;
    update.assert_async().await;
}

#[tokio::test]
async fn transaction_filters_become_query_parameters() {
    let (mut server, client) = setup().await;
    let mock = server
        .mock("GET", "/v1/budgets/b1/accounts/a1/transactions")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("since_date".into(), "2019-01-01".into()),
            Matcher::UrlEncoded("type".into(), "unapproved".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"data": {"transactions": []}}"#)
        .create_async()
        .await;

    let filter = TransactionFilter::new()
        .since_date("2019-01-01")
        .kind(TransactionType::Unapproved);
    let data = client
        .account_transactions("b1", "a1", &filter)
        .await
        .unwrap();

    assert_eq!(data, json!({"transactions": []}));
    mock.assert_async().await;
}

#[tokio::test]
async fn bulk_create_wraps_single_and_many() {
    let (mut server, client) = setup().await;
    let single = server
        .mock("POST", "/v1/budgets/b1/transactions")
        .match_body(Matcher::PartialJson(json!({"transaction": {"amount": -1000}})))
        .with_status(201)
        .with_header("content-type", "application/json")
        .with_body(r#"{"data": {"transaction_ids": ["t1"]}}"#)
        .create_async()
        .await;
    let many = server
        .mock("POST", "/v1/budgets/b1/transactions")
        .match_body(Matcher::PartialJson(json!({"transactions": [{"amount": -1}, {"amount": -2}]})))
        .with_status(201)
        .with_header("content-type", "application/json")
        .with_body(r#"{"data": {"transaction_ids": ["t2", "t3"]}}"#)
        .create_async()
        .await;

    let one = SaveTransaction::new("a1", "2024-01-15", -1000);
    client
        .create_transactions("b1", Some(&one), None)
        .await
        .unwrap();

    let batch = vec![
        SaveTransaction::new("a1", "2024-01-15", -1),
        SaveTransaction::new("a1", "2024-01-16", -2),
    ];
    let data = client
        .create_transactions("b1", None, Some(batch.as_slice()))
        .await
        .unwrap();

    assert_eq!(data["transaction_ids"], json!(["t2", "t3"]));
    single.assert_async().await;
    many.assert_async().await;
}

#[tokio::test]
async fn bulk_usage_errors_send_nothing() {
    let (mut server, client) = setup().await;
    let mock = server
        .mock("PATCH", "/v1/budgets/b1/transactions")
        .expect(0)
        .create_async()
        .await;

    let one = json!({"id": "t1", "approved": true});
    let err = client
        .update_transactions::<Value>("b1", None, None)
        .await
        .unwrap_err();
    assert!(err.is_usage());
    assert_eq!(err.to_string(), "Must specify one of transaction or transactions.");

    let err = client
        .update_transactions("b1", Some(&one), Some(std::slice::from_ref(&one)))
        .await
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "Only one of transaction or transactions can be specified, not both."
    );

    mock.assert_async().await;
}

#[tokio::test]
async fn update_transaction_uses_put() {
    let (mut server, client) = setup().await;
    let mock = server
        .mock("PUT", "/v1/budgets/b1/transactions/t1")
        .match_body(Matcher::Json(json!({"transaction": {"memo": "lunch"}})))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"data": {"transaction": {"id": "t1", "memo": "lunch"}}}"#)
        .create_async()
        .await;

    let data = client
        .update_transaction("b1", "t1", &json!({"memo": "lunch"}))
        .await
        .unwrap();

    assert_eq!(data["transaction"]["memo"], "lunch");
    mock.assert_async().await;
}
