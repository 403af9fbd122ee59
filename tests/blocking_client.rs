mod common;

use common::*;
use paystripe::{params, StripeClient};
use serde_json::json;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

// The blocking client owns a runtime of its own, so it runs off the test
// runtime's worker threads.

#[tokio::test(flavor = "multi_thread")]
async fn blocking_list_forwards_cursor_and_zero_limit() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/plans"))
        .and(query_param("starting_after", "plan_9"))
        .and(query_param("limit", "0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page("plan", "plan", 0, false)))
        .expect(1)
        .mount(&server)
        .await;

    let config = config(&server);
    let page = tokio::task::spawn_blocking(move || {
        let client = StripeClient::new(config).unwrap();
        client.plans().list("plan_9", 0)
    })
    .await
    .unwrap()
    .unwrap();
    assert!(page.data.is_empty());
    assert!(!page.has_more);
}

#[tokio::test(flavor = "multi_thread")]
async fn blocking_create_and_delete_round_trip() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/customers"))
        .and(header("authorization", CONNECTED_AUTH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "cus_9", "object": "customer", "email": "ada@example.com"
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/v1/customers/cus_9"))
        .and(header("authorization", CONNECTED_AUTH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "cus_9", "object": "customer", "deleted": true
        })))
        .expect(1)
        .mount(&server)
        .await;

    let config = config(&server);
    let (created, deleted) = tokio::task::spawn_blocking(move || {
        let client = StripeClient::new(config).unwrap();
        let customers = client.customers().with_key(CONNECTED_KEY);
        let created = customers
            .create(&params::from_value(json!({"email": "ada@example.com"})).unwrap())
            .unwrap();
        let deleted = customers.delete(&created.id).unwrap();
        (created, deleted)
    })
    .await
    .unwrap();
    assert_eq!(created.email.as_deref(), Some("ada@example.com"));
    assert!(deleted.deleted);
}
