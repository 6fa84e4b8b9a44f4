//! Full client stack against a local HTTP server

use k2_connect::{ApiResponse, K2, K2Config, PollTransactionsRequest, StatusRequest, SubscribeRequest};
use serde_json::json;
use std::time::Duration;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> K2 {
    K2::new(
        K2Config::builder()
            .client_id("your_client_id")
            .client_secret("your_client_secret")
            .base_url(server.uri())
            .timeout(Duration::from_secs(5))
            .build()
            .unwrap(),
    )
    .unwrap()
}

#[tokio::test]
async fn test_poll_then_fetch_status() {
    let server = MockServer::start().await;
    let location = format!("{}/api/v1/polling/c7f300c0", server.uri());

    Mock::given(method("POST"))
        .and(path("/api/v1/polling"))
        .and(header("authorization", "Bearer myRand0mAcc3ssT0k3n"))
        .and(header("accept", "application/json"))
        .and(body_json(json!({
            "scope": "company",
            "from_time": "2021-04-12T08:50:22+03:00",
            "to_time": "2021-04-19T08:50:22+03:00",
            "_links": { "callback_url": "https://example.com/k2/callback" }
        })))
        .respond_with(ResponseTemplate::new(201).insert_header("Location", location.as_str()))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/v1/polling/c7f300c0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": { "id": "c7f300c0", "attributes": { "status": "Success" } }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let polling = client_for(&server).polling();

    let result = polling
        .poll_transactions(&PollTransactionsRequest {
            from_time: Some("2021-04-12T08:50:22+03:00".into()),
            to_time: Some("2021-04-19T08:50:22+03:00".into()),
            scope: Some("company".into()),
            callback_url: Some("https://example.com/k2/callback".into()),
            access_token: Some("myRand0mAcc3ssT0k3n".into()),
            ..Default::default()
        })
        .await;
    assert_eq!(result, ApiResponse::success(json!({ "location": location })));

    let status = polling
        .get_status(&StatusRequest {
            location: Some(location.clone()),
            access_token: Some("myRand0mAcc3ssT0k3n".into()),
        })
        .await;
    assert_eq!(
        status.data().unwrap()["data"]["attributes"]["status"],
        json!("Success")
    );
}

#[tokio::test]
async fn test_subscribe_rejected_upstream() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/webhook_subscriptions"))
        .respond_with(ResponseTemplate::new(422).set_body_json(json!({
            "error_code": 422,
            "error_message": "Event type is not supported"
        })))
        .mount(&server)
        .await;

    let result = client_for(&server)
        .webhooks()
        .subscribe(&SubscribeRequest {
            event_type: Some("card_swiped".into()),
            url: Some("https://example.com/k2/webhook".into()),
            access_token: Some("myRand0mAcc3ssT0k3n".into()),
            scope: Some("till".into()),
            scope_reference: Some("000000".into()),
        })
        .await;

    assert_eq!(result, ApiResponse::error("Event type is not supported"));
}
