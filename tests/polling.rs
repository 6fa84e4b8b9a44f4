//! Polling operations against a scripted gateway

use k2_connect::{ApiResponse, K2, K2Config, PollTransactionsRequest, StatusRequest};
use k2_http::{GatewayError, GatewayResponse, Method, MockGateway, StatusCode};
use serde_json::json;
use std::sync::Arc;

const LOCATION: &str = "http://localhost:3000/polling/c7f300c0-f1ef-4151-9bbe-005005aa3747";
const ACCESS_TOKEN: &str = "myRand0mAcc3ssT0k3n";

fn client(gateway: &MockGateway) -> K2 {
    let config = K2Config::builder()
        .client_id("your_client_id")
        .client_secret("your_client_secret")
        .api_key("your_api_key")
        .base_url("https://9284bede-d6e9f8d86aff.mock.pstmn.io")
        .build()
        .unwrap();

    K2::with_gateway(config, Arc::new(gateway.clone()))
}

fn accepted() -> GatewayResponse {
    GatewayResponse::with_status(StatusCode::CREATED).header_pair("Location", LOCATION)
}

fn poll_params() -> PollTransactionsRequest {
    PollTransactionsRequest {
        from_time: Some("2021-04-12T08:50:22+03:00".into()),
        to_time: Some("2021-04-19T08:50:22+03:00".into()),
        scope: Some("till".into()),
        scope_reference: Some("000000".into()),
        callback_url: Some("https://webhook.site/52fd1913-778e-4ee1-bdc4-74517abb758d".into()),
        access_token: Some(ACCESS_TOKEN.into()),
    }
}

fn status_body() -> serde_json::Value {
    json!({
        "data": {
            "id": "c7f300c0-f1ef-4151-9bbe-005005aa3747",
            "type": "polling",
            "attributes": {
                "status": "Success",
                "scope": "till",
                "scope_reference": "000000",
                "from_time": "2021-04-12T08:50:22+03:00",
                "to_time": "2021-04-19T08:50:22+03:00",
                "transactions": []
            }
        }
    })
}

#[tokio::test]
async fn test_poll_transactions_succeeds() {
    let gateway = MockGateway::new().respond(accepted());
    let result = client(&gateway).polling().poll_transactions(&poll_params()).await;

    assert_eq!(result, ApiResponse::success(json!({ "location": LOCATION })));

    let request = gateway.last_request().unwrap();
    assert_eq!(request.method(), &Method::POST);
    assert_eq!(request.url(), "api/v1/polling");
    assert_eq!(
        request.header_value("Authorization"),
        Some("Bearer myRand0mAcc3ssT0k3n")
    );
    assert_eq!(
        request.body_json().unwrap(),
        json!({
            "scope": "till",
            "scope_reference": "000000",
            "from_time": "2021-04-12T08:50:22+03:00",
            "to_time": "2021-04-19T08:50:22+03:00",
            "_links": {
                "callback_url": "https://webhook.site/52fd1913-778e-4ee1-bdc4-74517abb758d"
            }
        })
    );
}

async fn poll_error(params: PollTransactionsRequest) -> ApiResponse {
    let gateway = MockGateway::new().respond(accepted());
    let result = client(&gateway).polling().poll_transactions(&params).await;
    assert_eq!(gateway.request_count(), 0, "validation must precede the network");
    result
}

#[tokio::test]
async fn test_poll_transactions_with_no_from_time_fails() {
    let result = poll_error(PollTransactionsRequest {
        from_time: None,
        ..poll_params()
    })
    .await;
    assert_eq!(result, ApiResponse::error("You have to provide the fromTime"));
}

#[tokio::test]
async fn test_poll_transactions_with_no_to_time_fails() {
    let result = poll_error(PollTransactionsRequest {
        to_time: None,
        ..poll_params()
    })
    .await;
    assert_eq!(result, ApiResponse::error("You have to provide the toTime"));
}

#[tokio::test]
async fn test_poll_transactions_with_no_scope_fails() {
    let result = poll_error(PollTransactionsRequest {
        scope: None,
        ..poll_params()
    })
    .await;
    assert_eq!(result, ApiResponse::error("You have to provide the scope"));
}

#[tokio::test]
async fn test_poll_transactions_with_no_scope_reference_for_company_scope_succeeds() {
    for scope in ["company", "Company"] {
        let gateway = MockGateway::new().respond(accepted());
        let params = PollTransactionsRequest {
            scope: Some(scope.into()),
            scope_reference: None,
            ..poll_params()
        };

        let result = client(&gateway).polling().poll_transactions(&params).await;
        assert!(result.is_success(), "scope {scope} should not need a reference");

        let body = gateway.last_request().unwrap().body_json().unwrap();
        assert!(body.get("scope_reference").is_none());
    }
}

#[tokio::test]
async fn test_poll_transactions_with_no_scope_reference_for_till_scope_fails() {
    let result = poll_error(PollTransactionsRequest {
        scope_reference: None,
        ..poll_params()
    })
    .await;
    assert_eq!(
        result,
        ApiResponse::error("You have to provide the scopeReference")
    );
}

#[tokio::test]
async fn test_poll_transactions_with_no_callback_url_fails() {
    let result = poll_error(PollTransactionsRequest {
        callback_url: None,
        ..poll_params()
    })
    .await;
    assert_eq!(result, ApiResponse::error("You have to provide the callbackUrl"));
}

#[tokio::test]
async fn test_poll_transactions_with_blank_access_token_fails() {
    let result = poll_error(PollTransactionsRequest {
        access_token: Some("   ".into()),
        ..poll_params()
    })
    .await;
    assert_eq!(result, ApiResponse::error("You have to provide the accessToken"));
}

#[tokio::test]
async fn test_poll_transactions_with_unsendable_access_token_fails() {
    let result = poll_error(PollTransactionsRequest {
        access_token: Some("tok\nen".into()),
        ..poll_params()
    })
    .await;
    assert_eq!(result, ApiResponse::error("The accessToken is not valid"));
}

#[tokio::test]
async fn test_poll_transactions_transport_failure() {
    let gateway = MockGateway::new().fail(GatewayError::Connection(
        "Error Communicating with Server".into(),
    ));
    let result = client(&gateway).polling().poll_transactions(&poll_params()).await;

    assert_eq!(
        result,
        ApiResponse::error("Connection error: Error Communicating with Server")
    );
}

#[tokio::test]
async fn test_poll_transactions_rejected_upstream() {
    let gateway = MockGateway::new().respond(GatewayResponse::json_body(
        StatusCode::UNAUTHORIZED,
        &json!({ "error_code": 401, "error_message": "The access token is invalid" }),
    ));
    let result = client(&gateway).polling().poll_transactions(&poll_params()).await;

    assert_eq!(result, ApiResponse::error("The access token is invalid"));
}

#[tokio::test]
async fn test_get_status_succeeds() {
    let gateway =
        MockGateway::new().respond(GatewayResponse::json_body(StatusCode::OK, &status_body()));
    let params = StatusRequest {
        location: Some(LOCATION.into()),
        access_token: Some(ACCESS_TOKEN.into()),
    };

    let result = client(&gateway).polling().get_status(&params).await;
    assert_eq!(result, ApiResponse::success(status_body()));

    let request = gateway.last_request().unwrap();
    assert_eq!(request.method(), &Method::GET);
    assert_eq!(request.url(), LOCATION);
}

#[tokio::test]
async fn test_get_status_with_no_location_fails() {
    let gateway = MockGateway::new();
    let params = StatusRequest {
        location: None,
        access_token: Some(ACCESS_TOKEN.into()),
    };

    let result = client(&gateway).polling().get_status(&params).await;
    assert_eq!(result, ApiResponse::error("You have to provide the location"));
    assert_eq!(gateway.request_count(), 0);
}

#[tokio::test]
async fn test_get_status_with_no_access_token_fails() {
    let gateway = MockGateway::new();
    let params = StatusRequest {
        location: Some(LOCATION.into()),
        access_token: None,
    };

    let result = client(&gateway).polling().get_status(&params).await;
    assert_eq!(result, ApiResponse::error("You have to provide the accessToken"));

    let params = StatusRequest {
        location: Some(LOCATION.into()),
        access_token: Some("tok\r\nen".into()),
    };
    let result = client(&gateway).polling().get_status(&params).await;
    assert_eq!(result, ApiResponse::error("The accessToken is not valid"));
    assert_eq!(gateway.request_count(), 0);
}

#[tokio::test]
async fn test_get_status_transport_failure() {
    let gateway = MockGateway::new().fail(GatewayError::Timeout(std::time::Duration::from_secs(30)));
    let params = StatusRequest {
        location: Some(LOCATION.into()),
        access_token: Some(ACCESS_TOKEN.into()),
    };

    let result = client(&gateway).polling().get_status(&params).await;
    assert!(result.is_error());
    assert_eq!(result.to_json()["status"], json!("error"));
}
