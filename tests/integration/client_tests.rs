use crate::common::{OLD_ACCESS, client_for, expired_session};
use marketdata_admin::prelude::*;
use mockito::{Matcher, Server};
use serde_json::json;

#[tokio::test]
async fn test_bearer_header_sent_when_token_stored() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/api/v1.0/pub/symbols")
        .match_header("authorization", format!("Bearer {OLD_ACCESS}").as_str())
        .match_header("content-type", "application/json")
        .with_status(200)
        .with_header("content-type", "application/json; charset=utf-8")
        .with_body(r#"{"success":true,"data":[]}"#)
        .expect(1)
        .create_async()
        .await;

    let client = client_for(&server.url(), expired_session());
    let body = client
        .http_client()
        .get("/api/v1.0/pub/symbols")
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(body.as_json(), Some(&json!({"success": true, "data": []})));
}

#[tokio::test]
async fn test_no_authorization_header_without_token() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/api/v1.0/pub/symbols")
        .match_header("authorization", Matcher::Missing)
        .match_header("content-type", "application/json")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"success":true,"data":[]}"#)
        .expect(1)
        .create_async()
        .await;

    let client = client_for(&server.url(), Arc::new(Session::in_memory()));
    let result = client.http_client().get("/api/v1.0/pub/symbols").await;

    tokio_test::assert_ok!(result);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_non_json_body_is_returned_raw() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/export.csv")
        .with_status(200)
        .with_header("content-type", "text/csv")
        .with_body("symbol,exchange\nBTCUSDT,Kraken\n")
        .create_async()
        .await;

    let client = client_for(&server.url(), expired_session());
    let body = client.http_client().get("/export.csv").await.unwrap();

    match body {
        ResponseBody::Raw(response) => {
            assert_eq!(response.status().as_u16(), 200);
            assert_eq!(
                response.text().await.unwrap(),
                "symbol,exchange\nBTCUSDT,Kraken\n"
            );
        }
        other => panic!("Expected a raw body, got {:?}", other),
    }
}

#[tokio::test]
async fn test_post_sends_json_body() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/api/v1.0/pub/admin/symbol")
        .match_body(Matcher::Json(json!({"symbol": "BTCUSDT"})))
        .with_status(201)
        .with_header("content-type", "application/json")
        .with_body(r#"{"success":true,"data":{"id":"1"}}"#)
        .create_async()
        .await;

    let client = client_for(&server.url(), expired_session());
    client
        .http_client()
        .post("/api/v1.0/pub/admin/symbol", Some(&json!({"symbol": "BTCUSDT"})))
        .await
        .unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn test_error_status_becomes_api_error() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", "/api/v1.0/pub/admin/symbol")
        .with_status(409)
        .with_header("content-type", "application/json")
        .with_body(r#"{"success":false,"message":"Symbol already exists","data":{"isDeleted":true,"id":"abc"}}"#)
        .create_async()
        .await;

    let client = client_for(&server.url(), expired_session());
    let err = client
        .http_client()
        .post("/api/v1.0/pub/admin/symbol", Some(&json!({})))
        .await
        .unwrap_err();

    let api = err.as_api_error().expect("expected an API error");
    assert_eq!(api.status_code, 409);
    assert_eq!(api.message, "Symbol already exists");
    assert!(api.is_deleted_conflict());
    assert_eq!(err.status_code(), Some(409));
}

#[tokio::test]
async fn test_error_status_without_body_has_fallback_message() {
    let mut server = Server::new_async().await;
    server
        .mock("DELETE", "/api/v1.0/pub/admin/symbol/1")
        .with_status(500)
        .create_async()
        .await;

    let client = client_for(&server.url(), expired_session());
    let err = client
        .http_client()
        .delete("/api/v1.0/pub/admin/symbol/1")
        .await
        .unwrap_err();

    assert_eq!(
        err.as_api_error().map(|e| e.message.as_str()),
        Some("HTTP error! status: 500")
    );
}

#[tokio::test]
async fn test_transport_failure_is_not_renewed() {
    let session = expired_session();
    let client = client_for("http://127.0.0.1:1", Arc::clone(&session));

    let result = client.http_client().get("/api/v1.0/pub/symbols").await;

    assert!(matches!(result, Err(AppError::Network(_))));
    assert!(!session.is_renewing());
    assert_eq!(session.access_token().as_deref(), Some(OLD_ACCESS));
}

#[tokio::test]
async fn test_401_on_replay_is_final() {
    let mut server = Server::new_async().await;
    let protected = server
        .mock("GET", "/api/v1.0/pub/admin/symbol")
        .with_status(401)
        .with_header("content-type", "application/json")
        .with_body(r#"{"message":"Unauthorized"}"#)
        .expect(2)
        .create_async()
        .await;
    let refresh = server
        .mock("POST", "/api/v1.0/pub/authentication/refresh")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"success":true,"data":{"accessToken":"a2","refreshToken":"r2"}}"#)
        .expect(1)
        .create_async()
        .await;

    let session = expired_session();
    let client = client_for(&server.url(), Arc::clone(&session));
    let err = client
        .http_client()
        .get("/api/v1.0/pub/admin/symbol")
        .await
        .unwrap_err();

    protected.assert_async().await;
    refresh.assert_async().await;
    assert_eq!(err.status_code(), Some(401));
    assert_eq!(session.access_token().as_deref(), Some("a2"));
}

#[tokio::test]
async fn test_replay_carries_renewed_token_and_body() {
    let mut server = Server::new_async().await;
    let rejected = server
        .mock("PUT", "/api/v1.0/pub/admin/symbol/1")
        .match_header("authorization", format!("Bearer {OLD_ACCESS}").as_str())
        .with_status(401)
        .expect(1)
        .create_async()
        .await;
    let accepted = server
        .mock("PUT", "/api/v1.0/pub/admin/symbol/1")
        .match_header("authorization", "Bearer a2")
        .match_body(Matcher::Json(json!({"isActive": false})))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"success":true,"data":null}"#)
        .expect(1)
        .create_async()
        .await;
    server
        .mock("POST", "/api/v1.0/pub/authentication/refresh")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"success":true,"data":{"accessToken":"a2","refreshToken":"r2"}}"#)
        .create_async()
        .await;

    let client = client_for(&server.url(), expired_session());
    client
        .http_client()
        .put("/api/v1.0/pub/admin/symbol/1", Some(&json!({"isActive": false})))
        .await
        .unwrap();

    rejected.assert_async().await;
    accepted.assert_async().await;
}
