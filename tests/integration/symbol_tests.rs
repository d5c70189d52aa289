use crate::common::{client_for, expired_session};
use marketdata_admin::prelude::*;
use mockito::{Matcher, Server};
use serde_json::json;

fn symbol_json(id: &str, name: &str) -> serde_json::Value {
    json!({
        "id": id,
        "symbol": name,
        "baseAsset": &name[..3],
        "quoteAsset": "USDT",
        "isActive": true,
        "minTradeAmount": 0.001,
        "pricePrecision": 2,
        "quantityPrecision": 6,
        "createdAt": "2024-01-15T10:30:00Z"
    })
}

#[tokio::test]
async fn test_get_all_and_active_symbols() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/api/v1.0/pub/admin/symbol")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({"success": true, "data": [symbol_json("1", "BTCUSDT"), symbol_json("2", "ETHUSDT")]})
                .to_string(),
        )
        .create_async()
        .await;
    server
        .mock("GET", "/api/v1.0/pub/admin/symbol/active")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json!({"success": true, "data": [symbol_json("2", "ETHUSDT")]}).to_string())
        .create_async()
        .await;

    let client = client_for(&server.url(), expired_session());
    let all = client
        .symbols()
        .get_all_symbols()
        .await
        .unwrap()
        .data_or_default();
    let active = client
        .symbols()
        .get_active_symbols()
        .await
        .unwrap()
        .data_or_default();

    assert_eq!(all.len(), 2);
    assert_eq!(all[0].base_asset, "BTC");
    assert_eq!(active.len(), 1);
    assert_eq!(active[0].symbol, "ETHUSDT");
}

#[tokio::test]
async fn test_get_symbol_by_id() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/api/v1.0/pub/admin/symbol/42")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json!({"success": true, "data": symbol_json("42", "SOLUSDT")}).to_string())
        .create_async()
        .await;

    let client = client_for(&server.url(), expired_session());
    let symbol = client
        .symbols()
        .get_symbol_by_id("42")
        .await
        .unwrap()
        .into_data()
        .unwrap();

    assert_eq!(symbol.id, "42");
    assert_eq!(symbol.quantity_precision, 6);
}

#[tokio::test]
async fn test_save_symbol_creates_without_id() {
    let mut server = Server::new_async().await;
    let create = server
        .mock("POST", "/api/v1.0/pub/admin/symbol")
        .match_body(Matcher::PartialJson(json!({"symbol": "BTCUSDT", "pricePrecision": 8})))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json!({"success": true, "data": symbol_json("new", "BTCUSDT")}).to_string())
        .expect(1)
        .create_async()
        .await;

    let client = client_for(&server.url(), expired_session());
    let outcome = client
        .symbols()
        .save_symbol(&SymbolRequest::new("BTCUSDT", "BTC", "USDT"))
        .await
        .unwrap();

    create.assert_async().await;
    match outcome {
        SaveOutcome::Saved(Some(symbol)) => assert_eq!(symbol.id, "new"),
        other => panic!("Unexpected outcome: {:?}", other),
    }
}

#[tokio::test]
async fn test_save_symbol_updates_with_id() {
    let mut server = Server::new_async().await;
    let update = server
        .mock("PUT", "/api/v1.0/pub/admin/symbol/7")
        .match_body(Matcher::PartialJson(json!({"id": "7", "isActive": false})))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"success":true,"message":"Updated"}"#)
        .expect(1)
        .create_async()
        .await;

    let mut request = SymbolRequest::new("ETHUSDT", "ETH", "USDT");
    request.id = Some("7".to_string());
    request.is_active = false;

    let client = client_for(&server.url(), expired_session());
    let outcome = client.symbols().save_symbol(&request).await.unwrap();

    update.assert_async().await;
    assert_eq!(outcome, SaveOutcome::Saved(None));
}

#[tokio::test]
async fn test_save_symbol_offers_restore_on_deleted_conflict() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", "/api/v1.0/pub/admin/symbol")
        .with_status(409)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "success": false,
                "message": "Symbol BTCUSDT was deleted",
                "data": {"isDeleted": true, "id": "old-1"}
            })
            .to_string(),
        )
        .create_async()
        .await;
    let restore = server
        .mock("POST", "/api/v1.0/pub/admin/symbol/old-1/restore")
        .match_body(Matcher::PartialJson(json!({"symbol": "BTCUSDT"})))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json!({"success": true, "data": symbol_json("old-1", "BTCUSDT")}).to_string())
        .expect(1)
        .create_async()
        .await;

    let client = client_for(&server.url(), expired_session());
    let request = SymbolRequest::new("BTCUSDT", "BTC", "USDT");
    let outcome = client.symbols().save_symbol(&request).await.unwrap();

    let id = match outcome {
        SaveOutcome::RestoreAvailable { id } => id,
        other => panic!("Expected a restore offer, got {:?}", other),
    };
    assert_eq!(id, "old-1");

    let restored = client
        .symbols()
        .restore_symbol(&id, &request)
        .await
        .unwrap();
    restore.assert_async().await;
    assert_eq!(restored.into_data().unwrap().id, "old-1");
}

#[tokio::test]
async fn test_save_symbol_plain_conflict_is_an_error() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", "/api/v1.0/pub/admin/symbol")
        .with_status(409)
        .with_header("content-type", "application/json")
        .with_body(r#"{"success":false,"message":"Symbol already exists"}"#)
        .create_async()
        .await;

    let client = client_for(&server.url(), expired_session());
    let err = client
        .symbols()
        .save_symbol(&SymbolRequest::new("BTCUSDT", "BTC", "USDT"))
        .await
        .unwrap_err();

    assert_eq!(err.status_code(), Some(409));
}

#[tokio::test]
async fn test_delete_symbols_one_call_per_id() {
    let mut server = Server::new_async().await;
    let mut mocks = Vec::new();
    for id in ["a", "b", "c"] {
        mocks.push(
            server
                .mock("DELETE", format!("/api/v1.0/pub/admin/symbol/{id}").as_str())
                .with_status(200)
                .with_header("content-type", "application/json")
                .with_body(r#"{"success":true,"message":"Deleted"}"#)
                .expect(1)
                .create_async()
                .await,
        );
    }

    let client = client_for(&server.url(), expired_session());
    let ids: Vec<String> = ["a", "b", "c"].iter().map(|s| s.to_string()).collect();
    client.symbols().delete_symbols(&ids).await.unwrap();

    for mock in mocks {
        mock.assert_async().await;
    }
}

#[tokio::test]
async fn test_delete_symbols_attempts_every_id_when_one_fails() {
    let mut server = Server::new_async().await;
    let first = server
        .mock("DELETE", "/api/v1.0/pub/admin/symbol/a")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"success":true}"#)
        .expect(1)
        .create_async()
        .await;
    let missing = server
        .mock("DELETE", "/api/v1.0/pub/admin/symbol/b")
        .with_status(404)
        .with_header("content-type", "application/json")
        .with_body(r#"{"message":"Symbol not found"}"#)
        .expect(1)
        .create_async()
        .await;
    let last = server
        .mock("DELETE", "/api/v1.0/pub/admin/symbol/c")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"success":true}"#)
        .expect(1)
        .create_async()
        .await;

    let client = client_for(&server.url(), expired_session());
    let ids: Vec<String> = ["a", "b", "c"].iter().map(|s| s.to_string()).collect();
    let err = client.symbols().delete_symbols(&ids).await.unwrap_err();

    assert_eq!(err.status_code(), Some(404));
    first.assert_async().await;
    missing.assert_async().await;
    last.assert_async().await;
}
