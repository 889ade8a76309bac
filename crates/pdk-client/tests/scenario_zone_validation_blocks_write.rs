//! Zone input validation happens before any write.
//!
//! GREEN when:
//! - Creating a zone with deliveryPrice <= 0 (or a blank name) fails with a
//!   validation error and zero requests on the wire.
//! - A valid draft POSTs and returns the created zone.
//! - The same guard applies to partial updates.

use httpmock::prelude::*;
use pdk_client::{ApiError, DeskClient, Session};
use pdk_schemas::{ZoneDraft, ZonePatch};
use serde_json::json;

async fn login(server: &MockServer) -> (DeskClient, Session) {
    server
        .mock_async(|when, then| {
            when.method(POST).path("/api/admin/login");
            then.status(200).json_body(json!({
                "success": true,
                "data": {
                    "token": "tok-abc",
                    "admin": {"_id": "a1", "email": "ops@parceldesk.example",
                              "name": "Ops", "role": "superadmin"}
                }
            }));
        })
        .await;
    let client = DeskClient::new(server.base_url());
    let session = client.login("ops@parceldesk.example", "pw").await.unwrap();
    (client, session)
}

fn zone_json() -> serde_json::Value {
    json!({
        "_id": "z1",
        "name": "Island",
        "deliveryPrice": 7.5,
        "isActive": true,
        "createdAt": "2024-06-01T09:30:00.000Z",
        "updatedAt": "2024-06-01T09:30:00.000Z"
    })
}

#[tokio::test]
async fn non_positive_price_blocks_create() {
    let server = MockServer::start_async().await;
    let (client, session) = login(&server).await;

    let create_mock = server
        .mock_async(|when, then| {
            when.method(POST).path("/api/zones");
            then.status(200)
                .json_body(json!({"success": true, "data": zone_json()}));
        })
        .await;

    for bad_price in [0.0, -1.0] {
        let draft = ZoneDraft {
            name: "Island".to_string(),
            delivery_price: bad_price,
            is_active: true,
        };
        let err = client.create_zone(&session, &draft).await.unwrap_err();
        assert!(
            matches!(err, ApiError::Validation(_)),
            "price {bad_price} must be rejected as validation, got {err}"
        );
    }

    assert_eq!(
        create_mock.hits_async().await,
        0,
        "rejected drafts must never reach the wire"
    );
}

#[tokio::test]
async fn valid_draft_creates_zone() {
    let server = MockServer::start_async().await;
    let (client, session) = login(&server).await;

    let create_mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/api/zones")
                .header("authorization", "Bearer tok-abc")
                .json_body(json!({
                    "name": "Island",
                    "deliveryPrice": 7.5,
                    "isActive": true
                }));
            then.status(200)
                .json_body(json!({"success": true, "data": zone_json()}));
        })
        .await;

    let zone = client
        .create_zone(
            &session,
            &ZoneDraft {
                name: "Island".to_string(),
                delivery_price: 7.5,
                is_active: true,
            },
        )
        .await
        .expect("valid draft must create");
    assert_eq!(zone.id, "z1");
    assert_eq!(zone.delivery_price, 7.5);
    create_mock.assert_async().await;
}

#[tokio::test]
async fn patch_with_bad_price_blocks_update() {
    let server = MockServer::start_async().await;
    let (client, session) = login(&server).await;

    let update_mock = server
        .mock_async(|when, then| {
            when.method(PUT).path("/api/zones/z1");
            then.status(200)
                .json_body(json!({"success": true, "data": zone_json()}));
        })
        .await;

    let patch = ZonePatch {
        delivery_price: Some(-2.0),
        ..Default::default()
    };
    let err = client.update_zone(&session, "z1", &patch).await.unwrap_err();
    assert!(matches!(err, ApiError::Validation(_)));
    assert_eq!(update_mock.hits_async().await, 0);

    // A patch that only toggles the active flag carries no price and passes.
    let patch = ZonePatch {
        is_active: Some(false),
        ..Default::default()
    };
    client
        .update_zone(&session, "z1", &patch)
        .await
        .expect("price-free patch must pass validation");
    assert_eq!(update_mock.hits_async().await, 1);
}

#[tokio::test]
async fn delete_zone_tolerates_empty_envelope() {
    let server = MockServer::start_async().await;
    let (client, session) = login(&server).await;

    server
        .mock_async(|when, then| {
            when.method(DELETE).path("/api/zones/z1");
            then.status(200).json_body(json!({"success": true}));
        })
        .await;

    client
        .delete_zone(&session, "z1")
        .await
        .expect("delete must succeed on a data-less envelope");
}
