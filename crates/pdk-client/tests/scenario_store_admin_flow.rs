//! Store administration flow.
//!
//! GREEN when:
//! - The admin listing passes its filters as query params and decodes the
//!   `{totalPages, hasMore}` pagination shape.
//! - Setting a store to PENDING is refused locally (server owns onboarding).
//! - The bulk display-order endpoint's bare (non-enveloped) ack decodes.

use httpmock::prelude::*;
use httpmock::Method::PATCH;
use pdk_client::{ApiError, DeskClient, Session, StoreListQuery};
use pdk_schemas::{StoreOrderKey, StoreStatus};
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

fn store_json() -> serde_json::Value {
    json!({
        "_id": "s1",
        "userId": {"_id": "u1", "email": "owner@example.com"},
        "storeName": "Adire House",
        "description": "Hand-dyed fabrics",
        "category": "FASHION",
        "status": "ACTIVE",
        "contactInfo": {"email": "shop@adire.example", "phone": "+2348000000"},
        "address": {"street": "2 Craft Ln", "city": "Abeokuta", "state": "OG",
                    "country": "NG", "postalCode": "110001"},
        "settings": {"isVerified": true, "isFeaturedStore": false, "allowRatings": true},
        "metrics": {"totalOrders": 12, "totalRevenue": 830.0, "totalProducts": 40},
        "createdAt": "2024-01-01T00:00:00.000Z",
        "updatedAt": "2024-05-01T00:00:00.000Z",
        "slug": "adire-house",
        "storeUrl": "https://shops.example/adire-house",
        "isFeatured": false,
        "displayOrder": 3
    })
}

#[tokio::test]
async fn listing_passes_filters_and_decodes_store_pagination() {
    let server = MockServer::start_async().await;
    let (client, session) = login(&server).await;

    server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/api/admin/stores")
                .query_param("page", "2")
                .query_param("limit", "5")
                .query_param("status", "ACTIVE")
                .query_param("search", "adire");
            then.status(200).json_body(json!({
                "success": true,
                "data": {
                    "stores": [store_json()],
                    "pagination": {"total": 6, "page": 2, "totalPages": 2, "hasMore": false}
                }
            }));
        })
        .await;

    let query = StoreListQuery {
        page: 2,
        limit: 5,
        status: Some(StoreStatus::Active),
        search: Some("adire".to_string()),
        ..Default::default()
    };
    let page = client.stores(&session, &query).await.unwrap();
    assert_eq!(page.stores.len(), 1);
    assert_eq!(page.pagination.pages, 2);
    assert_eq!(page.pagination.has_more, Some(false));
}

#[tokio::test]
async fn pending_is_not_an_administrative_status() {
    let server = MockServer::start_async().await;
    let (client, session) = login(&server).await;

    let status_mock = server
        .mock_async(|when, then| {
            when.method(PATCH).path("/api/admin/stores/s1/status");
            then.status(200)
                .json_body(json!({"success": true, "data": store_json()}));
        })
        .await;

    let err = client
        .set_store_status(&session, "s1", StoreStatus::Pending)
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::Validation(_)));
    assert_eq!(status_mock.hits_async().await, 0);

    // Suspension is a legal administrative action.
    client
        .set_store_status(&session, "s1", StoreStatus::Suspended)
        .await
        .expect("SUSPENDED must be accepted");
    assert_eq!(status_mock.hits_async().await, 1);
}

#[tokio::test]
async fn bulk_order_decodes_bare_ack() {
    let server = MockServer::start_async().await;
    let (client, session) = login(&server).await;

    server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/api/admin/stores/bulk-order")
                .json_body(json!({
                    "stores": [
                        {"storeId": "s1", "displayOrder": 0},
                        {"storeId": "s2", "displayOrder": 1}
                    ]
                }));
            then.status(200)
                .json_body(json!({"success": true, "message": "2 stores reordered"}));
        })
        .await;

    let entries = vec![
        StoreOrderKey {
            store_id: "s1".to_string(),
            display_order: 0,
        },
        StoreOrderKey {
            store_id: "s2".to_string(),
            display_order: 1,
        },
    ];
    let ack = client.bulk_store_order(&session, &entries).await.unwrap();
    assert!(ack.success);
    assert_eq!(ack.message, "2 stores reordered");

    // An empty batch is a caller bug, refused locally.
    let err = client.bulk_store_order(&session, &[]).await.unwrap_err();
    assert!(matches!(err, ApiError::Validation(_)));
}
