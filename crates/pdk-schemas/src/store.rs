//! Seller store accounts and the display-order update payloads.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::envelope::Pagination;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StoreCategory {
    Fashion,
    Electronics,
    Other,
}

impl StoreCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            StoreCategory::Fashion => "FASHION",
            StoreCategory::Electronics => "ELECTRONICS",
            StoreCategory::Other => "OTHER",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StoreStatus {
    Active,
    Pending,
    Suspended,
}

impl StoreStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            StoreStatus::Active => "ACTIVE",
            StoreStatus::Pending => "PENDING",
            StoreStatus::Suspended => "SUSPENDED",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreContactInfo {
    pub email: String,
    pub phone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub whatsapp: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreAddress {
    pub street: String,
    pub city: String,
    pub state: String,
    pub country: String,
    pub postal_code: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreSettings {
    pub is_verified: bool,
    pub is_featured_store: bool,
    pub allow_ratings: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreMetrics {
    pub total_orders: u64,
    pub total_revenue: f64,
    pub total_products: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StorePaymentDetails {
    pub account_name: String,
    pub account_number: String,
    pub bank_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreImage {
    pub url: String,
    pub public_id: String,
}

/// The admin listing expands the owning account inline; the public listing
/// sends the bare account id. Untagged so one `Store` type decodes both.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StoreOwner {
    Id(String),
    Expanded {
        #[serde(rename = "_id")]
        id: String,
        email: String,
    },
}

impl StoreOwner {
    pub fn id(&self) -> &str {
        match self {
            StoreOwner::Id(id) => id,
            StoreOwner::Expanded { id, .. } => id,
        }
    }
}

/// A seller account. Created externally; this system mutates only `status`
/// and the display metadata (`display_order`, `is_featured`, `featured_until`,
/// `admin_notes`).
///
/// `display_order` is a pure sort key, ascending (lower = earlier); typed
/// unsigned so the non-negativity invariant holds by construction.
/// `featured_until` expiry is enforced server-side, carried here as data.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Store {
    #[serde(rename = "_id")]
    pub id: String,
    pub user_id: StoreOwner,
    pub store_name: String,
    pub description: String,
    pub category: StoreCategory,
    pub status: StoreStatus,
    pub contact_info: StoreContactInfo,
    pub address: StoreAddress,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<StoreImage>,
    pub settings: StoreSettings,
    pub metrics: StoreMetrics,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_details: Option<StorePaymentDetails>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub slug: String,
    pub store_url: String,
    pub is_featured: bool,
    pub display_order: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub admin_notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub featured_until: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoresPage {
    pub stores: Vec<Store>,
    pub pagination: Pagination,
}

/// Payload of the payment-details endpoint: banking plus contact info, scoped
/// to one store.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StorePaymentInfo {
    pub store_id: String,
    pub store_name: String,
    pub payment_details: StorePaymentDetails,
    pub contact_info: StoreContactInfo,
}

/// Display-metadata write for a single store.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreOrderUpdate {
    pub display_order: u32,
    pub is_featured: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub featured_until: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub admin_notes: Option<String>,
}

/// One entry of the bulk display-order write.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreOrderKey {
    pub store_id: String,
    pub display_order: u32,
}

/// The bulk endpoint answers outside the usual envelope: a bare ack.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BulkOrderAck {
    pub success: bool,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_json(owner: &str) -> String {
        format!(
            r#"{{
            "_id": "665f1c2e9b1d8c0012a4ee01",
            "userId": {owner},
            "storeName": "Adire House",
            "description": "Hand-dyed fabrics",
            "category": "FASHION",
            "status": "ACTIVE",
            "contactInfo": {{"email": "shop@adire.example", "phone": "+2348000000"}},
            "address": {{"street": "2 Craft Ln", "city": "Abeokuta", "state": "OG",
                         "country": "NG", "postalCode": "110001"}},
            "settings": {{"isVerified": true, "isFeaturedStore": false, "allowRatings": true}},
            "metrics": {{"totalOrders": 12, "totalRevenue": 830.0, "totalProducts": 40}},
            "createdAt": "2024-01-01T00:00:00.000Z",
            "updatedAt": "2024-05-01T00:00:00.000Z",
            "slug": "adire-house",
            "storeUrl": "https://shops.example/adire-house",
            "isFeatured": true,
            "displayOrder": 3,
            "featuredUntil": "2024-12-31T23:59:59.000Z"
        }}"#
        )
    }

    #[test]
    fn admin_listing_expands_owner() {
        let json = store_json(r#"{"_id": "u1", "email": "owner@example.com"}"#);
        let store: Store = serde_json::from_str(&json).unwrap();
        assert_eq!(store.user_id.id(), "u1");
        assert!(matches!(store.user_id, StoreOwner::Expanded { .. }));
        assert_eq!(store.display_order, 3);
        assert!(store.featured_until.is_some());
    }

    #[test]
    fn public_listing_sends_bare_owner_id() {
        let json = store_json(r#""u1""#);
        let store: Store = serde_json::from_str(&json).unwrap();
        assert_eq!(store.user_id.id(), "u1");
        assert!(matches!(store.user_id, StoreOwner::Id(_)));
    }

    #[test]
    fn negative_display_order_fails_loudly() {
        let json = store_json(r#""u1""#).replace("\"displayOrder\": 3", "\"displayOrder\": -1");
        assert!(serde_json::from_str::<Store>(&json).is_err());
    }
}
