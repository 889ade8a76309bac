//! Delivery orders: list rows, stats, and the receipts detail view.

use chrono::{DateTime, Utc};
use pdk_lifecycle::OrderStatus;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::envelope::Pagination;
use crate::store::StoreContactInfo;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PackageSize {
    Small,
    Medium,
    Large,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub quantity: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// A pickup or delivery address. Optional fields only appear on addresses
/// that came from a consumer's saved address book.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub street: String,
    pub city: String,
    pub state: String,
    pub country: String,
    pub postal_code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recipient_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recipient_phone: Option<String>,
}

/// A delivery job. Created by the ordering system in `PENDING`; this system
/// only ever mutates `status`, through explicit transition requests.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    #[serde(rename = "_id")]
    pub id: String,
    pub user_id: String,
    pub tracking_number: String,
    pub status: OrderStatus,
    pub package_size: PackageSize,
    pub price: f64,
    pub is_fragile: bool,
    pub is_express_delivery: bool,
    pub requires_special_handling: bool,
    pub items: Vec<OrderItem>,
    pub pickup_address: Address,
    pub delivery_address: Address,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub special_instructions: Option<String>,
    pub estimated_delivery_date: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrdersPage {
    pub orders: Vec<Order>,
    pub pagination: Pagination,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Revenue {
    pub total: f64,
    pub today: f64,
}

/// Aggregate counters for the dashboard's stats header.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderStats {
    pub total: u64,
    pub total_delivered: u64,
    pub total_pending: u64,
    pub total_in_transit: u64,
    pub total_cancelled: u64,
    pub total_failed_delivery: u64,
    pub today_orders: u64,
    pub today_delivered: u64,
    pub revenue: Revenue,
}

/// Result of a status-transition request. `email_sent` reports whether the
/// backend dispatched a notification to the affected party; the transition
/// policy itself never owns that side effect.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderStatusUpdate {
    pub order: Order,
    pub email_sent: bool,
}

// ---------------------------------------------------------------------------
// Receipts detail view (GET /api/admin/orders/{id}/receipts)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsumerSummary {
    #[serde(rename = "_id")]
    pub id: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReceiptStore {
    pub store_name: String,
    pub store_id: String,
    pub contact_info: StoreContactInfo,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReceiptItem {
    #[serde(rename = "_id")]
    pub id: String,
    pub product_id: String,
    pub quantity: u32,
    pub price: f64,
    #[serde(default)]
    pub variant_data: Vec<Value>,
    pub product_name: String,
    pub product_description: String,
    pub store: ReceiptStore,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipientAddress {
    pub street: String,
    pub city: String,
    pub state: String,
    pub country: String,
    pub postal_code: String,
    pub recipient_name: String,
    pub recipient_phone: String,
    pub recipient_email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PickupPoint {
    #[serde(rename = "type")]
    pub kind: String,
    pub manual_address: RecipientAddress,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryDetails {
    pub pickup_address: PickupPoint,
    pub delivery_address: RecipientAddress,
    pub package_size: PackageSize,
    pub is_express_delivery: bool,
    pub estimated_delivery_date: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceBreakdown {
    pub product_total: f64,
    pub delivery_fee: f64,
    pub total: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentSummary {
    /// Receipt attachments; shape varies per payment provider, kept loose.
    #[serde(default)]
    pub receipts: Vec<Value>,
    pub price_breakdown: PriceBreakdown,
}

/// Full receipts view of one order, including the consumer and the stores
/// each line item belongs to. `consumer` is null for guest checkouts.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderDetails {
    pub order_id: String,
    pub tracking_number: String,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
    pub consumer: Option<ConsumerSummary>,
    pub items: Vec<ReceiptItem>,
    pub delivery_details: DeliveryDetails,
    pub payment_details: PaymentSummary,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_row_decodes() {
        let json = r#"{
            "_id": "665f1c2e9b1d8c0012a4e001",
            "userId": "665f1c2e9b1d8c0012a4e999",
            "trackingNumber": "PD-2024-000123",
            "status": "READY_FOR_PICKUP",
            "packageSize": "MEDIUM",
            "price": 24.5,
            "isFragile": true,
            "isExpressDelivery": false,
            "requiresSpecialHandling": false,
            "items": [{"_id": "i1", "name": "Ceramic vase", "quantity": 2}],
            "pickupAddress": {"street": "1 Market Rd", "city": "Lagos", "state": "LA",
                              "country": "NG", "postalCode": "100001"},
            "deliveryAddress": {"street": "7 Palm Ave", "city": "Lagos", "state": "LA",
                                "country": "NG", "postalCode": "100002",
                                "recipientName": "A. Okafor"},
            "estimatedDeliveryDate": "2024-06-05T12:00:00.000Z",
            "createdAt": "2024-06-01T09:30:00.000Z",
            "updatedAt": "2024-06-02T10:00:00.000Z"
        }"#;
        let order: Order = serde_json::from_str(json).unwrap();
        assert_eq!(order.status, OrderStatus::ReadyForPickup);
        assert_eq!(order.package_size, PackageSize::Medium);
        assert_eq!(order.items[0].quantity, 2);
        assert!(order.items[0].description.is_none());
        assert_eq!(
            order.delivery_address.recipient_name.as_deref(),
            Some("A. Okafor")
        );
    }

    #[test]
    fn stats_decode() {
        let json = r#"{
            "total": 100, "totalDelivered": 60, "totalPending": 10,
            "totalInTransit": 20, "totalCancelled": 7, "totalFailedDelivery": 3,
            "todayOrders": 5, "todayDelivered": 2,
            "revenue": {"total": 1234.5, "today": 99.0}
        }"#;
        let stats: OrderStats = serde_json::from_str(json).unwrap();
        assert_eq!(stats.total, 100);
        assert_eq!(stats.revenue.today, 99.0);
    }
}
