//! Payment notification events.

use chrono::{DateTime, Utc};
use pdk_lifecycle::NotificationStatus;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NotificationKind {
    NewPayment,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentNotificationDetails {
    pub order_number: String,
    pub amount: f64,
    pub payment_reference: String,
    pub consumer_name: String,
}

/// An event record tied to an order's payment. Status moves `UNREAD → READ`
/// once, never back; see `pdk_lifecycle::NotificationStatus`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentNotification {
    #[serde(rename = "_id")]
    pub id: String,
    pub order_id: String,
    #[serde(rename = "type")]
    pub kind: NotificationKind,
    pub status: NotificationStatus,
    pub details: PaymentNotificationDetails,
    pub created_at: DateTime<Utc>,
}

/// Notification lists are not paginated with the usual block; the API sends
/// the rows plus a bare total.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationsPage {
    pub notifications: Vec<PaymentNotification>,
    pub total: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notification_decodes() {
        let json = r#"{
            "_id": "n1",
            "orderId": "o1",
            "type": "NEW_PAYMENT",
            "status": "UNREAD",
            "details": {
                "orderNumber": "PD-2024-000123",
                "amount": 49.99,
                "paymentReference": "ref-778",
                "consumerName": "B. Adeyemi"
            },
            "createdAt": "2024-06-01T09:30:00.000Z"
        }"#;
        let n: PaymentNotification = serde_json::from_str(json).unwrap();
        assert_eq!(n.kind, NotificationKind::NewPayment);
        assert_eq!(n.status, NotificationStatus::Unread);
        assert!(n.status.needs_read_write());
    }
}
