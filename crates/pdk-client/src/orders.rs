//! Order operations: stats, listing, the receipts detail view, and the
//! status-transition write.
//!
//! Status writes consult the lifecycle policy *before* touching the network:
//! [`DeskClient::advance_order`] computes the single legal next status and is
//! the intended entry point. [`DeskClient::set_order_status`] is the raw wire
//! operation for callers that already hold a policy-derived target.

use chrono::NaiveDate;
use reqwest::Method;
use serde::Serialize;

use pdk_lifecycle::OrderStatus;
use pdk_schemas::{OrderDetails, OrderStats, OrderStatusUpdate, OrdersPage};

use crate::{validate_paging, ApiError, DeskClient, Session};

/// Filters for `GET /api/admin/orders`. Defaults mirror the dashboard:
/// page 1, 10 rows, no status/date filter.
#[derive(Debug, Clone)]
pub struct OrderListQuery {
    pub page: u32,
    pub limit: u32,
    pub status: Option<OrderStatus>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

impl Default for OrderListQuery {
    fn default() -> Self {
        Self {
            page: 1,
            limit: 10,
            status: None,
            start_date: None,
            end_date: None,
        }
    }
}

impl OrderListQuery {
    fn to_params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("page", self.page.to_string()),
            ("limit", self.limit.to_string()),
        ];
        if let Some(status) = self.status {
            params.push(("status", status.as_str().to_string()));
        }
        if let Some(d) = self.start_date {
            params.push(("startDate", d.format("%Y-%m-%d").to_string()));
        }
        if let Some(d) = self.end_date {
            params.push(("endDate", d.format("%Y-%m-%d").to_string()));
        }
        params
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct StatusBody {
    status: OrderStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    notes: Option<String>,
}

impl DeskClient {
    pub async fn order_stats(&self, session: &Session) -> Result<OrderStats, ApiError> {
        self.request(
            Method::GET,
            "/api/admin/orders/stats",
            Some(session),
            &[],
            None::<&()>,
        )
        .await
    }

    pub async fn orders(
        &self,
        session: &Session,
        query: &OrderListQuery,
    ) -> Result<OrdersPage, ApiError> {
        validate_paging(query.page, query.limit)?;
        if let (Some(start), Some(end)) = (query.start_date, query.end_date) {
            if end < start {
                return Err(ApiError::Validation(
                    "endDate must not precede startDate".to_string(),
                ));
            }
        }
        self.request(
            Method::GET,
            "/api/admin/orders",
            Some(session),
            &query.to_params(),
            None::<&()>,
        )
        .await
    }

    /// Full receipts view of one order.
    pub async fn order_details(
        &self,
        session: &Session,
        order_id: &str,
    ) -> Result<OrderDetails, ApiError> {
        self.request(
            Method::GET,
            &format!("/api/admin/orders/{order_id}/receipts"),
            Some(session),
            &[],
            None::<&()>,
        )
        .await
    }

    /// Advance an order one step along its lifecycle.
    ///
    /// The target status comes from the policy, never from the caller. A
    /// terminal `current` yields [`ApiError::Transition`] with **no request
    /// sent** and the remote state untouched.
    pub async fn advance_order(
        &self,
        session: &Session,
        order_id: &str,
        current: OrderStatus,
        notes: Option<&str>,
    ) -> Result<OrderStatusUpdate, ApiError> {
        let target = current.advance()?;
        self.set_order_status(session, order_id, target, notes).await
    }

    /// Raw status write (`PATCH /api/admin/orders/{id}/status`).
    ///
    /// Prefer [`advance_order`](Self::advance_order); a caller using this
    /// directly owns the legality of `status`.
    pub async fn set_order_status(
        &self,
        session: &Session,
        order_id: &str,
        status: OrderStatus,
        notes: Option<&str>,
    ) -> Result<OrderStatusUpdate, ApiError> {
        let body = StatusBody {
            status,
            notes: notes.map(str::to_string),
        };
        self.request(
            Method::PATCH,
            &format!("/api/admin/orders/{order_id}/status"),
            Some(session),
            &[],
            Some(&body),
        )
        .await
    }
}
