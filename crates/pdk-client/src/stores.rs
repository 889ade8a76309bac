//! Store administration: listing, status, banking details, and the
//! display-order (listing position / featured flag) writes.

use reqwest::Method;
use serde::Serialize;

use pdk_schemas::{
    BulkOrderAck, Store, StoreCategory, StoreOrderKey, StoreOrderUpdate, StorePaymentInfo,
    StoreStatus, StoresPage,
};

use crate::{validate_paging, ApiError, DeskClient, Session};

/// Filters for `GET /api/admin/stores`.
#[derive(Debug, Clone)]
pub struct StoreListQuery {
    pub page: u32,
    pub limit: u32,
    pub status: Option<StoreStatus>,
    pub category: Option<StoreCategory>,
    pub min_revenue: Option<f64>,
    pub search: Option<String>,
}

impl Default for StoreListQuery {
    fn default() -> Self {
        Self {
            page: 1,
            limit: 10,
            status: None,
            category: None,
            min_revenue: None,
            search: None,
        }
    }
}

impl StoreListQuery {
    fn to_params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("page", self.page.to_string()),
            ("limit", self.limit.to_string()),
        ];
        if let Some(status) = self.status {
            params.push(("status", status.as_str().to_string()));
        }
        if let Some(category) = self.category {
            params.push(("category", category.as_str().to_string()));
        }
        if let Some(min) = self.min_revenue {
            params.push(("minRevenue", min.to_string()));
        }
        if let Some(search) = &self.search {
            params.push(("search", search.clone()));
        }
        params
    }
}

#[derive(Serialize)]
struct StatusBody {
    status: StoreStatus,
}

#[derive(Serialize)]
struct BulkBody<'a> {
    stores: &'a [StoreOrderKey],
}

impl DeskClient {
    pub async fn stores(
        &self,
        session: &Session,
        query: &StoreListQuery,
    ) -> Result<StoresPage, ApiError> {
        validate_paging(query.page, query.limit)?;
        self.request(
            Method::GET,
            "/api/admin/stores",
            Some(session),
            &query.to_params(),
            None::<&()>,
        )
        .await
    }

    /// Set a store's status. Only `ACTIVE` and `SUSPENDED` are administrative
    /// actions; `PENDING` is the server-owned onboarding state and is refused
    /// locally.
    pub async fn set_store_status(
        &self,
        session: &Session,
        store_id: &str,
        status: StoreStatus,
    ) -> Result<Store, ApiError> {
        if status == StoreStatus::Pending {
            return Err(ApiError::Validation(
                "store status can only be set to ACTIVE or SUSPENDED".to_string(),
            ));
        }
        self.request(
            Method::PATCH,
            &format!("/api/admin/stores/{store_id}/status"),
            Some(session),
            &[],
            Some(&StatusBody { status }),
        )
        .await
    }

    pub async fn store_payment_details(
        &self,
        session: &Session,
        store_id: &str,
    ) -> Result<StorePaymentInfo, ApiError> {
        self.request(
            Method::GET,
            &format!("/api/admin/stores/{store_id}/payment-details"),
            Some(session),
            &[],
            None::<&()>,
        )
        .await
    }

    /// The unauthenticated storefront listing (`GET /api/stores/list`).
    pub async fn public_store_list(&self) -> Result<StoresPage, ApiError> {
        self.request(Method::GET, "/api/stores/list", None, &[], None::<&()>)
            .await
    }

    /// Update one store's listing position and featured metadata.
    pub async fn set_store_order(
        &self,
        session: &Session,
        store_id: &str,
        update: &StoreOrderUpdate,
    ) -> Result<Store, ApiError> {
        self.request(
            Method::PATCH,
            &format!("/api/admin/stores/{store_id}/order"),
            Some(session),
            &[],
            Some(update),
        )
        .await
    }

    /// Rewrite listing positions for several stores in one call. Answers
    /// outside the envelope with a bare ack.
    pub async fn bulk_store_order(
        &self,
        session: &Session,
        entries: &[StoreOrderKey],
    ) -> Result<BulkOrderAck, ApiError> {
        if entries.is_empty() {
            return Err(ApiError::Validation(
                "bulk order update needs at least one store".to_string(),
            ));
        }
        self.request_raw(
            Method::POST,
            "/api/admin/stores/bulk-order",
            Some(session),
            &[],
            Some(&BulkBody { stores: entries }),
        )
        .await
    }
}
