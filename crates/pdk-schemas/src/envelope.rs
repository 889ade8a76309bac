//! The `{success, data}` response envelope and pagination shapes.

use serde::{Deserialize, Serialize};

/// Every API response body is wrapped in `{success, data}`. Error responses
/// usually drop `data` and carry a `message` instead; both fields are
/// optional here so one type decodes either shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub data: Option<T>,
}

/// Pagination block attached to list responses.
///
/// The API has two spellings in the wild: `{total, page, limit, pages}` on
/// order/user/consumer lists and `{total, page, totalPages, hasMore}` on
/// store lists. One type decodes both; `limit` and `has_more` are absent on
/// the respective other shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub total: u64,
    pub page: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(alias = "totalPages")]
    pub pages: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub has_more: Option<bool>,
}
