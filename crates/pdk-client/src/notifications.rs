//! Payment notifications: listing and the one-way mark-as-read write.

use reqwest::Method;

use pdk_lifecycle::NotificationStatus;
use pdk_schemas::NotificationsPage;

use crate::{validate_paging, ApiError, DeskClient, Session};

impl DeskClient {
    pub async fn payment_notifications(
        &self,
        session: &Session,
        page: u32,
        limit: u32,
    ) -> Result<NotificationsPage, ApiError> {
        validate_paging(page, limit)?;
        self.request(
            Method::GET,
            "/api/admin/notifications/payments",
            Some(session),
            &[("page", page.to_string()), ("limit", limit.to_string())],
            None::<&()>,
        )
        .await
    }

    /// Mark a notification read. Idempotent from the caller's perspective:
    /// an already-`READ` record is a local no-op, returns `Ok(false)` and
    /// issues no request. Returns `Ok(true)` when the write happened.
    pub async fn mark_notification_read(
        &self,
        session: &Session,
        notification_id: &str,
        current: NotificationStatus,
    ) -> Result<bool, ApiError> {
        if !current.needs_read_write() {
            return Ok(false);
        }
        self.request_no_data(
            Method::PATCH,
            &format!("/api/admin/notifications/{notification_id}/mark-read"),
            Some(session),
            &[],
            None::<&()>,
        )
        .await?;
        Ok(true)
    }
}
