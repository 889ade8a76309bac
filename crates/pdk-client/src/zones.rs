//! Delivery-zone CRUD. The one entity this system creates, updates and
//! deletes end to end.

use reqwest::Method;

use pdk_schemas::{Zone, ZoneDraft, ZonePatch};

use crate::{ApiError, DeskClient, Session};

/// Reject a create payload before any write: a zone needs a real name and a
/// strictly positive delivery price.
pub fn validate_zone_draft(draft: &ZoneDraft) -> Result<(), ApiError> {
    if draft.name.trim().is_empty() {
        return Err(ApiError::Validation("zone name must not be empty".to_string()));
    }
    validate_price(draft.delivery_price)
}

/// Reject an update payload before any write. Absent fields are fine;
/// present ones must hold.
pub fn validate_zone_patch(patch: &ZonePatch) -> Result<(), ApiError> {
    if let Some(name) = &patch.name {
        if name.trim().is_empty() {
            return Err(ApiError::Validation("zone name must not be empty".to_string()));
        }
    }
    if let Some(price) = patch.delivery_price {
        validate_price(price)?;
    }
    Ok(())
}

fn validate_price(price: f64) -> Result<(), ApiError> {
    if !price.is_finite() || price <= 0.0 {
        return Err(ApiError::Validation(format!(
            "deliveryPrice must be strictly positive, got {price}"
        )));
    }
    Ok(())
}

impl DeskClient {
    pub async fn zones(&self, session: &Session) -> Result<Vec<Zone>, ApiError> {
        self.request(Method::GET, "/api/zones", Some(session), &[], None::<&()>)
            .await
    }

    pub async fn active_zones(&self, session: &Session) -> Result<Vec<Zone>, ApiError> {
        self.request(
            Method::GET,
            "/api/zones/active",
            Some(session),
            &[],
            None::<&()>,
        )
        .await
    }

    pub async fn create_zone(
        &self,
        session: &Session,
        draft: &ZoneDraft,
    ) -> Result<Zone, ApiError> {
        validate_zone_draft(draft)?;
        self.request(Method::POST, "/api/zones", Some(session), &[], Some(draft))
            .await
    }

    pub async fn update_zone(
        &self,
        session: &Session,
        zone_id: &str,
        patch: &ZonePatch,
    ) -> Result<Zone, ApiError> {
        validate_zone_patch(patch)?;
        self.request(
            Method::PUT,
            &format!("/api/zones/{zone_id}"),
            Some(session),
            &[],
            Some(patch),
        )
        .await
    }

    pub async fn delete_zone(&self, session: &Session, zone_id: &str) -> Result<(), ApiError> {
        self.request_no_data(
            Method::DELETE,
            &format!("/api/zones/{zone_id}"),
            Some(session),
            &[],
            None::<&()>,
        )
        .await
    }
}
