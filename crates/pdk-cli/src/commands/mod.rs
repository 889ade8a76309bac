//! Command handler modules for pdk-cli.
//!
//! Shared wiring (config load, login, argument parsing) lives here; the
//! per-resource logic lives in the submodules.

pub mod accounts;
pub mod notifications;
pub mod orders;
pub mod stores;
pub mod zones;

use anyhow::{Context, Result};
use tracing::info;

use pdk_client::{DeskClient, Session};
use pdk_config::DeskConfig;
use pdk_lifecycle::OrderStatus;
use pdk_schemas::{AccountStatus, StoreCategory, StoreStatus};

// ---------------------------------------------------------------------------
// Shared wiring
// ---------------------------------------------------------------------------

/// Load the layered config and build an (unauthenticated) client from it.
pub fn build_client(config_paths: &[String]) -> Result<(DeskClient, DeskConfig)> {
    let path_refs: Vec<&str> = config_paths.iter().map(|s| s.as_str()).collect();
    let loaded = pdk_config::load_layered_yaml(&path_refs)?;
    let cfg = DeskConfig::from_loaded(&loaded)?;

    let http = reqwest::Client::builder()
        .timeout(cfg.api.timeout())
        .build()
        .context("failed to build http client")?;
    let client = DeskClient::with_http(&cfg.api.base_url, http);

    info!(base_url = %cfg.api.base_url, config_hash = %loaded.config_hash, "config loaded");
    Ok((client, cfg))
}

/// Config + login: the standard preamble of every authenticated command.
pub async fn connect(config_paths: &[String]) -> Result<(DeskClient, Session)> {
    let (client, cfg) = build_client(config_paths)?;
    let creds = cfg.auth.credentials_env.resolve()?;
    let session = client
        .login(&creds.email, &creds.password)
        .await
        .context("login failed")?;
    info!(admin = %session.admin.email, "logged in");
    Ok((client, session))
}

// ---------------------------------------------------------------------------
// Argument parsing
// ---------------------------------------------------------------------------

pub fn parse_order_status(s: &str) -> Result<OrderStatus> {
    OrderStatus::parse(s).map_err(|e| anyhow::anyhow!(e))
}

/// Administrative store statuses only; PENDING is parsed too so the server
/// filter can use it, but the set-status command refuses it downstream.
pub fn parse_store_status(s: &str) -> Result<StoreStatus> {
    match s.trim().to_uppercase().as_str() {
        "ACTIVE" => Ok(StoreStatus::Active),
        "PENDING" => Ok(StoreStatus::Pending),
        "SUSPENDED" => Ok(StoreStatus::Suspended),
        other => anyhow::bail!(
            "invalid store status '{}'. expected one of: ACTIVE | PENDING | SUSPENDED",
            other
        ),
    }
}

pub fn parse_store_category(s: &str) -> Result<StoreCategory> {
    match s.trim().to_uppercase().as_str() {
        "FASHION" => Ok(StoreCategory::Fashion),
        "ELECTRONICS" => Ok(StoreCategory::Electronics),
        "OTHER" => Ok(StoreCategory::Other),
        other => anyhow::bail!(
            "invalid store category '{}'. expected one of: FASHION | ELECTRONICS | OTHER",
            other
        ),
    }
}

pub fn parse_account_status(s: &str) -> Result<AccountStatus> {
    match s.trim().to_lowercase().as_str() {
        "active" => Ok(AccountStatus::Active),
        "inactive" => Ok(AccountStatus::Inactive),
        other => anyhow::bail!(
            "invalid account status '{}'. expected one of: active | inactive",
            other
        ),
    }
}

pub fn parse_date(s: &str) -> Result<chrono::NaiveDate> {
    chrono::NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .with_context(|| format!("invalid date '{}', expected YYYY-MM-DD", s))
}

pub fn parse_utc(s: &str) -> Result<chrono::DateTime<chrono::Utc>> {
    chrono::DateTime::parse_from_rfc3339(s.trim())
        .map(|dt| dt.with_timezone(&chrono::Utc))
        .with_context(|| format!("invalid timestamp '{}', expected RFC 3339", s))
}

/// Pretty-print an entity or page as JSON.
pub fn dump<T: serde::Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_status_parse_is_case_insensitive() {
        assert_eq!(parse_store_status("active").unwrap(), StoreStatus::Active);
        assert_eq!(
            parse_store_status(" SUSPENDED ").unwrap(),
            StoreStatus::Suspended
        );
        assert!(parse_store_status("BANNED").is_err());
    }

    #[test]
    fn date_parse() {
        assert!(parse_date("2024-06-01").is_ok());
        assert!(parse_date("01/06/2024").is_err());
    }

    #[test]
    fn utc_parse() {
        assert!(parse_utc("2024-12-31T23:59:59Z").is_ok());
        assert!(parse_utc("next tuesday").is_err());
    }
}
