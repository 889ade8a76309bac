//! `pdk stores …` handlers.

use anyhow::{Context, Result};

use pdk_client::StoreListQuery;
use pdk_schemas::{StoreOrderKey, StoreOrderUpdate};

use super::{
    build_client, connect, dump, parse_store_category, parse_store_status, parse_utc,
};

pub async fn list(
    config_paths: &[String],
    page: u32,
    limit: u32,
    status: Option<String>,
    category: Option<String>,
    min_revenue: Option<f64>,
    search: Option<String>,
) -> Result<()> {
    let query = StoreListQuery {
        page,
        limit,
        status: status.as_deref().map(parse_store_status).transpose()?,
        category: category.as_deref().map(parse_store_category).transpose()?,
        min_revenue,
        search,
    };

    let (client, session) = connect(config_paths).await?;
    let result = client.stores(&session, &query).await?;

    println!("total={}", result.pagination.total);
    println!("page={}", result.pagination.page);
    println!("pages={}", result.pagination.pages);
    dump(&result.stores)
}

pub async fn set_status(config_paths: &[String], store_id: &str, status: &str) -> Result<()> {
    let status = parse_store_status(status)?;

    let (client, session) = connect(config_paths).await?;
    let store = client.set_store_status(&session, store_id, status).await?;

    println!("updated=true store_id={}", store.id);
    println!("store_name={}", store.store_name);
    println!("status={}", store.status.as_str());
    Ok(())
}

pub async fn payment_details(config_paths: &[String], store_id: &str) -> Result<()> {
    let (client, session) = connect(config_paths).await?;
    let info = client.store_payment_details(&session, store_id).await?;
    dump(&info)
}

/// The storefront listing is public; no login preamble.
pub async fn public_list(config_paths: &[String]) -> Result<()> {
    let (client, _cfg) = build_client(config_paths)?;
    let result = client.public_store_list().await?;

    println!("total={}", result.pagination.total);
    dump(&result.stores)
}

pub async fn set_order(
    config_paths: &[String],
    store_id: &str,
    display_order: u32,
    featured: bool,
    featured_until: Option<String>,
    admin_notes: Option<String>,
) -> Result<()> {
    let update = StoreOrderUpdate {
        display_order,
        is_featured: featured,
        featured_until: featured_until.as_deref().map(parse_utc).transpose()?,
        admin_notes,
    };

    let (client, session) = connect(config_paths).await?;
    let store = client.set_store_order(&session, store_id, &update).await?;

    println!("updated=true store_id={}", store.id);
    println!("display_order={}", store.display_order);
    println!("is_featured={}", store.is_featured);
    Ok(())
}

pub async fn bulk_order(config_paths: &[String], entries: &[String]) -> Result<()> {
    let entries: Vec<StoreOrderKey> = entries
        .iter()
        .map(|raw| parse_bulk_entry(raw))
        .collect::<Result<_>>()?;

    let (client, session) = connect(config_paths).await?;
    let ack = client.bulk_store_order(&session, &entries).await?;

    println!("success={}", ack.success);
    println!("message={}", ack.message);
    Ok(())
}

/// Parse one `storeId=displayOrder` pair.
fn parse_bulk_entry(raw: &str) -> Result<StoreOrderKey> {
    let (store_id, order) = raw
        .split_once('=')
        .with_context(|| format!("invalid entry '{}', expected STORE_ID=DISPLAY_ORDER", raw))?;
    let display_order: u32 = order
        .trim()
        .parse()
        .with_context(|| format!("invalid display order in '{}'", raw))?;
    if store_id.trim().is_empty() {
        anyhow::bail!("invalid entry '{}': empty store id", raw);
    }
    Ok(StoreOrderKey {
        store_id: store_id.trim().to_string(),
        display_order,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bulk_entry_parses() {
        let key = parse_bulk_entry("s1=3").unwrap();
        assert_eq!(key.store_id, "s1");
        assert_eq!(key.display_order, 3);
    }

    #[test]
    fn bulk_entry_rejects_garbage() {
        assert!(parse_bulk_entry("s1").is_err());
        assert!(parse_bulk_entry("s1=minus-one").is_err());
        assert!(parse_bulk_entry("=3").is_err());
        assert!(parse_bulk_entry("s1=-1").is_err());
    }
}
