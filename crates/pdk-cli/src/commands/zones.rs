//! `pdk zones …` handlers.

use anyhow::Result;

use pdk_schemas::{ZoneDraft, ZonePatch};

use super::{connect, dump};

pub async fn list(config_paths: &[String], active_only: bool) -> Result<()> {
    let (client, session) = connect(config_paths).await?;
    let zones = if active_only {
        client.active_zones(&session).await?
    } else {
        client.zones(&session).await?
    };
    println!("count={}", zones.len());
    dump(&zones)
}

pub async fn create(
    config_paths: &[String],
    name: String,
    price: f64,
    is_active: bool,
) -> Result<()> {
    let draft = ZoneDraft {
        name,
        delivery_price: price,
        is_active,
    };

    let (client, session) = connect(config_paths).await?;
    let zone = client.create_zone(&session, &draft).await?;

    println!("created=true zone_id={}", zone.id);
    println!("name={}", zone.name);
    println!("delivery_price={}", zone.delivery_price);
    println!("is_active={}", zone.is_active);
    Ok(())
}

pub async fn update(
    config_paths: &[String],
    zone_id: &str,
    name: Option<String>,
    price: Option<f64>,
    description: Option<String>,
    active: Option<bool>,
) -> Result<()> {
    let patch = ZonePatch {
        name,
        delivery_price: price,
        description,
        is_active: active,
    };

    let (client, session) = connect(config_paths).await?;
    let zone = client.update_zone(&session, zone_id, &patch).await?;

    println!("updated=true zone_id={}", zone.id);
    println!("name={}", zone.name);
    println!("delivery_price={}", zone.delivery_price);
    println!("is_active={}", zone.is_active);
    Ok(())
}

pub async fn delete(config_paths: &[String], zone_id: &str) -> Result<()> {
    let (client, session) = connect(config_paths).await?;
    client.delete_zone(&session, zone_id).await?;
    println!("deleted=true zone_id={}", zone_id);
    Ok(())
}
