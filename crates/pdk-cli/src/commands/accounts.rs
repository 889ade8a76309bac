//! `pdk users …` and `pdk consumers …` handlers.

use anyhow::Result;

use pdk_client::ConsumerListQuery;

use super::{connect, dump, parse_account_status};

pub async fn users(config_paths: &[String], page: u32, limit: u32) -> Result<()> {
    let (client, session) = connect(config_paths).await?;
    let result = client.users(&session, page, limit).await?;

    println!("total={}", result.pagination.total);
    println!("page={}", result.pagination.page);
    println!("pages={}", result.pagination.pages);
    dump(&result.users)
}

pub async fn user_details(config_paths: &[String], user_id: &str) -> Result<()> {
    let (client, session) = connect(config_paths).await?;
    let details = client.user_details(&session, user_id).await?;

    println!("user_id={}", details.user.id);
    println!("email={}", details.user.email);
    println!("orders={}", details.orders.len());
    dump(&details)
}

pub async fn consumers(
    config_paths: &[String],
    page: u32,
    limit: u32,
    status: Option<String>,
    search: Option<String>,
) -> Result<()> {
    let query = ConsumerListQuery {
        page,
        limit,
        status: status.as_deref().map(parse_account_status).transpose()?,
        search,
    };

    let (client, session) = connect(config_paths).await?;
    let result = client.consumers(&session, &query).await?;

    println!("total={}", result.pagination.total);
    println!("page={}", result.pagination.page);
    println!("pages={}", result.pagination.pages);
    dump(&result.consumers)
}

pub async fn consumer_stats(config_paths: &[String]) -> Result<()> {
    let (client, session) = connect(config_paths).await?;
    let stats = client.consumer_stats(&session).await?;

    println!("total={}", stats.total);
    println!("active={}", stats.active);
    println!("inactive={}", stats.inactive);
    println!("new_today={}", stats.new_today);
    println!("new_this_week={}", stats.new_this_week);
    println!("new_this_month={}", stats.new_this_month);
    Ok(())
}
