//! `pdk orders …` handlers.

use anyhow::Result;

use pdk_client::OrderListQuery;

use super::{connect, dump, parse_date, parse_order_status};

pub async fn list(
    config_paths: &[String],
    page: u32,
    limit: u32,
    status: Option<String>,
    start_date: Option<String>,
    end_date: Option<String>,
) -> Result<()> {
    let query = OrderListQuery {
        page,
        limit,
        status: status.as_deref().map(parse_order_status).transpose()?,
        start_date: start_date.as_deref().map(parse_date).transpose()?,
        end_date: end_date.as_deref().map(parse_date).transpose()?,
    };

    let (client, session) = connect(config_paths).await?;
    let result = client.orders(&session, &query).await?;

    println!("total={}", result.pagination.total);
    println!("page={}", result.pagination.page);
    println!("pages={}", result.pagination.pages);
    dump(&result.orders)
}

pub async fn stats(config_paths: &[String]) -> Result<()> {
    let (client, session) = connect(config_paths).await?;
    let stats = client.order_stats(&session).await?;

    println!("total={}", stats.total);
    println!("delivered={}", stats.total_delivered);
    println!("pending={}", stats.total_pending);
    println!("in_transit={}", stats.total_in_transit);
    println!("cancelled={}", stats.total_cancelled);
    println!("failed_delivery={}", stats.total_failed_delivery);
    println!("today_orders={}", stats.today_orders);
    println!("today_delivered={}", stats.today_delivered);
    println!("revenue_total={}", stats.revenue.total);
    println!("revenue_today={}", stats.revenue.today);
    Ok(())
}

pub async fn details(config_paths: &[String], order_id: &str) -> Result<()> {
    let (client, session) = connect(config_paths).await?;
    let details = client.order_details(&session, order_id).await?;
    dump(&details)
}

/// Advance one step. The current status is read from the order itself and the
/// target comes from the lifecycle policy; the operator never names a status.
pub async fn advance(config_paths: &[String], order_id: &str, notes: Option<&str>) -> Result<()> {
    let (client, session) = connect(config_paths).await?;

    let details = client.order_details(&session, order_id).await?;
    let current = details.status;
    let Some(target) = current.next() else {
        anyhow::bail!(
            "order {} is {} (terminal); no transition is offered",
            order_id,
            current
        );
    };

    let update = client
        .advance_order(&session, order_id, current, notes)
        .await?;

    println!("advanced=true order_id={}", order_id);
    println!("from={current}");
    println!("to={}", update.order.status);
    println!("email_sent={}", update.email_sent);
    debug_assert_eq!(update.order.status, target);
    Ok(())
}
