//! `pdk notifications …` handlers.

use anyhow::Result;

use pdk_lifecycle::NotificationStatus;

use super::{connect, dump};

pub async fn list(config_paths: &[String], page: u32, limit: u32) -> Result<()> {
    let (client, session) = connect(config_paths).await?;
    let result = client.payment_notifications(&session, page, limit).await?;

    let unread = result
        .notifications
        .iter()
        .filter(|n| n.status.needs_read_write())
        .count();
    println!("total={}", result.total);
    println!("unread={}", unread);
    dump(&result.notifications)
}

pub async fn mark_read(config_paths: &[String], notification_id: &str) -> Result<()> {
    let (client, session) = connect(config_paths).await?;

    // The operator intends a write; the record-level no-op path is for
    // callers that already hold the row and know it is READ.
    let changed = client
        .mark_notification_read(&session, notification_id, NotificationStatus::Unread)
        .await?;

    println!("marked_read={changed} notification_id={notification_id}");
    Ok(())
}
