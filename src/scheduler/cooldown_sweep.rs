use dioxus_logger::tracing;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::{error::AppError, service::cooldown::CooldownService};

/// Starts the cooldown sweep scheduler
///
/// This scheduler runs every 10 minutes and drops cooldown entries that have
/// already elapsed, so users who roll once and leave don't stay in memory.
///
/// # Arguments
/// - `cooldowns`: Cooldown tracker shared with the bot
pub async fn start_scheduler(cooldowns: CooldownService) -> Result<(), AppError> {
    let scheduler = JobScheduler::new().await?;

    let job = Job::new_async("0 */10 * * * *", move |_uuid, _lock| {
        let cooldowns = cooldowns.clone();

        Box::pin(async move {
            let removed = cooldowns.purge_expired().await;
            if removed > 0 {
                tracing::debug!(
                    "Purged {} expired cooldowns, {} remaining",
                    removed,
                    cooldowns.len().await
                );
            }
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;

    tracing::info!("Cooldown sweep scheduler started");

    Ok(())
}
