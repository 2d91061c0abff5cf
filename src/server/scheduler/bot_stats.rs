use sea_orm::DatabaseConnection;
use std::sync::Arc;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::server::{
    bot::{gateway::DiscordGateway, status::BotStatus},
    error::AppError,
    service::stats::StatsService,
};

/// Starts the bot statistics snapshot scheduler.
///
/// Each run records the current guild, user and command counters. Runs before the
/// bot reports ready are skipped so the history doesn't start with empty caches.
///
/// # Arguments
/// - `db` - Database connection
/// - `gateway` - Source of cached counts
/// - `status` - Bot status, for readiness and uptime
/// - `cron` - Six-field cron expression, e.g. `0 */5 * * * *`
///
/// # Returns
/// - `Ok(JobScheduler)` - The running scheduler; dropping it does not stop the job
/// - `Err(AppError::SchedulerErr)` - Invalid cron expression or scheduler failure
pub async fn start_scheduler(
    db: DatabaseConnection,
    gateway: Arc<dyn DiscordGateway>,
    status: BotStatus,
    cron: &str,
) -> Result<JobScheduler, AppError> {
    let scheduler = JobScheduler::new().await?;

    let job = Job::new_async(cron, move |_uuid, _lock| {
        let db = db.clone();
        let gateway = gateway.clone();
        let status = status.clone();

        Box::pin(async move {
            if let Err(e) = record_snapshot(&db, gateway.as_ref(), &status).await {
                tracing::error!("Error recording bot stats snapshot: {}", e);
            }
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;

    tracing::info!("Bot stats scheduler started ({})", cron);

    Ok(scheduler)
}

async fn record_snapshot(
    db: &DatabaseConnection,
    gateway: &dyn DiscordGateway,
    status: &BotStatus,
) -> Result<(), AppError> {
    if !status.snapshot().await.online {
        tracing::debug!("Skipping stats snapshot, bot not ready");
        return Ok(());
    }

    let snapshot = StatsService::new(db).snapshot(gateway, status.uptime()).await?;

    tracing::debug!(
        "Recorded stats snapshot: {} guilds, {} users, {} commands",
        snapshot.server_count,
        snapshot.user_count,
        snapshot.commands_executed
    );

    Ok(())
}
