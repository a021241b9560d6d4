use tokio_cron_scheduler::{Job, JobScheduler};

use crate::{error::AppError, service::blackjack::BlackjackService};

/// Starts the blackjack session expiry scheduler
///
/// Runs every 15 seconds and drops sessions whose owner has not acted within the
/// timeout. Sessions are also checked when a button is pressed, so this only bounds
/// how long abandoned games stay in memory.
///
/// # Arguments
/// - `blackjack`: Session registry to sweep
///
/// # Returns
/// - `Ok(())` - The sweep job is scheduled and running
/// - `Err(AppError::SchedulerErr)` - The job could not be created or started
pub async fn start_scheduler(blackjack: BlackjackService) -> Result<(), AppError> {
    let scheduler = JobScheduler::new().await?;

    let job = Job::new_async("*/15 * * * * *", move |_uuid, _lock| {
        let blackjack = blackjack.clone();

        Box::pin(async move {
            let removed = blackjack.sweep_expired().await;
            if removed > 0 {
                tracing::debug!(
                    "Expired {} idle blackjack session(s), {} still active",
                    removed,
                    blackjack.active_sessions().await
                );
            }
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;

    tracing::info!("Blackjack session expiry scheduler started");

    Ok(())
}
