use std::time::Duration as StdDuration;

use application::service::SweepService;
use time::macros::{offset, time};
use time::{Duration, OffsetDateTime};
use tokio::task::JoinHandle;

use crate::handler::AppModule;

/// Runs the blacklist sweep once a day at noon, Indochina time. The loop
/// awaits each sweep to completion before scheduling the next fire, so at
/// most one sweep is ever in flight.
pub fn spawn_daily_sweep(module: AppModule) -> JoinHandle<()> {
    tokio::spawn(async move {
        loop {
            let now = OffsetDateTime::now_utc().to_offset(offset!(+7));
            tokio::time::sleep(until_next_fire(now)).await;

            match module.storage().run_sweep().await {
                Ok(summary) => tracing::info!(
                    "sweep finished: {} scanned, {} newly listed, {} already listed, {} failed",
                    summary.scanned,
                    summary.newly_listed,
                    summary.already_listed,
                    summary.failed
                ),
                // Wait for the next fire rather than retrying immediately.
                Err(report) => tracing::error!("sweep aborted: {report:?}"),
            }
        }
    })
}

fn until_next_fire(now: OffsetDateTime) -> StdDuration {
    let todays_fire = now.replace_time(time!(12:00));
    let next_fire = if now < todays_fire {
        todays_fire
    } else {
        todays_fire + Duration::days(1)
    };
    StdDuration::try_from(next_fire - now).unwrap_or(StdDuration::ZERO)
}
