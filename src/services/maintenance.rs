//! Scheduled restart and shutdown plumbing.
//!
//! DESIGN
//! ======
//! The room is ephemeral: a background tick trips the graceful-shutdown path
//! at 00:00 UTC every day, and the process supervisor brings the service
//! back up with a fresh, empty room. External termination signals ride the
//! same path, so there is exactly one way the server stops.

use std::time::Duration;

use time::{OffsetDateTime, Time};
use tracing::info;

/// Resolve when the server should shut down: the daily restart tick or an
/// external termination signal, whichever comes first.
pub async fn shutdown_signal() {
    tokio::select! {
        () = daily_restart() => info!("daily restart window reached; shutting down"),
        () = terminate_signal() => info!("termination signal received; shutting down"),
    }
}

/// Sleep until the next 00:00 UTC.
async fn daily_restart() {
    tokio::time::sleep(until_next_midnight_utc(OffsetDateTime::now_utc())).await;
}

/// Duration from `now` to the following 00:00 UTC. Always at least one
/// second, so a tick exactly at midnight cannot loop hot.
fn until_next_midnight_utc(now: OffsetDateTime) -> Duration {
    let Some(next_day) = now.date().next_day() else {
        // Calendar overflow (year 9999); effectively never restart.
        return Duration::from_secs(u64::MAX);
    };
    let next_midnight = next_day.with_time(Time::MIDNIGHT).assume_utc();
    let gap = next_midnight - now;
    let secs = u64::try_from(gap.whole_seconds()).unwrap_or(0).max(1);
    Duration::from_secs(secs)
}

async fn terminate_signal() {
    let ctrl_c = async {
        let _ = tokio::signal::ctrl_c().await;
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(_) => std::future::pending::<()>().await,
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
}

#[cfg(test)]
#[path = "maintenance_test.rs"]
mod tests;
