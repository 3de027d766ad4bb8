//! Polling worker for periodic panel refresh

use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

use tokio::time::MissedTickBehavior;
use tracing::{debug, info};

use crate::refresh::refresher::{PollTarget, TickOutcome};

/// Poller worker options
#[derive(Debug, Clone)]
pub struct Options {
    /// Polling interval
    pub interval: Duration,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            interval: Duration::from_millis(2000),
        }
    }
}

/// Run the poller worker
///
/// The first tick fires immediately. Ticks that come due while a refresh is
/// still running are skipped rather than queued.
pub async fn run<T>(
    options: &Options,
    target: &T,
    mut shutdown_signal: Pin<Box<dyn Future<Output = ()> + Send>>,
) where
    T: PollTarget + ?Sized,
{
    info!("Poller worker starting (every {:?})...", options.interval);

    let mut ticker = tokio::time::interval(options.interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    loop {
        tokio::select! {
            _ = &mut shutdown_signal => {
                info!("Poller worker shutting down...");
                return;
            }
            _ = ticker.tick() => {
                // Continue with refresh
            }
        }

        tokio::select! {
            _ = &mut shutdown_signal => {
                info!("Poller worker shutting down mid-refresh...");
                return;
            }
            outcome = target.tick() => {
                if outcome == TickOutcome::Skipped {
                    debug!("Refresh skipped, previous one still running");
                }
            }
        }
    }
}
