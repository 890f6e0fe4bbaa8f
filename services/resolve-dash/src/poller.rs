// services/resolve-dash/src/poller.rs
//
// Recurring dashboard refresh, tied to the lifetime of its handle

use std::sync::Arc;
use std::time::Duration;

use tokio::task::{JoinHandle, JoinSet};
use tokio::time::MissedTickBehavior;
use tracing::{debug, info};

use crate::api::AnalyticsApi;
use crate::dashboard::fetch_snapshot;
use crate::event::{AppEvent, EventSender};

/// Owns the polling task and the fetches it started. Dropping the handle
/// cancels both.
pub struct PollHandle {
    task: Option<JoinHandle<()>>,
}

impl PollHandle {
    /// Fetch immediately, then once per `every`.
    ///
    /// Each tick runs its fetch on a separate task so a hung request never
    /// delays the next tick. Fetches live in a `JoinSet` owned by the poller,
    /// so aborting the poller aborts any cycle still in flight.
    pub fn start(api: Arc<dyn AnalyticsApi>, every: Duration, events: EventSender) -> Self {
        info!("Starting dashboard poller (every {:?})", every);

        let task = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(every);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            let mut in_flight = JoinSet::new();

            loop {
                tokio::select! {
                    _ = ticker.tick() => {
                        if events.is_closed() {
                            debug!("Event receiver gone, poller exiting");
                            break;
                        }
                        in_flight.spawn(refresh_cycle(api.clone(), events.clone()));
                    }
                    Some(_) = in_flight.join_next(), if !in_flight.is_empty() => {}
                }
            }
        });

        Self { task: Some(task) }
    }

    /// Cancel the task. Returns `true` only for the call that did it.
    pub fn stop(&mut self) -> bool {
        match self.task.take() {
            Some(task) => {
                task.abort();
                info!("Dashboard poller stopped");
                true
            }
            None => false,
        }
    }
}

impl Drop for PollHandle {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Run one refresh cycle in the background, reporting start and outcome.
pub fn spawn_refresh(api: Arc<dyn AnalyticsApi>, events: EventSender) -> JoinHandle<()> {
    tokio::spawn(refresh_cycle(api, events))
}

async fn refresh_cycle(api: Arc<dyn AnalyticsApi>, events: EventSender) {
    if events.send(AppEvent::RefreshStarted).is_err() {
        return;
    }
    let outcome = fetch_snapshot(api.as_ref()).await;
    let _ = events.send(AppEvent::Refreshed(outcome));
}
