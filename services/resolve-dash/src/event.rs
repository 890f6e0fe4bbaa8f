// services/resolve-dash/src/event.rs
//
// Messages from background fetch tasks to the UI loop

use svckit::types::TrendSeries;
use svckit::DashResult;
use tokio::sync::mpsc;

use crate::dashboard::Snapshot;

#[derive(Debug)]
pub enum AppEvent {
    /// Outcome of the one-time startup probe.
    Health(DashResult<()>),
    /// A refresh cycle went out (timer or manual).
    RefreshStarted,
    Refreshed(DashResult<Snapshot>),
    TrendLoaded(DashResult<TrendSeries>),
}

pub type EventSender = mpsc::UnboundedSender<AppEvent>;
pub type EventReceiver = mpsc::UnboundedReceiver<AppEvent>;

pub fn channel() -> (EventSender, EventReceiver) {
    mpsc::unbounded_channel()
}
