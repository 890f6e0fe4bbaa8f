// services/resolve-dash/src/dashboard.rs
//
// Resolve Dashboard - refresh cycle, view model and page composition
//

use std::sync::Arc;

use chrono::{DateTime, Local};
use ratatui::prelude::*;
use svckit::config::DashboardConfig;
use svckit::types::{DashboardData, SummaryStats, TrendSeries};
use svckit::DashResult;
use tracing::{debug, info, warn};

use crate::api::AnalyticsApi;
use crate::components::stat_card::{Accent, StatCard};
use crate::components::{
    alerts, colors, fault_distribution, header, message, product_health, resolution_metrics,
    stat_card, trend_chart,
};
use crate::event::EventSender;
use crate::poller::{spawn_refresh, PollHandle};
use crate::trend::TrendChart;

pub const LOADING_MESSAGE: &str = "Loading dashboard...";
pub const LOAD_ERROR: &str = "Failed to load dashboard data";

/// Result of one successful refresh cycle. Both halves are applied together.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub data: DashboardData,
    pub summary: SummaryStats,
}

/// Issue both requests concurrently; either failing fails the cycle.
pub async fn fetch_snapshot(api: &dyn AnalyticsApi) -> DashResult<Snapshot> {
    let (data, summary) = tokio::try_join!(api.dashboard(), api.summary())?;
    Ok(Snapshot { data, summary })
}

/// What the dashboard area shows right now.
#[derive(Debug, PartialEq)]
pub enum Screen<'a> {
    Loading,
    Error(&'a str),
    Ready(&'a Snapshot),
}

pub struct Dashboard {
    api: Arc<dyn AnalyticsApi>,
    events: EventSender,
    config: DashboardConfig,
    loading: bool,
    refreshing: bool,
    snapshot: Option<Snapshot>,
    error: Option<String>,
    last_updated: Option<DateTime<Local>>,
    trend: Option<TrendChart>,
    poller: Option<PollHandle>,
}

impl Dashboard {
    pub fn new(api: Arc<dyn AnalyticsApi>, events: EventSender, config: DashboardConfig) -> Self {
        Self {
            api,
            events,
            config,
            loading: true,
            refreshing: false,
            snapshot: None,
            error: None,
            last_updated: None,
            trend: None,
            poller: None,
        }
    }

    /// Start polling. Calling it again while mounted is a no-op.
    pub fn mount(&mut self) {
        if self.poller.is_none() {
            self.poller = Some(PollHandle::start(
                self.api.clone(),
                self.config.poll_interval(),
                self.events.clone(),
            ));
        }
    }

    /// Stop polling. Returns whether a running poller was cancelled.
    pub fn unmount(&mut self) -> bool {
        self.poller.take().map(|mut p| p.stop()).unwrap_or(false)
    }

    pub fn is_mounted(&self) -> bool {
        self.poller.is_some()
    }

    /// Manual refresh. Ignored while a cycle is already in flight.
    pub fn request_refresh(&mut self) -> bool {
        if self.refreshing {
            debug!("Refresh already in flight, ignoring request");
            return false;
        }
        info!("Manual dashboard refresh");
        self.refreshing = true;
        spawn_refresh(self.api.clone(), self.events.clone());
        true
    }

    pub fn on_refresh_started(&mut self) {
        self.refreshing = true;
    }

    pub fn apply_refresh(&mut self, outcome: DashResult<Snapshot>) {
        match outcome {
            Ok(snapshot) => {
                debug!("Dashboard refreshed");
                self.snapshot = Some(snapshot);
                self.error = None;
                self.last_updated = Some(Local::now());
            }
            Err(e) => {
                warn!("Failed to refresh dashboard: {}", e);
                self.error = Some(LOAD_ERROR.to_string());
            }
        }
        self.loading = false;
        self.refreshing = false;
    }

    /// The trend chart appears with the first data and fetches once.
    pub fn mount_trend(&mut self) {
        if self.trend.is_some() || self.snapshot.is_none() {
            return;
        }
        self.trend = Some(TrendChart::new(self.config.trend_days));
        TrendChart::spawn_fetch(self.api.clone(), self.config.trend_days, self.events.clone());
    }

    pub fn apply_trend(&mut self, outcome: DashResult<TrendSeries>) {
        if let Some(trend) = self.trend.as_mut() {
            trend.apply(outcome);
        }
    }

    pub fn is_refreshing(&self) -> bool {
        self.refreshing
    }

    pub fn trend(&self) -> Option<&TrendChart> {
        self.trend.as_ref()
    }

    /// A failed cycle only surfaces as an error view until data has loaded once.
    pub fn screen(&self) -> Screen<'_> {
        if self.loading {
            return Screen::Loading;
        }
        match (&self.snapshot, &self.error) {
            (Some(snapshot), _) => Screen::Ready(snapshot),
            (None, Some(error)) => Screen::Error(error),
            (None, None) => Screen::Loading,
        }
    }

    pub fn draw(&self, frame: &mut Frame, area: Rect) {
        match self.screen() {
            Screen::Loading => message::draw(frame, area, LOADING_MESSAGE, colors::MUTED),
            Screen::Error(error) => message::draw(frame, area, error, colors::RED),
            Screen::Ready(snapshot) => self.draw_ready(frame, area, snapshot),
        }
    }

    fn draw_ready(&self, frame: &mut Frame, area: Rect, snapshot: &Snapshot) {
        let alerts_height = alerts::height(snapshot.data.critical_alerts.as_ref());

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),             // Header
                Constraint::Length(5),             // Stat cards
                Constraint::Min(16),               // Charts
                Constraint::Length(alerts_height), // Alerts
            ])
            .split(area);

        header::draw(frame, rows[0], self.refreshing, self.last_updated.as_ref());
        draw_stat_cards(frame, rows[1], &stat_cards(&snapshot.summary));

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(rows[2]);

        let left = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(columns[0]);

        let right = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(6), Constraint::Length(5)])
            .split(columns[1]);

        fault_distribution::draw(frame, left[0], snapshot.data.fault_distribution.as_ref());
        trend_chart::draw(frame, left[1], self.trend.as_ref());
        product_health::draw(frame, right[0], snapshot.data.product_health.as_ref());
        resolution_metrics::draw(frame, right[1], snapshot.data.resolution_metrics.as_ref());
        alerts::draw(frame, rows[3], snapshot.data.critical_alerts.as_ref());
    }
}

/// The four headline cards.
pub fn stat_cards(summary: &SummaryStats) -> [StatCard; 4] {
    [
        StatCard::new(
            "Total Complaints",
            summary.total_complaints.unwrap_or(0).to_string(),
            "+12%",
            Accent::Blue,
        ),
        StatCard::new(
            "Resolution Rate",
            format!("{}%", summary.resolution_rate.unwrap_or(0.0)),
            "+5%",
            Accent::Green,
        ),
        StatCard::new(
            "Critical Issues",
            summary.critical_complaints.unwrap_or(0).to_string(),
            "-3%",
            Accent::Red,
        ),
        StatCard::new(
            "Avg Satisfaction",
            summary.average_satisfaction_display(),
            "+8%",
            Accent::Blue,
        ),
    ]
}

fn draw_stat_cards(frame: &mut Frame, area: Rect, cards: &[StatCard]) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(vec![Constraint::Ratio(1, cards.len() as u32); cards.len()])
        .split(area);

    for (card, chunk) in cards.iter().zip(chunks.iter()) {
        stat_card::draw(frame, *chunk, card);
    }
}
