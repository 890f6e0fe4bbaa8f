// services/resolve-dash/src/trend.rs
//
// Complaint trend series, fetched once when the chart first appears

use std::sync::Arc;

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use svckit::types::TrendSeries;
use svckit::DashResult;
use tokio::task::JoinHandle;
use tracing::error;

use crate::api::AnalyticsApi;
use crate::event::{AppEvent, EventSender};

#[derive(Debug, Clone, PartialEq)]
pub struct ChartPoint {
    pub label: String,
    pub complaints: u64,
}

#[derive(Debug, Clone)]
pub struct TrendChart {
    days: u32,
    loading: bool,
    points: Vec<ChartPoint>,
}

impl TrendChart {
    pub fn new(days: u32) -> Self {
        Self {
            days,
            loading: true,
            points: Vec::new(),
        }
    }

    pub fn spawn_fetch(api: Arc<dyn AnalyticsApi>, days: u32, events: EventSender) -> JoinHandle<()> {
        tokio::spawn(async move {
            let outcome = api.trends(days).await;
            let _ = events.send(AppEvent::TrendLoaded(outcome));
        })
    }

    /// A failed fetch leaves an empty chart rather than an error.
    pub fn apply(&mut self, outcome: DashResult<TrendSeries>) {
        match outcome {
            Ok(series) => {
                self.points = series
                    .data
                    .into_iter()
                    .map(|p| ChartPoint {
                        label: format_trend_date(&p.date),
                        complaints: p.complaints,
                    })
                    .collect();
            }
            Err(e) => {
                error!("Failed to load trend data: {}", e);
                self.points.clear();
            }
        }
        self.loading = false;
    }

    pub fn days(&self) -> u32 {
        self.days
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn points(&self) -> &[ChartPoint] {
        &self.points
    }
}

/// `2024-01-05` (or a full timestamp) to `Jan 5`. Unparseable input is kept.
pub fn format_trend_date(raw: &str) -> String {
    let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.date_naive()))
        .or_else(|| {
            NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
                .ok()
                .map(|dt| dt.date())
        });

    match date {
        Some(date) => date.format("%b %-d").to_string(),
        None => raw.to_string(),
    }
}
