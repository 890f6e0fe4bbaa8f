// services/resolve-dash/src/app.rs
//
// Resolve Dashboard - Application shell: health gate, navigation, key handling
//

use std::sync::Arc;

use crossterm::event::KeyCode;
use ratatui::prelude::*;
use ratatui::widgets::*;
use svckit::config::DashboardConfig;
use tokio::task::JoinHandle;
use tracing::{error, info};

use crate::api::AnalyticsApi;
use crate::components::{colors, footer, message, navigation};
use crate::dashboard::Dashboard;
use crate::event::{AppEvent, EventSender};

pub const STARTING_MESSAGE: &str = "Loading Resolve...";
pub const CONNECTION_ERROR: &str = "Backend connection failed";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Dashboard,
}

impl Tab {
    pub const ALL: [Tab; 1] = [Tab::Dashboard];

    pub fn title(self) -> &'static str {
        match self {
            Tab::Dashboard => "Dashboard",
        }
    }

    pub fn next(self) -> Tab {
        let idx = Tab::ALL.iter().position(|t| *t == self).unwrap_or(0);
        Tab::ALL[(idx + 1) % Tab::ALL.len()]
    }
}

/// Startup gate. `Failed` is terminal.
#[derive(Debug, Clone, PartialEq)]
pub enum Phase {
    Loading,
    Ready,
    Failed(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Continue,
    Quit,
}

pub struct App {
    api: Arc<dyn AnalyticsApi>,
    events: EventSender,
    api_url: String,
    dashboard_config: DashboardConfig,
    phase: Phase,
    active_tab: Tab,
    dashboard: Option<Dashboard>,
}

impl App {
    pub fn new(
        api: Arc<dyn AnalyticsApi>,
        events: EventSender,
        api_url: impl Into<String>,
        dashboard_config: DashboardConfig,
    ) -> Self {
        Self {
            api,
            events,
            api_url: api_url.into(),
            dashboard_config,
            phase: Phase::Loading,
            active_tab: Tab::Dashboard,
            dashboard: None,
        }
    }

    /// Fire the one-time health probe.
    pub fn start(&self) -> JoinHandle<()> {
        let api = self.api.clone();
        let events = self.events.clone();
        tokio::spawn(async move {
            let outcome = api.health().await;
            let _ = events.send(AppEvent::Health(outcome));
        })
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn active_tab(&self) -> Tab {
        self.active_tab
    }

    pub fn dashboard(&self) -> Option<&Dashboard> {
        self.dashboard.as_ref()
    }

    pub fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::Health(outcome) => self.on_health(outcome.map_err(|e| e.to_string())),
            AppEvent::RefreshStarted => {
                if let Some(dashboard) = self.dashboard.as_mut() {
                    dashboard.on_refresh_started();
                }
            }
            AppEvent::Refreshed(outcome) => {
                if let Some(dashboard) = self.dashboard.as_mut() {
                    dashboard.apply_refresh(outcome);
                    dashboard.mount_trend();
                }
            }
            AppEvent::TrendLoaded(outcome) => {
                if let Some(dashboard) = self.dashboard.as_mut() {
                    dashboard.apply_trend(outcome);
                }
            }
        }
    }

    fn on_health(&mut self, outcome: Result<(), String>) {
        if self.phase != Phase::Loading {
            return;
        }
        match outcome {
            Ok(()) => {
                info!("Backend at {} is healthy", self.api_url);
                self.phase = Phase::Ready;
                self.activate_tab(self.active_tab);
            }
            Err(e) => {
                error!("Health check against {} failed: {}", self.api_url, e);
                self.phase = Phase::Failed(CONNECTION_ERROR.to_string());
            }
        }
    }

    fn activate_tab(&mut self, tab: Tab) {
        self.active_tab = tab;
        match tab {
            Tab::Dashboard => {
                let dashboard = self.dashboard.get_or_insert_with(|| {
                    Dashboard::new(
                        self.api.clone(),
                        self.events.clone(),
                        self.dashboard_config.clone(),
                    )
                });
                dashboard.mount();
            }
        }
    }

    pub fn handle_key(&mut self, code: KeyCode) -> Control {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => return Control::Quit,
            KeyCode::Char('r') => {
                if let Some(dashboard) = self.dashboard.as_mut() {
                    dashboard.request_refresh();
                }
            }
            KeyCode::Tab if self.phase == Phase::Ready => {
                let next = self.active_tab.next();
                if next != self.active_tab {
                    self.activate_tab(next);
                }
            }
            _ => {}
        }
        Control::Continue
    }

    pub fn draw(&self, frame: &mut Frame) {
        let area = frame.area();

        match &self.phase {
            Phase::Loading => message::draw(frame, area, STARTING_MESSAGE, colors::MUTED),
            Phase::Failed(reason) => self.draw_connection_error(frame, area, reason),
            Phase::Ready => self.draw_ready(frame, area),
        }
    }

    fn draw_ready(&self, frame: &mut Frame, area: Rect) {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(navigation::WIDTH), Constraint::Min(40)])
            .split(area);

        navigation::draw(frame, columns[0], self.active_tab);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(10), Constraint::Length(2)])
            .split(columns[1]);

        match (self.active_tab, self.dashboard.as_ref()) {
            (Tab::Dashboard, Some(dashboard)) => dashboard.draw(frame, rows[0]),
            (Tab::Dashboard, None) => message::draw(frame, rows[0], STARTING_MESSAGE, colors::MUTED),
        }

        let refresh_enabled = self
            .dashboard
            .as_ref()
            .is_some_and(|d| !d.is_refreshing());
        footer::draw(frame, rows[1], refresh_enabled);
    }

    fn draw_connection_error(&self, frame: &mut Frame, area: Rect, reason: &str) {
        frame.render_widget(
            Block::default().style(Style::default().bg(colors::BG_DARK)),
            area,
        );

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Fill(1), Constraint::Length(6), Constraint::Fill(1)])
            .split(area);

        let text = vec![
            Line::from(Span::styled(
                "⚠ Connection Error",
                Style::default().fg(colors::RED).bold(),
            )),
            Line::from(""),
            Line::from(Span::styled(reason, Style::default().fg(colors::TEXT))),
            Line::from(Span::styled(
                format!("Make sure the Resolve backend is running on {}", self.api_url),
                Style::default().fg(colors::MUTED),
            )),
            Line::from(""),
            Line::from(Span::styled("Press Q to quit", Style::default().fg(colors::MUTED))),
        ];

        frame.render_widget(Paragraph::new(text).alignment(Alignment::Center), rows[1]);
    }
}
