// services/resolve-dash/src/components/alerts.rs
//
// Resolve Dashboard - Critical Alerts Component
//

use ratatui::prelude::*;
use ratatui::widgets::*;
use svckit::types::CriticalAlerts;

use super::{colors, message, panel};

pub const TITLE: &str = "Critical Alerts";
pub const MISSING: &str = "No alerts data available";
pub const ALL_CLEAR: &str = "No critical alerts at this time";
pub const PRODUCTS_HEADING: &str = "Critical Product Issues";
pub const FAULTS_HEADING: &str = "High Unresolved Issues";

const MAX_HEIGHT: u16 = 12;

/// Rows the panel wants, borders included.
pub fn height(data: Option<&CriticalAlerts>) -> u16 {
    match data {
        Some(alerts) if alerts.has_alerts() => {
            let longest = alerts
                .critical_products
                .len()
                .max(alerts.unresolved_fault_types.len());
            u16::try_from(longest)
                .unwrap_or(MAX_HEIGHT)
                .saturating_add(3)
                .min(MAX_HEIGHT)
        }
        _ => 3,
    }
}

pub fn draw(frame: &mut Frame, area: Rect, data: Option<&CriticalAlerts>) {
    let Some(alerts) = data else {
        return message::fallback(frame, area, TITLE, MISSING);
    };

    let block = panel(TITLE);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if !alerts.has_alerts() {
        let clear = Paragraph::new(Span::styled(
            format!("✓ {}", ALL_CLEAR),
            Style::default().fg(colors::GREEN),
        ))
        .alignment(Alignment::Center);
        frame.render_widget(clear, inner);
        return;
    }

    let mut sections: Vec<Vec<Line>> = Vec::new();

    if !alerts.critical_products.is_empty() {
        let mut lines = vec![heading(PRODUCTS_HEADING, colors::RED)];
        lines.extend(alerts.critical_products.iter().map(|item| {
            alert_line(&item.product, format!("{} critical complaints", item.critical_count), colors::RED)
        }));
        sections.push(lines);
    }

    if !alerts.unresolved_fault_types.is_empty() {
        let mut lines = vec![heading(FAULTS_HEADING, colors::AMBER)];
        lines.extend(alerts.unresolved_fault_types.iter().map(|item| {
            alert_line(&item.fault_type, format!("{} unresolved", item.unresolved_count), colors::AMBER)
        }));
        sections.push(lines);
    }

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(vec![Constraint::Ratio(1, sections.len() as u32); sections.len()])
        .split(inner);

    for (lines, chunk) in sections.into_iter().zip(chunks.iter()) {
        frame.render_widget(Paragraph::new(lines), *chunk);
    }
}

fn heading(text: &str, color: Color) -> Line<'_> {
    Line::from(Span::styled(text, Style::default().fg(color).bold()))
}

fn alert_line(title: &str, details: String, color: Color) -> Line<'_> {
    Line::from(vec![
        Span::styled("▌ ", Style::default().fg(color)),
        Span::styled(title, Style::default().fg(colors::TEXT).bold()),
        Span::styled(format!("  {}", details), Style::default().fg(colors::MUTED)),
    ])
}
