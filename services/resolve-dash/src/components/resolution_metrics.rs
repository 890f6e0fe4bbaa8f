// services/resolve-dash/src/components/resolution_metrics.rs
//
// Resolve Dashboard - Resolution Metrics Component
//

use ratatui::prelude::*;
use ratatui::widgets::*;
use svckit::types::ResolutionMetrics;

use super::{colors, message, panel};

pub const TITLE: &str = "Resolution Metrics";
pub const EMPTY: &str = "No resolution data available";

pub fn draw(frame: &mut Frame, area: Rect, data: Option<&ResolutionMetrics>) {
    let Some(data) = data else {
        return message::fallback(frame, area, TITLE, EMPTY);
    };

    let block = panel(TITLE);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let metrics = [
        ("Total Resolved", data.total_resolved.to_string()),
        ("Average Time", format!("{} days", data.avg_resolution_days)),
        ("Median Time", format!("{} days", data.median_resolution_days)),
        ("Fastest", format!("{} days", data.min_resolution_days)),
        ("Slowest", format!("{} days", data.max_resolution_days)),
    ];

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 5); 5])
        .split(inner);

    for ((label, value), chunk) in metrics.iter().zip(chunks.iter()) {
        let text = vec![
            Line::from(Span::styled(*label, Style::default().fg(colors::MUTED))),
            Line::from(Span::styled(
                value.as_str(),
                Style::default().fg(colors::TEXT).bold(),
            )),
        ];
        frame.render_widget(Paragraph::new(text).alignment(Alignment::Center), *chunk);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::test_support::render;

    #[test]
    fn test_missing_metrics_show_fallback() {
        let screen = render(100, 5, |f, area| draw(f, area, None));
        assert!(screen.contains(EMPTY));
    }

    #[test]
    fn test_renders_all_five_metrics() {
        let data = ResolutionMetrics {
            total_resolved: 128,
            avg_resolution_days: 6.42,
            median_resolution_days: 5.0,
            min_resolution_days: 1.0,
            max_resolution_days: 19.0,
        };
        let screen = render(100, 5, |f, area| draw(f, area, Some(&data)));

        for expected in [
            "Total Resolved",
            "128",
            "Average Time",
            "6.42 days",
            "Median Time",
            "5 days",
            "Fastest",
            "1 days",
            "Slowest",
            "19 days",
        ] {
            assert!(screen.contains(expected), "missing {:?}", expected);
        }
    }
}
