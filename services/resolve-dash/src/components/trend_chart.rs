// services/resolve-dash/src/components/trend_chart.rs
//
// Resolve Dashboard - Complaint Trend Chart Component
//

use ratatui::prelude::*;
use ratatui::widgets::*;

use super::{colors, panel};
use crate::trend::TrendChart;

pub const LOADING: &str = "Loading trend data...";

pub fn draw(frame: &mut Frame, area: Rect, chart: Option<&TrendChart>) {
    let chart = match chart {
        Some(c) if !c.is_loading() => c,
        _ => {
            let loading = Paragraph::new(Span::styled(LOADING, Style::default().fg(colors::MUTED)))
                .alignment(Alignment::Center)
                .block(panel("Complaint Trend"));
            frame.render_widget(loading, area);
            return;
        }
    };

    let title = format!("Complaint Trend ({} Days)", chart.days());
    let points: Vec<(f64, f64)> = chart
        .points()
        .iter()
        .enumerate()
        .map(|(idx, p)| (idx as f64, p.complaints as f64))
        .collect();

    let max_x = points.len().saturating_sub(1).max(1) as f64;
    let max_y = points.iter().map(|(_, y)| *y).fold(0.0, f64::max).max(1.0).ceil();

    let dataset = Dataset::default()
        .name("Complaints")
        .marker(symbols::Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(colors::BLUE))
        .data(&points);

    let chart_widget = Chart::new(vec![dataset])
        .block(panel(&title))
        .x_axis(
            Axis::default()
                .style(Style::default().fg(colors::MUTED))
                .bounds([0.0, max_x])
                .labels(x_labels(chart)),
        )
        .y_axis(
            Axis::default()
                .style(Style::default().fg(colors::MUTED))
                .bounds([0.0, max_y])
                .labels(vec![
                    Span::raw("0"),
                    Span::raw(format!("{}", (max_y / 2.0).round())),
                    Span::raw(format!("{}", max_y)),
                ]),
        )
        .hidden_legend_constraints((Constraint::Ratio(1, 1), Constraint::Ratio(1, 1)));

    frame.render_widget(chart_widget, area);
}

/// First, middle and last date.
fn x_labels(chart: &TrendChart) -> Vec<Span<'_>> {
    let points = chart.points();
    match points.len() {
        0 => vec![],
        1 => vec![Span::raw(points[0].label.as_str())],
        n => vec![
            Span::raw(points[0].label.as_str()),
            Span::raw(points[n / 2].label.as_str()),
            Span::raw(points[n - 1].label.as_str()),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::test_support::render;
    use svckit::types::{TrendPoint, TrendSeries};
    use svckit::DashError;

    fn loaded(days: &[(&str, u64)]) -> TrendChart {
        let mut chart = TrendChart::new(30);
        chart.apply(Ok(TrendSeries {
            period_days: Some(30),
            data: days
                .iter()
                .map(|(date, complaints)| TrendPoint {
                    date: date.to_string(),
                    complaints: *complaints,
                })
                .collect(),
        }));
        chart
    }

    #[test]
    fn test_loading_state() {
        let screen = render(60, 12, |f, area| draw(f, area, Some(&TrendChart::new(30))));
        assert!(screen.contains(LOADING));

        let screen = render(60, 12, |f, area| draw(f, area, None));
        assert!(screen.contains(LOADING));
    }

    #[test]
    fn test_renders_title_and_date_labels() {
        let chart = loaded(&[("2024-01-01", 3), ("2024-01-02", 8), ("2024-01-03", 5)]);
        let screen = render(80, 16, |f, area| draw(f, area, Some(&chart)));

        assert!(screen.contains("Complaint Trend (30 Days)"));
        assert!(screen.contains("Jan 1"));
        assert!(screen.contains("Jan 3"));
        assert!(!screen.contains(LOADING));
    }

    #[test]
    fn test_failed_fetch_renders_empty_chart() {
        let mut chart = TrendChart::new(30);
        chart.apply(Err(DashError::NetworkError("refused".to_string())));
        let screen = render(80, 16, |f, area| draw(f, area, Some(&chart)));

        assert!(screen.contains("Complaint Trend (30 Days)"));
        assert!(!screen.contains(LOADING));
        assert!(!screen.to_lowercase().contains("error"));
    }
}
