// services/resolve-dash/src/components/fault_distribution.rs
//
// Resolve Dashboard - Fault Type Distribution Component
//

use ratatui::prelude::*;
use ratatui::widgets::*;
use svckit::types::FaultDistribution;

use super::{colors, message, panel};

pub const TITLE: &str = "Fault Type Distribution";
pub const EMPTY: &str = "No fault data available";

pub fn draw(frame: &mut Frame, area: Rect, data: Option<&FaultDistribution>) {
    let data = match data {
        Some(d) if !d.distribution.is_empty() => d,
        _ => return message::fallback(frame, area, TITLE, EMPTY),
    };

    let block = panel(TITLE);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let name_width = data
        .distribution
        .iter()
        .map(|f| f.fault_type.chars().count())
        .max()
        .unwrap_or(0);
    // swatch + name + gaps + "count (pct%)"
    let bar_width = (inner.width as usize).saturating_sub(name_width + 22);

    let mut lines = vec![
        Line::from(vec![
            Span::styled("Total Faults: ", Style::default().fg(colors::MUTED)),
            Span::styled(
                data.total_faults.to_string(),
                Style::default().fg(colors::TEXT).bold(),
            ),
        ]),
        Line::from(""),
    ];

    for (idx, fault) in data.distribution.iter().enumerate() {
        let color = colors::fault_color(idx);
        let filled = ((fault.percentage / 100.0) * bar_width as f64).round() as usize;

        lines.push(Line::from(vec![
            Span::styled("■ ", Style::default().fg(color)),
            Span::styled(
                format!("{:<width$} ", fault.fault_type, width = name_width),
                Style::default().fg(colors::TEXT),
            ),
            Span::styled("█".repeat(filled.min(bar_width)), Style::default().fg(color)),
            Span::styled(
                format!(" {} ({}%)", fault.count, fault.percentage),
                Style::default().fg(colors::MUTED),
            ),
        ]));
    }

    frame.render_widget(Paragraph::new(lines), inner);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::test_support::render;
    use svckit::types::FaultShare;

    fn share(fault_type: &str, count: u64, percentage: f64) -> FaultShare {
        FaultShare {
            fault_type: fault_type.to_string(),
            count,
            percentage,
        }
    }

    #[test]
    fn test_empty_distribution_shows_fallback() {
        let data = FaultDistribution {
            total_faults: 0,
            distribution: vec![],
        };
        let screen = render(60, 10, |f, area| draw(f, area, Some(&data)));
        assert!(screen.contains(EMPTY));
        assert!(!screen.contains("Total Faults"));
    }

    #[test]
    fn test_missing_distribution_shows_fallback() {
        let screen = render(60, 10, |f, area| draw(f, area, None));
        assert!(screen.contains(EMPTY));
    }

    #[test]
    fn test_lists_each_fault_type() {
        let data = FaultDistribution {
            total_faults: 40,
            distribution: vec![share("Battery Issue", 30, 75.0), share("Connectivity", 10, 25.0)],
        };
        let screen = render(80, 10, |f, area| draw(f, area, Some(&data)));

        assert!(screen.contains("Total Faults: 40"));
        assert!(screen.contains("Battery Issue"));
        assert!(screen.contains("30 (75%)"));
        assert!(screen.contains("10 (25%)"));
        assert!(!screen.contains(EMPTY));
    }
}
