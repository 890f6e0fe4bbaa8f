// services/resolve-dash/src/components/product_health.rs
//
// Resolve Dashboard - Product Health Scores Component
//

use ratatui::prelude::*;
use ratatui::widgets::*;
use svckit::types::{ProductHealth, ProductScore};

use super::{colors, message, panel};

pub const TITLE: &str = "Product Health Scores";
pub const EMPTY: &str = "No product data available";

pub fn draw(frame: &mut Frame, area: Rect, data: Option<&ProductHealth>) {
    let data = match data {
        Some(d) if !d.scores.is_empty() => d,
        _ => return message::fallback(frame, area, TITLE, EMPTY),
    };

    let block = panel(TITLE);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    // score text + label column
    let bar_width = (inner.width as usize).saturating_sub(20);

    let lines: Vec<Line> = data
        .scores
        .iter()
        .flat_map(|product| product_lines(product, bar_width))
        .collect();

    frame.render_widget(Paragraph::new(lines), inner);
}

fn product_lines(product: &ProductScore, bar_width: usize) -> [Line<'_>; 2] {
    let band = product.band();
    let color = colors::rgb(band.rgb());
    let filled = ((product.health_score.clamp(0.0, 100.0) / 100.0) * bar_width as f64).round() as usize;

    [
        Line::from(vec![
            Span::styled(
                format!("{} ", product.category),
                Style::default().fg(colors::MUTED),
            ),
            Span::styled(
                product.product_name.as_str(),
                Style::default().fg(colors::TEXT).bold(),
            ),
            Span::styled(
                format!("  {} complaints", product.complaint_count),
                Style::default().fg(colors::MUTED),
            ),
        ]),
        Line::from(vec![
            Span::styled("█".repeat(filled), Style::default().fg(color)),
            Span::styled(
                "░".repeat(bar_width.saturating_sub(filled)),
                Style::default().fg(colors::BORDER),
            ),
            Span::styled(
                format!(" {:>6} ", product.health_score),
                Style::default().fg(color).bold(),
            ),
            Span::styled(band.label(), Style::default().fg(color)),
        ]),
    ]
}
