// services/resolve-dash/src/components/header.rs
//
// Resolve Dashboard - Header Component
//

use chrono::{DateTime, Local};
use ratatui::prelude::*;
use ratatui::widgets::*;

use super::colors;

pub const TITLE: &str = "Complaint Intelligence Dashboard";

pub fn draw(frame: &mut Frame, area: Rect, refreshing: bool, last_updated: Option<&DateTime<Local>>) {
    let (refresh_text, refresh_style) = if refreshing {
        (" ↻ Refreshing... ", Style::default().fg(colors::MUTED))
    } else {
        (
            " [R] ↻ Refresh ",
            Style::default().fg(colors::BG_DARK).bg(colors::BLUE).bold(),
        )
    };

    let updated = last_updated
        .map(|t| format!("Updated {}", t.format("%H:%M:%S")))
        .unwrap_or_default();

    let title = Line::from(vec![
        Span::styled(TITLE, Style::default().fg(colors::TEXT).bold()),
        Span::raw("  "),
        Span::styled(refresh_text, refresh_style),
        Span::raw("  "),
        Span::styled(updated, Style::default().fg(colors::MUTED)),
    ]);

    let header = Paragraph::new(title)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(colors::BORDER))
                .style(Style::default().bg(colors::BG_DARK)),
        );

    frame.render_widget(header, area);
}
