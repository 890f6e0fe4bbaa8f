// services/resolve-dash/src/components/message.rs
//
// Resolve Dashboard - Centered status text and empty-card fallbacks
//

use ratatui::prelude::*;
use ratatui::widgets::*;

use super::{colors, panel};

/// A single line of text centered in `area`.
pub fn draw(frame: &mut Frame, area: Rect, text: &str, color: Color) {
    frame.render_widget(
        Block::default().style(Style::default().bg(colors::BG_DARK)),
        area,
    );

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Fill(1), Constraint::Length(1), Constraint::Fill(1)])
        .split(area);

    let line = Paragraph::new(Span::styled(text, Style::default().fg(color).bold()))
        .alignment(Alignment::Center);
    frame.render_widget(line, rows[1]);
}

/// Card shown instead of a chart when there is nothing to plot.
pub fn fallback(frame: &mut Frame, area: Rect, title: &str, text: &str) {
    let paragraph = Paragraph::new(Line::from(Span::styled(
        text,
        Style::default().fg(colors::MUTED),
    )))
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true })
    .block(panel(title));

    frame.render_widget(paragraph, area);
}
