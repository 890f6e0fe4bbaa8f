// services/resolve-dash/src/components/footer.rs
//
// Resolve Dashboard - Key Help Footer
//

use ratatui::prelude::*;
use ratatui::widgets::*;

use super::colors;

pub fn draw(frame: &mut Frame, area: Rect, refresh_enabled: bool) {
    let refresh_key_style = if refresh_enabled {
        Style::default().fg(colors::BG_DARK).bg(colors::BLUE)
    } else {
        Style::default().fg(colors::MUTED).bg(colors::BG_PANEL)
    };

    let help = Line::from(vec![
        Span::styled(" [Q] ", Style::default().fg(colors::BG_DARK).bg(colors::RED)),
        Span::styled(" Quit ", Style::default().fg(colors::MUTED)),
        Span::raw("  "),
        Span::styled(" [R] ", refresh_key_style),
        Span::styled(" Refresh ", Style::default().fg(colors::MUTED)),
        Span::raw("  "),
        Span::styled(" [TAB] ", Style::default().fg(colors::BG_DARK).bg(colors::TEXT)),
        Span::styled(" Next view ", Style::default().fg(colors::MUTED)),
    ]);

    let footer = Paragraph::new(help)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::TOP)
                .border_style(Style::default().fg(colors::BORDER))
                .style(Style::default().bg(colors::BG_DARK)),
        );

    frame.render_widget(footer, area);
}
