// services/resolve-dash/src/components/mod.rs
//
// Resolve Dashboard - UI Components
//

pub mod alerts;
pub mod fault_distribution;
pub mod footer;
pub mod header;
pub mod message;
pub mod navigation;
pub mod product_health;
pub mod resolution_metrics;
pub mod stat_card;
pub mod trend_chart;

use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders};

// Color palette: slate background, blue/green/red accents
pub mod colors {
    use ratatui::style::Color;

    pub const BG_DARK: Color = Color::Rgb(15, 23, 42);
    pub const BG_PANEL: Color = Color::Rgb(30, 41, 59);
    pub const TEXT: Color = Color::Rgb(241, 245, 249);
    pub const MUTED: Color = Color::Rgb(107, 114, 128);
    pub const BORDER: Color = Color::Rgb(71, 85, 105);
    pub const BLUE: Color = Color::Rgb(37, 99, 235);
    pub const GREEN: Color = Color::Rgb(22, 163, 74);
    pub const RED: Color = Color::Rgb(220, 38, 38);
    pub const AMBER: Color = Color::Rgb(245, 158, 11);

    /// Fault slices cycle through these.
    pub const FAULT_PALETTE: [Color; 8] = [
        Color::Rgb(37, 99, 235),
        Color::Rgb(22, 163, 74),
        Color::Rgb(234, 88, 12),
        Color::Rgb(220, 38, 38),
        Color::Rgb(139, 92, 246),
        Color::Rgb(6, 182, 212),
        Color::Rgb(245, 158, 11),
        Color::Rgb(236, 72, 153),
    ];

    pub fn fault_color(index: usize) -> Color {
        FAULT_PALETTE[index % FAULT_PALETTE.len()]
    }

    pub fn rgb((r, g, b): (u8, u8, u8)) -> Color {
        Color::Rgb(r, g, b)
    }
}

/// Rounded card with a bold title, as used by every panel.
pub fn panel(title: &str) -> Block<'_> {
    Block::default()
        .title(Span::styled(
            format!(" {} ", title),
            Style::default().fg(colors::TEXT).bold(),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors::BORDER))
        .border_type(BorderType::Rounded)
        .style(Style::default().bg(colors::BG_PANEL))
}

#[cfg(test)]
pub(crate) mod test_support {
    use ratatui::backend::TestBackend;
    use ratatui::prelude::*;

    /// Draw into an off-screen buffer and return it.
    pub fn render_buffer(width: u16, height: u16, draw: impl FnOnce(&mut Frame, Rect)) -> Buffer {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal
            .draw(|frame| {
                let area = frame.area();
                draw(frame, area);
            })
            .unwrap();
        terminal.backend().buffer().clone()
    }

    /// Draw into an off-screen buffer and return its text, one line per row.
    pub fn render(width: u16, height: u16, draw: impl FnOnce(&mut Frame, Rect)) -> String {
        let buffer = render_buffer(width, height, draw);
        buffer
            .content()
            .chunks(buffer.area.width as usize)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }
}
