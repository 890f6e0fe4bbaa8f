// services/resolve-dash/src/components/stat_card.rs
//
// Resolve Dashboard - Statistics Card Component
//

use ratatui::prelude::*;
use ratatui::widgets::*;

use super::colors;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Accent {
    Blue,
    Green,
    Red,
}

impl Accent {
    fn color(self) -> Color {
        match self {
            Accent::Blue => colors::BLUE,
            Accent::Green => colors::GREEN,
            Accent::Red => colors::RED,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct StatCard {
    pub label: &'static str,
    pub value: String,
    pub trend: &'static str,
    pub accent: Accent,
}

impl StatCard {
    pub fn new(label: &'static str, value: String, trend: &'static str, accent: Accent) -> Self {
        Self {
            label,
            value,
            trend,
            accent,
        }
    }
}

pub fn draw(frame: &mut Frame, area: Rect, card: &StatCard) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(card.accent.color()))
        .border_type(BorderType::Rounded)
        .style(Style::default().bg(colors::BG_PANEL));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let text = vec![
        Line::from(Span::styled(
            card.label,
            Style::default().fg(colors::MUTED).add_modifier(Modifier::DIM),
        )),
        Line::from(Span::styled(
            card.value.as_str(),
            Style::default().fg(colors::TEXT).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(card.trend, Style::default().fg(card.accent.color()))),
    ];

    frame.render_widget(Paragraph::new(text).alignment(Alignment::Center), inner);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::test_support::render;

    #[test]
    fn test_renders_label_value_and_trend() {
        let card = StatCard::new("Critical Issues", "17".to_string(), "-3%", Accent::Red);
        let screen = render(30, 5, |f, area| draw(f, area, &card));

        assert!(screen.contains("Critical Issues"));
        assert!(screen.contains("17"));
        assert!(screen.contains("-3%"));
    }
}
