// services/resolve-dash/src/components/navigation.rs
//
// Resolve Dashboard - Navigation Sidebar
//

use ratatui::prelude::*;
use ratatui::widgets::*;

use super::colors;
use crate::app::Tab;

pub const WIDTH: u16 = 28;

pub fn draw(frame: &mut Frame, area: Rect, active: Tab) {
    let block = Block::default()
        .borders(Borders::RIGHT)
        .border_style(Style::default().fg(colors::BORDER))
        .style(Style::default().bg(colors::BG_PANEL));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(4), Constraint::Min(1), Constraint::Length(1)])
        .split(inner);

    let brand = Paragraph::new(vec![
        Line::from(Span::styled(" Resolve", Style::default().fg(colors::BLUE).bold())),
        Line::from(Span::styled(
            " Complaint Intelligence Platform",
            Style::default().fg(colors::MUTED),
        )),
    ])
    .wrap(Wrap { trim: false });
    frame.render_widget(brand, rows[0]);

    let items: Vec<ListItem> = Tab::ALL
        .iter()
        .map(|tab| {
            let style = if *tab == active {
                Style::default().fg(colors::TEXT).bg(colors::BLUE).bold()
            } else {
                Style::default().fg(colors::MUTED)
            };
            ListItem::new(Line::from(Span::styled(format!(" {} ", tab.title()), style)))
        })
        .collect();
    frame.render_widget(List::new(items), rows[1]);

    let version = Paragraph::new(Span::styled(
        format!(" v{}", env!("CARGO_PKG_VERSION")),
        Style::default().fg(colors::MUTED),
    ));
    frame.render_widget(version, rows[2]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::test_support::render;

    #[test]
    fn test_sidebar_contents() {
        let screen = render(40, 12, |f, area| draw(f, area, Tab::Dashboard));

        assert!(screen.contains("Resolve"));
        assert!(screen.contains("Dashboard"));
        assert!(screen.contains(&format!("v{}", env!("CARGO_PKG_VERSION"))));
    }
}
