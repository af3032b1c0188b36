// Status bar - key hints, theme name and uptime

use crate::tui::app::{App, View};
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;

    // View-specific hints first, global ones after
    let view_hint = match app.view {
        View::Certificates => "←/→ card  y copy link  drag to swipe",
        View::Experience => "",
        View::Skills => "",
        View::Constellation => "hover nodes to detonate",
        View::Eyes => "move the pointer, they follow",
    };

    let mut spans = Vec::new();
    if !view_hint.is_empty() {
        spans.push(Span::styled(
            format!(" {view_hint} "),
            Style::default().fg(theme.status_bar),
        ));
        spans.push(Span::styled("│ ", Style::default().fg(theme.muted)));
    } else {
        spans.push(Span::raw(" "));
    }
    spans.push(Span::styled(
        "Tab view  t theme  L logs  ? help  q quit",
        Style::default().fg(theme.muted),
    ));

    let left = Paragraph::new(Line::from(spans));
    f.render_widget(left, area);

    // Right-aligned: theme name and uptime
    let right_text = format!("{} · {} ", app.theme.name, app.uptime());
    let right_width = right_text.len() as u16;
    if area.width > right_width {
        let right_area = Rect::new(
            area.x + area.width - right_width,
            area.y,
            right_width,
            area.height,
        );
        let right = Paragraph::new(right_text).style(Style::default().fg(theme.muted));
        f.render_widget(right, right_area);
    }
}
