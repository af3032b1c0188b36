// Log overlay - recent tracing events from the in-memory buffer

use crate::logging::LogLevel;
use crate::tui::app::App;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;

    // Centered overlay covering most of the screen
    let width = area.width.saturating_sub(8).min(110);
    let height = area.height.saturating_sub(4);
    let x = area.x + (area.width - width) / 2;
    let y = area.y + (area.height - height) / 2;
    let overlay = Rect::new(x, y, width, height);

    let block = Block::default()
        .title(format!(" Logs ({}) - L to close ", app.log_buffer.len()))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.highlight));
    let inner = block.inner(overlay);

    f.render_widget(Clear, overlay);
    f.render_widget(block, overlay);

    let entries = app.log_buffer.get_all();
    let visible = inner.height as usize;
    let start = entries.len().saturating_sub(visible);

    let lines: Vec<Line> = entries[start..]
        .iter()
        .map(|entry| {
            Line::from(vec![
                Span::styled(
                    entry.timestamp.format("%H:%M:%S%.3f ").to_string(),
                    Style::default().fg(theme.muted),
                ),
                Span::styled(
                    format!("{:5} ", entry.level.as_str()),
                    Style::default().fg(level_color(entry.level)),
                ),
                Span::styled(
                    format!("{} ", entry.target),
                    Style::default().fg(theme.accent_cool),
                ),
                Span::styled(entry.message.clone(), Style::default().fg(theme.foreground)),
            ])
        })
        .collect();

    f.render_widget(Paragraph::new(lines), inner);
}

fn level_color(level: LogLevel) -> Color {
    match level {
        LogLevel::Error => Color::Red,
        LogLevel::Warn => Color::Yellow,
        LogLevel::Info => Color::Green,
        LogLevel::Debug => Color::Blue,
        LogLevel::Trace => Color::DarkGray,
    }
}
