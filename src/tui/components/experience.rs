// Experience timeline view
//
// Vertical timeline with one entry per position: a marker on the rail,
// period, title, company, description and a skill chip row.

use crate::data;
use crate::tui::app::App;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let block = Block::default()
        .title(" Experience ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.section_experience));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let mut lines = vec![Line::from("")];
    for (i, exp) in data::EXPERIENCES.iter().enumerate() {
        lines.push(Line::from(vec![
            Span::styled("  ◉ ", Style::default().fg(theme.highlight)),
            Span::styled(exp.period, Style::default().fg(theme.accent_cool)),
        ]));
        lines.push(Line::from(vec![
            Span::styled("  │ ", Style::default().fg(theme.muted)),
            Span::styled(
                exp.title,
                Style::default()
                    .fg(theme.foreground)
                    .add_modifier(Modifier::BOLD),
            ),
        ]));
        lines.push(Line::from(vec![
            Span::styled("  │ ", Style::default().fg(theme.muted)),
            Span::styled(exp.company, Style::default().fg(theme.accent)),
        ]));
        lines.push(Line::from(Span::styled(
            "  │ ",
            Style::default().fg(theme.muted),
        )));
        // Description, wrapped manually onto the rail
        for chunk in wrap_text(exp.description, inner.width.saturating_sub(6) as usize) {
            lines.push(Line::from(vec![
                Span::styled("  │ ", Style::default().fg(theme.muted)),
                Span::styled(chunk, Style::default().fg(theme.foreground)),
            ]));
        }
        lines.push(Line::from(Span::styled(
            "  │ ",
            Style::default().fg(theme.muted),
        )));
        // Skill chips
        let mut chip_spans = vec![Span::styled("  │ ", Style::default().fg(theme.muted))];
        for skill in exp.skills {
            chip_spans.push(Span::styled(
                format!("[{skill}]"),
                Style::default().fg(theme.status_bar),
            ));
            chip_spans.push(Span::raw(" "));
        }
        lines.push(Line::from(chip_spans));

        if i + 1 < data::EXPERIENCES.len() {
            lines.push(Line::from(Span::styled(
                "  │ ",
                Style::default().fg(theme.muted),
            )));
        }
    }

    let timeline = Paragraph::new(lines).wrap(Wrap { trim: false });
    f.render_widget(timeline, inner);
}

/// Greedy word wrap; ratatui's `Wrap` can't preserve the rail prefix.
fn wrap_text(text: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return vec![text.to_string()];
    }
    let mut out = Vec::new();
    let mut line = String::new();
    for word in text.split_whitespace() {
        if !line.is_empty() && line.len() + 1 + word.len() > width {
            out.push(std::mem::take(&mut line));
        }
        if !line.is_empty() {
            line.push(' ');
        }
        line.push_str(word);
    }
    if !line.is_empty() {
        out.push(line);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrap_respects_width() {
        let wrapped = wrap_text("assisted practical sessions for database courses", 20);
        assert!(wrapped.len() > 1);
        for line in &wrapped {
            assert!(line.len() <= 20, "line too long: {line}");
        }
    }

    #[test]
    fn wrap_keeps_short_text_on_one_line() {
        assert_eq!(wrap_text("short", 40), vec!["short"]);
    }
}
