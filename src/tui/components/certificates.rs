// Certificates carousel view
//
// Narrow terminals get a single centered card with dot indicators, the
// carousel auto-advancing underneath. Wide terminals (>= 100 cols) show
// the current card flanked by its neighbors, dimmed.

use crate::data::{self, Certificate};
use crate::theme::Theme;
use crate::tui::app::App;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};

/// Terminal width at which the flanked three-card layout kicks in.
const WIDE_LAYOUT_COLS: u16 = 100;

pub fn render(f: &mut Frame, area: Rect, app: &mut App) {
    let block = Block::default()
        .title(" Certificates ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(app.theme.section_certificates));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(7),    // card(s)
            Constraint::Length(1), // dots
            Constraint::Length(1), // position
        ])
        .split(inner);

    // The click test needs the dot row geometry
    app.dots_area = Some(rows[1]);

    let theme = &app.theme;
    let index = app.carousel.index();
    if inner.width >= WIDE_LAYOUT_COLS {
        render_flanked(f, rows[0], app, index);
    } else {
        render_card(f, rows[0], theme, &data::CERTIFICATES[index], true);
    }

    render_dots(f, rows[1], app, index);

    let position = Paragraph::new(format!("{} / {}", index + 1, app.carousel.len()))
        .alignment(Alignment::Center)
        .style(Style::default().fg(theme.muted));
    f.render_widget(position, rows[2]);
}

/// Current card centered with the previous and next card dimmed beside it.
fn render_flanked(f: &mut Frame, area: Rect, app: &App, index: usize) {
    let theme = &app.theme;
    let len = app.carousel.len();
    let prev = (index + len - 1) % len;
    let next = (index + 1) % len;

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(30),
            Constraint::Percentage(40),
            Constraint::Percentage(30),
        ])
        .split(area);

    render_card(f, cols[0], theme, &data::CERTIFICATES[prev], false);
    render_card(f, cols[1], theme, &data::CERTIFICATES[index], true);
    render_card(f, cols[2], theme, &data::CERTIFICATES[next], false);
}

fn render_card(f: &mut Frame, area: Rect, theme: &Theme, cert: &Certificate, active: bool) {
    let (border, fg) = if active {
        (theme.highlight, theme.foreground)
    } else {
        (theme.muted, theme.muted)
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let mut title_style = Style::default().fg(fg);
    if active {
        title_style = title_style.add_modifier(Modifier::BOLD);
    }

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(cert.badge, Style::default().fg(theme.accent))),
        Line::from(""),
        Line::from(Span::styled(cert.title, title_style)),
        Line::from(""),
        Line::from(Span::styled(cert.issuer, Style::default().fg(theme.accent_cool))),
        Line::from(Span::styled(cert.date, Style::default().fg(theme.muted))),
        Line::from(""),
        Line::from(Span::styled(
            if active { "press y to copy the link" } else { "" },
            Style::default().fg(theme.muted),
        )),
    ];

    let card = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    f.render_widget(card, inner);
}

/// Dot indicator row: a filled dot for the current card.
fn render_dots(f: &mut Frame, area: Rect, app: &App, index: usize) {
    let theme = &app.theme;
    let mut spans = Vec::with_capacity(app.carousel.len() * 2);
    for i in 0..app.carousel.len() {
        let (dot, color) = if i == index {
            ("●", theme.highlight)
        } else {
            ("○", theme.muted)
        };
        spans.push(Span::styled(dot, Style::default().fg(color)));
        spans.push(Span::raw(" "));
    }
    let dots = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);
    f.render_widget(dots, area);
}
