// Top-level layout and render dispatch
//
// Title bar, active view, status bar; help and log overlays plus the
// toast render on top.

use super::app::{App, View};
use super::components;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};

pub fn draw(f: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // title bar
            Constraint::Min(0),    // view body
            Constraint::Length(1), // status bar
        ])
        .split(f.area());

    components::title_bar::render(f, chunks[0], app);

    match app.view {
        View::Certificates => components::certificates::render(f, chunks[1], app),
        View::Experience => components::experience::render(f, chunks[1], app),
        View::Skills => components::skills::render(f, chunks[1], app),
        View::Constellation => components::constellation::render(f, chunks[1], app),
        View::Eyes => components::eyes::render(f, chunks[1], app),
    }

    components::status_bar::render(f, chunks[2], app);

    if app.show_logs {
        components::logs_panel::render(f, f.area(), app);
    }
    if app.show_help {
        render_help(f, f.area(), app);
    }
    if let Some(toast) = &app.toast {
        toast.render(f, f.area(), &app.theme);
    }
}

fn render_help(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let width = 52.min(area.width.saturating_sub(4));
    let height = 16.min(area.height.saturating_sub(2));
    let x = area.x + (area.width - width) / 2;
    let y = area.y + (area.height - height) / 2;
    let overlay = Rect::new(x, y, width, height);

    let block = Block::default()
        .title(" Help ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.highlight));
    let inner = block.inner(overlay);

    f.render_widget(Clear, overlay);
    f.render_widget(block, overlay);

    let key = |k: &'static str, desc: &'static str| {
        Line::from(vec![
            Span::styled(
                format!("  {k:<12}"),
                Style::default()
                    .fg(theme.accent_cool)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(desc, Style::default().fg(theme.foreground)),
        ])
    };

    let lines = vec![
        Line::from(""),
        key("1-5", "jump to a section"),
        key("Tab / S-Tab", "next / previous section"),
        key("← / →", "previous / next certificate"),
        key("drag", "swipe the carousel"),
        key("hover", "detonate a constellation node"),
        key("y / Enter", "copy certificate link"),
        key("t", "cycle theme"),
        key("L", "toggle log overlay"),
        key("?", "toggle this help"),
        key("q / Esc", "quit"),
    ];

    f.render_widget(Paragraph::new(lines), inner);
}
