// Title bar - application name plus the view tab strip
//
// Shows which section is active and the number key that reaches each
// one. The active tab takes the section's identity color.

use crate::tui::app::{App, View};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const TABS: [View; 5] = [
    View::Certificates,
    View::Experience,
    View::Skills,
    View::Constellation,
    View::Eyes,
];

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let mut spans = vec![
        Span::styled(
            " folio ",
            Style::default()
                .fg(theme.title)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("│ ", Style::default().fg(theme.muted)),
    ];

    for (i, view) in TABS.iter().enumerate() {
        if !app.view_enabled(*view) {
            continue;
        }
        let label = format!("[{}] {}", i + 1, view.name());
        if *view == app.view {
            spans.push(Span::styled(
                label,
                Style::default()
                    .fg(theme.section_border(*view))
                    .add_modifier(Modifier::BOLD),
            ));
        } else {
            spans.push(Span::styled(label, Style::default().fg(theme.muted)));
        }
        spans.push(Span::raw("  "));
    }

    let title = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(theme.border)),
    );
    f.render_widget(title, area);
}
