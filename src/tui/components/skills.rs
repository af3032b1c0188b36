// Skills grid view
//
// Four category panels side by side (stacked two-by-two on narrow
// terminals), each listing its skills in the skill's brand color.

use crate::data;
use crate::tui::app::App;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let block = Block::default()
        .title(" Skills ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.section_skills));
    let inner = block.inner(area);
    f.render_widget(block, area);

    // 4 columns when wide, 2x2 otherwise
    let panels: Vec<Rect> = if inner.width >= 96 {
        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(25); 4])
            .split(inner)
            .to_vec()
    } else {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(50); 2])
            .split(inner);
        let mut panels = Vec::with_capacity(4);
        for row in rows.iter() {
            let cols = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Percentage(50); 2])
                .split(*row);
            panels.extend(cols.iter().copied());
        }
        panels
    };

    for (category, panel) in data::SKILL_CATEGORIES.iter().zip(panels) {
        let block = Block::default()
            .title(format!(" {} {} ", category.icon, category.title))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(category.color));
        let panel_inner = block.inner(panel);
        f.render_widget(block, panel);

        let lines: Vec<Line> = category
            .skills
            .iter()
            .map(|skill| {
                Line::from(vec![
                    Span::styled("  ▪ ", Style::default().fg(category.color)),
                    Span::styled(
                        skill.name,
                        Style::default()
                            .fg(skill.color)
                            .add_modifier(Modifier::BOLD),
                    ),
                ])
            })
            .collect();
        f.render_widget(Paragraph::new(lines), panel_inner);
    }
}
