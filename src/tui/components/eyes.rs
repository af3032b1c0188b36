// Tracking eyes view
//
// Two eyes rendered on a braille canvas. The pupils follow the pointer
// through the smoothed gaze state; blinks squash the sclera ellipse
// vertically. Everything here reads from the per-frame snapshot, the
// mutable state lives in `GazeState`.

use crate::theme::Theme;
use crate::tui::app::App;
use ratatui::{
    layout::Rect,
    style::Style,
    symbols::Marker,
    widgets::{
        canvas::{Canvas, Circle, Line, Points},
        Block, BorderType, Borders,
    },
    Frame,
};
use std::f32::consts::PI;

const X_BOUNDS: (f64, f64) = (-2.0, 2.0);
const Y_BOUNDS: (f64, f64) = (-1.4, 1.4);

/// Horizontal offset of each eye center from the middle.
const EYE_OFFSET_X: f32 = 0.62;
const EYE_RADIUS: f32 = 0.48;

/// Gaze state works in eye-local units where the pupil travels at most
/// 0.08; this gain maps that travel into canvas units.
const PUPIL_GAIN: f32 = 3.0;

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let snap = app.gaze.snapshot(app.time);
    let pattern = app.gaze.pattern_points(app.time);

    let block = Block::default()
        .title(" Eyes ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.section_eyes));

    let canvas = Canvas::default()
        .block(block)
        .marker(Marker::Braille)
        .x_bounds([X_BOUNDS.0, X_BOUNDS.1])
        .y_bounds([Y_BOUNDS.0, Y_BOUNDS.1])
        .paint(|ctx| {
            for side in [-1.0f32, 1.0] {
                // Eye center: breathing bobs the pair, roll tilts it,
                // gaze rotation nudges it toward the pointer
                let cx = side * EYE_OFFSET_X + snap.rotation.1 * 1.2;
                let cy = snap.breathe_y * 4.0 - snap.rotation.0 * 1.2
                    + side * EYE_OFFSET_X * snap.breathe_roll.sin();

                draw_eye(ctx, theme, &snap, cx, cy);

                // Accent pattern ring around the eye
                let ring: Vec<(f64, f64)> = pattern
                    .iter()
                    .map(|(px, py, _)| {
                        (
                            (cx + px * PUPIL_GAIN * 2.2) as f64,
                            (cy + py * PUPIL_GAIN * 2.2) as f64,
                        )
                    })
                    .collect();
                let pattern_opacity = pattern.first().map_or(0.1, |p| p.2);
                ctx.draw(&Points {
                    coords: &ring,
                    color: Theme::dim(theme.accent, pattern_opacity * 4.0),
                });
            }
        });

    f.render_widget(canvas, area);
}

fn draw_eye(
    ctx: &mut ratatui::widgets::canvas::Context<'_>,
    theme: &Theme,
    snap: &crate::anim::gaze::GazeSnapshot,
    cx: f32,
    cy: f32,
) {
    let lid = snap.eyelid_scale;

    // Soft glow behind the eye
    ctx.draw(&Circle {
        x: cx as f64,
        y: cy as f64,
        radius: (EYE_RADIUS * 1.25) as f64,
        color: Theme::dim(theme.accent, snap.glow_opacity),
    });

    // Sclera outline: an ellipse squashed vertically by the eyelid.
    // Drawn as line segments since the canvas has no ellipse shape.
    const SEGMENTS: usize = 32;
    let ry = EYE_RADIUS * lid;
    let mut prev: Option<(f64, f64)> = None;
    for k in 0..=SEGMENTS {
        let a = k as f32 / SEGMENTS as f32 * PI * 2.0;
        let px = (cx + a.cos() * EYE_RADIUS) as f64;
        let py = (cy + a.sin() * ry) as f64;
        if let Some((lx, ly)) = prev {
            ctx.draw(&Line {
                x1: lx,
                y1: ly,
                x2: px,
                y2: py,
                color: theme.sclera,
            });
        }
        prev = Some((px, py));
    }

    // Iris and pupil disappear behind the lid mid-blink
    if lid < 0.35 {
        ctx.draw(&Line {
            x1: (cx - EYE_RADIUS) as f64,
            y1: cy as f64,
            x2: (cx + EYE_RADIUS) as f64,
            y2: cy as f64,
            color: theme.eyelid,
        });
        return;
    }

    let px = cx + snap.pupil.0 * PUPIL_GAIN;
    let py = cy + snap.pupil.1 * PUPIL_GAIN;

    ctx.draw(&Circle {
        x: px as f64,
        y: py as f64,
        radius: 0.2,
        color: theme.iris,
    });
    ctx.draw(&Circle {
        x: px as f64,
        y: py as f64,
        radius: 0.08,
        color: theme.foreground,
    });
}
