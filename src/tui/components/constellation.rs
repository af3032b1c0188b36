// Skill constellation view
//
// Braille canvas rendering of the rotating 3D skill graph: edges
// between nearby nodes, flow particles along the edges, and per-node
// explosion effects driven by hover state.

use crate::anim::constellation::Constellation;
use crate::anim::explosion::ExplosionNode;
use crate::anim::Vec3;
use crate::data;
use crate::theme::Theme;
use crate::tui::app::App;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    symbols::Marker,
    text::{Line as TextLine, Span},
    widgets::{
        canvas::{Canvas, Circle, Line, Points},
        Block, BorderType, Borders,
    },
    Frame,
};

/// Canvas coordinate bounds. The node positions span roughly
/// [-3, 3] x [-2, 2] before rotation; the margin leaves room for
/// fragments flying outward.
pub const X_BOUNDS: (f32, f32) = (-4.2, 4.2);
pub const Y_BOUNDS: (f32, f32) = (-2.8, 2.8);

/// Pointer distance (in canvas units) within which a node counts as
/// hovered. A terminal cell is coarse, so this is generous.
pub const NODE_PICK_RADIUS: f32 = 0.45;

pub fn render(f: &mut Frame, area: Rect, app: &mut App) {
    let theme = app.theme.clone();
    let time = app.time;

    let block = Block::default()
        .title(" Skill Constellation ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.section_constellation));
    let inner = block.inner(area);

    // The mouse hit test needs the canvas geometry
    app.constellation_area = Some(inner);

    let constellation = &app.constellation;
    let nodes = &app.nodes;
    let hovered = app.hovered_node;
    let (yaw, pitch) = Constellation::rotation(time);

    let canvas = Canvas::default()
        .block(block)
        .marker(Marker::Braille)
        .x_bounds([X_BOUNDS.0 as f64, X_BOUNDS.1 as f64])
        .y_bounds([Y_BOUNDS.0 as f64, Y_BOUNDS.1 as f64])
        .paint(|ctx| {
            // Edges, pulsing together
            let edge_color = Theme::dim(theme.edge_line, Constellation::edge_opacity(time));
            for edge in constellation.edges() {
                let (x1, y1) = constellation.projected(edge.a, time);
                let (x2, y2) = constellation.projected(edge.b, time);
                ctx.draw(&Line {
                    x1: x1 as f64,
                    y1: y1 as f64,
                    x2: x2 as f64,
                    y2: y2 as f64,
                    color: edge_color,
                });
            }

            // Flow particles riding the edges, each with its own shimmer
            let coords: Vec<(f64, f64)> = constellation
                .particles()
                .iter()
                .enumerate()
                .map(|(i, p)| {
                    let mut p = *p;
                    p.y += Constellation::particle_shimmer(time, i);
                    let (x, y) = p.project(yaw, pitch);
                    (x as f64, y as f64)
                })
                .collect();
            ctx.draw(&Points {
                coords: &coords,
                color: Theme::dim(theme.flow_particle, 0.6),
            });

            // Nodes and their effect layers
            for (i, node) in nodes.iter().enumerate() {
                let skill = &data::SKILLS[i];
                let (x, y) = constellation.projected(i, time);

                // Glow halo behind the core
                ctx.draw(&Circle {
                    x: x as f64,
                    y: y as f64,
                    radius: (0.22 * node.glow_scale(time)) as f64,
                    color: Theme::dim(skill.color, node.glow_opacity(time)),
                });

                // Rotating rings, outer and counter-rotating inner
                let ring = node.ring_scale();
                draw_ring(
                    ctx,
                    skill.position,
                    0.32 * ring,
                    ExplosionNode::outer_ring_rotation(time),
                    (yaw, pitch),
                    Theme::dim(skill.color, 0.45),
                );
                draw_ring(
                    ctx,
                    skill.position,
                    0.24 * ring,
                    ExplosionNode::inner_ring_rotation(time),
                    (yaw, pitch),
                    Theme::dim(skill.color, 0.3),
                );

                // Expanding pulse ring while hovered
                if let Some((scale, opacity)) = node.pulse_wave(time) {
                    ctx.draw(&Circle {
                        x: x as f64,
                        y: y as f64,
                        radius: (0.3 * scale) as f64,
                        color: Theme::dim(skill.color, opacity),
                    });
                }

                // Core
                ctx.draw(&Circle {
                    x: x as f64,
                    y: y as f64,
                    radius: (0.15 * node.core_scale(time)) as f64,
                    color: skill.color,
                });

                // Explosion fragments while exploding or cooling
                if node.fragments_visible() {
                    let frags: Vec<(f64, f64)> = node
                        .fragments(time)
                        .iter()
                        .map(|frag| {
                            let (fx, fy) = skill.position.add(frag.offset).project(yaw, pitch);
                            (fx as f64, fy as f64)
                        })
                        .collect();
                    ctx.draw(&Points {
                        coords: &frags,
                        color: skill.color,
                    });
                }

                // Orbiting mini particles
                let orbit: Vec<(f64, f64)> = node
                    .orbiters(time)
                    .iter()
                    .map(|o| {
                        let (ox, oy) = skill.position.add(*o).project(yaw, pitch);
                        (ox as f64, oy as f64)
                    })
                    .collect();
                ctx.draw(&Points {
                    coords: &orbit,
                    color: Theme::dim(skill.color, 0.5),
                });
            }

            // Name label above the hovered node
            if let Some(i) = hovered {
                let skill = &data::SKILLS[i];
                let (x, y) = constellation.projected(i, time);
                ctx.print(
                    x as f64,
                    (y + 0.45) as f64,
                    TextLine::from(Span::styled(
                        skill.name,
                        Style::default()
                            .fg(skill.color)
                            .add_modifier(Modifier::BOLD),
                    )),
                );
            }
        });

    f.render_widget(canvas, area);
}

/// A 3D circle around `center`, tilted by Euler angles, drawn as a
/// point loop under the scene's own yaw/pitch projection.
fn draw_ring(
    ctx: &mut ratatui::widgets::canvas::Context<'_>,
    center: Vec3,
    radius: f32,
    euler: (f32, f32, f32),
    view: (f32, f32),
    color: ratatui::style::Color,
) {
    const SAMPLES: usize = 16;
    let coords: Vec<(f64, f64)> = (0..SAMPLES)
        .map(|k| {
            let a = k as f32 / SAMPLES as f32 * std::f32::consts::TAU;
            let p = Vec3::new(a.cos() * radius, a.sin() * radius, 0.0)
                .rotated(euler.0, euler.1, euler.2)
                .add(center);
            let (x, y) = p.project(view.0, view.1);
            (x as f64, y as f64)
        })
        .collect();
    ctx.draw(&Points {
        coords: &coords,
        color,
    });
}
