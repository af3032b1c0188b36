// TUI application state
//
// One flat struct owns every piece of per-node interaction state and
// performs the explicit per-frame update pass. Drivers read the latest
// input state on each tick; discrete events (keys, mouse) mutate state
// between frames.

use super::components::constellation::{NODE_PICK_RADIUS, X_BOUNDS, Y_BOUNDS};
use super::components::toast::Toast;
use super::input::InputHandler;
use crate::anim::carousel::{CarouselState, Swipe, SwipeTracker};
use crate::anim::constellation::Constellation;
use crate::anim::explosion::ExplosionNode;
use crate::anim::gaze::GazeState;
use crate::config::Config;
use crate::data;
use crate::logging::LogBuffer;
use crate::theme::Theme;
use rand::rngs::StdRng;
use rand::SeedableRng;
use ratatui::layout::Rect;
use std::time::Instant;

/// Different views the TUI can display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Certificates,
    Experience,
    Skills,
    Constellation,
    Eyes,
}

impl View {
    /// Get the next view in cycle
    pub fn next(self) -> Self {
        match self {
            View::Certificates => View::Experience,
            View::Experience => View::Skills,
            View::Skills => View::Constellation,
            View::Constellation => View::Eyes,
            View::Eyes => View::Certificates,
        }
    }

    /// Get the previous view in cycle
    pub fn prev(self) -> Self {
        match self {
            View::Certificates => View::Eyes,
            View::Experience => View::Certificates,
            View::Skills => View::Experience,
            View::Constellation => View::Skills,
            View::Eyes => View::Constellation,
        }
    }

    /// Display name for the title and status bars
    pub fn name(&self) -> &'static str {
        match self {
            View::Certificates => "Certificates",
            View::Experience => "Experience",
            View::Skills => "Skills",
            View::Constellation => "Constellation",
            View::Eyes => "Eyes",
        }
    }
}

/// Main application state for the TUI
pub struct App {
    pub config: Config,
    pub theme: Theme,
    pub view: View,
    pub should_quit: bool,
    pub show_help: bool,
    pub show_logs: bool,

    /// Log buffer for the log overlay
    pub log_buffer: LogBuffer,

    /// When the app started (scene clock origin)
    start: Instant,
    last_tick: Instant,
    /// Scene clock: seconds since startup, updated once per tick
    pub time: f32,
    /// Seconds the last frame took
    pub dt: f32,

    /// Certificates carousel and its gesture tracker
    pub carousel: CarouselState,
    swipe: SwipeTracker,
    dragging: bool,
    drag_origin: Option<(u16, u16)>,

    /// Constellation: explosion state per node plus the static graph
    pub nodes: Vec<ExplosionNode>,
    pub constellation: Constellation,
    pub hovered_node: Option<usize>,

    /// Gaze and blink state for the eyes scene
    pub gaze: GazeState,

    /// Latest normalized pointer position, [-1, 1] on both axes, y up
    pub pointer: (f32, f32),

    /// Active toast notification, if any
    pub toast: Option<Toast>,

    /// Inner area of the constellation canvas, written during render,
    /// read by the mouse hit test
    pub constellation_area: Option<Rect>,

    /// Row of carousel dot indicators, written during render, read by
    /// the click test
    pub dots_area: Option<Rect>,

    /// Input handler for flexible key behavior
    input_handler: InputHandler,

    rng: StdRng,
}

impl App {
    pub fn new(config: Config, log_buffer: LogBuffer) -> Self {
        let mut rng = StdRng::from_entropy();
        let theme = Theme::by_name(&config.theme);
        let carousel =
            CarouselState::with_interval(data::CERTIFICATES.len(), config.carousel_interval_secs);
        let swipe = SwipeTracker::with_threshold(config.swipe_threshold);
        let nodes = (0..data::SKILLS.len())
            .map(|i| ExplosionNode::new(i, &mut rng))
            .collect();
        let constellation =
            Constellation::new(data::SKILLS.iter().map(|s| s.position).collect());
        let gaze = GazeState::new(config.gaze_smoothing(), &mut rng);

        let now = Instant::now();
        Self {
            config,
            theme,
            view: View::default(),
            should_quit: false,
            show_help: false,
            show_logs: false,
            log_buffer,
            start: now,
            last_tick: now,
            time: 0.0,
            dt: 0.0,
            carousel,
            swipe,
            dragging: false,
            drag_origin: None,
            nodes,
            constellation,
            hovered_node: None,
            gaze,
            pointer: (0.0, 0.0),
            toast: None,
            constellation_area: None,
            dots_area: None,
            input_handler: InputHandler::default(),
            rng,
        }
    }

    /// One explicit update pass over all animation state. Called once
    /// per frame-clock tick; rendering then consumes the snapshots.
    pub fn tick(&mut self) {
        let now = Instant::now();
        self.dt = now.duration_since(self.last_tick).as_secs_f32();
        self.last_tick = now;
        self.time = now.duration_since(self.start).as_secs_f32();

        self.carousel.tick(self.dt);
        for node in &mut self.nodes {
            node.update(self.time);
        }
        self.gaze
            .update(self.pointer, self.time, self.dt, &mut self.rng);

        if self.toast.as_ref().is_some_and(Toast::is_expired) {
            self.toast = None;
        }
    }

    /// Whether a view's scene is enabled by the feature flags
    pub fn view_enabled(&self, view: View) -> bool {
        match view {
            View::Constellation => self.config.features.constellation,
            View::Eyes => self.config.features.eyes,
            _ => true,
        }
    }

    /// Switch to a specific view. Per-view interaction state does not
    /// survive the switch (unmount semantics).
    pub fn set_view(&mut self, view: View) {
        if view == self.view {
            return;
        }
        if !self.view_enabled(view) {
            self.show_toast(format!("{} scene is disabled", view.name()));
            return;
        }
        self.clear_hover();
        self.swipe.reset();
        self.dragging = false;
        self.drag_origin = None;
        self.constellation_area = None;
        self.dots_area = None;
        self.view = view;
        tracing::debug!("Switched to {} view", view.name());
    }

    pub fn next_view(&mut self) {
        let mut view = self.view.next();
        while !self.view_enabled(view) {
            view = view.next();
        }
        self.set_view(view);
    }

    pub fn prev_view(&mut self) {
        let mut view = self.view.prev();
        while !self.view_enabled(view) {
            view = view.prev();
        }
        self.set_view(view);
    }

    /// Cycle to the next theme, persisting the choice
    pub fn next_theme(&mut self) {
        let name = Theme::next_name(&self.theme.name);
        self.theme = Theme::by_name(name);
        self.config.theme = name.to_string();
        if let Err(e) = self.config.save() {
            tracing::warn!("Could not persist theme choice: {}", e);
        }
        self.show_toast(format!("Theme: {name}"));
    }

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    pub fn toggle_logs(&mut self) {
        self.show_logs = !self.show_logs;
    }

    /// Handle a key press - returns true if the action should be triggered
    pub fn handle_key_press(&mut self, key: crossterm::event::KeyCode) -> bool {
        self.input_handler.handle_key_press(key)
    }

    /// Handle a key release
    pub fn handle_key_release(&mut self, key: crossterm::event::KeyCode) {
        self.input_handler.handle_key_release(key);
    }

    pub fn show_toast(&mut self, message: impl Into<String>) {
        self.toast = Some(Toast::new(message));
    }

    /// Link of the certificate currently shown by the carousel
    pub fn current_certificate_link(&self) -> Option<&'static str> {
        if self.view != View::Certificates {
            return None;
        }
        data::CERTIFICATES
            .get(self.carousel.index())
            .map(|c| c.link)
    }

    // --- pointer input -------------------------------------------------

    /// Raw pointer moved to a terminal cell. `norm` is the position
    /// normalized over the whole terminal to [-1, 1], y up.
    pub fn pointer_moved(&mut self, norm: (f32, f32), cell: (u16, u16)) {
        self.pointer = norm;
        if self.dragging {
            self.swipe
                .touch_move(cell.0 as f32 * self.config.swipe_units_per_cell);
        }
        if self.view == View::Constellation {
            self.update_hover(cell);
        }
    }

    /// Left button pressed: a potential swipe gesture begins.
    pub fn drag_start(&mut self, cell: (u16, u16)) {
        if self.view == View::Certificates {
            self.dragging = true;
            self.drag_origin = Some(cell);
            self.swipe
                .touch_start(cell.0 as f32 * self.config.swipe_units_per_cell);
        }
    }

    /// Left button released: classify the gesture. A sub-threshold
    /// release on the dot row counts as a click on that dot.
    pub fn drag_end(&mut self) {
        if !self.dragging {
            return;
        }
        self.dragging = false;
        let origin = self.drag_origin.take();
        match self.swipe.touch_end() {
            Swipe::Next => {
                self.carousel.advance();
                self.carousel.reset_timer();
            }
            Swipe::Prev => {
                self.carousel.retreat();
                self.carousel.reset_timer();
            }
            Swipe::None => {
                if let Some(i) = origin.and_then(|cell| self.dot_at(cell)) {
                    self.carousel.select(i);
                    self.carousel.reset_timer();
                }
            }
        }
    }

    /// Dot indicator under `cell`, if any. The dot row renders each
    /// indicator two cells wide, centered in its stored area.
    fn dot_at(&self, cell: (u16, u16)) -> Option<usize> {
        let area = self.dots_area?;
        if cell.1 != area.y {
            return None;
        }
        let width = self.carousel.len() as u16 * 2;
        if area.width < width {
            return None;
        }
        let start = area.x + (area.width - width) / 2;
        if cell.0 < start || cell.0 >= start + width {
            return None;
        }
        Some(((cell.0 - start) / 2) as usize)
    }

    /// Manual carousel navigation (arrow keys)
    pub fn carousel_next(&mut self) {
        self.carousel.advance();
        self.carousel.reset_timer();
    }

    pub fn carousel_prev(&mut self) {
        self.carousel.retreat();
        self.carousel.reset_timer();
    }

    // --- constellation hover -------------------------------------------

    /// Hit-test the pointer against the projected node positions and
    /// synthesize enter/leave events on changes.
    fn update_hover(&mut self, cell: (u16, u16)) {
        let Some(area) = self.constellation_area else {
            return;
        };
        let hit = self.node_at(cell, area);
        if hit == self.hovered_node {
            return;
        }
        if let Some(old) = self.hovered_node {
            self.nodes[old].pointer_leave(self.time);
        }
        if let Some(new) = hit {
            self.nodes[new].pointer_enter();
            tracing::trace!("Hovering {}", data::SKILLS[new].name);
        }
        self.hovered_node = hit;
    }

    /// Nearest node within picking distance of the pointer cell, if any.
    fn node_at(&self, cell: (u16, u16), area: Rect) -> Option<usize> {
        if area.width == 0 || area.height == 0 {
            return None;
        }
        if cell.0 < area.x
            || cell.0 >= area.x + area.width
            || cell.1 < area.y
            || cell.1 >= area.y + area.height
        {
            return None;
        }

        // Cell center in canvas coordinates
        let fx = (cell.0 - area.x) as f32 + 0.5;
        let fy = (cell.1 - area.y) as f32 + 0.5;
        let cx = X_BOUNDS.0 + fx / area.width as f32 * (X_BOUNDS.1 - X_BOUNDS.0);
        let cy = Y_BOUNDS.1 - fy / area.height as f32 * (Y_BOUNDS.1 - Y_BOUNDS.0);

        let mut best: Option<(usize, f32)> = None;
        for i in 0..self.nodes.len() {
            let (px, py) = self.constellation.projected(i, self.time);
            let d = ((px - cx).powi(2) + (py - cy).powi(2)).sqrt();
            if d < NODE_PICK_RADIUS && best.map_or(true, |(_, bd)| d < bd) {
                best = Some((i, d));
            }
        }
        best.map(|(i, _)| i)
    }

    fn clear_hover(&mut self) {
        if let Some(old) = self.hovered_node.take() {
            self.nodes[old].pointer_leave(self.time);
        }
    }

    /// Uptime as a formatted string for the status bar
    pub fn uptime(&self) -> String {
        let seconds = self.start.elapsed().as_secs();
        let hours = seconds / 3600;
        let minutes = (seconds % 3600) / 60;
        let secs = seconds % 60;
        format!("{:02}:{:02}:{:02}", hours, minutes, secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> App {
        App::new(Config::default(), LogBuffer::new())
    }

    #[test]
    fn view_cycle_is_closed() {
        let mut v = View::default();
        for _ in 0..5 {
            v = v.next();
        }
        assert_eq!(v, View::Certificates);
        assert_eq!(View::Certificates.prev(), View::Eyes);
    }

    #[test]
    fn mouse_swipe_left_advances_carousel() {
        let mut a = app();
        assert_eq!(a.view, View::Certificates);
        // 10 units per cell by default: 6 cells = 60 units > threshold
        a.drag_start((40, 10));
        a.pointer_moved((0.0, 0.0), (34, 10));
        a.drag_end();
        assert_eq!(a.carousel.index(), 1);
    }

    #[test]
    fn short_drag_is_not_a_swipe() {
        let mut a = app();
        a.drag_start((40, 10));
        a.pointer_moved((0.0, 0.0), (37, 10));
        a.drag_end();
        assert_eq!(a.carousel.index(), 0);
    }

    #[test]
    fn drag_outside_certificates_view_is_ignored() {
        let mut a = app();
        a.set_view(View::Skills);
        a.drag_start((40, 10));
        a.pointer_moved((0.0, 0.0), (0, 10));
        a.drag_end();
        assert_eq!(a.carousel.index(), 0);
    }

    #[test]
    fn switching_views_clears_hover_state() {
        let mut a = app();
        a.set_view(View::Constellation);
        a.hovered_node = Some(3);
        a.nodes[3].pointer_enter();
        a.set_view(View::Eyes);
        assert_eq!(a.hovered_node, None);
        assert!(!a.nodes[3].hovered);
    }

    #[test]
    fn clicking_a_dot_selects_that_card() {
        let mut a = app();
        // 9 dots, two cells each = 18 wide, centered at column 31
        a.dots_area = Some(Rect::new(0, 20, 80, 1));
        a.drag_start((35, 20));
        a.drag_end();
        assert_eq!(a.carousel.index(), 2);

        // A click off the dot row does nothing
        a.drag_start((35, 10));
        a.drag_end();
        assert_eq!(a.carousel.index(), 2);
    }

    #[test]
    fn disabled_scene_is_skipped_when_cycling() {
        let mut config = Config::default();
        config.features.eyes = false;
        let mut a = App::new(config, LogBuffer::new());
        a.set_view(View::Constellation);
        a.next_view();
        assert_eq!(a.view, View::Certificates);
        // Direct selection of a disabled scene is refused
        a.set_view(View::Eyes);
        assert_eq!(a.view, View::Certificates);
        assert!(a.toast.is_some());
    }

    #[test]
    fn certificate_link_follows_the_carousel() {
        let mut a = app();
        assert_eq!(
            a.current_certificate_link(),
            Some(crate::data::CERTIFICATES[0].link)
        );
        a.carousel_next();
        assert_eq!(
            a.current_certificate_link(),
            Some(crate::data::CERTIFICATES[1].link)
        );
        a.set_view(View::Skills);
        assert_eq!(a.current_certificate_link(), None);
    }
}
