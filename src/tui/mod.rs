// TUI module - Terminal User Interface
//
// This module manages the terminal UI using ratatui. It handles:
// - Terminal initialization and cleanup
// - Event loop (frame-clock ticks, keyboard and mouse input)
// - Rendering the scenes

pub mod app;
pub mod clipboard;
pub mod components;
pub mod input;
pub mod ui;

use crate::config::Config;
use crate::logging::LogBuffer;
use anyhow::{Context, Result};
use app::{App, View};
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        MouseButton, MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;

/// Run the TUI
///
/// Sets up the terminal (raw mode, alternate screen, mouse capture),
/// runs the event loop, and restores the terminal on exit. Mouse
/// capture is required: the hover and swipe interactions depend on
/// motion events.
pub async fn run_tui(log_buffer: LogBuffer, config: Config) -> Result<()> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("Failed to setup terminal")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    let mut app = App::new(config, log_buffer);

    let result = run_event_loop(&mut terminal, &mut app).await;

    // Restore terminal
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .context("Failed to restore terminal")?;
    terminal.show_cursor().context("Failed to show cursor")?;

    result
}

/// Main event loop
///
/// The frame clock drives every animation: each tick advances the
/// drivers once, then the frame renders from the updated state. Input
/// arrives between ticks and only mutates state; it never draws.
async fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<()> {
    let frame = Duration::from_secs_f64(1.0 / app.config.fps as f64);
    let mut tick_interval = tokio::time::interval(frame);

    loop {
        terminal
            .draw(|f| ui::draw(f, app))
            .context("Failed to draw terminal")?;

        tokio::select! {
            // Keyboard or mouse input
            _ = async {
                if event::poll(Duration::from_millis(10)).unwrap_or(false) {
                    match event::read() {
                        Ok(Event::Key(key_event)) => handle_key_event(app, key_event),
                        Ok(Event::Mouse(mouse_event)) => handle_mouse_event(app, mouse_event),
                        _ => {}
                    }
                }
            } => {}

            // Frame clock
            _ = tick_interval.tick() => {
                app.tick();
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

/// Handle keyboard input
/// Layered dispatch: Overlay → Global → View-specific
fn handle_key_event(app: &mut App, key_event: KeyEvent) {
    if handle_overlay_input(app, &key_event) {
        return;
    }

    if handle_global_keys(app, &key_event) {
        return;
    }

    let key = key_event.code;

    match key_event.kind {
        KeyEventKind::Press => {
            // Navigation keys use state tracking for hold-to-repeat
            if !app.handle_key_press(key) {
                return;
            }

            if app.view == View::Certificates {
                match key {
                    KeyCode::Left | KeyCode::Char('h') => app.carousel_prev(),
                    KeyCode::Right | KeyCode::Char('l') => app.carousel_next(),
                    _ => {}
                }
            }
        }
        KeyEventKind::Release => {
            app.handle_key_release(key);
        }
        _ => {}
    }
}

/// Handle input while the help or log overlay is open
/// Returns true if the overlay absorbed the input
fn handle_overlay_input(app: &mut App, key_event: &KeyEvent) -> bool {
    if !app.show_help && !app.show_logs {
        return false;
    }

    // Always process Release events to keep InputHandler in sync.
    // Without this, keys get stuck in "pressed" state after the
    // overlay closes.
    if key_event.kind == KeyEventKind::Release {
        app.handle_key_release(key_event.code);
        return true;
    }
    if key_event.kind != KeyEventKind::Press {
        return true;
    }

    match key_event.code {
        KeyCode::Esc | KeyCode::Char('q') => {
            if app.handle_key_press(key_event.code) {
                app.show_help = false;
                app.show_logs = false;
            }
        }
        KeyCode::Char('?') => {
            if app.handle_key_press(key_event.code) {
                app.toggle_help();
            }
        }
        KeyCode::Char('L') => {
            if app.handle_key_press(key_event.code) {
                app.toggle_logs();
            }
        }
        _ => {}
    }

    true
}

/// Handle global keys - returns true if handled
/// Global keys work the same regardless of current view
fn handle_global_keys(app: &mut App, key_event: &KeyEvent) -> bool {
    if key_event.kind != KeyEventKind::Press {
        return false;
    }

    let key = key_event.code;

    match key {
        // Quit
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
            if app.handle_key_press(key) {
                app.should_quit = true;
            }
            true
        }
        // View switching - number keys and Tab cycling
        KeyCode::Char(c @ '1'..='5') => {
            if app.handle_key_press(key) {
                let view = match c {
                    '1' => View::Certificates,
                    '2' => View::Experience,
                    '3' => View::Skills,
                    '4' => View::Constellation,
                    _ => View::Eyes,
                };
                app.set_view(view);
            }
            true
        }
        KeyCode::Tab => {
            if app.handle_key_press(key) {
                app.next_view();
            }
            true
        }
        KeyCode::BackTab => {
            if app.handle_key_press(key) {
                app.prev_view();
            }
            true
        }
        // Theme cycling
        KeyCode::Char('t') | KeyCode::Char('T') => {
            if app.handle_key_press(key) {
                app.next_theme();
            }
            true
        }
        // Copy the visible certificate's verification link
        KeyCode::Char('y') | KeyCode::Enter => {
            if app.handle_key_press(key) {
                if let Some(link) = app.current_certificate_link() {
                    if clipboard::copy_to_clipboard(link).is_ok() {
                        app.show_toast("✓ Link copied to clipboard");
                        tracing::info!(link, "Copied certificate link");
                    } else {
                        app.show_toast("✗ Failed to copy");
                    }
                }
            }
            true
        }
        // Log overlay
        KeyCode::Char('L') => {
            if app.handle_key_press(key) {
                app.toggle_logs();
            }
            true
        }
        // Help
        KeyCode::Char('?') => {
            if app.handle_key_press(key) {
                app.toggle_help();
            }
            true
        }
        _ => false,
    }
}

/// Handle mouse input
///
/// Motion feeds the gaze target and the constellation hover test; a
/// left-button press-drag-release sequence forms a swipe gesture on
/// the carousel. Scroll steps the carousel directly.
fn handle_mouse_event(app: &mut App, mouse_event: MouseEvent) {
    let cell = (mouse_event.column, mouse_event.row);
    match mouse_event.kind {
        MouseEventKind::Moved | MouseEventKind::Drag(MouseButton::Left) => {
            let size = crossterm::terminal::size().unwrap_or((80, 24));
            app.pointer_moved(normalize_pointer(cell, size), cell);
        }
        MouseEventKind::Down(MouseButton::Left) => {
            app.drag_start(cell);
        }
        MouseEventKind::Up(MouseButton::Left) => {
            app.drag_end();
        }
        MouseEventKind::ScrollUp => {
            if app.view == View::Certificates {
                app.carousel_prev();
            }
        }
        MouseEventKind::ScrollDown => {
            if app.view == View::Certificates {
                app.carousel_next();
            }
        }
        _ => {}
    }
}

/// Map a terminal cell to a normalized pointer position in [-1, 1] on
/// both axes, y pointing up.
fn normalize_pointer(cell: (u16, u16), size: (u16, u16)) -> (f32, f32) {
    let (cols, rows) = size;
    let nx = if cols > 1 {
        cell.0 as f32 / (cols - 1) as f32 * 2.0 - 1.0
    } else {
        0.0
    };
    let ny = if rows > 1 {
        1.0 - cell.1 as f32 / (rows - 1) as f32 * 2.0
    } else {
        0.0
    };
    (nx.clamp(-1.0, 1.0), ny.clamp(-1.0, 1.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pointer_normalization_spans_both_axes() {
        let top_left = normalize_pointer((0, 0), (80, 24));
        assert!((top_left.0 + 1.0).abs() < 1e-6);
        assert!((top_left.1 - 1.0).abs() < 1e-6);

        let bottom_right = normalize_pointer((79, 23), (80, 24));
        assert!((bottom_right.0 - 1.0).abs() < 1e-4);
        assert!((bottom_right.1 + 1.0).abs() < 1e-4);

        let center = normalize_pointer((40, 12), (81, 25));
        assert!(center.0.abs() < 1e-6);
        assert!(center.1.abs() < 1e-6);
    }
}
