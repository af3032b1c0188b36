// Theme support for the TUI
//
// Provides color palettes that can be configured via config file.
// "auto" uses terminal's ANSI palette, named themes use true color (RGB).
// The default "neon" palette carries the portfolio site's purple/pink/cyan
// scheme into the terminal.

use ratatui::style::Color;

/// Color palette for the TUI
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: String,

    // Core UI colors
    pub title: Color,
    pub border: Color,
    pub highlight: Color,
    pub status_bar: Color,
    pub muted: Color,
    pub foreground: Color,

    // Portfolio accents
    pub accent: Color,
    pub accent_alt: Color,
    pub accent_cool: Color,

    // Scene colors
    pub edge_line: Color,
    pub flow_particle: Color,
    pub sclera: Color,
    pub iris: Color,
    pub eyelid: Color,

    // Section identity colors (border of the active view)
    pub section_certificates: Color,
    pub section_experience: Color,
    pub section_skills: Color,
    pub section_constellation: Color,
    pub section_eyes: Color,
}

impl Theme {
    /// Load theme by name
    pub fn by_name(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "neon" => Self::neon(),
            "dracula" => Self::dracula(),
            "nord" => Self::nord(),
            _ => Self::auto(), // "auto" or unknown
        }
    }

    /// Cycle order for the runtime theme switcher
    pub fn next_name(current: &str) -> &'static str {
        match current.to_lowercase().as_str() {
            "neon" => "dracula",
            "dracula" => "nord",
            "nord" => "auto",
            _ => "neon",
        }
    }

    /// Neon theme - the portfolio site's own scheme
    pub fn neon() -> Self {
        Self {
            name: "neon".to_string(),
            title: Color::Rgb(0x8b, 0x5c, 0xf6),      // neon purple
            border: Color::Rgb(0x4c, 0x1d, 0x95),     // deep violet
            highlight: Color::Rgb(0xec, 0x48, 0x99),  // neon pink
            status_bar: Color::Rgb(0x06, 0xb6, 0xd4), // neon cyan
            muted: Color::Rgb(0x6b, 0x72, 0x80),      // slate
            foreground: Color::Rgb(0xfa, 0xfa, 0xfa),
            accent: Color::Rgb(0x8b, 0x5c, 0xf6),
            accent_alt: Color::Rgb(0xec, 0x48, 0x99),
            accent_cool: Color::Rgb(0x06, 0xb6, 0xd4),
            edge_line: Color::Rgb(0x8b, 0x5c, 0xf6),
            flow_particle: Color::Rgb(0xec, 0x48, 0x99),
            sclera: Color::Rgb(0xfa, 0xfa, 0xfa),
            iris: Color::Rgb(0x4a, 0x37, 0x28),
            eyelid: Color::Rgb(0x2d, 0x1f, 0x3d),
            section_certificates: Color::Rgb(0x8b, 0x5c, 0xf6),
            section_experience: Color::Rgb(0xec, 0x48, 0x99),
            section_skills: Color::Rgb(0x06, 0xb6, 0xd4),
            section_constellation: Color::Rgb(0xa7, 0x8b, 0xfa),
            section_eyes: Color::Rgb(0xf4, 0x72, 0xb6),
        }
    }

    /// Auto theme - uses terminal's ANSI palette
    pub fn auto() -> Self {
        Self {
            name: "auto".to_string(),
            title: Color::Cyan,
            border: Color::White,
            highlight: Color::Yellow,
            status_bar: Color::Green,
            muted: Color::DarkGray,
            foreground: Color::White,
            accent: Color::Magenta,
            accent_alt: Color::LightMagenta,
            accent_cool: Color::Cyan,
            edge_line: Color::Magenta,
            flow_particle: Color::LightMagenta,
            sclera: Color::White,
            iris: Color::Yellow,
            eyelid: Color::DarkGray,
            section_certificates: Color::Magenta,
            section_experience: Color::LightMagenta,
            section_skills: Color::Cyan,
            section_constellation: Color::Blue,
            section_eyes: Color::LightRed,
        }
    }

    /// Dracula theme - https://draculatheme.com
    pub fn dracula() -> Self {
        Self {
            name: "dracula".to_string(),
            title: Color::Rgb(0x8b, 0xe9, 0xfd),      // cyan
            border: Color::Rgb(0x62, 0x72, 0xa4),     // comment
            highlight: Color::Rgb(0xf1, 0xfa, 0x8c),  // yellow
            status_bar: Color::Rgb(0x50, 0xfa, 0x7b), // green
            muted: Color::Rgb(0x62, 0x72, 0xa4),
            foreground: Color::Rgb(0xf8, 0xf8, 0xf2),
            accent: Color::Rgb(0xbd, 0x93, 0xf9),     // purple
            accent_alt: Color::Rgb(0xff, 0x79, 0xc6), // pink
            accent_cool: Color::Rgb(0x8b, 0xe9, 0xfd),
            edge_line: Color::Rgb(0xbd, 0x93, 0xf9),
            flow_particle: Color::Rgb(0xff, 0x79, 0xc6),
            sclera: Color::Rgb(0xf8, 0xf8, 0xf2),
            iris: Color::Rgb(0xff, 0xb8, 0x6c), // orange
            eyelid: Color::Rgb(0x44, 0x47, 0x5a),
            section_certificates: Color::Rgb(0xbd, 0x93, 0xf9),
            section_experience: Color::Rgb(0xff, 0x79, 0xc6),
            section_skills: Color::Rgb(0x8b, 0xe9, 0xfd),
            section_constellation: Color::Rgb(0x50, 0xfa, 0x7b),
            section_eyes: Color::Rgb(0xf1, 0xfa, 0x8c),
        }
    }

    /// Nord theme - https://nordtheme.com
    pub fn nord() -> Self {
        Self {
            name: "nord".to_string(),
            title: Color::Rgb(0x88, 0xc0, 0xd0),      // frost cyan
            border: Color::Rgb(0x4c, 0x56, 0x6a),     // polar night
            highlight: Color::Rgb(0xeb, 0xcb, 0x8b),  // aurora yellow
            status_bar: Color::Rgb(0xa3, 0xbe, 0x8c), // aurora green
            muted: Color::Rgb(0x4c, 0x56, 0x6a),
            foreground: Color::Rgb(0xec, 0xef, 0xf4),
            accent: Color::Rgb(0xb4, 0x8e, 0xad),     // aurora purple
            accent_alt: Color::Rgb(0xbf, 0x61, 0x6a), // aurora red
            accent_cool: Color::Rgb(0x88, 0xc0, 0xd0),
            edge_line: Color::Rgb(0xb4, 0x8e, 0xad),
            flow_particle: Color::Rgb(0xbf, 0x61, 0x6a),
            sclera: Color::Rgb(0xec, 0xef, 0xf4),
            iris: Color::Rgb(0xd0, 0x87, 0x70), // aurora orange
            eyelid: Color::Rgb(0x3b, 0x42, 0x52),
            section_certificates: Color::Rgb(0xb4, 0x8e, 0xad),
            section_experience: Color::Rgb(0xbf, 0x61, 0x6a),
            section_skills: Color::Rgb(0x88, 0xc0, 0xd0),
            section_constellation: Color::Rgb(0x81, 0xa1, 0xc1),
            section_eyes: Color::Rgb(0xeb, 0xcb, 0x8b),
        }
    }

    /// Border color for a view's main panel
    pub fn section_border(&self, view: crate::tui::app::View) -> Color {
        use crate::tui::app::View;
        match view {
            View::Certificates => self.section_certificates,
            View::Experience => self.section_experience,
            View::Skills => self.section_skills,
            View::Constellation => self.section_constellation,
            View::Eyes => self.section_eyes,
        }
    }

    /// Fade a color toward black by `opacity` in [0, 1].
    ///
    /// The scenes express glow and shimmer through opacity drivers; a
    /// terminal cell has no alpha channel, so opacity maps to
    /// brightness. ANSI palette colors pass through unchanged.
    pub fn dim(color: Color, opacity: f32) -> Color {
        let o = opacity.clamp(0.0, 1.0);
        match color {
            Color::Rgb(r, g, b) => Color::Rgb(
                (r as f32 * o) as u8,
                (g as f32 * o) as u8,
                (b as f32 * o) as u8,
            ),
            other => other,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::neon()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn by_name_falls_back_to_auto() {
        assert_eq!(Theme::by_name("Neon").name, "neon");
        assert_eq!(Theme::by_name("whatever").name, "auto");
    }

    #[test]
    fn theme_cycle_visits_every_palette() {
        let mut name = "neon";
        let mut seen = vec![name.to_string()];
        for _ in 0..3 {
            name = Theme::next_name(name);
            seen.push(name.to_string());
        }
        assert_eq!(seen, vec!["neon", "dracula", "nord", "auto"]);
        assert_eq!(Theme::next_name("auto"), "neon");
    }

    #[test]
    fn dim_scales_rgb_channels() {
        let dimmed = Theme::dim(Color::Rgb(200, 100, 50), 0.5);
        assert_eq!(dimmed, Color::Rgb(100, 50, 25));
        // Full opacity is identity, ANSI colors pass through
        assert_eq!(Theme::dim(Color::Rgb(10, 20, 30), 1.0), Color::Rgb(10, 20, 30));
        assert_eq!(Theme::dim(Color::Cyan, 0.2), Color::Cyan);
    }
}
