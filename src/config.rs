// Configuration for the portfolio TUI
//
// Configuration is loaded in order of precedence:
// 1. Environment variables (highest priority)
// 2. Config file (~/.config/folio/config.toml)
// 3. Built-in defaults (lowest priority)

use serde::Deserialize;
use std::path::PathBuf;

/// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Feature flags for optional scenes (opt-out: default enabled)
#[derive(Debug, Clone)]
pub struct Features {
    /// Skill constellation scene
    pub constellation: bool,

    /// Tracking eyes scene
    pub eyes: bool,
}

impl Default for Features {
    fn default() -> Self {
        Self {
            constellation: true,
            eyes: true,
        }
    }
}

/// Gaze smoothing settings (see anim::gaze::Smoothing)
#[derive(Debug, Clone)]
pub struct GazeConfig {
    /// "frame-bound" (frame-rate dependent) or "time-normalized"
    pub smoothing: String,

    /// Time constant for time-normalized smoothing, in seconds.
    /// 0.325 matches the frame-bound coefficient at 60 FPS.
    pub tau_secs: f32,
}

impl Default for GazeConfig {
    fn default() -> Self {
        Self {
            smoothing: "frame-bound".to_string(),
            tau_secs: 0.325,
        }
    }
}

/// Log file rotation policy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogRotation {
    Hourly,
    Daily,
    Never,
}

impl LogRotation {
    fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "hourly" => Self::Hourly,
            "never" => Self::Never,
            _ => Self::Daily,
        }
    }

    fn as_str(&self) -> &'static str {
        match self {
            Self::Hourly => "hourly",
            Self::Daily => "daily",
            Self::Never => "never",
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error
    pub level: String,

    /// Also write JSON logs to rotating files
    pub file_enabled: bool,
    pub file_dir: PathBuf,
    pub file_prefix: String,
    pub file_rotation: LogRotation,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file_enabled: false,
            file_dir: PathBuf::from("./logs"),
            file_prefix: "folio".to_string(),
            file_rotation: LogRotation::Daily,
        }
    }
}

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Frames per second for the animation tick
    pub fps: u32,

    /// Theme name: "neon", "dracula", "nord", "auto"
    pub theme: String,

    /// Seconds between automatic carousel advances
    pub carousel_interval_secs: f32,

    /// Swipe displacement threshold in input units
    pub swipe_threshold: f32,

    /// Input units per terminal cell of horizontal mouse drag
    pub swipe_units_per_cell: f32,

    /// Gaze smoothing settings
    pub gaze: GazeConfig,

    /// Feature flags for optional scenes
    pub features: Features,

    /// Logging configuration
    pub logging: LoggingConfig,
}

/// Feature flags as loaded from config file
#[derive(Debug, Deserialize, Default)]
struct FileFeatures {
    constellation: Option<bool>,
    eyes: Option<bool>,
}

/// Gaze settings as loaded from config file
#[derive(Debug, Deserialize, Default)]
struct FileGaze {
    smoothing: Option<String>,
    tau_secs: Option<f32>,
}

/// Logging settings as loaded from config file
#[derive(Debug, Deserialize, Default)]
struct FileLogging {
    level: Option<String>,
    file_enabled: Option<bool>,
    file_dir: Option<String>,
    file_prefix: Option<String>,
    file_rotation: Option<String>,
}

/// Config file structure (subset of Config that makes sense to persist)
#[derive(Debug, Deserialize, Default)]
struct FileConfig {
    fps: Option<u32>,
    theme: Option<String>,
    carousel_interval_secs: Option<f32>,
    swipe_threshold: Option<f32>,
    swipe_units_per_cell: Option<f32>,

    /// Optional [gaze] section
    gaze: Option<FileGaze>,

    /// Optional [features] section
    features: Option<FileFeatures>,

    /// Optional [logging] section
    logging: Option<FileLogging>,
}

impl Config {
    /// Get the config file path: ~/.config/folio/config.toml
    /// Uses Unix-style ~/.config on all platforms for consistency
    pub fn config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|p| p.join(".config").join("folio").join("config.toml"))
    }

    /// Create config template if it doesn't exist
    /// Called during startup to help users discover configuration options
    pub fn ensure_config_exists() {
        let Some(path) = Self::config_path() else {
            return;
        };

        // Don't overwrite existing config
        if path.exists() {
            return;
        }

        // Create parent directory
        if let Some(parent) = path.parent() {
            if std::fs::create_dir_all(parent).is_err() {
                return; // Silently fail - config is optional
            }
        }

        let template = r#"# folio configuration
# Uncomment and modify options as needed

# Theme: neon, dracula, nord, auto (press 't' in the TUI to cycle)
# theme = "neon"

# Animation frame rate (default: 30)
# fps = 30

# Seconds between automatic carousel slides (default: 3.0)
# carousel_interval_secs = 3.0

# Swipe gesture threshold in input units (default: 50.0)
# swipe_threshold = 50.0

# Input units per terminal cell of horizontal drag (default: 10.0)
# swipe_units_per_cell = 10.0

# Gaze smoothing for the tracking eyes
# [gaze]
# smoothing = "frame-bound"  # or "time-normalized"
# tau_secs = 0.325           # only used by time-normalized

# Scene flags (default: all enabled)
# [features]
# constellation = true  # Skill constellation scene
# eyes = true           # Tracking eyes scene

# Logging configuration
# [logging]
# level = "info"          # trace, debug, info, warn, error (RUST_LOG overrides)
# file_enabled = false    # Also write JSON logs to rotating files
# file_dir = "./logs"
# file_prefix = "folio"
# file_rotation = "daily" # hourly, daily, never
"#;

        // Write template (ignore errors - config is optional)
        let _ = std::fs::write(&path, template);
    }

    /// Load file config if it exists
    fn load_file_config() -> FileConfig {
        let Some(path) = Self::config_path() else {
            return FileConfig::default();
        };

        match std::fs::read_to_string(&path) {
            Ok(contents) => toml::from_str(&contents).unwrap_or_else(|e| {
                eprintln!("Warning: Failed to parse {}: {}", path.display(), e);
                FileConfig::default()
            }),
            Err(_) => FileConfig::default(), // File doesn't exist, use defaults
        }
    }

    /// Serialize config to TOML string (single source of truth for format)
    pub fn to_toml(&self) -> String {
        format!(
            r#"# folio configuration

# Theme: neon, dracula, nord, auto (press 't' in the TUI to cycle)
theme = "{theme}"

# Animation frame rate
fps = {fps}

# Seconds between automatic carousel slides
carousel_interval_secs = {interval}

# Swipe gesture threshold in input units
swipe_threshold = {threshold}

# Input units per terminal cell of horizontal drag
swipe_units_per_cell = {units_per_cell}

# Gaze smoothing for the tracking eyes
[gaze]
smoothing = "{smoothing}"
tau_secs = {tau}

# Scene flags
[features]
constellation = {constellation}
eyes = {eyes}

# Logging configuration (RUST_LOG env var overrides)
[logging]
level = "{log_level}"
file_enabled = {file_enabled}
file_dir = "{file_dir}"
file_prefix = "{file_prefix}"
file_rotation = "{file_rotation}"
"#,
            theme = self.theme,
            fps = self.fps,
            interval = self.carousel_interval_secs,
            threshold = self.swipe_threshold,
            units_per_cell = self.swipe_units_per_cell,
            smoothing = self.gaze.smoothing,
            tau = self.gaze.tau_secs,
            constellation = self.features.constellation,
            eyes = self.features.eyes,
            log_level = self.logging.level,
            file_enabled = self.logging.file_enabled,
            file_dir = self.logging.file_dir.display(),
            file_prefix = self.logging.file_prefix,
            file_rotation = self.logging.file_rotation.as_str(),
        )
    }

    /// Save current configuration to file
    pub fn save(&self) -> Result<(), std::io::Error> {
        let Some(path) = Self::config_path() else {
            return Err(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "Could not determine config path",
            ));
        };

        // Create parent directory if needed
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(&path, self.to_toml())
    }

    /// Load configuration: file -> env vars -> defaults
    pub fn from_env() -> Self {
        let file = Self::load_file_config();
        let defaults = Self::default();

        // Theme: env > file > default
        let theme = std::env::var("FOLIO_THEME")
            .ok()
            .or(file.theme)
            .unwrap_or(defaults.theme);

        // Frame rate: env > file > default, clamped to a sane range
        let fps = std::env::var("FOLIO_FPS")
            .ok()
            .and_then(|v| v.parse().ok())
            .or(file.fps)
            .unwrap_or(defaults.fps)
            .clamp(5, 120);

        // Carousel interval: file > default
        let carousel_interval_secs = file
            .carousel_interval_secs
            .filter(|v| *v > 0.0)
            .unwrap_or(defaults.carousel_interval_secs);

        // Swipe tuning: file > default
        let swipe_threshold = file
            .swipe_threshold
            .filter(|v| *v > 0.0)
            .unwrap_or(defaults.swipe_threshold);
        let swipe_units_per_cell = file
            .swipe_units_per_cell
            .filter(|v| *v > 0.0)
            .unwrap_or(defaults.swipe_units_per_cell);

        // Gaze settings: file config only
        let file_gaze = file.gaze.unwrap_or_default();
        let gaze = GazeConfig {
            smoothing: file_gaze
                .smoothing
                .unwrap_or_else(|| defaults.gaze.smoothing.clone()),
            tau_secs: file_gaze
                .tau_secs
                .filter(|v| *v > 0.0)
                .unwrap_or(defaults.gaze.tau_secs),
        };

        // Feature flags: file config only (env vars would be verbose)
        // Default: enabled (opt-out pattern)
        let file_features = file.features.unwrap_or_default();
        let features = Features {
            constellation: file_features.constellation.unwrap_or(true),
            eyes: file_features.eyes.unwrap_or(true),
        };

        // Logging settings: file config only (RUST_LOG env var handled in main.rs)
        let file_logging = file.logging.unwrap_or_default();
        let logging = LoggingConfig {
            level: file_logging.level.unwrap_or_else(|| "info".to_string()),
            file_enabled: file_logging.file_enabled.unwrap_or(false),
            file_dir: file_logging
                .file_dir
                .map(PathBuf::from)
                .unwrap_or(defaults.logging.file_dir),
            file_prefix: file_logging
                .file_prefix
                .unwrap_or(defaults.logging.file_prefix),
            file_rotation: file_logging
                .file_rotation
                .as_deref()
                .map(LogRotation::parse)
                .unwrap_or(defaults.logging.file_rotation),
        };

        Self {
            fps,
            theme,
            carousel_interval_secs,
            swipe_threshold,
            swipe_units_per_cell,
            gaze,
            features,
            logging,
        }
    }

    /// Gaze smoothing as the animation-layer enum.
    pub fn gaze_smoothing(&self) -> crate::anim::gaze::Smoothing {
        match self.gaze.smoothing.as_str() {
            "time-normalized" => crate::anim::gaze::Smoothing::TimeNormalized {
                tau: self.gaze.tau_secs,
            },
            _ => crate::anim::gaze::Smoothing::FrameBound,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            fps: 30,
            theme: "neon".to_string(),
            carousel_interval_secs: 3.0,
            swipe_threshold: 50.0,
            swipe_units_per_cell: 10.0,
            gaze: GazeConfig::default(),
            features: Features::default(),
            logging: LoggingConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_animation_contract() {
        let c = Config::default();
        assert_eq!(c.carousel_interval_secs, 3.0);
        assert_eq!(c.swipe_threshold, 50.0);
        assert!(matches!(
            c.gaze_smoothing(),
            crate::anim::gaze::Smoothing::FrameBound
        ));
    }

    #[test]
    fn to_toml_round_trips_through_the_file_parser() {
        let c = Config::default();
        let parsed: FileConfig = toml::from_str(&c.to_toml()).expect("valid toml");
        assert_eq!(parsed.theme.as_deref(), Some("neon"));
        assert_eq!(parsed.fps, Some(30));
        let gaze = parsed.gaze.expect("gaze section");
        assert_eq!(gaze.smoothing.as_deref(), Some("frame-bound"));
        let logging = parsed.logging.expect("logging section");
        assert_eq!(logging.file_rotation.as_deref(), Some("daily"));
    }

    #[test]
    fn time_normalized_mode_parses() {
        let c = Config {
            gaze: GazeConfig {
                smoothing: "time-normalized".to_string(),
                tau_secs: 0.5,
            },
            ..Config::default()
        };
        assert!(matches!(
            c.gaze_smoothing(),
            crate::anim::gaze::Smoothing::TimeNormalized { tau } if tau == 0.5
        ));
    }

    #[test]
    fn rotation_parse_is_forgiving() {
        assert_eq!(LogRotation::parse("HOURLY"), LogRotation::Hourly);
        assert_eq!(LogRotation::parse("never"), LogRotation::Never);
        assert_eq!(LogRotation::parse("bogus"), LogRotation::Daily);
    }
}
