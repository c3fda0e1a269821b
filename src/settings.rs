//! Game settings
//!
//! Presentation only: screen size, which game variant to run, colors and the
//! score font. Physics constants live in `consts` and are not configurable.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::renderer::{Color, colors};
use crate::sim::Bounds;

/// Which game to run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// Paddle and ball only
    #[default]
    Classic,
    /// Paddle, ball, brick grid and score. Needs a font file at
    /// `Settings::font_path`.
    Bricks,
}

impl Variant {
    pub fn as_str(&self) -> &'static str {
        match self {
            Variant::Classic => "Classic",
            Variant::Bricks => "Bricks",
        }
    }

    /// Whether this variant draws text and therefore needs a font
    pub fn needs_font(&self) -> bool {
        matches!(self, Variant::Bricks)
    }
}

/// Game settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub variant: Variant,

    // === Window ===
    pub width: u32,
    pub height: u32,

    // === Colors ===
    /// Clear color
    pub background: Color,
    /// Paddle and ball
    pub foreground: Color,
    /// Score text
    pub text_color: Color,

    // === Text ===
    pub font_path: String,
    pub font_size: f64,

    // === Headless run ===
    /// Frames the binary runs before exiting
    pub demo_frames: u32,
    /// Steer the paddle automatically
    pub autopilot: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            variant: Variant::Classic,

            width: 640,
            height: 480,

            background: colors::PINK,
            foreground: colors::WHITE,
            text_color: colors::BLACK,

            font_path: "data/fonts/default.otf".to_string(),
            font_size: 16.0,

            demo_frames: 3600,
            autopilot: true,
        }
    }
}

impl Settings {
    /// Config file looked up in the working directory
    pub const CONFIG_FILE: &'static str = "brick-pong.json";

    pub fn bounds(&self) -> Bounds {
        Bounds::new(self.width as f64, self.height as f64)
    }

    /// Load settings from the default config file
    pub fn load() -> Self {
        Self::load_from(Self::CONFIG_FILE)
    }

    /// Load settings from a JSON file, falling back to defaults
    pub fn load_from(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match std::fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str::<Settings>(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    return settings;
                }
                Err(e) => log::warn!("Ignoring malformed {}: {}", path.display(), e),
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => log::warn!("Could not read {}: {}", path.display(), e),
        }

        log::info!("Using default settings");
        Self::default()
    }
}
