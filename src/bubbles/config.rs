use std::{fs, path::Path};

use bevy::prelude::*;
use serde::Deserialize;

const CONFIG_PATH: &str = "config/bubbles.toml";

#[derive(Debug, Clone, Deserialize, Default)]
struct RawBubbleConfig {
    #[serde(default)]
    display: RawDisplay,
    #[serde(default)]
    overlay: RawOverlay,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
struct RawDisplay {
    duration_ms: u64,
    pop_ms: u64,
}

impl Default for RawDisplay {
    fn default() -> Self {
        Self {
            duration_ms: 5000,
            pop_ms: 200,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
struct RawOverlay {
    max_width_px: f32,
    padding_px: f32,
    font_size: f32,
    vertical_offset: f32,
    max_display_distance: f32,
}

impl Default for RawOverlay {
    fn default() -> Self {
        Self {
            max_width_px: 225.0,
            padding_px: 6.0,
            font_size: 15.0,
            vertical_offset: 2.2,
            max_display_distance: 30.0,
        }
    }
}

/// Runtime configuration derived from `config/bubbles.toml`.
#[derive(Resource, Debug, Clone)]
pub struct BubbleConfig {
    pub display: BubbleDisplayConfig,
    pub overlay: BubbleOverlayConfig,
}

/// Timing knobs consumed by the scheduler and the pop animation.
#[derive(Debug, Clone)]
pub struct BubbleDisplayConfig {
    /// How long a promoted bubble stays visible (milliseconds).
    pub duration_ms: u64,
    /// Length of the pop-in/pop-out window at each end (milliseconds).
    pub pop_ms: u64,
}

/// Layout knobs consumed by the overlay systems.
#[derive(Debug, Clone)]
pub struct BubbleOverlayConfig {
    pub max_width_px: f32,
    pub padding_px: f32,
    pub font_size: f32,
    /// World-space offset above the avatar's head.
    pub vertical_offset: f32,
    /// Bubbles further than this from the camera are hidden (world units).
    pub max_display_distance: f32,
}

impl BubbleConfig {
    pub fn load_or_default() -> Self {
        let path = Path::new(CONFIG_PATH);
        match fs::read_to_string(path) {
            Ok(raw) => match toml::from_str::<RawBubbleConfig>(&raw) {
                Ok(parsed) => parsed.into(),
                Err(err) => {
                    warn!(
                        "Failed to parse {} ({}). Falling back to defaults.",
                        CONFIG_PATH, err
                    );
                    RawBubbleConfig::default().into()
                }
            },
            Err(err) => {
                warn!(
                    "Failed to read {} ({}). Falling back to defaults.",
                    CONFIG_PATH, err
                );
                RawBubbleConfig::default().into()
            }
        }
    }
}

impl Default for BubbleConfig {
    fn default() -> Self {
        RawBubbleConfig::default().into()
    }
}

impl From<RawBubbleConfig> for BubbleConfig {
    fn from(value: RawBubbleConfig) -> Self {
        let duration_ms = value.display.duration_ms.max(1);
        let display = BubbleDisplayConfig {
            duration_ms,
            // A pop window longer than half the display window would mean
            // overlapping in/out ramps.
            pop_ms: value.display.pop_ms.min(duration_ms / 2),
        };

        let overlay = BubbleOverlayConfig {
            max_width_px: value.overlay.max_width_px.max(32.0),
            padding_px: value.overlay.padding_px.max(0.0),
            font_size: value.overlay.font_size.max(6.0),
            vertical_offset: value.overlay.vertical_offset,
            max_display_distance: value.overlay.max_display_distance.max(1.0),
        };

        Self { display, overlay }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_reference_timings() {
        let config = BubbleConfig::default();
        assert_eq!(config.display.duration_ms, 5000);
        assert_eq!(config.display.pop_ms, 200);
    }

    #[test]
    fn partial_toml_fills_missing_sections() {
        let raw: RawBubbleConfig = toml::from_str(
            r#"
            [display]
            duration_ms = 8000
            "#,
        )
        .expect("partial config should parse");
        let config = BubbleConfig::from(raw);

        assert_eq!(config.display.duration_ms, 8000);
        assert_eq!(config.display.pop_ms, 200);
        assert_eq!(config.overlay.font_size, 15.0);
    }

    #[test]
    fn conversion_clamps_degenerate_values() {
        let raw: RawBubbleConfig = toml::from_str(
            r#"
            [display]
            duration_ms = 0
            pop_ms = 90000

            [overlay]
            max_width_px = -5.0
            max_display_distance = 0.0
            "#,
        )
        .expect("config should parse");
        let config = BubbleConfig::from(raw);

        assert_eq!(config.display.duration_ms, 1);
        assert!(config.display.pop_ms <= config.display.duration_ms / 2);
        assert_eq!(config.overlay.max_width_px, 32.0);
        assert_eq!(config.overlay.max_display_distance, 1.0);
    }
}
