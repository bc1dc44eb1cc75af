//! Application configuration
//!
//! Configuration is loaded from multiple sources with the following priority (lowest to highest):
//! 1. `config/default.toml` (version controlled)
//! 2. `config/user.toml` (gitignored, user overrides)
//! 3. Environment variables (`DODGE_SECTION__KEY`)

use figment::{Figment, providers::{Format, Toml, Env}};
use serde::{Serialize, Deserialize};
use std::path::Path;

use blockdodge_game::Tuning;
use blockdodge_render::Palette;

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Window configuration
    #[serde(default)]
    pub window: WindowConfig,
    /// Gameplay configuration
    #[serde(default)]
    pub game: GameConfig,
    /// Rendering configuration
    #[serde(default)]
    pub rendering: RenderingConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            window: WindowConfig::default(),
            game: GameConfig::default(),
            rendering: RenderingConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from default locations
    ///
    /// Priority (lowest to highest):
    /// 1. `config/default.toml`
    /// 2. `config/user.toml`
    /// 3. Environment variables (`DODGE_*`)
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from a specific config directory
    pub fn load_from<P: AsRef<Path>>(config_dir: P) -> Result<Self, ConfigError> {
        let config_dir = config_dir.as_ref();
        let default_path = config_dir.join("default.toml");
        let user_path = config_dir.join("user.toml");

        let mut figment = Figment::new();

        // Load default config (required)
        if default_path.exists() {
            figment = figment.merge(Toml::file(&default_path));
        }

        // Load user config (optional)
        if user_path.exists() {
            figment = figment.merge(Toml::file(&user_path));
        }

        // Environment variables override everything
        // DODGE_WINDOW__TITLE=Test -> window.title = "Test"
        figment = figment.merge(Env::prefixed("DODGE_").split("__"));

        figment.extract().map_err(ConfigError::from)
    }
}

/// Window configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WindowConfig {
    /// Window title
    pub title: String,
    /// Window width in pixels
    pub width: u32,
    /// Window height in pixels
    pub height: u32,
    /// Start in fullscreen mode
    pub fullscreen: bool,
    /// Enable VSync
    pub vsync: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Block Dodger".to_string(),
            width: 640,
            height: 480,
            fullscreen: false,
            vsync: true,
        }
    }
}

/// Gameplay configuration
///
/// Mirrors [`Tuning`] field for field so every gameplay constant can
/// be overridden from TOML or the environment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    /// Player half size (the player is a square)
    pub player_half: f32,
    /// Player steering speed in NDC units per second
    pub player_speed: f32,
    /// Gap between the player and the bottom screen edge
    pub player_bottom_margin: f32,
    /// Starting seconds between obstacle spawns
    pub spawn_interval: f32,
    /// Height at which obstacles spawn (above the top edge)
    pub spawn_y: f32,
    /// Horizontal spawn range is -spawn_x_limit..=spawn_x_limit
    pub spawn_x_limit: f32,
    /// Starting obstacle fall speed in NDC units per second
    pub obstacle_speed: f32,
    /// Obstacle half width
    pub obstacle_half_width: f32,
    /// Obstacle half height
    pub obstacle_half_height: f32,
    /// Obstacles below this height are removed
    pub despawn_y: f32,
    /// Seconds between difficulty steps
    pub ramp_interval: f32,
    /// Spawn interval multiplier applied each difficulty step
    pub ramp_factor: f32,
    /// Spawn interval never drops below this
    pub min_spawn_interval: f32,
    /// Fall speed added to new spawns each difficulty step
    pub speed_step: f32,
}

impl Default for GameConfig {
    fn default() -> Self {
        let tuning = Tuning::default();
        Self {
            player_half: tuning.player_half,
            player_speed: tuning.player_speed,
            player_bottom_margin: tuning.player_bottom_margin,
            spawn_interval: tuning.spawn_interval,
            spawn_y: tuning.spawn_y,
            spawn_x_limit: tuning.spawn_x_limit,
            obstacle_speed: tuning.obstacle_speed,
            obstacle_half_width: tuning.obstacle_half_width,
            obstacle_half_height: tuning.obstacle_half_height,
            despawn_y: tuning.despawn_y,
            ramp_interval: tuning.ramp_interval,
            ramp_factor: tuning.ramp_factor,
            min_spawn_interval: tuning.min_spawn_interval,
            speed_step: tuning.speed_step,
        }
    }
}

impl GameConfig {
    /// Convert to the game crate's tuning struct
    pub fn to_tuning(&self) -> Tuning {
        Tuning {
            player_half: self.player_half,
            player_speed: self.player_speed,
            player_bottom_margin: self.player_bottom_margin,
            spawn_interval: self.spawn_interval,
            spawn_y: self.spawn_y,
            spawn_x_limit: self.spawn_x_limit,
            obstacle_speed: self.obstacle_speed,
            obstacle_half_width: self.obstacle_half_width,
            obstacle_half_height: self.obstacle_half_height,
            despawn_y: self.despawn_y,
            ramp_interval: self.ramp_interval,
            ramp_factor: self.ramp_factor,
            min_spawn_interval: self.min_spawn_interval,
            speed_step: self.speed_step,
        }
    }
}

/// Rendering configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderingConfig {
    /// Background color [r, g, b, a]
    pub background_color: [f32; 4],
    /// Player color while the run is live [r, g, b, a]
    pub player_color: [f32; 4],
    /// Player color after a collision [r, g, b, a]
    pub player_game_over_color: [f32; 4],
    /// Obstacle color [r, g, b, a]
    pub obstacle_color: [f32; 4],
}

impl Default for RenderingConfig {
    fn default() -> Self {
        Self {
            background_color: [0.05, 0.05, 0.05, 1.0],
            player_color: [0.0, 1.0, 0.0, 1.0],
            player_game_over_color: [1.0, 1.0, 0.0, 1.0],
            obstacle_color: [1.0, 0.0, 0.0, 1.0],
        }
    }
}

impl RenderingConfig {
    /// Convert to the render crate's sprite palette
    pub fn to_palette(&self) -> Palette {
        Palette {
            player: self.player_color,
            player_down: self.player_game_over_color,
            obstacle: self.obstacle_color,
        }
    }
}

/// Configuration error
#[derive(Debug)]
pub struct ConfigError {
    message: String,
}

impl From<figment::Error> for ConfigError {
    fn from(e: figment::Error) -> Self {
        ConfigError {
            message: e.to_string(),
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Configuration error: {}", self.message)
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.window.width, 640);
        assert_eq!(config.window.height, 480);
        assert_eq!(config.game.spawn_interval, 1.2);
    }

    #[test]
    fn test_config_serialization() {
        let config = AppConfig::default();
        let toml = toml::to_string(&config).unwrap();
        assert!(toml.contains("title"));
        assert!(toml.contains("spawn_interval"));
        assert!(toml.contains("background_color"));
    }

    #[test]
    fn test_game_config_matches_tuning_defaults() {
        let config = GameConfig::default();
        assert_eq!(config.to_tuning(), Tuning::default());
    }

    #[test]
    fn test_rendering_config_to_palette() {
        let config = RenderingConfig::default();
        let palette = config.to_palette();
        assert_eq!(palette.player, [0.0, 1.0, 0.0, 1.0]);
        assert_eq!(palette.player_down, [1.0, 1.0, 0.0, 1.0]);
        assert_eq!(palette.obstacle, [1.0, 0.0, 0.0, 1.0]);
    }
}
