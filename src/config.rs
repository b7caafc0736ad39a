//! Application configuration
//!
//! Configuration is loaded from multiple sources with the following priority (lowest to highest):
//! 1. `config/default.toml` (version controlled)
//! 2. `config/user.toml` (gitignored, user overrides)
//! 3. Environment variables (`NDP_SECTION__KEY`)

use figment::{Figment, providers::{Format, Toml, Env}};
use serde::{Serialize, Deserialize};
use std::path::Path;
use std::time::Duration;

use ndpoly_core::{Animator, PolytopeFamily, MAX_DIMENSION, MIN_DIMENSION};

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Which polytope to show
    #[serde(default)]
    pub polytope: PolytopeConfig,
    /// Animation configuration
    #[serde(default)]
    pub animation: AnimationConfig,
    /// Frame output configuration
    #[serde(default)]
    pub output: OutputConfig,
    /// Debug configuration
    #[serde(default)]
    pub debug: DebugConfig,
}

impl AppConfig {
    /// Load configuration from default locations
    ///
    /// Priority (lowest to highest):
    /// 1. `config/default.toml`
    /// 2. `config/user.toml`
    /// 3. Environment variables (`NDP_*`)
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from a specific config directory
    pub fn load_from<P: AsRef<Path>>(config_dir: P) -> Result<Self, ConfigError> {
        let config_dir = config_dir.as_ref();
        let default_path = config_dir.join("default.toml");
        let user_path = config_dir.join("user.toml");

        let mut figment = Figment::new();

        if default_path.exists() {
            figment = figment.merge(Toml::file(&default_path));
        }

        // Load user config (optional)
        if user_path.exists() {
            figment = figment.merge(Toml::file(&user_path));
        }

        // Environment variables override everything
        // NDP_POLYTOPE__DIMENSION=6 -> polytope.dimension = 6
        figment = figment.merge(Env::prefixed("NDP_").split("__"));

        figment.extract().map_err(ConfigError::from)
    }
}

/// Polytope selection
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PolytopeConfig {
    /// Polytope family (simplex, cube, orthoplex)
    pub family: PolytopeFamily,
    /// Starting dimension
    pub dimension: usize,
}

impl PolytopeConfig {
    /// The configured dimension clamped into the supported range
    pub fn clamped_dimension(&self) -> usize {
        self.dimension.clamp(MIN_DIMENSION, MAX_DIMENSION)
    }
}

impl Default for PolytopeConfig {
    fn default() -> Self {
        Self {
            family: PolytopeFamily::Simplex,
            dimension: 4,
        }
    }
}

/// Animation configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    /// Angular speed of the first rotation plane (radians per second)
    pub base_speed: f64,
    /// Extra fraction of `base_speed` per plane index
    pub speed_step: f64,
    /// Target frames per second
    pub fps: u32,
    /// Number of frames to emit (0 = run until interrupted)
    pub frames: u64,
    /// Start with the animation paused
    pub paused: bool,
    /// Quiet period for dimension changes, in milliseconds
    pub debounce_ms: u64,
}

impl AnimationConfig {
    /// Build an animator from this configuration
    pub fn to_animator(&self) -> Animator {
        Animator::new()
            .with_base_speed(self.base_speed)
            .with_speed_step(self.speed_step)
            .with_running(!self.paused)
    }

    /// Duration of one frame at the configured rate
    pub fn frame_interval(&self) -> Duration {
        Duration::from_secs_f64(1.0 / self.fps.max(1) as f64)
    }

    /// Quiet period for dimension changes
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            base_speed: 0.5,
            speed_step: 0.15,
            fps: 30,
            frames: 0,
            paused: false,
            debounce_ms: 150,
        }
    }
}

/// Frame output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Decimal places for projected coordinates
    pub precision: usize,
    /// Print the edge list whenever the geometry changes
    pub print_edges: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            precision: 3,
            print_edges: true,
        }
    }
}

/// Debug configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level (error, warn, info, debug, trace)
    pub log_level: String,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
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
        assert_eq!(config.polytope.dimension, 4);
        assert_eq!(config.polytope.family, PolytopeFamily::Simplex);
        assert_eq!(config.animation.fps, 30);
    }

    #[test]
    fn test_config_serialization() {
        let config = AppConfig::default();
        let toml = toml::to_string(&config).unwrap();
        assert!(toml.contains("family = \"simplex\""));
        assert!(toml.contains("base_speed"));
    }

    #[test]
    fn test_clamped_dimension() {
        let mut polytope = PolytopeConfig::default();
        polytope.dimension = 0;
        assert_eq!(polytope.clamped_dimension(), MIN_DIMENSION);
        polytope.dimension = 40;
        assert_eq!(polytope.clamped_dimension(), MAX_DIMENSION);
    }

    #[test]
    fn test_frame_interval() {
        let mut animation = AnimationConfig::default();
        animation.fps = 20;
        assert_eq!(animation.frame_interval(), Duration::from_millis(50));
        animation.fps = 0;
        assert_eq!(animation.frame_interval(), Duration::from_secs(1));
    }

    #[test]
    fn test_to_animator() {
        let mut animation = AnimationConfig::default();
        animation.paused = true;
        animation.base_speed = 2.0;
        let animator = animation.to_animator();
        assert!(!animator.is_running());
        assert_eq!(animator.plane_speed(0), 2.0);
    }
}
