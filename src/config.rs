//! Application configuration
//!
//! Configuration is loaded from multiple sources with the following
//! priority (lowest to highest):
//! 1. `config/default.toml` (version controlled)
//! 2. `config/user.toml` (gitignored, user overrides)
//! 3. Environment variables (`HW_SECTION__KEY`)

use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

use hyperwire_core::{Object4D, Scene, ShapeKind};
use hyperwire_engine::{PlaneSet, RotationState};
use hyperwire_math::{RotationPlane, Vec4};
use hyperwire_render::Camera4D;

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Drawing surface configuration
    #[serde(default)]
    pub window: WindowConfig,
    /// Camera and projection configuration
    #[serde(default)]
    pub camera: CameraConfig,
    /// Rotation animation configuration
    #[serde(default)]
    pub animation: AnimationConfig,
    /// Scene contents
    #[serde(default)]
    pub scene: SceneConfig,
    /// Debug configuration
    #[serde(default)]
    pub debug: DebugConfig,
}

impl AppConfig {
    /// Load configuration from the default locations
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
        if user_path.exists() {
            figment = figment.merge(Toml::file(&user_path));
        }

        // Environment variables override everything:
        // HW_WINDOW__WIDTH=1024 -> window.width = 1024
        figment = figment.merge(Env::prefixed("HW_").split("__"));

        figment.extract().map_err(ConfigError::from)
    }
}

/// Drawing surface configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WindowConfig {
    /// Surface title
    pub title: String,
    /// Surface width in pixels
    pub width: u32,
    /// Surface height in pixels
    pub height: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Hyperwire - 4D Wireframe Viewer".to_string(),
            width: 800,
            height: 600,
        }
    }
}

/// Camera and projection configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CameraConfig {
    /// 4D -> 3D perspective distance
    pub viewer_distance: f32,
    /// 3D -> 2D perspective distance
    pub screen_distance: f32,
    /// Starting position [x, y, z, w]
    pub position: [f32; 4],
    /// Screen scale factor
    pub zoom: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            viewer_distance: 5.0,
            screen_distance: 5.0,
            position: [0.0, 0.0, 0.0, -5.0],
            zoom: 1.0,
        }
    }
}

impl CameraConfig {
    /// Build a camera from this configuration
    pub fn to_camera(&self) -> Camera4D {
        Camera4D::new(self.viewer_distance, self.screen_distance).with_position(Vec4::new(
            self.position[0],
            self.position[1],
            self.position[2],
            self.position[3],
        ))
    }
}

/// Rotation animation configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnimationConfig {
    /// Radians per second per active plane
    pub speed: f32,
    /// Absolute-angle policy: reset to canonical pose before each frame's
    /// transform. The cumulative alternative compounds frame over frame.
    pub reset_each_frame: bool,
    /// Start with the animation running
    pub animate_on_start: bool,
    /// Planes spinning at startup
    pub planes: Vec<RotationPlane>,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            speed: 0.02,
            reset_each_frame: true,
            animate_on_start: true,
            planes: vec![RotationPlane::XY],
        }
    }
}

impl AnimationConfig {
    /// Build a rotation state from this configuration
    pub fn to_rotation_state(&self) -> RotationState {
        let mut active = PlaneSet::empty();
        for &plane in &self.planes {
            active |= PlaneSet::from_plane(plane);
        }
        RotationState::new()
            .with_speed(self.speed)
            .with_reset_each_frame(self.reset_each_frame)
            .with_animating(self.animate_on_start)
            .with_active(active)
    }
}

/// One object in the scene: a shape plus its 4D placement offset
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SceneObjectConfig {
    /// Shape kind and parameters
    #[serde(flatten)]
    pub shape: ShapeKind,
    /// 4D offset from the origin
    #[serde(default)]
    pub offset: [f32; 4],
}

/// Scene contents
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SceneConfig {
    /// Objects, in selection order (the first is selected at startup)
    pub objects: Vec<SceneObjectConfig>,
}

impl Default for SceneConfig {
    fn default() -> Self {
        // The classic demo scene: a unit tesseract plus a hypersphere
        // shifted off to the side
        Self {
            objects: vec![
                SceneObjectConfig {
                    shape: ShapeKind::tesseract(1.0),
                    offset: [0.0; 4],
                },
                SceneObjectConfig {
                    shape: ShapeKind::hypersphere(0.7, 12),
                    offset: [2.0, 0.0, 0.0, 0.0],
                },
            ],
        }
    }
}

impl SceneConfig {
    /// Build a scene by generating every configured object
    pub fn to_scene(&self) -> Scene {
        let mut scene = Scene::new();
        for entry in &self.objects {
            let mut object = Object4D::new(entry.shape);
            let [x, y, z, w] = entry.offset;
            if entry.offset != [0.0; 4] {
                object.translate(Vec4::new(x, y, z, w));
            }
            scene.add(object);
        }
        scene
    }
}

/// Debug configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DebugConfig {
    /// Draw the text overlay (rotation state, camera, object stats)
    pub show_overlay: bool,
    /// Log level (error, warn, info, debug, trace)
    pub log_level: String,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            show_overlay: true,
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
        assert_eq!(config.window.width, 800);
        assert_eq!(config.camera.viewer_distance, 5.0);
        assert!(config.animation.reset_each_frame);
        assert_eq!(config.scene.objects.len(), 2);
    }

    #[test]
    fn test_config_serialization() {
        let config = AppConfig::default();
        let toml = toml::to_string(&config).unwrap();
        assert!(toml.contains("viewer_distance"));
        assert!(toml.contains("Tesseract"));
    }

    #[test]
    fn test_scene_config_builds_offset_objects() {
        let scene = SceneConfig::default().to_scene();
        assert_eq!(scene.len(), 2);
        assert_eq!(scene.selected_index(), Some(0));
        assert!(scene.objects()[1].centroid().x > 1.0);
    }

    #[test]
    fn test_animation_config_to_rotation_state() {
        let config = AnimationConfig {
            speed: 0.5,
            reset_each_frame: false,
            animate_on_start: false,
            planes: vec![RotationPlane::XW, RotationPlane::ZW],
        };
        let state = config.to_rotation_state();
        assert_eq!(state.speed(), 0.5);
        assert!(!state.reset_each_frame());
        assert!(!state.is_animating());
        assert!(state.is_active(RotationPlane::XW));
        assert!(state.is_active(RotationPlane::ZW));
        assert!(!state.is_active(RotationPlane::XY));
    }

    #[test]
    fn test_camera_config_to_camera() {
        let camera = CameraConfig::default().to_camera();
        assert_eq!(camera.viewer_distance(), 5.0);
        assert_eq!(camera.position().w, -5.0);
    }
}
