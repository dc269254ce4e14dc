/// Body configuration tables: orbital radii, angular velocities, visual
/// properties. Values are scene units tuned for readability, not
/// astronomy (real scale would put everything sub-pixel).

use orrery_engine::{CameraMode, Rgba};
use serde::{Deserialize, Serialize};

/// Planet index constants.
pub const MERCURY: usize = 0;
pub const VENUS: usize = 1;
pub const EARTH: usize = 2;
pub const MARS: usize = 3;
pub const JUPITER: usize = 4;
pub const SATURN: usize = 5;
pub const URANUS: usize = 6;
pub const NEPTUNE: usize = 7;
pub const PLANET_COUNT: usize = 8;

/// Names for logging (indexed by planet constant).
pub const PLANET_NAMES: [&str; PLANET_COUNT] = [
    "Mercury", "Venus", "Earth", "Mars", "Jupiter", "Saturn", "Uranus", "Neptune",
];

// ── Per-body tables (canonical layout) ───────────────────────────────

const ORBIT_RADII: [f32; PLANET_COUNT] = [8.0, 11.0, 16.5, 22.5, 31.0, 43.0, 51.5, 56.5];
const ANGULAR_VELOCITIES: [f32; PLANET_COUNT] =
    [1.607, 1.174, 1.0, 0.802, 0.434, 0.323, 0.228, 0.182];
const VISUAL_SIZES: [f32; PLANET_COUNT] = [1.0, 1.5, 2.0, 1.8, 6.0, 5.5, 2.5, 2.2];
const SPIN_SPEEDS: [f32; PLANET_COUNT] = [0.12, 0.21, 0.24, 0.4, 0.5, 0.17, 0.35, 0.45];
const COLORS: [Rgba; PLANET_COUNT] = [
    Rgba::rgb(115, 147, 179),
    Rgba::rgb(255, 87, 51),
    Rgba::rgb(30, 144, 255),
    Rgba::rgb(178, 34, 34),
    Rgba::rgb(210, 105, 30),
    Rgba::rgb(220, 20, 60),
    Rgba::rgb(72, 209, 204),
    Rgba::rgb(65, 105, 225),
];

/// One planet's orbital and visual parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanetConfig {
    pub name: String,
    /// Distance from the system center on the orbital plane.
    pub orbit_radius: f32,
    /// Radians advanced per tick, scaled by the orbit step.
    pub angular_velocity: f32,
    /// Rendered sphere radius.
    pub visual_size: f32,
    /// Tint when rendering flat spheres.
    pub color: Rgba,
    /// Self-rotation rate, scaled by the spin step.
    pub spin_speed: f32,
    /// Diffuse texture path for the textured-model style.
    pub texture: String,
}

/// The moon's parameters. Its orbit is centered on the parent planet's
/// current position, not on a fixed point.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoonConfig {
    pub orbit_radius: f32,
    pub angular_velocity: f32,
    pub visual_size: f32,
    pub texture: String,
}

/// How bodies are drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RenderStyle {
    TexturedModel,
    FlatSphere,
}

/// Complete scene configuration. The compiled-in defaults reproduce the
/// canonical layout; a host may override parts of it via `from_json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SystemConfig {
    pub planets: Vec<PlanetConfig>,
    pub moon: MoonConfig,
    /// Index of the planet the moon orbits.
    pub earth: usize,
    pub sun_size: f32,
    pub sun_texture: String,
    pub background_texture: String,
    pub camera_mode: CameraMode,
    pub render_style: RenderStyle,
    pub window_width: i32,
    pub window_height: i32,
    pub title: String,
}

impl Default for SystemConfig {
    fn default() -> Self {
        let planets = (0..PLANET_COUNT)
            .map(|i| PlanetConfig {
                name: PLANET_NAMES[i].to_string(),
                orbit_radius: ORBIT_RADII[i],
                angular_velocity: ANGULAR_VELOCITIES[i],
                visual_size: VISUAL_SIZES[i],
                color: COLORS[i],
                spin_speed: SPIN_SPEEDS[i],
                texture: format!("resources/planet{}.jpg", i + 1),
            })
            .collect();

        Self {
            planets,
            moon: MoonConfig {
                orbit_radius: 3.5,
                angular_velocity: 2.7,
                visual_size: 0.8,
                texture: String::from("resources/moon.jpg"),
            },
            earth: EARTH,
            sun_size: 6.2,
            sun_texture: String::from("resources/sun.jpg"),
            background_texture: String::from("resources/background.jpg"),
            camera_mode: CameraMode::OrbitLookAt,
            render_style: RenderStyle::TexturedModel,
            window_width: 1280,
            window_height: 960,
            title: String::from("Solar System 3D"),
        }
    }
}

impl SystemConfig {
    /// Parse a configuration from a JSON string and validate it. Missing
    /// fields keep their compiled-in defaults.
    pub fn from_json(json: &str) -> Result<Self, String> {
        let config: Self = serde_json::from_str(json).map_err(|e| e.to_string())?;
        config.validate()?;
        Ok(config)
    }

    /// Reject tables the simulation cannot run on.
    pub fn validate(&self) -> Result<(), String> {
        if self.planets.is_empty() {
            return Err(String::from("no planets configured"));
        }
        if self.earth >= self.planets.len() {
            return Err(format!(
                "moon parent index {} out of range ({} planets)",
                self.earth,
                self.planets.len()
            ));
        }
        Ok(())
    }
}
