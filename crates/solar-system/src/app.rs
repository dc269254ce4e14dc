/// Solar System: an animated orrery with fixed-rate circular orbits.
///
/// Owns the configuration, simulation state, camera rig, and asset
/// handles; composes the scene description the presenter draws each
/// frame: background, sun, each planet's orbit ring and body (with the
/// moon alongside its parent), HUD text.

use glam::Vec3;
use orrery_engine::{
    App, AppConfig, CameraPose, CameraRig, InputState, ModelHandle, PointerRequest, Presenter,
    Rgba, SceneFrame,
};

use crate::assets::SceneAssets;
use crate::bodies::{RenderStyle, SystemConfig};
use crate::ring::orbit_ring_segments;
use crate::sim::SimState;

// ── HUD ──────────────────────────────────────────────────────────────

const HUD_LINES: [&str; 4] = [
    "Solar System 3D",
    "Arrow keys: Move camera",
    "+/-: Zoom in/out",
    "F11 - Toggle fullscreen",
];
const HUD_X: i32 = 10;
const HUD_Y: i32 = 10;
const HUD_LINE_STEP: i32 = 30;
const HUD_SIZE: i32 = 20;

// ── Colors ───────────────────────────────────────────────────────────

const ORBIT_RING_COLOR: Rgba = Rgba::GRAY;
/// Flat-style tints for the two bodies that have no table color.
const SUN_COLOR: Rgba = Rgba::rgb(253, 184, 19);
const MOON_COLOR: Rgba = Rgba::rgb(180, 180, 180);

pub struct SolarSystemApp {
    config: SystemConfig,
    sim: SimState,
    camera: CameraRig,
    assets: SceneAssets,
}

impl SolarSystemApp {
    pub fn new(config: SystemConfig) -> Self {
        let sim = SimState::new(Vec3::ZERO, config.planets.len());
        let camera = CameraRig::new(config.camera_mode, CameraPose::default(), sim.center());
        let assets = SceneAssets::empty(config.planets.len());
        Self {
            config,
            sim,
            camera,
            assets,
        }
    }

    pub fn system(&self) -> &SystemConfig {
        &self.config
    }

    pub fn sim(&self) -> &SimState {
        &self.sim
    }

    pub fn camera(&self) -> &CameraRig {
        &self.camera
    }

    /// One body: textured model when the style and assets allow, flat
    /// colored sphere otherwise.
    fn body(
        &self,
        frame: &mut SceneFrame,
        model: ModelHandle,
        position: Vec3,
        size: f32,
        spin_deg: f32,
        color: Rgba,
    ) {
        if self.config.render_style == RenderStyle::TexturedModel && model.is_valid() {
            frame.model(model, position, Vec3::Y, spin_deg, 1.0, Rgba::WHITE);
        } else {
            frame.sphere(position, size, color);
        }
    }
}

impl App for SolarSystemApp {
    fn config(&self) -> AppConfig {
        AppConfig {
            window_width: self.config.window_width,
            window_height: self.config.window_height,
            title: self.config.title.clone(),
            frame_rate_cap: 60,
        }
    }

    fn init(&mut self, presenter: &mut dyn Presenter) {
        self.assets = SceneAssets::load(presenter, &self.config);
    }

    fn update(&mut self, input: &InputState) -> PointerRequest {
        let request = self.camera.update(input);
        self.sim.tick(&self.config);
        request
    }

    fn compose(&self, frame: &mut SceneFrame) {
        frame.camera = *self.camera.pose();
        frame.clear_color = Rgba::BLACK;
        frame.background = self.assets.background;

        // The sun sits at the system center and does not spin
        self.body(
            frame,
            self.assets.sun_model,
            self.sim.center(),
            self.config.sun_size,
            0.0,
            SUN_COLOR,
        );

        for (index, planet) in self.config.planets.iter().enumerate() {
            for (start, end) in orbit_ring_segments(self.sim.center(), planet.orbit_radius) {
                frame.line(start, end, ORBIT_RING_COLOR);
            }

            self.body(
                frame,
                self.assets.planet_models[index],
                self.sim.planet_position(index, &self.config),
                planet.visual_size,
                self.sim.spin(index).to_degrees(),
                planet.color,
            );

            if index == self.config.earth {
                self.body(
                    frame,
                    self.assets.moon_model,
                    self.sim.moon_position(&self.config),
                    self.config.moon.visual_size,
                    0.0,
                    MOON_COLOR,
                );
            }
        }

        for (i, line) in HUD_LINES.iter().enumerate() {
            frame.text(*line, HUD_X, HUD_Y + i as i32 * HUD_LINE_STEP, HUD_SIZE, Rgba::WHITE);
        }
    }

    fn shutdown(&mut self, presenter: &mut dyn Presenter) {
        self.assets.unload(presenter);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use orrery_engine::DrawCall;

    #[test]
    fn compose_without_assets_draws_flat_spheres() {
        let app = SolarSystemApp::new(SystemConfig::default());
        let mut frame = SceneFrame::new();
        app.compose(&mut frame);

        let spheres = frame
            .calls()
            .iter()
            .filter(|c| matches!(c, DrawCall::Sphere { .. }))
            .count();
        let models = frame
            .calls()
            .iter()
            .filter(|c| matches!(c, DrawCall::Model { .. }))
            .count();
        // Sun + 8 planets + moon, nothing textured
        assert_eq!(spheres, 10);
        assert_eq!(models, 0);
        assert!(!frame.background.is_valid());
        assert_eq!(frame.texts().len(), 4);
    }

    #[test]
    fn compose_draws_sun_first_and_one_ring_per_planet() {
        let app = SolarSystemApp::new(SystemConfig::default());
        let mut frame = SceneFrame::new();
        app.compose(&mut frame);

        assert!(matches!(frame.calls()[0], DrawCall::Sphere { .. }));
        let ring_runs: Vec<u32> = frame
            .calls()
            .iter()
            .filter_map(|c| match c {
                DrawCall::Lines { count, .. } => Some(*count),
                _ => None,
            })
            .collect();
        assert_eq!(ring_runs, vec![100; 8]);
    }

    #[test]
    fn moon_is_drawn_next_to_its_parent() {
        let mut app = SolarSystemApp::new(SystemConfig::default());
        let input = InputState::new();
        for _ in 0..25 {
            app.update(&input);
        }
        let mut frame = SceneFrame::new();
        app.compose(&mut frame);

        let spheres: Vec<(Vec3, f32)> = frame
            .calls()
            .iter()
            .filter_map(|c| match c {
                DrawCall::Sphere { center, radius, .. } => Some((*center, *radius)),
                _ => None,
            })
            .collect();
        // Order: sun, then planets with the moon right after Earth
        let earth = app.system().earth;
        let (earth_pos, _) = spheres[1 + earth];
        let (moon_pos, moon_size) = spheres[2 + earth];
        assert_eq!(moon_size, app.system().moon.visual_size);
        assert!(
            (moon_pos - earth_pos).length() <= app.system().moon.orbit_radius + 1e-3,
            "moon must stay within its orbit of the parent"
        );
    }
}
