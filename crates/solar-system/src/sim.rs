//! Orbit simulation: pure data advanced by a per-frame tick.
//!
//! Every angle in the scene lives here, decoupled from windowing and
//! drawing so the simulation runs (and tests) without a display. Angles
//! grow without bound; only `cos`/`sin` ever consume them, so no
//! normalization is applied.

use glam::Vec3;

use crate::bodies::SystemConfig;

/// Orbital angle increment per frame. The loop runs exactly one tick per
/// rendered frame, so this is a per-frame step, not elapsed time.
pub const ORBIT_STEP: f32 = 0.02;
/// Self-rotation increment per frame.
pub const SPIN_STEP: f32 = 0.5;
/// Moon orbital increment per frame.
pub const MOON_STEP: f32 = 0.009;

#[derive(Debug, Clone)]
pub struct SimState {
    center: Vec3,
    angles: Vec<f32>,
    spins: Vec<f32>,
    moon_angle: f32,
}

impl SimState {
    pub fn new(center: Vec3, planet_count: usize) -> Self {
        Self {
            center,
            angles: vec![0.0; planet_count],
            spins: vec![0.0; planet_count],
            moon_angle: 0.0,
        }
    }

    pub fn center(&self) -> Vec3 {
        self.center
    }

    /// Orbital angle of planet `index`, in radians.
    pub fn angle(&self, index: usize) -> f32 {
        self.angles[index]
    }

    /// Self-rotation angle of planet `index`, in radians.
    pub fn spin(&self, index: usize) -> f32 {
        self.spins[index]
    }

    pub fn moon_angle(&self) -> f32 {
        self.moon_angle
    }

    /// Advance every angle by one frame.
    pub fn tick(&mut self, config: &SystemConfig) {
        for (angle, planet) in self.angles.iter_mut().zip(&config.planets) {
            *angle += planet.angular_velocity * ORBIT_STEP;
        }
        for (spin, planet) in self.spins.iter_mut().zip(&config.planets) {
            *spin += planet.spin_speed * SPIN_STEP;
        }
        self.moon_angle += config.moon.angular_velocity * MOON_STEP;
    }

    /// Current position of planet `index`. Motion is confined to the XZ
    /// plane at the center's height; orbits are flat and coplanar.
    pub fn planet_position(&self, index: usize, config: &SystemConfig) -> Vec3 {
        let radius = config.planets[index].orbit_radius;
        let angle = self.angles[index];
        self.center + Vec3::new(angle.cos() * radius, 0.0, angle.sin() * radius)
    }

    /// Moon position, centered on the parent planet's *current* position.
    pub fn moon_position(&self, config: &SystemConfig) -> Vec3 {
        let parent = self.planet_position(config.earth, config);
        let radius = config.moon.orbit_radius;
        parent
            + Vec3::new(
                self.moon_angle.cos() * radius,
                0.0,
                self.moon_angle.sin() * radius,
            )
    }
}
