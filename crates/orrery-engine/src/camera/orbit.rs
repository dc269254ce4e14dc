use glam::{Vec2, Vec3};
use std::f32::consts::{FRAC_PI_2, PI};

use super::CameraPose;
use crate::input::queue::{Key, MouseButton};
use crate::input::state::InputState;

/// Orbit/look-at camera: a yaw/pitch offset on a sphere around a fixed
/// center, driven by dragging with the secondary mouse button.
///
/// Directional keys translate position and target together along the
/// camera's basis vectors; dolly keys move the position alone, changing
/// the distance to the center.
#[derive(Debug, Clone)]
pub struct OrbitCamera {
    pub pose: CameraPose,
    center: Vec3,
    yaw: f32,
    pitch: f32,
    prev_mouse: Vec2,
    first_sample: bool,
}

impl OrbitCamera {
    const SENSITIVITY: f32 = 0.005;
    const MOVE_SPEED: f32 = 0.5;
    const DOLLY_SPEED: f32 = 1.0;
    /// Keeps pitch off the poles so cos(pitch) never reaches zero.
    const PITCH_MARGIN: f32 = 0.1;

    /// Startup orientation seed. The first drag snaps the position onto
    /// the yaw/pitch sphere at the current center distance.
    const START_YAW: f32 = PI;
    const START_PITCH: f32 = 0.3;

    pub fn new(pose: CameraPose, center: Vec3) -> Self {
        Self {
            pose,
            center,
            yaw: Self::START_YAW,
            pitch: Self::START_PITCH,
            prev_mouse: Vec2::ZERO,
            first_sample: true,
        }
    }

    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    /// Run one control step against this frame's input.
    pub fn update(&mut self, input: &InputState) {
        if input.is_button_down(MouseButton::Secondary) {
            let mouse = input.mouse_position();
            if self.first_sample {
                // Suppress the first delta after activation so the camera
                // does not jump to wherever the cursor happens to be.
                self.prev_mouse = mouse;
                self.first_sample = false;
            }
            let delta = mouse - self.prev_mouse;
            self.prev_mouse = mouse;

            self.yaw += delta.x * Self::SENSITIVITY;
            self.pitch = (self.pitch + delta.y * Self::SENSITIVITY).clamp(
                -FRAC_PI_2 + Self::PITCH_MARGIN,
                FRAC_PI_2 - Self::PITCH_MARGIN,
            );

            let distance = self.pose.position.distance(self.center);
            self.pose.position = self.center
                + distance
                    * Vec3::new(
                        self.pitch.cos() * self.yaw.sin(),
                        self.pitch.sin(),
                        self.pitch.cos() * self.yaw.cos(),
                    );
            self.pose.target = self.center;
        } else {
            self.first_sample = true;
        }

        if input.is_down(Key::Right) {
            self.strafe(-Self::MOVE_SPEED);
        }
        if input.is_down(Key::Left) {
            self.strafe(Self::MOVE_SPEED);
        }
        if input.is_down(Key::Up) {
            self.rise(Self::MOVE_SPEED);
        }
        if input.is_down(Key::Down) {
            self.rise(-Self::MOVE_SPEED);
        }
        if input.is_down(Key::DollyIn) {
            self.dolly(Self::DOLLY_SPEED);
        }
        if input.is_down(Key::DollyOut) {
            self.dolly(-Self::DOLLY_SPEED);
        }
    }

    /// Translate position and target along the camera's right vector.
    fn strafe(&mut self, amount: f32) {
        let right = (self.pose.target - self.pose.position)
            .cross(self.pose.up)
            .normalize_or_zero();
        self.pose.position += right * amount;
        self.pose.target += right * amount;
    }

    /// Translate position and target along the camera's local up vector.
    fn rise(&mut self, amount: f32) {
        let view = (self.pose.target - self.pose.position).normalize_or_zero();
        let right = view.cross(self.pose.up);
        let up = right.cross(view).normalize_or_zero();
        self.pose.position += up * amount;
        self.pose.target += up * amount;
    }

    /// Move position along the view direction; the target stays put, so
    /// the center distance changes.
    fn dolly(&mut self, amount: f32) {
        let view = (self.pose.target - self.pose.position).normalize_or_zero();
        self.pose.position += view * amount;
    }
}
