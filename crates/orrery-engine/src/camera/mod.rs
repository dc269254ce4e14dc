//! Camera rigs for the two control schemes.
//!
//! A `CameraRig` wraps one of the rigs, selected by `CameraMode` at
//! construction. Both rigs keep every pose component finite and move
//! nothing while input is idle.

pub mod free;
pub mod orbit;

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::input::state::InputState;
pub use free::FreeFlyCamera;
pub use orbit::OrbitCamera;

/// Full camera pose handed to the presentation layer each frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraPose {
    pub position: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    /// Vertical field of view in degrees.
    pub fovy: f32,
}

impl Default for CameraPose {
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, 50.0, 100.0),
            target: Vec3::ZERO,
            up: Vec3::Y,
            fovy: 45.0,
        }
    }
}

/// Which control scheme drives the camera.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CameraMode {
    OrbitLookAt,
    FreeFly,
}

/// Pointer-capture side effect requested by a camera update.
/// The frame-loop runner applies it to the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerRequest {
    None,
    Capture,
    Release,
}

/// A camera rig in one of the two modes.
pub enum CameraRig {
    Orbit(OrbitCamera),
    FreeFly(FreeFlyCamera),
}

impl CameraRig {
    pub fn new(mode: CameraMode, pose: CameraPose, center: Vec3) -> Self {
        match mode {
            CameraMode::OrbitLookAt => Self::Orbit(OrbitCamera::new(pose, center)),
            CameraMode::FreeFly => Self::FreeFly(FreeFlyCamera::new(pose)),
        }
    }

    /// Run one control step against this frame's input.
    pub fn update(&mut self, input: &InputState) -> PointerRequest {
        match self {
            Self::Orbit(rig) => {
                rig.update(input);
                PointerRequest::None
            }
            Self::FreeFly(rig) => rig.update(input),
        }
    }

    pub fn pose(&self) -> &CameraPose {
        match self {
            Self::Orbit(rig) => &rig.pose,
            Self::FreeFly(rig) => &rig.pose,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rig_selects_mode() {
        let pose = CameraPose::default();
        assert!(matches!(
            CameraRig::new(CameraMode::OrbitLookAt, pose, Vec3::ZERO),
            CameraRig::Orbit(_)
        ));
        assert!(matches!(
            CameraRig::new(CameraMode::FreeFly, pose, Vec3::ZERO),
            CameraRig::FreeFly(_)
        ));
    }

    #[test]
    fn idle_input_moves_nothing() {
        let input = InputState::new();
        for mode in [CameraMode::OrbitLookAt, CameraMode::FreeFly] {
            let mut rig = CameraRig::new(mode, CameraPose::default(), Vec3::ZERO);
            let before = *rig.pose();
            for _ in 0..100 {
                assert_eq!(rig.update(&input), PointerRequest::None);
            }
            assert_eq!(*rig.pose(), before);
        }
    }
}
