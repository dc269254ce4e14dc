use super::{CameraPose, PointerRequest};
use crate::input::queue::Key;
use crate::input::state::InputState;

/// Free-fly camera: active only while the free-look key is held.
///
/// Axis keys move the position directly (no basis transform); captured
/// pointer motion steers the target. No inertia: releasing the key stops
/// everything immediately.
#[derive(Debug, Clone)]
pub struct FreeFlyCamera {
    pub pose: CameraPose,
    active: bool,
}

impl FreeFlyCamera {
    const MOVE_SPEED: f32 = 0.5;
    const ROT_SENSITIVITY: f32 = 0.005;

    pub fn new(pose: CameraPose) -> Self {
        Self {
            pose,
            active: false,
        }
    }

    /// Whether the pointer is currently captured for look-around.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Run one control step. Returns the pointer-capture transition for
    /// the runner to apply, if this frame crossed an activation edge.
    pub fn update(&mut self, input: &InputState) -> PointerRequest {
        if !input.is_down(Key::FreeLook) {
            if self.active {
                self.active = false;
                return PointerRequest::Release;
            }
            return PointerRequest::None;
        }

        let request = if self.active {
            PointerRequest::None
        } else {
            self.active = true;
            PointerRequest::Capture
        };

        if input.is_down(Key::Up) {
            self.pose.position.y += Self::MOVE_SPEED;
        }
        if input.is_down(Key::Down) {
            self.pose.position.y -= Self::MOVE_SPEED;
        }
        if input.is_down(Key::Right) {
            self.pose.position.x += Self::MOVE_SPEED;
        }
        if input.is_down(Key::Left) {
            self.pose.position.x -= Self::MOVE_SPEED;
        }

        let delta = input.mouse_delta();
        self.pose.target.x += delta.x * Self::ROT_SENSITIVITY;
        self.pose.target.y -= delta.y * Self::ROT_SENSITIVITY;

        request
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::queue::InputEvent;

    #[test]
    fn capture_and_release_on_edges() {
        let mut camera = FreeFlyCamera::new(CameraPose::default());
        let mut input = InputState::new();

        input.apply(InputEvent::KeyDown { key: Key::FreeLook });
        assert_eq!(camera.update(&input), PointerRequest::Capture);
        assert!(camera.is_active());
        // Holding: no repeated capture requests
        assert_eq!(camera.update(&input), PointerRequest::None);

        input.apply(InputEvent::KeyUp { key: Key::FreeLook });
        assert_eq!(camera.update(&input), PointerRequest::Release);
        assert!(!camera.is_active());
        assert_eq!(camera.update(&input), PointerRequest::None);
    }

    #[test]
    fn axis_keys_move_position_directly() {
        let mut camera = FreeFlyCamera::new(CameraPose::default());
        let mut input = InputState::new();
        let start = camera.pose.position;

        input.apply(InputEvent::KeyDown { key: Key::FreeLook });
        input.apply(InputEvent::KeyDown { key: Key::Up });
        input.apply(InputEvent::KeyDown { key: Key::Right });
        camera.update(&input);

        assert_eq!(camera.pose.position.y, start.y + 0.5);
        assert_eq!(camera.pose.position.x, start.x + 0.5);
        assert_eq!(camera.pose.position.z, start.z);
    }

    #[test]
    fn pointer_delta_steers_target_with_inverted_y() {
        let mut camera = FreeFlyCamera::new(CameraPose::default());
        let mut input = InputState::new();
        let start = camera.pose.target;

        input.apply(InputEvent::KeyDown { key: Key::FreeLook });
        input.apply(InputEvent::PointerDelta { dx: 100.0, dy: 40.0 });
        camera.update(&input);

        assert!((camera.pose.target.x - (start.x + 0.5)).abs() < 1e-6);
        assert!((camera.pose.target.y - (start.y - 0.2)).abs() < 1e-6);
    }

    #[test]
    fn keys_do_nothing_while_inactive() {
        let mut camera = FreeFlyCamera::new(CameraPose::default());
        let mut input = InputState::new();
        let start = camera.pose;

        input.apply(InputEvent::KeyDown { key: Key::Up });
        input.apply(InputEvent::PointerDelta { dx: 50.0, dy: 50.0 });
        camera.update(&input);

        assert_eq!(camera.pose, start);
    }
}
