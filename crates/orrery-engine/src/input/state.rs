use glam::Vec2;

use crate::input::queue::{InputEvent, InputQueue, Key, MouseButton};

/// Per-frame view of the input devices: held keys, edge-triggered presses,
/// mouse button state, cursor position, and accumulated cursor motion.
///
/// Events fold into the state; `begin_frame` resets the edge-triggered
/// parts so presses and deltas are scoped to a single frame.
#[derive(Debug, Clone, Default)]
pub struct InputState {
    held: u16,
    pressed: u16,
    buttons: u8,
    mouse_pos: Vec2,
    mouse_delta: Vec2,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset edge-triggered state. Call at the top of each frame, before
    /// applying that frame's events.
    pub fn begin_frame(&mut self) {
        self.pressed = 0;
        self.mouse_delta = Vec2::ZERO;
    }

    /// Fold one event into the state.
    pub fn apply(&mut self, event: InputEvent) {
        match event {
            InputEvent::KeyDown { key } => {
                if self.held & key.bit() == 0 {
                    self.pressed |= key.bit();
                }
                self.held |= key.bit();
            }
            InputEvent::KeyUp { key } => {
                self.held &= !key.bit();
            }
            InputEvent::PointerMove { x, y } => {
                let pos = Vec2::new(x, y);
                self.mouse_delta += pos - self.mouse_pos;
                self.mouse_pos = pos;
            }
            InputEvent::PointerDelta { dx, dy } => {
                self.mouse_delta += Vec2::new(dx, dy);
            }
            InputEvent::ButtonDown { button } => {
                self.buttons |= button.bit();
            }
            InputEvent::ButtonUp { button } => {
                self.buttons &= !button.bit();
            }
        }
    }

    /// Drain a queue into the state.
    pub fn drain_queue(&mut self, queue: &mut InputQueue) {
        for event in queue.drain() {
            self.apply(event);
        }
    }

    /// Whether the key is currently held.
    pub fn is_down(&self, key: Key) -> bool {
        self.held & key.bit() != 0
    }

    /// Whether the key went down this frame.
    pub fn was_pressed(&self, key: Key) -> bool {
        self.pressed & key.bit() != 0
    }

    pub fn is_button_down(&self, button: MouseButton) -> bool {
        self.buttons & button.bit() != 0
    }

    /// Last reported absolute cursor position.
    pub fn mouse_position(&self) -> Vec2 {
        self.mouse_pos
    }

    /// Cursor motion accumulated since `begin_frame`.
    pub fn mouse_delta(&self) -> Vec2 {
        self.mouse_delta
    }
}
