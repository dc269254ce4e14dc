/// Navigation keys the engine understands.
/// Semantic, not physical: the backend maps its own keycodes onto these.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Left,
    Right,
    Up,
    Down,
    DollyIn,
    DollyOut,
    FreeLook,
    ToggleFullscreen,
}

impl Key {
    pub(crate) fn bit(self) -> u16 {
        1 << self as u16
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    Primary,
    Secondary,
}

impl MouseButton {
    pub(crate) fn bit(self) -> u8 {
        1 << self as u8
    }
}

/// Input event types the engine understands.
/// Generic, with no app-specific semantics.
#[derive(Debug, Clone, Copy)]
pub enum InputEvent {
    /// A key went down.
    KeyDown { key: Key },
    /// A key was released.
    KeyUp { key: Key },
    /// The cursor moved to absolute window coordinates (x, y).
    PointerMove { x: f32, y: f32 },
    /// Relative cursor motion, reported while the pointer is captured.
    PointerDelta { dx: f32, dy: f32 },
    /// A mouse button went down.
    ButtonDown { button: MouseButton },
    /// A mouse button was released.
    ButtonUp { button: MouseButton },
}

/// A queue of input events.
/// The presenter writes events into the queue; the runner drains them each frame.
pub struct InputQueue {
    events: Vec<InputEvent>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self {
            events: Vec::with_capacity(32),
        }
    }

    /// Push a new input event (called by the presenter during polling).
    pub fn push(&mut self, event: InputEvent) {
        self.events.push(event);
    }

    /// Drain all pending events. Returns a Vec and clears the queue.
    pub fn drain(&mut self) -> Vec<InputEvent> {
        std::mem::take(&mut self.events)
    }

    /// Iterate over pending events without consuming them.
    pub fn iter(&self) -> impl Iterator<Item = &InputEvent> {
        self.events.iter()
    }

    /// Check if there are pending events.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Number of pending events.
    pub fn len(&self) -> usize {
        self.events.len()
    }
}

impl Default for InputQueue {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_and_drain() {
        let mut q = InputQueue::new();
        q.push(InputEvent::PointerMove { x: 10.0, y: 20.0 });
        q.push(InputEvent::KeyDown { key: Key::Left });
        assert_eq!(q.len(), 2);
        let events = q.drain();
        assert_eq!(events.len(), 2);
        assert!(q.is_empty());
    }

    #[test]
    fn key_bits_are_distinct() {
        let keys = [
            Key::Left,
            Key::Right,
            Key::Up,
            Key::Down,
            Key::DollyIn,
            Key::DollyOut,
            Key::FreeLook,
            Key::ToggleFullscreen,
        ];
        let mut mask = 0u16;
        for key in keys {
            assert_eq!(mask & key.bit(), 0);
            mask |= key.bit();
        }
    }
}
