/// Fullscreen state machine.
///
/// Pure bookkeeping: `toggle` records the new state and returns the
/// command sequence the presentation layer must apply, in order. Entering
/// fullscreen resizes to the monitor first, then toggles; leaving toggles
/// first, then restores the exact windowed size.
#[derive(Debug, Clone)]
pub struct WindowState {
    windowed: (i32, i32),
    size: (i32, i32),
    fullscreen: bool,
}

/// A window operation for the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowCommand {
    SetSize(i32, i32),
    ToggleFullscreen,
}

impl WindowState {
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            windowed: (width, height),
            size: (width, height),
            fullscreen: false,
        }
    }

    /// Flip between windowed and fullscreen, given the current monitor
    /// resolution. Returns the commands to apply, in order.
    pub fn toggle(&mut self, monitor: (i32, i32)) -> [WindowCommand; 2] {
        self.fullscreen = !self.fullscreen;
        if self.fullscreen {
            self.size = monitor;
            [
                WindowCommand::SetSize(monitor.0, monitor.1),
                WindowCommand::ToggleFullscreen,
            ]
        } else {
            self.size = self.windowed;
            [
                WindowCommand::ToggleFullscreen,
                WindowCommand::SetSize(self.windowed.0, self.windowed.1),
            ]
        }
    }

    pub fn is_fullscreen(&self) -> bool {
        self.fullscreen
    }

    /// Current window size.
    pub fn size(&self) -> (i32, i32) {
        self.size
    }

    /// The size restored when leaving fullscreen.
    pub fn windowed_size(&self) -> (i32, i32) {
        self.windowed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_enters_fullscreen_at_monitor_resolution() {
        let mut window = WindowState::new(1280, 960);
        let commands = window.toggle((2560, 1440));
        assert!(window.is_fullscreen());
        assert_eq!(window.size(), (2560, 1440));
        // Resize happens before the mode switch
        assert_eq!(commands[0], WindowCommand::SetSize(2560, 1440));
        assert_eq!(commands[1], WindowCommand::ToggleFullscreen);
    }

    #[test]
    fn toggle_twice_restores_exact_windowed_size() {
        let mut window = WindowState::new(1280, 960);
        window.toggle((1920, 1080));
        let commands = window.toggle((1920, 1080));
        assert!(!window.is_fullscreen());
        assert_eq!(window.size(), (1280, 960));
        // Mode switch happens before the restore resize
        assert_eq!(commands[0], WindowCommand::ToggleFullscreen);
        assert_eq!(commands[1], WindowCommand::SetSize(1280, 960));
    }
}
