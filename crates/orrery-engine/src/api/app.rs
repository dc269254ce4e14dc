use crate::api::presenter::Presenter;
use crate::camera::PointerRequest;
use crate::input::state::InputState;
use crate::render::frame::SceneFrame;

/// Window and frame-loop configuration, provided by the app.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Windowed-mode width in pixels.
    pub window_width: i32,
    /// Windowed-mode height in pixels.
    pub window_height: i32,
    /// Window title.
    pub title: String,
    /// Presenter-side frame rate cap in Hz. The simulation is coupled to
    /// it: exactly one app update runs per rendered frame.
    pub frame_rate_cap: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            window_width: 800,
            window_height: 600,
            title: String::from("orrery"),
            frame_rate_cap: 60,
        }
    }
}

/// The core contract every visualization app must fulfill.
pub trait App {
    /// Return window configuration. Called once before init.
    fn config(&self) -> AppConfig {
        AppConfig::default()
    }

    /// Acquire presentation-layer resources. Called once, after the window
    /// opens and before the first frame.
    fn init(&mut self, _presenter: &mut dyn Presenter) {}

    /// Advance one frame of app state (camera first, then simulation).
    /// Returns any pointer-capture side effect for the runner to apply.
    fn update(&mut self, input: &InputState) -> PointerRequest;

    /// Describe the frame to draw. `frame` arrives cleared; push draw calls
    /// in the order they should be submitted.
    fn compose(&self, frame: &mut SceneFrame);

    /// Release presentation-layer resources, in reverse order of
    /// acquisition. Called once when the loop exits.
    fn shutdown(&mut self, _presenter: &mut dyn Presenter) {}
}
