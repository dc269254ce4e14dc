//! Generic frame-loop runner wiring an `App` to a `Presenter`.

use log::info;

use crate::api::app::App;
use crate::api::presenter::Presenter;
use crate::camera::PointerRequest;
use crate::core::window::{WindowCommand, WindowState};
use crate::input::queue::{InputQueue, Key};
use crate::input::state::InputState;
use crate::render::frame::{present, SceneFrame};

/// Drives the synchronous frame loop. Per iteration, strictly in order:
/// drain input, handle a fullscreen-toggle request, run the app update
/// (camera, then simulation), compose the scene frame, submit it. Exactly
/// one app update runs per rendered frame, so simulation rate equals
/// display rate, capped only by the presenter.
pub struct AppRunner<A: App, P: Presenter> {
    app: A,
    presenter: P,
    queue: InputQueue,
    input: InputState,
    window: WindowState,
    frame: SceneFrame,
    initialized: bool,
}

impl<A: App, P: Presenter> AppRunner<A, P> {
    pub fn new(app: A, presenter: P) -> Self {
        let config = app.config();
        let window = WindowState::new(config.window_width, config.window_height);
        Self {
            app,
            presenter,
            queue: InputQueue::new(),
            input: InputState::new(),
            window,
            frame: SceneFrame::new(),
            initialized: false,
        }
    }

    /// Open the window and let the app acquire its assets. Called once.
    pub fn init(&mut self) {
        let config = self.app.config();
        self.presenter
            .open_window(config.window_width, config.window_height, &config.title);
        self.presenter.set_frame_rate_cap(config.frame_rate_cap);
        self.app.init(&mut self.presenter);
        self.initialized = true;
        info!(
            "{}: {}x{} window at {} Hz",
            config.title, config.window_width, config.window_height, config.frame_rate_cap
        );
    }

    /// Run one frame. App state is fully updated before the draw pass
    /// reads it.
    pub fn step(&mut self) {
        if !self.initialized {
            return;
        }

        self.input.begin_frame();
        self.presenter.poll_input(&mut self.queue);
        self.input.drain_queue(&mut self.queue);

        if self.input.was_pressed(Key::ToggleFullscreen) {
            let monitor = self.presenter.monitor_size();
            for command in self.window.toggle(monitor) {
                match command {
                    WindowCommand::SetSize(w, h) => self.presenter.set_window_size(w, h),
                    WindowCommand::ToggleFullscreen => self.presenter.toggle_fullscreen(),
                }
            }
        }

        match self.app.update(&self.input) {
            PointerRequest::Capture => self.presenter.set_pointer_captured(true),
            PointerRequest::Release => self.presenter.set_pointer_captured(false),
            PointerRequest::None => {}
        }

        self.frame.clear();
        self.app.compose(&mut self.frame);
        present(&self.frame, &mut self.presenter);
    }

    /// Loop until the presenter signals close, then shut down.
    pub fn run(&mut self) {
        if !self.initialized {
            self.init();
        }
        while !self.presenter.should_close() {
            self.step();
        }
        self.shutdown();
    }

    /// Release app resources (reverse order of acquisition), then close
    /// the window.
    pub fn shutdown(&mut self) {
        self.app.shutdown(&mut self.presenter);
        self.presenter.close();
        self.initialized = false;
        info!("presentation layer closed");
    }

    pub fn app(&self) -> &A {
        &self.app
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn window(&self) -> &WindowState {
        &self.window
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::app::AppConfig;
    use crate::api::types::{ModelHandle, Rgba, TextureHandle};
    use crate::camera::CameraPose;
    use crate::input::queue::InputEvent;
    use glam::Vec3;

    /// Presenter double that records the call sequence and closes after a
    /// fixed number of polled frames.
    struct ScriptedPresenter {
        log: Vec<String>,
        frames_left: u32,
        pending: Vec<InputEvent>,
    }

    impl ScriptedPresenter {
        fn new(frames: u32) -> Self {
            Self {
                log: Vec::new(),
                frames_left: frames,
                pending: Vec::new(),
            }
        }
    }

    impl Presenter for ScriptedPresenter {
        fn open_window(&mut self, w: i32, h: i32, title: &str) {
            self.log.push(format!("open {w}x{h} {title}"));
        }
        fn set_frame_rate_cap(&mut self, hz: u32) {
            self.log.push(format!("cap {hz}"));
        }
        fn should_close(&self) -> bool {
            self.frames_left == 0
        }
        fn close(&mut self) {
            self.log.push("close".into());
        }
        fn toggle_fullscreen(&mut self) {
            self.log.push("fullscreen".into());
        }
        fn set_window_size(&mut self, w: i32, h: i32) {
            self.log.push(format!("resize {w}x{h}"));
        }
        fn monitor_size(&self) -> (i32, i32) {
            (1920, 1080)
        }
        fn poll_input(&mut self, queue: &mut InputQueue) {
            self.frames_left = self.frames_left.saturating_sub(1);
            for event in self.pending.drain(..) {
                queue.push(event);
            }
        }
        fn set_pointer_captured(&mut self, captured: bool) {
            self.log.push(format!("capture {captured}"));
        }
        fn load_texture(&mut self, _path: &str) -> TextureHandle {
            TextureHandle::INVALID
        }
        fn unload_texture(&mut self, _texture: TextureHandle) {}
        fn load_sphere_model(&mut self, _radius: f32, _rings: u32, _slices: u32) -> ModelHandle {
            ModelHandle::INVALID
        }
        fn set_model_texture(&mut self, _model: ModelHandle, _texture: TextureHandle) {}
        fn unload_model(&mut self, _model: ModelHandle) {}
        fn begin_frame(&mut self) {
            self.log.push("begin".into());
        }
        fn clear_background(&mut self, _color: Rgba) {}
        fn draw_background(&mut self, _texture: TextureHandle) {}
        fn begin_3d(&mut self, _camera: &CameraPose) {
            self.log.push("3d".into());
        }
        fn draw_sphere(&mut self, _center: Vec3, _radius: f32, _color: Rgba) {
            self.log.push("sphere".into());
        }
        fn draw_model(
            &mut self,
            _model: ModelHandle,
            _position: Vec3,
            _axis: Vec3,
            _angle_deg: f32,
            _scale: f32,
            _tint: Rgba,
        ) {
        }
        fn draw_line(&mut self, _start: Vec3, _end: Vec3, _color: Rgba) {}
        fn end_3d(&mut self) {
            self.log.push("end3d".into());
        }
        fn draw_text(&mut self, _text: &str, _x: i32, _y: i32, _size: i32, _color: Rgba) {}
        fn end_frame(&mut self) {
            self.log.push("end".into());
        }
    }

    /// App double counting updates and drawing one sphere per frame.
    struct CountingApp {
        updates: u32,
    }

    impl App for CountingApp {
        fn config(&self) -> AppConfig {
            AppConfig {
                window_width: 1280,
                window_height: 960,
                title: String::from("test"),
                frame_rate_cap: 60,
            }
        }
        fn update(&mut self, _input: &InputState) -> PointerRequest {
            self.updates += 1;
            PointerRequest::None
        }
        fn compose(&self, frame: &mut SceneFrame) {
            frame.sphere(Vec3::ZERO, 1.0, Rgba::WHITE);
        }
    }

    #[test]
    fn one_update_per_rendered_frame() {
        let app = CountingApp { updates: 0 };
        let mut runner = AppRunner::new(app, ScriptedPresenter::new(5));
        runner.run();
        assert_eq!(runner.app().updates, 5);
        let begins = runner
            .presenter()
            .log
            .iter()
            .filter(|s| *s == "begin")
            .count();
        assert_eq!(begins, 5);
        assert_eq!(runner.presenter().log.last().unwrap(), "close");
    }

    #[test]
    fn fullscreen_toggle_round_trip() {
        let app = CountingApp { updates: 0 };
        let mut presenter = ScriptedPresenter::new(2);
        presenter.pending.push(InputEvent::KeyDown {
            key: Key::ToggleFullscreen,
        });
        let mut runner = AppRunner::new(app, presenter);
        runner.init();

        runner.step();
        assert!(runner.window().is_fullscreen());
        assert_eq!(runner.window().size(), (1920, 1080));

        // Release and press again
        runner.presenter.pending.push(InputEvent::KeyUp {
            key: Key::ToggleFullscreen,
        });
        runner.presenter.pending.push(InputEvent::KeyDown {
            key: Key::ToggleFullscreen,
        });
        runner.step();
        assert!(!runner.window().is_fullscreen());
        assert_eq!(runner.window().size(), (1280, 960));
    }

    #[test]
    fn draw_scope_ordering() {
        let app = CountingApp { updates: 0 };
        let mut runner = AppRunner::new(app, ScriptedPresenter::new(1));
        runner.init();
        runner.step();
        let log = &runner.presenter().log;
        let begin = log.iter().position(|s| s == "begin").unwrap();
        let scene = log.iter().position(|s| s == "3d").unwrap();
        let sphere = log.iter().position(|s| s == "sphere").unwrap();
        let end3d = log.iter().position(|s| s == "end3d").unwrap();
        let end = log.iter().position(|s| s == "end").unwrap();
        assert!(begin < scene && scene < sphere && sphere < end3d && end3d < end);
    }
}
