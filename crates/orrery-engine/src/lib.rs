pub mod api;
pub mod camera;
pub mod core;
pub mod input;
pub mod render;
pub mod runner;

// Re-export key types at crate root for convenience
pub use crate::api::app::{App, AppConfig};
pub use crate::api::presenter::Presenter;
pub use crate::api::types::{ModelHandle, Rgba, TextureHandle};
pub use crate::camera::{CameraMode, CameraPose, CameraRig, PointerRequest};
pub use crate::camera::free::FreeFlyCamera;
pub use crate::camera::orbit::OrbitCamera;
pub use crate::core::window::{WindowCommand, WindowState};
pub use crate::input::queue::{InputEvent, InputQueue, Key, MouseButton};
pub use crate::input::state::InputState;
pub use crate::render::frame::{present, DrawCall, LineVertex, SceneFrame, TextItem};
pub use crate::runner::AppRunner;
