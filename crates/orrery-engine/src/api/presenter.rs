//! Contract for the presentation layer.
//!
//! The engine never talks to a window system or GPU directly: a backend
//! implements this trait and the runner replays each `SceneFrame` through
//! it. Tests drive the engine with headless recording implementations.

use glam::Vec3;

use crate::api::types::{ModelHandle, Rgba, TextureHandle};
use crate::camera::CameraPose;
use crate::input::queue::InputQueue;

pub trait Presenter {
    // -- Window --

    fn open_window(&mut self, width: i32, height: i32, title: &str);
    /// Cap the frame rate. The simulation tick rate follows it.
    fn set_frame_rate_cap(&mut self, hz: u32);
    /// True once the host has requested shutdown (close button, etc.).
    fn should_close(&self) -> bool;
    fn close(&mut self);
    fn toggle_fullscreen(&mut self);
    fn set_window_size(&mut self, width: i32, height: i32);
    /// Resolution of the monitor the window currently occupies.
    fn monitor_size(&self) -> (i32, i32);

    // -- Input --

    /// Drain pending host input into `queue`. Called once per frame,
    /// before the app update.
    fn poll_input(&mut self, queue: &mut InputQueue);
    /// Hide and lock the pointer (true) or restore it (false).
    fn set_pointer_captured(&mut self, captured: bool);

    // -- Assets --

    /// Returns `TextureHandle::INVALID` when the file cannot be loaded.
    fn load_texture(&mut self, path: &str) -> TextureHandle;
    fn unload_texture(&mut self, texture: TextureHandle);
    fn load_sphere_model(&mut self, radius: f32, rings: u32, slices: u32) -> ModelHandle;
    /// Bind a diffuse texture to a model. The model reads the texture but
    /// does not own it.
    fn set_model_texture(&mut self, model: ModelHandle, texture: TextureHandle);
    fn unload_model(&mut self, model: ModelHandle);

    // -- Drawing --

    fn begin_frame(&mut self);
    fn clear_background(&mut self, color: Rgba);
    /// Draw a texture stretched over the whole window, behind the 3D scene.
    fn draw_background(&mut self, texture: TextureHandle);
    fn begin_3d(&mut self, camera: &CameraPose);
    fn draw_sphere(&mut self, center: Vec3, radius: f32, color: Rgba);
    /// Draw a model with a rotation of `angle_deg` degrees about `axis`.
    fn draw_model(
        &mut self,
        model: ModelHandle,
        position: Vec3,
        axis: Vec3,
        angle_deg: f32,
        scale: f32,
        tint: Rgba,
    );
    fn draw_line(&mut self, start: Vec3, end: Vec3, color: Rgba);
    fn end_3d(&mut self);
    fn draw_text(&mut self, text: &str, x: i32, y: i32, size: i32, color: Rgba);
    fn end_frame(&mut self);
}
