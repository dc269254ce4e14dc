//! Per-frame scene description.
//!
//! The app composes a `SceneFrame` each iteration; `present` replays it
//! through the presenter in the contracted order: clear, background,
//! 3D scope (draw calls in insertion order), HUD text. The frame is
//! cleared and rebuilt every iteration; nothing persists across frames.

use bytemuck::{Pod, Zeroable};
use glam::Vec3;

use crate::api::presenter::Presenter;
use crate::api::types::{ModelHandle, Rgba, TextureHandle};
use crate::camera::CameraPose;

/// Per-vertex data for 3D line rendering. 7 floats = 28 bytes per vertex;
/// two consecutive vertices form one segment.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, Pod, Zeroable)]
pub struct LineVertex {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl LineVertex {
    pub const FLOATS: usize = 7;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;

    fn new(position: Vec3, color: Rgba) -> Self {
        let [r, g, b, a] = color.to_f32();
        Self {
            x: position.x,
            y: position.y,
            z: position.z,
            r,
            g,
            b,
            a,
        }
    }

    pub fn position(&self) -> Vec3 {
        Vec3::new(self.x, self.y, self.z)
    }

    pub fn color(&self) -> Rgba {
        Rgba::new(
            (self.r * 255.0).round() as u8,
            (self.g * 255.0).round() as u8,
            (self.b * 255.0).round() as u8,
            (self.a * 255.0).round() as u8,
        )
    }
}

/// One element of the frame's ordered draw list.
#[derive(Debug, Clone, Copy)]
pub enum DrawCall {
    Sphere {
        center: Vec3,
        radius: f32,
        color: Rgba,
    },
    Model {
        model: ModelHandle,
        position: Vec3,
        axis: Vec3,
        angle_deg: f32,
        scale: f32,
        tint: Rgba,
    },
    /// A run of `count` segments starting at segment `first` in the
    /// line-vertex buffer.
    Lines { first: u32, count: u32 },
}

/// A HUD text item in window coordinates.
#[derive(Debug, Clone)]
pub struct TextItem {
    pub text: String,
    pub x: i32,
    pub y: i32,
    pub size: i32,
    pub color: Rgba,
}

pub struct SceneFrame {
    pub camera: CameraPose,
    pub clear_color: Rgba,
    /// Drawn stretched behind the 3D scene when valid.
    pub background: TextureHandle,
    calls: Vec<DrawCall>,
    line_vertices: Vec<LineVertex>,
    texts: Vec<TextItem>,
}

impl SceneFrame {
    pub fn new() -> Self {
        Self {
            camera: CameraPose::default(),
            clear_color: Rgba::BLACK,
            background: TextureHandle::INVALID,
            calls: Vec::with_capacity(64),
            line_vertices: Vec::with_capacity(2048),
            texts: Vec::with_capacity(8),
        }
    }

    /// Drop all recorded content for the next iteration.
    pub fn clear(&mut self) {
        self.background = TextureHandle::INVALID;
        self.calls.clear();
        self.line_vertices.clear();
        self.texts.clear();
    }

    pub fn sphere(&mut self, center: Vec3, radius: f32, color: Rgba) {
        self.calls.push(DrawCall::Sphere {
            center,
            radius,
            color,
        });
    }

    pub fn model(
        &mut self,
        model: ModelHandle,
        position: Vec3,
        axis: Vec3,
        angle_deg: f32,
        scale: f32,
        tint: Rgba,
    ) {
        self.calls.push(DrawCall::Model {
            model,
            position,
            axis,
            angle_deg,
            scale,
            tint,
        });
    }

    /// Append one line segment. Consecutive segments merge into a single
    /// run over the shared vertex buffer.
    pub fn line(&mut self, start: Vec3, end: Vec3, color: Rgba) {
        let segment = (self.line_vertices.len() / 2) as u32;
        self.line_vertices.push(LineVertex::new(start, color));
        self.line_vertices.push(LineVertex::new(end, color));

        if let Some(DrawCall::Lines { first, count }) = self.calls.last_mut() {
            if *first + *count == segment {
                *count += 1;
                return;
            }
        }
        self.calls.push(DrawCall::Lines {
            first: segment,
            count: 1,
        });
    }

    pub fn text(&mut self, text: impl Into<String>, x: i32, y: i32, size: i32, color: Rgba) {
        self.texts.push(TextItem {
            text: text.into(),
            x,
            y,
            size,
            color,
        });
    }

    pub fn calls(&self) -> &[DrawCall] {
        &self.calls
    }

    pub fn line_vertices(&self) -> &[LineVertex] {
        &self.line_vertices
    }

    /// Raw bytes of the line-vertex buffer, ready for GPU upload.
    pub fn line_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.line_vertices)
    }

    pub fn texts(&self) -> &[TextItem] {
        &self.texts
    }
}

impl Default for SceneFrame {
    fn default() -> Self {
        Self::new()
    }
}

/// Replay a composed frame through the presenter, in the contracted order.
pub fn present(frame: &SceneFrame, presenter: &mut dyn Presenter) {
    presenter.begin_frame();
    presenter.clear_background(frame.clear_color);
    if frame.background.is_valid() {
        presenter.draw_background(frame.background);
    }
    presenter.begin_3d(&frame.camera);
    for call in frame.calls() {
        match *call {
            DrawCall::Sphere {
                center,
                radius,
                color,
            } => presenter.draw_sphere(center, radius, color),
            DrawCall::Model {
                model,
                position,
                axis,
                angle_deg,
                scale,
                tint,
            } => presenter.draw_model(model, position, axis, angle_deg, scale, tint),
            DrawCall::Lines { first, count } => {
                for segment in first..first + count {
                    let a = frame.line_vertices[segment as usize * 2];
                    let b = frame.line_vertices[segment as usize * 2 + 1];
                    presenter.draw_line(a.position(), b.position(), a.color());
                }
            }
        }
    }
    presenter.end_3d();
    for item in frame.texts() {
        presenter.draw_text(&item.text, item.x, item.y, item.size, item.color);
    }
    presenter.end_frame();
}
