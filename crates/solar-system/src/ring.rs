use glam::Vec3;
use std::f32::consts::TAU;

/// Segments per orbit ring, constant regardless of radius.
pub const RING_SEGMENTS: usize = 100;

/// Discretize the circle of `radius` around `center` in the XZ plane into
/// `RING_SEGMENTS` line segments. Consecutive segments share an endpoint
/// and the polyline closes on itself.
pub fn orbit_ring_segments(center: Vec3, radius: f32) -> Vec<(Vec3, Vec3)> {
    let point = |i: usize| {
        let angle = TAU * (i % RING_SEGMENTS) as f32 / RING_SEGMENTS as f32;
        center + Vec3::new(angle.cos() * radius, 0.0, angle.sin() * radius)
    };
    (0..RING_SEGMENTS).map(|i| (point(i), point(i + 1))).collect()
}
