//! Vertex data structures for exported chunk geometry.

use cgmath::{Point3, Vector3};

/// Number of `f32` values in one [`Vertex`].
pub const FLOATS_PER_VERTEX: usize = 6;

/// A vertex of exported chunk geometry.
///
/// # Memory Layout
/// - Position: [f32; 3] (12 bytes)
/// - Normal: [f32; 3] (12 bytes)
///
/// Total size: 24 bytes, all `f32`, so a vertex slice can be reinterpreted as
/// a flat float buffer.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    /// Corner position in the frame of the records it was built from
    pub position: [f32; 3],
    /// Outward unit normal of the face
    pub normal: [f32; 3],
}

impl Vertex {
    /// Creates a vertex from a face corner and the face's lattice normal.
    pub fn new(pos: Point3<f32>, normal: Vector3<i32>) -> Self {
        Vertex {
            position: [pos.x, pos.y, pos.z],
            normal: [normal.x as f32, normal.y as f32, normal.z as f32],
        }
    }
}
