//! Geometry export for an external renderer.
//!
//! Nothing here touches voxel storage: every function consumes the visible
//! sequences produced by [`crate::voxels::visibility`] and returns flat `f32`
//! buffers ready for upload.
//!
//! # Vertex Layout
//! Each vertex is six floats: position `xyz` followed by normal `xyz`. Every
//! face is two counter-clockwise triangles, six vertices in total.

mod export;
mod face;
mod vertex;

pub use export::{blocks_to_vertex_buffer, face_count_of, faces_to_vertex_buffer, FLOATS_PER_FACE};
pub use face::{Face, VERTICES_PER_FACE};
pub use vertex::{Vertex, FLOATS_PER_VERTEX};
