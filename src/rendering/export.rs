//! Conversion of visible sets into flat vertex buffers.
//!
//! Positions are taken verbatim from the records, so a LOCAL scan yields
//! chunk-relative geometry and a WORLD scan yields world-space geometry.

use cgmath::Point3;

use crate::voxels::block::FaceFlags;
use crate::voxels::visibility::{VisibleBlockRecord, VisibleFaceRecord};

use super::face::{Face, VERTICES_PER_FACE};
use super::vertex::{Vertex, FLOATS_PER_VERTEX};

/// Floats emitted per face.
pub const FLOATS_PER_FACE: usize = VERTICES_PER_FACE * FLOATS_PER_VERTEX;

/// Emits a full cube (six faces) for every visible block.
pub fn blocks_to_vertex_buffer<T>(blocks: &[VisibleBlockRecord<T>]) -> Vec<f32> {
    let mut vertices = Vec::with_capacity(blocks.len() * 6 * VERTICES_PER_FACE);
    for record in blocks {
        push_faces(&mut vertices, record.position, FaceFlags::all());
    }
    into_floats(vertices)
}

/// Emits only the exposed faces of every record.
pub fn faces_to_vertex_buffer<T>(faces: &[VisibleFaceRecord<T>]) -> Vec<f32> {
    let mut vertices = Vec::with_capacity(face_count_of(faces) * VERTICES_PER_FACE);
    for record in faces {
        push_faces(&mut vertices, record.position, record.faces);
    }
    into_floats(vertices)
}

fn push_faces(vertices: &mut Vec<Vertex>, position: Point3<i32>, sides: FaceFlags) {
    for side in sides.sides() {
        vertices.extend_from_slice(&Face::new(position, side).vertices());
    }
}

fn into_floats(vertices: Vec<Vertex>) -> Vec<f32> {
    bytemuck::cast_slice::<Vertex, f32>(&vertices).to_vec()
}

/// Number of faces that [`blocks_to_vertex_buffer`] and
/// [`faces_to_vertex_buffer`] emit, for sizing GPU buffers up front.
pub fn face_count_of<T>(faces: &[VisibleFaceRecord<T>]) -> usize {
    faces.iter().map(|record| record.faces.count()).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::voxels::block::BlockType;

    #[test]
    fn cube_buffer_has_six_faces_per_block() {
        let blocks = [
            VisibleBlockRecord {
                position: Point3::new(0, 0, 0),
                block: BlockType::EARTH,
            },
            VisibleBlockRecord {
                position: Point3::new(2, 0, 0),
                block: BlockType::EARTH,
            },
        ];
        assert_eq!(blocks_to_vertex_buffer(&blocks).len(), 2 * 6 * FLOATS_PER_FACE);
    }

    #[test]
    fn face_buffer_emits_flagged_faces_only() {
        let faces = [VisibleFaceRecord {
            position: Point3::new(1, 1, 1),
            block: BlockType::EARTH,
            faces: FaceFlags::TOP,
        }];
        let buffer = faces_to_vertex_buffer(&faces);
        assert_eq!(buffer.len(), FLOATS_PER_FACE);
        assert_eq!(face_count_of(&faces), 1);
        // Every vertex of a top face sits on y = 2 with an upward normal.
        for vertex in buffer.chunks_exact(FLOATS_PER_VERTEX) {
            assert_eq!(vertex[1], 2.0);
            assert_eq!(&vertex[3..], &[0.0, 1.0, 0.0]);
        }
    }

    #[test]
    fn empty_input_gives_empty_buffer() {
        let faces: [VisibleFaceRecord<BlockType>; 0] = [];
        assert!(faces_to_vertex_buffer(&faces).is_empty());
    }
}
