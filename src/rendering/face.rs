use cgmath::Point3;

use crate::voxels::block::BlockSide;

use super::vertex::Vertex;

/// Number of vertices emitted per face (two triangles).
pub const VERTICES_PER_FACE: usize = 6;

/// Represents a single quad face of a block.
///
/// A face is defined by four corner points (lower-left, lower-right,
/// upper-right, upper-left). Walking `ll → lr → ur → ul` is counter-clockwise
/// when viewed from outside the block, so the triangles built from it face
/// along the side's normal.
///
/// Corners are `f32`: the far corner of a block at `i32::MAX` lies one unit
/// past the largest integer position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Face {
    /// Lower-left corner
    pub ll: Point3<f32>,
    /// Lower-right corner
    pub lr: Point3<f32>,
    /// Upper-left corner
    pub ul: Point3<f32>,
    /// Upper-right corner
    pub ur: Point3<f32>,
    /// Which side of the block this face represents
    pub block_side: BlockSide,
}

impl Face {
    /// Creates the face on `block_side` of the unit block whose minimal corner
    /// is `position`.
    pub fn new(position: Point3<i32>, block_side: BlockSide) -> Self {
        let (i, j, k) = (position.x as f32, position.y as f32, position.z as f32);
        let (ll, lr, ul, ur) = match block_side {
            BlockSide::RIGHT => (
                Point3::new(i + 1.0, j, k + 1.0),
                Point3::new(i + 1.0, j, k),
                Point3::new(i + 1.0, j + 1.0, k + 1.0),
                Point3::new(i + 1.0, j + 1.0, k),
            ),
            BlockSide::LEFT => (
                Point3::new(i, j, k),
                Point3::new(i, j, k + 1.0),
                Point3::new(i, j + 1.0, k),
                Point3::new(i, j + 1.0, k + 1.0),
            ),
            BlockSide::TOP => (
                Point3::new(i, j + 1.0, k),
                Point3::new(i, j + 1.0, k + 1.0),
                Point3::new(i + 1.0, j + 1.0, k),
                Point3::new(i + 1.0, j + 1.0, k + 1.0),
            ),
            BlockSide::BOTTOM => (
                Point3::new(i, j, k),
                Point3::new(i + 1.0, j, k),
                Point3::new(i, j, k + 1.0),
                Point3::new(i + 1.0, j, k + 1.0),
            ),
            BlockSide::FRONT => (
                Point3::new(i, j, k + 1.0),
                Point3::new(i + 1.0, j, k + 1.0),
                Point3::new(i, j + 1.0, k + 1.0),
                Point3::new(i + 1.0, j + 1.0, k + 1.0),
            ),
            BlockSide::BACK => (
                Point3::new(i + 1.0, j, k),
                Point3::new(i, j, k),
                Point3::new(i + 1.0, j + 1.0, k),
                Point3::new(i, j + 1.0, k),
            ),
        };

        Face {
            ll,
            lr,
            ul,
            ur,
            block_side,
        }
    }

    /// The two triangles of the quad as a vertex list.
    pub fn vertices(&self) -> [Vertex; VERTICES_PER_FACE] {
        let normal = self.block_side.normal();
        [self.ll, self.lr, self.ur, self.ll, self.ur, self.ul].map(|corner| Vertex::new(corner, normal))
    }
}
