//! # Solid Mask Module
//!
//! A bit-per-cell snapshot of which blocks in a chunk are solid, wrapped in a
//! one-cell layer of padding on every side.
//!
//! ## Padding
//!
//! The mask has `D + 2` cells per axis. Local coordinate `(x, y, z)` is stored
//! at wrapped position `(x + 1, y + 1, z + 1)`, and the padding cells are always
//! `false`. Looking up any of the six neighbours of a chunk cell is therefore a
//! single bit read with no bounds branch, and a neighbour outside the chunk
//! reads as empty. That is exactly the rule that makes boundary faces exposed.

use bitvec::prelude::BitVec;
use cgmath::Point3;

use crate::voxels::block::{BlockSide, BlockValue, FaceFlags};

use super::VoxelGrid;

/// Padded solidity bit mask of one chunk.
pub struct SolidMask<const D: usize> {
    bits: BitVec,
}

impl<const D: usize> SolidMask<D> {
    /// Cells per axis including padding.
    pub const DIMENSION_WRAPPED: usize = D + 2;
    /// Cells per wrapped z plane.
    pub const PLANE_SIZE_WRAPPED: usize = Self::DIMENSION_WRAPPED * Self::DIMENSION_WRAPPED;
    /// Total cells including padding.
    pub const SIZE_WRAPPED: usize = Self::PLANE_SIZE_WRAPPED * Self::DIMENSION_WRAPPED;

    /// Builds the mask from the current contents of `grid`.
    pub fn from_grid<T: BlockValue>(grid: &VoxelGrid<T, D>) -> Self {
        let mut bits = BitVec::repeat(false, Self::SIZE_WRAPPED);
        for (local, value) in grid.iter() {
            if value.is_solid() {
                bits.set(Self::wrapped_index(local.x + 1, local.y + 1, local.z + 1), true);
            }
        }
        SolidMask { bits }
    }

    /// Whether the cell at local `(x, y, z)` is solid.
    ///
    /// Accepts `-1` and `D` on every axis; those padding cells are never solid.
    #[inline]
    pub fn is_solid(&self, x: i32, y: i32, z: i32) -> bool {
        self.bits[Self::wrapped_index(x + 1, y + 1, z + 1)]
    }

    /// The faces of the block at local `local` whose neighbour is not solid.
    ///
    /// `local` must be inside the chunk.
    pub fn exposed_faces(&self, local: Point3<i32>) -> FaceFlags {
        let mut faces = FaceFlags::empty();
        for side in BlockSide::all() {
            let n = local + side.normal();
            if !self.is_solid(n.x, n.y, n.z) {
                faces |= side.flag();
            }
        }
        faces
    }

    #[inline]
    fn wrapped_index(i: i32, j: i32, k: i32) -> usize {
        i as usize + Self::DIMENSION_WRAPPED * j as usize + Self::PLANE_SIZE_WRAPPED * k as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::voxels::block::BlockType;

    #[test]
    fn padding_is_never_solid() {
        let grid = VoxelGrid::<BlockType, 3>::solid(Point3::new(0, 0, 0), BlockType::EARTH);
        let mask = SolidMask::from_grid(&grid);
        assert!(mask.is_solid(0, 0, 0));
        assert!(mask.is_solid(2, 2, 2));
        assert!(!mask.is_solid(-1, 0, 0));
        assert!(!mask.is_solid(0, 3, 0));
        assert!(!mask.is_solid(1, 1, -1));
    }

    #[test]
    fn corner_of_solid_chunk_exposes_three_faces() {
        let grid = VoxelGrid::<BlockType, 3>::solid(Point3::new(0, 0, 0), BlockType::EARTH);
        let mask = SolidMask::from_grid(&grid);
        assert_eq!(
            mask.exposed_faces(Point3::new(0, 0, 0)),
            FaceFlags::LEFT | FaceFlags::BOTTOM | FaceFlags::BACK
        );
        assert!(mask.exposed_faces(Point3::new(1, 1, 1)).is_empty());
    }
}
