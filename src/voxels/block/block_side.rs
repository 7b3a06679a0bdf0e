//! # Block Side Module
//!
//! This module defines the six faces of a voxel block and the [`FaceFlags`]
//! bit set used to record which of them are exposed.

use bitflags::bitflags;
use cgmath::Vector3;

/// Represents the six possible faces of a voxel block.
///
/// The discriminants give the bit position of the face inside [`FaceFlags`].
/// The order is: [RIGHT, LEFT, TOP, BOTTOM, FRONT, BACK]
#[derive(PartialEq, Eq, Hash, Copy, Clone, Debug)]
pub enum BlockSide {
    /// The right face (facing positive X)
    RIGHT = 0,

    /// The left face (facing negative X)
    LEFT = 1,

    /// The top face (facing positive Y)
    TOP = 2,

    /// The bottom face (facing negative Y)
    BOTTOM = 3,

    /// The front face (facing positive Z)
    FRONT = 4,

    /// The back face (facing negative Z)
    BACK = 5,
}

bitflags! {
    /// Set of exposed faces of a single block, one bit per [`BlockSide`].
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct FaceFlags: u8 {
        /// +X
        const RIGHT = 1 << 0;
        /// -X
        const LEFT = 1 << 1;
        /// +Y
        const TOP = 1 << 2;
        /// -Y
        const BOTTOM = 1 << 3;
        /// +Z
        const FRONT = 1 << 4;
        /// -Z
        const BACK = 1 << 5;
    }
}

impl BlockSide {
    /// Returns an array containing all six block faces in flag order.
    ///
    /// This is useful for iterating over all possible faces of a block.
    pub fn all() -> [BlockSide; 6] {
        [
            BlockSide::RIGHT,
            BlockSide::LEFT,
            BlockSide::TOP,
            BlockSide::BOTTOM,
            BlockSide::FRONT,
            BlockSide::BACK,
        ]
    }

    /// The unit offset from a block to the neighbour this face touches.
    pub fn normal(self) -> Vector3<i32> {
        match self {
            BlockSide::RIGHT => Vector3::new(1, 0, 0),
            BlockSide::LEFT => Vector3::new(-1, 0, 0),
            BlockSide::TOP => Vector3::new(0, 1, 0),
            BlockSide::BOTTOM => Vector3::new(0, -1, 0),
            BlockSide::FRONT => Vector3::new(0, 0, 1),
            BlockSide::BACK => Vector3::new(0, 0, -1),
        }
    }

    /// The face pointing the other way along the same axis.
    pub fn opposite(self) -> BlockSide {
        match self {
            BlockSide::RIGHT => BlockSide::LEFT,
            BlockSide::LEFT => BlockSide::RIGHT,
            BlockSide::TOP => BlockSide::BOTTOM,
            BlockSide::BOTTOM => BlockSide::TOP,
            BlockSide::FRONT => BlockSide::BACK,
            BlockSide::BACK => BlockSide::FRONT,
        }
    }

    /// The single-bit flag for this face.
    #[inline]
    pub fn flag(self) -> FaceFlags {
        FaceFlags::from_bits_truncate(1 << self as u8)
    }
}

impl FaceFlags {
    /// Iterates the sides contained in this set, in flag order.
    pub fn sides(self) -> impl Iterator<Item = BlockSide> {
        BlockSide::all()
            .into_iter()
            .filter(move |side| self.contains(side.flag()))
    }

    /// Number of exposed faces.
    #[inline]
    pub fn count(self) -> usize {
        self.bits().count_ones() as usize
    }
}
