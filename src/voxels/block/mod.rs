//! # Block Module
//!
//! This module provides the block-related building blocks of a chunk: the
//! [`BlockValue`] trait every cell type implements, the default [`BlockType`]
//! enumeration, and the [`BlockSide`]/[`FaceFlags`] types used for face culling.

pub mod block_side;
pub mod block_type;

pub use block_side::{BlockSide, FaceFlags};
pub use block_type::BlockType;

/// The underlying integer type used to represent block types in memory.
pub type BlockTypeSize = u8;

/// A value that can be stored in one cell of a chunk.
///
/// Visibility only needs to know whether a cell is empty, so the trait is
/// kept to an equality comparison against the [`BlockValue::AIR`] sentinel.
/// Every value other than `AIR` is treated as solid.
pub trait BlockValue: Copy + PartialEq {
    /// The empty-space sentinel.
    const AIR: Self;

    /// Returns `true` if this value is empty space.
    #[inline]
    fn is_air(&self) -> bool {
        *self == Self::AIR
    }

    /// Returns `true` if this value occludes its neighbours.
    #[inline]
    fn is_solid(&self) -> bool {
        !self.is_air()
    }
}

impl BlockValue for BlockType {
    const AIR: Self = BlockType::AIR;
}

/// Raw block ids, with `0` as air.
impl BlockValue for BlockTypeSize {
    const AIR: Self = 0;
}
