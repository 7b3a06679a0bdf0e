//! # Block Type Module
//!
//! This module defines the different types of blocks a chunk can hold and the
//! conversions between the enum and its compact integer form.

use num_derive::FromPrimitive;

use super::BlockTypeSize;

/// Enumerates all block types known to the crate.
///
/// `AIR` and `EARTH` are the two states the chunk needs; the remaining
/// variants are terrain kinds produced by the chunk generators.
#[repr(u8)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, FromPrimitive)]
pub enum BlockType {
    /// Empty space. Never rendered and never occludes a neighbour.
    AIR = 0,

    /// Generic solid ground. This is the default fill of a new chunk.
    #[default]
    EARTH = 1,

    /// Loose soil found just below the surface.
    DIRT = 2,

    /// Surface block with grass on top.
    GRASS = 3,

    /// Deep solid rock.
    STONE = 4,
}

impl BlockType {
    /// Every solid variant, in discriminant order.
    pub const SOLIDS: [BlockType; 4] = [
        BlockType::EARTH,
        BlockType::DIRT,
        BlockType::GRASS,
        BlockType::STONE,
    ];

    /// Converts a `BlockTypeSize` to a `BlockType`.
    ///
    /// # Arguments
    /// * `btype` - The block type as a `BlockTypeSize`
    ///
    /// # Returns
    /// The corresponding `BlockType`, or `None` if the value names no variant.
    pub fn from_int(btype: BlockTypeSize) -> Option<Self> {
        num::FromPrimitive::from_u8(btype)
    }

    /// Returns the compact integer form of this block type.
    #[inline]
    pub fn as_int(self) -> BlockTypeSize {
        self as BlockTypeSize
    }

    /// Picks a random solid block type from the given generator.
    pub fn random_solid(rng: &mut fastrand::Rng) -> Self {
        Self::SOLIDS[rng.usize(..Self::SOLIDS.len())]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn int_conversion_round_trips_known_values() {
        for block in [BlockType::AIR, BlockType::EARTH, BlockType::STONE] {
            assert_eq!(BlockType::from_int(block.as_int()), Some(block));
        }
    }

    #[test]
    fn unknown_int_is_rejected() {
        assert_eq!(BlockType::from_int(200), None);
    }

    #[test]
    fn random_solid_is_never_air() {
        let mut rng = fastrand::Rng::with_seed(7);
        for _ in 0..64 {
            assert_ne!(BlockType::random_solid(&mut rng), BlockType::AIR);
        }
    }
}
