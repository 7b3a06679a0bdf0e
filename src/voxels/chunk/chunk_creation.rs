//! # Chunk Creation Module
//!
//! Constructors that populate a [`VoxelGrid`] of [`BlockType`] cells with a
//! pattern. They are used by the world's generation methods, the demo binary
//! and the tests.

use cgmath::Point3;
use noise::{NoiseFn, Perlin};

use crate::voxels::block::BlockType;

use super::{index_to_local, VoxelGrid};

/// Threshold above which Perlin noise is considered solid for terrain generation.
pub const PERLIN_POSITIVE_THRESHOLD: f64 = 0.2;
/// Threshold below which Perlin noise is considered solid for terrain generation.
pub const PERLIN_NEGATIVE_THRESHOLD: f64 = -0.2;
/// Scaling factor applied to world coordinates when sampling Perlin noise.
pub const PERLIN_SCALE_FACTOR: f64 = 0.02;
/// Fraction of cells left as air by [`VoxelGrid::random`].
pub const RANDOM_SPARSENESS: f64 = 0.9;

impl<const D: usize> VoxelGrid<BlockType, D> {
    /// Creates a chunk where every block is air.
    pub fn empty(origin: Point3<i32>) -> Self {
        Self::with_fill(origin, BlockType::AIR)
    }

    /// Creates a chunk completely filled with `block`.
    pub fn solid(origin: Point3<i32>, block: BlockType) -> Self {
        Self::with_fill(origin, block)
    }

    /// Creates a chunk with a 3D checkerboard pattern.
    ///
    /// A cell is solid when the sum of its local coordinates is even, so no
    /// two solid blocks share a face.
    pub fn checkerboard(origin: Point3<i32>) -> Self {
        let mut chunk = Self::empty(origin);
        for (index, cell) in chunk.cells.iter_mut().enumerate() {
            let local = index_to_local::<D>(index);
            if (local.x + local.y + local.z) % 2 == 0 {
                *cell = BlockType::EARTH;
            }
        }
        chunk
    }

    /// Creates a chunk with randomly placed solid blocks.
    ///
    /// # Arguments
    /// * `origin` - World position of the chunk
    /// * `seed` - Seed for the generator, so the same seed gives the same chunk
    pub fn random(origin: Point3<i32>, seed: u64) -> Self {
        let mut rng = fastrand::Rng::with_seed(seed);
        let mut chunk = Self::empty(origin);
        for cell in chunk.cells.iter_mut() {
            if rng.f64() >= RANDOM_SPARSENESS {
                *cell = BlockType::random_solid(&mut rng);
            }
        }
        chunk
    }

    /// Generates a chunk by thresholding 3D Perlin noise sampled in world space.
    ///
    /// Cells whose noise value falls outside
    /// `[PERLIN_NEGATIVE_THRESHOLD, PERLIN_POSITIVE_THRESHOLD]` become stone,
    /// which carves cave-like pockets of air. Neighbouring chunks sample the
    /// same field, so their terrain lines up.
    pub fn perlin(origin: Point3<i32>, seed: u32) -> Self {
        let perlin = Perlin::new(seed);
        let mut chunk = Self::empty(origin);
        for (index, cell) in chunk.cells.iter_mut().enumerate() {
            let local = index_to_local::<D>(index);
            let sample = perlin.get(to_perlin_pos(origin, local, PERLIN_SCALE_FACTOR));
            if !(PERLIN_NEGATIVE_THRESHOLD..=PERLIN_POSITIVE_THRESHOLD).contains(&sample) {
                *cell = BlockType::STONE;
            }
        }
        chunk
    }
}

// Summed in f64 so chunks next to the i32 limits sample without overflow.
fn to_perlin_pos(origin: Point3<i32>, local: Point3<i32>, scale_factor: f64) -> [f64; 3] {
    [
        (origin.x as f64 + local.x as f64) * scale_factor,
        (origin.y as f64 + local.y as f64) * scale_factor,
        (origin.z as f64 + local.z as f64) * scale_factor,
    ]
}
