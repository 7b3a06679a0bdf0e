//! # World Module
//!
//! This module provides the `World` struct which owns a collection of chunks
//! keyed by their origin and routes world-space block access to the owning
//! chunk.
//!
//! ## Architecture
//!
//! The world is sparse: only chunks that were added are kept in memory. A
//! world position belongs to the chunk whose origin is the position rounded
//! down to a multiple of `D` on every axis. Edits touch exactly one chunk, so
//! a renderer only needs to regenerate the visible set of that chunk.

use std::collections::HashMap;

use cgmath::Point3;
use log::info;

use crate::error::WorldError;

use super::block::{BlockType, BlockValue};
use super::chunk::{CoordType, VoxelGrid, CHUNK_DIMENSION};

/// The method used to generate chunks added with [`World::add_chunk_at`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum GenerationMethod {
    /// Every block is air.
    Empty,
    /// Every block is the default solid block.
    #[default]
    Solid,
    /// Alternates between solid and air blocks in 3D.
    Checkerboard,
    /// Sparse random solid blocks, reproducible from the seed.
    Random {
        /// Base seed, mixed with the chunk origin.
        seed: u64,
    },
    /// Thresholded 3D Perlin noise.
    Perlin {
        /// Noise seed.
        seed: u32,
    },
}

/// A sparse voxel world composed of chunks of edge length `D`.
pub struct World<T, const D: usize = CHUNK_DIMENSION> {
    /// Chunks keyed by their origin in world space.
    chunks: HashMap<Point3<i32>, VoxelGrid<T, D>>,
    generation_method: GenerationMethod,
}

impl<T: BlockValue, const D: usize> World<T, D> {
    /// Creates a new, empty world whose generated chunks use `generation_method`.
    pub fn with_generation_method(generation_method: GenerationMethod) -> Self {
        World {
            chunks: HashMap::new(),
            generation_method,
        }
    }

    /// The origin of the chunk that owns `position`.
    pub fn chunk_origin_for(position: Point3<i32>) -> Point3<i32> {
        let d = D as i32;
        Point3::new(
            position.x.div_euclid(d) * d,
            position.y.div_euclid(d) * d,
            position.z.div_euclid(d) * d,
        )
    }

    /// Number of loaded chunks.
    pub fn len(&self) -> usize {
        self.chunks.len()
    }

    /// Returns `true` if no chunk is loaded.
    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }

    /// Inserts `chunk` under its own origin, returning the chunk it replaced.
    pub fn insert_chunk(&mut self, chunk: VoxelGrid<T, D>) -> Option<VoxelGrid<T, D>> {
        self.chunks.insert(chunk.origin(), chunk)
    }

    /// Retrieves the chunk whose origin is `origin`.
    pub fn get_chunk_at(&self, origin: Point3<i32>) -> Option<&VoxelGrid<T, D>> {
        self.chunks.get(&origin)
    }

    /// Retrieves the chunk whose origin is `origin` for editing.
    pub fn get_chunk_at_mut(&mut self, origin: Point3<i32>) -> Option<&mut VoxelGrid<T, D>> {
        self.chunks.get_mut(&origin)
    }

    /// Unloads and returns the chunk at `origin`.
    pub fn remove_chunk_at(&mut self, origin: Point3<i32>) -> Option<VoxelGrid<T, D>> {
        self.chunks.remove(&origin)
    }

    /// Iterates the loaded chunks in arbitrary order.
    pub fn chunks(&self) -> impl Iterator<Item = &VoxelGrid<T, D>> {
        self.chunks.values()
    }

    /// Reads the block at a world position.
    ///
    /// # Errors
    /// `ChunkNotLoaded` if no chunk owns the position.
    pub fn block_at(&self, position: Point3<i32>) -> Result<T, WorldError> {
        let origin = Self::chunk_origin_for(position);
        let chunk = self
            .chunks
            .get(&origin)
            .ok_or(WorldError::ChunkNotLoaded { origin })?;
        Ok(chunk.at_point(position, CoordType::WORLD)?)
    }

    /// Writes the block at a world position and returns the origin of the
    /// chunk that changed.
    ///
    /// # Errors
    /// `ChunkNotLoaded` if no chunk owns the position.
    pub fn set_block_at(&mut self, position: Point3<i32>, value: T) -> Result<Point3<i32>, WorldError> {
        let origin = Self::chunk_origin_for(position);
        let chunk = self
            .chunks
            .get_mut(&origin)
            .ok_or(WorldError::ChunkNotLoaded { origin })?;
        chunk.set_block_at(position.x, position.y, position.z, CoordType::WORLD, value)?;
        Ok(origin)
    }
}

impl<const D: usize> World<BlockType, D> {
    /// Creates a new, empty world that generates solid chunks.
    pub fn new() -> Self {
        Self::with_generation_method(GenerationMethod::default())
    }

    /// Adds a generated chunk at `origin` if one doesn't already exist.
    ///
    /// `origin` is snapped to the owning chunk origin first, so any position
    /// inside the desired chunk may be passed.
    ///
    /// # Returns
    /// The origin of the chunk, whether it was generated or already present.
    pub fn add_chunk_at(&mut self, origin: Point3<i32>) -> Point3<i32> {
        let origin = Self::chunk_origin_for(origin);
        if self.chunks.contains_key(&origin) {
            return origin;
        }

        let chunk = match self.generation_method {
            GenerationMethod::Empty => VoxelGrid::empty(origin),
            GenerationMethod::Solid => VoxelGrid::new(origin),
            GenerationMethod::Checkerboard => VoxelGrid::checkerboard(origin),
            GenerationMethod::Random { seed } => VoxelGrid::random(origin, mix_seed(seed, origin)),
            GenerationMethod::Perlin { seed } => VoxelGrid::perlin(origin, seed),
        };
        info!(
            "generated {:?} chunk at {:?}",
            self.generation_method, origin
        );

        self.chunks.insert(origin, chunk);
        origin
    }
}

impl<const D: usize> Default for World<BlockType, D> {
    fn default() -> Self {
        Self::new()
    }
}

fn mix_seed(seed: u64, origin: Point3<i32>) -> u64 {
    let mut mixed = seed;
    for axis in [origin.x, origin.y, origin.z] {
        mixed = mixed.rotate_left(21) ^ (axis as u32 as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15);
    }
    mixed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ChunkError;

    #[test]
    fn chunk_origin_rounds_toward_negative_infinity() {
        type W = World<BlockType, 16>;
        assert_eq!(W::chunk_origin_for(Point3::new(0, 15, 16)), Point3::new(0, 0, 16));
        assert_eq!(W::chunk_origin_for(Point3::new(-1, -16, -17)), Point3::new(-16, -16, -32));
    }

    #[test]
    fn add_chunk_at_is_idempotent() {
        let mut world = World::<BlockType, 4>::new();
        assert_eq!(world.add_chunk_at(Point3::new(5, 1, 2)), Point3::new(4, 0, 0));
        world.set_block_at(Point3::new(5, 1, 2), BlockType::AIR).unwrap();
        world.add_chunk_at(Point3::new(4, 0, 0));
        assert_eq!(world.len(), 1);
        assert_eq!(world.block_at(Point3::new(5, 1, 2)), Ok(BlockType::AIR));
    }

    #[test]
    fn missing_chunk_is_reported() {
        let world = World::<BlockType, 4>::new();
        assert_eq!(
            world.block_at(Point3::new(-3, 0, 0)),
            Err(WorldError::ChunkNotLoaded {
                origin: Point3::new(-4, 0, 0)
            })
        );
    }

    #[test]
    fn chunk_errors_convert_into_world_errors() {
        let err: WorldError = ChunkError::OutOfBounds {
            requested: 9,
            limit: 4,
        }
        .into();
        assert!(matches!(err, WorldError::Chunk(ChunkError::OutOfBounds { .. })));
    }
}
