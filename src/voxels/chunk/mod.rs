//! # Chunk Module
//!
//! This module provides [`VoxelGrid`], a fixed-size cube of blocks placed at an
//! origin in world space, and the coordinate utilities shared by the grid and
//! the visibility analyzer.
//!
//! ## Layout
//!
//! Cells are stored in a flat boxed slice of length `D³`. A local coordinate
//! `(x, y, z)` lives at `x + y*D + z*D*D`, so x varies fastest, then y, then z.
//!
//! ## Coordinate Frames
//!
//! Every coordinate-based accessor takes a [`CoordType`]:
//! - `LOCAL` coordinates are relative to the chunk and valid in `[0, D-1]`.
//! - `WORLD` coordinates are absolute; `local = world - origin`.
//!
//! A bad local coordinate is an [`ChunkError::OutOfBounds`] caller error, while
//! a world coordinate outside the cube is [`ChunkError::NotInChunk`], which
//! tells the caller to ask a different chunk.

use cgmath::Point3;

use crate::error::ChunkError;

use super::block::{BlockType, BlockValue};

mod chunk_creation;
pub mod solid_mask;

pub use chunk_creation::{
    PERLIN_NEGATIVE_THRESHOLD, PERLIN_POSITIVE_THRESHOLD, PERLIN_SCALE_FACTOR, RANDOM_SPARSENESS,
};
pub use solid_mask::SolidMask;

/// The dimension (width, height, depth) of a production chunk in blocks.
pub const CHUNK_DIMENSION: usize = 16;

/// A production chunk of [`BlockType`] cells.
pub type Chunk = VoxelGrid<BlockType, CHUNK_DIMENSION>;

/// The frame a coordinate triple is expressed in.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum CoordType {
    /// Absolute coordinates relative to the global origin.
    WORLD,
    /// Coordinates relative to the chunk origin, `[0, D-1]` per axis.
    LOCAL,
}

/// A cube of `D × D × D` blocks anchored at `origin`.
///
/// The origin is the corner with minimal coordinates and is fixed for the
/// lifetime of the grid. The grid never allocates after construction.
///
/// Any origin is accepted. World access stays exact for every origin, but
/// world-frame output of a chunk is only exact while `origin + D - 1` fits in
/// `i32` on every axis. Origins produced by [`crate::World`] are multiples of
/// `D` and always satisfy this.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VoxelGrid<T, const D: usize> {
    origin: Point3<i32>,
    cells: Box<[T]>,
}

impl<T: BlockValue, const D: usize> VoxelGrid<T, D> {
    /// Edge length of the cube.
    pub const DIMENSION: usize = D;
    /// Number of cells in one z plane (`D²`).
    pub const PLANE_SIZE: usize = D * D;
    /// Total number of cells (`D³`).
    pub const VOLUME: usize = D * D * D;

    const NON_EMPTY: () = assert!(D > 0, "chunk dimension must be positive");

    /// Creates a grid at `origin` with every cell set to `value`.
    ///
    /// # Arguments
    /// * `origin` - World position of the chunk's minimal corner
    /// * `value` - Initial value of every cell
    pub fn with_fill(origin: Point3<i32>, value: T) -> Self {
        #[allow(clippy::let_unit_value)]
        let () = Self::NON_EMPTY;

        VoxelGrid {
            origin,
            cells: vec![value; Self::VOLUME].into_boxed_slice(),
        }
    }

    /// Creates a grid at `origin` filled with `T::default()`.
    ///
    /// For [`BlockType`] the default is `EARTH`, so a fresh chunk is solid.
    pub fn new(origin: Point3<i32>) -> Self
    where
        T: Default,
    {
        Self::with_fill(origin, T::default())
    }

    /// Edge length of the cube.
    #[inline]
    pub fn dimension() -> usize {
        D
    }

    /// Number of cells in the grid.
    #[inline]
    pub fn volume() -> usize {
        Self::VOLUME
    }

    /// World position of the chunk's minimal corner.
    #[inline]
    pub fn origin(&self) -> Point3<i32> {
        self.origin
    }

    /// Read-only view of every cell in storage order.
    #[inline]
    pub fn cells(&self) -> &[T] {
        &self.cells
    }

    /// Reads the cell at a linear index.
    ///
    /// # Errors
    /// `OutOfBounds` if `index < 0` or `index >= D³`.
    pub fn at(&self, index: i64) -> Result<T, ChunkError> {
        let index = Self::check_index(index)?;
        Ok(self.cells[index])
    }

    /// Reads the cell at `(x, y, z)` in the given frame.
    ///
    /// # Errors
    /// * `OutOfBounds` for a `LOCAL` coordinate outside `[0, D-1]³`
    /// * `NotInChunk` for a `WORLD` coordinate owned by another chunk
    pub fn at_coord(&self, x: i32, y: i32, z: i32, frame: CoordType) -> Result<T, ChunkError> {
        self.at_point(Point3::new(x, y, z), frame)
    }

    /// Point form of [`VoxelGrid::at_coord`].
    pub fn at_point(&self, position: Point3<i32>, frame: CoordType) -> Result<T, ChunkError> {
        let local = self.resolve(position, frame)?;
        Ok(self.cells[local_to_index::<D>(local)])
    }

    /// Writes one cell at a linear index.
    ///
    /// # Errors
    /// Same bounds contract as [`VoxelGrid::at`].
    pub fn set_block(&mut self, index: i64, value: T) -> Result<(), ChunkError> {
        let index = Self::check_index(index)?;
        self.cells[index] = value;
        Ok(())
    }

    /// Writes one cell at `(x, y, z)` in the given frame.
    ///
    /// # Errors
    /// Same contract as [`VoxelGrid::at_coord`].
    pub fn set_block_at(
        &mut self,
        x: i32,
        y: i32,
        z: i32,
        frame: CoordType,
        value: T,
    ) -> Result<(), ChunkError> {
        let local = self.resolve(Point3::new(x, y, z), frame)?;
        self.cells[local_to_index::<D>(local)] = value;
        Ok(())
    }

    /// Overwrites every cell with `value`.
    pub fn fill(&mut self, value: T) {
        self.cells.fill(value);
    }

    /// Iterates every cell in storage order together with its local position.
    pub fn iter(&self) -> impl Iterator<Item = (Point3<i32>, T)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(index, value)| (index_to_local::<D>(index), *value))
    }

    /// Translates a local coordinate into world space. No bounds are checked.
    ///
    /// Arithmetic wraps on `i32` overflow, so the result is only meaningful for
    /// positions whose world coordinate is representable.
    #[inline]
    pub fn to_world(&self, local: Point3<i32>) -> Point3<i32> {
        Point3::new(
            local.x.wrapping_add(self.origin.x),
            local.y.wrapping_add(self.origin.y),
            local.z.wrapping_add(self.origin.z),
        )
    }

    /// Translates a world coordinate into this chunk's local frame. No bounds are checked.
    ///
    /// Arithmetic wraps on `i32` overflow; use [`VoxelGrid::resolve`] when the
    /// input may lie far outside the chunk.
    #[inline]
    pub fn to_local(&self, world: Point3<i32>) -> Point3<i32> {
        Point3::new(
            world.x.wrapping_sub(self.origin.x),
            world.y.wrapping_sub(self.origin.y),
            world.z.wrapping_sub(self.origin.z),
        )
    }

    /// Returns `true` if the world position falls inside this chunk.
    pub fn contains_world(&self, world: Point3<i32>) -> bool {
        self.checked_local(world).is_some_and(contains_local::<D>)
    }

    /// Normalizes a coordinate in either frame into a validated local coordinate.
    ///
    /// # Errors
    /// `OutOfBounds` for bad local input, `NotInChunk` for foreign world input.
    pub fn resolve(&self, position: Point3<i32>, frame: CoordType) -> Result<Point3<i32>, ChunkError> {
        match frame {
            CoordType::LOCAL => {
                check_local::<D>(position)?;
                Ok(position)
            }
            CoordType::WORLD => self
                .checked_local(position)
                .filter(|local| contains_local::<D>(*local))
                .ok_or(ChunkError::NotInChunk {
                    position,
                    origin: self.origin,
                }),
        }
    }

    /// Reads a cell by an already validated local coordinate.
    #[inline]
    pub(crate) fn get_local(&self, local: Point3<i32>) -> T {
        self.cells[local_to_index::<D>(local)]
    }

    // None when `world - origin` does not fit in i32 on some axis.
    fn checked_local(&self, world: Point3<i32>) -> Option<Point3<i32>> {
        Some(Point3::new(
            world.x.checked_sub(self.origin.x)?,
            world.y.checked_sub(self.origin.y)?,
            world.z.checked_sub(self.origin.z)?,
        ))
    }

    fn check_index(index: i64) -> Result<usize, ChunkError> {
        let limit = Self::VOLUME as i64;
        if !(0..limit).contains(&index) {
            return Err(ChunkError::OutOfBounds {
                requested: index,
                limit,
            });
        }
        Ok(index as usize)
    }
}

impl<const D: usize> Default for VoxelGrid<BlockType, D> {
    fn default() -> Self {
        Self::new(Point3::new(0, 0, 0))
    }
}

/// Returns `true` if every axis of `local` lies in `[0, D-1]`.
#[inline]
pub fn contains_local<const D: usize>(local: Point3<i32>) -> bool {
    let range = 0..D as i32;
    range.contains(&local.x) && range.contains(&local.y) && range.contains(&local.z)
}

/// Returns `true` if `local` touches any outer face of the cube.
#[inline]
pub fn on_boundary<const D: usize>(local: Point3<i32>) -> bool {
    let last = D as i32 - 1;
    [local.x, local.y, local.z]
        .into_iter()
        .any(|axis| axis == 0 || axis == last)
}

fn check_local<const D: usize>(local: Point3<i32>) -> Result<(), ChunkError> {
    let limit = D as i64;
    for axis in [local.x, local.y, local.z] {
        if !(0..limit).contains(&(axis as i64)) {
            return Err(ChunkError::OutOfBounds {
                requested: axis as i64,
                limit,
            });
        }
    }
    Ok(())
}

/// Converts a validated local coordinate to its linear index.
#[inline]
pub fn local_to_index<const D: usize>(local: Point3<i32>) -> usize {
    local.x as usize + local.y as usize * D + local.z as usize * D * D
}

/// Converts a linear index back to its local coordinate.
#[inline]
pub fn index_to_local<const D: usize>(index: usize) -> Point3<i32> {
    let z = index / (D * D);
    let remainder = index % (D * D);
    Point3::new((remainder % D) as i32, (remainder / D) as i32, z as i32)
}
