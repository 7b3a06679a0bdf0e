//! # Error Module
//!
//! Error kinds returned by chunk and world access. Both chunk errors are
//! deterministic functions of the grid and the requested coordinate, so they
//! are surfaced to the caller instead of being clamped or retried.

use cgmath::Point3;
use thiserror::Error;

/// Errors raised by a single chunk.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ChunkError {
    /// A linear index or a local coordinate lies outside the chunk volume.
    #[error("block {requested} is out of bounds (valid range is 0..{limit})")]
    OutOfBounds {
        /// The offending index, or the offending axis value for coordinates.
        requested: i64,
        /// Exclusive upper bound for the value that was checked.
        limit: i64,
    },

    /// A world coordinate that belongs to a different chunk.
    #[error("world position {position:?} is not inside the chunk at {origin:?}")]
    NotInChunk {
        /// The world position that was requested.
        position: Point3<i32>,
        /// Origin of the chunk that was asked.
        origin: Point3<i32>,
    },
}

/// Errors raised when routing world-space access through a [`World`](crate::World).
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum WorldError {
    /// No chunk has been loaded at the origin that owns the position.
    #[error("no chunk loaded at {origin:?}")]
    ChunkNotLoaded {
        /// Origin of the chunk that would own the requested position.
        origin: Point3<i32>,
    },

    /// The owning chunk rejected the access.
    #[error(transparent)]
    Chunk(#[from] ChunkError),
}
