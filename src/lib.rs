#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![warn(rustdoc::invalid_rust_codeblocks)]

//! # Voxel Chunk
//!
//! Fixed-size voxel chunks and the visibility analysis that decides which of
//! their blocks, and which faces of those blocks, need to be rendered.
//!
//! ## Key Modules
//!
//! * `voxels` - Block values, the [`VoxelGrid`] chunk, visibility analysis and the [`World`] map
//! * `rendering` - Conversion of visible sets into flat vertex buffers
//! * `error` - Error kinds returned by chunk and world access
//!
//! ## Usage
//!
//! ```rust
//! use cgmath::Point3;
//! use voxel_chunk::{collect_visible_faces, BlockType, CoordType, VoxelGrid};
//!
//! let mut chunk = VoxelGrid::<BlockType, 4>::new(Point3::new(0, 0, 0));
//! chunk.set_block_at(2, 1, 1, CoordType::LOCAL, BlockType::AIR).unwrap();
//!
//! let faces = collect_visible_faces(&chunk, CoordType::WORLD);
//! let buffer = voxel_chunk::rendering::faces_to_vertex_buffer(&faces);
//! assert!(!buffer.is_empty());
//! ```
//!
//! ## Scope
//!
//! A chunk only knows its own blocks. Blocks on the outer faces of the cube
//! are always treated as visible; neighbouring chunks are never consulted.

use cgmath::Point3;
use log::info;
use web_time::Instant;

pub mod error;
pub mod rendering;
pub mod voxels;

pub use error::{ChunkError, WorldError};
pub use voxels::block::{BlockSide, BlockType, BlockValue, FaceFlags};
pub use voxels::chunk::{Chunk, CoordType, VoxelGrid, CHUNK_DIMENSION};
pub use voxels::visibility::{
    collect_visible_blocks, collect_visible_faces, exposed_faces, is_visible, VisibleBlockRecord,
    VisibleFaceRecord,
};
pub use voxels::world::{GenerationMethod, World};

/// Edge length of the chunk built by [`run`].
pub const DEMO_CHUNK_DIMENSION: usize = 4;

/// Seed of the Perlin world built by [`run`].
pub const DEMO_WORLD_SEED: u32 = 0;

/// Initializes logging and runs the demo: builds a small chunk, carves a few
/// air pockets, and logs its visible set and the size of the exported geometry.
/// Then generates a handful of production chunks and reports the same totals.
///
/// The log level is read from `RUST_LOG`.
pub fn run() -> Result<(), WorldError> {
    let mut log_builder = env_logger::Builder::new();
    log_builder
        .target(env_logger::Target::Stdout)
        .parse_env("RUST_LOG")
        .init();

    info!("Logger initialized");

    let mut chunk = VoxelGrid::<BlockType, DEMO_CHUNK_DIMENSION>::new(Point3::new(0, 0, 0));
    chunk.set_block_at(2, 1, 1, CoordType::LOCAL, BlockType::AIR)?;
    chunk.set_block_at(1, 3, 2, CoordType::LOCAL, BlockType::AIR)?;

    let stopwatch = Instant::now();
    let blocks = collect_visible_blocks(&chunk, CoordType::WORLD);
    let faces = collect_visible_faces(&chunk, CoordType::WORLD);
    let elapsed = stopwatch.elapsed();

    info!(
        "demo chunk: {} visible blocks, {} exposed faces ({:?})",
        blocks.len(),
        rendering::face_count_of(&faces),
        elapsed
    );
    info!(
        "demo chunk buffers: {} floats as cubes, {} floats as faces",
        rendering::blocks_to_vertex_buffer(&blocks).len(),
        rendering::faces_to_vertex_buffer(&faces).len()
    );

    let mut world = World::<BlockType, CHUNK_DIMENSION>::with_generation_method(
        GenerationMethod::Perlin {
            seed: DEMO_WORLD_SEED,
        },
    );
    let d = CHUNK_DIMENSION as i32;
    for cx in -1..1 {
        for cz in -1..1 {
            world.add_chunk_at(Point3::new(cx * d, 0, cz * d));
        }
    }

    let stopwatch = Instant::now();
    let total_faces: usize = world
        .chunks()
        .map(|chunk| rendering::face_count_of(&collect_visible_faces(chunk, CoordType::WORLD)))
        .sum();
    info!(
        "world: {} chunks, {} exposed faces ({:?})",
        world.len(),
        total_faces,
        stopwatch.elapsed()
    );

    Ok(())
}
