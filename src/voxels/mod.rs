//! # Voxels
//!
//! The chunk data model and the visibility analysis built on it.
//!
//! * **Block**: cell values and block faces
//! * **Chunk**: [`VoxelGrid`](chunk::VoxelGrid), a fixed-size cube of blocks with an origin
//! * **Visibility**: which blocks and faces of a chunk border empty space
//! * **World**: chunks keyed by origin, with world-space routing
//!
//! ## Data Flow
//!
//! 1. The world routes an edit to the chunk that owns the position
//! 2. The renderer asks the visibility analyzer for that chunk's visible set
//! 3. The visible set is handed to the vertex-buffer export in `rendering`

pub mod block;
pub mod chunk;
pub mod visibility;
pub mod world;
