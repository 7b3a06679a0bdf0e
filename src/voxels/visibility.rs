//! # Visibility Module
//!
//! Pure functions that decide which blocks of a chunk, and which faces of those
//! blocks, border empty space and therefore need to be rendered.
//!
//! ## Rules
//!
//! Only intra-chunk information is used. A block on any outer face of the cube
//! is always visible because the analyzer cannot see the adjacent chunk. An
//! interior block is visible when at least one of its six axis neighbours is
//! air. At face granularity, a face is exposed when the neighbour it touches is
//! outside the chunk or air.
//!
//! Scans iterate local coordinates with x outermost, then y, then z, so the
//! output order is deterministic for a given grid state.

use cgmath::Point3;
use log::debug;

use crate::error::ChunkError;

use super::block::{BlockSide, BlockValue, FaceFlags};
use super::chunk::{contains_local, on_boundary, CoordType, SolidMask, VoxelGrid};

/// A visible block exported for rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisibleBlockRecord<T> {
    /// Block position in the frame requested by the caller.
    pub position: Point3<i32>,
    /// The stored block value.
    pub block: T,
}

/// A block with the exact set of faces that need to be drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisibleFaceRecord<T> {
    /// Block position in the frame requested by the caller.
    pub position: Point3<i32>,
    /// The stored block value.
    pub block: T,
    /// Faces bordering air or the chunk boundary. Never empty.
    pub faces: FaceFlags,
}

impl<T> VisibleFaceRecord<T> {
    /// Packs the record into an `[x, y, z, flags]` quadruple.
    ///
    /// Returns `None` if a coordinate does not fit in a `u16`, which happens
    /// for negative world positions. Local positions always fit.
    pub fn packed(&self) -> Option<[u16; 4]> {
        Some([
            u16::try_from(self.position.x).ok()?,
            u16::try_from(self.position.y).ok()?,
            u16::try_from(self.position.z).ok()?,
            self.faces.bits() as u16,
        ])
    }
}

/// Decides whether the block at `(x, y, z)` has at least one exposed face.
///
/// The block's own value is not inspected; callers skip air cells themselves.
///
/// # Errors
/// Same contract as [`VoxelGrid::at_coord`].
pub fn is_visible<T: BlockValue, const D: usize>(
    grid: &VoxelGrid<T, D>,
    x: i32,
    y: i32,
    z: i32,
    frame: CoordType,
) -> Result<bool, ChunkError> {
    let local = grid.resolve(Point3::new(x, y, z), frame)?;
    Ok(is_visible_local(grid, local))
}

/// Computes which faces of the block at `(x, y, z)` are exposed.
///
/// # Errors
/// Same contract as [`VoxelGrid::at_coord`].
pub fn exposed_faces<T: BlockValue, const D: usize>(
    grid: &VoxelGrid<T, D>,
    x: i32,
    y: i32,
    z: i32,
    frame: CoordType,
) -> Result<FaceFlags, ChunkError> {
    let local = grid.resolve(Point3::new(x, y, z), frame)?;
    let mut faces = FaceFlags::empty();
    for side in BlockSide::all() {
        let neighbour = local + side.normal();
        if !contains_local::<D>(neighbour) || grid.get_local(neighbour).is_air() {
            faces |= side.flag();
        }
    }
    Ok(faces)
}

/// Lists every non-air block of the grid that is visible.
///
/// # Arguments
/// * `grid` - The chunk to scan
/// * `output_frame` - `LOCAL` emits chunk coordinates, `WORLD` adds the origin
pub fn collect_visible_blocks<T: BlockValue, const D: usize>(
    grid: &VoxelGrid<T, D>,
    output_frame: CoordType,
) -> Vec<VisibleBlockRecord<T>> {
    let mut blocks = Vec::new();
    for local in scan_order::<D>() {
        let block = grid.get_local(local);
        if block.is_air() || !is_visible_local(grid, local) {
            continue;
        }
        blocks.push(VisibleBlockRecord {
            position: output_position(grid, local, output_frame),
            block,
        });
    }

    debug!(
        "chunk at {:?}: {} of {} blocks visible",
        grid.origin(),
        blocks.len(),
        VoxelGrid::<T, D>::VOLUME
    );
    blocks
}

/// Lists every non-air block with at least one exposed face, together with
/// the exact set of exposed faces.
pub fn collect_visible_faces<T: BlockValue, const D: usize>(
    grid: &VoxelGrid<T, D>,
    output_frame: CoordType,
) -> Vec<VisibleFaceRecord<T>> {
    let mask = SolidMask::from_grid(grid);
    let mut faces = Vec::new();
    let mut face_count = 0;

    for local in scan_order::<D>() {
        let block = grid.get_local(local);
        if block.is_air() {
            continue;
        }
        let exposed = mask.exposed_faces(local);
        if exposed.is_empty() {
            continue;
        }
        face_count += exposed.count();
        faces.push(VisibleFaceRecord {
            position: output_position(grid, local, output_frame),
            block,
            faces: exposed,
        });
    }

    debug!(
        "chunk at {:?}: {} exposed faces on {} blocks",
        grid.origin(),
        face_count,
        faces.len()
    );
    faces
}

fn is_visible_local<T: BlockValue, const D: usize>(
    grid: &VoxelGrid<T, D>,
    local: Point3<i32>,
) -> bool {
    if on_boundary::<D>(local) {
        return true;
    }
    BlockSide::all()
        .into_iter()
        .any(|side| grid.get_local(local + side.normal()).is_air())
}

fn output_position<T: BlockValue, const D: usize>(
    grid: &VoxelGrid<T, D>,
    local: Point3<i32>,
    frame: CoordType,
) -> Point3<i32> {
    match frame {
        CoordType::LOCAL => local,
        CoordType::WORLD => grid.to_world(local),
    }
}

// x outer, y middle, z inner.
fn scan_order<const D: usize>() -> impl Iterator<Item = Point3<i32>> {
    let d = D as i32;
    (0..d).flat_map(move |x| (0..d).flat_map(move |y| (0..d).map(move |z| Point3::new(x, y, z))))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::voxels::block::BlockType;

    type TestChunk = VoxelGrid<BlockType, 4>;

    fn solid_chunk() -> TestChunk {
        TestChunk::new(Point3::new(0, 0, 0))
    }

    #[test]
    fn corner_of_solid_chunk_is_visible() {
        let chunk = solid_chunk();
        assert_eq!(is_visible(&chunk, 0, 0, 0, CoordType::LOCAL), Ok(true));
        assert_eq!(is_visible(&chunk, 3, 1, 2, CoordType::LOCAL), Ok(true));
    }

    #[test]
    fn enclosed_interior_block_is_hidden() {
        let chunk = solid_chunk();
        assert_eq!(is_visible(&chunk, 1, 1, 1, CoordType::LOCAL), Ok(false));
        assert_eq!(is_visible(&chunk, 2, 2, 1, CoordType::LOCAL), Ok(false));
    }

    #[test]
    fn air_neighbour_exposes_interior_block() {
        let mut chunk = solid_chunk();
        chunk
            .set_block_at(2, 1, 1, CoordType::LOCAL, BlockType::AIR)
            .unwrap();
        assert_eq!(is_visible(&chunk, 1, 1, 1, CoordType::LOCAL), Ok(true));
        assert_eq!(
            exposed_faces(&chunk, 1, 1, 1, CoordType::LOCAL),
            Ok(FaceFlags::RIGHT)
        );
        // (1, 2, 1) has no air neighbour.
        assert_eq!(is_visible(&chunk, 1, 2, 1, CoordType::LOCAL), Ok(false));
    }

    #[test]
    fn world_frame_is_normalized_before_checking() {
        let chunk = TestChunk::new(Point3::new(16, 16, 16));
        assert_eq!(is_visible(&chunk, 17, 17, 17, CoordType::WORLD), Ok(false));
        assert_eq!(is_visible(&chunk, 16, 17, 17, CoordType::WORLD), Ok(true));
        assert!(matches!(
            is_visible(&chunk, 1, 1, 1, CoordType::WORLD),
            Err(ChunkError::NotInChunk { .. })
        ));
    }

    #[test]
    fn solid_chunk_hides_only_the_core() {
        let chunk = solid_chunk();
        let visible = collect_visible_blocks(&chunk, CoordType::LOCAL);
        // 4³ minus the 2³ interior.
        assert_eq!(visible.len(), 56);
        assert_eq!(visible[0].position, Point3::new(0, 0, 0));
        assert_eq!(visible[1].position, Point3::new(0, 0, 1));
    }

    #[test]
    fn empty_chunk_has_nothing_to_draw() {
        let chunk = TestChunk::empty(Point3::new(0, 0, 0));
        assert!(collect_visible_blocks(&chunk, CoordType::LOCAL).is_empty());
        assert!(collect_visible_faces(&chunk, CoordType::LOCAL).is_empty());
    }

    #[test]
    fn isolated_block_exposes_all_faces() {
        let mut chunk = TestChunk::empty(Point3::new(0, 0, 0));
        chunk
            .set_block_at(1, 2, 1, CoordType::LOCAL, BlockType::STONE)
            .unwrap();
        let faces = collect_visible_faces(&chunk, CoordType::LOCAL);
        assert_eq!(faces.len(), 1);
        assert_eq!(faces[0].faces, FaceFlags::all());
        assert_eq!(faces[0].block, BlockType::STONE);
        assert_eq!(faces[0].packed(), Some([1, 2, 1, 0b11_1111]));
    }

    #[test]
    fn packed_rejects_negative_positions() {
        let record = VisibleFaceRecord {
            position: Point3::new(-1, 0, 0),
            block: BlockType::EARTH,
            faces: FaceFlags::TOP,
        };
        assert_eq!(record.packed(), None);
    }
}
