/// Integration tests for world-space routing
/// Edits addressed in world coordinates must land in exactly one chunk.
use cgmath::Point3;
use voxel_chunk::*;

type SmallWorld = World<BlockType, 4>;

#[test]
fn test_edits_route_to_owning_chunk_across_negative_origins() {
    let mut world = SmallWorld::new();
    for origin in [Point3::new(-4, 0, 0), Point3::new(0, 0, 0), Point3::new(0, -4, -4)] {
        world.add_chunk_at(origin);
    }
    assert_eq!(world.len(), 3);

    let changed = world.set_block_at(Point3::new(-1, 2, 3), BlockType::AIR).unwrap();
    assert_eq!(changed, Point3::new(-4, 0, 0));

    let chunk = world.get_chunk_at(changed).unwrap();
    assert_eq!(chunk.at_coord(3, 2, 3, CoordType::LOCAL), Ok(BlockType::AIR));
    // The neighbouring chunk at the origin is untouched.
    let other = world.get_chunk_at(Point3::new(0, 0, 0)).unwrap();
    assert!(other.cells().iter().all(|b| *b == BlockType::EARTH));

    let changed = world.set_block_at(Point3::new(2, -1, -4), BlockType::STONE).unwrap();
    assert_eq!(changed, Point3::new(0, -4, -4));
    assert_eq!(world.block_at(Point3::new(2, -1, -4)), Ok(BlockType::STONE));
}

#[test]
fn test_unloaded_chunk_is_an_error() {
    let mut world = SmallWorld::new();
    world.add_chunk_at(Point3::new(0, 0, 0));
    assert_eq!(
        world.set_block_at(Point3::new(9, 0, 0), BlockType::AIR),
        Err(WorldError::ChunkNotLoaded {
            origin: Point3::new(8, 0, 0)
        })
    );
}

#[test]
fn test_edit_changes_only_that_chunks_visible_set() {
    let mut world = SmallWorld::new();
    world.add_chunk_at(Point3::new(0, 0, 0));
    world.add_chunk_at(Point3::new(4, 0, 0));

    let before: Vec<_> = [Point3::new(0, 0, 0), Point3::new(4, 0, 0)]
        .iter()
        .map(|o| collect_visible_blocks(world.get_chunk_at(*o).unwrap(), CoordType::WORLD))
        .collect();

    let changed = world.set_block_at(Point3::new(6, 1, 1), BlockType::AIR).unwrap();

    let after_changed =
        collect_visible_blocks(world.get_chunk_at(changed).unwrap(), CoordType::WORLD);
    let after_other =
        collect_visible_blocks(world.get_chunk_at(Point3::new(0, 0, 0)).unwrap(), CoordType::WORLD);

    assert_eq!(before[0], after_other);
    assert_ne!(before[1], after_changed);
    // The interior block next to the hole becomes visible; the air cell itself is never listed.
    assert!(after_changed
        .iter()
        .all(|r| r.position != Point3::new(6, 1, 1)));
    assert!(after_changed
        .iter()
        .any(|r| r.position == Point3::new(5, 1, 1)));
}

#[test]
fn test_generation_methods() {
    let mut empty = SmallWorld::with_generation_method(GenerationMethod::Empty);
    let origin = empty.add_chunk_at(Point3::new(0, 0, 0));
    assert!(collect_visible_blocks(empty.get_chunk_at(origin).unwrap(), CoordType::LOCAL).is_empty());

    let mut random = SmallWorld::with_generation_method(GenerationMethod::Random { seed: 11 });
    let a = random.add_chunk_at(Point3::new(0, 0, 0));
    let b = random.add_chunk_at(Point3::new(4, 0, 0));
    let mut again = SmallWorld::with_generation_method(GenerationMethod::Random { seed: 11 });
    again.add_chunk_at(Point3::new(0, 0, 0));
    assert_eq!(random.get_chunk_at(a), again.get_chunk_at(a));
    assert!(random.get_chunk_at(b).is_some());

    let mut perlin = SmallWorld::with_generation_method(GenerationMethod::Perlin { seed: 1 });
    perlin.add_chunk_at(Point3::new(-4, -4, -4));
    assert_eq!(perlin.len(), 1);
}

#[test]
fn test_insert_and_remove_chunks() {
    let mut world = SmallWorld::new();
    let chunk = VoxelGrid::<BlockType, 4>::checkerboard(Point3::new(12, 0, 0));
    assert!(world.insert_chunk(chunk.clone()).is_none());
    assert_eq!(world.block_at(Point3::new(12, 0, 0)), Ok(BlockType::EARTH));

    world
        .get_chunk_at_mut(Point3::new(12, 0, 0))
        .unwrap()
        .fill(BlockType::AIR);
    assert_eq!(world.block_at(Point3::new(13, 0, 0)), Ok(BlockType::AIR));

    assert!(world.remove_chunk_at(Point3::new(12, 0, 0)).is_some());
    assert!(world.is_empty());
}
