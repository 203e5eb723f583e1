use cgmath::{Point3, Vector3};

use crate::engine_state::voxels::{
    block::{block_side::BlockSide, block_type::BlockKind},
    region::RegionCoord,
    world::BlockStore,
};

use super::{Mesh, RegionMesher};

fn store_with(blocks: &[(i32, i32, i32, BlockKind)]) -> BlockStore {
    let mut store = BlockStore::new();
    for (x, y, z, kind) in blocks {
        store.set(Point3::new(*x, *y, *z), *kind);
    }
    store
}

fn mesh_of(blocks: &[(i32, i32, i32, BlockKind)]) -> Mesh {
    RegionMesher::new().build(&store_with(blocks), RegionCoord::new(0, 0))
}

/// Triangles lying on the plane `axis = value` with the given normal.
fn triangles_on_plane(mesh: &Mesh, axis: usize, value: f32, normal: Vector3<f32>) -> usize {
    mesh.triangles()
        .filter(|triangle| {
            triangle
                .iter()
                .all(|vertex| vertex.position[axis] == value && vertex.normal_vector() == normal)
        })
        .count()
}

#[test]
fn lone_block_shows_all_six_faces() {
    let mesh = mesh_of(&[(3, 4, 5, BlockKind::STONE)]);
    assert_eq!(mesh.face_count(), 6);
    assert_eq!(mesh.triangle_count(), 12);
    assert_eq!(mesh.vertices().len(), 24);
    for side in BlockSide::all() {
        assert_eq!(mesh.faces_facing(side), 1);
    }
}

#[test]
fn empty_region_has_no_geometry() {
    let mesh = mesh_of(&[]);
    assert!(mesh.is_empty());
    assert_eq!(mesh.triangles().count(), 0);
}

#[test]
fn touching_solids_hide_their_shared_faces() {
    let mesh = mesh_of(&[(0, 0, 0, BlockKind::STONE), (1, 0, 0, BlockKind::DIRT)]);
    assert_eq!(mesh.face_count(), 10);
    assert_eq!(triangles_on_plane(&mesh, 0, 1.0, Vector3::new(1.0, 0.0, 0.0)), 0);
    assert_eq!(triangles_on_plane(&mesh, 0, 1.0, Vector3::new(-1.0, 0.0, 0.0)), 0);
}

#[test]
fn solid_and_water_both_show_the_shared_face() {
    let mesh = mesh_of(&[(0, 0, 0, BlockKind::STONE), (1, 0, 0, BlockKind::WATER)]);
    assert_eq!(mesh.face_count(), 12);
    assert_eq!(triangles_on_plane(&mesh, 0, 1.0, Vector3::new(1.0, 0.0, 0.0)), 2);
    assert_eq!(triangles_on_plane(&mesh, 0, 1.0, Vector3::new(-1.0, 0.0, 0.0)), 2);
}

#[test]
fn water_hides_faces_against_water() {
    let mesh = mesh_of(&[(0, 6, 0, BlockKind::WATER), (0, 5, 0, BlockKind::WATER)]);
    assert_eq!(mesh.face_count(), 10);
    assert_eq!(triangles_on_plane(&mesh, 1, 6.0, Vector3::new(0.0, 1.0, 0.0)), 0);
    assert_eq!(triangles_on_plane(&mesh, 1, 6.0, Vector3::new(0.0, -1.0, 0.0)), 0);
}

#[test]
fn faces_take_the_material_of_their_orientation() {
    let mesh = mesh_of(&[(0, 0, 0, BlockKind::GRASS)]);
    let grass = BlockKind::GRASS.material().unwrap();
    for triangle in mesh.triangles() {
        let normal = triangle[0].normal;
        let normal = Vector3::new(normal[0] as i32, normal[1] as i32, normal[2] as i32);
        let side = BlockSide::from_normal(normal).expect("axis normal");
        for vertex in triangle {
            assert_eq!(vertex.color, grass.color_for(side).to_array());
        }
    }
}

#[test]
fn texture_coordinates_span_the_unit_square() {
    let mesh = mesh_of(&[(0, 0, 0, BlockKind::SAND)]);
    for vertex in mesh.vertices() {
        assert!(vertex.tex_coords.iter().all(|c| *c == 0.0 || *c == 1.0));
    }
    let corners: Vec<_> = mesh.vertices()[..4].iter().map(|v| v.tex_coords).collect();
    assert_eq!(corners, vec![[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]]);
}

#[test]
fn neighbours_across_the_region_border_still_cull() {
    let store = store_with(&[(15, 2, 0, BlockKind::STONE), (16, 2, 0, BlockKind::STONE)]);
    let mut mesher = RegionMesher::new();
    let left = mesher.build(&store, RegionCoord::new(0, 0));
    let right = mesher.build(&store, RegionCoord::new(1, 0));
    assert_eq!(left.face_count(), 5);
    assert_eq!(left.faces_facing(BlockSide::RIGHT), 0);
    assert_eq!(right.face_count(), 5);
    assert_eq!(right.faces_facing(BlockSide::LEFT), 0);
}

#[test]
fn blocks_outside_the_height_band_are_not_meshed() {
    let mesh = mesh_of(&[(0, -1, 0, BlockKind::STONE), (0, 32, 0, BlockKind::STONE)]);
    assert!(mesh.is_empty());

    // A block just below the band still hides the bottom face above it.
    let mesh = mesh_of(&[(0, -1, 0, BlockKind::STONE), (0, 0, 0, BlockKind::STONE)]);
    assert_eq!(mesh.face_count(), 5);
    assert_eq!(mesh.faces_facing(BlockSide::BOTTOM), 0);
}

#[test]
fn negative_regions_mesh_in_world_space() {
    let store = store_with(&[(-1, 0, -1, BlockKind::WOOD)]);
    let mesh = RegionMesher::new().build(&store, RegionCoord::new(-1, -1));
    assert_eq!(mesh.face_count(), 6);
    for vertex in mesh.vertices() {
        assert!((-1.0..=0.0).contains(&vertex.position[0]));
        assert!((-1.0..=0.0).contains(&vertex.position[2]));
    }
}

#[test]
fn rebuilding_is_deterministic_and_reuses_buffers() {
    let store = store_with(&[
        (1, 1, 1, BlockKind::STONE),
        (1, 2, 1, BlockKind::GRASS),
        (2, 1, 1, BlockKind::WATER),
    ]);
    let mut mesher = RegionMesher::new();
    let first = mesher.build(&store, RegionCoord::new(0, 0));
    let _other = mesher.build(&store_with(&[(40, 0, 40, BlockKind::SAND)]), RegionCoord::new(2, 2));
    let second = mesher.build(&store, RegionCoord::new(0, 0));
    assert_eq!(first, second);
}

#[test]
fn byte_views_match_buffer_sizes() {
    let mesh = mesh_of(&[(0, 0, 0, BlockKind::LEAVES)]);
    assert_eq!(mesh.vertex_bytes().len(), mesh.vertices().len() * 44);
    assert_eq!(mesh.index_bytes().len(), mesh.indices().len() * 4);
}
