//! # Region Module
//!
//! Regions are fixed-size vertical columns of the world, `REGION_SIZE` blocks
//! wide on both horizontal axes and `WORLD_HEIGHT` blocks tall. They are the
//! unit a mesh is built for; they put no constraint on block storage.

use cgmath::{Point3, Vector3};

/// The horizontal size of a region in blocks.
///
/// Fixed so that the cost of a region rebuild stays bounded.
pub const REGION_SIZE: i32 = 16;
/// The number of block layers a region mesh covers, starting at `y = 0`.
pub const WORLD_HEIGHT: i32 = 32;
/// Half-width of the generated extent, in regions.
pub const RENDER_DISTANCE: i32 = 4;

/// Floors a continuous position onto the block that contains it.
///
/// A block at `(x, y, z)` occupies the half-open unit cube starting at that corner.
pub fn block_position(position: Point3<f32>) -> Point3<i32> {
    Point3::new(
        position.x.floor() as i32,
        position.y.floor() as i32,
        position.z.floor() as i32,
    )
}

/// Integer coordinates of a region.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RegionCoord {
    /// Region index along X
    pub x: i32,
    /// Region index along Z
    pub z: i32,
}

impl RegionCoord {
    /// Creates a region coordinate.
    pub fn new(x: i32, z: i32) -> Self {
        RegionCoord { x, z }
    }

    /// The region that owns the block at `(x, _, z)`.
    pub fn containing(x: i32, z: i32) -> Self {
        RegionCoord {
            x: x.div_euclid(REGION_SIZE),
            z: z.div_euclid(REGION_SIZE),
        }
    }

    /// The region that owns a block position.
    pub fn of_block(position: Point3<i32>) -> Self {
        Self::containing(position.x, position.z)
    }

    /// The lowest corner block of the region.
    pub fn origin(self) -> Point3<i32> {
        Point3::new(self.x * REGION_SIZE, 0, self.z * REGION_SIZE)
    }

    /// Whether a block position falls inside the region's meshed bounds.
    pub fn contains(self, position: Point3<i32>) -> bool {
        Self::of_block(position) == self && (0..WORLD_HEIGHT).contains(&position.y)
    }

    /// Iterates over every cell position of the region, column by column.
    pub fn cells(self) -> impl Iterator<Item = Point3<i32>> {
        let origin = self.origin();
        (0..REGION_SIZE).flat_map(move |dx| {
            (0..REGION_SIZE).flat_map(move |dz| {
                (0..WORLD_HEIGHT)
                    .map(move |y| Point3::new(origin.x + dx, y, origin.z + dz))
            })
        })
    }

    /// The horizontally adjacent regions whose meshes can see a face of `position`.
    ///
    /// Empty unless the block sits on the region border. Neighbours past the
    /// end of the `i32` range don't exist.
    pub fn seam_neighbors(position: Point3<i32>) -> Vec<RegionCoord> {
        let own = Self::of_block(position);
        [
            Vector3::new(1, 0, 0),
            Vector3::new(-1, 0, 0),
            Vector3::new(0, 0, 1),
            Vector3::new(0, 0, -1),
        ]
        .into_iter()
        .filter_map(|offset: Vector3<i32>| {
            Some(Self::containing(
                position.x.checked_add(offset.x)?,
                position.z.checked_add(offset.z)?,
            ))
        })
        .filter(|region| *region != own)
        .collect()
    }

    /// All regions covering the square extent `[-half_width, half_width)` on both axes,
    /// where the half-width is given in regions.
    pub fn extent(half_width: i32) -> impl Iterator<Item = RegionCoord> {
        (-half_width..half_width)
            .flat_map(move |x| (-half_width..half_width).map(move |z| RegionCoord::new(x, z)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(0, 0, 0, 0)]
    #[test_case(15, 15, 0, 0)]
    #[test_case(16, 0, 1, 0)]
    #[test_case(-1, -1, -1, -1)]
    #[test_case(-16, -17, -1, -2)]
    fn regions_floor_towards_negative_infinity(x: i32, z: i32, rx: i32, rz: i32) {
        assert_eq!(RegionCoord::containing(x, z), RegionCoord::new(rx, rz));
    }

    #[test]
    fn block_positions_floor_fractions() {
        assert_eq!(block_position(Point3::new(1.9, -0.1, -2.0)), Point3::new(1, -1, -2));
    }

    #[test]
    fn cells_cover_the_region_once() {
        let region = RegionCoord::new(-1, 2);
        let cells: Vec<_> = region.cells().collect();
        assert_eq!(cells.len(), (REGION_SIZE * REGION_SIZE * WORLD_HEIGHT) as usize);
        assert!(cells.iter().all(|cell| region.contains(*cell)));
    }

    #[test]
    fn only_border_blocks_have_seam_neighbors() {
        assert!(RegionCoord::seam_neighbors(Point3::new(5, 3, 5)).is_empty());
        assert_eq!(
            RegionCoord::seam_neighbors(Point3::new(15, 3, 5)),
            vec![RegionCoord::new(1, 0)]
        );
        assert_eq!(RegionCoord::seam_neighbors(Point3::new(0, 0, 0)).len(), 2);
    }

    #[test]
    fn regions_at_the_ends_of_the_integer_range() {
        let last = RegionCoord::of_block(Point3::new(i32::MAX, 0, i32::MAX));
        assert!(last.contains(Point3::new(i32::MAX, 0, i32::MAX)));
        assert!(last.contains(last.origin()));
        assert!(RegionCoord::seam_neighbors(Point3::new(i32::MAX, 4, 3)).is_empty());

        let first = RegionCoord::of_block(Point3::new(i32::MIN, 0, 0));
        assert_eq!(first.origin().x, i32::MIN);
        assert_eq!(
            RegionCoord::seam_neighbors(Point3::new(i32::MIN, 4, 0)),
            vec![RegionCoord::new(first.x, -1)]
        );
    }

    #[test]
    fn extent_is_square() {
        assert_eq!(RegionCoord::extent(RENDER_DISTANCE).count(), 64);
    }
}
