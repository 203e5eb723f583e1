//! # Terrain Module
//!
//! Procedural population of the initial world: a noise driven height field,
//! layered columns, water in low lying areas and randomly placed trees.
//!
//! Only the height field is deterministic. Tree placement and canopy shape come
//! from a `fastrand` generator that is seeded from entropy unless the config
//! pins `decoration_seed`.

use std::collections::HashMap;

use cgmath::Point3;

use crate::config::WorldConfig;

use super::{block::BlockKind, noise_source::NoiseSource, region::REGION_SIZE};

/// Height every column is offset around.
pub const BASE_HEIGHT: f64 = 8.0;
/// Maximum deviation of the height field from [`BASE_HEIGHT`].
pub const HEIGHT_AMPLITUDE: f64 = 6.0;
/// Water fills every cell below this layer that the terrain leaves empty.
pub const SEA_LEVEL: i32 = 7;
/// Columns shorter than this are topped with sand instead of grass.
pub const BEACH_HEIGHT: i32 = 8;
/// Number of stone layers at the bottom of each column.
pub const STONE_LAYERS: i32 = 2;

const BROAD_SCALE: f64 = 0.02;
const DETAIL_SCALE: f64 = 0.05;
const BROAD_WEIGHT: f64 = 0.7;
const DETAIL_WEIGHT: f64 = 0.3;
const MIN_TRUNK_HEIGHT: i32 = 4;
const CANOPY_REACH: i32 = 3;

/// Populates block storage with terrain and decoration.
pub struct TerrainGenerator {
    noise: NoiseSource,
    rng: fastrand::Rng,
    tree_chance: f64,
    leaf_fill: f64,
}

impl TerrainGenerator {
    /// Creates a generator from a world configuration.
    pub fn new(config: &WorldConfig) -> Self {
        let rng = match config.decoration_seed {
            Some(seed) => fastrand::Rng::with_seed(seed),
            None => fastrand::Rng::new(),
        };
        TerrainGenerator {
            noise: NoiseSource::new(config.noise_seed),
            rng,
            tree_chance: config.tree_chance,
            leaf_fill: config.leaf_fill,
        }
    }

    /// The height-field value of the column at `(x, z)`.
    ///
    /// Two octaves of value noise blended 70/30. Pure: repeated calls with the
    /// same coordinates always agree.
    pub fn terrain_height(&self, x: i32, z: i32) -> i32 {
        let (x, z) = (x as f64, z as f64);
        let broad = self.noise.noise_2d(x * BROAD_SCALE, z * BROAD_SCALE);
        let detail = self.noise.noise_2d(x * DETAIL_SCALE, z * DETAIL_SCALE);
        let combined = broad * BROAD_WEIGHT + detail * DETAIL_WEIGHT;
        (BASE_HEIGHT + combined * HEIGHT_AMPLITUDE).floor() as i32
    }

    /// The kind of the terrain layer at `y` in a column of the given height.
    pub fn layer_kind(y: i32, height: i32) -> BlockKind {
        if y < STONE_LAYERS {
            BlockKind::STONE
        } else if y < height - 1 {
            BlockKind::DIRT
        } else if height < BEACH_HEIGHT {
            BlockKind::SAND
        } else {
            BlockKind::GRASS
        }
    }

    /// Fills the square `[-half_width, half_width)` extent, in blocks, centered on the origin.
    ///
    /// # Returns
    /// The number of trees that were grown.
    pub fn populate(
        &mut self,
        blocks: &mut HashMap<Point3<i32>, BlockKind>,
        half_width: i32,
    ) -> usize {
        let mut trees = 0;
        for x in -half_width..half_width {
            for z in -half_width..half_width {
                if self.populate_column(blocks, x, z) {
                    trees += 1;
                }
            }
        }
        trees
    }

    /// Fills a single column, returning whether a tree was grown on it.
    pub fn populate_column(
        &mut self,
        blocks: &mut HashMap<Point3<i32>, BlockKind>,
        x: i32,
        z: i32,
    ) -> bool {
        let height = self.terrain_height(x, z);

        for y in 0..height {
            blocks.insert(Point3::new(x, y, z), Self::layer_kind(y, height));
        }

        for y in height.max(0)..SEA_LEVEL {
            blocks.insert(Point3::new(x, y, z), BlockKind::WATER);
        }

        if height > BEACH_HEIGHT && self.rng.f64() < self.tree_chance {
            self.grow_tree(blocks, Point3::new(x, height, z));
            return true;
        }
        false
    }

    /// Grows a trunk upward from `base` and tops it with a leaf canopy.
    ///
    /// The canopy is every cell within Manhattan distance 3 of the cell above the
    /// trunk, limited to a 5x4x5 box, filled with `leaf_fill` probability. Cells of
    /// the trunk itself are never replaced by leaves.
    pub fn grow_tree(&mut self, blocks: &mut HashMap<Point3<i32>, BlockKind>, base: Point3<i32>) {
        let trunk_height = MIN_TRUNK_HEIGHT + self.rng.i32(0..2);

        for dy in 0..trunk_height {
            blocks.insert(Point3::new(base.x, base.y + dy, base.z), BlockKind::WOOD);
        }

        let canopy_y = base.y + trunk_height;
        for dx in -2i32..=2 {
            for dz in -2i32..=2 {
                for dy in -2i32..=1 {
                    if dx == 0 && dz == 0 && dy <= 0 {
                        continue;
                    }
                    let distance = dx.abs() + dz.abs() + dy.abs();
                    if distance <= CANOPY_REACH && self.rng.f64() < self.leaf_fill {
                        blocks.insert(
                            Point3::new(base.x + dx, canopy_y + dy, base.z + dz),
                            BlockKind::LEAVES,
                        );
                    }
                }
            }
        }
    }
}

/// Converts a half-width in regions into a half-width in blocks.
pub fn extent_in_blocks(render_distance: i32) -> i32 {
    render_distance.saturating_mul(REGION_SIZE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn generator(tree_chance: f64, leaf_fill: f64) -> TerrainGenerator {
        TerrainGenerator::new(&WorldConfig {
            decoration_seed: Some(1234),
            tree_chance,
            leaf_fill,
            ..Default::default()
        })
    }

    #[test]
    fn heights_are_deterministic_and_bounded() {
        let a = generator(0.0, 0.0);
        let b = generator(0.5, 0.5);
        for x in -40..40 {
            for z in -40..40 {
                let h = a.terrain_height(x, z);
                assert_eq!(h, a.terrain_height(x, z));
                assert_eq!(h, b.terrain_height(x, z));
                assert!((2..=14).contains(&h), "height {} out of range", h);
            }
        }
    }

    #[test_case(0, 10, BlockKind::STONE)]
    #[test_case(1, 10, BlockKind::STONE)]
    #[test_case(2, 10, BlockKind::DIRT)]
    #[test_case(8, 10, BlockKind::DIRT)]
    #[test_case(9, 10, BlockKind::GRASS)]
    #[test_case(7, 8, BlockKind::GRASS)]
    #[test_case(6, 7, BlockKind::SAND)]
    #[test_case(1, 2, BlockKind::STONE)]
    fn layers_follow_depth(y: i32, height: i32, expected: BlockKind) {
        assert_eq!(TerrainGenerator::layer_kind(y, height), expected);
    }

    #[test]
    fn columns_are_filled_to_their_height_with_water_above_low_ground() {
        let mut generator = generator(0.0, 0.0);
        let mut blocks = HashMap::new();
        for x in -20..20 {
            let height = generator.terrain_height(x, 3);
            generator.populate_column(&mut blocks, x, 3);
            for y in 0..height {
                assert_eq!(
                    blocks.get(&Point3::new(x, y, 3)),
                    Some(&TerrainGenerator::layer_kind(y, height))
                );
            }
            for y in height..SEA_LEVEL {
                assert_eq!(blocks.get(&Point3::new(x, y, 3)), Some(&BlockKind::WATER));
            }
            let top = height.max(SEA_LEVEL);
            assert_eq!(blocks.get(&Point3::new(x, top, 3)), None);
        }
    }

    #[test]
    fn trees_keep_their_trunk_clear_of_leaves() {
        let mut generator = generator(1.0, 1.0);
        let mut blocks = HashMap::new();
        let base = Point3::new(0, 10, 0);
        generator.grow_tree(&mut blocks, base);

        let trunk: Vec<_> = (0..6)
            .map(|dy| blocks.get(&Point3::new(0, 10 + dy, 0)).copied())
            .collect();
        assert_eq!(&trunk[..4], &[Some(BlockKind::WOOD); 4]);
        // Either a fifth trunk block or the hollow canopy center above a 4-high trunk.
        assert!(matches!(trunk[4], Some(BlockKind::WOOD) | None));

        let leaves = blocks.values().filter(|kind| **kind == BlockKind::LEAVES).count();
        // Full canopy: the Manhattan ball clipped to the box, minus the trunk column.
        assert_eq!(leaves, 49);
    }

    #[test]
    fn trees_grow_only_on_high_ground() {
        let mut generator = generator(1.0, 0.0);
        let mut blocks = HashMap::new();
        let trees = generator.populate(&mut blocks, 32);

        let mut high_columns = 0;
        for x in -32..32 {
            for z in -32..32 {
                let height = generator.terrain_height(x, z);
                let column_wood = (0..=height + 6)
                    .filter(|y| blocks.get(&Point3::new(x, *y, z)) == Some(&BlockKind::WOOD))
                    .count();
                if height > BEACH_HEIGHT {
                    high_columns += 1;
                    assert_eq!(blocks.get(&Point3::new(x, height, z)), Some(&BlockKind::WOOD));
                    assert!((4..=5).contains(&column_wood));
                } else {
                    assert_eq!(column_wood, 0, "tree on ({}, {}) of height {}", x, z, height);
                }
                if height < SEA_LEVEL {
                    let surface = blocks.get(&Point3::new(x, SEA_LEVEL - 1, z));
                    assert_eq!(surface, Some(&BlockKind::WATER));
                    assert_eq!(blocks.get(&Point3::new(x, SEA_LEVEL, z)), None);
                }
            }
        }
        assert_eq!(trees, high_columns);
    }

    #[test]
    fn extent_saturates_instead_of_overflowing() {
        assert_eq!(extent_in_blocks(4), 64);
        assert_eq!(extent_in_blocks(i32::MAX), i32::MAX);
    }

    #[test]
    fn trees_never_grow_with_zero_chance() {
        let mut generator = generator(0.0, 1.0);
        let mut blocks = HashMap::new();
        assert_eq!(generator.populate(&mut blocks, 32), 0);
        assert!(!blocks.values().any(|kind| matches!(kind, BlockKind::WOOD | BlockKind::LEAVES)));
    }
}
