#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![warn(rustdoc::invalid_rust_codeblocks)]

//! # Voxel Sandbox
//!
//! A block-world core: procedurally generated terrain stored as a sparse grid
//! of unit cubes, per-region surface meshes and ray picking for editing.
//!
//! This crate owns the world and its meshes. Drawing them, and moving a player
//! through them, belongs to the collaborators that consume its output.
//!
//! ## Key Modules
//!
//! * `config` - World configuration and its JSON loader
//! * `engine_state` - The voxel world, region meshing and the headless session
//!
//! ## Architecture
//!
//! The engine follows a modular architecture with clear separation between:
//! * Block catalog and materials
//! * Terrain generation from seeded value noise
//! * Sparse storage with synchronous region rebuilds
//! * Mesh handoff to a renderer through queued commands
//!
//! ## Usage
//!
//! ```no_run
//! fn main() {
//!     voxel_sandbox::run();
//! }
//! ```

use std::env;

use cgmath::{Point3, Vector3};
use log::{info, warn};

pub mod config;
pub mod engine_state;

pub use config::{ConfigError, WorldConfig};
pub use engine_state::{
    rendering::{Mesh, MeshCommand, MeshSink, RegionMesher, SceneMeshes, Vertex},
    voxels::{
        block::{BlockKind, BlockSide, MaterialSet, Rgb},
        noise_source::NoiseSource,
        raycast::RayHit,
        region::RegionCoord,
        world::{BlockAccess, BlockStore, World},
    },
    EditAction, EngineState,
};

/// Environment variable naming a JSON world configuration file.
pub const CONFIG_ENV: &str = "VOXEL_CONFIG";

/// Generates a world, runs one break and place edit below the spawn point
/// and logs what happened.
pub fn run() {
    let mut log_builder = env_logger::Builder::new();
    log_builder
        .target(env_logger::Target::Stdout)
        .parse_env("RUST_LOG")
        .init();

    info!("Logger initialized");

    let config = match env::var(CONFIG_ENV) {
        Ok(path) => WorldConfig::load(&path).unwrap_or_else(|error| {
            warn!("Falling back to the default world: {}", error);
            WorldConfig::default()
        }),
        Err(_) => WorldConfig::default(),
    };

    let spawn = Point3::new(0.5, 20.0, 0.5);
    let mut engine_state = EngineState::new(config);
    info!(
        "World ready: {} blocks in {} region meshes, {} triangles",
        engine_state.world.block_count(),
        engine_state.scene.live(),
        engine_state.scene.triangle_count()
    );

    let ground = engine_state.world.ground_height(spawn.x, spawn.y, spawn.z);
    info!("Ground at spawn is {}", ground);

    let down = Vector3::new(0.0, -1.0, 0.0);
    match engine_state.apply(EditAction::Break, spawn, down) {
        Some(hit) => info!("Broke {} at {:?}", hit.block.name(), hit.position),
        None => info!("Nothing below the spawn point"),
    }
    if let Some(hit) = engine_state.apply(EditAction::Place, spawn, down) {
        info!(
            "Placed {} at {:?}",
            engine_state.selected().name(),
            hit.place_position()
        );
    }

    let delivered = engine_state.tick();
    info!("Delivered {} mesh commands", delivered);

    engine_state.shutdown();
}
