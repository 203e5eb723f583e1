//! # Engine State Module
//!
//! The core engine module: the voxel world, its region meshes and a headless
//! session that ties them together.
//!
//! ## Key Components
//!
//! * `EngineState` - A session owning the world, a mesh scene and the selected block
//! * `rendering` - Region meshes and their handoff to a renderer
//! * `voxels` - Blocks, storage, terrain generation and picking
//!
//! ## Architecture
//!
//! The player controller is an external collaborator. It reads through
//! `EngineState::world` (block lookups, ground height) and issues discrete
//! [`EditAction`]s along its view ray. `EngineState::tick` forwards every
//! queued mesh replacement to the scene once per frame.

use cgmath::{Point3, Vector3};
use log::debug;

use crate::config::WorldConfig;

use rendering::meshing::SceneMeshes;
use voxels::{block::block_type::BlockKind, raycast::RayHit, world::World};

pub mod rendering;
pub mod voxels;

/// A discrete edit request from the player controller.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum EditAction {
    /// Remove the targeted block
    Break,
    /// Place the selected kind against the targeted face
    Place,
    /// Move the selection through the palette
    Scroll(i32),
}

/// A headless session over one world.
///
/// # Examples
///
/// ```no_run
/// use cgmath::{Point3, Vector3};
/// use voxel_sandbox::{EditAction, EngineState, WorldConfig};
///
/// let mut engine_state = EngineState::new(WorldConfig::default());
/// let eye = Point3::new(0.5, 20.0, 0.5);
/// let down = Vector3::new(0.0, -1.0, 0.0);
///
/// // Main loop
/// loop {
///     engine_state.apply(EditAction::Break, eye, down);
///     engine_state.tick();
/// }
/// ```
pub struct EngineState {
    /// The voxel world
    pub world: World,
    /// The meshes currently displayed, one per region
    pub scene: SceneMeshes,
    /// Kind placed by `EditAction::Place`
    selected: BlockKind,
}

impl EngineState {
    /// Generates a world and installs its initial meshes into a fresh scene.
    pub fn new(config: WorldConfig) -> Self {
        let mut engine_state = EngineState {
            world: World::new(config),
            scene: SceneMeshes::new(),
            selected: BlockKind::GRASS,
        };
        engine_state.tick();
        engine_state
    }

    /// Forwards queued mesh commands to the scene.
    ///
    /// # Returns
    /// The number of commands delivered.
    pub fn tick(&mut self) -> usize {
        self.world.flush_meshes(&mut self.scene)
    }

    /// The block currently under the view ray.
    pub fn pick(&self, eye: Point3<f32>, view: Vector3<f32>) -> Option<RayHit> {
        self.world.raycast(eye, view)
    }

    /// Applies an edit along the view ray.
    ///
    /// # Returns
    /// The hit the edit was applied to. `None` for scrolling, or when the ray
    /// struck nothing and the edit was dropped.
    pub fn apply(
        &mut self,
        action: EditAction,
        eye: Point3<f32>,
        view: Vector3<f32>,
    ) -> Option<RayHit> {
        match action {
            EditAction::Scroll(delta) => {
                self.selected = self.selected.cycle(delta);
                debug!("Selected {}", self.selected.name());
                None
            }
            EditAction::Break => {
                let hit = self.pick(eye, view)?;
                self.world.break_block(&hit);
                Some(hit)
            }
            EditAction::Place => {
                let hit = self.pick(eye, view)?;
                self.world.place_block(&hit, self.selected);
                Some(hit)
            }
        }
    }

    /// The kind `EditAction::Place` currently uses.
    pub fn selected(&self) -> BlockKind {
        self.selected
    }

    /// Tears the world down and releases every scene mesh.
    pub fn shutdown(&mut self) {
        self.world.dispose();
        self.tick();
    }
}
