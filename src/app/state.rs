use std::time::{Duration, Instant};

use raylib::core::models::Model;
use raylib::prelude::*;

use blockyard_grid::{CameraGate, Catalog, PlotStore, TileGrid, TileId};

use crate::camera::OrbitCamera;
use crate::event::EventQueue;
use crate::texture_cache::TextureCache;
use crate::throttle::Throttle;

/// Minimum interval between applied pointer-move samples.
pub(crate) const POINTER_THROTTLE: Duration = Duration::from_millis(10);

/// All mutable session state, with one writer per field: input collection
/// writes `pointer` and the gate, the stack operations write `plots`' stacks,
/// and the highlight pass writes the active flags and `hovered`.
pub struct SessionState {
    pub grid: TileGrid,
    pub plots: PlotStore,
    pub catalog: Catalog,
    pub gate: CameraGate,
    /// Last applied pointer sample, in surface coordinates.
    pub pointer: Vector2,
    pub hovered: Option<TileId>,
    /// Wall-clock origin of the orbit animation.
    pub started: Instant,
    /// Current position of the orbiting light and its marker sphere.
    pub orbit_pos: Vector3,
}

pub struct App {
    pub gs: SessionState,
    pub queue: EventQueue,
    pub cam: OrbitCamera,
    pub should_quit: bool,
    pub(crate) move_throttle: Throttle<Vector2>,
    pub(crate) tex_cache: TextureCache,
    pub(crate) tile_model: Model,
    /// One cube model per catalog entry, same order as the catalog.
    pub(crate) block_models: Vec<Model>,
}
