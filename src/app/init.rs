use std::error::Error;
use std::path::Path;
use std::time::Instant;

use raylib::core::models::Model;
use raylib::prelude::*;

use blockyard_grid::{CameraGate, Catalog, PlotStore, TileGrid};

use super::state::{App, POINTER_THROTTLE, SessionState};
use crate::camera::OrbitCamera;
use crate::event::EventQueue;
use crate::texture_cache::TextureCache;
use crate::throttle::Throttle;

/// Edge length of a tile cube and the vertical stacking step.
pub(crate) const UNIT: f32 = 10.0;

impl App {
    pub fn new(
        rl: &mut RaylibHandle,
        thread: &RaylibThread,
        args: &crate::Args,
    ) -> Result<Self, Box<dyn Error>> {
        let assets_root = crate::assets::resolve_assets_root(args.assets.clone());
        log::info!("assets root: {}", assets_root.display());
        let catalog = Catalog::load_from_path(&crate::assets::catalog_path(&assets_root))?;

        let grid = TileGrid::new(args.grid, args.grid, UNIT);
        let plots = PlotStore::new(UNIT);

        let mut tex_cache = TextureCache::new();
        let tile_model = cube_model(
            rl,
            thread,
            &mut tex_cache,
            &crate::assets::texture_path(&assets_root, catalog.ground_texture()),
        )?;
        let mut block_models = Vec::with_capacity(catalog.entries().len());
        for entry in catalog.entries() {
            block_models.push(cube_model(
                rl,
                thread,
                &mut tex_cache,
                &crate::assets::texture_path(&assets_root, &entry.texture),
            )?);
        }

        let cam = OrbitCamera::new(Vector3::new(0.0, 200.0, 80.0), Vector3::zero());

        Ok(Self {
            gs: SessionState {
                grid,
                plots,
                catalog,
                gate: CameraGate::new(),
                pointer: Vector2::zero(),
                hovered: None,
                started: Instant::now(),
                orbit_pos: Vector3::zero(),
            },
            queue: EventQueue::new(),
            cam,
            should_quit: false,
            move_throttle: Throttle::new(POINTER_THROTTLE),
            tex_cache,
            tile_model,
            block_models,
        })
    }
}

/// Uploads a unit cube model with the texture at `path` as its albedo.
/// A texture that fails to load leaves the model untextured.
fn cube_model(
    rl: &mut RaylibHandle,
    thread: &RaylibThread,
    tex_cache: &mut TextureCache,
    path: &Path,
) -> Result<Model, Box<dyn Error>> {
    let mesh = Mesh::gen_mesh_cube(thread, UNIT, UNIT, UNIT);
    let mut model = rl.load_model_from_mesh(thread, unsafe { mesh.make_weak() })?;
    if let Some(mat) = model.materials_mut().get_mut(0) {
        if let Some(tex) = tex_cache.load(rl, thread, path) {
            mat.set_material_texture(MaterialMapIndex::MATERIAL_MAP_ALBEDO, tex);
        }
    }
    Ok(model)
}
