use raylib::prelude::*;

use blockyard_grid::Tint;

use super::state::App;
use crate::conv::vec3_to_rl;

const BACKGROUND: Color = Color {
    r: 0x77,
    g: 0x77,
    b: 0x77,
    a: 0xff,
};
const ACTIVE_TINT: Color = Color::GREEN;
const PANEL_COLOR: Color = Color {
    r: 0xcc,
    g: 0xcc,
    b: 0xcc,
    a: 0xff,
};

impl App {
    pub fn render(&mut self, rl: &mut RaylibHandle, thread: &RaylibThread) {
        let cam3d = self.cam.to_camera3d();
        let unit = self.gs.plots.unit();
        let mut d = rl.begin_drawing(thread);
        d.clear_background(BACKGROUND);
        {
            let mut d3 = d.begin_mode3D(cam3d);
            for tile in self.gs.grid.tiles() {
                let tint = match self.gs.plots.tint(tile.id) {
                    Tint::Active => ACTIVE_TINT,
                    Tint::Default => Color::WHITE,
                };
                let base = vec3_to_rl(tile.position);
                d3.draw_model(&self.tile_model, base, 1.0, tint);
                // A tile's tint covers its whole stack; each block carries a
                // decorative panel just above its top face.
                for obj in self.gs.plots.stack(tile.id) {
                    let pos = base + Vector3::new(0.0, obj.y_offset, 0.0);
                    if let Some(model) = self.block_models.get(obj.entry.0) {
                        d3.draw_model(model, pos, 1.0, tint);
                    }
                    d3.draw_plane(
                        pos + Vector3::new(0.0, obj.panel_offset, 0.0),
                        Vector2::new(unit, unit),
                        PANEL_COLOR,
                    );
                }
            }
            d3.draw_sphere(self.gs.orbit_pos, 5.0, Color::GOLD);
        }

        let selected = self
            .gs
            .catalog
            .selected()
            .map(|e| e.name.as_str())
            .unwrap_or("none");
        let hovered = match self.gs.hovered.and_then(|id| self.gs.grid.get(id)) {
            Some(t) => format!("tile {},{}", t.row, t.col),
            None => "-".to_string(),
        };
        d.draw_text(
            &format!("build: {} (keys 1-6)", selected),
            12,
            12,
            20,
            Color::RAYWHITE,
        );
        d.draw_text(
            &format!(
                "placed: {} | hover: {} | textures: {}",
                self.gs.plots.placed_total(),
                hovered,
                self.tex_cache.map.len()
            ),
            12,
            36,
            20,
            Color::RAYWHITE,
        );
        d.draw_text(
            "LMB place | RMB remove | drag rotate | wheel zoom | Q quit",
            12,
            60,
            10,
            Color::LIGHTGRAY,
        );
        d.draw_fps(12, 76);
    }
}
