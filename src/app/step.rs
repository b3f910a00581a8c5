use raylib::prelude::*;

use super::state::App;

/// Angular rate of the orbiting light, radians per second.
const ORBIT_RATE: f32 = 0.05;
const ORBIT_RADIUS: f32 = 100.0;
const ORBIT_HEIGHT: f32 = 100.0;

impl App {
    /// One animation tick. Order matters: input is sampled first, so picking
    /// sees the pointer sample as of tick start; queued intents are handled
    /// before the highlight pass; the highlight pass itself runs every tick,
    /// even while the camera is moving.
    pub fn step(&mut self, rl: &mut RaylibHandle) {
        self.queue.emit_now(crate::event::Event::Tick);
        self.collect_input(rl);

        while let Some(env) = self.queue.pop_ready() {
            self.handle_event(env);
        }

        let viewport = blockyard_pick::Viewport {
            width: rl.get_screen_width() as f32,
            height: rl.get_screen_height() as f32,
        };
        let hovered = blockyard_pick::pick(
            (self.gs.pointer.x, self.gs.pointer.y),
            viewport,
            self.cam.to_view(),
            &self.gs.grid,
        );
        self.gs.hovered = hovered;
        self.gs.plots.refresh_highlight(hovered);

        let t = self.gs.started.elapsed().as_secs_f32();
        self.gs.orbit_pos = Vector3::new(
            (t * ORBIT_RATE).sin() * ORBIT_RADIUS,
            ORBIT_HEIGHT,
            (t * ORBIT_RATE).cos() * ORBIT_RADIUS,
        );

        self.queue.advance_tick();
    }
}
