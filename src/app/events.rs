use std::time::Instant;

use raylib::prelude::*;

use blockyard_grid::EntryId;

use super::state::App;
use crate::camera::DragUpdate;
use crate::event::{Event, EventEnvelope};

const SELECT_KEYS: [KeyboardKey; 6] = [
    KeyboardKey::KEY_ONE,
    KeyboardKey::KEY_TWO,
    KeyboardKey::KEY_THREE,
    KeyboardKey::KEY_FOUR,
    KeyboardKey::KEY_FIVE,
    KeyboardKey::KEY_SIX,
];

impl App {
    /// Samples this frame's platform input: throttled pointer moves, camera
    /// drag (which arms the gate synchronously), click intents, and catalog
    /// selection keys.
    pub(super) fn collect_input(&mut self, rl: &mut RaylibHandle) {
        let now = Instant::now();
        let pos = rl.get_mouse_position();
        if pos != self.gs.pointer {
            self.move_throttle.submit(pos, now);
        }
        if let Some(sample) = self.move_throttle.poll(now) {
            self.gs.pointer = sample;
        }

        match self.cam.update(rl) {
            DragUpdate::Moving => self.gs.gate.begin_move(),
            DragUpdate::Released => {
                // One extra tick of gating absorbs the click that ends a drag.
                self.queue.emit_after(1, Event::CameraSettled);
            }
            DragUpdate::None => {}
        }

        if rl.is_mouse_button_released(MouseButton::MOUSE_BUTTON_LEFT) {
            self.queue.emit_now(Event::PlaceRequested);
        }
        if rl.is_mouse_button_released(MouseButton::MOUSE_BUTTON_RIGHT) {
            self.queue.emit_now(Event::RemoveRequested);
        }

        for (i, key) in SELECT_KEYS.iter().enumerate() {
            if rl.is_key_pressed(*key) {
                self.queue.emit_now(Event::EntrySelected { id: EntryId(i) });
            }
        }
        if rl.is_key_pressed(KeyboardKey::KEY_Q) {
            self.should_quit = true;
        }
    }

    pub(super) fn handle_event(&mut self, env: EventEnvelope) {
        Self::log_event(self.queue.now, env.id, &env.kind);
        match env.kind {
            Event::Tick => {}
            Event::PlaceRequested => self.handle_place_requested(),
            Event::RemoveRequested => self.handle_remove_requested(),
            Event::EntrySelected { id } => {
                if !self.gs.catalog.select(id) {
                    log::debug!(target: "events", "selection {:?} out of range", id);
                }
            }
            Event::CameraSettled => self.gs.gate.settle(),
        }
    }

    fn handle_place_requested(&mut self) {
        if self.gs.gate.is_moving() {
            return;
        }
        let Some(tile) = self.gs.plots.active_tile() else {
            return;
        };
        let Some(entry) = self.gs.catalog.selected_id() else {
            log::debug!(target: "events", "place skipped: no catalog selection");
            return;
        };
        self.gs.plots.push(tile, entry, &self.gs.gate);
    }

    fn handle_remove_requested(&mut self) {
        if self.gs.gate.is_moving() {
            return;
        }
        let Some(tile) = self.gs.plots.active_tile() else {
            return;
        };
        self.gs.plots.pop(tile, &self.gs.gate);
    }

    fn log_event(tick: u64, ev_id: u64, ev: &Event) {
        use Event as E;
        match ev {
            E::Tick => log::trace!(target: "events", "[tick {} ev {}] Tick", tick, ev_id),
            E::PlaceRequested => {
                log::debug!(target: "events", "[tick {} ev {}] PlaceRequested", tick, ev_id)
            }
            E::RemoveRequested => {
                log::debug!(target: "events", "[tick {} ev {}] RemoveRequested", tick, ev_id)
            }
            E::EntrySelected { id } => {
                log::info!(target: "events", "[tick {} ev {}] EntrySelected {:?}", tick, ev_id, id)
            }
            E::CameraSettled => {
                log::debug!(target: "events", "[tick {} ev {}] CameraSettled", tick, ev_id)
            }
        }
    }
}
