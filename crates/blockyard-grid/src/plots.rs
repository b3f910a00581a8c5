use hashbrown::HashMap;

use crate::catalog::EntryId;
use crate::gate::CameraGate;
use crate::tile::TileId;

/// Visual color state applied by the highlight pass. The renderer maps
/// `Active` to the hover color and cascades a tile's tint to its stack.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Tint {
    #[default]
    Default,
    Active,
}

/// A building block stacked on a tile. Offsets are computed once at push
/// time and never recomputed afterwards.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlacedObject {
    pub entry: EntryId,
    /// Position within the owning stack at push time (0 = first block).
    pub slot: usize,
    /// Vertical offset of the block center above the tile, `(slot + 1) * unit`.
    pub y_offset: f32,
    /// Local offset of the decorative top panel above the block center.
    pub panel_offset: f32,
}

#[derive(Default, Debug)]
struct PlotEntry {
    active: bool,
    tint: Tint,
    stack: Vec<PlacedObject>,
}

/// Side table of per-tile game state keyed by tile id: hover flag, tint, and
/// the LIFO stack of placed objects. Tiles without entries are implicitly
/// inactive with an empty stack.
pub struct PlotStore {
    unit: f32,
    entries: HashMap<TileId, PlotEntry>,
    active: Option<TileId>,
}

impl PlotStore {
    pub fn new(unit: f32) -> Self {
        Self {
            unit,
            entries: HashMap::new(),
            active: None,
        }
    }

    #[inline]
    pub fn unit(&self) -> f32 {
        self.unit
    }

    /// Pushes a block onto `tile`'s stack. No-op while the camera gate is
    /// moving. Returns the new top of the stack.
    pub fn push(
        &mut self,
        tile: TileId,
        entry: EntryId,
        gate: &CameraGate,
    ) -> Option<&PlacedObject> {
        if gate.is_moving() {
            log::debug!(target: "plots", "push on {:?} skipped: camera moving", tile);
            return None;
        }
        let plot = self.entries.entry(tile).or_default();
        let slot = plot.stack.len();
        let obj = PlacedObject {
            entry,
            slot,
            y_offset: (slot as f32 + 1.0) * self.unit,
            panel_offset: self.unit * 0.5 + 0.1,
        };
        plot.stack.push(obj);
        log::info!(
            target: "plots",
            "placed entry {:?} on {:?} at slot {} (y={})",
            entry,
            tile,
            slot,
            obj.y_offset
        );
        plot.stack.last()
    }

    /// Removes and returns the most recently placed block on `tile`. No-op on
    /// an empty stack or while the camera gate is moving.
    pub fn pop(&mut self, tile: TileId, gate: &CameraGate) -> Option<PlacedObject> {
        if gate.is_moving() {
            log::debug!(target: "plots", "pop on {:?} skipped: camera moving", tile);
            return None;
        }
        let obj = self.entries.get_mut(&tile)?.stack.pop()?;
        log::info!(
            target: "plots",
            "removed entry {:?} from {:?} slot {}",
            obj.entry,
            tile,
            obj.slot
        );
        Some(obj)
    }

    #[inline]
    pub fn stack(&self, tile: TileId) -> &[PlacedObject] {
        self.entries
            .get(&tile)
            .map(|p| p.stack.as_slice())
            .unwrap_or(&[])
    }

    #[inline]
    pub fn stack_len(&self, tile: TileId) -> usize {
        self.stack(tile).len()
    }

    /// Total placed blocks across all tiles.
    pub fn placed_total(&self) -> usize {
        self.entries.values().map(|p| p.stack.len()).sum()
    }

    #[inline]
    pub fn is_active(&self, tile: TileId) -> bool {
        self.entries.get(&tile).map(|p| p.active).unwrap_or(false)
    }

    #[inline]
    pub fn tint(&self, tile: TileId) -> Tint {
        self.entries.get(&tile).map(|p| p.tint).unwrap_or_default()
    }

    /// The single hovered tile, if any.
    #[inline]
    pub fn active_tile(&self) -> Option<TileId> {
        self.active
    }

    /// Highlight pass: marks `hovered` active with the hover tint and reverts
    /// every other tile to default. A tile's tint covers its whole stack.
    /// Idempotent, and runs every tick regardless of camera movement.
    pub fn refresh_highlight(&mut self, hovered: Option<TileId>) {
        if self.active != hovered {
            log::trace!(target: "plots", "hover {:?} -> {:?}", self.active, hovered);
        }
        for plot in self.entries.values_mut() {
            plot.active = false;
            plot.tint = Tint::Default;
        }
        if let Some(tile) = hovered {
            let plot = self.entries.entry(tile).or_default();
            plot.active = true;
            plot.tint = Tint::Active;
        }
        self.active = hovered;
    }

    /// Number of tiles currently flagged active. Always 0 or 1 after a
    /// highlight pass.
    pub fn active_count(&self) -> usize {
        self.entries.values().filter(|p| p.active).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const UNIT: f32 = 10.0;

    fn store() -> PlotStore {
        PlotStore::new(UNIT)
    }

    #[test]
    fn push_offsets_grow_with_stack_position() {
        let mut plots = store();
        let gate = CameraGate::new();
        let t = TileId(7);
        let first = plots.push(t, EntryId(0), &gate).copied().unwrap();
        assert_eq!(first.slot, 0);
        assert_eq!(first.y_offset, UNIT);
        let second = plots.push(t, EntryId(1), &gate).copied().unwrap();
        assert_eq!(second.slot, 1);
        assert_eq!(second.y_offset, 2.0 * UNIT);
        // Existing objects keep the offset they were pushed with.
        assert_eq!(plots.stack(t)[0].y_offset, UNIT);
    }

    #[test]
    fn push_then_pop_round_trips_and_top_is_gone() {
        let mut plots = store();
        let gate = CameraGate::new();
        let t = TileId(0);
        plots.push(t, EntryId(0), &gate);
        let before = plots.stack_len(t);
        let top = plots.push(t, EntryId(2), &gate).copied().unwrap();
        let popped = plots.pop(t, &gate).unwrap();
        assert_eq!(popped, top);
        assert_eq!(plots.stack_len(t), before);
        assert!(plots.stack(t).iter().all(|o| *o != top));
    }

    #[test]
    fn pop_on_empty_stack_is_a_noop() {
        let mut plots = store();
        let gate = CameraGate::new();
        assert!(plots.pop(TileId(3), &gate).is_none());
        assert_eq!(plots.stack_len(TileId(3)), 0);
    }

    #[test]
    fn gate_suppresses_push_and_pop() {
        let mut plots = store();
        let mut gate = CameraGate::new();
        let t = TileId(1);
        plots.push(t, EntryId(0), &gate);
        gate.begin_move();
        assert!(plots.push(t, EntryId(0), &gate).is_none());
        assert!(plots.pop(t, &gate).is_none());
        assert_eq!(plots.stack_len(t), 1);
        gate.settle();
        assert!(plots.push(t, EntryId(0), &gate).is_some());
        assert_eq!(plots.stack_len(t), 2);
    }

    #[test]
    fn stack_length_tracks_successful_operations() {
        let mut plots = store();
        let mut gate = CameraGate::new();
        let t = TileId(5);
        let mut pushes = 0usize;
        let mut pops = 0usize;
        for i in 0..4 {
            if plots.push(t, EntryId(i), &gate).is_some() {
                pushes += 1;
            }
        }
        gate.begin_move();
        plots.push(t, EntryId(9), &gate); // suppressed
        gate.settle();
        if plots.pop(t, &gate).is_some() {
            pops += 1;
        }
        assert_eq!(plots.stack_len(t), pushes - pops);
    }

    #[test]
    fn highlight_marks_exactly_one_tile() {
        let mut plots = store();
        let gate = CameraGate::new();
        plots.push(TileId(1), EntryId(0), &gate);
        plots.push(TileId(2), EntryId(0), &gate);
        plots.refresh_highlight(Some(TileId(2)));
        assert_eq!(plots.active_count(), 1);
        assert!(plots.is_active(TileId(2)));
        assert_eq!(plots.active_tile(), Some(TileId(2)));
        plots.refresh_highlight(None);
        assert_eq!(plots.active_count(), 0);
        assert_eq!(plots.active_tile(), None);
    }

    #[test]
    fn highlight_is_idempotent() {
        let mut plots = store();
        plots.refresh_highlight(Some(TileId(9)));
        let tint = plots.tint(TileId(9));
        plots.refresh_highlight(Some(TileId(9)));
        assert_eq!(plots.tint(TileId(9)), tint);
        assert_eq!(plots.active_count(), 1);
        assert!(plots.is_active(TileId(9)));
    }

    #[test]
    fn highlight_moves_between_tiles() {
        let mut plots = store();
        plots.refresh_highlight(Some(TileId(0)));
        plots.refresh_highlight(Some(TileId(1)));
        assert!(!plots.is_active(TileId(0)));
        assert_eq!(plots.tint(TileId(0)), Tint::Default);
        assert!(plots.is_active(TileId(1)));
        assert_eq!(plots.tint(TileId(1)), Tint::Active);
    }

    #[test]
    fn hovered_tile_tint_covers_its_stack() {
        let mut plots = store();
        let gate = CameraGate::new();
        plots.push(TileId(4), EntryId(0), &gate);
        plots.push(TileId(4), EntryId(1), &gate);
        plots.refresh_highlight(Some(TileId(4)));
        assert_eq!(plots.tint(TileId(4)), Tint::Active);
        assert_eq!(plots.stack_len(TileId(4)), 2);
    }
}
