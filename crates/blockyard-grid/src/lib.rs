//! Tile grid, per-tile plot state, building catalog, and the camera gate.
#![forbid(unsafe_code)]

mod catalog;
mod gate;
mod plots;
mod tile;

pub use catalog::{BuildKind, Catalog, CatalogEntry, EntryId};
pub use gate::CameraGate;
pub use plots::{PlacedObject, PlotStore, Tint};
pub use tile::{Tile, TileGrid, TileId};
