use blockyard_geom::{Aabb, Vec3};

/// Dense index of a tile within its grid; stable for the session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TileId(pub u32);

/// One ground cell. Position and bounds are fixed at grid construction.
#[derive(Clone, Copy, Debug)]
pub struct Tile {
    pub id: TileId,
    pub row: u32,
    pub col: u32,
    /// Center of the ground cube in world space.
    pub position: Vec3,
}

impl Tile {
    /// Bounding box of the ground cube, used for picking.
    #[inline]
    pub fn bounds(&self, unit: f32) -> Aabb {
        Aabb::from_center_size(self.position, Vec3::new(unit, unit, unit))
    }
}

/// Fixed set of ground tiles laid out centered on the origin.
pub struct TileGrid {
    tiles: Vec<Tile>,
    rows: u32,
    cols: u32,
    unit: f32,
}

impl TileGrid {
    pub fn new(rows: u32, cols: u32, unit: f32) -> Self {
        let off_x = unit * (cols as f32) * 0.5;
        let off_z = unit * (rows as f32) * 0.5;
        let mut tiles = Vec::with_capacity((rows * cols) as usize);
        for row in 0..rows {
            for col in 0..cols {
                let id = TileId(row * cols + col);
                tiles.push(Tile {
                    id,
                    row,
                    col,
                    position: Vec3::new(
                        (col as f32) * unit - off_x,
                        0.0,
                        (row as f32) * unit - off_z,
                    ),
                });
            }
        }
        Self {
            tiles,
            rows,
            cols,
            unit,
        }
    }

    #[inline]
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    #[inline]
    pub fn get(&self, id: TileId) -> Option<&Tile> {
        self.tiles.get(id.0 as usize)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    #[inline]
    pub fn rows(&self) -> u32 {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> u32 {
        self.cols
    }

    #[inline]
    pub fn unit(&self) -> f32 {
        self.unit
    }
}
