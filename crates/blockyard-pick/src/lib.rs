//! Pointer picking: screen position -> camera ray -> nearest ground tile.
//!
//! Only tile ground cubes participate in the intersection test; stacked
//! blocks are never directly pickable.
#![forbid(unsafe_code)]

use blockyard_geom::{Ray, Vec3, ray_aabb_intersect};
use blockyard_grid::{TileGrid, TileId};

/// Render surface dimensions in pixels.
#[derive(Clone, Copy, Debug)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    #[inline]
    pub fn aspect(self) -> f32 {
        self.width / self.height
    }
}

/// Minimal perspective camera description, enough to unproject a pointer.
#[derive(Clone, Copy, Debug)]
pub struct ViewCamera {
    pub position: Vec3,
    pub target: Vec3,
    /// Vertical field of view in degrees.
    pub fovy_deg: f32,
}

impl ViewCamera {
    /// Orthonormal view basis. Falls back to a Z up-hint when looking
    /// straight up or down.
    fn basis(self) -> (Vec3, Vec3, Vec3) {
        let forward = (self.target - self.position).normalized();
        let mut right = forward.cross(Vec3::UP);
        if right.length() < 1e-6 {
            right = forward.cross(Vec3::new(0.0, 0.0, 1.0));
        }
        let right = right.normalized();
        let up = right.cross(forward).normalized();
        (forward, right, up)
    }
}

/// Surface coordinates to normalized device coordinates in [-1, 1], with the
/// y axis flipped so +1 is the top of the surface.
#[inline]
pub fn to_ndc(pointer: (f32, f32), viewport: Viewport) -> (f32, f32) {
    (
        pointer.0 / viewport.width * 2.0 - 1.0,
        -(pointer.1 / viewport.height * 2.0 - 1.0),
    )
}

/// World-space ray from the camera through the pointer position.
pub fn pointer_ray(pointer: (f32, f32), viewport: Viewport, camera: ViewCamera) -> Ray {
    let (nx, ny) = to_ndc(pointer, viewport);
    let (forward, right, up) = camera.basis();
    let half = (camera.fovy_deg.to_radians() * 0.5).tan();
    let dir = forward + right * (nx * half * viewport.aspect()) + up * (ny * half);
    Ray::new(camera.position, dir.normalized())
}

/// Resolves the pointer to the nearest intersected tile, or `None` when the
/// ray misses the grid entirely.
pub fn pick(
    pointer: (f32, f32),
    viewport: Viewport,
    camera: ViewCamera,
    grid: &TileGrid,
) -> Option<TileId> {
    let ray = pointer_ray(pointer, viewport, camera);
    let unit = grid.unit();
    let mut best: Option<(f32, TileId)> = None;
    for tile in grid.tiles() {
        if let Some(t) = ray_aabb_intersect(ray, tile.bounds(unit)) {
            match best {
                Some((bt, _)) if bt <= t => {}
                _ => best = Some((t, tile.id)),
            }
        }
    }
    best.map(|(_, id)| id)
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEW: Viewport = Viewport {
        width: 800.0,
        height: 600.0,
    };

    #[test]
    fn ndc_center_and_corners() {
        assert_eq!(to_ndc((400.0, 300.0), VIEW), (0.0, 0.0));
        assert_eq!(to_ndc((0.0, 0.0), VIEW), (-1.0, 1.0));
        assert_eq!(to_ndc((800.0, 600.0), VIEW), (1.0, -1.0));
    }

    #[test]
    fn center_pointer_ray_points_at_target() {
        let cam = ViewCamera {
            position: Vec3::new(0.0, 80.0, 60.0),
            target: Vec3::ZERO,
            fovy_deg: 75.0,
        };
        let ray = pointer_ray((400.0, 300.0), VIEW, cam);
        let expect = (cam.target - cam.position).normalized();
        assert!((ray.dir - expect).length() < 1e-5);
    }

    // 2x2 grid of unit-10 tiles; cell centers (-10,0,-10), (0,0,-10),
    // (-10,0,0), (0,0,0). Aiming through the screen center at the origin must
    // resolve the tile centered there and no other.
    #[test]
    fn center_pointer_picks_the_aimed_tile() {
        let grid = TileGrid::new(2, 2, 10.0);
        let cam = ViewCamera {
            position: Vec3::new(0.0, 80.0, 60.0),
            target: Vec3::ZERO,
            fovy_deg: 75.0,
        };
        assert_eq!(pick((400.0, 300.0), VIEW, cam, &grid), Some(TileId(3)));
    }

    #[test]
    fn nearest_tile_along_the_ray_wins() {
        let grid = TileGrid::new(2, 2, 10.0);
        // Near-horizontal view down the x=0 column: the ray pierces the tile
        // at z=0 first, then the one behind it at z=-10.
        let cam = ViewCamera {
            position: Vec3::new(0.0, 3.0, 40.0),
            target: Vec3::new(0.0, 3.0, -40.0),
            fovy_deg: 75.0,
        };
        assert_eq!(pick((400.0, 300.0), VIEW, cam, &grid), Some(TileId(3)));
    }

    #[test]
    fn pointer_off_the_grid_misses() {
        let grid = TileGrid::new(2, 2, 10.0);
        let cam = ViewCamera {
            position: Vec3::new(0.0, 80.0, 60.0),
            target: Vec3::ZERO,
            fovy_deg: 75.0,
        };
        // Top edge of the screen aims well above the horizon.
        assert_eq!(pick((400.0, 0.0), VIEW, cam, &grid), None);
    }

    #[test]
    fn straight_down_camera_still_has_a_basis() {
        let grid = TileGrid::new(2, 2, 10.0);
        let cam = ViewCamera {
            position: Vec3::new(0.0, 100.0, 0.0),
            target: Vec3::ZERO,
            fovy_deg: 75.0,
        };
        assert_eq!(pick((400.0, 300.0), VIEW, cam, &grid), Some(TileId(3)));
    }
}
