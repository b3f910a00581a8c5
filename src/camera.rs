use raylib::prelude::*;

/// What the orbit controller did this frame, as seen by the camera gate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragUpdate {
    None,
    /// The view changed (drag rotation or wheel zoom).
    Moving,
    /// A drag ended this frame; the gate should settle on the next tick.
    Released,
}

/// Orbit camera around a fixed target: left-drag rotates, wheel zooms.
pub struct OrbitCamera {
    pub target: Vector3,
    pub yaw: f32,   // degrees
    pub pitch: f32, // degrees above the horizon
    pub distance: f32,
    pub fovy: f32,
    pub rotate_sensitivity: f32,
    pub zoom_step: f32,
    dragging: bool,
}

impl OrbitCamera {
    /// Places the camera at `position` looking at `target`, deriving the
    /// orbit angles from the offset.
    pub fn new(position: Vector3, target: Vector3) -> Self {
        let off = position - target;
        let distance = off.length().max(1.0);
        let pitch = (off.y / distance).asin().to_degrees();
        let yaw = off.z.atan2(off.x).to_degrees();
        Self {
            target,
            yaw,
            pitch,
            distance,
            fovy: 75.0,
            rotate_sensitivity: 0.25,
            zoom_step: 10.0,
            dragging: false,
        }
    }

    pub fn position(&self) -> Vector3 {
        let yaw = self.yaw.to_radians();
        let pitch = self.pitch.to_radians();
        let off = Vector3::new(
            pitch.cos() * yaw.cos(),
            pitch.sin(),
            pitch.cos() * yaw.sin(),
        ) * self.distance;
        self.target + off
    }

    pub fn to_camera3d(&self) -> Camera3D {
        Camera3D::perspective(self.position(), self.target, Vector3::up(), self.fovy)
    }

    pub fn to_view(&self) -> blockyard_pick::ViewCamera {
        blockyard_pick::ViewCamera {
            position: crate::conv::vec3_from_rl(self.position()),
            target: crate::conv::vec3_from_rl(self.target),
            fovy_deg: self.fovy,
        }
    }

    /// Applies this frame's drag/zoom input and reports it for gating.
    pub fn update(&mut self, rl: &RaylibHandle) -> DragUpdate {
        let mut changed = false;
        if rl.is_mouse_button_down(MouseButton::MOUSE_BUTTON_LEFT) {
            let md = rl.get_mouse_delta();
            if md.x != 0.0 || md.y != 0.0 {
                self.yaw += md.x * self.rotate_sensitivity;
                self.pitch = (self.pitch + md.y * self.rotate_sensitivity).clamp(5.0, 85.0);
                changed = true;
            }
        }
        let wheel = rl.get_mouse_wheel_move();
        if wheel != 0.0 {
            self.distance = (self.distance - wheel * self.zoom_step).clamp(30.0, 600.0);
            changed = true;
        }
        if changed {
            self.dragging = true;
            return DragUpdate::Moving;
        }
        if self.dragging && !rl.is_mouse_button_down(MouseButton::MOUSE_BUTTON_LEFT) {
            self.dragging = false;
            return DragUpdate::Released;
        }
        DragUpdate::None
    }
}
