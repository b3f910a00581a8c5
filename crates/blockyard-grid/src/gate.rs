/// Tracks whether the camera is being dragged. While the flag is set, stack
/// mutations are suppressed so releasing a drag never places a block.
///
/// `begin_move` is called synchronously on drag start/change. Clearing is the
/// caller's job one scheduler turn after drag end (`settle`): the trailing
/// click the platform delivers together with drag end still observes the gate
/// as moving.
#[derive(Default, Debug)]
pub struct CameraGate {
    moving: bool,
}

impl CameraGate {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn begin_move(&mut self) {
        self.moving = true;
    }

    #[inline]
    pub fn settle(&mut self) {
        self.moving = false;
    }

    #[inline]
    pub fn is_moving(&self) -> bool {
        self.moving
    }
}
