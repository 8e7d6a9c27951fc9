/// Tracks the cursor and whether a camera drag is in progress.
pub(crate) struct DragState {
    last_pos: Option<(f32, f32)>,
    pub(crate) dragging: bool,
}

impl DragState {
    pub(crate) fn new() -> Self {
        Self {
            last_pos: None,
            dragging: false,
        }
    }

    /// Begin a drag at the last known cursor position.
    pub(crate) fn press(&mut self) {
        self.dragging = true;
    }

    /// End the drag. The cursor position is kept for hover tracking.
    pub(crate) fn release(&mut self) {
        self.dragging = false;
    }

    /// Record a new cursor position and return the pixel delta from the
    /// previous one, or `None` for the first sample.
    pub(crate) fn moved_to(&mut self, x: f32, y: f32) -> Option<(f32, f32)> {
        let delta = self.last_pos.map(|(lx, ly)| (x - lx, y - ly));
        self.last_pos = Some((x, y));
        delta
    }
}
