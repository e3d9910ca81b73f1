//! Drag and swipe resolution.
//!
//! Touch swipes and mouse drags share one decision rule: the signed distance
//! between where the pointer went down and where it was released, gated by a
//! threshold so taps and jitters request nothing.

/// Direction of a resolved step request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Next,
    Prev,
}

impl Direction {
    /// Resolve a completed drag from its endpoints.
    ///
    /// `diff = start - end`: dragging toward "next" (leftward on a
    /// horizontal strip) gives a positive diff. Distances at or under the
    /// threshold resolve to `None`.
    pub fn from_drag(start: f32, end: f32, threshold: f32) -> Option<Self> {
        let diff = start - end;
        if diff.abs() <= threshold {
            return None;
        }
        Some(if diff > 0.0 {
            Direction::Next
        } else {
            Direction::Prev
        })
    }
}

/// Tracks one in-progress drag from pointer-down to release.
#[derive(Debug, Clone, Default)]
pub struct SwipeTracker {
    threshold: f32,
    start: Option<f32>,
}

impl SwipeTracker {
    pub fn new(threshold: f32) -> Self {
        Self {
            threshold,
            start: None,
        }
    }

    /// Record the pointer-down coordinate. A new drag replaces any stale one.
    pub fn begin(&mut self, coordinate: f32) {
        self.start = Some(coordinate);
    }

    /// Resolve the drag at release. Returns `None` when no drag was begun or
    /// the distance stayed inside the threshold.
    pub fn finish(&mut self, coordinate: f32) -> Option<Direction> {
        let start = self.start.take()?;
        Direction::from_drag(start, coordinate, self.threshold)
    }

    /// Forget the in-progress drag (pointer left the region mid-gesture).
    pub fn cancel(&mut self) {
        self.start = None;
    }

    pub fn is_tracking(&self) -> bool {
        self.start.is_some()
    }
}
