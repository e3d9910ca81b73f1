//! Feedback quote slider: clamped rotation with end-aware buttons and swipe.

use vitrine_core::{Rotation, SwipeTracker};

/// Render-side state for the feedback slider.
#[derive(Debug, Clone)]
pub struct FeedbackSection {
    pub entry_count: usize,
    /// Previous-button enabled state; false at the left end under clamp.
    pub prev_enabled: bool,
    /// Next-button enabled state; false at the right end under clamp.
    pub next_enabled: bool,
    /// In-progress touch drag over the quote block.
    pub swipe: SwipeTracker,
}

impl FeedbackSection {
    pub fn new(entry_count: usize, swipe_threshold: f32) -> Self {
        Self {
            entry_count,
            prev_enabled: false,
            next_enabled: entry_count > 1,
            swipe: SwipeTracker::new(swipe_threshold),
        }
    }

    /// Committed-index effect: re-derive the button flags from the engine.
    pub fn apply_commit(&mut self, index: usize, rotation: &Rotation) {
        self.prev_enabled = rotation.can_retreat();
        self.next_enabled = rotation.can_advance();
        log::debug!(
            "feedback: entry {} (prev {}, next {})",
            index,
            self.prev_enabled,
            self.next_enabled
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;
    use vitrine_core::{BoundaryPolicy, RotationConfig};

    #[test]
    fn buttons_track_clamp_edges() {
        let now = Instant::now();
        let cfg = RotationConfig::stepper_defaults()
            .with_transition(std::time::Duration::ZERO);
        assert_eq!(cfg.boundary, BoundaryPolicy::Clamp);

        let mut rotation = Rotation::new(3, cfg);
        let mut section = FeedbackSection::new(3, 50.0);
        assert!(!section.prev_enabled);
        assert!(section.next_enabled);

        rotation.advance(now);
        let index = rotation.tick(now).unwrap();
        section.apply_commit(index, &rotation);
        assert!(section.prev_enabled);
        assert!(section.next_enabled);

        rotation.advance(now);
        let index = rotation.tick(now).unwrap();
        section.apply_commit(index, &rotation);
        assert!(section.prev_enabled);
        assert!(!section.next_enabled);
    }
}
