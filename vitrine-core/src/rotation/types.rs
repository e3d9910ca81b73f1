//! Shared types for the rotation module.

use std::time::Duration;

use crate::easing::Easing;

/// Boundary behavior at the first/last item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum BoundaryPolicy {
    /// Freeze at index 0 / N-1; requests past the ends are dropped.
    Clamp,
    /// Cycle to the opposite end with modulo arithmetic.
    #[default]
    Wrap,
}

/// Static configuration for one rotation instance.
///
/// The transition duration is part of the configuration rather than a
/// constant buried in the commit path, so hosts and tests pick the effect
/// length (including zero for instantaneous commits).
#[derive(Debug, Clone, Copy)]
pub struct RotationConfig {
    pub boundary: BoundaryPolicy,
    /// Length of the visual effect between accepting a request and
    /// committing the new index.
    pub transition: Duration,
    pub easing: Easing,
    /// Base delay between auto-advance fires.
    pub interval: Duration,
    /// Extra random delay added on top of `interval`, drawn fresh per cycle.
    /// Zero disables jitter.
    pub jitter: Duration,
}

impl RotationConfig {
    /// Defaults for a wrapping hero/testimonial style slider.
    pub const fn slide_defaults() -> Self {
        Self {
            boundary: BoundaryPolicy::Wrap,
            transition: Duration::from_millis(400),
            easing: Easing::EaseOut,
            interval: Duration::from_secs(6),
            jitter: Duration::ZERO,
        }
    }

    /// Defaults for a wrapping image carousel; jitter staggers several
    /// carousels sharing a page so they never rotate in sync.
    pub const fn gallery_defaults() -> Self {
        Self {
            boundary: BoundaryPolicy::Wrap,
            transition: Duration::from_millis(400),
            easing: Easing::EaseOut,
            interval: Duration::from_secs(4),
            jitter: Duration::from_secs(2),
        }
    }

    /// Defaults for a clamped stepper (disabled buttons at the ends).
    pub const fn stepper_defaults() -> Self {
        Self {
            boundary: BoundaryPolicy::Clamp,
            transition: Duration::from_millis(400),
            easing: Easing::EaseOut,
            interval: Duration::from_secs(5),
            jitter: Duration::ZERO,
        }
    }

    /// Replace the boundary policy, keeping the rest.
    pub const fn with_boundary(mut self, boundary: BoundaryPolicy) -> Self {
        self.boundary = boundary;
        self
    }

    /// Replace the transition duration, keeping the rest.
    pub const fn with_transition(mut self, transition: Duration) -> Self {
        self.transition = transition;
        self
    }
}

impl Default for RotationConfig {
    fn default() -> Self {
        Self::slide_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builders_replace_only_their_field() {
        let cfg = RotationConfig::slide_defaults()
            .with_boundary(BoundaryPolicy::Clamp)
            .with_transition(Duration::ZERO);
        assert_eq!(cfg.boundary, BoundaryPolicy::Clamp);
        assert_eq!(cfg.transition, Duration::ZERO);
        assert_eq!(cfg.interval, Duration::from_secs(6));
    }
}
