//! Rotation engine for the vitrine showcase.
//!
//! One component, instantiated once per rotating region on a page: a fixed
//! ordered set of items, a current index, and a transition guard that
//! serializes index changes. Hosts own the items and the rendering; the
//! engine owns the index arithmetic, boundary behavior, auto-advance
//! scheduling, and gesture resolution.
//!
//! Everything time-dependent takes `now: Instant` explicitly, so the same
//! code runs against the wall clock in production and a hand-stepped clock
//! in tests.

pub mod easing;
pub mod rotation;

pub use easing::Easing;
pub use rotation::{
    AutoAdvance, BoundaryPolicy, Direction, FocusSource, Rotation,
    RotationConfig, RotationFocus, RotationRegistry, SwipeTracker,
};
