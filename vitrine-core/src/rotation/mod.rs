//! Guarded index rotation.
//!
//! This module provides the reusable rotation component and its satellites:
//! state and transition protocol, auto-advance scheduling, swipe resolution,
//! keyboard focus routing, and a keyed registry for pages that run several
//! rotations side by side. State, scheduling, and input decisions are kept
//! in separate files so each piece stays testable on its own.

pub mod autoplay;
pub mod focus;
pub mod gesture;
pub mod registry;
pub mod state;
pub mod types;

pub use autoplay::AutoAdvance;
pub use focus::{FocusSource, RotationFocus};
pub use gesture::{Direction, SwipeTracker};
pub use registry::RotationRegistry;
pub use state::Rotation;
pub use types::{BoundaryPolicy, RotationConfig};
