//! Keyboard focus routing across rotations.
//!
//! A page can run several rotations at once; arrow keys should reach exactly
//! one of them. Hover takes priority over explicit focus, and hosts combine
//! the resolved key with their own visibility predicate so an off-screen
//! rotation never consumes keys.

/// Which input source last set the active focus target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusSource {
    #[default]
    None,
    Pointer,
    Keyboard,
}

/// Focus controller for a set of rotations keyed by `K`.
///
/// Resolution order for the keyboard target:
/// 1. the hovered rotation, when the pointer is over one;
/// 2. the explicitly focused rotation (button press, programmatic focus);
/// 3. none — the host falls back to its own default, if any.
#[derive(Debug, Clone, Default)]
pub struct RotationFocus<K> {
    hovered: Option<K>,
    keyboard_active: Option<K>,
    last_source: FocusSource,
}

impl<K: Clone + PartialEq> RotationFocus<K> {
    pub fn new() -> Self {
        Self {
            hovered: None,
            keyboard_active: None,
            last_source: FocusSource::None,
        }
    }

    /// Record the rotation under the pointer (pointer enter), or `None` on
    /// pointer leave.
    pub fn set_hovered(&mut self, key: Option<K>) {
        if key.is_some() {
            self.last_source = FocusSource::Pointer;
        }
        self.hovered = key;
    }

    /// Set the explicit keyboard target (chevron press, programmatic focus).
    pub fn set_keyboard_active(&mut self, key: Option<K>) {
        self.keyboard_active = key;
        self.last_source = FocusSource::Keyboard;
    }

    /// The rotation that should receive keyboard navigation right now.
    pub fn active_key(&self) -> Option<&K> {
        self.hovered.as_ref().or(self.keyboard_active.as_ref())
    }

    pub fn is_active(&self, key: &K) -> bool {
        self.active_key() == Some(key)
    }

    pub fn hovered(&self) -> Option<&K> {
        self.hovered.as_ref()
    }

    pub fn last_source(&self) -> FocusSource {
        self.last_source
    }

    /// Clear hover state (pointer left the window).
    pub fn clear_hover(&mut self) {
        self.hovered = None;
    }

    pub fn clear_all(&mut self) {
        self.hovered = None;
        self.keyboard_active = None;
        self.last_source = FocusSource::None;
    }
}
