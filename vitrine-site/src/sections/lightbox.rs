//! Lightbox gallery: built per opened image set, torn down on close.

use uuid::Uuid;

/// Render-side state for an open lightbox.
///
/// One of these exists only while a lightbox is open; opening a different
/// image set builds a fresh value (and a fresh rotation) rather than
/// mutating the old one.
#[derive(Debug, Clone)]
pub struct LightboxSection {
    /// Identity of the opened image set.
    pub gallery: Uuid,
    pub image_count: usize,
    /// "current / total" caption, 1-based.
    pub counter: String,
    /// Touch-down coordinate for the in-progress swipe, if any.
    pub touch_start: Option<f32>,
}

impl LightboxSection {
    pub fn new(gallery: Uuid, image_count: usize) -> Self {
        Self {
            gallery,
            image_count,
            counter: Self::format_counter(0, image_count),
            touch_start: None,
        }
    }

    /// Committed-index effect: refresh the caption.
    pub fn apply_commit(&mut self, index: usize) {
        self.counter = Self::format_counter(index, self.image_count);
        log::debug!("lightbox {}: image {}", self.gallery, self.counter);
    }

    fn format_counter(index: usize, count: usize) -> String {
        if count == 0 {
            return String::from("0 / 0");
        }
        format!("{} / {}", index + 1, count)
    }
}
