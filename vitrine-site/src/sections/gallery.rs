//! Product gallery carousel: wrapping rotation with a progress readout.

/// Render-side state for the product gallery.
#[derive(Debug, Clone)]
pub struct GallerySection {
    pub image_count: usize,
    /// "current / total" readout, 1-based.
    pub readout: String,
}

impl GallerySection {
    pub fn new(image_count: usize) -> Self {
        Self {
            image_count,
            readout: Self::format_readout(0, image_count),
        }
    }

    /// Committed-index effect: refresh the readout.
    pub fn apply_commit(&mut self, index: usize) {
        self.readout = Self::format_readout(index, self.image_count);
        log::debug!("gallery: showing {}", self.readout);
    }

    fn format_readout(index: usize, count: usize) -> String {
        if count == 0 {
            return String::from("0 / 0");
        }
        format!("{} / {}", index + 1, count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn readout_is_one_based() {
        let mut section = GallerySection::new(6);
        assert_eq!(section.readout, "1 / 6");
        section.apply_commit(5);
        assert_eq!(section.readout, "6 / 6");
    }

    #[test]
    fn empty_gallery_reads_zero() {
        let section = GallerySection::new(0);
        assert_eq!(section.readout, "0 / 0");
    }
}
