//! Testimonial slider: wrapping rotation with dot navigation.

/// Render-side state for the testimonial slider.
#[derive(Debug, Clone)]
pub struct TestimonialsSection {
    pub quote_count: usize,
    /// Which navigation dot is highlighted.
    pub active_dot: usize,
}

impl TestimonialsSection {
    pub fn new(quote_count: usize) -> Self {
        Self {
            quote_count,
            active_dot: 0,
        }
    }

    /// Committed-index effect: highlight the matching dot.
    pub fn apply_commit(&mut self, index: usize) {
        self.active_dot = index;
        log::debug!("testimonials: quote {} active", index);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commit_moves_the_active_dot() {
        let mut section = TestimonialsSection::new(4);
        section.apply_commit(3);
        assert_eq!(section.active_dot, 3);
    }
}
