//! Page state: the four sections, their rotations, and input routing state.

use std::collections::HashSet;
use std::time::Instant;

use vitrine_core::{Rotation, RotationFocus, RotationRegistry};

use crate::config::{SiteConfig, SliderConfig};
use crate::contact::ContactForm;
use crate::sections::{
    FeedbackSection, GallerySection, LightboxSection, SectionKey,
    TestimonialsSection,
};

/// Item counts the hosting page mounts with. The items themselves (quotes,
/// images) stay host-side; the engine only needs how many there are.
#[derive(Debug, Clone, Copy)]
pub struct PageContent {
    pub testimonial_count: usize,
    pub gallery_image_count: usize,
    pub feedback_count: usize,
}

/// All state for one showcase page.
#[derive(Debug)]
pub struct PageState {
    pub config: SiteConfig,
    /// Rotation instances, one per mounted rotating region.
    pub rotations: RotationRegistry<SectionKey>,
    /// Which rotation receives arrow keys.
    pub focus: RotationFocus<SectionKey>,
    /// Sections currently on screen; keyboard input never reaches the rest.
    pub visible: HashSet<SectionKey>,
    pub testimonials: TestimonialsSection,
    pub gallery: GallerySection,
    pub feedback: FeedbackSection,
    /// Present only while a lightbox is open.
    pub lightbox: Option<LightboxSection>,
    pub contact: ContactForm,
}

impl PageState {
    /// Mount the page: build the three static rotations and start the
    /// auto-advancing ones.
    pub fn new(config: SiteConfig, content: PageContent, now: Instant) -> Self {
        let mut rotations = RotationRegistry::new();

        mount(
            &mut rotations,
            SectionKey::Testimonials,
            &config.testimonials,
            content.testimonial_count,
            now,
        );
        mount(
            &mut rotations,
            SectionKey::ProductGallery,
            &config.gallery,
            content.gallery_image_count,
            now,
        );
        mount(
            &mut rotations,
            SectionKey::Feedback,
            &config.feedback,
            content.feedback_count,
            now,
        );

        let feedback = FeedbackSection::new(
            content.feedback_count,
            config.feedback.swipe_threshold,
        );

        Self {
            testimonials: TestimonialsSection::new(content.testimonial_count),
            gallery: GallerySection::new(content.gallery_image_count),
            feedback,
            lightbox: None,
            contact: ContactForm::new(),
            rotations,
            focus: RotationFocus::new(),
            visible: HashSet::new(),
            config,
        }
    }

    /// The slider settings governing a section.
    pub fn slider_config(&self, key: SectionKey) -> &SliderConfig {
        match key {
            SectionKey::Testimonials => &self.config.testimonials,
            SectionKey::ProductGallery => &self.config.gallery,
            SectionKey::Feedback => &self.config.feedback,
            SectionKey::Lightbox => &self.config.lightbox,
        }
    }

    pub fn rotation(&self, key: SectionKey) -> Option<&Rotation> {
        self.rotations.get(&key)
    }
}

fn mount(
    rotations: &mut RotationRegistry<SectionKey>,
    key: SectionKey,
    slider: &SliderConfig,
    len: usize,
    now: Instant,
) {
    let config = slider.rotation_config();
    let rotation =
        rotations.get_or_insert_with(key, || Rotation::new(len, config));
    if slider.auto_advance {
        rotation.start_auto_advance(now);
    }
}
