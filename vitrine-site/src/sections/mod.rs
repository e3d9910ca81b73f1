//! The rotating sections of the showcase page.
//!
//! Each section owns its render-side state (the data a view would bind to:
//! active dot, progress readout, button flags, lightbox counter) and applies
//! committed index changes to it. The rotation instances themselves live in
//! the page's registry keyed by [`SectionKey`].

pub mod feedback;
pub mod gallery;
pub mod lightbox;
pub mod testimonials;

pub use feedback::FeedbackSection;
pub use gallery::GallerySection;
pub use lightbox::LightboxSection;
pub use testimonials::TestimonialsSection;

/// Key identifying a rotating region of the page.
///
/// A strongly-typed key instead of string matching, so focus routing and the
/// registry agree on identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionKey {
    Testimonials,
    ProductGallery,
    Feedback,
    Lightbox,
}
