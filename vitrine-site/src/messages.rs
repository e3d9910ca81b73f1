//! Page-level messages and effects.

use uuid::Uuid;

use crate::contact::{Field, SubmissionRequest};
use crate::sections::SectionKey;

/// Navigation keys the page reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    ArrowLeft,
    ArrowRight,
}

/// Everything the page reacts to.
#[derive(Debug, Clone)]
pub enum Message {
    /// Clock tick: commits due transitions and fires due auto-advance
    /// deadlines. The driving clock passes `now` to `update` alongside.
    Tick,

    // Viewport
    SectionShown(SectionKey),
    SectionHidden(SectionKey),

    // Pointer
    PointerEntered(SectionKey),
    PointerLeft(SectionKey),

    // Keyboard
    KeyPressed(Key),

    // Explicit navigation
    NextPressed(SectionKey),
    PrevPressed(SectionKey),
    /// Testimonial dot clicked.
    DotPressed(usize),

    // Touch
    TouchStarted(SectionKey, f32),
    TouchEnded(SectionKey, f32),

    // Lightbox lifecycle
    LightboxOpened { gallery: Uuid, image_count: usize },
    LightboxClosed,

    // Contact form
    Contact(ContactMessage),
}

/// Contact form sub-messages.
#[derive(Debug, Clone)]
pub enum ContactMessage {
    FieldEdited(Field, String),
    FieldBlurred(Field),
    SubmitRequested,
    /// Completion of an async send; errors cross the boundary as strings.
    SubmitFinished(Result<(), String>),
}

/// Side effects `update` asks the host to execute.
#[derive(Debug, Clone)]
pub enum Effect {
    SubmitContact(SubmissionRequest),
}
