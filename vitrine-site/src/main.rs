//! Headless showcase demo.
//!
//! Drives the page through a short scripted timeline on a real tokio clock
//! and logs every committed index change, so the interaction wiring can be
//! watched end to end without a rendering layer.

use std::time::{Duration, Instant};

use anyhow::Context;
use uuid::Uuid;

use vitrine_site::contact::{Field, submit};
use vitrine_site::{
    ContactMessage, Effect, Key, Message, PageContent, PageState, SectionKey,
    SiteConfig, update,
};

const TICK: Duration = Duration::from_millis(50);
const RUNTIME: Duration = Duration::from_secs(10);

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = SiteConfig::load().context("loading site configuration")?;
    let content = PageContent {
        testimonial_count: 3,
        gallery_image_count: 6,
        feedback_count: 4,
    };
    let started = Instant::now();
    let mut page = PageState::new(config, content, started);

    let mut script = timeline().into_iter().peekable();
    let mut ticker = tokio::time::interval(TICK);

    loop {
        ticker.tick().await;
        let now = Instant::now();
        let elapsed = now.duration_since(started);

        while script
            .peek()
            .is_some_and(|(at, _)| *at <= elapsed)
        {
            if let Some((_, message)) = script.next() {
                log::info!("demo: {message:?}");
                let effects = update(&mut page, message, now);
                run_effects(&mut page, effects).await;
            }
        }

        let effects = update(&mut page, Message::Tick, now);
        run_effects(&mut page, effects).await;

        if elapsed >= RUNTIME {
            break;
        }
    }

    log::info!(
        "demo: done (testimonial dot {}, gallery {}, feedback {:?}, contact {:?})",
        page.testimonials.active_dot,
        page.gallery.readout,
        page
            .rotation(SectionKey::Feedback)
            .map(|rotation| rotation.current_index()),
        page.contact.status,
    );
    Ok(())
}

/// The scripted interaction, as offsets from launch.
fn timeline() -> Vec<(Duration, Message)> {
    let ms = Duration::from_millis;
    vec![
        (ms(0), Message::SectionShown(SectionKey::Testimonials)),
        (ms(0), Message::SectionShown(SectionKey::ProductGallery)),
        (ms(500), Message::SectionShown(SectionKey::Feedback)),
        // Hover pauses the testimonial auto-advance, leaving restarts it.
        (ms(1_200), Message::PointerEntered(SectionKey::Testimonials)),
        (ms(2_600), Message::PointerLeft(SectionKey::Testimonials)),
        // Swipe the feedback slider one step forward.
        (ms(3_000), Message::TouchStarted(SectionKey::Feedback, 220.0)),
        (ms(3_200), Message::TouchEnded(SectionKey::Feedback, 120.0)),
        // Open a lightbox and walk it with the keyboard.
        (
            ms(4_000),
            Message::LightboxOpened {
                gallery: Uuid::new_v4(),
                image_count: 7,
            },
        ),
        (ms(4_500), Message::KeyPressed(Key::ArrowRight)),
        (ms(5_200), Message::KeyPressed(Key::ArrowRight)),
        (ms(5_900), Message::KeyPressed(Key::ArrowLeft)),
        (ms(6_500), Message::LightboxClosed),
        // Fill and send the contact form (demo mode unless configured).
        (
            ms(7_000),
            Message::Contact(ContactMessage::FieldEdited(
                Field::Name,
                "Ada Lovelace".to_string(),
            )),
        ),
        (
            ms(7_050),
            Message::Contact(ContactMessage::FieldEdited(
                Field::Email,
                "ada@example.test".to_string(),
            )),
        ),
        (
            ms(7_100),
            Message::Contact(ContactMessage::FieldEdited(
                Field::Message,
                "I would like to discuss a custom piece.".to_string(),
            )),
        ),
        (ms(7_200), Message::Contact(ContactMessage::SubmitRequested)),
    ]
}

/// Execute effects inline and feed completions back into the page.
async fn run_effects(page: &mut PageState, effects: Vec<Effect>) {
    for effect in effects {
        match effect {
            Effect::SubmitContact(request) => {
                let result =
                    submit(request).await.map_err(|error| error.to_string());
                let message =
                    Message::Contact(ContactMessage::SubmitFinished(result));
                // Completion produces no further effects.
                let _ = update(page, message, Instant::now());
            }
        }
    }
}
