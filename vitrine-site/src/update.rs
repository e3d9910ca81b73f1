//! Message dispatch for the page.

use std::time::Instant;

use vitrine_core::Direction;
use vitrine_core::Rotation;

use crate::contact;
use crate::messages::{Effect, Key, Message};
use crate::sections::{LightboxSection, SectionKey};
use crate::state::PageState;

/// Handle one message against the page, returning effects for the host to
/// execute. `now` comes from whatever clock drives the page.
pub fn update(
    state: &mut PageState,
    message: Message,
    now: Instant,
) -> Vec<Effect> {
    match message {
        Message::Tick => {
            for (key, index) in state.rotations.tick_all(now) {
                apply_commit(state, key, index);
            }
            Vec::new()
        }

        Message::SectionShown(key) => {
            state.visible.insert(key);
            Vec::new()
        }
        Message::SectionHidden(key) => {
            state.visible.remove(&key);
            Vec::new()
        }

        Message::PointerEntered(key) => {
            state.focus.set_hovered(Some(key));
            // Hovering suspends auto-advance; reading shouldn't race the
            // timer.
            if let Some(rotation) = state.rotations.get_mut(&key) {
                rotation.stop_auto_advance();
            }
            Vec::new()
        }
        Message::PointerLeft(key) => {
            if state.focus.hovered() == Some(&key) {
                state.focus.clear_hover();
            }
            if key == SectionKey::Feedback {
                // A drag that wanders off the region resolves to nothing.
                state.feedback.swipe.cancel();
            }
            // Restart from a fresh interval, not a resumed countdown.
            let auto_advance = state.slider_config(key).auto_advance;
            if auto_advance
                && let Some(rotation) = state.rotations.get_mut(&key)
            {
                rotation.start_auto_advance(now);
            }
            Vec::new()
        }

        Message::KeyPressed(key) => {
            if let Some(target) = keyboard_target(state)
                && let Some(rotation) = state.rotations.get_mut(&target)
            {
                match key {
                    Key::ArrowLeft => rotation.retreat(now),
                    Key::ArrowRight => rotation.advance(now),
                };
            }
            Vec::new()
        }

        Message::NextPressed(key) => {
            if let Some(rotation) = state.rotations.get_mut(&key) {
                rotation.advance(now);
            }
            Vec::new()
        }
        Message::PrevPressed(key) => {
            if let Some(rotation) = state.rotations.get_mut(&key) {
                rotation.retreat(now);
            }
            Vec::new()
        }
        Message::DotPressed(index) => {
            if let Some(rotation) =
                state.rotations.get_mut(&SectionKey::Testimonials)
            {
                rotation.jump_to(index, now);
            }
            Vec::new()
        }

        Message::TouchStarted(key, coordinate) => {
            match key {
                SectionKey::Feedback => {
                    state.feedback.swipe.begin(coordinate);
                }
                SectionKey::Lightbox => {
                    if let Some(lightbox) = &mut state.lightbox {
                        lightbox.touch_start = Some(coordinate);
                    }
                }
                _ => {}
            }
            Vec::new()
        }
        Message::TouchEnded(key, coordinate) => {
            match key {
                SectionKey::Feedback => {
                    if let Some(direction) =
                        state.feedback.swipe.finish(coordinate)
                        && let Some(rotation) =
                            state.rotations.get_mut(&SectionKey::Feedback)
                    {
                        step(rotation, direction, now);
                    }
                }
                SectionKey::Lightbox => {
                    let threshold =
                        state.config.lightbox.swipe_threshold;
                    if let Some(lightbox) = &mut state.lightbox
                        && let Some(start) = lightbox.touch_start.take()
                        && let Some(rotation) =
                            state.rotations.get_mut(&SectionKey::Lightbox)
                    {
                        rotation.handle_gesture(
                            start, coordinate, threshold, now,
                        );
                    }
                }
                _ => {}
            }
            Vec::new()
        }

        Message::LightboxOpened {
            gallery,
            image_count,
        } => {
            // Opening over an existing lightbox replaces it wholesale; a
            // new image set never inherits index or timer state.
            state.rotations.remove(&SectionKey::Lightbox);
            let config = state.config.lightbox.rotation_config();
            state.rotations.get_or_insert_with(SectionKey::Lightbox, || {
                Rotation::new(image_count, config)
            });
            state.lightbox =
                Some(LightboxSection::new(gallery, image_count));
            state.visible.insert(SectionKey::Lightbox);
            state.focus.set_keyboard_active(Some(SectionKey::Lightbox));
            log::debug!("lightbox {gallery}: opened with {image_count} images");
            Vec::new()
        }
        Message::LightboxClosed => {
            state.rotations.remove(&SectionKey::Lightbox);
            state.lightbox = None;
            state.visible.remove(&SectionKey::Lightbox);
            if state.focus.is_active(&SectionKey::Lightbox) {
                state.focus.set_keyboard_active(None);
            }
            Vec::new()
        }

        Message::Contact(message) => contact::update(
            &mut state.contact,
            message,
            state.config.contact.effective_endpoint(),
        ),
    }
}

/// Route a committed index change to its section's render effect.
fn apply_commit(state: &mut PageState, key: SectionKey, index: usize) {
    match key {
        SectionKey::Testimonials => state.testimonials.apply_commit(index),
        SectionKey::ProductGallery => state.gallery.apply_commit(index),
        SectionKey::Feedback => {
            if let Some(rotation) = state.rotations.get(&key) {
                state.feedback.apply_commit(index, rotation);
            }
        }
        SectionKey::Lightbox => {
            if let Some(lightbox) = &mut state.lightbox {
                lightbox.apply_commit(index);
            }
        }
    }
}

/// Which rotation should receive arrow keys right now.
///
/// The hovered/focused section wins while it is on screen; an open lightbox
/// is modal; otherwise the feedback slider takes keys while visible, as the
/// only keyboard-first section of the page.
fn keyboard_target(state: &PageState) -> Option<SectionKey> {
    if let Some(&key) = state.focus.active_key() {
        return state.visible.contains(&key).then_some(key);
    }
    if state.lightbox.is_some()
        && state.visible.contains(&SectionKey::Lightbox)
    {
        return Some(SectionKey::Lightbox);
    }
    state
        .visible
        .contains(&SectionKey::Feedback)
        .then_some(SectionKey::Feedback)
}

fn step(rotation: &mut Rotation, direction: Direction, now: Instant) {
    match direction {
        Direction::Next => rotation.advance(now),
        Direction::Prev => rotation.retreat(now),
    };
}
