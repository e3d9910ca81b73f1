//! Rotation state: guarded index changes with deferred commits.

use std::time::{Duration, Instant};

use super::autoplay::AutoAdvance;
use super::gesture::Direction;
use super::types::{BoundaryPolicy, RotationConfig};
use crate::easing::Easing;

/// A fixed ordered set of items rotated one "current" slot at a time.
///
/// The item count is fixed for the lifetime of an instance; replacing the
/// item set means building a new instance. At most one transition is ever in
/// flight: a request arriving while the guard is open is dropped, never
/// queued. Requests that cannot be honored (empty or single-item set,
/// out-of-range target, guard open) are silent no-ops.
///
/// Accepting a request records the target index immediately; the index
/// itself changes only when [`Rotation::tick`] observes that the configured
/// transition duration has elapsed. Hosts drive `tick` from whatever clock
/// they have (a frame loop, a tokio interval, a test clock).
#[derive(Debug, Clone)]
pub struct Rotation {
    len: usize,
    current: usize,
    boundary: BoundaryPolicy,
    transition: Duration,
    easing: Easing,
    pending: Option<PendingTransition>,
    autoplay: AutoAdvance,
}

/// An accepted, not yet committed index change.
#[derive(Debug, Clone, Copy)]
struct PendingTransition {
    target: usize,
    started_at: Instant,
}

impl Rotation {
    /// Create a rotation over `len` items starting at index 0.
    pub fn new(len: usize, config: RotationConfig) -> Self {
        Self {
            len,
            current: 0,
            boundary: config.boundary,
            transition: config.transition,
            easing: config.easing,
            pending: None,
            autoplay: AutoAdvance::new(config.interval, config.jitter),
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The committed index. Meaningless (always 0) while the set is empty.
    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn boundary(&self) -> BoundaryPolicy {
        self.boundary
    }

    pub fn is_transitioning(&self) -> bool {
        self.pending.is_some()
    }

    /// Target of the in-flight transition, if one is open.
    pub fn target_index(&self) -> Option<usize> {
        self.pending.map(|p| p.target)
    }

    /// Whether an `advance` request could currently be honored, ignoring the
    /// transition guard. Drives next-button enabled state under `Clamp`.
    pub fn can_advance(&self) -> bool {
        self.peek_next().is_some()
    }

    /// Counterpart of [`Rotation::can_advance`] for the previous direction.
    pub fn can_retreat(&self) -> bool {
        self.peek_prev().is_some()
    }

    /// Request moving to the next index under the boundary policy.
    /// Returns whether the request was accepted.
    pub fn advance(&mut self, now: Instant) -> bool {
        match self.peek_next() {
            Some(target) => self.begin(target, now),
            None => false,
        }
    }

    /// Request moving to the previous index under the boundary policy.
    pub fn retreat(&mut self, now: Instant) -> bool {
        match self.peek_prev() {
            Some(target) => self.begin(target, now),
            None => false,
        }
    }

    /// Request moving directly to `index`. No-op when out of range, equal to
    /// the current index, or while a transition is open.
    pub fn jump_to(&mut self, index: usize, now: Instant) -> bool {
        if index >= self.len || index == self.current {
            return false;
        }
        self.begin(index, now)
    }

    /// Resolve a completed drag and request the matching step.
    ///
    /// `diff = start - end`; a drag toward "next" has positive diff. Drags at
    /// or under the threshold request nothing.
    pub fn handle_gesture(
        &mut self,
        start: f32,
        end: f32,
        threshold: f32,
        now: Instant,
    ) -> bool {
        match Direction::from_drag(start, end, threshold) {
            Some(Direction::Next) => self.advance(now),
            Some(Direction::Prev) => self.retreat(now),
            None => false,
        }
    }

    /// Begin recurring auto-advance. No-op while already running.
    pub fn start_auto_advance(&mut self, now: Instant) {
        self.autoplay.start(now);
    }

    /// Cancel the auto-advance timer. Idempotent; an in-flight transition
    /// still runs to completion.
    pub fn stop_auto_advance(&mut self) {
        self.autoplay.stop();
    }

    pub fn auto_advance_running(&self) -> bool {
        self.autoplay.is_running()
    }

    /// Next auto-advance deadline, when running.
    pub fn next_auto_advance_at(&self) -> Option<Instant> {
        self.autoplay.next_deadline()
    }

    /// Drive deferred work: commit a due transition and fire a due
    /// auto-advance deadline. Returns the committed index, if this tick
    /// committed one.
    ///
    /// An auto-advance fire landing inside an open transition is absorbed by
    /// the guard and lost; the next deadline is scheduled either way, so a
    /// stalled tick never produces a burst of catch-up advances.
    pub fn tick(&mut self, now: Instant) -> Option<usize> {
        let committed = self.commit_due(now);
        if self.autoplay.due(now) {
            self.advance(now);
        }
        committed
    }

    /// Eased progress of the in-flight transition, 1.0 while idle.
    pub fn progress(&self, now: Instant) -> f32 {
        let Some(pending) = self.pending else {
            return 1.0;
        };
        if self.transition.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(pending.started_at);
        let t = elapsed.as_secs_f32() / self.transition.as_secs_f32();
        self.easing.apply(t)
    }

    fn peek_next(&self) -> Option<usize> {
        if self.len <= 1 {
            return None;
        }
        match self.boundary {
            BoundaryPolicy::Wrap => Some((self.current + 1) % self.len),
            BoundaryPolicy::Clamp => {
                (self.current + 1 < self.len).then(|| self.current + 1)
            }
        }
    }

    fn peek_prev(&self) -> Option<usize> {
        if self.len <= 1 {
            return None;
        }
        match self.boundary {
            BoundaryPolicy::Wrap => {
                Some((self.current + self.len - 1) % self.len)
            }
            BoundaryPolicy::Clamp => {
                (self.current > 0).then(|| self.current - 1)
            }
        }
    }

    fn begin(&mut self, target: usize, now: Instant) -> bool {
        if self.pending.is_some() {
            log::trace!(
                "rotation: dropped request for {target} while transitioning"
            );
            return false;
        }
        self.pending = Some(PendingTransition {
            target,
            started_at: now,
        });
        true
    }

    fn commit_due(&mut self, now: Instant) -> Option<usize> {
        let pending = self.pending?;
        if now.saturating_duration_since(pending.started_at) < self.transition
        {
            return None;
        }
        self.pending = None;
        self.current = pending.target;
        log::debug!("rotation: committed index {}", self.current);
        Some(self.current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn instant_config() -> RotationConfig {
        RotationConfig::slide_defaults().with_transition(Duration::ZERO)
    }

    fn settled(rotation: &mut Rotation, now: Instant) -> usize {
        rotation.tick(now);
        rotation.current_index()
    }

    #[test]
    fn wrap_advance_is_modular() {
        let now = Instant::now();
        let mut r = Rotation::new(3, instant_config());
        for expected in [1, 2, 0, 1] {
            assert!(r.advance(now));
            assert_eq!(settled(&mut r, now), expected);
        }
    }

    #[test]
    fn wrap_retreat_from_zero_lands_on_last() {
        let now = Instant::now();
        let mut r = Rotation::new(3, instant_config());
        assert!(r.retreat(now));
        assert_eq!(settled(&mut r, now), 2);
    }

    #[test]
    fn clamp_freezes_at_both_ends() {
        let now = Instant::now();
        let cfg = instant_config().with_boundary(BoundaryPolicy::Clamp);
        let mut r = Rotation::new(2, cfg);
        assert!(!r.retreat(now));
        assert!(r.advance(now));
        assert_eq!(settled(&mut r, now), 1);
        assert!(!r.advance(now));
        assert_eq!(r.current_index(), 1);
    }

    #[test]
    fn singleton_and_empty_sets_are_inert() {
        let now = Instant::now();
        for len in [0, 1] {
            let mut r = Rotation::new(len, instant_config());
            assert!(!r.advance(now));
            assert!(!r.retreat(now));
            assert!(!r.jump_to(0, now));
            assert_eq!(settled(&mut r, now), 0);
        }
    }

    #[test]
    fn jump_rejects_out_of_range_and_self() {
        let now = Instant::now();
        let mut r = Rotation::new(4, instant_config());
        assert!(!r.jump_to(4, now));
        assert!(!r.jump_to(0, now));
        assert!(r.jump_to(3, now));
        assert_eq!(settled(&mut r, now), 3);
    }

    #[test]
    fn guard_drops_requests_until_commit() {
        let t0 = Instant::now();
        let cfg = RotationConfig::slide_defaults()
            .with_transition(Duration::from_millis(400));
        let mut r = Rotation::new(5, cfg);

        assert!(r.advance(t0));
        assert_eq!(r.target_index(), Some(1));

        // Everything inside the open window is dropped, target untouched.
        assert!(!r.advance(t0 + Duration::from_millis(100)));
        assert!(!r.retreat(t0 + Duration::from_millis(200)));
        assert!(!r.jump_to(4, t0 + Duration::from_millis(300)));
        assert_eq!(r.target_index(), Some(1));
        assert_eq!(r.current_index(), 0);

        // Not due yet.
        assert_eq!(r.tick(t0 + Duration::from_millis(399)), None);
        assert!(r.is_transitioning());

        assert_eq!(r.tick(t0 + Duration::from_millis(400)), Some(1));
        assert!(!r.is_transitioning());

        // Guard released: the next request is honored.
        assert!(r.advance(t0 + Duration::from_millis(401)));
    }

    #[test]
    fn progress_eases_toward_commit() {
        let t0 = Instant::now();
        let cfg = RotationConfig {
            easing: Easing::Linear,
            ..RotationConfig::slide_defaults()
        }
        .with_transition(Duration::from_millis(400));
        let mut r = Rotation::new(2, cfg);
        assert_eq!(r.progress(t0), 1.0);

        assert!(r.advance(t0));
        assert_eq!(r.progress(t0), 0.0);
        let half = r.progress(t0 + Duration::from_millis(200));
        assert!((half - 0.5).abs() < 1e-3);
        assert_eq!(r.progress(t0 + Duration::from_millis(500)), 1.0);
    }

    #[test]
    fn stop_auto_advance_leaves_open_transition_running() {
        let t0 = Instant::now();
        let cfg = RotationConfig::slide_defaults()
            .with_transition(Duration::from_millis(400));
        let mut r = Rotation::new(3, cfg);
        r.start_auto_advance(t0);
        assert!(r.advance(t0));
        r.stop_auto_advance();
        assert!(!r.auto_advance_running());
        assert!(r.is_transitioning());
        assert_eq!(r.tick(t0 + Duration::from_millis(400)), Some(1));
    }

    #[test]
    fn can_advance_reflects_clamp_edges() {
        let now = Instant::now();
        let cfg = instant_config().with_boundary(BoundaryPolicy::Clamp);
        let mut r = Rotation::new(3, cfg);
        assert!(r.can_advance());
        assert!(!r.can_retreat());

        r.jump_to(2, now);
        r.tick(now);
        assert!(!r.can_advance());
        assert!(r.can_retreat());
    }
}
