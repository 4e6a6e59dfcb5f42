//! Section navigator: the interpolated scroll-to-target tween.
//!
//! Owns the continuous scroll offset and moves it to a section boundary over
//! a fixed duration. `update()` is called once per frame; completion is
//! reported exactly once, and `cancel()` guarantees the completion is never
//! reported after teardown.

use std::time::{Duration, Instant};

use super::easing::EasingType;
use super::timing::{is_complete, lerp, progress};

/// In-flight navigation state.
#[derive(Debug, Clone)]
struct ActiveNavigation {
    start: Instant,
    from: f64,
    to: f64,
    /// Section index reported on completion.
    target: usize,
    duration: Duration,
    easing: EasingType,
}

/// Result of one navigator frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NavigatorTick {
    /// Current interpolated scroll offset in pixels.
    pub offset: f64,
    /// Set exactly once, on the frame the navigation finishes.
    pub completed: Option<usize>,
}

/// Tick-driven tween of the scroll offset toward a section boundary.
///
/// At most one navigation is active at a time; starting a new one replaces
/// the old without reporting its completion. A hard timeout force-completes
/// a navigation whose configured duration would otherwise leave the caller's
/// state machine stuck in its navigating phase.
#[derive(Debug, Clone)]
pub struct SectionNavigator {
    active: Option<ActiveNavigation>,
    offset: f64,
    duration: Duration,
    hard_timeout: Duration,
    easing: EasingType,
}

impl SectionNavigator {
    pub fn new(duration: Duration, hard_timeout: Duration, easing: EasingType) -> Self {
        Self {
            active: None,
            offset: 0.0,
            duration,
            hard_timeout,
            easing,
        }
    }

    /// Check if a navigation is currently in flight.
    #[inline]
    pub fn is_navigating(&self) -> bool {
        self.active.is_some()
    }

    /// Target section of the in-flight navigation, if any.
    pub fn target(&self) -> Option<usize> {
        self.active.as_ref().map(|a| a.target)
    }

    /// Current interpolated scroll offset.
    #[inline]
    pub fn current_offset(&self) -> f64 {
        self.offset
    }

    /// Sync the offset from native scrolling. Only meaningful while idle;
    /// an in-flight navigation owns the offset and is left untouched.
    pub fn set_offset(&mut self, offset: f64) {
        if self.active.is_none() {
            self.offset = offset.max(0.0);
        }
    }

    /// Begin a navigation to `target * viewport_height`.
    pub fn start(&mut self, target: usize, viewport_height: f64) {
        let to = target as f64 * viewport_height;
        self.active = Some(ActiveNavigation {
            start: Instant::now(),
            from: self.offset,
            to,
            target,
            // The hard timeout caps a misconfigured duration so the caller
            // always eventually sees completion.
            duration: self.duration.min(self.hard_timeout),
            easing: self.easing,
        });
    }

    /// Advance the tween one frame.
    pub fn update(&mut self) -> NavigatorTick {
        let Some(anim) = self.active.as_ref() else {
            return NavigatorTick {
                offset: self.offset,
                completed: None,
            };
        };

        let forced = anim.start.elapsed() >= self.hard_timeout;
        if forced || is_complete(anim.start, anim.duration) {
            self.offset = anim.to;
            let target = anim.target;
            self.active = None;
            return NavigatorTick {
                offset: self.offset,
                completed: Some(target),
            };
        }

        let t = progress(anim.start, anim.duration);
        let eased = anim.easing.apply(t);
        self.offset = lerp(anim.from, anim.to, eased);
        NavigatorTick {
            offset: self.offset,
            completed: None,
        }
    }

    /// Abort any in-flight navigation without reporting completion.
    pub fn cancel(&mut self) {
        self.active = None;
    }
}
