//! Input capture: normalizes wheel, touch, and keyboard events into a single
//! intent stream.
//!
//! Wheel deltas accumulate until they clear a threshold so trackpad
//! micro-scrolls never trigger a full section change; once an intent is
//! emitted the capture enters a cool-down shared with touch, so one
//! continuous gesture cannot fire multiple transitions. Keyboard events map
//! directly and carry no cool-down.

use std::time::{Duration, Instant};

use crate::intent::{Direction, InteractionIntent, NavKey};

#[derive(Debug, Clone)]
pub struct InputCapture {
    wheel_threshold: f64,
    touch_threshold: f64,
    cooldown: Duration,
    wheel_accum: f64,
    cooldown_until: Option<Instant>,
    touch_start_y: Option<f64>,
}

impl InputCapture {
    pub fn new(wheel_threshold: f64, touch_threshold: f64, cooldown: Duration) -> Self {
        Self {
            wheel_threshold,
            touch_threshold,
            cooldown,
            wheel_accum: 0.0,
            cooldown_until: None,
            touch_start_y: None,
        }
    }

    /// Feed a wheel event. Positive `delta_y` scrolls forward.
    ///
    /// Events during the cool-down are dropped entirely; they do not
    /// accumulate toward the next threshold crossing.
    pub fn on_wheel(&mut self, delta_y: f64) -> Option<InteractionIntent> {
        if self.in_cooldown() {
            return None;
        }

        self.wheel_accum += delta_y;
        if self.wheel_accum.abs() <= self.wheel_threshold {
            return None;
        }

        let direction = if self.wheel_accum > 0.0 {
            Direction::Forward
        } else {
            Direction::Backward
        };
        self.wheel_accum = 0.0;
        self.begin_cooldown();

        Some(match direction {
            Direction::Forward => InteractionIntent::Advance,
            Direction::Backward => InteractionIntent::Retreat,
        })
    }

    /// Record the origin of a touch gesture.
    pub fn on_touch_start(&mut self, y: f64) {
        self.touch_start_y = Some(y);
    }

    /// Resolve a touch gesture. A swipe up (finger moved toward the top of
    /// the screen) advances; a swipe down retreats.
    pub fn on_touch_end(&mut self, y: f64) -> Option<InteractionIntent> {
        let start = self.touch_start_y.take()?;
        if self.in_cooldown() {
            return None;
        }

        let delta = start - y;
        if delta.abs() <= self.touch_threshold {
            return None;
        }

        self.begin_cooldown();
        Some(if delta > 0.0 {
            InteractionIntent::Advance
        } else {
            InteractionIntent::Retreat
        })
    }

    /// Map a navigation key to an intent. `total_sections` bounds the digit
    /// keys; an out-of-range digit produces nothing.
    pub fn on_key(&mut self, key: NavKey, total_sections: usize) -> Option<InteractionIntent> {
        match key {
            NavKey::ArrowDown | NavKey::PageDown | NavKey::Space => {
                Some(InteractionIntent::Advance)
            }
            NavKey::ArrowUp | NavKey::PageUp => Some(InteractionIntent::Retreat),
            NavKey::Home => Some(InteractionIntent::JumpTo(0)),
            NavKey::End => Some(InteractionIntent::JumpTo(total_sections.saturating_sub(1))),
            NavKey::Digit(d) => {
                let d = d as usize;
                if d >= 1 && d <= total_sections {
                    Some(InteractionIntent::JumpTo(d - 1))
                } else {
                    None
                }
            }
        }
    }

    /// Drop accumulated wheel delta, any touch origin, and the cool-down.
    pub fn reset(&mut self) {
        self.wheel_accum = 0.0;
        self.cooldown_until = None;
        self.touch_start_y = None;
    }

    fn in_cooldown(&self) -> bool {
        self.cooldown_until
            .is_some_and(|until| Instant::now() < until)
    }

    fn begin_cooldown(&mut self) {
        self.cooldown_until = Some(Instant::now() + self.cooldown);
    }
}
