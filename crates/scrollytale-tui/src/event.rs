use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEvent, KeyEventKind, MouseButton, MouseEventKind};

/// Scroll distance one wheel notch stands for, in the page's pixel space.
/// One notch clears the controller's wheel threshold on its own, matching a
/// deliberate flick; trackpad-style micro deltas would need to accumulate.
pub const WHEEL_NOTCH: f64 = 12.0;

/// Event handler for terminal events.
///
/// `next()` polls at the idle tick rate; `next_animation()` polls at the
/// animation frame rate and is used while a navigation is in flight.
pub struct EventHandler {
    tick_rate: Duration,
    animation_tick_rate: Duration,
}

/// Application events, already normalized toward the controller's input
/// model: mouse wheel becomes a signed pixel delta, and a left-button
/// press/release pair becomes a touch gesture.
#[derive(Debug)]
pub enum AppEvent {
    /// A key was pressed.
    Key(KeyEvent),
    /// Wheel movement; positive scrolls forward.
    Wheel(f64),
    /// Start of a drag gesture (terminal row).
    TouchStart(u16),
    /// End of a drag gesture (terminal row).
    TouchEnd(u16),
    /// Terminal was resized.
    Resize(u16, u16),
    /// Tick event for periodic updates.
    Tick,
}

impl EventHandler {
    pub fn new(tick_rate: Duration, animation_tick_rate: Duration) -> Self {
        Self {
            tick_rate,
            animation_tick_rate,
        }
    }

    /// Poll for the next event at the idle rate.
    pub fn next(&self) -> Result<Option<AppEvent>> {
        self.poll(self.tick_rate)
    }

    /// Poll for the next event at the animation frame rate.
    pub fn next_animation(&self) -> Result<Option<AppEvent>> {
        self.poll(self.animation_tick_rate)
    }

    fn poll(&self, timeout: Duration) -> Result<Option<AppEvent>> {
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => {
                    // Only handle key press events, ignore release events
                    // (crossterm 0.27+ sends release events on some systems)
                    if key.kind == KeyEventKind::Press {
                        Ok(Some(AppEvent::Key(key)))
                    } else {
                        Ok(None)
                    }
                }
                Event::Mouse(mouse) => Ok(match mouse.kind {
                    MouseEventKind::ScrollDown => Some(AppEvent::Wheel(WHEEL_NOTCH)),
                    MouseEventKind::ScrollUp => Some(AppEvent::Wheel(-WHEEL_NOTCH)),
                    MouseEventKind::Down(MouseButton::Left) => {
                        Some(AppEvent::TouchStart(mouse.row))
                    }
                    MouseEventKind::Up(MouseButton::Left) => Some(AppEvent::TouchEnd(mouse.row)),
                    _ => None,
                }),
                Event::Resize(w, h) => Ok(Some(AppEvent::Resize(w, h))),
                _ => Ok(None),
            }
        } else {
            Ok(Some(AppEvent::Tick))
        }
    }
}
