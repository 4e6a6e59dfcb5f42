//! Host-side implementations of the controller's side-effect contracts.
//!
//! The terminal stands in for the page: the audio cue is the terminal bell,
//! the avatar boundary logs the command it would send to the character
//! controller, and the indicator publishes the active section for the dot
//! widget to read.

use std::io::Write;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use tracing::{debug, info};

use scrollytale_core::{AudioCuePlayer, AvatarAnimator, Result, SectionIndicator};

/// Terminal-bell audio cues.
///
/// Cues stay silent until the first user interaction unlocks audio, mirroring
/// browser autoplay policy, and are a no-op whenever audio is disabled.
pub struct BellCue {
    enabled: AtomicBool,
    unlocked: AtomicBool,
    background_track: bool,
}

impl BellCue {
    pub fn new(enabled: bool, background_track: bool) -> Self {
        Self {
            enabled: AtomicBool::new(enabled),
            unlocked: AtomicBool::new(false),
            background_track,
        }
    }

    /// First-interaction unlock. Idempotent.
    pub fn unlock(&self) {
        if !self.unlocked.swap(true, Ordering::SeqCst) {
            debug!("audio unlocked by first interaction");
            if self.background_track && self.enabled.load(Ordering::SeqCst) {
                info!("background track started");
            }
        }
    }

    /// Flip the master switch; returns the new state.
    pub fn toggle(&self) -> bool {
        let enabled = !self.enabled.load(Ordering::SeqCst);
        self.enabled.store(enabled, Ordering::SeqCst);
        if self.background_track {
            if enabled {
                info!("background track started");
            } else {
                info!("background track stopped");
            }
        }
        enabled
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled.load(Ordering::SeqCst)
    }
}

impl AudioCuePlayer for BellCue {
    fn play_scroll_sound(&self) {
        if !self.enabled.load(Ordering::SeqCst) || !self.unlocked.load(Ordering::SeqCst) {
            return;
        }
        let mut stdout = std::io::stdout();
        // A blocked bell is a missed cue, nothing more.
        let _ = stdout.write_all(b"\x07");
        let _ = stdout.flush();
    }
}

/// Avatar boundary that logs the play command instead of driving a model.
pub struct LogAnimator;

#[async_trait]
impl AvatarAnimator for LogAnimator {
    async fn play_animation_by_id(
        &self,
        id: &str,
        looped: bool,
        transition: Option<Duration>,
    ) -> Result<()> {
        info!(animation = id, looped, ?transition, "avatar animation");
        Ok(())
    }
}

/// Shared active-section slot the indicator widget renders from.
#[derive(Default)]
pub struct IndicatorHandle {
    active: AtomicUsize,
}

impl IndicatorHandle {
    pub fn active_section(&self) -> usize {
        self.active.load(Ordering::SeqCst)
    }
}

impl SectionIndicator for IndicatorHandle {
    fn set_active_section(&self, section: usize) {
        self.active.store(section, Ordering::SeqCst);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bell_cue_locked_until_first_interaction() {
        let cue = BellCue::new(true, false);
        // Locked: play is a no-op (no panic, no output assertion possible).
        cue.play_scroll_sound();
        cue.unlock();
        assert!(cue.is_enabled());
    }

    #[test]
    fn test_bell_cue_toggle() {
        let cue = BellCue::new(true, false);
        assert!(!cue.toggle());
        assert!(!cue.is_enabled());
        assert!(cue.toggle());
    }

    #[test]
    fn test_indicator_handle_roundtrip() {
        let handle = IndicatorHandle::default();
        assert_eq!(handle.active_section(), 0);
        handle.set_active_section(2);
        assert_eq!(handle.active_section(), 2);
    }
}
