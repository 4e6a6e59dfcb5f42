//! Side-effect boundary.
//!
//! The controller consumes these contracts but never owns their internals:
//! avatar animation, audio cues, and the section indicator all live on the
//! host side. Everything here is best-effort; a failing animator must never
//! block the audio cue or the indicator update.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use crate::error::Result;

/// Avatar animation trigger, an explicit command interface rather than a
/// mutable bag of tween-target fields polled by the animation engine.
#[async_trait]
pub trait AvatarAnimator: Send + Sync {
    /// Play an animation clip by id. `transition` is the cross-fade duration
    /// into the new clip.
    async fn play_animation_by_id(
        &self,
        id: &str,
        looped: bool,
        transition: Option<Duration>,
    ) -> Result<()>;
}

/// Fire-and-forget audio cue. Must be safe to call when audio is disabled or
/// the first user interaction has not happened yet.
pub trait AudioCuePlayer: Send + Sync {
    fn play_scroll_sound(&self);
}

/// Visual section indicator (the dot column).
pub trait SectionIndicator: Send + Sync {
    fn set_active_section(&self, section: usize);
}

/// The host-supplied collaborators, bundled for the controller.
#[derive(Clone)]
pub struct SectionEffects {
    pub audio: Arc<dyn AudioCuePlayer>,
    pub avatar: Arc<dyn AvatarAnimator>,
    pub indicator: Arc<dyn SectionIndicator>,
}

/// No-op collaborators, for hosts (and tests) that only care about the
/// state machine.
pub struct NullEffects;

#[async_trait]
impl AvatarAnimator for NullEffects {
    async fn play_animation_by_id(
        &self,
        _id: &str,
        _looped: bool,
        _transition: Option<Duration>,
    ) -> Result<()> {
        Ok(())
    }
}

impl AudioCuePlayer for NullEffects {
    fn play_scroll_sound(&self) {}
}

impl SectionIndicator for NullEffects {
    fn set_active_section(&self, _section: usize) {}
}

impl SectionEffects {
    /// Effects that do nothing at all.
    pub fn null() -> Self {
        let null = Arc::new(NullEffects);
        Self {
            audio: null.clone(),
            avatar: null.clone(),
            indicator: null,
        }
    }
}
