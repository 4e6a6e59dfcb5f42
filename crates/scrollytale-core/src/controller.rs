//! Section controller: glues input capture, the state machine, the
//! navigator, and the side-effect boundary into one tick-driven unit.
//!
//! Raw input flows in through the `handle_*` methods, gets normalized and
//! debounced, and becomes at most one in-flight navigation. `tick()` drives
//! the navigator each frame; on completion the new section is committed and
//! the side effects fan out in fixed order. `teardown()` makes every entry
//! point a no-op, so nothing fires after the host has unmounted the page.

use std::time::Duration;

use tokio::sync::watch;
use tracing::{debug, warn};

use crate::config::ControllerConfig;
use crate::debounce::Debouncer;
use crate::effects::SectionEffects;
use crate::input::InputCapture;
use crate::intent::{InteractionIntent, NavKey};
use crate::machine::SectionMachine;
use crate::progress::ProgressTracker;
use crate::scroll::SectionNavigator;
use crate::sections::SectionTable;

/// Cross-fade into the per-section avatar clip.
const AVATAR_FADE: Duration = Duration::from_millis(1000);

pub struct SectionController {
    machine: SectionMachine,
    input: InputCapture,
    navigator: SectionNavigator,
    tracker: ProgressTracker,
    wheel_debounce: Debouncer<InteractionIntent>,
    table: SectionTable,
    effects: SectionEffects,
    section_tx: watch::Sender<usize>,
    torn_down: bool,
}

impl SectionController {
    pub fn new(
        total_sections: usize,
        table: SectionTable,
        config: &ControllerConfig,
        viewport_height: f64,
        effects: SectionEffects,
    ) -> Self {
        let (section_tx, _) = watch::channel(0);
        Self {
            machine: SectionMachine::new(total_sections),
            input: InputCapture::new(
                config.wheel_threshold,
                config.touch_threshold,
                config.cooldown(),
            ),
            navigator: SectionNavigator::new(
                config.navigation_duration(),
                config.navigation_timeout(),
                config.easing,
            ),
            tracker: ProgressTracker::new(viewport_height),
            wheel_debounce: Debouncer::new(config.wheel_debounce()),
            table,
            effects,
            section_tx,
            torn_down: false,
        }
    }

    /// Last committed section.
    #[inline]
    pub fn current_section(&self) -> usize {
        self.machine.current_section()
    }

    #[inline]
    pub fn total_sections(&self) -> usize {
        self.machine.total_sections()
    }

    #[inline]
    pub fn is_transitioning(&self) -> bool {
        self.machine.is_transitioning()
    }

    /// Current scroll offset for rendering.
    #[inline]
    pub fn scroll_offset(&self) -> f64 {
        self.navigator.current_offset()
    }

    /// Observable committed section. Receivers see every commit.
    pub fn subscribe(&self) -> watch::Receiver<usize> {
        self.section_tx.subscribe()
    }

    pub fn set_viewport_height(&mut self, viewport_height: f64) {
        self.tracker.set_viewport_height(viewport_height);
    }

    /// Programmatic jump (the section-indicator click path).
    pub fn scroll_to_section(&mut self, section: usize) {
        self.submit(InteractionIntent::JumpTo(section));
    }

    pub fn go_to_next_section(&mut self) {
        self.submit(InteractionIntent::Advance);
    }

    pub fn go_to_prev_section(&mut self) {
        self.submit(InteractionIntent::Retreat);
    }

    /// Feed a wheel event. Accepted intents are debounced so a burst of
    /// wheel events collapses into a single navigation decision.
    pub fn handle_wheel(&mut self, delta_y: f64) {
        if self.torn_down || self.machine.is_transitioning() {
            return;
        }
        if let Some(intent) = self.input.on_wheel(delta_y) {
            self.wheel_debounce.push(intent);
        }
    }

    pub fn handle_touch_start(&mut self, y: f64) {
        if self.torn_down {
            return;
        }
        self.input.on_touch_start(y);
    }

    pub fn handle_touch_end(&mut self, y: f64) {
        if self.torn_down {
            return;
        }
        // Consume the gesture even while transitioning, so the recorded
        // touch origin never leaks into a later unrelated touch end.
        let intent = self.input.on_touch_end(y);
        if self.machine.is_transitioning() {
            return;
        }
        if let Some(intent) = intent {
            self.submit(intent);
        }
    }

    pub fn handle_key(&mut self, key: NavKey) {
        if self.torn_down || self.machine.is_transitioning() {
            return;
        }
        if let Some(intent) = self.input.on_key(key, self.machine.total_sections()) {
            self.submit(intent);
        }
    }

    /// Advance one frame: flush the wheel debounce, step the navigator, and
    /// on completion commit and fan out side effects. Returns the scroll
    /// offset to render.
    pub async fn tick(&mut self) -> f64 {
        if self.torn_down {
            return self.navigator.current_offset();
        }

        if let Some(intent) = self.wheel_debounce.poll() {
            self.submit(intent);
        }

        let frame = self.navigator.update();
        if frame.completed.is_some() {
            if let Some(committed) = self.machine.commit() {
                debug!(section = committed, "navigation committed");
                self.dispatch(committed).await;
            }
        }
        frame.offset
    }

    /// Passive tracking of native scroll. Suppressed while a programmatic
    /// navigation owns the offset. Midpoint crossings commit one section at
    /// a time, in travel order, so notifications are never skipped.
    pub async fn observe_scroll(&mut self, offset: f64) {
        if self.torn_down || self.navigator.is_navigating() {
            return;
        }
        self.navigator.set_offset(offset);

        let target = self
            .tracker
            .nearest_section(offset, self.machine.total_sections());
        while self.machine.current_section() != target {
            let step = if target > self.machine.current_section() {
                self.machine.current_section() + 1
            } else {
                self.machine.current_section() - 1
            };
            match self.machine.commit_passive(step) {
                Some(committed) => self.dispatch(committed).await,
                None => break,
            }
        }
    }

    /// Release everything: pending debounce, in-flight navigation, cool-down
    /// state. Afterwards every entry point is a no-op and no section-change
    /// notification ever fires again.
    pub fn teardown(&mut self) {
        self.torn_down = true;
        self.wheel_debounce.cancel();
        self.navigator.cancel();
        self.machine.abort();
        self.input.reset();
    }

    #[inline]
    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    fn submit(&mut self, intent: InteractionIntent) {
        if self.torn_down {
            return;
        }
        if let Some(target) = self.machine.apply(intent) {
            debug!(?intent, target, "navigation started");
            self.navigator.start(target, self.tracker.viewport_height());
        }
    }

    /// Fan out a committed section change. Fixed order: audio cue, avatar
    /// animation, indicator, then the watch channel. Each step is
    /// best-effort; a failure is logged and the rest still run.
    async fn dispatch(&mut self, section: usize) {
        self.effects.audio.play_scroll_sound();

        let animation_id = self.table.animation_id(section);
        if let Err(e) = self
            .effects
            .avatar
            .play_animation_by_id(animation_id, true, Some(AVATAR_FADE))
            .await
        {
            warn!(section, animation_id, error = %e, "avatar animation trigger failed");
        }

        self.effects.indicator.set_active_section(section);
        let _ = self.section_tx.send(section);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::effects::{AudioCuePlayer, AvatarAnimator, SectionIndicator};
    use crate::error::Error;
    use async_trait::async_trait;
    use std::sync::{Arc, Mutex};

    /// Records every effect call in arrival order.
    #[derive(Default)]
    struct Recorder {
        calls: Mutex<Vec<String>>,
        fail_avatar: bool,
    }

    impl Recorder {
        fn failing() -> Self {
            Self {
                calls: Mutex::new(Vec::new()),
                fail_avatar: true,
            }
        }

        fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }
    }

    impl AudioCuePlayer for Recorder {
        fn play_scroll_sound(&self) {
            self.calls.lock().unwrap().push("audio".into());
        }
    }

    #[async_trait]
    impl AvatarAnimator for Recorder {
        async fn play_animation_by_id(
            &self,
            id: &str,
            _looped: bool,
            _transition: Option<Duration>,
        ) -> crate::Result<()> {
            self.calls.lock().unwrap().push(format!("avatar:{id}"));
            if self.fail_avatar {
                Err(Error::Animation("clip failed to load".into()))
            } else {
                Ok(())
            }
        }
    }

    impl SectionIndicator for Recorder {
        fn set_active_section(&self, section: usize) {
            self.calls.lock().unwrap().push(format!("indicator:{section}"));
        }
    }

    fn fast_config() -> ControllerConfig {
        ControllerConfig {
            navigation_duration_ms: 0,
            wheel_debounce_ms: 0,
            ..Default::default()
        }
    }

    fn controller_with(recorder: Arc<Recorder>, total: usize) -> SectionController {
        let effects = SectionEffects {
            audio: recorder.clone(),
            avatar: recorder.clone(),
            indicator: recorder,
        };
        let table = SectionTable::new("standing-idle")
            .with(0, "dormant")
            .with(1, "awakening")
            .with(2, "intelligence")
            .with(3, "mystic");
        SectionController::new(total, table, &fast_config(), 100.0, effects)
    }

    #[tokio::test]
    async fn test_arrow_down_three_times_then_saturates() {
        let rec = Arc::new(Recorder::default());
        let mut ctl = controller_with(rec.clone(), 4);

        for _ in 0..3 {
            ctl.handle_key(NavKey::ArrowDown);
            ctl.tick().await;
        }
        assert_eq!(ctl.current_section(), 3);

        let before = rec.calls().len();
        ctl.handle_key(NavKey::ArrowDown);
        ctl.tick().await;
        assert_eq!(ctl.current_section(), 3);
        assert_eq!(rec.calls().len(), before, "saturated advance must not notify");
    }

    #[tokio::test]
    async fn test_double_jump_drops_second_call() {
        let rec = Arc::new(Recorder::default());
        let mut ctl = controller_with(rec.clone(), 4);

        ctl.scroll_to_section(2);
        ctl.scroll_to_section(2); // while transitioning: dropped
        assert!(ctl.is_transitioning());
        ctl.tick().await;

        assert_eq!(ctl.current_section(), 2);
        let indicator_calls = rec
            .calls()
            .iter()
            .filter(|c| c.starts_with("indicator"))
            .count();
        assert_eq!(indicator_calls, 1);
    }

    #[tokio::test]
    async fn test_jump_to_current_is_silent() {
        let rec = Arc::new(Recorder::default());
        let mut ctl = controller_with(rec.clone(), 4);

        ctl.scroll_to_section(0);
        ctl.tick().await;
        assert!(rec.calls().is_empty());
        assert!(!ctl.is_transitioning());
    }

    #[tokio::test]
    async fn test_out_of_range_jump_is_silent() {
        let rec = Arc::new(Recorder::default());
        let mut ctl = controller_with(rec.clone(), 4);

        ctl.scroll_to_section(7);
        ctl.tick().await;
        assert_eq!(ctl.current_section(), 0);
        assert!(rec.calls().is_empty());
    }

    #[tokio::test]
    async fn test_dispatch_order_and_content() {
        let rec = Arc::new(Recorder::default());
        let mut ctl = controller_with(rec.clone(), 4);

        ctl.go_to_next_section();
        ctl.tick().await;

        assert_eq!(
            rec.calls(),
            vec!["audio", "avatar:awakening", "indicator:1"]
        );
    }

    #[tokio::test]
    async fn test_avatar_failure_does_not_block_indicator() {
        let rec = Arc::new(Recorder::failing());
        let mut ctl = controller_with(rec.clone(), 4);

        ctl.go_to_next_section();
        ctl.tick().await;

        assert_eq!(ctl.current_section(), 1);
        assert_eq!(
            rec.calls(),
            vec!["audio", "avatar:awakening", "indicator:1"]
        );
    }

    #[tokio::test]
    async fn test_unknown_section_falls_back_to_idle_animation() {
        let rec = Arc::new(Recorder::default());
        let effects = SectionEffects {
            audio: rec.clone(),
            avatar: rec.clone(),
            indicator: rec.clone(),
        };
        // Table has no entry for section 1.
        let table = SectionTable::new("standing-idle").with(0, "dormant");
        let mut ctl = SectionController::new(4, table, &fast_config(), 100.0, effects);

        ctl.go_to_next_section();
        ctl.tick().await;
        assert!(rec.calls().contains(&"avatar:standing-idle".to_string()));
    }

    #[tokio::test]
    async fn test_wheel_burst_advances_once() {
        let rec = Arc::new(Recorder::default());
        let mut ctl = controller_with(rec.clone(), 4);

        for _ in 0..20 {
            ctl.handle_wheel(15.0);
        }
        ctl.tick().await; // flush debounce, start navigation
        ctl.tick().await; // complete

        assert_eq!(ctl.current_section(), 1);
        let indicator_calls = rec
            .calls()
            .iter()
            .filter(|c| c.starts_with("indicator"))
            .count();
        assert_eq!(indicator_calls, 1);
    }

    #[tokio::test]
    async fn test_watch_subscription_sees_commit() {
        let rec = Arc::new(Recorder::default());
        let mut ctl = controller_with(rec, 4);
        let mut rx = ctl.subscribe();

        ctl.scroll_to_section(2);
        ctl.tick().await;

        assert!(rx.has_changed().unwrap());
        assert_eq!(*rx.borrow_and_update(), 2);
    }

    #[tokio::test]
    async fn test_teardown_suppresses_pending_commit() {
        let rec = Arc::new(Recorder::default());
        let mut ctl = controller_with(rec.clone(), 4);

        ctl.scroll_to_section(3);
        ctl.teardown();
        for _ in 0..5 {
            ctl.tick().await;
        }

        assert!(rec.calls().is_empty());
        assert_eq!(ctl.current_section(), 0);
    }

    #[tokio::test]
    async fn test_teardown_makes_entry_points_noops() {
        let rec = Arc::new(Recorder::default());
        let mut ctl = controller_with(rec.clone(), 4);
        ctl.teardown();

        ctl.handle_key(NavKey::ArrowDown);
        ctl.handle_wheel(100.0);
        ctl.handle_touch_start(400.0);
        ctl.handle_touch_end(100.0);
        ctl.scroll_to_section(2);
        ctl.observe_scroll(350.0).await;
        ctl.tick().await;

        assert!(rec.calls().is_empty());
        assert_eq!(ctl.current_section(), 0);
    }

    #[tokio::test]
    async fn test_passive_scroll_commits_midpoint_crossing() {
        let rec = Arc::new(Recorder::default());
        let mut ctl = controller_with(rec.clone(), 4);

        ctl.observe_scroll(40.0).await;
        assert_eq!(ctl.current_section(), 0);

        ctl.observe_scroll(60.0).await;
        assert_eq!(ctl.current_section(), 1);
        assert_eq!(rec.calls(), vec!["audio", "avatar:awakening", "indicator:1"]);
    }

    #[tokio::test]
    async fn test_passive_scroll_walks_without_skipping() {
        let rec = Arc::new(Recorder::default());
        let mut ctl = controller_with(rec.clone(), 4);

        ctl.observe_scroll(350.0).await;
        assert_eq!(ctl.current_section(), 3);
        let indicators: Vec<_> = rec
            .calls()
            .into_iter()
            .filter(|c| c.starts_with("indicator"))
            .collect();
        assert_eq!(indicators, vec!["indicator:1", "indicator:2", "indicator:3"]);
    }

    #[tokio::test]
    async fn test_touch_swipe_navigates() {
        let rec = Arc::new(Recorder::default());
        let mut ctl = controller_with(rec, 4);

        ctl.handle_touch_start(400.0);
        ctl.handle_touch_end(300.0);
        ctl.tick().await;
        assert_eq!(ctl.current_section(), 1);
    }

    #[tokio::test]
    async fn test_touch_end_during_transition_clears_origin() {
        let rec = Arc::new(Recorder::default());
        let mut ctl = controller_with(rec, 4);

        ctl.scroll_to_section(1);
        assert!(ctl.is_transitioning());
        // Gesture completed mid-transition: consumed and dropped.
        ctl.handle_touch_start(400.0);
        ctl.handle_touch_end(100.0);
        ctl.tick().await;
        assert_eq!(ctl.current_section(), 1);

        // A touch end with no fresh touch start must not resolve against
        // the origin of the dropped gesture.
        ctl.handle_touch_end(50.0);
        assert!(!ctl.is_transitioning());
        ctl.tick().await;
        assert_eq!(ctl.current_section(), 1);
    }

    #[tokio::test]
    async fn test_advance_retreat_clamp_property() {
        let rec = Arc::new(Recorder::default());
        let mut ctl = controller_with(rec, 4);

        // 5 advances, 2 retreats, transitions completing in between:
        // clamp(5 - 2, 0, 3) == 3 only if ordering matters; interleaved it
        // tracks clamp(running, 0, 3).
        for _ in 0..5 {
            ctl.go_to_next_section();
            ctl.tick().await;
        }
        assert_eq!(ctl.current_section(), 3);
        for _ in 0..2 {
            ctl.go_to_prev_section();
            ctl.tick().await;
        }
        assert_eq!(ctl.current_section(), 1);
    }
}
