use std::sync::Arc;
use std::time::Duration;

use scrollytale_core::debounce::Debouncer;
use scrollytale_core::{AppConfig, SectionController, SectionEffects, SectionTable};

use crate::effects::{BellCue, IndicatorHandle, LogAnimator};
use crate::input::Action;
use crate::theme::Theme;

/// Pixel height one terminal row stands for. The controller thinks in page
/// pixels; the host converts rows at this scale.
pub const CELL_PX: f64 = 16.0;

/// Overlapping first-interaction triggers (key + click from the same
/// gesture) collapse into one unlock.
const FIRST_INTERACTION_DEBOUNCE: Duration = Duration::from_millis(200);

/// Content of one full-viewport section.
#[derive(Debug, Clone)]
pub struct SectionContent {
    pub title: String,
    pub tagline: String,
    /// Avatar animation id played when this section commits.
    pub animation: String,
}

impl SectionContent {
    pub fn new(
        title: impl Into<String>,
        tagline: impl Into<String>,
        animation: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            tagline: tagline.into(),
            animation: animation.into(),
        }
    }

    /// The built-in four-section story.
    pub fn demo() -> Vec<SectionContent> {
        vec![
            SectionContent::new("Introduction", "A story told one viewport at a time", "dormant"),
            SectionContent::new("Skills", "What the avatar can do", "awakening"),
            SectionContent::new("Fortune", "Ask the oracle", "intelligence"),
            SectionContent::new("Contact", "Say hello", "mystic"),
        ]
    }

    /// Demo story sized to `total` sections: the built-in four, truncated or
    /// extended with idle chapters. At least one section is always produced.
    pub fn story(total: usize) -> Vec<SectionContent> {
        let total = total.max(1);
        let mut sections = Self::demo();
        sections.truncate(total);
        for index in sections.len()..total {
            sections.push(SectionContent::new(
                format!("Chapter {}", index + 1),
                "More of the story",
                "standing-idle",
            ));
        }
        sections
    }
}

/// Application state.
pub struct App {
    pub controller: SectionController,
    pub sections: Vec<SectionContent>,
    pub theme: Theme,
    /// Last rendered scroll offset in page pixels.
    pub offset_px: f64,
    /// Rows available to the section view (status bar excluded).
    pub viewport_rows: u16,
    pub should_quit: bool,
    pub status_message: Option<String>,
    pub audio: Arc<BellCue>,
    pub indicator: Arc<IndicatorHandle>,
    first_interaction: Debouncer<()>,
    interacted: bool,
}

impl App {
    pub fn new(config: &AppConfig, sections: Vec<SectionContent>, viewport_rows: u16) -> Self {
        let audio = Arc::new(BellCue::new(
            config.audio.enabled,
            config.audio.background_track,
        ));
        let indicator = Arc::new(IndicatorHandle::default());

        let mut table = SectionTable::new("standing-idle");
        for (index, section) in sections.iter().enumerate() {
            table = table.with(index, section.animation.clone());
        }

        let effects = SectionEffects {
            audio: audio.clone(),
            avatar: Arc::new(LogAnimator),
            indicator: indicator.clone(),
        };

        let controller = SectionController::new(
            sections.len(),
            table,
            &config.controller,
            viewport_rows as f64 * CELL_PX,
            effects,
        );

        Self {
            controller,
            sections,
            theme: Theme::default(),
            offset_px: 0.0,
            viewport_rows,
            should_quit: false,
            status_message: None,
            audio,
            indicator,
            first_interaction: Debouncer::new(FIRST_INTERACTION_DEBOUNCE),
            interacted: false,
        }
    }

    pub fn on_action(&mut self, action: Action) {
        self.note_interaction();
        match action {
            Action::Quit => self.should_quit = true,
            Action::ToggleAudio => {
                let enabled = self.audio.toggle();
                self.status_message =
                    Some(if enabled { "audio on" } else { "audio off" }.to_string());
            }
            Action::Nav(key) => self.controller.handle_key(key),
            Action::None => {}
        }
    }

    pub fn on_wheel(&mut self, delta_y: f64) {
        self.note_interaction();
        self.controller.handle_wheel(delta_y);
    }

    pub fn on_touch_start(&mut self, row: u16) {
        self.note_interaction();
        self.controller.handle_touch_start(row as f64 * CELL_PX);
    }

    pub fn on_touch_end(&mut self, row: u16) {
        self.controller.handle_touch_end(row as f64 * CELL_PX);
    }

    pub fn on_resize(&mut self, viewport_rows: u16) {
        self.viewport_rows = viewport_rows.max(1);
        self.controller
            .set_viewport_height(self.viewport_rows as f64 * CELL_PX);
    }

    /// Per-frame update: resolve the first-interaction debounce and advance
    /// the controller.
    pub async fn on_tick(&mut self) {
        if self.first_interaction.poll().is_some() {
            self.interacted = true;
            self.audio.unlock();
        }
        self.offset_px = self.controller.tick().await;
    }

    /// True while frames should render at the animation rate.
    pub fn needs_fast_update(&self) -> bool {
        self.controller.is_transitioning()
    }

    pub fn shutdown(&mut self) {
        self.controller.teardown();
        self.first_interaction.cancel();
    }

    /// Scroll offset in terminal rows.
    pub fn offset_rows(&self) -> f64 {
        self.offset_px / CELL_PX
    }

    fn note_interaction(&mut self) {
        if !self.interacted {
            self.first_interaction.push(());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scrollytale_core::NavKey;

    fn fast_app() -> App {
        let mut config = AppConfig::default();
        config.controller.navigation_duration_ms = 0;
        config.controller.wheel_debounce_ms = 0;
        App::new(&config, SectionContent::demo(), 40)
    }

    #[test]
    fn test_story_truncates_and_extends() {
        assert_eq!(SectionContent::story(2).len(), 2);
        assert_eq!(SectionContent::story(0).len(), 1);

        let long = SectionContent::story(6);
        assert_eq!(long.len(), 6);
        assert_eq!(long[3].animation, "mystic");
        assert_eq!(long[5].title, "Chapter 6");
        assert_eq!(long[5].animation, "standing-idle");
    }

    #[tokio::test]
    async fn test_key_navigation_updates_indicator() {
        let mut app = fast_app();
        app.on_action(Action::Nav(NavKey::ArrowDown));
        app.on_tick().await;
        assert_eq!(app.controller.current_section(), 1);
        assert_eq!(app.indicator.active_section(), 1);
    }

    #[tokio::test]
    async fn test_quit_action() {
        let mut app = fast_app();
        app.on_action(Action::Quit);
        assert!(app.should_quit);
    }

    #[tokio::test]
    async fn test_audio_toggle_sets_status() {
        let mut app = fast_app();
        app.on_action(Action::ToggleAudio);
        assert_eq!(app.status_message.as_deref(), Some("audio off"));
        assert!(!app.audio.is_enabled());
    }

    #[tokio::test]
    async fn test_drag_gesture_advances_section() {
        let mut app = fast_app();
        // 10 rows at 16px/row = 160px swipe up, above the 50px threshold.
        app.on_touch_start(30);
        app.on_touch_end(20);
        app.on_tick().await;
        assert_eq!(app.controller.current_section(), 1);
    }

    #[tokio::test]
    async fn test_shutdown_stops_navigation() {
        let mut app = fast_app();
        app.on_action(Action::Nav(NavKey::End));
        app.shutdown();
        app.on_tick().await;
        assert_eq!(app.controller.current_section(), 0);
        assert_eq!(app.indicator.active_section(), 0);
    }

    #[tokio::test]
    async fn test_offset_follows_navigation() {
        let mut app = fast_app();
        app.on_action(Action::Nav(NavKey::End));
        app.on_tick().await;
        // 3 * 40 rows * 16px
        assert!((app.offset_px - 3.0 * 40.0 * CELL_PX).abs() < 0.001);
        assert!((app.offset_rows() - 120.0).abs() < 0.001);
    }
}
