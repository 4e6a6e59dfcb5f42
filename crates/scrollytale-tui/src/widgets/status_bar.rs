use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::app::App;

pub struct StatusBarWidget;

impl StatusBarWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let theme = &app.theme;
        let base = Style::default().bg(theme.status_bg);

        let current = app.controller.current_section() + 1;
        let total = app.controller.total_sections();
        let audio = if app.audio.is_enabled() { "on" } else { "off" };

        let mut spans = vec![
            Span::styled(
                format!(" {current}/{total} "),
                base.fg(theme.accent).add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!("│ audio {audio} "), base.fg(theme.text)),
            Span::styled(
                "│ ↑↓/PgUp/PgDn/Space move · 1-9 jump · Home/End · m audio · q quit",
                base.fg(theme.dim),
            ),
        ];

        if let Some(message) = &app.status_message {
            spans.push(Span::styled(format!(" │ {message}"), base.fg(theme.text)));
        }

        frame.render_widget(Paragraph::new(Line::from(spans)).style(base), area);
    }
}
