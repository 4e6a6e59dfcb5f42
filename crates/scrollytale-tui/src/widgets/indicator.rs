use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::app::App;

/// The dot column: one dot per section, the committed section highlighted.
/// Digit keys take the place of the original's clickable dots.
pub struct IndicatorWidget;

impl IndicatorWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let total = app.sections.len();
        if total == 0 {
            return;
        }
        let active = app.indicator.active_section();
        let theme = &app.theme;

        // One dot row plus a spacer row per section, centered vertically.
        let column_height = total * 2 - 1;
        let top_pad = (area.height as usize).saturating_sub(column_height) / 2;

        let mut lines = vec![Line::default(); top_pad];
        for section in 0..total {
            if section > 0 {
                lines.push(Line::default());
            }
            let dot = if section == active {
                Span::styled(
                    "●",
                    Style::default()
                        .fg(theme.accent)
                        .add_modifier(Modifier::BOLD),
                )
            } else {
                Span::styled("○", Style::default().fg(theme.dim))
            };
            lines.push(Line::from(dot).centered());
        }

        frame.render_widget(Paragraph::new(lines), area);
    }
}
