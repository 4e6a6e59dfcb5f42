use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::app::App;

/// Renders the stacked full-viewport sections at the current scroll offset.
///
/// The virtual document is `total_sections * viewport_rows` rows tall; the
/// widget slices out the visible window row by row, so a navigation tween
/// shows both sections sliding through the viewport.
pub struct SectionViewWidget;

impl SectionViewWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let section_rows = (app.viewport_rows.max(1)) as usize;
        let offset = app.offset_rows().round().max(0.0) as usize;

        let mut lines = Vec::with_capacity(area.height as usize);
        for row in 0..area.height as usize {
            let doc_row = offset + row;
            let section_index = doc_row / section_rows;
            let row_in_section = doc_row % section_rows;
            lines.push(Self::section_line(app, section_index, row_in_section, section_rows));
        }

        frame.render_widget(Paragraph::new(lines), area);
    }

    fn section_line(
        app: &App,
        section_index: usize,
        row_in_section: usize,
        section_rows: usize,
    ) -> Line<'static> {
        let Some(section) = app.sections.get(section_index) else {
            return Line::default();
        };
        let theme = &app.theme;
        let title_row = section_rows / 3;

        if row_in_section == title_row {
            Line::from(Span::styled(
                section.title.clone(),
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD),
            ))
            .centered()
        } else if row_in_section == title_row + 2 {
            Line::from(Span::styled(
                section.tagline.clone(),
                Style::default().fg(theme.text),
            ))
            .centered()
        } else if row_in_section == section_rows.saturating_sub(2)
            && section_index + 1 < app.sections.len()
        {
            Line::from(Span::styled(
                "▼ scroll",
                Style::default().fg(theme.dim),
            ))
            .centered()
        } else {
            Line::default()
        }
    }
}
