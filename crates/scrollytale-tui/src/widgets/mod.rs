pub mod indicator;
pub mod section_view;
pub mod status_bar;

use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::Frame;

use crate::app::App;
pub use indicator::IndicatorWidget;
pub use section_view::SectionViewWidget;
pub use status_bar::StatusBarWidget;

/// Top-level frame layout: section view with the dot indicator overlaid on
/// its right edge, status bar at the bottom.
pub fn render(frame: &mut Frame, app: &App) {
    let main = Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).split(frame.area());

    SectionViewWidget::render(frame, main[0], app);

    let content = main[0];
    if content.width > 6 {
        let column = Rect {
            x: content.right().saturating_sub(4),
            y: content.y,
            width: 3,
            height: content.height,
        };
        IndicatorWidget::render(frame, column, app);
    }

    StatusBarWidget::render(frame, main[1], app);
}
