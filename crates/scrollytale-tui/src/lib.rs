pub mod app;
pub mod effects;
pub mod event;
pub mod input;
pub mod theme;
pub mod widgets;

pub use app::{App, SectionContent};
pub use theme::Theme;
