use ratatui::style::Color;

/// Color palette for the section view and chrome.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub accent: Color,
    pub text: Color,
    pub dim: Color,
    pub status_bg: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            accent: Color::Magenta,
            text: Color::White,
            dim: Color::DarkGray,
            status_bg: Color::Rgb(30, 30, 46),
        }
    }
}
