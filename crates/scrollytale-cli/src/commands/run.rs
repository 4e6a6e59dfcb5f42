use std::io;

use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{
        disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle,
    },
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::debug;

use scrollytale_core::AppConfig;
use scrollytale_tui::{
    app::{App, SectionContent},
    event::{AppEvent, EventHandler},
    input::handle_key_event,
    widgets,
};

pub async fn run(config: AppConfig, sections: Option<usize>) -> Result<()> {
    // Setup terminal. Mouse capture feeds the wheel and drag-as-swipe paths.
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(
        stdout,
        EnterAlternateScreen,
        EnableMouseCapture,
        SetTitle("scrollytale")
    )?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let size = terminal.size()?;
    let story = sections
        .map(SectionContent::story)
        .unwrap_or_else(SectionContent::demo);
    // Bottom row is the status bar; the sections get the rest.
    let mut app = App::new(&config, story, size.height.saturating_sub(1));

    let event_handler = EventHandler::new(
        config.ui.tick_duration(),
        config.ui.animation_tick_duration(),
    );
    let mut needs_fast_update = false;

    loop {
        terminal.draw(|frame| widgets::render(frame, &app))?;

        // Poll faster while a navigation is animating.
        let event = if needs_fast_update {
            event_handler.next_animation()?
        } else {
            event_handler.next()?
        };
        if let Some(event) = event {
            match event {
                AppEvent::Key(key) => {
                    let action = handle_key_event(key);
                    app.on_action(action);
                }
                AppEvent::Wheel(delta_y) => app.on_wheel(delta_y),
                AppEvent::TouchStart(row) => app.on_touch_start(row),
                AppEvent::TouchEnd(row) => app.on_touch_end(row),
                AppEvent::Resize(_, height) => app.on_resize(height.saturating_sub(1)),
                AppEvent::Tick => {}
            }
        }

        app.on_tick().await;
        needs_fast_update = app.needs_fast_update();

        if app.should_quit {
            break;
        }
    }

    // Release listeners, pending debounces, and any in-flight navigation
    // before the terminal goes back to normal.
    app.shutdown();
    debug!("controller torn down");

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    Ok(())
}
