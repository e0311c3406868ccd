use std::io;

// Flux architecture modules
mod actions;
mod app;
mod dispatcher;
mod effects;
mod keyboard;
mod logger;
mod stores;
mod tui;
mod ui;

// Re-export the main entry point
pub use app::App;

/// Main entry point for the TUI application
pub async fn tui_main() -> io::Result<()> {
    // Install color-eyre for better error messages BEFORE terminal init
    if let Err(e) = color_eyre::install() {
        eprintln!("Warning: Failed to install color-eyre: {}", e);
    }

    let mut terminal = tui::init()?;

    // The scheduler decides whether to mount from the first frame's size
    let area = match terminal.size() {
        Ok(size) => ratatui::layout::Rect::new(0, 0, size.width, size.height),
        Err(e) => {
            let _ = tui::restore();
            return Err(e);
        }
    };

    let (mut app, action_receiver) = match App::new(area) {
        Ok(app) => app,
        Err(e) => {
            // Make sure to restore terminal before showing error
            let _ = tui::restore();
            eprintln!("Failed to initialize application: {}", e);
            return Err(io::Error::other(e.to_string()));
        }
    };

    let result = app.run(&mut terminal, action_receiver).await;

    // Always restore terminal
    let _ = tui::restore();

    if let Err(e) = result {
        eprintln!("Application error: {:?}", e);
        return Err(e);
    }

    Ok(())
}
