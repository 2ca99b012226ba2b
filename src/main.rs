use crossterm::{
    event::{KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::stdout;
use std::time::Instant;

use roids::{
    app::App,
    config::{DEFAULT_CONFIG_PATH, GameConfig},
    logging,
    renderer::viewport_for_terminal,
};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let config = GameConfig::load_or_default(DEFAULT_CONFIG_PATH)?;
    logging::init_file_logger(&config.log_file)?;
    log::info!("loaded config: {config:?}");

    let supports_keyboard_enhancement = matches!(
        crossterm::terminal::supports_keyboard_enhancement(),
        Ok(true)
    );
    log::info!("Keyboard enhancement supported: {supports_keyboard_enhancement}");

    // Setup terminal manually for full control
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;

    // Enable keyboard enhancement AFTER entering alternate screen
    if supports_keyboard_enhancement {
        execute!(
            stdout,
            PushKeyboardEnhancementFlags(
                KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES
                    | KeyboardEnhancementFlags::REPORT_EVENT_TYPES
            )
        )?;
        log::info!("Keyboard enhancement flags pushed");
    }

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = start(&mut terminal, &config, supports_keyboard_enhancement);

    // Cleanup
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;

    if supports_keyboard_enhancement {
        execute!(terminal.backend_mut(), PopKeyboardEnhancementFlags)?;
    }

    terminal.show_cursor()?;

    if let Err(err) = &result {
        log::error!("game loop failed: {err:?}");
    }
    result
}

/// The viewport is fixed once at startup from the terminal size.
fn start(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    config: &GameConfig,
    reports_release: bool,
) -> color_eyre::Result<()> {
    let size = terminal.size()?;
    let viewport = viewport_for_terminal(size.width, size.height, &config.display)?;
    log::info!(
        "terminal {}x{} cells -> viewport {}x{}",
        size.width,
        size.height,
        viewport.width,
        viewport.height
    );

    App::new(config, viewport, reports_release, Instant::now())?.run(terminal)
}
