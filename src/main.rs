use std::io;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use gusflix::config::Config;
use gusflix::controller::AppController;
use gusflix::logging;
use gusflix::model::{AppModel, TmdbClient};
use gusflix::view::AppView;

const POLL_INTERVAL: Duration = Duration::from_millis(50);

#[tokio::main]
async fn main() -> Result<()> {
    let _log_guard = match logging::init_logging() {
        Ok(guard) => Some(guard),
        Err(e) => {
            eprintln!("Warning: Failed to initialize logging: {}", e);
            None
        }
    };

    tracing::info!("=== GusFlix Starting ===");

    let config = Config::from_env();
    let client = TmdbClient::new(&config)?;

    let model = Arc::new(AppModel::new(Arc::new(client), config.image_base_url.clone()));
    let controller = AppController::new(model.clone(), config.debounce);

    controller.load_initial_catalog().await;

    tracing::info!("Starting TUI...");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, model, controller).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        tracing::error!(error = ?err, "Application error");
        return Err(err);
    }

    tracing::info!("GusFlix shutting down");
    Ok(())
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    model: Arc<AppModel<TmdbClient>>,
    controller: AppController<TmdbClient>,
) -> Result<()> {
    loop {
        let snapshot = model.snapshot().await;

        terminal.draw(|f| AppView::render(f, &snapshot))?;

        if event::poll(POLL_INTERVAL)? {
            if let Event::Key(key) = event::read()? {
                controller.handle_key_event(key).await?;
            }
        }

        if model.should_quit().await {
            break;
        }
    }

    Ok(())
}
