use std::path::PathBuf;

use clap::Parser;
use color_eyre::Result;
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::DefaultTerminal;

use quest::app::App;
use quest::config::load_config;
use quest::history::HistoryState;
use quest::search::{Filter, SearchController};
use quest::suggest::SuggestState;
use quest::suggest::provider::HttpSuggestionProvider;

/// Interactive terminal search box with live suggestions and history
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Result-kind filter forwarded to the results page
    #[arg(long, value_enum, default_value_t = Filter::All)]
    filter: Filter,

    /// Alternate config file
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    // Install color-eyre panic hook for better error messages
    color_eyre::install()?;
    init_logging();

    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref());

    let history = HistoryState::load(config.history.max_suggestions);
    let suggest = match HttpSuggestionProvider::new(&config.suggest.api_url) {
        Ok(provider) => SuggestState::spawn(config.suggest.debounce_ms, provider),
        Err(e) => {
            log::warn!("suggestion service unavailable ({}); history only", e);
            SuggestState::new(config.suggest.debounce_ms)
        }
    };
    let controller = SearchController::new(history, suggest);

    // Initialize terminal (handles raw mode, alternate screen, etc.)
    let terminal = ratatui::init();
    let result = run(terminal, App::new(controller, cli.filter));
    ratatui::restore();

    // Hand the committed query to the results page.
    if let Ok(Some((query, filter))) = &result {
        let url = reqwest::Url::parse_with_params(
            &format!("{}/search", config.suggest.api_url.trim_end_matches('/')),
            &[("q", query.as_str()), ("filter", filter.as_str())],
        )?;
        println!("{}", url);
    }

    result.map(|_| ())
}

fn run(mut terminal: DefaultTerminal, mut app: App) -> Result<Option<(String, Filter)>> {
    loop {
        // Render the UI
        terminal.draw(|frame| app.render(frame))?;

        // Poll with a timeout so debounce expiry and worker responses are
        // serviced without keyboard activity.
        if event::poll(app.poll_timeout())? {
            if let Event::Key(key) = event::read()? {
                // Only process key press events (avoid duplicates)
                if key.kind == KeyEventKind::Press {
                    app.handle_key_event(key);
                }
            }
        }

        app.tick();

        if app.should_quit() {
            break;
        }
    }

    Ok(app.into_submission())
}

#[cfg(debug_assertions)]
fn init_logging() {
    // The TUI owns the terminal, so debug logs go to a file.
    let path = std::env::temp_dir().join("quest-debug.log");
    if let Ok(file) = std::fs::File::create(path) {
        let _ = env_logger::Builder::from_default_env()
            .target(env_logger::Target::Pipe(Box::new(file)))
            .try_init();
    }
}

#[cfg(not(debug_assertions))]
fn init_logging() {}
