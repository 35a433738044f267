use anyhow::Result;
use chrono::Utc;
use clap::{Args, Parser, Subcommand};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::prelude::*;
use std::fs::OpenOptions;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::Duration;
use stockwatch::api::{DataProvider, HttpProvider, MockProvider, Range};
use stockwatch::app::{App, InputMode, Navigation, Page, Settings};
use stockwatch::config::Config;
use stockwatch::store::{FileStorage, MemoryStorage, Storage, WatchlistStore};
use stockwatch::{server, ui};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "stockwatch")]
#[command(about = "Mock stock quotes, charts and a watchlist", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Serve the mock API and static assets (default)
    Serve(ServeArgs),
    /// Terminal client: watchlist and stock dashboard
    Watch(WatchArgs),
}

#[derive(Args, Default)]
struct ServeArgs {
    /// Address to bind
    #[arg(long)]
    bind: Option<String>,
    /// Port to listen on
    #[arg(short, long)]
    port: Option<u16>,
    /// Static asset directory; repeat to search several in order
    #[arg(long = "static-dir")]
    static_dirs: Vec<PathBuf>,
}

#[derive(Args)]
struct WatchArgs {
    /// Open the dashboard for this symbol
    #[arg(short, long)]
    symbol: Option<String>,
    /// Open the dashboard even without a symbol
    #[arg(long)]
    dashboard: bool,
    /// Base URL of a running `stockwatch serve`
    #[arg(long)]
    api_url: Option<String>,
    /// Generate mock data in-process instead of calling the API
    #[arg(long)]
    offline: bool,
    /// Keep the watchlist in memory only
    #[arg(long)]
    ephemeral: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let mut config = Config::load()?;

    match cli.command.unwrap_or_else(|| Command::Serve(ServeArgs::default())) {
        Command::Serve(args) => {
            init_stdout_tracing();
            if let Some(bind) = args.bind {
                config.bind = bind;
            }
            if let Some(port) = args.port {
                config.port = port;
            }
            if !args.static_dirs.is_empty() {
                config.static_dirs = args.static_dirs;
            }
            server::serve(&config).await
        }
        Command::Watch(args) => {
            init_file_tracing()?;
            if let Some(url) = args.api_url.clone() {
                config.api_url = url;
            }
            if args.offline {
                launch(MockProvider::new(), &config, args).await
            } else {
                let provider = HttpProvider::new(&config.api_url)?;
                launch(provider, &config, args).await
            }
        }
    }
}

fn init_stdout_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
}

/// The terminal owns stdout while the client runs, so logs go to a file.
fn init_file_tracing() -> Result<()> {
    let path = Config::config_dir()?.join("stockwatch.log");
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();
    Ok(())
}

async fn launch<P: DataProvider>(provider: P, config: &Config, args: WatchArgs) -> Result<()> {
    let navigation = Navigation::from_args(args.dashboard, args.symbol);
    let settings = Settings::from(config);
    if args.ephemeral {
        let store = WatchlistStore::load(MemoryStorage::new());
        run_client(App::new(provider, store, settings), navigation).await
    } else {
        let store = WatchlistStore::load(FileStorage::new(Config::config_dir()?)?);
        run_client(App::new(provider, store, settings), navigation).await
    }
}

async fn run_client<P: DataProvider, S: Storage>(mut app: App<P, S>, navigation: Navigation) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app, navigation).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(e) = result {
        eprintln!("Error: {}", e);
    }

    Ok(())
}

// Controller errors are already on screen as notices, so handler results are
// dropped here.
async fn run_app<B: Backend, P: DataProvider, S: Storage>(
    terminal: &mut Terminal<B>,
    app: &mut App<P, S>,
    navigation: Navigation,
) -> Result<()> {
    terminal.draw(|frame| ui::draw(frame, app))?;
    let _ = app.navigate(navigation).await;

    loop {
        app.tick(Utc::now());
        terminal.draw(|frame| ui::draw(frame, app))?;

        // Short poll keeps the clock and notice expiry current
        if !event::poll(Duration::from_millis(100))? {
            continue;
        }
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        match app.input_mode {
            InputMode::Normal => match (app.page, key.code) {
                (_, KeyCode::Char('q')) => return Ok(()),
                (_, KeyCode::Char('?')) => app.show_help(),
                (_, KeyCode::Char('/')) => app.start_search(),
                (Page::Home, KeyCode::Up | KeyCode::Char('k')) => app.move_up(),
                (Page::Home, KeyCode::Down | KeyCode::Char('j')) => app.move_down(),
                (Page::Home, KeyCode::Enter) => {
                    let _ = app.view_selected().await;
                }
                (Page::Home, KeyCode::Char('d')) => {
                    let _ = app.remove_selected();
                }
                (Page::Dashboard, KeyCode::Char('a')) => {
                    let _ = app.add_to_watchlist();
                }
                (Page::Dashboard, KeyCode::Char(c @ '1'..='5')) => {
                    let index = c as usize - '1' as usize;
                    if let Some(range) = Range::ALL.get(index) {
                        let _ = app.select_range(*range).await;
                    }
                }
                (Page::Dashboard, KeyCode::Char('h') | KeyCode::Esc) => app.go_home(),
                _ => {}
            },
            InputMode::Search => match key.code {
                KeyCode::Enter => {
                    let _ = app.submit_search().await;
                }
                KeyCode::Esc => app.cancel_search(),
                KeyCode::Backspace => {
                    app.input_buffer.pop();
                }
                KeyCode::Char(c) => {
                    if c.is_alphanumeric() || c == '.' || c == '-' {
                        app.input_buffer.push(c);
                    }
                }
                _ => {}
            },
            InputMode::Help => match key.code {
                KeyCode::Esc | KeyCode::Enter | KeyCode::Char('?') => app.close_help(),
                _ => {}
            },
        }
    }
}
