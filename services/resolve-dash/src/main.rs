// services/resolve-dash/src/main.rs
//
// TUI Dashboard for the Resolve complaint intelligence platform
//
// Run with: cargo run --bin resolve-dash -- --demo

use std::io::{self, Stdout};
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;
use tracing::info;

use resolve_dash::api::{AnalyticsApi, HttpAnalyticsApi};
use resolve_dash::app::{App, Control};
use resolve_dash::event::{self as app_event, EventReceiver};
use resolve_dash::mock::MockAnalyticsApi;
use svckit::config::{load_config, DashConfig};

#[derive(Parser, Debug)]
#[command(name = "resolve-dash")]
#[command(about = "Terminal UI dashboard for Resolve complaint analytics")]
#[command(version)]
struct Args {
    /// Configuration file (optional; defaults apply when absent)
    #[arg(short, long, default_value = "config/resolve-dash.yaml")]
    config: String,

    /// Analytics API base URL
    #[arg(long, env = "RESOLVE_API_URL")]
    api_url: Option<String>,

    /// Run against generated demo data (no backend required)
    #[arg(long, short)]
    demo: bool,

    /// Dashboard poll interval in seconds
    #[arg(long)]
    refresh_secs: Option<u64>,

    /// Redraw / input poll interval in milliseconds
    #[arg(long, default_value = "100")]
    tick_ms: u64,
}

impl Args {
    fn apply_overrides(&self, config: &mut DashConfig) {
        if let Some(url) = &self.api_url {
            config.api.base_url = url.clone();
        }
        if let Some(secs) = self.refresh_secs {
            config.dashboard.poll_interval_secs = secs;
        }
    }
}

type Tui = Terminal<CrosstermBackend<Stdout>>;

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = load_config(&args.config)?;
    args.apply_overrides(&mut config);

    let _log_guard = svckit::telemetry::init_file_logging(env!("CARGO_PKG_NAME"), &config.observability)?;

    let api: Arc<dyn AnalyticsApi> = if args.demo {
        info!("Resolve dashboard starting in DEMO mode");
        Arc::new(MockAnalyticsApi::new())
    } else {
        info!("Resolve dashboard starting - connecting to {}", config.api.base_url);
        Arc::new(HttpAnalyticsApi::new(&config.api)?)
    };

    // Restore the terminal even if rendering panics.
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    let mut terminal = setup_terminal()?;

    let (tx, rx) = app_event::channel();
    let api_url = if args.demo {
        "demo data".to_string()
    } else {
        config.api.base_url.clone()
    };
    let app = App::new(api, tx, api_url, config.dashboard.clone());

    let result = run_app(&mut terminal, app, rx, Duration::from_millis(args.tick_ms)).await;

    restore_terminal(&mut terminal)?;
    info!("Resolve dashboard exited");

    result
}

fn setup_terminal() -> io::Result<Tui> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    Terminal::new(CrosstermBackend::new(stdout))
}

fn restore_terminal(terminal: &mut Tui) -> io::Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()
}

async fn run_app(terminal: &mut Tui, mut app: App, mut rx: EventReceiver, tick_rate: Duration) -> Result<()> {
    app.start();

    loop {
        // Apply everything the background tasks reported since the last frame
        while let Ok(event) = rx.try_recv() {
            app.handle_event(event);
        }

        terminal.draw(|frame| app.draw(frame))?;

        if event::poll(tick_rate)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press && app.handle_key(key.code) == Control::Quit {
                    return Ok(());
                }
            }
        }

        // Let spawned fetches make progress between frames
        tokio::task::yield_now().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_overrides_config() {
        let args = Args::parse_from([
            "resolve-dash",
            "--api-url",
            "http://analytics:9000",
            "--refresh-secs",
            "5",
        ]);
        let mut config = DashConfig::default();
        args.apply_overrides(&mut config);

        assert_eq!(config.api.base_url, "http://analytics:9000");
        assert_eq!(config.dashboard.poll_interval_secs, 5);
        assert!(!args.demo);
        assert_eq!(args.tick_ms, 100);
    }

    #[test]
    fn test_defaults_leave_config_untouched() {
        let args = Args::parse_from(["resolve-dash", "--demo"]);
        let mut config = DashConfig::default();
        args.apply_overrides(&mut config);

        assert!(args.demo);
        assert_eq!(config.api.base_url, "http://localhost:8000");
        assert_eq!(config.dashboard.poll_interval_secs, 30);
    }
}
