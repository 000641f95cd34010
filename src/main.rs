use clap::Parser;
use fruit_suggest::app::state::App;
use fruit_suggest::cli::{self, Cli, Command};
use fruit_suggest::config::Config;
use fruit_suggest::error::AppError;
use fruit_suggest::events::run::{LoopTiming, run_app};
use std::fs::OpenOptions;
use std::sync::Mutex;
use std::time::Duration;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

/// The TUI owns the terminal, so it only logs to a file; one-shot queries log to stderr.
fn init_logging(config: &Config, interactive: bool) -> Result<(), AppError> {
    let level: Level = config
        .log_level
        .parse()
        .map_err(|_| AppError::Logging(format!("unknown level '{}'", config.log_level)))?;

    let result = if !interactive {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(level)
            .with_writer(std::io::stderr)
            .finish();
        tracing::subscriber::set_global_default(subscriber)
    } else if let Some(path) = &config.log_file {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        let subscriber = FmtSubscriber::builder()
            .with_max_level(level)
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .finish();
        tracing::subscriber::set_global_default(subscriber)
    } else {
        return Ok(());
    };
    result.map_err(|e| AppError::Logging(e.to_string()))
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), AppError> {
    let cli = Cli::parse();
    let config = cli.resolve_config()?;
    init_logging(&config, cli.command.is_none())?;
    let source = cli
        .config
        .clone()
        .or_else(|| Config::default_path().filter(|p| p.is_file()));
    tracing::info!(
        config = ?source,
        limit = config.default_limit,
        walk = ?config.ngram_walk,
        "starting"
    );

    let catalog = cli::load_catalog(&config)?;
    let mut app = App::new(catalog, &config);

    match &cli.command {
        Some(Command::Query { text, json }) => {
            let mut stdout = std::io::stdout().lock();
            cli::run_query(&mut app, text, *json, &mut stdout)?;
        }
        None => {
            let timing = LoopTiming {
                tick: Duration::from_millis(config.tick_ms),
                debounce: Duration::from_millis(config.debounce_ms),
            };
            run_app(&mut app, timing).await?;
        }
    }
    Ok(())
}
