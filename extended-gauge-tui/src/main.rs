//! Extended Gauge card editor
//!
//! ## Architecture
//!
//! Elm Architecture (TEA):
//! - **Model**: application state (`model/`)
//! - **Message**: what the user asked for (`message/`)
//! - **Update**: state changes (`update/`)
//! - **View**: UI rendering (`view/`)
//! - **Event**: input handling (`event/`)
//! - **Backend**: card file, entity states, card policy (`backend/`)
//!
//!
//! main.rs
//! Entry point
//!
//! fn `main()` {
//!
//!     Cli::parse()                // card file, entity states, language, log file
//!     init_logging()              // only with --log-file, the screen belongs to the UI
//!     EditorSession::open()       // load the card or start from the default card
//!     init_terminal()             // raw mode + alternate screen
//!     app::run()                  // main loop in app.rs
//!     restore_terminal()          // always, whether the loop failed or not
//!
//! }
//!
//!
//!     install_panic_hook()        // from util/terminal.rs
//!         restores the terminal before the panic message is printed

mod app;
mod backend;
mod event;
pub mod i18n;
mod message;
mod model;
mod update;
mod util;
mod view;

use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use backend::{CardFile, EditorSession};
use i18n::Language;
use util::{init_terminal, install_panic_hook, restore_terminal};

/// Terminal editor for extended gauge card configurations
#[derive(Parser, Debug)]
#[command(name = "extended-gauge", version, about)]
struct Cli {
    /// Card configuration file [default: <config dir>/extended-gauge/card.json]
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// JSON file with entity states offered by the entity picker
    #[arg(short, long)]
    states: Option<PathBuf>,

    /// UI language (en, de)
    #[arg(short, long, default_value = "en", value_parser = parse_language)]
    language: Language,

    /// Write logs to this file
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn parse_language(code: &str) -> Result<Language, String> {
    Language::from_code(code).ok_or_else(|| {
        let known: Vec<_> = Language::all().iter().map(|lang| lang.code()).collect();
        format!("unknown language {code}, expected one of {}", known.join(", "))
    })
}

fn init_logging(path: &Path) -> Result<()> {
    let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false),
        )
        .with(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .init();
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(path) = &cli.log_file {
        init_logging(path)?;
    }
    i18n::set_language(cli.language);

    let card_file = CardFile::new(cli.config.unwrap_or_else(CardFile::default_path));
    tracing::info!(
        "Editing {} ({})",
        card_file.path().display(),
        cli.language.display_name()
    );
    let session = EditorSession::open(card_file, cli.states.as_deref()).await?;

    install_panic_hook();
    let mut terminal = init_terminal()?;
    let mut app = model::App::new(session);

    let result = app::run(&mut terminal, &mut app).await;

    // restore even when the loop failed
    restore_terminal(&mut terminal)?;

    result
}
