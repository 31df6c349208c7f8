//! # Notedesk front-end
//!
//! The binary is intentionally thin: all note logic lives in `notedeskapp`,
//! and this crate only owns the user-facing concerns — argument parsing,
//! config and database resolution, prompts, and rendering. The interactive
//! shell in `shell.rs` is the presentation collaborator the core expects:
//! it invokes session operations and renders their structured results.

use anyhow::Result;
use clap::Parser;
use notedeskapp::config::NotedeskConfig;
use notedeskapp::session::Session;
use notedeskapp::store::NoteStore;
use tracing_subscriber::EnvFilter;

mod args;
mod shell;

fn main() {
    if let Err(e) = run() {
        eprintln!("error: {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let args = args::Args::parse();

    let default_filter = if args.verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = NotedeskConfig::load_default()?;
    let db_path = config.resolve_db_path(args.db);
    tracing::debug!(db = %db_path.display(), "using database");

    let store = NoteStore::open(&db_path)?;
    let mut session = Session::new(store);

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    shell::run(&mut session, config.editor.as_deref(), stdin.lock(), stdout.lock())?;
    Ok(())
}
