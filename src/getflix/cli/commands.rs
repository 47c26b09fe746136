//! # CLI Layer
//!
//! One UI client for getflix: the numbered menu plus a handful of
//! non-interactive subcommands. This layer is the only place that:
//! - Parses arguments
//! - Sets up logging
//! - Reads stdin and writes stdout
//!
//! Handlers call the API and hand the `CmdResult` to `render`.

use super::menu::Menu;
use super::render::write_result;
use super::setup::{Cli, Commands};
use clap::Parser;
use getflix::api::CmdResult;
use getflix::error::{GetflixError, Result};
use getflix::init::{initialize, GetflixContext, Overrides};
use std::io::{self, IsTerminal};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let overrides = Overrides {
        data_dir: cli.data_dir.clone(),
        file: cli.file.clone(),
        format: cli.format.map(Into::into),
        api_key: cli.api_key.clone(),
    };
    let mut ctx = initialize(&overrides)?;

    match cli.command.unwrap_or(Commands::Menu) {
        Commands::Menu => handle_menu(&mut ctx),
        Commands::List => print_result(ctx.api.list_movies()?),
        Commands::Stats => print_result(ctx.api.stats()?),
        Commands::Search { term } => handle_search(&ctx, term),
        Commands::Sort => print_result(ctx.api.movies_by_rating()?),
        Commands::Random => print_result(ctx.api.random_movie()?),
        Commands::Site { output } => handle_site(&ctx, output),
    }
}

/// Log to stderr. `RUST_LOG` wins over `--verbose`.
fn init_logging(verbose: bool) {
    let default_directive = if verbose { "getflix=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .with_target(false)
        .try_init();
}

fn handle_menu(ctx: &mut GetflixContext) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    Menu::new(
        &mut ctx.api,
        &*ctx.lookup,
        &ctx.site,
        stdin.lock(),
        stdout.lock(),
    )
    .run()
}

fn handle_search(ctx: &GetflixContext, term: Vec<String>) -> Result<()> {
    let term = term.join(" ");
    if term.trim().is_empty() {
        return Err(GetflixError::Api("Search term cannot be empty".into()));
    }
    print_result(ctx.api.search_movies(term.trim())?)
}

fn handle_site(ctx: &GetflixContext, output: Option<PathBuf>) -> Result<()> {
    let mut options = ctx.site.clone();
    if let Some(output) = output {
        options.output = output;
    }
    print_result(ctx.api.generate_site(&options)?)
}

fn print_result(result: CmdResult) -> Result<()> {
    write_result(&mut io::stdout().lock(), &result)?;
    Ok(())
}
