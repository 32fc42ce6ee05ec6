pub mod cli;
pub mod error;
pub mod model;
pub mod parser;
pub mod processor;
pub mod session;
pub mod writer;

use anyhow::Context;
use clap::Parser;
use log::info;

use crate::model::ActFilter;
use crate::session::Session;

pub fn run() -> anyhow::Result<()> {
    let args = cli::Cli::parse();
    init_logging(args.verbose);
    report(&args)
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default)).init();
}

pub fn report(args: &cli::Cli) -> anyhow::Result<()> {
    // 1. ── Catalog ────────────────────────────────────────────────────
    let catalog = match &args.catalog {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("Reading {}", path.display()))?;
            parser::catalog::load_from_json(&json)
                .with_context(|| format!("Loading catalog {}", path.display()))?
        }
        None => parser::catalog::builtin().context("Loading built-in catalog")?,
    };

    // 2. ── Decode ─────────────────────────────────────────────────────
    let mut session = Session::new();
    let ticket = session.begin_load();
    let raw = std::fs::read(&args.input)
        .with_context(|| format!("Reading {}", args.input.display()))?;
    session
        .load_bytes(ticket, &raw)
        .with_context(|| format!("{} could not be read as a save file", args.input.display()))?;
    info!("Decoded {}", args.input.display());

    // 3. ── Evaluate ───────────────────────────────────────────────────
    let report = session
        .evaluate(&catalog, ActFilter::from(args.act))
        .context("No save loaded")?;

    // 4. ── Write ──────────────────────────────────────────────────────
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match args.format {
        cli::Format::Text => {
            let opts = writer::text::TextOptions {
                hide_spoilers: args.hide_spoilers,
            };
            writer::text::emit(&report, &mut out, opts).context("Writing text report")?
        }
        cli::Format::Json => writer::json::emit(&report, &mut out).context("Writing JSON report")?,
    }

    Ok(())
}
