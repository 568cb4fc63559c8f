//! `mcqueen` - builds and previews the McQueen Solutions site.

mod args;
mod builder;
mod config;

use anyhow::{Context, Result};
use args::{Args, Command};
use clap::Parser;
use config::SiteConfig;
use mcqueen_site::content::ContentInventory;
use mcqueen_site::render_route;
use std::io::Write;
use std::process::ExitCode;
use tracing::info;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

fn run() -> Result<()> {
    let args = Args::parse();

    // Logs go to stderr; stdout carries rendered pages and JSON
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::default().add_directive(LevelFilter::from(args.log_level).into())
        }))
        .init();

    info!("mcqueen v{}", env!("CARGO_PKG_VERSION"));

    let config = SiteConfig::load(args.config.as_deref())?;
    let options = config.site_options(args.year);

    match args.command {
        Command::Build { out } => {
            let out_dir = config.out_dir(out);
            for path in builder::build_site(&out_dir, &options)? {
                println!("{}", path.display());
            }
        }
        Command::Render { path } => {
            let html = render_route(&path, &options)?;
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(html.as_bytes())
                .context("Failed to write page to stdout")?;
            writeln!(stdout).context("Failed to write page to stdout")?;
        }
        Command::Content => {
            let json = serde_json::to_string_pretty(&ContentInventory::get())
                .context("Failed to serialize content")?;
            println!("{}", json);
        }
    }

    Ok(())
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("[mcqueen] Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
