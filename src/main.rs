use clap::{Parser, Subcommand};
use laylife_core::{config::Config, SearchIndex};
use std::net::SocketAddr;
use std::num::NonZeroUsize;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "laylife", about = "Laylife site search: palette, one-shot queries, JSON endpoint")]
struct Cli {
    /// Write debug logs to /tmp/laylife-debug.log (tail -f to inspect).
    #[arg(long, global = true)]
    debug: bool,

    /// Read configuration from this file instead of ~/.config/laylife/config.toml.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Cmd>,
}

#[derive(Subcommand)]
enum Cmd {
    /// Open the interactive search palette (default).
    Tui,
    /// Run one query and print the matches.
    Search {
        /// Query terms; all of them must match.
        #[arg(required = true)]
        terms: Vec<String>,
        /// Print the matches as a JSON array.
        #[arg(long)]
        json: bool,
        /// Override the configured result cap (at least 1).
        #[arg(long)]
        limit: Option<NonZeroUsize>,
    },
    /// Serve the search endpoint over HTTP.
    Serve {
        /// Listen address, e.g. 127.0.0.1:8080.
        #[arg(long)]
        addr: Option<SocketAddr>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let serving = matches!(cli.command, Some(Cmd::Serve { .. }));

    if cli.debug {
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open("/tmp/laylife-debug.log")?;
        tracing_subscriber::fmt()
            .with_writer(std::sync::Mutex::new(file))
            .with_ansi(false)
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
            )
            .init();
        tracing::info!("laylife debug log started, tail -f /tmp/laylife-debug.log");
    } else if serving {
        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
            )
            .init();
    }

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load().unwrap_or_else(|e| {
            tracing::warn!(error = %e, "falling back to default config");
            Config::defaults()
        }),
    };

    match cli.command.unwrap_or(Cmd::Tui) {
        Cmd::Tui => {
            if let Some(record) = laylife_tui::run(config)? {
                println!("{}", record.url);
            }
        }
        Cmd::Search { terms, json, limit } => {
            let query = terms.join(" ");
            let index = SearchIndex::build();
            let limit = limit.map_or(config.search.max_results, NonZeroUsize::get);
            let results = index.search_with_limit(&query, limit);

            if json {
                println!("{}", serde_json::to_string_pretty(&results)?);
            } else if results.is_empty() {
                eprintln!("No results found for \"{query}\"");
            } else {
                for record in results {
                    println!("{}", laylife::format_record_line(record));
                }
            }
        }
        Cmd::Serve { addr } => {
            let addr = match addr {
                Some(addr) => addr,
                None => config.server.addr.parse()?,
            };
            let app = laylife::server::router(
                Arc::new(SearchIndex::build()),
                config.search.max_results,
            );
            tokio::runtime::Runtime::new()?.block_on(laylife::server::run_server(app, addr))?;
        }
    }

    Ok(())
}
