use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

mod commands;

#[derive(Parser, Debug)]
#[command(author, version, about = "Ship performance simulation utilities")]
struct Cli {
    /// Path to a JSON vessel catalog; the built-in demo catalog is used
    /// when omitted.
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    /// Seed for the simulation's random source; omit for a fresh seed.
    #[arg(long, global = true)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Simulate a performance curve for a vessel and print it as JSON.
    Performance {
        /// IMO number of the vessel to simulate.
        #[arg(long)]
        imo: u64,
        /// Comma-separated STW samples in knots; use `null` for a gap
        /// (e.g. `8,9,null,11`). Defaults to 8-16 kn at 1-kn steps.
        #[arg(long)]
        stw: Option<String>,
        /// Conditioning parameter override, `key=value`; repeatable.
        #[arg(long = "set", value_name = "KEY=VALUE")]
        set: Vec<String>,
    },
    /// Simulate and print the null-filtered speed-fuel curve with metadata.
    Chart {
        /// IMO number of the vessel to simulate.
        #[arg(long)]
        imo: u64,
        /// Comma-separated STW samples in knots; `null` marks a gap.
        #[arg(long)]
        stw: Option<String>,
        /// Conditioning parameter override, `key=value`; repeatable.
        #[arg(long = "set", value_name = "KEY=VALUE")]
        set: Vec<String>,
    },
    /// List the vessels available in the catalog.
    Ships {
        /// Print the full listing payload as JSON instead of a table.
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let catalog = commands::load_catalog(cli.catalog.as_deref())?;

    match cli.command {
        Command::Performance { imo, stw, set } => {
            commands::performance::handle_performance(&catalog, cli.seed, imo, stw.as_deref(), &set)
        }
        Command::Chart { imo, stw, set } => {
            commands::chart::handle_chart(&catalog, cli.seed, imo, stw.as_deref(), &set)
        }
        Command::Ships { json } => commands::ships::handle_ships(&catalog, json),
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
