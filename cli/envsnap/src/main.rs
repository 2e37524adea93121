//! envsnap CLI — capture and inspect environment snapshots from the command line.

mod commands;
mod host;

use std::process;

use clap::{Parser, Subcommand};

use envsnap_core::DisplayMetrics;

#[derive(Parser)]
#[command(name = "envsnap", version, about = "Environment snapshot diagnostics")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Capture a snapshot of the current environment
    Capture {
        /// Print the flat analytics projection as JSON
        #[arg(long)]
        json: bool,
        /// Logical display width in points (a terminal process has no
        /// display surface; this stands in for the display context)
        #[arg(long, default_value_t = 0.0)]
        width: f64,
        /// Logical display height in points
        #[arg(long, default_value_t = 0.0)]
        height: f64,
        /// Display pixel scale factor
        #[arg(long, default_value_t = 1.0)]
        scale: f64,
        /// Mark the display as tablet-class
        #[arg(long)]
        tablet: bool,
    },
    /// Resolve a hardware model identifier to its marketing name
    Resolve {
        /// Raw model identifier (e.g. "iPhone17,2")
        identifier: String,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let result = run(cli);
    if let Err(e) = result {
        eprintln!("error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Commands::Capture {
            json,
            width,
            height,
            scale,
            tablet,
        } => commands::capture::run(
            json,
            DisplayMetrics {
                width,
                height,
                scale,
                is_tablet: tablet,
            },
        ),
        Commands::Resolve { identifier } => commands::resolve::run(&identifier),
    }
}
