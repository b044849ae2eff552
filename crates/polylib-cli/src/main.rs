//! PolyLib CLI - Command-line interface for complex polynomial algebra.
//!
//! Coefficients are given in ascending order of degree. Each one is either
//! a real number or a `RE,IM` pair.
//!
//! # Usage
//!
//! ```bash
//! # Show 1 + 2x + 3x^2
//! polylib show 1 2 3
//!
//! # Evaluate x^2 + 1 at x = i
//! polylib eval 1 0 1 --re 0 --im 1
//!
//! # Find the roots of x^2 - 3x + 2
//! polylib roots 2 -3 1
//!
//! # Factor x^2 - i
//! polylib factor 0,-1 0 1
//! ```

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod cli;
mod commands;
mod error;
mod output;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    // Logs go to stderr so JSON output stays parseable
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let format = cli.format;

    // Execute command
    match cli.command {
        Commands::Show(args) => commands::show::execute(args, format)?,
        Commands::Eval(args) => commands::eval::execute(args, format)?,
        Commands::Derive(args) => commands::calculus::derive(args, format)?,
        Commands::Integrate(args) => commands::calculus::integrate(args, format)?,
        Commands::Roots(args) => commands::roots::execute(args, format)?,
        Commands::Factor(args) => commands::factor::execute(args, format)?,
    }

    Ok(())
}
