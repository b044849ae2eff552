//! CLI argument definitions.

use clap::{Parser, Subcommand, ValueEnum};

use crate::commands::{
    DeriveArgs, EvalArgs, FactorArgs, IntegrateArgs, RootsArgs, ShowArgs,
};

/// PolyLib - Complex polynomial algebra and root finding
#[derive(Parser)]
#[command(name = "polylib")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, default_value = "table", global = true)]
    pub format: OutputFormat,

    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Display a polynomial with its degree and canonical form
    #[command(allow_negative_numbers = true)]
    Show(ShowArgs),

    /// Evaluate a polynomial at a complex point
    #[command(allow_negative_numbers = true)]
    Eval(EvalArgs),

    /// Differentiate a polynomial
    #[command(allow_negative_numbers = true)]
    Derive(DeriveArgs),

    /// Integrate a polynomial, indefinitely or over [a, b]
    #[command(allow_negative_numbers = true)]
    Integrate(IntegrateArgs),

    /// Approximate all roots with the Durand-Kerner iteration
    #[command(allow_negative_numbers = true)]
    Roots(RootsArgs),

    /// Factor a polynomial into linear factors
    #[command(allow_negative_numbers = true)]
    Factor(FactorArgs),
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table format
    #[default]
    Table,
    /// JSON format
    Json,
    /// Minimal output (just the value)
    Minimal,
}
