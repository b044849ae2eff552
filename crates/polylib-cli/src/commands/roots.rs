//! Roots command implementation.
//!
//! Runs the Durand-Kerner iteration and reports each root together with the
//! residual of the input polynomial at that root.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tabled::Tabled;
use tracing::info;

use polylib::math::solvers::{
    DurandKerner, RootSolver, DEFAULT_MAX_ITERATIONS, DEFAULT_TOLERANCE,
};
use polylib::{RootConfig, RootsResult};

use crate::cli::OutputFormat;
use crate::commands::PolyArgs;
use crate::error::CliError;
use crate::output::{print_header, print_json, print_table, print_warning, KeyValue};

/// Arguments for the roots command.
#[derive(Args, Debug)]
pub struct RootsArgs {
    #[command(flatten)]
    pub poly: PolyArgs,

    /// Residual tolerance at which iteration stops
    #[arg(short, long, default_value_t = DEFAULT_TOLERANCE)]
    pub tolerance: f64,

    /// Maximum number of outer rounds (each is ten correction passes)
    #[arg(short, long, default_value_t = DEFAULT_MAX_ITERATIONS)]
    pub max_iterations: u32,
}

#[derive(Tabled)]
struct RootRow {
    #[tabled(rename = "#")]
    index: usize,
    #[tabled(rename = "Root")]
    root: String,
    #[tabled(rename = "|z|")]
    modulus: String,
    #[tabled(rename = "|p(z)|")]
    residual: String,
}

#[derive(Serialize)]
struct RootsOutput<'a> {
    solver: &'static str,
    #[serde(flatten)]
    result: &'a RootsResult,
}

/// Execute the roots command.
pub fn execute(args: RootsArgs, format: OutputFormat) -> Result<()> {
    let p = args.poly.polynomial();
    let config = RootConfig::new(args.tolerance, args.max_iterations);
    let solver = DurandKerner;

    info!(
        "Solving degree {} polynomial with {}",
        p.cleaned().degree(),
        solver.name()
    );
    let result = solver.solve(&p, &config).map_err(CliError::from)?;

    if !result.converged {
        print_warning(&format!(
            "no convergence after {} rounds; residual {:.3e} does not meet tolerance {:.1e}",
            result.rounds, result.residual, config.tolerance
        ));
    }

    match format {
        OutputFormat::Table => {
            let rows: Vec<RootRow> = result
                .roots
                .iter()
                .enumerate()
                .map(|(i, z)| RootRow {
                    index: i,
                    root: args.poly.render(z),
                    modulus: args.poly.render(&z.abs()),
                    residual: format!("{:.3e}", p.evaluate(*z).abs()),
                })
                .collect();

            print_header(&format!("Roots of {}", args.poly.render(&p)));
            print_table(&rows);

            print_header("Iteration");
            print_table(&[
                KeyValue::new("Solver", solver.name()),
                KeyValue::new("Rounds", result.rounds.to_string()),
                KeyValue::new("Converged", result.converged.to_string()),
                KeyValue::from_scientific("Residual", result.residual),
            ]);
        }
        OutputFormat::Json => print_json(&RootsOutput {
            solver: solver.name(),
            result: &result,
        })?,
        OutputFormat::Minimal => {
            for z in &result.roots {
                println!("{}", args.poly.render(z));
            }
        }
    }

    Ok(())
}
