//! Factor command implementation.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use polylib::{FactorizedPolynomial, Polynomial, RootConfig};

use crate::cli::OutputFormat;
use crate::commands::PolyArgs;
use crate::error::CliError;
use crate::output::{print_header, print_json, print_table, KeyValue};

/// Arguments for the factor command.
#[derive(Args, Debug)]
pub struct FactorArgs {
    #[command(flatten)]
    pub poly: PolyArgs,

    /// Maximum number of root finding rounds
    #[arg(short, long)]
    pub max_iterations: Option<u32>,

    /// Also multiply the factors back out
    #[arg(short, long)]
    pub expand: bool,
}

#[derive(Tabled)]
struct FactorRow {
    #[tabled(rename = "#")]
    index: usize,
    #[tabled(rename = "Factor")]
    factor: String,
    #[tabled(rename = "Power")]
    power: u32,
}

#[derive(Serialize)]
struct FactorOutput<'a> {
    factorized: &'a FactorizedPolynomial,
    expanded: Option<Polynomial>,
}

/// Execute the factor command.
pub fn execute(args: FactorArgs, format: OutputFormat) -> Result<()> {
    let p = args.poly.polynomial();

    let mut config = RootConfig::default();
    if let Some(max) = args.max_iterations {
        config = config.with_max_iterations(max);
    }

    let factorized = p.factorize_with(&config).map_err(CliError::from)?;
    let expanded = args.expand.then(|| factorized.expand());

    match format {
        OutputFormat::Table => {
            let rows: Vec<FactorRow> = factorized
                .iter()
                .enumerate()
                .map(|(i, (factor, power))| FactorRow {
                    index: i,
                    factor: args.poly.render(factor),
                    power,
                })
                .collect();

            print_header(&format!("Factors of {}", args.poly.render(&p)));
            print_table(&rows);

            let mut summary = vec![KeyValue::new("Product", args.poly.render(&factorized))];
            if let Some(ref e) = expanded {
                summary.push(KeyValue::new("Expanded", args.poly.render(e)));
            }
            print_table(&summary);
        }
        OutputFormat::Json => print_json(&FactorOutput {
            factorized: &factorized,
            expanded,
        })?,
        OutputFormat::Minimal => {
            println!("{}", args.poly.render(&factorized));
            if let Some(ref e) = expanded {
                println!("{}", args.poly.render(e));
            }
        }
    }

    Ok(())
}
