//! Show command implementation.
//!
//! Displays a polynomial together with its canonical and monic forms.

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use polylib::{Complex, Polynomial};

use crate::cli::OutputFormat;
use crate::commands::PolyArgs;
use crate::output::{print_report, KeyValue};

/// Arguments for the show command.
#[derive(Args, Debug)]
pub struct ShowArgs {
    #[command(flatten)]
    pub poly: PolyArgs,
}

#[derive(Serialize)]
struct ShowOutput {
    polynomial: String,
    degree: usize,
    leading_coefficient: Complex,
    coefficients: Polynomial,
    monic: Option<Polynomial>,
}

/// Execute the show command.
pub fn execute(args: ShowArgs, format: OutputFormat) -> Result<()> {
    let p = args.poly.polynomial();
    let cleaned = p.cleaned();
    let monic = cleaned.normalized().ok();

    let mut rows = vec![
        KeyValue::new("Polynomial", args.poly.render(&p)),
        KeyValue::new("Degree", cleaned.degree().to_string()),
        KeyValue::new(
            "Leading coefficient",
            args.poly.render(&cleaned.leading_coefficient()),
        ),
        KeyValue::new("Canonical form", args.poly.render(&cleaned)),
    ];
    if let Some(ref m) = monic {
        rows.push(KeyValue::new("Monic form", args.poly.render(m)));
    }

    let output = ShowOutput {
        polynomial: args.poly.render(&p),
        degree: cleaned.degree(),
        leading_coefficient: cleaned.leading_coefficient(),
        coefficients: cleaned,
        monic,
    };

    print_report("Polynomial", &rows, &output, &output.polynomial, format)
}
