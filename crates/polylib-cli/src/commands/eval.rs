//! Eval command implementation.

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use polylib::Complex;

use crate::cli::OutputFormat;
use crate::commands::{parse_complex, PolyArgs};
use crate::output::{print_report, KeyValue};

/// Arguments for the eval command.
#[derive(Args, Debug)]
pub struct EvalArgs {
    #[command(flatten)]
    pub poly: PolyArgs,

    /// Point to evaluate at, RE or RE,IM (use --at=-1,2 for a negative real part)
    #[arg(short, long, value_parser = parse_complex)]
    pub at: Complex,
}

#[derive(Serialize)]
struct EvalOutput {
    x: Complex,
    value: Complex,
    modulus: f64,
    derivative: Complex,
}

/// Execute the eval command.
pub fn execute(args: EvalArgs, format: OutputFormat) -> Result<()> {
    let p = args.poly.polynomial();
    let value = p.evaluate(args.at);
    let derivative = p.derivative_at(args.at);

    let rows = vec![
        KeyValue::new("Polynomial", args.poly.render(&p)),
        KeyValue::new("x", args.poly.render(&args.at)),
        KeyValue::new("p(x)", args.poly.render(&value)),
        KeyValue::new("|p(x)|", args.poly.render(&value.abs())),
        KeyValue::new("p'(x)", args.poly.render(&derivative)),
    ];

    let output = EvalOutput {
        x: args.at,
        value,
        modulus: value.abs(),
        derivative,
    };

    print_report(
        "Evaluation",
        &rows,
        &output,
        &args.poly.render(&value),
        format,
    )
}
