//! Derive and integrate command implementations.

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use polylib::{Complex, Polynomial};

use crate::cli::OutputFormat;
use crate::commands::{parse_complex, PolyArgs};
use crate::error::CliError;
use crate::output::{print_report, KeyValue};

/// Arguments for the derive command.
#[derive(Args, Debug)]
pub struct DeriveArgs {
    #[command(flatten)]
    pub poly: PolyArgs,

    /// Order of the derivative
    #[arg(short, long, default_value = "1")]
    pub order: u32,
}

/// Arguments for the integrate command.
#[derive(Args, Debug)]
pub struct IntegrateArgs {
    #[command(flatten)]
    pub poly: PolyArgs,

    /// Lower bound, RE or RE,IM
    #[arg(long, value_parser = parse_complex)]
    pub from: Option<Complex>,

    /// Upper bound, RE or RE,IM
    #[arg(long, value_parser = parse_complex)]
    pub to: Option<Complex>,
}

#[derive(Serialize)]
struct DeriveOutput {
    order: u32,
    derivative: Polynomial,
}

#[derive(Serialize)]
#[serde(untagged)]
enum IntegrateOutput {
    Antiderivative { integral: Polynomial },
    Definite { from: Complex, to: Complex, value: Complex },
}

/// Execute the derive command.
pub fn derive(args: DeriveArgs, format: OutputFormat) -> Result<()> {
    let p = args.poly.polynomial();
    let derivative = (0..args.order).fold(p.clone(), |d, _| d.derivative());

    let rows = vec![
        KeyValue::new("Polynomial", args.poly.render(&p)),
        KeyValue::new("Order", args.order.to_string()),
        KeyValue::new("Derivative", args.poly.render(&derivative)),
    ];
    let minimal = args.poly.render(&derivative);

    let output = DeriveOutput {
        order: args.order,
        derivative,
    };

    print_report("Derivative", &rows, &output, &minimal, format)
}

/// Execute the integrate command.
///
/// Without bounds the antiderivative with zero constant term is shown;
/// with both bounds the definite integral is computed.
pub fn integrate(args: IntegrateArgs, format: OutputFormat) -> Result<()> {
    let p = args.poly.polynomial();

    match (args.from, args.to) {
        (None, None) => {
            let integral = p.integral();
            let rows = vec![
                KeyValue::new("Polynomial", args.poly.render(&p)),
                KeyValue::new("Integral", args.poly.render(&integral)),
            ];
            let minimal = args.poly.render(&integral);
            let output = IntegrateOutput::Antiderivative { integral };

            print_report("Integral", &rows, &output, &minimal, format)
        }
        (Some(a), Some(b)) => {
            let value = p.integrate(a, b);
            let rows = vec![
                KeyValue::new("Polynomial", args.poly.render(&p)),
                KeyValue::new("From", args.poly.render(&a)),
                KeyValue::new("To", args.poly.render(&b)),
                KeyValue::new("Integral", args.poly.render(&value)),
            ];
            let output = IntegrateOutput::Definite {
                from: a,
                to: b,
                value,
            };

            print_report(
                "Definite Integral",
                &rows,
                &output,
                &args.poly.render(&value),
                format,
            )
        }
        (Some(_), None) => Err(CliError::MissingArgument("--to".to_string()).into()),
        (None, Some(_)) => Err(CliError::MissingArgument("--from".to_string()).into()),
    }
}
