//! CLI command implementations.

pub mod calculus;
pub mod eval;
pub mod factor;
pub mod roots;
pub mod show;

// Re-export submodules for convenience
pub use calculus::{DeriveArgs, IntegrateArgs};
pub use eval::EvalArgs;
pub use factor::FactorArgs;
pub use roots::RootsArgs;
pub use show::ShowArgs;

use std::fmt::Display;

use clap::Args;
use polylib::{Complex, Polynomial};

use crate::error::{CliError, CliResult};

/// Polynomial input shared by every command.
#[derive(Args, Debug)]
pub struct PolyArgs {
    /// Coefficients in ascending order of degree, each RE or RE,IM
    #[arg(required = true, value_parser = parse_complex)]
    pub coefficients: Vec<Complex>,

    /// Number of decimal places to display
    #[arg(short, long)]
    pub precision: Option<usize>,
}

impl PolyArgs {
    /// Builds the polynomial from the coefficient list.
    pub fn polynomial(&self) -> Polynomial {
        Polynomial::new(self.coefficients.clone())
    }

    /// Renders a value with the requested precision.
    pub fn render(&self, value: &impl Display) -> String {
        match self.precision {
            Some(p) => format!("{value:.p$}"),
            None => value.to_string(),
        }
    }
}

/// Parses a complex number written as `RE` or `RE,IM`.
pub fn parse_complex(s: &str) -> CliResult<Complex> {
    let invalid = || CliError::InvalidComplex(s.to_string());
    let parse_part = |part: &str| part.trim().parse::<f64>().map_err(|_| invalid());

    let z = match s.split_once(',') {
        Some((re, im)) => Complex::new(parse_part(re)?, parse_part(im)?),
        None => Complex::from(parse_part(s)?),
    };

    if !z.is_finite() {
        return Err(invalid());
    }
    Ok(z)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_complex() {
        assert_eq!(parse_complex("2.5").unwrap(), Complex::from(2.5));
        assert_eq!(parse_complex("-3").unwrap(), Complex::from(-3.0));
        assert_eq!(parse_complex("0,-1").unwrap(), -Complex::I);
        assert_eq!(parse_complex(" 1 , 2 ").unwrap(), Complex::new(1.0, 2.0));
    }

    #[test]
    fn test_parse_complex_rejects_garbage() {
        for s in ["", "x", "1,2,3", "1,", "nan", "inf,0"] {
            assert!(
                matches!(parse_complex(s), Err(CliError::InvalidComplex(_))),
                "{s:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_render_precision() {
        let args = PolyArgs {
            coefficients: vec![Complex::ONE],
            precision: Some(2),
        };
        assert_eq!(args.render(&Complex::from(1.0 / 3.0)), "0.33");

        let plain = PolyArgs {
            coefficients: vec![Complex::ONE],
            precision: None,
        };
        assert_eq!(plain.render(&Complex::from(0.5)), "0.5");
    }
}
