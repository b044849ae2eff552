//! Textual rendering of polynomials.
//!
//! Terms are written in ascending order and joined by `" + "`. A
//! coefficient of one is omitted (except on the constant term), the
//! imaginary unit renders as a bare `i`, positive reals render as-is and
//! every other coefficient is wrapped in parentheses. A precision passed to
//! the formatter (`{:.3}`) applies to each coefficient.

use std::fmt::{self, Write};

use polylib_core::Complex;

use super::Polynomial;

impl fmt::Display for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return f.write_str("0");
        }

        let precision = f.precision();
        let coeffs = self.coefficients();
        let degree = self.degree();
        let mut s = String::new();

        for (i, &c) in coeffs.iter().enumerate() {
            if c != Complex::ZERO {
                if c == Complex::I {
                    s.push('i');
                } else if c != Complex::ONE {
                    let text = match precision {
                        Some(p) => format!("{c:.p$}"),
                        None => c.to_string(),
                    };
                    if c.is_real() && c.re() > 0.0 {
                        s.push_str(&text);
                    } else {
                        write!(s, "({text})")?;
                    }
                } else if i == 0 {
                    s.push('1');
                }

                match i {
                    0 => {}
                    1 => s.push('x'),
                    _ => write!(s, "x^{i}")?,
                }
            }

            if i < degree && coeffs[i + 1] != Complex::ZERO && !s.is_empty() {
                s.push_str(" + ");
            }
        }

        f.write_str(&s)
    }
}
