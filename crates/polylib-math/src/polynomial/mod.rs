//! Polynomials with complex coefficients.
//!
//! A [`Polynomial`] stores its coefficients in ascending order: index `i`
//! holds the coefficient of `x^i`. The degree is always `len - 1`, so it
//! only reflects the true degree once the polynomial has been
//! [cleaned](Polynomial::clean). Arithmetic does not clean its results.
//!
//! # Submodules
//!
//! - `ops`: arithmetic operators and integer powers
//! - `calculus`: derivatives and definite integrals
//! - `display`: the textual rendering that also defines equality

mod calculus;
mod display;
mod ops;

use std::str::FromStr;

use polylib_core::{Complex, PolyError, PolyResult};
use serde::{Deserialize, Serialize};

/// A polynomial `a_0 + a_1 x + ... + a_n x^n` over [`Complex`].
///
/// The coefficient sequence is never empty; the zero polynomial is a single
/// zero coefficient.
///
/// Two polynomials are equal iff their rendered strings are equal. This is
/// a syntactic comparison, so polynomials that differ only by trailing zero
/// coefficients compare equal while mathematically identical ones whose
/// coefficients round differently do not.
///
/// # Example
///
/// ```rust
/// use polylib_math::{Complex, Polynomial};
///
/// let p = Polynomial::from_real(&[-1.0, 0.0, 1.0]); // x^2 - 1
/// assert_eq!(p.degree(), 2);
/// assert_eq!(p.evaluate(Complex::from(2.0)), Complex::from(3.0));
/// assert_eq!(p.to_string(), "(-1) + x^2");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(from = "Vec<Complex>", into = "Vec<Complex>")]
pub struct Polynomial {
    coefficients: Vec<Complex>,
}

impl Polynomial {
    /// Creates a polynomial from ascending complex coefficients.
    ///
    /// An empty sequence yields the zero polynomial.
    #[must_use]
    pub fn new(coefficients: Vec<Complex>) -> Self {
        if coefficients.is_empty() {
            return Self::zero();
        }
        Self { coefficients }
    }

    /// Creates a polynomial from ascending real coefficients.
    #[must_use]
    pub fn from_real(coefficients: &[f64]) -> Self {
        Self::new(coefficients.iter().map(|&c| Complex::from_real(c)).collect())
    }

    /// Creates the constant polynomial `c`.
    #[must_use]
    pub fn constant(c: impl Into<Complex>) -> Self {
        Self {
            coefficients: vec![c.into()],
        }
    }

    /// Creates the zero polynomial.
    #[must_use]
    pub fn zero() -> Self {
        Self::constant(Complex::ZERO)
    }

    /// Creates the constant polynomial `1`.
    #[must_use]
    pub fn one() -> Self {
        Self::constant(Complex::ONE)
    }

    /// Creates the monomial `x^degree`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use polylib_math::Polynomial;
    ///
    /// assert_eq!(Polynomial::monomial(3).to_string(), "x^3");
    /// assert_eq!(Polynomial::monomial(0).to_string(), "1");
    /// ```
    #[must_use]
    pub fn monomial(degree: usize) -> Self {
        if degree == 0 {
            return Self::one();
        }

        let mut coefficients = vec![Complex::ZERO; degree + 1];
        coefficients[degree] = Complex::ONE;
        Self { coefficients }
    }

    /// Returns the standard basis `[x^0, x^1, ..., x^(dim-1)]`.
    ///
    /// Fails if `dim` is zero.
    pub fn standard_basis(dim: usize) -> PolyResult<Vec<Polynomial>> {
        if dim < 1 {
            return Err(PolyError::invalid_argument(
                "dimension expected to be greater than zero",
            ));
        }

        Ok((0..dim).map(Self::monomial).collect())
    }

    /// Returns the coefficients in ascending order.
    #[must_use]
    pub fn coefficients(&self) -> &[Complex] {
        &self.coefficients
    }

    /// Consumes the polynomial, returning its coefficients.
    #[must_use]
    pub fn into_coefficients(self) -> Vec<Complex> {
        self.coefficients
    }

    /// Returns the coefficient of `x^i`, or zero beyond the stored range.
    #[must_use]
    pub fn coefficient(&self, i: usize) -> Complex {
        self.coefficients.get(i).copied().unwrap_or(Complex::ZERO)
    }

    /// Returns the stored degree, `len - 1`.
    ///
    /// Trailing zero coefficients count; call [`clean`](Self::clean) first
    /// to obtain the true degree.
    #[must_use]
    pub fn degree(&self) -> usize {
        self.coefficients.len() - 1
    }

    /// Returns the coefficient of the highest stored power.
    #[must_use]
    pub fn leading_coefficient(&self) -> Complex {
        self.coefficients[self.degree()]
    }

    /// Returns true if every coefficient is exactly zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.coefficients.iter().all(Complex::is_zero)
    }

    /// Evaluates the polynomial at `x` using Horner's scheme.
    #[must_use]
    pub fn evaluate(&self, x: Complex) -> Complex {
        let n = self.degree();
        let mut acc = self.coefficients[n];

        for &c in self.coefficients[..n].iter().rev() {
            acc = c + x * acc;
        }

        acc
    }

    /// Removes trailing zero coefficients, keeping at least one.
    ///
    /// ```rust
    /// use polylib_math::Polynomial;
    ///
    /// let mut p = Polynomial::from_real(&[1.0, 0.0, 0.0]);
    /// p.clean();
    /// assert_eq!(p.degree(), 0);
    /// ```
    pub fn clean(&mut self) {
        let len = self
            .coefficients
            .iter()
            .rposition(|c| !c.is_zero())
            .map_or(1, |i| i + 1);
        self.coefficients.truncate(len);
    }

    /// Returns a cleaned copy.
    #[must_use]
    pub fn cleaned(&self) -> Self {
        let mut p = self.clone();
        p.clean();
        p
    }

    /// Cleans the polynomial and scales it so the leading coefficient is one.
    ///
    /// Fails for the zero polynomial, which has no leading coefficient to
    /// divide by.
    pub fn normalize(&mut self) -> PolyResult<()> {
        self.clean();

        if self.is_zero() {
            return Err(PolyError::invalid_argument(
                "cannot normalize the zero polynomial",
            ));
        }

        let lead = self.leading_coefficient();
        if lead != Complex::ONE {
            let n = self.degree();
            for c in &mut self.coefficients[..n] {
                *c = c.checked_div(lead)?;
            }
            self.coefficients[n] = Complex::ONE;
        }

        Ok(())
    }

    /// Returns a normalized copy.
    pub fn normalized(&self) -> PolyResult<Self> {
        let mut p = self.clone();
        p.normalize()?;
        Ok(p)
    }
}

impl Default for Polynomial {
    fn default() -> Self {
        Self::zero()
    }
}

impl From<Vec<Complex>> for Polynomial {
    fn from(coefficients: Vec<Complex>) -> Self {
        Self::new(coefficients)
    }
}

impl From<Polynomial> for Vec<Complex> {
    fn from(p: Polynomial) -> Self {
        p.coefficients
    }
}

impl From<Complex> for Polynomial {
    fn from(c: Complex) -> Self {
        Self::constant(c)
    }
}

impl FromIterator<Complex> for Polynomial {
    fn from_iter<I: IntoIterator<Item = Complex>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// Parsing expressions such as `"2x^2 + 4x + (2+2i)"` is not supported.
impl FromStr for Polynomial {
    type Err = PolyError;

    fn from_str(_s: &str) -> Result<Self, Self::Err> {
        Err(PolyError::not_supported("parsing polynomials from strings"))
    }
}

impl PartialEq for Polynomial {
    fn eq(&self, other: &Self) -> bool {
        self.to_string() == other.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn c(re: f64, im: f64) -> Complex {
        Complex::new(re, im)
    }

    #[test]
    fn test_constructors() {
        assert_eq!(Polynomial::new(vec![]).coefficients(), &[Complex::ZERO]);
        assert_eq!(Polynomial::default().degree(), 0);
        assert!(Polynomial::zero().is_zero());

        let p = Polynomial::from_real(&[1.0, 2.0, 3.0]);
        assert_eq!(p.degree(), 2);
        assert_eq!(p.coefficient(1), c(2.0, 0.0));
        assert_eq!(p.coefficient(7), Complex::ZERO);

        let k = Polynomial::constant(c(0.0, 2.0));
        assert_eq!(k.degree(), 0);
        assert_eq!(k.leading_coefficient(), c(0.0, 2.0));

        assert_eq!(Polynomial::from_real(&[]).coefficients(), &[Complex::ZERO]);
    }

    #[test]
    fn test_from_str_not_supported() {
        let err = "2x^2+4x+1".parse::<Polynomial>().unwrap_err();
        assert!(matches!(err, PolyError::NotSupported { .. }));
    }

    #[test]
    fn test_monomial() {
        let m = Polynomial::monomial(3);
        assert_eq!(m.coefficients(), &[Complex::ZERO, Complex::ZERO, Complex::ZERO, Complex::ONE]);
        assert_eq!(Polynomial::monomial(0).coefficients(), &[Complex::ONE]);

        for d in 0..6 {
            let m = Polynomial::monomial(d);
            assert_eq!(m.evaluate(Complex::ONE), Complex::ONE);
            if d >= 1 {
                assert_eq!(m.evaluate(Complex::ZERO), Complex::ZERO);
            }
        }
    }

    #[test]
    fn test_standard_basis() {
        let basis = Polynomial::standard_basis(3).unwrap();
        assert_eq!(basis.len(), 3);
        assert_eq!(basis[2], Polynomial::monomial(2));

        let err = Polynomial::standard_basis(0).unwrap_err();
        assert!(matches!(err, PolyError::InvalidArgument { .. }));
    }

    #[test]
    fn test_clean() {
        let mut p = Polynomial::from_real(&[1.0, 0.0, 0.0]);
        p.clean();
        assert_eq!(p.coefficients(), &[Complex::ONE]);
        assert_eq!(p.degree(), 0);

        let mut z = Polynomial::from_real(&[0.0, 0.0, 0.0]);
        z.clean();
        assert_eq!(z.coefficients(), &[Complex::ZERO]);

        // Interior zeros survive
        let q = Polynomial::from_real(&[0.0, 1.0, 0.0, 2.0, 0.0]).cleaned();
        assert_eq!(q.degree(), 3);
    }

    #[test]
    fn test_clean_is_exact() {
        let p = Polynomial::new(vec![Complex::ONE, c(1e-300, 0.0)]).cleaned();
        assert_eq!(p.degree(), 1);

        let q = Polynomial::new(vec![Complex::ONE, c(0.0, 1e-30)]).cleaned();
        assert_eq!(q.degree(), 1);
    }

    #[test]
    fn test_normalize() {
        let mut p = Polynomial::from_real(&[2.0, 4.0, 2.0, 0.0]);
        p.normalize().unwrap();
        assert_eq!(p.coefficients(), &[c(1.0, 0.0), c(2.0, 0.0), c(1.0, 0.0)]);

        let q = Polynomial::new(vec![Complex::ONE, Complex::I]).normalized().unwrap();
        assert_eq!(q.leading_coefficient(), Complex::ONE);
        assert_eq!(q.coefficient(0), c(0.0, -1.0));

        let k = Polynomial::constant(5.0).normalized().unwrap();
        assert_eq!(k.coefficients(), &[Complex::ONE]);
    }

    #[test]
    fn test_normalize_extreme_leading_coefficient() {
        // 1e160 x + 2
        let p = Polynomial::from_real(&[2.0, 1e160]).normalized().unwrap();
        assert_eq!(p.leading_coefficient(), Complex::ONE);
        assert_relative_eq!(p.coefficient(0).re(), 2e-160, max_relative = 1e-15);

        let q = Polynomial::from_real(&[1.0, 0.0, 1e-170]).normalized().unwrap();
        assert_relative_eq!(q.coefficient(0).re(), 1e170, max_relative = 1e-15);

        let z = Polynomial::new(vec![Complex::ONE, c(1e200, -1e200)]).normalized().unwrap();
        assert_eq!(z.leading_coefficient(), Complex::ONE);
        assert!(z.coefficient(0).is_finite());
        assert!(!z.coefficient(0).is_zero());
    }

    #[test]
    fn test_normalize_zero_fails() {
        let err = Polynomial::from_real(&[0.0, 0.0]).normalized().unwrap_err();
        assert!(matches!(err, PolyError::InvalidArgument { .. }));
        assert!(Polynomial::zero().normalize().is_err());
    }

    #[test]
    fn test_is_zero() {
        assert!(Polynomial::from_real(&[0.0, 0.0]).is_zero());
        assert!(!Polynomial::new(vec![c(0.0, 1e-20)]).is_zero());
    }

    #[test]
    fn test_evaluate_horner() {
        // 1 + 2x + 3x^2 at x = 2
        let p = Polynomial::from_real(&[1.0, 2.0, 3.0]);
        assert_eq!(p.evaluate(c(2.0, 0.0)), c(17.0, 0.0));

        // x^2 + 1 at x = i
        let q = Polynomial::from_real(&[1.0, 0.0, 1.0]);
        assert_eq!(q.evaluate(Complex::I), Complex::ZERO);

        assert_eq!(Polynomial::constant(3.0).evaluate(c(100.0, 5.0)), c(3.0, 0.0));
    }

    #[test]
    fn test_equality_is_syntactic() {
        let a = Polynomial::from_real(&[1.0, 2.0]);
        let b = Polynomial::from_real(&[1.0, 2.0, 0.0]);
        assert_eq!(a, b);

        let c1 = Polynomial::from_real(&[0.1 + 0.2]);
        let c2 = Polynomial::from_real(&[0.3]);
        assert_ne!(c1, c2);
    }

    #[test]
    fn test_serde_roundtrip() {
        let p = Polynomial::new(vec![c(1.0, -1.0), Complex::ONE]);
        let json = serde_json::to_string(&p).unwrap();
        assert_eq!(json, r#"[{"re":1.0,"im":-1.0},{"re":1.0,"im":0.0}]"#);
        let back: Polynomial = serde_json::from_str(&json).unwrap();
        assert_eq!(back.coefficients(), p.coefficients());

        let empty: Polynomial = serde_json::from_str("[]").unwrap();
        assert!(empty.is_zero());
    }
}
