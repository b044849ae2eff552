//! Factorization into linear factors.
//!
//! A [`FactorizedPolynomial`] represents the product
//! `Π factor_i ^ power_i`. [`Polynomial::factorize`] produces one from the
//! roots found by the Durand–Kerner solver; [`FactorizedPolynomial::expand`]
//! multiplies it back out.
//!
//! Multiplicities are not detected: every root becomes its own linear factor
//! with power one, so a double root yields two identical factors.

use std::fmt;

use polylib_core::{Complex, PolyError, PolyResult, NOISE_DIGITS};
use serde::{Deserialize, Serialize};

use crate::polynomial::Polynomial;
use crate::solvers::{durand_kerner, RootConfig};

/// A polynomial held as a product of factors raised to integer powers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FactorizedPolynomial {
    factors: Vec<Polynomial>,
    powers: Vec<u32>,
}

impl FactorizedPolynomial {
    /// Creates a factorized polynomial from parallel factor and power lists.
    ///
    /// Fails if the lists differ in length.
    pub fn new(factors: Vec<Polynomial>, powers: Vec<u32>) -> PolyResult<Self> {
        if factors.len() != powers.len() {
            return Err(PolyError::invalid_argument(format!(
                "{} factors but {} powers",
                factors.len(),
                powers.len()
            )));
        }

        Ok(Self { factors, powers })
    }

    /// Returns the factors.
    #[must_use]
    pub fn factors(&self) -> &[Polynomial] {
        &self.factors
    }

    /// Returns the power of each factor.
    #[must_use]
    pub fn powers(&self) -> &[u32] {
        &self.powers
    }

    /// Returns the number of factors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.factors.len()
    }

    /// Returns true if there are no factors (the empty product, `1`).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.factors.is_empty()
    }

    /// Iterates over `(factor, power)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&Polynomial, u32)> {
        self.factors.iter().zip(self.powers.iter().copied())
    }

    /// Multiplies the product out into coefficient form.
    ///
    /// The running product is cleaned after each factor, and the final
    /// coefficients are rounded to 12 decimal digits.
    ///
    /// # Example
    ///
    /// ```rust
    /// use polylib_math::{FactorizedPolynomial, Polynomial};
    ///
    /// // (x - 1)^2 (x + 1)
    /// let f = FactorizedPolynomial::new(
    ///     vec![Polynomial::from_real(&[-1.0, 1.0]), Polynomial::from_real(&[1.0, 1.0])],
    ///     vec![2, 1],
    /// )
    /// .unwrap();
    ///
    /// assert_eq!(f.expand(), Polynomial::from_real(&[1.0, -1.0, -1.0, 1.0]));
    /// ```
    #[must_use]
    pub fn expand(&self) -> Polynomial {
        let mut q = Polynomial::one();

        for (factor, power) in self.iter() {
            for _ in 0..power {
                q = &q * factor;
            }
            q.clean();
        }

        q.into_coefficients()
            .into_iter()
            .map(|c| c.round(NOISE_DIGITS))
            .collect()
    }

    /// Evaluates the product at `x` without expanding it.
    #[must_use]
    pub fn evaluate(&self, x: Complex) -> Complex {
        self.iter()
            .map(|(factor, power)| factor.evaluate(x).powi(power))
            .product()
    }
}

impl fmt::Display for FactorizedPolynomial {
    /// Renders the product as `(f_0)(f_1)^k...`; the empty product is `1`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("1");
        }

        for (factor, power) in self.iter() {
            match f.precision() {
                Some(p) => write!(f, "({factor:.p$})")?,
                None => write!(f, "({factor})")?,
            }
            if power != 1 {
                write!(f, "^{power}")?;
            }
        }

        Ok(())
    }
}

impl Polynomial {
    /// Decomposes the polynomial into linear factors using its roots.
    ///
    /// A polynomial whose cleaned degree is at most one is returned as its
    /// own single factor. Otherwise the first factor is
    /// `a_n (x - r_0)`, carrying the leading coefficient, and every other
    /// factor is the monic `(x - r_i)`, all with power one.
    ///
    /// # Example
    ///
    /// ```rust
    /// use polylib_math::Polynomial;
    ///
    /// // 2x^2 - 2 = 2(x - 1)(x + 1)
    /// let p = Polynomial::from_real(&[-2.0, 0.0, 2.0]);
    /// let f = p.factorize().unwrap();
    ///
    /// assert_eq!(f.len(), 2);
    /// assert_eq!(f.expand(), p);
    /// ```
    pub fn factorize(&self) -> PolyResult<FactorizedPolynomial> {
        self.factorize_with(&RootConfig::default())
    }

    /// Factorizes using a caller-supplied root finding configuration.
    pub fn factorize_with(&self, config: &RootConfig) -> PolyResult<FactorizedPolynomial> {
        let cleaned = self.cleaned();
        if cleaned.degree() <= 1 {
            return FactorizedPolynomial::new(vec![self.clone()], vec![1]);
        }

        let lead = cleaned.leading_coefficient();
        let roots = durand_kerner(&cleaned, config)?.roots;

        let factors = roots
            .iter()
            .enumerate()
            .map(|(i, &root)| {
                if i == 0 {
                    Polynomial::new(vec![-lead * root, lead])
                } else {
                    Polynomial::new(vec![-root, Complex::ONE])
                }
            })
            .collect::<Vec<_>>();
        let powers = vec![1; factors.len()];

        FactorizedPolynomial::new(factors, powers)
    }
}
