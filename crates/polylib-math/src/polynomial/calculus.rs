//! Differentiation and integration.

use polylib_core::Complex;

use super::Polynomial;

impl Polynomial {
    /// Returns the derivative `p'`.
    ///
    /// The derivative of a constant is the zero polynomial.
    ///
    /// # Example
    ///
    /// ```rust
    /// use polylib_math::Polynomial;
    ///
    /// let p = Polynomial::from_real(&[1.0, 2.0, 3.0]);
    /// assert_eq!(p.derivative().to_string(), "2 + 6x");
    /// ```
    #[must_use]
    pub fn derivative(&self) -> Self {
        self.coefficients()
            .iter()
            .enumerate()
            .skip(1)
            .map(|(i, &c)| i as f64 * c)
            .collect()
    }

    /// Evaluates the derivative at `x`.
    #[must_use]
    pub fn derivative_at(&self, x: Complex) -> Complex {
        self.derivative().evaluate(x)
    }

    /// Returns the antiderivative whose constant term is zero.
    #[must_use]
    pub fn integral(&self) -> Self {
        std::iter::once(Complex::ZERO)
            .chain(
                self.coefficients()
                    .iter()
                    .enumerate()
                    .map(|(i, &c)| c / (i + 1) as f64),
            )
            .collect()
    }

    /// Computes the definite integral from `a` to `b`, `F(b) - F(a)`.
    #[must_use]
    pub fn integrate(&self, a: Complex, b: Complex) -> Complex {
        let antiderivative = self.integral();
        antiderivative.evaluate(b) - antiderivative.evaluate(a)
    }
}
