//! Arithmetic on polynomials.
//!
//! None of these operations clean their result. In particular the product
//! of two polynomials always has stored degree `deg p + deg q`, even when
//! a leading coefficient is zero.

use std::ops::{Add, Mul, Neg, Sub};

use polylib_core::{Complex, PolyError, PolyResult};

use super::Polynomial;

impl Polynomial {
    /// Multiplies every coefficient by `scalar`.
    #[must_use]
    pub fn scale(&self, scalar: Complex) -> Self {
        Self::new(self.coefficients().iter().map(|&c| scalar * c).collect())
    }

    /// Divides every coefficient by `scalar`.
    ///
    /// Fails with [`PolyError::DivisionByZero`] if `scalar` is exactly zero.
    ///
    /// # Example
    ///
    /// ```rust
    /// use polylib_math::{Complex, Polynomial};
    ///
    /// let p = Polynomial::from_real(&[2.0, 4.0]);
    /// assert_eq!(p.div_scalar(Complex::from(2.0)).unwrap().to_string(), "1 + 2x");
    /// assert!(p.div_scalar(Complex::ZERO).is_err());
    /// ```
    pub fn div_scalar(&self, scalar: Complex) -> PolyResult<Self> {
        if scalar.is_zero() {
            return Err(PolyError::division_by_zero("polynomial scalar division"));
        }

        self.coefficients()
            .iter()
            .map(|c| c.checked_div(scalar))
            .collect::<PolyResult<Vec<_>>>()
            .map(Self::new)
    }

    /// Divides every coefficient by a real `scalar`.
    pub fn div_real(&self, scalar: f64) -> PolyResult<Self> {
        self.div_scalar(Complex::from_real(scalar))
    }

    /// Raises the polynomial to a non-negative integer power.
    ///
    /// `p^0` is the constant `1` and `p^k = p * p^(k-1)`.
    #[must_use]
    pub fn pow(&self, k: u32) -> Self {
        if k == 0 {
            return Self::monomial(0);
        }

        let mut result = self.clone();
        for _ in 1..k {
            result = self * &result;
        }
        result
    }
}

impl Neg for &Polynomial {
    type Output = Polynomial;

    fn neg(self) -> Polynomial {
        Polynomial::new(self.coefficients().iter().map(|&c| -c).collect())
    }
}

impl Neg for Polynomial {
    type Output = Polynomial;

    fn neg(self) -> Polynomial {
        -&self
    }
}

impl Add for &Polynomial {
    type Output = Polynomial;

    fn add(self, rhs: &Polynomial) -> Polynomial {
        let (p, q) = (self.coefficients(), rhs.coefficients());
        let degree = self.degree().max(rhs.degree());

        let coefficients = (0..=degree)
            .map(|i| match (p.get(i), q.get(i)) {
                (Some(&a), Some(&b)) => a + b,
                (Some(&a), None) => a,
                (None, Some(&b)) => b,
                (None, None) => Complex::ZERO,
            })
            .collect();

        Polynomial::new(coefficients)
    }
}

impl Sub for &Polynomial {
    type Output = Polynomial;

    fn sub(self, rhs: &Polynomial) -> Polynomial {
        self + &(-rhs)
    }
}

impl Mul for &Polynomial {
    type Output = Polynomial;

    /// Full convolution: `a_i * b_j` accumulates into the coefficient of
    /// `x^(i+j)`, visiting pairs in row-major order.
    fn mul(self, rhs: &Polynomial) -> Polynomial {
        let (p, q) = (self.coefficients(), rhs.coefficients());
        let mut coefficients = vec![Complex::ZERO; p.len() + q.len() - 1];

        for (i, &a) in p.iter().enumerate() {
            for (j, &b) in q.iter().enumerate() {
                coefficients[i + j] += a * b;
            }
        }

        Polynomial::new(coefficients)
    }
}

macro_rules! forward_owned_binop {
    ($($trait:ident, $method:ident);* $(;)?) => {
        $(
            impl $trait for Polynomial {
                type Output = Polynomial;

                fn $method(self, rhs: Polynomial) -> Polynomial {
                    $trait::$method(&self, &rhs)
                }
            }

            impl $trait<&Polynomial> for Polynomial {
                type Output = Polynomial;

                fn $method(self, rhs: &Polynomial) -> Polynomial {
                    $trait::$method(&self, rhs)
                }
            }

            impl $trait<Polynomial> for &Polynomial {
                type Output = Polynomial;

                fn $method(self, rhs: Polynomial) -> Polynomial {
                    $trait::$method(self, &rhs)
                }
            }
        )*
    };
}

forward_owned_binop! {
    Add, add;
    Sub, sub;
    Mul, mul;
}

macro_rules! impl_scalar_mul {
    ($($scalar:ty),*) => {
        $(
            impl Mul<$scalar> for &Polynomial {
                type Output = Polynomial;

                fn mul(self, rhs: $scalar) -> Polynomial {
                    self.scale(Complex::from(rhs))
                }
            }

            impl Mul<$scalar> for Polynomial {
                type Output = Polynomial;

                fn mul(self, rhs: $scalar) -> Polynomial {
                    self.scale(Complex::from(rhs))
                }
            }

            impl Mul<&Polynomial> for $scalar {
                type Output = Polynomial;

                fn mul(self, rhs: &Polynomial) -> Polynomial {
                    rhs.scale(Complex::from(self))
                }
            }

            impl Mul<Polynomial> for $scalar {
                type Output = Polynomial;

                fn mul(self, rhs: Polynomial) -> Polynomial {
                    rhs.scale(Complex::from(self))
                }
            }
        )*
    };
}

impl_scalar_mul!(Complex, f64);
