//! Complex numbers over `f64`.
//!
//! [`Complex`] is an immutable value type: every operator returns a new
//! value. Equality is exact IEEE-754 comparison of both components, which
//! the polynomial layer relies on when deciding what counts as a zero
//! coefficient.

use std::f64::consts::PI;
use std::fmt;
use std::iter::{Product, Sum};
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use serde::{Deserialize, Serialize};

use crate::error::{PolyError, PolyResult};
use crate::rounding::round_to;

/// A complex number `re + im·i` with double-precision components.
///
/// # Example
///
/// ```rust
/// use polylib_core::Complex;
///
/// let z = Complex::new(3.0, 4.0);
/// assert_eq!(z.abs(), 5.0);
/// assert_eq!((z * Complex::I).to_string(), "-4+3i");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Complex {
    re: f64,
    im: f64,
}

impl Complex {
    /// The additive identity `0`.
    pub const ZERO: Complex = Complex::new(0.0, 0.0);

    /// The multiplicative identity `1`.
    pub const ONE: Complex = Complex::new(1.0, 0.0);

    /// The imaginary unit `i`.
    pub const I: Complex = Complex::new(0.0, 1.0);

    /// Creates a complex number from its real and imaginary parts.
    #[must_use]
    pub const fn new(re: f64, im: f64) -> Self {
        Self { re, im }
    }

    /// Creates a real complex number (imaginary part zero).
    #[must_use]
    pub const fn from_real(re: f64) -> Self {
        Self { re, im: 0.0 }
    }

    /// Creates a complex number from polar coordinates.
    #[must_use]
    pub fn from_polar(r: f64, theta: f64) -> Self {
        Self::new(r * theta.cos(), r * theta.sin())
    }

    /// Returns the real part.
    #[must_use]
    pub fn re(&self) -> f64 {
        self.re
    }

    /// Returns the imaginary part.
    #[must_use]
    pub fn im(&self) -> f64 {
        self.im
    }

    /// Returns true if the imaginary part is exactly zero.
    #[must_use]
    pub fn is_real(&self) -> bool {
        self.im == 0.0
    }

    /// Returns true if both parts are exactly zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.re == 0.0 && self.im == 0.0
    }

    /// Returns true if both parts are finite.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.re.is_finite() && self.im.is_finite()
    }

    /// Returns the magnitude `|z|`.
    #[must_use]
    pub fn abs(&self) -> f64 {
        self.re.hypot(self.im)
    }

    /// Returns the squared magnitude `|z|²` without a square root.
    #[must_use]
    pub fn norm_sqr(&self) -> f64 {
        self.re * self.re + self.im * self.im
    }

    /// Returns the argument (phase) in radians, in `(-π, π]`.
    #[must_use]
    pub fn arg(&self) -> f64 {
        self.im.atan2(self.re)
    }

    /// Returns the complex conjugate.
    #[must_use]
    pub fn conj(&self) -> Self {
        Self::new(self.re, -self.im)
    }

    /// Returns the complex exponential `e^z`.
    #[must_use]
    pub fn exp(&self) -> Self {
        Self::from_polar(self.re.exp(), self.im)
    }

    /// Returns the principal natural logarithm.
    ///
    /// The logarithm of zero has a real part of negative infinity.
    #[must_use]
    pub fn ln(&self) -> Self {
        Self::new(self.abs().ln(), self.arg())
    }

    /// Divides by `rhs`, failing if `rhs` is exactly zero.
    ///
    /// # Example
    ///
    /// ```rust
    /// use polylib_core::Complex;
    ///
    /// assert!(Complex::ONE.checked_div(Complex::ZERO).is_err());
    /// assert_eq!(Complex::ONE.checked_div(Complex::I).unwrap(), -Complex::I);
    /// ```
    pub fn checked_div(self, rhs: Complex) -> PolyResult<Complex> {
        if rhs.is_zero() {
            return Err(PolyError::division_by_zero("complex division"));
        }
        Ok(self / rhs)
    }

    /// Raises `z` to a non-negative integer power by repeated squaring.
    ///
    /// `z^0` is `1` for every `z`, including zero.
    #[must_use]
    pub fn powi(self, n: u32) -> Self {
        let mut result = Self::ONE;
        let mut base = self;
        let mut n = n;

        while n > 0 {
            if n & 1 == 1 {
                result *= base;
            }
            n >>= 1;
            if n > 0 {
                base *= base;
            }
        }

        result
    }

    /// Raises `z` to a complex power using the principal branch, `e^(w·ln z)`.
    ///
    /// For `z = 0` the result is `1` when `w = 0` and `0` when `Re w > 0`;
    /// any other exponent of zero is undefined.
    pub fn pow(self, exponent: Complex) -> PolyResult<Complex> {
        if self.is_zero() {
            if exponent.is_zero() {
                return Ok(Self::ONE);
            }
            if exponent.re > 0.0 {
                return Ok(Self::ZERO);
            }
            return Err(PolyError::invalid_argument(format!(
                "0 raised to {exponent} is undefined"
            )));
        }

        Ok((exponent * self.ln()).exp())
    }

    /// Raises `z` to a real power using the principal branch.
    pub fn powf(self, exponent: f64) -> PolyResult<Complex> {
        self.pow(Complex::from_real(exponent))
    }

    /// Returns the `k`-th of the `n` points `e^(2πik/n)` on the unit circle.
    ///
    /// Returns [`Complex::ONE`] when `n` is zero.
    #[must_use]
    pub fn unit_root(k: usize, n: usize) -> Self {
        if n == 0 {
            return Self::ONE;
        }
        Self::new(0.0, 2.0 * PI * k as f64 / n as f64).exp()
    }

    /// Rounds both parts to `digits` decimal places (ties to even).
    #[must_use]
    pub fn round(&self, digits: u32) -> Self {
        Self::new(round_to(self.re, digits), round_to(self.im, digits))
    }
}

impl From<f64> for Complex {
    fn from(re: f64) -> Self {
        Self::from_real(re)
    }
}

impl From<(f64, f64)> for Complex {
    fn from((re, im): (f64, f64)) -> Self {
        Self::new(re, im)
    }
}

/// Compares against a real literal: equal iff the imaginary part is exactly
/// zero and the real part equals the literal.
impl PartialEq<f64> for Complex {
    fn eq(&self, other: &f64) -> bool {
        self.im == 0.0 && self.re == *other
    }
}

impl PartialEq<Complex> for f64 {
    fn eq(&self, other: &Complex) -> bool {
        other == self
    }
}

impl fmt::Display for Complex {
    /// Renders `a`, `bi` or `a+bi`/`a-bi` depending on which parts are
    /// non-zero. A unit imaginary magnitude is written as a bare `i`.
    /// A precision (`{:.3}`) applies to both parts.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = f.precision();
        let number = |v: f64| {
            // Avoid printing "-0"
            let v = if v == 0.0 { 0.0 } else { v };
            match precision {
                Some(p) => format!("{v:.p$}"),
                None => format!("{v}"),
            }
        };

        if self.im == 0.0 {
            return write!(f, "{}", number(self.re));
        }

        let magnitude = if self.im.abs() == 1.0 {
            String::new()
        } else {
            number(self.im.abs())
        };

        if self.re == 0.0 {
            let sign = if self.im < 0.0 { "-" } else { "" };
            write!(f, "{sign}{magnitude}i")
        } else {
            let sign = if self.im < 0.0 { '-' } else { '+' };
            write!(f, "{}{sign}{magnitude}i", number(self.re))
        }
    }
}

impl Neg for Complex {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self::new(-self.re, -self.im)
    }
}

impl Add for Complex {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self::new(self.re + rhs.re, self.im + rhs.im)
    }
}

impl Sub for Complex {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self::new(self.re - rhs.re, self.im - rhs.im)
    }
}

impl Mul for Complex {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Self::new(
            self.re * rhs.re - self.im * rhs.im,
            self.re * rhs.im + self.im * rhs.re,
        )
    }
}

impl Div for Complex {
    type Output = Self;

    /// Divides with IEEE-754 semantics: a zero divisor yields NaN or
    /// infinite components. Use [`Complex::checked_div`] to get a
    /// [`PolyError::DivisionByZero`] instead.
    ///
    /// Uses Smith's algorithm, scaling by the larger divisor component so
    /// that divisors near the edges of the `f64` range neither overflow
    /// nor underflow. A real divisor divides each component directly.
    fn div(self, rhs: Self) -> Self::Output {
        let (a, b, c, d) = (self.re, self.im, rhs.re, rhs.im);

        if c.abs() >= d.abs() {
            let r = d / c;
            let denom = c + d * r;
            Self::new((a + b * r) / denom, (b - a * r) / denom)
        } else {
            let r = c / d;
            let denom = d + c * r;
            Self::new((a * r + b) / denom, (b * r - a) / denom)
        }
    }
}

macro_rules! impl_real_ops {
    ($($trait:ident, $method:ident);* $(;)?) => {
        $(
            impl $trait<f64> for Complex {
                type Output = Complex;

                fn $method(self, rhs: f64) -> Complex {
                    $trait::$method(self, Complex::from_real(rhs))
                }
            }

            impl $trait<Complex> for f64 {
                type Output = Complex;

                fn $method(self, rhs: Complex) -> Complex {
                    $trait::$method(Complex::from_real(self), rhs)
                }
            }
        )*
    };
}

impl_real_ops! {
    Add, add;
    Sub, sub;
    Mul, mul;
    Div, div;
}

impl AddAssign for Complex {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl SubAssign for Complex {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl MulAssign for Complex {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl DivAssign for Complex {
    fn div_assign(&mut self, rhs: Self) {
        *self = *self / rhs;
    }
}

impl Sum for Complex {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, |acc, z| acc + z)
    }
}

impl Product for Complex {
    fn product<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ONE, |acc, z| acc * z)
    }
}
