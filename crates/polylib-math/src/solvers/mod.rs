//! Polynomial root finding.
//!
//! This module provides the simultaneous Durand–Kerner (Weierstrass)
//! iteration, which approximates every root of a polynomial at once.
//!
//! # Iteration Budget
//!
//! The work is bounded by a fixed budget rather than adapted to the input:
//! at most [`RootConfig::max_iterations`] outer rounds, each made of
//! [`INNER_ITERATIONS`] correction passes. The residual `max_k |q(z_k)|` is
//! checked before every outer round. Running out of rounds is not an
//! error: the best approximation found is returned and
//! [`RootsResult::converged`] is false.
//!
//! # Example
//!
//! ```rust
//! use polylib_math::solvers::{durand_kerner, RootConfig};
//! use polylib_math::Polynomial;
//!
//! // x^2 - 3x + 2 = (x - 1)(x - 2)
//! let p = Polynomial::from_real(&[2.0, -3.0, 1.0]);
//! let result = durand_kerner(&p, &RootConfig::default()).unwrap();
//!
//! assert!(result.converged);
//! assert_eq!(result.roots.len(), 2);
//! ```

mod durand_kerner;

pub use durand_kerner::{durand_kerner, max_residual, weierstrass_denominator};

use polylib_core::{Complex, PolyResult};
use serde::{Deserialize, Serialize};

use crate::polynomial::Polynomial;

/// Default residual tolerance for root finding.
pub const DEFAULT_TOLERANCE: f64 = 1e-12;

/// Default maximum number of outer rounds.
pub const DEFAULT_MAX_ITERATIONS: u32 = 30;

/// Number of correction passes performed in every outer round.
pub const INNER_ITERATIONS: u32 = 10;

/// Configuration for polynomial root finding.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RootConfig {
    /// Residual `max_k |q(z_k)|` at or below which iteration stops.
    pub tolerance: f64,
    /// Maximum number of outer rounds.
    pub max_iterations: u32,
}

impl Default for RootConfig {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

impl RootConfig {
    /// Creates a new root finding configuration.
    #[must_use]
    pub fn new(tolerance: f64, max_iterations: u32) -> Self {
        Self {
            tolerance,
            max_iterations,
        }
    }

    /// Sets the tolerance.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Sets the maximum number of outer rounds.
    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: u32) -> Self {
        self.max_iterations = max_iterations;
        self
    }
}

/// Result of a root finding run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RootsResult {
    /// Approximate roots, index-aligned with the unit circle seeds.
    pub roots: Vec<Complex>,
    /// Outer rounds performed.
    pub rounds: u32,
    /// Final residual `max_k |q(z_k)|` before rounding.
    pub residual: f64,
    /// Whether the residual met the tolerance.
    pub converged: bool,
}

/// Trait for algorithms that approximate all roots of a polynomial.
pub trait RootSolver {
    /// Approximates the roots of `p`.
    fn solve(&self, p: &Polynomial, config: &RootConfig) -> PolyResult<RootsResult>;

    /// Returns the name of the solver.
    fn name(&self) -> &'static str;
}

/// Durand–Kerner solver implementation.
#[derive(Debug, Clone, Copy, Default)]
pub struct DurandKerner;

impl RootSolver for DurandKerner {
    fn solve(&self, p: &Polynomial, config: &RootConfig) -> PolyResult<RootsResult> {
        durand_kerner(p, config)
    }

    fn name(&self) -> &'static str {
        "Durand-Kerner"
    }
}

impl Polynomial {
    /// Approximates all roots with the default tolerance (`1e-12`) and
    /// round limit (`30`).
    ///
    /// Each root's parts are rounded to 12 decimal digits. Fails with
    /// [`PolyError::InvalidArgument`](polylib_core::PolyError::InvalidArgument)
    /// if the cleaned polynomial is constant.
    pub fn roots(&self) -> PolyResult<Vec<Complex>> {
        self.roots_with(DEFAULT_TOLERANCE, DEFAULT_MAX_ITERATIONS)
    }

    /// Approximates all roots with a caller-supplied tolerance and round limit.
    pub fn roots_with(&self, tolerance: f64, max_iterations: u32) -> PolyResult<Vec<Complex>> {
        durand_kerner(self, &RootConfig::new(tolerance, max_iterations)).map(|r| r.roots)
    }
}
