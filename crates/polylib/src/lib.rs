//! # PolyLib
//!
//! Complex polynomial algebra with Durand–Kerner root finding.
//!
//! This crate re-exports the public API of:
//!
//! - [`core`]: the [`Complex`] number type and the [`PolyError`] error type
//! - [`math`]: [`Polynomial`], the root solvers and [`FactorizedPolynomial`]
//!
//! ## Example
//!
//! ```rust
//! use polylib::prelude::*;
//!
//! // 2x^2 - 8 = 2(x - 2)(x + 2)
//! let p = Polynomial::from_real(&[-8.0, 0.0, 2.0]);
//!
//! let mut roots: Vec<f64> = p.roots().unwrap().iter().map(Complex::re).collect();
//! roots.sort_by(f64::total_cmp);
//! assert_eq!(roots, vec![-2.0, 2.0]);
//!
//! assert_eq!(p.factorize().unwrap().expand(), p);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub use polylib_core as core;
pub use polylib_math as math;

pub use polylib_core::{Complex, PolyError, PolyResult};
pub use polylib_math::solvers::{durand_kerner, RootConfig, RootsResult};
pub use polylib_math::{FactorizedPolynomial, Polynomial};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use polylib_core::prelude::*;
    pub use polylib_math::prelude::*;
}
