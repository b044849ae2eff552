//! # PolyLib Math
//!
//! Polynomial algebra over complex coefficients.
//!
//! This crate provides:
//!
//! - **Polynomial**: arithmetic, integer powers, Horner evaluation,
//!   differentiation, definite integration, cleaning and normalization
//! - **Solvers**: Durand–Kerner simultaneous root finding
//! - **Factorization**: decomposition into linear factors and expansion
//!
//! ## Design Philosophy
//!
//! - **Exact Zero Semantics**: coefficients count as zero only when they
//!   compare equal to zero exactly, never within a tolerance
//! - **Explicit Canonical Form**: arithmetic never cleans its result
//! - **Best Effort Roots**: running out of iterations is reported in the
//!   result, not as an error
//!
//! ## Example
//!
//! ```rust
//! use polylib_math::prelude::*;
//!
//! let p = Polynomial::from_real(&[-1.0, 0.0, 1.0]);
//! let q = Polynomial::from_real(&[1.0, 1.0]);
//!
//! let product = &p * &q;
//! assert_eq!(product.degree(), 3);
//!
//! let factors = p.factorize().unwrap();
//! assert_eq!(factors.expand(), p);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::float_cmp)]
#![allow(clippy::similar_names)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::needless_range_loop)]
#![allow(clippy::unreadable_literal)]
#![allow(clippy::uninlined_format_args)]

pub mod factorized;
pub mod polynomial;
pub mod solvers;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::factorized::FactorizedPolynomial;
    pub use crate::polynomial::Polynomial;
    pub use crate::solvers::{
        durand_kerner, DurandKerner, RootConfig, RootSolver, RootsResult,
    };
    pub use polylib_core::{Complex, PolyError, PolyResult};
}

pub use factorized::FactorizedPolynomial;
pub use polylib_core::{Complex, PolyError, PolyResult};
pub use polynomial::Polynomial;
