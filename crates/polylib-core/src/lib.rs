//! # PolyLib Core
//!
//! Foundational types for the PolyLib polynomial library.
//!
//! This crate provides:
//!
//! - **Complex**: an immutable complex number type with exact equality
//! - **Errors**: the shared [`PolyError`] / [`PolyResult`] types
//! - **Rounding**: decimal rounding used to suppress floating noise
//!
//! ## Example
//!
//! ```rust
//! use polylib_core::prelude::*;
//!
//! let z = Complex::new(1.0, 1.0);
//! assert_eq!(z * z.conj(), Complex::from(2.0));
//! assert!(z.checked_div(Complex::ZERO).is_err());
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
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::float_cmp)]
#![allow(clippy::similar_names)]
#![allow(clippy::unreadable_literal)]
#![allow(clippy::uninlined_format_args)]

pub mod complex;
pub mod error;
pub mod rounding;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::complex::Complex;
    pub use crate::error::{PolyError, PolyResult};
    pub use crate::rounding::{round_to, NOISE_DIGITS};
}

pub use complex::Complex;
pub use error::{PolyError, PolyResult};
pub use rounding::{round_to, NOISE_DIGITS};
