//! Geometry of a wound material roll modeled as an **Archimedean (2D)
//! spiral**: given any three of material height `h`, inner diameter `d0`,
//! outer diameter `d1` and unwound length `l`, derive the fourth.
//!
//! Lengths come from the exact closed-form arc-length integral of the spiral;
//! diameters come from inverting it with Newton-Raphson (no closed-form
//! inverse exists); the material height uses a mean-circumference closed form.
//! All quantities are unitless positive reals interpreted consistently by the
//! caller.
//!
//! Each solver exists twice: a `try_roll_*` form returning
//! `Result<Real, RollError>` with the exact domain violation, and a `roll_*`
//! form collapsing the error to `None` for check-and-continue callers.
//!
//! ```
//! use roll_calc::{roll_length, roll_outer_diameter, roll_solve};
//!
//! let length = roll_length(0.1, 2.0, 3.0).unwrap();
//! assert!((length - 39.27313461871492).abs() < 1e-9);
//!
//! let outer = roll_outer_diameter(0.1, 2.0, length).unwrap();
//! assert!((outer - 3.0).abs() < 1e-8);
//!
//! // Or let the dispatcher pick the solver for the one missing quantity.
//! assert_eq!(roll_solve(Some(0.1), Some(2.0), Some(3.0), None), Some(length));
//! ```
//!
//! # Features
//! - **f64**: use f64 as Real (default)
//! - **f32**: use f32 as Real, this conflicts with f64

#![forbid(unsafe_code)]
#![deny(unused)]
#![warn(clippy::missing_const_for_fn, clippy::approx_constant, clippy::all)]

pub mod errors;
pub mod float_types;
pub mod roll;
pub mod solve;
pub mod spiral;

#[cfg(any(all(feature = "f64", feature = "f32"), not(any(feature = "f64", feature = "f32"))))]
compile_error!("Either 'f64' or 'f32' feature must be specified, but not both");

pub use errors::{Quantity, RollError};
pub use float_types::Real;
pub use roll::{
    NEWTON_MAX_ITERATIONS, roll_inner_diameter, roll_length, roll_material_height,
    roll_outer_diameter, roll_outer_diameter_with, try_roll_inner_diameter, try_roll_length,
    try_roll_material_height, try_roll_outer_diameter, try_roll_outer_diameter_with,
};
pub use solve::{roll_solve, try_roll_solve};
