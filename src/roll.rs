//! Solvers deriving each roll quantity from the other three.
//!
//! Every solver validates its inputs against the domain invariant
//! `0 < h <= d0 < d1` and `l >= PI * d1`, reporting violations as
//! [`RollError`]. The `roll_*` wrappers collapse the error to `None` for
//! callers that only care whether a result exists.

use crate::errors::{Quantity, RollError};
use crate::float_types::{PI, Real};
use crate::spiral;

/// Default iteration cap for the Newton-Raphson length inversion.
///
/// Quadratic convergence from the wrap-count seed reaches full double
/// precision well inside this bound for realistic rolls, so the solvers run
/// no separate tolerance check.
pub const NEWTON_MAX_ITERATIONS: usize = 10;

fn finite(value: Real, quantity: Quantity) -> Result<Real, RollError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(RollError::NonFinite(quantity))
    }
}

fn positive(value: Real, quantity: Quantity) -> Result<Real, RollError> {
    if finite(value, quantity)? <= 0.0 {
        Err(RollError::NotPositive(quantity))
    } else {
        Ok(value)
    }
}

/// Unwound length of a roll of material height `h` wound from inner diameter
/// `d0` out to outer diameter `d1`.
///
/// This is the exact spiral arc length, not a per-wrap approximation.
///
/// ```
/// let length = roll_calc::roll_length(0.1, 2.0, 3.0).unwrap();
/// assert!((length - 39.27313461871492).abs() < 1e-9);
/// ```
pub fn try_roll_length(h: Real, d0: Real, d1: Real) -> Result<Real, RollError> {
    positive(h, Quantity::MaterialHeight)?;
    positive(d0, Quantity::InnerDiameter)?;
    positive(d1, Quantity::OuterDiameter)?;
    if h > d0 {
        return Err(RollError::ThicknessAboveDiameter);
    }
    if d0 >= d1 {
        return Err(RollError::DiameterOrder);
    }

    let phi0 = spiral::spiral_angle(d0, h);
    let phi1 = spiral::spiral_angle(d1, h);
    Ok(spiral::arc_length(phi0, phi1, h))
}

/// [`try_roll_length`] with the error collapsed to `None`.
pub fn roll_length(h: Real, d0: Real, d1: Real) -> Option<Real> {
    try_roll_length(h, d0, d1).ok()
}

/// Outer diameter of a roll of material height `h` on a core of diameter
/// `d0` holding length `l`, solved with up to [`NEWTON_MAX_ITERATIONS`]
/// Newton-Raphson refinements.
pub fn try_roll_outer_diameter(h: Real, d0: Real, l: Real) -> Result<Real, RollError> {
    try_roll_outer_diameter_with(h, d0, l, NEWTON_MAX_ITERATIONS)
}

/// [`try_roll_outer_diameter`] with an explicit iteration cap.
///
/// The cap is inclusive: `max_iterations = 10` performs up to eleven Newton
/// steps. The loop stops early only when a step is exactly zero, meaning the
/// angle no longer moves at this precision; there is no tolerance-based
/// exit, and a degenerate derivative can surface as a non-finite diameter.
pub fn try_roll_outer_diameter_with(
    h: Real,
    d0: Real,
    l: Real,
    max_iterations: usize,
) -> Result<Real, RollError> {
    positive(h, Quantity::MaterialHeight)?;
    positive(d0, Quantity::InnerDiameter)?;
    finite(l, Quantity::Length)?;
    if h > d0 {
        return Err(RollError::ThicknessAboveDiameter);
    }
    if l < PI * d0 {
        return Err(RollError::LengthBelowOneWrap);
    }

    // Seed from the constant-circumference-per-wrap estimate of the number
    // of wraps, then refine the outer angle as the root of
    // f(phi1) = arc_length(phi0, phi1) - l.
    let n = (h - d0 + (((d0 - h) * (d0 - h) + 4.0 * h * l) / PI).sqrt()) / (2.0 * h);
    let d1 = 2.0 * n * h + d0;
    let phi0 = spiral::spiral_angle(d0, h);
    let mut phi1 = spiral::spiral_angle(d1, h);
    for _ in 0..=max_iterations {
        let step = (spiral::arc_length(phi0, phi1, h) - l) / spiral::arc_length_derivative(phi1, h);
        phi1 -= step;
        if step == 0.0 {
            break;
        }
    }

    Ok(spiral::diameter(phi1, h))
}

/// [`try_roll_outer_diameter`] with the error collapsed to `None`.
pub fn roll_outer_diameter(h: Real, d0: Real, l: Real) -> Option<Real> {
    try_roll_outer_diameter(h, d0, l).ok()
}

/// [`try_roll_outer_diameter_with`] with the error collapsed to `None`.
pub fn roll_outer_diameter_with(h: Real, d0: Real, l: Real, max_iterations: usize) -> Option<Real> {
    try_roll_outer_diameter_with(h, d0, l, max_iterations).ok()
}

/// Inner diameter of a roll of material height `h` with outer diameter `d1`
/// and unwound length `l`.
///
/// No closed-form inverse exists from this side either, so the solve reduces
/// to [`try_roll_outer_diameter`]: wind the whole length onto the smallest
/// possible core (`d0 = h`) to find the diameter `m` it ends at; the spiral
/// segment from `m` out to `d1` then has exactly the length of the
/// core-to-`d0` segment, and re-solving with that length recovers `d0`.
pub fn try_roll_inner_diameter(h: Real, d1: Real, l: Real) -> Result<Real, RollError> {
    positive(h, Quantity::MaterialHeight)?;
    finite(d1, Quantity::OuterDiameter)?;
    finite(l, Quantity::Length)?;
    if d1 <= h {
        return Err(RollError::ThicknessAboveDiameter);
    }
    if l < PI * d1 {
        return Err(RollError::LengthBelowOneWrap);
    }

    let min_outer = try_roll_outer_diameter(h, h, l)?;
    // Fails with DiameterOrder when l cannot fit between the bare core and
    // d1, i.e. the implied inner diameter would be below h.
    let segment = try_roll_length(h, min_outer, d1)?;
    try_roll_outer_diameter(h, h, segment)
}

/// [`try_roll_inner_diameter`] with the error collapsed to `None`.
pub fn roll_inner_diameter(h: Real, d1: Real, l: Real) -> Option<Real> {
    try_roll_inner_diameter(h, d1, l).ok()
}

/// Material height of a roll with diameters `d0`, `d1` and unwound length
/// `l`, from the mean-circumference approximation
/// `h = (PI / (4·l)) · (d1² - d0²)`.
///
/// Unlike the other solvers this is not an inversion of the exact spiral
/// integral (none exists in closed form for `h`); expect roughly four
/// accurate decimal places rather than eight.
pub fn try_roll_material_height(d0: Real, d1: Real, l: Real) -> Result<Real, RollError> {
    positive(d0, Quantity::InnerDiameter)?;
    positive(d1, Quantity::OuterDiameter)?;
    finite(l, Quantity::Length)?;
    if d1 <= d0 {
        return Err(RollError::DiameterOrder);
    }
    if l < PI * d1 {
        return Err(RollError::LengthBelowOneWrap);
    }

    Ok((PI / (4.0 * l)) * (d1 * d1 - d0 * d0))
}

/// [`try_roll_material_height`] with the error collapsed to `None`.
pub fn roll_material_height(d0: Real, d1: Real, l: Real) -> Option<Real> {
    try_roll_material_height(d0, d1, l).ok()
}
