//! Dispatch over "which quantity is unknown".

use crate::errors::RollError;
use crate::float_types::Real;
use crate::roll::{
    try_roll_inner_diameter, try_roll_length, try_roll_material_height, try_roll_outer_diameter,
};

/// Solves for whichever of the four roll quantities is `None`.
///
/// Exactly one quantity must be absent: all four present is
/// [`RollError::Overdetermined`], two or more absent is
/// [`RollError::Underdetermined`]. Absence is the `Option` itself; a supplied
/// `Some(0.0)` counts as present and is rejected by the target solver's own
/// validation.
pub fn try_roll_solve(
    h: Option<Real>,
    d0: Option<Real>,
    d1: Option<Real>,
    l: Option<Real>,
) -> Result<Real, RollError> {
    match (h, d0, d1, l) {
        (Some(_), Some(_), Some(_), Some(_)) => Err(RollError::Overdetermined),
        (Some(h), Some(d0), Some(d1), None) => try_roll_length(h, d0, d1),
        (Some(h), Some(d0), None, Some(l)) => try_roll_outer_diameter(h, d0, l),
        (Some(h), None, Some(d1), Some(l)) => try_roll_inner_diameter(h, d1, l),
        (None, Some(d0), Some(d1), Some(l)) => try_roll_material_height(d0, d1, l),
        _ => Err(RollError::Underdetermined),
    }
}

/// [`try_roll_solve`] with the error collapsed to `None`.
pub fn roll_solve(
    h: Option<Real>,
    d0: Option<Real>,
    d1: Option<Real>,
    l: Option<Real>,
) -> Option<Real> {
    try_roll_solve(h, d0, d1, l).ok()
}
