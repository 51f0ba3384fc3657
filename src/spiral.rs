//! Exact arc length of an Archimedean spiral and its derivative.
//!
//! A roll of material of thickness `h` is the spiral `r = (h / TAU) · φ` in
//! polar coordinates. The dimensionless angle parameter `φ = PI · d / h`
//! measures how far the spiral has turned when it reaches diameter `d`, and
//! the arc length between two angles has the closed form
//!
//! ```text
//! L(φ0, φ1) = (h / 2π) · [ (φ/2)·√(φ²+1) + ½·ln(φ + √(φ²+1)) ]  evaluated φ0..φ1
//! ```
//!
//! (see <https://www.giangrandi.ch/soft/spiral/spiral.shtml>). There is no
//! closed-form inverse, so recovering an angle from a length is done
//! numerically with [`arc_length_derivative`] as the Newton derivative.

use crate::float_types::{PI, Real, TAU};

/// Angle parameter of the spiral at diameter `d` for material height `h`.
#[inline]
pub const fn spiral_angle(d: Real, h: Real) -> Real {
    PI * d / h
}

/// Diameter reached at angle parameter `phi` for material height `h`.
#[inline]
pub const fn diameter(phi: Real, h: Real) -> Real {
    phi * h / PI
}

/// Exact spiral arc length between angle parameters `phi0` and `phi1`.
///
/// Callers guarantee `0 <= phi0 <= phi1` and `h > 0`.
pub fn arc_length(phi0: Real, phi1: Real, h: Real) -> Real {
    let antiderivative = |phi: Real| {
        let hyp = (phi * phi + 1.0).sqrt();
        0.5 * (phi * hyp + (phi + hyp).ln())
    };
    (h / TAU) * (antiderivative(phi1) - antiderivative(phi0))
}

/// Derivative of [`arc_length`] with respect to its upper angle, dL/dφ1.
///
/// Only meaningful for `phi > 0`; every caller evaluates it at
/// `phi = PI · d / h` with `d > 0`.
pub fn arc_length_derivative(phi: Real, h: Real) -> Real {
    let phi2 = phi * phi;
    let hyp = (phi2 + 1.0).sqrt();
    let slope = (2.0 * phi2 + 1.0) / (2.0 * hyp)
        + (phi + hyp) / (2.0 * phi * hyp + 2.0 * phi2 + 2.0);
    (h / TAU) * slope
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_interval_has_zero_length() {
        let phi = spiral_angle(2.0, 0.1);
        assert_eq!(arc_length(phi, phi, 0.1), 0.0);
    }

    #[test]
    fn angle_and_diameter_are_inverses() {
        let phi = spiral_angle(2.0, 0.1);
        assert!((diameter(phi, 0.1) - 2.0).abs() < 1e-12);
    }

    #[test]
    fn derivative_matches_finite_difference() {
        let h = 0.1;
        let phi = spiral_angle(2.5, h);
        let eps = 1e-5;
        let numeric = (arc_length(0.0, phi + eps, h) - arc_length(0.0, phi - eps, h)) / (2.0 * eps);
        assert!((arc_length_derivative(phi, h) - numeric).abs() < 1e-6);
    }

    #[test]
    fn one_wrap_approximates_the_mean_circumference() {
        // For a tightly wound roll a single turn is close to a circle at the
        // mid-turn diameter.
        let h = 0.1;
        let phi0 = spiral_angle(2.0, h);
        let length = arc_length(phi0, phi0 + TAU, h);
        let mean_circumference = PI * diameter(phi0 + PI, h);
        assert!((length - mean_circumference).abs() / length < 1e-3);
    }
}
