//! Validation errors

use std::fmt::Display;

/// The four scalar quantities describing a roll.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quantity {
    /// Material height (thickness) `h`
    MaterialHeight,
    /// Inner diameter `d0`
    InnerDiameter,
    /// Outer diameter `d1`
    OuterDiameter,
    /// Unwound length `l`
    Length,
}

impl Display for Quantity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Quantity::MaterialHeight => write!(f, "material height"),
            Quantity::InnerDiameter => write!(f, "inner diameter"),
            Quantity::OuterDiameter => write!(f, "outer diameter"),
            Quantity::Length => write!(f, "length"),
        }
    }
}

/// All the possible validation issues we might encounter
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum RollError {
    /// (NonFinite) An input is NaN or infinite
    #[error("{0} is not a finite number")]
    NonFinite(Quantity),
    /// (NotPositive) An input that must be strictly positive is zero or negative
    #[error("{0} must be greater than zero")]
    NotPositive(Quantity),
    /// (ThicknessAboveDiameter) The material is thicker than the diameter it winds onto
    #[error("material height exceeds the winding diameter")]
    ThicknessAboveDiameter,
    /// (DiameterOrder) The outer diameter does not exceed the inner diameter
    #[error("outer diameter must be larger than the inner diameter")]
    DiameterOrder,
    /// (LengthBelowOneWrap) The length is shorter than one full wrap at the given diameter
    #[error("length is shorter than one full wrap (π · diameter)")]
    LengthBelowOneWrap,
    /// (Overdetermined) All four quantities were supplied, nothing left to solve
    #[error("all four quantities are known, nothing to solve")]
    Overdetermined,
    /// (Underdetermined) More than one quantity is unknown
    #[error("more than one quantity is unknown, cannot solve")]
    Underdetermined,
}
