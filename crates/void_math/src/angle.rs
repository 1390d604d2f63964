//! Angle units
//!
//! Angles are stored as [`Radian`] and shown to the user as [`Degree`].
//! Conversions in both directions go through the constants in
//! [`crate::consts`] so a value survives a degree -> radian -> degree trip
//! within float tolerance.

use core::fmt;
use core::ops::{Add, Sub, Neg};

use crate::consts::{DEG_TO_RAD, RAD_TO_DEG};

/// Angle in radians
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Radian(pub f32);

/// Angle in degrees
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Degree(pub f32);

impl Radian {
    pub const ZERO: Self = Self(0.0);

    #[inline]
    pub const fn new(value: f32) -> Self {
        Self(value)
    }

    #[inline]
    pub fn value(self) -> f32 {
        self.0
    }

    /// The same angle expressed in degrees.
    #[inline]
    pub fn degrees(self) -> f32 {
        self.0 * RAD_TO_DEG
    }

    #[inline]
    pub fn to_degree(self) -> Degree {
        Degree(self.degrees())
    }
}

impl Degree {
    pub const ZERO: Self = Self(0.0);

    #[inline]
    pub const fn new(value: f32) -> Self {
        Self(value)
    }

    #[inline]
    pub fn value(self) -> f32 {
        self.0
    }

    /// The same angle expressed in radians.
    #[inline]
    pub fn radians(self) -> f32 {
        self.0 * DEG_TO_RAD
    }

    #[inline]
    pub fn to_radian(self) -> Radian {
        Radian(self.radians())
    }
}

impl From<Degree> for Radian {
    fn from(d: Degree) -> Self {
        d.to_radian()
    }
}

impl From<Radian> for Degree {
    fn from(r: Radian) -> Self {
        r.to_degree()
    }
}

impl Add for Radian {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Radian {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self(self.0 - rhs.0)
    }
}

impl Neg for Radian {
    type Output = Self;
    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl fmt::Display for Radian {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} rad", self.0)
    }
}

impl fmt::Display for Degree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}°", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_degree_to_radian() {
        let r: Radian = Degree(90.0).into();
        assert_relative_eq!(r.0, core::f32::consts::FRAC_PI_2, epsilon = 1e-6);
    }

    #[test]
    fn test_round_trip() {
        for d in [-720.0f32, -90.0, 0.0, 0.5, 45.0, 90.0, 180.0, 359.9, 1080.0] {
            let back = Radian::from(Degree(d)).degrees();
            assert_relative_eq!(back, d, epsilon = 1e-3, max_relative = 1e-5);
        }
    }
}
