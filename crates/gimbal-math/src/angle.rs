// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Angle units.
//!
//! Every API that takes an angle accepts `impl Into<Radians>`, so callers can
//! pass either unit and the conversion happens once at the boundary.

use core::fmt;
use core::ops::{Add, Div, Mul, Neg, Sub};

/// An angle in radians.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd, Default)]
pub struct Radians(pub f32);

/// An angle in degrees.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd, Default)]
pub struct Degrees(pub f32);

impl Radians {
    /// Returns the raw value in radians.
    pub const fn value(self) -> f32 {
        self.0
    }
}

impl Degrees {
    /// Returns the raw value in degrees.
    pub const fn value(self) -> f32 {
        self.0
    }
}

impl From<Degrees> for Radians {
    fn from(deg: Degrees) -> Self {
        Self(deg.0.to_radians())
    }
}

impl From<Radians> for Degrees {
    fn from(rad: Radians) -> Self {
        Self(rad.0.to_degrees())
    }
}

impl From<f32> for Radians {
    fn from(value: f32) -> Self {
        Self(value)
    }
}

macro_rules! impl_angle_ops {
    ($($unit:ident => $suffix:literal),* $(,)?) => {$(
        impl Add for $unit {
            type Output = Self;
            fn add(self, rhs: Self) -> Self {
                Self(self.0 + rhs.0)
            }
        }

        impl Sub for $unit {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self {
                Self(self.0 - rhs.0)
            }
        }

        impl Mul<f32> for $unit {
            type Output = Self;
            fn mul(self, rhs: f32) -> Self {
                Self(self.0 * rhs)
            }
        }

        impl Div<f32> for $unit {
            type Output = Self;
            fn div(self, rhs: f32) -> Self {
                Self(self.0 / rhs)
            }
        }

        impl Neg for $unit {
            type Output = Self;
            fn neg(self) -> Self {
                Self(-self.0)
            }
        }

        impl fmt::Display for $unit {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}{}", self.0, $suffix)
            }
        }
    )*};
}

impl_angle_ops!(Radians => "rad", Degrees => "deg");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn degrees_convert_to_radians() {
        let r: Radians = Degrees(180.0).into();
        assert!((r.value() - core::f32::consts::PI).abs() < 1e-6);
        let d: Degrees = Radians(core::f32::consts::FRAC_PI_2).into();
        assert!((d.value() - 90.0).abs() < 1e-4);
    }

    #[test]
    fn arithmetic_stays_in_unit() {
        assert_eq!(Degrees(30.0) + Degrees(15.0), Degrees(45.0));
        assert_eq!(Radians(1.0) * 2.0, Radians(2.0));
        assert_eq!(-Degrees(10.0), Degrees(-10.0));
        assert_eq!(Degrees(12.5).to_string(), "12.5deg");
    }
}
