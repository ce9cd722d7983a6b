//! Representations of angles.
//!
//! Rotation and projection constructors accept any [`Angle`]. A bare `f32`
//! is an angle in radians, which is the convention of the transform
//! backends.

use std::{
    f32::consts::PI,
    ops::{Add, Div, Mul, Neg, Sub},
};

/// Represents an angle.
pub trait Angle: Copy {
    /// Returns the value of the angle in radians.
    fn radians(self) -> f32;

    /// Returns the value of the angle in degrees.
    fn degrees(self) -> f32 {
        self.radians() * (180.0 / PI)
    }

    /// Returns the angle as [`Radians`].
    fn as_radians(self) -> Radians {
        Radians(self.radians())
    }

    /// Returns the angle as [`Degrees`].
    fn as_degrees(self) -> Degrees {
        Degrees(self.degrees())
    }
}

/// An angle in degrees.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct Degrees(pub f32);

/// An angle in radians.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct Radians(pub f32);

impl Angle for Radians {
    #[inline]
    fn radians(self) -> f32 {
        self.0
    }
}

impl Angle for Degrees {
    #[inline]
    fn radians(self) -> f32 {
        self.0 * (PI / 180.0)
    }

    #[inline]
    fn degrees(self) -> f32 {
        self.0
    }
}

impl Angle for f32 {
    #[inline]
    fn radians(self) -> f32 {
        self
    }
}

impl From<Degrees> for Radians {
    fn from(degrees: Degrees) -> Self {
        degrees.as_radians()
    }
}

impl From<Radians> for Degrees {
    fn from(radians: Radians) -> Self {
        radians.as_degrees()
    }
}

macro_rules! impl_angle_arithmetic {
    ($t:ident) => {
        impl Add for $t {
            type Output = Self;
            fn add(self, rhs: Self) -> Self {
                Self(self.0 + rhs.0)
            }
        }

        impl Sub for $t {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self {
                Self(self.0 - rhs.0)
            }
        }

        impl Mul<f32> for $t {
            type Output = Self;
            fn mul(self, rhs: f32) -> Self {
                Self(self.0 * rhs)
            }
        }

        impl Div<f32> for $t {
            type Output = Self;
            fn div(self, rhs: f32) -> Self {
                Self(self.0 / rhs)
            }
        }

        impl Neg for $t {
            type Output = Self;
            fn neg(self) -> Self {
                Self(-self.0)
            }
        }

        impl_abs_diff_eq!($t, |a, b, epsilon| { a.0.abs_diff_eq(&b.0, epsilon) });

        impl_relative_eq!($t, |a, b, epsilon, max_relative| {
            a.0.relative_eq(&b.0, epsilon, max_relative)
        });
    };
}

impl_angle_arithmetic!(Radians);
impl_angle_arithmetic!(Degrees);

impl PartialEq<Radians> for Degrees {
    fn eq(&self, rhs: &Radians) -> bool {
        self.0 == rhs.degrees()
    }
}

impl PartialEq<Degrees> for Radians {
    fn eq(&self, rhs: &Degrees) -> bool {
        self.0 == rhs.radians()
    }
}
