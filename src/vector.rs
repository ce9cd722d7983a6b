//! Vectors.

use crate::{
    backend::{DefaultBackend, TransformBackend},
    matrix::Matrix4x4,
    scalar::{self, VEC_PRECISION},
};
use bytemuck::{Pod, Zeroable};
use std::ops::{Index, IndexMut};

/// A 2-dimensional vector.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Zeroable, Pod)]
pub struct Vector2 {
    pub x: f32,
    pub y: f32,
}

/// A 3-dimensional vector.
///
/// When handed to a SIMD backend, the vector is padded with a zero fourth
/// component.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Zeroable, Pod)]
pub struct Vector3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

/// A 4-dimensional vector.
///
/// Comparison with `==` is approximate: two vectors are equal when the sum
/// of the absolute differences of their components is below
/// [`VEC_PRECISION`]. This relation is not transitive, so it must not be
/// used for hashing or deduplication.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, Zeroable, Pod)]
pub struct Vector4 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

impl Vector2 {
    /// The zero vector.
    pub const ZERO: Self = Self::new(0.0, 0.0);

    /// Creates a new vector with the given components.
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Creates a new vector with the same value for all components.
    #[inline]
    pub const fn same(value: f32) -> Self {
        Self::new(value, value)
    }

    /// Converts the vector to 3D by appending the given z-component.
    #[inline]
    pub const fn extended(&self, z: f32) -> Vector3 {
        Vector3::new(self.x, self.y, z)
    }

    /// Computes the dot product of this vector with another.
    #[inline]
    pub fn dot(&self, other: &Self) -> f32 {
        self.x * other.x + self.y * other.y
    }

    /// Computes the square of the norm of the vector.
    #[inline]
    pub fn norm_squared(&self) -> f32 {
        self.dot(self)
    }

    /// Computes the norm (length) of the vector.
    #[inline]
    pub fn norm(&self) -> f32 {
        scalar::sqrt(self.norm_squared())
    }

    /// Computes the normalized version of the vector. If the vector has zero
    /// length, the result will be non-finite.
    #[inline]
    pub fn normalized(&self) -> Self {
        self / self.norm()
    }

    /// Computes the normalized version of the vector if its norm exceeds the
    /// given threshold. Otherwise, returns [`None`].
    #[inline]
    pub fn try_normalized(&self, min_norm: f32) -> Option<Self> {
        let norm_squared = self.norm_squared();
        (norm_squared > min_norm.powi(2)).then(|| self / scalar::sqrt(norm_squared))
    }

    /// Whether the squared norm of the vector lies within [`VEC_PRECISION`]
    /// of one.
    #[inline]
    pub fn is_normalized(&self) -> bool {
        scalar::abs(self.norm_squared() - 1.0) <= VEC_PRECISION
    }
}

impl From<[f32; 2]> for Vector2 {
    #[inline]
    fn from([x, y]: [f32; 2]) -> Self {
        Self::new(x, y)
    }
}

impl From<Vector2> for [f32; 2] {
    #[inline]
    fn from(vector: Vector2) -> Self {
        [vector.x, vector.y]
    }
}

impl_binop!(Add, add, Vector2, Vector2, Vector2, |a, b| {
    Vector2::new(a.x + b.x, a.y + b.y)
});

impl_binop!(Sub, sub, Vector2, Vector2, Vector2, |a, b| {
    Vector2::new(a.x - b.x, a.y - b.y)
});

impl_binop!(Mul, mul, Vector2, f32, Vector2, |a, b| {
    Vector2::new(a.x * b, a.y * b)
});

impl_binop!(Mul, mul, f32, Vector2, Vector2, |a, b| {
    Vector2::new(a * b.x, a * b.y)
});

impl_binop!(Div, div, Vector2, f32, Vector2, |a, b| {
    Vector2::new(a.x / b, a.y / b)
});

impl_binop_assign!(AddAssign, add_assign, Vector2, Vector2, |a, b| {
    a.x += b.x;
    a.y += b.y;
});

impl_binop_assign!(SubAssign, sub_assign, Vector2, Vector2, |a, b| {
    a.x -= b.x;
    a.y -= b.y;
});

impl_binop_assign!(MulAssign, mul_assign, Vector2, f32, |a, b| {
    a.x *= b;
    a.y *= b;
});

impl_binop_assign!(DivAssign, div_assign, Vector2, f32, |a, b| {
    a.x /= b;
    a.y /= b;
});

impl_unary_op!(Neg, neg, Vector2, Vector2, |val| {
    Vector2::new(-val.x, -val.y)
});

impl Index<usize> for Vector2 {
    type Output = f32;

    #[inline]
    fn index(&self, idx: usize) -> &Self::Output {
        match idx {
            0 => &self.x,
            1 => &self.y,
            _ => panic!("index out of bounds"),
        }
    }
}

impl IndexMut<usize> for Vector2 {
    #[inline]
    fn index_mut(&mut self, idx: usize) -> &mut Self::Output {
        match idx {
            0 => &mut self.x,
            1 => &mut self.y,
            _ => panic!("index out of bounds"),
        }
    }
}

impl_abs_diff_eq!(Vector2, |a, b, epsilon| {
    a.x.abs_diff_eq(&b.x, epsilon) && a.y.abs_diff_eq(&b.y, epsilon)
});

impl_relative_eq!(Vector2, |a, b, epsilon, max_relative| {
    a.x.relative_eq(&b.x, epsilon, max_relative) && a.y.relative_eq(&b.y, epsilon, max_relative)
});

impl Vector3 {
    /// The zero vector.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    /// The direction a camera looks along in a right-handed view space.
    pub const FORWARD: Self = Self::new(0.0, 0.0, -1.0);

    pub const BACKWARD: Self = Self::new(0.0, 0.0, 1.0);

    pub const RIGHT: Self = Self::new(1.0, 0.0, 0.0);

    pub const LEFT: Self = Self::new(-1.0, 0.0, 0.0);

    pub const UP: Self = Self::new(0.0, 1.0, 0.0);

    pub const DOWN: Self = Self::new(0.0, -1.0, 0.0);

    /// Creates a new vector with the given components.
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Creates a new vector with the same value for all components.
    #[inline]
    pub const fn same(value: f32) -> Self {
        Self::new(value, value, value)
    }

    /// The x-axis unit vector.
    #[inline]
    pub const fn unit_x() -> Self {
        Self::new(1.0, 0.0, 0.0)
    }

    /// The y-axis unit vector.
    #[inline]
    pub const fn unit_y() -> Self {
        Self::new(0.0, 1.0, 0.0)
    }

    /// The z-axis unit vector.
    #[inline]
    pub const fn unit_z() -> Self {
        Self::new(0.0, 0.0, 1.0)
    }

    /// The 2D vector containing the x- and y-components of this vector.
    #[inline]
    pub const fn xy(&self) -> Vector2 {
        Vector2::new(self.x, self.y)
    }

    /// Converts the vector to 4D by appending the given w-component.
    #[inline]
    pub const fn extended(&self, w: f32) -> Vector4 {
        Vector4::new(self.x, self.y, self.z, w)
    }

    /// Computes the dot product of this vector with another.
    #[inline]
    pub fn dot(&self, other: &Self) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Computes the right-handed cross product of this vector with another,
    /// so that `X × Y = Z`, `Y × Z = X` and `Z × X = Y`.
    #[inline]
    pub fn cross(&self, other: &Self) -> Self {
        Self::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    /// Computes the square of the norm of the vector.
    #[inline]
    pub fn norm_squared(&self) -> f32 {
        self.dot(self)
    }

    /// Computes the norm (length) of the vector.
    #[inline]
    pub fn norm(&self) -> f32 {
        scalar::sqrt(self.norm_squared())
    }

    /// Computes the normalized version of the vector. If the vector has zero
    /// length, the result will be non-finite.
    #[inline]
    pub fn normalized(&self) -> Self {
        let norm = self.norm();
        Self::new(self.x / norm, self.y / norm, self.z / norm)
    }

    /// Computes the normalized version of the vector if its norm exceeds the
    /// given threshold. Otherwise, returns [`None`].
    #[inline]
    pub fn try_normalized(&self, min_norm: f32) -> Option<Self> {
        let norm_squared = self.norm_squared();
        (norm_squared > min_norm.powi(2)).then(|| self / scalar::sqrt(norm_squared))
    }

    /// Whether the squared norm of the vector lies within [`VEC_PRECISION`]
    /// of one.
    #[inline]
    pub fn is_normalized(&self) -> bool {
        scalar::abs(self.norm_squared() - 1.0) <= VEC_PRECISION
    }

    /// Computes the distance between this point and another.
    #[inline]
    pub fn distance(&self, other: &Self) -> f32 {
        (other - self).norm()
    }

    /// Interpolates linearly between this vector (`t = 0`) and another
    /// (`t = 1`).
    #[inline]
    pub fn lerp(&self, other: &Self, t: f32) -> Self {
        self + (other - self) * t
    }

    /// Transforms this vector as a point by the given homogeneous matrix.
    ///
    /// The point is extended with `w = 1`, multiplied with the matrix as a
    /// row vector, and the result is divided by its w-component. This is the
    /// "transform coordinate" primitive of the backend, so a projective
    /// matrix yields projected coordinates rather than a plain direction.
    #[inline]
    pub fn transform_coord(&self, matrix: &Matrix4x4) -> Self {
        DefaultBackend::transform_coord(self, matrix)
    }

    /// Transforms this vector as a direction by the given homogeneous
    /// matrix, ignoring translation and without perspective division.
    #[inline]
    pub fn transform_normal(&self, matrix: &Matrix4x4) -> Self {
        DefaultBackend::transform_normal(self, matrix)
    }
}

impl From<[f32; 3]> for Vector3 {
    #[inline]
    fn from([x, y, z]: [f32; 3]) -> Self {
        Self::new(x, y, z)
    }
}

impl From<Vector3> for [f32; 3] {
    #[inline]
    fn from(vector: Vector3) -> Self {
        [vector.x, vector.y, vector.z]
    }
}

impl From<Vector2> for Vector3 {
    /// Extends the vector with a zero z-component.
    #[inline]
    fn from(vector: Vector2) -> Self {
        vector.extended(0.0)
    }
}

impl_binop!(Add, add, Vector3, Vector3, Vector3, |a, b| {
    Vector3::new(a.x + b.x, a.y + b.y, a.z + b.z)
});

impl_binop!(Sub, sub, Vector3, Vector3, Vector3, |a, b| {
    Vector3::new(a.x - b.x, a.y - b.y, a.z - b.z)
});

impl_binop!(Mul, mul, Vector3, f32, Vector3, |a, b| {
    Vector3::new(a.x * b, a.y * b, a.z * b)
});

impl_binop!(Mul, mul, f32, Vector3, Vector3, |a, b| {
    Vector3::new(a * b.x, a * b.y, a * b.z)
});

impl_binop!(Div, div, Vector3, f32, Vector3, |a, b| {
    Vector3::new(a.x / b, a.y / b, a.z / b)
});

impl_binop_assign!(AddAssign, add_assign, Vector3, Vector3, |a, b| {
    a.x += b.x;
    a.y += b.y;
    a.z += b.z;
});

impl_binop_assign!(SubAssign, sub_assign, Vector3, Vector3, |a, b| {
    a.x -= b.x;
    a.y -= b.y;
    a.z -= b.z;
});

impl_binop_assign!(MulAssign, mul_assign, Vector3, f32, |a, b| {
    a.x *= b;
    a.y *= b;
    a.z *= b;
});

impl_binop_assign!(DivAssign, div_assign, Vector3, f32, |a, b| {
    a.x /= b;
    a.y /= b;
    a.z /= b;
});

impl_unary_op!(Neg, neg, Vector3, Vector3, |val| {
    Vector3::new(-val.x, -val.y, -val.z)
});

impl Index<usize> for Vector3 {
    type Output = f32;

    #[inline]
    fn index(&self, idx: usize) -> &Self::Output {
        match idx {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            _ => panic!("index out of bounds"),
        }
    }
}

impl IndexMut<usize> for Vector3 {
    #[inline]
    fn index_mut(&mut self, idx: usize) -> &mut Self::Output {
        match idx {
            0 => &mut self.x,
            1 => &mut self.y,
            2 => &mut self.z,
            _ => panic!("index out of bounds"),
        }
    }
}

impl_abs_diff_eq!(Vector3, |a, b, epsilon| {
    a.x.abs_diff_eq(&b.x, epsilon)
        && a.y.abs_diff_eq(&b.y, epsilon)
        && a.z.abs_diff_eq(&b.z, epsilon)
});

impl_relative_eq!(Vector3, |a, b, epsilon, max_relative| {
    a.x.relative_eq(&b.x, epsilon, max_relative)
        && a.y.relative_eq(&b.y, epsilon, max_relative)
        && a.z.relative_eq(&b.z, epsilon, max_relative)
});

impl Vector4 {
    /// The zero vector.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    /// Creates a new vector with the given components.
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }

    /// Creates a new vector with the same value for all components.
    #[inline]
    pub const fn same(value: f32) -> Self {
        Self::new(value, value, value, value)
    }

    /// The x-axis unit vector.
    #[inline]
    pub const fn unit_x() -> Self {
        Self::new(1.0, 0.0, 0.0, 0.0)
    }

    /// The y-axis unit vector.
    #[inline]
    pub const fn unit_y() -> Self {
        Self::new(0.0, 1.0, 0.0, 0.0)
    }

    /// The z-axis unit vector.
    #[inline]
    pub const fn unit_z() -> Self {
        Self::new(0.0, 0.0, 1.0, 0.0)
    }

    /// The w-axis unit vector.
    #[inline]
    pub const fn unit_w() -> Self {
        Self::new(0.0, 0.0, 0.0, 1.0)
    }

    /// The 3D vector containing the x-, y-, and z-components of this vector.
    #[inline]
    pub const fn xyz(&self) -> Vector3 {
        Vector3::new(self.x, self.y, self.z)
    }

    /// Computes the dot product of this vector with another.
    #[inline]
    pub fn dot(&self, other: &Self) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z + self.w * other.w
    }

    /// Computes the square of the norm of the vector.
    #[inline]
    pub fn norm_squared(&self) -> f32 {
        self.dot(self)
    }

    /// Computes the norm (length) of the vector.
    #[inline]
    pub fn norm(&self) -> f32 {
        scalar::sqrt(self.norm_squared())
    }

    /// Computes the normalized version of the vector. If the vector has zero
    /// length, the result will be non-finite.
    #[inline]
    pub fn normalized(&self) -> Self {
        self / self.norm()
    }

    /// Sum of the absolute differences between the components of this
    /// vector and another.
    #[inline]
    pub fn abs_difference_sum(&self, other: &Self) -> f32 {
        scalar::abs(self.x - other.x)
            + scalar::abs(self.y - other.y)
            + scalar::abs(self.z - other.z)
            + scalar::abs(self.w - other.w)
    }

    /// Whether this vector equals another within [`VEC_PRECISION`], measured
    /// as the sum of the absolute component differences. This is the
    /// relation used by `==`.
    #[inline]
    pub fn approx_eq(&self, other: &Self) -> bool {
        self.abs_difference_sum(other) < VEC_PRECISION
    }

    /// Returns a vector with the given closure applied to each component.
    #[inline]
    pub fn mapped(&self, mut f: impl FnMut(f32) -> f32) -> Self {
        Self::new(f(self.x), f(self.y), f(self.z), f(self.w))
    }
}

impl PartialEq for Vector4 {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.approx_eq(other)
    }
}

impl From<[f32; 4]> for Vector4 {
    #[inline]
    fn from([x, y, z, w]: [f32; 4]) -> Self {
        Self::new(x, y, z, w)
    }
}

impl From<Vector4> for [f32; 4] {
    #[inline]
    fn from(vector: Vector4) -> Self {
        [vector.x, vector.y, vector.z, vector.w]
    }
}

impl_binop!(Add, add, Vector4, Vector4, Vector4, |a, b| {
    Vector4::new(a.x + b.x, a.y + b.y, a.z + b.z, a.w + b.w)
});

impl_binop!(Sub, sub, Vector4, Vector4, Vector4, |a, b| {
    Vector4::new(a.x - b.x, a.y - b.y, a.z - b.z, a.w - b.w)
});

impl_binop!(Mul, mul, Vector4, f32, Vector4, |a, b| {
    Vector4::new(a.x * b, a.y * b, a.z * b, a.w * b)
});

impl_binop!(Mul, mul, f32, Vector4, Vector4, |a, b| {
    Vector4::new(a * b.x, a * b.y, a * b.z, a * b.w)
});

impl_binop!(Div, div, Vector4, f32, Vector4, |a, b| {
    Vector4::new(a.x / b, a.y / b, a.z / b, a.w / b)
});

impl_binop_assign!(AddAssign, add_assign, Vector4, Vector4, |a, b| {
    a.x += b.x;
    a.y += b.y;
    a.z += b.z;
    a.w += b.w;
});

impl_binop_assign!(SubAssign, sub_assign, Vector4, Vector4, |a, b| {
    a.x -= b.x;
    a.y -= b.y;
    a.z -= b.z;
    a.w -= b.w;
});

impl_binop_assign!(MulAssign, mul_assign, Vector4, f32, |a, b| {
    a.x *= b;
    a.y *= b;
    a.z *= b;
    a.w *= b;
});

impl_binop_assign!(DivAssign, div_assign, Vector4, f32, |a, b| {
    a.x /= b;
    a.y /= b;
    a.z /= b;
    a.w /= b;
});

impl_unary_op!(Neg, neg, Vector4, Vector4, |val| {
    Vector4::new(-val.x, -val.y, -val.z, -val.w)
});

impl Index<usize> for Vector4 {
    type Output = f32;

    #[inline]
    fn index(&self, idx: usize) -> &Self::Output {
        match idx {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            3 => &self.w,
            _ => panic!("index out of bounds"),
        }
    }
}

impl IndexMut<usize> for Vector4 {
    #[inline]
    fn index_mut(&mut self, idx: usize) -> &mut Self::Output {
        match idx {
            0 => &mut self.x,
            1 => &mut self.y,
            2 => &mut self.z,
            3 => &mut self.w,
            _ => panic!("index out of bounds"),
        }
    }
}

impl_abs_diff_eq!(Vector4, |a, b, epsilon| {
    a.x.abs_diff_eq(&b.x, epsilon)
        && a.y.abs_diff_eq(&b.y, epsilon)
        && a.z.abs_diff_eq(&b.z, epsilon)
        && a.w.abs_diff_eq(&b.w, epsilon)
});

impl_relative_eq!(Vector4, |a, b, epsilon, max_relative| {
    a.x.relative_eq(&b.x, epsilon, max_relative)
        && a.y.relative_eq(&b.y, epsilon, max_relative)
        && a.z.relative_eq(&b.z, epsilon, max_relative)
        && a.w.relative_eq(&b.w, epsilon, max_relative)
});
