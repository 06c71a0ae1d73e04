#![warn(missing_docs)]

//! Math types for the rayline 2D ray-casting kernel.
//!
//! Provides the [`Vec2`] value type used throughout the kernel for
//! points and directions, with component-wise arithmetic and the
//! fallible operations the kernel relies on.

use std::ops::{Add, Mul, Sub};

use thiserror::Error;

/// Errors from 2D vector arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MathError {
    /// Component-wise division by a vector with an exactly-zero component.
    ///
    /// This signals a degenerate direction upstream and is never produced
    /// by normal geometric outcomes such as parallel lines.
    #[error("component-wise division by a zero component")]
    DivisionByZero,
}

/// A 2D point or direction with `f64` components.
///
/// Pure value type: every operation returns a new vector. Equality is
/// exact component comparison with no epsilon; callers that need
/// tolerant comparison must bring their own.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec2 {
    /// X component.
    pub x: f64,
    /// Y component.
    pub y: f64,
}

impl Vec2 {
    /// The zero vector.
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    /// Create a new vector.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean length.
    pub fn length(&self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Return this vector scaled to unit length.
    ///
    /// The zero vector normalizes to the zero vector; callers must treat
    /// a zero result as "no direction" where that matters.
    pub fn normalize(&self) -> Self {
        let len = self.length();
        if len == 0.0 {
            return Self::ZERO;
        }
        Self::new(self.x / len, self.y / len)
    }

    /// Dot product.
    pub fn dot(&self, other: &Vec2) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// Vector-valued cross product, component convention inherited from
    /// the legacy scene tooling:
    /// `((y·ox) − (oy·x), (x·oy) − (ox·y))`.
    ///
    /// This is not the scalar 2D pseudo-cross; the intersection kernel
    /// does not use it.
    pub fn cross(&self, other: &Vec2) -> Vec2 {
        Vec2::new(
            self.y * other.x - other.y * self.x,
            self.x * other.y - other.x * self.y,
        )
    }

    /// Component-wise division.
    ///
    /// # Errors
    ///
    /// Returns [`MathError::DivisionByZero`] if either component of the
    /// divisor is exactly zero.
    pub fn component_div(&self, other: &Vec2) -> Result<Vec2, MathError> {
        if other.x == 0.0 || other.y == 0.0 {
            return Err(MathError::DivisionByZero);
        }
        Ok(Vec2::new(self.x / other.x, self.y / other.y))
    }
}

impl Add for Vec2 {
    type Output = Vec2;

    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vec2 {
    type Output = Vec2;

    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// Component-wise multiplication.
impl Mul for Vec2 {
    type Output = Vec2;

    fn mul(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x * rhs.x, self.y * rhs.y)
    }
}

/// Uniform scaling.
impl Mul<f64> for Vec2 {
    type Output = Vec2;

    fn mul(self, rhs: f64) -> Vec2 {
        Vec2::new(self.x * rhs, self.y * rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_sub() {
        let a = Vec2::new(1.0, 2.0);
        let b = Vec2::new(3.0, -4.0);
        assert_eq!(a + b, Vec2::new(4.0, -2.0));
        assert_eq!(a - b, Vec2::new(-2.0, 6.0));
    }

    #[test]
    fn test_component_mul_and_scale() {
        let a = Vec2::new(2.0, 3.0);
        let b = Vec2::new(4.0, 5.0);
        assert_eq!(a * b, Vec2::new(8.0, 15.0));
        assert_eq!(a * 2.0, Vec2::new(4.0, 6.0));
    }

    #[test]
    fn test_length() {
        let v = Vec2::new(3.0, 4.0);
        assert!((v.length() - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_normalize() {
        let v = Vec2::new(10.0, 0.0).normalize();
        assert!((v.x - 1.0).abs() < 1e-12);
        assert!(v.y.abs() < 1e-12);

        let n = Vec2::new(3.0, -4.0).normalize();
        assert!((n.length() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_normalize_zero_is_zero() {
        assert_eq!(Vec2::ZERO.normalize(), Vec2::ZERO);
    }

    #[test]
    fn test_dot() {
        let a = Vec2::new(1.0, 2.0);
        let b = Vec2::new(3.0, 4.0);
        assert!((a.dot(&b) - 11.0).abs() < 1e-12);
        // Perpendicular vectors
        assert!(Vec2::new(1.0, 0.0).dot(&Vec2::new(0.0, 1.0)).abs() < 1e-12);
    }

    #[test]
    fn test_cross_legacy_convention() {
        let a = Vec2::new(1.0, 2.0);
        let b = Vec2::new(3.0, 4.0);
        // (y·bx − by·x, x·by − bx·y) = (2·3 − 4·1, 1·4 − 3·2)
        assert_eq!(a.cross(&b), Vec2::new(2.0, -2.0));
    }

    #[test]
    fn test_component_div() {
        let a = Vec2::new(8.0, 9.0);
        let b = Vec2::new(2.0, 3.0);
        assert_eq!(a.component_div(&b), Ok(Vec2::new(4.0, 3.0)));
    }

    #[test]
    fn test_component_div_by_zero() {
        let a = Vec2::new(1.0, 1.0);
        assert_eq!(
            a.component_div(&Vec2::new(0.0, 1.0)),
            Err(MathError::DivisionByZero)
        );
        assert_eq!(
            a.component_div(&Vec2::new(1.0, 0.0)),
            Err(MathError::DivisionByZero)
        );
        assert_eq!(
            a.component_div(&Vec2::ZERO),
            Err(MathError::DivisionByZero)
        );
    }

    #[test]
    fn test_exact_equality() {
        assert_eq!(Vec2::new(0.1 + 0.2, 0.0).x, 0.1 + 0.2);
        assert_ne!(Vec2::new(0.1 + 0.2, 0.0), Vec2::new(0.3, 0.0));
    }
}
