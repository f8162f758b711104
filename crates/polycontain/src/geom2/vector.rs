//! `Vector2D`: a point or displacement in the plane.
//!
//! - Value type; every operation returns a new vector.
//! - Equality is exact componentwise `f64` comparison (no tolerance).

use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use nalgebra::Vector2;

use super::error::GeomError;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vector2D {
    pub x: f64,
    pub y: f64,
}

impl Vector2D {
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[inline]
    pub const fn zeros() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    /// Componentwise multiply by any real `k`.
    #[inline]
    pub fn scale(self, k: f64) -> Self {
        Self::new(self.x * k, self.y * k)
    }

    #[inline]
    pub fn dot(self, other: Self) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// Euclidean norm.
    #[inline]
    pub fn length(self) -> f64 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    /// Distance from `self` to `target`, i.e. `|target - self|`.
    #[inline]
    pub fn distance(self, target: Self) -> f64 {
        (target - self).length()
    }

    /// Unit vector in the same direction. Errors on the zero vector.
    pub fn normalize(self) -> Result<Self, GeomError> {
        let len = self.length();
        if len == 0.0 {
            return Err(GeomError::ZeroVector);
        }
        Ok(Self::new(self.x / len, self.y / len))
    }
}

impl Add for Vector2D {
    type Output = Vector2D;
    #[inline]
    fn add(self, rhs: Vector2D) -> Self::Output {
        Vector2D::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vector2D {
    type Output = Vector2D;
    #[inline]
    fn sub(self, rhs: Vector2D) -> Self::Output {
        Vector2D::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Neg for Vector2D {
    type Output = Vector2D;
    #[inline]
    fn neg(self) -> Self::Output {
        Vector2D::new(-self.x, -self.y)
    }
}

impl Mul<f64> for Vector2D {
    type Output = Vector2D;
    #[inline]
    fn mul(self, k: f64) -> Self::Output {
        self.scale(k)
    }
}

impl fmt::Display for Vector2D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{x: {}; y: {}}}", self.x, self.y)
    }
}

impl From<Vector2<f64>> for Vector2D {
    #[inline]
    fn from(v: Vector2<f64>) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<Vector2D> for Vector2<f64> {
    #[inline]
    fn from(v: Vector2D) -> Self {
        Vector2::new(v.x, v.y)
    }
}

impl From<[f64; 2]> for Vector2D {
    #[inline]
    fn from([x, y]: [f64; 2]) -> Self {
        Self::new(x, y)
    }
}

impl From<Vector2D> for [f64; 2] {
    #[inline]
    fn from(v: Vector2D) -> Self {
        [v.x, v.y]
    }
}
