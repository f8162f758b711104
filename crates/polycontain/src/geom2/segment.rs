//! Oriented edge between two points and its line representation.
//!
//! - `LineForm` classifies the supporting line once (horizontal, vertical, or
//!   implicit `a·x + b·y + c = 0` with `b = -1`); membership, normal and
//!   projection all dispatch on it.
//! - Zero-length edges classify as `Horizontal` (since `dy = 0`), so membership
//!   and projection still work; only `normal` rejects them.

use std::fmt;

use super::cfg::LINE_EPS;
use super::error::GeomError;
use super::vector::Vector2D;

/// Fixed `y` coefficient of the implicit line form.
const IMPLICIT_B: f64 = -1.0;

/// Supporting line of a segment.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum LineForm {
    /// `y = y` (also used for zero-length segments).
    Horizontal { y: f64 },
    /// `x = x`.
    Vertical { x: f64 },
    /// `a·x + b·y + c = 0`, `a` the slope, `b = -1`.
    Implicit { a: f64, b: f64, c: f64 },
}

impl LineForm {
    /// Classify the line through `start` and `end`. Horizontal wins over vertical.
    pub fn through(start: Vector2D, end: Vector2D) -> Self {
        if end.y == start.y {
            return LineForm::Horizontal { y: start.y };
        }
        if end.x == start.x {
            return LineForm::Vertical { x: start.x };
        }
        let a = (end.y - start.y) / (end.x - start.x);
        LineForm::Implicit {
            a,
            b: IMPLICIT_B,
            c: start.y - a * start.x,
        }
    }
}

/// Oriented edge `start → end`.
///
/// Callers are expected to pass distinct endpoints; a zero-length segment is
/// accepted but its `normal` fails with `GeomError::DegenerateSegment`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    start: Vector2D,
    end: Vector2D,
    line: LineForm,
}

impl Segment {
    pub fn new(start: Vector2D, end: Vector2D) -> Self {
        Self {
            start,
            end,
            line: LineForm::through(start, end),
        }
    }

    #[inline]
    pub fn start(&self) -> Vector2D {
        self.start
    }

    #[inline]
    pub fn end(&self) -> Vector2D {
        self.end
    }

    #[inline]
    pub fn line_form(&self) -> LineForm {
        self.line
    }

    /// Whether `point` lies on the infinite line through the endpoints.
    ///
    /// Axis-aligned lines compare `|p - line| < LINE_EPS` on the free axis.
    /// General lines compare the two parametric ratios
    /// `(p.x - s.x)/(e.x - s.x)` and `(p.y - s.y)/(e.y - s.y)` within `LINE_EPS`.
    pub fn point_on_line(&self, point: Vector2D) -> bool {
        match self.line {
            LineForm::Horizontal { y } => (point.y - y).abs() < LINE_EPS,
            LineForm::Vertical { x } => (point.x - x).abs() < LINE_EPS,
            LineForm::Implicit { .. } => {
                let tx = (point.x - self.start.x) / (self.end.x - self.start.x);
                let ty = (point.y - self.start.y) / (self.end.y - self.start.y);
                (tx - ty).abs() < LINE_EPS
            }
        }
    }

    /// On the line and inside the closed bounding box of the endpoints.
    pub fn point_on_segment(&self, point: Vector2D) -> bool {
        let (x_min, x_max) = (self.start.x.min(self.end.x), self.start.x.max(self.end.x));
        let (y_min, y_max) = (self.start.y.min(self.end.y), self.start.y.max(self.end.y));
        self.point_on_line(point)
            && (x_min..=x_max).contains(&point.x)
            && (y_min..=y_max).contains(&point.y)
    }

    /// Unit normal chosen by edge direction.
    ///
    /// With slope `a` and `b = -1`: `(-a, -b)` when `dx >= 0`, else `(a, b)`.
    /// For a clockwise polygon this points out of the interior.
    pub fn normal(&self) -> Result<Vector2D, GeomError> {
        let dx = self.end.x - self.start.x;
        let a = match self.line {
            LineForm::Vertical { .. } => return Err(GeomError::VerticalNormal),
            LineForm::Horizontal { .. } if dx == 0.0 => return Err(GeomError::DegenerateSegment),
            LineForm::Horizontal { .. } => 0.0,
            LineForm::Implicit { a, .. } => a,
        };
        let n = if dx >= 0.0 {
            Vector2D::new(-a, -IMPLICIT_B)
        } else {
            Vector2D::new(a, IMPLICIT_B)
        };
        n.normalize()
    }

    /// Projection of `target` onto the supporting line.
    ///
    /// The general case steps from `target` along `normal()` by the unsigned
    /// line distance. That lands on the line only when the normal points from
    /// `target` toward it; otherwise the result sits on the far side, at twice
    /// the distance from the line.
    pub fn projection_from(&self, target: Vector2D) -> Result<Vector2D, GeomError> {
        match self.line {
            LineForm::Horizontal { y } => Ok(Vector2D::new(target.x, y)),
            LineForm::Vertical { x } => Ok(Vector2D::new(x, target.y)),
            LineForm::Implicit { a, b, c } => {
                let dist = (a * target.x + b * target.y + c).abs() / (a * a + b * b).sqrt();
                Ok(target + self.normal()? * dist)
            }
        }
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "from({}) to({})", self.start, self.end)
    }
}
