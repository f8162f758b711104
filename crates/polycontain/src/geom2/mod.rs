//! 2D geometry for the nearest-edge containment test.
//!
//! Purpose
//! - `Vector2D`: plain value type with arithmetic and metric operations.
//! - `Segment`: oriented edge with line/segment membership, outward normal and
//!   orthogonal projection, all driven by one cached `LineForm`.
//! - `classify` / `point_in_polygon`: nearest edge by projected distance, then
//!   the sign of `normal · (projection - query)` plus a segment check.
//!
//! Numerics
//! - Membership uses the fixed absolute tolerance `LINE_EPS`.
//! - Divisions that can hit zero (zero vector, vertical or zero-length edge
//!   normals) return `GeomError` instead of producing NaN.

mod cfg;
mod containment;
mod error;
mod segment;
mod vector;

pub use cfg::LINE_EPS;
pub use containment::{classify, classify_all, point_in_polygon, Containment};
pub use error::GeomError;
pub use segment::{LineForm, Segment};
pub use vector::Vector2D;
