//! Tolerance defaults for 2D membership checks.
//!
//! Policy
//! - Fixed constants; no per-call tolerance juggling. Changing one changes the
//!   classification contract for borderline points.

/// Absolute tolerance for "point lies on the line" checks.
pub const LINE_EPS: f64 = 1e-6;
