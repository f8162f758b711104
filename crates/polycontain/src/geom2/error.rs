use std::fmt;

/// Failures surfaced by vector, segment and containment operations.
///
/// The first three replace a division by zero in the underlying formulas.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GeomError {
    /// `normalize` on the zero vector.
    ZeroVector,
    /// Normal requested for an edge whose endpoints coincide.
    DegenerateSegment,
    /// Normal requested for a vertical edge (slope `dy/dx` undefined).
    VerticalNormal,
    /// A polygon needs at least three vertices.
    TooFewVertices { got: usize },
    /// No edge produced a finite distance to the query (NaN or infinite input).
    NonFinite,
}

impl fmt::Display for GeomError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeomError::ZeroVector => write!(f, "cannot normalize a zero-length vector"),
            GeomError::DegenerateSegment => {
                write!(f, "segment has coincident endpoints (zero length)")
            }
            GeomError::VerticalNormal => {
                write!(f, "normal of a vertical segment is undefined (dx = 0)")
            }
            GeomError::TooFewVertices { got } => {
                write!(f, "polygon needs at least 3 vertices, got {}", got)
            }
            GeomError::NonFinite => write!(f, "no finite nearest edge (non-finite coordinates)"),
        }
    }
}

impl std::error::Error for GeomError {}
