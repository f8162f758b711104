//! Nearest-edge containment predicate.
//!
//! Algorithm
//! - Edges are `vertices[i] → vertices[(i + 1) % n]`.
//! - Each edge projects the query onto its supporting line; the edge with the
//!   smallest query→projection distance wins (strict `<`, so the first of
//!   several equidistant edges is kept).
//! - Inside iff `normal · (projection - query) > 0` and the projection lies on
//!   the winning segment itself.
//!
//! The normal rule assumes clockwise vertex order (y up). Points on the
//! boundary report `inside = false` since the scalar is zero there.

use super::error::GeomError;
use super::segment::Segment;
use super::vector::Vector2D;

/// Diagnostic record of one classification.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Containment {
    pub query: Vector2D,
    /// Index `i` of the nearest edge `vertices[i] → vertices[i + 1]`.
    pub edge_index: usize,
    pub edge: Segment,
    /// Distance from the query to `projection`.
    pub distance: f64,
    pub projection: Vector2D,
    pub normal: Vector2D,
    /// `normal · (projection - query)`.
    pub scalar: f64,
    pub inside: bool,
}

fn edges(vertices: &[Vector2D]) -> impl Iterator<Item = Segment> + '_ {
    let n = vertices.len();
    (0..n).map(move |i| Segment::new(vertices[i], vertices[(i + 1) % n]))
}

/// Classify `query` against the polygon and keep the intermediate values.
///
/// Errors
/// - `TooFewVertices` for fewer than three vertices.
/// - `DegenerateSegment` / `VerticalNormal` if the nearest edge has no normal.
/// - `NonFinite` if no edge yields a finite distance (NaN/inf coordinates).
pub fn classify(vertices: &[Vector2D], query: Vector2D) -> Result<Containment, GeomError> {
    if vertices.len() < 3 {
        return Err(GeomError::TooFewVertices {
            got: vertices.len(),
        });
    }
    let mut min_distance = f64::INFINITY;
    let mut nearest: Option<(usize, Segment, Vector2D)> = None;
    for (i, edge) in edges(vertices).enumerate() {
        let h = edge.projection_from(query)?;
        let d = query.distance(h);
        if d < min_distance {
            min_distance = d;
            nearest = Some((i, edge, h));
        }
    }
    let (edge_index, edge, projection) = nearest.ok_or(GeomError::NonFinite)?;

    let normal = edge.normal()?;
    let scalar = normal.dot(projection - query);
    let inside = scalar > 0.0 && edge.point_on_segment(projection);
    Ok(Containment {
        query,
        edge_index,
        edge,
        distance: min_distance,
        projection,
        normal,
        scalar,
        inside,
    })
}

/// Whether `query` lies inside the polygon given by `vertices`.
#[inline]
pub fn point_in_polygon(vertices: &[Vector2D], query: Vector2D) -> Result<bool, GeomError> {
    classify(vertices, query).map(|c| c.inside)
}

/// Classify many queries against one polygon; stops at the first failure.
pub fn classify_all(
    vertices: &[Vector2D],
    queries: &[Vector2D],
) -> Result<Vec<Containment>, GeomError> {
    queries.iter().map(|&q| classify(vertices, q)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(x: f64, y: f64) -> Vector2D {
        Vector2D::new(x, y)
    }

    #[test]
    fn edges_wrap_around() {
        let verts = [v(0.0, 0.0), v(0.0, 1.0), v(1.0, 0.0)];
        let es: Vec<Segment> = edges(&verts).collect();
        assert_eq!(es.len(), 3);
        assert_eq!(es[2].start(), v(1.0, 0.0));
        assert_eq!(es[2].end(), v(0.0, 0.0));
    }

    #[test]
    fn too_few_vertices_is_error() {
        assert_eq!(
            classify(&[], v(0.0, 0.0)),
            Err(GeomError::TooFewVertices { got: 0 })
        );
        assert_eq!(
            point_in_polygon(&[v(0.0, 0.0), v(1.0, 1.0)], v(0.5, 0.5)),
            Err(GeomError::TooFewVertices { got: 2 })
        );
    }

    #[test]
    fn non_finite_query_is_error() {
        let verts = [v(0.0, 0.0), v(1.0, 2.0), v(3.0, 1.0)];
        assert_eq!(
            classify(&verts, v(f64::NAN, 0.5)),
            Err(GeomError::NonFinite)
        );
    }

    #[test]
    fn ties_keep_first_edge() {
        // Clockwise parallelogram; (2.5, 1) is exactly 1 from top (edge 1) and bottom (edge 3).
        let verts = [v(0.0, 0.0), v(1.0, 2.0), v(5.0, 2.0), v(4.0, 0.0)];
        let c = classify(&verts, v(2.5, 1.0)).unwrap();
        assert_eq!(c.edge_index, 1);
        assert_eq!(c.distance, 1.0);
        assert_eq!(c.projection, v(2.5, 2.0));
        assert_eq!(c.scalar, 1.0);
        assert!(c.inside);
    }

    #[test]
    fn boundary_point_is_outside() {
        let verts = [v(0.0, 0.0), v(1.0, 2.0), v(5.0, 2.0), v(4.0, 0.0)];
        let c = classify(&verts, v(3.0, 2.0)).unwrap();
        assert_eq!(c.distance, 0.0);
        assert!(!c.inside);
    }

    #[test]
    fn classify_all_stops_on_error() {
        let square = [v(0.0, 0.0), v(0.0, 4.0), v(4.0, 4.0), v(4.0, 0.0)];
        let ok = classify_all(&square, &[v(2.0, 1.0), v(2.0, 3.0)]).unwrap();
        assert_eq!(ok.len(), 2);
        assert!(ok.iter().all(|c| c.inside));
        assert_eq!(
            classify_all(&square, &[v(2.0, 1.0), v(1.0, 2.0)]),
            Err(GeomError::VerticalNormal)
        );
    }
}
