//! Point-in-polygon classification by nearest-edge projection.
//!
//! Layout
//! - `geom2`: vectors, segments and the containment predicate.
//! - `sample`: reproducible random polygons and query points for benches/tests.
//!
//! The predicate is a nearest-edge heuristic, not ray casting or winding number.
//! Results for points near concave vertices or near-equidistant edges follow
//! the heuristic, including its known misclassifications.

pub mod geom2;
pub mod sample;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::geom2::{
        classify, classify_all, point_in_polygon, Containment, GeomError, LineForm, Segment,
        Vector2D, LINE_EPS,
    };
    pub use crate::sample::{draw_polygon_radial, draw_points_in_box, RadialCfg, ReplayToken};
}
