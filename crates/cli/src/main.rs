use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use polycontain::geom2::{classify, Containment, GeomError, Vector2D};
use polycontain::sample::{draw_points_in_box, draw_polygon_radial, RadialCfg, ReplayToken};
use serde::Deserialize;
use serde_json::{json, Value};
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

mod provenance;

use provenance::{write_sidecar, Payload};

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Nearest-edge point-in-polygon classifier")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Classify the built-in sample points against the built-in pentagon
    Demo,
    /// Classify points read from a JSON file: {"vertices": [[x,y],..], "points": [[x,y],..]}
    Query {
        #[arg(long)]
        input: PathBuf,
        /// Write the JSON report here (plus a provenance sidecar) instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Draw a random clockwise polygon and random query points, then classify them
    Random {
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, default_value_t = 0)]
        index: u64,
        #[arg(long, default_value_t = 12)]
        vertices: usize,
        #[arg(long, default_value_t = 8)]
        points: usize,
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

/// JSON input for `query`.
#[derive(Debug, Deserialize)]
struct QueryInput {
    vertices: Vec<[f64; 2]>,
    points: Vec<[f64; 2]>,
}

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Demo => demo(),
        Action::Query { input, out } => query(&input, out.as_deref()),
        Action::Random {
            seed,
            index,
            vertices,
            points,
            out,
        } => random(seed, index, vertices, points, out.as_deref()),
    }
}

fn demo_polygon() -> Vec<Vector2D> {
    vec![
        Vector2D::new(7.0, 1.0),
        Vector2D::new(5.0, 5.0),
        Vector2D::new(9.0, 5.0),
        Vector2D::new(11.0, 3.0),
        Vector2D::new(10.0, 1.0),
    ]
}

fn demo_points() -> Vec<(&'static str, Vector2D)> {
    vec![
        ("F", Vector2D::new(9.0, 4.0)),
        ("G", Vector2D::new(7.0, 2.0)),
        ("H", Vector2D::new(12.0, 1.0)),
        ("I", Vector2D::new(11.0, 1.5)),
    ]
}

fn log_containment(c: &Containment) {
    tracing::info!(
        point = %c.query,
        min_distance = c.distance,
        nearest_edge = %c.edge,
        edge_index = c.edge_index,
        projection = %c.projection,
        scalar = c.scalar,
        "nearest_edge"
    );
}

fn demo() -> Result<()> {
    let poly = demo_polygon();
    for (label, point) in demo_points() {
        let c = classify(&poly, point).with_context(|| format!("classifying {label}"))?;
        log_containment(&c);
        let verdict = if c.inside { "inside" } else { "outside" };
        println!("point {label} {} {verdict}", c.query);
    }
    Ok(())
}

fn load_input(path: &Path) -> Result<(Vec<Vector2D>, Vec<Vector2D>)> {
    let bytes = std::fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    let input: QueryInput = serde_json::from_slice(&bytes)
        .with_context(|| format!("parsing {}", path.display()))?;
    let vertices = input.vertices.into_iter().map(Vector2D::from).collect();
    let points = input.points.into_iter().map(Vector2D::from).collect();
    Ok((vertices, points))
}

/// One JSON record per point; a failed classification becomes an `error` field.
fn report(vertices: &[Vector2D], points: &[Vector2D]) -> Value {
    let records: Vec<Value> = points
        .iter()
        .map(|&p| match classify(vertices, p) {
            Ok(c) => {
                log_containment(&c);
                json!({
                    "point": <[f64; 2]>::from(p),
                    "inside": c.inside,
                    "edge_index": c.edge_index,
                    "distance": c.distance,
                    "projection": <[f64; 2]>::from(c.projection),
                    "normal": <[f64; 2]>::from(c.normal),
                    "scalar": c.scalar,
                })
            }
            Err(e) => {
                tracing::warn!(point = %p, error = %e, "classification_failed");
                json!({
                    "point": <[f64; 2]>::from(p),
                    "error": error_kind(&e),
                    "message": e.to_string(),
                })
            }
        })
        .collect();
    let vertices: Vec<[f64; 2]> = vertices.iter().map(|&v| v.into()).collect();
    json!({ "vertices": vertices, "results": records })
}

fn error_kind(e: &GeomError) -> &'static str {
    match e {
        GeomError::ZeroVector => "zero_vector",
        GeomError::DegenerateSegment => "degenerate_segment",
        GeomError::VerticalNormal => "vertical_normal",
        GeomError::TooFewVertices { .. } => "too_few_vertices",
        GeomError::NonFinite => "non_finite",
    }
}

fn emit(doc: &Value, out: Option<&Path>, payload: Payload) -> Result<()> {
    let Some(out) = out else {
        println!("{}", serde_json::to_string_pretty(doc)?);
        return Ok(());
    };
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
    }
    std::fs::write(out, serde_json::to_vec_pretty(doc)?)
        .with_context(|| format!("writing {}", out.display()))?;
    let prov = write_sidecar(out, payload)?;
    tracing::info!(out = %out.display(), provenance = %prov.display(), "report_written");
    Ok(())
}

fn query(input: &Path, out: Option<&Path>) -> Result<()> {
    let (vertices, points) = load_input(input)?;
    tracing::info!(
        input = %input.display(),
        vertices = vertices.len(),
        points = points.len(),
        "query"
    );
    let doc = report(&vertices, &points);
    let payload = Payload::new(json!({ "mode": "query" })).with_input(input);
    emit(&doc, out, payload)
}

fn random(seed: u64, index: u64, vertices: usize, points: usize, out: Option<&Path>) -> Result<()> {
    tracing::info!(seed, index, vertices, points, "random");
    let cfg = RadialCfg {
        vertex_count: vertices,
        ..RadialCfg::default()
    };
    let tok = ReplayToken { seed, index };
    let poly = draw_polygon_radial(cfg, tok);
    let queries = draw_points_in_box(tok.advance(), points, 1.5 * cfg.base_radius);
    let doc = report(&poly, &queries);
    let payload = Payload::new(json!({
        "mode": "random",
        "seed": seed,
        "index": index,
        "vertices": vertices,
        "points": points
    }));
    emit(&doc, out, payload)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn demo_points_match_reference_verdicts() {
        let poly = demo_polygon();
        let verdicts: Vec<bool> = demo_points()
            .into_iter()
            .map(|(_, p)| classify(&poly, p).unwrap().inside)
            .collect();
        assert_eq!(verdicts, vec![true, true, false, false]);
    }

    #[test]
    fn report_keeps_errors_per_point() {
        let square = [
            Vector2D::new(0.0, 0.0),
            Vector2D::new(0.0, 4.0),
            Vector2D::new(4.0, 4.0),
            Vector2D::new(4.0, 0.0),
        ];
        let doc = report(&square, &[Vector2D::new(2.0, 1.0), Vector2D::new(1.0, 2.0)]);
        let results = doc["results"].as_array().unwrap();
        assert_eq!(results.len(), 2);
        assert_eq!(results[0]["inside"], true);
        assert_eq!(results[0]["edge_index"], 3);
        assert_eq!(results[1]["error"], "vertical_normal");
        assert_eq!(doc["vertices"].as_array().unwrap().len(), 4);
    }

    #[test]
    fn query_writes_report_and_sidecar() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("poly.json");
        fs::write(
            &input,
            r#"{"vertices": [[7,1],[5,5],[9,5],[11,3],[10,1]], "points": [[9,4],[11,1.5]]}"#,
        )
        .unwrap();
        let out = dir.path().join("nested").join("classes.json");
        query(&input, Some(out.as_path())).unwrap();

        let doc: Value = serde_json::from_slice(&fs::read(&out).unwrap()).unwrap();
        assert_eq!(doc["results"][0]["inside"], true);
        assert_eq!(doc["results"][1]["inside"], false);
        assert_eq!(doc["results"][1]["scalar"], 0.5);
        assert!(dir
            .path()
            .join("nested")
            .join("classes.provenance.json")
            .exists());
    }

    #[test]
    fn malformed_input_is_reported() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("bad.json");
        fs::write(&input, r#"{"vertices": [[1,2,3]]}"#).unwrap();
        let err = load_input(&input).unwrap_err();
        assert!(format!("{err:#}").contains("parsing"));
    }

    #[test]
    fn random_is_reproducible() {
        let dir = tempdir().unwrap();
        let a = dir.path().join("a.json");
        let b = dir.path().join("b.json");
        random(7, 3, 9, 16, Some(a.as_path())).unwrap();
        random(7, 3, 9, 16, Some(b.as_path())).unwrap();
        assert_eq!(fs::read(&a).unwrap(), fs::read(&b).unwrap());
    }
}
