use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use geocore::prelude::*;
use serde_json::{json, Value};
use tracing_subscriber::{fmt::SubscriberBuilder, EnvFilter};

mod input;

use input::{parse_path, parse_point, parse_value, path_json, point_json};

#[derive(Parser)]
#[command(name = "geocli")]
#[command(about = "Planar geometry and map unit conversions over JSON coordinates")]
#[command(
    after_help = "Coordinates are JSON: [x, y] or [[x, y], ...]. Prefix an argument with @ to read it from a file."
)]
struct Cmd {
    /// Log filter for stderr output (e.g. `debug`, `geocore=trace`)
    #[arg(long, default_value = "info")]
    log: String,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Distance between two points (planar, or meters for lon/lat with --spherical)
    Distance {
        #[arg(long)]
        a: String,
        #[arg(long)]
        b: String,
        #[arg(long)]
        spherical: bool,
    },
    /// Length of a path
    Length {
        #[arg(long)]
        path: String,
    },
    /// Intersections between two paths
    Intersect {
        #[arg(long)]
        a: String,
        #[arg(long)]
        b: String,
    },
    /// Point-in-ring or ring-in-ring containment
    Contains {
        #[arg(long)]
        outer: String,
        #[arg(long, conflicts_with = "inner", required_unless_present = "inner")]
        point: Option<String>,
        #[arg(long)]
        inner: Option<String>,
    },
    /// Whether two rings overlap
    Intersects {
        #[arg(long)]
        outer: String,
        #[arg(long)]
        inner: String,
        /// Also test segment pairs when no vertex is inside
        #[arg(long)]
        segments: bool,
    },
    /// Nearest edge of a node chain (lon/lat) to a lon/lat point
    ChooseEdge {
        #[arg(long)]
        nodes: String,
        #[arg(long)]
        point: String,
        #[arg(long, default_value_t = 17.0)]
        zoom: f64,
    },
    /// Screen-space bearing from a to b (lon/lat)
    Angle {
        #[arg(long)]
        a: String,
        #[arg(long)]
        b: String,
        #[arg(long, default_value_t = 17.0)]
        zoom: f64,
    },
    /// Rotate points counter-clockwise around a pivot
    Rotate {
        #[arg(long)]
        points: String,
        /// Radians
        #[arg(long, allow_hyphen_values = true)]
        angle: f64,
        #[arg(long)]
        pivot: String,
    },
    /// Degree / meter / tile-offset conversions
    Convert {
        #[arg(value_enum)]
        kind: Conversion,
        #[arg(long, allow_hyphen_values = true)]
        value: String,
        /// Latitude for longitude conversions
        #[arg(long, allow_hyphen_values = true, default_value_t = 0.0)]
        at_lat: f64,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Conversion {
    LatToMeters,
    LonToMeters,
    MetersToLat,
    MetersToLon,
    OffsetToMeters,
    MetersToOffset,
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::try_new(&cmd.log).context("invalid --log filter")?)
        .init();
    let out = run(cmd.action)?;
    println!("{}", serde_json::to_string_pretty(&out)?);
    Ok(())
}

fn run(action: Action) -> Result<Value> {
    match action {
        Action::Distance { a, b, spherical } => {
            let (a, b) = (parse_point(&a)?, parse_point(&b)?);
            tracing::debug!(?a, ?b, spherical, "distance");
            let d = if spherical {
                spherical_distance(a, b)
            } else {
                distance(a, b)
            };
            Ok(json!(d))
        }
        Action::Length { path } => {
            let path = parse_path(&path)?;
            tracing::debug!(points = path.len(), "length");
            Ok(json!(path_length(&path)))
        }
        Action::Intersect { a, b } => {
            let (a, b) = (parse_path(&a)?, parse_path(&b)?);
            let hits = path_intersections(&a, &b);
            tracing::info!(a = a.len(), b = b.len(), hits = hits.len(), "intersect");
            Ok(path_json(&hits))
        }
        Action::Contains { outer, point, inner } => {
            let outer = parse_path(&outer)?;
            match (point, inner) {
                (Some(p), _) => Ok(json!(point_in_polygon(parse_point(&p)?, &outer))),
                (None, Some(inner)) => {
                    Ok(json!(polygon_contains_polygon(&outer, &parse_path(&inner)?)))
                }
                (None, None) => unreachable!("clap requires --point or --inner"),
            }
        }
        Action::Intersects {
            outer,
            inner,
            segments,
        } => {
            let (outer, inner) = (parse_path(&outer)?, parse_path(&inner)?);
            Ok(json!(polygon_intersects_polygon(&outer, &inner, segments)))
        }
        Action::ChooseEdge { nodes, point, zoom } => {
            let nodes = parse_path(&nodes)?;
            let proj = Mercator::at_zoom(zoom);
            let target = proj.forward(parse_point(&point)?);
            tracing::debug!(nodes = nodes.len(), zoom, "choose_edge");
            Ok(match choose_edge(&nodes, target, &proj) {
                Some(c) => json!({
                    "index": c.index,
                    "loc": point_json(c.loc),
                    "distance": c.distance,
                }),
                None => {
                    tracing::warn!(nodes = nodes.len(), "no edge to choose");
                    Value::Null
                }
            })
        }
        Action::Angle { a, b, zoom } => {
            let (a, b) = (parse_point(&a)?, parse_point(&b)?);
            Ok(json!(angle(&a, &b, &Mercator::at_zoom(zoom))))
        }
        Action::Rotate {
            points,
            angle,
            pivot,
        } => {
            let points = parse_path(&points)?;
            Ok(path_json(&rotate(&points, angle, parse_point(&pivot)?)))
        }
        Action::Convert {
            kind,
            value,
            at_lat,
        } => convert(kind, &value, at_lat),
    }
}

fn convert(kind: Conversion, value: &str, at_lat: f64) -> Result<Value> {
    tracing::debug!(?kind, value, at_lat, "convert");
    Ok(match kind {
        Conversion::LatToMeters => json!(lat_to_meters(scalar(value)?)),
        Conversion::LonToMeters => json!(lon_to_meters(scalar(value)?, at_lat)),
        Conversion::MetersToLat => json!(meters_to_lat(scalar(value)?)),
        Conversion::MetersToLon => json!(meters_to_lon(scalar(value)?, at_lat)),
        Conversion::OffsetToMeters => point_json(offset_to_meters(parse_point(value)?)),
        Conversion::MetersToOffset => point_json(meters_to_offset(parse_point(value)?)),
    })
}

fn scalar(value: &str) -> Result<f64> {
    parse_value(value)?
        .as_f64()
        .with_context(|| format!("expected a number, got {value}"))
}
