use anyhow::{bail, Context, Result};
use geocore::Point;
use serde::Deserialize;
use serde_json::Value;
use std::fs;
use std::path::Path;

/// Raw argument text, or the contents of a file when the argument is `@path`.
pub fn read_arg(arg: &str) -> Result<String> {
    match arg.strip_prefix('@') {
        Some(path) => {
            let path = Path::new(path);
            fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))
        }
        None => Ok(arg.to_string()),
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Coords {
    One([f64; 2]),
    Many(Vec<[f64; 2]>),
}

fn parse_coords(arg: &str) -> Result<Coords> {
    let text = read_arg(arg)?;
    serde_json::from_str(&text).with_context(|| format!("parsing coordinates from {arg:?}"))
}

/// A single `[x, y]` point.
pub fn parse_point(arg: &str) -> Result<Point> {
    match parse_coords(arg)? {
        Coords::One([x, y]) => Ok(Point::new(x, y)),
        Coords::Many(_) => bail!("expected a single [x, y] point, got a list: {arg}"),
    }
}

/// A `[[x, y], ...]` path or ring (a lone point is accepted as a one-point path).
pub fn parse_path(arg: &str) -> Result<Vec<Point>> {
    Ok(match parse_coords(arg)? {
        Coords::One([x, y]) => vec![Point::new(x, y)],
        Coords::Many(pts) => pts.into_iter().map(|[x, y]| Point::new(x, y)).collect(),
    })
}

/// A number or a point, used by the unit conversions.
pub fn parse_value(arg: &str) -> Result<Value> {
    let text = read_arg(arg)?;
    serde_json::from_str(&text).with_context(|| format!("parsing value from {arg:?}"))
}

pub fn point_json(p: Point) -> Value {
    serde_json::json!([p.x, p.y])
}

pub fn path_json(points: &[Point]) -> Value {
    Value::Array(points.iter().map(|&p| point_json(p)).collect())
}
