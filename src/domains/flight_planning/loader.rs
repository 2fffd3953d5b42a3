use std::env;
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use geojson::{Feature, GeoJson, Value};

use crate::domains::flight_planning::aggregate::types::{FieldExtent, GeoPoint};

#[derive(Debug)]
pub enum LoaderError {
    Io(std::io::Error),
    Parse(String),
}

impl From<std::io::Error> for LoaderError {
    fn from(e: std::io::Error) -> Self {
        LoaderError::Io(e)
    }
}

impl From<LoaderError> for crate::common::DomainError {
    fn from(e: LoaderError) -> Self {
        match e {
            LoaderError::Io(io) => crate::common::DomainError::InfrastructureError(io.to_string()),
            LoaderError::Parse(reason) => crate::common::DomainError::Geometry { reason },
        }
    }
}

/// Resolve the flight_planning data directory.
/// Precedence: FLIGHT_PLANNING_DATA_DIR env var -> ./resources/flight_planning -> /usr/share/kestrel-app/flight_planning
pub fn resolve_data_dir() -> PathBuf {
    if let Ok(v) = env::var("FLIGHT_PLANNING_DATA_DIR") {
        return PathBuf::from(v);
    }
    let cwd_default = Path::new("resources/flight_planning");
    if cwd_default.exists() {
        return cwd_default.to_path_buf();
    }
    PathBuf::from("/usr/share/kestrel-app/flight_planning")
}

/// Load a GeoJSON boundary file by filename (relative to the resolved data
/// dir). Returns file contents as string.
pub fn load_boundary_geojson(name: &str) -> Result<String, LoaderError> {
    let mut p = resolve_data_dir();
    p.push("boundaries");
    p.push(name);
    let mut s = String::new();
    let mut f = fs::File::open(&p)?;
    f.read_to_string(&mut s)?;
    Ok(s)
}

/// Parse a GeoJSON document into a boundary polygon extent. Accepts a bare
/// Polygon geometry, a Feature wrapping one, or the first polygon feature
/// of a FeatureCollection; only the exterior ring is used.
pub fn parse_boundary(geojson_str: &str) -> Result<FieldExtent, LoaderError> {
    let parsed: GeoJson = geojson_str
        .parse()
        .map_err(|e| LoaderError::Parse(format!("invalid GeoJSON: {}", e)))?;

    let ring = match &parsed {
        GeoJson::Geometry(geometry) => exterior_ring(&geometry.value),
        GeoJson::Feature(feature) => feature_ring(feature),
        GeoJson::FeatureCollection(collection) => {
            collection.features.iter().find_map(feature_ring)
        }
    }
    .ok_or_else(|| LoaderError::Parse("no polygon geometry found".to_string()))?;

    let mut vertices: Vec<GeoPoint> = ring
        .iter()
        .filter(|position| position.len() >= 2)
        .map(|position| GeoPoint {
            lng: position[0],
            lat: position[1],
        })
        .collect();

    // GeoJSON rings repeat the first position at the end; the engine treats
    // boundaries as implicitly closed.
    if vertices.len() > 1 && vertices.first() == vertices.last() {
        vertices.pop();
    }

    if vertices.len() < 3 {
        return Err(LoaderError::Parse(format!(
            "boundary ring has only {} usable vertices",
            vertices.len()
        )));
    }

    Ok(FieldExtent::Polygon { vertices })
}

fn feature_ring(feature: &Feature) -> Option<&Vec<Vec<f64>>> {
    feature
        .geometry
        .as_ref()
        .and_then(|geometry| exterior_ring(&geometry.value))
}

fn exterior_ring(value: &Value) -> Option<&Vec<Vec<f64>>> {
    match value {
        Value::Polygon(rings) => rings.first(),
        _ => None,
    }
}
