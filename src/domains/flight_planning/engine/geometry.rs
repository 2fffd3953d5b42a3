use crate::common::{DomainError, DomainResult};
use crate::domains::flight_planning::aggregate::types::{
    FieldExtent, GeoPoint, LocalPoint, PlanningInput,
};
use serde::{Deserialize, Serialize};

/// Equirectangular approximation constant for one degree of latitude.
pub const METERS_PER_DEGREE_LAT: f64 = 111_320.0;

/// Axis-aligned extents of the field in the local frame, meters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FieldBounds {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

impl FieldBounds {
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }
}

/// Stage-1 output: the field in a normalized planar coordinate system
/// (meters, local origin). Bounding extents size the sweep only; the
/// authoritative sprayed surface stays `PlanningInput::area_hectares`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedField {
    pub origin: GeoPoint,
    pub meters_per_degree_lat: f64,
    pub meters_per_degree_lng: f64,
    /// Projected boundary for polygon inputs, None for rectangles.
    pub local_boundary: Option<Vec<LocalPoint>>,
    pub bounds: FieldBounds,
}

impl NormalizedField {
    pub fn width_meters(&self) -> f64 {
        self.bounds.width()
    }

    pub fn height_meters(&self) -> f64 {
        self.bounds.height()
    }

    pub fn project_to_local(&self, point: &GeoPoint) -> LocalPoint {
        project_to_local(point, &self.origin, self.meters_per_degree_lng)
    }

    pub fn to_geo(&self, point: &LocalPoint) -> GeoPoint {
        GeoPoint {
            lat: self.origin.lat + point.y / self.meters_per_degree_lat,
            lng: self.origin.lng + point.x / self.meters_per_degree_lng,
        }
    }
}

/// Project a geographic point onto the local planar frame centered on
/// `origin`.
pub fn project_to_local(point: &GeoPoint, origin: &GeoPoint, meters_per_degree_lng: f64) -> LocalPoint {
    LocalPoint {
        x: (point.lng - origin.lng) * meters_per_degree_lng,
        y: (point.lat - origin.lat) * METERS_PER_DEGREE_LAT,
    }
}

/// Signed shoelace area of a closed polygon, square meters. Positive for
/// counter-clockwise winding.
pub fn shoelace_area(points: &[LocalPoint]) -> f64 {
    if points.len() < 3 {
        return 0.0;
    }
    let mut twice_area = 0.0;
    for i in 0..points.len() {
        let a = &points[i];
        let b = &points[(i + 1) % points.len()];
        twice_area += a.x * b.y - b.x * a.y;
    }
    twice_area / 2.0
}

/// Resolve the caller-supplied extent into a normalized planar field.
pub fn resolve(input: &PlanningInput, epsilon_ratio: f64) -> DomainResult<NormalizedField> {
    match &input.field_extent {
        FieldExtent::Rectangle {
            width_east_west_meters,
            height_north_south_meters,
        } => {
            let origin = input.frame_anchor();
            let meters_per_degree_lng = METERS_PER_DEGREE_LAT * origin.lat.to_radians().cos();
            Ok(NormalizedField {
                origin,
                meters_per_degree_lat: METERS_PER_DEGREE_LAT,
                meters_per_degree_lng,
                local_boundary: None,
                bounds: FieldBounds {
                    min_x: -width_east_west_meters / 2.0,
                    max_x: width_east_west_meters / 2.0,
                    min_y: -height_north_south_meters / 2.0,
                    max_y: height_north_south_meters / 2.0,
                },
            })
        }
        FieldExtent::Polygon { vertices } => {
            if vertices.len() < 3 {
                return Err(DomainError::Geometry {
                    reason: format!(
                        "boundary polygon needs at least 3 vertices, got {}",
                        vertices.len()
                    ),
                });
            }
            let origin = vertices[0];
            let mean_lat = vertices.iter().map(|v| v.lat).sum::<f64>() / vertices.len() as f64;
            let meters_per_degree_lng = METERS_PER_DEGREE_LAT * mean_lat.to_radians().cos();

            let local: Vec<LocalPoint> = vertices
                .iter()
                .map(|v| project_to_local(v, &origin, meters_per_degree_lng))
                .collect();

            let area_m2 = shoelace_area(&local).abs();
            let min_area_m2 = epsilon_ratio * input.area_hectares * 10_000.0;
            if area_m2 < min_area_m2 {
                return Err(DomainError::Geometry {
                    reason: format!(
                        "boundary polygon area {:.1} m2 is degenerate relative to the declared {} ha",
                        area_m2, input.area_hectares
                    ),
                });
            }

            let mut bounds = FieldBounds {
                min_x: f64::INFINITY,
                max_x: f64::NEG_INFINITY,
                min_y: f64::INFINITY,
                max_y: f64::NEG_INFINITY,
            };
            for p in &local {
                bounds.min_x = bounds.min_x.min(p.x);
                bounds.max_x = bounds.max_x.max(p.x);
                bounds.min_y = bounds.min_y.min(p.y);
                bounds.max_y = bounds.max_y.max(p.y);
            }

            Ok(NormalizedField {
                origin,
                meters_per_degree_lat: METERS_PER_DEGREE_LAT,
                meters_per_degree_lng,
                local_boundary: Some(local),
                bounds,
            })
        }
    }
}
