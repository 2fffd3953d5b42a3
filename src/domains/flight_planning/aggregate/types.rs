use crate::common::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};

/// Geographic point, WGS-84 degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

/// Point in the local planar frame, meters. x grows east, y grows north.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LocalPoint {
    pub x: f64,
    pub y: f64,
}

impl LocalPoint {
    pub fn distance_to(&self, other: &LocalPoint) -> f64 {
        ((other.x - self.x).powi(2) + (other.y - self.y).powi(2)).sqrt()
    }
}

/// Wind as supplied by the weather collaborator: meteorological direction
/// (degrees the wind blows FROM, 0 = north, clockwise) and speed in km/h.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Wind {
    pub direction_degrees: f64,
    pub speed_kmh: f64,
}

/// Field geometry as the caller supplies it: a simple rectangular extent or
/// an ordered boundary polygon (implicitly closed).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FieldExtent {
    Rectangle {
        width_east_west_meters: f64,
        height_north_south_meters: f64,
    },
    Polygon { vertices: Vec<GeoPoint> },
}

/// Immutable input for one planning run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanningInput {
    pub field_extent: FieldExtent,
    /// Authoritative surface to be sprayed. Never recomputed from the
    /// polygon when both are given.
    pub area_hectares: f64,
    pub application_rate_l_per_ha: f64,
    /// Single fixed site for both battery swap and tank refill.
    pub resupply_site: GeoPoint,
    pub wind: Wind,
    pub track_spacing_meters: f64,
    pub ground_speed_kmh: f64,
    pub battery_endurance_minutes: f64,
    pub tank_capacity_liters: f64,
    pub resupply_duration_minutes: f64,
    pub turn_duration_seconds: f64,
    pub drone_count: u32,
    pub center_point: Option<GeoPoint>,
}

impl PlanningInput {
    /// Check every input invariant before any geometry work. Physical
    /// quantities are rejected, never clamped.
    pub fn validate(&self) -> DomainResult<()> {
        fn positive(name: &str, value: f64) -> DomainResult<()> {
            if value > 0.0 && value.is_finite() {
                Ok(())
            } else {
                Err(DomainError::Validation {
                    reason: format!("{} must be positive, got {}", name, value),
                })
            }
        }
        fn non_negative(name: &str, value: f64) -> DomainResult<()> {
            if value >= 0.0 && value.is_finite() {
                Ok(())
            } else {
                Err(DomainError::Validation {
                    reason: format!("{} must not be negative, got {}", name, value),
                })
            }
        }

        positive("track_spacing_meters", self.track_spacing_meters)?;
        positive("ground_speed_kmh", self.ground_speed_kmh)?;
        positive("battery_endurance_minutes", self.battery_endurance_minutes)?;
        positive("tank_capacity_liters", self.tank_capacity_liters)?;
        positive("area_hectares", self.area_hectares)?;
        positive("application_rate_l_per_ha", self.application_rate_l_per_ha)?;
        non_negative("resupply_duration_minutes", self.resupply_duration_minutes)?;
        non_negative("turn_duration_seconds", self.turn_duration_seconds)?;
        non_negative("wind.speed_kmh", self.wind.speed_kmh)?;

        if self.drone_count < 1 {
            return Err(DomainError::Validation {
                reason: "drone_count must be at least 1".to_string(),
            });
        }
        if !(0.0..=360.0).contains(&self.wind.direction_degrees) {
            return Err(DomainError::Validation {
                reason: format!(
                    "wind.direction_degrees must be within 0..=360, got {}",
                    self.wind.direction_degrees
                ),
            });
        }
        if let FieldExtent::Rectangle {
            width_east_west_meters,
            height_north_south_meters,
        } = self.field_extent
        {
            positive("width_east_west_meters", width_east_west_meters)?;
            positive("height_north_south_meters", height_north_south_meters)?;
        }
        Ok(())
    }

    /// Geo anchor of the local frame for rectangular extents: the explicit
    /// center point when given, else the resupply site.
    pub fn frame_anchor(&self) -> GeoPoint {
        self.center_point.unwrap_or(self.resupply_site)
    }

    pub fn ground_speed_meters_per_minute(&self) -> f64 {
        self.ground_speed_kmh * 1000.0 / 60.0
    }

    pub fn turn_duration_minutes(&self) -> f64 {
        self.turn_duration_seconds / 60.0
    }
}

/// One straight coverage sweep line across the field, in local meters.
/// Ordering is the scan order the drones will fly, not the spatial order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoveragePass {
    pub index: usize,
    pub start: LocalPoint,
    pub end: LocalPoint,
    pub length_meters: f64,
}
