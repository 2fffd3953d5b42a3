use super::geometry::NormalizedField;
use crate::domains::flight_planning::aggregate::plan::{ScanStrategy, SweepOrientation};
use crate::domains::flight_planning::aggregate::types::{CoveragePass, LocalPoint, Wind};

/// Stage-2 output: the ordered sweep plus the decisions that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct SweepLayout {
    pub passes: Vec<CoveragePass>,
    pub orientation: SweepOrientation,
    pub strategy: ScanStrategy,
}

/// Generate the ordered coverage passes for the field.
///
/// The orientation choice is a deterministic decision table, not a search:
/// above the drift threshold passes run parallel to the wind axis, otherwise
/// along the longer bounding-box axis. Above the threshold the serpentine
/// additionally starts from the upwind edge.
pub fn generate_passes(
    field: &NormalizedField,
    track_spacing: f64,
    wind: &Wind,
    drift_threshold_kmh: f64,
) -> SweepLayout {
    let windy = wind.speed_kmh > drift_threshold_kmh;

    let orientation = if windy {
        wind_axis(wind)
    } else if field.width_meters() >= field.height_meters() {
        SweepOrientation::EastWest
    } else {
        SweepOrientation::NorthSouth
    };
    let strategy = if windy {
        ScanStrategy::UpwindSerpentine
    } else {
        ScanStrategy::Serpentine
    };

    let bounds = &field.bounds;
    let (perpendicular_extent, perpendicular_min) = match orientation {
        SweepOrientation::EastWest => (bounds.height(), bounds.min_y),
        SweepOrientation::NorthSouth => (bounds.width(), bounds.min_x),
    };

    let count = (perpendicular_extent / track_spacing).ceil().max(1.0) as usize;

    // Offsets start at half a spacing from one edge so the sweep is centered
    // on the extent.
    let offsets: Vec<f64> = (0..count)
        .map(|i| perpendicular_min + track_spacing / 2.0 + i as f64 * track_spacing)
        .collect();

    let upwind_start = windy && starts_from_max_edge(wind, orientation);

    let scan_order: Vec<f64> = if upwind_start {
        offsets.into_iter().rev().collect()
    } else {
        offsets
    };

    let mut passes = Vec::with_capacity(count);
    for offset in scan_order {
        let (line_start, line_end) = match orientation {
            SweepOrientation::EastWest => (
                LocalPoint { x: bounds.min_x, y: offset },
                LocalPoint { x: bounds.max_x, y: offset },
            ),
            SweepOrientation::NorthSouth => (
                LocalPoint { x: offset, y: bounds.min_y },
                LocalPoint { x: offset, y: bounds.max_y },
            ),
        };

        let clipped = match &field.local_boundary {
            Some(boundary) => match clip_line_to_polygon(line_start, line_end, boundary) {
                Some(span) => span,
                // An irregular boundary can leave a sweep line dry; drop it.
                None => continue,
            },
            None => (line_start, line_end),
        };

        let index = passes.len();
        // Boustrophedon: every other emitted pass flies reversed so each
        // turn is a short U-turn.
        let (start, end) = if index % 2 == 0 {
            clipped
        } else {
            (clipped.1, clipped.0)
        };
        passes.push(CoveragePass {
            index,
            start,
            end,
            length_meters: start.distance_to(&end),
        });
    }

    SweepLayout {
        passes,
        orientation,
        strategy,
    }
}

/// Axis closest to the wind vector. Meteorological direction: the degree the
/// wind blows from, so the airflow axis is the same either way. Exact 45
/// degree ties resolve east-west.
fn wind_axis(wind: &Wind) -> SweepOrientation {
    let rad = wind.direction_degrees.to_radians();
    if rad.sin().abs() >= rad.cos().abs() {
        SweepOrientation::EastWest
    } else {
        SweepOrientation::NorthSouth
    }
}

/// Whether the upwind edge of the sweep is the maximum edge of the
/// perpendicular axis.
fn starts_from_max_edge(wind: &Wind, orientation: SweepOrientation) -> bool {
    let rad = wind.direction_degrees.to_radians();
    // Unit vector pointing toward where the wind comes from.
    let from = match orientation {
        SweepOrientation::EastWest => rad.cos(),  // north component
        SweepOrientation::NorthSouth => rad.sin(), // east component
    };
    from > 0.0
}

/// Clip a sweep line to a polygon boundary. Crossings are collected
/// edge-by-edge; the pass covers the span from the first to the last
/// crossing (passes stay single segments). Returns None when the line
/// misses the polygon.
pub fn clip_line_to_polygon(
    a: LocalPoint,
    b: LocalPoint,
    polygon: &[LocalPoint],
) -> Option<(LocalPoint, LocalPoint)> {
    const PARALLEL_EPS: f64 = 1e-12;
    const SPAN_EPS: f64 = 1e-9;

    let dx = b.x - a.x;
    let dy = b.y - a.y;

    let mut crossings: Vec<f64> = Vec::new();
    for i in 0..polygon.len() {
        let p = &polygon[i];
        let q = &polygon[(i + 1) % polygon.len()];
        let ex = q.x - p.x;
        let ey = q.y - p.y;

        let denom = dx * ey - dy * ex;
        if denom.abs() < PARALLEL_EPS {
            continue;
        }
        let t = ((p.x - a.x) * ey - (p.y - a.y) * ex) / denom;
        let u = ((p.x - a.x) * dy - (p.y - a.y) * dx) / denom;
        if (0.0..=1.0).contains(&u) && (0.0..=1.0).contains(&t) {
            crossings.push(t);
        }
    }

    if crossings.len() < 2 {
        return None;
    }
    crossings.sort_by(|l, r| l.total_cmp(r));
    let t0 = crossings[0];
    let t1 = crossings[crossings.len() - 1];
    if t1 - t0 < SPAN_EPS {
        return None;
    }

    let at = |t: f64| LocalPoint {
        x: a.x + t * dx,
        y: a.y + t * dy,
    };
    Some((at(t0), at(t1)))
}
